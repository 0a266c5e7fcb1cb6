/*
 * Copyright 2025 by Feldspar Contributors
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

//! Hash-to-curve suites for BLS12-381.
//!
//! SSWU through the 11- and 3-isogenies is the default (it is what the
//! IETF BLS signature suites use); the SvdW maps are available for
//! callers that want them or for cross-checking.

mod consts;

use consts::*;

use crate::curves::bls12_381::{fields::{Fq, Fq2}, G1Affine, G1Config, G2Affine, G2Config};
use crate::ec::{Affine, Projective, SWCurveConfig};
use crate::hashing::{eval_poly, expand_message_xmd, sswu_map, svdw_map, SswuParams, SvdwParams};

/// Bytes of expanded output per base-field element (ceil((381 + 128)/8)).
const L: usize = 64;

/// `hash_to_field` for Fq: `count` elements.
pub fn hash_to_field_fq(msg: &[u8], dst: &[u8], count: usize) -> Vec<Fq> {
	let bytes = expand_message_xmd(msg, dst, count * L);
	bytes.chunks(L).map(Fq::from_be_bytes_mod_order).collect()
}

/// `hash_to_field` for Fq2: each element consumes two L-byte chunks.
pub fn hash_to_field_fq2(msg: &[u8], dst: &[u8], count: usize) -> Vec<Fq2> {
	let bytes = expand_message_xmd(msg, dst, count * 2 * L);
	bytes
		.chunks(2 * L)
		.map(|pair| {
			Fq2::new(
				Fq::from_be_bytes_mod_order(&pair[..L]),
				Fq::from_be_bytes_mod_order(&pair[L..]),
			)
		})
		.collect()
}

fn iso11(x: Fq, y: Fq) -> G1Affine {
	let num = eval_poly(&ISO11_XNUM, &x);
	let den = eval_poly(&ISO11_XDEN, &x);
	let ynum = eval_poly(&ISO11_YNUM, &x);
	let yden = eval_poly(&ISO11_YDEN, &x);
	// the isogeny denominators vanish only at the kernel, which the SSWU
	// image never hits
	let di = den
		.inverse_vartime()
		.expect("SSWU output avoids the isogeny kernel");
	let dyi = yden
		.inverse_vartime()
		.expect("SSWU output avoids the isogeny kernel");
	Affine::new_unchecked(num * di, y * ynum * dyi)
}

fn iso3(x: Fq2, y: Fq2) -> G2Affine {
	let num = eval_poly(&ISO3_XNUM, &x);
	let den = eval_poly(&ISO3_XDEN, &x);
	let ynum = eval_poly(&ISO3_YNUM, &x);
	let yden = eval_poly(&ISO3_YDEN, &x);
	let di = den
		.inverse_vartime()
		.expect("SSWU output avoids the isogeny kernel");
	let dyi = yden
		.inverse_vartime()
		.expect("SSWU output avoids the isogeny kernel");
	Affine::new_unchecked(num * di, y * ynum * dyi)
}

/// SSWU map to E1 (isogeny applied, cofactor not cleared).
pub fn map_to_curve_g1(u: &Fq) -> G1Affine {
	let params = SswuParams { a: SSWU_A1, b: SSWU_B1, z: SSWU_Z1 };
	let (x, y) = sswu_map(&params, u);
	iso11(x, y)
}

/// SSWU map to E2 (isogeny applied, cofactor not cleared).
pub fn map_to_curve_g2(u: &Fq2) -> G2Affine {
	let params = SswuParams { a: SSWU_A2, b: SSWU_B2, z: SSWU_Z2 };
	let (x, y) = sswu_map(&params, u);
	iso3(x, y)
}

/// SvdW map to E1 (direct, cofactor not cleared).
pub fn map_to_curve_g1_svdw(u: &Fq) -> G1Affine {
	let params = SvdwParams {
		z: SVDW_Z1,
		c1: SVDW_C1_1,
		c2: SVDW_C2_1,
		c3: SVDW_C3_1,
		c4: SVDW_C4_1,
		b: G1Config::B,
	};
	let (x, y) = svdw_map(&params, u);
	Affine::new_unchecked(x, y)
}

/// SvdW map to E2 (direct, cofactor not cleared).
pub fn map_to_curve_g2_svdw(u: &Fq2) -> G2Affine {
	let params = SvdwParams {
		z: SVDW_Z2,
		c1: SVDW_C1_2,
		c2: SVDW_C2_2,
		c3: SVDW_C3_2,
		c4: SVDW_C4_2,
		b: G2Config::B,
	};
	let (x, y) = svdw_map(&params, u);
	Affine::new_unchecked(x, y)
}

/// The hash_to_curve random-oracle construction for G1.
pub fn hash_to_g1(msg: &[u8], dst: &[u8]) -> G1Affine {
	let u = hash_to_field_fq(msg, dst, 2);
	let q0 = Projective::from(map_to_curve_g1(&u[0]));
	let q1 = map_to_curve_g1(&u[1]);
	let r = q0.mixed_add_vartime(&q1);
	G1Config::clear_cofactor(&r.to_affine_vartime()).to_affine_vartime()
}

/// The hash_to_curve random-oracle construction for G2.
pub fn hash_to_g2(msg: &[u8], dst: &[u8]) -> G2Affine {
	let u = hash_to_field_fq2(msg, dst, 2);
	let q0 = Projective::from(map_to_curve_g2(&u[0]));
	let q1 = map_to_curve_g2(&u[1]);
	let r = q0.mixed_add_vartime(&q1);
	G2Config::clear_cofactor(&r.to_affine_vartime()).to_affine_vartime()
}

/// `encode_to_curve`: the cheaper non-uniform variant.
pub fn encode_to_g1(msg: &[u8], dst: &[u8]) -> G1Affine {
	let u = hash_to_field_fq(msg, dst, 1);
	G1Config::clear_cofactor(&map_to_curve_g1(&u[0])).to_affine_vartime()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::ec::SWCurveConfig;

	#[test]
	fn maps_land_on_curve() {
		for i in 0..8u64 {
			let u = Fq::from_u64(i * 7 + 1);
			let p = map_to_curve_g1(&u);
			assert!(p.is_on_curve());
			let p = map_to_curve_g1_svdw(&u);
			assert!(p.is_on_curve());
			let u2 = Fq2::new(Fq::from_u64(i + 3), Fq::from_u64(2 * i + 5));
			let q = map_to_curve_g2(&u2);
			assert!(q.is_on_curve());
			let q = map_to_curve_g2_svdw(&u2);
			assert!(q.is_on_curve());
		}
	}

	#[test]
	fn hashed_points_are_in_subgroup() {
		let p = hash_to_g1(b"feldspar test", b"FELDSPAR-TEST-DST");
		assert!(p.is_on_curve());
		assert!(bool::from(p.is_in_subgroup()));
		let q = hash_to_g2(b"feldspar test", b"FELDSPAR-TEST-DST");
		assert!(q.is_on_curve());
		assert!(bool::from(q.is_in_subgroup()));
	}
}
