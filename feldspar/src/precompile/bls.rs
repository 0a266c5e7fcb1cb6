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

//! EIP-2537: BLS12-381 operations with 64-byte-padded field elements.

use crate::arith::BigInt;
use crate::curves::bls12_381::{
	hash, Engine, Fq, Fq2, FqParams, G1Affine, G1Config, G2Affine, G2Config, G2Prepared,
};
use crate::ec::{msm, Affine, Projective, SWCurveConfig};
use crate::error::{CodecError, Error};
use crate::fields::FpParams;

pub const PADDED_FP: usize = 64;
pub const G1_ENCODED: usize = 2 * PADDED_FP;
pub const G2_ENCODED: usize = 4 * PADDED_FP;
pub const SCALAR_ENCODED: usize = 32;

fn read_fp(bytes: &[u8]) -> Result<Fq, Error> {
	debug_assert_eq!(bytes.len(), PADDED_FP);
	if bytes[..16].iter().any(|b| *b != 0) {
		return Err(Error::Codec(CodecError::Flags));
	}
	let v = BigInt::<6>::from_bytes_be(&bytes[16..])?;
	if v.ct_lt(&<FqParams as FpParams<6>>::MODULUS) == 0 {
		return Err(Error::Codec(CodecError::NonCanonicalFieldElement));
	}
	Ok(Fq::from_bigint(v))
}

fn write_fp(v: &Fq, out: &mut [u8]) {
	v.into_bigint().write_bytes_be(&mut out[16..]);
}

/// Reads an encoded G1 point; (0, 0) is the point at infinity. On-curve is
/// always checked, the subgroup only when `check_subgroup` is set.
fn read_g1(bytes: &[u8], check_subgroup: bool) -> Result<G1Affine, Error> {
	if bytes.len() != G1_ENCODED {
		return Err(Error::Codec(CodecError::Length {
			expected: G1_ENCODED,
			got: bytes.len(),
		}));
	}
	let x = read_fp(&bytes[..PADDED_FP])?;
	let y = read_fp(&bytes[PADDED_FP..])?;
	if x.is_zero() && y.is_zero() {
		return Ok(Affine::identity());
	}
	let p = Affine::new_unchecked(x, y);
	if !p.is_on_curve() {
		return Err(Error::Codec(CodecError::NotOnCurve));
	}
	if check_subgroup && !bool::from(p.is_in_subgroup()) {
		return Err(Error::Subgroup);
	}
	Ok(p)
}

fn write_g1(p: &G1Affine) -> [u8; G1_ENCODED] {
	let mut out = [0u8; G1_ENCODED];
	if !p.infinity {
		write_fp(&p.x, &mut out[..PADDED_FP]);
		write_fp(&p.y, &mut out[PADDED_FP..]);
	}
	out
}

fn read_g2(bytes: &[u8], check_subgroup: bool) -> Result<G2Affine, Error> {
	if bytes.len() != G2_ENCODED {
		return Err(Error::Codec(CodecError::Length {
			expected: G2_ENCODED,
			got: bytes.len(),
		}));
	}
	let x0 = read_fp(&bytes[..PADDED_FP])?;
	let x1 = read_fp(&bytes[PADDED_FP..2 * PADDED_FP])?;
	let y0 = read_fp(&bytes[2 * PADDED_FP..3 * PADDED_FP])?;
	let y1 = read_fp(&bytes[3 * PADDED_FP..])?;
	let x = Fq2::new(x0, x1);
	let y = Fq2::new(y0, y1);
	if x.is_zero() && y.is_zero() {
		return Ok(Affine::identity());
	}
	let p = Affine::new_unchecked(x, y);
	if !p.is_on_curve() {
		return Err(Error::Codec(CodecError::NotOnCurve));
	}
	if check_subgroup && !bool::from(p.is_in_subgroup()) {
		return Err(Error::Subgroup);
	}
	Ok(p)
}

fn write_g2(p: &G2Affine) -> [u8; G2_ENCODED] {
	let mut out = [0u8; G2_ENCODED];
	if !p.infinity {
		write_fp(&p.x.c0, &mut out[..PADDED_FP]);
		write_fp(&p.x.c1, &mut out[PADDED_FP..2 * PADDED_FP]);
		write_fp(&p.y.c0, &mut out[2 * PADDED_FP..3 * PADDED_FP]);
		write_fp(&p.y.c1, &mut out[3 * PADDED_FP..]);
	}
	out
}

fn read_scalar(bytes: &[u8]) -> Result<BigInt<4>, Error> {
	// EIP-2537 scalars are unreduced 32-byte integers
	BigInt::<4>::from_bytes_be(bytes)
}

/// G1ADD.
pub fn g1_add(input: &[u8]) -> Result<[u8; G1_ENCODED], Error> {
	if input.len() != 2 * G1_ENCODED {
		return Err(Error::Codec(CodecError::Length {
			expected: 2 * G1_ENCODED,
			got: input.len(),
		}));
	}
	let a = read_g1(&input[..G1_ENCODED], false)?;
	let b = read_g1(&input[G1_ENCODED..], false)?;
	let sum = Projective::from(a).mixed_add_vartime(&b);
	Ok(write_g1(&sum.to_affine_vartime()))
}

/// G1MSM (subgroup checks required by the EIP).
pub fn g1_msm(input: &[u8]) -> Result<[u8; G1_ENCODED], Error> {
	const PAIR: usize = G1_ENCODED + SCALAR_ENCODED;
	if input.is_empty() || input.len() % PAIR != 0 {
		return Err(Error::Codec(CodecError::Length { expected: PAIR, got: input.len() }));
	}
	let mut points = Vec::with_capacity(input.len() / PAIR);
	let mut scalars = Vec::with_capacity(points.capacity());
	for chunk in input.chunks(PAIR) {
		points.push(read_g1(&chunk[..G1_ENCODED], true)?);
		scalars.push(reduce_scalar(read_scalar(&chunk[G1_ENCODED..])?));
	}
	let r = msm::msm_vartime(&points, &scalars)?;
	Ok(write_g1(&r.to_affine_vartime()))
}

/// G2ADD.
pub fn g2_add(input: &[u8]) -> Result<[u8; G2_ENCODED], Error> {
	if input.len() != 2 * G2_ENCODED {
		return Err(Error::Codec(CodecError::Length {
			expected: 2 * G2_ENCODED,
			got: input.len(),
		}));
	}
	let a = read_g2(&input[..G2_ENCODED], false)?;
	let b = read_g2(&input[G2_ENCODED..], false)?;
	let sum = Projective::from(a).mixed_add_vartime(&b);
	Ok(write_g2(&sum.to_affine_vartime()))
}

/// G2MSM.
pub fn g2_msm(input: &[u8]) -> Result<[u8; G2_ENCODED], Error> {
	const PAIR: usize = G2_ENCODED + SCALAR_ENCODED;
	if input.is_empty() || input.len() % PAIR != 0 {
		return Err(Error::Codec(CodecError::Length { expected: PAIR, got: input.len() }));
	}
	let mut points = Vec::with_capacity(input.len() / PAIR);
	let mut scalars = Vec::with_capacity(points.capacity());
	for chunk in input.chunks(PAIR) {
		points.push(read_g2(&chunk[..G2_ENCODED], true)?);
		scalars.push(reduce_scalar(read_scalar(&chunk[G2_ENCODED..])?));
	}
	let r = msm::msm_vartime(&points, &scalars)?;
	Ok(write_g2(&r.to_affine_vartime()))
}

/// PAIRING_CHECK: 32-byte big-endian 1 when the product of pairings is
/// the identity.
pub fn pairing_check(input: &[u8]) -> Result<[u8; 32], Error> {
	const PAIR: usize = G1_ENCODED + G2_ENCODED;
	if input.is_empty() || input.len() % PAIR != 0 {
		return Err(Error::Codec(CodecError::Length { expected: PAIR, got: input.len() }));
	}
	let mut pairs = Vec::with_capacity(input.len() / PAIR);
	for chunk in input.chunks(PAIR) {
		let p = read_g1(&chunk[..G1_ENCODED], true)?;
		let q = read_g2(&chunk[G1_ENCODED..], true)?;
		pairs.push((p, G2Prepared::from(q)));
	}
	let ok = Engine::multi_pairing_is_one(&pairs);
	let mut out = [0u8; 32];
	out[31] = ok as u8;
	Ok(out)
}

/// MAP_FP_TO_G1: SSWU plus cofactor clearing.
pub fn map_fp_to_g1(input: &[u8]) -> Result<[u8; G1_ENCODED], Error> {
	if input.len() != PADDED_FP {
		return Err(Error::Codec(CodecError::Length {
			expected: PADDED_FP,
			got: input.len(),
		}));
	}
	let u = read_fp(input)?;
	let p = hash::map_to_curve_g1(&u);
	let cleared = G1Config::clear_cofactor(&p);
	Ok(write_g1(&cleared.to_affine_vartime()))
}

/// MAP_FP2_TO_G2.
pub fn map_fp2_to_g2(input: &[u8]) -> Result<[u8; G2_ENCODED], Error> {
	if input.len() != 2 * PADDED_FP {
		return Err(Error::Codec(CodecError::Length {
			expected: 2 * PADDED_FP,
			got: input.len(),
		}));
	}
	let c0 = read_fp(&input[..PADDED_FP])?;
	let c1 = read_fp(&input[PADDED_FP..])?;
	let q = hash::map_to_curve_g2(&Fq2::new(c0, c1));
	let cleared = G2Config::clear_cofactor(&q);
	Ok(write_g2(&cleared.to_affine_vartime()))
}

/// Reduces an unreduced 256-bit scalar modulo r (the MSM consumes
/// canonical digits).
fn reduce_scalar(v: BigInt<4>) -> BigInt<4> {
	use crate::curves::bls12_381::Fr;
	let mut bytes = [0u8; 32];
	v.write_bytes_be(&mut bytes);
	Fr::from_be_bytes_mod_order(&bytes).into_bigint()
}
