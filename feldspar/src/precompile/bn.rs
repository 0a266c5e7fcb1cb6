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

//! EIP-196/197: the original BN254 add / mul / pairing precompiles.
//!
//! Points are 64 bytes of big-endian coordinates; (0, 0) encodes the
//! point at infinity. G2 coordinates serialise with the imaginary part
//! first. Short inputs are implicitly zero-padded on the right, as the
//! EVM does.

use crate::arith::BigInt;
use crate::curves::bn254::{
	Engine, Fq, Fq2, FqParams, Fr, G1Affine, G2Affine, G2Prepared,
};
use crate::ec::{mul, Affine, Projective};
use crate::error::{CodecError, Error};
use crate::fields::FpParams;

const FP: usize = 32;
const G1_ENCODED: usize = 2 * FP;
const G2_ENCODED: usize = 4 * FP;

fn padded(input: &[u8], len: usize) -> Result<Vec<u8>, Error> {
	if input.len() > len {
		return Err(Error::Codec(CodecError::Length { expected: len, got: input.len() }));
	}
	let mut v = input.to_vec();
	v.resize(len, 0);
	Ok(v)
}

fn read_fq(bytes: &[u8]) -> Result<Fq, Error> {
	let v = BigInt::<4>::from_bytes_be(bytes)?;
	if v.ct_lt(&<FqParams as FpParams<4>>::MODULUS) == 0 {
		return Err(Error::Codec(CodecError::NonCanonicalFieldElement));
	}
	Ok(Fq::from_bigint(v))
}

fn read_g1(bytes: &[u8]) -> Result<G1Affine, Error> {
	let x = read_fq(&bytes[..FP])?;
	let y = read_fq(&bytes[FP..2 * FP])?;
	if x.is_zero() && y.is_zero() {
		return Ok(Affine::identity());
	}
	let p = Affine::new_unchecked(x, y);
	if !p.is_on_curve() {
		return Err(Error::Codec(CodecError::NotOnCurve));
	}
	Ok(p)
}

fn write_g1(p: &G1Affine) -> [u8; G1_ENCODED] {
	let mut out = [0u8; G1_ENCODED];
	if !p.infinity {
		p.x.into_bigint().write_bytes_be(&mut out[..FP]);
		p.y.into_bigint().write_bytes_be(&mut out[FP..]);
	}
	out
}

/// G2 points: (x_im, x_re, y_im, y_re), subgroup membership enforced.
fn read_g2(bytes: &[u8]) -> Result<G2Affine, Error> {
	let x1 = read_fq(&bytes[..FP])?;
	let x0 = read_fq(&bytes[FP..2 * FP])?;
	let y1 = read_fq(&bytes[2 * FP..3 * FP])?;
	let y0 = read_fq(&bytes[3 * FP..4 * FP])?;
	let x = Fq2::new(x0, x1);
	let y = Fq2::new(y0, y1);
	if x.is_zero() && y.is_zero() {
		return Ok(Affine::identity());
	}
	let q = Affine::new_unchecked(x, y);
	if !q.is_on_curve() {
		return Err(Error::Codec(CodecError::NotOnCurve));
	}
	if !bool::from(q.is_in_subgroup()) {
		return Err(Error::Subgroup);
	}
	Ok(q)
}

/// The ADD precompile at 0x06.
pub fn bn254_add(input: &[u8]) -> Result<[u8; G1_ENCODED], Error> {
	let input = padded(input, 2 * G1_ENCODED)?;
	let a = read_g1(&input[..G1_ENCODED])?;
	let b = read_g1(&input[G1_ENCODED..])?;
	let sum = Projective::from(a).mixed_add_vartime(&b);
	Ok(write_g1(&sum.to_affine_vartime()))
}

/// The MUL precompile at 0x07; the scalar is an unreduced 256-bit integer.
pub fn bn254_mul(input: &[u8]) -> Result<[u8; G1_ENCODED], Error> {
	let input = padded(input, G1_ENCODED + FP)?;
	let p = read_g1(&input[..G1_ENCODED])?;
	let raw = BigInt::<4>::from_bytes_be(&input[G1_ENCODED..])?;
	let mut bytes = [0u8; 32];
	raw.write_bytes_be(&mut bytes);
	let k = Fr::from_be_bytes_mod_order(&bytes).into_bigint();
	let r = mul::mul_vartime(&p, &k);
	Ok(write_g1(&r.to_affine_vartime()))
}

/// The PAIRING precompile at 0x08; input must be a whole number of
/// 192-byte pairs (empty input is a valid product: one).
pub fn bn254_pairing(input: &[u8]) -> Result<[u8; 32], Error> {
	const PAIR: usize = G1_ENCODED + G2_ENCODED;
	if input.len() % PAIR != 0 {
		return Err(Error::Codec(CodecError::Length { expected: PAIR, got: input.len() }));
	}
	let mut pairs = Vec::with_capacity(input.len() / PAIR);
	for chunk in input.chunks(PAIR) {
		let p = read_g1(&chunk[..G1_ENCODED])?;
		let q = read_g2(&chunk[G1_ENCODED..])?;
		pairs.push((p, G2Prepared::from(q)));
	}
	let ok = Engine::multi_pairing_is_one(&pairs);
	let mut out = [0u8; 32];
	out[31] = ok as u8;
	Ok(out)
}
