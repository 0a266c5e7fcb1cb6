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

//! Canonical wire formats for BLS12-381 points and scalars.
//!
//! The flag convention: bit 0x80 of byte 0 marks compression, 0x40 marks
//! the point at infinity (all remaining bits must then be zero), 0x20
//! carries the sign of y in compressed form. G2's x = (x0, x1) serialises
//! x1 first. Deserialisation rejects every non-canonical encoding and
//! never yields a partially-validated point.

use crate::arith::BigInt;
use crate::curves::bls12_381::fields::{Fq, FqParams, Fr, FrParams};
use crate::curves::bls12_381::{G1Affine, G2Affine};
use crate::ec::{Affine, SWCurveConfig};
use crate::error::{CodecError, Error};
use crate::fields::FpParams;

pub const FQ_BYTES: usize = 48;
pub const G1_COMPRESSED: usize = 48;
pub const G1_UNCOMPRESSED: usize = 96;
pub const G2_COMPRESSED: usize = 96;
pub const G2_UNCOMPRESSED: usize = 192;
pub const SCALAR_BYTES: usize = 32;

const FLAG_COMPRESSED: u8 = 0x80;
const FLAG_INFINITY: u8 = 0x40;
const FLAG_SORT: u8 = 0x20;

fn fq_to_bytes(v: &Fq, out: &mut [u8]) {
	v.into_bigint().write_bytes_be(out);
}

fn fq_from_bytes(bytes: &[u8]) -> Result<Fq, Error> {
	let v = BigInt::<6>::from_bytes_be(bytes)?;
	if v.ct_lt(&<FqParams as FpParams<6>>::MODULUS) == 0 {
		return Err(Error::Codec(CodecError::NonCanonicalFieldElement));
	}
	Ok(Fq::from_bigint(v))
}

// ---- scalars ----

/// 32-byte big-endian scalar, rejected unless < r.
pub fn fr_from_bytes(bytes: &[u8]) -> Result<Fr, Error> {
	if bytes.len() != SCALAR_BYTES {
		return Err(Error::Codec(CodecError::Length {
			expected: SCALAR_BYTES,
			got: bytes.len(),
		}));
	}
	let v = BigInt::<4>::from_bytes_be(bytes)?;
	if v.ct_lt(&<FrParams as FpParams<4>>::MODULUS) == 0 {
		return Err(Error::Codec(CodecError::NonCanonicalScalar));
	}
	Ok(Fr::from_bigint(v))
}

pub fn fr_to_bytes(v: &Fr) -> [u8; SCALAR_BYTES] {
	let mut out = [0u8; SCALAR_BYTES];
	v.into_bigint().write_bytes_be(&mut out);
	out
}

// ---- G1 ----

pub fn g1_to_compressed(p: &G1Affine) -> [u8; G1_COMPRESSED] {
	let mut out = [0u8; G1_COMPRESSED];
	if p.infinity {
		out[0] = FLAG_COMPRESSED | FLAG_INFINITY;
		return out;
	}
	fq_to_bytes(&p.x, &mut out);
	out[0] |= FLAG_COMPRESSED;
	if p.y.is_lexicographically_largest() {
		out[0] |= FLAG_SORT;
	}
	out
}

pub fn g1_to_uncompressed(p: &G1Affine) -> [u8; G1_UNCOMPRESSED] {
	let mut out = [0u8; G1_UNCOMPRESSED];
	if p.infinity {
		out[0] = FLAG_INFINITY;
		return out;
	}
	fq_to_bytes(&p.x, &mut out[..FQ_BYTES]);
	fq_to_bytes(&p.y, &mut out[FQ_BYTES..]);
	out
}

/// Full deserialisation: flags, canonical field element, curve membership,
/// subgroup membership.
pub fn g1_from_compressed(bytes: &[u8]) -> Result<G1Affine, Error> {
	let p = g1_from_compressed_unchecked(bytes)?;
	if !bool::from(p.is_in_subgroup()) {
		return Err(Error::Subgroup);
	}
	Ok(p)
}

/// Everything except the subgroup check.
pub fn g1_from_compressed_unchecked(bytes: &[u8]) -> Result<G1Affine, Error> {
	if bytes.len() != G1_COMPRESSED {
		return Err(Error::Codec(CodecError::Length {
			expected: G1_COMPRESSED,
			got: bytes.len(),
		}));
	}
	let flags = bytes[0] & 0xe0;
	if flags & FLAG_COMPRESSED == 0 {
		return Err(Error::Codec(CodecError::Flags));
	}
	let mut body = [0u8; FQ_BYTES];
	body.copy_from_slice(bytes);
	body[0] &= 0x1f;
	if flags & FLAG_INFINITY != 0 {
		if flags & FLAG_SORT != 0 || body.iter().any(|b| *b != 0) {
			return Err(Error::Codec(CodecError::Flags));
		}
		return Ok(Affine::identity());
	}
	let x = fq_from_bytes(&body)?;
	let y2 = x.square() * x + super::G1Config::B;
	let y: Option<Fq> = y2.sqrt().into();
	let mut y = y.ok_or(Error::Codec(CodecError::NotASquare))?;
	let largest = y.is_lexicographically_largest();
	if largest != (flags & FLAG_SORT != 0) {
		y = -y;
	}
	Ok(Affine::new_unchecked(x, y))
}

pub fn g1_from_uncompressed(bytes: &[u8]) -> Result<G1Affine, Error> {
	let p = g1_from_uncompressed_unchecked(bytes)?;
	if !bool::from(p.is_in_subgroup()) {
		return Err(Error::Subgroup);
	}
	Ok(p)
}

pub fn g1_from_uncompressed_unchecked(bytes: &[u8]) -> Result<G1Affine, Error> {
	if bytes.len() != G1_UNCOMPRESSED {
		return Err(Error::Codec(CodecError::Length {
			expected: G1_UNCOMPRESSED,
			got: bytes.len(),
		}));
	}
	let flags = bytes[0] & 0xe0;
	if flags & FLAG_COMPRESSED != 0 || flags & FLAG_SORT != 0 {
		return Err(Error::Codec(CodecError::Flags));
	}
	let mut body = [0u8; G1_UNCOMPRESSED];
	body.copy_from_slice(bytes);
	body[0] &= 0x1f;
	if flags & FLAG_INFINITY != 0 {
		if body.iter().any(|b| *b != 0) {
			return Err(Error::Codec(CodecError::Flags));
		}
		return Ok(Affine::identity());
	}
	let x = fq_from_bytes(&body[..FQ_BYTES])?;
	let y = fq_from_bytes(&body[FQ_BYTES..])?;
	let p = Affine::new_unchecked(x, y);
	if !p.is_on_curve() {
		return Err(Error::Codec(CodecError::NotOnCurve));
	}
	Ok(p)
}

// ---- G2 ----

pub fn g2_to_compressed(p: &G2Affine) -> [u8; G2_COMPRESSED] {
	let mut out = [0u8; G2_COMPRESSED];
	if p.infinity {
		out[0] = FLAG_COMPRESSED | FLAG_INFINITY;
		return out;
	}
	// x1 occupies the first 48 bytes, x0 the second
	fq_to_bytes(&p.x.c1, &mut out[..FQ_BYTES]);
	fq_to_bytes(&p.x.c0, &mut out[FQ_BYTES..]);
	out[0] |= FLAG_COMPRESSED;
	if p.y.is_lexicographically_largest() {
		out[0] |= FLAG_SORT;
	}
	out
}

pub fn g2_to_uncompressed(p: &G2Affine) -> [u8; G2_UNCOMPRESSED] {
	let mut out = [0u8; G2_UNCOMPRESSED];
	if p.infinity {
		out[0] = FLAG_INFINITY;
		return out;
	}
	fq_to_bytes(&p.x.c1, &mut out[..48]);
	fq_to_bytes(&p.x.c0, &mut out[48..96]);
	fq_to_bytes(&p.y.c1, &mut out[96..144]);
	fq_to_bytes(&p.y.c0, &mut out[144..]);
	out
}

pub fn g2_from_compressed(bytes: &[u8]) -> Result<G2Affine, Error> {
	let p = g2_from_compressed_unchecked(bytes)?;
	if !bool::from(p.is_in_subgroup()) {
		return Err(Error::Subgroup);
	}
	Ok(p)
}

pub fn g2_from_compressed_unchecked(bytes: &[u8]) -> Result<G2Affine, Error> {
	if bytes.len() != G2_COMPRESSED {
		return Err(Error::Codec(CodecError::Length {
			expected: G2_COMPRESSED,
			got: bytes.len(),
		}));
	}
	let flags = bytes[0] & 0xe0;
	if flags & FLAG_COMPRESSED == 0 {
		return Err(Error::Codec(CodecError::Flags));
	}
	let mut body = [0u8; G2_COMPRESSED];
	body.copy_from_slice(bytes);
	body[0] &= 0x1f;
	if flags & FLAG_INFINITY != 0 {
		if flags & FLAG_SORT != 0 || body.iter().any(|b| *b != 0) {
			return Err(Error::Codec(CodecError::Flags));
		}
		return Ok(Affine::identity());
	}
	let x1 = fq_from_bytes(&body[..FQ_BYTES])?;
	let x0 = fq_from_bytes(&body[FQ_BYTES..])?;
	let x = crate::curves::bls12_381::Fq2::new(x0, x1);
	let y2 = x.square() * x + super::G2Config::B;
	let y: Option<crate::curves::bls12_381::Fq2> = y2.sqrt().into();
	let mut y = y.ok_or(Error::Codec(CodecError::NotASquare))?;
	if y.is_lexicographically_largest() != (flags & FLAG_SORT != 0) {
		y = -y;
	}
	Ok(Affine::new_unchecked(x, y))
}

pub fn g2_from_uncompressed(bytes: &[u8]) -> Result<G2Affine, Error> {
	let p = g2_from_uncompressed_unchecked(bytes)?;
	if !bool::from(p.is_in_subgroup()) {
		return Err(Error::Subgroup);
	}
	Ok(p)
}

pub fn g2_from_uncompressed_unchecked(bytes: &[u8]) -> Result<G2Affine, Error> {
	if bytes.len() != G2_UNCOMPRESSED {
		return Err(Error::Codec(CodecError::Length {
			expected: G2_UNCOMPRESSED,
			got: bytes.len(),
		}));
	}
	let flags = bytes[0] & 0xe0;
	if flags & FLAG_COMPRESSED != 0 || flags & FLAG_SORT != 0 {
		return Err(Error::Codec(CodecError::Flags));
	}
	let mut body = [0u8; G2_UNCOMPRESSED];
	body.copy_from_slice(bytes);
	body[0] &= 0x1f;
	if flags & FLAG_INFINITY != 0 {
		if body.iter().any(|b| *b != 0) {
			return Err(Error::Codec(CodecError::Flags));
		}
		return Ok(Affine::identity());
	}
	let x1 = fq_from_bytes(&body[..48])?;
	let x0 = fq_from_bytes(&body[48..96])?;
	let y1 = fq_from_bytes(&body[96..144])?;
	let y0 = fq_from_bytes(&body[144..])?;
	let p = Affine::new_unchecked(
		crate::curves::bls12_381::Fq2::new(x0, x1),
		crate::curves::bls12_381::Fq2::new(y0, y1),
	);
	if !p.is_on_curve() {
		return Err(Error::Codec(CodecError::NotOnCurve));
	}
	Ok(p)
}
