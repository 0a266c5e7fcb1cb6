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

//! Hashing to elliptic curves: `expand_message_xmd` and the simplified-SWU
//! and Shallue-van de Woestijne maps, generic over the base field.
//!
//! Inputs to these functions are public (messages and domain tags), so the
//! field inversions take the variable-time path.

use sha2::{Digest, Sha256};

use crate::fields::Field;

const SHA256_BLOCK: usize = 64;
const SHA256_OUT: usize = 32;

/// RFC 9380 expand_message_xmd with SHA-256.
///
/// Panics only on parameter-set bugs (`len_in_bytes` beyond 255 blocks),
/// which the fixed suites in this crate cannot reach.
pub fn expand_message_xmd(msg: &[u8], dst: &[u8], len_in_bytes: usize) -> Vec<u8> {
	let ell = len_in_bytes.div_ceil(SHA256_OUT);
	assert!(ell <= 255, "expand_message_xmd output too long");
	// oversized tags are themselves hashed down
	let dst_prime: Vec<u8> = if dst.len() > 255 {
		let mut h = Sha256::new();
		h.update(b"H2C-OVERSIZE-DST-");
		h.update(dst);
		let mut v = h.finalize().to_vec();
		v.push(32);
		v
	} else {
		let mut v = dst.to_vec();
		v.push(dst.len() as u8);
		v
	};

	let mut h = Sha256::new();
	h.update([0u8; SHA256_BLOCK]);
	h.update(msg);
	h.update((len_in_bytes as u16).to_be_bytes());
	h.update([0u8]);
	h.update(&dst_prime);
	let b0 = h.finalize();

	let mut out = Vec::with_capacity(ell * SHA256_OUT);
	let mut prev = {
		let mut h = Sha256::new();
		h.update(b0);
		h.update([1u8]);
		h.update(&dst_prime);
		h.finalize()
	};
	out.extend_from_slice(&prev);
	for i in 2..=ell {
		let mut xored = [0u8; SHA256_OUT];
		for (x, (a, b)) in xored.iter_mut().zip(b0.iter().zip(prev.iter())) {
			*x = a ^ b;
		}
		let mut h = Sha256::new();
		h.update(xored);
		h.update([i as u8]);
		h.update(&dst_prime);
		prev = h.finalize();
		out.extend_from_slice(&prev);
	}
	out.truncate(len_in_bytes);
	out
}

/// Simplified SWU parameters for a curve `y^2 = x^3 + a x + b` with
/// `a b != 0` (the isogenous curve when the target has a = 0).
pub struct SswuParams<F: Field> {
	pub a: F,
	pub b: F,
	pub z: F,
}

/// The simplified SWU map; returns a point on the (isogenous) curve.
pub fn sswu_map<F: Field>(params: &SswuParams<F>, u: &F) -> (F, F) {
	let SswuParams { a, b, z } = params;
	let g = |x: &F| (x.square() + *a) * *x + *b;
	let tv1 = *z * u.square();
	let tv2 = tv1.square() + tv1;
	let x1 = if tv2.is_zero() {
		// exceptional case: x1 = b / (z a)
		*b * (*z * *a)
			.inverse_vartime()
			.expect("z and a are nonzero by construction")
	} else {
		let inv = tv2.inverse_vartime().expect("tv2 nonzero in this branch");
		-*b * a
			.inverse_vartime()
			.expect("a is nonzero by construction")
			* (F::ONE + inv)
	};
	let gx1 = g(&x1);
	let y1: Option<F> = gx1.sqrt().into();
	let (x, y) = match y1 {
		Some(y) => (x1, y),
		None => {
			let x2 = tv1 * x1;
			let gx2 = g(&x2);
			let y2: Option<F> = gx2.sqrt().into();
			let y2 = y2.expect("one of gx1, gx2 is always square");
			(x2, y2)
		}
	};
	if u.sgn0() != y.sgn0() {
		(x, -y)
	} else {
		(x, y)
	}
}

/// Shallue-van de Woestijne parameters for `y^2 = x^3 + b` (a = 0 form).
pub struct SvdwParams<F: Field> {
	pub z: F,
	pub c1: F,
	pub c2: F,
	pub c3: F,
	pub c4: F,
	pub b: F,
}

/// The SvdW map; total on any field input.
pub fn svdw_map<F: Field>(params: &SvdwParams<F>, u: &F) -> (F, F) {
	let SvdwParams { z, c1, c2, c3, c4, b } = params;
	let g = |x: &F| x.square() * *x + *b;
	let tv1 = u.square() * *c1;
	let tv2 = F::ONE + tv1;
	let tv1 = F::ONE - tv1;
	let tv3 = tv1 * tv2;
	let tv3 = match tv3.inverse_vartime() {
		Some(i) => i,
		None => F::ZERO, // inv0
	};
	let tv4 = *u * tv1 * tv3 * *c3;
	let x1 = *c2 - tv4;
	let x2 = *c2 + tv4;
	let x3 = (tv2.square() * tv3).square() * *c4 + *z;
	let (x, y) = if let Some(y) = Into::<Option<F>>::into(g(&x1).sqrt()) {
		(x1, y)
	} else if let Some(y) = Into::<Option<F>>::into(g(&x2).sqrt()) {
		(x2, y)
	} else {
		let y: Option<F> = g(&x3).sqrt().into();
		(x3, y.expect("the SvdW third candidate is always on the curve"))
	};
	if u.sgn0() != y.sgn0() {
		(x, -y)
	} else {
		(x, y)
	}
}

/// Horner evaluation for the isogeny rational maps.
pub fn eval_poly<F: Field>(coeffs: &[F], x: &F) -> F {
	let mut acc = F::ZERO;
	for c in coeffs.iter().rev() {
		acc = acc * *x + *c;
	}
	acc
}

#[cfg(test)]
mod tests {
	use super::*;

	// RFC 9380 K.1 (SHA-256, DST "QUUX-V01-CS02-with-expander-SHA256-128")
	#[test]
	fn expand_message_xmd_reference_vector() {
		let dst = b"QUUX-V01-CS02-with-expander-SHA256-128";
		let out = expand_message_xmd(b"", dst, 0x20);
		assert_eq!(
			hex::encode(out),
			"68a985b87eb6b46952128911f2a4412bbc302a9d759667f87f7a21d803f07235"
		);
		let out = expand_message_xmd(b"abc", dst, 0x20);
		assert_eq!(
			hex::encode(out),
			"d8ccab23b5985ccea865c6c97b6e5b8350e794e603b4b97902f53a8a0d605615"
		);
	}
}
