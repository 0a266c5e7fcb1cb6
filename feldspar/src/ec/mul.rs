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

//! Scalar multiplication.
//!
//! The constant-time path is a fixed 4-bit window ladder over the GLV
//! half-scalars with linear-pass masked table lookups; the variable-time
//! path recodes the halves in wNAF. Curves without endomorphism data fall
//! back to the same ladders over the full scalar.

use subtle::{Choice, ConditionallySelectable};

use crate::arith::limb::{mac_with_carry, sbb};
use crate::arith::BigInt;
use crate::ec::batch::batch_normalize;
use crate::ec::{Affine, GlvParams, Jacobian, Projective, SWCurveConfig};
use crate::fields::Field;

/// Window width of the constant-time ladder.
const CT_WINDOW: usize = 4;
/// Ladder width per GLV half-scalar, covering the Babai rounding slack.
const HALF_BITS: usize = 132;

/// Low 256 bits of a 256 x 256 product.
fn mul_lo(a: &BigInt<4>, b: &BigInt<4>) -> BigInt<4> {
	let mut r = [0u64; 4];
	for i in 0..4 {
		let mut carry = 0u64;
		for j in 0..(4 - i) {
			let (lo, hi) = mac_with_carry(r[i + j], a.0[i], b.0[j], carry);
			r[i + j] = lo;
			carry = hi;
		}
	}
	BigInt(r)
}

/// Limbs 5..8 of a 256 x 256 product: `(a * b) >> 320`.
fn mul_shift_320(a: &BigInt<4>, b: &BigInt<4>) -> BigInt<4> {
	let mut r = [0u64; 8];
	for i in 0..4 {
		let mut carry = 0u64;
		for j in 0..4 {
			let (lo, hi) = mac_with_carry(r[i + j], a.0[i], b.0[j], carry);
			r[i + j] = lo;
			carry = hi;
		}
		r[i + 4] = carry;
	}
	BigInt([r[5], r[6], r[7], 0])
}

fn wrapping_sub(a: &BigInt<4>, b: &BigInt<4>) -> BigInt<4> {
	let mut r = *a;
	r.sub_with_borrow(b);
	r
}

fn wrapping_add(a: &BigInt<4>, b: &BigInt<4>) -> BigInt<4> {
	let mut r = *a;
	r.add_with_carry(b);
	r
}

/// Interprets a wrapped 256-bit value as sign magnitude; inputs are known
/// to be small (|v| < 2^131). Branch-free: the sign of a half-scalar is
/// derived from the secret.
fn to_sign_magnitude(v: BigInt<4>) -> (BigInt<4>, bool) {
	let flag = v.0[3] >> 63; // 1 when negative
	let neg = to_twos_complement(&v);
	let mut m = BigInt::<4>::ZERO;
	for i in 0..4 {
		m.0[i] = crate::arith::limb::cmov(v.0[i], neg.0[i], flag);
	}
	(m, flag == 1)
}

/// Babai-rounded GLV split: returns `(k1, neg1), (k2, neg2)` with
/// `k = sign1 k1 + lambda sign2 k2 (mod r)` and both magnitudes < 2^131.
pub fn decompose_glv<F: Field>(glv: &GlvParams<F>, k: &BigInt<4>) -> ((BigInt<4>, bool), (BigInt<4>, bool)) {
	// c1 = round(k b2 / r), c2 = round(-k b1 / r) via reciprocal multiply
	let c1_mag = mul_shift_320(k, &glv.g1);
	let c2_mag = mul_shift_320(k, &glv.g2);
	let c1_neg = glv.b2_neg;
	let c2_neg = !glv.b1_neg;

	// k1 = k - c1 a1 - c2 a2 ; k2 = -c1 b1 - c2 b2 (wrapping 2^256 domain)
	let signed = |m: &BigInt<4>, neg: bool| -> BigInt<4> {
		if neg {
			to_twos_complement(m)
		} else {
			*m
		}
	};
	let c1 = signed(&c1_mag, c1_neg);
	let c2 = signed(&c2_mag, c2_neg);
	let sa1 = signed(&glv.a1, glv.a1_neg);
	let sb1 = signed(&glv.b1, glv.b1_neg);
	let sa2 = signed(&glv.a2, glv.a2_neg);
	let sb2 = signed(&glv.b2, glv.b2_neg);

	let t1 = mul_lo(&c1, &sa1);
	let t2 = mul_lo(&c2, &sa2);
	let k1 = wrapping_sub(&wrapping_sub(k, &t1), &t2);
	let u1 = mul_lo(&c1, &sb1);
	let u2 = mul_lo(&c2, &sb2);
	let k2 = to_twos_complement(&wrapping_add(&u1, &u2));

	(to_sign_magnitude(k1), to_sign_magnitude(k2))
}

fn to_twos_complement(m: &BigInt<4>) -> BigInt<4> {
	let mut r = BigInt::<4>::ZERO;
	let mut borrow = 0u64;
	for i in 0..4 {
		let (d, b) = sbb(0, m.0[i], borrow);
		r.0[i] = d;
		borrow = b;
	}
	r
}

/// Constant-time fixed-window ladder over `bits` bits of `k`.
pub(crate) fn ladder_ct<C: SWCurveConfig>(
	p: &Projective<C>,
	k: &BigInt<4>,
	bits: usize,
) -> Projective<C> {
	// table[i] = i P, i in 0..16; the complete formulas absorb identity
	let mut table = [Projective::<C>::identity(); 16];
	for i in 1..16 {
		table[i] = table[i - 1].add_complete(p);
	}
	let windows = bits.div_ceil(CT_WINDOW);
	let mut acc = Projective::<C>::identity();
	for w in (0..windows).rev() {
		for _ in 0..CT_WINDOW {
			acc = acc.double();
		}
		// 64 is a multiple of the window width, so nibbles never straddle limbs
		let bit_pos = w * CT_WINDOW;
		let limb = k.0[bit_pos / 64];
		let nibble = (limb >> (bit_pos % 64)) & 0xf;
		let mut sel = Projective::<C>::identity();
		for (i, entry) in table.iter().enumerate() {
			let hit = Choice::from((nibble == i as u64) as u8);
			sel = Projective::conditional_select(&sel, entry, hit);
		}
		acc = acc.add_complete(&sel);
	}
	acc
}

/// Constant-time scalar multiplication by a full-width scalar.
pub fn mul_bigint_ct<C: SWCurveConfig>(p: &Projective<C>, k: &BigInt<4>) -> Projective<C> {
	ladder_ct(p, k, 256)
}

fn apply_endo<C: SWCurveConfig>(glv: &GlvParams<C::Base>, p: &Affine<C>) -> Affine<C> {
	if p.infinity {
		return *p;
	}
	let y = if glv.negates_y { -p.y } else { p.y };
	Affine::new_unchecked(p.x * glv.beta, y)
}

/// Constant-time multiplication with GLV acceleration when available.
pub fn mul_ct<C: SWCurveConfig>(p: &Affine<C>, k: &BigInt<4>) -> Projective<C> {
	let glv = match C::GLV {
		Some(g) => g,
		None => return mul_bigint_ct(&Projective::from(*p), k),
	};
	let ((k1, neg1), (k2, neg2)) = decompose_glv(&glv, k);
	let p1 = Affine::conditional_select(p, &(-*p), Choice::from(neg1 as u8));
	let endo = apply_endo::<C>(&glv, p);
	let p2 = Affine::conditional_select(&endo, &(-endo), Choice::from(neg2 as u8));

	// simultaneous two-table ladder
	let pp1 = Projective::from(p1);
	let pp2 = Projective::from(p2);
	let mut t1 = [Projective::<C>::identity(); 16];
	let mut t2 = [Projective::<C>::identity(); 16];
	for i in 1..16 {
		t1[i] = t1[i - 1].add_complete(&pp1);
		t2[i] = t2[i - 1].add_complete(&pp2);
	}
	let windows = HALF_BITS.div_ceil(CT_WINDOW);
	let mut acc = Projective::<C>::identity();
	for w in (0..windows).rev() {
		for _ in 0..CT_WINDOW {
			acc = acc.double();
		}
		for (k_half, table) in [(&k1, &t1), (&k2, &t2)] {
			let bit_pos = w * CT_WINDOW;
			let limb = k_half.0[bit_pos / 64];
			let nibble = (limb >> (bit_pos % 64)) & 0xf;
			let mut sel = Projective::<C>::identity();
			for (i, entry) in table.iter().enumerate() {
				let hit = Choice::from((nibble == i as u64) as u8);
				sel = Projective::conditional_select(&sel, entry, hit);
			}
			acc = acc.add_complete(&sel);
		}
	}
	acc
}

// ---- variable-time path ----

/// wNAF recoding with the given window width; digits are odd, in
/// `[-2^(w-1), 2^(w-1))`, little-endian.
pub fn wnaf_digits(k: &BigInt<4>, w: usize) -> Vec<i8> {
	wnaf_digits_wide(k, w)
}

/// Width-generic wNAF recoding (the Gt exponents reuse it).
pub fn wnaf_digits_wide<const M: usize>(k: &BigInt<M>, w: usize) -> Vec<i8> {
	debug_assert!((2..=7).contains(&w));
	let mut k = *k;
	let mut out = Vec::with_capacity(64 * M + 4);
	let full = 1i64 << w;
	let half = 1i64 << (w - 1);
	while !k.is_zero() {
		let d = if k.is_odd() {
			let mut d = (k.0[0] & (full as u64 - 1)) as i64;
			if d >= half {
				d -= full;
			}
			if d >= 0 {
				k.sub_with_borrow(&BigInt::from_u64(d as u64));
			} else {
				k.add_with_carry(&BigInt::from_u64((-d) as u64));
			}
			d as i8
		} else {
			0
		};
		out.push(d);
		k.div2();
	}
	out
}

/// Window heuristic for single-point multiplication.
fn pick_window(bits: u32) -> usize {
	match bits {
		0..=31 => 3,
		32..=127 => 4,
		_ => 5,
	}
}

/// Odd multiples 1P, 3P, ..., (2^(w-1) - 1)P, normalised to affine.
fn odd_multiples<C: SWCurveConfig>(p: &Affine<C>, w: usize) -> Vec<Affine<C>> {
	let count = 1 << (w - 2);
	let mut jac = Vec::with_capacity(count);
	let base = Jacobian::from(*p);
	let twice = base.double();
	jac.push(base);
	for i in 1..count {
		let prev: Jacobian<C> = jac[i - 1];
		jac.push(prev.add_vartime(&twice));
	}
	let mut out = vec![Affine::identity(); count];
	batch_normalize(&jac, &mut out);
	out
}

/// Variable-time multiplication: endomorphism split plus wNAF.
/// Timing depends on the scalar; never call with secrets.
pub fn mul_vartime<C: SWCurveConfig>(p: &Affine<C>, k: &BigInt<4>) -> Projective<C> {
	if p.infinity || k.is_zero() {
		return Projective::identity();
	}
	let glv = match C::GLV {
		Some(g) => g,
		None => {
			let w = pick_window(k.num_bits());
			let table = odd_multiples(p, w);
			let digits = wnaf_digits(k, w);
			let mut acc = Jacobian::<C>::identity();
			// single stream: plain wNAF walk
			for &d in digits.iter().rev() {
				acc = acc.double();
				if d != 0 {
					let idx = (d.unsigned_abs() as usize) / 2;
					let pt = if d > 0 { table[idx] } else { -table[idx] };
					acc = acc.mixed_add_vartime(&pt);
				}
			}
			return Projective::from(acc.to_affine_vartime());
		}
	};

	let ((k1, neg1), (k2, neg2)) = decompose_glv(&glv, k);
	let p1 = if neg1 { -*p } else { *p };
	let endo = apply_endo::<C>(&glv, p);
	let p2 = if neg2 { -endo } else { endo };
	let w = 4;
	let t1 = odd_multiples(&p1, w);
	let t2 = odd_multiples(&p2, w);
	let d1 = wnaf_digits(&k1, w);
	let d2 = wnaf_digits(&k2, w);
	let len = d1.len().max(d2.len());
	let mut acc = Jacobian::<C>::identity();
	for i in (0..len).rev() {
		acc = acc.double();
		if let Some(&d) = d1.get(i) {
			if d != 0 {
				let idx = (d.unsigned_abs() as usize) / 2;
				let pt = if d > 0 { t1[idx] } else { -t1[idx] };
				acc = acc.mixed_add_vartime(&pt);
			}
		}
		if let Some(&d) = d2.get(i) {
			if d != 0 {
				let idx = (d.unsigned_abs() as usize) / 2;
				let pt = if d > 0 { t2[idx] } else { -t2[idx] };
				acc = acc.mixed_add_vartime(&pt);
			}
		}
	}
	Projective::from(acc.to_affine_vartime())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn wnaf_digits_reconstruct() {
		let k = BigInt([0x1234_5678_9abc_def0, 0xfedc_ba98_7654_3210, 7, 0]);
		for w in 2..=6 {
			let digits = wnaf_digits(&k, w);
			// sum d_i 2^i == k
			let mut acc = BigInt::<4>::ZERO;
			for &d in digits.iter().rev() {
				// acc = 2 acc + d
				acc.mul2();
				if d > 0 {
					acc.add_with_carry(&BigInt::from_u64(d as u64));
				} else if d < 0 {
					acc.sub_with_borrow(&BigInt::from_u64((-d) as u64));
				}
			}
			assert_eq!(acc, k, "w = {w}");
			// non-adjacency: no two non-zero digits within w-1 positions
			let mut last = None::<usize>;
			for (i, &d) in digits.iter().enumerate() {
				if d != 0 {
					assert!(d % 2 != 0);
					if let Some(l) = last {
						assert!(i - l >= w, "w = {w}");
					}
					last = Some(i);
				}
			}
		}
	}
}
