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

//! Pippenger multi-scalar multiplication with signed-digit buckets.
//!
//! Scalars are split into signed `c`-bit digits so only `2^(c-1)` buckets
//! are needed per window; bucket accumulation runs in extended Jacobian
//! coordinates on the affine inputs, bucket sums are normalised back to
//! affine with one shared inversion, and the running-sum trick folds the
//! buckets. Windows are independent, which is what the parallel version
//! exploits.

use crate::arith::BigInt;
use crate::ec::batch::batch_inverse;
use crate::ec::{Affine, JacExt, Jacobian, Projective, SWCurveConfig};
use crate::error::Error;
use crate::fields::Field;
use crate::pool::TaskPool;

/// Scalar bit width handled by the MSM (the subgroup orders all fit).
const SCALAR_BITS: usize = 256;

/// Hand-tuned bucket widths below 64 points; the closed form above that.
/// The closed form agrees with the reference implementation for n >= 64.
pub fn best_bucket_bit_size(n: usize, bits: usize) -> usize {
	let c = match n {
		0..=8 => 2,
		9..=32 => 3,
		33..=64 => 4,
		_ => {
			// 0.69 log2 n + 2, the usual natural-log heuristic
			let log2 = usize::BITS - n.leading_zeros() - 1;
			(log2 as usize * 69 / 100) + 2
		}
	};
	c.clamp(2, 16).min(bits.max(2))
}

/// Signed digit recoding: `ceil(bits/c) + 1` digits in
/// `[-2^(c-1), 2^(c-1)]`, most-significant last.
pub(crate) fn signed_digits(k: &BigInt<4>, c: usize, windows: usize) -> Vec<i32> {
	debug_assert!(c >= 2, "signed recoding needs at least two-bit windows");
	let full = 1i64 << c;
	let half = 1i64 << (c - 1);
	let mut out = Vec::with_capacity(windows);
	let mut carry = 0i64;
	for w in 0..windows {
		let bit = w * c;
		let mut raw = 0i64;
		if bit < SCALAR_BITS {
			let limb = k.0[bit / 64];
			raw = ((limb >> (bit % 64)) & (full as u64 - 1)) as i64;
			let used = 64 - (bit % 64);
			if used < c && bit / 64 + 1 < 4 {
				raw |= ((k.0[bit / 64 + 1] as i64) << used) & (full - 1);
			}
		}
		let mut d = raw + carry;
		if d >= half {
			d -= full;
			carry = 1;
		} else {
			carry = 0;
		}
		out.push(d as i32);
	}
	debug_assert_eq!(carry, 0, "top window absorbs the final carry");
	out
}

/// One window's bucket accumulation and running-sum reduction.
fn window_sum<C: SWCurveConfig>(
	points: &[Affine<C>],
	digits: &[Vec<i32>],
	w: usize,
	c: usize,
	process_zero_windows: bool,
) -> Jacobian<C> {
	let nbuckets = 1usize << (c - 1);
	let mut buckets = vec![JacExt::<C>::identity(); nbuckets];
	let mut any = false;
	for (p, ds) in points.iter().zip(digits.iter()) {
		let d = ds[w];
		if d == 0 || p.infinity {
			continue;
		}
		any = true;
		let idx = d.unsigned_abs() as usize - 1;
		let pt = if d > 0 { *p } else { -*p };
		buckets[idx] = buckets[idx].mixed_add_vartime(&pt);
	}
	if !any && !process_zero_windows {
		return Jacobian::identity();
	}
	// one shared inversion brings every bucket back to affine
	let mut zs: Vec<C::Base> = buckets.iter().map(|b| b.zzz).collect();
	batch_inverse(&mut zs);
	let mut affine = vec![Affine::<C>::identity(); nbuckets];
	for ((b, zi), out) in buckets.iter().zip(zs.iter()).zip(affine.iter_mut()) {
		if !b.is_identity() {
			*out = Affine::new_unchecked(
				b.x * b.zz.square() * zi.square(),
				b.y * *zi,
			);
		}
	}
	// running sum: sum_b b * bucket[b] as nested suffix sums
	let mut sum = Jacobian::<C>::identity();
	let mut total = Jacobian::<C>::identity();
	for b in affine.iter().rev() {
		sum = sum.mixed_add_vartime(b);
		total = total.add_vartime(&sum);
	}
	total
}

fn combine_windows<C: SWCurveConfig>(windows: &[Jacobian<C>], c: usize) -> Projective<C> {
	let mut acc = Jacobian::<C>::identity();
	for w in windows.iter().rev() {
		for _ in 0..c {
			acc = acc.double();
		}
		acc = acc.add_vartime(w);
	}
	Projective::from(acc.to_affine_vartime())
}

fn check_lengths(points: usize, scalars: usize) -> Result<(), Error> {
	if points != scalars {
		return Err(Error::Aggregation("points and scalars differ in length"));
	}
	Ok(())
}

/// Reference linear combination; the correctness baseline for the fast paths.
pub fn msm_naive<C: SWCurveConfig>(
	points: &[Affine<C>],
	scalars: &[BigInt<4>],
) -> Result<Projective<C>, Error> {
	check_lengths(points.len(), scalars.len())?;
	let mut acc = Projective::<C>::identity();
	for (p, k) in points.iter().zip(scalars.iter()) {
		acc = acc.add_vartime(&super::mul::mul_vartime(p, k));
	}
	Ok(acc)
}

/// Pippenger MSM; variable time, public inputs only.
pub fn msm_vartime<C: SWCurveConfig>(
	points: &[Affine<C>],
	scalars: &[BigInt<4>],
) -> Result<Projective<C>, Error> {
	msm_with_options(points, scalars, None, false)
}

/// Full-control entry point: explicit bucket width and the flag that
/// forces all-zero windows through the bucket machinery so timing
/// measurements stay honest.
pub fn msm_with_options<C: SWCurveConfig>(
	points: &[Affine<C>],
	scalars: &[BigInt<4>],
	bucket_bits: Option<usize>,
	process_zero_windows: bool,
) -> Result<Projective<C>, Error> {
	check_lengths(points.len(), scalars.len())?;
	if points.is_empty() {
		return Ok(Projective::identity());
	}
	let c = bucket_bits.unwrap_or_else(|| best_bucket_bit_size(points.len(), SCALAR_BITS));
	let windows = SCALAR_BITS.div_ceil(c) + 1;
	let digits: Vec<Vec<i32>> =
		scalars.iter().map(|k| signed_digits(k, c, windows)).collect();
	let sums: Vec<Jacobian<C>> = (0..windows)
		.map(|w| window_sum(points, &digits, w, c, process_zero_windows))
		.collect();
	Ok(combine_windows(&sums, c))
}

/// Parallel Pippenger: windows are partitioned across the pool's workers
/// into disjoint output slots, then combined sequentially. Bit-for-bit the
/// same result as [`msm_vartime`].
pub fn msm_parallel<C: SWCurveConfig>(
	pool: &TaskPool,
	points: &[Affine<C>],
	scalars: &[BigInt<4>],
) -> Result<Projective<C>, Error> {
	check_lengths(points.len(), scalars.len())?;
	if points.is_empty() {
		return Ok(Projective::identity());
	}
	let c = best_bucket_bit_size(points.len(), SCALAR_BITS);
	let windows = SCALAR_BITS.div_ceil(c) + 1;
	let digits: Vec<Vec<i32>> =
		scalars.iter().map(|k| signed_digits(k, c, windows)).collect();
	let mut sums = vec![Jacobian::<C>::identity(); windows];
	pool.sync_scope(|s| {
		for (w, slot) in sums.iter_mut().enumerate() {
			let digits = &digits;
			s.spawn(move |_| {
				*slot = window_sum(points, digits, w, c, false);
			});
		}
	});
	Ok(combine_windows(&sums, c))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn digit_recoding_reconstructs() {
		let k = BigInt([0xdeadbeefcafef00d, 0x0123456789abcdef, u64::MAX, 0x7fffffffffffffff]);
		for c in [2usize, 4, 7, 11, 13] {
			let windows = SCALAR_BITS.div_ceil(c) + 1;
			let digits = signed_digits(&k, c, windows);
			let mut acc = BigInt::<4>::ZERO;
			for &d in digits.iter().rev() {
				for _ in 0..c {
					acc.mul2();
				}
				if d > 0 {
					acc.add_with_carry(&BigInt::from_u64(d as u64));
				} else if d < 0 {
					acc.sub_with_borrow(&BigInt::from_u64((-d) as u64));
				}
			}
			assert_eq!(acc, k, "c = {c}");
		}
	}

	#[test]
	fn bucket_size_heuristic_monotone_enough() {
		assert_eq!(best_bucket_bit_size(1, 256), 2);
		assert_eq!(best_bucket_bit_size(8, 256), 2);
		assert_eq!(best_bucket_bit_size(32, 256), 3);
		assert_eq!(best_bucket_bit_size(64, 256), 4);
		assert!(best_bucket_bit_size(1 << 10, 256) >= 7);
		assert!(best_bucket_bit_size(1 << 20, 256) <= 16);
	}
}
