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

//! Batched affine operations: simultaneous inversion and the linear-pass
//! affine addition tree.

use crate::ec::{Affine, Jacobian, Projective, SWCurveConfig};
use crate::fields::Field;

/// Montgomery's simultaneous inversion: one inversion plus `3(n-1)`
/// multiplications. Zero entries are left as zero.
pub fn batch_inverse<F: Field>(values: &mut [F]) {
	if values.is_empty() {
		return;
	}
	// prefix products, skipping zeros
	let mut acc = F::ONE;
	let mut prefix = Vec::with_capacity(values.len());
	for v in values.iter() {
		prefix.push(acc);
		if !v.is_zero() {
			acc *= *v;
		}
	}
	let mut inv = match acc.inverse_vartime() {
		Some(i) => i,
		None => return, // all entries zero
	};
	for (v, p) in values.iter_mut().zip(prefix.iter()).rev() {
		if !v.is_zero() {
			let vi = inv * *p;
			inv *= *v;
			*v = vi;
		}
	}
}

/// Converts a slice of Jacobian points to affine with one shared inversion,
/// writing into `dst` in place.
pub fn batch_normalize<C: SWCurveConfig>(src: &[Jacobian<C>], dst: &mut [Affine<C>]) {
	assert_eq!(src.len(), dst.len());
	let mut zs: Vec<C::Base> = src.iter().map(|p| p.z).collect();
	batch_inverse(&mut zs);
	for ((p, zinv), out) in src.iter().zip(zs.iter()).zip(dst.iter_mut()) {
		if p.is_identity() {
			*out = Affine::identity();
		} else {
			let zinv2 = zinv.square();
			*out = Affine::new_unchecked(p.x * zinv2, p.y * zinv2 * *zinv);
		}
	}
}

/// Same for homogeneous projective points.
pub fn batch_normalize_projective<C: SWCurveConfig>(
	src: &[Projective<C>],
	dst: &mut [Affine<C>],
) {
	assert_eq!(src.len(), dst.len());
	let mut zs: Vec<C::Base> = src.iter().map(|p| p.z).collect();
	batch_inverse(&mut zs);
	for ((p, zinv), out) in src.iter().zip(zs.iter()).zip(dst.iter_mut()) {
		if p.is_identity() {
			*out = Affine::identity();
		} else {
			*out = Affine::new_unchecked(p.x * *zinv, p.y * *zinv);
		}
	}
}

/// Sums a slice of affine points with the batched affine addition law:
/// each round halves the list using one shared inversion for all the
/// chord slopes. Pairs sharing an x-coordinate fall back to scalar
/// addition into a side accumulator. Variable time; public data only.
pub fn sum_reduce_vartime<C: SWCurveConfig>(points: &[Affine<C>]) -> Projective<C> {
	let mut work: Vec<Affine<C>> = points.iter().copied().filter(|p| !p.infinity).collect();
	let mut side = Jacobian::<C>::identity();

	while work.len() > 1 {
		let pairs = work.len() / 2;
		let odd = work.len() % 2 == 1;
		// denominators x2 - x1 per pair
		let mut dens: Vec<C::Base> = (0..pairs)
			.map(|i| work[2 * i + 1].x - work[2 * i].x)
			.collect();
		batch_inverse(&mut dens);
		let mut next: Vec<Affine<C>> = Vec::with_capacity(pairs + 1);
		for i in 0..pairs {
			let p = work[2 * i];
			let q = work[2 * i + 1];
			if p.x == q.x {
				// shared abscissa: doubling or cancellation; handled scalar
				side = side.mixed_add_vartime(&p);
				side = side.mixed_add_vartime(&q);
				continue;
			}
			let lambda = (q.y - p.y) * dens[i];
			let x3 = lambda.square() - p.x - q.x;
			let y3 = lambda * (p.x - x3) - p.y;
			next.push(Affine::new_unchecked(x3, y3));
		}
		if odd {
			next.push(work[work.len() - 1]);
		}
		work = next;
	}

	let mut acc = side;
	if let Some(last) = work.first() {
		acc = acc.mixed_add_vartime(last);
	}
	let aff = acc.to_affine_vartime();
	Projective::from(aff)
}

#[cfg(test)]
mod tests {
	// exercised from the curve instantiation tests where generators exist
}
