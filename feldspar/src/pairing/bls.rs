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

//! BLS12-family pairing: Miller loop over the binary expansion of |x|,
//! final exponentiation with the `(x-1)^2 (x+p)(x^2+p^2-1) + 3`
//! decomposition of three times the hard exponent.

use core::fmt::Debug;
use core::marker::PhantomData;

use crate::ec::{Affine, SWCurveConfig};
use crate::fields::{Fp, Fp12, Fp12Params, Fp2, Fp2Params, Fp6Params, FpParams};
use crate::pairing::{
	addition_step, doubling_step, easy_part, exp_by_x, fold_lines, g1_coords, scale_line,
	EllCoeff, TwistType,
};
use crate::pool::TaskPool;

/// Everything a BLS12 curve family member fixes at compile time.
pub trait Bls12Params<const N: usize>: 'static + Copy + Send + Sync + Debug {
	type FpP: FpParams<N>;
	type Fp2P: Fp2Params<N, Base = Self::FpP>;
	type Fp6P: Fp6Params<N, Quad = Self::Fp2P>;
	type Fp12P: Fp12Params<N, Cubic = Self::Fp6P>;
	type G1: SWCurveConfig<Base = Fp<Self::FpP, N>>;
	type G2: SWCurveConfig<Base = Fp2<Self::Fp2P, N>>;

	/// |x|, the curve family parameter.
	const X: u64;
	const X_IS_NEGATIVE: bool;
	const TWIST: TwistType;
}

pub type G1Affine<P, const N: usize> = Affine<<P as Bls12Params<N>>::G1>;
pub type G2Affine<P, const N: usize> = Affine<<P as Bls12Params<N>>::G2>;
pub type TargetField<P, const N: usize> = Fp12<<P as Bls12Params<N>>::Fp12P, N>;

/// A G2 point expanded into Miller-loop line coefficients.
pub struct G2Prepared<P: Bls12Params<N>, const N: usize> {
	pub ell_coeffs: Vec<EllCoeff<P::Fp2P, N>>,
	pub infinity: bool,
	_marker: PhantomData<P>,
}

impl<P: Bls12Params<N>, const N: usize> Clone for G2Prepared<P, N> {
	fn clone(&self) -> Self {
		Self {
			ell_coeffs: self.ell_coeffs.clone(),
			infinity: self.infinity,
			_marker: PhantomData,
		}
	}
}

impl<P: Bls12Params<N>, const N: usize> From<G2Affine<P, N>> for G2Prepared<P, N> {
	fn from(q: G2Affine<P, N>) -> Self {
		if q.infinity {
			return Self { ell_coeffs: Vec::new(), infinity: true, _marker: PhantomData };
		}
		let two_inv = Fp::<P::FpP, N>::from_u64(2)
			.inverse_vartime()
			.expect("two is invertible in a field of odd characteristic");
		let twist_b = <P::G2 as SWCurveConfig>::B;
		let mut r = (q.x, q.y, Fp2::<P::Fp2P, N>::ONE);
		let mut coeffs = Vec::with_capacity(68 * 2);
		let x = P::X;
		let top = 63 - x.leading_zeros();
		for i in (0..top).rev() {
			coeffs.push(doubling_step(&mut r, &two_inv, &twist_b, P::TWIST));
			if (x >> i) & 1 == 1 {
				coeffs.push(addition_step(&mut r, &(q.x, q.y), P::TWIST));
			}
		}
		Self { ell_coeffs: coeffs, infinity: false, _marker: PhantomData }
	}
}

/// The pairing engine; a unit struct so call sites read
/// `BlsEngine::<Curve>::pairing(p, q)`.
pub struct BlsEngine<P: Bls12Params<N>, const N: usize>(PhantomData<P>);

impl<P: Bls12Params<N>, const N: usize> BlsEngine<P, N> {
	/// Shared-accumulator Miller loop over any number of pairs.
	pub fn multi_miller_loop(
		pairs: &[(G1Affine<P, N>, G2Prepared<P, N>)],
	) -> TargetField<P, N> {
		let inputs: Vec<((Fp<P::FpP, N>, Fp<P::FpP, N>), &G2Prepared<P, N>)> = pairs
			.iter()
			.filter(|(_, q)| !q.infinity)
			.filter_map(|(p, q)| g1_coords(p).map(|xy| (xy, q)))
			.collect();
		let mut f = TargetField::<P, N>::ONE;
		if inputs.is_empty() {
			return f;
		}
		let x = P::X;
		let top = 63 - x.leading_zeros();
		let mut idx = 0usize;
		let mut lines = Vec::with_capacity(inputs.len() * 2);
		for i in (0..top).rev() {
			f = f.square();
			lines.clear();
			for ((px, py), q) in inputs.iter() {
				lines.push(scale_line(&q.ell_coeffs[idx], px, py, P::TWIST));
			}
			idx += 1;
			if (x >> i) & 1 == 1 {
				for ((px, py), q) in inputs.iter() {
					lines.push(scale_line(&q.ell_coeffs[idx], px, py, P::TWIST));
				}
				idx += 1;
			}
			fold_lines(&mut f, &lines, P::TWIST);
		}
		if P::X_IS_NEGATIVE {
			f = f.conjugate();
		}
		f
	}

	pub fn miller_loop(p: &G1Affine<P, N>, q: &G2Affine<P, N>) -> TargetField<P, N> {
		Self::multi_miller_loop(&[(*p, G2Prepared::from(*q))])
	}

	/// Fuentes-Castaneda-style hard part on top of the shared easy part;
	/// computes `f^(3 (p^4 - p^2 + 1) / r)`, a fixed r-coprime multiple.
	pub fn final_exponentiation(f: &TargetField<P, N>) -> Option<TargetField<P, N>> {
		let m = easy_part(f)?;
		let ex = |g: &TargetField<P, N>| exp_by_x(g, P::X, P::X_IS_NEGATIVE);
		// t1 = m^((x-1)^2)
		let t0 = ex(&m) * m.conjugate();
		let t1 = ex(&t0) * t0.conjugate();
		// ^(x + p)
		let t2 = ex(&t1) * t1.frobenius_map(1);
		// ^(x^2 + p^2 - 1)
		let t3 = ex(&ex(&t2)) * t2.frobenius_map(2) * t2.conjugate();
		// * m^3
		Some(t3 * m.cyclotomic_square() * m)
	}

	pub fn pairing(p: &G1Affine<P, N>, q: &G2Affine<P, N>) -> TargetField<P, N> {
		Self::final_exponentiation(&Self::miller_loop(p, q))
			.unwrap_or(TargetField::<P, N>::ONE)
	}

	/// Product-of-pairings predicate: true when `prod e(p_i, q_i) == 1`.
	pub fn multi_pairing_is_one(pairs: &[(G1Affine<P, N>, G2Prepared<P, N>)]) -> bool {
		let f = Self::multi_miller_loop(pairs);
		match Self::final_exponentiation(&f) {
			Some(e) => e.is_one(),
			None => false,
		}
	}

	/// Parallel Miller loop: pairs are partitioned across the pool's
	/// workers (the accumulator of a sub-batch is the product of its
	/// pairs' Miller values, so partial results just multiply) and a
	/// single final exponentiation remains for the caller.
	pub fn multi_miller_loop_parallel(
		pool: &TaskPool,
		pairs: &[(G1Affine<P, N>, G2Prepared<P, N>)],
	) -> TargetField<P, N> {
		let workers = pool.thread_count().max(1);
		let chunk = pairs.len().div_ceil(workers).max(1);
		let mut partials = vec![TargetField::<P, N>::ONE; pairs.len().div_ceil(chunk)];
		pool.sync_scope(|s| {
			for (slot, part) in partials.iter_mut().zip(pairs.chunks(chunk)) {
				s.spawn(move |_| {
					*slot = Self::multi_miller_loop(part);
				});
			}
		});
		partials
			.into_iter()
			.fold(TargetField::<P, N>::ONE, |acc, f| acc * f)
	}

	pub fn multi_pairing_is_one_parallel(
		pool: &TaskPool,
		pairs: &[(G1Affine<P, N>, G2Prepared<P, N>)],
	) -> bool {
		let f = Self::multi_miller_loop_parallel(pool, pairs);
		match Self::final_exponentiation(&f) {
			Some(e) => e.is_one(),
			None => false,
		}
	}
}
