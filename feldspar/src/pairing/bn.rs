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

//! BN-family pairing: Miller loop over the NAF of `6x + 2` with the two
//! Frobenius-twisted extra steps, Devegili-Scott hard part.

use core::fmt::Debug;
use core::marker::PhantomData;

use crate::ec::{Affine, SWCurveConfig};
use crate::fields::{Fp, Fp12, Fp12Params, Fp2, Fp2Params, Fp6Params, FpParams};
use crate::pairing::{
	addition_step, doubling_step, easy_part, exp_by_x, fold_lines, g1_coords, scale_line,
	EllCoeff, TwistType,
};

/// Compile-time data for a BN curve.
pub trait BnParams<const N: usize>: 'static + Copy + Send + Sync + Debug {
	type FpP: FpParams<N>;
	type Fp2P: Fp2Params<N, Base = Self::FpP>;
	type Fp6P: Fp6Params<N, Quad = Self::Fp2P>;
	type Fp12P: Fp12Params<N, Cubic = Self::Fp6P>;
	type G1: SWCurveConfig<Base = Fp<Self::FpP, N>>;
	type G2: SWCurveConfig<Base = Fp2<Self::Fp2P, N>>;

	/// The (positive) BN parameter x.
	const X: u64;
	/// `6x + 2`, the ate loop count (fits two limbs for BN254).
	const SIX_X_PLUS_2: u128;
	const TWIST: TwistType;
	/// `xi^((p-1)/3)` and `xi^((p-1)/2)`: the twisted Frobenius action on
	/// G2 coordinates.
	const TWIST_MUL_BY_Q_X: Fp2<Self::Fp2P, N>;
	const TWIST_MUL_BY_Q_Y: Fp2<Self::Fp2P, N>;
}

pub type G1Affine<P, const N: usize> = Affine<<P as BnParams<N>>::G1>;
pub type G2Affine<P, const N: usize> = Affine<<P as BnParams<N>>::G2>;
pub type TargetField<P, const N: usize> = Fp12<<P as BnParams<N>>::Fp12P, N>;

fn naf(mut v: u128) -> Vec<i8> {
	let mut out = Vec::with_capacity(130);
	while v != 0 {
		if v & 1 == 1 {
			let z: i8 = 2 - (v % 4) as i8;
			if z >= 0 {
				v -= z as u128;
			} else {
				v += (-z) as u128;
			}
			out.push(z);
		} else {
			out.push(0);
		}
		v >>= 1;
	}
	out
}

/// `psi(Q)`: coordinate-wise Frobenius followed by the twist constants.
fn mul_by_char<P: BnParams<N>, const N: usize>(
	q: (Fp2<P::Fp2P, N>, Fp2<P::Fp2P, N>),
) -> (Fp2<P::Fp2P, N>, Fp2<P::Fp2P, N>) {
	(
		q.0.frobenius_map(1) * P::TWIST_MUL_BY_Q_X,
		q.1.frobenius_map(1) * P::TWIST_MUL_BY_Q_Y,
	)
}

/// A G2 point expanded into line coefficients for the BN loop.
pub struct G2Prepared<P: BnParams<N>, const N: usize> {
	pub ell_coeffs: Vec<EllCoeff<P::Fp2P, N>>,
	pub infinity: bool,
	_marker: PhantomData<P>,
}

impl<P: BnParams<N>, const N: usize> Clone for G2Prepared<P, N> {
	fn clone(&self) -> Self {
		Self {
			ell_coeffs: self.ell_coeffs.clone(),
			infinity: self.infinity,
			_marker: PhantomData,
		}
	}
}

impl<P: BnParams<N>, const N: usize> From<G2Affine<P, N>> for G2Prepared<P, N> {
	fn from(q: G2Affine<P, N>) -> Self {
		if q.infinity {
			return Self { ell_coeffs: Vec::new(), infinity: true, _marker: PhantomData };
		}
		let two_inv = Fp::<P::FpP, N>::from_u64(2)
			.inverse_vartime()
			.expect("two is invertible in a field of odd characteristic");
		let twist_b = <P::G2 as SWCurveConfig>::B;
		let neg_q = (q.x, -q.y);
		let mut r = (q.x, q.y, Fp2::<P::Fp2P, N>::ONE);
		let digits = naf(P::SIX_X_PLUS_2);
		let mut coeffs = Vec::with_capacity(digits.len() * 2 + 2);
		for &d in digits.iter().rev().skip(1) {
			coeffs.push(doubling_step(&mut r, &two_inv, &twist_b, P::TWIST));
			match d {
				1 => coeffs.push(addition_step(&mut r, &(q.x, q.y), P::TWIST)),
				-1 => coeffs.push(addition_step(&mut r, &neg_q, P::TWIST)),
				_ => {}
			}
		}
		// q1 = psi(Q), q2 = -psi^2(Q)
		let q1 = mul_by_char::<P, N>((q.x, q.y));
		let mut q2 = mul_by_char::<P, N>(q1);
		q2.1 = -q2.1;
		coeffs.push(addition_step(&mut r, &q1, P::TWIST));
		coeffs.push(addition_step(&mut r, &q2, P::TWIST));
		Self { ell_coeffs: coeffs, infinity: false, _marker: PhantomData }
	}
}

pub struct BnEngine<P: BnParams<N>, const N: usize>(PhantomData<P>);

impl<P: BnParams<N>, const N: usize> BnEngine<P, N> {
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
		let digits = naf(P::SIX_X_PLUS_2);
		let mut idx = 0usize;
		let mut lines = Vec::with_capacity(inputs.len() * 2);
		for &d in digits.iter().rev().skip(1) {
			f = f.square();
			lines.clear();
			for ((px, py), q) in inputs.iter() {
				lines.push(scale_line(&q.ell_coeffs[idx], px, py, P::TWIST));
			}
			idx += 1;
			if d != 0 {
				for ((px, py), q) in inputs.iter() {
					lines.push(scale_line(&q.ell_coeffs[idx], px, py, P::TWIST));
				}
				idx += 1;
			}
			fold_lines(&mut f, &lines, P::TWIST);
		}
		// the two Frobenius end-steps
		for _ in 0..2 {
			lines.clear();
			for ((px, py), q) in inputs.iter() {
				lines.push(scale_line(&q.ell_coeffs[idx], px, py, P::TWIST));
			}
			idx += 1;
			fold_lines(&mut f, &lines, P::TWIST);
		}
		f
	}

	pub fn miller_loop(p: &G1Affine<P, N>, q: &G2Affine<P, N>) -> TargetField<P, N> {
		Self::multi_miller_loop(&[(*p, G2Prepared::from(*q))])
	}

	/// Devegili-Scott chain; computes a fixed r-coprime multiple of the
	/// hard exponent `(p^4 - p^2 + 1)/r`.
	pub fn final_exponentiation(f: &TargetField<P, N>) -> Option<TargetField<P, N>> {
		let r = easy_part(f)?;
		// exp_by_neg_x: g -> g^{-x}
		let enx = |g: &TargetField<P, N>| exp_by_x(g, P::X, true);
		let y0 = enx(&r);
		let y1 = y0.cyclotomic_square();
		let y2 = y1.cyclotomic_square();
		let mut y3 = y2 * y1;
		let y4 = enx(&y3);
		let y5 = y4.cyclotomic_square();
		let mut y6 = enx(&y5);
		y3 = y3.conjugate();
		y6 = y6.conjugate();
		let y7 = y6 * y4;
		let y8 = y7 * y3;
		let y9 = y8 * y1;
		let y10 = y8 * y4;
		let y11 = y10 * r;
		let y12 = y9.frobenius_map(1);
		let y13 = y12 * y11;
		let y14 = y8.frobenius_map(2) * y13;
		let y15 = (r.conjugate() * y9).frobenius_map(3);
		Some(y15 * y14)
	}

	pub fn pairing(p: &G1Affine<P, N>, q: &G2Affine<P, N>) -> TargetField<P, N> {
		Self::final_exponentiation(&Self::miller_loop(p, q))
			.unwrap_or(TargetField::<P, N>::ONE)
	}

	pub fn multi_pairing_is_one(pairs: &[(G1Affine<P, N>, G2Prepared<P, N>)]) -> bool {
		let f = Self::multi_miller_loop(pairs);
		match Self::final_exponentiation(&f) {
			Some(e) => e.is_one(),
			None => false,
		}
	}
}
