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

//! Optimal ate pairings for the BLS12 and BN families.
//!
//! G2 points are prepared into line coefficients once; the Miller loop
//! then only touches the accumulator. Lines are folded two at a time:
//! a sparse-by-sparse product costs five Fp2 multiplications and saves a
//! full-width multiplication every other line.

use crate::arith::BigInt;
use crate::ec::{Affine, SWCurveConfig};
use crate::fields::{Fp, Fp12, Fp12Params, Fp2, Fp2Params, Fp6Params, FpParams};

pub mod bls;
pub mod bn;

pub use bls::{Bls12Params, BlsEngine};
pub use bn::{BnEngine, BnParams};

/// Which twist the curve uses; decides where line coefficients sit in the
/// sparse Fp12 product.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TwistType {
	M,
	D,
}

/// One Miller-loop line: three Fp2 coefficients, meaning depends on the
/// twist type.
pub type EllCoeff<Q, const N: usize> = (Fp2<Q, N>, Fp2<Q, N>, Fp2<Q, N>);

/// Shared projective doubling step (Costello-Lange-Naehrig formulas).
/// Returns the tangent line evaluated symbolically.
pub(crate) fn doubling_step<Q: Fp2Params<N>, const N: usize>(
	r: &mut (Fp2<Q, N>, Fp2<Q, N>, Fp2<Q, N>),
	two_inv: &Fp<Q::Base, N>,
	twist_b: &Fp2<Q, N>,
	twist: TwistType,
) -> EllCoeff<Q, N> {
	let (x, y, z) = *r;
	let mut a = x * y;
	a = a.mul_by_base(two_inv);
	let b = y.square();
	let c = z.square();
	let e = *twist_b * (c.double() + c);
	let f = e.double() + e;
	let mut g = b + f;
	g = g.mul_by_base(two_inv);
	let h = (y + z).square() - (b + c);
	let i = e - b;
	let j = x.square();
	let e_sq = e.square();

	r.0 = a * (b - f);
	r.1 = g.square() - (e_sq.double() + e_sq);
	r.2 = b * h;
	match twist {
		TwistType::M => (i, j.double() + j, -h),
		TwistType::D => (-h, j.double() + j, i),
	}
}

/// Shared projective addition step with the chord line through `q`.
pub(crate) fn addition_step<Q: Fp2Params<N>, const N: usize>(
	r: &mut (Fp2<Q, N>, Fp2<Q, N>, Fp2<Q, N>),
	q: &(Fp2<Q, N>, Fp2<Q, N>),
	twist: TwistType,
) -> EllCoeff<Q, N> {
	let (x, y, z) = *r;
	let (qx, qy) = *q;
	let theta = y - qy * z;
	let lambda = x - qx * z;
	let c = theta.square();
	let d = lambda.square();
	let e = lambda * d;
	let f = z * c;
	let g = x * d;
	let h = e + f - g.double();
	r.0 = lambda * h;
	r.1 = theta * (g - h) - e * y;
	r.2 = z * e;
	let j = theta * qx - lambda * qy;
	match twist {
		TwistType::M => (j, -theta, lambda),
		TwistType::D => (lambda, -theta, j),
	}
}

/// Line scaled into standalone coefficient form (for pairwise products).
pub(crate) fn scale_line<Q, B, const N: usize>(
	coeff: &EllCoeff<Q, N>,
	px: &Fp<B, N>,
	py: &Fp<B, N>,
	twist: TwistType,
) -> EllCoeff<Q, N>
where
	Q: Fp2Params<N, Base = B>,
	B: FpParams<N>,
{
	match twist {
		TwistType::M => (coeff.0, coeff.1.mul_by_base(px), coeff.2.mul_by_base(py)),
		TwistType::D => (coeff.0.mul_by_base(py), coeff.1.mul_by_base(px), coeff.2),
	}
}

/// Folds a batch of scaled lines into the accumulator, multiplying
/// adjacent pairs together first (sparse x sparse, then one full product).
pub(crate) fn fold_lines<P12, Q, const N: usize>(
	f: &mut Fp12<P12, N>,
	lines: &[EllCoeff<Q, N>],
	twist: TwistType,
) where
	P12: Fp12Params<N>,
	P12::Cubic: Fp6Params<N, Quad = Q>,
	Q: Fp2Params<N>,
{
	let mut chunks = lines.chunks_exact(2);
	for pair in &mut chunks {
		let prod = match twist {
			TwistType::M => Fp12::line_product_014(
				(&pair[0].0, &pair[0].1, &pair[0].2),
				(&pair[1].0, &pair[1].1, &pair[1].2),
			),
			TwistType::D => Fp12::line_product_034(
				(&pair[0].0, &pair[0].1, &pair[0].2),
				(&pair[1].0, &pair[1].1, &pair[1].2),
			),
		};
		*f = *f * prod;
	}
	if let [last] = chunks.remainder() {
		match twist {
			TwistType::M => f.mul_by_014(&last.0, &last.1, &last.2),
			TwistType::D => f.mul_by_034(&last.0, &last.1, &last.2),
		}
	}
}

/// The easy part of any final exponentiation:
/// `f -> f^((p^6 - 1)(p^2 + 1))`. Returns `None` for f = 0 (never happens
/// for Miller outputs on valid inputs).
pub(crate) fn easy_part<P12: Fp12Params<N>, const N: usize>(
	f: &Fp12<P12, N>,
) -> Option<Fp12<P12, N>> {
	let inv = f.inverse();
	if inv.is_none().into() {
		return None;
	}
	let inv = inv.unwrap();
	let t = f.conjugate() * inv;
	Some(t.frobenius_map(2) * t)
}

/// Restriction of a pairing input pair to its G1 affine coordinates,
/// filtering identities (which contribute a factor of one).
pub(crate) fn g1_coords<C: SWCurveConfig>(p: &Affine<C>) -> Option<(C::Base, C::Base)> {
	if p.infinity {
		None
	} else {
		Some((p.x, p.y))
	}
}

/// Exponent helper shared by both families: raise to |x| cyclotomically,
/// conjugating when x is negative.
pub(crate) fn exp_by_x<P12: Fp12Params<N>, const N: usize>(
	f: &Fp12<P12, N>,
	x_abs: u64,
	x_negative: bool,
) -> Fp12<P12, N> {
	let e = BigInt::<1>::from_u64(x_abs);
	let r = f.cyclotomic_exp_vartime(&e);
	if x_negative {
		r.conjugate()
	} else {
		r
	}
}
