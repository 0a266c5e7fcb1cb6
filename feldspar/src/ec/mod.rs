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

//! Short-Weierstrass and twisted-Edwards curve groups.

use core::fmt::Debug;

use subtle::Choice;

use crate::arith::BigInt;
use crate::fields::Field;

pub mod affine;
pub mod batch;
pub mod jacobian;
pub mod msm;
pub mod mul;
pub mod projective;
pub mod twedwards;

pub use affine::Affine;
pub use jacobian::{JacExt, Jacobian};
pub use projective::Projective;

/// GLV endomorphism data: `endo(x, y) = (beta x, +-y)` acts as
/// multiplication by `lambda` on the prime-order subgroup, and the short
/// lattice basis `(a1, b1), (a2, b2)` splits scalars in half.
///
/// Signs of the basis entries are carried separately; the magnitudes all
/// fit 128 bits for the instantiated curves.
#[derive(Clone, Copy, Debug)]
pub struct GlvParams<F: Field> {
	pub beta: F,
	pub negates_y: bool,
	pub lambda: BigInt<4>,
	/// |a1|, sign(a1), |b1|, sign(b1), |a2|, sign(a2), |b2|, sign(b2);
	/// the magnitudes stay just above 128 bits for the instantiated curves.
	pub a1: BigInt<4>,
	pub a1_neg: bool,
	pub b1: BigInt<4>,
	pub b1_neg: bool,
	pub a2: BigInt<4>,
	pub a2_neg: bool,
	pub b2: BigInt<4>,
	pub b2_neg: bool,
	/// `floor(2^320 |b2| / r)` and `floor(2^320 |b1| / r)`: Babai rounding
	/// reciprocals for the two closest-vector coefficients.
	pub g1: BigInt<4>,
	pub g2: BigInt<4>,
}

/// Compile-time description of a short-Weierstrass curve
/// `y^2 = x^3 + a x + b` with a subgroup of prime order `r`.
pub trait SWCurveConfig: 'static + Copy + Send + Sync + Debug + Sized {
	type Base: Field;

	const A: Self::Base;
	const B: Self::Base;
	/// Affine coordinates of the subgroup generator.
	const GENERATOR_X: Self::Base;
	const GENERATOR_Y: Self::Base;
	/// The prime subgroup order (every instantiated curve has a 256-bit-or
	/// smaller order, so the width is fixed).
	const ORDER: BigInt<4>;
	const COFACTOR_IS_ONE: bool;
	/// Endomorphism acceleration; `None` falls back to plain ladders.
	const GLV: Option<GlvParams<Self::Base>>;

	/// Subgroup membership. The default multiplies by the order; curves
	/// with a cheaper criterion (eigenvalue or psi checks) override it.
	fn is_in_subgroup(p: &Affine<Self>) -> Choice {
		if Self::COFACTOR_IS_ONE {
			return Choice::from(p.is_on_curve() as u8);
		}
		let r = mul::mul_bigint_ct(&Projective::from(*p), &Self::ORDER);
		Choice::from(r.is_identity() as u8)
	}

	/// Maps a curve point into the prime subgroup. The default multiplies
	/// by nothing (cofactor one); curves with a cofactor override it.
	fn clear_cofactor(p: &Affine<Self>) -> Projective<Self> {
		debug_assert!(Self::COFACTOR_IS_ONE);
		Projective::from(*p)
	}
}
