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

//! Prime fields and their tower extensions.

use core::fmt::Debug;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use rand_core::RngCore;
use subtle::{ConditionallySelectable, ConstantTimeEq, CtOption};
use zeroize::Zeroize;

pub mod fp;
pub mod fp12;
pub mod fp2;
pub mod fp6;

pub use fp::{Fp, FpParams, FpWide, SqrtAlgo};
pub use fp12::{Fp12, Fp12Params};
pub use fp2::{Fp2, Fp2Params};
pub use fp6::{Fp6, Fp6Params};

/// The field interface the curve layer is generic over; implemented by the
/// prime fields (G1 base, scalars) and quadratic extensions (G2 base).
pub trait Field:
	'static
	+ Copy
	+ Clone
	+ Debug
	+ Default
	+ Send
	+ Sync
	+ PartialEq
	+ Eq
	+ Add<Output = Self>
	+ Sub<Output = Self>
	+ Neg<Output = Self>
	+ Mul<Output = Self>
	+ AddAssign
	+ SubAssign
	+ MulAssign
	+ ConditionallySelectable
	+ ConstantTimeEq
	+ Zeroize
{
	const ZERO: Self;
	const ONE: Self;

	fn double(&self) -> Self;
	fn square(&self) -> Self;
	fn inverse(&self) -> CtOption<Self>;
	fn inverse_vartime(&self) -> Option<Self>;
	fn is_zero(&self) -> bool;
	fn sqrt(&self) -> CtOption<Self>;
	/// RFC 9380 sign-of-y.
	fn sgn0(&self) -> bool;
	/// The compressed-codec y-sign convention.
	fn is_lexicographically_largest(&self) -> bool;
	fn rand<R: RngCore + ?Sized>(rng: &mut R) -> Self;
}
