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

//! Quadratic extension over a prime field.
//!
//! Multiplication is Karatsuba on lazily-reduced double-width products:
//! three base multiplications, two Montgomery reductions. Both towers in
//! the crate use the non-residue -1, which the wide path exploits as a
//! plain offset subtraction.

use core::fmt;
use core::marker::PhantomData;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use rand_core::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};
use zeroize::Zeroize;

use crate::arith::BigInt;
use crate::fields::fp::{Fp, FpParams, FpWide};

/// Description of an `Fp2 = Fp[u] / (u^2 - beta)` tower level.
pub trait Fp2Params<const N: usize>: 'static + Copy + Send + Sync + fmt::Debug {
	type Base: FpParams<N>;
	/// The quadratic non-residue beta.
	const NONRESIDUE: Fp<Self::Base, N>;
	/// `beta^((p^i - 1) / 2)` for i = 0, 1; multiplies `c1` under Frobenius.
	const FROBENIUS_COEFF_C1: [Fp<Self::Base, N>; 2];

	/// `a + beta * b` on wide accumulators. The default covers beta = -1.
	fn wide_add_nonresidue_times(
		a: &FpWide<Self::Base, N>,
		b: &FpWide<Self::Base, N>,
	) -> FpWide<Self::Base, N> {
		a.sub_with_offset(b)
	}

	/// `beta * a` in the reduced domain. Default covers beta = -1.
	fn mul_base_by_nonresidue(a: &Fp<Self::Base, N>) -> Fp<Self::Base, N> {
		-*a
	}
}

/// `c0 + c1 u`.
pub struct Fp2<C: Fp2Params<N>, const N: usize> {
	pub c0: Fp<C::Base, N>,
	pub c1: Fp<C::Base, N>,
	_marker: PhantomData<C>,
}

impl<C: Fp2Params<N>, const N: usize> Clone for Fp2<C, N> {
	fn clone(&self) -> Self {
		*self
	}
}
impl<C: Fp2Params<N>, const N: usize> Copy for Fp2<C, N> {}
impl<C: Fp2Params<N>, const N: usize> PartialEq for Fp2<C, N> {
	fn eq(&self, other: &Self) -> bool {
		self.c0 == other.c0 && self.c1 == other.c1
	}
}
impl<C: Fp2Params<N>, const N: usize> Eq for Fp2<C, N> {}

impl<C: Fp2Params<N>, const N: usize> fmt::Debug for Fp2<C, N> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Fp2")
			.field("c0", &self.c0)
			.field("c1", &self.c1)
			.finish()
	}
}

impl<C: Fp2Params<N>, const N: usize> Default for Fp2<C, N> {
	fn default() -> Self {
		Self::ZERO
	}
}

impl<C: Fp2Params<N>, const N: usize> Zeroize for Fp2<C, N> {
	fn zeroize(&mut self) {
		self.c0.zeroize();
		self.c1.zeroize();
	}
}

impl<C: Fp2Params<N>, const N: usize> ConstantTimeEq for Fp2<C, N> {
	fn ct_eq(&self, other: &Self) -> Choice {
		self.c0.ct_eq(&other.c0) & self.c1.ct_eq(&other.c1)
	}
}

impl<C: Fp2Params<N>, const N: usize> ConditionallySelectable for Fp2<C, N> {
	fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
		Self::new(
			Fp::conditional_select(&a.c0, &b.c0, choice),
			Fp::conditional_select(&a.c1, &b.c1, choice),
		)
	}
}

impl<C: Fp2Params<N>, const N: usize> Fp2<C, N> {
	pub const ZERO: Self = Self::new(Fp::ZERO, Fp::ZERO);
	pub const ONE: Self = Self::new(Fp::ONE, Fp::ZERO);

	pub const fn new(c0: Fp<C::Base, N>, c1: Fp<C::Base, N>) -> Self {
		Self { c0, c1, _marker: PhantomData }
	}

	pub fn is_zero(&self) -> bool {
		self.c0.is_zero() && self.c1.is_zero()
	}

	pub fn is_one(&self) -> bool {
		self.c0.is_one() && self.c1.is_zero()
	}

	pub fn conjugate(&self) -> Self {
		Self::new(self.c0, -self.c1)
	}

	pub fn double(&self) -> Self {
		Self::new(self.c0.double(), self.c1.double())
	}

	pub fn mul_by_base(&self, s: &Fp<C::Base, N>) -> Self {
		Self::new(self.c0 * s, self.c1 * s)
	}

	/// Karatsuba with lazy-reduced intermediates: 3 wide products, the two
	/// output coefficients reduced once each.
	fn mul_lazy(&self, rhs: &Self) -> Self {
		let v0 = FpWide::mul_wide(&self.c0, &rhs.c0);
		let v1 = FpWide::mul_wide(&self.c1, &rhs.c1);
		let c0 = C::wide_add_nonresidue_times(&v0, &v1).montgomery_reduce();
		let s = self.c0 + self.c1;
		let t = rhs.c0 + rhs.c1;
		let mut cross = FpWide::mul_wide(&s, &t);
		cross.sub_assign(&v0);
		cross.sub_assign(&v1);
		Self::new(c0, cross.montgomery_reduce())
	}

	/// Complex squaring: 2 base multiplications.
	pub fn square(&self) -> Self {
		let v0 = self.c0 * self.c1;
		let bnr = C::mul_base_by_nonresidue(&self.c1);
		let c0 = (self.c0 + self.c1) * (self.c0 + bnr) - v0 - C::mul_base_by_nonresidue(&v0);
		Self::new(c0, v0.double())
	}

	pub fn square_in_place(&mut self) {
		*self = self.square();
	}

	/// Norm `c0^2 - beta c1^2` in the base field.
	pub fn norm(&self) -> Fp<C::Base, N> {
		self.c0.square() - C::mul_base_by_nonresidue(&self.c1.square())
	}

	pub fn inverse(&self) -> CtOption<Self> {
		self.norm().inverse().map(|n| Self::new(self.c0 * n, -(self.c1 * n)))
	}

	pub fn inverse_vartime(&self) -> Option<Self> {
		let n = self.norm().inverse_vartime()?;
		Some(Self::new(self.c0 * n, -(self.c1 * n)))
	}

	pub fn frobenius_map(&self, power: usize) -> Self {
		Self::new(self.c0, self.c1 * C::FROBENIUS_COEFF_C1[power % 2])
	}

	pub fn pow_vartime<const M: usize>(&self, exp: &BigInt<M>) -> Self {
		let mut res = Self::ONE;
		for i in (0..exp.num_bits() as usize).rev() {
			res = res.square();
			if exp.bit(i) {
				res *= *self;
			}
		}
		res
	}

	/// RFC 9380 sgn0 for the m = 2 extension.
	pub fn sgn0(&self) -> bool {
		let s0 = self.c0.sgn0();
		let z0 = self.c0.is_zero();
		s0 | (z0 & self.c1.sgn0())
	}

	/// Lexicographic order on (c1, c0); the y-sign convention of the
	/// compressed G2 codec.
	pub fn is_lexicographically_largest(&self) -> bool {
		self.c1.is_lexicographically_largest()
			|| (self.c1.is_zero() && self.c0.is_lexicographically_largest())
	}

	/// Square root for p = 3 (mod 4) base fields (both towers qualify).
	pub fn sqrt(&self) -> CtOption<Self> {
		if self.is_zero() {
			return CtOption::new(Self::ZERO, Choice::from(1));
		}
		// a1 = a^((p-3)/4); alpha = a1^2 a; x0 = a1 a
		let exp = Self::p_minus_3_div_4();
		let a1 = self.pow_vartime(&exp);
		let x0 = a1 * *self;
		let alpha = a1 * x0;
		let neg1 = -Self::ONE;
		let cand = if alpha == neg1 {
			// i * x0
			Self::new(-x0.c1, x0.c0)
		} else {
			let exp2 = Self::p_minus_1_div_2();
			(alpha + Self::ONE).pow_vartime(&exp2) * x0
		};
		CtOption::new(cand, cand.square().ct_eq(self))
	}

	fn p_minus_3_div_4() -> BigInt<N> {
		// (p - 3) / 4 = ((p + 1) / 4) - 1
		let mut e = <C::Base as FpParams<N>>::MODULUS_PLUS_ONE_DIV_FOUR;
		e.sub_with_borrow(&BigInt::ONE);
		e
	}

	fn p_minus_1_div_2() -> BigInt<N> {
		<C::Base as FpParams<N>>::MODULUS_MINUS_ONE_DIV_TWO
	}

	pub fn rand<R: RngCore + ?Sized>(rng: &mut R) -> Self {
		Self::new(Fp::rand(rng), Fp::rand(rng))
	}
}

impl<C: Fp2Params<N>, const N: usize> Add for Fp2<C, N> {
	type Output = Self;
	fn add(self, rhs: Self) -> Self {
		Self::new(self.c0 + rhs.c0, self.c1 + rhs.c1)
	}
}
impl<C: Fp2Params<N>, const N: usize> Sub for Fp2<C, N> {
	type Output = Self;
	fn sub(self, rhs: Self) -> Self {
		Self::new(self.c0 - rhs.c0, self.c1 - rhs.c1)
	}
}
impl<C: Fp2Params<N>, const N: usize> Neg for Fp2<C, N> {
	type Output = Self;
	fn neg(self) -> Self {
		Self::new(-self.c0, -self.c1)
	}
}
impl<C: Fp2Params<N>, const N: usize> Mul for Fp2<C, N> {
	type Output = Self;
	fn mul(self, rhs: Self) -> Self {
		self.mul_lazy(&rhs)
	}
}
impl<C: Fp2Params<N>, const N: usize> AddAssign for Fp2<C, N> {
	fn add_assign(&mut self, rhs: Self) {
		*self = *self + rhs;
	}
}
impl<C: Fp2Params<N>, const N: usize> SubAssign for Fp2<C, N> {
	fn sub_assign(&mut self, rhs: Self) {
		*self = *self - rhs;
	}
}
impl<C: Fp2Params<N>, const N: usize> MulAssign for Fp2<C, N> {
	fn mul_assign(&mut self, rhs: Self) {
		*self = *self * rhs;
	}
}

impl<C: Fp2Params<N>, const N: usize> crate::fields::Field for Fp2<C, N> {
	const ZERO: Self = Self::ZERO;
	const ONE: Self = Self::ONE;

	fn double(&self) -> Self {
		Fp2::double(self)
	}
	fn square(&self) -> Self {
		Fp2::square(self)
	}
	fn inverse(&self) -> CtOption<Self> {
		Fp2::inverse(self)
	}
	fn inverse_vartime(&self) -> Option<Self> {
		Fp2::inverse_vartime(self)
	}
	fn is_zero(&self) -> bool {
		Fp2::is_zero(self)
	}
	fn sqrt(&self) -> CtOption<Self> {
		Fp2::sqrt(self)
	}
	fn sgn0(&self) -> bool {
		Fp2::sgn0(self)
	}
	fn is_lexicographically_largest(&self) -> bool {
		Fp2::is_lexicographically_largest(self)
	}
	fn rand<R: RngCore + ?Sized>(rng: &mut R) -> Self {
		Fp2::rand(rng)
	}
}
