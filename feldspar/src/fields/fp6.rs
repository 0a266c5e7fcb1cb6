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

//! Cubic extension over [`Fp2`]: `Fp6 = Fp2[v] / (v^3 - xi)`.

use core::fmt;
use core::marker::PhantomData;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use rand_core::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, CtOption};
use zeroize::Zeroize;

use crate::fields::fp2::{Fp2, Fp2Params};

/// Description of the cubic level: the non-residue `xi` and Frobenius data.
pub trait Fp6Params<const N: usize>: 'static + Copy + Send + Sync + fmt::Debug {
	type Quad: Fp2Params<N>;
	/// `xi`, the cubic non-residue in `Fp2`.
	const NONRESIDUE: Fp2<Self::Quad, N>;
	/// `xi^((p^i - 1)/3)` for i in 0..6.
	const FROBENIUS_COEFF_C1: [Fp2<Self::Quad, N>; 6];
	/// `xi^((2 p^i - 2)/3)` for i in 0..6.
	const FROBENIUS_COEFF_C2: [Fp2<Self::Quad, N>; 6];

	/// `xi * a`. Instantiations override with the shift-and-add form.
	fn mul_fp2_by_nonresidue(a: &Fp2<Self::Quad, N>) -> Fp2<Self::Quad, N> {
		Self::NONRESIDUE * *a
	}
}

/// `c0 + c1 v + c2 v^2`.
pub struct Fp6<C: Fp6Params<N>, const N: usize> {
	pub c0: Fp2<C::Quad, N>,
	pub c1: Fp2<C::Quad, N>,
	pub c2: Fp2<C::Quad, N>,
	_marker: PhantomData<C>,
}

impl<C: Fp6Params<N>, const N: usize> Clone for Fp6<C, N> {
	fn clone(&self) -> Self {
		*self
	}
}
impl<C: Fp6Params<N>, const N: usize> Copy for Fp6<C, N> {}
impl<C: Fp6Params<N>, const N: usize> PartialEq for Fp6<C, N> {
	fn eq(&self, other: &Self) -> bool {
		self.c0 == other.c0 && self.c1 == other.c1 && self.c2 == other.c2
	}
}
impl<C: Fp6Params<N>, const N: usize> Eq for Fp6<C, N> {}

impl<C: Fp6Params<N>, const N: usize> fmt::Debug for Fp6<C, N> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Fp6")
			.field("c0", &self.c0)
			.field("c1", &self.c1)
			.field("c2", &self.c2)
			.finish()
	}
}

impl<C: Fp6Params<N>, const N: usize> Default for Fp6<C, N> {
	fn default() -> Self {
		Self::ZERO
	}
}

impl<C: Fp6Params<N>, const N: usize> Zeroize for Fp6<C, N> {
	fn zeroize(&mut self) {
		self.c0.zeroize();
		self.c1.zeroize();
		self.c2.zeroize();
	}
}

impl<C: Fp6Params<N>, const N: usize> ConstantTimeEq for Fp6<C, N> {
	fn ct_eq(&self, other: &Self) -> Choice {
		self.c0.ct_eq(&other.c0) & self.c1.ct_eq(&other.c1) & self.c2.ct_eq(&other.c2)
	}
}

impl<C: Fp6Params<N>, const N: usize> ConditionallySelectable for Fp6<C, N> {
	fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
		Self::new(
			Fp2::conditional_select(&a.c0, &b.c0, choice),
			Fp2::conditional_select(&a.c1, &b.c1, choice),
			Fp2::conditional_select(&a.c2, &b.c2, choice),
		)
	}
}

impl<C: Fp6Params<N>, const N: usize> Fp6<C, N> {
	pub const ZERO: Self = Self::new(Fp2::ZERO, Fp2::ZERO, Fp2::ZERO);
	pub const ONE: Self = Self::new(Fp2::ONE, Fp2::ZERO, Fp2::ZERO);

	pub const fn new(
		c0: Fp2<C::Quad, N>,
		c1: Fp2<C::Quad, N>,
		c2: Fp2<C::Quad, N>,
	) -> Self {
		Self { c0, c1, c2, _marker: PhantomData }
	}

	pub fn is_zero(&self) -> bool {
		self.c0.is_zero() && self.c1.is_zero() && self.c2.is_zero()
	}

	pub fn double(&self) -> Self {
		Self::new(self.c0.double(), self.c1.double(), self.c2.double())
	}

	/// Multiplication by `v`: rotates coefficients through `xi`.
	pub fn mul_by_v(&self) -> Self {
		Self::new(C::mul_fp2_by_nonresidue(&self.c2), self.c0, self.c1)
	}

	pub fn mul_by_fp2(&self, s: &Fp2<C::Quad, N>) -> Self {
		Self::new(self.c0 * *s, self.c1 * *s, self.c2 * *s)
	}

	/// Sparse multiplication by `b0 + b1 v`.
	pub fn mul_by_01(&self, b0: &Fp2<C::Quad, N>, b1: &Fp2<C::Quad, N>) -> Self {
		let a0 = self.c0 * *b0;
		let a1 = self.c1 * *b1;
		let c0 = a0 + C::mul_fp2_by_nonresidue(&((self.c1 + self.c2) * *b1 - a1));
		let c1 = (self.c0 + self.c1) * (*b0 + *b1) - a0 - a1;
		let c2 = (self.c0 + self.c2) * *b0 - a0 + a1;
		Self::new(c0, c1, c2)
	}

	/// Sparse multiplication by `b1 v`.
	pub fn mul_by_1(&self, b1: &Fp2<C::Quad, N>) -> Self {
		Self::new(
			C::mul_fp2_by_nonresidue(&(self.c2 * *b1)),
			self.c0 * *b1,
			self.c1 * *b1,
		)
	}

	/// Chung-Hasan SQR2.
	pub fn square(&self) -> Self {
		let s0 = self.c0.square();
		let ab = self.c0 * self.c1;
		let s1 = ab.double();
		let s2 = (self.c0 - self.c1 + self.c2).square();
		let bc = self.c1 * self.c2;
		let s3 = bc.double();
		let s4 = self.c2.square();
		Self::new(
			s0 + C::mul_fp2_by_nonresidue(&s3),
			s1 + C::mul_fp2_by_nonresidue(&s4),
			s1 + s2 + s3 - s0 - s4,
		)
	}

	pub fn inverse(&self) -> CtOption<Self> {
		let t0 = self.c0.square() - C::mul_fp2_by_nonresidue(&(self.c1 * self.c2));
		let t1 = C::mul_fp2_by_nonresidue(&self.c2.square()) - self.c0 * self.c1;
		let t2 = self.c1.square() - self.c0 * self.c2;
		let det = self.c0 * t0
			+ C::mul_fp2_by_nonresidue(&(self.c2 * t1))
			+ C::mul_fp2_by_nonresidue(&(self.c1 * t2));
		det.inverse().map(|d| Self::new(t0 * d, t1 * d, t2 * d))
	}

	pub fn inverse_vartime(&self) -> Option<Self> {
		let t0 = self.c0.square() - C::mul_fp2_by_nonresidue(&(self.c1 * self.c2));
		let t1 = C::mul_fp2_by_nonresidue(&self.c2.square()) - self.c0 * self.c1;
		let t2 = self.c1.square() - self.c0 * self.c2;
		let det = self.c0 * t0
			+ C::mul_fp2_by_nonresidue(&(self.c2 * t1))
			+ C::mul_fp2_by_nonresidue(&(self.c1 * t2));
		let d = det.inverse_vartime()?;
		Some(Self::new(t0 * d, t1 * d, t2 * d))
	}

	pub fn frobenius_map(&self, power: usize) -> Self {
		Self::new(
			self.c0.frobenius_map(power),
			self.c1.frobenius_map(power) * C::FROBENIUS_COEFF_C1[power % 6],
			self.c2.frobenius_map(power) * C::FROBENIUS_COEFF_C2[power % 6],
		)
	}

	pub fn rand<R: RngCore + ?Sized>(rng: &mut R) -> Self {
		Self::new(Fp2::rand(rng), Fp2::rand(rng), Fp2::rand(rng))
	}
}

impl<C: Fp6Params<N>, const N: usize> Add for Fp6<C, N> {
	type Output = Self;
	fn add(self, rhs: Self) -> Self {
		Self::new(self.c0 + rhs.c0, self.c1 + rhs.c1, self.c2 + rhs.c2)
	}
}
impl<C: Fp6Params<N>, const N: usize> Sub for Fp6<C, N> {
	type Output = Self;
	fn sub(self, rhs: Self) -> Self {
		Self::new(self.c0 - rhs.c0, self.c1 - rhs.c1, self.c2 - rhs.c2)
	}
}
impl<C: Fp6Params<N>, const N: usize> Neg for Fp6<C, N> {
	type Output = Self;
	fn neg(self) -> Self {
		Self::new(-self.c0, -self.c1, -self.c2)
	}
}
impl<C: Fp6Params<N>, const N: usize> Mul for Fp6<C, N> {
	type Output = Self;
	fn mul(self, rhs: Self) -> Self {
		// Karatsuba for the cubic: 6 Fp2 multiplications
		let t0 = self.c0 * rhs.c0;
		let t1 = self.c1 * rhs.c1;
		let t2 = self.c2 * rhs.c2;
		let c0 = t0
			+ C::mul_fp2_by_nonresidue(
				&((self.c1 + self.c2) * (rhs.c1 + rhs.c2) - t1 - t2),
			);
		let c1 = (self.c0 + self.c1) * (rhs.c0 + rhs.c1) - t0 - t1
			+ C::mul_fp2_by_nonresidue(&t2);
		let c2 = (self.c0 + self.c2) * (rhs.c0 + rhs.c2) - t0 - t2 + t1;
		Self::new(c0, c1, c2)
	}
}
impl<C: Fp6Params<N>, const N: usize> AddAssign for Fp6<C, N> {
	fn add_assign(&mut self, rhs: Self) {
		*self = *self + rhs;
	}
}
impl<C: Fp6Params<N>, const N: usize> SubAssign for Fp6<C, N> {
	fn sub_assign(&mut self, rhs: Self) {
		*self = *self - rhs;
	}
}
impl<C: Fp6Params<N>, const N: usize> MulAssign for Fp6<C, N> {
	fn mul_assign(&mut self, rhs: Self) {
		*self = *self * rhs;
	}
}
