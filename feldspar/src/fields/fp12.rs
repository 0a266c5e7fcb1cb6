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

//! `Fp12 = Fp6[w] / (w^2 - v)`: the pairing target field.
//!
//! Besides the generic quadratic arithmetic this level carries the sparse
//! products used to fold Miller-loop lines into the accumulator and the
//! Granger-Scott cyclotomic squaring used by the final exponentiation.

use core::fmt;
use core::marker::PhantomData;
use core::ops::{Add, Mul, MulAssign, Neg, Sub};

use rand_core::RngCore;
use subtle::CtOption;
use zeroize::Zeroize;

use crate::arith::BigInt;
use crate::fields::fp2::Fp2;
use crate::fields::fp6::{Fp6, Fp6Params};

/// Description of the top level: Frobenius data for `w`.
pub trait Fp12Params<const N: usize>: 'static + Copy + Send + Sync + fmt::Debug {
	type Cubic: Fp6Params<N>;
	/// `xi^((p^i - 1)/6)` for i in 0..12; multiplies the `c1` half under
	/// the i-th Frobenius power.
	const FROBENIUS_COEFF_C1: [Fp2<<Self::Cubic as Fp6Params<N>>::Quad, N>; 12];
}

type Q<C, const N: usize> = <<C as Fp12Params<N>>::Cubic as Fp6Params<N>>::Quad;

/// `c0 + c1 w`.
pub struct Fp12<C: Fp12Params<N>, const N: usize> {
	pub c0: Fp6<C::Cubic, N>,
	pub c1: Fp6<C::Cubic, N>,
	_marker: PhantomData<C>,
}

impl<C: Fp12Params<N>, const N: usize> Clone for Fp12<C, N> {
	fn clone(&self) -> Self {
		*self
	}
}
impl<C: Fp12Params<N>, const N: usize> Copy for Fp12<C, N> {}
impl<C: Fp12Params<N>, const N: usize> PartialEq for Fp12<C, N> {
	fn eq(&self, other: &Self) -> bool {
		self.c0 == other.c0 && self.c1 == other.c1
	}
}
impl<C: Fp12Params<N>, const N: usize> Eq for Fp12<C, N> {}

impl<C: Fp12Params<N>, const N: usize> fmt::Debug for Fp12<C, N> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Fp12")
			.field("c0", &self.c0)
			.field("c1", &self.c1)
			.finish()
	}
}

impl<C: Fp12Params<N>, const N: usize> Default for Fp12<C, N> {
	fn default() -> Self {
		Self::ONE
	}
}

impl<C: Fp12Params<N>, const N: usize> Zeroize for Fp12<C, N> {
	fn zeroize(&mut self) {
		self.c0.zeroize();
		self.c1.zeroize();
	}
}

impl<C: Fp12Params<N>, const N: usize> Fp12<C, N> {
	pub const ZERO: Self = Self::new(Fp6::ZERO, Fp6::ZERO);
	pub const ONE: Self = Self::new(Fp6::ONE, Fp6::ZERO);

	pub const fn new(c0: Fp6<C::Cubic, N>, c1: Fp6<C::Cubic, N>) -> Self {
		Self { c0, c1, _marker: PhantomData }
	}

	pub fn is_zero(&self) -> bool {
		self.c0.is_zero() && self.c1.is_zero()
	}

	pub fn is_one(&self) -> bool {
		*self == Self::ONE
	}

	/// Conjugation over `Fp6`; for cyclotomic elements this is inversion.
	pub fn conjugate(&self) -> Self {
		Self::new(self.c0, -self.c1)
	}

	pub fn square(&self) -> Self {
		let t0 = self.c0 * self.c1;
		let c0 = (self.c0 + self.c1) * (self.c0 + self.c1.mul_by_v()) - t0 - t0.mul_by_v();
		Self::new(c0, t0.double())
	}

	pub fn inverse(&self) -> CtOption<Self> {
		(self.c0.square() - self.c1.square().mul_by_v())
			.inverse()
			.map(|t| Self::new(self.c0 * t, -(self.c1 * t)))
	}

	pub fn inverse_vartime(&self) -> Option<Self> {
		let t = (self.c0.square() - self.c1.square().mul_by_v()).inverse_vartime()?;
		Some(Self::new(self.c0 * t, -(self.c1 * t)))
	}

	pub fn frobenius_map(&self, power: usize) -> Self {
		let c0 = self.c0.frobenius_map(power);
		let c1 = self.c1.frobenius_map(power);
		let g = C::FROBENIUS_COEFF_C1[power % 12];
		Self::new(c0, Fp6::new(c1.c0 * g, c1.c1 * g, c1.c2 * g))
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

	// ---- sparse products ----

	/// Multiplies by an element with coefficients `(d0, d1 v) + (d4 v) w`,
	/// the shape of an M-twist line.
	pub fn mul_by_014(
		&mut self,
		d0: &Fp2<Q<C, N>, N>,
		d1: &Fp2<Q<C, N>, N>,
		d4: &Fp2<Q<C, N>, N>,
	) {
		let aa = self.c0.mul_by_01(d0, d1);
		let bb = self.c1.mul_by_1(d4);
		let d1d4 = *d1 + *d4;
		let c1 = (self.c0 + self.c1).mul_by_01(d0, &d1d4) - aa - bb;
		*self = Self::new(bb.mul_by_v() + aa, c1);
	}

	/// Multiplies by an element with coefficients `d0 + (d3 + d4 v) w`,
	/// the shape of a D-twist line.
	pub fn mul_by_034(
		&mut self,
		d0: &Fp2<Q<C, N>, N>,
		d3: &Fp2<Q<C, N>, N>,
		d4: &Fp2<Q<C, N>, N>,
	) {
		let aa = self.c0.mul_by_fp2(d0);
		let bb = self.c1.mul_by_01(d3, d4);
		let d0d3 = *d0 + *d3;
		let c1 = (self.c0 + self.c1).mul_by_01(&d0d3, d4) - aa - bb;
		*self = Self::new(bb.mul_by_v() + aa, c1);
	}

	/// Product of two M-twist lines; the result is still sparse enough to
	/// be worth the dedicated routine (5 Fp2 multiplications).
	pub fn line_product_014(
		c: (&Fp2<Q<C, N>, N>, &Fp2<Q<C, N>, N>, &Fp2<Q<C, N>, N>),
		d: (&Fp2<Q<C, N>, N>, &Fp2<Q<C, N>, N>, &Fp2<Q<C, N>, N>),
	) -> Self {
		let (c0, c1, c4) = c;
		let (d0, d1, d4) = d;
		let x0 = *c0 * *d0;
		let x1 = *c1 * *d1;
		let x4 = *c4 * *d4;
		let x04 = (*c0 + *c4) * (*d0 + *d4) - x0 - x4;
		let x01 = (*c0 + *c1) * (*d0 + *d1) - x0 - x1;
		let x14 = (*c1 + *c4) * (*d1 + *d4) - x1 - x4;
		let z00 = <C::Cubic as Fp6Params<N>>::mul_fp2_by_nonresidue(&x4) + x0;
		Self::new(Fp6::new(z00, x01, x1), Fp6::new(Fp2::ZERO, x04, x14))
	}

	/// Product of two D-twist lines.
	pub fn line_product_034(
		c: (&Fp2<Q<C, N>, N>, &Fp2<Q<C, N>, N>, &Fp2<Q<C, N>, N>),
		d: (&Fp2<Q<C, N>, N>, &Fp2<Q<C, N>, N>, &Fp2<Q<C, N>, N>),
	) -> Self {
		let (c0, c3, c4) = c;
		let (d0, d3, d4) = d;
		let x00 = *c0 * *d0;
		let x33 = *c3 * *d3;
		let x44 = *c4 * *d4;
		let x03 = (*c0 + *c3) * (*d0 + *d3) - x00 - x33;
		let x04 = (*c0 + *c4) * (*d0 + *d4) - x00 - x44;
		let x34 = (*c3 + *c4) * (*d3 + *d4) - x33 - x44;
		let z00 = <C::Cubic as Fp6Params<N>>::mul_fp2_by_nonresidue(&x44) + x00;
		Self::new(Fp6::new(z00, x33, x34), Fp6::new(x03, x04, Fp2::ZERO))
	}

	// ---- cyclotomic subgroup ----

	/// Granger-Scott squaring; valid only on cyclotomic elements.
	pub fn cyclotomic_square(&self) -> Self {
		// z-indexing: (z0, z1) (z2, z3) (z4, z5) are Fp4 pairs
		let z0 = self.c0.c0;
		let z4 = self.c0.c1;
		let z3 = self.c0.c2;
		let z2 = self.c1.c0;
		let z1 = self.c1.c1;
		let z5 = self.c1.c2;
		let (t0, t1) = Self::fp4_square(&z0, &z1);
		let z0n = (t0 - z0).double() + t0;
		let z1n = (t1 + z1).double() + t1;
		let (t0b, t1b) = Self::fp4_square(&z2, &z3);
		let (t2, t3) = Self::fp4_square(&z4, &z5);
		let z4n = (t0b - z4).double() + t0b;
		let z5n = (t1b + z5).double() + t1b;
		let t0x = <C::Cubic as Fp6Params<N>>::mul_fp2_by_nonresidue(&t3);
		let z2n = (t0x + z2).double() + t0x;
		let z3n = (t2 - z3).double() + t2;
		Self::new(Fp6::new(z0n, z4n, z3n), Fp6::new(z2n, z1n, z5n))
	}

	fn fp4_square(
		a: &Fp2<Q<C, N>, N>,
		b: &Fp2<Q<C, N>, N>,
	) -> (Fp2<Q<C, N>, N>, Fp2<Q<C, N>, N>) {
		let t0 = a.square();
		let t1 = b.square();
		(
			t0 + <C::Cubic as Fp6Params<N>>::mul_fp2_by_nonresidue(&t1),
			(*a + *b).square() - t0 - t1,
		)
	}

	/// Exponentiation by a public exponent using cyclotomic squarings.
	/// Valid only on cyclotomic elements.
	pub fn cyclotomic_exp_vartime<const M: usize>(&self, exp: &BigInt<M>) -> Self {
		let mut res = Self::ONE;
		for i in (0..exp.num_bits() as usize).rev() {
			res = res.cyclotomic_square();
			if exp.bit(i) {
				res *= *self;
			}
		}
		res
	}

	pub fn rand<R: RngCore + ?Sized>(rng: &mut R) -> Self {
		Self::new(Fp6::rand(rng), Fp6::rand(rng))
	}
}

impl<C: Fp12Params<N>, const N: usize> Add for Fp12<C, N> {
	type Output = Self;
	fn add(self, rhs: Self) -> Self {
		Self::new(self.c0 + rhs.c0, self.c1 + rhs.c1)
	}
}
impl<C: Fp12Params<N>, const N: usize> Sub for Fp12<C, N> {
	type Output = Self;
	fn sub(self, rhs: Self) -> Self {
		Self::new(self.c0 - rhs.c0, self.c1 - rhs.c1)
	}
}
impl<C: Fp12Params<N>, const N: usize> Neg for Fp12<C, N> {
	type Output = Self;
	fn neg(self) -> Self {
		Self::new(-self.c0, -self.c1)
	}
}
impl<C: Fp12Params<N>, const N: usize> Mul for Fp12<C, N> {
	type Output = Self;
	fn mul(self, rhs: Self) -> Self {
		let t0 = self.c0 * rhs.c0;
		let t1 = self.c1 * rhs.c1;
		let c1 = (self.c0 + self.c1) * (rhs.c0 + rhs.c1) - t0 - t1;
		Self::new(t0 + t1.mul_by_v(), c1)
	}
}
impl<C: Fp12Params<N>, const N: usize> MulAssign for Fp12<C, N> {
	fn mul_assign(&mut self, rhs: Self) {
		*self = *self * rhs;
	}
}
