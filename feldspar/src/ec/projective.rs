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

//! Homogeneous projective points with the complete Renes-Costello-Batina
//! formulas for a = 0. Completeness means the neutral element and doubling
//! cases need no branches; every instantiated curve in the crate has a = 0.

use core::fmt;
use core::marker::PhantomData;
use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use subtle::{Choice, ConditionallySelectable};

use crate::ec::{Affine, SWCurveConfig};
use crate::fields::Field;

pub struct Projective<C: SWCurveConfig> {
	pub x: C::Base,
	pub y: C::Base,
	pub z: C::Base,
	_marker: PhantomData<C>,
}

impl<C: SWCurveConfig> Clone for Projective<C> {
	fn clone(&self) -> Self {
		*self
	}
}
impl<C: SWCurveConfig> Copy for Projective<C> {}

impl<C: SWCurveConfig> fmt::Debug for Projective<C> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Projective")
			.field("x", &self.x)
			.field("y", &self.y)
			.field("z", &self.z)
			.finish()
	}
}

impl<C: SWCurveConfig> PartialEq for Projective<C> {
	fn eq(&self, other: &Self) -> bool {
		// cross-multiplied comparison; Z = 0 only matches Z = 0
		let z1z = self.z.is_zero();
		let z2z = other.z.is_zero();
		if z1z || z2z {
			return z1z == z2z;
		}
		self.x * other.z == other.x * self.z && self.y * other.z == other.y * self.z
	}
}
impl<C: SWCurveConfig> Eq for Projective<C> {}

impl<C: SWCurveConfig> ConditionallySelectable for Projective<C> {
	fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
		Self {
			x: C::Base::conditional_select(&a.x, &b.x, choice),
			y: C::Base::conditional_select(&a.y, &b.y, choice),
			z: C::Base::conditional_select(&a.z, &b.z, choice),
			_marker: PhantomData,
		}
	}
}

impl<C: SWCurveConfig> From<Affine<C>> for Projective<C> {
	fn from(p: Affine<C>) -> Self {
		let z = C::Base::conditional_select(
			&C::Base::ONE,
			&C::Base::ZERO,
			Choice::from(p.infinity as u8),
		);
		let y = C::Base::conditional_select(&p.y, &C::Base::ONE, Choice::from(p.infinity as u8));
		Self { x: p.x, y, z, _marker: PhantomData }
	}
}

impl<C: SWCurveConfig> Projective<C> {
	pub const fn new_unchecked(x: C::Base, y: C::Base, z: C::Base) -> Self {
		Self { x, y, z, _marker: PhantomData }
	}

	/// The neutral element: (0 : 1 : 0).
	pub const fn identity() -> Self {
		Self { x: C::Base::ZERO, y: C::Base::ONE, z: C::Base::ZERO, _marker: PhantomData }
	}

	pub fn generator() -> Self {
		Affine::<C>::generator().into()
	}

	pub fn is_identity(&self) -> bool {
		self.z.is_zero()
	}

	pub fn is_on_curve(&self) -> bool {
		// y^2 z = x^3 + a x z^2 + b z^3
		let lhs = self.y.square() * self.z;
		let rhs = (self.x.square() + C::A * self.z.square()) * self.x
			+ C::B * self.z.square() * self.z;
		lhs == rhs
	}

	fn b3() -> C::Base {
		C::B.double() + C::B
	}

	/// Complete addition (RCB 2015, algorithm 7); no branches on inputs.
	pub fn add_complete(&self, rhs: &Self) -> Self {
		debug_assert!(C::A.is_zero());
		let b3 = Self::b3();
		let (x1, y1, z1) = (self.x, self.y, self.z);
		let (x2, y2, z2) = (rhs.x, rhs.y, rhs.z);

		let t0 = x1 * x2;
		let t1 = y1 * y2;
		let t2 = z1 * z2;
		let mut t3 = x1 + y1;
		let t4 = x2 + y2;
		t3 *= t4;
		let t4 = t0 + t1;
		t3 -= t4;
		let mut t4 = y1 + z1;
		let mut x3 = y2 + z2;
		t4 *= x3;
		x3 = t1 + t2;
		t4 -= x3;
		x3 = x1 + z1;
		let mut y3 = x2 + z2;
		x3 *= y3;
		y3 = t0 + t2;
		y3 = x3 - y3;
		x3 = t0 + t0;
		let t0 = x3 + t0;
		let t2 = b3 * t2;
		let mut z3 = t1 + t2;
		let t1 = t1 - t2;
		y3 = b3 * y3;
		x3 = t4 * y3;
		let t2 = t3 * t1;
		x3 = t2 - x3;
		y3 *= t0;
		let t1 = t1 * z3;
		y3 = t1 + y3;
		let t0 = t0 * t3;
		z3 *= t4;
		z3 = z3 + t0;
		Self::new_unchecked(x3, y3, z3)
	}

	/// Complete mixed addition (RCB algorithm 8); `rhs` must not be the
	/// affine identity - callers mask that case out.
	pub fn mixed_add_complete(&self, rhs: &Affine<C>) -> Self {
		debug_assert!(C::A.is_zero());
		debug_assert!(!rhs.infinity);
		let b3 = Self::b3();
		let (x1, y1, z1) = (self.x, self.y, self.z);
		let (x2, y2) = (rhs.x, rhs.y);

		let t0 = x1 * x2;
		let t1 = y1 * y2;
		let mut t3 = x2 + y2;
		let t4 = x1 + y1;
		t3 *= t4;
		let t4 = t0 + t1;
		t3 -= t4;
		let mut t4 = x2 * z1;
		t4 += x1;
		let mut t5 = y2 * z1;
		t5 += y1;
		let mut x3 = t0 + t0;
		let t0 = x3 + t0;
		let t2 = b3 * z1;
		let mut z3 = t1 + t2;
		let t1 = t1 - t2;
		let mut y3 = b3 * t4;
		x3 = t5 * y3;
		let t2 = t3 * t1;
		x3 = t2 - x3;
		y3 *= t0;
		let t1 = t1 * z3;
		y3 = t1 + y3;
		let t0 = t0 * t3;
		z3 *= t5;
		z3 = z3 + t0;
		Self::new_unchecked(x3, y3, z3)
	}

	/// Complete doubling (RCB algorithm 9).
	pub fn double(&self) -> Self {
		debug_assert!(C::A.is_zero());
		let b3 = Self::b3();
		let (x, y, z) = (self.x, self.y, self.z);

		let t0 = y.square();
		let mut z3 = t0 + t0;
		z3 = z3 + z3;
		z3 = z3 + z3;
		let t1 = y * z;
		let mut t2 = z.square();
		t2 = b3 * t2;
		let mut x3 = t2 * z3;
		let mut y3 = t0 + t2;
		z3 = t1 * z3;
		let t1 = t2 + t2;
		let t2 = t1 + t2;
		let t0 = t0 - t2;
		y3 = t0 * y3;
		y3 = x3 + y3;
		let t1 = x * y;
		x3 = t0 * t1;
		x3 = x3 + x3;
		Self::new_unchecked(x3, y3, z3)
	}

	/// Addition with explicit short-circuits; for public inputs only.
	pub fn add_vartime(&self, rhs: &Self) -> Self {
		if self.is_identity() {
			return *rhs;
		}
		if rhs.is_identity() {
			return *self;
		}
		self.add_complete(rhs)
	}

	/// Mixed addition with explicit short-circuits; for public inputs only.
	pub fn mixed_add_vartime(&self, rhs: &Affine<C>) -> Self {
		if rhs.infinity {
			return *self;
		}
		if self.is_identity() {
			return (*rhs).into();
		}
		self.mixed_add_complete(rhs)
	}

	pub fn neg_in_place(&mut self) {
		self.y = -self.y;
	}

	/// Constant-time conversion; one field inversion.
	pub fn to_affine(&self) -> Affine<C> {
		let inv = self.z.inverse(); // None only at identity
		let is_id = Choice::from(self.is_identity() as u8);
		let zinv = inv.unwrap_or(C::Base::ZERO);
		let p = Affine::new_unchecked(self.x * zinv, self.y * zinv);
		Affine::conditional_select(&p, &Affine::identity(), is_id)
	}

	pub fn to_affine_vartime(&self) -> Affine<C> {
		match self.z.inverse_vartime() {
			None => Affine::identity(),
			Some(zinv) => Affine::new_unchecked(self.x * zinv, self.y * zinv),
		}
	}
}

impl<C: SWCurveConfig> Add for Projective<C> {
	type Output = Self;
	fn add(self, rhs: Self) -> Self {
		self.add_complete(&rhs)
	}
}
impl<C: SWCurveConfig> AddAssign for Projective<C> {
	fn add_assign(&mut self, rhs: Self) {
		*self = self.add_complete(&rhs);
	}
}
impl<C: SWCurveConfig> Sub for Projective<C> {
	type Output = Self;
	fn sub(self, rhs: Self) -> Self {
		self.add_complete(&-rhs)
	}
}
impl<C: SWCurveConfig> SubAssign for Projective<C> {
	fn sub_assign(&mut self, rhs: Self) {
		*self = *self - rhs;
	}
}
impl<C: SWCurveConfig> Neg for Projective<C> {
	type Output = Self;
	fn neg(self) -> Self {
		Self::new_unchecked(self.x, -self.y, self.z)
	}
}
