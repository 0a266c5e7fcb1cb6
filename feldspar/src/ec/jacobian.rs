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

//! Jacobian (X, Y, Z) and extended Jacobian (X, Y, ZZ, ZZZ) points.
//!
//! These are the variable-time representations: additions branch on the
//! neutral element and on P = +-Q, which is exactly what the batched and
//! bucket-based code paths want for public data. Constant-time callers use
//! the complete projective formulas instead.

use core::fmt;
use core::marker::PhantomData;
use core::ops::Neg;

use crate::ec::{Affine, SWCurveConfig};
use crate::fields::Field;

/// `x = X/Z^2, y = Y/Z^3`; `Z = 0` is the neutral element.
pub struct Jacobian<C: SWCurveConfig> {
	pub x: C::Base,
	pub y: C::Base,
	pub z: C::Base,
	_marker: PhantomData<C>,
}

impl<C: SWCurveConfig> Clone for Jacobian<C> {
	fn clone(&self) -> Self {
		*self
	}
}
impl<C: SWCurveConfig> Copy for Jacobian<C> {}

impl<C: SWCurveConfig> fmt::Debug for Jacobian<C> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Jacobian")
			.field("x", &self.x)
			.field("y", &self.y)
			.field("z", &self.z)
			.finish()
	}
}

impl<C: SWCurveConfig> PartialEq for Jacobian<C> {
	fn eq(&self, other: &Self) -> bool {
		let z1z = self.z.is_zero();
		let z2z = other.z.is_zero();
		if z1z || z2z {
			return z1z == z2z;
		}
		let z1_2 = self.z.square();
		let z2_2 = other.z.square();
		self.x * z2_2 == other.x * z1_2
			&& self.y * z2_2 * other.z == other.y * z1_2 * self.z
	}
}
impl<C: SWCurveConfig> Eq for Jacobian<C> {}

impl<C: SWCurveConfig> From<Affine<C>> for Jacobian<C> {
	fn from(p: Affine<C>) -> Self {
		if p.infinity {
			Self::identity()
		} else {
			Self { x: p.x, y: p.y, z: C::Base::ONE, _marker: PhantomData }
		}
	}
}

impl<C: SWCurveConfig> Jacobian<C> {
	pub const fn new_unchecked(x: C::Base, y: C::Base, z: C::Base) -> Self {
		Self { x, y, z, _marker: PhantomData }
	}

	pub const fn identity() -> Self {
		Self { x: C::Base::ONE, y: C::Base::ONE, z: C::Base::ZERO, _marker: PhantomData }
	}

	pub fn is_identity(&self) -> bool {
		self.z.is_zero()
	}

	pub fn is_on_curve(&self) -> bool {
		if self.is_identity() {
			return true;
		}
		// y^2 = x^3 + a x z^4 + b z^6
		let z2 = self.z.square();
		let z4 = z2.square();
		self.y.square() == (self.x.square() + C::A * z4) * self.x + C::B * z4 * z2
	}

	/// dbl-2009-l; requires a = 0.
	pub fn double(&self) -> Self {
		debug_assert!(C::A.is_zero());
		let a = self.x.square();
		let b = self.y.square();
		let c = b.square();
		let d = ((self.x + b).square() - a - c).double();
		let e = a.double() + a;
		let f = e.square();
		let x3 = f - d.double();
		let c8 = c.double().double().double();
		let y3 = e * (d - x3) - c8;
		let z3 = (self.y * self.z).double();
		Self::new_unchecked(x3, y3, z3)
	}

	/// add-2007-bl with the neutral and P = +-Q cases branched explicitly.
	pub fn add_vartime(&self, rhs: &Self) -> Self {
		if self.is_identity() {
			return *rhs;
		}
		if rhs.is_identity() {
			return *self;
		}
		let z1z1 = self.z.square();
		let z2z2 = rhs.z.square();
		let u1 = self.x * z2z2;
		let u2 = rhs.x * z1z1;
		let s1 = self.y * rhs.z * z2z2;
		let s2 = rhs.y * self.z * z1z1;
		if u1 == u2 {
			if s1 == s2 {
				return self.double();
			}
			return Self::identity();
		}
		let h = u2 - u1;
		let i = h.double().square();
		let j = h * i;
		let r = (s2 - s1).double();
		let v = u1 * i;
		let x3 = r.square() - j - v.double();
		let y3 = r * (v - x3) - (s1 * j).double();
		let z3 = ((self.z + rhs.z).square() - z1z1 - z2z2) * h;
		Self::new_unchecked(x3, y3, z3)
	}

	/// madd-2007-bl: mixed addition saving the Z2 = 1 multiplications.
	pub fn mixed_add_vartime(&self, rhs: &Affine<C>) -> Self {
		if rhs.infinity {
			return *self;
		}
		if self.is_identity() {
			return (*rhs).into();
		}
		let z1z1 = self.z.square();
		let u2 = rhs.x * z1z1;
		let s2 = rhs.y * self.z * z1z1;
		if self.x == u2 {
			if self.y == s2 {
				return self.double();
			}
			return Self::identity();
		}
		let h = u2 - self.x;
		let hh = h.square();
		let i = hh.double().double();
		let j = h * i;
		let r = (s2 - self.y).double();
		let v = self.x * i;
		let x3 = r.square() - j - v.double();
		let y3 = r * (v - x3) - (self.y * j).double();
		let z3 = (self.z + h).square() - z1z1 - hh;
		Self::new_unchecked(x3, y3, z3)
	}

	pub fn to_affine_vartime(&self) -> Affine<C> {
		match self.z.inverse_vartime() {
			None => Affine::identity(),
			Some(zinv) => {
				let zinv2 = zinv.square();
				Affine::new_unchecked(self.x * zinv2, self.y * zinv2 * zinv)
			}
		}
	}
}

impl<C: SWCurveConfig> Neg for Jacobian<C> {
	type Output = Self;
	fn neg(self) -> Self {
		Self::new_unchecked(self.x, -self.y, self.z)
	}
}

/// Extended Jacobian: `x = X/ZZ, y = Y/ZZZ` with `ZZ^3 = ZZZ^2`.
/// Saves work in repeated mixed additions (bucket accumulation).
pub struct JacExt<C: SWCurveConfig> {
	pub x: C::Base,
	pub y: C::Base,
	pub zz: C::Base,
	pub zzz: C::Base,
	_marker: PhantomData<C>,
}

impl<C: SWCurveConfig> Clone for JacExt<C> {
	fn clone(&self) -> Self {
		*self
	}
}
impl<C: SWCurveConfig> Copy for JacExt<C> {}

impl<C: SWCurveConfig> fmt::Debug for JacExt<C> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("JacExt")
			.field("x", &self.x)
			.field("y", &self.y)
			.field("zz", &self.zz)
			.field("zzz", &self.zzz)
			.finish()
	}
}

impl<C: SWCurveConfig> From<Affine<C>> for JacExt<C> {
	fn from(p: Affine<C>) -> Self {
		if p.infinity {
			Self::identity()
		} else {
			Self { x: p.x, y: p.y, zz: C::Base::ONE, zzz: C::Base::ONE, _marker: PhantomData }
		}
	}
}

impl<C: SWCurveConfig> JacExt<C> {
	pub const fn identity() -> Self {
		Self {
			x: C::Base::ONE,
			y: C::Base::ONE,
			zz: C::Base::ZERO,
			zzz: C::Base::ZERO,
			_marker: PhantomData,
		}
	}

	pub fn is_identity(&self) -> bool {
		self.zz.is_zero()
	}

	pub fn double(&self) -> Self {
		debug_assert!(C::A.is_zero());
		if self.is_identity() {
			return *self;
		}
		let u = self.y.double();
		let v = u.square();
		let w = u * v;
		let s = self.x * v;
		let m = self.x.square();
		let m = m.double() + m;
		let x3 = m.square() - s.double();
		let y3 = m * (s - x3) - w * self.y;
		Self {
			x: x3,
			y: y3,
			zz: v * self.zz,
			zzz: w * self.zzz,
			_marker: PhantomData,
		}
	}

	pub fn mixed_add_vartime(&self, rhs: &Affine<C>) -> Self {
		if rhs.infinity {
			return *self;
		}
		if self.is_identity() {
			return (*rhs).into();
		}
		let u2 = rhs.x * self.zz;
		let s2 = rhs.y * self.zzz;
		if u2 == self.x {
			if s2 == self.y {
				return self.double();
			}
			return Self::identity();
		}
		let p = u2 - self.x;
		let r = s2 - self.y;
		let pp = p.square();
		let ppp = p * pp;
		let q = self.x * pp;
		let x3 = r.square() - ppp - q.double();
		let y3 = r * (q - x3) - self.y * ppp;
		Self {
			x: x3,
			y: y3,
			zz: self.zz * pp,
			zzz: self.zzz * ppp,
			_marker: PhantomData,
		}
	}

	pub fn add_vartime(&self, rhs: &Self) -> Self {
		if self.is_identity() {
			return *rhs;
		}
		if rhs.is_identity() {
			return *self;
		}
		let u1 = self.x * rhs.zz;
		let u2 = rhs.x * self.zz;
		let s1 = self.y * rhs.zzz;
		let s2 = rhs.y * self.zzz;
		if u1 == u2 {
			if s1 == s2 {
				return self.double();
			}
			return Self::identity();
		}
		let p = u2 - u1;
		let r = s2 - s1;
		let pp = p.square();
		let ppp = p * pp;
		let q = u1 * pp;
		let x3 = r.square() - ppp - q.double();
		let y3 = r * (q - x3) - s1 * ppp;
		Self {
			x: x3,
			y: y3,
			zz: self.zz * rhs.zz * pp,
			zzz: self.zzz * rhs.zzz * ppp,
			_marker: PhantomData,
		}
	}

	pub fn to_affine_vartime(&self) -> Affine<C> {
		match self.zzz.inverse_vartime() {
			None => Affine::identity(),
			Some(zzzinv) => {
				// ZZ^3 = ZZZ^2, so ZZ^{-1} = ZZ^2 * ZZZ^{-2}
				let y = self.y * zzzinv;
				let x = self.x * self.zz.square() * zzzinv.square();
				Affine::new_unchecked(x, y)
			}
		}
	}
}

impl<C: SWCurveConfig> Neg for JacExt<C> {
	type Output = Self;
	fn neg(self) -> Self {
		Self { x: self.x, y: -self.y, zz: self.zz, zzz: self.zzz, _marker: PhantomData }
	}
}
