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

//! Affine points; the infinity flag is the only representation of the
//! neutral element in this form.

use core::fmt;
use core::marker::PhantomData;
use core::ops::Neg;

use subtle::{Choice, ConditionallySelectable};

use crate::ec::SWCurveConfig;
use crate::fields::Field;

pub struct Affine<C: SWCurveConfig> {
	pub x: C::Base,
	pub y: C::Base,
	pub infinity: bool,
	_marker: PhantomData<C>,
}

impl<C: SWCurveConfig> Clone for Affine<C> {
	fn clone(&self) -> Self {
		*self
	}
}
impl<C: SWCurveConfig> Copy for Affine<C> {}

impl<C: SWCurveConfig> PartialEq for Affine<C> {
	fn eq(&self, other: &Self) -> bool {
		(self.infinity && other.infinity)
			|| (!self.infinity
				&& !other.infinity
				&& self.x == other.x
				&& self.y == other.y)
	}
}
impl<C: SWCurveConfig> Eq for Affine<C> {}

impl<C: SWCurveConfig> fmt::Debug for Affine<C> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.infinity {
			write!(f, "Affine(infinity)")
		} else {
			f.debug_struct("Affine").field("x", &self.x).field("y", &self.y).finish()
		}
	}
}

impl<C: SWCurveConfig> ConditionallySelectable for Affine<C> {
	fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
		let ia = a.infinity as u8;
		let ib = b.infinity as u8;
		Self {
			x: C::Base::conditional_select(&a.x, &b.x, choice),
			y: C::Base::conditional_select(&a.y, &b.y, choice),
			infinity: ia ^ (choice.unwrap_u8() & (ia ^ ib)) == 1,
			_marker: PhantomData,
		}
	}
}

impl<C: SWCurveConfig> Affine<C> {
	pub const fn new_unchecked(x: C::Base, y: C::Base) -> Self {
		Self { x, y, infinity: false, _marker: PhantomData }
	}

	pub const fn identity() -> Self {
		Self { x: C::Base::ZERO, y: C::Base::ZERO, infinity: true, _marker: PhantomData }
	}

	pub fn generator() -> Self {
		Self::new_unchecked(C::GENERATOR_X, C::GENERATOR_Y)
	}

	pub fn is_identity(&self) -> bool {
		self.infinity
	}

	pub fn is_on_curve(&self) -> bool {
		if self.infinity {
			return true;
		}
		let lhs = self.y.square();
		let rhs = (self.x.square() + C::A) * self.x + C::B;
		lhs == rhs
	}

	/// Subgroup membership with the curve's fastest criterion.
	pub fn is_in_subgroup(&self) -> Choice {
		if self.infinity {
			return Choice::from(1);
		}
		C::is_in_subgroup(self)
	}
}

impl<C: SWCurveConfig> Neg for Affine<C> {
	type Output = Self;
	fn neg(self) -> Self {
		if self.infinity {
			self
		} else {
			Self::new_unchecked(self.x, -self.y)
		}
	}
}
