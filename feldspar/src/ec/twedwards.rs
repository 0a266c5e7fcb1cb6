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

//! Twisted Edwards curves `a x^2 + y^2 = 1 + d x^2 y^2` in extended
//! coordinates (X : Y : T : Z) with X Y = T Z.
//!
//! The unified Hisil-Wong-Carter-Dawson addition is complete when `a` is a
//! square and `d` is not, which holds for the instantiated curve; the
//! same formula therefore serves the constant-time ladder without special
//! cases.

use core::fmt::Debug;
use core::marker::PhantomData;
use core::ops::Neg;

use subtle::{Choice, ConditionallySelectable};

use crate::arith::BigInt;
use crate::fields::Field;

/// Compile-time description of a twisted Edwards curve.
pub trait TeCurveConfig: 'static + Copy + Send + Sync + Debug + Sized {
	type Base: Field;

	const A: Self::Base;
	const D: Self::Base;
	const GENERATOR_X: Self::Base;
	const GENERATOR_Y: Self::Base;
	/// Order of the prime subgroup.
	const ORDER: BigInt<4>;
}

/// Affine twisted Edwards point; `(0, 1)` is the neutral element, so no
/// infinity flag is needed.
pub struct TeAffine<C: TeCurveConfig> {
	pub x: C::Base,
	pub y: C::Base,
	_marker: PhantomData<C>,
}

impl<C: TeCurveConfig> Clone for TeAffine<C> {
	fn clone(&self) -> Self {
		*self
	}
}
impl<C: TeCurveConfig> Copy for TeAffine<C> {}
impl<C: TeCurveConfig> PartialEq for TeAffine<C> {
	fn eq(&self, other: &Self) -> bool {
		self.x == other.x && self.y == other.y
	}
}
impl<C: TeCurveConfig> Eq for TeAffine<C> {}

impl<C: TeCurveConfig> Debug for TeAffine<C> {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("TeAffine").field("x", &self.x).field("y", &self.y).finish()
	}
}

impl<C: TeCurveConfig> TeAffine<C> {
	pub const fn new_unchecked(x: C::Base, y: C::Base) -> Self {
		Self { x, y, _marker: PhantomData }
	}

	pub const fn identity() -> Self {
		Self::new_unchecked(C::Base::ZERO, C::Base::ONE)
	}

	pub fn generator() -> Self {
		Self::new_unchecked(C::GENERATOR_X, C::GENERATOR_Y)
	}

	pub fn is_identity(&self) -> bool {
		self.x.is_zero() && self.y == C::Base::ONE
	}

	pub fn is_on_curve(&self) -> bool {
		let x2 = self.x.square();
		let y2 = self.y.square();
		C::A * x2 + y2 == C::Base::ONE + C::D * x2 * y2
	}
}

impl<C: TeCurveConfig> Neg for TeAffine<C> {
	type Output = Self;
	fn neg(self) -> Self {
		Self::new_unchecked(-self.x, self.y)
	}
}

/// Extended projective coordinates.
pub struct TeExtended<C: TeCurveConfig> {
	pub x: C::Base,
	pub y: C::Base,
	pub t: C::Base,
	pub z: C::Base,
	_marker: PhantomData<C>,
}

impl<C: TeCurveConfig> Clone for TeExtended<C> {
	fn clone(&self) -> Self {
		*self
	}
}
impl<C: TeCurveConfig> Copy for TeExtended<C> {}

impl<C: TeCurveConfig> Debug for TeExtended<C> {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("TeExtended")
			.field("x", &self.x)
			.field("y", &self.y)
			.field("t", &self.t)
			.field("z", &self.z)
			.finish()
	}
}

impl<C: TeCurveConfig> PartialEq for TeExtended<C> {
	fn eq(&self, other: &Self) -> bool {
		// (x1 z2 == x2 z1) and (y1 z2 == y2 z1)
		self.x * other.z == other.x * self.z && self.y * other.z == other.y * self.z
	}
}
impl<C: TeCurveConfig> Eq for TeExtended<C> {}

impl<C: TeCurveConfig> From<TeAffine<C>> for TeExtended<C> {
	fn from(p: TeAffine<C>) -> Self {
		Self { x: p.x, y: p.y, t: p.x * p.y, z: C::Base::ONE, _marker: PhantomData }
	}
}

impl<C: TeCurveConfig> ConditionallySelectable for TeExtended<C> {
	fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
		Self {
			x: C::Base::conditional_select(&a.x, &b.x, choice),
			y: C::Base::conditional_select(&a.y, &b.y, choice),
			t: C::Base::conditional_select(&a.t, &b.t, choice),
			z: C::Base::conditional_select(&a.z, &b.z, choice),
			_marker: PhantomData,
		}
	}
}

impl<C: TeCurveConfig> TeExtended<C> {
	pub const fn identity() -> Self {
		Self {
			x: C::Base::ZERO,
			y: C::Base::ONE,
			t: C::Base::ZERO,
			z: C::Base::ONE,
			_marker: PhantomData,
		}
	}

	pub fn is_identity(&self) -> bool {
		self.x.is_zero() && self.y == self.z
	}

	/// Unified complete addition (HWCD 2008).
	pub fn add(&self, rhs: &Self) -> Self {
		let a = self.x * rhs.x;
		let b = self.y * rhs.y;
		let c = C::D * self.t * rhs.t;
		let d = self.z * rhs.z;
		let e = (self.x + self.y) * (rhs.x + rhs.y) - a - b;
		let f = d - c;
		let g = d + c;
		let h = b - C::A * a;
		Self {
			x: e * f,
			y: g * h,
			t: e * h,
			z: f * g,
			_marker: PhantomData,
		}
	}

	/// Dedicated doubling (dbl-2008-hwcd).
	pub fn double(&self) -> Self {
		let a = self.x.square();
		let b = self.y.square();
		let c = self.z.square().double();
		let d = C::A * a;
		let e = (self.x + self.y).square() - a - b;
		let g = d + b;
		let f = g - c;
		let h = d - b;
		Self {
			x: e * f,
			y: g * h,
			t: e * h,
			z: f * g,
			_marker: PhantomData,
		}
	}

	pub fn mixed_add(&self, rhs: &TeAffine<C>) -> Self {
		self.add(&Self::from(*rhs))
	}

	/// Constant-time fixed-window ladder; the complete addition needs no
	/// masking beyond the table lookup.
	pub fn mul_ct(&self, k: &BigInt<4>) -> Self {
		let mut table = [Self::identity(); 16];
		for i in 1..16 {
			table[i] = table[i - 1].add(self);
		}
		let mut acc = Self::identity();
		for w in (0..64).rev() {
			for _ in 0..4 {
				acc = acc.double();
			}
			let limb = k.0[w / 16];
			let nibble = (limb >> ((w % 16) * 4)) & 0xf;
			let mut sel = Self::identity();
			for (i, entry) in table.iter().enumerate() {
				let hit = Choice::from((nibble == i as u64) as u8);
				sel = Self::conditional_select(&sel, entry, hit);
			}
			acc = acc.add(&sel);
		}
		acc
	}

	pub fn to_affine_vartime(&self) -> TeAffine<C> {
		match self.z.inverse_vartime() {
			None => TeAffine::identity(), // unreachable: z never vanishes
			Some(zi) => TeAffine::new_unchecked(self.x * zi, self.y * zi),
		}
	}
}

impl<C: TeCurveConfig> Neg for TeExtended<C> {
	type Output = Self;
	fn neg(self) -> Self {
		Self { x: -self.x, y: self.y, t: -self.t, z: self.z, _marker: PhantomData }
	}
}

/// Jubjub: a = -1 over the BLS12-381 scalar field; the crate's
/// twisted-Edwards instantiation.
pub mod jubjub {
	use super::{TeAffine, TeCurveConfig, TeExtended};
	use crate::arith::BigInt;
	use crate::curves::bls12_381::Fr;

	#[derive(Clone, Copy, Debug)]
	pub struct JubjubConfig;

	impl TeCurveConfig for JubjubConfig {
		type Base = Fr;

		const A: Fr = Fr::from_montgomery_unchecked(BigInt([
			0xfffffffd00000003,
			0xfb38ec08fffb13fc,
			0x99ad88181ce5880f,
			0x5bc8f5f97cd877d8,
		]));
		const D: Fr = Fr::from_montgomery_unchecked(BigInt([
			0x2a522455b974f6b0,
			0xfc6cc9ef0d9acab3,
			0x7a08fb94c27628d1,
			0x57f8f6a8fe0e262e,
		]));
		const GENERATOR_X: Fr = Fr::from_montgomery_unchecked(BigInt([
			0x194403d9f1b16aea,
			0xba69afc422ae3304,
			0xeb2793abbe96f006,
			0x4585d3fa1ff6da72,
		]));
		const GENERATOR_Y: Fr = Fr::from_montgomery_unchecked(BigInt([
			0xbaee89fc60b0b74b,
			0x1bcedf68d6bc3b29,
			0x96f6e038b4222e70,
			0x483cc821e3d1dbed,
		]));
		const ORDER: BigInt<4> = BigInt([
			0xd0970e5ed6f72cb7,
			0xa6682093ccc81082,
			0x06673b0101343b00,
			0x0e7db4ea6533afa9,
		]);
	}

	pub type AffinePoint = TeAffine<JubjubConfig>;
	pub type ExtendedPoint = TeExtended<JubjubConfig>;
}
