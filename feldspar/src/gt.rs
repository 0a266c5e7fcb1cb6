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

//! The order-r cyclotomic target group.
//!
//! Elements live in the cyclotomic subgroup of `Fp12`, where conjugation
//! inverts and squaring has the cheap Granger-Scott form. Karabina's
//! compressed squaring keeps four of the six `Fp2` coefficients; the `T2`
//! torus form halves storage to a single `Fp6`.

use crate::arith::BigInt;
use crate::ec::batch::batch_inverse;
use crate::fields::{Field, Fp12, Fp12Params, Fp2, Fp6, Fp6Params};

type Quad<C, const N: usize> = <<C as Fp12Params<N>>::Cubic as Fp6Params<N>>::Quad;

fn xi_mul<C: Fp12Params<N>, const N: usize>(a: &Fp2<Quad<C, N>, N>) -> Fp2<Quad<C, N>, N> {
	<C::Cubic as Fp6Params<N>>::mul_fp2_by_nonresidue(a)
}

fn triple<F: Field>(a: F) -> F {
	a.double() + a
}

/// A cyclotomic-subgroup element. Constructed only from pairing outputs
/// (or explicit subgroup maps), so the invariant is structural.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Gt<C: Fp12Params<N>, const N: usize>(pub Fp12<C, N>);

impl<C: Fp12Params<N>, const N: usize> Gt<C, N> {
	pub const ONE: Self = Self(Fp12::ONE);

	pub fn is_one(&self) -> bool {
		self.0.is_one()
	}

	/// Inversion is free in the cyclotomic subgroup.
	pub fn invert(&self) -> Self {
		Self(self.0.conjugate())
	}

	pub fn mul(&self, other: &Self) -> Self {
		Self(self.0 * other.0)
	}

	pub fn square(&self) -> Self {
		Self(self.0.cyclotomic_square())
	}

	/// wNAF exponentiation over cyclotomic squarings and the free inverse;
	/// variable time (the exponents here are public challenges).
	pub fn pow_vartime<const M: usize>(&self, e: &BigInt<M>) -> Self {
		let digits = crate::ec::mul::wnaf_digits_wide(e, 4);
		let sq = self.square();
		let mut table = [*self; 4]; // odd multiples: 1, 3, 5, 7
		for i in 1..4 {
			table[i] = table[i - 1].mul(&sq);
		}
		let mut acc = Self::ONE;
		for &d in digits.iter().rev() {
			acc = acc.square();
			if d != 0 {
				let idx = (d.unsigned_abs() as usize) / 2;
				let t = if d > 0 { table[idx] } else { table[idx].invert() };
				acc = acc.mul(&t);
			}
		}
		acc
	}

	/// Multi-exponentiation with the Pippenger bucket structure; the
	/// running-sum trick carries over verbatim because buckets only need
	/// multiplication and the free inverse.
	pub fn multi_exp_vartime(bases: &[Self], exps: &[BigInt<4>]) -> Self {
		assert_eq!(bases.len(), exps.len(), "mismatched multi-exp inputs");
		if bases.is_empty() {
			return Self::ONE;
		}
		let c = crate::ec::msm::best_bucket_bit_size(bases.len(), 256);
		let windows = 256usize.div_ceil(c) + 1;
		let digit_rows: Vec<Vec<i32>> = exps
			.iter()
			.map(|e| crate::ec::msm::signed_digits(e, c, windows))
			.collect();
		let mut result = Self::ONE;
		for w in (0..windows).rev() {
			for _ in 0..c {
				result = result.square();
			}
			let nbuckets = 1usize << (c - 1);
			let mut buckets = vec![Self::ONE; nbuckets];
			for (g, ds) in bases.iter().zip(digit_rows.iter()) {
				let d = ds[w];
				if d == 0 {
					continue;
				}
				let idx = d.unsigned_abs() as usize - 1;
				let t = if d > 0 { *g } else { g.invert() };
				buckets[idx] = buckets[idx].mul(&t);
			}
			let mut sum = Self::ONE;
			let mut total = Self::ONE;
			for b in buckets.iter().rev() {
				sum = sum.mul(b);
				total = total.mul(&sum);
			}
			result = result.mul(&total);
		}
		result
	}

	// ---- Karabina compression ----

	/// Drops the Granger-Scott pair `(z0, z1)`, keeping `(z2, z3, z4, z5)`.
	pub fn compress(&self) -> GtCompressed<C, N> {
		GtCompressed {
			z2: self.0.c1.c0,
			z3: self.0.c0.c2,
			z4: self.0.c0.c1,
			z5: self.0.c1.c2,
		}
	}

	/// T2 torus form: `g = (1 + c0) / c1`. The only cyclotomic elements
	/// with `c1 = 0` are `+-1`; those have no torus representative.
	pub fn to_torus(&self) -> Option<TorusAffine<C, N>> {
		let inv = self.0.c1.inverse().into_option()?;
		Some(TorusAffine((self.0.c0 + Fp6::ONE) * inv))
	}
}

/// Karabina 4-coefficient form; squaring stays compressed, decompression
/// costs one inversion (or amortises over a batch).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GtCompressed<C: Fp12Params<N>, const N: usize> {
	z2: Fp2<Quad<C, N>, N>,
	z3: Fp2<Quad<C, N>, N>,
	z4: Fp2<Quad<C, N>, N>,
	z5: Fp2<Quad<C, N>, N>,
}

impl<C: Fp12Params<N>, const N: usize> GtCompressed<C, N> {
	/// Compressed squaring: six Fp2 multiplications.
	pub fn square(&self) -> Self {
		let b45 = self.z4 * self.z5;
		let a45 = (self.z4 + self.z5) * (self.z4 + xi_mul::<C, N>(&self.z5));
		let b23 = self.z2 * self.z3;
		let a23 = (self.z2 + self.z3) * (self.z2 + xi_mul::<C, N>(&self.z3));
		let xib45 = xi_mul::<C, N>(&b45);
		Self {
			z2: (self.z2 + triple(xib45)).double(),
			z3: triple(a45 - b45 - xib45) - self.z3.double(),
			z4: triple(a23 - b23 - xi_mul::<C, N>(&b23)) - self.z4.double(),
			z5: (self.z5 + triple(b23)).double(),
		}
	}

	/// `(numerator of z1, denominator)`: the batch-friendly ratio form.
	fn z1_ratio(&self) -> (Fp2<Quad<C, N>, N>, Fp2<Quad<C, N>, N>) {
		if !self.z2.is_zero() {
			let num = xi_mul::<C, N>(&self.z5.square()) + triple(self.z4.square())
				- self.z3.double();
			(num, self.z2.double().double())
		} else {
			((self.z4 * self.z5).double(), self.z3)
		}
	}

	fn rebuild(&self, z1: Fp2<Quad<C, N>, N>) -> Gt<C, N> {
		let z0 = xi_mul::<C, N>(
			&(z1.square().double() + self.z2 * self.z5 - triple(self.z3 * self.z4)),
		) + Fp2::ONE;
		Gt(Fp12::new(
			Fp6::new(z0, self.z4, self.z3),
			Fp6::new(self.z2, z1, self.z5),
		))
	}

	/// Recovers the dropped pair; one inversion. Returns the identity for
	/// the all-zero compression of one.
	pub fn decompress(&self) -> Gt<C, N> {
		let (num, den) = self.z1_ratio();
		match den.inverse_vartime() {
			None => Gt::ONE,
			Some(dinv) => self.rebuild(num * dinv),
		}
	}

	/// Batch decompression: one inversion across the whole slice.
	pub fn batch_decompress(items: &[Self]) -> Vec<Gt<C, N>> {
		let ratios: Vec<_> = items.iter().map(|i| i.z1_ratio()).collect();
		let mut dens: Vec<_> = ratios.iter().map(|(_, d)| *d).collect();
		batch_inverse(&mut dens);
		items
			.iter()
			.zip(ratios.iter().zip(dens.iter()))
			.map(|(item, ((num, den), dinv))| {
				if den.is_zero() {
					Gt::ONE
				} else {
					item.rebuild(*num * *dinv)
				}
			})
			.collect()
	}
}

/// Affine torus representative: a single `Fp6`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TorusAffine<C: Fp12Params<N>, const N: usize>(pub Fp6<C::Cubic, N>);

/// Projective torus representative `(num : den)`, multiplication without
/// inversions.
#[derive(Clone, Copy, Debug)]
pub struct TorusProjective<C: Fp12Params<N>, const N: usize> {
	pub num: Fp6<C::Cubic, N>,
	pub den: Fp6<C::Cubic, N>,
}

fn v_elem<C: Fp12Params<N>, const N: usize>() -> Fp6<C::Cubic, N> {
	Fp6::new(Fp2::ZERO, Fp2::ONE, Fp2::ZERO)
}

impl<C: Fp12Params<N>, const N: usize> TorusAffine<C, N> {
	/// Back to the full representation: `f = (g + w) / (g - w)`.
	pub fn decompress(&self) -> Option<Gt<C, N>> {
		let num = Fp12::new(self.0, Fp6::ONE);
		let den = Fp12::new(self.0, -Fp6::<C::Cubic, N>::ONE);
		let dinv = den.inverse().into_option()?;
		Some(Gt(num * dinv))
	}

	pub fn to_projective(&self) -> TorusProjective<C, N> {
		TorusProjective { num: self.0, den: Fp6::ONE }
	}

	/// Inversion negates the representative.
	pub fn invert(&self) -> Self {
		Self(-self.0)
	}
}

impl<C: Fp12Params<N>, const N: usize> TorusProjective<C, N> {
	/// `(g1 g2 + v) / (g1 + g2)` lifted to projective coordinates.
	pub fn mul(&self, other: &Self) -> Self {
		Self {
			num: self.num * other.num + v_elem::<C, N>() * (self.den * other.den),
			den: self.num * other.den + other.num * self.den,
		}
	}

	pub fn square(&self) -> Self {
		Self {
			num: self.num.square() + v_elem::<C, N>() * self.den.square(),
			den: (self.num * self.den).double(),
		}
	}

	pub fn invert(&self) -> Self {
		Self { num: -self.num, den: self.den }
	}

	/// Normalises back to the affine form; one inversion. `None` when the
	/// denominator degenerated (the element is `+-1`).
	pub fn to_affine(&self) -> Option<TorusAffine<C, N>> {
		let dinv = self.den.inverse_vartime()?;
		Some(TorusAffine(self.num * dinv))
	}
}

#[cfg(test)]
mod tests {
	// exercised against real pairing outputs in the BLS12-381 tests
}
