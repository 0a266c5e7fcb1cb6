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

//! BLS12-381: the full instantiation.
//!
//! G1 subgroup membership uses the endomorphism eigenvalue check, G2 uses
//! the `psi(Q) = [x] Q` criterion; cofactor clearing is `[1 - x] P` on G1
//! and the psi-based decomposition on G2.

use subtle::{Choice, ConstantTimeEq};

use crate::arith::BigInt;
use crate::ec::{mul, Affine, GlvParams, Projective, SWCurveConfig};
use crate::pairing::bls::{Bls12Params, BlsEngine, G2Prepared as BlsG2Prepared};
use crate::pairing::TwistType;

pub mod codec;
pub mod fields;
pub mod hash;

pub use fields::{Fq, Fq12, Fq2, Fq2Params, Fq6, Fq6Params, Fq12Params, FqParams, Fr, FrParams};

/// |x| for x = -0xd201000000010000.
pub const X: u64 = 0xd201000000010000;
pub const X_IS_NEGATIVE: bool = true;

/// The G1 GLV eigenvalue x^2 - 1 and the matching cube root of unity.
const LAMBDA_G1: BigInt<4> =
	BigInt([0x00000000ffffffff, 0xac45a4010001a402, 0, 0]);
const BETA: Fq = Fq::from_montgomery_unchecked(BigInt([
	0xcd03c9e48671f071,
	0x5dab22461fcda5d2,
	0x587042afd3851b95,
	0x8eb60ebe01bacb9e,
	0x03f97d6e83d050d2,
	0x18f0206554638741,
]));

/// psi, the untwist-Frobenius-twist endomorphism on the twist:
/// `psi(x, y) = (conj(x) PSI_X, conj(y) PSI_Y)`.
const PSI_X: Fq2 = Fq2::new(
	Fq::ZERO,
	Fq::from_montgomery_unchecked(BigInt([
		0x890dc9e4867545c3,
		0x2af322533285a5d5,
		0x50880866309b7e2c,
		0xa20d1b8c7e881024,
		0x14e4f04fe2db9068,
		0x14e56d3f1564853a,
	])),
);
const PSI_Y: Fq2 = Fq2::new(
	Fq::from_montgomery_unchecked(BigInt([
		0x3e2f585da55c9ad1,
		0x4294213d86c18183,
		0x382844c88b623732,
		0x92ad2afd19103e18,
		0x1d794e4fac7cf0b9,
		0x0bd592fc7d825ec8,
	])),
	Fq::from_montgomery_unchecked(BigInt([
		0x7bcfa7a25aa30fda,
		0xdc17dec12a927e7c,
		0x2f088dd86b4ebef1,
		0xd1ca2087da74d4a7,
		0x2da2596696cebc1d,
		0x0e2b7eedbbfd87d2,
	])),
);
/// psi^2 acts as `(x, y) -> (PSI2_X x, -y)`.
const PSI2_X: Fq = Fq::from_montgomery_unchecked(BigInt([
	0xcd03c9e48671f071,
	0x5dab22461fcda5d2,
	0x587042afd3851b95,
	0x8eb60ebe01bacb9e,
	0x03f97d6e83d050d2,
	0x18f0206554638741,
]));

/// `x^2 - x - 1` and `|x| + 1`: the Budroni-Pintore clearing scalars.
const X2_MINUS_X_MINUS_1: BigInt<4> =
	BigInt([0xd20100010000ffff, 0xac45a4010001a402, 0, 0]);
const X_PLUS_1: u64 = 0xd201000000010001;

// ---- G1 ----

#[derive(Clone, Copy, Debug)]
pub struct G1Config;

impl SWCurveConfig for G1Config {
	type Base = Fq;

	const A: Fq = Fq::ZERO;
	const B: Fq = Fq::from_montgomery_unchecked(BigInt([
		0xaa270000000cfff3,
		0x53cc0032fc34000a,
		0x478fe97a6b0a807f,
		0xb1d37ebee6ba24d7,
		0x8ec9733bbf78ab2f,
		0x09d645513d83de7e,
	]));
	const GENERATOR_X: Fq = Fq::from_montgomery_unchecked(BigInt([
		0x5cb38790fd530c16,
		0x7817fc679976fff5,
		0x154f95c7143ba1c1,
		0xf0ae6acdf3d0e747,
		0xedce6ecc21dbf440,
		0x120177419e0bfb75,
	]));
	const GENERATOR_Y: Fq = Fq::from_montgomery_unchecked(BigInt([
		0xbaac93d50ce72271,
		0x8c22631a7918fd8e,
		0xdd595f13570725ce,
		0x51ac582950405194,
		0x0e1c8c3fad0059c0,
		0x0bbc3efc5008a26a,
	]));
	const ORDER: BigInt<4> = BigInt([
		0xffffffff00000001,
		0x53bda402fffe5bfe,
		0x3339d80809a1d805,
		0x73eda753299d7d48,
	]);
	const COFACTOR_IS_ONE: bool = false;
	const GLV: Option<GlvParams<Fq>> = Some(GlvParams {
		beta: BETA,
		negates_y: false,
		lambda: LAMBDA_G1,
		a1: BigInt([0x00000000ffffffff, 0xac45a4010001a402, 0, 0]),
		a1_neg: false,
		b1: BigInt([0x0000000000000001, 0, 0, 0]),
		b1_neg: true,
		a2: BigInt([0x0000000000000001, 0, 0, 0]),
		a2_neg: false,
		b2: BigInt([0x0000000100000000, 0xac45a4010001a402, 0, 0]),
		b2_neg: false,
		g1: BigInt([0x389f49a7268bf7a3, 0x63f6e522f6cfee30, 0x7c6becf1e01faadd, 0x0000000000000001]),
		g2: BigInt([0x355094edfede377c, 0x0000000000000002, 0, 0]),
	});

	/// Eigenvalue criterion: `phi(P) = [x^2 - 1] P` exactly on the
	/// prime-order subgroup.
	fn is_in_subgroup(p: &Affine<Self>) -> Choice {
		let phi = Projective::from(Affine::<Self>::new_unchecked(p.x * BETA, p.y));
		let lam = mul::ladder_ct(&Projective::from(*p), &LAMBDA_G1, 128);
		ct_projective_eq(&phi, &lam)
	}

	/// `[1 - x] P`, the effective cofactor of the hash-to-G1 suite.
	fn clear_cofactor(p: &Affine<Self>) -> Projective<Self> {
		mul::mul_vartime(p, &BigInt::from_u64(X_PLUS_1))
	}
}

// ---- G2 ----

#[derive(Clone, Copy, Debug)]
pub struct G2Config;

impl SWCurveConfig for G2Config {
	type Base = Fq2;

	const A: Fq2 = Fq2::new(Fq::ZERO, Fq::ZERO);
	const B: Fq2 = Fq2::new(G1Config::B, G1Config::B);
	const GENERATOR_X: Fq2 = Fq2::new(
		Fq::from_montgomery_unchecked(BigInt([
			0xf5f28fa202940a10,
			0xb3f5fb2687b4961a,
			0xa1a893b53e2ae580,
			0x9894999d1a3caee9,
			0x6f67b7631863366b,
			0x058191924350bcd7,
		])),
		Fq::from_montgomery_unchecked(BigInt([
			0xa5a9c0759e23f606,
			0xaaa0c59dbccd60c3,
			0x3bb17e18e2867806,
			0x1b1ab6cc8541b367,
			0xc2b6ed0ef2158547,
			0x11922a097360edf3,
		])),
	);
	const GENERATOR_Y: Fq2 = Fq2::new(
		Fq::from_montgomery_unchecked(BigInt([
			0x4c730af860494c4a,
			0x597cfa1f5e369c5a,
			0xe7e6856caa0a635a,
			0xbbefb5e96e0d495f,
			0x07d3a975f0ef25a2,
			0x0083fd8e7e80dae5,
		])),
		Fq::from_montgomery_unchecked(BigInt([
			0xadc0fc92df64b05d,
			0x18aa270a2b1461dc,
			0x86adac6a3be4eba0,
			0x79495c4ec93da33a,
			0xe7175850a43ccaed,
			0x0b2bc2a163de1bf2,
		])),
	);
	const ORDER: BigInt<4> = G1Config::ORDER;
	const COFACTOR_IS_ONE: bool = false;
	const GLV: Option<GlvParams<Fq2>> = Some(GlvParams {
		beta: Fq2::new(PSI2_X, Fq::ZERO),
		negates_y: true,
		lambda: BigInt([0x0000000100000000, 0xac45a4010001a402, 0, 0]),
		a1: BigInt([0x0000000000000001, 0, 0, 0]),
		a1_neg: false,
		b1: BigInt([0x00000000ffffffff, 0xac45a4010001a402, 0, 0]),
		b1_neg: false,
		a2: BigInt([0x0000000100000000, 0xac45a4010001a402, 0, 0]),
		a2_neg: true,
		b2: BigInt([0x0000000000000001, 0, 0, 0]),
		b2_neg: false,
		g1: BigInt([0x355094edfede377c, 0x0000000000000002, 0, 0]),
		g2: BigInt([0x034eb4b927adc027, 0x63f6e522f6cfee2e, 0x7c6becf1e01faadd, 0x0000000000000001]),
	});

	/// `psi(Q) = [x] Q`, the Bowe criterion. With x negative this is
	/// `psi(Q) + [|x|] Q = O`.
	fn is_in_subgroup(q: &Affine<Self>) -> Choice {
		let psi_q = Projective::from(psi(q));
		let xq = mul::ladder_ct(&Projective::from(*q), &BigInt::from_u64(X), 64);
		ct_projective_eq(&psi_q, &(-xq))
	}

	/// Budroni-Pintore: `[x^2 - x - 1] Q + [x - 1] psi(Q) + psi^2([2] Q)`,
	/// equal to multiplication by the published effective cofactor.
	fn clear_cofactor(q: &Affine<Self>) -> Projective<Self> {
		let t1 = mul::mul_vartime(q, &X2_MINUS_X_MINUS_1);
		// x - 1 = -(|x| + 1)
		let t2 = -mul::mul_vartime(&psi(q), &BigInt::from_u64(X_PLUS_1));
		let doubled = Projective::from(*q).double().to_affine_vartime();
		let t3 = Projective::from(psi2(&doubled));
		t1.add_vartime(&t2).add_vartime(&t3)
	}
}

/// The twist endomorphism on affine G2 points.
pub fn psi(q: &Affine<G2Config>) -> Affine<G2Config> {
	if q.infinity {
		return *q;
	}
	Affine::new_unchecked(q.x.conjugate() * PSI_X, q.y.conjugate() * PSI_Y)
}

/// `psi` applied twice, in closed form.
pub fn psi2(q: &Affine<G2Config>) -> Affine<G2Config> {
	if q.infinity {
		return *q;
	}
	Affine::new_unchecked(q.x.mul_by_base(&PSI2_X), -q.y)
}

fn ct_projective_eq<C: SWCurveConfig>(a: &Projective<C>, b: &Projective<C>) -> Choice {
	use crate::fields::Field;
	// cross-multiplied comparison, plus agreement of at-infinity status
	let xz = (a.x * b.z).ct_eq(&(b.x * a.z));
	let yz = (a.y * b.z).ct_eq(&(b.y * a.z));
	let z1 = Choice::from(a.z.is_zero() as u8);
	let z2 = Choice::from(b.z.is_zero() as u8);
	(xz & yz & !z1 & !z2) | (z1 & z2)
}

// ---- pairing engine ----

#[derive(Clone, Copy, Debug)]
pub struct Bls12_381;

impl Bls12Params<6> for Bls12_381 {
	type FpP = FqParams;
	type Fp2P = Fq2Params;
	type Fp6P = Fq6Params;
	type Fp12P = Fq12Params;
	type G1 = G1Config;
	type G2 = G2Config;

	const X: u64 = X;
	const X_IS_NEGATIVE: bool = true;
	const TWIST: TwistType = TwistType::M;
}

pub type G1Affine = Affine<G1Config>;
pub type G1Projective = Projective<G1Config>;
pub type G2Affine = Affine<G2Config>;
pub type G2Projective = Projective<G2Config>;
pub type G2Prepared = BlsG2Prepared<Bls12_381, 6>;
pub type Gt = crate::gt::Gt<Fq12Params, 6>;
pub type Engine = BlsEngine<Bls12_381, 6>;

/// `e(p, q)` with the final exponentiation applied.
pub fn pairing(p: &G1Affine, q: &G2Affine) -> Gt {
	crate::gt::Gt(Engine::pairing(p, q))
}

/// GLS exponentiation in the target group: the Frobenius acts as
/// exponentiation by x on the order-r subgroup, so a base-|x|
/// decomposition turns one 255-bit exponent into four 64-bit ones
/// combined by multi-exponentiation. Variable time.
pub fn gt_exp_gls_vartime(g: &Gt, k: &BigInt<4>) -> Gt {
	// k = k0 + k1 |x| + k2 |x|^2 + k3 |x|^3, each digit < |x|
	let mut rest = *k;
	let mut digits = [BigInt::<4>::ZERO; 4];
	for d in digits.iter_mut() {
		let (q, rem) = rest.divrem_u64(X);
		*d = BigInt::from_u64(rem);
		rest = q;
	}
	debug_assert!(rest.is_zero(), "four base-|x| digits cover the scalar field");
	// g^{|x|} = conj(frobenius(g)) since x is negative and conjugation
	// inverts in the cyclotomic subgroup
	let step = |h: &Gt| crate::gt::Gt(h.0.frobenius_map(1)).invert();
	let b1 = step(g);
	let b2 = step(&b1);
	let b3 = step(&b2);
	Gt::multi_exp_vartime(&[*g, b1, b2, b3], &digits)
}

/// Product of pairings sharing one Miller accumulator and one final
/// exponentiation.
pub fn multi_pairing(pairs: &[(G1Affine, G2Prepared)]) -> Gt {
	let f = Engine::multi_miller_loop(pairs);
	crate::gt::Gt(Engine::final_exponentiation(&f).unwrap_or(Fq12::ONE))
}

#[cfg(test)]
mod tests;
