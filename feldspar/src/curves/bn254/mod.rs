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

//! BN254 (alt_bn128): the curve behind the original EVM pairing
//! precompiles. G1 has cofactor one; G2 membership uses the twisted
//! Frobenius eigenvalue `psi(Q) = [6x^2] Q`.

use subtle::{Choice, ConstantTimeEq};

use crate::arith::BigInt;
use crate::ec::{mul, Affine, GlvParams, Projective, SWCurveConfig};
use crate::pairing::bn::{BnEngine, BnParams, G2Prepared as BnG2Prepared};
use crate::pairing::TwistType;

pub mod fields;

pub use fields::{Fq, Fq12, Fq2, Fq2Params, Fq6, Fq6Params, Fq12Params, FqParams, Fr, FrParams};

/// The BN parameter x (positive).
pub const X: u64 = 4965661367192848881;

/// `psi` eigenvalue on G2: `6x^2`.
const PSI_EIGENVALUE: BigInt<4> =
	BigInt([0xf83e9682e87cfd46, 0x6f4d8248eeb859fb, 0, 0]);

const TWIST_MUL_BY_Q_X: Fq2 = Fq2::new(
	Fq::from_montgomery_unchecked(BigInt([
		0xb5773b104563ab30,
		0x347f91c8a9aa6454,
		0x7a007127242e0991,
		0x1956bcd8118214ec,
	])),
	Fq::from_montgomery_unchecked(BigInt([
		0x6e849f1ea0aa4757,
		0xaa1c7b6d89f89141,
		0xb6e713cdfae0ca3a,
		0x26694fbb4e82ebc3,
	])),
);
const TWIST_MUL_BY_Q_Y: Fq2 = Fq2::new(
	Fq::from_montgomery_unchecked(BigInt([
		0xe4bbdd0c2936b629,
		0xbb30f162e133bacb,
		0x31a9d1b6f9645366,
		0x253570bea500f8dd,
	])),
	Fq::from_montgomery_unchecked(BigInt([
		0xa1d77ce45ffe77c7,
		0x07affd117826d1db,
		0x6d16bd27bb7edc6b,
		0x2c87200285defecc,
	])),
);

const BETA: Fq = Fq::from_montgomery_unchecked(BigInt([
	0x71930c11d782e155,
	0xa6bb947cffbe3323,
	0xaa303344d4741444,
	0x2c3b3f0d26594943,
]));

#[derive(Clone, Copy, Debug)]
pub struct G1Config;

impl SWCurveConfig for G1Config {
	type Base = Fq;

	const A: Fq = Fq::ZERO;
	const B: Fq = Fq::from_montgomery_unchecked(BigInt([
		0x7a17caa950ad28d7,
		0x1f6ac17ae15521b9,
		0x334bea4e696bd284,
		0x2a1f6744ce179d8e,
	]));
	const GENERATOR_X: Fq = Fq::from_montgomery_unchecked(BigInt([
		0xd35d438dc58f0d9d,
		0x0a78eb28f5c70b3d,
		0x666ea36f7879462c,
		0x0e0a77c19a07df2f,
	]));
	const GENERATOR_Y: Fq = Fq::from_montgomery_unchecked(BigInt([
		0xa6ba871b8b1e1b3a,
		0x14f1d651eb8e167b,
		0xccdd46def0f28c58,
		0x1c14ef83340fbe5e,
	]));
	const ORDER: BigInt<4> = BigInt([
		0x43e1f593f0000001,
		0x2833e84879b97091,
		0xb85045b68181585d,
		0x30644e72e131a029,
	]);
	const COFACTOR_IS_ONE: bool = true;
	const GLV: Option<GlvParams<Fq>> = Some(GlvParams {
		beta: BETA,
		negates_y: false,
		lambda: BigInt([0x8b17ea66b99c90dd, 0x5bfc41088d8daaa7, 0xb3c4d79d41a91758, 0]),
		a1: BigInt([0x89d3256894d213e3, 0, 0, 0]),
		a1_neg: true,
		b1: BigInt([0x8211bbeb7d4f1128, 0x6f4d8248eeb859fc, 0, 0]),
		b1_neg: false,
		a2: BigInt([0x0be4e1541221250b, 0x6f4d8248eeb859fd, 0, 0]),
		a2_neg: true,
		b2: BigInt([0x89d3256894d213e3, 0, 0, 0]),
		b2_neg: true,
		g1: BigInt([0x6eb9c714773a6ef2, 0xd91d232ec7e0b3d7, 0x0000000000000002, 0]),
		g2: BigInt([0xa5e38cfb5eaa26d9, 0x7a7bd9d4391eb18d, 0x4ccef014a773d2cf, 0x0000000000000002]),
	});
}

#[derive(Clone, Copy, Debug)]
pub struct G2Config;

impl SWCurveConfig for G2Config {
	type Base = Fq2;

	const A: Fq2 = Fq2::new(Fq::ZERO, Fq::ZERO);
	// b / xi
	const B: Fq2 = Fq2::new(
		Fq::from_montgomery_unchecked(BigInt([
			0x3bf938e377b802a8,
			0x020b1b273633535d,
			0x26b7edf049755260,
			0x2514c6324384a86d,
		])),
		Fq::from_montgomery_unchecked(BigInt([
			0x38e7ecccd1dcff67,
			0x65f0b37d93ce0d3e,
			0xd749d0dd22ac00aa,
			0x0141b9ce4a688d4d,
		])),
	);
	const GENERATOR_X: Fq2 = Fq2::new(
		Fq::from_montgomery_unchecked(BigInt([
			0x8e83b5d102bc2026,
			0xdceb1935497b0172,
			0xfbb8264797811adf,
			0x19573841af96503b,
		])),
		Fq::from_montgomery_unchecked(BigInt([
			0xafb4737da84c6140,
			0x6043dd5a5802d8c4,
			0x09e950fc52a02f86,
			0x14fef0833aea7b6b,
		])),
	);
	const GENERATOR_Y: Fq2 = Fq2::new(
		Fq::from_montgomery_unchecked(BigInt([
			0x619dfa9d886be9f6,
			0xfe7fd297f59e9b78,
			0xff9e1a62231b7dfe,
			0x28fd7eebae9e4206,
		])),
		Fq::from_montgomery_unchecked(BigInt([
			0x64095b56c71856ee,
			0xdc57f922327d3cbb,
			0x55f935be33351076,
			0x0da4a0e693fd6482,
		])),
	);
	const ORDER: BigInt<4> = G1Config::ORDER;
	const COFACTOR_IS_ONE: bool = false;
	const GLV: Option<GlvParams<Fq2>> = None;

	/// `psi(Q) = [6x^2] Q` exactly on the prime subgroup of the twist.
	fn is_in_subgroup(q: &Affine<Self>) -> Choice {
		let psi_q = Projective::from(psi(q));
		let t = mul::ladder_ct(&Projective::from(*q), &PSI_EIGENVALUE, 128);
		use crate::fields::Field;
		let xz = (psi_q.x * t.z).ct_eq(&(t.x * psi_q.z));
		let yz = (psi_q.y * t.z).ct_eq(&(t.y * psi_q.z));
		let z1 = Choice::from(psi_q.z.is_zero() as u8);
		let z2 = Choice::from(t.z.is_zero() as u8);
		(xz & yz & !z1 & !z2) | (z1 & z2)
	}
}

/// Twisted Frobenius on affine G2 points.
pub fn psi(q: &Affine<G2Config>) -> Affine<G2Config> {
	if q.infinity {
		return *q;
	}
	Affine::new_unchecked(
		q.x.conjugate() * TWIST_MUL_BY_Q_X,
		q.y.conjugate() * TWIST_MUL_BY_Q_Y,
	)
}

#[derive(Clone, Copy, Debug)]
pub struct Bn254;

impl BnParams<4> for Bn254 {
	type FpP = FqParams;
	type Fp2P = Fq2Params;
	type Fp6P = Fq6Params;
	type Fp12P = Fq12Params;
	type G1 = G1Config;
	type G2 = G2Config;

	const X: u64 = X;
	const SIX_X_PLUS_2: u128 = 0x19d797039be763ba8;
	const TWIST: TwistType = TwistType::D;
	const TWIST_MUL_BY_Q_X: Fq2 = TWIST_MUL_BY_Q_X;
	const TWIST_MUL_BY_Q_Y: Fq2 = TWIST_MUL_BY_Q_Y;
}

pub type G1Affine = Affine<G1Config>;
pub type G1Projective = Projective<G1Config>;
pub type G2Affine = Affine<G2Config>;
pub type G2Projective = Projective<G2Config>;
pub type G2Prepared = BnG2Prepared<Bn254, 4>;
pub type Engine = BnEngine<Bn254, 4>;
pub type Gt = crate::gt::Gt<Fq12Params, 4>;

pub fn pairing(p: &G1Affine, q: &G2Affine) -> Gt {
	crate::gt::Gt(Engine::pairing(p, q))
}

#[cfg(test)]
mod tests;
