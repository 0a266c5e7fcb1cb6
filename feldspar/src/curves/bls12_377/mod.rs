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

//! BLS12-377: the D-twisted sibling family member (x positive, quadratic
//! non-residue -5, sextic twist by 1/u). Exercises every generic layer
//! the M-twist instantiation does not.

use subtle::{Choice, ConstantTimeEq};

use crate::arith::BigInt;
use crate::ec::{mul, Affine, GlvParams, Projective, SWCurveConfig};
use crate::pairing::bls::{Bls12Params, BlsEngine, G2Prepared as BlsG2Prepared};
use crate::pairing::TwistType;

pub mod fields;

pub use fields::{Fq, Fq12, Fq2, Fq2Params, Fq6, Fq6Params, Fq12Params, FqParams, Fr, FrParams};

/// The family parameter; positive for this member.
pub const X: u64 = 0x8508c00000000001;

const BETA: Fq = Fq::from_montgomery_unchecked(BigInt([
	0xdacd106da5847973,
	0xd8fe2454bac2a79a,
	0x1ada4fd6fd832edc,
	0xfb9868449d150908,
	0xd63eb8aeea32285e,
	0x0167d6a36f873fd0,
]));

const PSI_X: Fq2 = Fq2::new(
	Fq::from_montgomery_unchecked(BigInt([
		0x5892506da58478da,
		0x133366940ac2a74b,
		0x9b64a150cdf726cf,
		0x5cc426090a9c587e,
		0x5cf848adfdcd640c,
		0x004702bf3ac02380,
	])),
	Fq::ZERO,
);
const PSI_Y: Fq2 = Fq2::new(
	Fq::from_montgomery_unchecked(BigInt([
		0x982c13d9d084771f,
		0xfd49de0c6da34a32,
		0x61a530d183ab0e53,
		0xdf8fe44106dd9879,
		0x40f29b58d88472bc,
		0x0158723199046d5d,
	])),
	Fq::ZERO,
);
const PSI2_X: Fq = BETA;

/// `x^2 - x - 1` and `x - 1`: the cofactor-clearing scalars.
const X2_MINUS_X_MINUS_1: BigInt<4> =
	BigInt([0x8508bfffffffffff, 0x452217cc90000000, 0, 0]);
const X_MINUS_1: u64 = 0x8508c00000000000;

#[derive(Clone, Copy, Debug)]
pub struct G1Config;

impl SWCurveConfig for G1Config {
	type Base = Fq;

	const A: Fq = Fq::ZERO;
	const B: Fq = Fq::from_montgomery_unchecked(BigInt([
		0x02cdffffffffff68,
		0x51409f837fffffb1,
		0x9f7db3a98a7d3ff2,
		0x7b4e97b76e7c6305,
		0x4cf495bf803c84e8,
		0x008d6661e2fdf49a,
	]));
	const GENERATOR_X: Fq = Fq::from_montgomery_unchecked(BigInt([
		0x260f33b9772451f4,
		0xc54dd773169d5658,
		0x5c1551c469a510dd,
		0x761662e4425e1698,
		0xc97d78cc6f065272,
		0x00a41206b361fd4d,
	]));
	const GENERATOR_Y: Fq = Fq::from_montgomery_unchecked(BigInt([
		0x8193961fb8cb81f3,
		0x00638d4c5f44adb8,
		0xfafaf3dad4daf54a,
		0xc27849e2d655cd18,
		0x2ec3ddb401d52814,
		0x007da93326303c71,
	]));
	const ORDER: BigInt<4> = BigInt([
		0x0a11800000000001,
		0x59aa76fed0000001,
		0x60b44d1e5c37b001,
		0x12ab655e9a2ca556,
	]);
	const COFACTOR_IS_ONE: bool = false;
	const GLV: Option<GlvParams<Fq>> = Some(GlvParams {
		beta: BETA,
		negates_y: false,
		lambda: BigInt([0x0a11800000000000, 0x452217cc90000001, 0, 0]),
		a1: BigInt([0x0a11800000000000, 0x452217cc90000001, 0, 0]),
		a1_neg: false,
		b1: BigInt([0x0000000000000001, 0, 0, 0]),
		b1_neg: true,
		a2: BigInt([0x0000000000000001, 0, 0, 0]),
		a2_neg: false,
		b2: BigInt([0x0a11800000000001, 0x452217cc90000001, 0, 0]),
		b2_neg: false,
		g1: BigInt([0x3366fc876f25c6b5, 0x7f72ed32af90182c, 0xb3f7aa969fd37160, 0x0000000000000003]),
		g2: BigInt([0xb65247b102cb27b9, 0x000000000000000d, 0, 0]),
	});

	fn is_in_subgroup(p: &Affine<Self>) -> Choice {
		let phi = Projective::from(Affine::<Self>::new_unchecked(p.x * BETA, p.y));
		let lam = mul::ladder_ct(
			&Projective::from(*p),
			&BigInt([0x0a11800000000000, 0x452217cc90000001, 0, 0]),
			128,
		);
		ct_projective_eq(&phi, &lam)
	}

	/// `[x - 1] P` lands in the prime subgroup.
	fn clear_cofactor(p: &Affine<Self>) -> Projective<Self> {
		mul::mul_vartime(p, &BigInt::from_u64(X_MINUS_1))
	}
}

#[derive(Clone, Copy, Debug)]
pub struct G2Config;

impl SWCurveConfig for G2Config {
	type Base = Fq2;

	const A: Fq2 = Fq2::new(Fq::ZERO, Fq::ZERO);
	// b / u
	const B: Fq2 = Fq2::new(
		Fq::ZERO,
		Fq::from_montgomery_unchecked(BigInt([
			0x8072266666666685,
			0x8df55926899999a9,
			0x7fe4561ad64f34cf,
			0xb95da6d8b6e4f01b,
			0x4b747cccfc142743,
			0x0039c3fa70f49f43,
		])),
	);
	const GENERATOR_X: Fq2 = Fq2::new(
		Fq::from_montgomery_unchecked(BigInt([
			0x87e4cb96756a6edb,
			0x99aa13a4fa9b9c4b,
			0xd702cf5f38b86463,
			0x7ed4ce7924c167ed,
			0x1b447e91a9c5329f,
			0x0084963f63a498b7,
		])),
		Fq::from_montgomery_unchecked(BigInt([
			0x8554a79176a27e27,
			0xba4edb07f79e64a3,
			0xe2dc99bdfb15b037,
			0xe7d8740ff9d797f7,
			0x140c90e86aa2ea12,
			0x00cab5f295c622d3,
		])),
	);
	const GENERATOR_Y: Fq2 = Fq2::new(
		Fq::from_montgomery_unchecked(BigInt([
			0x2050bf7247d3ced4,
			0x67a8ee8100d17921,
			0x17d6f6cda3578307,
			0xd0eaa7550e0e26d8,
			0xf7aa721a161d7284,
			0x01604cec93c28ee1,
		])),
		Fq::from_montgomery_unchecked(BigInt([
			0x4fc1f83c331faed0,
			0x6783c3d79d164e16,
			0x7ecc86be7de427ff,
			0xbe7b613ac02526d5,
			0xb5eb2e9573178cee,
			0x00f5f8619a031dbf,
		])),
	);
	const ORDER: BigInt<4> = G1Config::ORDER;
	const COFACTOR_IS_ONE: bool = false;
	const GLV: Option<GlvParams<Fq2>> = Some(GlvParams {
		beta: Fq2::new(PSI2_X, Fq::ZERO),
		negates_y: true,
		lambda: BigInt([0x0a11800000000001, 0x452217cc90000001, 0, 0]),
		a1: BigInt([0x0000000000000001, 0, 0, 0]),
		a1_neg: false,
		b1: BigInt([0x0a11800000000000, 0x452217cc90000001, 0, 0]),
		b1_neg: false,
		a2: BigInt([0x0a11800000000001, 0x452217cc90000001, 0, 0]),
		a2_neg: true,
		b2: BigInt([0x0000000000000001, 0, 0, 0]),
		b2_neg: false,
		g1: BigInt([0xb65247b102cb27b9, 0x000000000000000d, 0, 0]),
		g2: BigInt([0x7d14b4d66c5a9efc, 0x7f72ed32af90181e, 0xb3f7aa969fd37160, 0x0000000000000003]),
	});

	/// `psi(Q) = [x] Q` with x positive.
	fn is_in_subgroup(q: &Affine<Self>) -> Choice {
		let psi_q = Projective::from(psi(q));
		let xq = mul::ladder_ct(&Projective::from(*q), &BigInt::from_u64(X), 64);
		ct_projective_eq(&psi_q, &xq)
	}

	/// Budroni-Pintore with the positive parameter:
	/// `[x^2 - x - 1] Q + [x - 1] psi(Q) + psi^2([2] Q)`.
	fn clear_cofactor(q: &Affine<Self>) -> Projective<Self> {
		let t1 = mul::mul_vartime(q, &X2_MINUS_X_MINUS_1);
		let t2 = mul::mul_vartime(&psi(q), &BigInt::from_u64(X_MINUS_1));
		let doubled = Projective::from(*q).double().to_affine_vartime();
		let t3 = Projective::from(psi2(&doubled));
		t1.add_vartime(&t2).add_vartime(&t3)
	}
}

pub fn psi(q: &Affine<G2Config>) -> Affine<G2Config> {
	if q.infinity {
		return *q;
	}
	Affine::new_unchecked(q.x.conjugate() * PSI_X, q.y.conjugate() * PSI_Y)
}

pub fn psi2(q: &Affine<G2Config>) -> Affine<G2Config> {
	if q.infinity {
		return *q;
	}
	Affine::new_unchecked(q.x.mul_by_base(&PSI2_X), -q.y)
}

fn ct_projective_eq<C: SWCurveConfig>(a: &Projective<C>, b: &Projective<C>) -> Choice {
	use crate::fields::Field;
	let xz = (a.x * b.z).ct_eq(&(b.x * a.z));
	let yz = (a.y * b.z).ct_eq(&(b.y * a.z));
	let z1 = Choice::from(a.z.is_zero() as u8);
	let z2 = Choice::from(b.z.is_zero() as u8);
	(xz & yz & !z1 & !z2) | (z1 & z2)
}

#[derive(Clone, Copy, Debug)]
pub struct Bls12_377;

impl Bls12Params<6> for Bls12_377 {
	type FpP = FqParams;
	type Fp2P = Fq2Params;
	type Fp6P = Fq6Params;
	type Fp12P = Fq12Params;
	type G1 = G1Config;
	type G2 = G2Config;

	const X: u64 = X;
	const X_IS_NEGATIVE: bool = false;
	const TWIST: TwistType = TwistType::D;
}

pub type G1Affine = Affine<G1Config>;
pub type G1Projective = Projective<G1Config>;
pub type G2Affine = Affine<G2Config>;
pub type G2Projective = Projective<G2Config>;
pub type G2Prepared = BlsG2Prepared<Bls12_377, 6>;
pub type Engine = BlsEngine<Bls12_377, 6>;
pub type Gt = crate::gt::Gt<Fq12Params, 6>;

pub fn pairing(p: &G1Affine, q: &G2Affine) -> Gt {
	crate::gt::Gt(Engine::pairing(p, q))
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand_chacha::ChaCha20Rng;

	use super::*;

	#[test]
	fn generators_and_orders() {
		assert!(G1Affine::generator().is_on_curve());
		assert!(G2Affine::generator().is_on_curve());
		assert!(bool::from(G1Affine::generator().is_in_subgroup()));
		assert!(bool::from(G2Affine::generator().is_in_subgroup()));
		assert!(mul::mul_bigint_ct(&G1Projective::generator(), &G1Config::ORDER).is_identity());
		assert!(mul::mul_bigint_ct(&G2Projective::generator(), &G2Config::ORDER).is_identity());
	}

	#[test]
	fn field_laws_with_nonresidue_minus_five() {
		let mut rng = ChaCha20Rng::seed_from_u64(0x377);
		for _ in 0..20 {
			let a = Fq2::rand(&mut rng);
			let b = Fq2::rand(&mut rng);
			assert_eq!(a * b, b * a);
			assert_eq!(a.square(), a * a);
			if !a.is_zero() {
				assert_eq!(a * a.inverse().unwrap(), Fq2::ONE);
			}
			let c = Fq12::rand(&mut rng);
			assert_eq!(c.square(), c * c);
			assert_eq!(c * c.inverse().unwrap(), Fq12::ONE);
		}
	}

	#[test]
	fn glv_matches_ladder() {
		let mut rng = ChaCha20Rng::seed_from_u64(0x1377);
		for _ in 0..6 {
			let k = Fr::rand(&mut rng).into_bigint();
			let fast = mul::mul_ct(&G1Affine::generator(), &k);
			let slow = mul::mul_bigint_ct(&G1Projective::generator(), &k);
			assert_eq!(fast.to_affine_vartime(), slow.to_affine_vartime());
			let fast2 = mul::mul_ct(&G2Affine::generator(), &k);
			let slow2 = mul::mul_bigint_ct(&G2Projective::generator(), &k);
			assert_eq!(fast2.to_affine_vartime(), slow2.to_affine_vartime());
		}
	}

	#[test]
	fn pairing_bilinearity() {
		let mut rng = ChaCha20Rng::seed_from_u64(0x2377);
		let a = Fr::rand(&mut rng);
		let b = Fr::rand(&mut rng);
		let pa = mul::mul_vartime(&G1Affine::generator(), &a.into_bigint())
			.to_affine_vartime();
		let qb = mul::mul_vartime(&G2Affine::generator(), &b.into_bigint())
			.to_affine_vartime();
		let base = pairing(&G1Affine::generator(), &G2Affine::generator());
		assert!(!base.is_one());
		assert_eq!(pairing(&pa, &qb), base.pow_vartime(&(a * b).into_bigint()));
	}

	#[test]
	fn psi_eigenvalue() {
		let mut rng = ChaCha20Rng::seed_from_u64(0x3377);
		let k = Fr::rand(&mut rng);
		let q = mul::mul_vartime(&G2Affine::generator(), &k.into_bigint())
			.to_affine_vartime();
		let psi_q = psi(&q);
		let xq = mul::mul_vartime(&q, &crate::arith::BigInt::from_u64(X));
		assert_eq!(Projective::from(psi_q), xq);
	}

	#[test]
	fn cofactor_clearing_lands_in_subgroup() {
		// start from a multiple of the generator (already in the
		// subgroup): clearing must keep it there and stay nonzero
		let g = G2Affine::generator();
		let cleared = G2Config::clear_cofactor(&g).to_affine_vartime();
		assert!(!cleared.infinity);
		assert!(bool::from(cleared.is_in_subgroup()));
		let g1 = G1Affine::generator();
		let cleared = G1Config::clear_cofactor(&g1).to_affine_vartime();
		assert!(bool::from(cleared.is_in_subgroup()));
	}
}
