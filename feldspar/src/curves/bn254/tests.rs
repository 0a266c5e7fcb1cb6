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

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use super::*;
use crate::ec::mul;

fn rng() -> ChaCha20Rng {
	ChaCha20Rng::seed_from_u64(0xb254)
}

#[test]
fn generators_and_orders() {
	assert!(G1Affine::generator().is_on_curve());
	assert!(G2Affine::generator().is_on_curve());
	assert!(bool::from(G2Affine::generator().is_in_subgroup()));
	let r1 = mul::mul_bigint_ct(&G1Projective::generator(), &G1Config::ORDER);
	assert!(r1.is_identity());
	let r2 = mul::mul_bigint_ct(&G2Projective::generator(), &G2Config::ORDER);
	assert!(r2.is_identity());
}

#[test]
fn field_laws() {
	let mut rng = rng();
	for _ in 0..30 {
		let a = Fq::rand(&mut rng);
		let b = Fq::rand(&mut rng);
		assert_eq!(a + b - b, a);
		assert_eq!(a.square(), a * a);
		if !a.is_zero() {
			assert_eq!(a * a.inverse().unwrap(), Fq::ONE);
		}
		let c = Fq12::rand(&mut rng);
		assert_eq!(c.square(), c * c);
	}
}

#[test]
fn glv_matches_ladder() {
	let mut rng = rng();
	for _ in 0..6 {
		let k = Fr::rand(&mut rng).into_bigint();
		let g = G1Affine::generator();
		let fast = mul::mul_ct(&g, &k);
		let slow = mul::mul_bigint_ct(&Projective::from(g), &k);
		assert_eq!(fast.to_affine_vartime(), slow.to_affine_vartime());
	}
}

#[test]
fn pairing_bilinearity() {
	let mut rng = rng();
	let a = Fr::rand(&mut rng);
	let b = Fr::rand(&mut rng);
	let pa = mul::mul_vartime(&G1Affine::generator(), &a.into_bigint()).to_affine_vartime();
	let qb = mul::mul_vartime(&G2Affine::generator(), &b.into_bigint()).to_affine_vartime();
	let lhs = pairing(&pa, &qb);
	let base = pairing(&G1Affine::generator(), &G2Affine::generator());
	let rhs = base.pow_vartime(&(a * b).into_bigint());
	assert_eq!(lhs, rhs);
	assert!(!base.is_one());
}

#[test]
fn pairing_check_cancels() {
	let g1 = G1Affine::generator();
	let g2 = G2Affine::generator();
	assert!(Engine::multi_pairing_is_one(&[
		(g1, G2Prepared::from(g2)),
		(-g1, G2Prepared::from(g2)),
	]));
	// e(2 G1, G2) e(-G1, 2 G2)... deliberately unbalanced: must fail
	let two_g1 = (G1Projective::generator() + G1Projective::generator())
		.to_affine_vartime();
	assert!(!Engine::multi_pairing_is_one(&[
		(two_g1, G2Prepared::from(g2)),
		(g1, G2Prepared::from(g2)),
	]));
}

#[test]
fn psi_eigenvalue_check_rejects_outside_points() {
	// scan for a twist point outside the prime subgroup
	let mut x = Fq2::new(Fq::from_u64(1), Fq::ZERO);
	loop {
		let y2 = x.square() * x + G2Config::B;
		if let Some(y) = Option::<Fq2>::from(y2.sqrt()) {
			let p = crate::ec::Affine::<G2Config>::new_unchecked(x, y);
			assert!(p.is_on_curve());
			if !bool::from(p.is_in_subgroup()) {
				return; // found and rejected, as expected
			}
		}
		x += Fq2::ONE;
	}
}
