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

//! Byte-level precompile adapter checks.

use std::path::Path;

use feldspar::curves::bls12_381 as bls;
use feldspar::curves::bn254;
use feldspar::ec::Projective;
use feldspar::kzg::{blob_to_kzg_commitment, compute_kzg_proof, KzgSettings};
use feldspar::precompile::{bls as pc_bls, bn as pc_bn, kzg as pc_kzg};
use sha2::{Digest, Sha256};

// ---- BN254 (EIP-196/197) ----

#[test]
fn bn254_add_known_answer() {
	// (1, 2) + (1, 2)
	let mut input = [0u8; 128];
	input[31] = 1;
	input[63] = 2;
	input[95] = 1;
	input[127] = 2;
	let out = pc_bn::bn254_add(&input).unwrap();
	assert_eq!(
		hex::encode(out),
		"030644e72e131a029b85045b68181585d97816a916871ca8d3c208c16d87cfd3\
		 15ed738c0e0a7c92e7845f96b2ae9c0a68a6a449e3538fc7ff3ebf7a5a18a2c4"
	);
}

#[test]
fn bn254_mul_known_answer() {
	let mut input = [0u8; 96];
	input[31] = 1;
	input[63] = 2;
	input[88..96].copy_from_slice(&0x2adbeefu64.to_be_bytes());
	let out = pc_bn::bn254_mul(&input).unwrap();
	assert_eq!(
		hex::encode(out),
		"11c7ba90483ce5a1a2a809b26807ef4d9ce94beea15c4632f70b78d419e648c4\
		 10b4627b8d0df7376a27602cffc8653f19ca373b8121995fc561f08228a10021"
	);
}

#[test]
fn bn254_add_implicit_padding_and_identity() {
	// short input zero-pads: (1,2) + infinity = (1,2)
	let mut input = [0u8; 64];
	input[31] = 1;
	input[63] = 2;
	let out = pc_bn::bn254_add(&input).unwrap();
	assert_eq!(out[31], 1);
	assert_eq!(out[63], 2);
	// empty input: infinity + infinity
	let out = pc_bn::bn254_add(&[]).unwrap();
	assert_eq!(out, [0u8; 64]);
}

#[test]
fn bn254_rejects_off_curve_and_oversized_coords() {
	let mut input = [0u8; 128];
	input[31] = 1;
	input[63] = 3; // (1, 3) is not on the curve
	assert!(pc_bn::bn254_add(&input).is_err());
	let mut input = [0u8; 128];
	input[..32].copy_from_slice(&[0xff; 32]); // coordinate >= p
	assert!(pc_bn::bn254_add(&input).is_err());
}

#[test]
fn bn254_pairing_check() {
	// e(G1, G2) e(-G1, G2) == 1
	let g1 = bn254::G1Affine::generator();
	let g2 = bn254::G2Affine::generator();
	let neg_g1 = -g1;
	let enc_g1 = |p: &bn254::G1Affine| -> [u8; 64] {
		let mut out = [0u8; 64];
		p.x.into_bigint().write_bytes_be(&mut out[..32]);
		p.y.into_bigint().write_bytes_be(&mut out[32..]);
		out
	};
	let enc_g2 = |q: &bn254::G2Affine| -> [u8; 128] {
		let mut out = [0u8; 128];
		q.x.c1.into_bigint().write_bytes_be(&mut out[..32]);
		q.x.c0.into_bigint().write_bytes_be(&mut out[32..64]);
		q.y.c1.into_bigint().write_bytes_be(&mut out[64..96]);
		q.y.c0.into_bigint().write_bytes_be(&mut out[96..]);
		out
	};
	let mut input = Vec::new();
	input.extend_from_slice(&enc_g1(&g1));
	input.extend_from_slice(&enc_g2(&g2));
	input.extend_from_slice(&enc_g1(&neg_g1));
	input.extend_from_slice(&enc_g2(&g2));
	let out = pc_bn::bn254_pairing(&input).unwrap();
	assert_eq!(out[31], 1);
	// empty product is one
	let out = pc_bn::bn254_pairing(&[]).unwrap();
	assert_eq!(out[31], 1);
	// unbalanced product is zero
	let mut input = Vec::new();
	input.extend_from_slice(&enc_g1(&g1));
	input.extend_from_slice(&enc_g2(&g2));
	let out = pc_bn::bn254_pairing(&input).unwrap();
	assert_eq!(out[31], 0);
}

// ---- BLS12-381 (EIP-2537) ----

fn encode_g1(p: &bls::G1Affine) -> [u8; 128] {
	let mut out = [0u8; 128];
	if !p.infinity {
		p.x.into_bigint().write_bytes_be(&mut out[16..64]);
		p.y.into_bigint().write_bytes_be(&mut out[80..]);
	}
	out
}

#[test]
fn eip2537_g1_add() {
	let g = bls::G1Affine::generator();
	let two_g = (Projective::from(g) + Projective::from(g)).to_affine_vartime();
	let mut input = Vec::new();
	input.extend_from_slice(&encode_g1(&g));
	input.extend_from_slice(&encode_g1(&g));
	let out = pc_bls::g1_add(&input).unwrap();
	assert_eq!(out.as_slice(), encode_g1(&two_g).as_slice());
}

#[test]
fn eip2537_g1_msm_and_subgroup_enforcement() {
	let g = bls::G1Affine::generator();
	let mut input = Vec::new();
	input.extend_from_slice(&encode_g1(&g));
	let mut scalar = [0u8; 32];
	scalar[31] = 5;
	input.extend_from_slice(&scalar);
	let out = pc_bls::g1_msm(&input).unwrap();
	let five_g = feldspar::ec::mul::mul_vartime(
		&g,
		&feldspar::arith::BigInt::from_u64(5),
	)
	.to_affine_vartime();
	assert_eq!(out.as_slice(), encode_g1(&five_g).as_slice());
	// nonzero padding rejected
	let mut bad = input.clone();
	bad[0] = 1;
	assert!(pc_bls::g1_msm(&bad).is_err());
	// malformed length rejected
	assert!(pc_bls::g1_msm(&input[..100]).is_err());
}

#[test]
fn eip2537_pairing_check() {
	let g1 = bls::G1Affine::generator();
	let g2 = bls::G2Affine::generator();
	let mut enc_g2 = [0u8; 256];
	g2.x.c0.into_bigint().write_bytes_be(&mut enc_g2[16..64]);
	g2.x.c1.into_bigint().write_bytes_be(&mut enc_g2[80..128]);
	g2.y.c0.into_bigint().write_bytes_be(&mut enc_g2[144..192]);
	g2.y.c1.into_bigint().write_bytes_be(&mut enc_g2[208..]);
	let mut input = Vec::new();
	input.extend_from_slice(&encode_g1(&g1));
	input.extend_from_slice(&enc_g2);
	input.extend_from_slice(&encode_g1(&(-g1)));
	input.extend_from_slice(&enc_g2);
	let out = pc_bls::pairing_check(&input).unwrap();
	assert_eq!(out[31], 1);
}

#[test]
fn eip2537_map_fp_to_g1_lands_in_subgroup() {
	let mut input = [0u8; 64];
	input[63] = 9;
	let out = pc_bls::map_fp_to_g1(&input).unwrap();
	// decode and check subgroup membership
	let x = &out[16..64];
	let y = &out[80..128];
	let mut ser = [0u8; 96];
	ser[..48].copy_from_slice(x);
	ser[48..].copy_from_slice(y);
	let p = bls::codec::g1_from_uncompressed(&ser).unwrap();
	assert!(bool::from(p.is_in_subgroup()));
}

// ---- EIP-4844 point evaluation ----

#[test]
fn point_evaluation_accepts_and_rejects() {
	let settings = KzgSettings::load(Path::new(concat!(
		env!("CARGO_MANIFEST_DIR"),
		"/tests/fixtures/trusted_setup_test.txt"
	)))
	.unwrap();
	// sequential blob, challenge 7 (vectors pinned in the kzg tests)
	let mut blob_bytes = vec![0u8; feldspar::kzg::BYTES_PER_BLOB];
	for i in 0..feldspar::kzg::FIELD_ELEMENTS_PER_BLOB {
		blob_bytes[32 * i + 24..32 * (i + 1)].copy_from_slice(&(i as u64).to_be_bytes());
	}
	let blob = feldspar::kzg::Blob::from_bytes(&blob_bytes).unwrap();
	let c = blob_to_kzg_commitment(&settings, &blob).unwrap();
	let z = bls::Fr::from_u64(7);
	let (proof, y) = compute_kzg_proof(&settings, &blob, &z).unwrap();

	let c_bytes = bls::codec::g1_to_compressed(&c.0);
	let mut versioned = Sha256::digest(c_bytes);
	versioned[0] = 0x01;

	let mut input = Vec::new();
	input.extend_from_slice(&versioned);
	input.extend_from_slice(&bls::codec::fr_to_bytes(&z));
	input.extend_from_slice(&bls::codec::fr_to_bytes(&y));
	input.extend_from_slice(&c_bytes);
	input.extend_from_slice(&bls::codec::g1_to_compressed(&proof.0));

	let out = pc_kzg::point_evaluation(&settings, &input).unwrap();
	assert_eq!(
		u64::from_be_bytes(out[24..32].try_into().unwrap()),
		feldspar::kzg::FIELD_ELEMENTS_PER_BLOB as u64
	);

	// wrong versioned hash
	let mut bad = input.clone();
	bad[1] ^= 0xff;
	assert!(pc_kzg::point_evaluation(&settings, &bad).is_err());
	// wrong claimed evaluation
	let mut bad = input.clone();
	bad[95] ^= 0x01;
	assert!(pc_kzg::point_evaluation(&settings, &bad).is_err());
	// wrong length
	assert!(pc_kzg::point_evaluation(&settings, &input[..191]).is_err());
}
