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

//! EIP-4844 flows against the development trusted setup (a fixture with a
//! known secret; never deploy it).

use std::path::Path;

use feldspar::curves::bls12_381::{codec, Fr};
use feldspar::error::Error;
use feldspar::kzg::{
	blob_to_kzg_commitment, blob_to_kzg_commitment_parallel, compute_blob_kzg_proof,
	compute_kzg_proof, compute_kzg_proof_parallel, verify_blob_kzg_proof,
	verify_blob_kzg_proof_batch, verify_blob_kzg_proof_batch_parallel, verify_kzg_proof,
	Blob, KzgSettings, BYTES_PER_BLOB, FIELD_ELEMENTS_PER_BLOB,
};
use feldspar::pool::TaskPool;

fn settings() -> KzgSettings {
	KzgSettings::load(Path::new(concat!(
		env!("CARGO_MANIFEST_DIR"),
		"/tests/fixtures/trusted_setup_test.txt"
	)))
	.expect("fixture parses")
}

/// blob[i] = i as a canonical big-endian scalar.
fn sequential_blob() -> Blob {
	let mut bytes = vec![0u8; BYTES_PER_BLOB];
	for i in 0..FIELD_ELEMENTS_PER_BLOB {
		bytes[32 * i + 24..32 * (i + 1)].copy_from_slice(&(i as u64).to_be_bytes());
	}
	Blob::from_bytes(&bytes).unwrap()
}

fn blob_of_byte(b: u8) -> Blob {
	// low bytes only, so every chunk stays canonical
	let mut bytes = vec![0u8; BYTES_PER_BLOB];
	for i in 0..FIELD_ELEMENTS_PER_BLOB {
		bytes[32 * i + 31] = b ^ (i as u8);
	}
	Blob::from_bytes(&bytes).unwrap()
}

#[test]
fn commitment_matches_reference_value() {
	let s = settings();
	let blob = sequential_blob();
	let c = blob_to_kzg_commitment(&s, &blob).unwrap();
	assert_eq!(
		hex::encode(codec::g1_to_compressed(&c.0)),
		"8064411e70c964a246a3bcf9ac59d7002813aa8a6c102b9a01db0ae7fa7fe0e3da7eadc98eb5fbe43f8e8f481184de52"
	);
	// parallel commitment agrees bit for bit
	let pool = TaskPool::new(0);
	let cp = blob_to_kzg_commitment_parallel(&pool, &s, &blob).unwrap();
	assert_eq!(c, cp);
	pool.shutdown();
	s.destroy();
}

#[test]
fn prove_and_verify_at_challenge_seven() {
	let s = settings();
	let blob = sequential_blob();
	let c = blob_to_kzg_commitment(&s, &blob).unwrap();
	let z = Fr::from_u64(7);
	let (proof, y) = compute_kzg_proof(&s, &blob, &z).unwrap();
	assert_eq!(
		hex::encode(codec::fr_to_bytes(&y)),
		"2b6a14032c91997695d2ba42cf6891816035ca1ac0cc4100d6ccdf6607af6f51"
	);
	assert_eq!(
		hex::encode(codec::g1_to_compressed(&proof.0)),
		"91ca417ff5f602a1c4c504a2a678d0408925be96755671772b7ec2d78fb5eec92a8227a76ad50a51fcad209faa508ec4"
	);
	assert!(verify_kzg_proof(&s, &c, &z, &y, &proof));
	// wrong claimed value fails
	assert!(!verify_kzg_proof(&s, &c, &z, &(y + Fr::ONE), &proof));
	// wrong challenge fails
	assert!(!verify_kzg_proof(&s, &c, &Fr::from_u64(8), &y, &proof));
	// the parallel proof path is bit-identical
	let pool = TaskPool::new(2);
	let (proof_par, y_par) = compute_kzg_proof_parallel(&pool, &s, &blob, &z).unwrap();
	assert_eq!(proof_par, proof);
	assert_eq!(y_par, y);
	pool.shutdown();
}

#[test]
fn proof_at_in_domain_point() {
	let s = settings();
	let blob = sequential_blob();
	let c = blob_to_kzg_commitment(&s, &blob).unwrap();
	// domain[5] is an evaluation point; y must be the stored value
	let z = s.domain[5];
	let (proof, y) = compute_kzg_proof(&s, &blob, &z).unwrap();
	assert_eq!(y, Fr::from_u64(5));
	assert!(verify_kzg_proof(&s, &c, &z, &y, &proof));
}

#[test]
fn blob_proof_lifecycle() {
	let s = settings();
	let blob = blob_of_byte(0x37);
	let c = blob_to_kzg_commitment(&s, &blob).unwrap();
	let proof = compute_blob_kzg_proof(&s, &blob, &c).unwrap();
	assert!(verify_blob_kzg_proof(&s, &blob, &c, &proof).unwrap());
	// a different blob does not verify under this proof
	let other = blob_of_byte(0x38);
	assert!(!verify_blob_kzg_proof(&s, &other, &c, &proof).unwrap());
}

#[test]
fn batch_verification_and_parallel_parity() {
	let s = settings();
	let blobs: Vec<Blob> = [1u8, 2, 3].iter().map(|b| blob_of_byte(*b)).collect();
	let commitments: Vec<_> = blobs
		.iter()
		.map(|b| blob_to_kzg_commitment(&s, b).unwrap())
		.collect();
	let proofs: Vec<_> = blobs
		.iter()
		.zip(commitments.iter())
		.map(|(b, c)| compute_blob_kzg_proof(&s, b, c).unwrap())
		.collect();
	let seed = [0x42u8; 32];
	assert!(verify_blob_kzg_proof_batch(&s, &blobs, &commitments, &proofs, &seed).unwrap());
	let pool = TaskPool::new(3);
	assert!(verify_blob_kzg_proof_batch_parallel(
		&pool,
		&s,
		&blobs,
		&commitments,
		&proofs,
		&seed
	)
	.unwrap());
	// swap two proofs: batch fails both ways
	let mut bad = proofs.clone();
	bad.swap(0, 1);
	assert!(!verify_blob_kzg_proof_batch(&s, &blobs, &commitments, &bad, &seed).unwrap());
	assert!(!verify_blob_kzg_proof_batch_parallel(
		&pool,
		&s,
		&blobs,
		&commitments,
		&bad,
		&seed
	)
	.unwrap());
	pool.shutdown();
}

#[test]
fn blob_rejects_non_canonical_chunks() {
	let mut bytes = vec![0u8; BYTES_PER_BLOB];
	bytes[..32].copy_from_slice(&[0xffu8; 32]); // >= r
	let blob = Blob::from_bytes(&bytes).unwrap();
	let s = settings();
	assert!(blob_to_kzg_commitment(&s, &blob).is_err());
}

#[test]
fn setup_parser_rejects_malformed_files() {
	assert!(matches!(
		KzgSettings::parse_text("not a setup"),
		Err(Error::Setup(_))
	));
	assert!(matches!(
		KzgSettings::parse_text("10\n65\n"),
		Err(Error::Setup(_))
	));
	// truncated binary
	assert!(matches!(
		KzgSettings::parse_binary(b"KZGSETUP\x01"),
		Err(Error::Setup(_))
	));
}

#[test]
fn binary_round_trip_equals_text() {
	let s = settings();
	let bin = s.to_binary();
	let s2 = KzgSettings::parse_binary(&bin).unwrap();
	assert_eq!(s.g1_lagrange, s2.g1_lagrange);
	assert_eq!(s.g2_monomial, s2.g2_monomial);
	assert_eq!(s.domain, s2.domain);
}
