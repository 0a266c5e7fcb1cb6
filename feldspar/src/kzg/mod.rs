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

//! EIP-4844 KZG commitments over BLS12-381.
//!
//! Blobs are 4096 scalars in evaluation form over the 4096th roots of
//! unity, stored (like the trusted setup's Lagrange points) in
//! bit-reversal permutation order. The Lagrange MSM dominates commitment
//! cost and is delegated to the Pippenger core; batch verification folds
//! every proof into two pairings.

use std::fs;
use std::path::Path;

use sha2::{Digest, Sha256};

use crate::arith::BigInt;
use crate::curves::bls12_381::{
	codec, Engine, Fr, G1Affine, G1Projective, G2Affine, G2Prepared,
};
use crate::ec::{msm, mul, Projective};
use crate::error::{Error, SetupError};
use crate::fields::FpParams;
use crate::pool::TaskPool;

pub const FIELD_ELEMENTS_PER_BLOB: usize = 4096;
pub const BYTES_PER_FIELD_ELEMENT: usize = 32;
pub const BYTES_PER_BLOB: usize = FIELD_ELEMENTS_PER_BLOB * BYTES_PER_FIELD_ELEMENT;
const G2_POINTS: usize = 65;
const LOG2_BLOB: u32 = 12;

const CHALLENGE_DOMAIN: &[u8; 16] = b"FSBLOBVERIFY_V1_";
const BINARY_MAGIC: &[u8; 8] = b"KZGSETUP";

/// A blob: 4096 canonical 32-byte big-endian scalars.
#[derive(Clone)]
pub struct Blob(pub Box<[u8; BYTES_PER_BLOB]>);

/// 48-byte compressed G1 commitment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KzgCommitment(pub G1Affine);

/// 48-byte compressed G1 proof.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KzgProof(pub G1Affine);

impl Blob {
	pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
		if bytes.len() != BYTES_PER_BLOB {
			return Err(Error::Codec(crate::error::CodecError::Length {
				expected: BYTES_PER_BLOB,
				got: bytes.len(),
			}));
		}
		let mut b = Box::new([0u8; BYTES_PER_BLOB]);
		b.copy_from_slice(bytes);
		Ok(Self(b))
	}

	/// Rejects any chunk >= r; no partial output.
	pub fn to_scalars(&self) -> Result<Vec<Fr>, Error> {
		self.0
			.chunks(BYTES_PER_FIELD_ELEMENT)
			.map(codec::fr_from_bytes)
			.collect()
	}
}

/// The parsed trusted setup: G1 Lagrange points (bit-reversed order, as
/// shipped), G2 monomial points, and the matching evaluation domain.
/// Shared read-only for the process lifetime; `destroy` tears it down
/// explicitly.
pub struct KzgSettings {
	pub g1_lagrange: Vec<G1Affine>,
	pub g2_monomial: Vec<G2Affine>,
	/// 4096th roots of unity in bit-reversal order: `domain[i]` is the
	/// evaluation point of `blob[i]`.
	pub domain: Vec<Fr>,
}

fn bit_reverse(i: usize, bits: u32) -> usize {
	i.reverse_bits() >> (usize::BITS - bits)
}

fn bit_reversal_permutation<T: Copy>(v: &mut [T]) {
	let bits = v.len().trailing_zeros();
	debug_assert!(v.len().is_power_of_two());
	for i in 0..v.len() {
		let j = bit_reverse(i, bits);
		if i < j {
			v.swap(i, j);
		}
	}
}

fn compute_domain() -> Vec<Fr> {
	// omega = root^(2^(32 - 12)): an element of exact order 4096
	let root = Fr::from_montgomery_unchecked(
		<crate::curves::bls12_381::FrParams as FpParams<4>>::TWO_ADIC_ROOT_OF_UNITY,
	);
	let mut omega = root;
	for _ in 0..(32 - LOG2_BLOB) {
		omega = omega.square();
	}
	let mut domain = Vec::with_capacity(FIELD_ELEMENTS_PER_BLOB);
	let mut acc = Fr::ONE;
	for _ in 0..FIELD_ELEMENTS_PER_BLOB {
		domain.push(acc);
		acc *= omega;
	}
	debug_assert!(acc.is_one());
	bit_reversal_permutation(&mut domain);
	domain
}

impl KzgSettings {
	/// Loads a setup file, accepting both the c-kzg-4844 text format and
	/// the compact binary form (sniffed by the magic header).
	pub fn load(path: &Path) -> Result<Self, Error> {
		let data = fs::read(path)
			.map_err(|e| Error::Setup(SetupError::Io(e.to_string())))?;
		if data.starts_with(BINARY_MAGIC) {
			Self::parse_binary(&data)
		} else {
			let text = std::str::from_utf8(&data)
				.map_err(|_| Error::Setup(SetupError::Malformed("not utf-8")))?;
			Self::parse_text(text)
		}
	}

	/// The c-kzg text format: two counts, then one compressed point in
	/// lowercase hex per line (G1 Lagrange first, then G2 monomial).
	pub fn parse_text(text: &str) -> Result<Self, Error> {
		let mut lines = text.lines().filter(|l| !l.trim().is_empty());
		let n1: usize = lines
			.next()
			.and_then(|l| l.trim().parse().ok())
			.ok_or(Error::Setup(SetupError::Malformed("missing G1 count")))?;
		let n2: usize = lines
			.next()
			.and_then(|l| l.trim().parse().ok())
			.ok_or(Error::Setup(SetupError::Malformed("missing G2 count")))?;
		if n1 != FIELD_ELEMENTS_PER_BLOB {
			return Err(Error::Setup(SetupError::WrongSize {
				expected: FIELD_ELEMENTS_PER_BLOB,
				got: n1,
			}));
		}
		if n2 != G2_POINTS {
			return Err(Error::Setup(SetupError::WrongSize { expected: G2_POINTS, got: n2 }));
		}
		let mut g1 = Vec::with_capacity(n1);
		for _ in 0..n1 {
			let line = lines
				.next()
				.ok_or(Error::Setup(SetupError::Malformed("truncated G1 section")))?;
			let bytes = decode_hex(line.trim())
				.ok_or(Error::Setup(SetupError::Malformed("bad G1 hex")))?;
			g1.push(codec::g1_from_compressed(&bytes).map_err(setup_point_err)?);
		}
		let mut g2 = Vec::with_capacity(n2);
		for _ in 0..n2 {
			let line = lines
				.next()
				.ok_or(Error::Setup(SetupError::Malformed("truncated G2 section")))?;
			let bytes = decode_hex(line.trim())
				.ok_or(Error::Setup(SetupError::Malformed("bad G2 hex")))?;
			g2.push(codec::g2_from_compressed(&bytes).map_err(setup_point_err)?);
		}
		Ok(Self { g1_lagrange: g1, g2_monomial: g2, domain: compute_domain() })
	}

	/// The compact binary form: magic, two u32 LE counts, then the raw
	/// compressed points.
	pub fn parse_binary(data: &[u8]) -> Result<Self, Error> {
		let body = data
			.strip_prefix(BINARY_MAGIC.as_slice())
			.ok_or(Error::Setup(SetupError::Malformed("missing magic")))?;
		if body.len() < 8 {
			return Err(Error::Setup(SetupError::Malformed("truncated header")));
		}
		let n1 = u32::from_le_bytes(body[0..4].try_into().expect("sliced")) as usize;
		let n2 = u32::from_le_bytes(body[4..8].try_into().expect("sliced")) as usize;
		if n1 != FIELD_ELEMENTS_PER_BLOB {
			return Err(Error::Setup(SetupError::WrongSize {
				expected: FIELD_ELEMENTS_PER_BLOB,
				got: n1,
			}));
		}
		if n2 != G2_POINTS {
			return Err(Error::Setup(SetupError::WrongSize { expected: G2_POINTS, got: n2 }));
		}
		let need = n1 * 48 + n2 * 96;
		let body = &body[8..];
		if body.len() != need {
			return Err(Error::Setup(SetupError::WrongSize { expected: need, got: body.len() }));
		}
		let mut g1 = Vec::with_capacity(n1);
		for chunk in body[..n1 * 48].chunks(48) {
			g1.push(codec::g1_from_compressed(chunk).map_err(setup_point_err)?);
		}
		let mut g2 = Vec::with_capacity(n2);
		for chunk in body[n1 * 48..].chunks(96) {
			g2.push(codec::g2_from_compressed(chunk).map_err(setup_point_err)?);
		}
		Ok(Self { g1_lagrange: g1, g2_monomial: g2, domain: compute_domain() })
	}

	/// Serialises to the compact binary form.
	pub fn to_binary(&self) -> Vec<u8> {
		let mut out = Vec::with_capacity(8 + 8 + self.g1_lagrange.len() * 48 + 96 * self.g2_monomial.len());
		out.extend_from_slice(BINARY_MAGIC);
		out.extend_from_slice(&(self.g1_lagrange.len() as u32).to_le_bytes());
		out.extend_from_slice(&(self.g2_monomial.len() as u32).to_le_bytes());
		for p in &self.g1_lagrange {
			out.extend_from_slice(&codec::g1_to_compressed(p));
		}
		for p in &self.g2_monomial {
			out.extend_from_slice(&codec::g2_to_compressed(p));
		}
		out
	}

	/// Explicit teardown; the context is the unique owner of its tables.
	pub fn destroy(self) {
		drop(self);
	}
}

fn setup_point_err(e: Error) -> Error {
	match e {
		Error::Subgroup => Error::Setup(SetupError::Malformed("setup point outside subgroup")),
		Error::Codec(_) => Error::Setup(SetupError::Malformed("invalid setup point")),
		x => x,
	}
}

fn decode_hex(s: &str) -> Option<Vec<u8>> {
	if s.len() % 2 != 0 {
		return None;
	}
	(0..s.len())
		.step_by(2)
		.map(|i| u8::from_str_radix(&s[i..i + 2], 16).ok())
		.collect()
}

// ---- core operations ----

/// `commit(blob) = sum blob_i L_i`.
pub fn blob_to_kzg_commitment(settings: &KzgSettings, blob: &Blob) -> Result<KzgCommitment, Error> {
	let scalars: Vec<BigInt<4>> =
		blob.to_scalars()?.iter().map(|s| s.into_bigint()).collect();
	let c = msm::msm_vartime(&settings.g1_lagrange, &scalars)?;
	Ok(KzgCommitment(c.to_affine_vartime()))
}

/// Parallel commitment via the parallel MSM.
pub fn blob_to_kzg_commitment_parallel(
	pool: &TaskPool,
	settings: &KzgSettings,
	blob: &Blob,
) -> Result<KzgCommitment, Error> {
	let scalars: Vec<BigInt<4>> =
		blob.to_scalars()?.iter().map(|s| s.into_bigint()).collect();
	let c = msm::msm_parallel(pool, &settings.g1_lagrange, &scalars)?;
	Ok(KzgCommitment(c.to_affine_vartime()))
}

/// Barycentric evaluation of the blob polynomial at an arbitrary point.
fn evaluate_polynomial(settings: &KzgSettings, scalars: &[Fr], z: &Fr) -> Fr {
	// z in the domain: the evaluation is just the stored value
	for (x, f) in settings.domain.iter().zip(scalars.iter()) {
		if x == z {
			return *f;
		}
	}
	// p(z) = (z^n - 1)/n * sum f_i x_i / (z - x_i)
	let mut denoms: Vec<Fr> = settings.domain.iter().map(|x| *z - *x).collect();
	crate::ec::batch::batch_inverse(&mut denoms);
	let mut acc = Fr::ZERO;
	for ((f, x), d) in scalars.iter().zip(settings.domain.iter()).zip(denoms.iter()) {
		acc += *f * *x * *d;
	}
	let n = Fr::from_u64(FIELD_ELEMENTS_PER_BLOB as u64);
	let zn = pow_n(z);
	acc * (zn - Fr::ONE)
		* n.inverse_vartime().expect("the domain size is invertible mod r")
}

fn pow_n(z: &Fr) -> Fr {
	let mut acc = *z;
	for _ in 0..LOG2_BLOB {
		acc = acc.square();
	}
	acc
}

/// Quotient scalars `(p(X) - y)/(X - z)` in evaluation form, plus `y`.
fn compute_quotient(
	settings: &KzgSettings,
	blob: &Blob,
	z: &Fr,
) -> Result<(Vec<BigInt<4>>, Fr), Error> {
	let scalars = blob.to_scalars()?;
	let y = evaluate_polynomial(settings, &scalars, z);
	// q_i = (f_i - y) / (x_i - z), with the in-domain challenge handled
	// by the derivative-style correction term
	let in_domain = settings.domain.iter().position(|x| x == z);
	let mut quotient = vec![Fr::ZERO; FIELD_ELEMENTS_PER_BLOB];
	let mut denoms: Vec<Fr> = settings.domain.iter().map(|x| *x - *z).collect();
	crate::ec::batch::batch_inverse(&mut denoms);
	match in_domain {
		None => {
			for i in 0..FIELD_ELEMENTS_PER_BLOB {
				quotient[i] = (scalars[i] - y) * denoms[i];
			}
		}
		Some(m) => {
			// x_m = z: q_m collects the corrective sum
			let zinv = z
				.inverse_vartime()
				.expect("domain points are nonzero");
			let mut qm = Fr::ZERO;
			for i in 0..FIELD_ELEMENTS_PER_BLOB {
				if i == m {
					continue;
				}
				// q_i = (f_i - y)/(x_i - z)
				quotient[i] = (scalars[i] - y) * denoms[i];
				// q_m -= q_i * x_i / z
				qm -= quotient[i] * settings.domain[i] * zinv;
			}
			quotient[m] = qm;
		}
	}
	let q_big: Vec<BigInt<4>> = quotient.iter().map(|s| s.into_bigint()).collect();
	Ok((q_big, y))
}

/// Computes the quotient proof for an arbitrary challenge `z`; returns
/// `(proof, y = p(z))`.
pub fn compute_kzg_proof(
	settings: &KzgSettings,
	blob: &Blob,
	z: &Fr,
) -> Result<(KzgProof, Fr), Error> {
	let (q_big, y) = compute_quotient(settings, blob, z)?;
	let proof = msm::msm_vartime(&settings.g1_lagrange, &q_big)?;
	Ok((KzgProof(proof.to_affine_vartime()), y))
}

/// Parallel proof construction: the quotient MSM runs on the pool.
pub fn compute_kzg_proof_parallel(
	pool: &TaskPool,
	settings: &KzgSettings,
	blob: &Blob,
	z: &Fr,
) -> Result<(KzgProof, Fr), Error> {
	let (q_big, y) = compute_quotient(settings, blob, z)?;
	let proof = msm::msm_parallel(pool, &settings.g1_lagrange, &q_big)?;
	Ok((KzgProof(proof.to_affine_vartime()), y))
}

/// `e(C - [y] g1, g2) == e(proof, [s] g2 - [z] g2)`.
pub fn verify_kzg_proof(
	settings: &KzgSettings,
	commitment: &KzgCommitment,
	z: &Fr,
	y: &Fr,
	proof: &KzgProof,
) -> bool {
	let g2_gen = G2Affine::generator();
	let s_g2 = settings.g2_monomial[1];
	// X - z in G2
	let z_g2 = mul::mul_vartime(&g2_gen, &z.into_bigint());
	let x_minus_z = (Projective::from(s_g2) + (-z_g2)).to_affine_vartime();
	// C - y in G1
	let y_g1 = mul::mul_vartime(&G1Affine::generator(), &y.into_bigint());
	let c_minus_y = (Projective::from(commitment.0) + (-y_g1)).to_affine_vartime();
	Engine::multi_pairing_is_one(&[
		(c_minus_y, G2Prepared::from(-g2_gen)),
		(proof.0, G2Prepared::from(x_minus_z)),
	])
}

/// The Fiat-Shamir challenge binding a blob to its commitment.
fn compute_challenge(blob: &Blob, commitment: &KzgCommitment) -> Fr {
	let mut h = Sha256::new();
	h.update(CHALLENGE_DOMAIN);
	h.update((FIELD_ELEMENTS_PER_BLOB as u64).to_be_bytes());
	h.update(blob.0.as_slice());
	h.update(codec::g1_to_compressed(&commitment.0));
	Fr::from_be_bytes_mod_order(&h.finalize())
}

/// Proof for the blob at its own Fiat-Shamir challenge point.
pub fn compute_blob_kzg_proof(
	settings: &KzgSettings,
	blob: &Blob,
	commitment: &KzgCommitment,
) -> Result<KzgProof, Error> {
	let z = compute_challenge(blob, commitment);
	let (proof, _) = compute_kzg_proof(settings, blob, &z)?;
	Ok(proof)
}

pub fn verify_blob_kzg_proof(
	settings: &KzgSettings,
	blob: &Blob,
	commitment: &KzgCommitment,
	proof: &KzgProof,
) -> Result<bool, Error> {
	let z = compute_challenge(blob, commitment);
	let scalars = blob.to_scalars()?;
	let y = evaluate_polynomial(settings, &scalars, &z);
	Ok(verify_kzg_proof(settings, commitment, &z, &y, proof))
}

fn batch_blinding_scalar(seed: &[u8; 32], i: u64, c: &KzgCommitment, p: &KzgProof) -> Fr {
	let mut h = Sha256::new();
	h.update(seed);
	h.update(i.to_be_bytes());
	h.update(codec::g1_to_compressed(&c.0));
	h.update(codec::g1_to_compressed(&p.0));
	let d = h.finalize();
	// 128-bit scalar, forced odd
	let mut bytes = [0u8; 16];
	bytes.copy_from_slice(&d[..16]);
	bytes[15] |= 1;
	Fr::from_be_bytes_mod_order(&bytes)
}

/// Batch verification: every proof folds into two pairings via the
/// caller-seeded blinding scalars.
pub fn verify_blob_kzg_proof_batch(
	settings: &KzgSettings,
	blobs: &[Blob],
	commitments: &[KzgCommitment],
	proofs: &[KzgProof],
	blinding_seed: &[u8; 32],
) -> Result<bool, Error> {
	verify_batch_inner(settings, blobs, commitments, proofs, blinding_seed, None)
}

/// Parallel sibling: the per-blob evaluations distribute across the pool;
/// the combined pairing check runs once. Same result as the sequential
/// version for the same seed.
pub fn verify_blob_kzg_proof_batch_parallel(
	pool: &TaskPool,
	settings: &KzgSettings,
	blobs: &[Blob],
	commitments: &[KzgCommitment],
	proofs: &[KzgProof],
	blinding_seed: &[u8; 32],
) -> Result<bool, Error> {
	verify_batch_inner(settings, blobs, commitments, proofs, blinding_seed, Some(pool))
}

fn verify_batch_inner(
	settings: &KzgSettings,
	blobs: &[Blob],
	commitments: &[KzgCommitment],
	proofs: &[KzgProof],
	blinding_seed: &[u8; 32],
	pool: Option<&TaskPool>,
) -> Result<bool, Error> {
	if blobs.len() != commitments.len() || blobs.len() != proofs.len() {
		return Err(Error::Aggregation("batch slices differ in length"));
	}
	if blobs.is_empty() {
		return Err(Error::Aggregation("cannot verify an empty batch"));
	}
	let n = blobs.len();
	// per item: r_i, z_i, y_i
	let mut rows: Vec<Option<Result<(Fr, Fr, Fr), Error>>> = vec![None; n];
	let build = |i: usize| -> Result<(Fr, Fr, Fr), Error> {
		let z = compute_challenge(&blobs[i], &commitments[i]);
		let scalars = blobs[i].to_scalars()?;
		let y = evaluate_polynomial(settings, &scalars, &z);
		let r = batch_blinding_scalar(blinding_seed, i as u64, &commitments[i], &proofs[i]);
		Ok((r, z, y))
	};
	match pool {
		None => {
			for (i, row) in rows.iter_mut().enumerate() {
				*row = Some(build(i));
			}
		}
		Some(pool) => {
			pool.sync_scope(|s| {
				for (i, row) in rows.iter_mut().enumerate() {
					let build = &build;
					s.spawn(move |_| {
						*row = Some(build(i));
					});
				}
			});
		}
	}
	// proof_lincomb = sum r_i proof_i ; C_minus_y_lincomb = sum r_i (C_i - y_i g1)
	// proof_z_lincomb = sum r_i z_i proof_i
	let mut proof_lincomb = G1Projective::identity();
	let mut rhs_lincomb = G1Projective::identity();
	for (i, row) in rows.into_iter().enumerate() {
		let (r, z, y) = row.expect("all batch rows are filled")?;
		let r_big = r.into_bigint();
		let rp = mul::mul_vartime(&proofs[i].0, &r_big);
		proof_lincomb = proof_lincomb.add_vartime(&rp);
		let rc = mul::mul_vartime(&commitments[i].0, &r_big);
		let ry = r * y;
		let ry_g1 = mul::mul_vartime(&G1Affine::generator(), &ry.into_bigint());
		let rz = r * z;
		let rz_p = mul::mul_vartime(&proofs[i].0, &rz.into_bigint());
		rhs_lincomb = rhs_lincomb
			.add_vartime(&rc)
			.add_vartime(&(-ry_g1))
			.add_vartime(&rz_p);
	}
	// e(proof_lincomb, [s] g2) == e(rhs_lincomb, g2)
	let s_g2 = settings.g2_monomial[1];
	Ok(Engine::multi_pairing_is_one(&[
		(proof_lincomb.to_affine_vartime(), G2Prepared::from(s_g2)),
		((-rhs_lincomb).to_affine_vartime(), G2Prepared::from(G2Affine::generator())),
	]))
}
