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

//! BLS signatures over BLS12-381 per the IETF draft: public keys in G1,
//! signatures in G2, SHA-256/SSWU hashing.
//!
//! Verification failure is an ordinary `false`; errors are reserved for
//! malformed inputs. The secret key type never leaves this module except
//! through the serialisation methods, zeroises on drop, and deliberately
//! implements neither `Clone` nor `Sync`-friendly sharing: every signing
//! thread derives or deserialises its own copy.

use core::marker::PhantomData;

use hkdf::Hkdf;
use sha2::{Digest, Sha256};
use zeroize::Zeroize;

use crate::arith::BigInt;
use crate::curves::bls12_381::{
	codec, hash::hash_to_g2, Engine, Fr, G1Affine, G1Projective, G2Affine, G2Prepared,
	G2Projective,
};
use crate::ec::mul;
use crate::error::{CodecError, Error};
use crate::pool::TaskPool;

/// The ciphersuite tag: G2 signatures, SHA-256, SSWU, basic scheme.
pub const DST: &[u8] = b"BLS_SIG_BLS12381G2_XMD:SHA-256_SSWU_RO_NUL_";

/// A secret scalar; zeroised on drop, not cloneable, not shareable.
pub struct SecretKey {
	sk: Fr,
	// keep the type !Sync: signing state is never shared across threads
	_not_sync: PhantomData<core::cell::Cell<()>>,
}

impl Drop for SecretKey {
	fn drop(&mut self) {
		self.sk.zeroize();
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PublicKey(pub G1Affine);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Signature(pub G2Affine);

impl SecretKey {
	/// EIP-2333 `hkdf_mod_r`: HKDF-SHA256 with the salt re-hashed until a
	/// non-zero scalar mod r appears.
	pub fn keygen(ikm: &[u8]) -> Result<Self, Error> {
		if ikm.len() < 32 {
			return Err(Error::Codec(CodecError::Length { expected: 32, got: ikm.len() }));
		}
		let mut salt: Vec<u8> = b"BLS-SIG-KEYGEN-SALT-".to_vec();
		let mut ikm_padded = ikm.to_vec();
		ikm_padded.push(0u8);
		loop {
			salt = Sha256::digest(&salt).to_vec();
			let hk = Hkdf::<Sha256>::new(Some(&salt), &ikm_padded);
			let mut okm = [0u8; 48];
			hk.expand(&[0u8, 48u8], &mut okm)
				.expect("48 bytes is a valid HKDF-SHA256 output length");
			let sk = Fr::from_be_bytes_mod_order(&okm);
			okm.zeroize();
			if !sk.is_zero() {
				ikm_padded.zeroize();
				return Ok(Self { sk, _not_sync: PhantomData });
			}
		}
	}

	/// Deserialises a 32-byte big-endian scalar; zero is rejected.
	pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
		let sk = codec::fr_from_bytes(bytes)?;
		if sk.is_zero() {
			return Err(Error::Codec(CodecError::NonCanonicalScalar));
		}
		Ok(Self { sk, _not_sync: PhantomData })
	}

	pub fn to_bytes(&self) -> [u8; 32] {
		codec::fr_to_bytes(&self.sk)
	}

	pub fn public_key(&self) -> PublicKey {
		let p = mul::mul_ct(&G1Affine::generator(), &self.sk.into_bigint());
		PublicKey(p.to_affine())
	}

	/// `sigma = sk H(m)`; the scalar multiplication is constant-time.
	pub fn sign(&self, message: &[u8]) -> Signature {
		let h = hash_to_g2(message, DST);
		let sigma = mul::mul_ct(&h, &self.sk.into_bigint());
		Signature(sigma.to_affine())
	}
}

impl PublicKey {
	pub fn to_bytes(&self) -> [u8; 48] {
		codec::g1_to_compressed(&self.0)
	}

	/// Full validation: canonical encoding, on curve, in subgroup,
	/// not the identity.
	pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
		let p = codec::g1_from_compressed(bytes)?;
		if p.infinity {
			return Err(Error::Codec(CodecError::Flags));
		}
		Ok(Self(p))
	}
}

impl Signature {
	pub fn to_bytes(&self) -> [u8; 96] {
		codec::g2_to_compressed(&self.0)
	}

	pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
		Ok(Self(codec::g2_from_compressed(bytes)?))
	}
}

/// `e(g1, sigma) == e(pk, H(m))`, evaluated as one 2-pair product with a
/// single final exponentiation.
pub fn verify(pk: &PublicKey, message: &[u8], sig: &Signature) -> bool {
	if pk.0.infinity || sig.0.infinity {
		return false;
	}
	let h = hash_to_g2(message, DST);
	let neg_gen = -G1Affine::generator();
	Engine::multi_pairing_is_one(&[
		(neg_gen, G2Prepared::from(sig.0)),
		(pk.0, G2Prepared::from(h)),
	])
}

/// Sums signatures; errors on an empty set.
pub fn aggregate(sigs: &[Signature]) -> Result<Signature, Error> {
	if sigs.is_empty() {
		return Err(Error::Aggregation("cannot aggregate zero signatures"));
	}
	let mut acc = G2Projective::identity();
	for s in sigs {
		acc = acc.mixed_add_vartime(&s.0);
	}
	Ok(Signature(acc.to_affine_vartime()))
}

/// Same-message aggregate verification: public keys are summed in G1
/// first, then a single pairing check runs.
pub fn fast_aggregate_verify(pks: &[PublicKey], message: &[u8], sig: &Signature) -> bool {
	if pks.is_empty() {
		return false;
	}
	let mut acc = G1Projective::identity();
	for pk in pks {
		acc = acc.mixed_add_vartime(&pk.0);
	}
	let apk = PublicKey(acc.to_affine_vartime());
	verify(&apk, message, sig)
}

/// Distinct-message aggregate verification: an (n+1)-pairing product.
pub fn aggregate_verify(
	pks: &[PublicKey],
	messages: &[&[u8]],
	sig: &Signature,
) -> Result<bool, Error> {
	if pks.len() != messages.len() {
		return Err(Error::Aggregation("key and message counts differ"));
	}
	if pks.is_empty() {
		return Err(Error::Aggregation("cannot verify an empty aggregate"));
	}
	let mut pairs = Vec::with_capacity(pks.len() + 1);
	pairs.push((-G1Affine::generator(), G2Prepared::from(sig.0)));
	for (pk, msg) in pks.iter().zip(messages.iter()) {
		if pk.0.infinity {
			return Ok(false);
		}
		let h = hash_to_g2(msg, DST);
		pairs.push((pk.0, G2Prepared::from(h)));
	}
	Ok(Engine::multi_pairing_is_one(&pairs))
}

/// Derives the 128-bit blinding scalar for entry `i` of a batch from the
/// caller's 32-byte seed and the entry's bytes.
fn blinding_scalar(seed: &[u8; 32], index: u64, pk: &PublicKey, msg: &[u8], sig: &Signature) -> BigInt<4> {
	let mut h = Sha256::new();
	h.update(seed);
	h.update(index.to_be_bytes());
	h.update(pk.to_bytes());
	h.update(Sha256::digest(msg));
	h.update(sig.to_bytes());
	let d = h.finalize();
	let mut limbs = [0u64; 4];
	for i in 0..2 {
		let mut chunk = [0u8; 8];
		chunk.copy_from_slice(&d[8 * i..8 * (i + 1)]);
		limbs[i] = u64::from_be_bytes(chunk);
	}
	// 128-bit scalar, forced odd so it is never zero
	limbs[0] |= 1;
	BigInt(limbs)
}

/// Batch verification of independent `(pk, m, sig)` triples.
///
/// Each pair is blinded by a fresh 128-bit scalar derived from the
/// caller-supplied seed, which defeats cancellation between otherwise
/// invalid signatures. One Miller loop per pair, one shared final
/// exponentiation.
pub fn batch_verify(
	pks: &[PublicKey],
	messages: &[&[u8]],
	sigs: &[Signature],
	blinding_seed: &[u8; 32],
) -> Result<bool, Error> {
	let pairs = batch_pairs(pks, messages, sigs, blinding_seed, None)?;
	Ok(Engine::multi_pairing_is_one(&pairs))
}

/// Parallel batch verification: pair preparation (hashing, blinding and
/// the two scalar multiplications per entry) and the per-pair Miller
/// loops distribute across the pool; the single final exponentiation
/// runs on the caller.
pub fn batch_verify_parallel(
	pool: &TaskPool,
	pks: &[PublicKey],
	messages: &[&[u8]],
	sigs: &[Signature],
	blinding_seed: &[u8; 32],
) -> Result<bool, Error> {
	let pairs = batch_pairs(pks, messages, sigs, blinding_seed, Some(pool))?;
	Ok(Engine::multi_pairing_is_one_parallel(pool, &pairs))
}

type BatchPair = (G1Affine, G2Prepared);

fn batch_pairs(
	pks: &[PublicKey],
	messages: &[&[u8]],
	sigs: &[Signature],
	blinding_seed: &[u8; 32],
	pool: Option<&TaskPool>,
) -> Result<Vec<BatchPair>, Error> {
	if pks.len() != messages.len() || pks.len() != sigs.len() {
		return Err(Error::Aggregation("batch slices differ in length"));
	}
	if pks.is_empty() {
		return Err(Error::Aggregation("cannot verify an empty batch"));
	}
	for (pk, sig) in pks.iter().zip(sigs.iter()) {
		if pk.0.infinity || sig.0.infinity {
			return Err(Error::Aggregation("identity elements are not verifiable"));
		}
	}

	// per entry i with blinding r_i:
	//   e(-g1, [r_i] sigma_i) * e([r_i] pk_i, H(m_i))
	let build = |i: usize| -> (BatchPair, BatchPair) {
		let r = blinding_scalar(blinding_seed, i as u64, &pks[i], messages[i], &sigs[i]);
		let h = hash_to_g2(messages[i], DST);
		let blinded_sig = mul::mul_vartime(&sigs[i].0, &r).to_affine_vartime();
		let blinded_pk = mul::mul_vartime(&pks[i].0, &r).to_affine_vartime();
		(
			(-G1Affine::generator(), G2Prepared::from(blinded_sig)),
			(blinded_pk, G2Prepared::from(h)),
		)
	};

	let n = pks.len();
	let mut slots: Vec<Option<(BatchPair, BatchPair)>> = vec![None; n];
	match pool {
		None => {
			for (i, slot) in slots.iter_mut().enumerate() {
				*slot = Some(build(i));
			}
		}
		Some(pool) => {
			pool.sync_scope(|s| {
				for (i, slot) in slots.iter_mut().enumerate() {
					let build = &build;
					s.spawn(move |_| {
						*slot = Some(build(i));
					});
				}
			});
		}
	}
	let mut pairs = Vec::with_capacity(2 * n);
	for slot in slots {
		let (a, b) = slot.expect("every batch slot is filled before the scope exits");
		pairs.push(a);
		pairs.push(b);
	}
	Ok(pairs)
}
