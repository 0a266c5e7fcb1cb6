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

//! End-to-end BLS signature scenarios.

use feldspar::pool::TaskPool;
use feldspar::sig::{
	aggregate, aggregate_verify, batch_verify, batch_verify_parallel,
	fast_aggregate_verify, verify, PublicKey, SecretKey, Signature,
};

#[test]
fn sign_and_verify_known_vector() {
	// sk = thirty-two 0x01 bytes, message "Mr F was here"
	let sk = SecretKey::from_bytes(&[0x01u8; 32]).unwrap();
	let pk = sk.public_key();
	assert_eq!(
		hex::encode(pk.to_bytes()),
		"aa1a1c26055a329817a5759d877a2795f9499b97d6056edde0eea39512f24e8bc874b4471f0501127abb1ea0d9f68ac1"
	);
	let sig = sk.sign(b"Mr F was here");
	assert_eq!(
		hex::encode(sig.to_bytes()),
		"a6e8c95c653d8b87d836ca73028e6b9a6b93b4bbdb256b28e3205c63d4bc6ed1ed8b837aea35e34256309485265901f90699b10fe5b01523750918e786fdbcb01c1cfa2eb5d0ead73ece75de3177d84e353c9b9267ec21b813de380b3fc45045"
	);
	assert!(verify(&pk, b"Mr F was here", &sig));

	// any tampering flips the verdict
	assert!(!verify(&pk, b"Mr F was there", &sig));
	let mut bad = sig.to_bytes();
	bad[50] ^= 0x01;
	match Signature::from_bytes(&bad) {
		Ok(s) => assert!(!verify(&pk, b"Mr F was here", &s)),
		Err(_) => {} // the flip broke the encoding; also a rejection
	}
}

#[test]
fn keygen_matches_reference_vectors() {
	let ikm = hex::decode(
		"c55257c360c07c72029aebc1b53c05ed0362ada38ead3e3e9efa3708e5349553\
		 1f09a6987599d18264c1e1c92f2cf141630c7a3c4ab7c81b2f001698e7463b04",
	)
	.unwrap();
	let sk = SecretKey::keygen(&ikm).unwrap();
	assert_eq!(
		hex::encode(sk.to_bytes()),
		"0d7359d57963ab8fbbde1852dcf553fedbc31f464d80ee7d40ae683122b45070"
	);

	let sk = SecretKey::keygen(&[0x01u8; 32]).unwrap();
	assert_eq!(
		hex::encode(sk.to_bytes()),
		"144b27828e305a2d67fc7f4eea6de706b405cdd1ab8ad2daec046ccdeeec8b79"
	);

	// short IKM is rejected
	assert!(SecretKey::keygen(&[0u8; 16]).is_err());
}

#[test]
fn serialisation_round_trips() {
	let sk = SecretKey::keygen(&[7u8; 32]).unwrap();
	let pk = sk.public_key();
	let sig = sk.sign(b"round trip");
	assert_eq!(PublicKey::from_bytes(&pk.to_bytes()).unwrap(), pk);
	assert_eq!(Signature::from_bytes(&sig.to_bytes()).unwrap(), sig);
	let sk2 = SecretKey::from_bytes(&sk.to_bytes()).unwrap();
	assert_eq!(sk2.sign(b"round trip"), sig);
}

#[test]
fn aggregate_same_message() {
	let keys: Vec<SecretKey> = (0..5u8)
		.map(|i| SecretKey::keygen(&[i + 1; 32]).unwrap())
		.collect();
	let pks: Vec<PublicKey> = keys.iter().map(|k| k.public_key()).collect();
	let msg = b"one message to rule them all";
	let sigs: Vec<Signature> = keys.iter().map(|k| k.sign(msg)).collect();
	let agg = aggregate(&sigs).unwrap();
	assert!(fast_aggregate_verify(&pks, msg, &agg));
	assert!(!fast_aggregate_verify(&pks, b"a different message", &agg));
	assert!(!fast_aggregate_verify(&pks[..4], msg, &agg));
}

#[test]
fn aggregate_distinct_messages() {
	let keys: Vec<SecretKey> = (0..4u8)
		.map(|i| SecretKey::keygen(&[0x40 + i; 32]).unwrap())
		.collect();
	let pks: Vec<PublicKey> = keys.iter().map(|k| k.public_key()).collect();
	let messages: Vec<Vec<u8>> = (0..4u8).map(|i| vec![i; 10]).collect();
	let msg_refs: Vec<&[u8]> = messages.iter().map(|m| m.as_slice()).collect();
	let sigs: Vec<Signature> = keys
		.iter()
		.zip(msg_refs.iter())
		.map(|(k, m)| k.sign(m))
		.collect();
	let agg = aggregate(&sigs).unwrap();
	assert!(aggregate_verify(&pks, &msg_refs, &agg).unwrap());
	// length mismatch is an error, not a false
	assert!(aggregate_verify(&pks[..3], &msg_refs, &agg).is_err());
	// empty aggregation is refused outright
	assert!(aggregate(&[]).is_err());
}

/// The 60-triple batch: all-honest passes, then one flipped message bit
/// fails, with the sequential and parallel paths agreeing throughout.
#[test]
fn batch_verify_sixty_triples_with_tamper() {
	let n = 60usize;
	let keys: Vec<SecretKey> = (0..n)
		.map(|i| {
			let mut ikm = [0u8; 32];
			ikm[0] = (i + 1) as u8;
			ikm[31] = 0xa5;
			SecretKey::keygen(&ikm).unwrap()
		})
		.collect();
	let pks: Vec<PublicKey> = keys.iter().map(|k| k.public_key()).collect();
	let mut messages: Vec<Vec<u8>> = (0..n)
		.map(|i| format!("message number {i} for the batch").into_bytes())
		.collect();
	let sigs: Vec<Signature> = keys
		.iter()
		.zip(messages.iter())
		.map(|(k, m)| k.sign(m))
		.collect();

	let seed = {
		use sha2::{Digest, Sha256};
		let mut out = [0u8; 32];
		out.copy_from_slice(&Sha256::digest(b"Mr F was here"));
		out
	};

	let refs: Vec<&[u8]> = messages.iter().map(|m| m.as_slice()).collect();
	assert!(batch_verify(&pks, &refs, &sigs, &seed).unwrap());

	let pool = TaskPool::new(0);
	assert!(batch_verify_parallel(&pool, &pks, &refs, &sigs, &seed).unwrap());

	// flip one bit of one message
	messages[30][3] ^= 0x01;
	let refs: Vec<&[u8]> = messages.iter().map(|m| m.as_slice()).collect();
	assert!(!batch_verify(&pks, &refs, &sigs, &seed).unwrap());
	assert!(!batch_verify_parallel(&pool, &pks, &refs, &sigs, &seed).unwrap());
	pool.shutdown();
}
