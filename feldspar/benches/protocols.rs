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

use std::path::Path;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use feldspar::curves::bls12_381::{pairing, G1Affine, G2Affine, G2Prepared};
use feldspar::kzg::{blob_to_kzg_commitment, Blob, KzgSettings, BYTES_PER_BLOB};
use feldspar::pool::TaskPool;
use feldspar::sig::{batch_verify, batch_verify_parallel, verify, PublicKey, SecretKey, Signature};

fn pairings(c: &mut Criterion) {
	let g1 = G1Affine::generator();
	let g2 = G2Affine::generator();
	let mut group = c.benchmark_group("pairing");
	group.bench_function("single", |b| {
		b.iter(|| pairing(black_box(&g1), black_box(&g2)))
	});
	group.bench_function("g2_prepare", |b| {
		b.iter(|| G2Prepared::from(black_box(g2)))
	});
	group.finish();
}

fn signatures(c: &mut Criterion) {
	let sk = SecretKey::keygen(&[9u8; 32]).unwrap();
	let pk = sk.public_key();
	let msg = b"benchmark message";
	let sig = sk.sign(msg);
	let mut group = c.benchmark_group("bls_sig");
	group.bench_function("sign", |b| b.iter(|| sk.sign(black_box(msg))));
	group.bench_function("verify", |b| {
		b.iter(|| verify(black_box(&pk), black_box(msg), black_box(&sig)))
	});
	group.finish();

	// batch of 16
	let n = 16;
	let keys: Vec<SecretKey> = (0..n as u8)
		.map(|i| SecretKey::keygen(&[i + 1; 32]).unwrap())
		.collect();
	let pks: Vec<PublicKey> = keys.iter().map(|k| k.public_key()).collect();
	let msgs: Vec<Vec<u8>> = (0..n).map(|i| format!("batch msg {i}").into_bytes()).collect();
	let refs: Vec<&[u8]> = msgs.iter().map(|m| m.as_slice()).collect();
	let sigs: Vec<Signature> = keys
		.iter()
		.zip(refs.iter())
		.map(|(k, m)| k.sign(m))
		.collect();
	let seed = [7u8; 32];
	let mut group = c.benchmark_group("bls_batch_verify");
	group.bench_function("sequential_16", |b| {
		b.iter(|| batch_verify(&pks, &refs, &sigs, &seed))
	});
	group.bench_function("parallel_16", |b| {
		// construct and tear the pool down inside the phase so the idle
		// workers cannot distort the sequential measurement above
		let pool = TaskPool::new(0);
		b.iter(|| batch_verify_parallel(&pool, &pks, &refs, &sigs, &seed));
		pool.shutdown();
	});
	group.finish();
}

fn kzg(c: &mut Criterion) {
	let settings = KzgSettings::load(Path::new(concat!(
		env!("CARGO_MANIFEST_DIR"),
		"/tests/fixtures/trusted_setup_test.txt"
	)))
	.unwrap();
	let mut bytes = vec![0u8; BYTES_PER_BLOB];
	for (i, b) in bytes.iter_mut().enumerate() {
		if i % 32 == 31 {
			*b = (i / 32) as u8;
		}
	}
	let blob = Blob::from_bytes(&bytes).unwrap();
	let mut group = c.benchmark_group("kzg");
	group.sample_size(10);
	group.bench_function("blob_to_commitment", |b| {
		b.iter(|| blob_to_kzg_commitment(&settings, black_box(&blob)))
	});
	group.finish();
}

criterion_group!(benches, pairings, signatures, kzg);
criterion_main!(benches);
