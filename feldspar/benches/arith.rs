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

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use feldspar::arith::BigInt;
use feldspar::curves::bls12_381::{Fq, Fq12, Fq2, Fr, G1Affine, G2Affine};
use feldspar::ec::{msm, mul};
use feldspar::pool::TaskPool;

fn field_ops(c: &mut Criterion) {
	let mut rng = ChaCha20Rng::seed_from_u64(1);
	let a = Fq::rand(&mut rng);
	let b = Fq::rand(&mut rng);
	let mut group = c.benchmark_group("fq");
	group.bench_function("mul", |bch| bch.iter(|| black_box(a) * black_box(b)));
	group.bench_function("square", |bch| bch.iter(|| black_box(a).square()));
	group.bench_function("inverse", |bch| bch.iter(|| black_box(a).inverse()));
	group.bench_function("inverse_vartime", |bch| {
		bch.iter(|| black_box(a).inverse_vartime())
	});
	group.bench_function("sqrt", |bch| bch.iter(|| black_box(a.square()).sqrt()));
	group.finish();

	let a2 = Fq2::rand(&mut rng);
	let b2 = Fq2::rand(&mut rng);
	let a12 = Fq12::rand(&mut rng);
	let mut group = c.benchmark_group("tower");
	group.bench_function("fq2_mul", |bch| bch.iter(|| black_box(a2) * black_box(b2)));
	group.bench_function("fq2_square", |bch| bch.iter(|| black_box(a2).square()));
	group.bench_function("fq12_mul", |bch| {
		bch.iter(|| black_box(a12) * black_box(a12))
	});
	group.finish();
}

fn scalar_mul(c: &mut Criterion) {
	let mut rng = ChaCha20Rng::seed_from_u64(2);
	let k = Fr::rand(&mut rng).into_bigint();
	let g1 = G1Affine::generator();
	let g2 = G2Affine::generator();
	let mut group = c.benchmark_group("scalar_mul");
	group.bench_function("g1_glv_ct", |bch| {
		bch.iter(|| mul::mul_ct(black_box(&g1), black_box(&k)))
	});
	group.bench_function("g1_wnaf_vartime", |bch| {
		bch.iter(|| mul::mul_vartime(black_box(&g1), black_box(&k)))
	});
	group.bench_function("g2_glv_ct", |bch| {
		bch.iter(|| mul::mul_ct(black_box(&g2), black_box(&k)))
	});
	group.finish();
}

fn multi_scalar_mul(c: &mut Criterion) {
	let mut rng = ChaCha20Rng::seed_from_u64(3);
	let mut group = c.benchmark_group("msm_g1");
	for size in [64usize, 256, 1024] {
		let points: Vec<G1Affine> = (0..size)
			.map(|_| {
				mul::mul_vartime(&G1Affine::generator(), &Fr::rand(&mut rng).into_bigint())
					.to_affine_vartime()
			})
			.collect();
		let scalars: Vec<BigInt<4>> =
			(0..size).map(|_| Fr::rand(&mut rng).into_bigint()).collect();
		group.bench_with_input(BenchmarkId::new("vartime", size), &size, |bch, _| {
			bch.iter(|| msm::msm_vartime(black_box(&points), black_box(&scalars)))
		});
		// a fresh pool per phase keeps the sequential numbers honest
		group.bench_with_input(BenchmarkId::new("parallel", size), &size, |bch, _| {
			let pool = TaskPool::new(0);
			bch.iter(|| msm::msm_parallel(&pool, black_box(&points), black_box(&scalars)));
			pool.shutdown();
		});
	}
	group.finish();
}

criterion_group!(benches, field_ops, scalar_mul, multi_scalar_mul);
criterion_main!(benches);
