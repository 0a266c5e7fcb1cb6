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

//! Generated field parameters; see the repository notes on constant
//! generation. Do not edit the tables by hand.

use crate::arith::BigInt;
use crate::fields::{Fp, FpParams, FpWide, Fp12Params, Fp2, Fp2Params, Fp6Params, SqrtAlgo};

pub type Fq = Fp<FqParams, 6>;
pub type Fr = Fp<FrParams, 4>;
pub type Fq2 = Fp2<Fq2Params, 6>;
pub type Fq6 = crate::fields::Fp6<Fq6Params, 6>;
pub type Fq12 = crate::fields::Fp12<Fq12Params, 6>;

#[derive(Clone, Copy, Debug)]
pub struct FqParams;

impl FpParams<6> for FqParams {
	const MODULUS: BigInt<6> = BigInt([0x8508c00000000001, 0x170b5d4430000000, 0x1ef3622fba094800, 0x1a22d9f300f5138f, 0xc63b05c06ca1493b, 0x01ae3a4617c510ea]);
	const R: BigInt<6> = BigInt([0x02cdffffffffff68, 0x51409f837fffffb1, 0x9f7db3a98a7d3ff2, 0x7b4e97b76e7c6305, 0x4cf495bf803c84e8, 0x008d6661e2fdf49a]);
	const R2: BigInt<6> = BigInt([0xb786686c9400cd22, 0x0329fcaab00431b1, 0x22a5f11162d6b46d, 0xbfdf7d03827dc3ac, 0x837e92f041790bf9, 0x006dfccb1e914b88]);
	const INV: u64 = 0x8508bfffffffffff;
	const TWO_ADICITY: u32 = 46;
	const TRACE_MINUS_ONE_DIV_TWO: BigInt<6> = BigInt([0xba88600000010a11, 0xc45f741290002e16, 0xb3e601ea271e3de6, 0x0b80d94292763445, 0x748c2f8a21d58c76, 0x000000000000035c]);
	const TWO_ADIC_ROOT_OF_UNITY: BigInt<6> = BigInt([0x68f876aa8bb191f2, 0x254e4780a6722e51, 0xa818ea191f8a0eaf, 0x2c1a6dd31d8d5057, 0xcce5a0cba0df931b, 0x00ba7904c8cf8495]);
	const MODULUS_MINUS_ONE_DIV_TWO: BigInt<6> = BigInt([0x4284600000000000, 0x0b85aea218000000, 0x8f79b117dd04a400, 0x8d116cf9807a89c7, 0x631d82e03650a49d, 0x00d71d230be28875]);
	// unused for this modulus (p = 1 mod 4)
	const MODULUS_PLUS_ONE_DIV_FOUR: BigInt<6> = BigInt::ZERO;
	const MODULUS_SQUARED: (BigInt<6>, BigInt<6>) = (BigInt([0x0a11800000000001, 0x7338d254f0000001, 0x4ada268f2e1bd800, 0x6bcbfbd235f1c09a, 0x318324b958638c9d, 0x460aaaaa8bb70ae0]), BigInt([0xc014e712502a4d6c, 0x09d018afb90660cd, 0x1f5e71413dda4d5c, 0x4bb8b87da4aee93f, 0x2256913bb361263c, 0x0002d307d0bbaffb]));
	const SQRT: SqrtAlgo = SqrtAlgo::TonelliShanks;
}

#[derive(Clone, Copy, Debug)]
pub struct FrParams;

impl FpParams<4> for FrParams {
	const MODULUS: BigInt<4> = BigInt([0x0a11800000000001, 0x59aa76fed0000001, 0x60b44d1e5c37b001, 0x12ab655e9a2ca556]);
	const R: BigInt<4> = BigInt([0x7d1c7ffffffffff3, 0x7257f50f6ffffff2, 0x16d81575512c0fee, 0x0d4bda322bbb9a9d]);
	const R2: BigInt<4> = BigInt([0x25d577bab861857b, 0xcc2c27b58860591f, 0xa7cc008fe5dc8593, 0x011fdae7eff1c939]);
	const INV: u64 = 0x0a117fffffffffff;
	const TWO_ADICITY: u32 = 47;
	const TRACE_MINUS_ONE_DIV_TWO: BigInt<4> = BigInt([0x76fed00000010a11, 0x4d1e5c37b00159aa, 0x655e9a2ca55660b4, 0x00000000000012ab]);
	const TWO_ADIC_ROOT_OF_UNITY: BigInt<4> = BigInt([0x3c3d3ca739381fb2, 0x9a14cda3ec99772b, 0xd7aacc7c59724826, 0x0d1ba211c5cc349c]);
	const MODULUS_MINUS_ONE_DIV_TWO: BigInt<4> = BigInt([0x8508c00000000000, 0xacd53b7f68000000, 0x305a268f2e1bd800, 0x0955b2af4d1652ab]);
	// unused for this modulus (p = 1 mod 4)
	const MODULUS_PLUS_ONE_DIV_FOUR: BigInt<4> = BigInt::ZERO;
	const MODULUS_SQUARED: (BigInt<4>, BigInt<4>) = (BigInt([0x1423000000000001, 0xc7dd4d2fe0000002, 0x08ee1bd48585d003, 0x7e7557e3e57fc56e]), BigInt([0x1fdebb41483a709d, 0x8ea773345678f4e6, 0xd717de29c19c3ec5, 0x015c8d01e2340781]));
	const SQRT: SqrtAlgo = SqrtAlgo::TonelliShanks;
}

#[derive(Clone, Copy, Debug)]
pub struct Fq2Params;

impl Fp2Params<6> for Fq2Params {
	type Base = FqParams;
	const NONRESIDUE: Fq = Fq::from_montgomery_unchecked(BigInt([0xfc0b8000000002fa, 0x97d39cf6e000018b, 0x2072420fbfa05044, 0xcbbcbd50d97c3802, 0x0baf1ec35813f9eb, 0x009974a2c0945ad2]));
	const FROBENIUS_COEFF_C1: [Fq; 2] = [
		Fq::from_montgomery_unchecked(BigInt([0x02cdffffffffff68, 0x51409f837fffffb1, 0x9f7db3a98a7d3ff2, 0x7b4e97b76e7c6305, 0x4cf495bf803c84e8, 0x008d6661e2fdf49a])),
		Fq::from_montgomery_unchecked(BigInt([0x823ac00000000099, 0xc5cabdc0b000004f, 0x7f75ae862f8c080d, 0x9ed4423b9278b089, 0x79467000ec64c452, 0x0120d3e434c71c50])),
	];

	// beta = -5: five offset subtractions keep the accumulator positive
	fn wide_add_nonresidue_times(
		a: &FpWide<FqParams, 6>,
		b: &FpWide<FqParams, 6>,
	) -> FpWide<FqParams, 6> {
		let mut acc = *a;
		for _ in 0..5 {
			acc = acc.sub_with_offset(b);
		}
		acc
	}

	fn mul_base_by_nonresidue(a: &Fq) -> Fq {
		-(a.double().double() + *a)
	}
}

#[derive(Clone, Copy, Debug)]
pub struct Fq6Params;

impl Fp6Params<6> for Fq6Params {
	type Quad = Fq2Params;
	const NONRESIDUE: Fq2 = Fq2::new(
		Fq::from_montgomery_unchecked(BigInt([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000])),
		Fq::from_montgomery_unchecked(BigInt([0x02cdffffffffff68, 0x51409f837fffffb1, 0x9f7db3a98a7d3ff2, 0x7b4e97b76e7c6305, 0x4cf495bf803c84e8, 0x008d6661e2fdf49a])),
	);
	const FROBENIUS_COEFF_C1: [Fq2; 6] = [
		Fq2::new(
		Fq::from_montgomery_unchecked(BigInt([0x02cdffffffffff68, 0x51409f837fffffb1, 0x9f7db3a98a7d3ff2, 0x7b4e97b76e7c6305, 0x4cf495bf803c84e8, 0x008d6661e2fdf49a])),
		Fq::from_montgomery_unchecked(BigInt([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000])),
	),
		Fq2::new(
		Fq::from_montgomery_unchecked(BigInt([0x5892506da58478da, 0x133366940ac2a74b, 0x9b64a150cdf726cf, 0x5cc426090a9c587e, 0x5cf848adfdcd640c, 0x004702bf3ac02380])),
		Fq::from_montgomery_unchecked(BigInt([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000])),
	),
		Fq2::new(
		Fq::from_montgomery_unchecked(BigInt([0xdacd106da5847973, 0xd8fe2454bac2a79a, 0x1ada4fd6fd832edc, 0xfb9868449d150908, 0xd63eb8aeea32285e, 0x0167d6a36f873fd0])),
		Fq::from_montgomery_unchecked(BigInt([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000])),
	),
		Fq2::new(
		Fq::from_montgomery_unchecked(BigInt([0x823ac00000000099, 0xc5cabdc0b000004f, 0x7f75ae862f8c080d, 0x9ed4423b9278b089, 0x79467000ec64c452, 0x0120d3e434c71c50])),
		Fq::from_montgomery_unchecked(BigInt([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000])),
	),
		Fq2::new(
		Fq::from_montgomery_unchecked(BigInt([0x2c766f925a7b8727, 0x03d7f6b0253d58b5, 0x838ec0deec122131, 0xbd5eb3e9f658bb10, 0x6942bd126ed3e52e, 0x01673786dd04ed6a])),
		Fq::from_montgomery_unchecked(BigInt([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000])),
	),
		Fq2::new(
		Fq::from_montgomery_unchecked(BigInt([0xaa3baf925a7b868e, 0x3e0d38ef753d5865, 0x04191258bc861923, 0x1e8a71ae63e00a87, 0xeffc4d11826f20dc, 0x004663a2a83dd119])),
		Fq::from_montgomery_unchecked(BigInt([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000])),
	),
	];
	const FROBENIUS_COEFF_C2: [Fq2; 6] = [
		Fq2::new(
		Fq::from_montgomery_unchecked(BigInt([0x02cdffffffffff68, 0x51409f837fffffb1, 0x9f7db3a98a7d3ff2, 0x7b4e97b76e7c6305, 0x4cf495bf803c84e8, 0x008d6661e2fdf49a])),
		Fq::from_montgomery_unchecked(BigInt([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000])),
	),
		Fq2::new(
		Fq::from_montgomery_unchecked(BigInt([0xdacd106da5847973, 0xd8fe2454bac2a79a, 0x1ada4fd6fd832edc, 0xfb9868449d150908, 0xd63eb8aeea32285e, 0x0167d6a36f873fd0])),
		Fq::from_montgomery_unchecked(BigInt([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000])),
	),
		Fq2::new(
		Fq::from_montgomery_unchecked(BigInt([0x2c766f925a7b8727, 0x03d7f6b0253d58b5, 0x838ec0deec122131, 0xbd5eb3e9f658bb10, 0x6942bd126ed3e52e, 0x01673786dd04ed6a])),
		Fq::from_montgomery_unchecked(BigInt([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000])),
	),
		Fq2::new(
		Fq::from_montgomery_unchecked(BigInt([0x02cdffffffffff68, 0x51409f837fffffb1, 0x9f7db3a98a7d3ff2, 0x7b4e97b76e7c6305, 0x4cf495bf803c84e8, 0x008d6661e2fdf49a])),
		Fq::from_montgomery_unchecked(BigInt([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000])),
	),
		Fq2::new(
		Fq::from_montgomery_unchecked(BigInt([0xdacd106da5847973, 0xd8fe2454bac2a79a, 0x1ada4fd6fd832edc, 0xfb9868449d150908, 0xd63eb8aeea32285e, 0x0167d6a36f873fd0])),
		Fq::from_montgomery_unchecked(BigInt([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000])),
	),
		Fq2::new(
		Fq::from_montgomery_unchecked(BigInt([0x2c766f925a7b8727, 0x03d7f6b0253d58b5, 0x838ec0deec122131, 0xbd5eb3e9f658bb10, 0x6942bd126ed3e52e, 0x01673786dd04ed6a])),
		Fq::from_montgomery_unchecked(BigInt([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000])),
	),
	];

	// xi = u: (c0 + c1 u) u = -5 c1 + c0 u
	fn mul_fp2_by_nonresidue(a: &Fq2) -> Fq2 {
		Fq2::new(-(a.c1.double().double() + a.c1), a.c0)
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fq12Params;

impl Fp12Params<6> for Fq12Params {
	type Cubic = Fq6Params;
	const FROBENIUS_COEFF_C1: [Fq2; 12] = [
		Fq2::new(
		Fq::from_montgomery_unchecked(BigInt([0x02cdffffffffff68, 0x51409f837fffffb1, 0x9f7db3a98a7d3ff2, 0x7b4e97b76e7c6305, 0x4cf495bf803c84e8, 0x008d6661e2fdf49a])),
		Fq::from_montgomery_unchecked(BigInt([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000])),
	),
		Fq2::new(
		Fq::from_montgomery_unchecked(BigInt([0x6ec47a04a3f7ca9e, 0xa42e0cb968c1fa44, 0x578d5187fbd2bd23, 0x930eeb0ac79dd4bd, 0xa24883de1e09a9ee, 0x00daa7058067d46f])),
		Fq::from_montgomery_unchecked(BigInt([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000])),
	),
		Fq2::new(
		Fq::from_montgomery_unchecked(BigInt([0x5892506da58478da, 0x133366940ac2a74b, 0x9b64a150cdf726cf, 0x5cc426090a9c587e, 0x5cf848adfdcd640c, 0x004702bf3ac02380])),
		Fq::from_montgomery_unchecked(BigInt([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000])),
	),
		Fq2::new(
		Fq::from_montgomery_unchecked(BigInt([0x982c13d9d084771f, 0xfd49de0c6da34a32, 0x61a530d183ab0e53, 0xdf8fe44106dd9879, 0x40f29b58d88472bc, 0x0158723199046d5d])),
		Fq::from_montgomery_unchecked(BigInt([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000])),
	),
		Fq2::new(
		Fq::from_montgomery_unchecked(BigInt([0xdacd106da5847973, 0xd8fe2454bac2a79a, 0x1ada4fd6fd832edc, 0xfb9868449d150908, 0xd63eb8aeea32285e, 0x0167d6a36f873fd0])),
		Fq::from_montgomery_unchecked(BigInt([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000])),
	),
		Fq2::new(
		Fq::from_montgomery_unchecked(BigInt([0x296799d52c8cac81, 0x591bd15304e14fee, 0x0a17df4987d85130, 0x4c80f9363f3fc3bc, 0x9eaa177aba7ac8ce, 0x007dcb2c189c98ed])),
		Fq::from_montgomery_unchecked(BigInt([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000])),
	),
		Fq2::new(
		Fq::from_montgomery_unchecked(BigInt([0x823ac00000000099, 0xc5cabdc0b000004f, 0x7f75ae862f8c080d, 0x9ed4423b9278b089, 0x79467000ec64c452, 0x0120d3e434c71c50])),
		Fq::from_montgomery_unchecked(BigInt([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000])),
	),
		Fq2::new(
		Fq::from_montgomery_unchecked(BigInt([0x164445fb5c083563, 0x72dd508ac73e05bc, 0xc76610a7be368adc, 0x8713eee839573ed1, 0x23f281e24e979f4c, 0x00d39340975d3c7b])),
		Fq::from_montgomery_unchecked(BigInt([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000])),
	),
		Fq2::new(
		Fq::from_montgomery_unchecked(BigInt([0x2c766f925a7b8727, 0x03d7f6b0253d58b5, 0x838ec0deec122131, 0xbd5eb3e9f658bb10, 0x6942bd126ed3e52e, 0x01673786dd04ed6a])),
		Fq::from_montgomery_unchecked(BigInt([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000])),
	),
		Fq2::new(
		Fq::from_montgomery_unchecked(BigInt([0xecdcac262f7b88e2, 0x19c17f37c25cb5cd, 0xbd4e315e365e39ac, 0x3a92f5b1fa177b15, 0x85486a67941cd67e, 0x0055c8147ec0a38d])),
		Fq::from_montgomery_unchecked(BigInt([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000])),
	),
		Fq2::new(
		Fq::from_montgomery_unchecked(BigInt([0xaa3baf925a7b868e, 0x3e0d38ef753d5865, 0x04191258bc861923, 0x1e8a71ae63e00a87, 0xeffc4d11826f20dc, 0x004663a2a83dd119])),
		Fq::from_montgomery_unchecked(BigInt([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000])),
	),
		Fq2::new(
		Fq::from_montgomery_unchecked(BigInt([0x5ba1262ad3735380, 0xbdef8bf12b1eb012, 0x14db82e63230f6cf, 0xcda1e0bcc1b54fd3, 0x2790ee45b226806c, 0x01306f19ff2877fd])),
		Fq::from_montgomery_unchecked(BigInt([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000])),
	),
	];
}
