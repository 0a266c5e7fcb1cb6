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
use crate::fields::{Fp, Fp12Params, Fp2, Fp2Params, Fp6Params, FpParams, SqrtAlgo};

pub type Fq = Fp<FqParams, 6>;
pub type Fr = Fp<FrParams, 4>;
pub type Fq2 = Fp2<Fq2Params, 6>;
pub type Fq6 = crate::fields::Fp6<Fq6Params, 6>;
pub type Fq12 = crate::fields::Fp12<Fq12Params, 6>;

#[derive(Clone, Copy, Debug)]
pub struct FqParams;

impl FpParams<6> for FqParams {
	const MODULUS: BigInt<6> = BigInt([0xb9feffffffffaaab, 0x1eabfffeb153ffff, 0x6730d2a0f6b0f624, 0x64774b84f38512bf, 0x4b1ba7b6434bacd7, 0x1a0111ea397fe69a]);
	const R: BigInt<6> = BigInt([0x760900000002fffd, 0xebf4000bc40c0002, 0x5f48985753c758ba, 0x77ce585370525745, 0x5c071a97a256ec6d, 0x15f65ec3fa80e493]);
	const R2: BigInt<6> = BigInt([0xf4df1f341c341746, 0x0a76e6a609d104f1, 0x8de5476c4c95b6d5, 0x67eb88a9939d83c0, 0x9a793e85b519952d, 0x11988fe592cae3aa]);
	const INV: u64 = 0x89f3fffcfffcfffd;
	const TWO_ADICITY: u32 = 1;
	const TRACE_MINUS_ONE_DIV_TWO: BigInt<6> = BigInt([0xee7fbfffffffeaaa, 0x07aaffffac54ffff, 0xd9cc34a83dac3d89, 0xd91dd2e13ce144af, 0x92c6e9ed90d2eb35, 0x0680447a8e5ff9a6]);
	const TWO_ADIC_ROOT_OF_UNITY: BigInt<6> = BigInt([0x43f5fffffffcaaae, 0x32b7fff2ed47fffd, 0x07e83a49a2e99d69, 0xeca8f3318332bb7a, 0xef148d1ea0f4c069, 0x040ab3263eff0206]);
	const MODULUS_MINUS_ONE_DIV_TWO: BigInt<6> = BigInt([0xdcff7fffffffd555, 0x0f55ffff58a9ffff, 0xb39869507b587b12, 0xb23ba5c279c2895f, 0x258dd3db21a5d66b, 0x0d0088f51cbff34d]);
	const MODULUS_PLUS_ONE_DIV_FOUR: BigInt<6> = BigInt([0xee7fbfffffffeaab, 0x07aaffffac54ffff, 0xd9cc34a83dac3d89, 0xd91dd2e13ce144af, 0x92c6e9ed90d2eb35, 0x0680447a8e5ff9a6]);
	const MODULUS_SQUARED: (BigInt<6>, BigInt<6>) = (BigInt([0x26aa00001c718e39, 0x7ced6b1d76382eab, 0x162c338362113cfd, 0x66bf91ed3e71b743, 0x292e85a87091a049, 0x1d68619c86185c7b]), BigInt([0xf53149330978ef01, 0x50a62cfd16ddca6e, 0x66e59e49349e8bd0, 0xe2dc90e50e7046b4, 0x4bd278eaa22f25e9, 0x02a437a4b8c35fc7]));
	const SQRT: SqrtAlgo = SqrtAlgo::ThreeMod4;
}

#[derive(Clone, Copy, Debug)]
pub struct FrParams;

impl FpParams<4> for FrParams {
	const MODULUS: BigInt<4> = BigInt([0xffffffff00000001, 0x53bda402fffe5bfe, 0x3339d80809a1d805, 0x73eda753299d7d48]);
	const R: BigInt<4> = BigInt([0x00000001fffffffe, 0x5884b7fa00034802, 0x998c4fefecbc4ff5, 0x1824b159acc5056f]);
	const R2: BigInt<4> = BigInt([0xc999e990f3f29c6d, 0x2b6cedcb87925c23, 0x05d314967254398f, 0x0748d9d99f59ff11]);
	const INV: u64 = 0xfffffffeffffffff;
	const TWO_ADICITY: u32 = 32;
	const TRACE_MINUS_ONE_DIV_TWO: BigInt<4> = BigInt([0x7fff2dff7fffffff, 0x04d0ec02a9ded201, 0x94cebea4199cec04, 0x0000000039f6d3a9]);
	const TWO_ADIC_ROOT_OF_UNITY: BigInt<4> = BigInt([0x9cab6d5c0c17f47c, 0x1ce1e93dfd4b71e5, 0x0d6db230471dd505, 0x3f0ee990743a3b6a]);
	const MODULUS_MINUS_ONE_DIV_TWO: BigInt<4> = BigInt([0x7fffffff80000000, 0xa9ded2017fff2dff, 0x199cec0404d0ec02, 0x39f6d3a994cebea4]);
	// unused for this modulus (p = 1 mod 4)
	const MODULUS_PLUS_ONE_DIV_FOUR: BigInt<4> = BigInt::ZERO;
	const MODULUS_SQUARED: (BigInt<4>, BigInt<4>) = (BigInt([0xfffffffe00000001, 0xa77e9007fffcb7fe, 0x698ae0021cdbb005, 0x48aa415e5433f7b8]), BigInt([0xc2611f6f4aa9c661, 0x0e9593f959934a1d, 0x520c13dbef2cc20f, 0x347f60f3f4bc2778]));
	const SQRT: SqrtAlgo = SqrtAlgo::TonelliShanks;
}

#[derive(Clone, Copy, Debug)]
pub struct Fq2Params;

impl Fp2Params<6> for Fq2Params {
	type Base = FqParams;
	const NONRESIDUE: Fq = Fq::from_montgomery_unchecked(BigInt([0x43f5fffffffcaaae, 0x32b7fff2ed47fffd, 0x07e83a49a2e99d69, 0xeca8f3318332bb7a, 0xef148d1ea0f4c069, 0x040ab3263eff0206]));
	const FROBENIUS_COEFF_C1: [Fq; 2] = [
		Fq::from_montgomery_unchecked(BigInt([0x760900000002fffd, 0xebf4000bc40c0002, 0x5f48985753c758ba, 0x77ce585370525745, 0x5c071a97a256ec6d, 0x15f65ec3fa80e493])),
		Fq::from_montgomery_unchecked(BigInt([0x43f5fffffffcaaae, 0x32b7fff2ed47fffd, 0x07e83a49a2e99d69, 0xeca8f3318332bb7a, 0xef148d1ea0f4c069, 0x040ab3263eff0206])),
	];
}

#[derive(Clone, Copy, Debug)]
pub struct Fq6Params;

impl Fp6Params<6> for Fq6Params {
	type Quad = Fq2Params;
	const NONRESIDUE: Fq2 = Fq2::new(
		Fq::from_montgomery_unchecked(BigInt([0x760900000002fffd, 0xebf4000bc40c0002, 0x5f48985753c758ba, 0x77ce585370525745, 0x5c071a97a256ec6d, 0x15f65ec3fa80e493])),
		Fq::from_montgomery_unchecked(BigInt([0x760900000002fffd, 0xebf4000bc40c0002, 0x5f48985753c758ba, 0x77ce585370525745, 0x5c071a97a256ec6d, 0x15f65ec3fa80e493])),
	);
	const FROBENIUS_COEFF_C1: [Fq2; 6] = [
		Fq2::new(
		Fq::from_montgomery_unchecked(BigInt([0x760900000002fffd, 0xebf4000bc40c0002, 0x5f48985753c758ba, 0x77ce585370525745, 0x5c071a97a256ec6d, 0x15f65ec3fa80e493])),
		Fq::from_montgomery_unchecked(BigInt([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000])),
	),
		Fq2::new(
		Fq::from_montgomery_unchecked(BigInt([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000])),
		Fq::from_montgomery_unchecked(BigInt([0xcd03c9e48671f071, 0x5dab22461fcda5d2, 0x587042afd3851b95, 0x8eb60ebe01bacb9e, 0x03f97d6e83d050d2, 0x18f0206554638741])),
	),
		Fq2::new(
		Fq::from_montgomery_unchecked(BigInt([0x30f1361b798a64e8, 0xf3b8ddab7ece5a2a, 0x16a8ca3ac61577f7, 0xc26a2ff874fd029b, 0x3636b76660701c6e, 0x051ba4ab241b6160])),
		Fq::from_montgomery_unchecked(BigInt([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000])),
	),
		Fq2::new(
		Fq::from_montgomery_unchecked(BigInt([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000])),
		Fq::from_montgomery_unchecked(BigInt([0x760900000002fffd, 0xebf4000bc40c0002, 0x5f48985753c758ba, 0x77ce585370525745, 0x5c071a97a256ec6d, 0x15f65ec3fa80e493])),
	),
		Fq2::new(
		Fq::from_montgomery_unchecked(BigInt([0xcd03c9e48671f071, 0x5dab22461fcda5d2, 0x587042afd3851b95, 0x8eb60ebe01bacb9e, 0x03f97d6e83d050d2, 0x18f0206554638741])),
		Fq::from_montgomery_unchecked(BigInt([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000])),
	),
		Fq2::new(
		Fq::from_montgomery_unchecked(BigInt([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000])),
		Fq::from_montgomery_unchecked(BigInt([0x30f1361b798a64e8, 0xf3b8ddab7ece5a2a, 0x16a8ca3ac61577f7, 0xc26a2ff874fd029b, 0x3636b76660701c6e, 0x051ba4ab241b6160])),
	),
	];
	const FROBENIUS_COEFF_C2: [Fq2; 6] = [
		Fq2::new(
		Fq::from_montgomery_unchecked(BigInt([0x760900000002fffd, 0xebf4000bc40c0002, 0x5f48985753c758ba, 0x77ce585370525745, 0x5c071a97a256ec6d, 0x15f65ec3fa80e493])),
		Fq::from_montgomery_unchecked(BigInt([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000])),
	),
		Fq2::new(
		Fq::from_montgomery_unchecked(BigInt([0x890dc9e4867545c3, 0x2af322533285a5d5, 0x50880866309b7e2c, 0xa20d1b8c7e881024, 0x14e4f04fe2db9068, 0x14e56d3f1564853a])),
		Fq::from_montgomery_unchecked(BigInt([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000])),
	),
		Fq2::new(
		Fq::from_montgomery_unchecked(BigInt([0xcd03c9e48671f071, 0x5dab22461fcda5d2, 0x587042afd3851b95, 0x8eb60ebe01bacb9e, 0x03f97d6e83d050d2, 0x18f0206554638741])),
		Fq::from_montgomery_unchecked(BigInt([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000])),
	),
		Fq2::new(
		Fq::from_montgomery_unchecked(BigInt([0x43f5fffffffcaaae, 0x32b7fff2ed47fffd, 0x07e83a49a2e99d69, 0xeca8f3318332bb7a, 0xef148d1ea0f4c069, 0x040ab3263eff0206])),
		Fq::from_montgomery_unchecked(BigInt([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000])),
	),
		Fq2::new(
		Fq::from_montgomery_unchecked(BigInt([0x30f1361b798a64e8, 0xf3b8ddab7ece5a2a, 0x16a8ca3ac61577f7, 0xc26a2ff874fd029b, 0x3636b76660701c6e, 0x051ba4ab241b6160])),
		Fq::from_montgomery_unchecked(BigInt([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000])),
	),
		Fq2::new(
		Fq::from_montgomery_unchecked(BigInt([0xecfb361b798dba3a, 0xc100ddb891865a2c, 0x0ec08ff1232bda8e, 0xd5c13cc6f1ca4721, 0x47222a47bf7b5c04, 0x0110f184e51c5f59])),
		Fq::from_montgomery_unchecked(BigInt([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000])),
	),
	];

	// xi = 1 + u: (c0 - c1) + (c0 + c1) u
	fn mul_fp2_by_nonresidue(a: &Fq2) -> Fq2 {
		Fq2::new(a.c0 - a.c1, a.c0 + a.c1)
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fq12Params;

impl Fp12Params<6> for Fq12Params {
	type Cubic = Fq6Params;
	const FROBENIUS_COEFF_C1: [Fq2; 12] = [
		Fq2::new(
		Fq::from_montgomery_unchecked(BigInt([0x760900000002fffd, 0xebf4000bc40c0002, 0x5f48985753c758ba, 0x77ce585370525745, 0x5c071a97a256ec6d, 0x15f65ec3fa80e493])),
		Fq::from_montgomery_unchecked(BigInt([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000])),
	),
		Fq2::new(
		Fq::from_montgomery_unchecked(BigInt([0x07089552b319d465, 0xc6695f92b50a8313, 0x97e83cccd117228f, 0xa35baecab2dc29ee, 0x1ce393ea5daace4d, 0x08f2220fb0fb66eb])),
		Fq::from_montgomery_unchecked(BigInt([0xb2f66aad4ce5d646, 0x5842a06bfc497cec, 0xcf4895d42599d394, 0xc11b9cba40a8e8d0, 0x2e3813cbe5a0de89, 0x110eefda88847faf])),
	),
		Fq2::new(
		Fq::from_montgomery_unchecked(BigInt([0xecfb361b798dba3a, 0xc100ddb891865a2c, 0x0ec08ff1232bda8e, 0xd5c13cc6f1ca4721, 0x47222a47bf7b5c04, 0x0110f184e51c5f59])),
		Fq::from_montgomery_unchecked(BigInt([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000])),
	),
		Fq2::new(
		Fq::from_montgomery_unchecked(BigInt([0x3e2f585da55c9ad1, 0x4294213d86c18183, 0x382844c88b623732, 0x92ad2afd19103e18, 0x1d794e4fac7cf0b9, 0x0bd592fc7d825ec8])),
		Fq::from_montgomery_unchecked(BigInt([0x7bcfa7a25aa30fda, 0xdc17dec12a927e7c, 0x2f088dd86b4ebef1, 0xd1ca2087da74d4a7, 0x2da2596696cebc1d, 0x0e2b7eedbbfd87d2])),
	),
		Fq2::new(
		Fq::from_montgomery_unchecked(BigInt([0x30f1361b798a64e8, 0xf3b8ddab7ece5a2a, 0x16a8ca3ac61577f7, 0xc26a2ff874fd029b, 0x3636b76660701c6e, 0x051ba4ab241b6160])),
		Fq::from_montgomery_unchecked(BigInt([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000])),
	),
		Fq2::new(
		Fq::from_montgomery_unchecked(BigInt([0x3726c30af242c66c, 0x7c2ac1aad1b6fe70, 0xa04007fbba4b14a2, 0xef517c3266341429, 0x0095ba654ed2226b, 0x02e370eccc86f7dd])),
		Fq::from_montgomery_unchecked(BigInt([0x82d83cf50dbce43f, 0xa2813e53df9d018f, 0xc6f0caa53c65e181, 0x7525cf528d50fe95, 0x4a85ed50f4798a6b, 0x171da0fd6cf8eebd])),
	),
		Fq2::new(
		Fq::from_montgomery_unchecked(BigInt([0x43f5fffffffcaaae, 0x32b7fff2ed47fffd, 0x07e83a49a2e99d69, 0xeca8f3318332bb7a, 0xef148d1ea0f4c069, 0x040ab3263eff0206])),
		Fq::from_montgomery_unchecked(BigInt([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000])),
	),
		Fq2::new(
		Fq::from_montgomery_unchecked(BigInt([0xb2f66aad4ce5d646, 0x5842a06bfc497cec, 0xcf4895d42599d394, 0xc11b9cba40a8e8d0, 0x2e3813cbe5a0de89, 0x110eefda88847faf])),
		Fq::from_montgomery_unchecked(BigInt([0x07089552b319d465, 0xc6695f92b50a8313, 0x97e83cccd117228f, 0xa35baecab2dc29ee, 0x1ce393ea5daace4d, 0x08f2220fb0fb66eb])),
	),
		Fq2::new(
		Fq::from_montgomery_unchecked(BigInt([0xcd03c9e48671f071, 0x5dab22461fcda5d2, 0x587042afd3851b95, 0x8eb60ebe01bacb9e, 0x03f97d6e83d050d2, 0x18f0206554638741])),
		Fq::from_montgomery_unchecked(BigInt([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000])),
	),
		Fq2::new(
		Fq::from_montgomery_unchecked(BigInt([0x7bcfa7a25aa30fda, 0xdc17dec12a927e7c, 0x2f088dd86b4ebef1, 0xd1ca2087da74d4a7, 0x2da2596696cebc1d, 0x0e2b7eedbbfd87d2])),
		Fq::from_montgomery_unchecked(BigInt([0x3e2f585da55c9ad1, 0x4294213d86c18183, 0x382844c88b623732, 0x92ad2afd19103e18, 0x1d794e4fac7cf0b9, 0x0bd592fc7d825ec8])),
	),
		Fq2::new(
		Fq::from_montgomery_unchecked(BigInt([0x890dc9e4867545c3, 0x2af322533285a5d5, 0x50880866309b7e2c, 0xa20d1b8c7e881024, 0x14e4f04fe2db9068, 0x14e56d3f1564853a])),
		Fq::from_montgomery_unchecked(BigInt([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000])),
	),
		Fq2::new(
		Fq::from_montgomery_unchecked(BigInt([0x82d83cf50dbce43f, 0xa2813e53df9d018f, 0xc6f0caa53c65e181, 0x7525cf528d50fe95, 0x4a85ed50f4798a6b, 0x171da0fd6cf8eebd])),
		Fq::from_montgomery_unchecked(BigInt([0x3726c30af242c66c, 0x7c2ac1aad1b6fe70, 0xa04007fbba4b14a2, 0xef517c3266341429, 0x0095ba654ed2226b, 0x02e370eccc86f7dd])),
	),
	];
}

