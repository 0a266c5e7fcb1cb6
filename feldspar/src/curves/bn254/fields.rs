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

pub type Fq = Fp<FqParams, 4>;
pub type Fr = Fp<FrParams, 4>;
pub type Fq2 = Fp2<Fq2Params, 4>;
pub type Fq6 = crate::fields::Fp6<Fq6Params, 4>;
pub type Fq12 = crate::fields::Fp12<Fq12Params, 4>;

#[derive(Clone, Copy, Debug)]
pub struct FqParams;

impl FpParams<4> for FqParams {
	const MODULUS: BigInt<4> = BigInt([0x3c208c16d87cfd47, 0x97816a916871ca8d, 0xb85045b68181585d, 0x30644e72e131a029]);
	const R: BigInt<4> = BigInt([0xd35d438dc58f0d9d, 0x0a78eb28f5c70b3d, 0x666ea36f7879462c, 0x0e0a77c19a07df2f]);
	const R2: BigInt<4> = BigInt([0xf32cfc5b538afa89, 0xb5e71911d44501fb, 0x47ab1eff0a417ff6, 0x06d89f71cab8351f]);
	const INV: u64 = 0x87d20782e4866389;
	const TWO_ADICITY: u32 = 1;
	const TRACE_MINUS_ONE_DIV_TWO: BigInt<4> = BigInt([0x4f082305b61f3f51, 0x65e05aa45a1c72a3, 0x6e14116da0605617, 0x0c19139cb84c680a]);
	const TWO_ADIC_ROOT_OF_UNITY: BigInt<4> = BigInt([0x68c3488912edefaa, 0x8d087f6872aabf4f, 0x51e1a24709081231, 0x2259d6b14729c0fa]);
	const MODULUS_MINUS_ONE_DIV_TWO: BigInt<4> = BigInt([0x9e10460b6c3e7ea3, 0xcbc0b548b438e546, 0xdc2822db40c0ac2e, 0x183227397098d014]);
	const MODULUS_PLUS_ONE_DIV_FOUR: BigInt<4> = BigInt([0x4f082305b61f3f52, 0x65e05aa45a1c72a3, 0x6e14116da0605617, 0x0c19139cb84c680a]);
	const MODULUS_SQUARED: (BigInt<4>, BigInt<4>) = (BigInt([0x3b5458a2275d69b1, 0xa602072d09eac101, 0x4a50189c6d96cadc, 0x04689e957a1242c8]), BigInt([0x26edfa5c34c6b38d, 0xb00b855116375606, 0x599a6f7c0348d21c, 0x0925c4b8763cbf9c]));
	const SQRT: SqrtAlgo = SqrtAlgo::ThreeMod4;
}

#[derive(Clone, Copy, Debug)]
pub struct FrParams;

impl FpParams<4> for FrParams {
	const MODULUS: BigInt<4> = BigInt([0x43e1f593f0000001, 0x2833e84879b97091, 0xb85045b68181585d, 0x30644e72e131a029]);
	const R: BigInt<4> = BigInt([0xac96341c4ffffffb, 0x36fc76959f60cd29, 0x666ea36f7879462e, 0x0e0a77c19a07df2f]);
	const R2: BigInt<4> = BigInt([0x1bb8e645ae216da7, 0x53fe3ab1e35c59e3, 0x8c49833d53bb8085, 0x0216d0b17f4e44a5]);
	const INV: u64 = 0xc2e1f593efffffff;
	const TWO_ADICITY: u32 = 28;
	const TRACE_MINUS_ONE_DIV_TWO: BigInt<4> = BigInt([0xcdcb848a1f0fac9f, 0x0c0ac2e9419f4243, 0x098d014dc2822db4, 0x0000000183227397]);
	const TWO_ADIC_ROOT_OF_UNITY: BigInt<4> = BigInt([0x636e735580d13d9c, 0xa22bf3742445ffd6, 0x56452ac01eb203d8, 0x1860ef942963f9e7]);
	const MODULUS_MINUS_ONE_DIV_TWO: BigInt<4> = BigInt([0xa1f0fac9f8000000, 0x9419f4243cdcb848, 0xdc2822db40c0ac2e, 0x183227397098d014]);
	// unused for this modulus (p = 1 mod 4)
	const MODULUS_PLUS_ONE_DIV_FOUR: BigInt<4> = BigInt::ZERO;
	const MODULUS_SQUARED: (BigInt<4>, BigInt<4>) = (BigInt([0x08c3eb27e0000001, 0xc7f26223dcb34000, 0xffe9a62c68c9bb7f, 0xa6ce1975e821ddb0]), BigInt([0x2c77527b47b62fe7, 0x85f73bb0d379d3df, 0x599a6f7c0348d21c, 0x0925c4b8763cbf9c]));
	const SQRT: SqrtAlgo = SqrtAlgo::TonelliShanks;
}

#[derive(Clone, Copy, Debug)]
pub struct Fq2Params;

impl Fp2Params<4> for Fq2Params {
	type Base = FqParams;
	const NONRESIDUE: Fq = Fq::from_montgomery_unchecked(BigInt([0x68c3488912edefaa, 0x8d087f6872aabf4f, 0x51e1a24709081231, 0x2259d6b14729c0fa]));
	const FROBENIUS_COEFF_C1: [Fq; 2] = [
		Fq::from_montgomery_unchecked(BigInt([0xd35d438dc58f0d9d, 0x0a78eb28f5c70b3d, 0x666ea36f7879462c, 0x0e0a77c19a07df2f])),
		Fq::from_montgomery_unchecked(BigInt([0x68c3488912edefaa, 0x8d087f6872aabf4f, 0x51e1a24709081231, 0x2259d6b14729c0fa])),
	];
}

#[derive(Clone, Copy, Debug)]
pub struct Fq6Params;

impl Fp6Params<4> for Fq6Params {
	type Quad = Fq2Params;
	const NONRESIDUE: Fq2 = Fq2::new(
		Fq::from_montgomery_unchecked(BigInt([0xf60647ce410d7ff7, 0x2f3d6f4dd31bd011, 0x2943337e3940c6d1, 0x1d9598e8a7e39857])),
		Fq::from_montgomery_unchecked(BigInt([0xd35d438dc58f0d9d, 0x0a78eb28f5c70b3d, 0x666ea36f7879462c, 0x0e0a77c19a07df2f])),
	);
	const FROBENIUS_COEFF_C1: [Fq2; 6] = [
		Fq2::new(
		Fq::from_montgomery_unchecked(BigInt([0xd35d438dc58f0d9d, 0x0a78eb28f5c70b3d, 0x666ea36f7879462c, 0x0e0a77c19a07df2f])),
		Fq::from_montgomery_unchecked(BigInt([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000])),
	),
		Fq2::new(
		Fq::from_montgomery_unchecked(BigInt([0xb5773b104563ab30, 0x347f91c8a9aa6454, 0x7a007127242e0991, 0x1956bcd8118214ec])),
		Fq::from_montgomery_unchecked(BigInt([0x6e849f1ea0aa4757, 0xaa1c7b6d89f89141, 0xb6e713cdfae0ca3a, 0x26694fbb4e82ebc3])),
	),
		Fq2::new(
		Fq::from_montgomery_unchecked(BigInt([0x3350c88e13e80b9c, 0x7dce557cdb5e56b9, 0x6001b4b8b615564a, 0x2682e617020217e0])),
		Fq::from_montgomery_unchecked(BigInt([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000])),
	),
		Fq2::new(
		Fq::from_montgomery_unchecked(BigInt([0xc9af22f716ad6bad, 0xb311782a4aa662b2, 0x19eeaf64e248c7f4, 0x20273e77e3439f82])),
		Fq::from_montgomery_unchecked(BigInt([0xacc02860f7ce93ac, 0x3933d5817ba76b4c, 0x69e6188b446c8467, 0x0a46036d4417cc55])),
	),
		Fq2::new(
		Fq::from_montgomery_unchecked(BigInt([0x71930c11d782e155, 0xa6bb947cffbe3323, 0xaa303344d4741444, 0x2c3b3f0d26594943])),
		Fq::from_montgomery_unchecked(BigInt([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000])),
	),
		Fq2::new(
		Fq::from_montgomery_unchecked(BigInt([0xf91aba2654e8e3b1, 0x4771cb2fdc92ce12, 0xdcb16ae0fc8bdf35, 0x274aa195cd9d8be4])),
		Fq::from_montgomery_unchecked(BigInt([0x5cfc50ae18811f8b, 0x4bb28433cb43988c, 0x4fd35f13c3b56219, 0x301949bd2fc8883a])),
	),
	];
	const FROBENIUS_COEFF_C2: [Fq2; 6] = [
		Fq2::new(
		Fq::from_montgomery_unchecked(BigInt([0xd35d438dc58f0d9d, 0x0a78eb28f5c70b3d, 0x666ea36f7879462c, 0x0e0a77c19a07df2f])),
		Fq::from_montgomery_unchecked(BigInt([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000])),
	),
		Fq2::new(
		Fq::from_montgomery_unchecked(BigInt([0x7361d77f843abe92, 0xa5bb2bd3273411fb, 0x9c941f314b3e2399, 0x15df9cddbb9fd3ec])),
		Fq::from_montgomery_unchecked(BigInt([0x5dddfd154bd8c949, 0x62cb29a5a4445b60, 0x37bc870a0c7dd2b9, 0x24830a9d3171f0fd])),
	),
		Fq2::new(
		Fq::from_montgomery_unchecked(BigInt([0x71930c11d782e155, 0xa6bb947cffbe3323, 0xaa303344d4741444, 0x2c3b3f0d26594943])),
		Fq::from_montgomery_unchecked(BigInt([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000])),
	),
		Fq2::new(
		Fq::from_montgomery_unchecked(BigInt([0x448a93a57b6762df, 0xbfd62df528fdeadf, 0xd858f5d00e9bd47a, 0x06b03d4d3476ec58])),
		Fq::from_montgomery_unchecked(BigInt([0x2b19daf4bcc936d1, 0xa1a54e7a56f4299f, 0xb533eee05adeaef1, 0x170c812b84dda0b2])),
	),
		Fq2::new(
		Fq::from_montgomery_unchecked(BigInt([0x3350c88e13e80b9c, 0x7dce557cdb5e56b9, 0x6001b4b8b615564a, 0x2682e617020217e0])),
		Fq::from_montgomery_unchecked(BigInt([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000])),
	),
		Fq2::new(
		Fq::from_montgomery_unchecked(BigInt([0x843420f1d8dadbd6, 0x31f010c9183fcdb2, 0x436330b527a76049, 0x13d47447f11adfe4])),
		Fq::from_montgomery_unchecked(BigInt([0xef494023a857fa74, 0x2a925d02d5ab101a, 0x83b015829ba62f10, 0x2539111d0c13aea3])),
	),
	];

	// xi = 9 + u: (9 c0 - c1) + (c0 + 9 c1) u
	fn mul_fp2_by_nonresidue(a: &Fq2) -> Fq2 {
		let t0 = a.c0.double().double().double() + a.c0;
		let t1 = a.c1.double().double().double() + a.c1;
		Fq2::new(t0 - a.c1, a.c0 + t1)
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fq12Params;

impl Fp12Params<4> for Fq12Params {
	type Cubic = Fq6Params;
	const FROBENIUS_COEFF_C1: [Fq2; 12] = [
		Fq2::new(
		Fq::from_montgomery_unchecked(BigInt([0xd35d438dc58f0d9d, 0x0a78eb28f5c70b3d, 0x666ea36f7879462c, 0x0e0a77c19a07df2f])),
		Fq::from_montgomery_unchecked(BigInt([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000])),
	),
		Fq2::new(
		Fq::from_montgomery_unchecked(BigInt([0xaf9ba69633144907, 0xca6b1d7387afb78a, 0x11bded5ef08a2087, 0x02f34d751a1f3a7c])),
		Fq::from_montgomery_unchecked(BigInt([0xa222ae234c492d72, 0xd00f02a4565de15b, 0xdc2ff3a253dfc926, 0x10a75716b3899551])),
	),
		Fq2::new(
		Fq::from_montgomery_unchecked(BigInt([0xca8d800500fa1bf2, 0xf0c5d61468b39769, 0x0e201271ad0d4418, 0x04290f65bad856e6])),
		Fq::from_montgomery_unchecked(BigInt([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000])),
	),
		Fq2::new(
		Fq::from_montgomery_unchecked(BigInt([0x365316184e46d97d, 0x0af7129ed4c96d9f, 0x659da72fca1009b5, 0x08116d8983a20d23])),
		Fq::from_montgomery_unchecked(BigInt([0xb1df4af7c39c1939, 0x3d9f02878a73bf7f, 0x9b2220928caf0ae0, 0x26684515eff054a6])),
	),
		Fq2::new(
		Fq::from_montgomery_unchecked(BigInt([0x3350c88e13e80b9c, 0x7dce557cdb5e56b9, 0x6001b4b8b615564a, 0x2682e617020217e0])),
		Fq::from_montgomery_unchecked(BigInt([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000])),
	),
		Fq2::new(
		Fq::from_montgomery_unchecked(BigInt([0x86b76f821b329076, 0x408bf52b4d19b614, 0x53dfb9d0d985e92d, 0x051e20146982d2a7])),
		Fq::from_montgomery_unchecked(BigInt([0x0fbc9cd47752ebc7, 0x6d8fffe33415de24, 0xbef22cf038cf41b9, 0x15c0edff3c66bf54])),
	),
		Fq2::new(
		Fq::from_montgomery_unchecked(BigInt([0x68c3488912edefaa, 0x8d087f6872aabf4f, 0x51e1a24709081231, 0x2259d6b14729c0fa])),
		Fq::from_montgomery_unchecked(BigInt([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000])),
	),
		Fq2::new(
		Fq::from_montgomery_unchecked(BigInt([0x8c84e580a568b440, 0xcd164d1de0c21302, 0xa692585790f737d5, 0x2d7100fdc71265ad])),
		Fq::from_montgomery_unchecked(BigInt([0x99fdddf38c33cfd5, 0xc77267ed1213e931, 0xdc2052142da18f36, 0x1fbcf75c2da80ad7])),
	),
		Fq2::new(
		Fq::from_montgomery_unchecked(BigInt([0x71930c11d782e155, 0xa6bb947cffbe3323, 0xaa303344d4741444, 0x2c3b3f0d26594943])),
		Fq::from_montgomery_unchecked(BigInt([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000])),
	),
		Fq2::new(
		Fq::from_montgomery_unchecked(BigInt([0x05cd75fe8a3623ca, 0x8c8a57f293a85cee, 0x52b29e86b7714ea8, 0x2852e0e95d8f9306])),
		Fq::from_montgomery_unchecked(BigInt([0x8a41411f14e0e40e, 0x59e26809ddfe0b0d, 0x1d2e2523f4d24d7d, 0x09fc095cf1414b83])),
	),
		Fq2::new(
		Fq::from_montgomery_unchecked(BigInt([0x08cfc388c494f1ab, 0x19b315148d1373d4, 0x584e90fdcb6c0213, 0x09e1685bdf2f8849])),
		Fq::from_montgomery_unchecked(BigInt([0x0000000000000000, 0x0000000000000000, 0x0000000000000000, 0x0000000000000000])),
	),
		Fq2::new(
		Fq::from_montgomery_unchecked(BigInt([0xb5691c94bd4a6cd1, 0x56f575661b581478, 0x64708be5a7fb6f30, 0x2b462e5e77aecd82])),
		Fq::from_montgomery_unchecked(BigInt([0x2c63ef42612a1180, 0x29f16aae345bec69, 0xf95e18c648b216a4, 0x1aa36073a4cae0d4])),
	),
	];
}

