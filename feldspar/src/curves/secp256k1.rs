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

//! secp256k1: the non-pairing exercise of the generic curve layer, with
//! its classic GLV endomorphism.

use crate::arith::BigInt;
use crate::ec::{Affine, GlvParams, Projective, SWCurveConfig};
use crate::fields::{Fp, FpParams, SqrtAlgo};

pub type Fq = Fp<FqParams, 4>;
pub type Fr = Fp<FrParams, 4>;

#[derive(Clone, Copy, Debug)]
pub struct FqParams;

impl FpParams<4> for FqParams {
	const MODULUS: BigInt<4> = BigInt([
		0xfffffffefffffc2f,
		0xffffffffffffffff,
		0xffffffffffffffff,
		0xffffffffffffffff,
	]);
	const R: BigInt<4> = BigInt([0x00000001000003d1, 0, 0, 0]);
	const R2: BigInt<4> = BigInt([0x000007a2000e90a1, 0x0000000000000001, 0, 0]);
	const INV: u64 = 0xd838091dd2253531;
	const TWO_ADICITY: u32 = 1;
	const TRACE_MINUS_ONE_DIV_TWO: BigInt<4> = BigInt([
		0xffffffffbfffff0b,
		0xffffffffffffffff,
		0xffffffffffffffff,
		0x3fffffffffffffff,
	]);
	const TWO_ADIC_ROOT_OF_UNITY: BigInt<4> = BigInt([
		0xfffffffdfffff85e,
		0xffffffffffffffff,
		0xffffffffffffffff,
		0xffffffffffffffff,
	]);
	const MODULUS_MINUS_ONE_DIV_TWO: BigInt<4> = BigInt([
		0xffffffff7ffffe17,
		0xffffffffffffffff,
		0xffffffffffffffff,
		0x7fffffffffffffff,
	]);
	const MODULUS_PLUS_ONE_DIV_FOUR: BigInt<4> = BigInt([
		0xffffffffbfffff0c,
		0xffffffffffffffff,
		0xffffffffffffffff,
		0x3fffffffffffffff,
	]);
	const MODULUS_SQUARED: (BigInt<4>, BigInt<4>) = (
		BigInt([0x000007a2000e90a1, 0x0000000000000001, 0, 0]),
		BigInt([
			0xfffffffdfffff85e,
			0xffffffffffffffff,
			0xffffffffffffffff,
			0xffffffffffffffff,
		]),
	);
	const SQRT: SqrtAlgo = SqrtAlgo::ThreeMod4;
}

#[derive(Clone, Copy, Debug)]
pub struct FrParams;

impl FpParams<4> for FrParams {
	const MODULUS: BigInt<4> = BigInt([
		0xbfd25e8cd0364141,
		0xbaaedce6af48a03b,
		0xfffffffffffffffe,
		0xffffffffffffffff,
	]);
	const R: BigInt<4> = BigInt([
		0x402da1732fc9bebf,
		0x4551231950b75fc4,
		0x0000000000000001,
		0,
	]);
	const R2: BigInt<4> = BigInt([
		0x896cf21467d7d140,
		0x741496c20e7cf878,
		0xe697f5e45bcd07c6,
		0x9d671cd581c69bc5,
	]);
	const INV: u64 = 0x4b0dff665588b13f;
	const TWO_ADICITY: u32 = 6;
	const TRACE_MINUS_ONE_DIV_TWO: BigInt<4> = BigInt([
		0x777fa4bd19a06c82,
		0xfd755db9cd5e9140,
		0xffffffffffffffff,
		0x01ffffffffffffff,
	]);
	const TWO_ADIC_ROOT_OF_UNITY: BigInt<4> = BigInt([
		0xe823f5b94e5b77cf,
		0xcab86f88ecd9ebea,
		0xd3d93fa52862700f,
		0xd6304d1f577eeabe,
	]);
	const MODULUS_MINUS_ONE_DIV_TWO: BigInt<4> = BigInt([
		0xdfe92f46681b20a0,
		0x5d576e7357a4501d,
		0xffffffffffffffff,
		0x7fffffffffffffff,
	]);
	// unused (p = 1 mod 4)
	const MODULUS_PLUS_ONE_DIV_FOUR: BigInt<4> = BigInt::ZERO;
	const MODULUS_SQUARED: (BigInt<4>, BigInt<4>) = (
		BigInt([
			0x493f50a1380e1281,
			0x2ec373a8bdc598b4,
			0xe697f5e45bcd07c5,
			0x9d671cd581c69bc5,
		]),
		BigInt([
			0x7fa4bd19a06c8283,
			0x755db9cd5e914077,
			0xfffffffffffffffd,
			0xffffffffffffffff,
		]),
	);
	const SQRT: SqrtAlgo = SqrtAlgo::TonelliShanks;
}

const BETA: Fq = Fq::from_montgomery_unchecked(BigInt([
	0x58a4361c8e81894e,
	0x03fde1631c4b80af,
	0xf8e98978d02e3905,
	0x7a4a36aebcbb3d53,
]));

#[derive(Clone, Copy, Debug)]
pub struct Secp256k1Config;

impl SWCurveConfig for Secp256k1Config {
	type Base = Fq;

	const A: Fq = Fq::ZERO;
	const B: Fq = Fq::from_montgomery_unchecked(BigInt([0x0000000700001ab7, 0, 0, 0]));
	const GENERATOR_X: Fq = Fq::from_montgomery_unchecked(BigInt([
		0xd7362e5a487e2097,
		0x231e295329bc66db,
		0x979f48c033fd129c,
		0x9981e643e9089f48,
	]));
	const GENERATOR_Y: Fq = Fq::from_montgomery_unchecked(BigInt([
		0xb15ea6d2d3dbabe2,
		0x8dfc5d5d1f1dc64d,
		0x70b6b59aac19c136,
		0xcf3f851fd4a582d6,
	]));
	const ORDER: BigInt<4> = FrParams::MODULUS;
	const COFACTOR_IS_ONE: bool = true;
	const GLV: Option<GlvParams<Fq>> = Some(GlvParams {
		beta: BETA,
		negates_y: false,
		lambda: BigInt([
			0xdf02967c1b23bd72,
			0x122e22ea20816678,
			0xa5261c028812645a,
			0x5363ad4cc05c30e0,
		]),
		a1: BigInt([0xe86c90e49284eb15, 0x3086d221a7d46bcd, 0, 0]),
		a1_neg: false,
		b1: BigInt([0x6f547fa90abfe4c3, 0xe4437ed6010e8828, 0, 0]),
		b1_neg: true,
		a2: BigInt([0x57c1108d9d44cfd8, 0x14ca50f7a8e2f3f6, 0x0000000000000001, 0]),
		a2_neg: false,
		b2: BigInt([0xe86c90e49284eb15, 0x3086d221a7d46bcd, 0, 0]),
		b2_neg: false,
		g1: BigInt([0x3daa8a1471e8ca7f, 0xe86c90e49284eb15, 0x3086d221a7d46bcd, 0]),
		g2: BigInt([0x221208ac9df506c6, 0x6f547fa90abfe4c4, 0xe4437ed6010e8828, 0]),
	});
}

pub type AffinePoint = Affine<Secp256k1Config>;
pub type ProjectivePoint = Projective<Secp256k1Config>;
