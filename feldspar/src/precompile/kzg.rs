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

//! EIP-4844 point-evaluation precompile (address 0x0a).

use sha2::{Digest, Sha256};

use crate::curves::bls12_381::codec;
use crate::error::{CodecError, Error};
use crate::kzg::{verify_kzg_proof, KzgCommitment, KzgProof, KzgSettings, FIELD_ELEMENTS_PER_BLOB};

pub const INPUT_LEN: usize = 192;
pub const OUTPUT_LEN: usize = 64;
const VERSION_BYTE: u8 = 0x01;

/// Input: versioned_hash(32) | z(32) | y(32) | commitment(48) | proof(48).
/// Output on success: FIELD_ELEMENTS_PER_BLOB | BLS_MODULUS, both 32-byte
/// big-endian. Verification failure is an error here (the precompile
/// reverts), unlike the library-level verifiers.
pub fn point_evaluation(settings: &KzgSettings, input: &[u8]) -> Result<[u8; OUTPUT_LEN], Error> {
	if input.len() != INPUT_LEN {
		return Err(Error::Codec(CodecError::Length {
			expected: INPUT_LEN,
			got: input.len(),
		}));
	}
	let versioned_hash = &input[..32];
	let z = codec::fr_from_bytes(&input[32..64])?;
	let y = codec::fr_from_bytes(&input[64..96])?;
	let commitment_bytes = &input[96..144];
	let proof_bytes = &input[144..192];

	let mut expected = Sha256::digest(commitment_bytes);
	expected[0] = VERSION_BYTE;
	if expected.as_slice() != versioned_hash {
		return Err(Error::Codec(CodecError::Flags));
	}

	let commitment = KzgCommitment(codec::g1_from_compressed(commitment_bytes)?);
	let proof = KzgProof(codec::g1_from_compressed(proof_bytes)?);

	if !verify_kzg_proof(settings, &commitment, &z, &y, &proof) {
		return Err(Error::Verification);
	}

	let mut out = [0u8; OUTPUT_LEN];
	out[24..32].copy_from_slice(&(FIELD_ELEMENTS_PER_BLOB as u64).to_be_bytes());
	// BLS_MODULUS = r
	use crate::fields::FpParams;
	<crate::curves::bls12_381::FrParams as FpParams<4>>::MODULUS
		.write_bytes_be(&mut out[32..]);
	Ok(out)
}
