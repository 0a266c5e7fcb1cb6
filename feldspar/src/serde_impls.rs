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

//! Optional serde support for the wire-format types, serialising through
//! their canonical compressed byte encodings.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::kzg::{KzgCommitment, KzgProof};
use crate::sig::{PublicKey, Signature};

macro_rules! bytes_serde {
	($ty:ty, $to:expr, $from:expr) => {
		impl Serialize for $ty {
			fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
				s.serialize_bytes(&$to(self))
			}
		}

		impl<'de> Deserialize<'de> for $ty {
			fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
				let bytes: Vec<u8> = Vec::deserialize(d)?;
				$from(&bytes).map_err(de::Error::custom)
			}
		}
	};
}

bytes_serde!(PublicKey, |pk: &PublicKey| pk.to_bytes(), PublicKey::from_bytes);
bytes_serde!(Signature, |sig: &Signature| sig.to_bytes(), Signature::from_bytes);
bytes_serde!(
	KzgCommitment,
	|c: &KzgCommitment| crate::curves::bls12_381::codec::g1_to_compressed(&c.0),
	|b: &[u8]| crate::curves::bls12_381::codec::g1_from_compressed(b).map(KzgCommitment)
);
bytes_serde!(
	KzgProof,
	|p: &KzgProof| crate::curves::bls12_381::codec::g1_to_compressed(&p.0),
	|b: &[u8]| crate::curves::bls12_381::codec::g1_from_compressed(b).map(KzgProof)
);
