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

//! Feldspar: pairing-friendly elliptic curve arithmetic and the protocol
//! stack on top of it.
//!
//! The crate is layered: fixed-width integers and Montgomery prime
//! fields, tower extensions with lazy-reduced intermediates, generic
//! short-Weierstrass and twisted-Edwards groups with batched affine
//! kernels and Pippenger MSM, ate pairings for the BLS12 and BN
//! families, and on top of those BLS signatures (IETF draft), EIP-4844
//! KZG commitments, and byte-exact EVM precompile adapters.
//!
//! Constant-time discipline: secret-dependent paths avoid data-dependent
//! branches and addresses; the variable-time siblings carry a `_vartime`
//! suffix and must only see public data. Parallel entry points borrow a
//! caller-owned [`pool::TaskPool`] and never spin up threads themselves.

#![warn(
	unused,
	future_incompatible,
	nonstandard_style,
	rust_2018_idioms,
	rust_2021_compatibility
)]
#![deny(unsafe_code)]

pub mod arith;
pub mod curves;
pub mod ec;
pub mod error;
pub mod fields;
pub mod gt;
pub mod hashing;
pub mod kzg;
pub mod pairing;
pub mod pool;
pub mod precompile;
pub mod sig;

pub use error::Error;

#[cfg(feature = "serde")]
mod serde_impls;
