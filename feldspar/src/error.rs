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

//! The crate-wide error taxonomy.
//!
//! Codec and subgroup failures surface at the deserialisation boundary;
//! verification returning `false` is a normal result and never an error.
//! Internal arithmetic assumes validated inputs and is infallible.

use thiserror::Error;

/// Why a byte string was rejected during canonical deserialisation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CodecError {
	#[error("wrong input length: expected {expected}, got {got}")]
	Length { expected: usize, got: usize },
	#[error("invalid compression flag bits")]
	Flags,
	#[error("field element not canonical (>= modulus)")]
	NonCanonicalFieldElement,
	#[error("scalar not canonical (>= group order)")]
	NonCanonicalScalar,
	#[error("point is not on the curve")]
	NotOnCurve,
	#[error("no square root exists for the decompressed x coordinate")]
	NotASquare,
	#[error("invalid hex digit")]
	InvalidDigit,
}

/// Why a trusted setup could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
	#[error("setup file could not be read: {0}")]
	Io(String),
	#[error("setup file is malformed: {0}")]
	Malformed(&'static str),
	#[error("setup has wrong point counts: expected {expected}, got {got}")]
	WrongSize { expected: usize, got: usize },
}

/// Every failure the public API can report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
	#[error("codec: {0}")]
	Codec(#[from] CodecError),
	#[error("point is on the curve but outside the prime-order subgroup")]
	Subgroup,
	#[error("verification equation does not hold")]
	Verification,
	#[error("setup: {0}")]
	Setup(#[from] SetupError),
	#[error("aggregation: {0}")]
	Aggregation(&'static str),
}
