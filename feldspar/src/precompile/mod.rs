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

//! Byte-exact EVM precompile adapters over the arithmetic core.
//!
//! Each adapter validates the canonical encoding (lengths, zero padding,
//! field elements below the modulus, curve and subgroup membership where
//! the EIP demands it), calls the core, and re-serialises. Gas accounting
//! belongs to the caller.

pub mod bls;
pub mod bn;
pub mod kzg;
