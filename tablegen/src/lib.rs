// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Generator for the powers-of-ten tables used by a correctly rounded
//! binary64 to decimal conversion routine on a resource-constrained target.
//!
//! The consumer approximates any power of ten with a single 64-bit multiply
//! against a tabulated significand plus a biased binary exponent, instead of
//! doing arbitrary-precision arithmetic at runtime. This crate computes each
//! entry exactly with bignum arithmetic, rounds it half to even, and emits
//! the table in the consumer's assembler data format. The output is a batch
//! artifact committed as static data, so bit-exact reproducibility across
//! runs is part of the contract.
//!
//! # Example
//!
//! ```
//! let table = pow10_tablegen::Pow10Table::build().expect("consistent table");
//! assert_eq!(table.main().first().map(|e| e.decimal_exponent), Some(-324));
//! ```

pub mod emit;
mod errors;
pub mod power;
pub mod round;
pub mod select;
pub mod table;

pub use crate::errors::{TablegenError, TablegenResult};
pub use crate::table::{Pow10Table, TableEntry};

// Binary precision budget of the exact scaled-power computation.
pub(crate) const PRECISION_BITS: u32 = 2400;

// Extra scale factor folded into every scaled power.
pub(crate) const SCALE_FACTOR: u32 = 64;

// Significand bits retained per entry. The 64-bit table word is the rounded
// significand shifted left once, its low bit carrying the spacing correction
// to the entry two decimal steps ahead.
pub(crate) const MANTISSA_BITS: u32 = 63;

/// Bias applied to an entry's power-of-two exponent for table storage.
pub const EXPONENT_BIAS: i32 = 1074;
