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

//! Reduction of an exact scaled power to its rounded 64-bit table word.

use num::BigUint;
use num::Integer;

use crate::errors::{TablegenError, TablegenResult};
use crate::power::scaled_power;
use crate::table::TableEntry;
use crate::{EXPONENT_BIAS, MANTISSA_BITS, PRECISION_BITS};

// Bits inspected for rounding: the retained significand plus the round bit
// immediately below it.
const WINDOW_BITS: u32 = MANTISSA_BITS + 1;

// Power-of-two exponent of a scaled power relative to the precision budget.
fn digits_of(value: &BigUint) -> i32 {
    value.bits() as i32 - 1 - PRECISION_BITS as i32
}

// The extracted window always fits a single 64-bit limb.
fn low_limb(value: &BigUint) -> u64 {
    value.iter_u64_digits().next().unwrap_or(0)
}

/// Round a scaled power of ten down to its 64-bit table entry.
///
/// The top 63 bits of `value` are retained and rounded half to even on the
/// bit below them; anything further down is sticky. The rounded significand
/// is then shifted left once, and the freed low bit records whether the
/// entry two decimal steps ahead sits 6 or 7 binary digits away. Any other
/// spacing means the precision budget and the exponent selection disagree,
/// and generation must stop before an inconsistent table escapes.
pub fn round_to_entry(value: &BigUint, decimal_exponent: i32) -> TablegenResult<TableEntry> {
    let length = value.bits();
    let digits = digits_of(value);

    let window_big = value >> (length - u64::from(WINDOW_BITS));
    let sticky = (&window_big << (length - u64::from(WINDOW_BITS))) != *value;
    let window = low_limb(&window_big);

    let mut mantissa = window >> 1;
    if window & 1 == 1 && (mantissa.is_odd() || sticky) {
        // Cannot carry past the top bit: no power of ten in the tabulated
        // range has 63 leading one bits.
        mantissa += 1;
    }

    let next_digits = digits_of(&scaled_power(decimal_exponent + 2));
    let delta = next_digits - digits;
    if delta != 6 && delta != 7 {
        return Err(TablegenError::TableConsistency {
            decimal_exponent,
            delta,
        });
    }

    Ok(TableEntry {
        decimal_exponent,
        significand: (mantissa << 1) | (delta - 6) as u64,
        biased_exponent: digits + EXPONENT_BIAS,
    })
}
