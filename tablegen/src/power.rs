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

//! Exact scaled powers of ten.

use num::BigUint;

use crate::{PRECISION_BITS, SCALE_FACTOR};

/// Compute `2^2400 * 64 * 10^n` exactly, flooring the division for negative
/// `n`. No intermediate rounding happens anywhere in here, so repeated calls
/// with the same exponent are bit-identical.
pub fn scaled_power(decimal_exponent: i32) -> BigUint {
    let scaled = BigUint::from(SCALE_FACTOR) << PRECISION_BITS;
    let ten_power = BigUint::from(10u32).pow(decimal_exponent.unsigned_abs());
    if decimal_exponent >= 0 {
        scaled * ten_power
    } else {
        scaled / ten_power
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num::One;

    #[test]
    fn ten_to_zero_is_the_bare_scale() {
        assert_eq!(scaled_power(0), BigUint::one() << 2406u32);
    }

    #[test]
    fn positive_exponents_multiply_exactly() {
        let expected = (BigUint::one() << 2406u32) * BigUint::from(1000u32);
        assert_eq!(scaled_power(3), expected);
    }

    #[test]
    fn negative_exponents_floor_the_quotient() {
        let floored = scaled_power(-1) * BigUint::from(10u32);
        let exact = BigUint::one() << 2406u32;
        assert!(floored <= exact);
        assert!(&floored + BigUint::from(10u32) > exact);
    }

    #[test]
    fn repeated_calls_are_bit_identical() {
        for n in [-344, -123, 0, 57, 310] {
            assert_eq!(scaled_power(n), scaled_power(n));
        }
    }
}
