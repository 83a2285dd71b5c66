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

//! The generated table.

use crate::errors::TablegenResult;
use crate::power::scaled_power;
use crate::round::round_to_entry;
use crate::select::{preface_exponents, MainExponents};

/// One rounded power of ten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableEntry {
    /// The power of ten this entry tabulates.
    pub decimal_exponent: i32,
    /// Rounded significand, shifted left once with the spacing correction
    /// packed into the low bit.
    pub significand: u64,
    /// Power-of-two exponent biased by 1074. Negative for preface entries;
    /// the emitted 16-bit datum wraps accordingly.
    pub biased_exponent: i32,
}

/// The full generated table, ordered by increasing decimal exponent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pow10Table {
    preface: Vec<TableEntry>,
    main: Vec<TableEntry>,
    boundary: usize,
}

impl Pow10Table {
    /// Build the whole table in a single pass over the selected exponents.
    /// The first inconsistent entry aborts the build; no partial table
    /// escapes.
    pub fn build() -> TablegenResult<Self> {
        let mut preface = Vec::new();
        for exponent in preface_exponents() {
            preface.push(round_to_entry(&scaled_power(exponent), exponent)?);
        }

        let mut main = Vec::new();
        let mut boundary = 0;
        for selection in MainExponents::new() {
            if selection.boundary {
                boundary = main.len();
            }
            let exponent = selection.decimal_exponent;
            main.push(round_to_entry(&scaled_power(exponent), exponent)?);
        }

        Ok(Pow10Table {
            preface,
            main,
            boundary,
        })
    }

    /// Entries below the subnormal boundary. The consumer reaches these at
    /// negative offsets from the table labels.
    pub fn preface(&self) -> &[TableEntry] {
        &self.preface
    }

    /// The main table.
    pub fn main(&self) -> &[TableEntry] {
        &self.main
    }

    /// Index of the boundary entry within the main table.
    pub fn boundary(&self) -> usize {
        self.boundary
    }

    /// All entries in emission order.
    pub fn entries(&self) -> impl Iterator<Item = &TableEntry> + '_ {
        self.preface.iter().chain(self.main.iter())
    }
}
