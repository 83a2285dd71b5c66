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

//! Emission of the table in the consumer's assembler data format.
//!
//! Two parallel tables are written: the 64-bit significands, then the
//! 16-bit biased exponents. Each is preceded by its preface rows and
//! introduced by the label the consumer indexes from, so the preface sits
//! at negative offsets. The boundary row is prefixed with the assembler's
//! comment marker.

use std::io::Write;

use crate::errors::TablegenResult;
use crate::table::Pow10Table;

const BOUNDARY_MARK: &str = "@";

/// Write both tables in the consumer's directive syntax. The output is
/// byte-stable: the same table always serializes to the same text.
pub fn write_tables<W: Write>(out: &mut W, table: &Pow10Table) -> TablegenResult<()> {
    writeln!(out)?;
    for entry in table.preface() {
        writeln!(out, "\t\t.8byte\t{:#X}", entry.significand)?;
    }
    writeln!(out, "TenPowers:")?;
    for (index, entry) in table.main().iter().enumerate() {
        let mark = if index == table.boundary() {
            BOUNDARY_MARK
        } else {
            ""
        };
        writeln!(out, "\t\t{mark}.8byte\t{:#X}", entry.significand)?;
    }

    writeln!(out)?;
    for entry in table.preface() {
        writeln!(out, "\t\t.2byte\t{}", entry.biased_exponent)?;
    }
    writeln!(out, "Exp2ForEntry:")?;
    for (index, entry) in table.main().iter().enumerate() {
        let mark = if index == table.boundary() {
            BOUNDARY_MARK
        } else {
            ""
        };
        writeln!(out, "\t\t{mark}.2byte\t{}", entry.biased_exponent)?;
    }

    Ok(())
}
