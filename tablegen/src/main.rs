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

//! Batch driver: build the table once and write the assembler include text
//! to stdout. Takes no arguments; everything is fixed by named constants in
//! the library.

use std::io::{self, Write};

use log::info;
use pow10_tablegen::{emit, Pow10Table, TablegenResult};

fn main() -> TablegenResult<()> {
    env_logger::init();

    let table = Pow10Table::build()?;
    let boundary = table.main()[table.boundary()];
    info!(
        "tabulated {} powers of ten ({} preface, {} main), boundary entry 10^{}",
        table.preface().len() + table.main().len(),
        table.preface().len(),
        table.main().len(),
        boundary.decimal_exponent
    );

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    emit::write_tables(&mut out, &table)?;
    out.flush()?;
    Ok(())
}
