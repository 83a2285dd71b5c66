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

//! Generator errors.

#[derive(thiserror::Error, Debug)]
pub enum TablegenError {
    /// The spacing to the entry two decimal steps ahead left the window the
    /// packed correction bit can express. A table built past this point
    /// would corrupt the consumer silently, so generation stops here.
    #[error("inconsistent spacing at 10^{decimal_exponent}: the entry two steps ahead is {delta} binary digits away, expected 6 or 7")]
    TableConsistency { decimal_exponent: i32, delta: i32 },

    #[error(transparent)]
    IO {
        #[from]
        source: std::io::Error,
    },
}

pub type TablegenResult<T> = Result<T, TablegenError>;
