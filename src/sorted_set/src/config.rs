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

use serde::{Deserialize, Serialize};

use crate::{error::InnerError, Result};

/// Construction options of a [SkipList](crate::SkipList).
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Seed of the level generator. Seeded lists are reproducible, `None`
    /// draws the seed from the OS.
    pub seed: Option<u64>,
    /// Emit `trace!` events describing the descent and the span plan of
    /// every mutation.
    pub trace_mutations: bool,
}

impl Config {
    pub fn from_toml(body: &str) -> Result<Self> {
        toml::from_str(body).map_err(|source| InnerError::InvalidConfig { source }.into())
    }
}
