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

//! Benchmark configs.

use std::{env, fs, time::Duration};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::info;

const BENCH_CONFIG_PATH_KEY: &str = "BENCH_CONFIG_PATH";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct BenchConfig {
    pub workload: WorkloadConfig,
    pub list: sorted_set::Config,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct WorkloadConfig {
    /// Number of distinct keys to insert.
    pub record_count: usize,
    /// Seed of the order in which keys are fed to the list.
    pub seed: u64,
    pub bench_measurement_time_ms: u64,
    pub bench_sample_size: usize,
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            record_count: 100_000,
            seed: 1,
            bench_measurement_time_ms: 5000,
            bench_sample_size: 10,
        }
    }
}

impl WorkloadConfig {
    pub fn bench_measurement_time(&self) -> Duration {
        Duration::from_millis(self.bench_measurement_time_ms)
    }
}

pub fn config_from_file(path: &str) -> anyhow::Result<BenchConfig> {
    info!(config_path = path, "Load bench config");

    let toml_str =
        fs::read_to_string(path).with_context(|| format!("read bench config, path:{path}"))?;
    let config = toml::from_str(&toml_str)
        .with_context(|| format!("parse bench config, path:{path}"))?;
    info!(config = ?config, "Bench config");
    Ok(config)
}

/// Loads the file named by `BENCH_CONFIG_PATH`, or the defaults when it is
/// unset.
pub fn config_from_env() -> anyhow::Result<BenchConfig> {
    match env::var(BENCH_CONFIG_PATH_KEY) {
        Ok(path) => config_from_file(&path),
        Err(_) => {
            info!("{BENCH_CONFIG_PATH_KEY} is unset, use default bench config");
            Ok(BenchConfig::default())
        }
    }
}
