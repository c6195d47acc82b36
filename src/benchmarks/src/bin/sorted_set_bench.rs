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

//! Runs the timed workload once and logs each phase.

use anyhow::Result;
use benchmarks::{
    config::{self, BenchConfig},
    workload::SortedSetBench,
};
use clap::Parser;
use tracing::info;

#[derive(Parser, Debug)]
#[command(version, about, long_about)]
struct Args {
    /// Config file path, `BENCH_CONFIG_PATH` is used when absent
    #[arg(short, long)]
    config: Option<String>,

    /// Overrides the number of records
    #[arg(short, long)]
    records: Option<usize>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_file(true)
        .with_line_number(true)
        .with_target(false)
        .init();

    let args = Args::parse();
    let mut config: BenchConfig = match &args.config {
        Some(path) => config::config_from_file(path)?,
        None => config::config_from_env()?,
    };
    if let Some(records) = args.records {
        config.workload.record_count = records;
    }

    info!(records = config.workload.record_count, "Start sorted set bench");
    let mut bench = SortedSetBench::new(config);
    let reports = bench.run()?;
    let total = reports.iter().map(|r| r.elapsed).sum::<std::time::Duration>();
    info!(total = ?total, "Sorted set bench finished");

    Ok(())
}
