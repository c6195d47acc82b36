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

//! Timed insert / lookup / remove phases over one sorted set.

use std::time::{Duration, Instant};

use anyhow::{ensure, Context};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use sorted_set::SkipList;
use tracing::info;

use crate::config::BenchConfig;

/// Timing of one phase.
#[derive(Debug, Clone)]
pub struct PhaseReport {
    pub phase: &'static str,
    pub ops: usize,
    pub elapsed: Duration,
}

impl PhaseReport {
    pub fn avg_micros(&self) -> f64 {
        if self.ops == 0 {
            return 0.0;
        }
        self.elapsed.as_secs_f64() * 1_000_000.0 / self.ops as f64
    }
}

pub struct SortedSetBench {
    config: BenchConfig,
    /// Distinct `(key, score)` pairs in feeding order.
    entries: Vec<(String, f64)>,
    list: SkipList,
}

impl SortedSetBench {
    pub fn new(config: BenchConfig) -> Self {
        let mut entries = (1..=config.workload.record_count)
            .map(|i| (i.to_string(), i as f64))
            .collect::<Vec<_>>();
        entries.shuffle(&mut StdRng::seed_from_u64(config.workload.seed));
        let list = SkipList::with_config(config.list.clone());

        Self {
            config,
            entries,
            list,
        }
    }

    pub fn list(&self) -> &SkipList {
        &self.list
    }

    /// Rebuilds the list from scratch.
    pub fn insert_all(&mut self) -> anyhow::Result<usize> {
        self.list = SkipList::with_config(self.config.list.clone());
        for (key, score) in &self.entries {
            self.list
                .insert(key, *score)
                .with_context(|| format!("insert entry, key:{key}"))?;
        }
        Ok(self.list.len())
    }

    pub fn find_all(&self) -> usize {
        self.entries
            .iter()
            .filter(|(key, _)| self.list.find(key).is_some())
            .count()
    }

    pub fn find_greater_or_equal_all(&self) -> usize {
        self.entries
            .iter()
            .filter(|(_, score)| self.list.find_greater_or_equal(*score).is_some())
            .count()
    }

    pub fn rank_all(&self) -> usize {
        self.entries
            .iter()
            .filter(|(key, _)| self.list.get_rank(key).is_some())
            .count()
    }

    pub fn find_by_rank_all(&self) -> usize {
        (1..=self.entries.len())
            .filter(|rank| self.list.find_by_rank(*rank).is_some())
            .count()
    }

    pub fn remove_all(&mut self) -> usize {
        let mut removed = 0;
        for (key, _) in &self.entries {
            if self.list.remove(key).is_some() {
                removed += 1;
            }
        }
        removed
    }

    /// Runs every phase once, checking each one touched all entries.
    pub fn run(&mut self) -> anyhow::Result<Vec<PhaseReport>> {
        let expect = self.entries.len();
        let mut reports = Vec::with_capacity(6);

        reports.push(timed("insert", || self.insert_all())?);
        info!(levels = %self.list.level_report(), "Level population");
        reports.push(timed("find", || Ok(self.find_all()))?);
        reports.push(timed("find_greater_or_equal", || {
            Ok(self.find_greater_or_equal_all())
        })?);
        reports.push(timed("get_rank", || Ok(self.rank_all()))?);
        reports.push(timed("find_by_rank", || Ok(self.find_by_rank_all()))?);
        reports.push(timed("remove", || Ok(self.remove_all()))?);

        for report in &reports {
            ensure!(
                report.ops == expect,
                "phase {} touched {} entries, expect {expect}",
                report.phase,
                report.ops
            );
            info!(
                phase = report.phase,
                ops = report.ops,
                elapsed = ?report.elapsed,
                avg_us = report.avg_micros(),
                "Phase finished"
            );
        }
        ensure!(self.list.is_empty(), "list is not empty after remove phase");

        Ok(reports)
    }
}

fn timed<F>(phase: &'static str, f: F) -> anyhow::Result<PhaseReport>
where
    F: FnOnce() -> anyhow::Result<usize>,
{
    let begin = Instant::now();
    let ops = f().with_context(|| format!("run phase {phase}"))?;
    Ok(PhaseReport {
        phase,
        ops,
        elapsed: begin.elapsed(),
    })
}
