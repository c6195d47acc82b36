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

//! Diagnostic views of the level structure.

use std::fmt;

use crate::{
    list::SkipList,
    node::{HEAD, TAIL},
};

/// Renders every active level, top first, as the walk from the head with the
/// span of each link:
///
/// ```plaintext
/// [1] -inf- (2) B (2) +inf+
/// [0] -inf- (1) A (1) B (1) C (1) +inf+
/// ```
pub struct Dump<'a> {
    list: &'a SkipList,
}

impl fmt::Display for Dump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arena = &self.list.arena;
        for level in (0..=self.list.max_level).rev() {
            write!(f, "[{level}]")?;
            let mut cursor = HEAD;
            while cursor != TAIL {
                let node = &arena[cursor];
                let link = node.links[level];
                write!(f, " {} ({})", node.key, link.span)?;
                cursor = link.forward;
            }
            write!(f, " {}", arena[TAIL].key)?;
            if level > 0 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Number of nodes on each active level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelReport {
    /// `counts[l]` is the population of level `l`.
    pub counts: Vec<usize>,
}

impl LevelReport {
    /// Sum over all levels, each node counted once per level it is on.
    pub fn whole_count(&self) -> usize {
        self.counts.iter().sum()
    }
}

impl fmt::Display for LevelReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (level, count) in self.counts.iter().enumerate().rev() {
            writeln!(f, "[{level:02}] {count}")?;
        }
        write!(f, "whole count={}", self.whole_count())
    }
}

impl SkipList {
    pub fn dump(&self) -> Dump<'_> {
        Dump { list: self }
    }

    pub fn level_report(&self) -> LevelReport {
        let counts = (0..=self.max_level)
            .map(|level| {
                let mut count = 0;
                let mut cursor = self.arena[HEAD].links[level].forward;
                while cursor != TAIL {
                    count += 1;
                    cursor = self.arena[cursor].links[level].forward;
                }
                count
            })
            .collect();

        LevelReport { counts }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dump_empty() {
        let list = SkipList::with_seed(0);
        assert_eq!(list.dump().to_string(), "[0] -inf- (1) +inf+");
        assert_eq!(
            list.level_report(),
            LevelReport { counts: vec![0] }
        );
        assert_eq!(list.level_report().to_string(), "[00] 0\nwhole count=0");
    }

    #[test]
    fn test_dump_matches_structure() {
        let mut list = SkipList::with_seed(9);
        for (i, key) in ["A", "B", "C", "D", "E", "F", "G", "H"].iter().enumerate() {
            list.insert(key, i as f64).unwrap();
        }

        let dump = list.dump().to_string();
        let lines: Vec<_> = dump.lines().collect();
        assert_eq!(lines.len(), list.max_level() + 1);
        assert_eq!(
            *lines.last().unwrap(),
            "[0] -inf- (1) A (1) B (1) C (1) D (1) E (1) F (1) G (1) H (1) +inf+"
        );
        for line in &lines {
            assert!(line.contains(" -inf- ("), "{line}");
            assert!(line.ends_with(" +inf+"), "{line}");
        }

        let report = list.level_report();
        assert_eq!(report.counts.len(), list.max_level() + 1);
        assert_eq!(report.counts[0], 8);
        assert!(report.counts.windows(2).all(|w| w[0] >= w[1]));
        assert!(report.counts.last().copied().unwrap() > 0);
        let heights: usize = list.iter().map(|n| n.height()).sum();
        assert_eq!(report.whole_count(), heights);
    }
}
