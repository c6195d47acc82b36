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

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::MAX_LEVEL;

/// Keeps only `MAX_LEVEL - 1` significant bits of a draw.
const LEVEL_MASK: u64 = (1 << (MAX_LEVEL - 1)) - 1;

/// Draws node levels from a geometric distribution.
///
/// Level `l` is picked with probability `2^-(l + 1)`: the level is the count
/// of trailing zero bits of a uniform draw, capped at `MAX_LEVEL - 1`.
#[derive(Debug, Clone)]
pub struct LevelGenerator {
    rng: StdRng,
}

impl LevelGenerator {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn next_level(&mut self) -> usize {
        let bits = self.rng.gen::<u64>() & LEVEL_MASK;
        (bits.trailing_zeros() as usize).min(MAX_LEVEL - 1)
    }
}

impl Default for LevelGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_in_range() {
        let mut generator = LevelGenerator::with_seed(7);
        for _ in 0..100_000 {
            assert!(generator.next_level() < MAX_LEVEL);
        }
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let mut a = LevelGenerator::with_seed(1);
        let mut b = LevelGenerator::with_seed(1);
        let levels_a: Vec<_> = (0..1000).map(|_| a.next_level()).collect();
        let levels_b: Vec<_> = (0..1000).map(|_| b.next_level()).collect();
        assert_eq!(levels_a, levels_b);
    }

    #[test]
    fn test_geometric_distribution() {
        let n = 1 << 16;
        let mut generator = LevelGenerator::with_seed(12345);
        let mut counts = [0usize; MAX_LEVEL];
        for _ in 0..n {
            counts[generator.next_level()] += 1;
        }

        // Roughly half of the draws land on each level compared to the one
        // below it.
        let expect_level0 = n / 2;
        assert!(counts[0] > expect_level0 * 9 / 10, "{counts:?}");
        assert!(counts[0] < expect_level0 * 11 / 10, "{counts:?}");
        let expect_level1 = n / 4;
        assert!(counts[1] > expect_level1 * 8 / 10, "{counts:?}");
        assert!(counts[1] < expect_level1 * 12 / 10, "{counts:?}");
        assert!(counts[0] > counts[3]);
    }
}
