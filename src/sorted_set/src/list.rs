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

use std::{collections::HashMap, fmt};

use tracing::{debug, trace};

use crate::{
    arena::Arena,
    ensure,
    error::InnerError,
    handle::NodeRef,
    level::LevelGenerator,
    node::{Link, Node, NodeId, HEAD, TAIL},
    score,
    span::{self, InsertPlan},
    Config, Result, HEAD_KEY, MAX_LEVEL, TAIL_KEY,
};

/// What an [insert](SkipList::insert) did to the list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InsertOutcome {
    /// The key was absent and has been added.
    Inserted,
    /// The key was present with the same score, nothing changed.
    Unchanged,
    /// The key was present with another score. Its node has been replaced.
    Rescored { previous: f64 },
}

/// Result of a descent toward a target.
///
/// For each level, `preds` holds the last node strictly before the target
/// and `ranks` the rank of that node (the head has rank 0). Levels above the
/// top level keep the head at rank 0.
#[derive(Debug, Clone)]
pub(crate) struct Descent {
    pub preds: [NodeId; MAX_LEVEL],
    pub ranks: [usize; MAX_LEVEL],
}

impl Descent {
    fn new() -> Self {
        Self {
            preds: [HEAD; MAX_LEVEL],
            ranks: [0; MAX_LEVEL],
        }
    }
}

/// A sorted set of unique keys ordered by (score, key).
///
/// Besides lookups by key, the list answers rank queries in expected
/// logarithmic time: every forward link records how many base level steps it
/// covers, so the rank of a node is the sum of the spans walked to reach it.
#[derive(Clone)]
pub struct SkipList {
    pub(crate) arena: Arena,
    /// Highest level holding at least one node, 0 when empty.
    pub(crate) max_level: usize,
    index: HashMap<String, f64>,
    levels: LevelGenerator,
    config: Config,
}

impl SkipList {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Creates a list whose level draws are reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_config(Config {
            seed: Some(seed),
            ..Default::default()
        })
    }

    pub fn with_config(config: Config) -> Self {
        let levels = match config.seed {
            Some(seed) => LevelGenerator::with_seed(seed),
            None => LevelGenerator::new(),
        };

        Self {
            arena: Arena::new(),
            max_level: 0,
            index: HashMap::new(),
            levels,
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena[HEAD].links[0].forward == TAIL
    }

    /// Highest level currently holding a node, 0 when the list is empty.
    pub fn max_level(&self) -> usize {
        self.max_level
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Returns the score of `key` without walking the list.
    pub fn get_score(&self, key: &str) -> Option<f64> {
        self.index.get(key).copied()
    }

    /// Inserts `key` with `score`.
    ///
    /// Inserting a present key with the same score (within
    /// [SCORE_EPSILON](crate::SCORE_EPSILON)) does nothing. With another
    /// score, the old node is removed and a new one inserted.
    ///
    /// The sentinel keys and non finite scores are rejected, leaving the
    /// list untouched.
    pub fn insert(&mut self, key: &str, score: f64) -> Result<InsertOutcome> {
        ensure!(
            key != HEAD_KEY && key != TAIL_KEY,
            InnerError::ReservedKey {
                key: key.to_string()
            }
        );
        ensure!(score.is_finite(), InnerError::InvalidScore { score });

        let mut outcome = InsertOutcome::Inserted;
        if let Some(&previous) = self.index.get(key) {
            if score::approx_eq(previous, score) {
                return Ok(InsertOutcome::Unchanged);
            }
            ensure!(
                self.remove(key).is_some(),
                "indexed key is not linked, key:{key}"
            );
            outcome = InsertOutcome::Rescored { previous };
        }

        let height = self.next_height();
        let descent = self.descend(|node| node.precedes(score, key));
        let plan = span::plan_insert(&self.pred_spans(&descent), &descent.ranks, height);
        if self.config.trace_mutations {
            trace!(
                key,
                score,
                height,
                preds = ?self.pred_keys(&descent),
                ranks = ?&descent.ranks[..=self.max_level],
                node_spans = ?plan.node_spans,
                "Plan insert"
            );
        }

        let id = self.arena.alloc(Node::new(key.to_string(), score, height));
        self.link(id, &descent, plan);
        self.index.insert(key.to_string(), score);

        Ok(outcome)
    }

    /// Removes `key`, returning its score if it was present.
    pub fn remove(&mut self, key: &str) -> Option<f64> {
        let (id, descent) = self.locate(key)?;
        let score = self.arena[id].score;

        let node_spans: Vec<_> = self.arena[id].links.iter().map(|l| l.span).collect();
        let pred_spans = span::plan_remove(&self.pred_spans(&descent), &node_spans);
        if self.config.trace_mutations {
            trace!(
                key,
                score,
                preds = ?self.pred_keys(&descent),
                node_spans = ?node_spans,
                "Plan remove"
            );
        }

        self.unlink(id, &descent, &pred_spans);
        self.arena.free(id);
        self.index.remove(key);
        self.shrink_levels();

        Some(score)
    }

    /// Finds the node of `key`.
    pub fn find(&self, key: &str) -> Option<NodeRef<'_>> {
        let (id, _) = self.locate(key)?;
        self.node_ref(id)
    }

    /// Returns the 1-based rank of `key`.
    pub fn get_rank(&self, key: &str) -> Option<usize> {
        self.locate(key).map(|(_, descent)| descent.ranks[0] + 1)
    }

    /// Returns the node at the 1-based `rank`, `None` when out of
    /// `[1, len]`.
    pub fn find_by_rank(&self, rank: usize) -> Option<NodeRef<'_>> {
        if rank == 0 || rank > self.len() {
            return None;
        }

        let descent = self.descend_to_rank(rank);
        self.node_ref(self.arena[descent.preds[0]].links[0].forward)
    }

    /// Returns the first node whose score is not less than `score`.
    ///
    /// Only scores are compared. Among equal scores the smallest key wins.
    /// A NaN `score` matches nothing.
    pub fn find_greater_or_equal(&self, score: f64) -> Option<NodeRef<'_>> {
        if score.is_nan() {
            return None;
        }
        let first = self.arena[HEAD].links[0].forward;
        if first == TAIL {
            return None;
        }
        if !score::greater_than(score, self.arena[first].score) {
            return self.node_ref(first);
        }
        let last = self.arena[TAIL].backward;
        if score::greater_than(score, self.arena[last].score) {
            return None;
        }

        let descent = self.descend(|node| score::less_than(node.score, score));
        let mut cursor = self.arena[descent.preds[0]].links[0].forward;
        while cursor != TAIL && score::less_than(self.arena[cursor].score, score) {
            cursor = self.arena[cursor].links[0].forward;
        }

        self.node_ref(cursor)
    }

    /// Node with the smallest (score, key).
    pub fn first(&self) -> Option<NodeRef<'_>> {
        self.node_ref(self.arena[HEAD].links[0].forward)
    }

    /// Node with the largest (score, key).
    pub fn last(&self) -> Option<NodeRef<'_>> {
        self.node_ref(self.arena[TAIL].backward)
    }

    /// Checks every structural invariant, reporting the first violation.
    ///
    /// Walks the whole list, for diagnostics and tests.
    pub fn validate(&self) -> Result<()> {
        let len = self.len();
        ensure!(
            self.arena.live() == len,
            "arena holds {} nodes but index holds {len} keys",
            self.arena.live()
        );

        // Rank of every node at the base level, sentinels included.
        let mut ranks = HashMap::with_capacity(len + 2);
        ranks.insert(HEAD, 0);
        let mut rank = 0;
        let mut prev = HEAD;
        let mut cursor = self.arena[HEAD].links[0].forward;
        while cursor != TAIL {
            rank += 1;
            ensure!(rank <= len, "base level is longer than {len} nodes");
            let node = &self.arena[cursor];
            ensure!(
                self.index.get(&node.key) == Some(&node.score),
                "node is not indexed, key:{}",
                node.key
            );
            ensure!(
                node.backward == prev,
                "broken backward link, key:{}",
                node.key
            );
            if prev != HEAD {
                let p = &self.arena[prev];
                ensure!(
                    p.precedes(node.score, &node.key),
                    "out of order, prev:{}, key:{}",
                    p.key,
                    node.key
                );
            }
            ranks.insert(cursor, rank);
            prev = cursor;
            cursor = node.links[0].forward;
        }
        ensure!(rank == len, "base level holds {rank} nodes, expect {len}");
        ensure!(
            self.arena[TAIL].backward == prev,
            "tail does not point back to the last node"
        );
        ranks.insert(TAIL, len + 1);

        for (key, score) in &self.index {
            let located = self.locate(key);
            ensure!(
                located.as_ref().map(|(id, _)| self.arena[*id].score) == Some(*score),
                "indexed key cannot be located, key:{key}"
            );
            if let Some((id, descent)) = located {
                ensure!(
                    ranks.get(&id) == Some(&(descent.ranks[0] + 1)),
                    "located rank disagrees with base level, key:{key}"
                );
            }
        }

        for level in 0..MAX_LEVEL {
            let mut cursor = HEAD;
            let mut count = 0;
            loop {
                let link = self.arena[cursor].links[level];
                let (Some(from), Some(to)) = (ranks.get(&cursor), ranks.get(&link.forward))
                else {
                    return Err(anyhow::anyhow!("dangling link at level {level}").into());
                };
                ensure!(
                    to > from && link.span == to - from,
                    "bad span at level {level}, key:{}, span:{}, expect:{}",
                    self.arena[cursor].key,
                    link.span,
                    to.saturating_sub(*from)
                );
                if link.forward == TAIL {
                    break;
                }
                ensure!(
                    self.arena[link.forward].height() > level,
                    "node linked above its height at level {level}, key:{}",
                    self.arena[link.forward].key
                );
                count += 1;
                cursor = link.forward;
            }

            ensure!(
                level <= self.max_level || count == 0,
                "level {level} above max level {} holds nodes",
                self.max_level
            );
            ensure!(
                level != self.max_level || level == 0 || count > 0,
                "max level {level} is empty"
            );
        }

        Ok(())
    }

    /// Wraps `id` into a handle, mapping the sentinels to `None`.
    pub(crate) fn node_ref(&self, id: NodeId) -> Option<NodeRef<'_>> {
        if id == HEAD || id == TAIL {
            None
        } else {
            Some(NodeRef::new(self, id))
        }
    }

    /// Descends from the top level, moving right while `precedes` holds for
    /// the next node. `precedes` must be monotone along the list: true for a
    /// prefix of the nodes, false afterwards.
    pub(crate) fn descend<F>(&self, precedes: F) -> Descent
    where
        F: Fn(&Node) -> bool,
    {
        let mut descent = Descent::new();
        let mut cursor = HEAD;
        let mut rank = 0;
        for level in (0..=self.max_level).rev() {
            loop {
                let link = self.arena[cursor].links[level];
                if link.forward == TAIL || !precedes(&self.arena[link.forward]) {
                    break;
                }
                rank += link.span;
                cursor = link.forward;
            }
            descent.preds[level] = cursor;
            descent.ranks[level] = rank;
        }

        descent
    }

    /// Descends to the node at the 1-based `rank`: `preds` are the last nodes
    /// ranked below it on each level.
    pub(crate) fn descend_to_rank(&self, rank: usize) -> Descent {
        let mut descent = Descent::new();
        let mut cursor = HEAD;
        let mut traversed = 0;
        for level in (0..=self.max_level).rev() {
            loop {
                let link = self.arena[cursor].links[level];
                if link.forward == TAIL || traversed + link.span >= rank {
                    break;
                }
                traversed += link.span;
                cursor = link.forward;
            }
            descent.preds[level] = cursor;
            descent.ranks[level] = traversed;
        }

        descent
    }

    /// Finds the node of `key` and the descent ending right before it.
    fn locate(&self, key: &str) -> Option<(NodeId, Descent)> {
        let score = *self.index.get(key)?;
        let descent = self.descend(|node| node.precedes(score, key));
        let id = self.arena[descent.preds[0]].links[0].forward;
        if id != TAIL && self.arena[id].matches(score, key) {
            return Some((id, descent));
        }

        // Tolerant comparison is not transitive: a run of scores chained
        // within SCORE_EPSILON can hide a node from the score descent. Its
        // rank still pins it down.
        let rank = self.scan_rank(key)?;
        if self.config.trace_mutations {
            debug!(key, score, rank, "Locate by base level scan");
        }
        let descent = self.descend_to_rank(rank);
        let id = self.arena[descent.preds[0]].links[0].forward;
        Some((id, descent))
    }

    /// Rank of `key` found by walking the base level.
    fn scan_rank(&self, key: &str) -> Option<usize> {
        let mut rank = 0;
        let mut cursor = self.arena[HEAD].links[0].forward;
        while cursor != TAIL {
            rank += 1;
            if self.arena[cursor].key == key {
                return Some(rank);
            }
            cursor = self.arena[cursor].links[0].forward;
        }

        None
    }

    /// Draws the height of a new node. The top level grows by at most one
    /// per insertion.
    fn next_height(&mut self) -> usize {
        let mut level = self.levels.next_level();
        if level > self.max_level {
            level = self.max_level + 1;
            self.max_level = level;
            if self.config.trace_mutations {
                debug!(max_level = self.max_level, "Grow max level");
            }
        }
        level + 1
    }

    fn pred_spans(&self, descent: &Descent) -> [usize; MAX_LEVEL] {
        std::array::from_fn(|level| self.arena[descent.preds[level]].links[level].span)
    }

    fn pred_keys(&self, descent: &Descent) -> Vec<&str> {
        descent.preds[..=self.max_level]
            .iter()
            .map(|id| self.arena[*id].key.as_str())
            .collect()
    }

    fn link(&mut self, id: NodeId, descent: &Descent, plan: InsertPlan) {
        for (level, span) in plan.node_spans.into_iter().enumerate() {
            let pred = descent.preds[level];
            let forward = self.arena[pred].links[level].forward;
            self.arena[id].links[level] = Link { forward, span };
            self.arena[pred].links[level].forward = id;
        }
        for (level, span) in plan.pred_spans.into_iter().enumerate() {
            self.arena[descent.preds[level]].links[level].span = span;
        }

        let pred = descent.preds[0];
        let succ = self.arena[id].links[0].forward;
        self.arena[id].backward = pred;
        self.arena[succ].backward = id;
    }

    fn unlink(&mut self, id: NodeId, descent: &Descent, pred_spans: &[usize; MAX_LEVEL]) {
        let height = self.arena[id].height();
        for (level, span) in pred_spans.iter().enumerate() {
            let pred = descent.preds[level];
            if level < height {
                let forward = self.arena[id].links[level].forward;
                self.arena[pred].links[level].forward = forward;
            }
            self.arena[pred].links[level].span = *span;
        }

        let succ = self.arena[id].links[0].forward;
        self.arena[succ].backward = descent.preds[0];
    }

    /// Drops empty levels from the top.
    fn shrink_levels(&mut self) {
        let before = self.max_level;
        while self.max_level > 0 && self.arena[HEAD].links[self.max_level].forward == TAIL {
            self.max_level -= 1;
        }
        if self.config.trace_mutations && self.max_level != before {
            debug!(before, after = self.max_level, "Shrink max level");
        }
    }
}

impl Default for SkipList {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SkipList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SkipList")
            .field("len", &self.len())
            .field("max_level", &self.max_level)
            .field("config", &self.config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
    use test_log::test;

    use super::*;
    use crate::ErrorKind;

    fn base_keys(list: &SkipList) -> Vec<String> {
        list.iter().map(|n| n.key().to_string()).collect_vec()
    }

    fn reference_list() -> SkipList {
        let mut list = SkipList::with_seed(1);
        for (key, score) in [
            ("a10", 1.0),
            ("a20", 2.0),
            ("a30", 3.0),
            ("a40", 4.0),
            ("a50", 5.0),
            ("a61", 6.0),
            ("a62", 6.0),
            ("a63", 6.0),
            ("a70", 7.0),
            ("a81", 8.0),
            ("a82", 8.0),
            ("a83", 8.0),
            ("a90", 9.0),
        ] {
            list.insert(key, score).unwrap();
        }
        list
    }

    #[test]
    fn test_empty_list() {
        let list = SkipList::with_seed(0);
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.max_level(), 0);
        assert!(list.first().is_none());
        assert!(list.last().is_none());
        assert!(list.find("a").is_none());
        assert!(list.get_rank("a").is_none());
        assert!(list.find_by_rank(1).is_none());
        assert!(list.find_greater_or_equal(0.0).is_none());
        list.validate().unwrap();
    }

    #[test]
    fn test_descent_records_predecessors() {
        let list = reference_list();
        let descent = list.descend(|node| node.precedes(6.0, "a62"));

        let pred = descent.preds[0];
        assert_eq!(list.arena[pred].key, "a61");
        assert_eq!(descent.ranks[0], 6);
        for level in 0..=list.max_level {
            let pred = &list.arena[descent.preds[level]];
            assert!(descent.preds[level] == HEAD || pred.precedes(6.0, "a62"));
            let next = pred.links[level].forward;
            assert!(next == TAIL || !list.arena[next].precedes(6.0, "a62"));
        }
        for level in list.max_level + 1..MAX_LEVEL {
            assert_eq!(descent.preds[level], HEAD);
            assert_eq!(descent.ranks[level], 0);
        }
    }

    #[test]
    fn test_insert_duplicate_and_rescore() {
        let mut list = reference_list();
        let len = list.len();

        assert_eq!(list.insert("a63", 6.0).unwrap(), InsertOutcome::Unchanged);
        assert_eq!(
            list.insert("a63", 6.0 + crate::SCORE_EPSILON / 2.0).unwrap(),
            InsertOutcome::Unchanged
        );
        assert_eq!(list.get_score("a63"), Some(6.0));

        assert_eq!(
            list.insert("a63", 0.5).unwrap(),
            InsertOutcome::Rescored { previous: 6.0 }
        );
        assert_eq!(list.len(), len);
        assert_eq!(list.get_rank("a63"), Some(1));
        assert_eq!(list.find("a63").unwrap().score(), 0.5);
        list.validate().unwrap();
    }

    #[test]
    fn test_reject_reserved() {
        let mut list = reference_list();
        let before = base_keys(&list);

        for (key, score) in [
            (HEAD_KEY, 1.0),
            (TAIL_KEY, 1.0),
            ("x", f64::INFINITY),
            ("x", f64::NEG_INFINITY),
            ("x", f64::NAN),
        ] {
            let err = list.insert(key, score).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidArgument, "{key} {score}");
        }

        assert_eq!(base_keys(&list), before);
        list.validate().unwrap();
    }

    #[test]
    fn test_remove_and_restore() {
        let mut list = reference_list();
        let keys = base_keys(&list);
        let ranks = keys.iter().map(|k| list.get_rank(k)).collect_vec();

        assert_eq!(list.remove("a82"), Some(8.0));
        assert_eq!(list.remove("a82"), None);
        assert_eq!(list.get_rank("a83"), Some(11));
        list.validate().unwrap();

        list.insert("a82", 8.0).unwrap();
        list.validate().unwrap();
        assert_eq!(base_keys(&list), keys);
        assert_eq!(keys.iter().map(|k| list.get_rank(k)).collect_vec(), ranks);

        for key in ["a10", "a61", "a63", "a64", "a81", "a90", "a11", "a62"] {
            list.remove(key);
            list.validate().unwrap();
        }
        assert_eq!(
            base_keys(&list),
            vec!["a20", "a30", "a40", "a50", "a70", "a82", "a83"]
        );
    }

    #[test]
    fn test_head_spans_cover_inactive_levels() {
        let mut list = SkipList::with_seed(3);
        for i in 0..100 {
            list.insert(&format!("k{i:03}"), i as f64).unwrap();
        }
        for i in (0..100).step_by(3) {
            list.remove(&format!("k{i:03}"));
        }

        for level in list.max_level() + 1..MAX_LEVEL {
            let link = list.arena[HEAD].links[level];
            assert_eq!(link.forward, TAIL);
            assert_eq!(link.span, list.len() + 1);
        }
        list.validate().unwrap();
    }

    #[test]
    fn test_max_level_grows_by_one() {
        let mut list = SkipList::with_seed(11);
        let mut prev_level = list.max_level();
        for i in 0..2000 {
            list.insert(&format!("k{i}"), i as f64).unwrap();
            assert!(list.max_level() <= prev_level + 1);
            prev_level = list.max_level();
        }
        assert!(list.max_level() < MAX_LEVEL);
    }

    #[test]
    fn test_levels_collapse_after_clear() {
        let mut list = SkipList::with_seed(5);
        let keys = (0..500).map(|i| format!("k{i}")).collect_vec();
        for (i, key) in keys.iter().enumerate() {
            list.insert(key, (i % 17) as f64).unwrap();
        }
        assert!(list.max_level() > 0);

        for key in &keys {
            assert!(list.remove(key).is_some());
        }
        assert!(list.is_empty());
        assert_eq!(list.max_level(), 0);
        assert_eq!(list.arena.live(), 0);
        for link in &list.arena[HEAD].links {
            assert_eq!(*link, Link { forward: TAIL, span: 1 });
        }
        list.validate().unwrap();
    }

    #[test]
    fn test_random_workload_keeps_invariants() {
        let mut rng = StdRng::seed_from_u64(2024);
        let mut list = SkipList::with_config(Config {
            seed: Some(2024),
            trace_mutations: true,
        });
        let mut expect: HashMap<String, f64> = HashMap::new();

        for round in 0..3000 {
            let key = format!("k{}", rng.gen_range(0..300));
            match rng.gen_range(0..10) {
                0..=5 => {
                    // Few distinct scores, so ties are common.
                    let score = rng.gen_range(0..20) as f64 / 2.0;
                    list.insert(&key, score).unwrap();
                    expect.insert(key, score);
                }
                _ => {
                    assert_eq!(list.remove(&key), expect.remove(&key));
                }
            }
            if round % 100 == 0 {
                list.validate().unwrap();
            }
        }
        list.validate().unwrap();

        let mut sorted = expect.iter().collect_vec();
        sorted.sort_by(|(k1, s1), (k2, s2)| s1.total_cmp(s2).then_with(|| k1.cmp(k2)));
        let sorted_keys = sorted.iter().map(|(k, _)| k.to_string()).collect_vec();
        assert_eq!(base_keys(&list), sorted_keys);

        for (i, key) in sorted_keys.iter().enumerate() {
            assert_eq!(list.get_rank(key), Some(i + 1));
            assert_eq!(list.find_by_rank(i + 1).unwrap().key(), key);
        }

        let mut shuffled = sorted_keys.clone();
        shuffled.shuffle(&mut rng);
        for key in &shuffled {
            list.remove(key);
        }
        assert!(list.is_empty());
        list.validate().unwrap();
    }

    #[test]
    fn test_scores_chained_within_tolerance() {
        // Neighbours are within SCORE_EPSILON of each other but the ends of
        // the chain are not, so the tolerant order is not transitive.
        for seed in 0..32 {
            let mut list = SkipList::with_seed(seed);
            for (key, score) in [("z", 1.0), ("m", 1.000008), ("a", 1.000016)] {
                list.insert(key, score).unwrap();
            }
            list.validate().unwrap();

            for (i, key) in base_keys(&list).iter().enumerate() {
                assert_eq!(list.get_rank(key), Some(i + 1), "seed:{seed}");
                assert_eq!(list.find(key).unwrap().key(), key, "seed:{seed}");
                assert_eq!(list.descend_to_rank(i + 1).ranks[0], i, "seed:{seed}");
            }
            assert_eq!(list.find("z").unwrap().score(), 1.0);

            assert_eq!(
                list.insert("z", 5.0).unwrap(),
                InsertOutcome::Rescored { previous: 1.0 }
            );
            assert_eq!(list.len(), 3);
            assert_eq!(list.arena.live(), 3);
            assert_eq!(list.last().unwrap().key(), "z");
            list.validate().unwrap();

            for key in ["a", "m", "z"] {
                assert!(list.remove(key).is_some(), "seed:{seed} key:{key}");
                list.validate().unwrap();
            }
            assert!(list.is_empty());
        }
    }

    #[test]
    fn test_validate_detects_broken_span() {
        let mut list = reference_list();
        list.validate().unwrap();

        list.arena[HEAD].links[0].span = 2;
        let err = list.validate().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Internal);
    }
}
