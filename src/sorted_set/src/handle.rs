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

//! Read-only views into a [SkipList].

use std::{fmt, iter::FusedIterator};

use crate::{
    list::SkipList,
    node::{Node, NodeId, HEAD, TAIL},
    score,
};

/// Handle to a node of a [SkipList].
///
/// Never refers to a sentinel: moving past either end yields `None`.
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    list: &'a SkipList,
    id: NodeId,
}

impl<'a> NodeRef<'a> {
    pub(crate) fn new(list: &'a SkipList, id: NodeId) -> Self {
        debug_assert!(id != HEAD && id != TAIL);

        Self { list, id }
    }

    fn node(&self) -> &'a Node {
        &self.list.arena[self.id]
    }

    pub fn key(&self) -> &'a str {
        &self.node().key
    }

    pub fn score(&self) -> f64 {
        self.node().score
    }

    /// Successor at the base level.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&self) -> Option<NodeRef<'a>> {
        self.list.node_ref(self.node().links[0].forward)
    }

    /// Predecessor at the base level.
    pub fn prev(&self) -> Option<NodeRef<'a>> {
        self.list.node_ref(self.node().backward)
    }

    /// Number of levels the node participates in.
    pub fn height(&self) -> usize {
        self.node().height()
    }

    /// Base level steps from this node to its successor at `level`.
    pub fn span(&self, level: usize) -> Option<usize> {
        self.node().links.get(level).map(|link| link.span)
    }
}

impl PartialEq for NodeRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.list, other.list) && self.id == other.id
    }
}

impl fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("key", &self.key())
            .field("score", &self.score())
            .field("height", &self.height())
            .finish()
    }
}

/// Iterator over a run of consecutive nodes in (score, key) order.
pub struct Iter<'a> {
    list: &'a SkipList,
    front: NodeId,
    back: NodeId,
    remaining: usize,
}

impl<'a> Iter<'a> {
    fn empty(list: &'a SkipList) -> Self {
        Self {
            list,
            front: TAIL,
            back: HEAD,
            remaining: 0,
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = NodeRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.front;
        self.front = self.list.arena[id].links[0].forward;
        self.remaining -= 1;
        Some(NodeRef::new(self.list, id))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.back;
        self.back = self.list.arena[id].backward;
        self.remaining -= 1;
        Some(NodeRef::new(self.list, id))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

impl SkipList {
    /// Iterates over all nodes in (score, key) order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            list: self,
            front: self.arena[HEAD].links[0].forward,
            back: self.arena[TAIL].backward,
            remaining: self.len(),
        }
    }

    /// Iterates over the nodes ranked `start..=end` (1-based). The bounds are
    /// clamped to `[1, len]`.
    pub fn range_by_rank(&self, start: usize, end: usize) -> Iter<'_> {
        let start = start.max(1);
        let end = end.min(self.len());
        if start > end {
            return Iter::empty(self);
        }

        match (self.find_by_rank(start), self.find_by_rank(end)) {
            (Some(front), Some(back)) => Iter {
                list: self,
                front: front.id,
                back: back.id,
                remaining: end - start + 1,
            },
            _ => Iter::empty(self),
        }
    }

    /// Iterates over the nodes with `min <= score <= max`, both bounds
    /// compared within [SCORE_EPSILON](crate::SCORE_EPSILON). A NaN bound
    /// gives an empty range.
    pub fn range_by_score(&self, min: f64, max: f64) -> Iter<'_> {
        if min.is_nan() || max.is_nan() {
            return Iter::empty(self);
        }

        // The node after the last one below `min` opens the range, the last
        // one not above `max` closes it.
        let lower = self.descend(|node| score::less_than(node.score, min));
        let upper = self.descend(|node| !score::greater_than(node.score, max));
        let first_rank = lower.ranks[0] + 1;
        let last_rank = upper.ranks[0];
        if last_rank < first_rank {
            return Iter::empty(self);
        }

        Iter {
            list: self,
            front: self.arena[lower.preds[0]].links[0].forward,
            back: upper.preds[0],
            remaining: last_rank - first_rank + 1,
        }
    }
}
