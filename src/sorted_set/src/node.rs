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

use crate::{score, HEAD_KEY, MAX_LEVEL, TAIL_KEY};

/// Index of a node inside the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(pub(crate) usize);

impl NodeId {
    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0
    }
}

/// Slot of the head sentinel, fixed at construction.
pub(crate) const HEAD: NodeId = NodeId(0);
/// Slot of the tail sentinel, fixed at construction.
pub(crate) const TAIL: NodeId = NodeId(1);

/// Forward link of a node at one level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Link {
    pub forward: NodeId,
    /// Base level steps from the owner to `forward`.
    pub span: usize,
}

#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub key: String,
    pub score: f64,
    /// One link per level the node participates in, `links[0]` is the base
    /// level.
    pub links: Vec<Link>,
    /// Predecessor at the base level.
    pub backward: NodeId,
}

impl Node {
    /// Creates an unlinked node participating in `height` levels.
    pub fn new(key: String, score: f64, height: usize) -> Self {
        debug_assert!(height >= 1 && height <= MAX_LEVEL);

        Self {
            key,
            score,
            links: vec![
                Link {
                    forward: TAIL,
                    span: 0,
                };
                height
            ],
            backward: HEAD,
        }
    }

    /// The head sentinel links to the tail at every level, one step away.
    pub fn head() -> Self {
        Self {
            key: HEAD_KEY.to_string(),
            score: f64::NEG_INFINITY,
            links: vec![
                Link {
                    forward: TAIL,
                    span: 1,
                };
                MAX_LEVEL
            ],
            backward: HEAD,
        }
    }

    /// The tail sentinel has no forward links.
    pub fn tail() -> Self {
        Self {
            key: TAIL_KEY.to_string(),
            score: f64::INFINITY,
            links: Vec::new(),
            backward: HEAD,
        }
    }

    /// Placeholder left in a freed slot.
    pub fn vacant() -> Self {
        Self {
            key: String::new(),
            score: 0.0,
            links: Vec::new(),
            backward: HEAD,
        }
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.links.len()
    }

    /// Whether this node is strictly before `(score, key)` in the total order.
    #[inline]
    pub fn precedes(&self, score: f64, key: &str) -> bool {
        score::compare(self.score, &self.key, score, key).is_lt()
    }

    /// Whether this node holds exactly `(score, key)`.
    #[inline]
    pub fn matches(&self, score: f64, key: &str) -> bool {
        self.key == key && score::approx_eq(self.score, score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_is_slot_index() {
        for slot in [0, 1, 2, u32::MAX as usize + 1] {
            assert_eq!(NodeId(slot).index(), slot);
        }
    }

    #[test]
    fn test_node_new() {
        let node = Node::new("a".to_string(), 1.0, 3);
        assert_eq!(node.height(), 3);
        assert!(node.links.iter().all(|l| l.forward == TAIL));
        assert_eq!(node.backward, HEAD);
    }

    #[test]
    fn test_sentinels() {
        let head = Node::head();
        assert_eq!(head.height(), MAX_LEVEL);
        assert!(head
            .links
            .iter()
            .all(|l| *l == Link { forward: TAIL, span: 1 }));
        assert_eq!(Node::tail().height(), 0);
    }

    #[test]
    fn test_precedes() {
        let node = Node::new("D2".to_string(), 6.0, 1);
        assert!(node.precedes(6.0, "D3"));
        assert!(!node.precedes(6.0, "D2"));
        assert!(!node.precedes(6.0, "D1"));
        assert!(node.precedes(7.0, "A"));
        assert!(!node.precedes(5.0, "Z"));

        assert!(node.matches(6.0, "D2"));
        assert!(!node.matches(6.0, "D1"));
    }
}
