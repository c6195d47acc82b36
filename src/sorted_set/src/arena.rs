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

//! Owner of every node, sentinels included.

use std::{
    mem,
    ops::{Index, IndexMut},
};

use crate::node::{Node, NodeId, HEAD, TAIL};

/// Stores nodes in a vector and hands out their indexes. Freed slots are
/// reused by later allocations. Slots `0` and `1` hold the sentinels and are
/// never freed.
#[derive(Debug, Clone)]
pub(crate) struct Arena {
    slots: Vec<Node>,
    free: Vec<NodeId>,
}

impl Arena {
    pub fn new() -> Self {
        Self {
            slots: vec![Node::head(), Node::tail()],
            free: Vec::new(),
        }
    }

    pub fn alloc(&mut self, node: Node) -> NodeId {
        match self.free.pop() {
            Some(id) => {
                self.slots[id.index()] = node;
                id
            }
            None => {
                let id = NodeId(self.slots.len());
                self.slots.push(node);
                id
            }
        }
    }

    /// Takes the node out of its slot and makes the slot reusable.
    pub fn free(&mut self, id: NodeId) -> Node {
        debug_assert!(id != HEAD && id != TAIL, "sentinels are never freed");

        self.free.push(id);
        mem::replace(&mut self.slots[id.index()], Node::vacant())
    }

    /// Number of slots holding a live node, sentinels excluded.
    pub fn live(&self) -> usize {
        self.slots.len() - self.free.len() - 2
    }
}

impl Index<NodeId> for Arena {
    type Output = Node;

    #[inline]
    fn index(&self, id: NodeId) -> &Node {
        &self.slots[id.index()]
    }
}

impl IndexMut<NodeId> for Arena {
    #[inline]
    fn index_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.slots[id.index()]
    }
}
