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

//! Span planning for mutations.
//!
//! A descent toward a target records, for every level, the last node strictly
//! before the target (its predecessor) and that predecessor's rank. The
//! functions here turn those arrays into the spans to write back, without
//! touching the list. Levels above the current top level have the head as
//! predecessor at rank 0, so the head keeps a correct span there too.

use crate::MAX_LEVEL;

/// Spans to write back after inserting a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct InsertPlan {
    /// Spans of the new node, one per level it participates in.
    pub node_spans: Vec<usize>,
    /// New spans of the predecessors, indexed by level.
    pub pred_spans: [usize; MAX_LEVEL],
}

/// Plans the spans for a node of `height` levels inserted right after the
/// base level predecessor.
///
/// The new node takes rank `ranks[0] + 1`. Where the node is linked in, the
/// predecessor's old span is split between the predecessor and the node.
/// Where it is not, the predecessor's link now passes over one more node.
pub(crate) fn plan_insert(
    pred_spans: &[usize; MAX_LEVEL],
    ranks: &[usize; MAX_LEVEL],
    height: usize,
) -> InsertPlan {
    debug_assert!(height >= 1 && height <= MAX_LEVEL);

    let rank = ranks[0] + 1;
    let mut node_spans = Vec::with_capacity(height);
    let mut new_pred_spans = [0; MAX_LEVEL];
    for level in 0..MAX_LEVEL {
        if level < height {
            // The old forward target sits at rank `ranks[level] +
            // pred_spans[level]` and moves one step further.
            node_spans.push(ranks[level] + pred_spans[level] + 1 - rank);
            new_pred_spans[level] = rank - ranks[level];
        } else {
            new_pred_spans[level] = pred_spans[level] + 1;
        }
    }

    InsertPlan {
        node_spans,
        pred_spans: new_pred_spans,
    }
}

/// Plans the new predecessor spans after unlinking a node whose own spans
/// are `node_spans`.
pub(crate) fn plan_remove(
    pred_spans: &[usize; MAX_LEVEL],
    node_spans: &[usize],
) -> [usize; MAX_LEVEL] {
    let mut new_pred_spans = [0; MAX_LEVEL];
    for level in 0..MAX_LEVEL {
        new_pred_spans[level] = match node_spans.get(level) {
            Some(node_span) => pred_spans[level] + node_span - 1,
            None => pred_spans[level] - 1,
        };
    }
    new_pred_spans
}
