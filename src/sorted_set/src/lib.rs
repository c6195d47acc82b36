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

//! A rank-aware sorted set built on a span-augmented skip list.
//!
//! Entries are unique keys carrying a floating point score. They are kept in
//! (score, key) order and can be looked up by key, by score and by 1-based
//! rank in expected logarithmic time, with the same contract as a Redis
//! `ZSET`.
//!
//! Differences from a pointer based skip list:
//! 1. Nodes live in an arena and link to each other through [`NodeId`]
//! indexes, so unlinking a node can never leave a dangling reference.
//! 2. The head and tail sentinels are fixed arena slots and are never handed
//! out: every public lookup maps them to `None`.
//! 3. Span updates for insert and remove are planned by pure functions once
//! the descent has finished, and only then written back.
//!
//! The structure is single threaded. Wrap it in a lock to share it.

mod arena;
mod config;
mod dump;
mod error;
mod handle;
mod level;
mod list;
mod node;
mod score;
mod span;

/// Number of levels a node may participate in.
pub const MAX_LEVEL: usize = 25;

/// Tolerance applied by every score comparison.
pub const SCORE_EPSILON: f64 = 0.00001;

/// Key reserved for the head sentinel.
pub const HEAD_KEY: &str = "-inf-";

/// Key reserved for the tail sentinel.
pub const TAIL_KEY: &str = "+inf+";

pub use config::Config;
pub use dump::{Dump, LevelReport};
pub use error::{Error, ErrorKind, Result};
pub use handle::{Iter, NodeRef};
pub use level::LevelGenerator;
pub use list::{InsertOutcome, SkipList};
