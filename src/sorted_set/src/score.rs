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

//! Score comparison with a fixed tolerance.
//!
//! Two scores closer than [SCORE_EPSILON] are the same score, and the key then
//! decides the order.

use std::cmp::Ordering;

use crate::SCORE_EPSILON;

#[inline]
pub(crate) fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= SCORE_EPSILON
}

#[inline]
pub(crate) fn less_than(a: f64, b: f64) -> bool {
    a < b && !approx_eq(a, b)
}

#[inline]
pub(crate) fn greater_than(a: f64, b: f64) -> bool {
    a > b && !approx_eq(a, b)
}

/// Orders `(score, key)` pairs: by score first, then by key.
pub(crate) fn compare(score: f64, key: &str, other_score: f64, other_key: &str) -> Ordering {
    if less_than(score, other_score) {
        Ordering::Less
    } else if greater_than(score, other_score) {
        Ordering::Greater
    } else {
        key.cmp(other_key)
    }
}
