// Dweve SimBench - Simulator Benchmark Visualization
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Fixed benchmark ordering shared by every derived series.

use std::collections::HashSet;

/// Benchmark names in first-occurrence order.
///
/// Every series derived from the same order is index-aligned with it, so
/// parallel arrays of means, deviations and ratios can be zipped safely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BenchmarkOrder {
    names: Vec<String>,
}

impl BenchmarkOrder {
    /// Builds an order from names, dropping repeats after the first.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let names = names
            .into_iter()
            .map(Into::into)
            .filter(|name: &String| seen.insert(name.clone()))
            .collect();
        Self { names }
    }

    /// Ordered benchmark names.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Iterates names in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Number of benchmarks.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the order is empty.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Whether `name` is part of the order.
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Position of `name` in the order.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    /// Splits into (kept, excluded), preserving relative order in both.
    ///
    /// Excluded names that are not part of the order are ignored.
    ///
    /// ```
    /// use simbench_core::BenchmarkOrder;
    ///
    /// let order = BenchmarkOrder::new(["FFT", "Outlier", "NTT 64"]);
    /// let (kept, excluded) = order.partition(&["Outlier"]);
    /// assert_eq!(kept.names(), ["FFT", "NTT 64"]);
    /// assert_eq!(excluded.names(), ["Outlier"]);
    /// ```
    pub fn partition<S: AsRef<str>>(&self, excluded: &[S]) -> (BenchmarkOrder, BenchmarkOrder) {
        let (out, kept): (Vec<String>, Vec<String>) = self
            .names
            .iter()
            .cloned()
            .partition(|name| excluded.iter().any(|e| e.as_ref() == name));
        (BenchmarkOrder { names: kept }, BenchmarkOrder { names: out })
    }

    /// Order without the `excluded` names.
    pub fn excluding<S: AsRef<str>>(&self, excluded: &[S]) -> BenchmarkOrder {
        self.partition(excluded).0
    }
}

impl<'a> IntoIterator for &'a BenchmarkOrder {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_occurrence_wins() {
        let order = BenchmarkOrder::new(["b", "a", "b", "c", "a"]);
        assert_eq!(order.names(), ["b", "a", "c"]);
        assert_eq!(order.position("c"), Some(2));
    }

    #[test]
    fn test_excluding() {
        let order = BenchmarkOrder::new(["a", "b", "c"]);
        let kept = order.excluding(&["b", "zzz"]);
        assert_eq!(kept.names(), ["a", "c"]);
        assert!(!kept.contains("b"));
        assert_eq!(order.len(), 3);
    }

    #[test]
    fn test_empty() {
        let order = BenchmarkOrder::default();
        assert!(order.is_empty());
        let (kept, excluded) = order.partition(&["a"]);
        assert!(kept.is_empty() && excluded.is_empty());
    }
}
