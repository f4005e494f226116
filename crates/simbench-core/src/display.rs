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

//! Display-name normalization for benchmark identifiers.

/// Category prefix stripped from benchmark names on charts.
pub const LINEAR_ALGEBRA_PREFIX: &str = "Linear Algebra ";

/// Returns the presentation name of a benchmark.
///
/// Strips [`LINEAR_ALGEBRA_PREFIX`]; other names are returned unchanged.
///
/// ```
/// use simbench_core::display_name;
///
/// assert_eq!(display_name("Linear Algebra Matmul"), "Matmul");
/// assert_eq!(display_name("NTT 64"), "NTT 64");
/// ```
pub fn display_name(name: &str) -> &str {
    display_name_with(name, &[LINEAR_ALGEBRA_PREFIX])
}

/// Returns `name` with the first matching prefix from `prefixes` removed.
///
/// An empty remainder is not a useful label, so a name that consists only of
/// a prefix is returned unchanged.
pub fn display_name_with<'a, S: AsRef<str>>(name: &'a str, prefixes: &[S]) -> &'a str {
    prefixes
        .iter()
        .filter_map(|prefix| name.strip_prefix(prefix.as_ref()))
        .find(|rest| !rest.is_empty())
        .unwrap_or(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_linear_algebra() {
        assert_eq!(display_name("Linear Algebra Matmul"), "Matmul");
        assert_eq!(display_name("Linear Algebra LU Decomposition"), "LU Decomposition");
    }

    #[test]
    fn test_passthrough() {
        assert_eq!(display_name("NTT 64"), "NTT 64");
        assert_eq!(display_name(""), "");
        // Prefix must be at the start
        assert_eq!(display_name("Sparse Linear Algebra Solve"), "Sparse Linear Algebra Solve");
    }

    #[test]
    fn test_prefix_only_name_kept() {
        assert_eq!(display_name("Linear Algebra "), "Linear Algebra ");
    }

    #[test]
    fn test_custom_prefixes() {
        let prefixes = ["Crypto ", "Linear Algebra "];
        assert_eq!(display_name_with("Crypto SHA256", &prefixes), "SHA256");
        assert_eq!(display_name_with("Linear Algebra QR", &prefixes), "QR");
        assert_eq!(display_name_with("QR", &[] as &[&str]), "QR");
    }
}
