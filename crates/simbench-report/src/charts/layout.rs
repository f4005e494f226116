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

//! Bar positions and axis ranges.

use std::ops::Range;

/// Fraction of a group's pitch covered by its bars.
pub const GROUP_FILL: f64 = 0.8;

/// Grouped bar layout: one group per benchmark, one slot per bar series.
///
/// Groups sit at integer x positions with a pitch of 1.0, so a group's
/// center is its benchmark index and tick labels can be looked up by
/// rounding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroupLayout {
    groups: usize,
    slots: usize,
}

impl GroupLayout {
    /// Creates a layout. A zero slot count is treated as one slot.
    pub fn new(groups: usize, slots: usize) -> Self {
        Self {
            groups,
            slots: slots.max(1),
        }
    }

    /// Number of groups.
    pub fn groups(&self) -> usize {
        self.groups
    }

    /// Number of slots per group.
    pub fn slots(&self) -> usize {
        self.slots
    }

    /// Width of one bar.
    pub fn bar_width(&self) -> f64 {
        GROUP_FILL / self.slots as f64
    }

    /// Horizontal extent `(left, right)` of the bar in `slot` of `group`.
    pub fn bar_span(&self, group: usize, slot: usize) -> (f64, f64) {
        let width = self.bar_width();
        let left = group as f64 - GROUP_FILL / 2.0 + slot as f64 * width;
        (left, left + width)
    }

    /// Center of the bar in `slot` of `group`.
    pub fn bar_center(&self, group: usize, slot: usize) -> f64 {
        let (left, right) = self.bar_span(group, slot);
        (left + right) / 2.0
    }

    /// X axis range covering every group with half a pitch of margin.
    pub fn x_range(&self) -> Range<f64> {
        -0.5..(self.groups.max(1) as f64 - 0.5)
    }

    /// Group index whose center is near `x`, for tick labels.
    pub fn group_at(&self, x: f64) -> Option<usize> {
        let nearest = x.round();
        if nearest < 0.0 || (x - nearest).abs() > 0.3 {
            return None;
        }
        let index = nearest as usize;
        (index < self.groups).then_some(index)
    }
}

/// Log axis range covering every positive value, rounded out to whole
/// decades. Non-positive and non-finite values are ignored; with nothing
/// left the range is `0.1..10`.
pub fn log_range<I>(values: I) -> Range<f64>
where
    I: IntoIterator<Item = f64>,
{
    let (min, max) = values
        .into_iter()
        .filter(|v| *v > 0.0 && v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
    if min > max {
        return 0.1..10.0;
    }

    let low = min.log10().floor();
    let mut high = max.log10().ceil();
    if high <= low {
        high = low + 1.0;
    }
    10f64.powf(low)..10f64.powf(high)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_bars_fill_group() {
        let layout = GroupLayout::new(3, 2);
        let (left, _) = layout.bar_span(1, 0);
        let (_, right) = layout.bar_span(1, 1);
        assert_relative_eq!(left, 0.6, epsilon = 1e-12);
        assert_relative_eq!(right, 1.4, epsilon = 1e-12);
        assert_relative_eq!(layout.bar_width(), 0.4, epsilon = 1e-12);
    }

    #[test]
    fn test_single_slot_centered() {
        let layout = GroupLayout::new(4, 1);
        assert_relative_eq!(layout.bar_center(2, 0), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_slots() {
        let layout = GroupLayout::new(2, 0);
        assert_eq!(layout.slots(), 1);
    }

    #[test]
    fn test_x_range() {
        assert_eq!(GroupLayout::new(5, 2).x_range(), -0.5..4.5);
        assert_eq!(GroupLayout::new(0, 2).x_range(), -0.5..0.5);
    }

    #[test]
    fn test_group_at() {
        let layout = GroupLayout::new(3, 2);
        assert_eq!(layout.group_at(0.0), Some(0));
        assert_eq!(layout.group_at(2.0), Some(2));
        assert_eq!(layout.group_at(1.1), Some(1));
        assert_eq!(layout.group_at(1.5), None);
        assert_eq!(layout.group_at(3.0), None);
        assert_eq!(layout.group_at(-1.0), None);
    }

    #[test]
    fn test_log_range_decades() {
        let range = log_range([0.25, 1.0, 500.0]);
        assert_relative_eq!(range.start, 0.1, epsilon = 1e-12);
        assert_relative_eq!(range.end, 1000.0, epsilon = 1e-12);
    }

    #[test]
    fn test_log_range_single_decade() {
        let range = log_range([1.0]);
        assert_relative_eq!(range.start, 1.0, epsilon = 1e-12);
        assert_relative_eq!(range.end, 10.0, epsilon = 1e-12);
    }

    #[test]
    fn test_log_range_ignores_non_positive() {
        let range = log_range([0.0, -3.0, f64::NAN, 2.0, 3.0]);
        assert_relative_eq!(range.start, 1.0, epsilon = 1e-12);
        assert_relative_eq!(range.end, 10.0, epsilon = 1e-12);

        assert_eq!(log_range(Vec::new()), 0.1..10.0);
    }
}
