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

//! Property tests for series alignment and ratio statistics.

use proptest::prelude::*;
use simbench_core::{
    geometric_mean, normalize, summarize, Backend, ResultTablesBuilder, SeriesKind,
    StageMeasurement,
};

fn positive_values() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(1e-6f64..1e6, 1..40)
}

proptest! {
    #[test]
    fn self_ratio_is_identity(values in positive_values()) {
        let ratios = normalize(&values, &values).unwrap();
        prop_assert!(ratios.iter().all(|&r| r == 1.0));
    }

    #[test]
    fn geometric_mean_is_bounded(values in positive_values()) {
        let gm = geometric_mean(&values).unwrap();
        let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = values.iter().cloned().fold(0.0, f64::max);
        prop_assert!(gm >= min * (1.0 - 1e-9));
        prop_assert!(gm <= max * (1.0 + 1e-9));
    }

    #[test]
    fn summary_max_matches_input(values in positive_values()) {
        let summary = summarize(&values).unwrap();
        prop_assert_eq!(summary.max, values[summary.max_index]);
        prop_assert!(values.iter().all(|&v| v <= summary.max));
        prop_assert_eq!(summary.count, values.len());
    }

    #[test]
    fn derived_series_align_with_order(
        means in prop::collection::vec((1e-3f64..1e3, 1e-3f64..1e3), 1..25)
    ) {
        let mut builder = ResultTablesBuilder::new();
        for (i, (interp, sim)) in means.iter().enumerate() {
            let name = format!("bench-{}", i);
            let icarus_compilation = SeriesKind::compilation(Backend::Icarus);
            let icarus_simulation = SeriesKind::simulation(Backend::Icarus);
            builder.insert(icarus_compilation, &name, StageMeasurement::new(1.0, 0.0));
            builder.insert(SeriesKind::BASELINE, &name, StageMeasurement::new(*interp, 0.0));
            builder.insert(icarus_simulation, &name, StageMeasurement::new(*sim, 0.0));
        }
        let tables = builder.build();
        let order = tables.order();
        let baseline = tables.series(SeriesKind::BASELINE, order).unwrap();
        let icarus = tables.series(SeriesKind::simulation(Backend::Icarus), order).unwrap();
        let ratios = icarus.normalize_against(&baseline).unwrap();

        prop_assert_eq!(order.len(), means.len());
        prop_assert_eq!(baseline.len(), order.len());
        prop_assert_eq!(icarus.len(), order.len());
        prop_assert_eq!(ratios.len(), order.len());
        for (i, (interp, sim)) in means.iter().enumerate() {
            prop_assert_eq!(ratios.ratios()[i], sim / interp);
        }
    }
}
