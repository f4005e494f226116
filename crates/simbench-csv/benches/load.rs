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

//! Benchmarks for loading result tables and deriving normalized series.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use simbench_core::{Backend, SeriesKind, Stage};
use simbench_csv::load;
use simbench_test::fixtures::ResultCsvBuilder;

fn large_inputs(benchmarks: usize) -> (String, String, String) {
    let mut compilation = ResultCsvBuilder::compilation();
    let mut simulation = ResultCsvBuilder::simulation();
    let mut lowered = ResultCsvBuilder::lowered();
    for i in 0..benchmarks {
        let name = format!("bench-{}", i);
        let t = 1.0 + i as f64 * 0.01;
        compilation = compilation
            .measurement(&name, Stage::IcarusVerilog, t, 0.01)
            .measurement(&name, Stage::Verilog, t * 8.0, 0.1);
        simulation = simulation
            .measurement(&name, Stage::Interpreter, t, 0.01)
            .measurement(&name, Stage::IcarusVerilog, t * 4.0, 0.02)
            .measurement(&name, Stage::Verilog, t / 4.0, 0.005);
        lowered = lowered.lowered_measurement(&name, t * 0.75, 0.01);
    }
    (compilation.build(), simulation.build(), lowered.build())
}

fn bench_load(c: &mut Criterion) {
    let (compilation, simulation, lowered) = large_inputs(500);

    c.bench_function("load_500_benchmarks", |b| {
        b.iter(|| load(black_box(&compilation), black_box(&simulation), black_box(&lowered)))
    });

    let tables = load(&compilation, &simulation, &lowered).unwrap();
    c.bench_function("normalize_500_benchmarks", |b| {
        b.iter(|| {
            let order = tables.order();
            let baseline = tables.series(SeriesKind::BASELINE, order).unwrap();
            let icarus = tables
                .series(SeriesKind::simulation(Backend::Icarus), order)
                .unwrap();
            icarus.normalize_against(&baseline).unwrap().summarize()
        })
    });
}

criterion_group!(benches, bench_load);
criterion_main!(benches);
