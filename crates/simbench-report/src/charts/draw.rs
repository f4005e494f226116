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

//! Drawing [`BarChart`]s with plotters.

use super::figure::BarChart;
use plotters::coord::Shift;
use plotters::prelude::*;

const TITLE_FONT_SIZE: u32 = 28;
const AXIS_LABEL_FONT_SIZE: u32 = 18;
const TICK_LABEL_FONT_SIZE: u32 = 14;
const LEGEND_FONT_SIZE: u32 = 14;

// Room for vertical benchmark names under the x axis.
const X_LABEL_AREA_SIZE: u32 = 180;
const Y_LABEL_AREA_SIZE: u32 = 90;

const ERROR_BAR_WIDTH: u32 = 6;

/// Draws `chart` onto `root` and presents it.
pub fn draw_chart<DB>(
    root: &DrawingArea<DB, Shift>,
    chart: &BarChart,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>>
where
    DB: DrawingBackend,
{
    root.fill(&WHITE)?;

    let layout = chart.layout();
    let x_range = layout.x_range();
    let y_range = chart.y_range();
    let floor = y_range.start;

    let mut ctx = ChartBuilder::on(root)
        .caption(&chart.title, ("sans-serif", TITLE_FONT_SIZE))
        .margin(20)
        .x_label_area_size(X_LABEL_AREA_SIZE)
        .y_label_area_size(Y_LABEL_AREA_SIZE)
        .build_cartesian_2d(x_range.clone(), y_range.log_scale())?;

    let tick_label = |x: &f64| {
        layout
            .group_at(*x)
            .and_then(|i| chart.categories.get(i))
            .cloned()
            .unwrap_or_default()
    };

    ctx.configure_mesh()
        .disable_x_mesh()
        .x_labels(layout.groups().max(1))
        .x_label_formatter(&tick_label)
        .x_label_style(
            ("sans-serif", TICK_LABEL_FONT_SIZE)
                .into_font()
                .transform(FontTransform::Rotate90),
        )
        .y_label_style(("sans-serif", TICK_LABEL_FONT_SIZE))
        .y_desc(chart.y_desc.as_str())
        .axis_desc_style(("sans-serif", AXIS_LABEL_FONT_SIZE))
        .draw()?;

    for series in &chart.series {
        let (color, filled, slot) = (series.color, series.filled, series.slot);

        ctx.draw_series(series.bars.iter().enumerate().filter_map(|(group, bar)| {
            let (left, right) = layout.bar_span(group, slot);
            let low = bar.low.unwrap_or(floor).max(floor);
            (bar.high > low).then(|| {
                Rectangle::new([(left, low), (right, bar.high)], bar_style(color, filled))
            })
        }))?
        .label(series.label.as_str())
        .legend(move |(x, y)| {
            Rectangle::new([(x, y - 5), (x + 20, y + 5)], bar_style(color, filled))
        });
    }

    for series in &chart.series {
        let slot = series.slot;
        ctx.draw_series(series.bars.iter().enumerate().filter_map(|(group, bar)| {
            let error = bar.error.filter(|e| *e > 0.0)?;
            Some(ErrorBar::new_vertical(
                layout.bar_center(group, slot),
                (bar.high - error).max(floor),
                bar.high,
                bar.high + error,
                BLACK.stroke_width(1),
                ERROR_BAR_WIDTH,
            ))
        }))?;
    }

    if let Some(reference) = chart.reference {
        ctx.draw_series(LineSeries::new(
            [(x_range.start, reference), (x_range.end, reference)],
            BLACK.mix(0.6).stroke_width(1),
        ))?;
    }

    ctx.configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font(("sans-serif", LEGEND_FONT_SIZE))
        .draw()?;

    root.present()?;
    Ok(())
}

fn bar_style((r, g, b): (u8, u8, u8), filled: bool) -> ShapeStyle {
    let color = RGBColor(r, g, b);
    if filled {
        color.filled()
    } else {
        color.stroke_width(2)
    }
}
