//! Memory comparison chart (log/log)

use plotters::prelude::*;
use std::path::Path;

use crate::core::constants::{chart as chart_constants, report_kinds};
use crate::core::error::Result;
use crate::core::types::{Implementation, ReportKind, TabularDataset};
use crate::render::{render_err, style};

/// Render the memory comparison chart to a PNG file.
///
/// One figure, log-scaled on both axes, one curve per implementation. The
/// report kind selects title and y-axis text; the data itself is
/// structurally identical for both framings. Points that are not drawable
/// on log axes (zero or negative on either coordinate) are skipped, and an
/// empty dataset degrades to an axes-only image.
pub fn render_memory_chart(
    dataset: &TabularDataset,
    kind: ReportKind,
    output: &Path,
    dimensions: (u32, u32),
) -> Result<()> {
    let curves: Vec<(Implementation, Vec<(f64, f64)>)> = Implementation::ALL
        .iter()
        .map(|implementation| {
            let points = dataset
                .series_points(*implementation)
                .into_iter()
                .filter(|(entries, value)| *entries > 0.0 && *value > 0.0)
                .collect();
            (*implementation, points)
        })
        .collect();

    let (x_min, x_max) = axis_bounds(curves.iter().flat_map(|(_, p)| p.iter().map(|(x, _)| *x)));
    let (y_min, y_max) = axis_bounds(curves.iter().flat_map(|(_, p)| p.iter().map(|(_, y)| *y)));

    let root = BitMapBackend::new(output, dimensions).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(kind.title(), ("sans-serif", style::TITLE_FONT_SIZE))
        .margin(style::CHART_MARGIN)
        .x_label_area_size(style::X_LABEL_AREA_SIZE)
        .y_label_area_size(style::Y_LABEL_AREA_SIZE)
        .build_cartesian_2d((x_min..x_max).log_scale(), (y_min..y_max).log_scale())
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .x_desc(report_kinds::X_LABEL)
        .y_desc(kind.y_label())
        .label_style(("sans-serif", style::TICK_LABEL_FONT_SIZE))
        .axis_desc_style(("sans-serif", style::AXIS_LABEL_FONT_SIZE))
        .draw()
        .map_err(render_err)?;

    for (implementation, points) in curves {
        if points.is_empty() {
            continue;
        }

        let color = style::series_color(implementation);
        chart
            .draw_series(LineSeries::new(points, color.stroke_width(style::LINE_WIDTH)))
            .map_err(render_err)?
            .label(implementation.label())
            .legend(move |(x, y)| {
                PathElement::new(
                    vec![(x, y), (x + style::LEGEND_SAMPLE_LENGTH, y)],
                    color.stroke_width(style::LINE_WIDTH),
                )
            });
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font(("sans-serif", style::LEGEND_FONT_SIZE))
        .draw()
        .map_err(render_err)?;

    root.present().map_err(render_err)?;
    Ok(())
}

/// Log-axis bounds over already-positive values.
///
/// Falls back to a default decade when nothing is drawable, and pads a
/// single distinct value into a non-degenerate range.
fn axis_bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = 0.0_f64;
    for value in values {
        min = min.min(value);
        max = max.max(value);
    }

    if !min.is_finite() || max <= 0.0 {
        return (1.0, chart_constants::FALLBACK_AXIS_MAX);
    }
    if min == max {
        return (min / 2.0, max * 2.0);
    }
    (min, max)
}
