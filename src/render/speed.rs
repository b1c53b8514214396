//! Per-scenario throughput charts

use plotters::prelude::*;
use std::path::{Path, PathBuf};

use crate::core::constants::{chart as chart_constants, speed};
use crate::core::error::Result;
use crate::core::types::{Implementation, ScenarioSeries, SpeedReport};
use crate::render::{render_err, style};

/// Output file name for one scenario's chart
pub fn scenario_file_name(scenario: &str) -> String {
    format!("{scenario}{}", speed::FILE_SUFFIX)
}

/// Y-axis upper bound for one scenario: fixed headroom above the maximum
/// throughput observed across its three series.
pub fn y_axis_upper_bound(scenario: &ScenarioSeries) -> f64 {
    let max_throughput = scenario.max_throughput();
    if max_throughput > 0.0 {
        max_throughput * speed::HEADROOM_FACTOR
    } else {
        chart_constants::FALLBACK_AXIS_MAX
    }
}

/// Render one throughput chart per scenario, in sorted scenario order.
///
/// Each chart is fully drawn and written before the next one's construction
/// begins. Scenario names are unique within a report, so no file is
/// overwritten. Returns the written paths in rendering order.
pub fn render_speed_charts(
    report: &SpeedReport,
    out_dir: &Path,
    dimensions: (u32, u32),
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(report.len());

    for (name, scenario) in report.scenarios() {
        let output = out_dir.join(scenario_file_name(name));
        render_scenario_chart(name, scenario, &output, dimensions)?;
        written.push(output);
    }

    Ok(written)
}

/// Render one scenario's figure: x = operation count, y = derived
/// throughput, three curves with point markers.
fn render_scenario_chart(
    name: &str,
    scenario: &ScenarioSeries,
    output: &Path,
    dimensions: (u32, u32),
) -> Result<()> {
    let curves: Vec<(Implementation, Vec<(f64, f64)>)> = Implementation::ALL
        .iter()
        .map(|implementation| {
            (
                *implementation,
                scenario.series(*implementation).throughput_points(),
            )
        })
        .collect();

    let x_max = curves
        .iter()
        .flat_map(|(_, points)| points.iter().map(|(operations, _)| *operations))
        .fold(0.0_f64, f64::max)
        .max(1.0);
    let y_max = y_axis_upper_bound(scenario);

    let root = BitMapBackend::new(output, dimensions).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(name, ("sans-serif", style::TITLE_FONT_SIZE))
        .margin(style::CHART_MARGIN)
        .x_label_area_size(style::X_LABEL_AREA_SIZE)
        .y_label_area_size(style::Y_LABEL_AREA_SIZE)
        .build_cartesian_2d(0.0..x_max, 0.0..y_max)
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .x_desc(speed::X_LABEL)
        .y_desc(speed::Y_LABEL)
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
            .draw_series(LineSeries::new(
                points.clone(),
                color.stroke_width(style::LINE_WIDTH),
            ))
            .map_err(render_err)?
            .label(implementation.label())
            .legend(move |(x, y)| {
                PathElement::new(
                    vec![(x, y), (x + style::LEGEND_SAMPLE_LENGTH, y)],
                    color.stroke_width(style::LINE_WIDTH),
                )
            });

        chart
            .draw_series(PointSeries::of_element(
                points,
                style::MARKER_SIZE,
                color.filled(),
                &|coord, size, point_style| {
                    EmptyElement::at(coord) + Circle::new((0, 0), size, point_style)
                },
            ))
            .map_err(render_err)?;
    }

    // The fixed headroom leaves the top band of the plot area curve-free
    // for the legend.
    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font(("sans-serif", style::LEGEND_FONT_SIZE))
        .draw()
        .map_err(render_err)?;

    root.present().map_err(render_err)?;
    Ok(())
}
