//! Shared chart styling
//!
//! Both report types draw the same three implementations with the same
//! fixed colors and legend labels, so a chart is readable on its own and
//! consistent next to any other.

use plotters::style::RGBColor;

use crate::core::types::Implementation;

// Font sizes
pub const TITLE_FONT_SIZE: u32 = 24;
pub const AXIS_LABEL_FONT_SIZE: u32 = 16;
pub const TICK_LABEL_FONT_SIZE: u32 = 13;
pub const LEGEND_FONT_SIZE: u32 = 14;

// Layout tuning
pub const CHART_MARGIN: u32 = 10;
pub const X_LABEL_AREA_SIZE: u32 = 45;
pub const Y_LABEL_AREA_SIZE: u32 = 70;

// Series drawing
pub const LINE_WIDTH: u32 = 2;
pub const MARKER_SIZE: i32 = 3;
/// Pixel length of the line sample drawn next to each legend label
pub const LEGEND_SAMPLE_LENGTH: i32 = 20;

/// Light-gray baseline for the reference implementation
pub const DENSE_COLOR: RGBColor = RGBColor(0xcc, 0xcc, 0xcc);
/// Solid blue for the open-addressing implementation
pub const OPEN_COLOR: RGBColor = RGBColor(0x00, 0x00, 0xff);
/// Solid red for the close-table implementation
pub const CLOSED_COLOR: RGBColor = RGBColor(0xff, 0x00, 0x00);

/// Fixed curve color for the given implementation
pub fn series_color(implementation: Implementation) -> RGBColor {
    match implementation {
        Implementation::Dense => DENSE_COLOR,
        Implementation::Open => OPEN_COLOR,
        Implementation::Closed => CLOSED_COLOR,
    }
}
