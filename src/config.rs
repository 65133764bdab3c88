//! Serializable plot configuration.
//!
//! Hosts can keep plot setup in a JSON file and load it with
//! [`PlotConfig::from_json_str`]. Missing fields fall back to the defaults.

use serde::{Deserialize, Serialize};

use crate::axis::AxisConfig;
use crate::error::Result;
use crate::render::Color;
use crate::trace::{Palette, TraceStyle};
use crate::view::{Range, Viewport};

/// Plot appearance and behaviour.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    /// Title drawn above the axes box.
    pub title: String,
    /// Horizontal axis.
    #[serde(deserialize_with = "crate::axis::deserialize_x_axis")]
    pub x_axis: AxisConfig,
    /// Vertical axis.
    #[serde(deserialize_with = "crate::axis::deserialize_y_axis")]
    pub y_axis: AxisConfig,
    /// Draw grid lines at each tick.
    pub grid: bool,
    /// Fit both axes to the data before each render pass.
    pub autoscale: bool,
    /// Axis ranges used until data or the host changes them.
    pub initial_view: Viewport,
    /// Axes box fill.
    pub background: Color,
    /// Grid line and axes box stroke color.
    pub grid_color: Color,
    /// Title, axis label, and tick label color.
    pub text_color: Color,
    /// Trace colors by position.
    pub palette: Palette,
    /// Trace line width in pixels.
    pub line_width: f32,
    /// Trace marker radius in pixels.
    pub marker_radius: f32,
}

impl PlotConfig {
    /// Parse a configuration from JSON.
    pub fn from_json_str(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Serialize the configuration as pretty JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Style for the trace at `index`.
    pub fn trace_style(&self, index: usize) -> TraceStyle {
        TraceStyle {
            color: self.palette.color_for(index),
            line_width: self.line_width,
            marker_radius: self.marker_radius,
            ..TraceStyle::default()
        }
    }
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            title: "Plot".to_string(),
            x_axis: AxisConfig::x(),
            y_axis: AxisConfig::y(),
            grid: true,
            autoscale: true,
            initial_view: Viewport::new(Range::new(0.0, 100.0), Range::new(-1.0, 1.0)),
            background: Color::rgb8(0x18, 0x18, 0x18),
            grid_color: Color::rgb8(0x50, 0x50, 0x50),
            text_color: Color::WHITE,
            palette: Palette::default(),
            line_width: 1.0,
            marker_radius: 3.0,
        }
    }
}
