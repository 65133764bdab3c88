//! Axis configuration and tick label formatting.

use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize};

use crate::format::{DEFAULT_PRECISION, format_general};

/// Default tick budget for the horizontal axis.
pub const DEFAULT_X_TICKS: usize = 7;
/// Default tick budget for the vertical axis.
pub const DEFAULT_Y_TICKS: usize = 5;

/// Formatter for axis tick labels.
#[derive(Clone, Default)]
pub enum AxisFormatter {
    /// Compact general format with six significant digits.
    #[default]
    Default,
    /// Custom formatter callback.
    Custom(Arc<dyn Fn(f64) -> String + Send + Sync>),
}

impl AxisFormatter {
    /// Format a value for display.
    pub fn format(&self, value: f64) -> String {
        match self {
            Self::Default => format_general(value, DEFAULT_PRECISION),
            Self::Custom(formatter) => formatter(value),
        }
    }
}

impl std::fmt::Debug for AxisFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Default => write!(f, "AxisFormatter::Default"),
            Self::Custom(_) => write!(f, "AxisFormatter::Custom(..)"),
        }
    }
}

/// Per-axis configuration.
///
/// Serializes as `{ "label": ..., "max_ticks": ... }`. Inside a plot
/// configuration, missing fields fall back to that axis's own defaults.
#[derive(Debug, Clone, Serialize)]
pub struct AxisConfig {
    label: String,
    max_ticks: usize,
    #[serde(skip)]
    formatter: AxisFormatter,
}

impl AxisConfig {
    /// Create an axis configuration with a label and tick budget.
    pub fn new(label: impl Into<String>, max_ticks: usize) -> Self {
        Self {
            label: label.into(),
            max_ticks,
            formatter: AxisFormatter::default(),
        }
    }

    /// Default horizontal axis: "Time", up to 7 ticks.
    pub fn x() -> Self {
        Self::new("Time", DEFAULT_X_TICKS)
    }

    /// Default vertical axis: "Value", up to 5 ticks.
    pub fn y() -> Self {
        Self::new("Value", DEFAULT_Y_TICKS)
    }

    /// Set the axis label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the maximum tick count.
    pub fn with_max_ticks(mut self, max_ticks: usize) -> Self {
        self.max_ticks = max_ticks;
        self
    }

    /// Set the tick label formatter.
    pub fn with_formatter(mut self, formatter: AxisFormatter) -> Self {
        self.formatter = formatter;
        self
    }

    /// Access the axis label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Access the maximum tick count.
    pub fn max_ticks(&self) -> usize {
        self.max_ticks
    }

    /// Access the formatter.
    pub fn formatter(&self) -> &AxisFormatter {
        &self.formatter
    }
}

#[derive(Deserialize)]
struct AxisFields {
    label: Option<String>,
    max_ticks: Option<usize>,
}

impl AxisFields {
    fn over(self, mut base: AxisConfig) -> AxisConfig {
        if let Some(label) = self.label {
            base.label = label;
        }
        if let Some(max_ticks) = self.max_ticks {
            base.max_ticks = max_ticks;
        }
        base
    }
}

/// Read an X axis object, taking missing fields from [`AxisConfig::x`].
pub(crate) fn deserialize_x_axis<'de, D>(deserializer: D) -> Result<AxisConfig, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(AxisFields::deserialize(deserializer)?.over(AxisConfig::x()))
}

/// Read a Y axis object, taking missing fields from [`AxisConfig::y`].
pub(crate) fn deserialize_y_axis<'de, D>(deserializer: D) -> Result<AxisConfig, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(AxisFields::deserialize(deserializer)?.over(AxisConfig::y()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_formatter_is_compact() {
        let axis = AxisConfig::x();
        assert_eq!(axis.formatter().format(2.50), "2.5");
        assert_eq!(axis.formatter().format(-20.0), "-20");
    }

    #[test]
    fn custom_formatter_is_used() {
        let axis = AxisConfig::y()
            .with_formatter(AxisFormatter::Custom(Arc::new(|v: f64| format!("{v:.1} V"))));
        assert_eq!(axis.formatter().format(1.3), "1.3 V");
    }

    #[test]
    fn builders_override_defaults() {
        let axis = AxisConfig::x().with_label("Seconds").with_max_ticks(4);
        assert_eq!(axis.label(), "Seconds");
        assert_eq!(axis.max_ticks(), 4);
    }
}
