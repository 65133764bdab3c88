//! Error types for the plotting core.
//!
//! Every error here is local and synchronous: the caller has to correct its
//! inputs before trying again. Buffer overflow and reads from an empty buffer
//! are not errors and never show up here.

use thiserror::Error;

/// Result type alias for plotting operations.
pub type Result<T> = std::result::Result<T, PlotError>;

/// Plot axis identifier used in error reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Horizontal axis.
    X,
    /// Vertical axis.
    Y,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::X => write!(f, "x"),
            Self::Y => write!(f, "y"),
        }
    }
}

/// Numeric domain violations.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DomainError {
    /// A non-positive value reached the base-10 logarithm of the nice-number step.
    #[error("nice number requires a positive range, got {value}")]
    NonPositiveRange { value: f64 },

    /// Tick scaling over a range whose bounds are equal.
    #[error("zero-width range at {value}")]
    ZeroSpan { value: f64 },

    /// Fewer than two ticks cannot define a step.
    #[error("at least 2 ticks are required, got {count}")]
    TooFewTicks { count: usize },

    /// Pixel mapping over an axis whose bounds are equal.
    #[error("degenerate {axis} axis at {value}")]
    DegenerateAxis { axis: Axis, value: f64 },

    /// The nice number or tick step near `value` over- or underflows `f64`.
    #[error("no representable nice number near {value}")]
    Unrepresentable { value: f64 },

    /// NaN or infinite range bound.
    #[error("non-finite range bound {value}")]
    NonFinite { value: f64 },
}

/// Errors produced by the plotting core.
#[derive(Debug, Error)]
pub enum PlotError {
    /// Range maximum is below its minimum.
    #[error("invalid range: max {max} is below min {min}")]
    InvalidRange { min: f64, max: f64 },

    /// Numeric domain violation.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// Number or length of data sources does not match the traces.
    #[error("shape mismatch in {what}: expected {expected}, got {actual}")]
    ShapeMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A sample was pushed into a source that is not a scrolling buffer.
    #[error("source {index} is a static sequence and cannot take samples")]
    StaticSource { index: usize },

    /// Plot configuration could not be parsed or serialized.
    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),
}

impl PlotError {
    /// Create a ShapeMismatch error.
    pub fn shape_mismatch(what: &'static str, expected: usize, actual: usize) -> Self {
        Self::ShapeMismatch {
            what,
            expected,
            actual,
        }
    }

    /// Check whether this is a domain error.
    pub fn is_domain(&self) -> bool {
        matches!(self, Self::Domain(_))
    }
}
