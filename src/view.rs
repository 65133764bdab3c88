//! Axis ranges and the visible data window.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, PlotError, Result};

/// Numeric range with inclusive bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    /// Minimum value.
    pub min: f64,
    /// Maximum value.
    pub max: f64,
}

impl Range {
    /// Create a new range, swapping bounds if needed.
    pub fn new(mut min: f64, mut max: f64) -> Self {
        if min > max {
            std::mem::swap(&mut min, &mut max);
        }
        Self { min, max }
    }

    /// Create a range from user supplied bounds without reordering them.
    ///
    /// Fails with [`PlotError::InvalidRange`] when `max < min` and with a
    /// domain error when the bounds are equal or not finite.
    pub fn checked(min: f64, max: f64) -> Result<Self> {
        if !min.is_finite() {
            return Err(DomainError::NonFinite { value: min }.into());
        }
        if !max.is_finite() {
            return Err(DomainError::NonFinite { value: max }.into());
        }
        if max < min {
            return Err(PlotError::InvalidRange { min, max });
        }
        if max == min {
            return Err(DomainError::ZeroSpan { value: min }.into());
        }
        Ok(Self { min, max })
    }

    /// Range covering a single value.
    pub fn point(value: f64) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    /// Span of the range.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Check whether both bounds are finite.
    pub fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }

    /// Check whether the range has positive span and finite bounds.
    pub fn is_valid(&self) -> bool {
        self.is_finite() && self.span() > 0.0
    }

    /// Check whether a value lies inside the range.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Expand the range to include a value.
    pub fn expand_to_include(&mut self, value: f64) {
        if !value.is_finite() {
            return;
        }
        if value < self.min {
            self.min = value;
        }
        if value > self.max {
            self.max = value;
        }
    }

    /// Union two ranges if both are finite.
    pub fn union(a: Self, b: Self) -> Option<Self> {
        if !a.is_finite() || !b.is_finite() {
            return None;
        }
        Some(Self {
            min: a.min.min(b.min),
            max: a.max.max(b.max),
        })
    }

    /// Min/max over a sequence of values, skipping non-finite ones.
    pub fn from_values<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut range: Option<Self> = None;
        for value in values {
            if !value.is_finite() {
                continue;
            }
            match range.as_mut() {
                None => range = Some(Self::point(value)),
                Some(existing) => existing.expand_to_include(value),
            }
        }
        range
    }

    /// Widen a zero-span range so it can be mapped to pixels.
    ///
    /// The range grows by 10% of the value's magnitude on each side, or by 1
    /// when the value is zero. Ranges with positive span are returned as is.
    pub fn widen_degenerate(&self) -> Self {
        if self.span() > 0.0 {
            return *self;
        }
        let center = (self.min + self.max) * 0.5;
        let half = if center == 0.0 {
            1.0
        } else {
            center.abs() * 0.1
        };
        Self {
            min: center - half,
            max: center + half,
        }
    }
}

/// Visible data ranges on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// X axis range.
    pub x: Range,
    /// Y axis range.
    pub y: Range,
}

impl Viewport {
    /// Create a viewport from X and Y ranges.
    pub fn new(x: Range, y: Range) -> Self {
        Self { x, y }
    }

    /// Check whether both axes are valid.
    pub fn is_valid(&self) -> bool {
        self.x.is_valid() && self.y.is_valid()
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            x: Range::new(0.0, 100.0),
            y: Range::new(-1.0, 1.0),
        }
    }
}
