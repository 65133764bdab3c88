//! "Nice number" tick placement.
//!
//! Tick steps are always 1, 2, or 5 times a power of ten. The data span is
//! first rounded up to a nice number so it is never under-covered, then the
//! step is the nice number closest to `span / (max_ticks - 1)`. The scaled
//! bounds are the data bounds snapped outward to multiples of the step.

use crate::error::{DomainError, PlotError, Result};

/// How [`nice_number`] picks its leading digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundMode {
    /// Closest of 1, 2, 5, 10.
    Round,
    /// Smallest of 1, 2, 5, 10 that is not below the input.
    Ceiling,
}

/// Find a nice number (1, 2, 5, or 10 times a power of ten) near `value`.
///
/// Fails with [`DomainError::NonPositiveRange`] when `value` is not a
/// positive finite number, and with [`DomainError::Unrepresentable`] when the
/// power of ten or the result overflows or underflows `f64`.
pub fn nice_number(value: f64, mode: RoundMode) -> std::result::Result<f64, DomainError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(DomainError::NonPositiveRange { value });
    }

    let mut exponent = value.log10().floor();
    let mut power = 10_f64.powf(exponent);
    if power == 0.0 || !power.is_finite() {
        return Err(DomainError::Unrepresentable { value });
    }
    let mut fraction = value / power;
    // log10 can land a hair off at exact powers of ten.
    if fraction >= 10.0 {
        exponent += 1.0;
        power = 10_f64.powf(exponent);
        fraction = value / power;
    } else if fraction < 1.0 {
        exponent -= 1.0;
        power = 10_f64.powf(exponent);
        fraction = value / power;
    }

    let digit = match mode {
        RoundMode::Round => {
            if fraction < 1.5 {
                1.0
            } else if fraction < 3.0 {
                2.0
            } else if fraction < 7.0 {
                5.0
            } else {
                10.0
            }
        }
        RoundMode::Ceiling => {
            if fraction <= 1.0 {
                1.0
            } else if fraction <= 2.0 {
                2.0
            } else if fraction <= 5.0 {
                5.0
            } else {
                10.0
            }
        }
    };
    let nice = digit * power;
    if !nice.is_finite() || nice <= 0.0 {
        return Err(DomainError::Unrepresentable { value });
    }
    Ok(nice)
}

/// Tick generator for one axis.
#[derive(Debug, Clone, PartialEq)]
pub struct TickScaler {
    min: f64,
    max: f64,
    max_ticks: usize,
    step: f64,
    scaled_min: f64,
    scaled_max: f64,
}

impl TickScaler {
    /// Create a scaler for `[min, max]` with at most `max_ticks` ticks.
    pub fn new(min: f64, max: f64, max_ticks: usize) -> Result<Self> {
        let mut scaler = Self {
            min,
            max,
            max_ticks,
            step: 1.0,
            scaled_min: min,
            scaled_max: max,
        };
        scaler.recompute()?;
        Ok(scaler)
    }

    /// Data range minimum.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Data range maximum.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Configured maximum tick count.
    pub fn max_ticks(&self) -> usize {
        self.max_ticks
    }

    /// Distance between ticks.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// First tick, a multiple of the step at or below the data minimum.
    pub fn scaled_min(&self) -> f64 {
        self.scaled_min
    }

    /// Last tick, a multiple of the step at or above the data maximum.
    pub fn scaled_max(&self) -> f64 {
        self.scaled_max
    }

    /// Update the data range and recompute.
    pub fn set_range(&mut self, min: f64, max: f64) -> Result<()> {
        self.update(min, max, self.max_ticks)
    }

    /// Update the maximum tick count and recompute.
    pub fn set_max_ticks(&mut self, max_ticks: usize) -> Result<()> {
        self.update(self.min, self.max, max_ticks)
    }

    /// Update the parameters and produce the ticks covering `[min, max]`.
    ///
    /// Ticks start at the scaled minimum and advance by the step while the
    /// current value is at most the scaled maximum, so accumulated rounding
    /// can occasionally add one tick past it.
    pub fn generate_ticks(
        &mut self,
        min: f64,
        max: f64,
        max_ticks: Option<usize>,
    ) -> Result<Ticks> {
        self.update(min, max, max_ticks.unwrap_or(self.max_ticks))?;
        Ok(self.ticks())
    }

    /// Ticks for the current parameters.
    pub fn ticks(&self) -> Ticks {
        Ticks {
            next: self.scaled_min,
            step: self.step,
            end: self.scaled_max,
            done: false,
        }
    }

    // Parameters are committed only once the recompute succeeds.
    fn update(&mut self, min: f64, max: f64, max_ticks: usize) -> Result<()> {
        let mut next = self.clone();
        next.min = min;
        next.max = max;
        next.max_ticks = max_ticks;
        next.recompute()?;
        *self = next;
        Ok(())
    }

    fn recompute(&mut self) -> Result<()> {
        if !self.min.is_finite() {
            return Err(DomainError::NonFinite { value: self.min }.into());
        }
        if !self.max.is_finite() {
            return Err(DomainError::NonFinite { value: self.max }.into());
        }
        if self.max < self.min {
            return Err(PlotError::InvalidRange {
                min: self.min,
                max: self.max,
            });
        }
        if self.max == self.min {
            return Err(DomainError::ZeroSpan { value: self.min }.into());
        }
        if self.max_ticks < 2 {
            return Err(DomainError::TooFewTicks {
                count: self.max_ticks,
            }
            .into());
        }

        let span = nice_number(self.max - self.min, RoundMode::Ceiling)?;
        let step = nice_number(span / (self.max_ticks - 1) as f64, RoundMode::Round)?;
        let scaled_min = (self.min / step).floor() * step;
        let scaled_max = (self.max / step).ceil() * step;
        if !scaled_min.is_finite() || !scaled_max.is_finite() {
            return Err(DomainError::Unrepresentable { value: step }.into());
        }
        self.step = step;
        self.scaled_min = scaled_min;
        self.scaled_max = scaled_max;
        Ok(())
    }
}

/// Lazy sequence of tick values.
///
/// Cloning restarts from the clone point; the sequence is deterministic for a
/// given set of scaler parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Ticks {
    next: f64,
    step: f64,
    end: f64,
    done: bool,
}

impl Ticks {
    /// Distance between consecutive ticks.
    pub fn step(&self) -> f64 {
        self.step
    }
}

impl Iterator for Ticks {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.done || self.next.is_nan() || self.next > self.end {
            return None;
        }
        let value = self.next;
        let advanced = value + self.step;
        // A step below the float resolution at this magnitude cannot advance.
        if advanced == value {
            self.done = true;
        }
        self.next = advanced;
        Some(value)
    }
}

impl std::iter::FusedIterator for Ticks {}
