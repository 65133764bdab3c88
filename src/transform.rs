//! Coordinate transforms between data and screen space.

use crate::error::{Axis, DomainError, Result};
use crate::geom::{Point, ScreenPoint, ScreenRect};
use crate::view::{Range, Viewport};

/// Affine map from a data viewport onto a pixel rectangle.
///
/// X grows to the right. Y is inverted so that larger values land closer to
/// the top edge of the rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    viewport: Viewport,
    screen: ScreenRect,
}

impl Transform {
    /// Create a transform for the given viewport and screen rectangle.
    ///
    /// Fails with a domain error if either axis range has zero span or a
    /// non-finite bound.
    pub fn new(viewport: Viewport, screen: ScreenRect) -> Result<Self> {
        check_axis(viewport.x, Axis::X)?;
        check_axis(viewport.y, Axis::Y)?;
        Ok(Self { viewport, screen })
    }

    /// Access the viewport.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Access the screen rectangle.
    pub fn screen(&self) -> ScreenRect {
        self.screen
    }

    /// Map an X value to a horizontal pixel coordinate.
    pub fn x_to_pixel(&self, x: f64) -> f32 {
        let range = self.viewport.x;
        let norm = (x - range.min) / range.span();
        (self.screen.min.x as f64 + norm * self.screen.width() as f64) as f32
    }

    /// Map a Y value to a vertical pixel coordinate.
    pub fn y_to_pixel(&self, y: f64) -> f32 {
        let range = self.viewport.y;
        let norm = (y - range.min) / range.span();
        (self.screen.max.y as f64 - norm * self.screen.height() as f64) as f32
    }

    /// Map a data point into screen space.
    pub fn data_to_screen(&self, point: Point) -> ScreenPoint {
        ScreenPoint::new(self.x_to_pixel(point.x), self.y_to_pixel(point.y))
    }

    /// Map a screen point into data space.
    ///
    /// Returns `None` when the screen rectangle has no area.
    pub fn screen_to_data(&self, point: ScreenPoint) -> Option<Point> {
        if !self.screen.is_valid() {
            return None;
        }
        let x_norm = (point.x as f64 - self.screen.min.x as f64) / self.screen.width() as f64;
        let y_norm = (self.screen.max.y as f64 - point.y as f64) / self.screen.height() as f64;
        let x = self.viewport.x.min + x_norm * self.viewport.x.span();
        let y = self.viewport.y.min + y_norm * self.viewport.y.span();
        Some(Point::new(x, y))
    }
}

fn check_axis(range: Range, axis: Axis) -> std::result::Result<(), DomainError> {
    if !range.min.is_finite() {
        return Err(DomainError::NonFinite { value: range.min });
    }
    if !range.max.is_finite() {
        return Err(DomainError::NonFinite { value: range.max });
    }
    if range.span() <= 0.0 {
        return Err(DomainError::DegenerateAxis {
            axis,
            value: range.min,
        });
    }
    Ok(())
}
