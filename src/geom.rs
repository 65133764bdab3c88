//! Geometric primitives used by the plotting pipeline.
//!
//! [`Point`] lives in data space. [`ScreenPoint`] and [`ScreenRect`] are pixel
//! coordinates with the origin at the top-left corner and Y growing downward,
//! which is what SVG and HTML canvases expect.

/// A point in data space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// X value in data coordinates.
    pub x: f64,
    /// Y value in data coordinates.
    pub y: f64,
}

impl Point {
    /// Create a new data point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A point in screen space (pixel coordinates).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    /// X value in screen pixels.
    pub x: f32,
    /// Y value in screen pixels.
    pub y: f32,
}

impl ScreenPoint {
    /// Create a new screen point.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A rectangle in screen space (pixel coordinates).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenRect {
    /// Top-left corner.
    pub min: ScreenPoint,
    /// Bottom-right corner.
    pub max: ScreenPoint,
}

impl ScreenRect {
    /// Create a new screen rectangle from corners.
    pub fn new(min: ScreenPoint, max: ScreenPoint) -> Self {
        Self { min, max }
    }

    /// Create a rectangle from its top-left corner and size.
    pub fn from_origin_size(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            min: ScreenPoint::new(left, top),
            max: ScreenPoint::new(left + width, top + height),
        }
    }

    /// Rectangle width in pixels.
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    /// Rectangle height in pixels.
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Horizontal center.
    pub fn center_x(&self) -> f32 {
        (self.min.x + self.max.x) * 0.5
    }

    /// Vertical center.
    pub fn center_y(&self) -> f32 {
        (self.min.y + self.max.y) * 0.5
    }

    /// Check whether the rectangle has positive area.
    pub fn is_valid(&self) -> bool {
        self.width() > 0.0 && self.height() > 0.0
    }
}
