//! Drawing instructions produced by a render pass.
//!
//! These types are backend-agnostic. A rendering collaborator (an SVG writer,
//! a canvas, a test harness) walks the [`RenderList`] in order and draws each
//! command; nothing here emits markup.

use serde::{Deserialize, Serialize};

use crate::error::Axis;
use crate::geom::{ScreenPoint, ScreenRect};

/// RGBA color.
///
/// All components are expected to be in the 0.0..=1.0 range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
    /// Alpha channel.
    pub a: f32,
}

impl Color {
    /// Create a new color.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from 8-bit channels.
    pub const fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0)
    }

    /// Opaque black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    /// Opaque white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    /// Opaque yellow.
    pub const YELLOW: Self = Self::rgb8(0xFF, 0xFF, 0x00);
    /// Opaque cyan.
    pub const CYAN: Self = Self::rgb8(0x00, 0xFF, 0xFF);
    /// Opaque red.
    pub const RED: Self = Self::rgb8(0xFF, 0x00, 0x00);
    /// Opaque green.
    pub const GREEN: Self = Self::rgb8(0x00, 0x80, 0x00);
    /// Light blue used as the fifth palette entry.
    pub const LAVENDER: Self = Self::rgb8(0x70, 0x70, 0xFF);

    fn channel(value: f32) -> u8 {
        (value.clamp(0.0, 1.0) * 255.0).round() as u8
    }
}

/// Formats as `#rrggbb`, or `#rrggbbaa` when not opaque.
impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "#{:02x}{:02x}{:02x}",
            Self::channel(self.r),
            Self::channel(self.g),
            Self::channel(self.b)
        )?;
        if self.a < 1.0 {
            write!(f, "{:02x}", Self::channel(self.a))?;
        }
        Ok(())
    }
}

/// Line stroke styling.
///
/// The width is expressed in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    /// Stroke color.
    pub color: Color,
    /// Stroke width in pixels.
    pub width: f32,
}

impl LineStyle {
    /// Create a line style.
    pub fn new(color: Color, width: f32) -> Self {
        Self { color, width }
    }
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 1.0,
        }
    }
}

/// Rectangle styling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectStyle {
    /// Fill color.
    pub fill: Color,
    /// Stroke color.
    pub stroke: Color,
    /// Stroke width.
    pub stroke_width: f32,
}

/// Horizontal text alignment relative to the anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    /// Text starts at the point.
    Start,
    /// Text is centered on the point.
    Middle,
    /// Text ends at the point.
    End,
}

/// Vertical text alignment relative to the anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Baseline {
    /// Alphabetic baseline at the point.
    Alphabetic,
    /// Text is vertically centered on the point.
    Middle,
    /// Text hangs below the point.
    Hanging,
}

/// Text styling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Text color.
    pub color: Color,
    /// Font size in pixels.
    pub size: f32,
    /// Horizontal alignment.
    pub anchor: TextAnchor,
    /// Vertical alignment.
    pub baseline: Baseline,
    /// Clockwise rotation in degrees about the anchor point.
    pub rotation: f32,
}

impl TextStyle {
    /// Unrotated text with an alphabetic baseline.
    pub fn new(color: Color, size: f32, anchor: TextAnchor) -> Self {
        Self {
            color,
            size,
            anchor,
            baseline: Baseline::Alphabetic,
            rotation: 0.0,
        }
    }

    /// Set the vertical alignment.
    pub fn with_baseline(mut self, baseline: Baseline) -> Self {
        self.baseline = baseline;
        self
    }

    /// Set the rotation in degrees.
    pub fn with_rotation(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }
}

/// One drawing instruction.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Draw a straight line.
    Line {
        /// Segment start.
        start: ScreenPoint,
        /// Segment end.
        end: ScreenPoint,
        /// Stroke styling.
        style: LineStyle,
    },
    /// Draw a filled circular marker.
    Marker {
        /// Marker center.
        center: ScreenPoint,
        /// Marker radius in pixels.
        radius: f32,
        /// Fill color.
        color: Color,
    },
    /// Draw a tick label.
    TickLabel {
        /// Axis the tick belongs to.
        axis: Axis,
        /// Label position.
        position: ScreenPoint,
        /// Raw tick value.
        value: f64,
        /// Formatted label.
        text: String,
        /// Text styling.
        style: TextStyle,
    },
    /// Draw a rectangle.
    Rect {
        /// Rectangle bounds.
        rect: ScreenRect,
        /// Rectangle styling.
        style: RectStyle,
    },
    /// Draw free text such as a title or axis label.
    Text {
        /// Text position.
        position: ScreenPoint,
        /// Text content.
        text: String,
        /// Text styling.
        style: TextStyle,
    },
}

/// Ordered render commands for one frame.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RenderList {
    commands: Vec<RenderCommand>,
}

impl RenderList {
    /// Create an empty render list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a render command.
    pub fn push(&mut self, command: RenderCommand) {
        self.commands.push(command);
    }

    /// Access all render commands.
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    /// Number of commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Check if there are no commands.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Iterate over the commands in draw order.
    pub fn iter(&self) -> std::slice::Iter<'_, RenderCommand> {
        self.commands.iter()
    }

    /// Emit one trace: a connecting line into each point after the first
    /// (when `line` is set) followed by a marker on the point (when `marker`
    /// is set).
    pub fn push_trace<I>(&mut self, points: I, line: Option<LineStyle>, marker: Option<(f32, Color)>)
    where
        I: IntoIterator<Item = ScreenPoint>,
    {
        let mut previous: Option<ScreenPoint> = None;
        for point in points {
            if let (Some(style), Some(start)) = (line, previous) {
                self.push(RenderCommand::Line {
                    start,
                    end: point,
                    style,
                });
            }
            if let Some((radius, color)) = marker {
                self.push(RenderCommand::Marker {
                    center: point,
                    radius,
                    color,
                });
            }
            previous = Some(point);
        }
    }
}

impl IntoIterator for RenderList {
    type Item = RenderCommand;
    type IntoIter = std::vec::IntoIter<RenderCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.into_iter()
    }
}

impl<'a> IntoIterator for &'a RenderList {
    type Item = &'a RenderCommand;
    type IntoIter = std::slice::Iter<'a, RenderCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}
