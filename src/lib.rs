//! dashplot is the numeric core of a small live-plotting widget.
//! It keeps fixed-capacity sample buffers, picks human-friendly axis ticks,
//! and turns plot state into backend-agnostic drawing instructions.

#![forbid(unsafe_code)]

pub mod axis;
pub mod buffer;
pub mod config;
pub mod error;
pub mod format;
pub mod geom;
pub mod layout;
pub mod plot;
pub mod render;
pub mod scale;
pub mod source;
pub mod trace;
pub mod transform;
pub mod view;

pub use axis::{AxisConfig, AxisFormatter};
pub use buffer::{SampleBuffer, Samples};
pub use config::PlotConfig;
pub use error::{Axis, DomainError, PlotError, Result};
pub use format::format_general;
pub use geom::{Point, ScreenPoint, ScreenRect};
pub use layout::PlotLayout;
pub use plot::{PlotBuilder, PlotView};
pub use render::{
    Baseline, Color, LineStyle, RectStyle, RenderCommand, RenderList, TextAnchor, TextStyle,
};
pub use scale::{RoundMode, TickScaler, Ticks, nice_number};
pub use source::{DataSource, SourceIter};
pub use trace::{Palette, Trace, TraceSet, TraceStyle};
pub use transform::Transform;
pub use view::{Range, Viewport};
