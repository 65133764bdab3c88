//! Traces and the set of sources a plot draws from.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{PlotError, Result};
use crate::geom::Point;
use crate::render::Color;
use crate::source::DataSource;
use crate::view::Range;

/// Colors handed to traces by position.
///
/// The trace at index `i` takes entry `i` modulo the palette length, so the
/// assignment depends only on the palette and the trace's position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette(Vec<Color>);

impl Palette {
    /// Create a palette from a list of colors.
    pub fn new(colors: impl Into<Vec<Color>>) -> Self {
        Self(colors.into())
    }

    /// Color for the trace at `index`.
    pub fn color_for(&self, index: usize) -> Color {
        if self.0.is_empty() {
            return Color::WHITE;
        }
        self.0[index % self.0.len()]
    }

    /// Access the colors.
    pub fn colors(&self) -> &[Color] {
        &self.0
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self(vec![
            Color::YELLOW,
            Color::CYAN,
            Color::RED,
            Color::GREEN,
            Color::LAVENDER,
        ])
    }
}

/// Cosmetic trace attributes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceStyle {
    /// Line and marker color.
    pub color: Color,
    /// Connect consecutive points with lines.
    pub lines: bool,
    /// Draw a marker on each point.
    pub markers: bool,
    /// Line width in pixels.
    pub line_width: f32,
    /// Marker radius in pixels.
    pub marker_radius: f32,
}

impl TraceStyle {
    /// Default style in the given color.
    pub fn with_color(color: Color) -> Self {
        Self {
            color,
            ..Self::default()
        }
    }
}

impl Default for TraceStyle {
    fn default() -> Self {
        Self {
            color: Color::YELLOW,
            lines: true,
            markers: true,
            line_width: 1.0,
            marker_radius: 3.0,
        }
    }
}

/// One Y series drawn against the shared X source.
#[derive(Debug, Clone)]
pub struct Trace {
    name: String,
    source: DataSource,
    style: TraceStyle,
}

impl Trace {
    /// Create a trace.
    pub fn new(name: impl Into<String>, source: DataSource, style: TraceStyle) -> Self {
        Self {
            name: name.into(),
            source,
            style,
        }
    }

    /// Access the trace name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Access the Y source.
    pub fn source(&self) -> &DataSource {
        &self.source
    }

    /// Access the style.
    pub fn style(&self) -> &TraceStyle {
        &self.style
    }

    /// Access the style mutably.
    pub fn style_mut(&mut self) -> &mut TraceStyle {
        &mut self.style
    }

    /// Extent of the Y source with its native semantics.
    pub fn extent(&self) -> Option<Range> {
        self.source.extent()
    }
}

/// Shared X source plus the traces plotted against it.
#[derive(Debug, Clone)]
pub struct TraceSet {
    x: DataSource,
    traces: Vec<Trace>,
}

impl TraceSet {
    /// Combine an X source with traces.
    pub fn new(x: DataSource, traces: Vec<Trace>) -> Self {
        Self { x, traces }
    }

    /// Scrolling set: X and `count` Y buffers, all of `capacity`.
    pub fn scrolling(capacity: usize, count: usize, palette: &Palette) -> Self {
        let traces = (0..count)
            .map(|index| {
                Trace::new(
                    format!("trace {index}"),
                    DataSource::buffered(capacity),
                    TraceStyle::with_color(palette.color_for(index)),
                )
            })
            .collect();
        Self::new(DataSource::buffered(capacity), traces)
    }

    /// Static set with `count` empty traces, filled through [`TraceSet::set_data`].
    pub fn fixed(count: usize, palette: &Palette) -> Self {
        let traces = (0..count)
            .map(|index| {
                Trace::new(
                    format!("trace {index}"),
                    DataSource::empty(),
                    TraceStyle::with_color(palette.color_for(index)),
                )
            })
            .collect();
        Self::new(DataSource::empty(), traces)
    }

    /// Access the shared X source.
    pub fn x(&self) -> &DataSource {
        &self.x
    }

    /// Access all traces.
    pub fn traces(&self) -> &[Trace] {
        &self.traces
    }

    /// Access all traces mutably.
    pub fn traces_mut(&mut self) -> &mut [Trace] {
        &mut self.traces
    }

    /// Number of traces.
    pub fn len(&self) -> usize {
        self.traces.len()
    }

    /// Check if there are no traces.
    pub fn is_empty(&self) -> bool {
        self.traces.is_empty()
    }

    /// Push one sample per source: `x` to the shared buffer and `ys[i]` to
    /// trace `i`.
    ///
    /// Nothing is inserted unless `ys` has one value per trace and every
    /// source is a scrolling buffer.
    pub fn add_point(&mut self, x: f64, ys: &[f64]) -> Result<()> {
        if ys.len() != self.traces.len() {
            return Err(PlotError::shape_mismatch(
                "y samples",
                self.traces.len(),
                ys.len(),
            ));
        }
        if self.x.as_buffer().is_none() {
            return Err(PlotError::StaticSource { index: 0 });
        }
        if let Some(index) = self
            .traces
            .iter()
            .position(|trace| trace.source.as_buffer().is_none())
        {
            return Err(PlotError::StaticSource { index: index + 1 });
        }

        if let Some(buffer) = self.x.as_buffer_mut() {
            buffer.insert(x);
        }
        for (trace, &y) in self.traces.iter_mut().zip(ys) {
            if let Some(buffer) = trace.source.as_buffer_mut() {
                buffer.insert(y);
            }
        }
        Ok(())
    }

    /// Replace every source with static sequences of equal length.
    ///
    /// `ys` must hold one sequence per trace. Sources are left untouched when
    /// the shapes do not match.
    pub fn set_data<X, Y, I>(&mut self, x: X, ys: I) -> Result<()>
    where
        X: Into<Arc<[f64]>>,
        Y: Into<Arc<[f64]>>,
        I: IntoIterator<Item = Y>,
    {
        let x: Arc<[f64]> = x.into();
        let ys: Vec<Arc<[f64]>> = ys.into_iter().map(Into::into).collect();
        if ys.len() != self.traces.len() {
            return Err(PlotError::shape_mismatch(
                "y sequences",
                self.traces.len(),
                ys.len(),
            ));
        }
        if let Some(y) = ys.iter().find(|y| y.len() != x.len()) {
            return Err(PlotError::shape_mismatch(
                "sequence length",
                x.len(),
                y.len(),
            ));
        }

        debug!(points = x.len(), traces = ys.len(), "replacing plot data");
        self.x = DataSource::Static(x);
        for (trace, y) in self.traces.iter_mut().zip(ys) {
            trace.source = DataSource::Static(y);
        }
        Ok(())
    }

    /// Union of the trace extents, each with its source's native semantics.
    pub fn y_extent(&self) -> Option<Range> {
        self.traces
            .iter()
            .filter_map(Trace::extent)
            .reduce(|a, b| Range::union(a, b).unwrap_or(a))
    }

    /// Pair X values with the Y values of trace `index`.
    ///
    /// Stops at the shorter of the two sources.
    pub fn points(&self, index: usize) -> Option<impl Iterator<Item = Point> + '_> {
        let trace = self.traces.get(index)?;
        Some(
            self.x
                .iter()
                .zip(trace.source.iter())
                .map(|(x, y)| Point::new(x, y)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_wraps_by_index() {
        let palette = Palette::default();
        assert_eq!(palette.color_for(0), Color::YELLOW);
        assert_eq!(palette.color_for(4), Color::LAVENDER);
        assert_eq!(palette.color_for(5), Color::YELLOW);
        assert_eq!(Palette::new(Vec::new()).color_for(3), Color::WHITE);
    }

    #[test]
    fn trace_colors_do_not_depend_on_construction_history() {
        let palette = Palette::default();
        let _earlier = TraceSet::scrolling(4, 3, &palette);
        let set = TraceSet::scrolling(4, 2, &palette);
        assert_eq!(set.traces()[0].style().color, Color::YELLOW);
        assert_eq!(set.traces()[1].style().color, Color::CYAN);
    }

    #[test]
    fn add_point_pushes_every_source() {
        let mut set = TraceSet::scrolling(3, 2, &Palette::default());
        for step in 0..5 {
            let x = f64::from(step);
            set.add_point(x, &[x * 2.0, -x]).unwrap();
        }
        assert_eq!(set.x().iter().collect::<Vec<_>>(), vec![2.0, 3.0, 4.0]);
        assert_eq!(
            set.traces()[0].source().iter().collect::<Vec<_>>(),
            vec![4.0, 6.0, 8.0]
        );
        assert_eq!(set.traces()[1].extent(), Some(Range::new(-4.0, 0.0)));
    }

    #[test]
    fn add_point_rejects_wrong_count_without_inserting() {
        let mut set = TraceSet::scrolling(3, 2, &Palette::default());
        let err = set.add_point(1.0, &[1.0]).unwrap_err();
        assert!(matches!(
            err,
            PlotError::ShapeMismatch {
                expected: 2,
                actual: 1,
                ..
            }
        ));
        assert!(set.x().is_empty());
    }

    #[test]
    fn add_point_rejects_static_sources() {
        let mut set = TraceSet::fixed(1, &Palette::default());
        assert!(matches!(
            set.add_point(0.0, &[1.0]),
            Err(PlotError::StaticSource { index: 0 })
        ));
    }

    #[test]
    fn set_data_checks_shapes() {
        let mut set = TraceSet::fixed(2, &Palette::default());
        let err = set
            .set_data(vec![0.0, 1.0], vec![vec![1.0, 2.0]])
            .unwrap_err();
        assert!(matches!(err, PlotError::ShapeMismatch { .. }));

        let err = set
            .set_data(vec![0.0, 1.0], vec![vec![1.0, 2.0], vec![3.0]])
            .unwrap_err();
        assert!(matches!(
            err,
            PlotError::ShapeMismatch {
                expected: 2,
                actual: 1,
                ..
            }
        ));
        assert!(set.x().is_empty());

        set.set_data(vec![0.0, 1.0], vec![vec![1.0, 2.0], vec![3.0, -3.0]])
            .unwrap();
        assert_eq!(set.x().len(), 2);
        assert_eq!(set.y_extent(), Some(Range::new(-3.0, 3.0)));
    }

    #[test]
    fn shared_x_sequence_is_not_copied() {
        let x: Arc<[f64]> = Arc::from(vec![0.0, 1.0, 2.0]);
        let mut set = TraceSet::fixed(1, &Palette::default());
        set.set_data(Arc::clone(&x), vec![vec![5.0, 6.0, 7.0]]).unwrap();
        assert_eq!(Arc::strong_count(&x), 2);
    }

    #[test]
    fn points_truncate_to_shorter_source() {
        let set = TraceSet::new(
            DataSource::from(vec![0.0, 1.0, 2.0]),
            vec![Trace::new(
                "short",
                DataSource::from(vec![9.0, 8.0]),
                TraceStyle::default(),
            )],
        );
        let points: Vec<Point> = set.points(0).unwrap().collect();
        assert_eq!(points, vec![Point::new(0.0, 9.0), Point::new(1.0, 8.0)]);
        assert!(set.points(1).is_none());
    }

    #[test]
    fn y_extent_mixes_native_semantics() {
        let mut buffered = DataSource::buffered(2);
        if let Some(buffer) = buffered.as_buffer_mut() {
            for value in [100.0, 1.0, 2.0] {
                buffer.insert(value);
            }
        }
        let set = TraceSet::new(
            DataSource::buffered(2),
            vec![
                Trace::new("buffered", buffered, TraceStyle::default()),
                Trace::new("static", DataSource::from(vec![-5.0, 0.0]), TraceStyle::default()),
                Trace::new("empty", DataSource::empty(), TraceStyle::default()),
            ],
        );
        assert_eq!(set.y_extent(), Some(Range::new(-5.0, 100.0)));
    }
}
