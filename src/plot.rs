//! Plot view: autoscaling, tick layout, and the render pass.

use std::sync::Arc;

use tracing::{debug, trace, warn};

use crate::axis::AxisConfig;
use crate::config::PlotConfig;
use crate::error::{Axis, Result};
use crate::geom::{ScreenPoint, ScreenRect};
use crate::layout::PlotLayout;
use crate::render::{
    Baseline, LineStyle, RectStyle, RenderCommand, RenderList, TextAnchor, TextStyle,
};
use crate::scale::{TickScaler, Ticks};
use crate::trace::{Palette, TraceSet};
use crate::transform::Transform;
use crate::view::{Range, Viewport};

const DEFAULT_WIDGET: (f32, f32) = (400.0, 300.0);
// Ticks closer to zero than this fraction of the step are labeled "0".
const ZERO_SNAP: f64 = 1e-9;

/// A plot widget's numeric state: layout, axis ranges, and data.
#[derive(Debug, Clone)]
pub struct PlotView {
    config: PlotConfig,
    layout: PlotLayout,
    viewport: Viewport,
    traces: TraceSet,
    x_scaler: TickScaler,
    y_scaler: TickScaler,
}

impl PlotView {
    /// Start building a plot.
    pub fn builder() -> PlotBuilder {
        PlotBuilder::default()
    }

    /// Access the configuration.
    pub fn config(&self) -> &PlotConfig {
        &self.config
    }

    /// Access the pixel layout.
    pub fn layout(&self) -> &PlotLayout {
        &self.layout
    }

    /// Current axis ranges.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Access the data sources.
    pub fn traces(&self) -> &TraceSet {
        &self.traces
    }

    /// Access the data sources mutably.
    pub fn traces_mut(&mut self) -> &mut TraceSet {
        &mut self.traces
    }

    /// Check whether autoscale runs before each render pass.
    pub fn autoscale_enabled(&self) -> bool {
        self.config.autoscale
    }

    /// Enable or disable autoscale before each render pass.
    pub fn set_autoscale(&mut self, enabled: bool) {
        self.config.autoscale = enabled;
    }

    /// Set the X axis range explicitly.
    pub fn set_x_range(&mut self, min: f64, max: f64) -> Result<()> {
        self.viewport.x = Range::checked(min, max)?;
        Ok(())
    }

    /// Set the Y axis range explicitly.
    pub fn set_y_range(&mut self, min: f64, max: f64) -> Result<()> {
        self.viewport.y = Range::checked(min, max)?;
        Ok(())
    }

    /// Push one X sample and one Y sample per trace into the scrolling buffers.
    pub fn add_point(&mut self, x: f64, ys: &[f64]) -> Result<()> {
        self.traces.add_point(x, ys)
    }

    /// Replace the data with static sequences of equal length.
    pub fn set_data<X, Y, I>(&mut self, x: X, ys: I) -> Result<()>
    where
        X: Into<Arc<[f64]>>,
        Y: Into<Arc<[f64]>>,
        I: IntoIterator<Item = Y>,
    {
        self.traces.set_data(x, ys)
    }

    /// Transform from the current viewport onto the axes box.
    pub fn transform(&self) -> Result<Transform> {
        Transform::new(self.viewport, self.layout.plot())
    }

    /// Map an X value to a horizontal pixel coordinate.
    pub fn x_to_pixel(&self, x: f64) -> Result<f32> {
        Ok(self.transform()?.x_to_pixel(x))
    }

    /// Map a Y value to a vertical pixel coordinate.
    pub fn y_to_pixel(&self, y: f64) -> Result<f32> {
        Ok(self.transform()?.y_to_pixel(y))
    }

    /// Fit both axes to the data.
    ///
    /// X follows the values currently held by the X source, so a scrolling
    /// time axis stays windowed. Y covers the union of the trace extents,
    /// each with its source's native semantics. With fewer than two X values
    /// nothing changes. Returns whether the ranges were updated.
    pub fn autoscale(&mut self) -> bool {
        if self.traces.x().len() < 2 {
            return false;
        }
        if let Some(x) = self.traces.x().window_extent() {
            self.viewport.x = x.widen_degenerate();
        }
        self.autoscale_y_inner();
        debug!(
            x_min = self.viewport.x.min,
            x_max = self.viewport.x.max,
            y_min = self.viewport.y.min,
            y_max = self.viewport.y.max,
            "autoscaled plot"
        );
        true
    }

    /// Fit only the Y axis to the data, leaving X alone.
    pub fn autoscale_y(&mut self) -> bool {
        if self.traces.x().len() < 2 {
            return false;
        }
        self.autoscale_y_inner();
        true
    }

    fn autoscale_y_inner(&mut self) {
        if let Some(y) = self.traces.y_extent() {
            self.viewport.y = y.widen_degenerate();
        }
    }

    /// Produce the drawing instructions for one frame.
    ///
    /// Runs autoscale when enabled, lays out ticks and grid lines on both
    /// axes, then maps every trace's (x, y) pairs to pixels. Pairs stop at
    /// the shorter of the X and Y sources. On error nothing is emitted.
    pub fn render_pass(&mut self) -> Result<RenderList> {
        let result = self.build_frame();
        match &result {
            Ok(list) => trace!(commands = list.len(), "render pass complete"),
            Err(err) => warn!(%err, "render pass aborted"),
        }
        result
    }

    fn build_frame(&mut self) -> Result<RenderList> {
        if self.config.autoscale {
            self.autoscale();
        }
        let transform = self.transform()?;
        let viewport = self.viewport;
        // Scalers are committed only when both axes succeed.
        let mut x_scaler = self.x_scaler.clone();
        let mut y_scaler = self.y_scaler.clone();
        let x_ticks = x_scaler.generate_ticks(
            viewport.x.min,
            viewport.x.max,
            Some(self.config.x_axis.max_ticks()),
        )?;
        let y_ticks = y_scaler.generate_ticks(
            viewport.y.min,
            viewport.y.max,
            Some(self.config.y_axis.max_ticks()),
        )?;
        self.x_scaler = x_scaler;
        self.y_scaler = y_scaler;

        let mut list = RenderList::new();
        self.push_frame(&mut list);
        self.push_ticks(&mut list, &transform, Axis::X, x_ticks);
        self.push_ticks(&mut list, &transform, Axis::Y, y_ticks);
        self.push_traces(&mut list, &transform);
        Ok(list)
    }

    fn push_frame(&self, list: &mut RenderList) {
        let widget = self.layout.widget();
        let text_color = self.config.text_color;
        list.push(RenderCommand::Rect {
            rect: self.layout.plot(),
            style: RectStyle {
                fill: self.config.background,
                stroke: self.config.grid_color,
                stroke_width: 2.0,
            },
        });

        let title_size = self.layout.title_size();
        list.push(RenderCommand::Text {
            position: ScreenPoint::new(widget.center_x(), widget.min.y + title_size * 10.0 / 9.0),
            text: self.config.title.clone(),
            style: TextStyle::new(text_color, title_size, TextAnchor::Middle),
        });

        let label_size = self.layout.label_size();
        list.push(RenderCommand::Text {
            position: ScreenPoint::new(widget.center_x(), widget.max.y - 2.0),
            text: self.config.x_axis.label().to_string(),
            style: TextStyle::new(text_color, label_size, TextAnchor::Middle),
        });
        list.push(RenderCommand::Text {
            position: ScreenPoint::new(widget.min.x + 1.0, widget.center_y()),
            text: self.config.y_axis.label().to_string(),
            style: TextStyle::new(text_color, label_size, TextAnchor::Middle)
                .with_baseline(Baseline::Hanging)
                .with_rotation(270.0),
        });
    }

    fn push_ticks(&self, list: &mut RenderList, transform: &Transform, axis: Axis, ticks: Ticks) {
        let plot = self.layout.plot();
        let size = self.layout.tick_label_size();
        let grid = LineStyle::new(self.config.grid_color, 1.0);
        let config = match axis {
            Axis::X => &self.config.x_axis,
            Axis::Y => &self.config.y_axis,
        };
        let step = ticks.step();

        for value in ticks {
            let (grid_start, grid_end, position, style) = match axis {
                Axis::X => {
                    let pixel = transform.x_to_pixel(value);
                    (
                        ScreenPoint::new(pixel, plot.max.y),
                        ScreenPoint::new(pixel, plot.min.y),
                        ScreenPoint::new(pixel, plot.max.y + size),
                        TextStyle::new(self.config.text_color, size, TextAnchor::Middle),
                    )
                }
                Axis::Y => {
                    let pixel = transform.y_to_pixel(value);
                    (
                        ScreenPoint::new(plot.min.x, pixel),
                        ScreenPoint::new(plot.max.x, pixel),
                        ScreenPoint::new(plot.min.x - 2.0, pixel),
                        TextStyle::new(self.config.text_color, size, TextAnchor::End)
                            .with_baseline(Baseline::Middle),
                    )
                }
            };
            if self.config.grid {
                list.push(RenderCommand::Line {
                    start: grid_start,
                    end: grid_end,
                    style: grid,
                });
            }
            list.push(RenderCommand::TickLabel {
                axis,
                position,
                value,
                text: tick_label(config, value, step),
                style,
            });
        }
    }

    fn push_traces(&self, list: &mut RenderList, transform: &Transform) {
        for (index, trace) in self.traces.traces().iter().enumerate() {
            let Some(points) = self.traces.points(index) else {
                continue;
            };
            let style = trace.style();
            let line = style
                .lines
                .then(|| LineStyle::new(style.color, style.line_width));
            let marker = style.markers.then_some((style.marker_radius, style.color));
            list.push_trace(
                points.map(|point| transform.data_to_screen(point)),
                line,
                marker,
            );
        }
    }
}

fn tick_label(axis: &AxisConfig, value: f64, step: f64) -> String {
    let shown = if value.abs() < step.abs() * ZERO_SNAP {
        0.0
    } else {
        value
    };
    axis.formatter().format(shown)
}

/// Builder for configuring a plot before construction.
#[derive(Debug, Default)]
pub struct PlotBuilder {
    config: PlotConfig,
    layout: Option<PlotLayout>,
    traces: Option<TraceSet>,
    scrolling: Option<(usize, usize)>,
    fixed: Option<usize>,
}

impl PlotBuilder {
    /// Replace the whole configuration.
    pub fn config(mut self, config: PlotConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.config.title = title.into();
        self
    }

    /// Set the X axis configuration.
    pub fn x_axis(mut self, axis: AxisConfig) -> Self {
        self.config.x_axis = axis;
        self
    }

    /// Set the Y axis configuration.
    pub fn y_axis(mut self, axis: AxisConfig) -> Self {
        self.config.y_axis = axis;
        self
    }

    /// Enable or disable grid lines.
    pub fn grid(mut self, grid: bool) -> Self {
        self.config.grid = grid;
        self
    }

    /// Enable or disable autoscale.
    pub fn autoscale(mut self, autoscale: bool) -> Self {
        self.config.autoscale = autoscale;
        self
    }

    /// Set the initial axis ranges.
    pub fn initial_view(mut self, viewport: Viewport) -> Self {
        self.config.initial_view = viewport;
        self
    }

    /// Set the trace palette.
    pub fn palette(mut self, palette: Palette) -> Self {
        self.config.palette = palette;
        self
    }

    /// Place the plot widget; the axes box is derived from it.
    pub fn widget(mut self, widget: ScreenRect) -> Self {
        self.layout = Some(PlotLayout::from_widget(widget));
        self
    }

    /// Map data directly into this rectangle.
    pub fn plot_rect(mut self, plot: ScreenRect) -> Self {
        self.layout = Some(PlotLayout::from_plot_rect(plot));
        self
    }

    /// Scrolling plot with `count` traces, each buffer holding `capacity` samples.
    pub fn scrolling(mut self, capacity: usize, count: usize) -> Self {
        self.scrolling = Some((capacity, count));
        self.fixed = None;
        self.traces = None;
        self
    }

    /// Static plot with `count` traces, filled through [`PlotView::set_data`].
    pub fn fixed(mut self, count: usize) -> Self {
        self.fixed = Some(count);
        self.scrolling = None;
        self.traces = None;
        self
    }

    /// Use a prepared trace set as is.
    pub fn traces(mut self, traces: TraceSet) -> Self {
        self.traces = Some(traces);
        self.scrolling = None;
        self.fixed = None;
        self
    }

    /// Build the plot.
    ///
    /// Fails if the initial view cannot be tick-scaled.
    pub fn build(self) -> Result<PlotView> {
        let config = self.config;
        let view = config.initial_view;
        let x_scaler = TickScaler::new(view.x.min, view.x.max, config.x_axis.max_ticks())?;
        let y_scaler = TickScaler::new(view.y.min, view.y.max, config.y_axis.max_ticks())?;

        let traces = match (self.traces, self.scrolling, self.fixed) {
            (Some(traces), _, _) => traces,
            (None, Some((capacity, count)), _) => {
                styled(TraceSet::scrolling(capacity, count, &config.palette), &config)
            }
            (None, None, count) => {
                styled(TraceSet::fixed(count.unwrap_or(1), &config.palette), &config)
            }
        };

        let layout = self.layout.unwrap_or_else(|| {
            PlotLayout::from_widget(ScreenRect::from_origin_size(
                0.0,
                0.0,
                DEFAULT_WIDGET.0,
                DEFAULT_WIDGET.1,
            ))
        });

        Ok(PlotView {
            viewport: view,
            config,
            layout,
            traces,
            x_scaler,
            y_scaler,
        })
    }
}

fn styled(mut traces: TraceSet, config: &PlotConfig) -> TraceSet {
    for (index, trace) in traces.traces_mut().iter_mut().enumerate() {
        *trace.style_mut() = config.trace_style(index);
    }
    traces
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{DomainError, PlotError};
    use crate::render::Color;
    use crate::source::DataSource;
    use crate::trace::{Trace, TraceStyle};

    fn rect() -> ScreenRect {
        ScreenRect::from_origin_size(0.0, 0.0, 100.0, 100.0)
    }

    fn count(list: &RenderList, pred: impl Fn(&RenderCommand) -> bool) -> usize {
        list.iter().filter(|command| pred(command)).count()
    }

    fn is_marker(command: &RenderCommand) -> bool {
        matches!(command, RenderCommand::Marker { .. })
    }

    #[test]
    fn autoscale_unions_trace_extents() {
        let mut y0 = DataSource::buffered(5);
        let mut y1 = DataSource::buffered(5);
        let mut x = DataSource::buffered(5);
        for (index, (a, b)) in [(-1.0, 0.0), (1.0, 5.0), (0.0, 2.0), (0.5, 3.0), (-0.5, 1.0)]
            .into_iter()
            .enumerate()
        {
            x.as_buffer_mut().unwrap().insert(index as f64);
            y0.as_buffer_mut().unwrap().insert(a);
            y1.as_buffer_mut().unwrap().insert(b);
        }
        let traces = TraceSet::new(
            x,
            vec![
                Trace::new("a", y0, TraceStyle::default()),
                Trace::new("b", y1, TraceStyle::default()),
            ],
        );
        let mut plot = PlotView::builder().traces(traces).build().unwrap();
        assert!(plot.autoscale());
        assert_eq!(plot.viewport().x, Range::new(0.0, 4.0));
        assert_eq!(plot.viewport().y, Range::new(-1.0, 5.0));
    }

    #[test]
    fn autoscale_needs_two_points() {
        let mut plot = PlotView::builder().scrolling(10, 1).build().unwrap();
        let before = plot.viewport();
        plot.add_point(3.0, &[42.0]).unwrap();
        assert!(!plot.autoscale());
        assert_eq!(plot.viewport(), before);
    }

    #[test]
    fn scrolling_x_axis_stays_windowed() {
        let mut plot = PlotView::builder().scrolling(4, 1).build().unwrap();
        for step in 0..10 {
            let t = f64::from(step);
            plot.add_point(t, &[t * 10.0]).unwrap();
        }
        plot.autoscale();
        assert_eq!(plot.viewport().x, Range::new(6.0, 9.0));
        assert_eq!(plot.viewport().y, Range::new(0.0, 90.0));
    }

    #[test]
    fn autoscale_y_leaves_x_alone() {
        let mut plot = PlotView::builder().fixed(1).build().unwrap();
        plot.set_data(vec![10.0, 20.0, 30.0], vec![vec![1.0, 4.0, 2.0]])
            .unwrap();
        assert!(plot.autoscale_y());
        assert_eq!(plot.viewport().x, Range::new(0.0, 100.0));
        assert_eq!(plot.viewport().y, Range::new(1.0, 4.0));
    }

    #[test]
    fn constant_signal_is_widened() {
        let mut plot = PlotView::builder().fixed(1).build().unwrap();
        plot.set_data(vec![0.0, 1.0, 2.0], vec![vec![5.0, 5.0, 5.0]])
            .unwrap();
        plot.autoscale();
        let y = plot.viewport().y;
        assert!(y.is_valid());
        assert!(y.contains(5.0));
        assert!(plot.render_pass().is_ok());
    }

    #[test]
    fn explicit_ranges_are_validated() {
        let mut plot = PlotView::builder().build().unwrap();
        assert!(matches!(
            plot.set_x_range(5.0, 1.0),
            Err(PlotError::InvalidRange { .. })
        ));
        assert!(plot.set_y_range(2.0, 2.0).unwrap_err().is_domain());
        plot.set_x_range(-10.0, 10.0).unwrap();
        assert_eq!(plot.viewport().x, Range::new(-10.0, 10.0));
    }

    #[test]
    fn pixel_mapping_uses_axes_box() {
        let mut plot = PlotView::builder()
            .plot_rect(rect())
            .autoscale(false)
            .build()
            .unwrap();
        plot.set_x_range(0.0, 10.0).unwrap();
        plot.set_y_range(0.0, 10.0).unwrap();
        assert_eq!(plot.x_to_pixel(2.5).unwrap(), 25.0);
        assert_eq!(plot.y_to_pixel(2.5).unwrap(), 75.0);
    }

    #[test]
    fn render_pass_emits_lines_then_markers_per_point() {
        let mut plot = PlotView::builder()
            .plot_rect(rect())
            .grid(false)
            .autoscale(false)
            .initial_view(Viewport::new(Range::new(0.0, 10.0), Range::new(0.0, 10.0)))
            .fixed(1)
            .build()
            .unwrap();
        plot.set_data(vec![0.0, 5.0, 10.0], vec![vec![0.0, 10.0, 0.0]])
            .unwrap();
        let list = plot.render_pass().unwrap();
        let trace: Vec<&RenderCommand> = list
            .iter()
            .filter(|command| {
                matches!(
                    command,
                    RenderCommand::Marker { .. } | RenderCommand::Line { .. }
                )
            })
            .collect();
        assert_eq!(trace.len(), 5);
        assert_eq!(
            trace[0],
            &RenderCommand::Marker {
                center: ScreenPoint::new(0.0, 100.0),
                radius: 3.0,
                color: Color::YELLOW,
            }
        );
        assert!(matches!(
            trace[1],
            RenderCommand::Line { start, end, .. }
                if *start == ScreenPoint::new(0.0, 100.0) && *end == ScreenPoint::new(50.0, 0.0)
        ));
    }

    #[test]
    fn mismatched_lengths_truncate_silently() {
        let traces = TraceSet::new(
            DataSource::from(vec![0.0, 1.0, 2.0, 3.0]),
            vec![Trace::new(
                "short",
                DataSource::from(vec![1.0, 2.0]),
                TraceStyle {
                    lines: false,
                    ..TraceStyle::default()
                },
            )],
        );
        let mut plot = PlotView::builder().traces(traces).build().unwrap();
        let list = plot.render_pass().unwrap();
        assert_eq!(count(&list, is_marker), 2);
    }

    #[test]
    fn tick_labels_follow_scaler() {
        let mut plot = PlotView::builder()
            .plot_rect(rect())
            .autoscale(false)
            .grid(false)
            .initial_view(Viewport::new(Range::new(-20.0, -10.0), Range::new(0.0, 4.5)))
            .x_axis(AxisConfig::x().with_max_ticks(5))
            .y_axis(AxisConfig::y().with_max_ticks(4))
            .build()
            .unwrap();
        let list = plot.render_pass().unwrap();
        let labels = |wanted: Axis| -> Vec<String> {
            list.iter()
                .filter_map(|command| match command {
                    RenderCommand::TickLabel { axis, text, .. } if *axis == wanted => {
                        Some(text.clone())
                    }
                    _ => None,
                })
                .collect()
        };
        assert_eq!(labels(Axis::X), vec!["-20", "-18", "-16", "-14", "-12", "-10"]);
        assert_eq!(labels(Axis::Y), vec!["0", "2", "4", "6"]);
    }

    #[test]
    fn grid_adds_one_line_per_tick() {
        let build = |grid: bool| {
            PlotView::builder()
                .grid(grid)
                .autoscale(false)
                .build()
                .unwrap()
                .render_pass()
                .unwrap()
        };
        let with_grid = build(true);
        let without_grid = build(false);
        let ticks = count(&with_grid, |c| matches!(c, RenderCommand::TickLabel { .. }));
        let lines = |list: &RenderList| count(list, |c| matches!(c, RenderCommand::Line { .. }));
        assert_eq!(lines(&with_grid) - lines(&without_grid), ticks);
    }

    #[test]
    fn frame_comes_first() {
        let mut plot = PlotView::builder().title("Scroll Me").build().unwrap();
        let list = plot.render_pass().unwrap();
        assert!(matches!(list.commands()[0], RenderCommand::Rect { .. }));
        assert!(matches!(
            &list.commands()[1],
            RenderCommand::Text { text, .. } if text == "Scroll Me"
        ));
    }

    #[test]
    fn drifted_tick_near_zero_is_labeled_zero() {
        let axis = AxisConfig::y();
        assert_eq!(tick_label(&axis, 5.551115123125783e-17, 0.1), "0");
        assert_eq!(tick_label(&axis, 0.30000000000000004, 0.1), "0.3");
    }

    #[test]
    fn failed_render_leaves_both_scalers_untouched() {
        let mut plot = PlotView::builder().autoscale(false).build().unwrap();
        let x_before = plot.x_scaler.clone();
        let y_before = plot.y_scaler.clone();
        plot.set_x_range(0.0, 10.0).unwrap();
        plot.set_y_range(-1.0e308, 1.0e308).unwrap();

        assert!(plot.render_pass().unwrap_err().is_domain());
        assert_eq!(plot.x_scaler, x_before);
        assert_eq!(plot.y_scaler, y_before);

        plot.set_y_range(-1.0, 1.0).unwrap();
        plot.render_pass().unwrap();
        assert_eq!(plot.x_scaler.max(), 10.0);
    }

    #[test]
    fn builder_rejects_degenerate_initial_view() {
        let err = PlotView::builder()
            .initial_view(Viewport::new(Range::new(1.0, 1.0), Range::new(0.0, 1.0)))
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            PlotError::Domain(DomainError::ZeroSpan { .. })
        ));
    }

    #[test]
    fn builder_applies_config_styles() {
        let plot = PlotView::builder()
            .palette(Palette::new(vec![Color::RED, Color::GREEN]))
            .scrolling(8, 3)
            .build()
            .unwrap();
        let colors: Vec<Color> = plot
            .traces()
            .traces()
            .iter()
            .map(|trace| trace.style().color)
            .collect();
        assert_eq!(colors, vec![Color::RED, Color::GREEN, Color::RED]);
    }
}
