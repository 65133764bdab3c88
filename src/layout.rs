//! Placement of the axes box and text sizes inside a plot widget.

use crate::geom::ScreenRect;

/// Pixel layout of one plot widget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotLayout {
    widget: ScreenRect,
    plot: ScreenRect,
    title_size: f32,
    label_size: f32,
    tick_label_size: f32,
}

impl PlotLayout {
    /// Derive the axes box and text sizes from the widget rectangle.
    ///
    /// The axes box starts 10% of the width from the left and 10% of the
    /// height from the top, spans 96% of the remaining width, and leaves a
    /// bottom margin as tall as the left margin is wide for tick labels.
    pub fn from_widget(widget: ScreenRect) -> Self {
        let width = widget.width();
        let height = widget.height();
        let left = (width * 10.0 / 100.0).floor();
        let top = (height * 10.0 / 100.0).floor();
        let plot_width = ((width - left) * 96.0 / 100.0).floor();
        let plot_height = (height - top - left).max(0.0);
        Self {
            widget,
            plot: ScreenRect::from_origin_size(
                widget.min.x + left,
                widget.min.y + top,
                plot_width,
                plot_height,
            ),
            title_size: (height * 7.0 / 100.0).floor(),
            label_size: (height * 5.0 / 100.0).floor(),
            tick_label_size: (height * 4.0 / 100.0).floor(),
        }
    }

    /// Use an explicit axes box; the widget is the same rectangle.
    pub fn from_plot_rect(plot: ScreenRect) -> Self {
        let height = plot.height();
        Self {
            widget: plot,
            plot,
            title_size: (height * 7.0 / 100.0).floor(),
            label_size: (height * 5.0 / 100.0).floor(),
            tick_label_size: (height * 4.0 / 100.0).floor(),
        }
    }

    /// Whole widget rectangle.
    pub fn widget(&self) -> ScreenRect {
        self.widget
    }

    /// Axes box that data is mapped into.
    pub fn plot(&self) -> ScreenRect {
        self.plot
    }

    /// Title font size.
    pub fn title_size(&self) -> f32 {
        self.title_size
    }

    /// Axis label font size.
    pub fn label_size(&self) -> f32 {
        self.label_size
    }

    /// Tick label font size.
    pub fn tick_label_size(&self) -> f32 {
        self.tick_label_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widget_layout_matches_margins() {
        let layout = PlotLayout::from_widget(ScreenRect::from_origin_size(0.0, 0.0, 400.0, 300.0));
        let plot = layout.plot();
        assert_eq!(plot.min.x, 40.0);
        assert_eq!(plot.min.y, 30.0);
        assert_eq!(plot.width(), 345.0);
        assert_eq!(plot.height(), 230.0);
        assert_eq!(layout.title_size(), 21.0);
        assert_eq!(layout.label_size(), 15.0);
        assert_eq!(layout.tick_label_size(), 12.0);
    }

    #[test]
    fn widget_offset_moves_axes_box() {
        let layout =
            PlotLayout::from_widget(ScreenRect::from_origin_size(100.0, 50.0, 400.0, 300.0));
        assert_eq!(layout.plot().min.x, 140.0);
        assert_eq!(layout.plot().min.y, 80.0);
    }
}
