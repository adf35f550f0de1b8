// File: crates/cylinder-core/src/line.rs
// Summary: Line graph of every series over a background grid; animation reveals it left to right.
//
//    |       __/___/
//    |  ____/ /
//    | /_____/_
//    |//    /  \
//    |/____/____\____
//
// All series are normalized against the single global `max_value`, so their
// heights are comparable with each other.

use tracing::debug;

use crate::chart::{apply_shadow, Chart, ChartKind};
use crate::config::ChartConfig;
use crate::data::ChartData;
use crate::geometry::{clamp, Point, Rect};
use crate::grid::{horizontal_offsets, vertical_offsets};
use crate::surface::{LineCap, Surface};
use crate::types::DEFAULT_GRID_LINES;

pub const ARROW_WIDTH: f64 = 4.0;
pub const ARROW_HEIGHT: f64 = 8.0;
const GRID_LINE_WIDTH: f64 = 0.5;
const PLOT_LINE_WIDTH: f64 = 2.0;

#[derive(Clone, Debug)]
pub struct LineChart {
    data: ChartData,
    /// Number of horizontal background grid lines.
    pub horizontal_lines: usize,
    /// Number of vertical background grid lines.
    pub vertical_lines: usize,
}

impl Default for LineChart {
    fn default() -> Self {
        Self { data: ChartData::new(), horizontal_lines: DEFAULT_GRID_LINES, vertical_lines: DEFAULT_GRID_LINES }
    }
}

impl LineChart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ChartConfig) -> Self {
        Self { data: ChartData::with_config(config), ..Self::default() }
    }

    pub fn from_data(data: &ChartData) -> Self {
        let mut chart = Self::default();
        data.copy_into(&mut chart.data);
        chart
    }

    pub fn from_chart(other: &impl Chart) -> Self {
        Self::from_data(other.data())
    }

    /// Polyline vertices of every series inside `plot`, each starting at the
    /// bottom-left origin. Empty when the data cannot be normalized
    /// (`max_value == 0` or fewer than two points on the x axis).
    pub fn polylines(&self, plot: Rect) -> Vec<Vec<Point>> {
        let max_value = self.data.max_value();
        let max_len = self.data.max_len();
        if max_value == 0.0 || max_len <= 1 {
            return Vec::new();
        }
        let point_dist = plot.w / (max_len - 1) as f64;
        self.data
            .series()
            .map(|s| {
                std::iter::once(Point::new(plot.x, plot.bottom()))
                    .chain(s.values().iter().enumerate().map(|(a, v)| {
                        let val = v / max_value;
                        Point::new(plot.x + point_dist * a as f64, plot.y + (1.0 - val) * plot.h)
                    }))
                    .collect()
            })
            .collect()
    }

    fn draw_grid(&self, surface: &mut dyn Surface, plot: Rect) {
        surface.save();
        surface.set_line_width(GRID_LINE_WIDTH);
        surface.set_stroke_style(self.data.config().theme.grid.into());
        surface.begin_path();
        for dy in horizontal_offsets(plot.h, self.horizontal_lines) {
            surface.move_to(Point::new(plot.x, plot.y + dy));
            surface.line_to(Point::new(plot.right(), plot.y + dy));
        }
        for dx in vertical_offsets(plot.w, self.vertical_lines) {
            surface.move_to(Point::new(plot.x + dx, plot.y));
            surface.line_to(Point::new(plot.x + dx, plot.bottom()));
        }
        surface.stroke();
        surface.restore();
    }

    /// Axes with arrow heads: y pointing up, x pointing right.
    fn draw_axes(&self, surface: &mut dyn Surface, rect: Rect) {
        let Rect { x, y, w, h } = rect;
        let (aw, ah) = (ARROW_WIDTH, ARROW_HEIGHT);

        surface.begin_path();
        surface.move_to(Point::new(x, y + ah));
        surface.line_to(Point::new(x + aw, y));
        surface.line_to(Point::new(x + 2.0 * aw, y + ah));
        surface.move_to(Point::new(x + aw, y));
        surface.line_to(Point::new(x + aw, y + h - aw));
        surface.line_to(Point::new(x + w, y + h - aw));
        surface.move_to(Point::new(x + w - ah, y + h - 2.0 * aw));
        surface.line_to(Point::new(x + w, y + h - aw));
        surface.line_to(Point::new(x + w - ah, y + h));
        surface.stroke();
    }

    /// Plot all series, visible up to `progress` of the width.
    ///
    /// The full polylines are always built and stroked; the reveal is a clip.
    fn plot_values(&self, surface: &mut dyn Surface, plot: Rect, progress: f64) {
        let lines = self.polylines(plot);
        if lines.is_empty() {
            debug!(max_value = self.data.max_value(), max_len = self.data.max_len(), "line: nothing to plot");
            return;
        }

        let visible = plot.w * clamp(progress, 0.0, 1.0);
        surface.save();
        surface.begin_path();
        surface.move_to(Point::new(plot.x, plot.y));
        surface.line_to(Point::new(plot.x, plot.bottom()));
        surface.line_to(Point::new(plot.x + visible, plot.bottom()));
        surface.line_to(Point::new(plot.x + visible, plot.y));
        surface.close_path();
        surface.clip();

        surface.set_line_width(PLOT_LINE_WIDTH);
        surface.set_line_cap(LineCap::Round);
        for (series, points) in self.data.series().zip(&lines) {
            surface.begin_path();
            surface.set_stroke_style(series.color().into());
            let mut it = points.iter();
            if let Some(&first) = it.next() {
                surface.move_to(first);
            }
            for &p in it {
                surface.line_to(p);
            }
            surface.stroke();
        }
        surface.restore();
    }
}

impl Chart for LineChart {
    fn kind(&self) -> ChartKind { ChartKind::Line }
    fn data(&self) -> &ChartData { &self.data }
    fn data_mut(&mut self) -> &mut ChartData { &mut self.data }

    fn draw_frame(&self, surface: &mut dyn Surface, rect: Rect, progress: f64) {
        let plot = rect.inset(ARROW_WIDTH);

        surface.clear_rect(self.clear_region(rect));
        surface.save();
        surface.set_stroke_style(self.data.config().theme.outline.into());
        apply_shadow(surface, &self.data);

        self.draw_grid(surface, plot);
        self.plot_values(surface, plot, progress);
        self.draw_axes(surface, rect);

        surface.restore();
    }
}
