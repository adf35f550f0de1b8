// File: crates/cylinder-core/src/bar.rs
// Summary: Pseudo-3D bar chart of cylinders standing on a shaded floor; bars rise while animating.
//
//       _
//      (_)      _
//      | |  _  (_)
//      | |_(_)_| |
//     /|_| |_| |_|\
//    /_____________\

use std::f64::consts::PI;

use tracing::warn;

use crate::chart::{apply_shadow, Chart, ChartKind};
use crate::color::Color;
use crate::config::ChartConfig;
use crate::data::ChartData;
use crate::geometry::{clamp, Point, Rect};
use crate::surface::{LinearGradient, RadialGradient, Surface};
use crate::types::{DEFAULT_BAR_DISTANCE, DEFAULT_SCALE};

/// Horizontal inset of the bars from the chart edges (also the floor's perspective inset).
pub const X_OFF: f64 = 10.0;
/// Gap between the bar bottoms and the floor's front edge.
pub const FLOOR_DIST: f64 = 2.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bar {
    /// Left edge of the cylinder.
    pub x: f64,
    /// Filled fraction of the bar area height, 0..=progress.
    pub size: f64,
    pub color: Color,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BarLayout {
    pub bar_width: f64,
    /// Area the bars stand in.
    pub area: Rect,
    /// Bounding box of the floor trapezoid.
    pub floor: Rect,
    pub bars: Vec<Bar>,
}

#[derive(Clone, Debug)]
pub struct BarChart {
    data: ChartData,
    /// Space between two bars.
    pub bar_distance: f64,
    /// Vertical squash of the perspective (3D look).
    pub scale: f64,
}

impl Default for BarChart {
    fn default() -> Self {
        Self { data: ChartData::new(), bar_distance: DEFAULT_BAR_DISTANCE, scale: DEFAULT_SCALE }
    }
}

impl BarChart {
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

    /// Geometry of one frame. Bar sizes are the first values normalized by
    /// `max_first_value`, capped at `progress` so bars rise during an animation.
    pub fn layout(&self, rect: Rect, progress: f64) -> BarLayout {
        let n = self.data.len();
        let bar_width = if n == 0 {
            0.0
        } else {
            ((rect.w - 2.0 * X_OFF + self.bar_distance) / n as f64 - self.bar_distance).max(0.0)
        };
        let floor_h = bar_width * self.scale + FLOOR_DIST * 2.0;

        let area = Rect::from_xywh(rect.x + X_OFF, rect.y, rect.w - 2.0 * X_OFF, rect.h - (FLOOR_DIST + 1.0));
        let floor = Rect::from_xywh(
            area.x - X_OFF,
            area.bottom() - floor_h + FLOOR_DIST + 1.0,
            area.w + 2.0 * X_OFF,
            floor_h,
        );

        let progress = clamp(progress, 0.0, 1.0);
        let max_first = self.data.max_first_value();
        let bars = self
            .data
            .series()
            .enumerate()
            .map(|(i, s)| {
                let size = match s.first_value() {
                    Some(v) if max_first != 0.0 => clamp(v / max_first, 0.0, progress),
                    _ => 0.0,
                };
                Bar { x: area.x + (bar_width + self.bar_distance) * i as f64, size, color: s.color() }
            })
            .collect();

        BarLayout { bar_width, area, floor, bars }
    }

    /// The surface the bars stand on.
    fn draw_floor(&self, surface: &mut dyn Surface, floor: Rect) {
        let Rect { x, y, w, h } = floor;
        let mut gradient = LinearGradient::new(Point::new(x - X_OFF, y), Point::new(x + w / 2.0, y + h));
        for (offset, color) in self.data.config().theme.floor_stops {
            gradient = gradient.stop(offset, color);
        }

        surface.save();
        surface.begin_path();
        surface.move_to(Point::new(x, y + h));
        surface.line_to(Point::new(x + w, y + h));
        surface.line_to(Point::new(x + w - X_OFF, y));
        surface.line_to(Point::new(x + X_OFF, y));
        surface.close_path();
        surface.set_fill_style(gradient.into());
        surface.fill();
        surface.stroke();
        surface.restore();
    }

    /// One cylinder in the box `(x, y, w, h)`, filled to `size` (0..=1) of the height.
    fn draw_bar(&self, surface: &mut dyn Surface, x: f64, y: f64, w: f64, h: f64, size: f64, color: Color) {
        let highlight = self.data.config().theme.highlight;
        let r = w / 2.0;
        let h = (h / self.scale - 2.0 * r).max(0.0);
        let y = y / self.scale + r;
        let top = h - h * size;

        surface.save();

        // tube
        let body = LinearGradient::new(Point::new(x - r, y), Point::new(x + r, y))
            .stop(0.3, color)
            .stop(0.43, highlight)
            .stop(1.0, color);
        surface.set_fill_style(body.into());
        surface.scale(1.0, self.scale);
        surface.begin_path();
        surface.move_to(Point::new(x, y + top));
        surface.arc(Point::new(x + r, y + h), r, PI, 2.0 * PI, true);
        surface.line_to(Point::new(x + w, y + top));
        surface.fill();
        surface.stroke();

        // lid
        let lid = RadialGradient::new(Point::new(x + 0.1 * r, y + top + 0.2 * r), r * 0.03, Point::new(x + r / 3.0, y + top), r * 2.0)
            .stop(0.0, highlight)
            .stop(1.0, color);
        surface.set_fill_style(lid.into());
        surface.begin_path();
        surface.arc(Point::new(x + r, y + top), r, 0.0, 2.0 * PI, false);
        surface.fill();
        surface.stroke();

        surface.restore();
    }
}

impl Chart for BarChart {
    fn kind(&self) -> ChartKind { ChartKind::Bar }
    fn data(&self) -> &ChartData { &self.data }
    fn data_mut(&mut self) -> &mut ChartData { &mut self.data }

    fn draw_frame(&self, surface: &mut dyn Surface, rect: Rect, progress: f64) {
        let layout = self.layout(rect, progress);

        surface.clear_rect(self.clear_region(rect));
        surface.save();
        surface.set_stroke_style(self.data.config().theme.outline.into());
        apply_shadow(surface, &self.data);

        self.draw_floor(surface, layout.floor);

        if !self.data.is_empty() {
            if layout.bar_width <= 0.0 || self.scale <= 0.0 || !self.scale.is_finite() {
                warn!(bars = self.data.len(), width = rect.w, scale = self.scale, "bar: no room for bars, drawing floor only");
            } else {
                for bar in &layout.bars {
                    self.draw_bar(surface, bar.x, layout.area.y, layout.bar_width, layout.area.h, bar.size, bar.color);
                }
            }
        }

        surface.restore();
    }
}
