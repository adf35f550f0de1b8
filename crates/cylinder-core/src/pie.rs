// File: crates/cylinder-core/src/pie.rs
// Summary: Pseudo-3D pie chart using the first value of each series.
//
//     _____
//    /     \
//   |\_____/|
//    \_____/
//
// A pie has no progressive reveal; animating one draws the full frame on the first tick.

use std::f64::consts::PI;
use std::time::Duration;

use tracing::debug;

use crate::animation::ProgressClock;
use crate::chart::{apply_shadow, Chart, ChartKind};
use crate::color::Color;
use crate::config::ChartConfig;
use crate::data::ChartData;
use crate::geometry::{Point, Rect};
use crate::surface::{LinearGradient, RadialGradient, Surface};
use crate::types::{DEFAULT_PIE_HEIGHT, DEFAULT_SCALE};

/// Angular extent of one series' slice.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Slice {
    pub start: f64,
    pub end: f64,
    pub color: Color,
}

impl Slice {
    pub fn sweep(&self) -> f64 { self.end - self.start }
}

#[derive(Clone, Debug)]
pub struct PieChart {
    data: ChartData,
    /// Vertical squash of the perspective (3D look).
    pub scale: f64,
    /// Depth of the cylinder in surface units.
    pub height: f64,
}

impl Default for PieChart {
    fn default() -> Self {
        Self { data: ChartData::new(), scale: DEFAULT_SCALE, height: DEFAULT_PIE_HEIGHT }
    }
}

impl PieChart {
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

    /// Slice angles, one per series in insertion order. Empty when the first
    /// values cannot be normalized.
    ///
    /// Boundaries come from running sums, so the last slice ends exactly at 2π.
    pub fn slices(&self) -> Vec<Slice> {
        let total = self.data.first_values_total();
        if self.data.max_first_value() == 0.0 || total <= 0.0 {
            return Vec::new();
        }
        let mut running = 0.0;
        let mut start = 0.0;
        self.data
            .series()
            .map(|s| {
                running += s.first_value().unwrap_or(0.0);
                let end = running / total * 2.0 * PI;
                let slice = Slice { start, end, color: s.color() };
                start = end;
                slice
            })
            .collect()
    }

    fn draw_slice(&self, surface: &mut dyn Surface, center: Point, r: f64, slice: &Slice) {
        let theme = self.data.config().theme;
        let depth = self.height / self.scale;
        let x = center.x;
        let y = center.y / self.scale;
        let color = slice.color;

        surface.save();
        surface.scale(1.0, self.scale);

        // lid
        let lid = RadialGradient::new(Point::new(x - r, y + r * 0.3), r * 0.01, Point::new(x, y), r * 2.0)
            .stop(0.0, theme.highlight)
            .stop(1.0, color);
        surface.set_fill_style(lid.into());
        surface.begin_path();
        surface.arc(Point::new(x, y), r, slice.start, slice.end, false);
        surface.line_to(Point::new(x, y));
        surface.close_path();
        surface.fill();
        surface.stroke();

        // the side wall is only visible for the front half (0..π)
        if slice.start <= PI {
            let end = slice.end.min(PI);
            let tube = LinearGradient::new(Point::new(x - 1.2 * r, y), Point::new(x + r, y))
                .stop(0.0, color)
                .stop(0.1, theme.highlight)
                .stop(0.6, color);
            surface.set_fill_style(tube.into());
            surface.begin_path();
            surface.arc(Point::new(x, y + depth), r, slice.start, end, false);
            surface.arc(Point::new(x, y), r, end, slice.start, true);
            surface.close_path();
            surface.fill();
            surface.stroke();
        }

        surface.restore();
    }
}

impl Chart for PieChart {
    fn kind(&self) -> ChartKind { ChartKind::Pie }
    fn data(&self) -> &ChartData { &self.data }
    fn data_mut(&mut self) -> &mut ChartData { &mut self.data }

    fn draw_frame(&self, surface: &mut dyn Surface, rect: Rect, _progress: f64) {
        surface.clear_rect(self.clear_region(rect));

        let slices = self.slices();
        if slices.is_empty() {
            debug!(series = self.data.len(), "pie: nothing to normalize, skipping data layer");
            return;
        }
        if self.scale <= 0.0 || !self.scale.is_finite() {
            debug!(scale = self.scale, "pie: degenerate scale, skipping data layer");
            return;
        }

        let mid = rect.center();
        let center = Point::new(mid.x, mid.y - self.height / 2.0);
        let r = (rect.w / 2.0).max(0.0);

        surface.save();
        surface.set_stroke_style(self.data.config().theme.outline.into());
        apply_shadow(surface, &self.data);
        for slice in &slices {
            self.draw_slice(surface, center, r, slice);
        }
        surface.restore();
    }

    fn progress_clock(&self, _duration: Duration) -> ProgressClock {
        ProgressClock::instant()
    }
}
