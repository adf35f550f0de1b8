// File: crates/cylinder-core/src/chart.rs
// Summary: Render/animate contract shared by the pie, bar and line charts, plus a tagged variant.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;
use std::time::Duration;

use crate::animation::{Animation, CancelHandle, ProgressClock, Scheduler};
use crate::bar::BarChart;
use crate::data::ChartData;
use crate::error::{ChartError, Result};
use crate::geometry::Rect;
use crate::line::LineChart;
use crate::pie::PieChart;
use crate::surface::{Shadow, Surface};
use crate::types::{SHADOW_BLUR, SHADOW_OFFSET, SHADOW_REACH, STROKE_REACH};

/// A chart variant: owns a data model and knows how to draw it.
///
/// `render` and the final frame of an animation are identical. Rendering never
/// mutates the data model and never fails; degenerate data draws only chrome.
pub trait Chart: Clone {
    fn kind(&self) -> ChartKind;
    fn data(&self) -> &ChartData;
    fn data_mut(&mut self) -> &mut ChartData;

    /// Draw one complete frame into `rect` with the data layer revealed up to
    /// `progress` (0..=1). Every frame first clears `clear_region(rect)`.
    fn draw_frame(&self, surface: &mut dyn Surface, rect: Rect, progress: f64);

    /// Clock used by `animation`; variants without a progressive reveal return
    /// `ProgressClock::instant()`.
    fn progress_clock(&self, duration: Duration) -> ProgressClock {
        ProgressClock::new(duration, self.data().fps())
    }

    /// Region every frame clears before drawing: `rect` grown by how far
    /// outlines and the drop shadow reach past it.
    fn clear_region(&self, rect: Rect) -> Rect {
        rect.outset(ink_reach(self.data()))
    }

    /// Draw a single static frame.
    fn render(&self, surface: &mut dyn Surface, rect: Rect) {
        self.draw_frame(surface, rect, 1.0);
    }

    /// Start a progressive-reveal session over a snapshot of this chart.
    fn animation(&self, rect: Rect, duration: Duration) -> Animation<Self>
    where
        Self: Sized,
    {
        Animation::new(self.clone(), rect, self.progress_clock(duration))
    }

    /// Draw the first frame now, schedule the rest on `scheduler`.
    fn animate<S>(
        &self,
        surface: Rc<RefCell<S>>,
        rect: Rect,
        duration: Duration,
        scheduler: Rc<dyn Scheduler>,
    ) -> CancelHandle
    where
        Self: Sized + 'static,
        S: Surface + 'static,
    {
        self.animation(rect, duration).spawn(surface, scheduler)
    }

    fn add_series(&mut self, description: impl Into<String>, values: Vec<f64>) -> Result<()> {
        self.data_mut().add_series(description, values)
    }

    fn add_series_colored(&mut self, description: impl Into<String>, values: Vec<f64>, color: &str) -> Result<()> {
        self.data_mut().add_series_colored(description, values, color)
    }

    fn add_bar(&mut self, description: impl Into<String>, value: f64) -> Result<()> {
        self.data_mut().add_bar(description, value)
    }

    fn add_bar_colored(&mut self, description: impl Into<String>, value: f64, color: &str) -> Result<()> {
        self.data_mut().add_bar_colored(description, value, color)
    }
}

/// Distance ink may land outside the chart rectangle.
pub(crate) fn ink_reach(data: &ChartData) -> f64 {
    if data.use_blur() { STROKE_REACH + SHADOW_REACH } else { STROKE_REACH }
}

/// Install the theme's drop shadow when blur is enabled.
pub(crate) fn apply_shadow(surface: &mut dyn Surface, data: &ChartData) {
    if data.use_blur() {
        surface.set_shadow(Some(Shadow {
            offset_x: SHADOW_OFFSET.0,
            offset_y: SHADOW_OFFSET.1,
            blur: SHADOW_BLUR,
            color: data.config().theme.shadow,
        }));
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChartKind {
    Pie,
    Bar,
    Line,
}

impl ChartKind {
    pub const ALL: [ChartKind; 3] = [ChartKind::Pie, ChartKind::Bar, ChartKind::Line];

    pub fn name(&self) -> &'static str {
        match self {
            ChartKind::Pie => "pie",
            ChartKind::Bar => "bar",
            ChartKind::Line => "line",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ChartKind {
    type Err = ChartError;
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pie" => Ok(ChartKind::Pie),
            "bar" => Ok(ChartKind::Bar),
            "line" | "graph" => Ok(ChartKind::Line),
            _ => Err(ChartError::UnknownKind(s.to_string())),
        }
    }
}

/// Any chart variant, chosen at runtime.
#[derive(Clone, Debug)]
pub enum AnyChart {
    Pie(PieChart),
    Bar(BarChart),
    Line(LineChart),
}

impl AnyChart {
    /// Empty chart of the given kind.
    pub fn new(kind: ChartKind) -> Self {
        Self::from_data(kind, &ChartData::new())
    }

    /// Chart of the given kind over a copy of `data`.
    pub fn from_data(kind: ChartKind, data: &ChartData) -> Self {
        match kind {
            ChartKind::Pie => AnyChart::Pie(PieChart::from_data(data)),
            ChartKind::Bar => AnyChart::Bar(BarChart::from_data(data)),
            ChartKind::Line => AnyChart::Line(LineChart::from_data(data)),
        }
    }

    /// Same data, different variant.
    pub fn convert(&self, kind: ChartKind) -> Self {
        Self::from_data(kind, self.data())
    }
}

macro_rules! delegate {
    ($self:ident, $c:ident => $e:expr) => {
        match $self {
            AnyChart::Pie($c) => $e,
            AnyChart::Bar($c) => $e,
            AnyChart::Line($c) => $e,
        }
    };
}

impl Chart for AnyChart {
    fn kind(&self) -> ChartKind { delegate!(self, c => c.kind()) }
    fn data(&self) -> &ChartData { delegate!(self, c => c.data()) }
    fn data_mut(&mut self) -> &mut ChartData { delegate!(self, c => c.data_mut()) }
    fn draw_frame(&self, surface: &mut dyn Surface, rect: Rect, progress: f64) {
        delegate!(self, c => c.draw_frame(surface, rect, progress))
    }
    fn progress_clock(&self, duration: Duration) -> ProgressClock {
        delegate!(self, c => c.progress_clock(duration))
    }
}

impl From<PieChart> for AnyChart {
    fn from(c: PieChart) -> Self { AnyChart::Pie(c) }
}
impl From<BarChart> for AnyChart {
    fn from(c: BarChart) -> Self { AnyChart::Bar(c) }
}
impl From<LineChart> for AnyChart {
    fn from(c: LineChart) -> Self { AnyChart::Line(c) }
}
