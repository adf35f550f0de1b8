// File: crates/cylinder-core/src/lib.rs
// Summary: Core library entry point; exports the data model, surface contract, animation driver and charts.

pub mod animation;
pub mod bar;
pub mod chart;
pub mod color;
pub mod config;
pub mod data;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod line;
pub mod pie;
pub mod recording;
pub mod series;
pub mod surface;
pub mod theme;
pub mod types;

pub use animation::{Animation, CancelHandle, ProgressClock, Scheduler, Tick, TimerQueue};
pub use bar::{BarChart, BarLayout};
pub use chart::{AnyChart, Chart, ChartKind};
pub use color::Color;
pub use config::ChartConfig;
pub use data::ChartData;
pub use error::{ChartError, Result};
pub use geometry::{Point, Rect};
pub use line::LineChart;
pub use pie::{PieChart, Slice};
pub use recording::{Op, RecordingSurface};
pub use series::Series;
pub use surface::{GradientStop, LineCap, LinearGradient, Paint, RadialGradient, Shadow, Surface};
pub use theme::{Palette, Theme};
pub use types::frame_rect;
