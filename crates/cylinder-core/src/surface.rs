// File: crates/cylinder-core/src/surface.rs
// Summary: Drawing surface contract consumed by the renderers (canvas-style path API).
// Notes:
// - Angles are radians, measured clockwise from the positive x axis (y grows downward).
// - `arc` connects the current point to the arc start with a straight segment,
//   like an HTML canvas context.
// - `save`/`restore` cover styles, line settings, shadow, transform and clip.

use crate::color::Color;
use crate::geometry::{Point, Rect};

/// Gradient color stop; `offset` is in 0..=1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    pub offset: f64,
    pub color: Color,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LinearGradient {
    pub start: Point,
    pub end: Point,
    pub stops: Vec<GradientStop>,
}

impl LinearGradient {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end, stops: Vec::new() }
    }

    /// Add a stop. Offsets are clamped to 0..=1; stops must be added in order.
    pub fn stop(mut self, offset: f64, color: Color) -> Self {
        self.stops.push(GradientStop { offset: offset.clamp(0.0, 1.0), color });
        self
    }
}

/// Two-circle (conical) radial gradient.
#[derive(Clone, Debug, PartialEq)]
pub struct RadialGradient {
    pub start: Point,
    pub start_radius: f64,
    pub end: Point,
    pub end_radius: f64,
    pub stops: Vec<GradientStop>,
}

impl RadialGradient {
    pub fn new(start: Point, start_radius: f64, end: Point, end_radius: f64) -> Self {
        Self { start, start_radius, end, end_radius, stops: Vec::new() }
    }

    pub fn stop(mut self, offset: f64, color: Color) -> Self {
        self.stops.push(GradientStop { offset: offset.clamp(0.0, 1.0), color });
        self
    }
}

/// Fill or stroke style.
#[derive(Clone, Debug, PartialEq)]
pub enum Paint {
    Solid(Color),
    Linear(LinearGradient),
    Radial(RadialGradient),
}

impl From<Color> for Paint {
    fn from(c: Color) -> Self { Paint::Solid(c) }
}
impl From<LinearGradient> for Paint {
    fn from(g: LinearGradient) -> Self { Paint::Linear(g) }
}
impl From<RadialGradient> for Paint {
    fn from(g: RadialGradient) -> Self { Paint::Radial(g) }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LineCap {
    #[default]
    Butt,
    Round,
    Square,
}

/// Drop shadow drawn under every fill and stroke while set.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shadow {
    pub offset_x: f64,
    pub offset_y: f64,
    pub blur: f64,
    pub color: Color,
}

/// Minimal 2D drawing capability the chart renderers need.
pub trait Surface {
    fn save(&mut self);
    fn restore(&mut self);

    fn set_stroke_style(&mut self, paint: Paint);
    fn set_fill_style(&mut self, paint: Paint);
    fn set_line_width(&mut self, width: f64);
    fn set_line_cap(&mut self, cap: LineCap);
    fn set_shadow(&mut self, shadow: Option<Shadow>);

    fn begin_path(&mut self);
    fn close_path(&mut self);
    fn move_to(&mut self, p: Point);
    fn line_to(&mut self, p: Point);
    fn arc(&mut self, center: Point, radius: f64, start: f64, end: f64, anticlockwise: bool);

    fn fill(&mut self);
    fn stroke(&mut self);
    /// Intersect the clip region with the current path.
    fn clip(&mut self);

    /// Post-multiply the current transform by a scale.
    fn scale(&mut self, sx: f64, sy: f64);
    /// Reset `rect` (in current user space) to transparent.
    fn clear_rect(&mut self, rect: Rect);
}
