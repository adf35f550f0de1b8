// File: crates/cylinder-core/src/recording.rs
// Summary: In-memory surface that records every drawing call; used for headless inspection and tests.

use crate::geometry::{Point, Rect};
use crate::surface::{LineCap, Paint, Shadow, Surface};

#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    Save,
    Restore,
    StrokeStyle(Paint),
    FillStyle(Paint),
    LineWidth(f64),
    LineCap(LineCap),
    Shadow(Option<Shadow>),
    BeginPath,
    ClosePath,
    MoveTo(Point),
    LineTo(Point),
    Arc { center: Point, radius: f64, start: f64, end: f64, anticlockwise: bool },
    Fill,
    Stroke,
    Clip,
    Scale(f64, f64),
    ClearRect(Rect),
}

impl Op {
    /// True when every coordinate, length and angle carried by the op is finite.
    pub fn is_finite(&self) -> bool {
        match self {
            Op::MoveTo(p) | Op::LineTo(p) => p.is_finite(),
            Op::Arc { center, radius, start, end, .. } => {
                center.is_finite() && radius.is_finite() && start.is_finite() && end.is_finite()
            }
            Op::LineWidth(w) => w.is_finite(),
            Op::Scale(sx, sy) => sx.is_finite() && sy.is_finite(),
            Op::ClearRect(r) => r.is_finite(),
            Op::FillStyle(p) | Op::StrokeStyle(p) => paint_is_finite(p),
            Op::Shadow(Some(s)) => s.offset_x.is_finite() && s.offset_y.is_finite() && s.blur.is_finite(),
            _ => true,
        }
    }
}

fn paint_is_finite(p: &Paint) -> bool {
    match p {
        Paint::Solid(_) => true,
        Paint::Linear(g) => g.start.is_finite() && g.end.is_finite(),
        Paint::Radial(g) => {
            g.start.is_finite() && g.end.is_finite() && g.start_radius.is_finite() && g.end_radius.is_finite()
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    ops: Vec<Op>,
    depth: usize,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[Op] { &self.ops }

    /// Drop recorded ops (keeps the save depth).
    pub fn take(&mut self) -> Vec<Op> { std::mem::take(&mut self.ops) }

    /// Current `save` nesting; balanced drawing code leaves this at 0.
    pub fn depth(&self) -> usize { self.depth }

    pub fn count(&self, pred: impl Fn(&Op) -> bool) -> usize {
        self.ops.iter().filter(|op| pred(op)).count()
    }

    pub fn strokes(&self) -> usize { self.count(|op| matches!(op, Op::Stroke)) }
    pub fn fills(&self) -> usize { self.count(|op| matches!(op, Op::Fill)) }
    pub fn clears(&self) -> usize { self.count(|op| matches!(op, Op::ClearRect(_))) }

    pub fn all_finite(&self) -> bool { self.ops.iter().all(Op::is_finite) }

    fn push(&mut self, op: Op) { self.ops.push(op); }
}

impl Surface for RecordingSurface {
    fn save(&mut self) {
        self.depth += 1;
        self.push(Op::Save);
    }
    fn restore(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.push(Op::Restore);
    }
    fn set_stroke_style(&mut self, paint: Paint) { self.push(Op::StrokeStyle(paint)); }
    fn set_fill_style(&mut self, paint: Paint) { self.push(Op::FillStyle(paint)); }
    fn set_line_width(&mut self, width: f64) { self.push(Op::LineWidth(width)); }
    fn set_line_cap(&mut self, cap: LineCap) { self.push(Op::LineCap(cap)); }
    fn set_shadow(&mut self, shadow: Option<Shadow>) { self.push(Op::Shadow(shadow)); }
    fn begin_path(&mut self) { self.push(Op::BeginPath); }
    fn close_path(&mut self) { self.push(Op::ClosePath); }
    fn move_to(&mut self, p: Point) { self.push(Op::MoveTo(p)); }
    fn line_to(&mut self, p: Point) { self.push(Op::LineTo(p)); }
    fn arc(&mut self, center: Point, radius: f64, start: f64, end: f64, anticlockwise: bool) {
        self.push(Op::Arc { center, radius, start, end, anticlockwise });
    }
    fn fill(&mut self) { self.push(Op::Fill); }
    fn stroke(&mut self) { self.push(Op::Stroke); }
    fn clip(&mut self) { self.push(Op::Clip); }
    fn scale(&mut self, sx: f64, sy: f64) { self.push(Op::Scale(sx, sy)); }
    fn clear_rect(&mut self, rect: Rect) { self.push(Op::ClearRect(rect)); }
}
