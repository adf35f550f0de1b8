// File: crates/cylinder-core/src/geometry.rs
// Summary: Lightweight geometry helpers for chart layout math.

/// Point in surface units (before any `Surface::scale` transform).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Chart bounding rectangle: `x`/`y` is the top-left corner, `w`/`h` the extent.
///
/// ```text
///     y
///   x +------------
///     |            |
///     |            | h
///     |            |
///      ------------
///            w
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub const fn from_xywh(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }
    pub fn right(&self) -> f64 { self.x + self.w }
    pub fn bottom(&self) -> f64 { self.y + self.h }
    pub fn center(&self) -> Point { Point::new(self.x + self.w / 2.0, self.y + self.h / 2.0) }

    /// Shrink by `d` on every side.
    pub fn inset(&self, d: f64) -> Self {
        Self { x: self.x + d, y: self.y + d, w: self.w - 2.0 * d, h: self.h - 2.0 * d }
    }

    /// Grow by `d` on every side.
    pub fn outset(&self, d: f64) -> Self {
        self.inset(-d)
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.bottom()
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.w.is_finite() && self.h.is_finite()
    }
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}
