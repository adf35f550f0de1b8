// File: crates/cylinder-core/src/types.rs
// Summary: Shared constants (surface size, animation and styling defaults).

use crate::geometry::Rect;

/// Default surface width in pixels.
pub const WIDTH: i32 = 300;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 300;
/// Margin hosts leave between the surface edge and the chart rectangle.
pub const FRAME_MARGIN: f64 = 3.0;

/// Default animation frame rate.
pub const DEFAULT_FPS: u32 = 25;
/// Default vertical squash of the pseudo-3D charts.
pub const DEFAULT_SCALE: f64 = 0.4;
/// Default depth of the pie cylinder, in surface units.
pub const DEFAULT_PIE_HEIGHT: f64 = 50.0;
/// Default gap between two bars.
pub const DEFAULT_BAR_DISTANCE: f64 = 10.0;
/// Default number of background grid lines in each direction.
pub const DEFAULT_GRID_LINES: usize = 10;

/// Drop shadow used when blur is enabled.
pub const SHADOW_OFFSET: (f64, f64) = (1.0, 1.0);
pub const SHADOW_BLUR: f64 = 4.0;

/// How far a 1px outline plus its anti-aliasing reaches past the geometry.
pub const STROKE_REACH: f64 = 1.0;
/// How far the blurred shadow reaches past the geometry: offset plus three
/// gaussian sigmas, with sigma = blur / 2.
pub const SHADOW_REACH: f64 = 1.0 + 1.5 * SHADOW_BLUR;

/// Chart rectangle for a `width` x `height` surface, inset by `FRAME_MARGIN` on every side.
pub fn frame_rect(width: i32, height: i32) -> Rect {
    let w = (width as f64 - 2.0 * FRAME_MARGIN).max(0.0);
    let h = (height as f64 - 2.0 * FRAME_MARGIN).max(0.0);
    Rect::from_xywh(FRAME_MARGIN, FRAME_MARGIN, w, h)
}
