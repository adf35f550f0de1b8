// File: crates/cylinder-render-skia/src/lib.rs
// Summary: Skia CPU raster implementation of the cylinder-core `Surface` contract, with PNG encoding.
// Notes:
// - Path building follows HTML canvas rules: `arc` joins the current point to the
//   arc start, `line_to` on an empty path starts a new subpath.
// - Fill/stroke styles, line settings and the shadow live in a state stack that
//   mirrors Skia's own save/restore of transform and clip.

use std::f64::consts::TAU;
use std::path::Path as FsPath;

use anyhow::{Context, Result};
use cylinder_core::{Color, LineCap, Paint, Point, Rect, Shadow, Surface};
use skia_safe as skia;
use tracing::debug;

#[derive(Clone, Debug)]
struct DrawState {
    fill: Paint,
    stroke: Paint,
    line_width: f64,
    line_cap: LineCap,
    shadow: Option<Shadow>,
}

impl Default for DrawState {
    fn default() -> Self {
        Self {
            fill: Paint::Solid(Color::BLACK),
            stroke: Paint::Solid(Color::BLACK),
            line_width: 1.0,
            line_cap: LineCap::Butt,
            shadow: None,
        }
    }
}

pub struct SkiaSurface {
    surface: skia::Surface,
    path: skia::Path,
    state: DrawState,
    stack: Vec<DrawState>,
}

impl SkiaSurface {
    /// Create a transparent CPU raster surface.
    pub fn new(width: i32, height: i32) -> Result<Self> {
        let surface = skia::surfaces::raster_n32_premul((width, height))
            .ok_or_else(|| anyhow::anyhow!("failed to create {width}x{height} raster surface"))?;
        debug!(width, height, "raster surface created");
        Ok(Self { surface, path: skia::Path::new(), state: DrawState::default(), stack: Vec::new() })
    }

    pub fn width(&self) -> i32 { self.surface.width() }
    pub fn height(&self) -> i32 { self.surface.height() }

    /// Paint the whole surface with `color`, ignoring transform and clip.
    pub fn fill_background(&mut self, color: Color) {
        let canvas = self.surface.canvas();
        canvas.save();
        canvas.reset_matrix();
        canvas.clear(to_skia_color(color));
        canvas.restore();
    }

    /// Encode the current pixels as PNG.
    pub fn encode_png(&mut self) -> Result<Vec<u8>> {
        let image = self.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Encode and write the current pixels to `path`, creating parent directories.
    pub fn write_png(&mut self, path: impl AsRef<FsPath>) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.encode_png()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        std::fs::write(path, bytes).with_context(|| format!("writing {}", path.display()))?;
        debug!(path = %path.display(), "png written");
        Ok(())
    }

    fn skia_paint(&self, style: &Paint, stroke: bool) -> skia::Paint {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        match style {
            Paint::Solid(c) => {
                paint.set_color(to_skia_color(*c));
            }
            gradient => match gradient_shader(gradient) {
                Some(shader) => {
                    paint.set_shader(shader);
                }
                None => {
                    paint.set_color(to_skia_color(first_stop_color(gradient)));
                }
            },
        }
        if stroke {
            paint.set_style(skia::paint::Style::Stroke);
            paint.set_stroke_width(self.state.line_width as f32);
            paint.set_stroke_cap(match self.state.line_cap {
                LineCap::Butt => skia::paint::Cap::Butt,
                LineCap::Round => skia::paint::Cap::Round,
                LineCap::Square => skia::paint::Cap::Square,
            });
        } else {
            paint.set_style(skia::paint::Style::Fill);
        }
        paint
    }

    /// Draw the current path with `paint`, preceded by the shadow pass when one is set.
    fn draw_current_path(&mut self, paint: skia::Paint) {
        let shadow = self.state.shadow.filter(|s| s.color.a > 0);
        let canvas = self.surface.canvas();

        if let Some(shadow) = shadow {
            let mut shadow_paint = paint.clone();
            shadow_paint.set_shader(None);
            shadow_paint.set_color(to_skia_color(shadow.color));
            if shadow.blur > 0.0 {
                // canvas blur is twice the gaussian sigma; the offset and blur ignore the transform
                shadow_paint.set_mask_filter(skia::MaskFilter::blur(
                    skia::BlurStyle::Normal,
                    (shadow.blur / 2.0) as f32,
                    false,
                ));
            }
            let local = canvas.local_to_device_as_3x3();
            canvas.save();
            canvas.reset_matrix();
            canvas.translate((shadow.offset_x as f32, shadow.offset_y as f32));
            canvas.concat(&local);
            canvas.draw_path(&self.path, &shadow_paint);
            canvas.restore();
        }

        canvas.draw_path(&self.path, &paint);
    }
}

impl Surface for SkiaSurface {
    fn save(&mut self) {
        self.surface.canvas().save();
        self.stack.push(self.state.clone());
    }

    fn restore(&mut self) {
        if let Some(state) = self.stack.pop() {
            self.surface.canvas().restore();
            self.state = state;
        }
    }

    fn set_stroke_style(&mut self, paint: Paint) { self.state.stroke = paint; }
    fn set_fill_style(&mut self, paint: Paint) { self.state.fill = paint; }
    fn set_line_width(&mut self, width: f64) {
        if width.is_finite() && width > 0.0 {
            self.state.line_width = width;
        }
    }
    fn set_line_cap(&mut self, cap: LineCap) { self.state.line_cap = cap; }
    fn set_shadow(&mut self, shadow: Option<Shadow>) { self.state.shadow = shadow; }

    fn begin_path(&mut self) {
        self.path = skia::Path::new();
    }

    fn close_path(&mut self) {
        if self.path.count_points() > 0 {
            self.path.close();
        }
    }

    fn move_to(&mut self, p: Point) {
        self.path.move_to(pt(p));
    }

    fn line_to(&mut self, p: Point) {
        if self.path.count_points() == 0 {
            self.path.move_to(pt(p));
        } else {
            self.path.line_to(pt(p));
        }
    }

    fn arc(&mut self, center: Point, radius: f64, start: f64, end: f64, anticlockwise: bool) {
        let radius = radius.max(0.0);
        let oval = skia::Rect::from_xywh(
            (center.x - radius) as f32,
            (center.y - radius) as f32,
            (2.0 * radius) as f32,
            (2.0 * radius) as f32,
        );
        let sweep = canvas_sweep(start, end, anticlockwise);
        let start_deg = start.to_degrees() as f32;
        let force_move = self.path.count_points() == 0;

        if sweep.abs() >= TAU {
            // a single 360° arc_to degenerates; split the full circle in two halves
            let half = (sweep / 2.0).to_degrees() as f32;
            self.path.arc_to(oval, start_deg, half, force_move);
            self.path.arc_to(oval, start_deg + half, half, false);
        } else {
            self.path.arc_to(oval, start_deg, sweep.to_degrees() as f32, force_move);
        }
    }

    fn fill(&mut self) {
        let paint = self.skia_paint(&self.state.fill, false);
        self.draw_current_path(paint);
    }

    fn stroke(&mut self) {
        let paint = self.skia_paint(&self.state.stroke, true);
        self.draw_current_path(paint);
    }

    fn clip(&mut self) {
        self.surface.canvas().clip_path(&self.path, skia::ClipOp::Intersect, true);
    }

    fn scale(&mut self, sx: f64, sy: f64) {
        self.surface.canvas().scale((sx as f32, sy as f32));
    }

    fn clear_rect(&mut self, rect: Rect) {
        let mut paint = skia::Paint::default();
        paint.set_blend_mode(skia::BlendMode::Clear);
        let r = skia::Rect::from_xywh(rect.x as f32, rect.y as f32, rect.w as f32, rect.h as f32);
        self.surface.canvas().draw_rect(r, &paint);
    }
}

/// Signed sweep in radians following canvas `arc` rules: clockwise sweeps land in
/// `[0, 2π]`, anticlockwise ones in `[-2π, 0]`, a full turn or more clamps to 2π.
pub fn canvas_sweep(start: f64, end: f64, anticlockwise: bool) -> f64 {
    if anticlockwise {
        let d = start - end;
        if d >= TAU { -TAU } else { -d.rem_euclid(TAU) }
    } else {
        let d = end - start;
        if d >= TAU { TAU } else { d.rem_euclid(TAU) }
    }
}

fn pt(p: Point) -> skia::Point {
    skia::Point::new(p.x as f32, p.y as f32)
}

fn to_skia_color(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn first_stop_color(paint: &Paint) -> Color {
    let stops = match paint {
        Paint::Solid(c) => return *c,
        Paint::Linear(g) => &g.stops,
        Paint::Radial(g) => &g.stops,
    };
    stops.first().map(|s| s.color).unwrap_or(Color::TRANSPARENT)
}

/// Gradient shader for two or more stops; `None` for solids and single-stop gradients.
fn gradient_shader(paint: &Paint) -> Option<skia::Shader> {
    let stops = match paint {
        Paint::Solid(_) => return None,
        Paint::Linear(g) => &g.stops,
        Paint::Radial(g) => &g.stops,
    };
    if stops.len() < 2 {
        return None;
    }
    let colors: Vec<skia::Color> = stops.iter().map(|s| to_skia_color(s.color)).collect();
    let offsets: Vec<f32> = stops.iter().map(|s| s.offset as f32).collect();

    match paint {
        Paint::Linear(g) => skia::Shader::linear_gradient(
            (pt(g.start), pt(g.end)),
            colors.as_slice(),
            offsets.as_slice(),
            skia::TileMode::Clamp,
            None,
            None,
        ),
        Paint::Radial(g) => skia::Shader::two_point_conical_gradient(
            pt(g.start),
            g.start_radius.max(0.0) as f32,
            pt(g.end),
            g.end_radius.max(0.0) as f32,
            colors.as_slice(),
            offsets.as_slice(),
            skia::TileMode::Clamp,
            None,
            None,
        ),
        Paint::Solid(_) => None,
    }
}
