// File: crates/demo/src/main.rs
// Summary: Demo renders sample data with every chart kind and captures an animation as numbered PNGs.

mod annuity;

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::time::Duration;

use anyhow::{Context, Result};
use cylinder_core::types::{HEIGHT, WIDTH};
use cylinder_core::{frame_rect, AnyChart, Chart, ChartConfig, ChartData, ChartKind, Color, Palette, Theme, TimerQueue};
use cylinder_render_skia::SkiaSurface;
use tracing::info;

use crate::annuity::Annuity;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    // Output directory from CLI or fall back to target/out
    let out_dir = std::env::args().nth(1).map(PathBuf::from).unwrap_or_else(|| PathBuf::from("target/out"));
    std::fs::create_dir_all(&out_dir).with_context(|| format!("creating {}", out_dir.display()))?;
    println!("Writing charts to {}", out_dir.display());

    // 1) Three single-value bars, one chart per kind
    let mut bars = ChartData::new();
    bars.add_bar("A", 2.0)?;
    bars.add_bar("B", 3.0)?;
    bars.add_bar("C", 4.0)?;
    for kind in ChartKind::ALL {
        let out = out_dir.join(format!("abc_{kind}.png"));
        render_png(&AnyChart::from_data(kind, &bars), &out)?;
        println!("Wrote {}", out.display());
    }

    // 2) Amortization table of a loan over ten years, monthly
    let loan = Annuity { principal: 10_000.0, interest_rate: 6.0, clearance_rate: 10.0, periods_per_year: 12 };
    let mut plan = ChartData::new();
    loan.add_to(&mut plan)?;
    info!(series = plan.len(), periods = plan.max_len(), "annuity sample ready");
    for kind in [ChartKind::Line, ChartKind::Bar] {
        let out = out_dir.join(format!("annuity_{kind}.png"));
        render_png(&AnyChart::from_data(kind, &plan), &out)?;
        println!("Wrote {}", out.display());
    }

    // 3) Same bars without shadow, in muted colors on a lighter grid
    let muted = ChartConfig::default()
        .with_blur(false)
        .with_palette(Palette::from_css(&["#4E79A7", "#F28E2B", "#59A14F"])?)
        .with_theme(Theme { grid: Color::gray(0xE8), ..Theme::classic() });
    let mut flat = ChartData::with_config(muted);
    for (name, value) in [("A", 2.0), ("B", 3.0), ("C", 4.0)] {
        flat.add_bar(name, value)?;
    }
    for kind in [ChartKind::Bar, ChartKind::Pie] {
        let out = out_dir.join(format!("abc_{kind}_flat.png"));
        render_png(&AnyChart::from_data(kind, &flat), &out)?;
        println!("Wrote {}", out.display());
    }

    // 4) Animated reveal captured tick by tick
    let frames_dir = out_dir.join("frames");
    let written = capture_frames(&AnyChart::from_data(ChartKind::Line, &plan), Duration::from_millis(600), &frames_dir)?;
    println!("Wrote {written} frames to {}", frames_dir.display());

    Ok(())
}

fn new_surface() -> Result<SkiaSurface> {
    let mut surface = SkiaSurface::new(WIDTH, HEIGHT)?;
    surface.fill_background(Color::WHITE);
    Ok(surface)
}

fn render_png(chart: &AnyChart, out: &Path) -> Result<()> {
    let mut surface = new_surface()?;
    chart.render(&mut surface, frame_rect(WIDTH, HEIGHT));
    surface.write_png(out).with_context(|| format!("rendering {} chart", chart.kind()))
}

/// Run `chart`'s animation on a virtual timer and write one PNG per tick.
fn capture_frames(chart: &AnyChart, duration: Duration, dir: &Path) -> Result<usize> {
    let surface = Rc::new(RefCell::new(new_surface()?));
    let queue = Rc::new(TimerQueue::new());

    let _handle = chart.animate(surface.clone(), frame_rect(WIDTH, HEIGHT), duration, queue.clone());
    let mut written = 0usize;
    loop {
        let path = dir.join(format!("frame_{written:03}.png"));
        surface.borrow_mut().write_png(&path)?;
        written += 1;
        if !queue.run_next() {
            break;
        }
    }
    info!(frames = written, elapsed_ms = queue.now().as_millis() as u64, "animation captured");
    Ok(written)
}
