// File: crates/cylinder-core/tests/bar.rs
// Purpose: Bar layout, rising animation and floor-only fallbacks.

use std::time::Duration;

use cylinder_core::{BarChart, Chart, Op, RecordingSurface, Rect, Tick};

const RECT: Rect = Rect::from_xywh(3.0, 3.0, 294.0, 294.0);

fn abc() -> BarChart {
    let mut bars = BarChart::new();
    bars.add_bar("A", 2.0).unwrap();
    bars.add_bar("B", 3.0).unwrap();
    bars.add_bar("C", 4.0).unwrap();
    bars
}

fn sizes(chart: &BarChart, progress: f64) -> Vec<f64> {
    chart.layout(RECT, progress).bars.iter().map(|b| b.size).collect()
}

#[test]
fn layout_splits_width_evenly() {
    let layout = abc().layout(RECT, 1.0);
    let want_w = (294.0 - 20.0 + 10.0) / 3.0 - 10.0;
    assert!((layout.bar_width - want_w).abs() < 1e-12);

    assert_eq!(layout.area, Rect::from_xywh(13.0, 3.0, 274.0, 291.0));
    let xs: Vec<f64> = layout.bars.iter().map(|b| b.x).collect();
    assert_eq!(xs[0], 13.0);
    assert!((xs[2] - (13.0 + 2.0 * (want_w + 10.0))).abs() < 1e-9);
    // the last bar ends at the right inset
    assert!((xs[2] + want_w - 287.0).abs() < 1e-9);

    let floor_h = want_w * 0.4 + 4.0;
    assert!((layout.floor.h - floor_h).abs() < 1e-12);
    assert_eq!(layout.floor.x, 3.0);
    assert_eq!(layout.floor.w, 294.0);
}

#[test]
fn bars_are_normalized_by_max_first_value() {
    assert_eq!(sizes(&abc(), 1.0), vec![0.5, 0.75, 1.0]);
}

#[test]
fn bars_never_exceed_progress() {
    assert_eq!(sizes(&abc(), 0.6), vec![0.5, 0.6, 0.6]);
    assert_eq!(sizes(&abc(), 0.0), vec![0.0, 0.0, 0.0]);
}

#[test]
fn negative_and_missing_values_stay_on_the_floor() {
    let mut bars = abc();
    bars.add_bar("neg", -3.0).unwrap();
    bars.add_series("none", vec![]).unwrap();
    let s = sizes(&bars, 1.0);
    assert_eq!(&s[3..], &[0.0, 0.0]);
}

#[test]
fn render_clears_then_draws_floor_and_bars() {
    let chart = abc();
    let mut surface = RecordingSurface::new();
    chart.render(&mut surface, RECT);

    assert_eq!(surface.ops()[0], Op::ClearRect(chart.clear_region(RECT)));
    // floor + (body + lid) per bar
    assert_eq!(surface.fills(), 1 + 2 * 3);
    assert_eq!(surface.depth(), 0);
    assert!(surface.all_finite());
}

#[test]
fn zero_duration_animation_matches_render() {
    let chart = abc();
    let mut rendered = RecordingSurface::new();
    chart.render(&mut rendered, RECT);

    let mut animated = RecordingSurface::new();
    let mut anim = chart.animation(RECT, Duration::ZERO);
    assert_eq!(anim.step(&mut animated), Tick::Finished);
    assert_eq!(animated.ops(), rendered.ops());
}

#[test]
fn last_animation_frame_matches_render() {
    let chart = abc();
    let mut rendered = RecordingSurface::new();
    chart.render(&mut rendered, RECT);

    let mut surface = RecordingSurface::new();
    let mut anim = chart.animation(RECT, Duration::from_millis(400));
    let last = loop {
        let tick = anim.step(&mut surface);
        let ops = surface.take();
        if tick == Tick::Finished {
            break ops;
        }
    };
    assert!(anim.frames() >= 10);
    assert_eq!(last, rendered.ops());
}

#[test]
fn empty_chart_draws_only_the_floor() {
    let mut surface = RecordingSurface::new();
    BarChart::new().render(&mut surface, RECT);
    assert_eq!(surface.fills(), 1);
    assert_eq!(surface.count(|op| matches!(op, Op::Arc { .. })), 0);
    assert!(surface.all_finite());
}

#[test]
fn too_narrow_for_bars_draws_only_the_floor() {
    let chart = abc();
    let narrow = Rect::from_xywh(0.0, 0.0, 30.0, 100.0);
    assert_eq!(chart.layout(narrow, 1.0).bar_width, 0.0);

    let mut surface = RecordingSurface::new();
    chart.render(&mut surface, narrow);
    assert_eq!(surface.fills(), 1);
    assert!(surface.all_finite());
}

#[test]
fn converted_from_another_chart() {
    let source = abc();
    let mut copy = BarChart::from_chart(&source);
    copy.bar_distance = 4.0;
    assert_eq!(copy.data().len(), 3);
    assert_eq!(copy.data().max_first_value(), 4.0);
    assert_eq!(source.bar_distance, 10.0);
}
