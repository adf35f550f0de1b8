// File: crates/cylinder-core/tests/pie.rs
// Purpose: Pie slice angles, lid/tube drawing and the no-op paths.

use std::f64::consts::PI;
use std::time::Duration;

use cylinder_core::{BarChart, Chart, Op, PieChart, RecordingSurface, Rect, Tick};

const RECT: Rect = Rect::from_xywh(3.0, 3.0, 294.0, 294.0);

fn abc() -> PieChart {
    let mut pie = PieChart::new();
    pie.add_bar("A", 2.0).unwrap();
    pie.add_bar("B", 3.0).unwrap();
    pie.add_bar("C", 4.0).unwrap();
    pie
}

#[test]
fn slice_angles_follow_first_value_shares() {
    let slices = abc().slices();
    assert_eq!(slices.len(), 3);

    let want = [2.0 / 9.0, 3.0 / 9.0, 4.0 / 9.0];
    for (slice, share) in slices.iter().zip(want) {
        assert!((slice.sweep() - 2.0 * PI * share).abs() < 1e-12);
    }
    assert_eq!(slices[0].start, 0.0);
    assert_eq!(slices[1].start, slices[0].end);
    assert_eq!(slices[2].start, slices[1].end);
    assert_eq!(slices[2].end, 2.0 * PI);

    let total: f64 = slices.iter().map(|s| s.sweep()).sum();
    assert!((total - 2.0 * PI).abs() < 1e-12);
}

#[test]
fn single_series_spans_the_circle() {
    let mut pie = PieChart::new();
    pie.add_series("only", vec![7.0, 1.0]).unwrap();
    let slices = pie.slices();
    assert_eq!(slices.len(), 1);
    assert_eq!((slices[0].start, slices[0].end), (0.0, 2.0 * PI));
}

#[test]
fn series_without_values_get_empty_slices() {
    let mut pie = abc();
    pie.add_series("none", vec![]).unwrap();
    let slices = pie.slices();
    assert_eq!(slices.len(), 4);
    assert_eq!(slices[3].sweep(), 0.0);
    assert_eq!(slices[3].start, 2.0 * PI);
}

#[test]
fn render_draws_lids_and_front_tubes() {
    let pie = abc();
    let mut surface = RecordingSurface::new();
    pie.render(&mut surface, RECT);

    // slice C starts past π and only shows its lid
    assert_eq!(surface.fills(), 5);
    assert_eq!(surface.strokes(), 5);
    assert_eq!(surface.depth(), 0);
    assert!(surface.all_finite());

    let scales = surface.count(|op| matches!(op, Op::Scale(sx, sy) if *sx == 1.0 && *sy == 0.4));
    assert_eq!(scales, 3);

    // lids use the squashed center and half the width as radius
    let r = RECT.w / 2.0;
    let yc = (RECT.y + (RECT.h - 50.0) / 2.0) / 0.4;
    let lids: Vec<(f64, f64)> = surface
        .ops()
        .iter()
        .filter_map(|op| match op {
            Op::Arc { center, radius, start, end, anticlockwise: false } if center.y == yc && *radius == r => {
                Some((*start, *end))
            }
            _ => None,
        })
        .collect();
    assert_eq!(lids.len(), 3);
    assert_eq!(lids[2].1, 2.0 * PI);
}

#[test]
fn tube_is_clipped_at_pi() {
    let mut pie = PieChart::new();
    pie.add_bar("big", 3.0).unwrap();
    pie.add_bar("small", 1.0).unwrap();
    let mut surface = RecordingSurface::new();
    pie.render(&mut surface, RECT);

    let depth = 50.0 / 0.4;
    let tube_ends: Vec<f64> = surface
        .ops()
        .iter()
        .filter_map(|op| match op {
            Op::Arc { center, end, anticlockwise: false, .. }
                if (center.y - ((RECT.y + (RECT.h - 50.0) / 2.0) / 0.4 + depth)).abs() < 1e-9 =>
            {
                Some(*end)
            }
            _ => None,
        })
        .collect();
    assert_eq!(tube_ends, vec![PI]);
}

#[test]
fn zero_total_only_clears() {
    let mut pie = PieChart::new();
    pie.add_bar("zero", 0.0).unwrap();
    pie.add_series("empty", vec![]).unwrap();
    assert!(pie.slices().is_empty());

    let mut surface = RecordingSurface::new();
    pie.render(&mut surface, RECT);
    assert_eq!(surface.ops(), &[Op::ClearRect(pie.clear_region(RECT))]);
}

#[test]
fn blur_installs_a_shadow() {
    let mut pie = abc();
    let mut surface = RecordingSurface::new();
    pie.render(&mut surface, RECT);
    assert_eq!(surface.count(|op| matches!(op, Op::Shadow(Some(_)))), 1);

    pie.data_mut().config_mut().use_blur = false;
    let mut surface = RecordingSurface::new();
    pie.render(&mut surface, RECT);
    assert_eq!(surface.count(|op| matches!(op, Op::Shadow(_))), 0);
}

#[test]
fn animation_is_a_single_full_frame() {
    let pie = abc();
    let mut anim = pie.animation(RECT, Duration::from_secs(3));
    let mut animated = RecordingSurface::new();
    assert_eq!(anim.step(&mut animated), Tick::Finished);
    assert_eq!(anim.frames(), 1);

    let mut rendered = RecordingSurface::new();
    pie.render(&mut rendered, RECT);
    assert_eq!(animated.ops(), rendered.ops());
    assert_eq!(animated.ops()[0], Op::ClearRect(pie.clear_region(RECT)));
}

#[test]
fn animation_tick_wipes_a_previous_chart() {
    let mut surface = RecordingSurface::new();
    let bars = BarChart::from_chart(&abc());
    bars.render(&mut surface, RECT);
    surface.take();

    let pie = abc();
    let mut anim = pie.animation(RECT, Duration::from_secs(1));
    assert_eq!(anim.step(&mut surface), Tick::Finished);
    let region = pie.clear_region(RECT);
    assert_eq!(surface.ops()[0], Op::ClearRect(region));
    assert_eq!(surface.clears(), 1);
    // same config, so the pie wipes everything the bars could have touched
    assert_eq!(region, bars.clear_region(RECT));
}
