// File: crates/cylinder-core/tests/variants.rs
// Purpose: Kind parsing, converting one data model across variants, and empty/degenerate renders.

use std::time::Duration;

use cylinder_core::{AnyChart, Chart, ChartData, ChartError, ChartKind, Op, RecordingSurface, Rect, Tick};

const RECT: Rect = Rect::from_xywh(3.0, 3.0, 294.0, 294.0);

fn data_marks(ops: &[Op]) -> usize {
    // every data mark is an arc (pie lids, cylinders) or a clipped polyline
    ops.iter().filter(|op| matches!(op, Op::Arc { .. } | Op::Clip)).count()
}

#[test]
fn kinds_parse_from_text() {
    assert_eq!("Pie".parse::<ChartKind>().unwrap(), ChartKind::Pie);
    assert_eq!(" bar ".parse::<ChartKind>().unwrap(), ChartKind::Bar);
    assert_eq!("graph".parse::<ChartKind>().unwrap(), ChartKind::Line);
    assert_eq!("donut".parse::<ChartKind>().unwrap_err(), ChartError::UnknownKind("donut".into()));
    for kind in ChartKind::ALL {
        assert_eq!(kind.to_string().parse::<ChartKind>().unwrap(), kind);
    }
}

#[test]
fn one_model_many_variants() {
    let mut data = ChartData::new();
    data.add_series("X", vec![1.0, 5.0, 3.0]).unwrap();
    data.add_series("Y", vec![2.0]).unwrap();

    for kind in ChartKind::ALL {
        let chart = AnyChart::from_data(kind, &data);
        assert_eq!(chart.kind(), kind);
        assert_eq!(chart.data().len(), 2);
        assert_eq!(chart.data().max_len(), 3);
        assert_eq!(chart.data().first_values_total(), 3.0);

        let mut surface = RecordingSurface::new();
        chart.render(&mut surface, RECT);
        assert!(data_marks(surface.ops()) > 0, "{kind} drew no data");
        assert!(surface.all_finite(), "{kind}");
        assert_eq!(surface.depth(), 0, "{kind}");
    }

    // converting keeps the model but not later appends of the source
    let mut bar = AnyChart::from_data(ChartKind::Bar, &data);
    let line = bar.convert(ChartKind::Line);
    bar.add_bar("Z", 9.0).unwrap();
    assert_eq!(line.data().len(), 2);
    assert_eq!(bar.data().len(), 3);
}

#[test]
fn empty_model_renders_without_data_marks() {
    for kind in ChartKind::ALL {
        let chart = AnyChart::new(kind);
        let mut surface = RecordingSurface::new();
        chart.render(&mut surface, RECT);
        assert_eq!(data_marks(surface.ops()), 0, "{kind}");
        assert!(surface.all_finite());

        let mut anim = chart.animation(RECT, Duration::from_millis(500));
        let mut frames = 0;
        while let Tick::Continue(_) = anim.step(&mut surface) {
            frames += 1;
        }
        assert!(frames < 20);
        assert_eq!(data_marks(surface.ops()), 0, "{kind}");
    }
}

#[test]
fn degenerate_inputs_never_reach_the_surface_as_non_finite() {
    let cases: Vec<Vec<(&str, Vec<f64>)>> = vec![
        vec![("zeros", vec![0.0, 0.0])],
        vec![("single", vec![3.0])],
        vec![("neg", vec![-2.0]), ("pos", vec![2.0])],
        vec![("neg", vec![-5.0, -1.0])],
        vec![("empty", vec![]), ("empty2", vec![])],
        vec![("tiny", vec![1e-300, 1e-300])],
    ];
    let rects = [RECT, Rect::from_xywh(0.0, 0.0, 0.0, 0.0), Rect::from_xywh(0.0, 0.0, 12.0, 5.0)];

    for case in cases {
        let mut data = ChartData::new();
        for (name, values) in &case {
            data.add_series(*name, values.clone()).unwrap();
        }
        for kind in ChartKind::ALL {
            for rect in rects {
                let chart = AnyChart::from_data(kind, &data);
                let mut surface = RecordingSurface::new();
                chart.render(&mut surface, rect);
                assert!(surface.all_finite(), "{kind} {case:?} {rect:?}");
            }
        }
    }
}

#[test]
fn pie_animation_through_any_chart_is_instant() {
    let mut chart = AnyChart::new(ChartKind::Pie);
    chart.add_bar("A", 1.0).unwrap();
    let mut anim = chart.animation(RECT, Duration::from_secs(10));
    let mut surface = RecordingSurface::new();
    assert_eq!(anim.step(&mut surface), Tick::Finished);
}

#[test]
fn frame_rect_insets_the_surface() {
    assert_eq!(cylinder_core::frame_rect(300, 300), RECT);
    let tiny = cylinder_core::frame_rect(4, 2);
    assert_eq!((tiny.w, tiny.h), (0.0, 0.0));
}
