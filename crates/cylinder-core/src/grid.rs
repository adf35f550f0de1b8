// File: crates/cylinder-core/src/grid.rs
// Summary: Simple grid line layout helpers.

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Offsets of `count` horizontal grid lines over `extent`: the top edge is
/// included, the bottom edge (drawn by the x axis) is not.
pub fn horizontal_offsets(extent: f64, count: usize) -> Vec<f64> {
    if count == 0 { return Vec::new(); }
    let mut v = linspace(0.0, extent, count + 1);
    v.pop();
    v
}

/// Offsets of `count` vertical grid lines over `extent`: the left edge (drawn by
/// the y axis) is skipped, the right edge is included.
pub fn vertical_offsets(extent: f64, count: usize) -> Vec<f64> {
    if count == 0 { return Vec::new(); }
    linspace(0.0, extent, count + 1).into_iter().skip(1).collect()
}
