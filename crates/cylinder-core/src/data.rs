// File: crates/cylinder-core/src/data.rs
// Summary: Chart data model: ordered series plus running aggregates used for normalization.
// Notes:
// - Aggregates are updated exactly on every append and never decrease.
// - Series are shared through `Arc`, so copying a model is a shallow snapshot:
//   later appends to the source never show up in a copy.

use std::sync::Arc;

use tracing::debug;

use crate::color::Color;
use crate::config::ChartConfig;
use crate::error::Result;
use crate::series::Series;

#[derive(Clone, Debug, Default)]
pub struct ChartData {
    series: Vec<Arc<Series>>,
    max_len: usize,
    max_value: f64,
    max_first_value: f64,
    first_values_total: f64,
    config: ChartConfig,
}

impl ChartData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ChartConfig) -> Self {
        Self { config, ..Self::default() }
    }

    /// Append a series colored from the palette (`series.len() % palette.len()`).
    pub fn add_series(&mut self, description: impl Into<String>, values: Vec<f64>) -> Result<()> {
        let color = self.config.palette.pick(self.series.len());
        self.push(Series::try_new(description, color, values)?);
        Ok(())
    }

    /// Append a series with an explicit CSS color.
    pub fn add_series_colored(
        &mut self,
        description: impl Into<String>,
        values: Vec<f64>,
        color: &str,
    ) -> Result<()> {
        let color = Color::parse_css(color)?;
        self.push(Series::try_new(description, color, values)?);
        Ok(())
    }

    /// Append a single-value series.
    pub fn add_bar(&mut self, description: impl Into<String>, value: f64) -> Result<()> {
        self.add_series(description, vec![value])
    }

    pub fn add_bar_colored(&mut self, description: impl Into<String>, value: f64, color: &str) -> Result<()> {
        self.add_series_colored(description, vec![value], color)
    }

    fn push(&mut self, series: Series) {
        for &v in series.values() {
            self.max_value = self.max_value.max(v);
        }
        if let Some(first) = series.first_value() {
            self.first_values_total += first;
            self.max_first_value = self.max_first_value.max(first);
            self.max_len = self.max_len.max(series.len());
        }
        debug!(
            series = series.description(),
            color = %series.color(),
            len = series.len(),
            max_len = self.max_len,
            max_value = self.max_value,
            "series added"
        );
        self.series.push(Arc::new(series));
    }

    /// Overwrite `target` with this model's aggregates, series snapshot and styling.
    pub fn copy_into(&self, target: &mut ChartData) {
        target.max_len = self.max_len;
        target.max_value = self.max_value;
        target.max_first_value = self.max_first_value;
        target.first_values_total = self.first_values_total;
        target.series = self.series.clone();
        target.config = self.config.clone();
    }

    /// Raise `max_len` to at least `len`, widening the x range of line charts.
    pub fn extend_len(&mut self, len: usize) {
        self.max_len = self.max_len.max(len);
    }

    pub fn series(&self) -> impl ExactSizeIterator<Item = &Series> + '_ {
        self.series.iter().map(|s| s.as_ref())
    }
    pub fn get(&self, index: usize) -> Option<&Series> { self.series.get(index).map(|s| s.as_ref()) }
    pub fn len(&self) -> usize { self.series.len() }
    pub fn is_empty(&self) -> bool { self.series.is_empty() }

    /// Length of the longest series.
    pub fn max_len(&self) -> usize { self.max_len }
    /// Largest value over all series (0 when empty).
    pub fn max_value(&self) -> f64 { self.max_value }
    /// Largest first value over all series (0 when none).
    pub fn max_first_value(&self) -> f64 { self.max_first_value }
    /// Sum of first values; the pie chart's denominator.
    pub fn first_values_total(&self) -> f64 { self.first_values_total }

    pub fn config(&self) -> &ChartConfig { &self.config }
    pub fn config_mut(&mut self) -> &mut ChartConfig { &mut self.config }
    pub fn fps(&self) -> u32 { self.config.fps() }
    pub fn use_blur(&self) -> bool { self.config.use_blur }
}
