// File: crates/cylinder-core/src/series.rs
// Summary: Series model: a described, colored run of values (one table row).

use crate::color::Color;
use crate::error::{ChartError, Result};

#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    description: String,
    color: Color,
    values: Vec<f64>,
}

impl Series {
    /// Build a series, rejecting NaN and infinite values.
    pub fn try_new(description: impl Into<String>, color: Color, values: Vec<f64>) -> Result<Self> {
        let description = description.into();
        if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(ChartError::NonFiniteValue { series: description, index, value });
        }
        Ok(Self { description, color, values })
    }

    pub fn description(&self) -> &str { &self.description }
    pub fn color(&self) -> Color { self.color }
    pub fn values(&self) -> &[f64] { &self.values }
    pub fn len(&self) -> usize { self.values.len() }
    pub fn is_empty(&self) -> bool { self.values.is_empty() }

    /// First value, the one pie and bar charts display.
    pub fn first_value(&self) -> Option<f64> { self.values.first().copied() }
}
