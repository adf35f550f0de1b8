// File: crates/cylinder-core/src/theme.rs
// Summary: Default series palette and chrome colors (outlines, grid, floor, shadow).

use crate::color::Color;
use crate::error::{ChartError, Result};

/// Ordered, cyclic list of colors handed out to series added without an explicit color.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// Build from parsed colors. Empty palettes are rejected.
    pub fn new(colors: Vec<Color>) -> Result<Self> {
        if colors.is_empty() {
            return Err(ChartError::EmptyPalette);
        }
        Ok(Self { colors })
    }

    /// Build from CSS color strings.
    pub fn from_css<S: AsRef<str>>(colors: &[S]) -> Result<Self> {
        let parsed = colors
            .iter()
            .map(|c| Color::parse_css(c.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Self::new(parsed)
    }

    /// Color for the series at `index` (wraps around).
    pub fn pick(&self, index: usize) -> Color {
        self.colors[index % self.colors.len()]
    }

    pub fn len(&self) -> usize { self.colors.len() }
    pub fn is_empty(&self) -> bool { self.colors.is_empty() }
    pub fn colors(&self) -> &[Color] { &self.colors }
}

impl Default for Palette {
    // "#FF1111", "blue", "yellow", "#088A85", "#F0F", "#FF8000", "aqua", "lime", "#FFF087"
    fn default() -> Self {
        Self {
            colors: vec![
                Color::rgb(0xFF, 0x11, 0x11),
                Color::rgb(0x00, 0x00, 0xFF),
                Color::rgb(0xFF, 0xFF, 0x00),
                Color::rgb(0x08, 0x8A, 0x85),
                Color::rgb(0xFF, 0x00, 0xFF),
                Color::rgb(0xFF, 0x80, 0x00),
                Color::rgb(0x00, 0xFF, 0xFF),
                Color::rgb(0x00, 0xFF, 0x00),
                Color::rgb(0xFF, 0xF0, 0x87),
            ],
        }
    }
}

/// Chrome colors shared by every chart variant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub outline: Color,
    pub highlight: Color,
    pub grid: Color,
    pub shadow: Color,
    pub floor_stops: [(f64, Color); 6],
}

impl Theme {
    pub const fn classic() -> Self {
        Self {
            outline: Color::BLACK,
            highlight: Color::WHITE,
            grid: Color::gray(0xCC),
            shadow: Color::gray(0xAA),
            floor_stops: [
                (0.0, Color::gray(0xDD)),
                (0.1, Color::gray(0xBB)),
                (0.3, Color::gray(0xCC)),
                (0.5, Color::gray(0xEE)),
                (0.6, Color::gray(0xDD)),
                (1.0, Color::gray(0xCC)),
            ],
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::classic() }
}
