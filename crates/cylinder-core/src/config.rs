// File: crates/cylinder-core/src/config.rs
// Summary: Per-chart configuration (frame rate, blur, palette, theme) owned by each data model.

use crate::error::{ChartError, Result};
use crate::theme::{Palette, Theme};
use crate::types::DEFAULT_FPS;

#[derive(Clone, Debug, PartialEq)]
pub struct ChartConfig {
    /// Frames per second of an animation. Always >= 1.
    fps: u32,
    /// Enable the drop shadow under outlines and fills.
    pub use_blur: bool,
    pub palette: Palette,
    pub theme: Theme,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            fps: DEFAULT_FPS,
            use_blur: true,
            palette: Palette::default(),
            theme: Theme::default(),
        }
    }
}

impl ChartConfig {
    pub fn fps(&self) -> u32 { self.fps }

    pub fn set_fps(&mut self, fps: u32) -> Result<()> {
        if fps == 0 {
            return Err(ChartError::InvalidFps);
        }
        self.fps = fps;
        Ok(())
    }

    pub fn with_fps(mut self, fps: u32) -> Result<Self> {
        self.set_fps(fps)?;
        Ok(self)
    }

    pub fn with_blur(mut self, use_blur: bool) -> Self {
        self.use_blur = use_blur;
        self
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }
}
