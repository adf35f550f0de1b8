// File: crates/cylinder-core/src/color.rs
// Summary: RGBA color value parsed from CSS-style strings ("red", "#ABCDEF", "rgb(1,2,3)").

use std::fmt;
use std::str::FromStr;

use crate::error::ChartError;

/// 8-bit straight-alpha RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Gray level shorthand, e.g. `gray(0xCC)` for CSS `#CCC`.
    pub const fn gray(level: u8) -> Self {
        Self::rgb(level, level, level)
    }

    /// Parse a CSS color: `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`, `rgb(r,g,b)`,
    /// `rgba(r,g,b,a)` (alpha in 0..=1) or a basic named color.
    pub fn parse_css(input: &str) -> Result<Self, ChartError> {
        let s = input.trim().to_ascii_lowercase();
        let parsed = if let Some(hex) = s.strip_prefix('#') {
            parse_hex(hex)
        } else if let Some(args) = s.strip_prefix("rgba(").and_then(|r| r.strip_suffix(')')) {
            parse_functional(args, true)
        } else if let Some(args) = s.strip_prefix("rgb(").and_then(|r| r.strip_suffix(')')) {
            parse_functional(args, false)
        } else {
            named(&s)
        };
        parsed.ok_or_else(|| ChartError::InvalidColor(input.to_string()))
    }
}

impl FromStr for Color {
    type Err = ChartError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::parse_css(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "rgba({}, {}, {}, {:.3})", self.r, self.g, self.b, self.a as f32 / 255.0)
        }
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    match hex.len() {
        3 => Some(Color::rgb(nibble(0)?, nibble(1)?, nibble(2)?)),
        4 => Some(Color::rgba(nibble(0)?, nibble(1)?, nibble(2)?, nibble(3)?)),
        6 => Some(Color::rgb(byte(0)?, byte(2)?, byte(4)?)),
        8 => Some(Color::rgba(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
        _ => None,
    }
}

fn parse_functional(args: &str, with_alpha: bool) -> Option<Color> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    let want = if with_alpha { 4 } else { 3 };
    if parts.len() != want {
        return None;
    }
    let channel = |s: &str| -> Option<u8> {
        let v = s.parse::<f64>().ok().filter(|v| v.is_finite())?;
        Some(v.round().clamp(0.0, 255.0) as u8)
    };
    let a = if with_alpha {
        let v = parts[3].parse::<f64>().ok().filter(|v| v.is_finite())?;
        (v.clamp(0.0, 1.0) * 255.0).round() as u8
    } else {
        255
    };
    Some(Color::rgba(channel(parts[0])?, channel(parts[1])?, channel(parts[2])?, a))
}

fn named(name: &str) -> Option<Color> {
    let c = match name {
        "black" => Color::rgb(0, 0, 0),
        "white" => Color::rgb(255, 255, 255),
        "red" => Color::rgb(255, 0, 0),
        "lime" => Color::rgb(0, 255, 0),
        "green" => Color::rgb(0, 128, 0),
        "blue" => Color::rgb(0, 0, 255),
        "yellow" => Color::rgb(255, 255, 0),
        "aqua" | "cyan" => Color::rgb(0, 255, 255),
        "fuchsia" | "magenta" => Color::rgb(255, 0, 255),
        "gray" | "grey" => Color::rgb(128, 128, 128),
        "silver" => Color::rgb(192, 192, 192),
        "maroon" => Color::rgb(128, 0, 0),
        "olive" => Color::rgb(128, 128, 0),
        "purple" => Color::rgb(128, 0, 128),
        "teal" => Color::rgb(0, 128, 128),
        "navy" => Color::rgb(0, 0, 128),
        "orange" => Color::rgb(255, 165, 0),
        "transparent" => Color::TRANSPARENT,
        _ => return None,
    };
    Some(c)
}
