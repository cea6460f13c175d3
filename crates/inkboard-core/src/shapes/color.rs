//! Fill colors and the palette math behind the color picker.

use peniko::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors from parsing a color string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("Unrecognized color syntax: {0}")]
    Syntax(String),
    #[error("Invalid color component: {0}")]
    Component(String),
}

/// Serializable fill color (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FillColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl FillColor {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub const fn red() -> Self {
        Self::rgb(255, 0, 0)
    }

    pub const fn transparent() -> Self {
        Self::new(0, 0, 0, 0)
    }

    /// Pick a color from the saturation/lightness square.
    ///
    /// `x` blends from white (0.0) to `base` (1.0); `y` darkens from the
    /// blended color (0.0) to black (1.0). Both are clamped to `[0, 1]`.
    pub fn shade(base: FillColor, x: f64, y: f64) -> Self {
        let x = x.clamp(0.0, 1.0);
        let y = y.clamp(0.0, 1.0);
        let channel = |c: u8| {
            let v = (255.0 - x * (255.0 - f64::from(c))) * (1.0 - y);
            v.round().clamp(0.0, 255.0) as u8
        };
        Self::rgb(channel(base.r), channel(base.g), channel(base.b))
    }

    /// Pick a fully saturated hue from the hue bar.
    ///
    /// `x` runs over `[0, 1]` through red, magenta, blue, cyan, green,
    /// yellow and back toward red, in three equal segments.
    pub fn hue(x: f64) -> Self {
        let percent = (x * 100.0).clamp(0.0, 99.99);
        let segment_size = 100.0 / 3.0;
        let factor = ((percent % segment_size) / segment_size * 2.0 * 255.0).round() as i32;
        let segment = (percent / segment_size).floor() as usize;

        let mut rgb = [0u8; 3];
        rgb[2 - segment] = factor.min(255) as u8;
        rgb[[0, 2, 1][segment]] = (255 - (factor - 255).max(0)) as u8;
        Self::rgb(rgb[0], rgb[1], rgb[2])
    }

    /// Position of this color's hue on the hue bar, in `[0, 1)`.
    ///
    /// Inverse of [`hue`](Self::hue) for saturated colors. Other colors are
    /// stretched to full saturation first; greys sit at 0.
    pub fn hue_position(self) -> f64 {
        let [r, g, b] = [self.r, self.g, self.b].map(f64::from);
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        if max - min < f64::EPSILON {
            return 0.0;
        }
        let stretch = |c: f64| (c - min) / (max - min) * 255.0;
        let (r, g, b) = (stretch(r), stretch(g), stretch(b));

        // Each segment is two ramps of 255: one channel rises, then another falls.
        let (segment, factor) = if r >= 255.0 && g <= 0.0 {
            (0.0, b)
        } else if b >= 255.0 && g <= 0.0 {
            (0.0, 510.0 - r)
        } else if b >= 255.0 && r <= 0.0 {
            (1.0, g)
        } else if g >= 255.0 && r <= 0.0 {
            (1.0, 510.0 - b)
        } else if g >= 255.0 && b <= 0.0 {
            (2.0, r)
        } else {
            (2.0, 510.0 - g)
        };
        (segment + factor / 510.0) / 3.0
    }
}

impl Default for FillColor {
    fn default() -> Self {
        Self::red()
    }
}

impl From<Color> for FillColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self::new(rgba.r, rgba.g, rgba.b, rgba.a)
    }
}

impl From<FillColor> for Color {
    fn from(color: FillColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

impl fmt::Display for FillColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "rgb({},{},{})", self.r, self.g, self.b)
        } else {
            write!(
                f,
                "rgba({},{},{},{})",
                self.r,
                self.g,
                self.b,
                f64::from(self.a) / 255.0
            )
        }
    }
}

impl FromStr for FillColor {
    type Err = ColorParseError;

    /// Accepts `rgb(r,g,b)`, `rgba(r,g,b,a)`, `#rgb`, `#rrggbb`, `#rrggbbaa`
    /// and `transparent`. Fractional rgb components are rounded.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("transparent") {
            return Ok(Self::transparent());
        }
        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex);
        }
        if let Some(body) = s.strip_prefix("rgba(").and_then(|b| b.strip_suffix(')')) {
            let parts = split_components(body, 4)?;
            let alpha = parse_float(parts[3])?;
            if !(0.0..=1.0).contains(&alpha) {
                return Err(ColorParseError::Component(parts[3].to_string()));
            }
            return Ok(Self::new(
                parse_channel(parts[0])?,
                parse_channel(parts[1])?,
                parse_channel(parts[2])?,
                (alpha * 255.0).round() as u8,
            ));
        }
        if let Some(body) = s.strip_prefix("rgb(").and_then(|b| b.strip_suffix(')')) {
            let parts = split_components(body, 3)?;
            return Ok(Self::rgb(
                parse_channel(parts[0])?,
                parse_channel(parts[1])?,
                parse_channel(parts[2])?,
            ));
        }
        Err(ColorParseError::Syntax(s.to_string()))
    }
}

fn split_components(body: &str, expected: usize) -> Result<Vec<&str>, ColorParseError> {
    let parts: Vec<&str> = body.split(',').map(str::trim).collect();
    if parts.len() != expected {
        return Err(ColorParseError::Syntax(body.to_string()));
    }
    Ok(parts)
}

fn parse_float(s: &str) -> Result<f64, ColorParseError> {
    s.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ColorParseError::Component(s.to_string()))
}

fn parse_channel(s: &str) -> Result<u8, ColorParseError> {
    let v = parse_float(s)?;
    if !(0.0..=255.0).contains(&v) {
        return Err(ColorParseError::Component(s.to_string()));
    }
    Ok(v.round() as u8)
}

fn parse_hex(hex: &str) -> Result<FillColor, ColorParseError> {
    let byte = |s: &str| {
        u8::from_str_radix(s, 16).map_err(|_| ColorParseError::Component(s.to_string()))
    };
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorParseError::Component(hex.to_string()));
    }
    match hex.len() {
        3 => Ok(FillColor::rgb(
            byte(&hex[0..1])? * 17,
            byte(&hex[1..2])? * 17,
            byte(&hex[2..3])? * 17,
        )),
        6 => Ok(FillColor::rgb(
            byte(&hex[0..2])?,
            byte(&hex[2..4])?,
            byte(&hex[4..6])?,
        )),
        8 => Ok(FillColor::new(
            byte(&hex[0..2])?,
            byte(&hex[2..4])?,
            byte(&hex[4..6])?,
            byte(&hex[6..8])?,
        )),
        _ => Err(ColorParseError::Syntax(hex.to_string())),
    }
}
