use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::foundation::error::CarouselError;

/// Straight-alpha sRGB color: 8-bit channels plus a fractional alpha in `[0, 1]`.
///
/// Serializes as CSS (`#rrggbb` when opaque, `rgba(r, g, b, a)` otherwise) and parses the same
/// notations back, plus `#rgb`, `#rrggbbaa`, `rgb(...)` and `transparent`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha in `[0, 1]`.
    pub a: f64,
}

impl Color {
    /// Fully transparent black.
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0.0);

    /// Opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Color with explicit alpha.
    pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with alpha replaced.
    pub fn with_alpha(self, a: f64) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a >= 1.0 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }
}

impl FromStr for Color {
    type Err = CarouselError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("transparent") {
            return Ok(Self::TRANSPARENT);
        }
        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex);
        }
        if let Some(args) = function_args(s, "rgba") {
            return parse_channels(args, true);
        }
        if let Some(args) = function_args(s, "rgb") {
            return parse_channels(args, false);
        }
        Err(CarouselError::validation(format!(
            "unsupported color \"{s}\" (expected #hex, rgb(...) or rgba(...))"
        )))
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

fn function_args<'a>(s: &'a str, name: &str) -> Option<&'a str> {
    let rest = s.strip_prefix(name)?.trim_start();
    rest.strip_prefix('(')?.strip_suffix(')')
}

fn parse_hex(s: &str) -> Result<Color, CarouselError> {
    fn hex_byte(pair: &str) -> Result<u8, CarouselError> {
        u8::from_str_radix(pair, 16)
            .map_err(|_| CarouselError::validation(format!("invalid hex byte \"{pair}\"")))
    }

    if !s.is_ascii() {
        return Err(CarouselError::validation("hex color must be ASCII"));
    }

    match s.len() {
        3 => {
            let mut ch = [0u8; 3];
            for (i, c) in s.chars().enumerate() {
                let v = hex_byte(&c.to_string())?;
                ch[i] = v * 17;
            }
            Ok(Color::rgb(ch[0], ch[1], ch[2]))
        }
        6 => Ok(Color::rgb(
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
        )),
        8 => Ok(Color::rgba(
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
            f64::from(hex_byte(&s[6..8])?) / 255.0,
        )),
        _ => Err(CarouselError::validation(
            "hex color must be #RGB, #RRGGBB or #RRGGBBAA (case-insensitive)",
        )),
    }
}

fn parse_channels(args: &str, with_alpha: bool) -> Result<Color, CarouselError> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    let expected = if with_alpha { 4 } else { 3 };
    if parts.len() != expected {
        return Err(CarouselError::validation(format!(
            "color function expects {expected} components, got {}",
            parts.len()
        )));
    }

    fn channel(s: &str) -> Result<u8, CarouselError> {
        let v: f64 = s
            .parse()
            .map_err(|_| CarouselError::validation(format!("invalid color channel \"{s}\"")))?;
        if !(0.0..=255.0).contains(&v) {
            return Err(CarouselError::validation(format!(
                "color channel {v} out of range 0..=255"
            )));
        }
        Ok(v.round() as u8)
    }

    let r = channel(parts[0])?;
    let g = channel(parts[1])?;
    let b = channel(parts[2])?;
    let a = if with_alpha {
        let a: f64 = parts[3]
            .parse()
            .map_err(|_| CarouselError::validation(format!("invalid alpha \"{}\"", parts[3])))?;
        if !(0.0..=1.0).contains(&a) {
            return Err(CarouselError::validation(format!(
                "alpha {a} out of range 0..=1"
            )));
        }
        a
    } else {
        1.0
    };
    Ok(Color::rgba(r, g, b, a))
}

/// One color stop of a [`LinearGradient`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    /// Stop color.
    pub color: Color,
    /// Position along the gradient line in `[0, 1]`.
    pub offset: f64,
}

/// Two-stop linear gradient, CSS angle convention (0deg points up, 90deg points right).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinearGradient {
    /// Gradient line angle in degrees.
    pub angle_deg: f64,
    /// Start and end stops.
    pub stops: [GradientStop; 2],
}

impl LinearGradient {
    /// Gradient running from `from` at 0% to `to` at 100%.
    pub const fn new(angle_deg: f64, from: Color, to: Color) -> Self {
        Self {
            angle_deg,
            stops: [
                GradientStop {
                    color: from,
                    offset: 0.0,
                },
                GradientStop {
                    color: to,
                    offset: 1.0,
                },
            ],
        }
    }

    /// CSS `linear-gradient(...)` notation.
    pub fn to_css(&self) -> String {
        let [a, b] = self.stops;
        format!(
            "linear-gradient({}deg, {} {}%, {} {}%)",
            self.angle_deg,
            a.color,
            a.offset * 100.0,
            b.color,
            b.offset * 100.0
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/theme/color.rs"]
mod tests;
