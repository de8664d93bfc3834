use std::fmt;
use std::str::FromStr;

use crate::foundation::error::CarouselError;
use crate::theme::color::{Color, LinearGradient};

/// Palette applied consistently to a show's backdrop, header and caption bubble.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Theme {
    /// Canvas fill and backdrop scrim color.
    pub background: Color,
    /// Header panel fill.
    pub header_bg: LinearGradient,
    /// Header panel border.
    pub header_border: Color,
    /// Header title color.
    pub header_text: Color,
    /// Caption bubble fill.
    pub bubble_bg: LinearGradient,
    /// Caption bubble and slide image border.
    pub bubble_border: Color,
    /// Caption text color.
    pub bubble_text: Color,
    /// Glow tint around slides and caption.
    pub accent_glow: Color,
}

/// Names of the built-in themes.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum ThemeId {
    /// Charcoal panels, white type.
    MightyDark,
    /// Violet-to-pink header on near-black.
    MelodicaPurple,
    /// Blue-to-violet header and bubble on midnight.
    MelodicaGradient,
}

const MIGHTY_DARK: Theme = Theme {
    background: Color::rgb(0x14, 0x14, 0x14),
    header_bg: LinearGradient::new(
        135.0,
        Color::rgb(0x14, 0x14, 0x14),
        Color::rgb(0x1f, 0x1f, 0x25),
    ),
    header_border: Color::rgba(255, 255, 255, 0.1),
    header_text: Color::rgb(0xff, 0xff, 0xff),
    bubble_bg: LinearGradient::new(
        135.0,
        Color::rgb(0x14, 0x14, 0x14),
        Color::rgb(0x1f, 0x1f, 0x25),
    ),
    bubble_border: Color::rgba(255, 255, 255, 0.15),
    bubble_text: Color::rgb(0xff, 0xff, 0xff),
    accent_glow: Color::rgba(255, 255, 255, 0.03),
};

const MELODICA_PURPLE: Theme = Theme {
    background: Color::rgb(0x15, 0x15, 0x15),
    header_bg: LinearGradient::new(
        135.0,
        Color::rgb(0x9f, 0x5a, 0xfd),
        Color::rgb(0xfe, 0x54, 0xd1),
    ),
    header_border: Color::rgba(255, 255, 255, 0.2),
    header_text: Color::rgb(0xff, 0xff, 0xff),
    bubble_bg: LinearGradient::new(
        135.0,
        Color::rgb(0x15, 0x15, 0x15),
        Color::rgb(0x1a, 0x1a, 0x1a),
    ),
    bubble_border: Color::rgba(159, 90, 253, 0.3),
    bubble_text: Color::rgb(0xff, 0xff, 0xff),
    accent_glow: Color::rgba(159, 90, 253, 0.1),
};

const MELODICA_GRADIENT: Theme = Theme {
    background: Color::rgb(0x0a, 0x0a, 0x1a),
    header_bg: LinearGradient::new(
        135.0,
        Color::rgb(0x09, 0x3d, 0xf8),
        Color::rgb(0xbc, 0x5f, 0xfc),
    ),
    header_border: Color::rgba(255, 255, 255, 0.2),
    header_text: Color::rgb(0xff, 0xff, 0xff),
    bubble_bg: LinearGradient::new(
        135.0,
        Color::rgb(0x09, 0x3d, 0xf8),
        Color::rgb(0xbc, 0x5f, 0xfc),
    ),
    bubble_border: Color::rgba(188, 95, 252, 0.4),
    bubble_text: Color::rgb(0xff, 0xff, 0xff),
    accent_glow: Color::rgba(9, 61, 248, 0.15),
};

impl ThemeId {
    /// Every registered theme, in declaration order.
    pub const ALL: [ThemeId; 3] = [
        ThemeId::MightyDark,
        ThemeId::MelodicaPurple,
        ThemeId::MelodicaGradient,
    ];

    /// Look up the palette. Themes are compiled in, so lookup cannot fail.
    pub fn theme(self) -> &'static Theme {
        match self {
            Self::MightyDark => &MIGHTY_DARK,
            Self::MelodicaPurple => &MELODICA_PURPLE,
            Self::MelodicaGradient => &MELODICA_GRADIENT,
        }
    }

    /// Registry key, as written in catalog JSON.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MightyDark => "mightyDark",
            Self::MelodicaPurple => "melodicaPurple",
            Self::MelodicaGradient => "melodicaGradient",
        }
    }
}

impl fmt::Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeId {
    type Err = CarouselError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| CarouselError::not_found(format!("theme \"{s}\"")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/theme/registry.rs"]
mod tests;
