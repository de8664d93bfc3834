use crate::foundation::error::{CarouselError, CarouselResult};

pub use kurbo::{Affine, Vec2};

/// 0-based frame index on a show's global timeline.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Half-open frame window `[start, end)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FrameRange {
    /// First frame in the window.
    pub start: FrameIndex,
    /// One past the last frame in the window.
    pub end: FrameIndex, // exclusive
}

impl FrameRange {
    /// Build a range, rejecting `start > end`.
    pub fn new(start: FrameIndex, end: FrameIndex) -> CarouselResult<Self> {
        if start.0 > end.0 {
            return Err(CarouselError::validation("FrameRange start must be <= end"));
        }
        Ok(Self { start, end })
    }

    /// Number of frames in the window.
    pub fn len_frames(self) -> u64 {
        self.end.0.saturating_sub(self.start.0)
    }

    /// `true` when the window holds no frames.
    pub fn is_empty(self) -> bool {
        self.start.0 == self.end.0
    }

    /// `true` when `f` falls inside `[start, end)`.
    pub fn contains(self, f: FrameIndex) -> bool {
        self.start.0 <= f.0 && f.0 < self.end.0
    }

    /// Iterate over every frame in the window.
    pub fn frames(self) -> impl Iterator<Item = FrameIndex> {
        (self.start.0..self.end.0).map(FrameIndex)
    }
}

/// Rational frame rate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator.
    pub num: u32,
    /// Denominator, must be > 0.
    pub den: u32,
}

impl Fps {
    /// Frame rate every carousel composition is authored at.
    pub const CAROUSEL: Fps = Fps { num: 30, den: 1 };

    /// Build a frame rate, rejecting zero numerator or denominator.
    pub fn new(num: u32, den: u32) -> CarouselResult<Self> {
        if den == 0 {
            return Err(CarouselError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(CarouselError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Convert a (possibly negative, possibly fractional) frame offset into seconds.
    pub fn frames_to_secs(self, frames: f64) -> f64 {
        frames * f64::from(self.den) / f64::from(self.num)
    }
}

/// Output surface size in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Landscape 720p canvas used by every carousel composition.
    pub const CAROUSEL: Canvas = Canvas {
        width: 1280,
        height: 720,
    };
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
