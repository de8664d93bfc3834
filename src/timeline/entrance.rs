use crate::{
    animation::{interpolate::ramp, oscillator::Oscillator, spring::{SpringConfig, spring}},
    foundation::core::{Fps, FrameIndex},
};

/// Header drop-in; plays once per show, driven by the global frame.
pub const HEADER_SPRING: SpringConfig = SpringConfig::new(15.0, 100.0, 1.0);

/// Caption pop-in; replays for every slide after [`CAPTION_DELAY_FRAMES`].
pub const CAPTION_SPRING: SpringConfig = SpringConfig::new(15.0, 100.0, 1.5);

/// Frames the caption waits after its slide becomes active.
pub const CAPTION_DELAY_FRAMES: i64 = 30;

const CAPTION_GLOW: Oscillator = Oscillator::pulse(0.05);

/// Title header entrance state.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct HeaderState {
    /// Raw spring progress.
    pub entry: f64,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Vertical offset in pixels, from -50 up to 0.
    pub offset_y: f64,
    /// Uniform scale, from 0.8 to 1.
    pub scale: f64,
}

impl HeaderState {
    /// Header state at a global frame.
    pub fn at(frame: FrameIndex) -> Self {
        let entry = spring(frame.0 as f64, Fps::CAROUSEL, HEADER_SPRING);
        Self {
            entry,
            opacity: ramp(entry, 0.0, 1.0),
            offset_y: ramp(entry, -50.0, 0.0),
            scale: ramp(entry, 0.8, 1.0),
        }
    }
}

/// Caption bubble entrance state.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct CaptionState {
    /// Raw spring progress.
    pub entry: f64,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Uniform scale, from 0.5 to 1.
    pub scale: f64,
    /// Vertical offset in pixels, from 30 down to 0.
    pub offset_y: f64,
    /// Glow halo opacity in `[0.1, 0.3]`.
    pub glow_opacity: f64,
}

impl CaptionState {
    /// Caption state at `relative_frame` frames into its slide.
    pub fn at(relative_frame: i64) -> Self {
        let delayed = (relative_frame - CAPTION_DELAY_FRAMES) as f64;
        let entry = spring(delayed, Fps::CAROUSEL, CAPTION_SPRING);
        let pulse = CAPTION_GLOW.sample(relative_frame as f64);
        Self {
            entry,
            opacity: ramp(entry, 0.0, 1.0),
            scale: ramp(entry, 0.5, 1.0),
            offset_y: ramp(entry, 30.0, 0.0),
            glow_opacity: ramp(pulse, 0.1, 0.3),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/entrance.rs"]
mod tests;
