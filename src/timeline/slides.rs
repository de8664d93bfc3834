use crate::{
    animation::{interpolate::ramp, oscillator::Oscillator, spring::{SpringConfig, spring}},
    catalog::model::{Catalog, Show},
    foundation::core::{Affine, Fps, FrameIndex, FrameRange, Vec2},
    foundation::error::CarouselResult,
};

/// Every slide holds the screen for 4 seconds at 30 fps.
pub const SLIDE_DURATION_FRAMES: u64 = 120;

/// Bounce-in used for each slide's image.
pub const SLIDE_SPRING: SpringConfig = SpringConfig::new(12.0, 60.0, 1.0);

const SWAY: Oscillator = Oscillator::wave(0.01, 0.8);
const BOB: Oscillator = Oscillator::wave(0.015, 20.0);
const GLOW: Oscillator = Oscillator::pulse(0.03);

/// A slide placed on the show timeline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimedSlide<'a> {
    /// Position within the show.
    pub index: usize,
    /// Logical image path.
    pub image: &'a str,
    /// Caption text.
    pub caption: &'a str,
    /// Frames during which this slide is active.
    pub window: FrameRange,
}

/// Total length of a show in frames.
pub fn total_duration(show: &Show) -> u64 {
    show.slides.len() as u64 * SLIDE_DURATION_FRAMES
}

/// Slides with their contiguous, non-overlapping windows, in playback order.
pub fn timed_slides(show: &Show) -> impl Iterator<Item = TimedSlide<'_>> {
    show.slides.iter().enumerate().map(|(index, spec)| {
        let start = index as u64 * SLIDE_DURATION_FRAMES;
        TimedSlide {
            index,
            image: &spec.image,
            caption: &spec.caption,
            window: FrameRange {
                start: FrameIndex(start),
                end: FrameIndex(start + SLIDE_DURATION_FRAMES),
            },
        }
    })
}

/// Resolved look of the active slide's image for one frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct VisualState {
    /// Raw entry spring progress (may overshoot 1).
    pub entry: f64,
    /// Image opacity in `[0, 1]`.
    pub opacity: f64,
    /// Uniform scale, 0.3 at entry start.
    pub scale: f64,
    /// Entry tilt plus idle sway, in degrees.
    pub rotation_deg: f64,
    /// Horizontal slide-in offset in pixels.
    pub offset_x: f64,
    /// Idle vertical bob in pixels, within `[-20, 20]`.
    pub float_y: f64,
    /// Accent glow opacity in `[0.1, 0.3]`.
    pub glow_opacity: f64,
    /// Drop shadow blur radius in `[30, 60]`.
    pub shadow_blur: f64,
    /// Drop shadow opacity in `[0.3, 0.6]`.
    pub shadow_opacity: f64,
}

impl VisualState {
    /// State at `relative_frame` frames after the slide became active.
    ///
    /// Negative offsets leave the entry animation at its start; the idle oscillators are
    /// defined everywhere.
    pub fn at(relative_frame: i64) -> Self {
        let f = relative_frame as f64;
        let entry = spring(f, Fps::CAROUSEL, SLIDE_SPRING);
        let pulse = GLOW.sample(f);

        Self {
            entry,
            opacity: ramp(entry, 0.0, 1.0),
            scale: ramp(entry, 0.3, 1.0),
            rotation_deg: ramp(entry, -5.0, 0.0) + SWAY.sample(f),
            offset_x: ramp(entry, -200.0, 0.0),
            float_y: BOB.sample(f),
            glow_opacity: ramp(pulse, 0.1, 0.3),
            shadow_blur: ramp(pulse, 30.0, 60.0),
            shadow_opacity: ramp(pulse, 0.3, 0.6),
        }
    }

    /// Image transform about the slide's center:
    /// `translate(0, float_y) * scale * rotate * translate(offset_x, 0)`.
    pub fn to_affine(&self) -> Affine {
        Affine::translate(Vec2::new(0.0, self.float_y))
            * Affine::scale(self.scale)
            * Affine::rotate(self.rotation_deg.to_radians())
            * Affine::translate(Vec2::new(self.offset_x, 0.0))
    }
}

/// The slide that owns a frame and how it looks there.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct SlideResolution {
    /// Index of the active slide.
    pub index: usize,
    /// Frames since the active slide's window opened.
    pub relative_frame: i64,
    /// Image state.
    pub state: VisualState,
}

/// Map a global frame to the active slide, or `None` once the show has ended.
pub fn resolve(show: &Show, frame: FrameIndex) -> Option<SlideResolution> {
    if frame.0 >= total_duration(show) {
        return None;
    }
    let slide = timed_slides(show).find(|s| s.window.contains(frame))?;
    let relative_frame = frame.0 as i64 - slide.window.start.0 as i64;
    Some(SlideResolution {
        index: slide.index,
        relative_frame,
        state: VisualState::at(relative_frame),
    })
}

/// [`resolve`] by show id; unknown ids are `NotFound`.
pub fn resolve_by_id(
    catalog: &Catalog,
    show_id: u32,
    frame: FrameIndex,
) -> CarouselResult<Option<SlideResolution>> {
    let show = catalog.get(show_id)?;
    Ok(resolve(show, frame))
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/slides.rs"]
mod tests;
