//! Frame-accurate scene engine for batch image carousel videos.
//!
//! Every frame of a show is a pure function of `(show, frame)`:
//!
//! - Pick a [`Show`] from a [`Catalog`] (built-in, or loaded from JSON)
//! - Ask the [`Composer`] for the [`SceneDescription`] of any frame, in any order
//! - Hand the scene to a renderer, or compose whole ranges with [`compose_range`]
//!
//! Around the engine sit the media workflow pieces: importing slide images
//! ([`MediaLibrary`]), launching the external renderer ([`JobRunner`]) and listing finished
//! videos.
#![forbid(unsafe_code)]

mod foundation;

pub(crate) mod animation;
pub(crate) mod catalog;
pub(crate) mod config;
pub(crate) mod fingerprint;
pub(crate) mod jobs;
pub(crate) mod library;
pub(crate) mod pipeline;
pub(crate) mod scene;
pub(crate) mod theme;
pub(crate) mod timeline;

pub use crate::foundation::core::{Affine, Canvas, Fps, FrameIndex, FrameRange, Vec2};
pub use crate::foundation::error::{CarouselError, CarouselResult};

pub use crate::animation::interpolate::{interpolate, ramp};
pub use crate::animation::oscillator::Oscillator;
pub use crate::animation::spring::{SpringConfig, spring};
pub use crate::catalog::batch::{IMAGES_PER_SHOW, PROMPT_MAX_CHARS, PromptBook};
pub use crate::catalog::model::{Catalog, CompositionInfo, Show, SlideSpec};
pub use crate::config::CarouselConfig;
pub use crate::fingerprint::{SceneFingerprint, fingerprint_scene};
pub use crate::jobs::{DEFAULT_CODEC, JobRunner, JobStatus, RenderJob, RendererCommand, poll_path};
pub use crate::library::{MAX_IMPORT_FILES, MediaLibrary, VideoEntry, rfc3339};
pub use crate::pipeline::{
    ComposeStats, ComposeThreading, compose_range, compose_show, fingerprint_scenes,
};
pub use crate::scene::assets::{
    AssetResolver, StaticDirResolver, UrlPrefixResolver, normalize_rel_path,
};
pub use crate::scene::composer::{CAPTION_LABEL, Composer, END_OF_SHOW_TEXT};
pub use crate::scene::model::{
    BackdropElement, CaptionElement, EndOfShowElement, HeaderElement, SceneBody,
    SceneDescription, SlideElement,
};
pub use crate::theme::color::{Color, GradientStop, LinearGradient};
pub use crate::theme::registry::{Theme, ThemeId};
pub use crate::timeline::entrance::{
    CAPTION_DELAY_FRAMES, CAPTION_SPRING, CaptionState, HEADER_SPRING, HeaderState,
};
pub use crate::timeline::slides::{
    SLIDE_DURATION_FRAMES, SLIDE_SPRING, SlideResolution, TimedSlide, VisualState, resolve,
    resolve_by_id, timed_slides, total_duration,
};
