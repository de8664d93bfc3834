use crate::{
    foundation::core::{Affine, Canvas, FrameIndex},
    theme::color::{Color, LinearGradient},
    timeline::{
        entrance::{CaptionState, HeaderState},
        slides::VisualState,
    },
};

/// Everything the host needs to draw one frame. Pure data, no behavior.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SceneDescription {
    /// Show being rendered.
    pub show_id: u32,
    /// Composition id of the show.
    pub composition: String,
    /// Global frame this scene was composed for.
    pub frame: FrameIndex,
    /// Output size.
    pub canvas: Canvas,
    /// Canvas fill.
    pub background: Color,
    /// Title header, present on every frame.
    pub header: HeaderElement,
    /// Slide content, or the end-of-show card.
    pub body: SceneBody,
}

impl SceneDescription {
    /// `true` once the show has run past its last slide.
    pub fn is_end_of_show(&self) -> bool {
        matches!(self.body, SceneBody::EndOfShow(_))
    }

    /// Active slide, if any.
    pub fn slide(&self) -> Option<&SlideElement> {
        match &self.body {
            SceneBody::Slide(s) => Some(s),
            SceneBody::EndOfShow(_) => None,
        }
    }
}

/// Title panel at the top of the frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct HeaderElement {
    /// Title text as authored.
    pub title: String,
    /// Panel fill.
    pub fill: LinearGradient,
    /// Panel border.
    pub border: Color,
    /// Title color.
    pub text_color: Color,
    /// Center color of the underline rule (fades to transparent at both ends).
    pub divider: Color,
    /// Entrance animation state.
    pub state: HeaderState,
}

/// What fills the frame under the header.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SceneBody {
    /// An active slide with its caption.
    Slide(SlideElement),
    /// Terminal card after the last slide.
    EndOfShow(EndOfShowElement),
}

/// Newspaper backdrop and moving accent glow behind a slide.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct BackdropElement {
    /// Resolved backdrop image, if the catalog provides one.
    pub image: Option<String>,
    /// Backdrop image opacity.
    pub image_opacity: f64,
    /// Theme-colored scrim drawn over the backdrop.
    pub scrim: Color,
    /// Scrim opacity.
    pub scrim_opacity: f64,
    /// Radial glow tint.
    pub glow: Color,
    /// Vertical center of the glow, in percent of canvas height.
    pub glow_center_y_pct: f64,
}

/// The active slide's image.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SlideElement {
    /// Index within the show.
    pub index: usize,
    /// Frames since this slide became active.
    pub relative_frame: i64,
    /// Resolved image reference.
    pub image: String,
    /// Backdrop plate.
    pub backdrop: BackdropElement,
    /// Animated image parameters.
    pub state: VisualState,
    /// Image transform about its center.
    pub transform: Affine,
    /// Maximum image box (90% x 65% of the canvas).
    pub max_size: (f64, f64),
    /// Image border color.
    pub border: Color,
    /// Image glow tint.
    pub glow: Color,
    /// Caption bubble for this slide.
    pub caption: CaptionElement,
}

/// Caption bubble anchored to the bottom of the frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct CaptionElement {
    /// Small label above the caption.
    pub label: String,
    /// Caption text.
    pub text: String,
    /// Bubble fill.
    pub fill: LinearGradient,
    /// Bubble border.
    pub border: Color,
    /// Text color.
    pub text_color: Color,
    /// Halo tint.
    pub glow: Color,
    /// Entrance animation state.
    pub state: CaptionState,
}

/// Static terminal card.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct EndOfShowElement {
    /// Card text.
    pub text: String,
    /// Text color.
    pub color: Color,
}
