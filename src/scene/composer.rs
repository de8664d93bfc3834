use crate::{
    catalog::model::{Catalog, Show},
    foundation::core::{Canvas, FrameIndex},
    foundation::error::CarouselResult,
    scene::assets::AssetResolver,
    scene::model::{
        BackdropElement, CaptionElement, EndOfShowElement, HeaderElement, SceneBody,
        SceneDescription, SlideElement,
    },
    theme::registry::Theme,
    timeline::{
        entrance::{CaptionState, HeaderState},
        slides::{SlideResolution, resolve},
    },
};

/// Text on the terminal card.
pub const END_OF_SHOW_TEXT: &str = "END OF SHOW";

/// Label above every caption.
pub const CAPTION_LABEL: &str = "⚡ PROMPT";

const BACKDROP_IMAGE_OPACITY: f64 = 0.4;
const BACKDROP_SCRIM_OPACITY: f64 = 0.7;
// Header underline: header text color at 0x40 alpha.
const DIVIDER_ALPHA: f64 = 64.0 / 255.0;

/// Builds [`SceneDescription`]s. Stateless; every call is independent.
pub struct Composer;

impl Composer {
    /// Compose frame `frame` of show `show_id`. Unknown show ids are `NotFound`.
    #[tracing::instrument(skip(catalog, assets))]
    pub fn compose(
        catalog: &Catalog,
        show_id: u32,
        frame: FrameIndex,
        assets: &dyn AssetResolver,
    ) -> CarouselResult<SceneDescription> {
        let show = catalog.get(show_id)?;
        Self::compose_show(show, catalog.background_for(show_id), frame, assets)
    }

    /// Compose a frame for an already looked-up show.
    pub fn compose_show(
        show: &Show,
        background: Option<&str>,
        frame: FrameIndex,
        assets: &dyn AssetResolver,
    ) -> CarouselResult<SceneDescription> {
        let theme = show.theme();
        let canvas = Canvas::CAROUSEL;

        let body = match resolve(show, frame) {
            None => SceneBody::EndOfShow(EndOfShowElement {
                text: END_OF_SHOW_TEXT.to_owned(),
                color: theme.header_text,
            }),
            Some(res) => SceneBody::Slide(slide_element(
                show, &res, theme, canvas, background, assets,
            )?),
        };

        Ok(SceneDescription {
            show_id: show.id,
            composition: show.composition_id(),
            frame,
            canvas,
            background: theme.background,
            header: header_element(show, theme, frame),
            body,
        })
    }
}

fn header_element(show: &Show, theme: &Theme, frame: FrameIndex) -> HeaderElement {
    HeaderElement {
        title: show.title.clone(),
        fill: theme.header_bg,
        border: theme.header_border,
        text_color: theme.header_text,
        divider: theme.header_text.with_alpha(DIVIDER_ALPHA),
        state: HeaderState::at(frame),
    }
}

fn slide_element(
    show: &Show,
    res: &SlideResolution,
    theme: &Theme,
    canvas: Canvas,
    background: Option<&str>,
    assets: &dyn AssetResolver,
) -> CarouselResult<SlideElement> {
    let spec = &show.slides[res.index];
    let backdrop = BackdropElement {
        image: background.map(|bg| assets.resolve(bg)).transpose()?,
        image_opacity: BACKDROP_IMAGE_OPACITY,
        scrim: theme.background,
        scrim_opacity: BACKDROP_SCRIM_OPACITY,
        glow: theme.accent_glow,
        glow_center_y_pct: 50.0 + res.state.float_y,
    };

    Ok(SlideElement {
        index: res.index,
        relative_frame: res.relative_frame,
        image: assets.resolve(&spec.image)?,
        backdrop,
        state: res.state,
        transform: res.state.to_affine(),
        max_size: (
            f64::from(canvas.width) * 0.9,
            f64::from(canvas.height) * 0.65,
        ),
        border: theme.bubble_border,
        glow: theme.accent_glow,
        caption: CaptionElement {
            label: CAPTION_LABEL.to_owned(),
            text: spec.caption.clone(),
            fill: theme.bubble_bg,
            border: theme.bubble_border,
            text_color: theme.bubble_text,
            glow: theme.accent_glow,
            state: CaptionState::at(res.relative_frame),
        },
    })
}

#[cfg(test)]
#[path = "../../tests/unit/scene/composer.rs"]
mod tests;
