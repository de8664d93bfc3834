use super::*;
use crate::foundation::error::CarouselError;
use crate::scene::assets::UrlPrefixResolver;
use crate::theme::registry::ThemeId;

fn urls() -> UrlPrefixResolver {
    UrlPrefixResolver::new("http://localhost:8080/static").unwrap()
}

struct Refusing;

impl AssetResolver for Refusing {
    fn resolve(&self, logical_path: &str) -> CarouselResult<String> {
        Err(CarouselError::not_found(format!("asset {logical_path}")))
    }
}

#[test]
fn first_frame_shows_first_slide_with_resolved_image() {
    let catalog = Catalog::builtin();
    let scene = Composer::compose(&catalog, 1, FrameIndex(0), &urls()).unwrap();

    assert_eq!(scene.show_id, 1);
    assert_eq!(scene.composition, "BatchCarousel-Video1");
    assert_eq!(scene.canvas, Canvas::CAROUSEL);
    assert_eq!(scene.background, ThemeId::MightyDark.theme().background);
    assert_eq!(scene.header.title, "COOL PROMPT IDEAS - PART 1");

    let slide = scene.slide().unwrap();
    assert_eq!(slide.index, 0);
    assert_eq!(slide.relative_frame, 0);
    assert_eq!(slide.image, "http://localhost:8080/static/batch-images/batch-image-11%20(1).png");
    assert_eq!(slide.caption.text, "AI Fashion Concept #11");
    assert_eq!(slide.caption.label, CAPTION_LABEL);
    assert_eq!(slide.state.opacity, 0.0);
    assert_eq!(slide.caption.state.opacity, 0.0);
    assert_eq!(slide.max_size, (1152.0, 468.0));
}

#[test]
fn slide_boundary_switches_index_and_resets_relative_frame() {
    let catalog = Catalog::builtin();
    let before = Composer::compose(&catalog, 2, FrameIndex(119), &urls()).unwrap();
    let after = Composer::compose(&catalog, 2, FrameIndex(120), &urls()).unwrap();

    assert_eq!(before.slide().unwrap().index, 0);
    assert_eq!(before.slide().unwrap().relative_frame, 119);
    assert_eq!(after.slide().unwrap().index, 1);
    assert_eq!(after.slide().unwrap().relative_frame, 0);
}

#[test]
fn frames_past_the_end_compose_end_of_show() {
    let catalog = Catalog::builtin();
    let scene = Composer::compose(&catalog, 5, FrameIndex(240), &urls()).unwrap();

    assert!(scene.is_end_of_show());
    assert!(scene.slide().is_none());
    match &scene.body {
        SceneBody::EndOfShow(card) => {
            assert_eq!(card.text, END_OF_SHOW_TEXT);
            assert_eq!(card.color, scene.header.text_color);
        }
        SceneBody::Slide(_) => panic!("expected end of show"),
    }
    // Header keeps animating independently of the slides.
    assert!(scene.header.state.opacity > 0.99);
}

#[test]
fn unknown_show_is_not_found() {
    let catalog = Catalog::builtin();
    let err = Composer::compose(&catalog, 99, FrameIndex(0), &urls()).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn backdrop_follows_catalog_backgrounds() {
    let mut catalog = Catalog::builtin();
    let scene = Composer::compose(&catalog, 1, FrameIndex(10), &urls()).unwrap();
    let backdrop = &scene.slide().unwrap().backdrop;
    let backdrop_url = backdrop.image.as_deref().unwrap();
    assert!(backdrop_url.starts_with("http://localhost:8080/static/backgrounds/"));
    assert_eq!(backdrop.scrim, scene.background);
    let expected_center = 50.0 + scene.slide().unwrap().state.float_y;
    assert!((backdrop.glow_center_y_pct - expected_center).abs() < 1e-12);

    catalog.backgrounds.clear();
    let scene = Composer::compose(&catalog, 1, FrameIndex(10), &urls()).unwrap();
    assert_eq!(scene.slide().unwrap().backdrop.image, None);
}

#[test]
fn resolver_errors_propagate_for_slides_only() {
    let catalog = Catalog::builtin();
    assert!(Composer::compose(&catalog, 1, FrameIndex(0), &Refusing).is_err());

    let end = Composer::compose(&catalog, 1, FrameIndex(480), &Refusing).unwrap();
    assert!(end.is_end_of_show());
}

#[test]
fn transform_matches_visual_state() {
    let catalog = Catalog::builtin();
    let scene = Composer::compose(&catalog, 3, FrameIndex(200), &urls()).unwrap();
    let slide = scene.slide().unwrap();
    assert_eq!(slide.transform, slide.state.to_affine());
}

#[test]
fn header_divider_is_translucent_title_color() {
    let catalog = Catalog::builtin();
    let scene = Composer::compose(&catalog, 2, FrameIndex(0), &urls()).unwrap();
    let header = &scene.header;
    assert_eq!(header.divider.r, header.text_color.r);
    assert!((header.divider.a - 64.0 / 255.0).abs() < 1e-12);
}

#[test]
fn scenes_serialize_with_tagged_body() {
    let catalog = Catalog::builtin();
    let slide = Composer::compose(&catalog, 1, FrameIndex(0), &urls()).unwrap();
    let end = Composer::compose(&catalog, 1, FrameIndex(500), &urls()).unwrap();

    let slide_json = serde_json::to_value(&slide).unwrap();
    let end_json = serde_json::to_value(&end).unwrap();
    assert_eq!(slide_json["body"]["kind"], "slide");
    assert_eq!(end_json["body"]["kind"], "end_of_show");
    assert_eq!(end_json["body"]["text"], "END OF SHOW");
}
