use super::*;

fn two_slide_show(id: u32) -> Show {
    Show {
        id,
        title: format!("SHOW {id}"),
        theme: ThemeId::MelodicaGradient,
        slides: vec![
            SlideSpec {
                image: "batch-images/a.png".to_owned(),
                caption: "A".to_owned(),
            },
            SlideSpec {
                image: "batch-images/b.png".to_owned(),
                caption: "B".to_owned(),
            },
        ],
    }
}

#[test]
fn builtin_catalog_is_valid() {
    let catalog = Catalog::builtin();
    catalog.validate().unwrap();
    assert_eq!(catalog.shows.len(), 5);
    assert_eq!(catalog.backgrounds.len(), 6);

    let show = catalog.get(3).unwrap();
    assert_eq!(show.title, "COOL PROMPT IDEAS - PART 3");
    assert_eq!(show.theme, ThemeId::MelodicaGradient);
    assert_eq!(show.slides[0].image, "batch-images/batch-image-29.png");
    assert_eq!(show.slides[0].caption, "AI Fashion Concept #29");
}

#[test]
fn unknown_show_is_not_found() {
    let catalog = Catalog::builtin();
    let err = catalog.get(42).unwrap_err();
    assert!(err.is_not_found());
    assert!(err.to_string().contains("show 42"));
}

#[test]
fn compositions_follow_slide_counts() {
    let comps = Catalog::builtin().compositions();
    let durations: Vec<u64> = comps.iter().map(|c| c.duration_frames).collect();
    assert_eq!(durations, vec![480, 480, 480, 480, 240]);
    assert_eq!(comps[0].id, "BatchCarousel-Video1");
    assert_eq!(comps[4].name, "Batch Carousel Video 5");
    assert_eq!(comps[0].canvas, Canvas::CAROUSEL);
    assert_eq!(comps[0].fps, Fps::CAROUSEL);
}

#[test]
fn composition_ids_resolve_back_to_shows() {
    let catalog = Catalog::builtin();
    assert_eq!(catalog.get_by_composition("BatchCarousel-Video2").unwrap().id, 2);
    assert!(catalog.get_by_composition("BatchCarousel-Video9").unwrap_err().is_not_found());
    assert!(catalog.get_by_composition("HelloWorld").unwrap_err().is_not_found());
}

#[test]
fn backgrounds_rotate_by_show_id() {
    let catalog = Catalog::builtin();
    assert_eq!(
        catalog.background_for(1),
        Some("backgrounds/random newspaper text backgdrop.jpg")
    );
    assert_eq!(catalog.background_for(6), catalog.background_for(0));

    let bare = Catalog {
        shows: vec![two_slide_show(1)],
        backgrounds: vec![],
    };
    assert_eq!(bare.background_for(1), None);
}

#[test]
fn validate_rejects_duplicate_ids_and_empty_shows() {
    let dup = Catalog {
        shows: vec![two_slide_show(1), two_slide_show(1)],
        backgrounds: vec![],
    };
    assert!(dup.validate().is_err());

    let mut empty = two_slide_show(2);
    empty.slides.clear();
    let catalog = Catalog {
        shows: vec![empty],
        backgrounds: vec![],
    };
    assert!(catalog.validate().is_err());
}

#[test]
fn validate_rejects_escaping_asset_paths() {
    let mut show = two_slide_show(1);
    show.slides[1].image = "../secrets/key.png".to_owned();
    let catalog = Catalog {
        shows: vec![show],
        backgrounds: vec![],
    };
    assert!(matches!(
        catalog.validate(),
        Err(CarouselError::Validation(_))
    ));
}

#[test]
fn json_catalog_parses_and_validates() {
    let json = r#"{
        "shows": [
            {
                "id": 7,
                "title": "WEEKEND DROPS",
                "theme": "melodicaPurple",
                "slides": [
                    { "image": "batch-images/x.png", "caption": "X" }
                ]
            }
        ]
    }"#;
    let catalog = Catalog::from_reader(json.as_bytes()).unwrap();
    assert_eq!(catalog.get(7).unwrap().theme, ThemeId::MelodicaPurple);
    assert!(catalog.backgrounds.is_empty());

    let bad_theme = json.replace("melodicaPurple", "vaporwave");
    assert!(matches!(
        Catalog::from_reader(bad_theme.as_bytes()),
        Err(CarouselError::Serde(_))
    ));
}
