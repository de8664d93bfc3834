use super::*;

use std::path::PathBuf;

fn scratch(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join("unit_catalog").join(name);
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn touch(dir: &Path, name: &str) {
    std::fs::write(dir.join(name), b"").unwrap();
}

#[test]
fn nine_images_make_three_shows() {
    let dir = scratch("nine");
    for i in 1..=9 {
        touch(&dir, &format!("batch-image-{i:02}.png"));
    }
    touch(&dir, "notes.txt");
    std::fs::create_dir_all(dir.join("nested.png")).unwrap();

    let catalog = Catalog::from_images_dir(&dir, "batch-images", None).unwrap();
    let sizes: Vec<usize> = catalog.shows.iter().map(|s| s.slides.len()).collect();
    assert_eq!(sizes, vec![4, 4, 1]);

    let ids: Vec<u32> = catalog.shows.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(catalog.shows[2].title, "COOL PROMPT IDEAS - PART 3");
    assert_eq!(catalog.shows[0].slides[0].image, "batch-images/batch-image-01.png");
    assert_eq!(catalog.shows[2].slides[0].image, "batch-images/batch-image-09.png");
    assert_eq!(catalog.shows[1].slides[3].caption, "AI Concept #batch-image-08");
    assert_eq!(catalog.backgrounds.len(), BACKGROUNDS.len());
}

#[test]
fn themes_cycle_across_shows() {
    let names: Vec<String> = (0..20).map(|i| format!("img-{i:02}.jpg")).collect();
    let catalog = Catalog::from_image_names(&names, "", &PromptBook::default()).unwrap();
    assert_eq!(catalog.shows.len(), 5);
    for (i, show) in catalog.shows.iter().enumerate() {
        assert_eq!(show.theme, ThemeId::ALL[i % 3]);
    }
    assert_eq!(catalog.shows[0].slides[0].image, "img-00.jpg");
}

#[test]
fn captions_come_from_the_prompts_file() {
    let dir = scratch("prompts");
    touch(&dir, "a.png");
    touch(&dir, "b.JPEG");
    let long = "word ".repeat(60);
    let prompts = dir.join("batch-prompts.json");
    let json = serde_json::json!({
        "images": [
            { "filename": "a.png", "publicPath": "/batch-images/a.png",
              "prompt": "  A neon\n  city at dusk ", "hasPrompt": true },
            { "filename": "b.JPEG", "prompt": long },
        ],
        "metadata": { "totalImages": 2 }
    });
    std::fs::write(&prompts, json.to_string()).unwrap();

    let catalog = Catalog::from_images_dir(&dir, "/batch-images/", Some(&prompts)).unwrap();
    let slides = &catalog.shows[0].slides;
    assert_eq!(slides.len(), 2);
    assert_eq!(slides[0].image, "batch-images/a.png");
    assert_eq!(slides[0].caption, "A neon city at dusk");
    assert_eq!(slides[1].caption.chars().count(), PROMPT_MAX_CHARS);
    assert!(slides[1].caption.starts_with("word word"));
}

#[test]
fn blank_prompts_fall_back_to_the_file_stem() {
    let json = r#"{"images": [{"filename": "x.png", "prompt": "   "}, {"filename": "y.png"}]}"#;
    let book = PromptBook::from_reader(json.as_bytes()).unwrap();
    assert_eq!(book.caption_for("x.png"), "AI Concept #x");
    assert_eq!(book.caption_for("y.png"), "AI Concept #y");
}

#[test]
fn empty_or_missing_folders_are_errors() {
    let dir = scratch("empty");
    touch(&dir, "readme.md");
    let err = Catalog::from_images_dir(&dir, "batch-images", None).unwrap_err();
    assert!(matches!(err, CarouselError::Validation(_)));

    let err = Catalog::from_images_dir(&dir.join("missing"), "batch-images", None).unwrap_err();
    assert!(matches!(err, CarouselError::Io { .. }));

    let err = PromptBook::from_reader("[]".as_bytes()).unwrap_err();
    assert!(matches!(err, CarouselError::Serde(_)));
}
