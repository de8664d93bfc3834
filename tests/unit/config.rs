use super::*;

#[test]
fn empty_object_yields_defaults() {
    let config = CarouselConfig::from_reader("{}".as_bytes()).unwrap();
    assert_eq!(config, CarouselConfig::default());
    assert_eq!(config.default_codec, "h264");
    assert_eq!(config.images_dir, Path::new("public").join("batch-images"));
    assert_eq!(config.renderer.program, "npx");
}

#[test]
fn partial_overrides_keep_other_defaults() {
    let json = r#"{
        "public_dir": "assets",
        "threads": 2,
        "renderer": { "program": "render-video", "args": ["{composition}", "{output}"] }
    }"#;
    let config = CarouselConfig::from_reader(json.as_bytes()).unwrap();
    assert_eq!(config.public_dir, PathBuf::from("assets"));
    assert_eq!(config.threads, Some(2));
    assert_eq!(config.renderer.args.len(), 2);
    assert_eq!(config.chunk_size, 64);

    let threading = config.threading(true);
    assert!(threading.parallel);
    assert_eq!(threading.threads, Some(2));
}

#[test]
fn rejects_unknown_fields_and_bad_values() {
    let err = CarouselConfig::from_reader(r#"{"port": 8080}"#.as_bytes()).unwrap_err();
    assert!(matches!(err, CarouselError::Serde(_)));

    let err = CarouselConfig::from_reader(r#"{"threads": 0}"#.as_bytes()).unwrap_err();
    assert!(matches!(err, CarouselError::Validation(_)));

    let err = CarouselConfig::from_reader(r#"{"default_codec": " "}"#.as_bytes()).unwrap_err();
    assert!(matches!(err, CarouselError::Validation(_)));
}

#[test]
fn missing_file_is_io_error() {
    let err = CarouselConfig::from_path("target/does-not-exist/carousel.json").unwrap_err();
    assert!(matches!(err, CarouselError::Io { .. }));
}

#[test]
fn catalog_defaults_to_builtin() {
    let catalog = CarouselConfig::default().load_catalog().unwrap();
    assert_eq!(catalog, Catalog::builtin());
}

#[test]
fn batch_catalog_uses_paths_relative_to_public_dir() {
    let root = PathBuf::from("target").join("unit_config").join("batch");
    let _ = std::fs::remove_dir_all(&root);
    let images = root.join("public").join("batch-images");
    std::fs::create_dir_all(&images).unwrap();
    for i in 1..=5 {
        std::fs::write(images.join(format!("batch-image-{i}.png")), b"").unwrap();
    }

    let config = CarouselConfig {
        public_dir: root.join("public"),
        images_dir: images,
        prompts_file: root.join("public").join("batch-prompts.json"),
        ..CarouselConfig::default()
    };
    let catalog = config.batch_catalog().unwrap();
    assert_eq!(catalog.shows.len(), 2);
    assert_eq!(catalog.shows[1].slides[0].image, "batch-images/batch-image-5.png");
    assert_eq!(catalog.shows[1].slides[0].caption, "AI Concept #batch-image-5");
}
