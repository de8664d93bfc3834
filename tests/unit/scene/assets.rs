use super::*;

#[test]
fn normalize_strips_dots_and_backslashes() {
    assert_eq!(
        normalize_rel_path("./batch-images\\a.png").unwrap(),
        "batch-images/a.png"
    );
    assert_eq!(normalize_rel_path("a//b/./c.png").unwrap(), "a/b/c.png");
}

#[test]
fn normalize_rejects_escapes() {
    assert!(normalize_rel_path("/etc/passwd").is_err());
    assert!(normalize_rel_path("../x.png").is_err());
    assert!(normalize_rel_path("a/../../x.png").is_err());
    assert!(normalize_rel_path("").is_err());
    assert!(normalize_rel_path("./").is_err());
}

#[test]
fn static_dir_resolver_joins_under_root() {
    let r = StaticDirResolver::new("public");
    let p = r.resolve("batch-images/batch-image-16.png").unwrap();
    assert_eq!(
        std::path::Path::new(&p),
        std::path::Path::new("public").join("batch-images/batch-image-16.png")
    );
    assert!(r.resolve("../outside.png").is_err());
}

#[test]
fn url_resolver_encodes_segments() {
    let r = UrlPrefixResolver::new("http://localhost:8080/").unwrap();
    assert_eq!(
        r.resolve("batch-images/batch-image-11 (1).png").unwrap(),
        "http://localhost:8080/batch-images/batch-image-11%20(1).png"
    );
    assert_eq!(
        r.resolve("backgrounds/a#b?.jpg").unwrap(),
        "http://localhost:8080/backgrounds/a%23b%3F.jpg"
    );
}

#[test]
fn url_resolver_appends_below_base_path() {
    for base in ["https://cdn.example.com/public", "https://cdn.example.com/public/"] {
        let r = UrlPrefixResolver::new(base).unwrap();
        assert_eq!(
            r.resolve("batch-images/a.png").unwrap(),
            "https://cdn.example.com/public/batch-images/a.png"
        );
    }
}

#[test]
fn url_resolver_keeps_query_and_fragment_after_the_path() {
    let r = UrlPrefixResolver::new("https://cdn.example.com/public?v=2").unwrap();
    assert_eq!(
        r.resolve("batch-images/a.png").unwrap(),
        "https://cdn.example.com/public/batch-images/a.png?v=2"
    );

    let r = UrlPrefixResolver::new("https://cdn.example.com/#top").unwrap();
    assert_eq!(
        r.resolve("a.png").unwrap(),
        "https://cdn.example.com/a.png#top"
    );
}

#[test]
fn url_resolver_rejects_unusable_bases_and_escapes() {
    assert!(matches!(
        UrlPrefixResolver::new("/static").unwrap_err(),
        CarouselError::Validation(_)
    ));
    assert!(UrlPrefixResolver::new("mailto:team@example.com").is_err());

    let r = UrlPrefixResolver::new("https://cdn.example.com/").unwrap();
    assert!(r.resolve("../secret.png").is_err());
}
