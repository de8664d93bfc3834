use super::*;

#[test]
fn every_theme_resolves_by_name() {
    for id in ThemeId::ALL {
        assert_eq!(id.as_str().parse::<ThemeId>().unwrap(), id);
        assert_eq!(id.to_string(), id.as_str());
    }
}

#[test]
fn unknown_theme_is_not_found() {
    let err = "neonSunset".parse::<ThemeId>().unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn serde_names_match_registry_keys() {
    for id in ThemeId::ALL {
        let v = serde_json::to_value(id).unwrap();
        assert_eq!(v, serde_json::Value::String(id.as_str().to_owned()));
        let back: ThemeId = serde_json::from_value(v).unwrap();
        assert_eq!(back, id);
    }
}

#[test]
fn palettes_keep_their_signature_colors() {
    let purple = ThemeId::MelodicaPurple.theme();
    assert_eq!(purple.header_bg.to_css(), "linear-gradient(135deg, #9f5afd 0%, #fe54d1 100%)");
    assert_eq!(purple.accent_glow, Color::rgba(159, 90, 253, 0.1));

    let dark = ThemeId::MightyDark.theme();
    assert_eq!(dark.background.to_string(), "#141414");
    assert_eq!(dark.header_bg, dark.bubble_bg);

    let gradient = ThemeId::MelodicaGradient.theme();
    assert_eq!(gradient.background, "#0a0a1a".parse().unwrap());
    assert_eq!(gradient.bubble_border.to_string(), "rgba(188, 95, 252, 0.4)");
}
