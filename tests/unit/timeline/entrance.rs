use super::*;

#[test]
fn header_starts_hidden_and_settles() {
    let h = HeaderState::at(FrameIndex(0));
    assert_eq!(h.opacity, 0.0);
    assert_eq!(h.offset_y, -50.0);
    assert_eq!(h.scale, 0.8);

    let h = HeaderState::at(FrameIndex(300));
    assert!((h.opacity - 1.0).abs() < 1e-9);
    assert!(h.offset_y.abs() < 1e-6);
    assert!((h.scale - 1.0).abs() < 1e-9);
}

#[test]
fn header_is_driven_by_global_frame() {
    let early = HeaderState::at(FrameIndex(5));
    assert!(early.opacity > 0.0 && early.opacity < 1.0);
    // Slide changes do not replay the header: late frames stay settled.
    let late = HeaderState::at(FrameIndex(365));
    assert!((late.opacity - 1.0).abs() < 1e-9);
}

#[test]
fn caption_waits_thirty_frames() {
    for f in [-5, 0, 10, 29, 30] {
        let c = CaptionState::at(f);
        assert_eq!(c.entry, 0.0, "frame {f}");
        assert_eq!(c.opacity, 0.0);
        assert_eq!(c.scale, 0.5);
        assert_eq!(c.offset_y, 30.0);
    }
    let c = CaptionState::at(31);
    assert!(c.entry > 0.0);
}

#[test]
fn caption_settles_before_slide_ends() {
    let c = CaptionState::at(119);
    assert!((c.opacity - 1.0).abs() < 1e-3);
    assert!((c.scale - 1.0).abs() < 1e-3);
    assert!(c.offset_y.abs() < 0.1);
}

#[test]
fn caption_glow_pulses_from_slide_start() {
    let c = CaptionState::at(0);
    assert!((c.glow_opacity - 0.2).abs() < 1e-12);
    for f in 0..240 {
        let g = CaptionState::at(f).glow_opacity;
        assert!((0.1..=0.3).contains(&g));
    }
}
