use super::*;

#[test]
fn frame_range_contains_boundaries() {
    let r = FrameRange::new(FrameIndex(120), FrameIndex(240)).unwrap();
    assert!(!r.contains(FrameIndex(119)));
    assert!(r.contains(FrameIndex(120)));
    assert!(r.contains(FrameIndex(239)));
    assert!(!r.contains(FrameIndex(240)));
    assert_eq!(r.len_frames(), 120);
}

#[test]
fn frame_range_rejects_inverted_bounds() {
    assert!(FrameRange::new(FrameIndex(5), FrameIndex(4)).is_err());
    assert!(FrameRange::new(FrameIndex(5), FrameIndex(5)).unwrap().is_empty());
}

#[test]
fn frame_range_iterates_every_frame() {
    let r = FrameRange::new(FrameIndex(3), FrameIndex(6)).unwrap();
    let frames: Vec<u64> = r.frames().map(|f| f.0).collect();
    assert_eq!(frames, vec![3, 4, 5]);
}

#[test]
fn fps_converts_signed_frames_to_secs() {
    let fps = Fps::new(30, 1).unwrap();
    assert_eq!(fps.frames_to_secs(30.0), 1.0);
    assert_eq!(fps.frames_to_secs(-15.0), -0.5);
    assert!(Fps::new(30, 0).is_err());
    assert!(Fps::new(0, 1).is_err());
}
