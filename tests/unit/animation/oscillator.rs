use super::*;

#[test]
fn wave_is_bounded_for_any_frame() {
    let bob = Oscillator::wave(0.015, 20.0);
    for f in -2000..2000 {
        let v = bob.sample(f64::from(f));
        assert!((-20.0..=20.0).contains(&v));
    }
    assert_eq!(bob.bounds(), (-20.0, 20.0));
}

#[test]
fn pulse_stays_in_unit_range() {
    let p = Oscillator::pulse(0.03);
    for f in 0..1000 {
        let v = p.sample(f64::from(f));
        assert!((0.0..=1.0).contains(&v));
    }
    assert_eq!(p.sample(0.0), 0.5);
}

#[test]
fn wave_is_periodic() {
    let sway = Oscillator::wave(0.01, 0.8);
    let period = sway.period_frames();
    assert!((period - 628.318_530_717_958_6).abs() < 1e-9);
    for f in [0.0, 13.0, 250.0] {
        assert!((sway.sample(f) - sway.sample(f + period)).abs() < 1e-9);
    }
}

#[test]
fn zero_rate_never_repeats() {
    assert!(Oscillator::wave(0.0, 1.0).period_frames().is_infinite());
    assert_eq!(Oscillator::wave(0.0, 1.0).sample(123.0), 0.0);
}
