/// Unbounded-in-time sine oscillator sampled in frame units:
/// `offset + sin(frame * rate) * amplitude`.
///
/// Used for the idle sway, bob and glow pulses that never settle.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Oscillator {
    /// Angular rate in radians per frame.
    pub rate: f64,
    /// Peak deviation from `offset`.
    pub amplitude: f64,
    /// Center value.
    pub offset: f64,
}

impl Oscillator {
    /// Zero-centered wave.
    pub const fn wave(rate: f64, amplitude: f64) -> Self {
        Self {
            rate,
            amplitude,
            offset: 0.0,
        }
    }

    /// Unit pulse in `[0, 1]`: `sin(frame * rate) * 0.5 + 0.5`.
    pub const fn pulse(rate: f64) -> Self {
        Self {
            rate,
            amplitude: 0.5,
            offset: 0.5,
        }
    }

    /// Sample at a (possibly negative) frame offset.
    pub fn sample(self, frame: f64) -> f64 {
        (frame * self.rate).sin() * self.amplitude + self.offset
    }

    /// Inclusive output bounds.
    pub fn bounds(self) -> (f64, f64) {
        let a = self.amplitude.abs();
        (self.offset - a, self.offset + a)
    }

    /// Period in frames. Infinite for a zero rate.
    pub fn period_frames(self) -> f64 {
        if self.rate == 0.0 {
            return f64::INFINITY;
        }
        std::f64::consts::TAU / self.rate.abs()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/oscillator.rs"]
mod tests;
