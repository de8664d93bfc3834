use crate::foundation::core::Fps;

/// Physical parameters of a mass–spring–damper driven from 0 toward 1.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SpringConfig {
    /// Viscous damping coefficient.
    pub damping: f64,
    /// Spring constant.
    pub stiffness: f64,
    /// Moving mass, must be > 0.
    pub mass: f64,
}

impl SpringConfig {
    /// Build a config.
    pub const fn new(damping: f64, stiffness: f64, mass: f64) -> Self {
        Self {
            damping,
            stiffness,
            mass,
        }
    }

    /// Damping ratio `c / (2 * sqrt(k * m))`. Below 1 the spring overshoots.
    pub fn damping_ratio(self) -> f64 {
        let k = self.stiffness.max(0.0);
        let m = self.mass.max(1e-9);
        self.damping.max(0.0) / (2.0 * (k * m).sqrt()).max(1e-9)
    }
}

/// Spring-eased progress at `frame` frames after the animation starts.
///
/// Frames at or before 0 (and NaN) have not started yet and return exactly 0. Afterwards the
/// value is the closed-form step response with `x(0) = 0`, `v(0) = 0`, evaluated at
/// `frame / fps` seconds; it converges to 1 and overshoots when under-damped.
pub fn spring(frame: f64, fps: Fps, config: SpringConfig) -> f64 {
    if frame.is_nan() || frame <= 0.0 {
        return 0.0;
    }
    step_response(fps.frames_to_secs(frame), config)
}

fn step_response(t: f64, config: SpringConfig) -> f64 {
    let k = config.stiffness.max(0.0);
    let c = config.damping.max(0.0);
    let m = config.mass.max(1e-9);

    let w0 = (k / m).sqrt();
    if w0 == 0.0 {
        // No restoring force: nothing pulls the value off its rest position.
        return 0.0;
    }
    let zeta = c / (2.0 * (k * m).sqrt()).max(1e-9);

    if (zeta - 1.0).abs() < 1e-6 {
        // Critically damped.
        let e = (-w0 * t).exp();
        1.0 - e * (1.0 + w0 * t)
    } else if zeta < 1.0 {
        // Underdamped.
        let wd = w0 * (1.0 - zeta * zeta).sqrt();
        let e = (-zeta * w0 * t).exp();
        let c1 = (wd * t).cos();
        let s1 = (wd * t).sin();
        let k = zeta / (1.0 - zeta * zeta).sqrt();
        1.0 - e * (c1 + k * s1)
    } else {
        // Overdamped.
        let z2 = (zeta * zeta - 1.0).sqrt();
        let r1 = -w0 * (zeta - z2);
        let r2 = -w0 * (zeta + z2);
        let c2 = (zeta + z2) / (2.0 * z2);
        let c1 = (zeta - z2) / (2.0 * z2);
        1.0 - (c2 * (r1 * t).exp() - c1 * (r2 * t).exp())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/spring.rs"]
mod tests;
