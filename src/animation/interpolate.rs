/// Clamped linear map of `x` from `input` onto `output`.
///
/// `x` is first clamped into the input range (in either orientation), then mapped linearly.
/// A degenerate input range maps everything to `output[0]`. Endpoints are exact: `x == input[0]`
/// yields `output[0]` and `x == input[1]` yields `output[1]`.
pub fn interpolate(x: f64, input: [f64; 2], output: [f64; 2]) -> f64 {
    let [x0, x1] = input;
    if x0 == x1 {
        return output[0];
    }
    let (lo, hi) = if x0 < x1 { (x0, x1) } else { (x1, x0) };
    let x = x.clamp(lo, hi);
    let t = (x - x0) / (x1 - x0);
    output[0] * (1.0 - t) + output[1] * t
}

/// Map a unit progress value (typically a spring output) onto `[from, to]`.
pub fn ramp(progress: f64, from: f64, to: f64) -> f64 {
    interpolate(progress, [0.0, 1.0], [from, to])
}

#[cfg(test)]
#[path = "../../tests/unit/animation/interpolate.rs"]
mod tests;
