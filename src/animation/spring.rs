/// Damped harmonic oscillator parameters.
///
/// All three fields must be finite and > 0; the evaluator is a pure
/// numeric function and does not defend against nonsensical physics.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SpringParams {
    /// Damping coefficient `c`.
    pub damping: f64,
    /// Spring stiffness `k`.
    pub stiffness: f64,
    /// Oscillating mass `m`.
    pub mass: f64,
}

impl SpringParams {
    /// Damping ratio `zeta = c / (2 * sqrt(k * m))`.
    pub fn damping_ratio(self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

/// Unit step response of a damped spring: position at `elapsed_secs` of a
/// mass released at 0 with zero velocity, pulled toward 1.
///
/// Closed-form solution of the damped harmonic oscillator in all three
/// regimes. Under-damped parameters rise with slight overshoot past 1
/// before settling; critically- and over-damped parameters approach 1
/// monotonically. `spring01(p, 0.0) == 0.0` exactly, and the output
/// converges to 1 as time grows.
pub fn spring01(params: SpringParams, elapsed_secs: f64) -> f64 {
    if elapsed_secs <= 0.0 {
        return 0.0;
    }
    let t = elapsed_secs;
    let w0 = (params.stiffness / params.mass).sqrt();
    let zeta = params.damping_ratio();

    if zeta < 1.0 {
        let wd = w0 * (1.0 - zeta * zeta).sqrt();
        let decay = (-zeta * w0 * t).exp();
        1.0 - decay * ((wd * t).cos() + (zeta * w0 / wd) * (wd * t).sin())
    } else if zeta == 1.0 {
        let decay = (-w0 * t).exp();
        1.0 - decay * (1.0 + w0 * t)
    } else {
        let s = (zeta * zeta - 1.0).sqrt();
        let r1 = -w0 * (zeta - s);
        let r2 = -w0 * (zeta + s);
        1.0 - (r2 * (r1 * t).exp() - r1 * (r2 * t).exp()) / (r2 - r1)
    }
}
