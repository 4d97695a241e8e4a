/// Physical parameters of a damped spring driven from 0 to 1.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SpringConfig {
    pub damping: f64,
    pub mass: f64,
    pub stiffness: f64,
}

impl SpringConfig {
    /// Bouncy entrance used by [`crate::animation::ease::EasingKind::Bounce`].
    pub const BOUNCE: SpringConfig = SpringConfig {
        damping: 10.0,
        mass: 0.5,
        stiffness: 100.0,
    };
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::BOUNCE
    }
}

/// Spring position at `frame` for a target of 1, starting at rest from 0.
///
/// Evaluated in closed form at `t = max(frame, 0) / fps`. Underdamped springs overshoot 1 before
/// settling; critically and overdamped springs approach 1 monotonically.
pub fn spring_progress(frame: f64, fps: f64, cfg: SpringConfig) -> f64 {
    if !(fps > 0.0) || !(cfg.mass > 0.0) || !(cfg.stiffness > 0.0) {
        return 1.0;
    }
    let t = if frame.is_finite() { frame.max(0.0) / fps } else { 0.0 };

    let k = cfg.stiffness;
    let m = cfg.mass;
    let zeta = cfg.damping.max(0.0) / (2.0 * (k * m).sqrt());
    let omega0 = (k / m).sqrt();
    // Displacement from the target at t = 0.
    let x0 = 1.0;

    let pos = if (zeta - 1.0).abs() < 1e-9 {
        let envelope = (-omega0 * t).exp();
        1.0 - envelope * (x0 + omega0 * x0 * t)
    } else if zeta < 1.0 {
        let omega1 = omega0 * (1.0 - zeta * zeta).sqrt();
        let envelope = (-zeta * omega0 * t).exp();
        1.0 - envelope
            * ((omega1 * t).sin() * (zeta * omega0 * x0 / omega1) + x0 * (omega1 * t).cos())
    } else {
        // Overdamped: two real decay rates, zero initial velocity.
        let root = (zeta * zeta - 1.0).sqrt();
        let r1 = -omega0 * (zeta - root);
        let r2 = -omega0 * (zeta + root);
        let a = r2 / (r2 - r1);
        let b = 1.0 - a;
        1.0 - x0 * (a * (r1 * t).exp() + b * (r2 * t).exp())
    };

    if pos.is_finite() { pos } else { 1.0 }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/spring.rs"]
mod tests;
