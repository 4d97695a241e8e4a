use crate::foundation::error::{ReelError, ReelResult};

/// Attack / hold / release durations of one animation cycle, in seconds.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationProfile {
    /// Entrance duration.
    #[serde(alias = "fadeIn")]
    pub attack_secs: f64,
    /// Steady display duration.
    #[serde(alias = "display")]
    pub hold_secs: f64,
    /// Exit duration.
    #[serde(alias = "fadeOut")]
    pub release_secs: f64,
}

impl Default for AnimationProfile {
    fn default() -> Self {
        Self {
            attack_secs: 1.0,
            hold_secs: 3.0,
            release_secs: 1.0,
        }
    }
}

impl AnimationProfile {
    /// Create a validated profile (every phase finite and `>= 0`).
    pub fn new(attack_secs: f64, hold_secs: f64, release_secs: f64) -> ReelResult<Self> {
        let p = Self {
            attack_secs,
            hold_secs,
            release_secs,
        };
        p.validate()?;
        Ok(p)
    }

    /// Check that every phase is finite and non-negative.
    pub fn validate(&self) -> ReelResult<()> {
        for (name, v) in [
            ("attack", self.attack_secs),
            ("hold", self.hold_secs),
            ("release", self.release_secs),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(ReelError::validation(format!(
                    "{name} duration must be finite and >= 0 (got {v})"
                )));
            }
        }
        Ok(())
    }

    /// Single-cycle duration (`attack + hold + release`).
    pub fn total_secs(&self) -> f64 {
        self.attack_secs + self.hold_secs + self.release_secs
    }
}

/// Animation phase of one element at one instant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    /// Staggered element whose entrance has not started; hidden but keeps its layout slot.
    Waiting,
    /// Entrance.
    Attack,
    /// Steady display.
    Hold,
    /// Exit.
    Release,
    /// Before the timeline or after it finished.
    Idle,
}

impl Phase {
    /// Return `true` when the element must not be drawn.
    pub fn is_hidden(self) -> bool {
        matches!(self, Phase::Waiting | Phase::Idle)
    }
}

/// Phase and normalized progress of one element.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TimingState {
    /// Current phase.
    pub phase: Phase,
    /// Normalized position within the phase, always in `[0, 1]`.
    pub progress: f64,
    /// Seconds since the element's own attack started (negative while waiting).
    pub local_secs: f64,
}

impl TimingState {
    /// Hidden state used outside the timeline.
    pub const IDLE: TimingState = TimingState {
        phase: Phase::Idle,
        progress: 0.0,
        local_secs: 0.0,
    };

    pub(crate) fn waiting(local_secs: f64) -> Self {
        Self {
            phase: Phase::Waiting,
            progress: 0.0,
            local_secs,
        }
    }
}

/// Map an absolute time to a phase and progress within `profile`.
///
/// Zero-length phases are skipped: with `attack == 0` the element is in `Hold` at `t == 0`.
pub fn compute_progress(current_secs: f64, profile: &AnimationProfile) -> TimingState {
    // NaN lands here as well.
    if !(current_secs >= 0.0) {
        return TimingState::IDLE;
    }

    let attack = profile.attack_secs;
    let hold_end = attack + profile.hold_secs;
    let release_end = hold_end + profile.release_secs;

    let (phase, progress) = if current_secs < attack {
        (Phase::Attack, current_secs / attack)
    } else if current_secs < hold_end {
        (Phase::Hold, 1.0)
    } else if current_secs < release_end {
        (
            Phase::Release,
            1.0 - (current_secs - hold_end) / profile.release_secs,
        )
    } else {
        return TimingState::IDLE;
    };

    TimingState {
        phase,
        progress: progress.clamp(0.0, 1.0),
        local_secs: current_secs,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/timing.rs"]
mod tests;
