use crate::animation::timing::{AnimationProfile, TimingState, compute_progress};
use crate::foundation::core::Fps;

/// Minimum rendered length of any template, in frames.
pub const MIN_DURATION_FRAMES: u64 = 30;

/// How the entrances of a group of elements relate to each other.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SequencingPolicy {
    /// Every element runs the same profile in lockstep.
    #[default]
    #[serde(alias = "bersamaan")]
    Simultaneous,
    /// Element `i` enters at `i * attack`; the hold and release are shared.
    #[serde(alias = "berurutan")]
    Staggered,
}

/// Timeline length for `n` elements under `policy`.
pub fn total_duration_secs(n: usize, policy: SequencingPolicy, profile: &AnimationProfile) -> f64 {
    match policy {
        SequencingPolicy::Simultaneous => profile.total_secs(),
        SequencingPolicy::Staggered => {
            n as f64 * profile.attack_secs + profile.hold_secs + profile.release_secs
        }
    }
}

/// Entrance offset of element `index`.
pub fn element_offset_secs(
    index: usize,
    policy: SequencingPolicy,
    profile: &AnimationProfile,
) -> f64 {
    match policy {
        SequencingPolicy::Simultaneous => 0.0,
        SequencingPolicy::Staggered => index as f64 * profile.attack_secs,
    }
}

/// Frame count for a timeline of `secs`, never below [`MIN_DURATION_FRAMES`].
pub fn duration_frames(secs: f64, fps: Fps) -> u64 {
    let raw = secs * fps.as_f64() - 1e-9;
    let frames = if raw.is_finite() && raw > 0.0 {
        raw.ceil() as u64
    } else {
        0
    };
    frames.max(MIN_DURATION_FRAMES)
}

/// Timing state of every element at `current_secs`.
pub fn schedule_elements<T>(
    elements: &[T],
    policy: SequencingPolicy,
    profile: &AnimationProfile,
    current_secs: f64,
) -> Vec<TimingState> {
    schedule_count(elements.len(), policy, profile, current_secs)
}

/// [`schedule_elements`] for a known element count.
pub fn schedule_count(
    n: usize,
    policy: SequencingPolicy,
    profile: &AnimationProfile,
    current_secs: f64,
) -> Vec<TimingState> {
    match policy {
        SequencingPolicy::Simultaneous => vec![compute_progress(current_secs, profile); n],
        SequencingPolicy::Staggered => {
            let total = total_duration_secs(n, policy, profile);
            if !(current_secs >= 0.0) || current_secs >= total {
                return vec![TimingState::IDLE; n];
            }
            (0..n)
                .map(|i| {
                    let local = current_secs - element_offset_secs(i, policy, profile);
                    if local < 0.0 {
                        return TimingState::waiting(local);
                    }
                    let shifted = AnimationProfile {
                        attack_secs: profile.attack_secs,
                        hold_secs: profile.hold_secs
                            + (n - 1 - i) as f64 * profile.attack_secs,
                        release_secs: profile.release_secs,
                    };
                    compute_progress(local, &shifted)
                })
                .collect()
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/sequence.rs"]
mod tests;
