use crate::animation::spring::{SpringConfig, spring_progress};
use crate::animation::timing::{Phase, TimingState};
use crate::foundation::core::{Affine, Point};

/// Slide distance used by [`apply_easing`] and the property row.
pub const DEFAULT_SLIDE_PX: f64 = 100.0;

/// Slide distance of single-group templates (bumper card, callout).
pub const GROUP_SLIDE_PX: f64 = 50.0;

/// Named entrance/exit curves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EasingKind {
    /// Opacity follows progress.
    #[default]
    Fade,
    /// Rise from below.
    SlideUp,
    /// Drop from above.
    SlideDown,
    /// Arrive from the left.
    SlideLeft,
    /// Arrive from the right.
    SlideRight,
    /// Grow from nothing.
    Scale,
    /// Grow with a spring overshoot.
    Bounce,
    /// Spin in while growing.
    Rotate,
}

impl EasingKind {
    pub const ALL: [EasingKind; 8] = [
        EasingKind::Fade,
        EasingKind::SlideUp,
        EasingKind::SlideDown,
        EasingKind::SlideLeft,
        EasingKind::SlideRight,
        EasingKind::Scale,
        EasingKind::Bounce,
        EasingKind::Rotate,
    ];

    /// Resolve the visual state of an element for its timing state.
    pub fn apply(self, timing: &TimingState, ctx: &EasingCtx) -> TransformState {
        if timing.phase.is_hidden() {
            return TransformState::HIDDEN;
        }
        (self.curve())(timing, ctx)
    }

    fn curve(self) -> fn(&TimingState, &EasingCtx) -> TransformState {
        match self {
            Self::Fade => fade,
            Self::SlideUp => slide_up,
            Self::SlideDown => slide_down,
            Self::SlideLeft => slide_left,
            Self::SlideRight => slide_right,
            Self::Scale => scale,
            Self::Bounce => bounce,
            Self::Rotate => rotate,
        }
    }
}

/// Environment shared by every curve evaluation of one template.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EasingCtx {
    pub fps: f64,
    /// Distance covered by the slide curves, in pixels.
    pub slide_px: f64,
}

impl Default for EasingCtx {
    fn default() -> Self {
        Self {
            fps: 30.0,
            slide_px: DEFAULT_SLIDE_PX,
        }
    }
}

/// Opacity and 2D transform of one element at one instant.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TransformState {
    pub opacity: f64,
    pub translate_x: f64,
    pub translate_y: f64,
    pub scale: f64,
    pub rotate_deg: f64,
}

impl TransformState {
    pub const IDENTITY: TransformState = TransformState {
        opacity: 1.0,
        translate_x: 0.0,
        translate_y: 0.0,
        scale: 1.0,
        rotate_deg: 0.0,
    };

    pub const HIDDEN: TransformState = TransformState {
        opacity: 0.0,
        ..TransformState::IDENTITY
    };

    fn with_opacity(opacity: f64) -> Self {
        Self {
            opacity,
            ..Self::IDENTITY
        }
    }

    /// Return `true` when the element contributes nothing to the frame.
    pub fn is_invisible(&self) -> bool {
        !(self.opacity > 0.0) || self.scale == 0.0
    }

    /// Return `true` when only opacity differs from identity.
    pub fn is_geometric_identity(&self) -> bool {
        self.translate_x == 0.0
            && self.translate_y == 0.0
            && self.scale == 1.0
            && self.rotate_deg == 0.0
    }

    /// Rotation and scale about `pivot`, followed by the unscaled translation.
    pub fn to_affine(&self, pivot: Point) -> Affine {
        if self.is_geometric_identity() {
            return Affine::IDENTITY;
        }
        let p = pivot.to_vec2();
        Affine::translate((self.translate_x, self.translate_y))
            * Affine::translate(p)
            * Affine::rotate(self.rotate_deg.to_radians())
            * Affine::scale(self.scale)
            * Affine::translate(-p)
    }
}

/// Contract form of [`EasingKind::apply`] with the default slide distance.
///
/// `local_frame` counts frames since the element's own attack started.
pub fn apply_easing(
    kind: EasingKind,
    phase: Phase,
    progress: f64,
    local_frame: f64,
    fps: f64,
) -> TransformState {
    let local_secs = if fps > 0.0 { local_frame / fps } else { 0.0 };
    let timing = TimingState {
        phase,
        progress: progress.clamp(0.0, 1.0),
        local_secs,
    };
    kind.apply(
        &timing,
        &EasingCtx {
            fps,
            slide_px: DEFAULT_SLIDE_PX,
        },
    )
}

fn fade(t: &TimingState, _ctx: &EasingCtx) -> TransformState {
    TransformState::with_opacity(t.progress)
}

/// Remaining slide distance; zero once the element holds.
fn slide_offset(t: &TimingState, ctx: &EasingCtx) -> f64 {
    match t.phase {
        Phase::Attack | Phase::Release => ctx.slide_px * (1.0 - t.progress),
        _ => 0.0,
    }
}

fn slide_up(t: &TimingState, ctx: &EasingCtx) -> TransformState {
    TransformState {
        translate_y: slide_offset(t, ctx),
        ..TransformState::with_opacity(t.progress)
    }
}

fn slide_down(t: &TimingState, ctx: &EasingCtx) -> TransformState {
    TransformState {
        translate_y: -slide_offset(t, ctx),
        ..TransformState::with_opacity(t.progress)
    }
}

fn slide_left(t: &TimingState, ctx: &EasingCtx) -> TransformState {
    TransformState {
        translate_x: -slide_offset(t, ctx),
        ..TransformState::with_opacity(t.progress)
    }
}

fn slide_right(t: &TimingState, ctx: &EasingCtx) -> TransformState {
    TransformState {
        translate_x: slide_offset(t, ctx),
        ..TransformState::with_opacity(t.progress)
    }
}

fn scale(t: &TimingState, _ctx: &EasingCtx) -> TransformState {
    let s = if t.phase == Phase::Attack {
        t.progress
    } else {
        1.0
    };
    TransformState {
        scale: s,
        ..TransformState::with_opacity(t.progress)
    }
}

fn bounce(t: &TimingState, ctx: &EasingCtx) -> TransformState {
    if t.phase != Phase::Attack {
        return fade(t, ctx);
    }
    let frame = t.local_secs * ctx.fps;
    TransformState {
        scale: t.progress * spring_progress(frame, ctx.fps, SpringConfig::BOUNCE),
        ..TransformState::with_opacity(t.progress)
    }
}

fn rotate(t: &TimingState, _ctx: &EasingCtx) -> TransformState {
    if t.phase != Phase::Attack {
        return TransformState::with_opacity(t.progress);
    }
    TransformState {
        opacity: t.progress,
        scale: t.progress,
        rotate_deg: (1.0 - t.progress) * 360.0,
        ..TransformState::IDENTITY
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
