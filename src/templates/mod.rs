//! Frame renderers for the three templates.
//!
//! Every template turns a sanitized parameter snapshot plus prepared assets into a [`DrawPlan`]
//! for one frame. Rendering is pure: the same inputs always produce the same plan, which is what
//! keeps the interactive player and the exporter in agreement.

pub mod bumper;
pub mod callout;
pub mod property;

use crate::animation::sequence::duration_frames;
use crate::assets::store::AssetStore;
use crate::foundation::core::{Canvas, FrameIndex, FrameRange, Fps};
use crate::params::TemplateParams;
use crate::plan::DrawPlan;

/// A renderable template.
pub trait Template {
    fn canvas(&self) -> Canvas;

    fn fps(&self) -> Fps {
        Fps::STANDARD
    }

    /// Timeline length in seconds.
    fn duration_secs(&self) -> f64;

    /// Number of frames to export, never below 30.
    fn duration_frames(&self) -> u64 {
        duration_frames(self.duration_secs(), self.fps())
    }

    /// Every frame of the export, `[0, duration_frames)`.
    fn frame_range(&self) -> FrameRange {
        FrameRange {
            start: FrameIndex(0),
            end: FrameIndex(self.duration_frames()),
        }
    }

    /// Prefix of exported file names.
    fn file_prefix(&self) -> &'static str;

    fn render_frame(&self, assets: &AssetStore, frame: FrameIndex) -> DrawPlan;
}

impl TemplateParams {
    /// View the parameters as their template.
    pub fn template(&self) -> &dyn Template {
        match self {
            Self::Property(p) => p,
            Self::Bumper(p) => p,
            Self::Callout(p) => p,
        }
    }
}

/// Draw plan for `frame` of the template described by `params`.
pub fn render_frame(params: &TemplateParams, assets: &AssetStore, frame: FrameIndex) -> DrawPlan {
    params.template().render_frame(assets, frame)
}

/// Draw plan for the frame showing timeline position `secs`.
pub fn render_frame_at(params: &TemplateParams, assets: &AssetStore, secs: f64) -> DrawPlan {
    let template = params.template();
    let frame = template.fps().secs_to_frame_floor(secs);
    template.render_frame(assets, frame)
}

#[cfg(test)]
#[path = "../../tests/unit/templates/mod.rs"]
mod tests;
