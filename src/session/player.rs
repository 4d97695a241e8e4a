use crate::assets::store::AssetStore;
use crate::foundation::core::{FrameIndex, Fps};
use crate::params::{FieldIssue, TemplateParams};
use crate::plan::DrawPlan;
use crate::templates::Template;

/// Interactive preview driver.
///
/// Holds the current sanitized parameter snapshot and maps a looping playback clock onto frame
/// plans. Plans are built on demand and never cached, so a parameter swap takes effect on the
/// next displayed frame.
#[derive(Debug)]
pub struct Player {
    params: TemplateParams,
    assets: AssetStore,
}

impl Player {
    /// Create a player; `params` are sanitized first.
    pub fn new(params: TemplateParams, assets: AssetStore) -> (Self, Vec<FieldIssue>) {
        let (params, issues) = params.sanitized();
        (Self { params, assets }, issues)
    }

    /// Swap in a new parameter snapshot.
    pub fn set_params(&mut self, params: TemplateParams) -> Vec<FieldIssue> {
        let (params, issues) = params.sanitized();
        self.params = params;
        issues
    }

    pub fn params(&self) -> &TemplateParams {
        &self.params
    }

    pub fn assets(&self) -> &AssetStore {
        &self.assets
    }

    fn template(&self) -> &dyn Template {
        self.params.template()
    }

    pub fn fps(&self) -> Fps {
        self.template().fps()
    }

    pub fn duration_frames(&self) -> u64 {
        self.template().duration_frames()
    }

    /// Frame shown `elapsed_secs` after playback started; playback loops.
    pub fn frame_at(&self, elapsed_secs: f64) -> FrameIndex {
        let raw = self.fps().secs_to_frame_floor(elapsed_secs).0;
        FrameIndex(raw % self.duration_frames().max(1))
    }

    /// Plan of `frame`.
    pub fn plan_at(&self, frame: FrameIndex) -> DrawPlan {
        self.template().render_frame(&self.assets, frame)
    }

    /// Plan shown `elapsed_secs` after playback started.
    pub fn plan_at_secs(&self, elapsed_secs: f64) -> DrawPlan {
        self.plan_at(self.frame_at(elapsed_secs))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/player.rs"]
mod tests;
