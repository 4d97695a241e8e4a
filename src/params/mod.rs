//! Template parameter documents.
//!
//! Each template reads one JSON document tagged by `"template"`. Every field has a default, and
//! [`TemplateParams::sanitize`] replaces out-of-range or malformed values so that layout and
//! rendering only ever see usable numbers and colors.

pub mod bumper;
pub mod callout;
pub mod property;

use std::ops::RangeInclusive;

use crate::animation::timing::AnimationProfile;
use crate::foundation::color::parse_hex;
use crate::foundation::core::Rgba8;
use crate::foundation::error::{ReelError, ReelResult};

pub use bumper::BumperParams;
pub use callout::CalloutParams;
pub use property::{BackgroundKind, PropertyParams, SpecItem};

/// Upper bound for each animation phase, in seconds.
pub const MAX_PHASE_SECS: f64 = 600.0;

/// Parameters of one template render.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "template")]
pub enum TemplateParams {
    #[serde(rename = "property-spec")]
    Property(PropertyParams),
    #[serde(rename = "bumper-out")]
    Bumper(BumperParams),
    #[serde(rename = "callout-label")]
    Callout(CalloutParams),
}

/// A parameter value that was replaced during sanitization.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct FieldIssue {
    /// JSON path of the field, e.g. `animation.attackSecs`.
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl TemplateParams {
    /// Parse a parameter document.
    pub fn from_json(s: &str) -> ReelResult<Self> {
        serde_json::from_str(s).map_err(|e| ReelError::serde(format!("template params: {e}")))
    }

    pub fn to_json_pretty(&self) -> ReelResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Replace every unusable value with its default and report what changed.
    pub fn sanitize(&mut self) -> Vec<FieldIssue> {
        let mut issues = Issues::default();
        match self {
            Self::Property(p) => p.sanitize(&mut issues),
            Self::Bumper(p) => p.sanitize(&mut issues),
            Self::Callout(p) => p.sanitize(&mut issues),
        }
        for issue in &issues.0 {
            tracing::warn!(field = %issue.field, "{}", issue.message);
        }
        issues.0
    }

    /// Consume and return the sanitized snapshot with its issues.
    pub fn sanitized(mut self) -> (Self, Vec<FieldIssue>) {
        let issues = self.sanitize();
        (self, issues)
    }

    /// Template identifier as used in the `"template"` tag.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Property(_) => "property-spec",
            Self::Bumper(_) => "bumper-out",
            Self::Callout(_) => "callout-label",
        }
    }

    /// Asset paths referenced by the parameters, relative to the parameter file.
    pub fn image_refs(&self) -> Vec<&str> {
        match self {
            Self::Property(_) => Vec::new(),
            Self::Bumper(p) => p.profile_image.as_deref().into_iter().collect(),
            Self::Callout(p) => p.image.as_deref().into_iter().collect(),
        }
    }

    /// Background video path, when the parameters ask for one.
    pub fn video_ref(&self) -> Option<&str> {
        match self {
            Self::Property(p) if p.background_type == BackgroundKind::Video => {
                p.background_video.as_deref()
            }
            _ => None,
        }
    }

    /// Font families named by the parameters.
    pub fn font_families(&self) -> Vec<&str> {
        match self {
            Self::Property(_) => vec![property::TITLE_FAMILY, property::SUBTITLE_FAMILY],
            Self::Bumper(p) => vec![p.font_family.as_str()],
            Self::Callout(p) => vec![p.font_family.as_str()],
        }
    }
}

/// Accumulates [`FieldIssue`]s while a parameter struct is sanitized.
#[derive(Default)]
pub(crate) struct Issues(Vec<FieldIssue>);

impl Issues {
    pub(crate) fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.push(FieldIssue {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Reset `value` to `default` when it is NaN, infinite or outside `range`.
    pub(crate) fn number(
        &mut self,
        field: &str,
        value: &mut f64,
        range: RangeInclusive<f64>,
        default: f64,
    ) {
        if value.is_finite() && range.contains(value) {
            return;
        }
        self.push(
            field,
            format!(
                "{value} is outside {}..={}, using default {default}",
                range.start(),
                range.end()
            ),
        );
        *value = default;
    }

    /// Reset `value` to `default` when it is not a hex color.
    pub(crate) fn color(&mut self, field: &str, value: &mut String, default: &str) {
        if let Err(e) = parse_hex(value) {
            self.push(field, format!("{e}, using default {default}"));
            *value = default.to_owned();
        }
    }

    pub(crate) fn profile(&mut self, field: &str, p: &mut AnimationProfile) {
        let d = AnimationProfile::default();
        self.number(
            &format!("{field}.attackSecs"),
            &mut p.attack_secs,
            0.0..=MAX_PHASE_SECS,
            d.attack_secs,
        );
        self.number(
            &format!("{field}.holdSecs"),
            &mut p.hold_secs,
            0.0..=MAX_PHASE_SECS,
            d.hold_secs,
        );
        self.number(
            &format!("{field}.releaseSecs"),
            &mut p.release_secs,
            0.0..=MAX_PHASE_SECS,
            d.release_secs,
        );
    }
}

/// Resolve a sanitized color field, falling back to `default` for anything unparsable.
pub fn resolve_color(value: &str, default: Rgba8) -> Rgba8 {
    parse_hex(value).unwrap_or(default)
}

#[cfg(test)]
#[path = "../../tests/unit/params/mod.rs"]
mod tests;
