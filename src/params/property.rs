use crate::animation::ease::EasingKind;
use crate::animation::sequence::SequencingPolicy;
use crate::animation::timing::AnimationProfile;
use crate::assets::icons::IconKind;
use crate::params::Issues;

pub const MAX_SPECS: usize = 4;
pub const SPACING_RANGE: std::ops::RangeInclusive<f64> = 0.0..=200.0;
pub const DEFAULT_BACKGROUND: &str = "#000000";
pub const TITLE_FAMILY: &str = "Space Grotesk";
pub const SUBTITLE_FAMILY: &str = "Inter";

/// One icon/title/subtitle column of the property row.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SpecItem {
    pub icon: IconKind,
    pub title: String,
    pub subtitle: String,
}

impl Default for SpecItem {
    fn default() -> Self {
        Self {
            icon: IconKind::Home,
            title: String::new(),
            subtitle: String::new(),
        }
    }
}

impl SpecItem {
    pub fn new(icon: IconKind, title: &str, subtitle: &str) -> Self {
        Self {
            icon,
            title: title.to_owned(),
            subtitle: subtitle.to_owned(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BackgroundKind {
    #[default]
    Color,
    Video,
}

/// Property spec template (1080×1920).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PropertyParams {
    pub specs: Vec<SpecItem>,
    /// Gap between items; the size tier's gap is used when unset.
    pub spacing: Option<f64>,
    pub background_type: BackgroundKind,
    pub background_color: String,
    /// Video path relative to the parameter file.
    pub background_video: Option<String>,
    pub animation_mode: SequencingPolicy,
    pub animation_type: EasingKind,
    #[serde(alias = "animationSettings")]
    pub animation: AnimationProfile,
}

impl Default for PropertyParams {
    fn default() -> Self {
        Self {
            specs: vec![
                SpecItem::new(IconKind::Bed, "2+1", "Kamar Tidur"),
                SpecItem::new(IconKind::Home, "45", "M² Luas"),
                SpecItem::new(IconKind::Bath, "2+1", "Kamar Mandi"),
            ],
            spacing: None,
            background_type: BackgroundKind::Color,
            background_color: DEFAULT_BACKGROUND.to_owned(),
            background_video: None,
            animation_mode: SequencingPolicy::Simultaneous,
            animation_type: EasingKind::Fade,
            animation: AnimationProfile::default(),
        }
    }
}

impl PropertyParams {
    pub(crate) fn sanitize(&mut self, issues: &mut Issues) {
        if self.specs.len() > MAX_SPECS {
            issues.push(
                "specs",
                format!(
                    "{} items given, keeping the first {MAX_SPECS}",
                    self.specs.len()
                ),
            );
            self.specs.truncate(MAX_SPECS);
        }

        if let Some(s) = self.spacing
            && !(s.is_finite() && SPACING_RANGE.contains(&s))
        {
            issues.push("spacing", format!("{s} is outside 0..=200, using the tier gap"));
            self.spacing = None;
        }

        issues.color("backgroundColor", &mut self.background_color, DEFAULT_BACKGROUND);

        if self.background_type == BackgroundKind::Video && self.background_video.is_none() {
            issues.push(
                "backgroundVideo",
                "video background without a video, using backgroundColor",
            );
            self.background_type = BackgroundKind::Color;
        }

        issues.profile("animation", &mut self.animation);
    }
}
