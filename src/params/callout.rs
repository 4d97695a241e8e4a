use crate::animation::ease::EasingKind;
use crate::animation::timing::AnimationProfile;
use crate::params::Issues;

/// Callout label template (1080×1080).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CalloutParams {
    /// Image path relative to the parameter file.
    pub image: Option<String>,
    pub arrow_mirrored: bool,
    pub top_text: String,
    pub bottom_text: String,
    pub callout_color: String,
    pub border_color: String,
    pub border_thickness: f64,
    pub line_thickness: f64,
    pub marker_size: f64,
    pub background_color: String,
    pub top_text_color: String,
    pub bottom_text_color: String,
    pub font_family: String,
    pub text_spacing: f64,
    pub diagonal_length: f64,
    pub horizontal_length: f64,
    pub animation_type: EasingKind,
    #[serde(alias = "animationSettings")]
    pub animation: AnimationProfile,
}

impl Default for CalloutParams {
    fn default() -> Self {
        Self {
            image: None,
            arrow_mirrored: false,
            top_text: "Kuningan PIK".to_owned(),
            bottom_text: "4 Menit".to_owned(),
            callout_color: "#FF0000".to_owned(),
            border_color: "#FF0000".to_owned(),
            border_thickness: 4.0,
            line_thickness: 8.0,
            marker_size: 12.0,
            background_color: "#000000".to_owned(),
            top_text_color: "#FF0000".to_owned(),
            bottom_text_color: "#FFFFFF".to_owned(),
            font_family: "Arial".to_owned(),
            text_spacing: 8.0,
            diagonal_length: 600.0,
            horizontal_length: 400.0,
            animation_type: EasingKind::Fade,
            animation: AnimationProfile::default(),
        }
    }
}

impl CalloutParams {
    pub(crate) fn sanitize(&mut self, issues: &mut Issues) {
        let d = Self::default();

        issues.number(
            "borderThickness",
            &mut self.border_thickness,
            1.0..=20.0,
            d.border_thickness,
        );
        issues.number("lineThickness", &mut self.line_thickness, 1.0..=30.0, d.line_thickness);
        issues.number("markerSize", &mut self.marker_size, 5.0..=30.0, d.marker_size);
        issues.number("textSpacing", &mut self.text_spacing, 0.0..=100.0, d.text_spacing);
        issues.number(
            "diagonalLength",
            &mut self.diagonal_length,
            0.0..=2000.0,
            d.diagonal_length,
        );
        issues.number(
            "horizontalLength",
            &mut self.horizontal_length,
            0.0..=2000.0,
            d.horizontal_length,
        );

        issues.color("calloutColor", &mut self.callout_color, &d.callout_color);
        issues.color("borderColor", &mut self.border_color, &d.border_color);
        issues.color("backgroundColor", &mut self.background_color, &d.background_color);
        issues.color("topTextColor", &mut self.top_text_color, &d.top_text_color);
        issues.color("bottomTextColor", &mut self.bottom_text_color, &d.bottom_text_color);

        if self.font_family.trim().is_empty() {
            issues.push("fontFamily", "empty font family, using Arial");
            self.font_family = d.font_family;
        }

        issues.profile("animation", &mut self.animation);
    }
}
