use crate::animation::ease::EasingKind;
use crate::animation::timing::AnimationProfile;
use crate::params::Issues;

/// Contact "bumper" card template (1080×1080).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BumperParams {
    /// Avatar path relative to the parameter file.
    pub profile_image: Option<String>,
    pub top_text: String,
    pub name_text: String,
    pub phone_number: String,
    #[serde(rename = "showWhatsAppIcon", alias = "showWhatsappIcon")]
    pub show_whatsapp_icon: bool,
    pub background_color: String,
    pub card_background_color: String,
    pub card_width: f64,
    pub card_border_radius: f64,
    pub card_padding: f64,
    pub card_gap: f64,
    pub profile_image_size: f64,
    /// Percentage of the avatar size; 50 gives a circle.
    pub profile_image_border_radius: f64,
    pub top_text_size: f64,
    pub top_text_color: String,
    pub name_text_size: f64,
    pub name_text_color: String,
    pub phone_text_size: f64,
    pub phone_text_color: String,
    pub phone_icon_size: f64,
    pub phone_icon_color: String,
    pub font_family: String,
    pub animation_type: EasingKind,
    #[serde(alias = "animationSettings")]
    pub animation: AnimationProfile,
}

impl Default for BumperParams {
    fn default() -> Self {
        Self {
            profile_image: None,
            top_text: "More info & Private Viewing".to_owned(),
            name_text: "Reina Tan".to_owned(),
            phone_number: "0895 0904 6152".to_owned(),
            show_whatsapp_icon: true,
            background_color: "#2D2D2D".to_owned(),
            card_background_color: "#FFFFFF".to_owned(),
            card_width: 800.0,
            card_border_radius: 20.0,
            card_padding: 24.0,
            card_gap: 20.0,
            profile_image_size: 80.0,
            profile_image_border_radius: 50.0,
            top_text_size: 14.0,
            top_text_color: "#000000".to_owned(),
            name_text_size: 24.0,
            name_text_color: "#000000".to_owned(),
            phone_text_size: 14.0,
            phone_text_color: "#000000".to_owned(),
            phone_icon_size: 16.0,
            phone_icon_color: "#25D366".to_owned(),
            font_family: "Arial".to_owned(),
            animation_type: EasingKind::Fade,
            animation: AnimationProfile::default(),
        }
    }
}

impl BumperParams {
    pub(crate) fn sanitize(&mut self, issues: &mut Issues) {
        let d = Self::default();

        issues.number("cardWidth", &mut self.card_width, 400.0..=1000.0, d.card_width);
        issues.number(
            "cardBorderRadius",
            &mut self.card_border_radius,
            0.0..=100.0,
            d.card_border_radius,
        );
        issues.number("cardPadding", &mut self.card_padding, 0.0..=100.0, d.card_padding);
        issues.number("cardGap", &mut self.card_gap, 0.0..=100.0, d.card_gap);
        issues.number(
            "profileImageSize",
            &mut self.profile_image_size,
            20.0..=200.0,
            d.profile_image_size,
        );
        issues.number(
            "profileImageBorderRadius",
            &mut self.profile_image_border_radius,
            0.0..=100.0,
            d.profile_image_border_radius,
        );
        issues.number("topTextSize", &mut self.top_text_size, 8.0..=72.0, d.top_text_size);
        issues.number("nameTextSize", &mut self.name_text_size, 8.0..=72.0, d.name_text_size);
        issues.number(
            "phoneTextSize",
            &mut self.phone_text_size,
            8.0..=72.0,
            d.phone_text_size,
        );
        issues.number(
            "phoneIconSize",
            &mut self.phone_icon_size,
            8.0..=48.0,
            d.phone_icon_size,
        );

        issues.color("backgroundColor", &mut self.background_color, &d.background_color);
        issues.color(
            "cardBackgroundColor",
            &mut self.card_background_color,
            &d.card_background_color,
        );
        issues.color("topTextColor", &mut self.top_text_color, &d.top_text_color);
        issues.color("nameTextColor", &mut self.name_text_color, &d.name_text_color);
        issues.color("phoneTextColor", &mut self.phone_text_color, &d.phone_text_color);
        issues.color("phoneIconColor", &mut self.phone_icon_color, &d.phone_icon_color);

        if self.font_family.trim().is_empty() {
            issues.push("fontFamily", "empty font family, using Arial");
            self.font_family = d.font_family;
        }

        issues.profile("animation", &mut self.animation);
    }
}
