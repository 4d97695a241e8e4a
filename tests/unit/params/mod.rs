use super::*;
use crate::animation::ease::EasingKind;
use crate::animation::sequence::SequencingPolicy;
use crate::assets::icons::IconKind;

#[test]
fn empty_documents_take_defaults() {
    let p = TemplateParams::from_json(r#"{"template": "bumper-out"}"#).unwrap();
    assert_eq!(p, TemplateParams::Bumper(BumperParams::default()));

    let p = TemplateParams::from_json(r#"{"template": "callout-label"}"#).unwrap();
    assert_eq!(p, TemplateParams::Callout(CalloutParams::default()));

    let p = TemplateParams::from_json(r#"{"template": "property-spec"}"#).unwrap();
    let TemplateParams::Property(prop) = p else {
        panic!("expected property params");
    };
    assert_eq!(prop.specs.len(), 3);
    assert_eq!(prop.specs[0].icon, IconKind::Bed);
    assert_eq!(prop.spacing, None);
}

#[test]
fn unknown_template_is_a_serde_error() {
    let err = TemplateParams::from_json(r#"{"template": "slideshow"}"#).unwrap_err();
    assert!(matches!(err, ReelError::Serde(_)));
}

#[test]
fn legacy_names_are_accepted() {
    let p = TemplateParams::from_json(
        r#"{
            "template": "property-spec",
            "animationMode": "berurutan",
            "animationType": "slideLeft",
            "animationSettings": {"fadeIn": 0.5, "display": 2, "fadeOut": 1},
            "specs": [{"icon": "map", "title": "5 km", "subtitle": "ke Tol"},
                      {"icon": "castle", "title": "x", "subtitle": "y"}]
        }"#,
    )
    .unwrap();
    let TemplateParams::Property(prop) = p else {
        panic!("expected property params");
    };
    assert_eq!(prop.animation_mode, SequencingPolicy::Staggered);
    assert_eq!(prop.animation_type, EasingKind::SlideLeft);
    assert_eq!(prop.animation.attack_secs, 0.5);
    assert_eq!(prop.specs[0].icon, IconKind::Map);
    assert_eq!(prop.specs[1].icon, IconKind::Home);
}

#[test]
fn out_of_range_values_fall_back_to_defaults() {
    let mut p = TemplateParams::from_json(
        r#"{
            "template": "bumper-out",
            "cardWidth": 1500,
            "profileImageSize": 10,
            "phoneIconColor": "green",
            "animation": {"attackSecs": -1, "holdSecs": 700, "releaseSecs": 2}
        }"#,
    )
    .unwrap();
    let issues = p.sanitize();
    let fields: Vec<&str> = issues.iter().map(|i| i.field.as_str()).collect();
    assert_eq!(
        fields,
        vec![
            "cardWidth",
            "profileImageSize",
            "phoneIconColor",
            "animation.attackSecs",
            "animation.holdSecs"
        ]
    );

    let TemplateParams::Bumper(b) = p else {
        panic!("expected bumper params");
    };
    assert_eq!(b.card_width, 800.0);
    assert_eq!(b.profile_image_size, 80.0);
    assert_eq!(b.phone_icon_color, "#25D366");
    assert_eq!(b.animation.attack_secs, 1.0);
    assert_eq!(b.animation.hold_secs, 3.0);
    assert_eq!(b.animation.release_secs, 2.0);
}

#[test]
fn defaults_are_already_clean() {
    for mut p in [
        TemplateParams::Property(PropertyParams::default()),
        TemplateParams::Bumper(BumperParams::default()),
        TemplateParams::Callout(CalloutParams::default()),
    ] {
        assert!(p.sanitize().is_empty(), "{}", p.kind_name());
    }
}

#[test]
fn property_spec_list_is_capped_and_spacing_checked() {
    let mut prop = PropertyParams {
        specs: vec![SpecItem::default(); 6],
        spacing: Some(350.0),
        ..PropertyParams::default()
    };
    let mut issues = Issues::default();
    prop.sanitize(&mut issues);
    assert_eq!(prop.specs.len(), 4);
    assert_eq!(prop.spacing, None);
    assert_eq!(issues.0.len(), 2);
}

#[test]
fn video_background_without_path_reverts_to_color() {
    let mut p = TemplateParams::Property(PropertyParams {
        background_type: BackgroundKind::Video,
        ..PropertyParams::default()
    });
    let issues = p.sanitize();
    assert_eq!(issues[0].field, "backgroundVideo");
    assert_eq!(p.video_ref(), None);
}

#[test]
fn callout_ranges() {
    let mut c = CalloutParams {
        line_thickness: 0.0,
        diagonal_length: f64::NAN,
        horizontal_length: 2000.0,
        ..CalloutParams::default()
    };
    let mut issues = Issues::default();
    c.sanitize(&mut issues);
    assert_eq!(c.line_thickness, 8.0);
    assert_eq!(c.diagonal_length, 600.0);
    assert_eq!(c.horizontal_length, 2000.0);
}

#[test]
fn asset_refs() {
    let b = TemplateParams::Bumper(BumperParams {
        profile_image: Some("agent.png".to_owned()),
        ..BumperParams::default()
    });
    assert_eq!(b.image_refs(), vec!["agent.png"]);
    assert_eq!(b.font_families(), vec!["Arial"]);

    let p = TemplateParams::Property(PropertyParams {
        background_type: BackgroundKind::Video,
        background_video: Some("bg.mp4".to_owned()),
        ..PropertyParams::default()
    });
    assert_eq!(p.video_ref(), Some("bg.mp4"));
    assert!(p.image_refs().is_empty());
}

#[test]
fn resolve_color_falls_back() {
    assert_eq!(resolve_color("#fff", Rgba8::BLACK), Rgba8::WHITE);
    assert_eq!(resolve_color("nope", Rgba8::BLACK), Rgba8::BLACK);
}
