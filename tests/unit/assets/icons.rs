use super::*;

#[test]
fn names_round_trip_and_unknown_maps_to_home() {
    for kind in IconKind::SPEC_ICONS {
        assert_eq!(IconKind::from_name(kind.name()), kind);
    }
    assert_eq!(IconKind::from_name("WhatsApp"), IconKind::WhatsApp);
    assert_eq!(IconKind::from_name("pool"), IconKind::Home);

    let k: IconKind = serde_json::from_str("\"dollar\"").unwrap();
    assert_eq!(k, IconKind::Dollar);
    assert_eq!(serde_json::to_string(&IconKind::Trees).unwrap(), "\"trees\"");
}

#[test]
fn every_icon_parses() {
    for kind in IconKind::SPEC_ICONS.into_iter().chain([IconKind::WhatsApp]) {
        let tree = icon_tree(kind, Rgba8::WHITE).unwrap();
        assert_eq!(tree.size().width(), 24.0);
    }
}

#[test]
fn raster_is_tinted_and_premultiplied() {
    let px = rasterize_icon(IconKind::WhatsApp, Rgba8::rgb(0x25, 0xd3, 0x66), 48, 48).unwrap();
    assert_eq!(px.len(), 48 * 48 * 4);
    let opaque = px
        .chunks_exact(4)
        .find(|p| p[3] == 255)
        .expect("filled glyph has opaque pixels");
    assert_eq!(opaque, &[0x25, 0xd3, 0x66, 255]);
    assert!(px.chunks_exact(4).all(|p| p[0] <= p[3] && p[1] <= p[3] && p[2] <= p[3]));
}

#[test]
fn outline_icons_leave_background_transparent() {
    let px = rasterize_icon(IconKind::Dollar, Rgba8::WHITE, 24, 24).unwrap();
    assert_eq!(&px[0..4], &[0, 0, 0, 0]);
    assert!(px.chunks_exact(4).any(|p| p[3] > 0));
}

#[test]
fn raster_params_follow_transform_scale() {
    let (w, h, adjust) = icon_raster_params((80.0, 80.0), Affine::scale(2.0)).unwrap();
    assert_eq!((w, h), (160, 160));
    let corner = adjust * crate::foundation::core::Point::new(160.0, 160.0);
    assert!((corner.x - 160.0).abs() < 1e-9 && (corner.y - 160.0).abs() < 1e-9);

    assert!(icon_raster_params((0.0, 10.0), Affine::IDENTITY).is_err());
}
