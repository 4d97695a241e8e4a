use super::*;
use crate::assets::decode::image_from_straight_rgba8;

fn hold() -> FrameIndex {
    FrameIndex(60)
}

#[test]
fn draw_order_without_image() {
    let plan = CalloutParams::default().render_frame(&AssetStore::empty(), hold());
    let kinds: Vec<&str> = plan
        .ops
        .iter()
        .map(|op| match op {
            DrawOp::PushLayer { .. } => "push",
            DrawOp::PopLayer => "pop",
            DrawOp::FillRect { .. } => "fill",
            DrawOp::StrokeRect { .. } => "stroke",
            DrawOp::StrokePolyline { .. } => "line",
            DrawOp::Image { .. } => "image",
            DrawOp::Icon { .. } => "icon",
            DrawOp::Text(_) => "text",
        })
        .collect();
    assert_eq!(kinds, ["push", "fill", "line", "text", "fill", "text", "pop"]);
}

#[test]
fn labels_use_fixed_sizes() {
    let plan = CalloutParams::default().render_frame(&AssetStore::empty(), hold());
    let runs: Vec<_> = plan.text_runs().collect();
    assert_eq!(runs[0].text, "Kuningan PIK");
    assert_eq!(runs[0].size_px, TOP_LABEL_SIZE);
    assert_eq!(runs[0].color, Rgba8::rgb(255, 0, 0));
    assert_eq!(runs[1].size_px, BOTTOM_LABEL_SIZE);
    assert_eq!(runs[1].color, Rgba8::WHITE);
    assert!(runs.iter().all(|r| r.weight == FontWeight::Bold));
    assert!(runs.iter().all(|r| r.align == TextAlign::Center));
}

#[test]
fn image_and_border_precede_marker() {
    let params = CalloutParams {
        image: Some("site.jpg".to_owned()),
        ..CalloutParams::default()
    };
    let mut assets = AssetStore::empty();
    assets.insert_image(
        "site.jpg",
        image_from_straight_rgba8(8, 5, vec![200; 8 * 5 * 4]).unwrap(),
    );
    let plan = params.render_frame(&assets, hold());
    assert!(matches!(plan.ops[1], DrawOp::Image { .. }));
    assert!(matches!(
        plan.ops[2],
        DrawOp::StrokeRect { width, .. } if width == 4.0
    ));
    assert!(matches!(plan.ops[3], DrawOp::FillRect { .. }));
}

#[test]
fn mirrored_connector_runs_left() {
    let params = CalloutParams {
        arrow_mirrored: true,
        ..CalloutParams::default()
    };
    let plan = params.render_frame(&AssetStore::empty(), hold());
    let points = plan
        .ops
        .iter()
        .find_map(|op| match op {
            DrawOp::StrokePolyline { points, width, .. } => {
                assert_eq!(*width, 8.0);
                Some(points.clone())
            }
            _ => None,
        })
        .unwrap();
    assert_eq!(points.len(), 3);
    assert!(points[2].x < points[1].x);
    assert_eq!(points[0].x, 1080.0 - 60.0);
}

#[test]
fn slide_moves_fifty_pixels_at_most() {
    let params = CalloutParams {
        animation_type: crate::animation::ease::EasingKind::SlideDown,
        ..CalloutParams::default()
    };
    let plan = params.render_frame(&AssetStore::empty(), FrameIndex(15));
    let DrawOp::PushLayer { transform, .. } = plan.ops[0] else {
        panic!("expected layer");
    };
    let p = crate::foundation::core::Point::new(100.0, 100.0);
    let moved = transform * p;
    assert!((moved.y - (p.y - 25.0)).abs() < 1e-3);
    assert!((moved.x - p.x).abs() < 1e-9);
}
