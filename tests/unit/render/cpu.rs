use super::*;
use crate::assets::decode::image_from_straight_rgba8;
use crate::foundation::core::{Canvas, FrameIndex};
use crate::params::{CalloutParams, TemplateParams};

fn small_plan() -> DrawPlan {
    DrawPlan::new(
        Canvas {
            width: 64,
            height: 48,
        },
        FrameIndex(0),
        Rgba8::BLACK,
    )
}

fn close(a: [u8; 4], b: [u8; 4], tol: u8) -> bool {
    a.iter().zip(b).all(|(x, y)| x.abs_diff(y) <= tol)
}

#[test]
fn background_fills_frame() {
    let mut plan = small_plan();
    plan.background = Rgba8::rgb(10, 20, 30);
    let frame = CpuBackend::new()
        .render_plan(&plan, &AssetStore::empty())
        .unwrap();
    assert_eq!((frame.width, frame.height), (64, 48));
    assert_eq!(frame.data.len(), 64 * 48 * 4);
    assert!(frame.premultiplied);
    assert_eq!(frame.pixel(0, 0), Some([10, 20, 30, 255]));
    assert_eq!(frame.pixel(63, 47), Some([10, 20, 30, 255]));
}

#[test]
fn rect_fill_respects_layer_transform_and_opacity() {
    let mut plan = small_plan();
    plan.layer(Affine::translate((32.0, 0.0)), 0.5, |p| {
        p.push(DrawOp::FillRect {
            rect: Rect::new(0.0, 0.0, 16.0, 16.0),
            radius: 0.0,
            color: Rgba8::WHITE,
        });
    });
    let frame = CpuBackend::new()
        .render_plan(&plan, &AssetStore::empty())
        .unwrap();
    assert_eq!(frame.pixel(8, 8), Some([0, 0, 0, 255]));
    assert!(close(frame.pixel(40, 8).unwrap(), [128, 128, 128, 255], 2));
}

#[test]
fn polyline_and_stroke_rect_paint_their_outline() {
    let mut plan = small_plan();
    plan.push(DrawOp::StrokePolyline {
        points: vec![Point::new(4.0, 40.0), Point::new(4.0, 4.0), Point::new(30.0, 4.0)],
        width: 4.0,
        color: Rgba8::rgb(255, 0, 0),
    });
    plan.push(DrawOp::StrokeRect {
        rect: Rect::new(40.0, 20.0, 60.0, 40.0),
        width: 2.0,
        color: Rgba8::WHITE,
    });
    let frame = CpuBackend::new()
        .render_plan(&plan, &AssetStore::empty())
        .unwrap();
    assert_eq!(frame.pixel(4, 20), Some([255, 0, 0, 255]));
    assert_eq!(frame.pixel(20, 4), Some([255, 0, 0, 255]));
    assert_eq!(frame.pixel(20, 30), Some([0, 0, 0, 255]));
    // Interior of the stroked rect stays untouched.
    assert_eq!(frame.pixel(50, 30), Some([0, 0, 0, 255]));
    assert!(frame.pixel(40, 30).unwrap()[0] > 100);
}

#[test]
fn images_are_clipped_to_their_box() {
    let mut assets = AssetStore::empty();
    assets.insert_image(
        "green.png",
        image_from_straight_rgba8(2, 2, [0u8, 255, 0, 255].repeat(4)).unwrap(),
    );
    let mut plan = small_plan();
    plan.push(DrawOp::Image {
        source: ImageSource::Asset("green.png".to_owned()),
        dst: Rect::new(0.0, 0.0, 64.0, 48.0),
        clip: Rect::new(8.0, 8.0, 24.0, 24.0),
        clip_radius: 0.0,
    });
    let frame = CpuBackend::new().render_plan(&plan, &assets).unwrap();
    assert!(close(frame.pixel(16, 16).unwrap(), [0, 255, 0, 255], 1));
    assert_eq!(frame.pixel(40, 40), Some([0, 0, 0, 255]));
}

#[test]
fn missing_image_is_a_render_error() {
    let mut plan = small_plan();
    plan.push(DrawOp::Image {
        source: ImageSource::Asset("nope.png".to_owned()),
        dst: Rect::new(0.0, 0.0, 10.0, 10.0),
        clip: Rect::new(0.0, 0.0, 10.0, 10.0),
        clip_radius: 0.0,
    });
    let err = CpuBackend::new()
        .render_plan(&plan, &AssetStore::empty())
        .unwrap_err();
    assert!(matches!(err, ReelError::Render(_)));
}

#[test]
fn unbalanced_plans_are_rejected() {
    let mut plan = small_plan();
    plan.push(DrawOp::PopLayer);
    assert!(
        CpuBackend::new()
            .render_plan(&plan, &AssetStore::empty())
            .is_err()
    );
}

#[test]
fn icons_rasterize_inside_their_rect() {
    let mut plan = small_plan();
    plan.push(DrawOp::Icon {
        icon: IconKind::Home,
        rect: Rect::new(8.0, 8.0, 40.0, 40.0),
        color: Rgba8::WHITE,
    });
    let frame = CpuBackend::new()
        .render_plan(&plan, &AssetStore::empty())
        .unwrap();
    let lit = |x0: u32, x1: u32| {
        (x0..x1)
            .flat_map(|x| (0..48).map(move |y| (x, y)))
            .filter(|&(x, y)| frame.pixel(x, y).is_some_and(|p| p[0] > 0))
            .count()
    };
    assert!(lit(8, 40) > 0);
    assert_eq!(lit(44, 64), 0);
}

#[test]
fn text_without_fonts_is_skipped() {
    let params = TemplateParams::Callout(CalloutParams::default());
    let assets = AssetStore::empty();
    let plan = crate::templates::render_frame(&params, &assets, FrameIndex(60));
    assert!(plan.text_runs().count() > 0);

    let mut backend = CpuBackend::new();
    let frame = backend.render_plan(&plan, &assets).unwrap();
    assert_eq!((frame.width, frame.height), (1080, 1080));
    // Rendering again reuses caches and gives identical pixels.
    assert_eq!(backend.render_plan(&plan, &assets).unwrap(), frame);
}
