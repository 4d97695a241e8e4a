use super::*;
use crate::assets::icons::IconKind;
use crate::foundation::core::{Canvas, FrameIndex, Point, Rect, Rgba8};
use crate::plan::{DrawOp, ImageSource};

fn plan(frame: u64, opacity: f64) -> DrawPlan {
    let mut p = DrawPlan::new(Canvas::SQUARE, FrameIndex(frame), Rgba8::BLACK);
    p.layer(crate::foundation::core::Affine::IDENTITY, opacity, |p| {
        p.push(DrawOp::FillRect {
            rect: Rect::new(0.0, 0.0, 10.0, 10.0),
            radius: 0.0,
            color: Rgba8::WHITE,
        });
    });
    p
}

fn fp(plan: &DrawPlan) -> FrameFingerprint {
    fingerprint_plan(plan).unwrap()
}

#[test]
fn frame_index_does_not_change_fingerprint() {
    assert_eq!(fp(&plan(3, 1.0)), fp(&plan(90, 1.0)));
}

#[test]
fn visible_changes_change_fingerprint() {
    assert_ne!(fp(&plan(3, 1.0)), fp(&plan(3, 0.5)));

    let mut other_bg = plan(3, 1.0);
    other_bg.background = Rgba8::WHITE;
    assert_ne!(fp(&plan(3, 1.0)), fp(&other_bg));
}

#[test]
fn every_op_kind_fingerprints() {
    let mut p = plan(3, 1.0);
    p.push(DrawOp::StrokeRect {
        rect: Rect::new(1.0, 1.0, 9.0, 9.0),
        width: 2.0,
        color: Rgba8::WHITE,
    });
    p.push(DrawOp::StrokePolyline {
        points: vec![Point::new(0.0, 0.0), Point::new(5.0, 5.0)],
        width: 3.0,
        color: Rgba8::WHITE,
    });
    p.push(DrawOp::Icon {
        icon: IconKind::WhatsApp,
        rect: Rect::new(0.0, 0.0, 16.0, 16.0),
        color: Rgba8::WHITE,
    });
    p.push(DrawOp::Image {
        source: ImageSource::Asset("avatar.png".to_owned()),
        dst: Rect::new(0.0, 0.0, 80.0, 80.0),
        clip: Rect::new(0.0, 0.0, 80.0, 80.0),
        clip_radius: 40.0,
    });

    let with_ops = fingerprint_plan(&p).unwrap();
    assert_ne!(with_ops, fp(&plan(3, 1.0)));
}
