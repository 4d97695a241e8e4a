use super::*;
use crate::animation::sequence::SequencingPolicy;
use crate::animation::timing::AnimationProfile;
use crate::assets::media::VideoSourceInfo;
use crate::foundation::core::Rect;

fn item_opacities(plan: &DrawPlan) -> Vec<f64> {
    // The first layer is the row; the rest wrap one item each.
    plan.ops
        .iter()
        .filter_map(|op| match op {
            DrawOp::PushLayer { opacity, .. } => Some(*opacity),
            _ => None,
        })
        .skip(1)
        .collect()
}

#[test]
fn simultaneous_items_share_opacity() {
    let params = PropertyParams::default();
    let plan = params.render_frame(&AssetStore::empty(), FrameIndex(15));
    let ops = item_opacities(&plan);
    assert_eq!(ops.len(), 3);
    assert!(ops.iter().all(|o| (o - 0.5).abs() < 1e-6));

    let titles: Vec<_> = plan.text_runs().filter(|t| t.family == TITLE_FAMILY).collect();
    assert_eq!(titles.len(), 3);
    assert_eq!(titles[1].text, "45");
    assert_eq!(titles[1].weight, FontWeight::Bold);
    assert_eq!(titles[1].size_px, 90.0);
}

#[test]
fn staggered_waiting_items_are_omitted() {
    let params = PropertyParams {
        animation_mode: SequencingPolicy::Staggered,
        ..PropertyParams::default()
    };
    assert_eq!(params.duration_secs(), 7.0);

    let assets = AssetStore::empty();
    let early = params.render_frame(&assets, FrameIndex(15));
    assert_eq!(item_opacities(&early).len(), 1);
    let icons = early
        .ops
        .iter()
        .filter(|op| matches!(op, DrawOp::Icon { .. }))
        .count();
    assert_eq!(icons, 1);

    let late = params.render_frame(&assets, FrameIndex(75));
    assert_eq!(item_opacities(&late).len(), 3);
}

#[test]
fn subtitles_are_translucent_inter() {
    let params = PropertyParams {
        animation: AnimationProfile::new(0.5, 3.0, 0.5).unwrap(),
        ..PropertyParams::default()
    };
    let plan = params.render_frame(&AssetStore::empty(), FrameIndex(30));
    let sub = plan
        .text_runs()
        .find(|t| t.family == SUBTITLE_FAMILY)
        .unwrap();
    assert_eq!(sub.color.a, 230);
    assert_eq!(sub.weight, FontWeight::Regular);
    assert_eq!(sub.align, TextAlign::Center);
}

#[test]
fn color_background_is_used_without_video() {
    let params = PropertyParams {
        background_color: "#123456".to_owned(),
        ..PropertyParams::default()
    };
    let plan = params.render_frame(&AssetStore::empty(), FrameIndex(60));
    assert_eq!(plan.background, Rgba8::rgb(0x12, 0x34, 0x56));
    assert_eq!(plan.canvas, Canvas::PORTRAIT);
}

#[test]
fn video_background_is_cover_fit_and_looped() {
    let params = PropertyParams {
        background_type: BackgroundKind::Video,
        background_video: Some("bg.mp4".to_owned()),
        background_color: "#ffffff".to_owned(),
        ..PropertyParams::default()
    };
    let mut assets = AssetStore::empty();
    assets.set_video(VideoSourceInfo {
        source_path: "bg.mp4".into(),
        width: 1920,
        height: 1080,
        fps_num: 30,
        fps_den: 1,
        duration_sec: 2.0,
    });

    let plan = params.render_frame(&assets, FrameIndex(90));
    assert_eq!(plan.background, Rgba8::BLACK);
    match &plan.ops[0] {
        DrawOp::Image { source, dst, clip, .. } => {
            match source {
                ImageSource::VideoFrame { time_secs } => assert!((time_secs - 1.0).abs() < 1e-6),
                other => panic!("unexpected source {other:?}"),
            }
            assert_eq!(*clip, Rect::new(0.0, 0.0, 1080.0, 1920.0));
            assert!((dst.height() - 1920.0).abs() < 1e-9);
            assert!(dst.width() > 1080.0);
        }
        other => panic!("expected video frame, got {other:?}"),
    }
}

#[test]
fn idle_frames_keep_only_background() {
    let params = PropertyParams::default();
    let plan = params.render_frame(&AssetStore::empty(), FrameIndex(160));
    assert!(plan.ops.is_empty());
}
