use crate::animation::ease::{DEFAULT_SLIDE_PX, EasingCtx};
use crate::animation::sequence::{schedule_elements, total_duration_secs};
use crate::assets::store::AssetStore;
use crate::foundation::core::{Canvas, FrameIndex, Rgba8};
use crate::layout::cover::cover_fit;
use crate::layout::row::{RowItemLayout, RowItemText, SizeTier, layout_row};
use crate::layout::text::FontWeight;
use crate::params::property::{SUBTITLE_FAMILY, TITLE_FAMILY};
use crate::params::{BackgroundKind, PropertyParams, SpecItem, resolve_color};
use crate::plan::{DrawOp, DrawPlan, ImageSource, TextAlign, TextBaseline, TextRun};
use crate::templates::Template;

/// Subtitles are drawn slightly translucent.
const SUBTITLE_ALPHA: f64 = 0.9;

impl Template for PropertyParams {
    fn canvas(&self) -> Canvas {
        Canvas::PORTRAIT
    }

    fn duration_secs(&self) -> f64 {
        total_duration_secs(self.specs.len(), self.animation_mode, &self.animation)
    }

    fn file_prefix(&self) -> &'static str {
        "property-spec"
    }

    fn render_frame(&self, assets: &AssetStore, frame: FrameIndex) -> DrawPlan {
        let canvas = self.canvas();
        let fps = self.fps();
        let t = fps.frame_to_secs(frame);

        let video = match self.background_type {
            BackgroundKind::Video => assets.video(),
            BackgroundKind::Color => None,
        };
        let background = if video.is_some() {
            Rgba8::BLACK
        } else {
            resolve_color(&self.background_color, Rgba8::BLACK)
        };
        let mut plan = DrawPlan::new(canvas, frame, background);

        if let Some(info) = video {
            plan.push(DrawOp::Image {
                source: ImageSource::VideoFrame {
                    time_secs: info.looped_time_sec(t),
                },
                dst: cover_fit(f64::from(info.width), f64::from(info.height), canvas.rect()),
                clip: canvas.rect(),
                clip_radius: 0.0,
            });
        }

        let texts: Vec<RowItemText<'_>> = self
            .specs
            .iter()
            .map(|s| RowItemText {
                title: &s.title,
                subtitle: &s.subtitle,
            })
            .collect();
        let row = layout_row(canvas, &texts, self.spacing, SUBTITLE_FAMILY, assets);

        let states = schedule_elements(&self.specs, self.animation_mode, &self.animation, t);
        let ctx = EasingCtx {
            fps: fps.as_f64(),
            slide_px: DEFAULT_SLIDE_PX,
        };

        plan.layer(row.transform, 1.0, |plan| {
            for ((spec, item), state) in self.specs.iter().zip(&row.items).zip(&states) {
                let ts = self.animation_type.apply(state, &ctx);
                if ts.is_invisible() {
                    continue;
                }
                plan.layer(ts.to_affine(item.bounds.center()), ts.opacity, |plan| {
                    draw_item(plan, spec, item, &row.tier);
                });
            }
        });

        plan
    }
}

fn draw_item(plan: &mut DrawPlan, spec: &SpecItem, item: &RowItemLayout, tier: &SizeTier) {
    plan.push(DrawOp::Icon {
        icon: spec.icon,
        rect: item.icon,
        color: Rgba8::WHITE,
    });
    if !spec.title.is_empty() {
        plan.push(DrawOp::Text(TextRun {
            text: spec.title.clone(),
            origin: item.title_anchor,
            size_px: tier.title,
            weight: FontWeight::Bold,
            family: TITLE_FAMILY.to_owned(),
            color: Rgba8::WHITE,
            align: TextAlign::Center,
            baseline: TextBaseline::Top,
        }));
    }
    let subtitle_color = Rgba8::WHITE.with_alpha_mul(SUBTITLE_ALPHA);
    for (line, origin) in item.subtitle_lines.iter().zip(&item.subtitle_anchors) {
        plan.push(DrawOp::Text(TextRun {
            text: line.clone(),
            origin: *origin,
            size_px: tier.subtitle,
            weight: FontWeight::Regular,
            family: SUBTITLE_FAMILY.to_owned(),
            color: subtitle_color,
            align: TextAlign::Center,
            baseline: TextBaseline::Top,
        }));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/templates/property.rs"]
mod tests;
