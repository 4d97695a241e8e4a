use crate::animation::ease::{EasingCtx, GROUP_SLIDE_PX};
use crate::animation::timing::compute_progress;
use crate::assets::store::AssetStore;
use crate::foundation::core::{Canvas, FrameIndex, Rgba8};
use crate::layout::callout::{
    BOTTOM_LABEL_SIZE, CalloutLayout, CalloutMetrics, TOP_LABEL_SIZE, layout_callout,
};
use crate::layout::cover::cover_fit;
use crate::layout::text::FontWeight;
use crate::params::{CalloutParams, resolve_color};
use crate::plan::{DrawOp, DrawPlan, ImageSource, TextAlign, TextBaseline, TextRun};
use crate::templates::Template;

const CALLOUT_RED: Rgba8 = Rgba8::rgb(255, 0, 0);

impl Template for CalloutParams {
    fn canvas(&self) -> Canvas {
        Canvas::SQUARE
    }

    fn duration_secs(&self) -> f64 {
        self.animation.total_secs()
    }

    fn file_prefix(&self) -> &'static str {
        "callout-label"
    }

    fn render_frame(&self, assets: &AssetStore, frame: FrameIndex) -> DrawPlan {
        let canvas = self.canvas();
        let fps = self.fps();
        let t = fps.frame_to_secs(frame);

        let mut plan = DrawPlan::new(
            canvas,
            frame,
            resolve_color(&self.background_color, Rgba8::BLACK),
        );

        let state = compute_progress(t, &self.animation);
        let ts = self.animation_type.apply(
            &state,
            &EasingCtx {
                fps: fps.as_f64(),
                slide_px: GROUP_SLIDE_PX,
            },
        );
        if ts.is_invisible() {
            return plan;
        }

        let layout = layout_callout(
            canvas,
            &CalloutMetrics {
                mirrored: self.arrow_mirrored,
                marker_size: self.marker_size,
                diagonal_length: self.diagonal_length,
                horizontal_length: self.horizontal_length,
                text_spacing: self.text_spacing,
                border_thickness: self.border_thickness,
            },
        );

        plan.layer(ts.to_affine(canvas.center()), ts.opacity, |plan| {
            self.draw_callout(plan, assets, &layout);
        });
        plan
    }
}

impl CalloutParams {
    fn draw_callout(&self, plan: &mut DrawPlan, assets: &AssetStore, layout: &CalloutLayout) {
        let accent = resolve_color(&self.callout_color, CALLOUT_RED);

        let image = self
            .image
            .as_deref()
            .and_then(|r| assets.image_size(r).map(|size| (r, size)));
        if let Some((reference, (w, h))) = image {
            plan.push(DrawOp::Image {
                source: ImageSource::Asset(reference.to_owned()),
                dst: cover_fit(w, h, layout.image),
                clip: layout.image,
                clip_radius: 0.0,
            });
            plan.push(DrawOp::StrokeRect {
                rect: layout.image_border,
                width: self.border_thickness,
                color: resolve_color(&self.border_color, CALLOUT_RED),
            });
        }

        plan.push(DrawOp::FillRect {
            rect: layout.marker,
            radius: 0.0,
            color: accent,
        });
        plan.push(DrawOp::StrokePolyline {
            points: layout.connector.to_vec(),
            width: self.line_thickness,
            color: accent,
        });

        let label = |text: &str, origin, size_px, color| {
            DrawOp::Text(TextRun {
                text: text.to_owned(),
                origin,
                size_px,
                weight: FontWeight::Bold,
                family: self.font_family.clone(),
                color,
                align: TextAlign::Center,
                baseline: TextBaseline::Middle,
            })
        };

        plan.push(label(
            &self.top_text,
            layout.top_label,
            TOP_LABEL_SIZE,
            resolve_color(&self.top_text_color, CALLOUT_RED),
        ));
        plan.push(DrawOp::FillRect {
            rect: layout.bar,
            radius: 0.0,
            color: accent,
        });
        plan.push(label(
            &self.bottom_text,
            layout.bottom_label,
            BOTTOM_LABEL_SIZE,
            resolve_color(&self.bottom_text_color, Rgba8::WHITE),
        ));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/templates/callout.rs"]
mod tests;
