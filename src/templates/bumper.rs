use crate::animation::ease::{EasingCtx, GROUP_SLIDE_PX};
use crate::animation::timing::compute_progress;
use crate::assets::icons::IconKind;
use crate::assets::store::AssetStore;
use crate::foundation::core::{Canvas, FrameIndex, Rgba8};
use crate::layout::card::{CardLayout, CardMetrics, layout_card};
use crate::layout::cover::cover_fit;
use crate::layout::text::FontWeight;
use crate::params::{BumperParams, resolve_color};
use crate::plan::{DrawOp, DrawPlan, ImageSource, TextAlign, TextBaseline, TextRun};
use crate::templates::Template;

impl Template for BumperParams {
    fn canvas(&self) -> Canvas {
        Canvas::SQUARE
    }

    fn duration_secs(&self) -> f64 {
        self.animation.total_secs()
    }

    fn file_prefix(&self) -> &'static str {
        "bumper-out"
    }

    fn render_frame(&self, assets: &AssetStore, frame: FrameIndex) -> DrawPlan {
        let canvas = self.canvas();
        let fps = self.fps();
        let t = fps.frame_to_secs(frame);

        let mut plan = DrawPlan::new(
            canvas,
            frame,
            resolve_color(&self.background_color, Rgba8::rgb(0x2d, 0x2d, 0x2d)),
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

        let avatar = self
            .profile_image
            .as_deref()
            .and_then(|r| assets.image_size(r).map(|size| (r, size)));
        let layout = layout_card(
            canvas,
            &CardMetrics {
                card_width: self.card_width,
                padding: self.card_padding,
                gap: self.card_gap,
                avatar_size: avatar.map(|_| self.profile_image_size),
                avatar_radius_pct: self.profile_image_border_radius,
                top_text_size: self.top_text_size,
                name_text_size: self.name_text_size,
                phone_text_size: self.phone_text_size,
                phone_icon_size: self.show_whatsapp_icon.then_some(self.phone_icon_size),
            },
        );

        plan.layer(ts.to_affine(canvas.center()), ts.opacity, |plan| {
            self.draw_card(plan, &layout, avatar);
        });
        plan
    }
}

impl BumperParams {
    fn draw_card(
        &self,
        plan: &mut DrawPlan,
        layout: &CardLayout,
        avatar: Option<(&str, (f64, f64))>,
    ) {
        plan.push(DrawOp::FillRect {
            rect: layout.card,
            radius: self.card_border_radius,
            color: resolve_color(&self.card_background_color, Rgba8::WHITE),
        });

        if let (Some((reference, (w, h))), Some(slot)) = (avatar, layout.avatar) {
            plan.push(DrawOp::Image {
                source: ImageSource::Asset(reference.to_owned()),
                dst: cover_fit(w, h, slot),
                clip: slot,
                clip_radius: layout.avatar_clip_radius,
            });
        }

        let line = |text: &str, origin, size_px, weight, color: &str| {
            DrawOp::Text(TextRun {
                text: text.to_owned(),
                origin,
                size_px,
                weight,
                family: self.font_family.clone(),
                color: resolve_color(color, Rgba8::BLACK),
                align: TextAlign::Left,
                baseline: TextBaseline::Middle,
            })
        };

        plan.push(line(
            &self.top_text,
            layout.top_text,
            self.top_text_size,
            FontWeight::Regular,
            &self.top_text_color,
        ));
        plan.push(line(
            &self.name_text,
            layout.name_text,
            self.name_text_size,
            FontWeight::Bold,
            &self.name_text_color,
        ));
        if let Some(rect) = layout.phone_icon {
            plan.push(DrawOp::Icon {
                icon: IconKind::WhatsApp,
                rect,
                color: resolve_color(&self.phone_icon_color, Rgba8::rgb(0x25, 0xd3, 0x66)),
            });
        }
        plan.push(line(
            &self.phone_number,
            layout.phone_text,
            self.phone_text_size,
            FontWeight::Regular,
            &self.phone_text_color,
        ));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/templates/bumper.rs"]
mod tests;
