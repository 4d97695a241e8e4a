use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use vello_cpu::kurbo::Shape;

use crate::assets::icons::{IconKind, icon_raster_params, rasterize_icon};
use crate::assets::media::{VideoSourceInfo, decode_video_frame_rgba8};
use crate::assets::store::AssetStore;
use crate::foundation::core::{Affine, Point, Rect, Rgba8};
use crate::foundation::error::{ReelError, ReelResult};
use crate::layout::text::TextStyle;
use crate::plan::{DrawOp, DrawPlan, ImageSource, TextAlign, TextBaseline, TextRun};
use crate::render::{FrameRGBA, RenderBackend};

/// Path flattening tolerance for rounded shapes, in pixels.
const SHAPE_TOLERANCE: f64 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct IconKey {
    icon: IconKind,
    color: Rgba8,
    width: u32,
    height: u32,
}

/// `vello_cpu` rasterizer with per-backend icon, image, font and video frame caches.
///
/// Caches only memoize decoded pixels; they never change what a plan renders to.
pub struct CpuBackend {
    image_cache: HashMap<String, vello_cpu::Image>,
    icon_cache: HashMap<IconKey, vello_cpu::Image>,
    font_cache: HashMap<usize, vello_cpu::peniko::FontData>,
    video: Option<VideoFrameDecoder>,
    pixmap: Option<vello_cpu::Pixmap>,
    warned_no_fonts: bool,
}

struct VideoFrameDecoder {
    info: VideoSourceInfo,
    frame_cache: HashMap<u64, vello_cpu::Image>,
    lru: VecDeque<u64>,
    capacity: usize,
}

impl VideoFrameDecoder {
    fn new(info: VideoSourceInfo) -> Self {
        let capacity = std::env::var("PROMOREEL_VIDEO_CACHE_CAPACITY")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .filter(|&n| n > 0)
            .unwrap_or(64);
        Self {
            info,
            frame_cache: HashMap::new(),
            lru: VecDeque::new(),
            capacity,
        }
    }

    fn decode_at(&mut self, source_time_s: f64) -> ReelResult<vello_cpu::Image> {
        let key = ((source_time_s.max(0.0)) * 1000.0).round() as u64;
        if let Some(img) = self.frame_cache.get(&key).cloned() {
            self.touch(key);
            return Ok(img);
        }

        let mut rgba = decode_video_frame_rgba8(&self.info, source_time_s)?;
        crate::foundation::math::premultiply_rgba8_in_place(&mut rgba);
        let pixmap = premul_bytes_to_pixmap(&rgba, self.info.width, self.info.height)?;
        let image = image_paint(pixmap);

        self.frame_cache.insert(key, image.clone());
        self.touch(key);
        while self.lru.len() > self.capacity {
            if let Some(old) = self.lru.pop_front() {
                self.frame_cache.remove(&old);
            }
        }
        Ok(image)
    }

    fn touch(&mut self, key: u64) {
        if let Some(pos) = self.lru.iter().position(|x| *x == key) {
            self.lru.remove(pos);
        }
        self.lru.push_back(key);
    }
}

/// Saved state of an open [`DrawOp::PushLayer`].
struct LayerFrame {
    parent: Affine,
    pushed: bool,
}

impl Default for CpuBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl CpuBackend {
    pub fn new() -> Self {
        Self {
            image_cache: HashMap::new(),
            icon_cache: HashMap::new(),
            font_cache: HashMap::new(),
            video: None,
            pixmap: None,
            warned_no_fonts: false,
        }
    }
}

impl RenderBackend for CpuBackend {
    fn render_plan(&mut self, plan: &DrawPlan, assets: &AssetStore) -> ReelResult<FrameRGBA> {
        if !plan.layers_balanced() {
            return Err(ReelError::render("draw plan has unbalanced layers"));
        }
        let width: u16 = plan
            .canvas
            .width
            .try_into()
            .map_err(|_| ReelError::render("canvas width exceeds u16"))?;
        let height: u16 = plan
            .canvas
            .height
            .try_into()
            .map_err(|_| ReelError::render("canvas height exceeds u16"))?;

        let mut ctx = vello_cpu::RenderContext::new(width, height);
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint(color_to_cpu(plan.background));
        ctx.fill_rect(&rect_to_cpu(plan.canvas.rect()));

        let mut ctm = Affine::IDENTITY;
        let mut stack: Vec<LayerFrame> = Vec::new();
        for op in &plan.ops {
            match op {
                DrawOp::PushLayer { transform, opacity } => {
                    let pushed = *opacity < 1.0;
                    if pushed {
                        ctx.push_opacity_layer(opacity.clamp(0.0, 1.0) as f32);
                    }
                    stack.push(LayerFrame { parent: ctm, pushed });
                    ctm = ctm * *transform;
                }
                DrawOp::PopLayer => {
                    let frame = stack
                        .pop()
                        .ok_or_else(|| ReelError::render("PopLayer without PushLayer"))?;
                    if frame.pushed {
                        ctx.pop_layer();
                    }
                    ctm = frame.parent;
                }
                _ => self.draw_op(&mut ctx, ctm, op, assets)?,
            }
        }

        ctx.flush();
        let mut pixmap = match self.pixmap.take() {
            Some(p) if p.width() == width && p.height() == height => p,
            _ => vello_cpu::Pixmap::new(width, height),
        };
        ctx.render_to_pixmap(&mut pixmap);
        let data = pixmap.data_as_u8_slice().to_vec();
        self.pixmap = Some(pixmap);

        Ok(FrameRGBA {
            width: plan.canvas.width,
            height: plan.canvas.height,
            data,
            premultiplied: true,
        })
    }
}

impl CpuBackend {
    fn draw_op(
        &mut self,
        ctx: &mut vello_cpu::RenderContext,
        ctm: Affine,
        op: &DrawOp,
        assets: &AssetStore,
    ) -> ReelResult<()> {
        ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_transform(affine_to_cpu(ctm));

        match op {
            DrawOp::PushLayer { .. } | DrawOp::PopLayer => Ok(()),
            DrawOp::FillRect {
                rect,
                radius,
                color,
            } => {
                ctx.set_paint(color_to_cpu(*color));
                if *radius > 0.0 {
                    ctx.fill_path(&rounded_rect_path(*rect, *radius));
                } else {
                    ctx.fill_rect(&rect_to_cpu(*rect));
                }
                Ok(())
            }
            DrawOp::StrokeRect { rect, width, color } => {
                ctx.set_paint(color_to_cpu(*color));
                ctx.set_stroke(vello_cpu::kurbo::Stroke::new(*width));
                ctx.stroke_rect(&rect_to_cpu(*rect));
                Ok(())
            }
            DrawOp::StrokePolyline {
                points,
                width,
                color,
            } => {
                let Some((first, rest)) = points.split_first() else {
                    return Ok(());
                };
                let mut path = vello_cpu::kurbo::BezPath::new();
                path.move_to(point_to_cpu(*first));
                for p in rest {
                    path.line_to(point_to_cpu(*p));
                }
                ctx.set_paint(color_to_cpu(*color));
                ctx.set_stroke(
                    vello_cpu::kurbo::Stroke::new(*width)
                        .with_caps(vello_cpu::kurbo::Cap::Round)
                        .with_join(vello_cpu::kurbo::Join::Round),
                );
                ctx.stroke_path(&path);
                Ok(())
            }
            DrawOp::Image {
                source,
                dst,
                clip,
                clip_radius,
            } => {
                let paint = match source {
                    ImageSource::Asset(reference) => self.image_paint_for(reference, assets)?,
                    ImageSource::VideoFrame { time_secs } => {
                        self.video_paint_for(*time_secs, assets)?
                    }
                };
                let (w, h) = image_paint_size(&paint)?;

                ctx.push_clip_layer(&rounded_rect_path(*clip, *clip_radius));
                let place = Affine::translate(dst.origin().to_vec2())
                    * Affine::scale_non_uniform(dst.width() / w, dst.height() / h);
                ctx.set_transform(affine_to_cpu(ctm * place));
                ctx.set_paint(paint);
                ctx.fill_rect(&vello_cpu::kurbo::Rect::new(0.0, 0.0, w, h));
                ctx.pop_layer();
                Ok(())
            }
            DrawOp::Icon { icon, rect, color } => {
                let at = ctm * Affine::translate(rect.origin().to_vec2());
                let (pw, ph, adjust) = icon_raster_params((rect.width(), rect.height()), at)?;
                let paint = self.icon_paint_for(*icon, *color, pw, ph)?;
                ctx.set_transform(affine_to_cpu(adjust));
                ctx.set_paint(paint);
                ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                    0.0,
                    0.0,
                    f64::from(pw),
                    f64::from(ph),
                ));
                Ok(())
            }
            DrawOp::Text(run) => self.draw_text(ctx, ctm, run, assets),
        }
    }

    fn draw_text(
        &mut self,
        ctx: &mut vello_cpu::RenderContext,
        ctm: Affine,
        run: &TextRun,
        assets: &AssetStore,
    ) -> ReelResult<()> {
        let style = TextStyle::new(&run.family, run.size_px, run.weight);
        let Some(shaped) = assets.shape_line(&run.text, &style, run.color.into()) else {
            if !self.warned_no_fonts {
                tracing::warn!("no fonts registered, skipping text runs");
                self.warned_no_fonts = true;
            }
            return Ok(());
        };
        let (face, layout) = shaped?;
        let font = self.font_for_face(face, assets)?;

        let width = f64::from(layout.width());
        let height = f64::from(layout.height());
        let x = match run.align {
            TextAlign::Left => run.origin.x,
            TextAlign::Center => run.origin.x - width / 2.0,
        };
        let y = match run.baseline {
            TextBaseline::Top => run.origin.y,
            TextBaseline::Middle => run.origin.y - height / 2.0,
        };
        ctx.set_transform(affine_to_cpu(ctm * Affine::translate((x, y))));

        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(glyph_run) = item else {
                    continue;
                };

                let brush = glyph_run.style().brush;
                ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                    brush.r, brush.g, brush.b, brush.a,
                ));

                let glyphs = glyph_run.glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                ctx.glyph_run(&font)
                    .font_size(glyph_run.run().font_size())
                    .fill_glyphs(glyphs);
            }
        }
        Ok(())
    }

    fn image_paint_for(
        &mut self,
        reference: &str,
        assets: &AssetStore,
    ) -> ReelResult<vello_cpu::Image> {
        if let Some(paint) = self.image_cache.get(reference) {
            return Ok(paint.clone());
        }
        let img = assets
            .image(reference)
            .ok_or_else(|| ReelError::render(format!("image '{reference}' is not prepared")))?;
        let pixmap = premul_bytes_to_pixmap(img.rgba8_premul.as_slice(), img.width, img.height)?;
        let paint = image_paint(pixmap);
        self.image_cache.insert(reference.to_owned(), paint.clone());
        Ok(paint)
    }

    fn icon_paint_for(
        &mut self,
        icon: IconKind,
        color: Rgba8,
        width: u32,
        height: u32,
    ) -> ReelResult<vello_cpu::Image> {
        let key = IconKey {
            icon,
            color,
            width,
            height,
        };
        if let Some(paint) = self.icon_cache.get(&key) {
            return Ok(paint.clone());
        }
        let rgba8_premul = rasterize_icon(icon, color, width, height)?;
        let paint = image_paint(premul_bytes_to_pixmap(&rgba8_premul, width, height)?);
        self.icon_cache.insert(key, paint.clone());
        Ok(paint)
    }

    fn font_for_face(
        &mut self,
        face: usize,
        assets: &AssetStore,
    ) -> ReelResult<vello_cpu::peniko::FontData> {
        if let Some(font) = self.font_cache.get(&face) {
            return Ok(font.clone());
        }
        let bytes = assets
            .fonts()
            .face(face)
            .ok_or_else(|| ReelError::render(format!("unknown font face {face}")))?
            .data
            .as_ref()
            .clone();
        let font = vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(bytes), 0);
        self.font_cache.insert(face, font.clone());
        Ok(font)
    }

    fn video_paint_for(
        &mut self,
        source_time_s: f64,
        assets: &AssetStore,
    ) -> ReelResult<vello_cpu::Image> {
        let info = assets.video().ok_or_else(|| {
            ReelError::render("plan references a video frame but no video is prepared")
        })?;
        if self.video.as_ref().is_none_or(|d| d.info != *info) {
            self.video = Some(VideoFrameDecoder::new(info.clone()));
        }
        let decoder = self
            .video
            .as_mut()
            .ok_or_else(|| ReelError::render("video decoder missing"))?;
        decoder.decode_at(source_time_s)
    }
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn rect_to_cpu(r: Rect) -> vello_cpu::kurbo::Rect {
    vello_cpu::kurbo::Rect::new(r.x0, r.y0, r.x1, r.y1)
}

fn color_to_cpu(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn rounded_rect_path(r: Rect, radius: f64) -> vello_cpu::kurbo::BezPath {
    let radius = radius.max(0.0).min(r.width().min(r.height()) / 2.0);
    vello_cpu::kurbo::RoundedRect::from_rect(rect_to_cpu(r), radius).to_path(SHAPE_TOLERANCE)
}

fn image_paint(pixmap: vello_cpu::Pixmap) -> vello_cpu::Image {
    vello_cpu::Image {
        image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
        sampler: vello_cpu::peniko::ImageSampler::default(),
    }
}

fn premul_bytes_to_pixmap(
    rgba8_premul: &[u8],
    width: u32,
    height: u32,
) -> ReelResult<vello_cpu::Pixmap> {
    let w: u16 = width
        .try_into()
        .map_err(|_| ReelError::render("image width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| ReelError::render("image height exceeds u16"))?;
    if rgba8_premul.len() != width as usize * height as usize * 4 {
        return Err(ReelError::render("prepared image byte length mismatch"));
    }

    let mut may_have_opacities = false;
    let pixels: Vec<_> = rgba8_premul
        .chunks_exact(4)
        .map(|px| {
            may_have_opacities |= px[3] != 255;
            vello_cpu::peniko::color::PremulRgba8 {
                r: px[0],
                g: px[1],
                b: px[2],
                a: px[3],
            }
        })
        .collect();

    Ok(vello_cpu::Pixmap::from_parts_with_opacity(
        pixels,
        w,
        h,
        may_have_opacities,
    ))
}

fn image_paint_size(image: &vello_cpu::Image) -> ReelResult<(f64, f64)> {
    match &image.image {
        vello_cpu::ImageSource::Pixmap(p) => Ok((f64::from(p.width()), f64::from(p.height()))),
        vello_cpu::ImageSource::OpaqueId(_) => Err(ReelError::render(
            "cpu backend does not support opaque image ids",
        )),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
