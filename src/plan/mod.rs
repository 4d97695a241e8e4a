//! Renderer-agnostic draw plans.
//!
//! A [`DrawPlan`] is the complete description of one frame. It is built fresh for every frame,
//! never mutated after construction, and consumed either by a raster backend or by an
//! interactive player.

pub mod fingerprint;

use crate::assets::icons::IconKind;
use crate::foundation::core::{Affine, Canvas, FrameIndex, Point, Rect, Rgba8};
use crate::foundation::error::ReelResult;
use crate::layout::text::FontWeight;

/// Where the pixels of an [`DrawOp::Image`] come from.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ImageSource {
    /// Prepared image, keyed by its parameter reference.
    Asset(String),
    /// Frame of the background video at a source time.
    VideoFrame { time_secs: f64 },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
}

/// Vertical meaning of [`TextRun::origin`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextBaseline {
    /// Origin is the top of the line box.
    #[default]
    Top,
    /// Origin is the vertical middle of the line box.
    Middle,
}

/// One single-line text draw.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TextRun {
    pub text: String,
    pub origin: Point,
    pub size_px: f64,
    pub weight: FontWeight,
    pub family: String,
    pub color: Rgba8,
    pub align: TextAlign,
    pub baseline: TextBaseline,
}

/// Draw instructions, executed in order.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DrawOp {
    /// Start a group composited with `opacity`; `transform` applies to everything until the
    /// matching [`DrawOp::PopLayer`] and composes with enclosing layers.
    PushLayer { transform: Affine, opacity: f64 },
    PopLayer,
    FillRect {
        rect: Rect,
        radius: f64,
        color: Rgba8,
    },
    /// Stroke centred on `rect`'s outline.
    StrokeRect {
        rect: Rect,
        width: f64,
        color: Rgba8,
    },
    /// Open polyline with round caps and joins.
    StrokePolyline {
        points: Vec<Point>,
        width: f64,
        color: Rgba8,
    },
    /// Image drawn into `dst`, clipped to `clip` with rounded corners of `clip_radius`.
    Image {
        source: ImageSource,
        dst: Rect,
        clip: Rect,
        clip_radius: f64,
    },
    Icon {
        icon: IconKind,
        rect: Rect,
        color: Rgba8,
    },
    Text(TextRun),
}

/// Everything needed to draw one frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DrawPlan {
    pub canvas: Canvas,
    pub frame: FrameIndex,
    /// Opaque fill under all ops.
    pub background: Rgba8,
    pub ops: Vec<DrawOp>,
}

impl DrawPlan {
    pub fn new(canvas: Canvas, frame: FrameIndex, background: Rgba8) -> Self {
        Self {
            canvas,
            frame,
            background,
            ops: Vec::new(),
        }
    }

    pub fn push(&mut self, op: DrawOp) {
        self.ops.push(op);
    }

    /// Record `body` inside a layer. Layers with no visible effect are omitted entirely.
    pub fn layer(&mut self, transform: Affine, opacity: f64, body: impl FnOnce(&mut Self)) {
        if !(opacity > 0.0) {
            return;
        }
        let opacity = opacity.min(1.0);
        let start = self.ops.len();
        self.ops.push(DrawOp::PushLayer { transform, opacity });
        body(self);
        if self.ops.len() == start + 1 {
            self.ops.truncate(start);
        } else {
            self.ops.push(DrawOp::PopLayer);
        }
    }

    /// Text runs of the plan, in draw order.
    pub fn text_runs(&self) -> impl Iterator<Item = &TextRun> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text(t) => Some(t),
            _ => None,
        })
    }

    /// Return `true` when the plan balances every push with a pop.
    pub fn layers_balanced(&self) -> bool {
        let mut depth = 0i64;
        for op in &self.ops {
            match op {
                DrawOp::PushLayer { .. } => depth += 1,
                DrawOp::PopLayer => {
                    depth -= 1;
                    if depth < 0 {
                        return false;
                    }
                }
                _ => {}
            }
        }
        depth == 0
    }

    pub fn to_json_pretty(&self) -> ReelResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/plan/mod.rs"]
mod tests;
