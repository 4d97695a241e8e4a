//! promoreel renders parameterized short marketing videos: property spec cards, callout labels
//! and contact "bumper" cards.
//!
//! The core is a deterministic frame-animation engine. A template's parameters and a frame index
//! map to a [`DrawPlan`], and the same plan drives both the interactive [`Player`] and the
//! offline [`export`]:
//!
//! - Parse and sanitize [`TemplateParams`]
//! - Prepare an [`AssetStore`] once (images, fonts, background video)
//! - Build plans with [`render_frame`], rasterize them with a [`RenderBackend`], and stream
//!   frames into a [`FrameSink`]
#![forbid(unsafe_code)]

pub mod animation;
pub mod assets;
pub mod encode;
pub mod foundation;
pub mod layout;
pub mod params;
pub mod plan;
pub mod render;
pub mod session;
pub mod templates;

pub use crate::foundation::core::{Affine, Canvas, Fps, FrameIndex, FrameRange, Point, Rect, Rgba8};
pub use crate::foundation::error::{ReelError, ReelResult};

pub use crate::animation::ease::{EasingKind, TransformState, apply_easing};
pub use crate::animation::sequence::{SequencingPolicy, schedule_elements, total_duration_secs};
pub use crate::animation::timing::{AnimationProfile, Phase, TimingState, compute_progress};
pub use crate::assets::icons::IconKind;
pub use crate::assets::store::{AssetNotice, AssetStore};
pub use crate::assets::text::FontBook;
pub use crate::encode::{FfmpegSink, FfmpegSinkOpts, FrameSink, InMemorySink, SinkConfig, Y4mSink};
pub use crate::params::{BumperParams, CalloutParams, FieldIssue, PropertyParams, TemplateParams};
pub use crate::plan::fingerprint::{FrameFingerprint, fingerprint_plan};
pub use crate::plan::{DrawOp, DrawPlan};
pub use crate::render::{BackendKind, CpuBackend, FrameRGBA, RenderBackend, create_backend};
pub use crate::session::{CancelToken, ExportOpts, ExportOutcome, Player, RenderStats, export};
pub use crate::templates::{Template, render_frame, render_frame_at};
