use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::assets::store::AssetStore;
use crate::encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts};
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::encode::y4m::Y4mSink;
use crate::foundation::error::{ReelError, ReelResult};
use crate::params::TemplateParams;
use crate::plan::fingerprint::{FrameFingerprint, fingerprint_plan};
use crate::render::backend::{BackendKind, FrameRGBA, RenderBackend, create_backend};

/// Shared flag that stops an export between frames.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Options of one export run.
#[derive(Clone, Debug)]
pub struct ExportOpts {
    /// Reuse the previous raster when a frame's plan fingerprint is unchanged.
    pub static_frame_elision: bool,
    pub backend: BackendKind,
    pub cancel: CancelToken,
}

impl Default for ExportOpts {
    fn default() -> Self {
        Self {
            static_frame_elision: true,
            backend: BackendKind::Cpu,
            cancel: CancelToken::new(),
        }
    }
}

/// Export statistics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Frames pushed into the sink.
    pub frames_total: u64,
    /// Frames actually rasterized.
    pub frames_rendered: u64,
    /// Frames reused from the previous raster.
    pub frames_elided: u64,
}

/// Result of a finished export.
#[derive(Clone, Debug, PartialEq)]
pub enum ExportOutcome {
    /// The primary sink produced the output.
    Encoded {
        stats: RenderStats,
        path: Option<PathBuf>,
    },
    /// The primary sink failed; the fallback sink produced the output instead.
    Fallback {
        reason: String,
        stats: RenderStats,
        path: Option<PathBuf>,
    },
}

impl ExportOutcome {
    pub fn stats(&self) -> RenderStats {
        match self {
            Self::Encoded { stats, .. } | Self::Fallback { stats, .. } => *stats,
        }
    }

    pub fn output_path(&self) -> Option<&Path> {
        match self {
            Self::Encoded { path, .. } | Self::Fallback { path, .. } => path.as_deref(),
        }
    }

    /// Return `true` when the fallback sink was used.
    pub fn is_degraded(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }
}

/// File name of an export: `<prefix>-<unix-millis>.<ext>`.
pub fn output_file_name(prefix: &str, unix_millis: u128, ext: &str) -> String {
    format!("{prefix}-{unix_millis}.{ext}")
}

fn unix_millis_now() -> u128 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0)
}

enum Failure {
    /// The sink rejected a frame or could not start or finish.
    Sink(ReelError),
    /// Rendering failed or the export was cancelled.
    Fatal(ReelError),
}

/// Render every frame of `params` into `primary`, falling back to `fallback` when the primary
/// sink fails.
///
/// Rendering errors and cancellation abort both sinks and are returned as errors.
#[tracing::instrument(skip_all, fields(template = params.kind_name()))]
pub fn export(
    params: &TemplateParams,
    assets: &AssetStore,
    primary: &mut dyn FrameSink,
    fallback: &mut dyn FrameSink,
    opts: &ExportOpts,
) -> ReelResult<ExportOutcome> {
    match render_into(params, assets, primary, opts) {
        Ok(stats) => {
            let path = primary.output_path().map(Path::to_path_buf);
            tracing::info!(frames = stats.frames_total, elided = stats.frames_elided, "export finished");
            Ok(ExportOutcome::Encoded { stats, path })
        }
        Err(Failure::Fatal(e)) => Err(e),
        Err(Failure::Sink(e)) => {
            let reason = e.to_string();
            tracing::warn!(%reason, "primary sink failed, re-rendering into fallback");
            match render_into(params, assets, fallback, opts) {
                Ok(stats) => {
                    let path = fallback.output_path().map(Path::to_path_buf);
                    tracing::info!(frames = stats.frames_total, "fallback export finished");
                    Ok(ExportOutcome::Fallback {
                        reason,
                        stats,
                        path,
                    })
                }
                Err(Failure::Sink(e) | Failure::Fatal(e)) => Err(e),
            }
        }
    }
}

/// Export to `<out_dir>/<prefix>-<unix-millis>.mp4`, or `.y4m` when ffmpeg fails.
pub fn export_to_dir(
    params: &TemplateParams,
    assets: &AssetStore,
    out_dir: &Path,
    opts: &ExportOpts,
) -> ReelResult<ExportOutcome> {
    let prefix = params.template().file_prefix();
    let millis = unix_millis_now();
    let mut primary = FfmpegSink::new(FfmpegSinkOpts::new(
        out_dir.join(output_file_name(prefix, millis, "mp4")),
    ));
    let mut fallback = Y4mSink::new(out_dir.join(output_file_name(prefix, millis, "y4m")));
    export(params, assets, &mut primary, &mut fallback, opts)
}

fn render_into(
    params: &TemplateParams,
    assets: &AssetStore,
    sink: &mut dyn FrameSink,
    opts: &ExportOpts,
) -> Result<RenderStats, Failure> {
    let result = render_frames(params, assets, sink, opts);
    if result.is_err() {
        sink.abort();
    }
    result
}

fn render_frames(
    params: &TemplateParams,
    assets: &AssetStore,
    sink: &mut dyn FrameSink,
    opts: &ExportOpts,
) -> Result<RenderStats, Failure> {
    let template = params.template();
    let canvas = template.canvas();
    let range = template.frame_range();

    sink.begin(SinkConfig {
        width: canvas.width,
        height: canvas.height,
        fps: template.fps(),
    })
    .map_err(Failure::Sink)?;

    let mut backend = create_backend(opts.backend);
    let mut stats = RenderStats::default();
    let mut last: Option<(FrameFingerprint, FrameRGBA)> = None;

    for idx in range.iter() {
        let f = idx.0;
        if opts.cancel.is_cancelled() {
            tracing::info!(frame = f, "export cancelled");
            return Err(Failure::Fatal(ReelError::Cancelled));
        }

        let plan = template.render_frame(assets, idx);
        let fp = fingerprint_plan(&plan).map_err(Failure::Fatal)?;

        let reused = opts.static_frame_elision
            && last.as_ref().is_some_and(|(prev, _)| *prev == fp);
        if reused {
            stats.frames_elided += 1;
        } else {
            let frame = backend
                .render_plan(&plan, assets)
                .map_err(Failure::Fatal)?;
            stats.frames_rendered += 1;
            last = Some((fp, frame));
        }

        let Some((_, frame)) = last.as_ref() else {
            return Err(Failure::Fatal(ReelError::render("no frame rendered")));
        };
        sink.push_frame(idx, frame).map_err(Failure::Sink)?;
        stats.frames_total += 1;
        tracing::debug!(frame = f, elided = reused, "frame done");
    }

    sink.end().map_err(Failure::Sink)?;
    Ok(stats)
}

#[cfg(test)]
#[path = "../../tests/unit/session/export.rs"]
mod tests;
