//! Encoding sinks.
//!
//! Sinks consume rendered frames in timeline order and are driven by [`crate::session::export`].

/// `ffmpeg`-based MP4 sink (system `ffmpeg`).
pub mod ffmpeg;
/// Frame sink trait and the in-memory sink.
pub mod sink;
/// Uncompressed YUV4MPEG2 sink used when MP4 encoding fails.
pub mod y4m;

pub use ffmpeg::{FfmpegSink, FfmpegSinkOpts};
pub use sink::{FrameSink, InMemorySink, SinkConfig};
pub use y4m::Y4mSink;
