//! Drivers of the frame renderer: the interactive [`Player`] and the offline exporter.
//!
//! Both consume the same pure `render_frame`, so a frame previewed in the player is exactly the
//! frame that gets encoded.

pub mod export;
pub mod player;

pub use export::{
    CancelToken, ExportOpts, ExportOutcome, RenderStats, export, export_to_dir, output_file_name,
};
pub use player::Player;
