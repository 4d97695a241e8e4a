//! Raster backends that execute [`DrawPlan`](crate::plan::DrawPlan)s.

pub mod backend;
pub mod cpu;

pub use backend::{BackendKind, FrameRGBA, RenderBackend, create_backend};
pub use cpu::CpuBackend;
