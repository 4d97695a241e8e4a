use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::encode::sink::{
    FrameSink, SinkConfig, check_frame, ensure_parent_dir, flatten_premul_over_bg_to_opaque_rgba8,
};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{ReelError, ReelResult};
use crate::render::backend::FrameRGBA;

/// Uncompressed YUV4MPEG2 (4:4:4, BT.601 limited range) file sink.
///
/// Needs no external tools, so it is the exporter's fallback when MP4 encoding fails.
pub struct Y4mSink {
    out_path: PathBuf,
    out: Option<BufWriter<File>>,
    cfg: Option<SinkConfig>,
    last_idx: Option<FrameIndex>,
    rgba: Vec<u8>,
    planes: Vec<u8>,
}

impl Y4mSink {
    pub fn new(out_path: impl Into<PathBuf>) -> Self {
        Self {
            out_path: out_path.into(),
            out: None,
            cfg: None,
            last_idx: None,
            rgba: Vec::new(),
            planes: Vec::new(),
        }
    }
}

/// Stream header for `cfg`.
pub fn y4m_header(cfg: &SinkConfig) -> String {
    format!(
        "YUV4MPEG2 W{} H{} F{}:{} Ip A1:1 C444\n",
        cfg.width, cfg.height, cfg.fps.num, cfg.fps.den
    )
}

/// BT.601 limited-range conversion of one opaque RGB pixel.
pub fn rgb_to_ycbcr(r: u8, g: u8, b: u8) -> [u8; 3] {
    let (r, g, b) = (i32::from(r), i32::from(g), i32::from(b));
    let y = ((66 * r + 129 * g + 25 * b + 128) >> 8) + 16;
    let u = ((-38 * r - 74 * g + 112 * b + 128) >> 8) + 128;
    let v = ((112 * r - 94 * g - 18 * b + 128) >> 8) + 128;
    [
        y.clamp(0, 255) as u8,
        u.clamp(0, 255) as u8,
        v.clamp(0, 255) as u8,
    ]
}

/// Split opaque RGBA8 into consecutive Y, Cb and Cr planes.
fn rgba_to_planes(rgba: &[u8], planes: &mut [u8]) {
    let n = rgba.len() / 4;
    let (y_plane, rest) = planes.split_at_mut(n);
    let (u_plane, v_plane) = rest.split_at_mut(n);
    for (i, px) in rgba.chunks_exact(4).enumerate() {
        let [y, u, v] = rgb_to_ycbcr(px[0], px[1], px[2]);
        y_plane[i] = y;
        u_plane[i] = u;
        v_plane[i] = v;
    }
}

impl FrameSink for Y4mSink {
    #[tracing::instrument(skip(self), fields(out = %self.out_path.display()))]
    fn begin(&mut self, cfg: SinkConfig) -> ReelResult<()> {
        if cfg.width == 0 || cfg.height == 0 || cfg.fps.num == 0 || cfg.fps.den == 0 {
            return Err(ReelError::validation(
                "y4m sink needs non-zero size and fps",
            ));
        }
        ensure_parent_dir(&self.out_path)?;
        let file = File::create(&self.out_path).map_err(|e| {
            ReelError::encode(format!("create '{}': {e}", self.out_path.display()))
        })?;
        let mut out = BufWriter::new(file);
        out.write_all(y4m_header(&cfg).as_bytes())
            .map_err(|e| ReelError::encode(format!("write y4m header: {e}")))?;

        let n = cfg.width as usize * cfg.height as usize;
        self.rgba = vec![0u8; n * 4];
        self.planes = vec![0u8; n * 3];
        self.out = Some(out);
        self.cfg = Some(cfg);
        self.last_idx = None;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> ReelResult<()> {
        let cfg = self
            .cfg
            .as_ref()
            .ok_or_else(|| ReelError::encode("y4m sink not started"))?;
        if let Some(last) = self.last_idx
            && idx.0 <= last.0
        {
            return Err(ReelError::encode("y4m sink received out-of-order frame index"));
        }
        check_frame(cfg, frame)?;
        self.last_idx = Some(idx);

        flatten_premul_over_bg_to_opaque_rgba8(&mut self.rgba, &frame.data, [0, 0, 0])?;
        rgba_to_planes(&self.rgba, &mut self.planes);

        let out = self
            .out
            .as_mut()
            .ok_or_else(|| ReelError::encode("y4m sink is already finalized"))?;
        out.write_all(b"FRAME\n")
            .and_then(|()| out.write_all(&self.planes))
            .map_err(|e| ReelError::encode(format!("write y4m frame: {e}")))
    }

    fn end(&mut self) -> ReelResult<()> {
        let mut out = self
            .out
            .take()
            .ok_or_else(|| ReelError::encode("y4m sink not started"))?;
        out.flush()
            .map_err(|e| ReelError::encode(format!("flush '{}': {e}", self.out_path.display())))?;
        self.cfg = None;
        Ok(())
    }

    fn abort(&mut self) {
        drop(self.out.take());
        if self.cfg.take().is_some() {
            let _ = std::fs::remove_file(&self.out_path);
        }
    }

    fn output_path(&self) -> Option<&Path> {
        Some(&self.out_path)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/y4m.rs"]
mod tests;
