use xxhash_rust::xxh3::Xxh3;

use crate::foundation::error::ReelResult;
use crate::plan::DrawPlan;

const XXH3_SEED: u64 = 0x5f1e_d3a7_02c4_9b61;

/// Stable per-frame fingerprint used by static-frame elision and parity checks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameFingerprint {
    pub hi: u64,
    pub lo: u64,
}

/// Hash everything that affects pixels.
///
/// The frame index is not hashed, so identical consecutive frames share a fingerprint. A plan
/// that fails to serialize yields an error rather than a fingerprint of its partial encoding.
pub fn fingerprint_plan(plan: &DrawPlan) -> ReelResult<FrameFingerprint> {
    let mut h = HashWriter(Xxh3::with_seed(XXH3_SEED));
    h.0.update(&plan.canvas.width.to_le_bytes());
    h.0.update(&plan.canvas.height.to_le_bytes());
    h.0.update(&plan.background.to_premul());
    serde_json::to_writer(&mut h, &plan.ops)?;
    let v = h.0.digest128();
    Ok(FrameFingerprint {
        hi: (v >> 64) as u64,
        lo: v as u64,
    })
}

struct HashWriter(Xxh3);

impl std::io::Write for HashWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/plan/fingerprint.rs"]
mod tests;
