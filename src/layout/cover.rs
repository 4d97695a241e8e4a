use crate::foundation::core::Rect;

/// Rectangle that covers `bx` with an image of natural size `natural_w`×`natural_h`.
///
/// Aspect ratio is preserved and the overflow is split evenly on both sides, so the result
/// always contains `bx`. Degenerate sizes return `bx` unchanged.
pub fn cover_fit(natural_w: f64, natural_h: f64, bx: Rect) -> Rect {
    let (bw, bh) = (bx.width(), bx.height());
    if !(natural_w > 0.0 && natural_h > 0.0 && bw > 0.0 && bh > 0.0)
        || !natural_w.is_finite()
        || !natural_h.is_finite()
    {
        return bx;
    }

    let scale = (bw / natural_w).max(bh / natural_h);
    let w = natural_w * scale;
    let h = natural_h * scale;
    let x0 = bx.x0 + (bw - w) / 2.0;
    let y0 = bx.y0 + (bh - h) / 2.0;
    Rect::new(x0, y0, x0 + w, y0 + h)
}

#[cfg(test)]
#[path = "../../tests/unit/layout/cover.rs"]
mod tests;
