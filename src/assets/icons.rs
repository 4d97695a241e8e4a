//! Built-in vector icon set.
//!
//! Spec icons are 24×24 outline glyphs drawn with a 2 px round stroke; the WhatsApp glyph is a
//! filled shape. Icons are tinted at raster time by substituting the paint color into the SVG.

use crate::foundation::core::{Affine, Rgba8};
use crate::foundation::error::{ReelError, ReelResult};

/// Icons available to templates. Unknown names deserialize as [`IconKind::Home`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(from = "String", into = "String")]
pub enum IconKind {
    Bed,
    Home,
    Bath,
    Car,
    Trees,
    Map,
    Dollar,
    Calendar,
    WhatsApp,
}

impl IconKind {
    pub const SPEC_ICONS: [IconKind; 8] = [
        IconKind::Bed,
        IconKind::Home,
        IconKind::Bath,
        IconKind::Car,
        IconKind::Trees,
        IconKind::Map,
        IconKind::Dollar,
        IconKind::Calendar,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Bed => "bed",
            Self::Home => "home",
            Self::Bath => "bath",
            Self::Car => "car",
            Self::Trees => "trees",
            Self::Map => "map",
            Self::Dollar => "dollar",
            Self::Calendar => "calendar",
            Self::WhatsApp => "whatsapp",
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "bed" => Self::Bed,
            "bath" => Self::Bath,
            "car" => Self::Car,
            "trees" => Self::Trees,
            "map" => Self::Map,
            "dollar" => Self::Dollar,
            "calendar" => Self::Calendar,
            "whatsapp" => Self::WhatsApp,
            _ => Self::Home,
        }
    }

    fn is_filled(self) -> bool {
        matches!(self, Self::WhatsApp)
    }

    fn body(self) -> &'static str {
        match self {
            Self::Bed => {
                r#"<path d="M2 4v16"/><path d="M2 8h18a2 2 0 0 1 2 2v10"/><path d="M2 17h20"/><path d="M6 8v9"/>"#
            }
            Self::Home => {
                r#"<path d="M15 21v-8a1 1 0 0 0-1-1h-4a1 1 0 0 0-1 1v8"/><path d="M3 10a2 2 0 0 1 .709-1.528l7-5.999a2 2 0 0 1 2.582 0l7 5.999A2 2 0 0 1 21 10v9a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z"/>"#
            }
            Self::Bath => {
                r#"<path d="M9 6 6.5 3.5a1.5 1.5 0 0 0-1-.5C4.683 3 4 3.683 4 4.5V17a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2v-5"/><path d="M10 5 8 7"/><path d="M2 12h20"/><path d="M7 19v2"/><path d="M17 19v2"/>"#
            }
            Self::Car => {
                r#"<path d="M19 17h2c.6 0 1-.4 1-1v-3c0-.9-.7-1.7-1.5-1.9C18.7 10.6 16 10 16 10s-1.3-1.4-2.2-2.3c-.5-.4-1.1-.7-1.8-.7H5c-.6 0-1.1.4-1.4.9l-1.4 2.9A3.7 3.7 0 0 0 2 12v4c0 .6.4 1 1 1h2"/><circle cx="7" cy="17" r="2"/><path d="M9 17h6"/><circle cx="17" cy="17" r="2"/>"#
            }
            Self::Trees => {
                r#"<path d="M10 10v.2A3 3 0 0 1 8.9 16H5a3 3 0 0 1-1-5.8V10a3 3 0 0 1 6 0Z"/><path d="M7 16v6"/><path d="M13 19v3"/><path d="M12 19h8.3a1 1 0 0 0 .7-1.7L18 14h.3a1 1 0 0 0 .7-1.7L16 9h.2a1 1 0 0 0 .8-1.7L13 3l-1.4 1.5"/>"#
            }
            Self::Map => {
                r#"<path d="M20 10c0 4.993-5.539 10.193-7.399 11.799a1 1 0 0 1-1.202 0C9.539 20.193 4 14.993 4 10a8 8 0 0 1 16 0"/><circle cx="12" cy="10" r="3"/>"#
            }
            Self::Dollar => r#"<path d="M12 2v20"/><path d="M17 5H9.5a3.5 3.5 0 0 0 0 7h5a3.5 3.5 0 0 1 0 7H6"/>"#,
            Self::Calendar => {
                r#"<path d="M8 2v4"/><path d="M16 2v4"/><rect width="18" height="18" x="3" y="4" rx="2"/><path d="M3 10h18"/>"#
            }
            Self::WhatsApp => {
                r#"<path d="M17.472 14.382c-.297-.149-1.758-.867-2.03-.967-.273-.099-.471-.148-.67.15-.197.297-.767.966-.94 1.164-.173.199-.347.223-.644.075-.297-.15-1.255-.463-2.39-1.475-.883-.788-1.48-1.761-1.653-2.059-.173-.297-.018-.458.13-.606.134-.133.298-.347.446-.52.149-.174.198-.298.298-.497.099-.198.05-.371-.025-.52-.075-.149-.669-1.612-.916-2.207-.242-.579-.487-.5-.669-.51-.173-.008-.371-.01-.57-.01-.198 0-.52.074-.792.372-.272.297-1.04 1.016-1.04 2.479 0 1.462 1.065 2.875 1.213 3.074.149.198 2.096 3.2 5.077 4.487.709.306 1.262.489 1.694.625.712.227 1.36.195 1.871.118.571-.085 1.758-.719 2.006-1.413.248-.694.248-1.289.173-1.413-.074-.124-.272-.198-.57-.347m-5.421 7.403h-.004a9.87 9.87 0 01-5.031-1.378l-.361-.214-3.741.982.998-3.648-.235-.374a9.86 9.86 0 01-1.51-5.26c.001-5.45 4.436-9.884 9.888-9.884 2.64 0 5.122 1.03 6.988 2.898a9.825 9.825 0 012.893 6.994c-.003 5.45-4.437 9.884-9.885 9.884m8.413-18.297A11.815 11.815 0 0012.05 0C5.495 0 .16 5.335.157 11.892c0 2.096.547 4.142 1.588 5.945L.057 24l6.305-1.654a11.882 11.882 0 005.683 1.448h.005c6.554 0 11.89-5.335 11.893-11.893a11.821 11.821 0 00-3.48-8.413Z"/>"#
            }
        }
    }

    /// Complete SVG document for this icon painted with `color`.
    pub fn svg_source(self, color: Rgba8) -> String {
        let hex = format!("#{:02x}{:02x}{:02x}", color.r, color.g, color.b);
        let alpha = f64::from(color.a) / 255.0;
        let paint = if self.is_filled() {
            format!(r#"fill="{hex}" fill-opacity="{alpha}" stroke="none""#)
        } else {
            format!(
                r#"fill="none" stroke="{hex}" stroke-opacity="{alpha}" stroke-width="2" stroke-linecap="round" stroke-linejoin="round""#
            )
        };
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" {paint}>{}</svg>"#,
            self.body()
        )
    }
}

impl From<String> for IconKind {
    fn from(s: String) -> Self {
        Self::from_name(&s)
    }
}

impl From<IconKind> for String {
    fn from(k: IconKind) -> Self {
        k.name().to_owned()
    }
}

/// Parse the icon into a `usvg` tree.
pub fn icon_tree(kind: IconKind, color: Rgba8) -> ReelResult<usvg::Tree> {
    usvg::Tree::from_str(&kind.svg_source(color), &usvg::Options::default())
        .map_err(|e| ReelError::asset(format!("icon '{}' failed to parse: {e}", kind.name())))
}

/// Device pixel size for an icon drawn into `size` under `transform`.
///
/// Returns the raster size and the transform that maps raster pixels back to the destination,
/// so scaled-up icons stay sharp.
pub fn icon_raster_params(size: (f64, f64), transform: Affine) -> ReelResult<(u32, u32, Affine)> {
    let (w, h) = size;
    if !(w.is_finite() && h.is_finite() && w > 0.0 && h > 0.0) {
        return Err(ReelError::render("icon has invalid width/height"));
    }

    let [a, b, c, d, _e, _f] = transform.as_coeffs();
    let sx = (a * a + b * b).sqrt().max(1e-6);
    let sy = (c * c + d * d).sqrt().max(1e-6);

    let pw = (w * sx).ceil().max(1.0);
    let ph = (h * sy).ceil().max(1.0);
    const MAX_DIM: f64 = 4096.0;
    if pw > MAX_DIM || ph > MAX_DIM {
        return Err(ReelError::render(format!(
            "icon raster size too large: {pw}x{ph}"
        )));
    }

    let adjust = transform * Affine::scale_non_uniform(w / pw, h / ph);
    Ok((pw as u32, ph as u32, adjust))
}

/// Rasterize an icon into premultiplied RGBA8 of exactly `width`×`height`.
pub fn rasterize_icon(
    kind: IconKind,
    color: Rgba8,
    width: u32,
    height: u32,
) -> ReelResult<Vec<u8>> {
    let tree = icon_tree(kind, color)?;
    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| ReelError::render("failed to allocate icon pixmap"))?;

    let sx = (width as f32) / tree.size().width();
    let sy = (height as f32) / tree.size().height();
    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::from_scale(sx, sy),
        &mut pixmap.as_mut(),
    );
    Ok(pixmap.data().to_vec())
}

#[cfg(test)]
#[path = "../../tests/unit/assets/icons.rs"]
mod tests;
