use std::path::Path;
use std::sync::Arc;

use anyhow::Context;

use crate::foundation::core::Rgba8;
use crate::foundation::error::{ReelError, ReelResult};
use crate::layout::text::FontWeight;

/// RGBA8 brush color carried through Parley layouts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextBrushRgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl From<Rgba8> for TextBrushRgba8 {
    fn from(c: Rgba8) -> Self {
        Self {
            r: c.r,
            g: c.g,
            b: c.b,
            a: c.a,
        }
    }
}

/// One loaded font file.
#[derive(Clone, Debug)]
pub struct FontFace {
    /// Family name the templates refer to (e.g. `Arial`).
    pub family: String,
    pub weight: FontWeight,
    pub data: Arc<Vec<u8>>,
}

/// Loaded font faces, resolved by family and weight.
#[derive(Clone, Debug, Default)]
pub struct FontBook {
    faces: Vec<FontFace>,
}

/// Infer the weight of a font file from its name (`bold` anywhere means bold).
pub fn weight_from_file_name(path: &Path) -> FontWeight {
    let bold = path
        .file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.to_ascii_lowercase().contains("bold"))
        .unwrap_or(false);
    if bold {
        FontWeight::Bold
    } else {
        FontWeight::Regular
    }
}

impl FontBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    pub fn len(&self) -> usize {
        self.faces.len()
    }

    pub fn faces(&self) -> &[FontFace] {
        &self.faces
    }

    pub fn face(&self, index: usize) -> Option<&FontFace> {
        self.faces.get(index)
    }

    pub fn add_face(&mut self, family: impl Into<String>, weight: FontWeight, data: Vec<u8>) {
        self.faces.push(FontFace {
            family: family.into(),
            weight,
            data: Arc::new(data),
        });
    }

    /// Read a font file and register it under `family`.
    pub fn load_file(&mut self, family: &str, path: &Path) -> ReelResult<()> {
        let data =
            std::fs::read(path).with_context(|| format!("read font '{}'", path.display()))?;
        if data.is_empty() {
            return Err(ReelError::asset(format!(
                "font file '{}' is empty",
                path.display()
            )));
        }
        self.add_face(family, weight_from_file_name(path), data);
        Ok(())
    }

    /// Pick the best face for a request.
    ///
    /// Preference: exact family and weight, same family, any face of that weight, first face.
    pub fn resolve(&self, family: &str, weight: FontWeight) -> Option<usize> {
        let same_family = |f: &FontFace| f.family.eq_ignore_ascii_case(family);
        self.faces
            .iter()
            .position(|f| same_family(f) && f.weight == weight)
            .or_else(|| self.faces.iter().position(same_family))
            .or_else(|| self.faces.iter().position(|f| f.weight == weight))
            .or(if self.faces.is_empty() { None } else { Some(0) })
    }
}

/// Parley contexts plus the family names of every registered [`FontBook`] face.
pub(crate) struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrushRgba8>,
    family_names: Vec<String>,
}

impl TextLayoutEngine {
    /// Register every face of `book` once.
    pub(crate) fn new(book: &FontBook) -> ReelResult<Self> {
        let mut font_ctx = parley::FontContext::default();
        let mut family_names = Vec::with_capacity(book.len());
        for face in book.faces() {
            let families = font_ctx
                .collection
                .register_fonts(parley::fontique::Blob::from(face.data.as_ref().clone()), None);
            let family_id = families.first().map(|(id, _)| *id).ok_or_else(|| {
                ReelError::asset(format!(
                    "no font families registered for '{}'",
                    face.family
                ))
            })?;
            let name = font_ctx
                .collection
                .family_name(family_id)
                .ok_or_else(|| ReelError::asset("registered font family has no name"))?
                .to_string();
            family_names.push(name);
        }

        Ok(Self {
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            family_names,
        })
    }

    /// Shape one unwrapped line with face `face_index`.
    pub(crate) fn layout_line(
        &mut self,
        face_index: usize,
        text: &str,
        size_px: f32,
        weight: FontWeight,
        brush: TextBrushRgba8,
    ) -> ReelResult<parley::Layout<TextBrushRgba8>> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(ReelError::validation("text size_px must be finite and > 0"));
        }
        let family_name = self
            .family_names
            .get(face_index)
            .cloned()
            .ok_or_else(|| ReelError::render(format!("unknown font face {face_index}")))?;

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(family_name)),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::FontWeight(
            parley::style::FontWeight::new(weight.css_weight()),
        ));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<TextBrushRgba8> = builder.build(text);
        layout.break_all_lines(None);
        Ok(layout)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/text.rs"]
mod tests;
