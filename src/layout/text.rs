/// Line height factor for wrapped multi-line text.
pub const LINE_HEIGHT: f64 = 1.2;

/// Font weights used by the templates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
}

impl FontWeight {
    /// CSS numeric weight.
    pub fn css_weight(self) -> f32 {
        match self {
            Self::Regular => 400.0,
            Self::Bold => 700.0,
        }
    }
}

/// Font selection and size of a run of text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle<'a> {
    pub family: &'a str,
    pub size_px: f64,
    pub weight: FontWeight,
}

impl<'a> TextStyle<'a> {
    pub fn new(family: &'a str, size_px: f64, weight: FontWeight) -> Self {
        Self {
            family,
            size_px,
            weight,
        }
    }
}

/// Horizontal advance of a single line of text.
pub trait TextMeasure {
    fn advance(&self, text: &str, style: &TextStyle<'_>) -> f64;
}

/// Fixed per-character advance, used when no font face is loaded.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ApproxTextMeasure {
    /// Advance of one character in ems for regular text.
    pub em_advance: f64,
    /// Advance of one character in ems for bold text.
    pub bold_em_advance: f64,
}

impl Default for ApproxTextMeasure {
    fn default() -> Self {
        Self {
            em_advance: 0.55,
            bold_em_advance: 0.6,
        }
    }
}

impl TextMeasure for ApproxTextMeasure {
    fn advance(&self, text: &str, style: &TextStyle<'_>) -> f64 {
        let em = match style.weight {
            FontWeight::Regular => self.em_advance,
            FontWeight::Bold => self.bold_em_advance,
        };
        text.chars().count() as f64 * style.size_px * em
    }
}

/// Greedy word wrap at whitespace boundaries.
///
/// A word wider than `max_width` is kept whole on its own line. Blank input gives no lines.
pub fn wrap_words(
    text: &str,
    max_width: f64,
    style: &TextStyle<'_>,
    measure: &dyn TextMeasure,
) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }
        let candidate = format!("{current} {word}");
        if measure.advance(&candidate, style) <= max_width {
            current = candidate;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Height of `lines` stacked lines: the first at line height 1, the rest at [`LINE_HEIGHT`].
pub fn stacked_height(size_px: f64, lines: usize) -> f64 {
    if lines == 0 {
        return 0.0;
    }
    size_px + (lines - 1) as f64 * size_px * LINE_HEIGHT
}

#[cfg(test)]
#[path = "../../tests/unit/layout/text.rs"]
mod tests;
