use crate::foundation::core::{Affine, Canvas, Point, Rect};
use crate::layout::text::{
    FontWeight, LINE_HEIGHT, TextMeasure, TextStyle, stacked_height, wrap_words,
};

/// Widest row, in pixels, before the whole row is shrunk uniformly.
pub const MAX_ROW_WIDTH: f64 = 1000.0;

/// Ratio between an item's column width and its icon size.
pub const ITEM_WIDTH_FACTOR: f64 = 1.5;

/// Type and spacing sizes picked by the number of items in a row.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SizeTier {
    pub icon: f64,
    pub title: f64,
    pub subtitle: f64,
    pub gap: f64,
}

impl SizeTier {
    pub fn for_count(n: usize) -> Self {
        let (icon, title, subtitle, gap) = match n {
            1 => (160.0, 140.0, 70.0, 50.0),
            2 => (140.0, 120.0, 60.0, 45.0),
            4 => (80.0, 70.0, 35.0, 25.0),
            _ => (100.0, 90.0, 45.0, 35.0),
        };
        Self {
            icon,
            title,
            subtitle,
            gap,
        }
    }

    pub fn item_width(&self) -> f64 {
        self.icon * ITEM_WIDTH_FACTOR
    }
}

/// Text content of one row item.
#[derive(Clone, Copy, Debug)]
pub struct RowItemText<'a> {
    pub title: &'a str,
    pub subtitle: &'a str,
}

/// Resolved geometry of one row item, in unscaled row space.
#[derive(Clone, Debug, PartialEq)]
pub struct RowItemLayout {
    /// Column box of the item; its centre is the pivot of per-item transforms.
    pub bounds: Rect,
    pub icon: Rect,
    /// Top centre of the title line.
    pub title_anchor: Point,
    /// Top centre of each subtitle line.
    pub subtitle_anchors: Vec<Point>,
    pub subtitle_lines: Vec<String>,
}

/// Resolved geometry of a full row.
#[derive(Clone, Debug, PartialEq)]
pub struct RowLayout {
    pub tier: SizeTier,
    pub spacing: f64,
    /// Unscaled row width.
    pub row_width: f64,
    /// Uniform shrink factor, `1` unless the row is wider than [`MAX_ROW_WIDTH`].
    pub scale: f64,
    /// Shrink about the canvas centre, applied once to the whole row.
    pub transform: Affine,
    pub items: Vec<RowItemLayout>,
}

/// Unscaled width of `n` items of `item_width` separated by `spacing`.
pub fn row_width(n: usize, item_width: f64, spacing: f64) -> f64 {
    if n == 0 {
        return 0.0;
    }
    item_width * n as f64 + spacing * (n - 1) as f64
}

/// Lay out `items` as one horizontal row centred on `canvas`.
///
/// `spacing` overrides the tier gap between items when set. Subtitles wrap inside the item width
/// using `subtitle_family`.
pub fn layout_row(
    canvas: Canvas,
    items: &[RowItemText<'_>],
    spacing: Option<f64>,
    subtitle_family: &str,
    measure: &dyn TextMeasure,
) -> RowLayout {
    let n = items.len();
    let tier = SizeTier::for_count(n);
    let item_w = tier.item_width();
    let spacing = spacing.unwrap_or(tier.gap);
    let width = row_width(n, item_w, spacing);

    let scale = if width > MAX_ROW_WIDTH {
        MAX_ROW_WIDTH / width
    } else {
        1.0
    };
    let center = canvas.center();
    let transform = Affine::translate(center.to_vec2())
        * Affine::scale(scale)
        * Affine::translate(-center.to_vec2());

    let subtitle_style = TextStyle::new(subtitle_family, tier.subtitle, FontWeight::Regular);
    let wrapped: Vec<Vec<String>> = items
        .iter()
        .map(|it| wrap_words(it.subtitle, item_w, &subtitle_style, measure))
        .collect();
    let heights: Vec<f64> = wrapped
        .iter()
        .map(|lines| item_height(&tier, lines.len()))
        .collect();
    let row_h = heights.iter().copied().fold(0.0, f64::max);

    let x0 = center.x - width / 2.0;
    let row_y0 = center.y - row_h / 2.0;

    let items = wrapped
        .into_iter()
        .zip(heights)
        .enumerate()
        .map(|(i, (lines, h))| {
            let left = x0 + i as f64 * (item_w + spacing);
            let top = row_y0 + (row_h - h) / 2.0;
            let cx = left + item_w / 2.0;

            let icon = Rect::new(
                cx - tier.icon / 2.0,
                top,
                cx + tier.icon / 2.0,
                top + tier.icon,
            );
            let title_top = icon.y1 + tier.gap;
            let subtitle_top = title_top + tier.title + tier.gap * 0.3;
            let subtitle_anchors = (0..lines.len())
                .map(|k| Point::new(cx, subtitle_top + k as f64 * tier.subtitle * LINE_HEIGHT))
                .collect();

            RowItemLayout {
                bounds: Rect::new(left, top, left + item_w, top + h),
                icon,
                title_anchor: Point::new(cx, title_top),
                subtitle_anchors,
                subtitle_lines: lines,
            }
        })
        .collect();

    RowLayout {
        tier,
        spacing,
        row_width: width,
        scale,
        transform,
        items,
    }
}

fn item_height(tier: &SizeTier, subtitle_lines: usize) -> f64 {
    tier.icon
        + tier.gap
        + tier.title
        + tier.gap * 0.3
        + stacked_height(tier.subtitle, subtitle_lines)
}

#[cfg(test)]
#[path = "../../tests/unit/layout/row.rs"]
mod tests;
