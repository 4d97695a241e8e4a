use crate::foundation::core::{Canvas, Point, Rect};
use crate::layout::text::LINE_HEIGHT;

/// Fixed height of the contact card.
pub const CARD_HEIGHT: f64 = 120.0;
/// Vertical gap between the card's text lines.
pub const CARD_LINE_GAP: f64 = 4.0;
/// Gap between the phone glyph and the phone number.
pub const PHONE_ICON_GAP: f64 = 6.0;

/// Inputs of the contact card layout.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardMetrics {
    pub card_width: f64,
    pub padding: f64,
    pub gap: f64,
    /// Avatar edge length; `None` when no avatar is shown.
    pub avatar_size: Option<f64>,
    /// Avatar corner radius as a percentage of its size.
    pub avatar_radius_pct: f64,
    pub top_text_size: f64,
    pub name_text_size: f64,
    pub phone_text_size: f64,
    /// Phone glyph size; `None` hides the glyph.
    pub phone_icon_size: Option<f64>,
}

/// Resolved contact card geometry.
#[derive(Clone, Debug, PartialEq)]
pub struct CardLayout {
    pub card: Rect,
    pub avatar: Option<Rect>,
    pub avatar_clip_radius: f64,
    /// Left-middle anchors of the three text lines.
    pub top_text: Point,
    pub name_text: Point,
    pub phone_text: Point,
    pub phone_icon: Option<Rect>,
}

/// Centre a card of [`CARD_HEIGHT`] on `canvas` and place its content.
pub fn layout_card(canvas: Canvas, m: &CardMetrics) -> CardLayout {
    let center = canvas.center();
    let card = Rect::new(
        center.x - m.card_width / 2.0,
        center.y - CARD_HEIGHT / 2.0,
        center.x + m.card_width / 2.0,
        center.y + CARD_HEIGHT / 2.0,
    );

    let avatar = m.avatar_size.map(|size| {
        let x0 = card.x0 + m.padding;
        let y0 = center.y - size / 2.0;
        Rect::new(x0, y0, x0 + size, y0 + size)
    });
    let avatar_clip_radius = m
        .avatar_size
        .map(|size| (size * m.avatar_radius_pct / 100.0).min(size / 2.0))
        .unwrap_or(0.0);

    let text_x = match avatar {
        Some(a) => a.x1 + m.gap,
        None => card.x0 + m.padding,
    };

    let top_h = m.top_text_size * LINE_HEIGHT;
    let name_h = m.name_text_size * LINE_HEIGHT;
    let phone_h = (m.phone_text_size * LINE_HEIGHT).max(m.phone_icon_size.unwrap_or(0.0));
    let block_h = top_h + name_h + phone_h + 2.0 * CARD_LINE_GAP;

    let top_y0 = center.y - block_h / 2.0;
    let name_y0 = top_y0 + top_h + CARD_LINE_GAP;
    let phone_y0 = name_y0 + name_h + CARD_LINE_GAP;
    let phone_mid = phone_y0 + phone_h / 2.0;

    let phone_icon = m.phone_icon_size.map(|s| {
        Rect::new(text_x, phone_mid - s / 2.0, text_x + s, phone_mid + s / 2.0)
    });
    let phone_text_x = match phone_icon {
        Some(r) => r.x1 + PHONE_ICON_GAP,
        None => text_x,
    };

    CardLayout {
        card,
        avatar,
        avatar_clip_radius,
        top_text: Point::new(text_x, top_y0 + top_h / 2.0),
        name_text: Point::new(text_x, name_y0 + name_h / 2.0),
        phone_text: Point::new(phone_text_x, phone_mid),
        phone_icon,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/card.rs"]
mod tests;
