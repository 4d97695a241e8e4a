use crate::foundation::core::{Canvas, Point, Rect};

/// Distance of the marker from the bottom and side canvas edges.
pub const MARKER_INSET: f64 = 60.0;
pub const TEXT_BOX_WIDTH: f64 = 300.0;
pub const TEXT_BOX_HEIGHT: f64 = 120.0;
pub const TOP_LABEL_SIZE: f64 = 48.0;
pub const BOTTOM_LABEL_SIZE: f64 = 42.0;
/// Vertical padding of the bottom label bar.
pub const BAR_PADDING: f64 = 12.0;
pub const IMAGE_WIDTH: f64 = 400.0;
pub const IMAGE_HEIGHT: f64 = 250.0;
pub const IMAGE_GAP: f64 = 10.0;

/// Inputs of the callout layout.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CalloutMetrics {
    pub mirrored: bool,
    pub marker_size: f64,
    pub diagonal_length: f64,
    pub horizontal_length: f64,
    pub text_spacing: f64,
    pub border_thickness: f64,
}

/// Resolved callout geometry. Everything but the marker derives from `end`.
#[derive(Clone, Debug, PartialEq)]
pub struct CalloutLayout {
    pub marker: Rect,
    /// Elbow connector: marker centre, corner, end point.
    pub connector: [Point; 3],
    pub end: Point,
    pub text_box: Rect,
    /// Centre of the top label line.
    pub top_label: Point,
    pub bar: Rect,
    /// Centre of the bottom label.
    pub bottom_label: Point,
    /// Image content box.
    pub image: Rect,
    /// Centre line of the image border stroke.
    pub image_border: Rect,
}

pub fn layout_callout(canvas: Canvas, m: &CalloutMetrics) -> CalloutLayout {
    let w = f64::from(canvas.width);
    let h = f64::from(canvas.height);

    let marker_c = if m.mirrored {
        Point::new(w - MARKER_INSET, h - MARKER_INSET)
    } else {
        Point::new(MARKER_INSET, h - MARKER_INSET)
    };
    let half = m.marker_size / 2.0;
    let marker = Rect::new(
        marker_c.x - half,
        marker_c.y - half,
        marker_c.x + half,
        marker_c.y + half,
    );

    let corner = Point::new(marker_c.x, marker_c.y - m.diagonal_length);
    let dx = if m.mirrored {
        -m.horizontal_length
    } else {
        m.horizontal_length
    };
    let end = Point::new(corner.x + dx, corner.y);

    let text_box = Rect::new(
        end.x - TEXT_BOX_WIDTH / 2.0,
        end.y - TEXT_BOX_HEIGHT,
        end.x + TEXT_BOX_WIDTH / 2.0,
        end.y,
    );

    let bar_h = BOTTOM_LABEL_SIZE + 2.0 * BAR_PADDING;
    let content_h = TOP_LABEL_SIZE + m.text_spacing + bar_h;
    let content_y0 = text_box.y0 + (TEXT_BOX_HEIGHT - content_h) / 2.0;
    let top_label = Point::new(end.x, content_y0 + TOP_LABEL_SIZE / 2.0);
    let bar_y0 = content_y0 + TOP_LABEL_SIZE + m.text_spacing;
    let bar = Rect::new(text_box.x0, bar_y0, text_box.x1, bar_y0 + bar_h);
    let bottom_label = Point::new(end.x, bar_y0 + bar_h / 2.0);

    let image_y1 = text_box.y0 - IMAGE_GAP;
    let image = Rect::new(
        end.x - IMAGE_WIDTH / 2.0,
        image_y1 - IMAGE_HEIGHT,
        end.x + IMAGE_WIDTH / 2.0,
        image_y1,
    );
    let image_border = image.inflate(m.border_thickness / 2.0, m.border_thickness / 2.0);

    CalloutLayout {
        marker,
        connector: [marker_c, corner, end],
        end,
        text_box,
        top_label,
        bar,
        bottom_label,
        image,
        image_border,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/callout.rs"]
mod tests;
