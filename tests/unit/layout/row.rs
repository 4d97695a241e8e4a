use super::*;
use crate::layout::text::ApproxTextMeasure;

fn items(n: usize) -> Vec<RowItemText<'static>> {
    (0..n)
        .map(|_| RowItemText {
            title: "2+1",
            subtitle: "Kamar Tidur",
        })
        .collect()
}

#[test]
fn tiers_by_count() {
    assert_eq!(SizeTier::for_count(1).icon, 160.0);
    assert_eq!(SizeTier::for_count(2).title, 120.0);
    assert_eq!(SizeTier::for_count(4).gap, 25.0);
    assert_eq!(SizeTier::for_count(7), SizeTier::for_count(3));
    assert_eq!(SizeTier::for_count(0), SizeTier::for_count(3));
}

#[test]
fn three_default_items_fit_without_scaling() {
    let row = layout_row(Canvas::PORTRAIT, &items(3), None, "Inter", &ApproxTextMeasure::default());
    assert_eq!(row.row_width, 520.0);
    assert_eq!(row.scale, 1.0);
    assert_eq!(row.transform, Affine::IDENTITY);
    assert_eq!(row.items.len(), 3);
    assert!((row.items[0].bounds.x0 - (540.0 - 260.0)).abs() < 1e-9);
    assert!((row.items[2].bounds.x1 - (540.0 + 260.0)).abs() < 1e-9);
}

#[test]
fn wide_row_shrinks_once_about_canvas_centre() {
    let row = layout_row(
        Canvas::PORTRAIT,
        &items(4),
        Some(200.0),
        "Inter",
        &ApproxTextMeasure::default(),
    );
    assert_eq!(row.row_width, 1080.0);
    assert!((row.scale - 1000.0 / 1080.0).abs() < 1e-12);

    let centre = Canvas::PORTRAIT.center();
    let mapped = row.transform * centre;
    assert!((mapped - centre).hypot() < 1e-9);

    // Items keep their unscaled geometry; only the row transform shrinks them.
    assert_eq!(row.items[0].bounds.width(), 120.0);
    let left = row.transform * Point::new(row.items[0].bounds.x0, centre.y);
    assert!((left.x - (540.0 - 500.0)).abs() < 1e-9);
}

#[test]
fn custom_spacing_overrides_tier_gap() {
    let row = layout_row(
        Canvas::PORTRAIT,
        &items(2),
        Some(60.0),
        "Inter",
        &ApproxTextMeasure::default(),
    );
    assert_eq!(row.spacing, 60.0);
    assert_eq!(row.row_width, 210.0 * 2.0 + 60.0);
    let gap = row.items[1].bounds.x0 - row.items[0].bounds.x1;
    assert!((gap - 60.0).abs() < 1e-9);
}

#[test]
fn items_are_vertically_centred_and_stacked() {
    let texts = [
        RowItemText {
            title: "45",
            subtitle: "M² Luas",
        },
        RowItemText {
            title: "3",
            subtitle: "Jalan Raya Kemang Utara Nomor Sebelas",
        },
    ];
    let row = layout_row(Canvas::PORTRAIT, &texts, None, "Inter", &ApproxTextMeasure::default());
    let a = &row.items[0];
    let b = &row.items[1];
    assert!(b.subtitle_lines.len() > a.subtitle_lines.len());
    assert!((a.bounds.center().y - 960.0).abs() < 1e-9);
    assert!((b.bounds.center().y - 960.0).abs() < 1e-9);

    let tier = row.tier;
    assert!((a.title_anchor.y - (a.icon.y1 + tier.gap)).abs() < 1e-9);
    assert!((a.subtitle_anchors[0].y - (a.title_anchor.y + tier.title + tier.gap * 0.3)).abs() < 1e-9);
    assert_eq!(b.subtitle_anchors.len(), b.subtitle_lines.len());
}

#[test]
fn empty_row() {
    let row = layout_row(Canvas::PORTRAIT, &[], None, "Inter", &ApproxTextMeasure::default());
    assert!(row.items.is_empty());
    assert_eq!(row.row_width, 0.0);
    assert_eq!(row.scale, 1.0);
}
