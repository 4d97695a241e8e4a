use super::*;

/// Every character is exactly 10 px wide regardless of size.
struct Mono10;

impl TextMeasure for Mono10 {
    fn advance(&self, text: &str, _style: &TextStyle<'_>) -> f64 {
        text.chars().count() as f64 * 10.0
    }
}

#[test]
fn wraps_at_word_boundaries() {
    let lines = wrap_words(
        "Jalan Raya Kemang Utara Nomor Sebelas",
        120.0,
        &TextStyle::new("Inter", 45.0, FontWeight::Regular),
        &Mono10,
    );
    assert_eq!(
        lines,
        vec!["Jalan Raya", "Kemang Utara", "Nomor", "Sebelas"]
    );
    assert_eq!(lines.join(" "), "Jalan Raya Kemang Utara Nomor Sebelas");
    assert_eq!(stacked_height(45.0, lines.len()), 45.0 + 3.0 * 45.0 * 1.2);
}

#[test]
fn overlong_word_keeps_its_own_line() {
    let lines = wrap_words(
        "a Supercalifragilistic b",
        50.0,
        &TextStyle::new("Inter", 20.0, FontWeight::Bold),
        &Mono10,
    );
    assert_eq!(lines, vec!["a", "Supercalifragilistic", "b"]);
}

#[test]
fn blank_text_has_no_lines() {
    assert!(wrap_words(
        "   ",
        100.0,
        &TextStyle::new("Inter", 20.0, FontWeight::Regular),
        &Mono10
    ).is_empty());
    assert_eq!(stacked_height(20.0, 0), 0.0);
    assert_eq!(stacked_height(20.0, 1), 20.0);
}

#[test]
fn approx_measure_scales_with_size_and_weight() {
    let m = ApproxTextMeasure::default();
    let regular = m.advance("abcd", &TextStyle::new("Arial", 10.0, FontWeight::Regular));
    assert!((regular - 22.0).abs() < 1e-9);
    assert!(m.advance("abcd", &TextStyle::new("Arial", 10.0, FontWeight::Bold)) > regular);
    let double = m.advance("abcd", &TextStyle::new("Arial", 20.0, FontWeight::Regular));
    assert!((double - 2.0 * regular).abs() < 1e-9);
}
