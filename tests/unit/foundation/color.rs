use super::*;

#[test]
fn parses_short_long_and_alpha_forms() {
    assert_eq!(parse_hex("#f00").unwrap(), Rgba8::rgb(255, 0, 0));
    assert_eq!(parse_hex("#25D366").unwrap(), Rgba8::rgb(0x25, 0xd3, 0x66));
    assert_eq!(parse_hex("2d2d2d").unwrap(), Rgba8::rgb(0x2d, 0x2d, 0x2d));

    let c = parse_hex("#0000ff80").unwrap();
    assert_eq!(c.b, 255);
    assert_eq!(c.a, 128);
}

#[test]
fn rejects_malformed_input() {
    assert!(parse_hex("#12").is_err());
    assert!(parse_hex("#gg0000").is_err());
    assert!(parse_hex("red").is_err());
    assert!(parse_hex("#ééé").is_err());
}
