use super::*;

#[test]
fn excerpt_strips_markup() {
    assert_eq!(excerpt("<p>Hello <b>world</b></p>"), "Hello world...");
}

#[test]
fn excerpt_truncates_on_char_boundary() {
    let long = "é".repeat(200);
    let out = excerpt(&long);
    assert_eq!(out.chars().count(), EXCERPT_CHARS + 3);
    assert!(out.ends_with("..."));
}

#[test]
fn excerpt_drops_unterminated_tag() {
    assert_eq!(excerpt("text <img src=x"), "text ...");
}

#[test]
fn initial_uppercases_first_letter() {
    assert_eq!(initial("ada"), "A");
    assert_eq!(initial("  émile"), "É");
    assert_eq!(initial(""), "?");
}

#[test]
fn format_date_renders_month_day_year() {
    assert_eq!(format_date(Some("2024-03-07T10:00:00.000Z")), "3/7/2024");
    assert_eq!(format_date(Some("2023-12-31")), "12/31/2023");
}

#[test]
fn format_date_passes_through_garbage() {
    assert_eq!(format_date(Some("yesterday")), "yesterday");
    assert_eq!(format_date(Some("2024-13-01T00:00:00Z")), "2024-13-01T00:00:00Z");
    assert_eq!(format_date(None), "");
}

#[test]
fn paragraphs_split_on_newlines() {
    assert_eq!(paragraphs("a\nb\n\nc"), vec!["a", "b", "", "c"]);
}

#[test]
fn post_count_label_pluralizes() {
    assert_eq!(post_count_label(0), "0 posts total");
    assert_eq!(post_count_label(1), "1 post total");
    assert_eq!(post_count_label(12), "12 posts total");
}
