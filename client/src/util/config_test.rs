use super::*;

#[test]
fn join_api_inserts_single_separator() {
    assert_eq!(join_api("http://h:5000", "/posts"), "http://h:5000/api/posts");
    assert_eq!(join_api("http://h:5000", "posts/1"), "http://h:5000/api/posts/1");
}

#[test]
fn api_url_has_no_double_slash_after_base() {
    let url = api_url("/tags");
    assert!(url.ends_with("/api/tags"));
    assert!(!url.contains("//api"));
}

#[test]
fn resolve_image_passes_absolute_urls_through() {
    assert_eq!(
        resolve_image("http://h:5000", Some("https://cdn.example.com/a.png")),
        Some("https://cdn.example.com/a.png".to_owned())
    );
}

#[test]
fn resolve_image_joins_relative_paths_against_base() {
    assert_eq!(
        resolve_image("http://h:5000", Some("/uploads/a.png")),
        Some("http://h:5000/uploads/a.png".to_owned())
    );
    assert_eq!(
        resolve_image("http://h:5000", Some("uploads/a.png")),
        Some("http://h:5000/uploads/a.png".to_owned())
    );
}

#[test]
fn resolve_image_treats_missing_or_blank_as_none() {
    assert_eq!(resolve_image("http://h:5000", None), None);
    assert_eq!(resolve_image("http://h:5000", Some("  ")), None);
}
