use super::*;

#[test]
fn accepts_common_image_types() {
    assert!(accepts_image("image/png"));
    assert!(accepts_image("image/jpeg"));
    assert!(accepts_image("IMAGE/WEBP"));
}

#[test]
fn rejects_non_image_types() {
    assert!(!accepts_image("application/pdf"));
    assert!(!accepts_image("text/plain"));
    assert!(!accepts_image(""));
}

#[test]
fn rejects_bare_image_prefix() {
    assert!(!accepts_image("image/"));
}

#[test]
fn rejection_message_names_the_file() {
    assert_eq!(rejection_message("notes.pdf"), "notes.pdf is not an image");
}

#[test]
fn preview_url_is_unavailable_off_browser() {
    let upload = ImageUpload { name: "a.png".to_owned(), mime: "image/png".to_owned() };
    assert_eq!(upload.preview_url(), None);
}

fn picked(name: &str) -> ImageUpload {
    ImageUpload { name: name.to_owned(), mime: "image/png".to_owned() }
}

#[test]
fn accepted_pick_becomes_the_upload() {
    let outcome = resolve_pick(Ok(Some(picked("cover.png"))), Some("http://api/uploads/old.png".to_owned()));
    assert_eq!(outcome.image.map(|u| u.name), Some("cover.png".to_owned()));
    assert_eq!(outcome.error, None);
}

#[test]
fn rejected_pick_drops_the_earlier_upload() {
    let existing = Some("http://api/uploads/old.png".to_owned());
    let outcome = resolve_pick(Err(rejection_message("notes.pdf")), existing.clone());
    assert!(outcome.image.is_none());
    assert_eq!(outcome.preview, existing);
    assert_eq!(outcome.error.as_deref(), Some("notes.pdf is not an image"));
}

#[test]
fn cleared_pick_restores_the_existing_preview() {
    let outcome = resolve_pick(Ok(None), None);
    assert!(outcome.image.is_none());
    assert_eq!(outcome.preview, None);
    assert_eq!(outcome.error, None);
}

#[test]
fn only_blob_urls_are_released() {
    assert!(is_object_url("blob:http://localhost:3000/5c1e"));
    assert!(!is_object_url("http://localhost:5000/uploads/a.png"));
}
