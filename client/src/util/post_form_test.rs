use super::*;
use crate::net::types::EntityRef;

fn draft() -> PostDraft {
    PostDraft {
        title: "  Ownership explained ".to_owned(),
        content: "<p>Borrow checker</p>".to_owned(),
        status: PostStatus::Published,
        category: String::new(),
    }
}

fn field<'a>(form: &'a MultipartForm, name: &str) -> Option<&'a str> {
    form.fields.iter().find(|(n, _)| *n == name).map(|(_, v)| v.as_str())
}

#[test]
fn create_omits_empty_category() {
    let form = draft().to_form(EditorMode::Create, None);
    assert_eq!(field(&form, "title"), Some("Ownership explained"));
    assert_eq!(field(&form, "status"), Some("published"));
    assert_eq!(field(&form, "category"), None);
    assert!(form.image.is_none());
}

#[test]
fn edit_always_sends_category() {
    let form = draft().to_form(EditorMode::Edit, None);
    assert_eq!(field(&form, "category"), Some(""));
}

#[test]
fn selected_category_is_sent_on_create() {
    let mut d = draft();
    d.category = "c9".to_owned();
    assert_eq!(field(&d.to_form(EditorMode::Create, None), "category"), Some("c9"));
}

#[test]
fn validate_requires_title_and_content() {
    assert!(draft().validate().is_ok());
    let mut d = draft();
    d.title = " ".to_owned();
    assert_eq!(d.validate(), Err(FormError::Required("Title")));
    let mut d = draft();
    d.content.clear();
    assert_eq!(d.validate(), Err(FormError::Required("Content")));
}

#[test]
fn from_post_prefills_every_control() {
    let post = Post {
        id: "p1".to_owned(),
        title: "T".to_owned(),
        content: "C".to_owned(),
        image: Some("uploads/a.png".to_owned()),
        status: PostStatus::Draft,
        category: Some(EntityRef { id: "c1".to_owned(), name: Some("Rust".to_owned()) }),
        author: None,
        tags: Vec::new(),
        created_at: None,
    };
    let d = PostDraft::from_post(&post);
    assert_eq!(d, PostDraft { title: "T".into(), content: "C".into(), status: PostStatus::Draft, category: "c1".into() });
}
