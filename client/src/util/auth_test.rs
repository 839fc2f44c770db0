use super::*;
use crate::net::types::{EntityRef, PostStatus};

fn user(id: &str, role: Role) -> User {
    User { id: id.to_owned(), name: "Ada".to_owned(), email: "ada@example.com".to_owned(), role, created_at: None }
}

fn post_by(author: Option<&str>) -> Post {
    Post {
        id: "p1".to_owned(),
        title: "Hello".to_owned(),
        content: "<p>Body</p>".to_owned(),
        image: None,
        status: PostStatus::Published,
        category: None,
        author: author.map(|id| EntityRef { id: id.to_owned(), name: None }),
        tags: Vec::new(),
        created_at: None,
    }
}

fn comment_by(author: &str) -> Comment {
    Comment {
        id: "c1".to_owned(),
        content: "Nice".to_owned(),
        user: EntityRef { id: author.to_owned(), name: Some("Bob".to_owned()) },
        post: None,
        created_at: None,
    }
}

#[test]
fn should_redirect_unauth_when_not_loading_and_user_missing() {
    let state = AuthState { user: None, token: None, loading: false };
    assert!(should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_while_loading() {
    assert!(!should_redirect_unauth(&AuthState::default()));
}

#[test]
fn should_not_redirect_when_user_exists() {
    let state = AuthState { user: Some(user("u1", Role::User)), token: Some("t".to_owned()), loading: false };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn plain_users_see_only_the_overview() {
    let items = nav_items(Some(Role::User));
    assert_eq!(items.len(), 1);
    assert!(!items.iter().any(|i| ["Users", "Categories", "Tags", "Manage Posts"].contains(&i.label)));
}

#[test]
fn editors_see_content_but_not_admin_sections() {
    let labels: Vec<_> = nav_items(Some(Role::Editor)).iter().map(|i| i.label).collect();
    assert_eq!(labels, vec!["Overview", "Manage Posts", "Create Post"]);
}

#[test]
fn admins_see_every_section() {
    let labels: Vec<_> = nav_items(Some(Role::Admin)).iter().map(|i| i.label).collect();
    assert_eq!(labels, vec!["Overview", "Manage Posts", "Create Post", "Users", "Categories", "Tags"]);
}

#[test]
fn role_checks() {
    assert!(!can_manage_content(None));
    assert!(!can_manage_content(Some(Role::User)));
    assert!(can_manage_content(Some(Role::Editor)));
    assert!(can_administer(Some(Role::Admin)));
    assert!(!can_administer(Some(Role::Editor)));
}

#[test]
fn post_actions_for_admin_or_author_only() {
    let post = post_by(Some("u2"));
    assert!(can_modify_post(Some(&user("u1", Role::Admin)), &post));
    assert!(can_modify_post(Some(&user("u2", Role::Editor)), &post));
    assert!(!can_modify_post(Some(&user("u3", Role::Editor)), &post));
    assert!(!can_modify_post(None, &post));
    assert!(!can_modify_post(Some(&user("u3", Role::Editor)), &post_by(None)));
}

#[test]
fn comment_delete_for_admin_or_author_only() {
    let comment = comment_by("u2");
    assert!(can_delete_comment(Some(&user("u2", Role::User)), &comment));
    assert!(can_delete_comment(Some(&user("u9", Role::Admin)), &comment));
    assert!(!can_delete_comment(Some(&user("u3", Role::Editor)), &comment));
    assert!(!can_delete_comment(None, &comment));
}

#[test]
fn nav_active_matches_sections_and_subroutes() {
    assert!(nav_active("/dashboard", "/dashboard"));
    assert!(!nav_active("/dashboard", "/dashboard/posts"));
    assert!(nav_active("/dashboard/posts", "/dashboard/posts/edit/42"));
    assert!(!nav_active("/dashboard/posts", "/dashboard/postsx"));
}

#[test]
fn sections_carry_sidebar_headings() {
    let items = nav_items(Some(Role::Admin));
    assert_eq!(items[0].section.heading(), None);
    assert_eq!(items[1].section.heading(), Some("Content"));
    assert_eq!(items[5].section.heading(), Some("System"));
}
