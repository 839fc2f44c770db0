use super::*;

#[test]
fn posts_endpoint_omits_first_page_query() {
    assert_eq!(posts_endpoint(0), "/posts");
    assert_eq!(posts_endpoint(1), "/posts");
    assert_eq!(posts_endpoint(3), "/posts?page=3");
}

#[test]
fn post_endpoint_formats_expected_path() {
    assert_eq!(post_endpoint("p42"), "/posts/p42");
}

#[test]
fn comment_endpoints_split_list_and_delete_ids() {
    assert_eq!(comments_endpoint("p1"), "/comments/p1");
    assert_eq!(comment_endpoint("c9"), "/comments/c9");
}

#[test]
fn likes_endpoint_formats_expected_path() {
    assert_eq!(likes_endpoint("p1"), "/likes/p1");
}

#[test]
fn endpoint_calls_are_unavailable_during_ssr() {
    let result = futures::executor::block_on(list_tags());
    assert_eq!(result, Err(ApiError::Unavailable));
}
