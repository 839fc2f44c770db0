use super::*;

fn toggle(message: &str) -> LikeToggleResponse {
    LikeToggleResponse { message: message.to_owned(), liked: None }
}

#[test]
fn toggling_twice_restores_original_count() {
    let start = LikeState { count: 7, liked: false };
    let liked = start.with_toggle(&toggle("Post liked"));
    assert_eq!(liked, LikeState { count: 8, liked: true });
    let back = liked.with_toggle(&toggle("Post unliked"));
    assert_eq!(back, start);
}

#[test]
fn repeated_like_response_does_not_double_count() {
    let state = LikeState { count: 1, liked: true };
    assert_eq!(state.with_toggle(&toggle("Post liked")), state);
}

#[test]
fn unlike_never_underflows() {
    let state = LikeState { count: 0, liked: true };
    assert_eq!(state.with_toggle(&toggle("Post unliked")).count, 0);
}

#[test]
fn summary_count_wins_and_membership_is_kept_when_unreported() {
    let state = LikeState { count: 8, liked: true };
    let next = state.with_summary(&LikeSummary { count: 9, liked: None });
    assert_eq!(next, LikeState { count: 9, liked: true });
    let next = next.with_summary(&LikeSummary { count: 9, liked: Some(false) });
    assert!(!next.liked);
}

#[test]
fn label_shows_count() {
    assert_eq!(LikeState { count: 3, liked: false }.label(), "3 Likes");
}
