use std::cell::Cell;
use std::rc::Rc;

use futures::channel::oneshot;
use futures::executor::block_on;

use super::*;

fn counting_fetch(calls: &Rc<Cell<u32>>) -> impl FnOnce() -> std::future::Ready<Result<Vec<String>, ApiError>> {
    let calls = Rc::clone(calls);
    move || {
        calls.set(calls.get() + 1);
        std::future::ready(Ok(vec!["Rust".to_owned()]))
    }
}

#[test]
fn fresh_key_is_served_from_cache() {
    Owner::new().with(|| {
        let client = QueryClient::new();
        let calls = Rc::new(Cell::new(0));

        let first = block_on(client.fetch(QueryKey::tags(), counting_fetch(&calls)));
        let second = block_on(client.fetch(QueryKey::tags(), counting_fetch(&calls)));

        assert_eq!(first, Ok(vec!["Rust".to_owned()]));
        assert_eq!(second, first);
        assert_eq!(calls.get(), 1);
    });
}

#[test]
fn invalidation_forces_refetch() {
    Owner::new().with(|| {
        let client = QueryClient::new();
        let calls = Rc::new(Cell::new(0));

        let _ = block_on(client.fetch(QueryKey::tags(), counting_fetch(&calls)));
        client.invalidate(&QueryKey::tags());
        let _ = block_on(client.fetch(QueryKey::tags(), counting_fetch(&calls)));

        assert_eq!(calls.get(), 2);
    });
}

#[test]
fn failed_fetch_is_not_cached() {
    Owner::new().with(|| {
        let client = QueryClient::new();
        let failed: Result<Vec<String>, ApiError> = block_on(client.fetch(QueryKey::users(), || {
            std::future::ready(Err(ApiError::Status { status: 403, message: Some("Forbidden".to_owned()) }))
        }));
        assert_eq!(failed.err().and_then(|e| e.status()), Some(403));

        let calls = Rc::new(Cell::new(0));
        let _ = block_on(client.fetch(QueryKey::users(), counting_fetch(&calls)));
        assert_eq!(calls.get(), 1);
    });
}

fn gated_fetch(
    calls: &Rc<Cell<u32>>,
    rx: oneshot::Receiver<Vec<String>>,
) -> impl FnOnce() -> LocalBoxFuture<'static, Result<Vec<String>, ApiError>> {
    let calls = Rc::clone(calls);
    move || {
        calls.set(calls.get() + 1);
        async move { rx.await.map_err(|e| ApiError::Network(e.to_string())) }.boxed_local()
    }
}

#[test]
fn concurrent_reads_share_one_request() {
    Owner::new().with(|| {
        let client = QueryClient::new();
        let calls = Rc::new(Cell::new(0));
        let (tx, rx) = oneshot::channel();

        let first = client.fetch(QueryKey::tags(), gated_fetch(&calls, rx));
        let second = client.fetch(QueryKey::tags(), counting_fetch(&calls));
        let release = async move {
            let _ = tx.send(vec!["shared".to_owned()]);
        };
        let (first, second, ()) = block_on(async { futures::join!(first, second, release) });

        assert_eq!(first, Ok(vec!["shared".to_owned()]));
        assert_eq!(second, first);
        assert_eq!(calls.get(), 1);
    });
}

#[test]
fn dropped_reader_does_not_wedge_the_key() {
    Owner::new().with(|| {
        let client = QueryClient::with_stale_after(0.0);
        let calls = Rc::new(Cell::new(0));
        let (tx, rx) = oneshot::channel();

        // Start the request, then unmount before the response arrives.
        let abandoned = client.fetch::<Vec<String>, _, _>(QueryKey::tags(), gated_fetch(&calls, rx));
        assert!(abandoned.now_or_never().is_none());
        tx.send(vec!["old".to_owned()]).unwrap();

        let joined = block_on(client.fetch(QueryKey::tags(), counting_fetch(&calls)));
        assert_eq!(joined, Ok(vec!["old".to_owned()]));
        assert_eq!(calls.get(), 1);
        assert_eq!(client.cache.with_value(|cache| cache.len()), 1);

        // Zero staleness: every later read goes back to the server.
        let _ = block_on(client.fetch(QueryKey::tags(), counting_fetch(&calls)));
        let refreshed = block_on(client.fetch(QueryKey::tags(), counting_fetch(&calls)));
        assert_eq!(refreshed, Ok(vec!["Rust".to_owned()]));
        assert_eq!(calls.get(), 3);
    });
}

#[test]
fn invalidate_bumps_epoch() {
    Owner::new().with(|| {
        let client = QueryClient::new();
        let before = client.epoch.get_untracked();
        client.invalidate(&QueryKey::posts());
        assert_eq!(client.epoch.get_untracked(), before + 1);
    });
}

#[test]
fn settle_invalidates_only_on_success() {
    let mutation = Mutation::new("Failed to delete post")
        .invalidates(QueryKey::posts())
        .success("Post deleted");

    let (keys, toast) = mutation.settle(&Ok::<(), ApiError>(()));
    assert_eq!(keys, vec![QueryKey::posts()]);
    assert_eq!(toast, Some((ToastKind::Success, "Post deleted".to_owned())));

    let (keys, toast) = mutation.settle::<()>(&Err(ApiError::Network("offline".to_owned())));
    assert!(keys.is_empty());
    assert_eq!(toast, Some((ToastKind::Error, "Failed to delete post".to_owned())));
}

#[test]
fn settle_prefers_server_message() {
    let mutation = Mutation::new("Failed to create tag");
    let err = ApiError::Status { status: 400, message: Some("Tag already exists".to_owned()) };
    let (_, toast) = mutation.settle::<()>(&Err(err));
    assert_eq!(toast, Some((ToastKind::Error, "Tag already exists".to_owned())));
}

#[test]
fn silent_success_raises_no_toast() {
    let mutation = Mutation::new("Failed to like post").invalidates(QueryKey::likes("p1"));
    let (keys, toast) = mutation.settle(&Ok::<u8, ApiError>(1));
    assert_eq!(keys.len(), 1);
    assert_eq!(toast, None);
}
