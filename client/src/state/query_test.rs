use super::*;
use serde_json::json;

fn cache() -> QueryCache<&'static str> {
    QueryCache::with_stale_after(1_000.0)
}

// =============================================================
// QueryKey
// =============================================================

#[test]
fn key_segments_follow_builder_order() {
    let key = QueryKey::posts_feed(2);
    assert_eq!(key.segments(), ["posts", "feed", "2"]);
    assert_eq!(key.resource(), "posts");
    assert_eq!(key.to_string(), "posts:feed:2");
}

#[test]
fn prefix_matching_is_segment_wise() {
    assert!(QueryKey::post("p1").starts_with(&QueryKey::posts()));
    assert!(QueryKey::comments("p1").starts_with(&QueryKey::comments("p1")));
    assert!(!QueryKey::comments("p10").starts_with(&QueryKey::comments("p1")));
    assert!(!QueryKey::posts().starts_with(&QueryKey::post("p1")));
}

// =============================================================
// Lookup / freshness
// =============================================================

#[test]
fn empty_cache_misses() {
    let c = cache();
    assert!(matches!(c.lookup(&QueryKey::tags(), 0.0), Lookup::Miss));
    assert!(c.is_empty());
}

#[test]
fn completed_fetch_is_served_until_stale() {
    let mut c = cache();
    let key = QueryKey::tags();
    let generation = c.begin(key.clone(), "req-1");
    assert!(c.complete(&key, generation, json!(["rust"]), 100.0));

    match c.lookup(&key, 900.0) {
        Lookup::Fresh(value) => assert_eq!(value, &json!(["rust"])),
        other => panic!("expected fresh, got {other:?}"),
    }
    assert!(matches!(c.lookup(&key, 1_100.0), Lookup::Miss));
    assert_eq!(c.cached(&key), Some(&json!(["rust"])));
}

#[test]
fn concurrent_reads_see_the_pending_request() {
    let mut c = cache();
    let key = QueryKey::categories();
    c.begin(key.clone(), "req-1");
    match c.lookup(&key, 0.0) {
        Lookup::Pending(handle) => assert_eq!(*handle, "req-1"),
        other => panic!("expected pending, got {other:?}"),
    }
}

#[test]
fn failed_fetch_is_not_cached() {
    let mut c = cache();
    let key = QueryKey::users();
    let generation = c.begin(key.clone(), "req-1");
    c.abandon(&key, generation);
    assert!(matches!(c.lookup(&key, 0.0), Lookup::Miss));
    assert_eq!(c.cached(&key), None);
}

#[test]
fn zero_window_never_serves_from_cache() {
    let mut c: QueryCache<()> = QueryCache::with_stale_after(0.0);
    let key = QueryKey::analytics();
    let generation = c.begin(key.clone(), ());
    c.complete(&key, generation, json!({}), 5.0);
    assert!(!c.is_fresh(&key, 5.0));
}

// =============================================================
// Invalidation
// =============================================================

#[test]
fn invalidating_prefix_marks_every_post_query_stale() {
    let mut c = cache();
    for key in [QueryKey::posts_feed(1), QueryKey::posts_manage(1), QueryKey::post("p1"), QueryKey::tags()] {
        let generation = c.begin(key.clone(), "req");
        c.complete(&key, generation, json!(1), 0.0);
    }

    assert_eq!(c.invalidate(&QueryKey::posts()), 3);
    assert!(!c.is_fresh(&QueryKey::posts_feed(1), 1.0));
    assert!(!c.is_fresh(&QueryKey::posts_manage(1), 1.0));
    assert!(!c.is_fresh(&QueryKey::post("p1"), 1.0));
    assert!(c.is_fresh(&QueryKey::tags(), 1.0));
}

#[test]
fn deleted_post_disappears_after_invalidation_and_refetch() {
    let mut c = cache();
    let key = QueryKey::posts_manage(1);
    let generation = c.begin(key.clone(), "req-1");
    c.complete(&key, generation, json!({ "posts": [{ "_id": "p1" }, { "_id": "p2" }] }), 0.0);

    c.invalidate(&QueryKey::posts());
    assert!(matches!(c.lookup(&key, 10.0), Lookup::Miss));

    let generation = c.begin(key.clone(), "req-2");
    c.complete(&key, generation, json!({ "posts": [{ "_id": "p2" }] }), 20.0);
    match c.lookup(&key, 30.0) {
        Lookup::Fresh(value) => assert_eq!(value["posts"].as_array().map(Vec::len), Some(1)),
        other => panic!("expected fresh, got {other:?}"),
    }
}

#[test]
fn fetch_started_before_invalidation_cannot_write_back() {
    let mut c = cache();
    let key = QueryKey::comments("p1");
    let stale_generation = c.begin(key.clone(), "req-1");

    c.invalidate(&QueryKey::comments("p1"));
    assert!(matches!(c.lookup(&key, 0.0), Lookup::Miss));

    assert!(!c.complete(&key, stale_generation, json!(["old"]), 1.0));
    assert_eq!(c.cached(&key), None);
}

#[test]
fn old_flight_finishing_does_not_detach_newer_flight() {
    let mut c = cache();
    let key = QueryKey::likes("p1");
    let old = c.begin(key.clone(), "req-1");
    c.invalidate(&QueryKey::likes("p1"));
    let _new = c.begin(key.clone(), "req-2");

    c.abandon(&key, old);
    assert!(matches!(c.lookup(&key, 0.0), Lookup::Pending(&"req-2")));
}

#[test]
fn remove_drops_entry() {
    let mut c = cache();
    let key = QueryKey::tags();
    let generation = c.begin(key.clone(), "req");
    c.complete(&key, generation, json!([]), 0.0);
    c.remove(&key);
    assert_eq!(c.len(), 0);
}
