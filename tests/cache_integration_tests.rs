//! Integration Tests for the Response Cache
//!
//! Drives the public API the way an embedding service would: one shared
//! cache, a responder on top, and concurrent callers.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use intent_cache::cache::ManualClock;
use intent_cache::models::ReplySource;
use intent_cache::session::run_session;
use intent_cache::{
    CacheConfig, CachedResponder, PayloadProvider, ResponseCache, StaticPayloadProvider,
    StoreOutcome,
};
use tokio::io::BufReader;

// == Helper Functions ==

fn manual_cache(ttl: Duration, capacity: usize) -> (Arc<ResponseCache>, ManualClock) {
    let clock = ManualClock::new();
    let cache = ResponseCache::with_clock(
        CacheConfig::new(ttl, capacity, 0.3),
        Arc::new(clock.clone()),
    );
    (Arc::new(cache), clock)
}

// == Lifecycle Tests ==

#[test]
fn test_default_cache_lifecycle() {
    let cache = ResponseCache::default();

    assert_eq!(cache.lookup("fingerprint"), None);
    assert_eq!(cache.store("fingerprint", "response"), StoreOutcome::Applied);
    assert_eq!(cache.lookup("fingerprint"), Some("response".to_string()));
    assert_eq!(cache.size(), 1);

    assert_eq!(cache.clear(), StoreOutcome::Applied);
    assert_eq!(cache.size(), 0);
    assert_eq!(cache.lookup("fingerprint"), None);
}

#[test]
fn test_stale_entries_swept_only_when_full() {
    let (cache, clock) = manual_cache(Duration::from_secs(60), 4);

    for i in 0..4 {
        cache.store(format!("old{i}"), "v");
    }
    clock.advance(Duration::from_secs(61));
    assert_eq!(cache.size(), 4, "Nothing sweeps until the next store");

    cache.store("new", "v");

    let stats = cache.stats();
    assert_eq!(stats.expired, 4);
    assert_eq!(stats.trimmed, 0);
    assert_eq!(cache.size(), 1);
    assert_eq!(cache.lookup("new"), Some("v".to_string()));
}

#[test]
fn test_mixed_expiry_and_trim_in_one_pass() {
    let (cache, clock) = manual_cache(Duration::from_secs(60), 10);

    for i in 0..2 {
        cache.store(format!("stale{i}"), "v");
    }
    clock.advance(Duration::from_secs(61));
    for i in 0..8 {
        cache.store(format!("fresh{i}"), "v");
    }
    // 2 expired leaves 8 < 10, so no trim
    cache.store("trigger", "v");

    let stats = cache.stats();
    assert_eq!(stats.expired, 2);
    assert_eq!(stats.trimmed, 0);
    assert_eq!(cache.size(), 9);
}

// == Concurrency Tests ==

#[test]
fn test_concurrent_readers_see_whole_values() {
    let cache = Arc::new(ResponseCache::new(CacheConfig::new(
        Duration::from_secs(300),
        20,
        0.5,
    )));
    let values = ["a".repeat(256), "b".repeat(256)];
    cache.store("shared", values[0].clone());

    let writer = {
        let cache = Arc::clone(&cache);
        let values = values.clone();
        thread::spawn(move || {
            for i in 0..500 {
                cache.store("shared", values[i % 2].clone());
                cache.store(format!("noise{i}"), "x");
            }
        })
    };

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let cache = Arc::clone(&cache);
            let values = values.clone();
            thread::spawn(move || {
                for _ in 0..500 {
                    if let Some(v) = cache.lookup("shared") {
                        assert!(v == values[0] || v == values[1], "Torn read");
                    }
                    assert!(cache.size() <= 20);
                }
            })
        })
        .collect();

    writer.join().unwrap();
    for reader in readers {
        reader.join().unwrap();
    }
    assert_eq!(cache.stats().faults, 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_tasks_share_responder() {
    let (cache, _clock) = manual_cache(Duration::from_secs(300), 200);
    let responder = Arc::new(CachedResponder::new(cache, StaticPayloadProvider::new()));
    let intents: Vec<&'static str> = responder.provider().intents().collect();

    let tasks: Vec<_> = (0..16)
        .map(|t| {
            let responder = Arc::clone(&responder);
            let intent = intents[t % intents.len()];
            tokio::spawn(async move { responder.respond(intent) })
        })
        .collect();

    for task in tasks {
        let reply = task.await.unwrap();
        assert_ne!(reply.source, ReplySource::Unknown);
        assert!(reply.payload.is_some());
    }
    assert_eq!(responder.cache().size(), intents.len());
}

// == Responder Tests ==

#[test]
fn test_responder_payload_matches_provider() {
    let (cache, _clock) = manual_cache(Duration::from_secs(300), 200);
    let responder = CachedResponder::new(cache, StaticPayloadProvider::new());

    responder.respond("browse_categories");
    let cached = responder.respond("browse_categories");

    assert_eq!(cached.source, ReplySource::Cache);
    assert_eq!(
        cached.payload,
        StaticPayloadProvider::new().resolve("browse_categories")
    );
}

#[tokio::test]
async fn test_session_over_shared_cache() {
    let (cache, clock) = manual_cache(Duration::from_secs(300), 200);
    let responder = CachedResponder::new(Arc::clone(&cache), StaticPayloadProvider::new());

    let input = tokio_test::io::Builder::new()
        .read(b"show_deals\nshow_deals\n")
        .build();
    let mut out = Vec::new();
    run_session(BufReader::new(input), &mut out, &responder)
        .await
        .unwrap();

    clock.advance(Duration::from_secs(300));
    assert_eq!(cache.lookup("show_deals"), None);
    assert_eq!(cache.size(), 1);

    let text = String::from_utf8(out).unwrap();
    let sources: Vec<String> = text
        .lines()
        .filter_map(|l| serde_json::from_str::<serde_json::Value>(l).ok())
        .filter_map(|v| v["source"].as_str().map(str::to_owned))
        .collect();
    assert_eq!(sources, vec!["provider", "cache"]);
}
