#[path = "common/mod.rs"]
mod common;

use common::*;
use std::fs;
use tweetop::{
    top_days_memory, top_days_time, top_emojis_memory, top_emojis_time, top_mentions_memory,
    top_mentions_time, top_n_bounded, AnalyticsOptions, SecondaryExtractor, VoteExtractor,
};

fn opts() -> AnalyticsOptions {
    AnalyticsOptions::default()
}

/// The two engines are interchangeable implementations of one contract:
/// identical output on the same input, for all three analytics.
#[test]
fn engines_agree_on_mixed_corpus() {
    let dir = tempfile::tempdir().unwrap();
    let path = make_corpus_mixed(dir.path());

    assert_eq!(
        top_days_time(&path, &opts()).unwrap(),
        top_days_memory(&path, &opts()).unwrap()
    );
    assert_eq!(
        top_emojis_time(&path, &opts()).unwrap(),
        top_emojis_memory(&path, &opts()).unwrap()
    );
    assert_eq!(
        top_mentions_time(&path, &opts()).unwrap(),
        top_mentions_memory(&path, &opts()).unwrap()
    );
}

#[test]
fn mixed_corpus_expected_ranking() {
    let dir = tempfile::tempdir().unwrap();
    let path = make_corpus_mixed(dir.path());

    assert_eq!(
        top_days_time(&path, &opts()).unwrap(),
        vec![
            ("2021-01-01".to_string(), "a".to_string()),
            ("2021-01-02".to_string(), "b".to_string()),
            ("2021-01-03".to_string(), "c".to_string()),
        ]
    );
    assert_eq!(
        top_emojis_time(&path, &opts()).unwrap(),
        vec![
            ("😀".to_string(), 4),
            ("🎉".to_string(), 2),
            ("🔥".to_string(), 1),
        ]
    );
}

/// Running either engine twice on an unmodified input yields identical output.
#[test]
fn runs_are_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = make_corpus_mixed(dir.path());

    let first = top_days_memory(&path, &opts()).unwrap();
    let second = top_days_memory(&path, &opts()).unwrap();
    assert_eq!(first, second);

    let first = top_emojis_time(&path, &opts()).unwrap();
    let second = top_emojis_time(&path, &opts()).unwrap();
    assert_eq!(first, second);
}

/// After a successful bounded run, no scratch files remain under work_dir.
#[test]
fn bounded_run_cleans_up_scratch() {
    let dir = tempfile::tempdir().unwrap();
    let path = make_corpus_mixed(dir.path());
    let work = dir.path().join("scratch");

    let o = opts().with_work_dir(&work);
    let out = top_days_memory(&path, &o).unwrap();
    assert!(!out.is_empty());

    let leftovers: Vec<_> = fs::read_dir(&work).unwrap().collect();
    assert!(leftovers.is_empty(), "scratch dir not empty: {leftovers:?}");
}

/// A tiny handle-arena bound forces evict/reopen cycles; results must not
/// change.
#[test]
fn handle_eviction_preserves_results() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("in.ndjson");
    // 30 distinct days, interleaved so every append hits a different key.
    let mut lines = Vec::new();
    for round in 0..3 {
        for day in 1..=30 {
            lines.push(tweet(
                &format!("2021-03-{day:02}T0{round}:00:00+00:00"),
                &format!("user{}", day % 4),
                (round * 100 + day) as i64,
                "",
                &[],
            ));
        }
    }
    write_ndjson(&path, &lines);

    let tight = opts().with_max_open_partitions(8);
    let roomy = opts().with_max_open_partitions(1024);
    assert_eq!(
        top_days_memory(&path, &tight).unwrap(),
        top_days_memory(&path, &roomy).unwrap()
    );
    assert_eq!(
        top_days_memory(&path, &tight).unwrap(),
        top_days_time(&path, &opts()).unwrap()
    );
}

/// Zstd-compressed inputs decode transparently in both engines.
#[test]
fn zst_input_matches_plain() {
    let dir = tempfile::tempdir().unwrap();
    let plain = make_corpus_mixed(dir.path());
    let lines: Vec<String> = fs::read_to_string(&plain)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect();
    let compressed = dir.path().join("tweets.ndjson.zst");
    write_ndjson_zst(&compressed, &lines);

    assert_eq!(
        top_emojis_time(&plain, &opts()).unwrap(),
        top_emojis_time(&compressed, &opts()).unwrap()
    );
    assert_eq!(
        top_days_memory(&plain, &opts()).unwrap(),
        top_days_memory(&compressed, &opts()).unwrap()
    );
}

/// Engine-level boundary: n = 0 returns nothing; the generic contract also
/// exposes counts alongside modes.
#[test]
fn engine_contract_boundaries() {
    let dir = tempfile::tempdir().unwrap();
    let path = make_corpus_mixed(dir.path());

    let none = opts().with_n(0);
    assert!(top_n_bounded(
        &path,
        &VoteExtractor::Day,
        Some(&SecondaryExtractor::Author),
        &none
    )
    .unwrap()
    .is_empty());

    let entries = top_n_bounded(
        &path,
        &VoteExtractor::Day,
        Some(&SecondaryExtractor::Author),
        &opts(),
    )
    .unwrap();
    assert_eq!(entries[0].key, "2021-01-01");
    assert_eq!(entries[0].count, 3);
    assert_eq!(entries[0].mode.as_deref(), Some("a"));
}
