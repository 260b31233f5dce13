//! The in-memory top-N engine: materialize the whole log, group with
//! explicit maps, rank with the shared comparator. Trades O(records)
//! memory for a single pass and no disk I/O; output must match the
//! bounded engine pair-for-pair on the same input.

use crate::config::AnalyticsOptions;
use crate::extract::{SecondaryExtractor, VoteExtractor};
use crate::ndjson::NdjsonReader;
use crate::progress::ProgressScope;
use crate::rank::{top_counts, ModeAccum, TopEntry};
use crate::record::{parse_record, TweetRecord};
use ahash::AHashMap;
use anyhow::{Context, Result};
use rayon::prelude::*;
use std::fs;
use std::path::Path;

/// Same contract as `top_n_bounded`, but `input` is decoded fully into
/// memory before grouping.
pub fn top_n_in_memory(
    input: &Path,
    votes: &VoteExtractor,
    secondary: Option<&SecondaryExtractor>,
    opts: &AnalyticsOptions,
) -> Result<Vec<TopEntry>> {
    // ---- Collect: slurp lines, then decode in parallel. Decode keeps
    // input order so first-seen tie-breaks stay deterministic.
    let mut rdr = NdjsonReader::open(input, opts.read_buffer_bytes)
        .with_context(|| format!("open {}", input.display()))?;

    let total_bytes = fs::metadata(input).map(|m| m.len()).unwrap_or(0);
    let pb = opts
        .progress
        .then(|| ProgressScope::bytes("topn: load", total_bytes));

    let mut lines: Vec<String> = Vec::new();
    let mut buf = String::with_capacity(16 * 1024);
    loop {
        let n = rdr.read_line(&mut buf)?;
        if n == 0 {
            break;
        }
        if let Some(pb) = &pb {
            pb.inc_bytes(n as u64);
        }
        if !buf.is_empty() {
            lines.push(buf.clone());
        }
    }
    if let Some(pb) = &pb {
        pb.finish("load done");
    }

    let records: Vec<TweetRecord> = lines
        .par_iter()
        .filter_map(|line| parse_record(line).ok())
        .collect();
    tracing::debug!(
        lines = lines.len(),
        decoded = records.len(),
        "materialized input"
    );
    drop(lines);

    // ---- Group: one table for counts, one for secondary bags.
    let mut counts: AHashMap<String, u64> = AHashMap::with_capacity(4096);
    let mut bags: AHashMap<String, ModeAccum> = AHashMap::new();
    let mut keys: Vec<String> = Vec::new();

    for rec in &records {
        votes.votes(rec, &mut keys);
        if keys.is_empty() {
            continue;
        }
        let sec = secondary.and_then(|s| s.value(rec));
        for key in keys.drain(..) {
            *counts.entry(key.clone()).or_insert(0) += 1;
            if secondary.is_some() {
                let bag = bags.entry(key).or_default();
                if let Some(v) = sec.clone() {
                    bag.add(v);
                }
            }
        }
    }

    // ---- Rank + refine with the shared rules.
    let top = top_counts(&counts, opts.n);
    Ok(top
        .into_iter()
        .map(|(key, count)| {
            let mode = bags.remove(&key).and_then(ModeAccum::finish);
            TopEntry { key, count, mode }
        })
        .collect())
}
