//! The three analytics, each in a time-optimized (fully in-memory) and a
//! memory-optimized (disk-spilling) flavor. All six are instantiations of
//! the two engines and differ only in extractors and emitted value.

use crate::bounded::top_n_bounded;
use crate::config::AnalyticsOptions;
use crate::extract::{SecondaryExtractor, VoteExtractor};
use crate::inmem::top_n_in_memory;
use crate::rank::TopEntry;
use anyhow::Result;
use std::path::Path;

fn to_day_pairs(entries: Vec<TopEntry>) -> Vec<(String, String)> {
    entries
        .into_iter()
        .map(|e| (e.key, e.mode.unwrap_or_default()))
        .collect()
}

fn to_count_pairs(entries: Vec<TopEntry>) -> Vec<(String, u64)> {
    entries.into_iter().map(|e| (e.key, e.count)).collect()
}

/// Busiest calendar days, each with its most active author.
pub fn top_days_time(input: &Path, opts: &AnalyticsOptions) -> Result<Vec<(String, String)>> {
    let entries = top_n_in_memory(
        input,
        &VoteExtractor::Day,
        Some(&SecondaryExtractor::Author),
        opts,
    )?;
    Ok(to_day_pairs(entries))
}

/// Busiest calendar days, bounded-memory variant.
pub fn top_days_memory(input: &Path, opts: &AnalyticsOptions) -> Result<Vec<(String, String)>> {
    let entries = top_n_bounded(
        input,
        &VoteExtractor::Day,
        Some(&SecondaryExtractor::Author),
        opts,
    )?;
    Ok(to_day_pairs(entries))
}

/// Most frequent emoji clusters across tweet bodies.
pub fn top_emojis_time(input: &Path, opts: &AnalyticsOptions) -> Result<Vec<(String, u64)>> {
    let entries = top_n_in_memory(input, &VoteExtractor::Emoji, None, opts)?;
    Ok(to_count_pairs(entries))
}

/// Most frequent emoji clusters, bounded-memory variant.
pub fn top_emojis_memory(input: &Path, opts: &AnalyticsOptions) -> Result<Vec<(String, u64)>> {
    let entries = top_n_bounded(input, &VoteExtractor::Emoji, None, opts)?;
    Ok(to_count_pairs(entries))
}

/// Most mentioned usernames.
pub fn top_mentions_time(input: &Path, opts: &AnalyticsOptions) -> Result<Vec<(String, u64)>> {
    let entries = top_n_in_memory(input, &VoteExtractor::Mention, None, opts)?;
    Ok(to_count_pairs(entries))
}

/// Most mentioned usernames, bounded-memory variant.
pub fn top_mentions_memory(input: &Path, opts: &AnalyticsOptions) -> Result<Vec<(String, u64)>> {
    let entries = top_n_bounded(input, &VoteExtractor::Mention, None, opts)?;
    Ok(to_count_pairs(entries))
}
