//! Ranking and tie-break rules shared by both engines.
//!
//! Ordering contract: count descending, then key ascending (byte order).
//! The mode of a secondary-value bag goes to the highest vote count, with
//! ties won by the value encountered first. Both engines apply these rules
//! so their outputs are comparable pair-for-pair.

use ahash::AHashMap;
use std::cmp::Ordering;

/// One ranked result: a primary key, its vote count, and (when a secondary
/// aggregate was requested) the per-group secondary mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopEntry {
    pub key: String,
    pub count: u64,
    pub mode: Option<String>,
}

/// The uniform comparator for ranked keys.
pub fn rank_order(a: &(String, u64), b: &(String, u64)) -> Ordering {
    b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0))
}

/// Top `n` (key, count) pairs out of a count table. Fewer than `n`
/// distinct keys yields all of them, ranked, with no padding.
pub fn top_counts(counts: &AHashMap<String, u64>, n: usize) -> Vec<(String, u64)> {
    let mut all: Vec<(String, u64)> = counts.iter().map(|(k, c)| (k.clone(), *c)).collect();
    all.sort_unstable_by(rank_order);
    all.truncate(n);
    all
}

/// Streaming mode accumulator over values fed in encounter order.
#[derive(Debug, Default)]
pub struct ModeAccum {
    // value -> (votes, first-seen rank)
    counts: AHashMap<String, (u64, usize)>,
}

impl ModeAccum {
    pub fn add(&mut self, value: String) {
        let first_seen = self.counts.len();
        let e = self.counts.entry(value).or_insert((0, first_seen));
        e.0 += 1;
    }

    pub fn finish(self) -> Option<String> {
        self.counts
            .into_iter()
            .max_by(|(_, (ca, ia)), (_, (cb, ib))| ca.cmp(cb).then_with(|| ib.cmp(ia)))
            .map(|(value, _)| value)
    }
}

/// Mode of `values` in encounter order; ties go to the value seen first.
pub fn mode_of<I>(values: I) -> Option<String>
where
    I: IntoIterator<Item = String>,
{
    let mut acc = ModeAccum::default();
    for v in values {
        acc.add(v);
    }
    acc.finish()
}
