//! The bounded-memory top-N engine: partition the stream onto disk, rank
//! partition sizes, then re-read only the winning partitions.
//!
//! Memory held during the scan is O(distinct keys); record contents go to
//! the run-scoped scratch dir and are released right after projection. The
//! scratch dir is a `TempDir`, so partitions are removed on every return
//! path, success or error.

use crate::config::AnalyticsOptions;
use crate::extract::{SecondaryExtractor, VoteExtractor};
use crate::ndjson::NdjsonReader;
use crate::partition::{PartitionSpill, SpillTuple};
use crate::progress::ProgressScope;
use crate::rank::{top_counts, ModeAccum, TopEntry};
use crate::record::parse_record;
use ahash::AHashMap;
use anyhow::{Context, Result};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Rank the top `opts.n` primary keys of `input` by vote count and, when
/// `secondary` is given, report each winner's secondary mode.
///
/// Undecodable lines and records without a primary key are skipped, not
/// fatal. A record whose secondary value is missing still counts toward
/// its group but casts no mode vote. I/O failures propagate.
pub fn top_n_bounded(
    input: &Path,
    votes: &VoteExtractor,
    secondary: Option<&SecondaryExtractor>,
    opts: &AnalyticsOptions,
) -> Result<Vec<TopEntry>> {
    let mut rdr = NdjsonReader::open(input, opts.read_buffer_bytes)
        .with_context(|| format!("open {}", input.display()))?;

    // The scratch dir only exists when a refine pass will read it back;
    // count-only analytics never touch the disk.
    let scratch = match secondary {
        Some(_) => Some(make_scratch_dir(opts)?),
        None => None,
    };
    let mut spill = scratch
        .as_ref()
        .map(|t| PartitionSpill::new(t.path(), opts.max_open_partitions, opts.write_buffer_bytes));

    // ---- Pass 1: partition + count ----
    let total_bytes = fs::metadata(input).map(|m| m.len()).unwrap_or(0);
    let pb = opts
        .progress
        .then(|| ProgressScope::bytes("topn: partition", total_bytes));

    let mut counts: AHashMap<String, u64> = AHashMap::with_capacity(4096);
    let mut buf = String::with_capacity(16 * 1024);
    let mut keys: Vec<String> = Vec::new();
    let mut skipped: u64 = 0;

    loop {
        let n = rdr.read_line(&mut buf)?;
        if n == 0 {
            break;
        }
        if let Some(pb) = &pb {
            pb.inc_bytes(n as u64);
        }
        if buf.is_empty() {
            continue;
        }
        let rec = match parse_record(&buf) {
            Ok(r) => r,
            Err(_) => {
                skipped += 1;
                continue;
            }
        };
        votes.votes(&rec, &mut keys);
        if keys.is_empty() {
            continue;
        }
        let sec = secondary.and_then(|s| s.value(&rec));
        for key in keys.drain(..) {
            *counts.entry(key.clone()).or_insert(0) += 1;
            if let Some(spill) = spill.as_mut() {
                if let Some(v) = sec.as_deref() {
                    let tuple = SpillTuple { v: v.to_string(), id: rec.id };
                    spill.append(&key, &tuple)?;
                }
            }
        }
    }
    if let Some(pb) = &pb {
        pb.finish("partition pass done");
    }
    tracing::debug!(skipped, distinct = counts.len(), "partition pass complete");

    // ---- Pass 2: rank partition sizes ----
    let top = top_counts(&counts, opts.n);

    // ---- Pass 3: refine the winners ----
    let entries = match spill.as_mut() {
        None => top
            .into_iter()
            .map(|(key, count)| TopEntry { key, count, mode: None })
            .collect(),
        Some(spill) => {
            spill.close_all()?;
            let pb = opts
                .progress
                .then(|| ProgressScope::count("topn: refine", top.len() as u64));

            // Winners are disjoint files, read-only from here on.
            let jobs: Vec<(String, u64, Option<PathBuf>)> = top
                .into_iter()
                .map(|(key, count)| {
                    let path = spill.path_of(&key).map(Path::to_path_buf);
                    (key, count, path)
                })
                .collect();

            let entries = jobs
                .into_par_iter()
                .map(|(key, count, path)| -> Result<TopEntry> {
                    let mode = match path {
                        Some(p) => partition_mode(&p, opts.read_buffer_bytes)?,
                        None => None,
                    };
                    if let Some(pb) = &pb {
                        pb.inc_items(1);
                    }
                    Ok(TopEntry { key, count, mode })
                })
                .collect::<Result<Vec<_>>>()?;

            if let Some(pb) = &pb {
                pb.finish("refine done");
            }
            entries
        }
    };

    // `scratch` drops here and removes every partition file.
    Ok(entries)
}

fn make_scratch_dir(opts: &AnalyticsOptions) -> Result<TempDir> {
    let dir = match &opts.work_dir {
        Some(work) => {
            fs::create_dir_all(work)
                .with_context(|| format!("create work dir {}", work.display()))?;
            tempfile::tempdir_in(work)?
        }
        None => tempfile::tempdir()?,
    };
    Ok(dir)
}

/// Mode of the secondary values in one partition file, ties broken by
/// first-encountered order (the file preserves arrival order).
fn partition_mode(path: &Path, read_buf: usize) -> Result<Option<String>> {
    let mut rdr = NdjsonReader::open(path, read_buf)
        .with_context(|| format!("reopen partition {}", path.display()))?;
    let mut acc = ModeAccum::default();
    let mut buf = String::with_capacity(4 * 1024);
    loop {
        let n = rdr.read_line(&mut buf)?;
        if n == 0 {
            break;
        }
        if buf.is_empty() {
            continue;
        }
        let tuple: SpillTuple = serde_json::from_str(&buf)
            .with_context(|| format!("partition tuple in {}", path.display()))?;
        acc.add(tuple.v);
    }
    Ok(acc.finish())
}
