use ahash::AHashMap;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use crate::mem::is_low_memory;
use crate::ndjson::NdjsonWriter;

/// The projected tuple one record contributes to its partition: the
/// secondary value and the record id, one NDJSON line per vote.
#[derive(Debug, Serialize, Deserialize)]
pub struct SpillTuple {
    pub v: String,
    pub id: Option<i64>,
}

/// Per-key append-only partition files under a run-scoped scratch dir.
///
/// One file per distinct primary-key value, created lazily on the key's
/// first tuple. Files are named by a sequential id rather than the key
/// itself, since keys (emoji, usernames) are not safe filename material.
///
/// Only `max_open` handles stay open at once; when the arena is full the
/// least-recently-opened writer is flushed and closed, and the partition
/// is reopened in append mode on its next tuple. This bounds handle usage
/// when key cardinality is large.
pub struct PartitionSpill {
    dir: PathBuf,
    paths: AHashMap<String, PathBuf>,
    open: VecDeque<(String, NdjsonWriter)>,
    max_open: usize,
    write_buf: usize,
    appends: u64,
}

const MEM_CHECK_EVERY: u64 = 4096;
const LOW_MEM_FRAC: f64 = 0.10;

impl PartitionSpill {
    pub fn new(dir: &Path, max_open: usize, write_buf: usize) -> Self {
        Self {
            dir: dir.to_path_buf(),
            paths: AHashMap::with_capacity(1024),
            open: VecDeque::new(),
            max_open: max_open.max(1),
            write_buf,
            appends: 0,
        }
    }

    /// Append one projected tuple to `key`'s partition file.
    pub fn append(&mut self, key: &str, tuple: &SpillTuple) -> Result<()> {
        let line = serde_json::to_string(tuple)?;
        let w = self.writer_for(key)?;
        w.write_line(&line)
            .with_context(|| format!("write partition for key {:?}", key))?;

        self.appends += 1;
        if self.appends % MEM_CHECK_EVERY == 0 && is_low_memory(LOW_MEM_FRAC) {
            self.close_all()?;
        }
        Ok(())
    }

    /// Path of `key`'s partition file, if any tuple was ever written for it.
    pub fn path_of(&self, key: &str) -> Option<&Path> {
        self.paths.get(key).map(PathBuf::as_path)
    }

    /// Flush and close every open handle. Must run before the refine pass
    /// re-reads the winning partitions.
    pub fn close_all(&mut self) -> Result<()> {
        while let Some((_, w)) = self.open.pop_front() {
            w.finish()?;
        }
        Ok(())
    }

    fn writer_for(&mut self, key: &str) -> Result<&mut NdjsonWriter> {
        // Arena scan is linear but bounded by `max_open`.
        if let Some(pos) = self.open.iter().position(|(k, _)| k == key) {
            return Ok(&mut self.open[pos].1);
        }

        if self.open.len() >= self.max_open {
            if let Some((_, w)) = self.open.pop_front() {
                w.finish()?;
            }
        }

        let w = match self.paths.get(key) {
            Some(path) => NdjsonWriter::append(path, self.write_buf)
                .with_context(|| format!("reopen partition {}", path.display()))?,
            None => {
                let path = self.dir.join(format!("part_{:05}.ndjson", self.paths.len()));
                let w = NdjsonWriter::create(&path, self.write_buf)
                    .with_context(|| format!("create partition {}", path.display()))?;
                self.paths.insert(key.to_string(), path);
                w
            }
        };
        self.open.push_back((key.to_string(), w));
        Ok(&mut self.open.back_mut().expect("just pushed").1)
    }
}
