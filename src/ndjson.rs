use crate::util::{append_with_backoff, create_with_backoff, open_with_backoff};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Minimal NDJSON reader with buffering and trailing-newline trimming.
/// Uses robust open-with-backoff for Windows-friendliness.
///
/// Inputs ending in `.zst` are decompressed transparently, so the same
/// reader serves plain tweet dumps and compressed ones.
pub struct NdjsonReader {
    rdr: Box<dyn BufRead>,
}

impl NdjsonReader {
    pub fn open(path: &Path, buf_bytes: usize) -> io::Result<Self> {
        let f = open_with_backoff(path, 16, 50)?;
        let cap = buf_bytes.max(8 * 1024);
        let rdr: Box<dyn BufRead> = if path.extension().map_or(false, |e| e == "zst") {
            let mut dec = zstd::stream::read::Decoder::new(f)?;
            // Large frames need a wider window or decoding fails mid-file.
            dec.window_log_max(31)?;
            Box::new(BufReader::with_capacity(cap, dec))
        } else {
            Box::new(BufReader::with_capacity(cap, f))
        };
        Ok(Self { rdr })
    }

    /// Read the next line into `buf`. Returns the number of bytes read (0 on EOF).
    /// Strips trailing `\r?\n`. Empty or whitespace-only lines are returned as empty strings.
    pub fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        buf.clear();
        let n = self.rdr.read_line(buf)?;
        if n == 0 {
            return Ok(0);
        }
        if buf.ends_with('\n') {
            buf.pop();
            if buf.ends_with('\r') {
                buf.pop();
            }
        }
        Ok(n)
    }
}

/// Minimal NDJSON writer with buffering and robust file creation.
pub struct NdjsonWriter {
    path: PathBuf,
    w: Option<BufWriter<File>>,
}

impl NdjsonWriter {
    pub fn create(path: &Path, buf_bytes: usize) -> io::Result<Self> {
        let f = create_with_backoff(path, 16, 50)?;
        Ok(Self {
            path: path.to_path_buf(),
            w: Some(BufWriter::with_capacity(buf_bytes.max(8 * 1024), f)),
        })
    }

    /// Reopen an existing file for appending (creates it when absent).
    /// The spill arena uses this after evicting a partition's handle.
    pub fn append(path: &Path, buf_bytes: usize) -> io::Result<Self> {
        let f = append_with_backoff(path, 16, 50)?;
        Ok(Self {
            path: path.to_path_buf(),
            w: Some(BufWriter::with_capacity(buf_bytes.max(8 * 1024), f)),
        })
    }

    #[inline]
    pub fn write_line(&mut self, s: &str) -> io::Result<()> {
        if let Some(w) = &mut self.w {
            w.write_all(s.as_bytes())?;
            w.write_all(b"\n")?;
        }
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn finish(mut self) -> io::Result<()> {
        if let Some(mut w) = self.w.take() {
            w.flush()?;
        }
        Ok(())
    }
}

impl Drop for NdjsonWriter {
    fn drop(&mut self) {
        if let Some(mut w) = self.w.take() {
            let _ = w.flush();
        }
    }
}
