use std::path::{Path, PathBuf};

/// User-facing options with sensible defaults and builder chaining.
/// Shared by both engines; the spill-related knobs are ignored by the
/// in-memory variant.
#[derive(Clone, Debug)]
pub struct AnalyticsOptions {
    pub n: usize,                   // how many ranked keys to report
    pub work_dir: Option<PathBuf>,  // if None, spill under the system temp dir
    pub max_open_partitions: usize, // bound on simultaneously open spill handles

    // IO tuning
    pub read_buffer_bytes: usize,  // BufReader capacity
    pub write_buffer_bytes: usize, // BufWriter capacity

    pub progress: bool, // show progress bars
}

impl Default for AnalyticsOptions {
    fn default() -> Self {
        // Defaults chosen to be safe but noticeably faster than std defaults.
        // Adjust at runtime via the with_* builder methods.
        let default_read = 256 * 1024;
        let default_write = 256 * 1024;

        Self {
            n: 10,
            work_dir: None,
            max_open_partitions: 128,
            read_buffer_bytes: default_read,
            write_buffer_bytes: default_write,
            progress: false,
        }
    }
}

impl AnalyticsOptions {
    pub fn with_n(mut self, n: usize) -> Self {
        self.n = n;
        self
    }
    pub fn with_work_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.work_dir = Some(dir.as_ref().to_path_buf());
        self
    }
    pub fn with_max_open_partitions(mut self, handles: usize) -> Self {
        self.max_open_partitions = handles.max(8);
        self
    }
    pub fn with_progress(mut self, yes: bool) -> Self {
        self.progress = yes;
        self
    }

    // IO buffers tuning
    pub fn with_io_read_buffer(mut self, bytes: usize) -> Self {
        self.read_buffer_bytes = bytes.max(8 * 1024);
        self
    }
    pub fn with_io_write_buffer(mut self, bytes: usize) -> Self {
        self.write_buffer_bytes = bytes.max(8 * 1024);
        self
    }
    pub fn with_io_buffers(mut self, read_bytes: usize, write_bytes: usize) -> Self {
        self.read_buffer_bytes = read_bytes.max(8 * 1024);
        self.write_buffer_bytes = write_bytes.max(8 * 1024);
        self
    }
}
