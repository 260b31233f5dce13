//! Progress reporting: a small, ergonomic wrapper around `indicatif`.

use indicatif::{ProgressBar, ProgressStyle};

/// Use either `ProgressScope::bytes(..)` or `ProgressScope::count(..)`.
/// - `inc_bytes(delta)` / `inc_items(delta)` increments progress
/// - `finish(msg)` finalizes the bar with a message
pub struct ProgressScope {
    pb: ProgressBar,
    mode: Mode,
}

enum Mode {
    Bytes,
    Count,
}

impl ProgressScope {
    pub fn bytes<T: Into<String>>(label: T, total_bytes: u64) -> Self {
        let pb = ProgressBar::new(total_bytes);
        let style = ProgressStyle::with_template(
            "{spinner:.green} {msg} {bytes:>10}/{total_bytes:<10} [{bar:.cyan/blue}] {percent:>3}%  \
             {bytes_per_sec}  elapsed: {elapsed_precise}  eta: {eta_precise}",
        )
        .unwrap()
        .progress_chars("█▉▊▋▌▍▎▏  ");
        pb.set_style(style);
        pb.set_message(label.into());
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        Self { pb, mode: Mode::Bytes }
    }

    pub fn count<T: Into<String>>(label: T, total: u64) -> Self {
        let pb = ProgressBar::new(total);
        let style = ProgressStyle::with_template(
            "{spinner:.green} {msg} {pos}/{len} [{bar:.cyan/blue}] {percent:>3}%  \
             it/s: {per_sec}  elapsed: {elapsed_precise}  eta: {eta_precise}",
        )
        .unwrap()
        .progress_chars("█▉▊▋▌▍▎▏  ");
        pb.set_style(style);
        let label_str = label.into();
        if !label_str.is_empty() {
            pb.set_message(label_str);
        }
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        Self { pb, mode: Mode::Count }
    }

    #[inline]
    pub fn inc_bytes(&self, delta: u64) {
        let _ = &self.mode;
        self.pb.inc(delta);
    }
    #[inline]
    pub fn inc_items(&self, delta: u64) {
        let _ = &self.mode;
        self.pb.inc(delta);
    }
    pub fn finish<T: Into<String>>(&self, msg: T) {
        self.pb.finish_with_message(msg.into());
    }
}
