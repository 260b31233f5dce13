mod config;
mod record;
mod emoji;
mod extract;

mod ndjson;
mod util;
mod mem;
mod progress;

mod partition;
mod rank;
mod bounded;
mod inmem;
mod analytics;

pub use crate::config::AnalyticsOptions;
pub use crate::record::{parse_record, TweetRecord, TweetUser};
pub use crate::extract::{SecondaryExtractor, VoteExtractor};
pub use crate::rank::TopEntry;

// The two engines share one contract; instantiations live in analytics.
pub use crate::bounded::top_n_bounded;
pub use crate::inmem::top_n_in_memory;
pub use crate::analytics::{
    top_days_memory, top_days_time, top_emojis_memory, top_emojis_time, top_mentions_memory,
    top_mentions_time,
};

// Expose emoji segmentation so callers can reuse the same cluster rules.
pub use crate::emoji::emoji_clusters;

// Expose memory helpers and tracing init for the binaries.
pub use crate::mem::{available_memory_fraction, is_low_memory};
pub use crate::util::init_tracing_once;

// export NDJSON helpers
pub use crate::ndjson::{NdjsonReader, NdjsonWriter};
