use anyhow::Result;
use std::path::PathBuf;
use tweetop::{init_tracing_once, top_emojis_time, AnalyticsOptions};

fn main() -> Result<()> {
    init_tracing_once();
    let mut args = std::env::args().skip(1);
    let (Some(path), None) = (args.next(), args.next()) else {
        eprintln!("usage: top-emojis-time <tweets.ndjson[.zst]>");
        std::process::exit(2);
    };

    let opts = AnalyticsOptions::default().with_progress(true);
    for (emoji, count) in top_emojis_time(&PathBuf::from(path), &opts)? {
        println!("{emoji}\t{count}");
    }
    Ok(())
}
