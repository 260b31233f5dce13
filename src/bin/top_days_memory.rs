use anyhow::Result;
use std::path::PathBuf;
use tweetop::{init_tracing_once, top_days_memory, AnalyticsOptions};

fn main() -> Result<()> {
    init_tracing_once();
    let mut args = std::env::args().skip(1);
    let (Some(path), None) = (args.next(), args.next()) else {
        eprintln!("usage: top-days-memory <tweets.ndjson[.zst]>");
        std::process::exit(2);
    };

    let opts = AnalyticsOptions::default().with_progress(true);
    for (day, author) in top_days_memory(&PathBuf::from(path), &opts)? {
        println!("{day}\t{author}");
    }
    Ok(())
}
