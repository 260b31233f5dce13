use serde_json::json;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Write an NDJSON file from pre-rendered lines.
pub fn write_ndjson(path: &Path, lines: &[String]) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    let mut f = File::create(path).unwrap();
    for l in lines {
        writeln!(&mut f, "{}", l).unwrap();
    }
}

/// Write a zstd-compressed `.zst` NDJSON file, mirroring compressed dumps.
pub fn write_ndjson_zst(path: &Path, lines: &[String]) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    let f = File::create(path).unwrap();
    let mut enc = zstd::stream::write::Encoder::new(f, 3).unwrap();
    for l in lines {
        writeln!(&mut enc, "{}", l).unwrap();
    }
    enc.finish().unwrap();
}

/// Render one tweet line in the shape the analytics expect.
pub fn tweet(date: &str, user: &str, id: i64, content: &str, mentions: &[&str]) -> String {
    json!({
        "date": date,
        "id": id,
        "user": {"username": user},
        "content": content,
        "mentionedUsers": mentions.iter().map(|m| json!({"username": m})).collect::<Vec<_>>(),
    })
    .to_string()
}

/// A mixed corpus exercising all three analytics at once:
/// - 2021-01-01 has 3 tweets (authors a, a, b), 2021-01-02 has 2 (b, b),
///   2021-01-03 has 1 (c).
/// - Emoji: 😀 appears 4 times, 🎉 twice, 🔥 once.
/// - Mentions: x three times, y twice, z once.
/// Plus one malformed line and one record with no date, both skippable.
pub fn make_corpus_mixed(dir: &Path) -> PathBuf {
    let path = dir.join("tweets.ndjson");
    let lines = vec![
        tweet("2021-01-01T08:00:00+00:00", "a", 1, "gm 😀😀", &["x"]),
        tweet("2021-01-01T09:00:00+00:00", "a", 2, "🎉 party", &["x", "y"]),
        tweet("2021-01-01T10:00:00+00:00", "b", 3, "no emoji here", &[]),
        tweet("2021-01-02T08:00:00+00:00", "b", 4, "😀 again 🔥", &["y"]),
        tweet("2021-01-02T09:00:00+00:00", "b", 5, "😀 and 🎉", &["z"]),
        tweet("2021-01-03T08:00:00+00:00", "c", 6, "plain", &["x"]),
        "{not valid json".to_string(),
        json!({"id": 7, "user": {"username": "d"}, "content": "dateless"}).to_string(),
    ];
    write_ndjson(&path, &lines);
    path
}
