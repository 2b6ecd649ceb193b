//! Line Session
//!
//! Reads one intent per line and writes one JSON reply per line.
//!
//! # Commands
//! - `:stats` - write the current cache stats
//! - `:clear` - empty the cache
//!
//! Blank lines are skipped. At end of input a final stats line is written.

use anyhow::Result;
use serde_json::json;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};

use crate::models::StatsResponse;
use crate::provider::PayloadProvider;
use crate::responder::CachedResponder;

/// Normalizes a raw input line into an intent key.
pub fn normalize_intent(line: &str) -> String {
    line.trim().to_lowercase()
}

/// Runs the session until `reader` reaches end of input.
///
/// Returns the number of intents answered.
pub async fn run_session<R, W, P>(
    reader: R,
    mut writer: W,
    responder: &CachedResponder<P>,
) -> Result<usize>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
    P: PayloadProvider,
{
    let mut lines = reader.lines();
    let mut answered = 0;

    while let Some(line) = lines.next_line().await? {
        let intent = normalize_intent(&line);
        let out = match intent.as_str() {
            "" => continue,
            ":stats" => stats_line(responder)?,
            ":clear" => {
                let outcome = responder.cache().clear();
                info!(?outcome, "Cache cleared on request");
                serde_json::to_string(&json!({ "cleared": outcome.is_applied() }))?
            }
            _ => {
                answered += 1;
                let reply = responder.respond(&intent);
                debug!(intent = %reply.intent, source = ?reply.source, "Answered intent");
                serde_json::to_string(&reply)?
            }
        };
        write_line(&mut writer, &out).await?;
    }

    let summary = stats_line(responder)?;
    write_line(&mut writer, &summary).await?;
    writer.flush().await?;

    Ok(answered)
}

fn stats_line<P: PayloadProvider>(responder: &CachedResponder<P>) -> Result<String> {
    let stats = StatsResponse::from(responder.cache().stats());
    Ok(serde_json::to_string(&json!({ "stats": stats }))?)
}

async fn write_line<W: AsyncWrite + Unpin>(writer: &mut W, line: &str) -> Result<()> {
    writer.write_all(line.as_bytes()).await?;
    writer.write_all(b"\n").await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::ResponseCache;
    use crate::models::{Reply, ReplySource};
    use crate::provider::StaticPayloadProvider;
    use std::sync::Arc;
    use tokio::io::BufReader;

    fn responder() -> CachedResponder {
        CachedResponder::new(Arc::new(ResponseCache::default()), StaticPayloadProvider::new())
    }

    fn output_lines(out: &[u8]) -> Vec<serde_json::Value> {
        std::str::from_utf8(out)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn test_normalize_intent() {
        assert_eq!(normalize_intent("  Store_Hours \r"), "store_hours");
        assert_eq!(normalize_intent("   "), "");
    }

    #[tokio::test]
    async fn test_session_answers_each_line() {
        let input = tokio_test::io::Builder::new()
            .read(b"greeting\nGREETING\n\nmystery\n")
            .build();
        let responder = responder();
        let mut out = Vec::new();

        let answered = run_session(BufReader::new(input), &mut out, &responder)
            .await
            .unwrap();

        assert_eq!(answered, 3);
        let lines = output_lines(&out);
        assert_eq!(lines.len(), 4);

        let first: Reply = serde_json::from_value(lines[0].clone()).unwrap();
        let second: Reply = serde_json::from_value(lines[1].clone()).unwrap();
        let third: Reply = serde_json::from_value(lines[2].clone()).unwrap();
        assert_eq!(first.source, ReplySource::Provider);
        assert_eq!(second.source, ReplySource::Cache);
        assert_eq!(third, Reply::unknown("mystery"));

        assert_eq!(lines[3]["stats"]["hits"], 1);
        assert_eq!(lines[3]["stats"]["misses"], 2);
        assert_eq!(lines[3]["stats"]["total_entries"], 1);
    }

    #[tokio::test]
    async fn test_session_commands() {
        let input = tokio_test::io::Builder::new()
            .read(b"store_hours\n:stats\n")
            .read(b":clear\nstore_hours\n")
            .build();
        let responder = responder();
        let mut out = Vec::new();

        run_session(BufReader::new(input), &mut out, &responder)
            .await
            .unwrap();

        let lines = output_lines(&out);
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[1]["stats"]["total_entries"], 1);
        assert_eq!(lines[2]["cleared"], true);
        assert_eq!(lines[3]["source"], "provider");
    }

    #[tokio::test]
    async fn test_empty_input_writes_only_stats() {
        let input = tokio_test::io::Builder::new().build();
        let responder = responder();
        let mut out = Vec::new();

        let answered = run_session(BufReader::new(input), &mut out, &responder)
            .await
            .unwrap();

        assert_eq!(answered, 0);
        let lines = output_lines(&out);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0]["stats"]["hit_rate"], 0.0);
    }
}
