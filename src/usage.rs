//! # Usage Module
//!
//! Token accounting from Claude Code transcript files.
//!
//! Transcripts are JSONL logs that keep growing during a session. Only the
//! most recent assistant usage block matters for the context display, so the
//! file is walked from the end towards the start and the scan stops at the
//! first assistant entry that reports any tokens.

use std::fs;
use std::path::Path;

use crate::models::TranscriptLine;

/// Contexts above this many tokens are rendered with the warning color.
pub const CONTEXT_WARN_TOKENS: u64 = 90_000;

/// Returns the token total of the latest assistant message in the transcript.
///
/// The total is `input + cache_creation + cache_read + output`. Missing or
/// unreadable files, blank lines and lines that are not valid JSON never fail
/// the call; the result is simply 0 when nothing usable is found.
pub fn calc_tokens_from_transcript(transcript_path: &Path) -> u64 {
    if transcript_path.as_os_str().is_empty() {
        return 0;
    }

    let raw = match fs::read(transcript_path) {
        Ok(raw) => raw,
        Err(err) => {
            tracing::debug!(path = %transcript_path.display(), %err, "transcript unreadable");
            return 0;
        }
    };

    match last_usage_total(&String::from_utf8_lossy(&raw)) {
        Some(total) => total,
        None => {
            tracing::debug!(path = %transcript_path.display(), "no assistant usage in transcript");
            0
        }
    }
}

/// Walks JSONL content backwards and returns the usage total of the first
/// assistant line with at least one non-zero counter.
pub fn last_usage_total(content: &str) -> Option<u64> {
    let lines: Vec<&str> = content.lines().collect();
    for (idx, line) in lines.iter().enumerate().rev() {
        let t = line.trim();
        if t.is_empty() {
            continue;
        }

        let parsed: TranscriptLine = match serde_json::from_str(t) {
            Ok(p) => p,
            Err(err) => {
                tracing::trace!(line = idx + 1, %err, "skipping malformed transcript line");
                continue;
            }
        };

        let usage = parsed.usage();
        if parsed.is_assistant() && usage.has_usage() {
            return Some(usage.total());
        }
    }
    None
}

/// Whether a context of `tokens` should be flagged.
pub fn is_context_warning(tokens: u64) -> bool {
    tokens > CONTEXT_WARN_TOKENS
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn assistant(input: u64, cache_create: u64, cache_read: u64, output: u64) -> String {
        format!(
            r#"{{"type":"assistant","message":{{"usage":{{"input_tokens":{input},"cache_creation_input_tokens":{cache_create},"cache_read_input_tokens":{cache_read},"output_tokens":{output}}}}}}}"#
        )
    }

    #[test]
    fn empty_path_is_zero() {
        assert_eq!(calc_tokens_from_transcript(Path::new("")), 0);
    }

    #[test]
    fn missing_file_is_zero() {
        assert_eq!(
            calc_tokens_from_transcript(Path::new("/non/existent/transcript.jsonl")),
            0
        );
    }

    #[test]
    fn sums_all_four_counters() {
        let content = assistant(10, 200, 3000, 40);
        assert_eq!(last_usage_total(&content), Some(3250));
    }

    #[test]
    fn latest_assistant_entry_wins() {
        let content = [
            assistant(100, 0, 0, 5),
            r#"{"type":"user","message":{"content":"hi"}}"#.to_string(),
            assistant(1000, 500, 20000, 300),
            r#"{"type":"user","message":{"content":"again"}}"#.to_string(),
        ]
        .join("\n");
        assert_eq!(last_usage_total(&content), Some(21_800));
    }

    #[test]
    fn trailing_garbage_and_blank_lines_are_skipped() {
        let content = format!(
            "{}\n{}\n\n   \n{{\"type\": \"assistant\", \"message\": \n not json at all\n",
            assistant(1, 1, 1, 1),
            assistant(7, 0, 0, 0),
        );
        assert_eq!(last_usage_total(&content), Some(7));
    }

    #[test]
    fn zero_usage_entries_do_not_stop_the_scan() {
        let content = [assistant(50, 0, 0, 50), assistant(0, 0, 0, 0)].join("\n");
        assert_eq!(last_usage_total(&content), Some(100));
    }

    #[test]
    fn null_counters_count_as_zero() {
        let content = [
            assistant(100, 0, 0, 0),
            r#"{"type":"assistant","message":{"usage":{"input_tokens":5000,"cache_creation_input_tokens":null,"cache_read_input_tokens":40000,"output_tokens":7}}}"#.to_string(),
        ]
        .join("\n");
        assert_eq!(last_usage_total(&content), Some(45_007));
    }

    #[test]
    fn null_usage_or_message_is_skipped_not_fatal() {
        let content = [
            assistant(30, 0, 0, 12),
            r#"{"type":"assistant","message":{"usage":null}}"#.to_string(),
            r#"{"type":"assistant","message":null}"#.to_string(),
            r#"{"type":null}"#.to_string(),
        ]
        .join("\n");
        assert_eq!(last_usage_total(&content), Some(42));
    }

    #[test]
    fn non_assistant_usage_is_ignored() {
        let content = r#"{"type":"user","message":{"usage":{"input_tokens":999}}}"#;
        assert_eq!(last_usage_total(content), None);
    }

    #[test]
    fn file_without_assistant_usage_is_zero() {
        let mut f = NamedTempFile::new().unwrap();
        writeln!(f, r#"{{"type":"summary","summary":"x"}}"#).unwrap();
        writeln!(f, r#"{{"type":"user","message":{{"content":"hello"}}}}"#).unwrap();
        assert_eq!(calc_tokens_from_transcript(f.path()), 0);
    }

    #[test]
    fn empty_file_is_zero() {
        let f = NamedTempFile::new().unwrap();
        assert_eq!(calc_tokens_from_transcript(f.path()), 0);
    }

    #[test]
    fn reads_usage_from_file() {
        let mut f = NamedTempFile::new().unwrap();
        writeln!(f, "{}", assistant(3, 4000, 80000, 200)).unwrap();
        writeln!(f, "{{broken").unwrap();
        assert_eq!(calc_tokens_from_transcript(f.path()), 84_203);
    }

    #[test]
    fn warning_threshold_is_inclusive_of_budget() {
        assert!(!is_context_warning(0));
        assert!(!is_context_warning(90_000));
        assert!(is_context_warning(90_001));
    }
}
