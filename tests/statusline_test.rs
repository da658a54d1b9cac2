use std::io::Write;

use status_line::display::Theme;
use status_line::models::HookJson;
use status_line::sections::StatusLine;
use tempfile::{NamedTempFile, TempDir};

fn transcript(lines: &[&str]) -> NamedTempFile {
    let mut f = NamedTempFile::new().unwrap();
    for line in lines {
        writeln!(f, "{line}").unwrap();
    }
    f
}

#[test]
fn plain_line_for_non_repo_without_transcript() {
    let hook: HookJson = serde_json::from_str(r#"{"cwd": "/non/existent/dir", "transcript_path": ""}"#).unwrap();
    let line = StatusLine::new(&hook).render(&Theme::plain());
    assert_eq!(line, " /non/existent/dir No Git 0/90k");
}

#[test]
fn context_reflects_latest_assistant_usage() {
    let dir = TempDir::new().unwrap();
    let t = transcript(&[
        r#"{"type":"assistant","message":{"usage":{"input_tokens":10,"output_tokens":5}}}"#,
        r#"{"type":"user","message":{"content":"next"}}"#,
        r#"{"type":"assistant","message":{"usage":{"input_tokens":4,"cache_creation_input_tokens":1200,"cache_read_input_tokens":91000,"output_tokens":150}}}"#,
        r#"{"type":"assistant","message":"#,
    ]);
    let mut hook = HookJson::default();
    hook.cwd = dir.path().to_string_lossy().into_owned();
    hook.transcript_path = t.path().to_string_lossy().into_owned();

    let line = StatusLine::new(&hook).render(&Theme::plain());
    assert!(line.ends_with(" No Git 92.4K/90k"), "got {line:?}");

    if cfg!(feature = "colors") {
        let colored = StatusLine::new(&hook).render(&Theme::colored());
        assert!(colored.starts_with("\x1b[0m "));
        assert!(colored.ends_with("\x1b[0m"));
        assert!(colored.contains("\x1b[38;2;205;66;119m92.4K/90k"), "got {colored:?}");
    }
}

#[test]
fn line_is_single_line() {
    let hook = HookJson::default();
    let line = StatusLine::new(&hook).render(&Theme::colored());
    assert!(!line.contains('\n'));
}
