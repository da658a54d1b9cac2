use std::io::Read;
use std::path::{Path, PathBuf};

use crate::models::HookJson;

/// Nerd Font folder glyph shown in front of home-relative paths.
pub const HOME_GLYPH: char = '\u{f07b}';

/// Token totals below this are printed as plain integers.
pub const TOKEN_COMPACT_THRESHOLD: u64 = 2_000;

pub fn read_stdin() -> anyhow::Result<Vec<u8>> {
    let mut buf = Vec::new();
    std::io::stdin().read_to_end(&mut buf)?;
    Ok(buf)
}

/// Directory the session is working in: the workspace's current dir when
/// reported, otherwise the raw `cwd`. Both the path and git sections use it.
pub fn resolve_work_dir(hook: &HookJson) -> Option<&str> {
    [hook.workspace.current_dir.as_str(), hook.cwd.as_str()]
        .into_iter()
        .find(|d| !d.is_empty())
}

pub fn home_dir() -> Option<PathBuf> {
    let home = directories::BaseDirs::new().map(|b| b.home_dir().to_path_buf());
    if home.is_none() {
        tracing::debug!("home directory could not be resolved");
    }
    home
}

pub fn format_path(hook: &HookJson) -> String {
    match resolve_work_dir(hook) {
        Some(dir) => format_path_with_home(dir, home_dir().as_deref()),
        None => "~".to_string(),
    }
}

/// Replaces a leading home directory with the folder glyph and `~`.
///
/// The prefix is matched per path component, so a sibling such as
/// `/home/alice2` is left alone when home is `/home/alice`. The text after
/// the prefix is kept verbatim, trailing slash included.
pub fn format_path_with_home(p: &str, home: Option<&Path>) -> String {
    let Some(home) = home.filter(|h| !h.as_os_str().is_empty()) else {
        return p.to_owned();
    };
    let home_s = home.to_string_lossy();
    let home_s = home_s.trim_end_matches('/');
    match p.strip_prefix(home_s) {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => {
            format!("{HOME_GLYPH} ~{rest}")
        }
        _ => p.to_owned(),
    }
}

pub fn format_tokens(n: u64) -> String {
    if n >= TOKEN_COMPACT_THRESHOLD {
        format!("{:.1}K", n as f64 / 1e3)
    } else {
        n.to_string()
    }
}
