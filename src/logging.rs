//! Tracing subscriber initialization.
//!
//! Stdout carries the statusline itself, so diagnostics always go to stderr.
//! Nothing is logged unless `--debug`/`CLAUDE_DEBUG` or `RUST_LOG` asks for it.

use anyhow::anyhow;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is not set.
pub fn default_directive(debug: bool) -> &'static str {
    if debug { "status_line=debug" } else { "off" }
}

pub fn init(debug: bool) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(debug)));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("tracing subscriber already initialized: {e}"))
}
