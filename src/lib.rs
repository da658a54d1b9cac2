//! # Status Line
//!
//! Renders the one-line status summary shown under a Claude Code session.
//!
//! ## Overview
//!
//! The hook snapshot piped on stdin is turned into a row of sections:
//! - Working directory, abbreviated relative to the home directory
//! - Git branch (or tag / detached commit) of the session directory
//! - Context usage read from the most recent assistant entry of the transcript
//!
//! ## Features
//!
//! - `git` (default): Enables the git branch section (requires a `git` binary at runtime)
//! - `colors` (default): Enables terminal color output via owo-colors

/// Command-line argument parsing
pub mod cli;

/// Colors, text and JSON output
pub mod display;

/// Git branch resolution (feature-gated)
#[cfg(feature = "git")]
pub mod git;

/// Stderr diagnostics via tracing
pub mod logging;

/// Data models for the hook snapshot, transcript lines and git heads
pub mod models;

/// Statusline sections and the composer that joins them
pub mod sections;

/// Token usage from transcript files
pub mod usage;

/// Utility functions for paths, stdin and formatting
pub mod utils;
