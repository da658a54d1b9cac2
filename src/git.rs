//! # Git Module
//!
//! Resolves a display label for the checked-out `HEAD` of a working directory
//! by shelling out to `git`.
//!
//! Resolution is a priority-ordered probe chain. Each probe runs one git
//! subcommand and yields a [`GitHead`] only for a successful, non-empty
//! answer; the first probe that answers wins. A missing `git` binary, a
//! non-repository directory or a failing subcommand all end in
//! [`NO_GIT`] rather than an error.

use std::path::Path;
use std::process::Command;

use crate::models::GitHead;
pub use crate::models::NO_GIT;

/// A single step of the resolution chain.
pub type Probe = fn(&Path) -> Option<GitHead>;

/// Probes in priority order.
pub const BRANCH_PROBES: [Probe; 4] = [show_current, symbolic_ref, exact_tag, short_commit];

/// Branch/tag/commit label for `work_dir`, or [`NO_GIT`].
pub fn resolve_branch(work_dir: &Path) -> String {
    resolve_head(work_dir)
        .map(|head| head.to_string())
        .unwrap_or_else(|| NO_GIT.to_string())
}

pub fn resolve_head(work_dir: &Path) -> Option<GitHead> {
    resolve_head_with(work_dir, &BRANCH_PROBES)
}

/// Runs `probes` in order against `work_dir` after the cheap filesystem checks.
pub fn resolve_head_with(work_dir: &Path, probes: &[Probe]) -> Option<GitHead> {
    if work_dir.as_os_str().is_empty() || !work_dir.is_dir() {
        tracing::debug!(dir = %work_dir.display(), "git: directory missing");
        return None;
    }
    // `.git` is a file inside linked worktrees and submodules
    if !work_dir.join(".git").exists() {
        tracing::debug!(dir = %work_dir.display(), "git: no .git entry");
        return None;
    }
    probes.iter().find_map(|probe| probe(work_dir))
}

pub fn show_current(dir: &Path) -> Option<GitHead> {
    run_git(dir, &["branch", "--show-current"]).map(GitHead::Branch)
}

pub fn symbolic_ref(dir: &Path) -> Option<GitHead> {
    run_git(dir, &["symbolic-ref", "--short", "HEAD"]).map(GitHead::Branch)
}

pub fn exact_tag(dir: &Path) -> Option<GitHead> {
    run_git(dir, &["describe", "--tags", "--exact-match"]).map(GitHead::Tag)
}

pub fn short_commit(dir: &Path) -> Option<GitHead> {
    run_git(dir, &["rev-parse", "--short", "HEAD"]).map(GitHead::Detached)
}

/// Trimmed stdout of `git <args>` run inside `dir`, if it succeeded with output.
fn run_git(dir: &Path, args: &[&str]) -> Option<String> {
    let output = match Command::new("git").args(args).current_dir(dir).output() {
        Ok(output) => output,
        Err(err) => {
            tracing::debug!(?args, %err, "git: failed to spawn");
            return None;
        }
    };
    if !output.status.success() {
        tracing::debug!(?args, status = %output.status, "git: probe failed");
        return None;
    }
    let out = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if out.is_empty() {
        tracing::debug!(?args, "git: probe returned nothing");
        return None;
    }
    Some(out)
}
