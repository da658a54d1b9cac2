use std::env;
use std::path::Path;

use anyhow::Context;
#[cfg(feature = "colors")]
use owo_colors::OwoColorize;

use crate::cli::Args;
use crate::models::{GitHead, HookJson, NO_GIT};
use crate::sections::StatusLine;
use crate::usage::{CONTEXT_WARN_TOKENS, calc_tokens_from_transcript, is_context_warning};
use crate::utils::{format_path, format_tokens, resolve_work_dir};

/// Terminal SGR reset.
pub const RESET: &str = "\x1b[0m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Section colors.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub path: Rgb,
    pub branch: Rgb,
    pub context_safe: Rgb,
    pub context_warning: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            path: Rgb(12, 160, 216),            // #0CA0D8
            branch: Rgb(20, 165, 174),          // #14A5AE
            context_safe: Rgb(69, 241, 194),    // #45F1C2
            context_warning: Rgb(205, 66, 119), // #CD4277
        }
    }
}

/// Colors plus the switch deciding whether escape sequences are emitted at all.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub palette: Palette,
    colored: bool,
}

impl Theme {
    /// Truecolor output; falls back to plain when built without `colors`.
    pub fn colored() -> Self {
        Self {
            palette: Palette::default(),
            colored: cfg!(feature = "colors"),
        }
    }

    pub fn plain() -> Self {
        Self {
            palette: Palette::default(),
            colored: false,
        }
    }

    /// Respects `--no-color` and the NO_COLOR convention.
    pub fn from_args(args: &Args) -> Self {
        if args.no_color || env::var_os("NO_COLOR").is_some() {
            Self::plain()
        } else {
            Self::colored()
        }
    }

    pub fn reset(&self) -> &'static str {
        if self.colored { RESET } else { "" }
    }

    pub fn paint(&self, text: &str, color: Rgb) -> String {
        if !self.colored {
            return text.to_string();
        }
        #[cfg(feature = "colors")]
        {
            let Rgb(r, g, b) = color;
            text.truecolor(r, g, b).to_string()
        }
        #[cfg(not(feature = "colors"))]
        {
            let _ = color;
            text.to_string()
        }
    }
}

/// Values behind the sections, gathered once for machine-readable output.
#[derive(Debug, Clone)]
pub struct StatusData {
    pub path: String,
    pub git: Option<GitHead>,
    pub tokens: u64,
}

impl StatusData {
    pub fn collect(hook: &HookJson) -> Self {
        #[cfg(feature = "git")]
        let git = resolve_work_dir(hook).and_then(|d| crate::git::resolve_head(Path::new(d)));
        #[cfg(not(feature = "git"))]
        let git = None;
        Self {
            path: format_path(hook),
            git,
            tokens: calc_tokens_from_transcript(Path::new(&hook.transcript_path)),
        }
    }
}

fn none_if_empty(s: &str) -> Option<&str> {
    if s.is_empty() { None } else { Some(s) }
}

pub fn build_json_output(hook: &HookJson, data: &StatusData) -> serde_json::Value {
    let git = match data.git.as_ref() {
        Some(head) => serde_json::json!({
            "label": head.to_string(),
            "kind": head.kind(),
        }),
        None => serde_json::json!({
            "label": NO_GIT,
            "kind": serde_json::Value::Null,
        }),
    };

    serde_json::json!({
        "model": {
            "id": hook.model.id,
            "display_name": hook.model.display_name,
        },
        "cwd": resolve_work_dir(hook),
        "project_dir": none_if_empty(&hook.workspace.project_dir),
        "version": none_if_empty(&hook.version),
        "output_style": none_if_empty(&hook.output_style.name).map(|n| serde_json::json!({ "name": n })),
        "path": data.path,
        "git": git,
        "context": {
            "tokens": data.tokens,
            "display": format_tokens(data.tokens),
            "limit": CONTEXT_WARN_TOKENS,
            "warning": is_context_warning(data.tokens),
        },
        "cost": {
            "total_cost_usd": hook.cost.total_cost_usd,
            "total_duration_ms": hook.cost.total_duration_ms,
            "total_api_duration_ms": hook.cost.total_api_duration_ms,
            "lines_added": hook.cost.total_lines_added,
            "lines_removed": hook.cost.total_lines_removed,
        },
    })
}

pub fn print_json_output(hook: &HookJson) -> anyhow::Result<()> {
    let data = StatusData::collect(hook);
    let json = build_json_output(hook, &data);
    let line = serde_json::to_string(&json).context("serialize statusline json")?;
    println!("{line}");
    Ok(())
}

pub fn print_text_output(hook: &HookJson, theme: &Theme) {
    println!("{}", StatusLine::new(hook).render(theme));
}
