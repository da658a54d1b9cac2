use std::path::Path;

use crate::display::Theme;
use crate::models::HookJson;
use crate::sections::Section;
use crate::usage::{CONTEXT_WARN_TOKENS, calc_tokens_from_transcript, is_context_warning};
use crate::utils::format_tokens;

/// Context window usage taken from the latest transcript entry.
pub struct ContextSection<'a> {
    hook: &'a HookJson,
}

impl<'a> ContextSection<'a> {
    pub fn new(hook: &'a HookJson) -> Self {
        Self { hook }
    }
}

/// `<tokens>/90k`, with the budget derived from the warning threshold.
pub fn context_label(tokens: u64) -> String {
    format!("{}/{}k", format_tokens(tokens), CONTEXT_WARN_TOKENS / 1000)
}

/// Renders an already computed token total.
pub fn render_tokens(tokens: u64, theme: &Theme) -> String {
    let color = if is_context_warning(tokens) {
        theme.palette.context_warning
    } else {
        theme.palette.context_safe
    };
    theme.paint(&context_label(tokens), color)
}

impl Section for ContextSection<'_> {
    fn name(&self) -> &'static str {
        "context"
    }

    fn render(&self, theme: &Theme) -> String {
        let tokens = calc_tokens_from_transcript(Path::new(&self.hook.transcript_path));
        render_tokens(tokens, theme)
    }
}
