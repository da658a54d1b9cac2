use std::path::Path;

use crate::display::Theme;
use crate::git::resolve_head;
use crate::models::{GitHead, HookJson, NO_GIT};
use crate::sections::Section;
use crate::utils::resolve_work_dir;

/// GitHub mark followed by the powerline branch symbol.
pub const BRANCH_GLYPHS: &str = "\u{f09b} \u{e0a0}";

/// Current branch, tag or detached commit of the session directory.
pub struct GitBranchSection<'a> {
    hook: &'a HookJson,
}

impl<'a> GitBranchSection<'a> {
    pub fn new(hook: &'a HookJson) -> Self {
        Self { hook }
    }

    fn head(&self) -> Option<GitHead> {
        resolve_work_dir(self.hook).and_then(|dir| resolve_head(Path::new(dir)))
    }
}

/// Text for the section; only real branches carry the glyph prefix.
pub fn head_label(head: Option<&GitHead>) -> String {
    match head {
        Some(GitHead::Branch(name)) => format!("{BRANCH_GLYPHS}{name}"),
        Some(other) => other.to_string(),
        None => NO_GIT.to_string(),
    }
}

impl Section for GitBranchSection<'_> {
    fn name(&self) -> &'static str {
        "git"
    }

    fn render(&self, theme: &Theme) -> String {
        theme.paint(&head_label(self.head().as_ref()), theme.palette.branch)
    }
}
