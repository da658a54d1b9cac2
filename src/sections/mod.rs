//! # Sections
//!
//! The statusline is a row of independent sections. Each one reads what it
//! needs from the hook snapshot, resolves its own data and returns text that
//! is already styled with the injected [`Theme`].

pub mod context;
#[cfg(feature = "git")]
pub mod git;
pub mod path;

pub use context::ContextSection;
#[cfg(feature = "git")]
pub use git::GitBranchSection;
pub use path::PathSection;

use crate::display::Theme;
use crate::models::HookJson;

/// One piece of the statusline.
///
/// Rendering never fails: a section whose data source is unavailable renders
/// a neutral placeholder instead.
pub trait Section {
    fn name(&self) -> &'static str;
    fn render(&self, theme: &Theme) -> String;
}

/// Ordered set of sections composed into the final line.
pub struct StatusLine<'a> {
    sections: Vec<Box<dyn Section + 'a>>,
}

impl<'a> StatusLine<'a> {
    /// Default layout: path, git branch, context usage.
    pub fn new(hook: &'a HookJson) -> Self {
        let mut sections: Vec<Box<dyn Section + 'a>> = Vec::with_capacity(3);
        sections.push(Box::new(PathSection::new(hook)));
        #[cfg(feature = "git")]
        sections.push(Box::new(GitBranchSection::new(hook)));
        #[cfg(not(feature = "git"))]
        sections.push(Box::new(NoGitSection));
        sections.push(Box::new(ContextSection::new(hook)));
        Self { sections }
    }

    pub fn with_sections(sections: Vec<Box<dyn Section + 'a>>) -> Self {
        Self { sections }
    }

    pub fn section_names(&self) -> Vec<&'static str> {
        self.sections.iter().map(|s| s.name()).collect()
    }

    /// Leading reset, then ` <section><reset>` for every section.
    pub fn render(&self, theme: &Theme) -> String {
        let reset = theme.reset();
        let mut line = String::from(reset);
        for section in &self.sections {
            let text = section.render(theme);
            tracing::debug!(section = section.name(), text = %text, "rendered section");
            line.push(' ');
            line.push_str(&text);
            line.push_str(reset);
        }
        line
    }
}

/// Stand-in for the git section when the `git` feature is compiled out.
#[cfg(not(feature = "git"))]
struct NoGitSection;

#[cfg(not(feature = "git"))]
impl Section for NoGitSection {
    fn name(&self) -> &'static str {
        "git"
    }

    fn render(&self, theme: &Theme) -> String {
        theme.paint(crate::models::NO_GIT, theme.palette.branch)
    }
}
