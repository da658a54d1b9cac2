#[derive(clap::Parser, Debug, Default)]
#[command(version, about = "Single-line statusline for Claude Code sessions")]
pub struct Args {
    /// Emit JSON instead of colored text
    #[arg(long)]
    pub json: bool,

    /// Disable colors (NO_COLOR is honored as well)
    #[arg(long)]
    pub no_color: bool,

    /// Debug mode: log section resolution details to stderr
    #[arg(long, env = "CLAUDE_DEBUG")]
    pub debug: bool,
}

impl Args {
    pub fn parse() -> Self {
        <Args as clap::Parser>::parse()
    }
}
