use anyhow::{Context, Result};

use status_line::cli::Args;
use status_line::display::{Theme, print_json_output, print_text_output};
use status_line::models::HookJson;
use status_line::utils::read_stdin;

fn main() -> Result<()> {
    let args = Args::parse();
    if let Err(err) = status_line::logging::init(args.debug) {
        eprintln!("warning: {err:#}");
    }

    let stdin = read_stdin().context("read stdin")?;
    let hook: HookJson = serde_json::from_slice(&stdin).context("parse hook json")?;
    tracing::debug!(
        session = %hook.session_id,
        event = %hook.hook_event_name,
        transcript = %hook.transcript_path,
        "hook snapshot parsed"
    );

    if args.json {
        print_json_output(&hook)?;
    } else {
        print_text_output(&hook, &Theme::from_args(&args));
    }
    Ok(())
}
