//! Render a member roster as a given viewer would see it.
//!
//! This binary delegates to `member_presentation::preview_cli` for loading
//! and rendering, keeping the behaviour testable without spawning a process.

use std::io::{self, Write};
use std::process::ExitCode;

use camino::Utf8PathBuf;
use clap::Parser;
use member_presentation::PreviewSettings;
use member_presentation::preview_cli::{PreviewError, render_roster, write_preview};
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

/// `member-preview` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "member-preview",
    about = "Render a member roster with masking and avatar colors applied",
    version
)]
struct CliArgs {
    /// Path to the roster JSON file.
    #[arg(long = "roster", value_name = "path")]
    roster: Utf8PathBuf,
    /// Viewer user id. Falls back to `MEMBER_PREVIEW_VIEWER_ID` when omitted.
    #[arg(long = "viewer", value_name = "id")]
    viewer: Option<String>,
    /// Render as an administrator.
    #[arg(long = "admin")]
    admin: bool,
    /// Indent the JSON output.
    #[arg(long = "pretty")]
    pretty: bool,
}

fn main() -> ExitCode {
    let args = CliArgs::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Err(write_err) = writeln!(io::stderr().lock(), "{err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}

fn run(args: &CliArgs) -> Result<(), PreviewError> {
    let settings = PreviewSettings::load()?;
    init_tracing(settings.json_logs);

    let viewer = settings.viewer(args.viewer.as_deref(), args.admin)?;
    let rendered = render_roster(&args.roster, &viewer, args.pretty)?;
    write_preview(&mut io::stdout().lock(), &rendered)
}

fn init_tracing(json_logs: bool) {
    let builder = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr);
    let result = if json_logs {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    if let Err(e) = result {
        warn!(error = %e, "tracing init failed");
    }
}
