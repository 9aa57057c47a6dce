//! CodeSense CLI
//!
//! Runs the review relay server, or a single review from the terminal.

use anyhow::Result;
use clap::Parser;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod output;

use commands::{Cli, Commands};

/// Initialize tracing.
///
/// The server logs to stdout, and also to `log_file` when given. Terminal
/// commands log warnings to stderr only, so `--json` output stays clean.
fn init_tracing(log_file: Option<&std::path::Path>, server: bool) -> Option<WorkerGuard> {
    let default_filter = if server {
        "codesense=info,codesense_web=debug,codesense_core=debug"
    } else {
        "codesense=warn,codesense_core=warn"
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    if let Some(path) = log_file {
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| std::path::Path::new("."));
        let file_name = path
            .file_name()
            .unwrap_or_else(|| std::ffi::OsStr::new("codesense.log"));
        let (writer, guard) =
            tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name));

        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(writer)
                    .with_ansi(false),
            )
            .init();
        Some(guard)
    } else if server {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
        None
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
        None
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Variables already set in the environment win over .env
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let (server, log_file) = match &cli.command {
        Commands::Serve(args) => (true, args.log.then(|| args.log_file.clone())),
        _ => (false, None),
    };
    let _guard = init_tracing(log_file.as_deref(), server);

    cli.execute().await
}
