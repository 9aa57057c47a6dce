//! Web server command.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use codesense_core::UpstreamConfig;
use codesense_web::{ServerConfig, DEFAULT_ALLOWED_ORIGINS};
use colored::Colorize;

#[derive(Args)]
pub struct ServeArgs {
    /// Host to bind to
    #[arg(long, env = "CODESENSE_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value = "5000")]
    pub port: u16,

    /// Origins allowed to call the API from a browser (comma separated)
    #[arg(
        long,
        env = "CODESENSE_ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_values = DEFAULT_ALLOWED_ORIGINS
    )]
    pub allowed_origins: Vec<String>,

    /// Also write logs to a file
    #[arg(long)]
    pub log: bool,

    /// Log file used with --log
    #[arg(long, default_value = "codesense.log")]
    pub log_file: PathBuf,
}

pub async fn execute(args: ServeArgs, upstream: UpstreamConfig) -> Result<()> {
    println!();
    println!("  {} {}", "CodeSense".cyan().bold(), "API Server".bold());
    println!();
    println!("  {}  http://{}:{}/review", "Review".green(), args.host, args.port);
    println!("  {}    http://{}:{}/ping", "Ping".green(), args.host, args.port);
    if upstream.api_key.is_none() {
        println!();
        println!("  {} GEMINI_API_KEY is not set", "Warning:".yellow().bold());
    }
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    codesense_web::run_server(ServerConfig {
        host: args.host,
        port: args.port,
        allowed_origins: args.allowed_origins,
        upstream,
    })
    .await
}
