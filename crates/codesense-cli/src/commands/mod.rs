//! CLI command definitions and handlers.

use std::time::Duration;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use codesense_core::config::DEFAULT_GEMINI_API_URL;
use codesense_core::UpstreamConfig;

pub mod ping;
pub mod review;
pub mod serve;

/// CodeSense - AI code review through the Gemini API
#[derive(Parser)]
#[command(name = "codesense")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub upstream: UpstreamArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Gemini connection options, shared by every command.
#[derive(Args, Debug, Clone)]
pub struct UpstreamArgs {
    /// Gemini generateContent endpoint
    #[arg(long, global = true, env = "GEMINI_API_URL", default_value = DEFAULT_GEMINI_API_URL)]
    pub gemini_url: String,

    /// Gemini API key
    #[arg(long, global = true, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Timeout for upstream calls, in seconds (default: none)
    #[arg(long, global = true, env = "CODESENSE_UPSTREAM_TIMEOUT", value_name = "SECS")]
    pub upstream_timeout: Option<u64>,
}

impl UpstreamArgs {
    pub fn to_config(&self) -> UpstreamConfig {
        UpstreamConfig::new(self.gemini_url.clone(), self.api_key.clone())
            .with_timeout(self.upstream_timeout.map(Duration::from_secs))
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP API server
    Serve(serve::ServeArgs),

    /// Review a source file (or stdin) from the terminal
    Review(review::ReviewArgs),

    /// Check that the Gemini API is reachable
    Ping,
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        let upstream = self.upstream.to_config();

        match self.command {
            Commands::Serve(args) => serve::execute(args, upstream).await,
            Commands::Review(args) => review::execute(args, upstream).await,
            Commands::Ping => ping::execute(upstream).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_serve_options() {
        let cli = Cli::try_parse_from(["codesense", "serve", "--port", "8080", "--log"]).unwrap();
        let Commands::Serve(args) = cli.command else {
            panic!("expected serve");
        };
        assert_eq!(args.port, 8080);
        assert!(args.log);
        assert_eq!(args.log_file, PathBuf::from("codesense.log"));
    }

    #[test]
    fn test_global_upstream_options() {
        let cli = Cli::try_parse_from([
            "codesense",
            "review",
            "main.py",
            "--api-key",
            "abc",
            "--gemini-url",
            "http://localhost:9000/generate",
            "--upstream-timeout",
            "30",
        ])
        .unwrap();

        let config = cli.upstream.to_config();
        assert_eq!(config.api_url, "http://localhost:9000/generate");
        assert_eq!(config.api_key.as_deref(), Some("abc"));
        assert_eq!(config.timeout, Some(Duration::from_secs(30)));

        let Commands::Review(args) = cli.command else {
            panic!("expected review");
        };
        assert_eq!(args.path, PathBuf::from("main.py"));
        assert!(!args.json);
    }

    #[test]
    fn test_origins_are_comma_separated() {
        let cli = Cli::try_parse_from([
            "codesense",
            "serve",
            "--allowed-origins",
            "http://a.example,http://b.example",
        ])
        .unwrap();
        let Commands::Serve(args) = cli.command else {
            panic!("expected serve");
        };
        assert_eq!(args.allowed_origins, vec!["http://a.example", "http://b.example"]);
    }
}
