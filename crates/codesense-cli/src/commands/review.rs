//! Terminal code review command.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use codesense_core::analysis::AnalysisResult;
use codesense_core::{ReviewRequest, Reviewer, UpstreamConfig};
use colored::Colorize;

use crate::output;

#[derive(Args)]
pub struct ReviewArgs {
    /// File to review, or `-` for stdin
    pub path: PathBuf,

    /// Print the raw analysis JSON instead of a summary
    #[arg(long)]
    pub json: bool,
}

pub async fn execute(args: ReviewArgs, upstream: UpstreamConfig) -> Result<()> {
    let code = read_source(&args.path)?;
    let request = ReviewRequest::new(code)?;

    if !args.json {
        eprintln!("{} Reviewing {}", "→".dimmed(), args.path.display());
    }

    let reviewer = Reviewer::new(&upstream)?;
    let analysis = reviewer.review(&request).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
        return Ok(());
    }

    match AnalysisResult::from_value(&analysis) {
        Ok(result) => output::print_analysis(&result),
        Err(e) => {
            tracing::warn!(error = %e, "Analysis does not match the typed schema, printing raw JSON");
            println!("{}", serde_json::to_string_pretty(&analysis)?);
        }
    }

    Ok(())
}

fn read_source(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut code = String::new();
        std::io::stdin()
            .read_to_string(&mut code)
            .context("Failed to read code from stdin")?;
        return Ok(code);
    }

    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}
