//! Upstream health check command.

use anyhow::Result;
use codesense_core::{Reviewer, UpstreamConfig};
use colored::Colorize;

pub async fn execute(upstream: UpstreamConfig) -> Result<()> {
    let reviewer = Reviewer::new(&upstream)?;

    match reviewer.ping().await {
        Ok(()) => {
            println!("{} Gemini API is accessible", "✓".green());
            Ok(())
        }
        Err(e) => {
            println!("{} Gemini API is not accessible", "✗".red());
            Err(e.into())
        }
    }
}
