//! Terminal output formatting.

use colored::{ColoredString, Colorize};
use codesense_core::analysis::model::{AnalysisResult, Corrections, ScoreBand};

/// Print a full analysis summary.
pub fn print_analysis(result: &AnalysisResult) {
    println!();
    println!("{}", "Code Review".cyan().bold());
    println!();

    println!("{}", "Metrics".bold());
    for (label, score) in result.metrics.labelled() {
        println!("  {:<16} {}", label, score_colored(score));
    }
    if !result.metrics.explanation.is_empty() {
        println!("  {}", result.metrics.explanation.dimmed());
    }

    println!();
    println!("{}", "Sections".bold());
    let sections = [
        ("Architecture", result.structure_analysis.architecture.score),
        ("Error Handling", result.implementation_review.error_handling.score),
        ("Code Style", result.best_practices.code_style.score),
        ("Security", result.best_practices.security.score),
    ];
    for (label, score) in sections {
        println!("  {:<16} {}", label, score_colored(score));
    }

    let perf = &result.implementation_review.performance;
    if !perf.time_complexity.is_empty() || !perf.space_complexity.is_empty() {
        println!(
            "  {:<16} time {}, space {}",
            "Complexity",
            perf.time_complexity,
            perf.space_complexity
        );
    }

    let security = &result.best_practices.security;
    if !security.vulnerabilities.is_empty() {
        println!();
        println!("{}", "Vulnerabilities".bold());
        for vuln in &security.vulnerabilities {
            println!("  {} {}", "!".red().bold(), vuln.issue);
            if !vuln.recommendation.is_empty() {
                println!("    {}", vuln.recommendation.dimmed());
            }
        }
    }

    let recommendations = &result.recommendations;
    if !recommendations.items.is_empty() {
        println!();
        println!(
            "{} {}",
            "Recommendations".bold(),
            format!("(priority: {})", recommendations.priority).dimmed()
        );
        for item in &recommendations.items {
            println!(
                "  {} {} {}",
                severity_colored(&item.severity),
                item.title,
                format!("[{}]", item.category).dimmed()
            );
            if !item.description.is_empty() {
                println!("    {}", item.description);
            }
        }
    }

    print_corrections(&result.corrections);
    println!();
}

fn print_corrections(corrections: &Corrections) {
    if !corrections.has_corrections {
        println!();
        println!("{}", "No corrections suggested.".dimmed());
        return;
    }

    println!();
    println!("{}", "Corrections".bold());
    for change in &corrections.changes {
        println!(
            "  {} {} {}",
            "•".dimmed(),
            change.change_type.yellow(),
            format!("at {}", change.location).dimmed()
        );
        if !change.original.is_empty() {
            println!("    {} {}", "-".red(), change.original);
        }
        if !change.correction.is_empty() {
            println!("    {} {}", "+".green(), change.correction);
        }
    }

    println!();
    println!("{}", "Corrected code".bold());
    println!("{}", "─".repeat(60).dimmed());
    println!("{}", corrections.corrected_code);
    println!("{}", "─".repeat(60).dimmed());
}

/// Score colored by band.
fn score_colored(score: f64) -> ColoredString {
    let text = format_score(score);
    match ScoreBand::of(score) {
        ScoreBand::Good => text.green(),
        ScoreBand::Fair => text.yellow(),
        ScoreBand::Poor => text.red(),
    }
}

fn format_score(score: f64) -> String {
    if score.fract() == 0.0 {
        format!("{:>3}/100", score as i64)
    } else {
        format!("{:>5.1}/100", score)
    }
}

fn severity_colored(severity: &str) -> ColoredString {
    let label = format!("{:<6}", severity.to_uppercase());
    match severity.to_lowercase().as_str() {
        "high" | "critical" => label.red().bold(),
        "medium" => label.yellow(),
        "low" => label.blue(),
        _ => label.normal(),
    }
}
