//! Operator CLI for previewing and dry-running narrative scrubs.
//!
//! Reads a JSON file with the Account graph, the draft page content, and any
//! custom org mappings, then either previews the scrub or runs the full
//! gated publish pipeline. Lets an operator test a custom-mapping fix
//! against a draft before retrying a failed publish.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use serde::Deserialize;
use std::path::PathBuf;

use scrubbing::{build_term_catalog, publish_scrub, scrub_page, Account, PageContent, PublishError};

#[derive(Parser)]
#[command(name = "scrub")]
#[command(about = "Preview and dry-run identity scrubbing for narrative pages")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the scrubbed output and which terms were hit (no safety gates)
    Preview {
        /// JSON file with account, content, and custom_mappings
        file: PathBuf,
    },

    /// Run the full publish pipeline and report the verdict
    Publish {
        file: PathBuf,

        /// Emit the scrubbed page as JSON on success
        #[arg(long)]
        json: bool,
    },

    /// List the term catalog that would be applied
    Terms { file: PathBuf },
}

/// Input document for every subcommand.
#[derive(Deserialize)]
struct ScrubInput {
    account: Account,
    content: PageContent,
    #[serde(default)]
    custom_mappings: Vec<(String, String)>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,scrubbing=info".into()),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Preview { file } => preview(&load_input(&file)?),
        Commands::Publish { file, json } => publish(&load_input(&file)?, json),
        Commands::Terms { file } => terms(&load_input(&file)?),
    }
}

fn load_input(path: &PathBuf) -> Result<ScrubInput> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("failed to parse {}", path.display()))
}

fn preview(input: &ScrubInput) -> Result<()> {
    let scrubbed = scrub_page(&input.account, &input.custom_mappings, &input.content);

    println!(
        "{} {} replacement(s) across {} term(s)",
        "Preview:".bright_cyan().bold(),
        scrubbed.replacements_made,
        scrubbed.terms_replaced.len()
    );
    for term in &scrubbed.terms_replaced {
        println!("  {} {}", "scrubbed".yellow(), term);
    }
    println!();
    for (field, text) in scrubbed.content.fragments() {
        println!("{}", field.bright_blue());
        println!("{text}");
        println!();
    }
    println!(
        "{}",
        "Preview only — run `scrub publish` for the gated verdict.".dimmed()
    );
    Ok(())
}

fn publish(input: &ScrubInput, json: bool) -> Result<()> {
    match publish_scrub(&input.account, &input.custom_mappings, &input.content) {
        Ok(scrubbed) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&scrubbed)?);
            } else {
                println!(
                    "{} {} replacement(s), no residual identifiers",
                    "Cleared for publish:".bright_green().bold(),
                    scrubbed.replacements_made
                );
            }
            Ok(())
        }
        Err(PublishError::Validation { phase, issues }) => {
            println!(
                "{} {} structural issue(s) ({phase})",
                "Blocked:".bright_red().bold(),
                issues.len()
            );
            for issue in issues {
                println!("  {} [{}] {}", issue.field.yellow(), issue.code, issue.message);
            }
            std::process::exit(1);
        }
        Err(PublishError::Leakage(leak)) => {
            println!(
                "{} identifiers survived scrubbing",
                "LEAKAGE:".bright_red().bold()
            );
            for term in &leak.leaked_terms {
                println!("  {}", term.red());
            }
            println!("Extend the custom mappings for these terms and retry.");
            std::process::exit(1);
        }
    }
}

fn terms(input: &ScrubInput) -> Result<()> {
    let catalog = build_term_catalog(&input.account, &input.custom_mappings);

    println!("{}", "Domain terms (substring, applied first):".bright_cyan());
    for term in &catalog.domain_terms {
        println!("  {} -> {}", term.label.yellow(), term.replacement_text());
    }
    println!("{}", "Name terms (word-boundary, longest first):".bright_cyan());
    for term in &catalog.name_terms {
        println!("  {} -> {}", term.label.yellow(), term.replacement_text());
    }
    Ok(())
}
