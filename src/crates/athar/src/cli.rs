//! Command-line interface.
//!
//! Three subcommands map onto the flow: `configure` runs the credential
//! transaction, `ideas` runs phase 1 only, and `generate` runs the full
//! explore/select/expand sequence and writes both artifacts to disk
//! (the artifact sink of this build).

use crate::error::{AtharError, Result};
use crate::pipeline::Pipeline;
use crate::store::FileCredentialStore;
use crate::transaction::CredentialTransaction;
use athar_core::{Credentials, Language, ProviderKind};
use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::ProgressBar;
use llm::Generator;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "athar")]
#[command(about = "ATHAR - turn a development vision into a donor-ready proposal", long_about = None)]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Test and store AI provider credentials
    Configure {
        /// Provider backend: openai, gemini, groq, openrouter
        #[arg(short, long)]
        provider: String,
        /// API secret key
        #[arg(short, long)]
        key: String,
        /// Proxy endpoint standing in for the vendor API (gemini only)
        #[arg(long)]
        bridge: Option<String>,
    },

    /// Explore a vision into candidate project ideas (phase 1)
    Ideas {
        /// Project vision/description
        #[arg(long)]
        vision: String,
        /// Target country
        #[arg(long)]
        country: String,
        /// Output language: ar or en
        #[arg(long, default_value = "ar")]
        lang: String,
    },

    /// Run the full flow: explore, select one idea, expand, export
    Generate {
        /// Project vision/description
        #[arg(long)]
        vision: String,
        /// Target country
        #[arg(long)]
        country: String,
        /// Id of the idea to expand (e.g. "idea-2")
        #[arg(long)]
        select: String,
        /// Output language: ar or en
        #[arg(long, default_value = "ar")]
        lang: String,
        /// Directory the artifacts are written into
        #[arg(long, default_value = ".")]
        out: PathBuf,
    },
}

/// Dispatch a parsed command line.
pub async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Configure {
            provider,
            key,
            bridge,
        } => configure(&provider, &key, bridge).await,
        Commands::Ideas {
            vision,
            country,
            lang,
        } => ideas(&vision, &country, &lang).await,
        Commands::Generate {
            vision,
            country,
            select,
            lang,
            out,
        } => generate(&vision, &country, &select, &lang, &out).await,
    }
}

async fn configure(provider: &str, key: &str, bridge: Option<String>) -> Result<()> {
    let kind: ProviderKind = provider
        .parse()
        .map_err(|e: athar_core::ParseProviderError| AtharError::InvalidArgument(e.to_string()))?;

    let mut candidate = Credentials::new(kind, key.trim());
    if let Some(bridge) = bridge {
        if !bridge.trim().is_empty() {
            candidate = candidate.with_proxy(bridge.trim());
        }
    }

    let store = FileCredentialStore::open_default()?;
    let probe = Generator::from_credentials(&candidate);

    let busy = spinner("Testing connection...");
    let outcome = CredentialTransaction::new(&store)
        .test_and_commit(&candidate, &probe)
        .await;
    busy.finish_and_clear();

    match outcome {
        Ok(()) => {
            println!(
                "{} {} credentials saved to {}",
                "OK".green().bold(),
                kind,
                store.path().display()
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("{} {}", "FAILED".red().bold(), e);
            std::process::exit(1);
        }
    }
}

async fn ideas(vision: &str, country: &str, lang: &str) -> Result<()> {
    let lang = parse_lang(lang)?;
    let model = active_generator()?;
    let mut pipeline = Pipeline::new();

    let busy = spinner("Analyzing development context...");
    let outcome = pipeline.explore(&model, vision, country, lang).await;
    busy.finish_and_clear();
    outcome?;

    print_ideas(&pipeline);
    println!(
        "\nRun {} to expand one of them.",
        "athar generate --select <id> ...".bold()
    );
    Ok(())
}

async fn generate(
    vision: &str,
    country: &str,
    select: &str,
    lang: &str,
    out: &PathBuf,
) -> Result<()> {
    let lang = parse_lang(lang)?;
    let model = active_generator()?;
    let mut pipeline = Pipeline::new();

    let busy = spinner("Analyzing development context...");
    let outcome = pipeline.explore(&model, vision, country, lang).await;
    busy.finish_and_clear();
    outcome?;
    print_ideas(&pipeline);

    let busy = spinner("Drafting technical proposal and budget...");
    let outcome = pipeline.expand(&model, select, country, lang).await;
    busy.finish_and_clear();
    outcome?;

    let proposal = pipeline.proposal()?;
    println!("\n{}", proposal.title.bold());
    println!(
        "{} goals, {} activities, {} budget lines",
        proposal.specific_goals.len(),
        proposal.activities.len(),
        proposal.budget.len()
    );
    // Display-only: the workbook itself carries no aggregate row.
    println!("Total budget: ${:.2}", proposal.grand_total());

    std::fs::create_dir_all(out)?;
    for artifact in [
        pipeline.export_document(lang)?,
        pipeline.export_workbook(lang)?,
    ] {
        let path = out.join(&artifact.filename);
        std::fs::write(&path, &artifact.bytes)?;
        println!("{} {}", "Wrote".green(), path.display());
    }
    Ok(())
}

fn print_ideas(pipeline: &Pipeline) {
    for idea in pipeline.ideas() {
        println!(
            "{} [{}] {} ({})",
            idea.id.bold(),
            idea.sector,
            idea.name,
            idea.target_group
        );
        println!("    {}", idea.description);
    }
}

fn parse_lang(lang: &str) -> Result<Language> {
    lang.parse()
        .map_err(|e: athar_core::ParseLanguageError| AtharError::InvalidArgument(e.to_string()))
}

/// Build the adapter for the stored credentials, or direct the user to
/// `athar configure`.
fn active_generator() -> Result<Generator> {
    let store = FileCredentialStore::open_default()?;
    let credentials = store.load()?.ok_or(AtharError::NotConfigured)?;
    Ok(Generator::from_credentials(&credentials))
}

/// The busy indicator gating re-submission while a call is outstanding.
fn spinner(message: &'static str) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    bar.set_message(message);
    bar.enable_steady_tick(Duration::from_millis(100));
    bar
}
