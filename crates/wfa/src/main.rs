//! WFA command-line front-end
//!
//! Exposes the summary form as `wfa summarize` and reports configuration
//! problems with `wfa check-config`.

use anyhow::{Context, Result};
use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use wfa::report::{render_report, summary_json};
use wfa::{Pipeline, RunRequest, DEFAULT_SYSTEM_PROMPT};
use wfa_core::env::load_settings;

#[derive(Parser, Debug)]
#[command(name = "wfa")]
#[command(about = "WFA - create a Confluence summary from a Jira issue using an LLM", long_about = None)]
struct Args {
    /// Env file with service credentials (defaults to ./.env when present)
    #[arg(long, global = true)]
    env_file: Option<PathBuf>,

    /// Log level
    #[arg(short, long, default_value = "info", global = true)]
    log_level: String,

    /// Also write debug logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Summarize a Jira issue into a Confluence page
    Summarize(SummarizeArgs),
    /// Report missing configuration variables
    CheckConfig,
}

#[derive(ClapArgs, Debug)]
struct SummarizeArgs {
    /// Jira issue key, e.g. ABC-123
    #[arg(short = 'k', long)]
    issue_key: String,

    /// Confluence page title
    #[arg(short, long)]
    title: String,

    /// Confluence page ID to update (wins over title lookup)
    #[arg(long)]
    page_id: Option<String>,

    /// Confluence space key (defaults to CONFLUENCE_SPACE_KEY)
    #[arg(short, long)]
    space_key: Option<String>,

    /// System prompt for the model
    #[arg(long, conflicts_with = "prompt_file")]
    prompt: Option<String>,

    /// Read the system prompt from a file
    #[arg(long)]
    prompt_file: Option<PathBuf>,

    /// Print the summary record as well
    #[arg(long)]
    show_summary: bool,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

fn setup_logging(log_level: &str, log_file: Option<&Path>) -> Result<()> {
    use tracing_subscriber::fmt::writer::MakeWriterExt;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    match log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;

            let stderr_writer = std::io::stderr.with_max_level(tracing::Level::INFO);
            let file_writer = file.with_max_level(tracing::Level::DEBUG);

            tracing_subscriber::fmt()
                .with_writer(stderr_writer.and(file_writer))
                .with_env_filter(filter)
                .with_ansi(false)
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_env_filter(filter)
                .init();
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = setup_logging(&args.log_level, args.log_file.as_deref()) {
        eprintln!("WFA failed: {:#}", e);
        return ExitCode::FAILURE;
    }

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Run failed: {:#}", e);
            eprintln!("WFA failed: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<()> {
    let settings = load_settings(args.env_file.as_deref())?;

    match args.command {
        Command::CheckConfig => {
            settings.validate()?;
            println!("Configuration OK.");
            Ok(())
        }
        Command::Summarize(form) => {
            let system_prompt = match (&form.prompt, &form.prompt_file) {
                (Some(prompt), _) => prompt.clone(),
                (None, Some(path)) => std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read prompt file {}", path.display()))?,
                (None, None) => DEFAULT_SYSTEM_PROMPT.to_string(),
            };

            let request = RunRequest::new(
                &form.issue_key,
                &form.title,
                form.page_id,
                form.space_key,
                system_prompt,
            )
            .with_default_space_key(settings.confluence.space_key.as_deref());
            request.validate()?;

            let pipeline = Pipeline::new(&settings)?;
            let report = pipeline.run(&request).await?;

            if form.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
                return Ok(());
            }

            if form.show_summary {
                println!("{}", serde_json::to_string_pretty(&summary_json(&report))?);
            }
            println!("{}", render_report(&report));
            Ok(())
        }
    }
}
