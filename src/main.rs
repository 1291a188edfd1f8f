//! County Court Records Search - Entry Point

use clap::Parser;
use courtview::config;
use courtview::model::CourtType;
use courtview::provider::{
    FileRecords, GeminiSummarizer, ProviderHandle, RecordsProvider, SimulatedRecords, Summarizer,
    TemplateSummarizer,
};
use courtview::state::FilterForm;
use courtview::view::{restore_terminal, AppStyles, ColorConfig, TuiApp};
use std::path::PathBuf;
use tracing::{info, warn};

/// County Court Records Search - TUI for browsing public court records
#[derive(Parser, Debug)]
#[command(name = "courtview")]
#[command(version)]
#[command(about = "TUI for searching and summarizing public county court records")]
pub struct Args {
    /// Path to a JSON records dataset (built-in simulated records if omitted)
    pub records: Option<PathBuf>,

    /// Seed the party name filter
    #[arg(short, long)]
    pub name: Option<String>,

    /// Seed the case number filter
    #[arg(long)]
    pub case_number: Option<String>,

    /// Seed the county filter
    #[arg(long, value_parser = ["Adams", "Franklin", "Hamilton"])]
    pub county: Option<String>,

    /// Seed the status filter
    #[arg(long, value_parser = ["Active", "Pending", "Closed"])]
    pub status: Option<String>,

    /// Seed the court type filter
    #[arg(
        long,
        value_parser = ["Clerk of Courts", "Common Pleas Court", "County Court", "Probate Court"]
    )]
    pub court_type: Option<String>,

    /// Seed the filing date range start (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<String>,

    /// Seed the filing date range end (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<String>,

    /// Summarizer model name
    #[arg(long)]
    pub model: Option<String>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Build the initial filter form from CLI arguments.
fn seed_form(args: &Args) -> FilterForm {
    FilterForm {
        name: args.name.clone().unwrap_or_default(),
        case_number: args.case_number.clone().unwrap_or_default(),
        court_type: args.court_type.as_deref().and_then(CourtType::from_name),
        county: args
            .county
            .as_deref()
            .and_then(|c| courtview::model::COUNTIES.iter().find(|k| **k == c))
            .copied(),
        status: args
            .status
            .as_deref()
            .and_then(|s| courtview::model::CASE_STATUSES.iter().find(|k| **k == s))
            .copied(),
        start_date: args.from.clone().unwrap_or_default(),
        end_date: args.to.clone().unwrap_or_default(),
        ..Default::default()
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Set NO_COLOR env var if --no-color flag is passed, so color handling
    // is consistent throughout the application.
    if args.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = config::load_config_with_precedence(args.config.clone())?;
        let merged = config::merge_config(config_file);
        let with_env = config::apply_env_overrides(merged);
        config::apply_cli_overrides(with_env, args.model.clone())
    };

    courtview::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    let records: Box<dyn RecordsProvider + Send> = match &args.records {
        Some(path) => Box::new(FileRecords::load(path)?),
        None => Box::new(SimulatedRecords::new()),
    };

    let summarizer: Box<dyn Summarizer + Send> = match GeminiSummarizer::new(
        &config.summarizer_endpoint,
        &config.summarizer_model,
        &config.api_key_env,
    ) {
        Ok(gemini) => Box::new(gemini),
        Err(err) => {
            warn!(error = %err, "falling back to the offline template summarizer");
            Box::new(TemplateSummarizer)
        }
    };

    let provider = ProviderHandle::spawn(records, summarizer);
    let styles = AppStyles::new(ColorConfig::from_env_and_args(args.no_color));

    let result = TuiApp::new(provider, seed_form(&args), styles).and_then(|mut app| app.run());

    // Always restore terminal state, even when the event loop errored.
    restore_terminal()?;
    result?;

    Ok(())
}
