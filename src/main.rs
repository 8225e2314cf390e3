//! Print the experience section for a language.
//!
//! Usage:
//!   cargo run                 # Language from PORTFOLIO_LANGUAGE (default en)
//!   cargo run -- es           # Override the language
//!   cargo run -- fr --json    # Emit the section view as JSON
//!
//! Environment variables:
//! - SUPABASE_URL, SUPABASE_ANON_KEY (content store)
//! - CONTENT_FIXTURE (optional JSON dump used instead of Supabase)
//! - PORTFOLIO_LANGUAGE (optional, defaults to en)

use anyhow::{Context, Result};
use portfolio_content::config::Config;
use portfolio_content::i18n::Language;
use portfolio_content::loader::{ExperienceLoader, LoadOutcome};
use portfolio_content::section::{render_text, PlaybackProps, SectionView};
use tracing::{debug, info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("portfolio_content=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let as_json = args.iter().any(|arg| arg == "--json");
    let language = match args.iter().find(|arg| !arg.starts_with("--")) {
        Some(code) => Language::from_code(code)?,
        None => config.language,
    };

    info!(
        "Loading experience section in {} ({})",
        language.name(),
        language.native_name()
    );

    let loader = ExperienceLoader::new(config.repository()?);
    match loader.load(language).await {
        LoadOutcome::Applied { count } => info!("Rendering {} experiences", count),
        LoadOutcome::Failed { message } => warn!("Rendering without fresh content: {}", message),
        LoadOutcome::Superseded => warn!("Load was superseded"),
    }
    debug!("{}", loader.metrics().report().format());

    let view = SectionView::build(&loader.snapshot(), language, PlaybackProps::default());

    if as_json {
        let json = serde_json::to_string_pretty(&view).context("Failed to serialize section")?;
        println!("{}", json);
    } else {
        print!("{}", render_text(&view));
    }

    Ok(())
}
