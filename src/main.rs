//! SentiFeel - feel the sentiment of your words, live in the terminal
//!
//! This is the binary entry point. All logic lives in the workspace crates.

mod headless;

use std::path::PathBuf;

use clap::Parser;
use sentifeel_app::config::{self, ThemeMode};
use sentifeel_core::{logging, Error};

/// SentiFeel - debounced sentiment analysis of what you type
#[derive(Parser, Debug)]
#[command(name = "sentifeel")]
#[command(about = "Discover the emotion in your words", long_about = None)]
struct Args {
    /// Settings file (default: <config_dir>/sentifeel/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Start in the light theme
    #[arg(long)]
    light: bool,

    /// Run in headless mode (NDJSON output, no TUI)
    #[arg(long)]
    headless: bool,

    /// Text to analyze in headless mode (default: read stdin)
    #[arg(long, value_name = "TEXT", requires = "headless")]
    text: Option<String>,

    /// Write a commented default config file and exit
    #[arg(long)]
    init_config: bool,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    logging::init()?;

    if args.init_config {
        let path = args
            .config
            .clone()
            .or_else(config::default_config_path)
            .ok_or_else(|| Error::config("No config directory on this platform"))?;
        config::init_config_file(&path)?;
        println!("Config file: {}", path.display());
        return Ok(());
    }

    let mut settings = config::resolve_settings(args.config.as_deref())?;
    if args.light {
        settings.ui.theme = ThemeMode::Light;
    }

    if args.headless {
        headless::runner::run_headless(settings, args.text).await?;
    } else {
        sentifeel_tui::run(settings).await?;
    }

    Ok(())
}
