//! tripboard - Entry Point

use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tripboard::config::CliOverrides;
use tripboard::state::{FilterMode, RevealMode};
use tripboard::view::format::DisplayZone;

/// tripboard - browse trips from a JSON API in the terminal
#[derive(Parser, Debug)]
#[command(name = "tripboard")]
#[command(version)]
#[command(about = "TUI for browsing paginated, filterable trip records")]
pub struct Args {
    /// Trip endpoint (default http://localhost:5001/data)
    #[arg(long)]
    pub api_url: Option<String>,

    /// Stage filter edits in a modal, or apply them on every keystroke
    #[arg(long, value_parser = ["modal", "inline"])]
    pub filter_mode: Option<String>,

    /// Open detail popovers on hover or on click
    #[arg(long, value_parser = ["hover", "click"])]
    pub reveal_mode: Option<String>,

    /// Show dates in UTC instead of the local zone
    #[arg(long)]
    pub utc: bool,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Overrides for the flags the user actually passed.
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            api_url: self.api_url.clone(),
            filter_mode: self.filter_mode.as_deref().and_then(FilterMode::parse),
            reveal_mode: self.reveal_mode.as_deref().and_then(RevealMode::parse),
            timezone: self.utc.then_some(DisplayZone::Utc),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Set NO_COLOR env var if --no-color flag is passed
    // This ensures consistent color handling throughout the application
    if args.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = tripboard::config::load_config_with_precedence(args.config.clone())?;
        let merged = tripboard::config::merge_config(config_file);
        let with_env = tripboard::config::apply_env_overrides(merged);
        tripboard::config::apply_cli_overrides(with_env, args.overrides())
    };

    tripboard::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let colors = tripboard::view::ColorConfig::from_env_and_args(args.no_color);
    tripboard::view::run_app(&config, colors)?;

    Ok(())
}
