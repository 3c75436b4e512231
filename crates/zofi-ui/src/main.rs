//! zofi - main entry point.
//!
//! Loads configuration, builds the selected mode (blocking until
//! discovery finishes), then runs a picker session over stdin/stdout.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use zofi_core::{LauncherConfig, ModeKind};
use zofi_modes::{DiscoveryOptions, LauncherMode, Mode};
use zofi_ui::driver::{self, OutputFormat};
use zofi_ui::{columns_for_width, rows_for_height, InputController, Keymap};

// =============================================================================
// Command Line
// =============================================================================

#[derive(Parser)]
#[command(name = "zofi", version, about = "Pick and run a command or application")]
struct Cli {
    /// Operating mode: "command" runs commands directly, "desktop" runs
    /// desktop applications (default: command)
    #[arg(short = 'm', long = "mode", value_name = "MODE")]
    mode: Option<String>,

    /// Width of the picker (default: 640)
    #[arg(long = "sx", value_name = "WIDTH")]
    width: Option<u32>,

    /// Height of the picker (default: 320)
    #[arg(long = "sy", value_name = "HEIGHT")]
    height: Option<u32>,

    /// Write frames as JSON lines
    #[arg(long)]
    json: bool,

    /// Read configuration from this file instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

// =============================================================================
// Configuration
// =============================================================================

/// Load the config file, falling back to defaults on any error.
fn load_config(path: Option<&PathBuf>) -> LauncherConfig {
    let result = match path {
        Some(path) => LauncherConfig::load_from(path),
        None => LauncherConfig::load(),
    };

    match result {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{} - continuing with default configuration", e);
            LauncherConfig::default()
        }
    }
}

/// Apply command line flags on top of the config file.
fn apply_cli(cli: &Cli, config: &mut LauncherConfig) -> Result<(), zofi_core::ModeError> {
    if let Some(name) = &cli.mode {
        config.mode = name.parse::<ModeKind>()?;
    }
    if let Some(width) = cli.width {
        config.width = width;
    }
    if let Some(height) = cli.height {
        config.height = height;
    }
    Ok(())
}

/// `RUST_LOG` directives if they parse, otherwise info.
fn log_filter(directives: Option<String>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

// =============================================================================
// Entry Point
// =============================================================================

fn main() {
    // Diagnostics go to stderr; stdout carries frames.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(log_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok()))
        .init();

    let cli = Cli::parse();

    let mut config = load_config(cli.config.as_ref());
    if let Err(e) = apply_cli(&cli, &mut config) {
        tracing::error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    let rt = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(rt) => rt,
        Err(e) => {
            tracing::error!("Failed to create tokio runtime: {}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let options = DiscoveryOptions {
        deadline: config.discovery_deadline(),
    };
    let mode = rt.block_on(LauncherMode::load(config.mode, &options));
    tracing::info!("{} mode ready with {} choices", mode.kind(), mode.choices().len());

    let mut keymap = Keymap::default();
    keymap.apply_overrides(&config.keys);

    let mut controller = InputController::new(mode, keymap, rows_for_height(config.height));
    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Plain
    };

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    match driver::run(
        &mut controller,
        stdin.lock(),
        &mut stdout.lock(),
        format,
        columns_for_width(config.width),
    ) {
        Ok(phase) => tracing::debug!("Session ended: {:?}", phase),
        Err(e) => {
            tracing::error!("Session failed: {}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn test_log_filter_honours_rust_log() {
        let filter = log_filter(Some("debug".to_string()));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn test_log_filter_defaults_to_info() {
        assert_eq!(log_filter(None).max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn test_unknown_mode_is_rejected() {
        let cli = Cli::parse_from(["zofi", "-m", "window"]);
        let mut config = LauncherConfig::default();
        assert!(apply_cli(&cli, &mut config).is_err());
    }
}
