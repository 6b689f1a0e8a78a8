use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use voice_scheduler_assets::config::AssetsConfig;
use voice_scheduler_assets::{exporter, icon, screenshots, splash};

#[derive(Parser)]
#[command(name = "voice-scheduler-assets")]
#[command(about = "Generate VoiceScheduler app icons, splash assets and App Store screenshots", long_about = None)]
struct Cli {
    /// Directory the asset paths are resolved against
    #[arg(long, global = true, default_value = ".")]
    root: PathBuf,
    /// YAML config file (defaults to <root>/assets.yaml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the app icon set and its Contents.json
    Icon,
    /// Generate the splash logo image set and background colorset
    Splash,
    /// Generate the five App Store screenshots
    Screenshots,
    /// Generate everything (default)
    All,
    /// Verify generated assets against their manifests
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AssetsConfig::load(path)?,
        None => AssetsConfig::load_or_default(&cli.root)?,
    };

    match cli.command.unwrap_or(Commands::All) {
        Commands::Icon => icon::run(&cli.root, &config),
        Commands::Splash => splash::run(&cli.root, &config),
        Commands::Screenshots => screenshots::run(&cli.root, &config),
        Commands::All => {
            icon::run(&cli.root, &config)?;
            println!();
            splash::run(&cli.root, &config)?;
            println!();
            screenshots::run(&cli.root, &config)
        }
        Commands::Check => exporter::check_assets(&cli.root, &config),
    }
}
