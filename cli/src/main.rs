use std::process::ExitCode;

use clap::{Parser, Subcommand};

use heckler_core::AppConfig;

mod audio;
mod commands;
mod logging;

#[derive(Parser)]
#[command(version, about = "Randomized audio cue playback for threat scenario drills")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the playback loop until interrupted
    Run {
        /// Audio directory override (defaults to the configured one)
        #[arg(short, long)]
        dir: Option<String>,
    },
    /// List the cue catalog
    List,
    /// Show the effective configuration
    Config,
    /// Persist a new audio directory
    SetDirectory {
        #[arg(short, long)]
        path: String,
    },
    /// Persist the playback volume (0-100)
    SetVolume {
        #[arg(short, long)]
        volume: u8,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let _guard = logging::init();
    let cli = Cli::parse();
    let config = AppConfig::load();

    let result = match cli.command {
        Command::Run { dir } => commands::run(config, dir).await,
        Command::List => commands::list(&config),
        Command::Config => commands::show_config(&config),
        Command::SetDirectory { path } => commands::set_directory(config, path),
        Command::SetVolume { volume } => commands::set_volume(config, volume),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "Command failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
