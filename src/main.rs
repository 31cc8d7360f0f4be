// src/main.rs

use clap::Parser;
use rand::Rng;
use std::process;

// Module declarations
mod cli;
mod config;
mod error;
mod file_utils;
mod player;
mod selection;

// Crate imports for convenience
use crate::cli::Cli;
use crate::config::Config;
use crate::error::PlayerError;
use crate::file_utils::find_video_files;
use crate::player::PlayerCommand;
use crate::selection::sample_videos;

fn main() {
    let cli_args = Cli::parse();
    init_logging(cli_args.verbose);

    let result =
        Config::from_cli(&cli_args).and_then(|config| run_app(&config, &mut rand::rng()));

    if let Err(err) = result {
        eprintln!("Error: {}", err);
        if let Some(hint) = err.hint() {
            eprintln!("{}", hint);
        }
        process::exit(err.exit_code());
    }
}

/// Sets up `env_logger`. `RUST_LOG` wins over `--verbose` when set.
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

/// Scans the configured folder, picks the videos and plays them.
/// Returns the command that was run (or printed, for a dry run).
fn run_app<R: Rng + ?Sized>(config: &Config, rng: &mut R) -> Result<PlayerCommand, PlayerError> {
    let candidates = find_video_files(&config.directory, &config.extensions)?;
    if candidates.is_empty() {
        return Err(PlayerError::NoCandidates {
            path: config.directory.clone(),
            extensions: config.extensions_display(),
        });
    }

    let selected = sample_videos(&candidates, config.sample_count, rng);
    log::debug!(
        "Picked {} of {} candidate(s)",
        selected.len(),
        candidates.len()
    );
    let command = PlayerCommand::new(config, selected);

    if config.dry_run {
        println!("{}", command.display());
        return Ok(command);
    }

    println!(
        "Playing {} random video(s) from {}...",
        command.files.len(),
        config.directory.display()
    );
    command.run()?;
    println!("Playback finished.");

    Ok(command)
}
