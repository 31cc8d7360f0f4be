// src/config.rs

use crate::cli::Cli;
use crate::error::PlayerError;
use std::{collections::BTreeSet, path::PathBuf};

/// Video file extensions picked when none are given (all lowercase, no dot).
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mkv", "avi", "mov", "flv", "webm"];
/// How many videos are picked per run unless `--count` says otherwise.
pub const DEFAULT_SAMPLE_COUNT: u64 = 20;
/// The player executable launched with the selection.
pub const DEFAULT_PLAYER: &str = "mplayer";
/// The flag that makes `DEFAULT_PLAYER` start fullscreen.
pub const DEFAULT_FULLSCREEN_FLAG: &str = "-fs";

/// Settings for a single run. Built once from the command line and never changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// The folder whose immediate children are scanned.
    pub directory: PathBuf,
    /// Upper bound on how many videos get played. Always at least 1.
    pub sample_count: usize,
    /// Lowercase extensions without the leading dot.
    pub extensions: BTreeSet<String>,
    pub player: String,
    pub fullscreen_flag: String,
    /// Print the player command instead of running it.
    pub dry_run: bool,
}

impl Config {
    /// Creates a config with the default player, extensions and count for `directory`.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Config {
            directory: directory.into(),
            sample_count: DEFAULT_SAMPLE_COUNT as usize,
            extensions: normalize_extensions(VIDEO_EXTENSIONS.iter().copied()),
            player: DEFAULT_PLAYER.to_string(),
            fullscreen_flag: DEFAULT_FULLSCREEN_FLAG.to_string(),
            dry_run: false,
        }
    }

    /// Resolves the command-line arguments into a config.
    ///
    /// The folder is tilde-expanded. Without `--folder` the platform's video
    /// directory is used.
    ///
    /// # Errors
    ///
    /// Returns `PlayerError::NoDirectoryConfigured` if no folder was given and
    /// the platform has no video directory.
    pub fn from_cli(cli: &Cli) -> Result<Self, PlayerError> {
        let directory = match &cli.folder {
            Some(folder) => PathBuf::from(shellexpand::tilde(folder).into_owned()),
            None => dirs::video_dir().ok_or(PlayerError::NoDirectoryConfigured)?,
        };

        let mut config = Config::new(directory);
        if !cli.extensions.is_empty() {
            config.extensions = normalize_extensions(cli.extensions.iter().map(String::as_str));
        }
        // clap rejects 0, and any count beyond usize::MAX means "all of them" anyway.
        config.sample_count = usize::try_from(cli.count).unwrap_or(usize::MAX);
        config.player = cli.player.clone();
        config.fullscreen_flag = cli.fullscreen_flag.clone();
        config.dry_run = cli.dry_run;

        Ok(config)
    }

    /// The extension set as a comma-separated list, for messages.
    pub fn extensions_display(&self) -> String {
        self.extensions
            .iter()
            .map(|ext| format!(".{}", ext))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Lowercases extensions and strips a leading dot, so `.MP4` and `mp4` match alike.
/// Blank entries are dropped.
pub fn normalize_extensions<'a>(raw: impl IntoIterator<Item = &'a str>) -> BTreeSet<String> {
    raw.into_iter()
        .map(|ext| ext.trim().trim_start_matches('.').to_lowercase())
        .filter(|ext| !ext.is_empty())
        .collect()
}
