// src/cli.rs

use crate::config::{DEFAULT_FULLSCREEN_FLAG, DEFAULT_PLAYER, DEFAULT_SAMPLE_COUNT};
use clap::Parser;

#[derive(Parser, Debug)]
#[clap(
    author,
    version,
    about = "Plays a random selection of videos from a folder, fullscreen, one after another.",
    long_about = None
)]
pub struct Cli {
    /// Folder to pick videos from. Defaults to your Videos directory.
    #[clap(short, long)]
    pub folder: Option<String>,

    /// Maximum number of videos to play.
    #[clap(short = 'n', long, default_value_t = DEFAULT_SAMPLE_COUNT, value_parser = clap::value_parser!(u64).range(1..))]
    pub count: u64,

    /// Comma-separated file extensions to pick, e.g. "mp4,mkv".
    #[clap(short, long, value_delimiter = ',')]
    pub extensions: Vec<String>,

    /// Player executable to launch.
    #[clap(short, long, default_value = DEFAULT_PLAYER)]
    pub player: String,

    /// Flag passed to the player before the file list.
    #[clap(long, default_value = DEFAULT_FULLSCREEN_FLAG, allow_hyphen_values = true)]
    pub fullscreen_flag: String,

    /// Print the player command instead of running it.
    #[clap(long, action = clap::ArgAction::SetTrue)]
    pub dry_run: bool,

    #[clap(short, long, action = clap::ArgAction::SetTrue)]
    pub verbose: bool,
}
