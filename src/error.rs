// src/error.rs

use std::{io, path::PathBuf, process::ExitStatus};
use thiserror::Error;

/// Exit code for problems with the configured folder or its contents.
pub const EXIT_INPUT_ERROR: i32 = 1;
/// Exit code for failures while starting or running the player.
/// Code 2 is left to clap for usage errors.
pub const EXIT_PLAYER_ERROR: i32 = 3;

/// Everything that can end a run early.
#[derive(Debug, Error)]
pub enum PlayerError {
    #[error("Directory not found: {}", .path.display())]
    DirectoryNotFound { path: PathBuf },

    #[error("Permission denied for directory: {}", .path.display())]
    PermissionDenied { path: PathBuf },

    #[error("No videos with extensions [{extensions}] found in {}", .path.display())]
    NoCandidates { path: PathBuf, extensions: String },

    #[error("No video folder given and no default video directory is known for this platform")]
    NoDirectoryConfigured,

    #[error("Player command '{player}' not found")]
    PlayerNotFound { player: String },

    #[error("Player command '{command}' failed ({status})")]
    PlayerExecutionFailed { command: String, status: ExitStatus },

    #[error("Unexpected error while {context}: {source}")]
    Unexpected {
        context: String,
        #[source]
        source: io::Error,
    },
}

impl PlayerError {
    /// Maps the error to its process exit code.
    pub fn exit_code(&self) -> i32 {
        match self {
            PlayerError::DirectoryNotFound { .. }
            | PlayerError::PermissionDenied { .. }
            | PlayerError::NoCandidates { .. }
            | PlayerError::NoDirectoryConfigured => EXIT_INPUT_ERROR,
            PlayerError::PlayerNotFound { .. }
            | PlayerError::PlayerExecutionFailed { .. }
            | PlayerError::Unexpected { .. } => EXIT_PLAYER_ERROR,
        }
    }

    /// A follow-up line telling the user what to change, if there is one.
    pub fn hint(&self) -> Option<String> {
        match self {
            PlayerError::DirectoryNotFound { .. } | PlayerError::NoDirectoryConfigured => {
                Some("Pass the video folder with --folder <DIR>.".to_string())
            }
            PlayerError::NoCandidates { .. } => {
                Some("Use --extensions to change which file types are picked.".to_string())
            }
            PlayerError::PlayerNotFound { player } => Some(format!(
                "Make sure '{}' is installed and on your PATH, or choose another player with --player.",
                player
            )),
            _ => None,
        }
    }
}
