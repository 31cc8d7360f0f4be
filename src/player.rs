// src/player.rs

use crate::config::Config;
use crate::error::PlayerError;
use log::{debug, info};
use std::{
    ffi::OsString,
    io::ErrorKind as IoErrorKind,
    path::PathBuf,
    process::Command,
};

/// A fully built player command line: `program fullscreen_flag file1 file2 ...`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerCommand {
    pub program: String,
    pub fullscreen_flag: String,
    pub files: Vec<PathBuf>,
}

impl PlayerCommand {
    /// Builds the command that plays `files` with the configured player.
    pub fn new(config: &Config, files: Vec<PathBuf>) -> Self {
        PlayerCommand {
            program: config.player.clone(),
            fullscreen_flag: config.fullscreen_flag.clone(),
            files,
        }
    }

    /// The arguments passed after the program name, in order.
    pub fn args(&self) -> Vec<OsString> {
        let mut args = Vec::with_capacity(self.files.len() + 1);
        args.push(OsString::from(&self.fullscreen_flag));
        args.extend(self.files.iter().map(|p| p.as_os_str().to_os_string()));
        args
    }

    /// The command line as a single string, for messages. Paths with spaces are quoted.
    pub fn display(&self) -> String {
        let mut parts = vec![self.program.clone(), self.fullscreen_flag.clone()];
        for file in &self.files {
            let file = file.to_string_lossy();
            if file.contains(' ') {
                parts.push(format!("\"{}\"", file));
            } else {
                parts.push(file.into_owned());
            }
        }
        parts.join(" ")
    }

    /// Starts the player, inheriting the terminal, and waits for it to exit.
    ///
    /// # Errors
    ///
    /// * `PlayerNotFound` if the executable does not exist.
    /// * `PlayerExecutionFailed` if it exits with a non-zero status or is killed.
    /// * `Unexpected` for any other failure to start or wait on it.
    pub fn run(&self) -> Result<(), PlayerError> {
        debug!("Running player command: {}", self.display());

        let status = Command::new(&self.program)
            .args(self.args())
            .status()
            .map_err(|e| match e.kind() {
                IoErrorKind::NotFound => PlayerError::PlayerNotFound {
                    player: self.program.clone(),
                },
                _ => PlayerError::Unexpected {
                    context: format!("running '{}'", self.program),
                    source: e,
                },
            })?;

        if !status.success() {
            return Err(PlayerError::PlayerExecutionFailed {
                command: self.display(),
                status,
            });
        }

        info!("Player '{}' exited with {}", self.program, status);
        Ok(())
    }
}
