use std::io::ErrorKind;
use std::path::Path;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::{Player, SpeechError};

/// Plays audio through an external program, output discarded
#[derive(Debug, Clone)]
pub struct CommandPlayer {
    program: String,
    args: Vec<String>,
}

impl CommandPlayer {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }
}

#[async_trait]
impl Player for CommandPlayer {
    async fn play(&self, path: &Path) -> Result<(), SpeechError> {
        let status = Command::new(&self.program)
            .arg(path)
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .status()
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => SpeechError::PlayerMissing(self.program.clone()),
                _ => SpeechError::Io(e),
            })?;

        if !status.success() {
            return Err(SpeechError::PlayerFailed {
                player: self.program.clone(),
                status: status.to_string(),
            });
        }

        Ok(())
    }
}
