use std::path::PathBuf;
use std::time::Duration;

use worte_config::speech::SpeechConfig;
use worte_types::SpeechRequest;

use crate::{CommandPlayer, GoogleTts, Player, SpeechError, Synthesizer};

/// Synthesize to the audio artifact, then play it
pub struct SpeechPipeline {
    synthesizer: Box<dyn Synthesizer>,
    player: Box<dyn Player>,
    audio_path: PathBuf,
}

impl SpeechPipeline {
    pub fn new(
        synthesizer: Box<dyn Synthesizer>,
        player: Box<dyn Player>,
        audio_path: PathBuf,
    ) -> Self {
        Self {
            synthesizer,
            player,
            audio_path,
        }
    }

    /// Google TTS and the configured player
    pub fn from_config(config: &SpeechConfig) -> Result<Self, SpeechError> {
        let synthesizer = GoogleTts::new(
            config.api_url.clone(),
            Duration::from_secs(config.timeout_seconds),
        )?;
        let player = CommandPlayer::new(config.player.clone(), config.player_args.clone());

        Ok(Self::new(
            Box::new(synthesizer),
            Box::new(player),
            config.audio_path.clone(),
        ))
    }

    pub async fn speak(&self, request: &SpeechRequest) -> Result<(), SpeechError> {
        if request.text.trim().is_empty() {
            return Err(SpeechError::EmptyText);
        }

        let provider = self.synthesizer.metadata().name;
        tracing::debug!("Synthesizing '{}' ({}) via {provider}", request.text, request.lang);
        let audio = self
            .synthesizer
            .synthesize(&request.text, &request.lang)
            .await?;

        tokio::fs::write(&self.audio_path, &audio).await?;
        tracing::debug!(
            "Wrote {} bytes to {}",
            audio.len(),
            self.audio_path.display()
        );

        self.player.play(&self.audio_path).await
    }
}
