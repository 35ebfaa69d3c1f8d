mod google;
mod pipeline;
mod player;
mod worker;

pub use google::GoogleTts;
pub use pipeline::SpeechPipeline;
pub use player::CommandPlayer;
pub use worker::{SpeechQueue, speech_loop};

use std::path::Path;

/// Text-to-speech provider interface
#[async_trait::async_trait]
pub trait Synthesizer: Send + Sync {
    /// Encoded audio for `text` spoken in `lang`
    async fn synthesize(&self, text: &str, lang: &str) -> Result<Vec<u8>, SpeechError>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

/// Renders an audio file to the speakers
#[async_trait::async_trait]
pub trait Player: Send + Sync {
    async fn play(&self, path: &Path) -> Result<(), SpeechError>;
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
}

#[derive(Debug, thiserror::Error)]
pub enum SpeechError {
    #[error("Nothing to speak")]
    EmptyText,

    #[error("Text too long for {provider}: {len} > {max} characters")]
    TooLong {
        provider: String,
        len: usize,
        max: usize,
    },

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Audio file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Player {0} not installed")]
    PlayerMissing(String),

    #[error("Player {player} exited with {status}")]
    PlayerFailed { player: String, status: String },
}
