use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::USER_AGENT;

use crate::{ProviderMetadata, SpeechError, Synthesizer};

/// Longest text the endpoint accepts in one request
const MAX_CHARS: usize = 100;

/// Google Translate speech endpoint, returns MP3
#[derive(Clone)]
pub struct GoogleTts {
    client: reqwest::Client,
    api_url: String,
}

impl GoogleTts {
    pub fn new(api_url: String, timeout: Duration) -> Result<Self, SpeechError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, api_url })
    }

    pub(crate) fn request(&self, text: &str, lang: &str) -> Result<reqwest::Request, SpeechError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(SpeechError::EmptyText);
        }

        let len = text.chars().count();
        if len > MAX_CHARS {
            return Err(SpeechError::TooLong {
                provider: "google".to_string(),
                len,
                max: MAX_CHARS,
            });
        }

        let textlen = len.to_string();
        let params = [
            ("ie", "UTF-8"),
            ("q", text),
            ("tl", lang),
            ("client", "tw-ob"),
            ("ttsspeed", "1"),
            ("total", "1"),
            ("idx", "0"),
            ("textlen", textlen.as_str()),
        ];

        let request = self
            .client
            .get(&self.api_url)
            .header(USER_AGENT, "Mozilla/5.0")
            .query(&params)
            .build()?;
        Ok(request)
    }
}

#[async_trait]
impl Synthesizer for GoogleTts {
    async fn synthesize(&self, text: &str, lang: &str) -> Result<Vec<u8>, SpeechError> {
        let request = self.request(text, lang)?;
        tracing::debug!("TTS request: {}", request.url());

        let response = self.client.execute(request).await?;

        if response.status() == 429 {
            return Err(SpeechError::RateLimitExceeded);
        }

        if !response.status().is_success() {
            return Err(SpeechError::ApiError(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let audio = response.bytes().await?;
        if audio.is_empty() {
            return Err(SpeechError::ApiError("Empty audio response".to_string()));
        }

        Ok(audio.to_vec())
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "Google Translate TTS".to_string(),
        }
    }
}
