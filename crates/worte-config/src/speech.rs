use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

fn default_api_url() -> String {
    "https://translate.google.com/translate_tts".to_string()
}

fn default_player() -> String {
    "mpg321".to_string()
}

fn default_player_args() -> Vec<String> {
    vec!["--stereo".to_string()]
}

fn default_audio_path() -> PathBuf {
    PathBuf::from("current_word.mp3")
}

fn default_timeout_seconds() -> u64 {
    10
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SpeechConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Synthesis endpoint, queried with `q`, `tl` and `client`
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Player binary, called as `<player> <audio_path> <player_args..>`
    #[serde(default = "default_player")]
    pub player: String,
    #[serde(default = "default_player_args")]
    pub player_args: Vec<String>,
    /// Overwritten on every request
    #[serde(default = "default_audio_path")]
    pub audio_path: PathBuf,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            api_url: default_api_url(),
            player: default_player(),
            player_args: default_player_args(),
            audio_path: default_audio_path(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl SpeechConfig {
    pub fn apply_env(&mut self) {
        if let Ok(url) = env::var("WORTE_TTS_URL") {
            self.api_url = url;
        }
        if let Ok(player) = env::var("WORTE_PLAYER") {
            self.player = player;
        }
        if let Ok(path) = env::var("WORTE_AUDIO_PATH") {
            self.audio_path = PathBuf::from(path);
        }
    }
}
