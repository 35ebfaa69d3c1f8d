use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use self::speech::SpeechConfig;
use self::ui::UiConfig;

pub mod language;
pub mod speech;
pub mod store;
pub mod ui;

pub use language::{LANGUAGES, Language};
pub use store::ConfigStore;

fn default_lang() -> String {
    "ru".to_string()
}

fn default_current_file() -> PathBuf {
    PathBuf::from("russian_words.txt")
}

/// Persisted application state. `lang` and `current_file` are the keys every
/// config file carries; the nested sections fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    #[serde(default = "default_lang")]
    pub lang: String,
    #[serde(default = "default_current_file")]
    pub current_file: PathBuf,
    pub speech: SpeechConfig,
    pub ui: UiConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lang: default_lang(),
            current_file: default_current_file(),
            speech: SpeechConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

/// Location of the config document: `WORTE_CONFIG` or `config.json`
pub fn default_config_path() -> PathBuf {
    env::var("WORTE_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config.json"))
}
