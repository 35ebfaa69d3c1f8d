use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::Config;

/// JSON document holding the persisted [`Config`]
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored config, falling back to defaults when the document is
    /// missing or unreadable. Never fails.
    pub fn load(&self) -> Config {
        if !self.path.exists() {
            tracing::info!("No config at {}, using defaults", self.path.display());
            return Config::default();
        }

        match self.read() {
            Ok(config) => {
                tracing::info!("Loaded config from {}", self.path.display());
                config
            }
            Err(e) => {
                tracing::warn!("Ignoring unreadable config {}: {e:#}", self.path.display());
                Config::default()
            }
        }
    }

    fn read(&self) -> anyhow::Result<Config> {
        let file = File::open(&self.path)?;
        let reader = BufReader::new(file);
        let config = serde_json::from_reader(reader).context("invalid config document")?;
        Ok(config)
    }

    /// Overwrite the stored config. Writes a sibling temp file and renames it
    /// into place.
    pub fn save(&self, config: &Config) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let data = serde_json::to_string_pretty(config)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, data).with_context(|| format!("writing {}", tmp.display()))?;
        fs::rename(&tmp, &self.path)
            .with_context(|| format!("replacing {}", self.path.display()))?;

        tracing::debug!("Saved config to {}", self.path.display());
        Ok(())
    }
}
