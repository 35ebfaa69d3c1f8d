use std::time::Duration;

use serde::{Deserialize, Serialize};

fn default_click_delay_ms() -> u64 {
    200
}

fn default_menu_strip_height() -> f64 {
    30.0
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct UiConfig {
    /// Minimum gap between two accepted advances
    #[serde(default = "default_click_delay_ms")]
    pub click_delay_ms: u64,
    /// Clicks above this line belong to the menu bar
    #[serde(default = "default_menu_strip_height")]
    pub menu_strip_height: f64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            click_delay_ms: default_click_delay_ms(),
            menu_strip_height: default_menu_strip_height(),
        }
    }
}

impl UiConfig {
    pub fn click_delay(&self) -> Duration {
        Duration::from_millis(self.click_delay_ms)
    }
}
