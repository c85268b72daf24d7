use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILE: &str = "palconfig.json";

/// Boot configuration handed to the application's init.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PalConfig {
    /// Directory the application resolves its relative paths against.
    pub base_dir: String,
    /// Extra arguments forwarded to the application (e.g. a mod directory).
    pub app_args: Vec<String>,
    /// Heap grant the application may assume on the constrained target.
    pub memory_budget_bytes: usize,
}

impl Default for PalConfig {
    fn default() -> Self {
        Self {
            base_dir: ".".to_string(),
            app_args: Vec::new(),
            memory_budget_bytes: 24 * 1024 * 1024,
        }
    }
}

impl PalConfig {
    /// Loads config from the default config file.
    /// Returns default config if file doesn't exist.
    pub fn load() -> Result<Self> {
        Self::load_from(CONFIG_FILE)
    }

    /// Loads config from a specified path.
    /// Returns default config if file doesn't exist.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Saves config to the default config file.
    pub fn save(&self) -> Result<()> {
        self.save_to(CONFIG_FILE)
    }

    /// Saves config to a specified path.
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
