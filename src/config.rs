//! Album configuration
//!
//! Loaded from `$XDG_CONFIG_HOME/shapealbum/config.json` (or an explicit
//! path). Every field is optional; a missing file means defaults.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use shapealbum_export::WebOptions;

/// User-tunable settings for rendering and output
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AlbumConfig {
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub title: String,
    pub heading: String,
    /// Allow replacing an existing output file
    pub overwrite: bool,
}

impl Default for AlbumConfig {
    fn default() -> Self {
        let web = WebOptions::default();
        Self {
            canvas_width: web.width,
            canvas_height: web.height,
            title: web.title,
            heading: web.heading,
            overwrite: false,
        }
    }
}

impl AlbumConfig {
    /// Default config file location
    pub fn default_path() -> PathBuf {
        let config_dir = std::env::var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| {
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join(".config")
            });
        config_dir.join("shapealbum").join("config.json")
    }

    /// Load from `path`, falling back to defaults when the file doesn't exist
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {:?}", path))?;
        serde_json::from_str(&content).with_context(|| format!("Invalid config {:?}", path))
    }

    pub fn web_options(&self) -> WebOptions {
        WebOptions {
            title: self.title.clone(),
            heading: self.heading.clone(),
            width: self.canvas_width,
            height: self.canvas_height,
        }
    }
}
