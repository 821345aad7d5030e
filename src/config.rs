//! Configuration file handling for termglyph.
//!
//! Loads configuration from `~/.config/termglyph/config.toml` or a custom path.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::glyphs::GlyphSet;
use crate::transform::MAX_STRIPES;

/// Configuration file structure for termglyph.
/// Loaded from ~/.config/termglyph/config.toml (or custom path via --config).
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub terminal: TerminalConfig,
}

#[derive(Debug, Deserialize)]
pub struct RenderConfig {
    #[serde(default)]
    pub compat: bool,
    #[serde(default)]
    pub glyphs: Option<String>,
    #[serde(default)]
    pub direct_mode: bool,
    #[serde(default = "default_true")]
    pub double_width: bool,
    #[serde(default = "default_max_stripes")]
    pub max_stripes: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            compat: false,
            glyphs: None,
            direct_mode: false,
            double_width: true,
            max_stripes: MAX_STRIPES,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct TerminalConfig {
    #[serde(default = "default_true")]
    pub clear_on_resize: bool,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            clear_on_resize: true,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_max_stripes() -> usize {
    MAX_STRIPES
}

impl Config {
    /// Load configuration from a file path.
    /// Returns default config if the file doesn't exist.
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(PathBuf::from).unwrap_or_else(default_path);

        if path.exists() {
            let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::IoError {
                path: path.clone(),
                source: e,
            })?;
            Self::parse(&content).map_err(|e| ConfigError::ParseError { path, source: e })
        } else {
            log::debug!("no config at {}, using defaults", path.display());
            Ok(Config::default())
        }
    }

    /// Parse configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// The configured glyph set, if one is named.
    pub fn glyph_set(&self) -> Result<Option<GlyphSet>, ConfigError> {
        match self.render.glyphs.as_deref() {
            None => Ok(None),
            Some(name) => GlyphSet::from_name(name)
                .map(Some)
                .ok_or_else(|| ConfigError::InvalidValue {
                    key: "render.glyphs",
                    value: name.to_string(),
                }),
        }
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug)]
pub enum ConfigError {
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
    InvalidValue {
        key: &'static str,
        value: String,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError { path, source } => {
                write!(
                    f,
                    "Failed to read config file '{}': {}",
                    path.display(),
                    source
                )
            }
            ConfigError::ParseError { path, source } => {
                write!(
                    f,
                    "Failed to parse config file '{}': {}",
                    path.display(),
                    source
                )
            }
            ConfigError::InvalidValue { key, value } => {
                write!(f, "Invalid value '{}' for config key '{}'", value, key)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::IoError { source, .. } => Some(source),
            ConfigError::ParseError { source, .. } => Some(source),
            ConfigError::InvalidValue { .. } => None,
        }
    }
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("termglyph").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/termglyph/config.toml")
        })
}
