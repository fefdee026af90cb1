use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

static DEFAULT_CONFIG: &str = include_str!("default_config.toml");

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub inline: InlineConfig,
    pub blocks: BlocksConfig,
}

/// Which inline passes run, and how the strip directive finds its region.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct InlineConfig {
    pub bold: bool,
    pub emphasis: bool,
    pub hash: bool,
    pub strip: bool,
    pub strip_locator: StripLocator,
}

impl Default for InlineConfig {
    fn default() -> Self {
        Self {
            bold: true,
            emphasis: true,
            hash: true,
            strip: true,
            strip_locator: StripLocator::default(),
        }
    }
}

/// Delimiters used to locate the character-strip region.
#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StripLocator {
    /// Strip inside `((...))` and drop the parentheses.
    #[default]
    Parens,
    /// Older output: only runs when `((` and `))` are present, but strips
    /// inside the first `[[...]]` region instead.
    Brackets,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BlocksConfig {
    pub lists: bool,
    pub paragraphs: bool,
    pub blank_lines: BlankLines,
}

impl Default for BlocksConfig {
    fn default() -> Self {
        Self {
            lists: true,
            paragraphs: true,
            blank_lines: BlankLines::default(),
        }
    }
}

/// What a blank line does to an open paragraph.
#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BlankLines {
    #[default]
    Close,
    Break,
}

impl Config {
    /// The defaults shipped in `default_config.toml`.
    pub fn compiled_default() -> Self {
        // build.rs rejects a malformed file, and every field has a serde default
        toml::from_str(DEFAULT_CONFIG).expect("default_config.toml is validated at build time")
    }

    /// Load config from a TOML file, or return defaults if not found.
    pub fn load(path: &Path) -> Self {
        Self::from_file(path).unwrap_or_else(|_| Self::compiled_default())
    }

    /// Load config from a TOML file the user asked for explicitly.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content, path.to_path_buf())
    }

    fn from_toml(content: &str, path: PathBuf) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse { path, source })
    }
}
