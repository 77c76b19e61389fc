//! Configuration file
//!
//! Reads `wordgame.toml` from an explicit path or the data directory.
//! Missing keys take defaults; a missing or broken file means all defaults.

use crate::clock::{ClockError, parse_date_key};
use crate::game::ModeKind;
use chrono::NaiveDate;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

pub const CONFIG_FILE: &str = "wordgame.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid [daily] date: {0}")]
    Date(#[from] ClockError),
    #[error("invalid [play] mode: {0}")]
    Mode(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Answer list file; the built-in list when unset
    pub answers: Option<PathBuf>,
    /// Accepted-guess list file; the answers when unset
    pub guesses: Option<PathBuf>,
    pub data_dir: PathBuf,
    /// File holding today's date key, trusted over the local clock
    pub date_source: Option<PathBuf>,
    /// Fixed puzzle date, overriding every clock
    pub date: Option<NaiveDate>,
    pub mode: ModeKind,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            answers: None,
            guesses: None,
            data_dir: default_data_dir(),
            date_source: None,
            date: None,
            mode: ModeKind::Daily,
        }
    }
}

// TOML schema

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct TomlConfig {
    #[serde(default)]
    words: TomlWords,
    #[serde(default)]
    storage: TomlStorage,
    #[serde(default)]
    daily: TomlDaily,
    #[serde(default)]
    play: TomlPlay,
}

#[derive(Deserialize, Debug, Default)]
struct TomlWords {
    answers: Option<PathBuf>,
    guesses: Option<PathBuf>,
}

#[derive(Deserialize, Debug, Default)]
struct TomlStorage {
    dir: Option<PathBuf>,
}

#[derive(Deserialize, Debug, Default)]
struct TomlDaily {
    source: Option<PathBuf>,
    date: Option<String>,
}

#[derive(Deserialize, Debug)]
struct TomlPlay {
    #[serde(default = "default_mode")]
    mode: String,
}

fn default_mode() -> String {
    ModeKind::Daily.name().into()
}

impl Default for TomlPlay {
    fn default() -> Self {
        Self {
            mode: default_mode(),
        }
    }
}

impl GameConfig {
    /// Parse a config document
    ///
    /// Relative word-list paths are resolved against `base`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` on malformed TOML, an unparseable date or an
    /// unknown mode name.
    pub fn parse(text: &str, base: &Path) -> Result<Self, ConfigError> {
        let toml_cfg: TomlConfig = toml::from_str(text)?;
        let resolve = |p: PathBuf| if p.is_absolute() { p } else { base.join(p) };

        let date = toml_cfg
            .daily
            .date
            .as_deref()
            .map(parse_date_key)
            .transpose()?;
        let mode = toml_cfg
            .play
            .mode
            .parse::<ModeKind>()
            .map_err(ConfigError::Mode)?;

        Ok(Self {
            answers: toml_cfg.words.answers.map(resolve),
            guesses: toml_cfg.words.guesses.map(resolve),
            data_dir: toml_cfg.storage.dir.map_or_else(default_data_dir, resolve),
            date_source: toml_cfg.daily.source.map(resolve),
            date,
            mode,
        })
    }

    /// Read a config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let base = path.parent().unwrap_or_else(|| Path::new("."));
        Self::parse(&text, base)
    }

    /// Load from `path`, or from `wordgame.toml` in the data directory
    ///
    /// Never fails: problems are logged and defaults used.
    #[must_use]
    pub fn load(path: Option<&Path>) -> Self {
        let path = path.map_or_else(|| default_data_dir().join(CONFIG_FILE), Path::to_path_buf);
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Self::default();
        }
        match Self::from_file(&path) {
            Ok(config) => config,
            Err(e) => {
                warn!("{e}; using default settings");
                Self::default()
            }
        }
    }
}

/// Where saved state lives: `$XDG_DATA_HOME/wordgame`, then
/// `~/.local/share/wordgame`, then `./.wordgame`
#[must_use]
pub fn default_data_dir() -> PathBuf {
    if let Some(xdg) = std::env::var_os("XDG_DATA_HOME").filter(|v| !v.is_empty()) {
        return PathBuf::from(xdg).join("wordgame");
    }
    if let Some(home) = std::env::var_os("HOME").filter(|v| !v.is_empty()) {
        return PathBuf::from(home).join(".local/share/wordgame");
    }
    PathBuf::from(".wordgame")
}
