//! Runtime configuration read from the environment.
//!
//! | variable | meaning | default |
//! |---|---|---|
//! | `DUNGEON_MAP_LOG_LEVEL` | off, error, warn, info, debug, trace | info |
//! | `DUNGEON_MAP_LOG_FILE` | log file path, empty or `none` to disable | disabled |
//! | `DUNGEON_MAP_PALETTE` | JSON palette file | built-in palette |

use std::env;
use std::path::PathBuf;

use log::LevelFilter;

use crate::palette::Palette;

pub const LOG_LEVEL_VAR: &str = "DUNGEON_MAP_LOG_LEVEL";
pub const LOG_FILE_VAR: &str = "DUNGEON_MAP_LOG_FILE";
pub const PALETTE_VAR: &str = "DUNGEON_MAP_PALETTE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
    pub palette_path: Option<PathBuf>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            log_level: LevelFilter::Info,
            log_file: None,
            palette_path: None,
        }
    }
}

pub fn parse_log_level(value: &str) -> Option<LevelFilter> {
    match value.trim().to_lowercase().as_str() {
        "off" => Some(LevelFilter::Off),
        "error" => Some(LevelFilter::Error),
        "warn" | "warning" => Some(LevelFilter::Warn),
        "info" => Some(LevelFilter::Info),
        "debug" => Some(LevelFilter::Debug),
        "trace" => Some(LevelFilter::Trace),
        _ => None,
    }
}

fn optional_path(value: Option<String>) -> Option<PathBuf> {
    let value = value?;
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("none") {
        None
    } else {
        Some(PathBuf::from(trimmed))
    }
}

impl ResolverConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let log_level = match lookup(LOG_LEVEL_VAR) {
            Some(value) => parse_log_level(&value).unwrap_or_else(|| {
                log::warn!("Ignoring unknown {LOG_LEVEL_VAR} value {value:?}");
                LevelFilter::Info
            }),
            None => LevelFilter::Info,
        };

        Self {
            log_level,
            log_file: optional_path(lookup(LOG_FILE_VAR)),
            palette_path: optional_path(lookup(PALETTE_VAR)),
        }
    }

    /// The configured palette file, or the built-in palette when none is set.
    pub fn load_palette(&self) -> anyhow::Result<Palette> {
        match &self.palette_path {
            Some(path) => Palette::load(path),
            None => Ok(Palette::default()),
        }
    }
}
