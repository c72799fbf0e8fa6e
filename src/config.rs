//! Tool configuration.
//!
//! An optional `mkpost.toml` in the working directory supplies defaults for
//! the values a user would otherwise repeat on every invocation. Config
//! files are sparse, override just the values you want:
//!
//! ```toml
//! # All keys are optional - defaults shown below
//! output_dir = "_posts"
//! timezone = "Asia/Kolkata"   # IANA zone name
//! # author = "John Doe"       # unset by default
//! ```
//!
//! CLI flags always win over the config file, which wins over the built-in
//! defaults. Unknown keys are rejected to catch typos early.
//!
//! This module also owns the startup configuration failures: an
//! unresolvable timezone name and an unwritable output directory.

use chrono_tz::Tz;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_OUTPUT_DIR: &str = "_posts";
pub const DEFAULT_TIMEZONE: &str = "Asia/Kolkata";
pub const CONFIG_FILE: &str = "mkpost.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("timezone '{0}' is not in the IANA timezone database")]
    UnknownTimezone(String),
    #[error("cannot write to output directory '{}': {source}", .dir.display())]
    OutputDirNotWritable { dir: PathBuf, source: std::io::Error },
}

/// Defaults loaded from `mkpost.toml`. Unknown keys are rejected.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Defaults {
    pub output_dir: String,
    pub timezone: String,
    pub author: Option<String>,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output_dir: DEFAULT_OUTPUT_DIR.to_string(),
            timezone: DEFAULT_TIMEZONE.to_string(),
            author: None,
        }
    }
}

/// Load `mkpost.toml` from `dir`, falling back to built-in defaults when the
/// file does not exist.
pub fn load(dir: &Path) -> Result<Defaults, ConfigError> {
    let path = dir.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(Defaults::default());
    }
    let raw = fs::read_to_string(&path)?;
    Ok(toml::from_str(&raw)?)
}

/// Resolve an IANA timezone name against the compiled-in database.
pub fn resolve_timezone(name: &str) -> Result<Tz, ConfigError> {
    name.parse::<Tz>()
        .map_err(|_| ConfigError::UnknownTimezone(name.to_string()))
}
