use std::{env, fs, io, path::Path};

use anyhow::Context;
use serde::Deserialize;

pub const DEFAULT_CONFIG_PATH: &str = "down4.ron";

/// Settings read from a `.ron` file, e.g. `(author: "ana", log: "debug")`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Author id every vote and event from this session is logged under.
    pub author: String,
    /// Default tracing directive, used when `RUST_LOG` is unset.
    pub log: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            author: String::from("local_user"),
            log: String::from("info"),
        }
    }
}

impl Config {
    /// Reads the file named by `DOWN4_CONFIG`, then applies `DOWN4_AUTHOR`.
    pub fn load() -> anyhow::Result<Self> {
        let path = env::var("DOWN4_CONFIG").unwrap_or_else(|_| String::from(DEFAULT_CONFIG_PATH));
        let mut config = Self::from_path(Path::new(&path))?;
        if let Ok(author) = env::var("DOWN4_AUTHOR") {
            config.author = author;
        }
        Ok(config)
    }

    /// A missing file is not an error, it just means defaults.
    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        match fs::read_to_string(path) {
            Ok(text) => Self::from_ron(&text)
                .with_context(|| format!("Invalid config file {}", path.display())),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e).with_context(|| format!("Failed to read {}", path.display())),
        }
    }

    pub fn from_ron(text: &str) -> ron::error::SpannedResult<Self> {
        ron::from_str(text)
    }
}
