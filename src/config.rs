use crate::excerpt::RADIUS;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_CORPUS: &str = "completeworks.txt";
const DEFAULT_STATIC_DIR: &str = "static";
const DEFAULT_PORT: u16 = 3002;

/// Server configuration, optionally read from a JSON file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Corpus file loaded once at startup
    #[serde(default = "default_corpus_path")]
    pub corpus_path: PathBuf,

    /// Directory served for every path other than `/search` and `/health`
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,

    /// TCP port to listen on (all interfaces)
    #[serde(default = "default_port")]
    pub port: u16,

    /// Look-around distance used before scanning for excerpt delimiters
    #[serde(default = "default_excerpt_radius")]
    pub excerpt_radius: usize,
}

fn default_corpus_path() -> PathBuf {
    PathBuf::from(DEFAULT_CORPUS)
}

fn default_static_dir() -> PathBuf {
    PathBuf::from(DEFAULT_STATIC_DIR)
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_excerpt_radius() -> usize {
    RADIUS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            corpus_path: default_corpus_path(),
            static_dir: default_static_dir(),
            port: default_port(),
            excerpt_radius: default_excerpt_radius(),
        }
    }
}

impl Config {
    /// Load config from a JSON file, or return the defaults if no file is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Apply command-line overrides on top of the loaded values
    pub fn with_overrides(
        mut self,
        corpus_path: Option<PathBuf>,
        static_dir: Option<PathBuf>,
        port: Option<u16>,
    ) -> Self {
        if let Some(corpus_path) = corpus_path {
            self.corpus_path = corpus_path;
        }
        if let Some(static_dir) = static_dir {
            self.static_dir = static_dir;
        }
        if let Some(port) = port {
            self.port = port;
        }
        self
    }
}
