//! Configuration types for ensdict.
//!
//! [`Config::load`] layers an optional user file (an explicit path, else
//! `$XDG_CONFIG_HOME/ensdict/config.toml` or `~/.config/ensdict/config.toml`)
//! on top of the embedded defaults.
//! [`Config::defaults`] returns the same defaults without touching the
//! filesystem (useful in tests).

use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[ensembl]
base_url = "https://www.ebi.ac.uk/ebisearch/ws/rest/ensembl_gene"
format   = "json"
log      = false
optimap  = false

[limits]
max_page_size    = 100
min_start        = 0
max_start        = 1000000
per_page_default = 50
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ensembl: EnsemblConfig,
    #[serde(default)]
    pub limits: LimitsConfig,
}

/// `[ensembl]` section: where the service lives and how results are shaped.
#[derive(Debug, Clone, Deserialize)]
pub struct EnsemblConfig {
    /// Service root for the gene domain; both endpoints derive from it.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Response serialization requested from the service.
    #[serde(default = "default_format")]
    pub format: String,
    /// Emit every outbound URL at `info` level.
    #[serde(default)]
    pub log: bool,
    /// Build `descr` from species, synonyms and description.
    #[serde(default)]
    pub optimap: bool,
    /// Override for the batch lookup root (`{entries_url}/entry/{ids}`).
    #[serde(default)]
    pub entries_url: Option<String>,
    /// Override for the search root (`{matches_url}?query=...`).
    #[serde(default)]
    pub matches_url: Option<String>,
}

fn default_base_url() -> String { "https://www.ebi.ac.uk/ebisearch/ws/rest/ensembl_gene".to_string() }
fn default_format() -> String { "json".to_string() }

impl Default for EnsemblConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            format: default_format(),
            log: false,
            optimap: false,
            entries_url: None,
            matches_url: None,
        }
    }
}

impl EnsemblConfig {
    /// Defaults pointed at another service root (test servers, mirrors).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn entries_root(&self) -> &str {
        self.entries_url.as_deref().unwrap_or(&self.base_url)
    }

    pub fn matches_root(&self) -> &str {
        self.matches_url.as_deref().unwrap_or(&self.base_url)
    }
}

/// `[limits]` section: the service's pagination bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct LimitsConfig {
    #[serde(default = "default_max_page_size")]
    pub max_page_size: u64,
    #[serde(default = "default_min_start")]
    pub min_start: u64,
    #[serde(default = "default_max_start")]
    pub max_start: u64,
    #[serde(default = "default_per_page")]
    pub per_page_default: u64,
}

fn default_max_page_size() -> u64 { 100 }
fn default_min_start() -> u64 { 0 }
fn default_max_start() -> u64 { 1_000_000 }
fn default_per_page() -> u64 { 50 }

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_page_size: default_max_page_size(),
            min_start: default_min_start(),
            max_start: default_max_start(),
            per_page_default: default_per_page(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load `path` (or the per-user default location) layered on top of the
    /// built-in defaults. A missing default-location file is not an error; a
    /// missing explicit path is.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let user_file = match path {
            Some(p) => config::File::from(p).required(true),
            None => config::File::from(config_path().as_path()).required(false),
        };

        let cfg: Self = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(user_file)
            .build()?
            .try_deserialize()?;

        tracing::debug!(
            base_url = %cfg.ensembl.base_url,
            format = %cfg.ensembl.format,
            optimap = cfg.ensembl.optimap,
            "config loaded"
        );
        Ok(cfg)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        Self {
            ensembl: EnsemblConfig::default(),
            limits: LimitsConfig::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("ensdict")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
