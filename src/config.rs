//! Configuration management for a scan run

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::matcher::Highlight;

/// Config file looked up in the scan root when `--config` is not given
pub const CONFIG_FILE_NAME: &str = "copy-scout.toml";

/// Scan settings, loaded from `copy-scout.toml` and overridden by CLI flags
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScanConfig {
    /// File extensions (without the dot) that are scanned
    pub extensions: Vec<String>,
    /// Directory names pruned anywhere below the root
    pub excluded_dirs: Vec<String>,
    /// Maximum number of files read and parsed at the same time
    pub concurrency: usize,
    /// Abort on the first file that fails to parse
    pub strict: bool,
    pub highlight_open: String,
    pub highlight_close: String,
}

impl Default for ScanConfig {
    fn default() -> Self {
        let highlight = Highlight::default();
        Self {
            extensions: vec!["jsx".to_string(), "tsx".to_string()],
            excluded_dirs: vec!["node_modules".to_string()],
            concurrency: 16,
            strict: false,
            highlight_open: highlight.open,
            highlight_close: highlight.close,
        }
    }
}

impl ScanConfig {
    /// Preview delimiters
    #[must_use]
    pub fn highlight(&self) -> Highlight {
        Highlight {
            open: self.highlight_open.clone(),
            close: self.highlight_close.clone(),
        }
    }

    /// Reject settings the scanner cannot run with
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` describing the first bad setting
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.concurrency == 0 {
            return Err(ConfigError::Invalid(
                "concurrency must be at least 1".to_string(),
            ));
        }

        if self.extensions.is_empty() {
            return Err(ConfigError::Invalid(
                "at least one extension is required".to_string(),
            ));
        }

        if let Some(ext) = self.extensions.iter().find(|e| e.starts_with('.')) {
            return Err(ConfigError::Invalid(format!(
                "extension `{ext}` must be given without the leading dot"
            )));
        }

        Ok(())
    }
}

/// Load config for a scan of `root`
///
/// An explicit path must exist. Without one, `<root>/copy-scout.toml` is
/// used when present and defaults otherwise.
///
/// # Errors
///
/// Returns error if the file cannot be read, is not valid TOML, or holds
/// invalid settings
pub fn load_config(root: &Path, explicit: Option<&Path>) -> Result<ScanConfig, ConfigError> {
    let config_path: PathBuf = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let candidate = root.join(CONFIG_FILE_NAME);
            if !candidate.is_file() {
                tracing::debug!("no {} in {}, using defaults", CONFIG_FILE_NAME, root.display());
                return Ok(ScanConfig::default());
            }
            candidate
        }
    };

    let content = std::fs::read_to_string(&config_path).map_err(|source| ConfigError::Read {
        path: config_path.clone(),
        source,
    })?;

    let config: ScanConfig = toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: config_path.clone(),
        source,
    })?;

    config.validate()?;
    tracing::debug!(path = %config_path.display(), "loaded config");

    Ok(config)
}
