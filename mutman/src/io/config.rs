//! Manager configuration stored in `mutman.toml`.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

/// Manager configuration (TOML).
///
/// Missing fields default to values compatible with a stock `mutmut`
/// installation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ManagerConfig {
    /// Engine executable name used when no venv root is supplied; resolved
    /// through the OS search path.
    pub engine_binary: String,

    /// Cache file removed by the clean fallback. Kept as configuration
    /// rather than a constant so tests can point it into a tempdir. Its
    /// contents belong to the engine and are never read.
    pub cache_path: PathBuf,

    /// Bound on the engine wait, in seconds. `None` blocks until the
    /// engine exits.
    pub engine_timeout_secs: Option<u64>,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            engine_binary: "mutmut".to_string(),
            cache_path: PathBuf::from(".mutmut-cache"),
            engine_timeout_secs: None,
        }
    }
}

impl ManagerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.engine_binary.trim().is_empty() {
            return Err(anyhow!("engine_binary must be non-empty"));
        }
        if self.cache_path.as_os_str().is_empty() {
            return Err(anyhow!("cache_path must be non-empty"));
        }
        if self.engine_timeout_secs == Some(0) {
            return Err(anyhow!("engine_timeout_secs must be > 0 when set"));
        }
        Ok(())
    }

    pub fn engine_timeout(&self) -> Option<Duration> {
        self.engine_timeout_secs.map(Duration::from_secs)
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `ManagerConfig::default()`.
pub fn load_config(path: &Path) -> Result<ManagerConfig> {
    if !path.exists() {
        let cfg = ManagerConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: ManagerConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}
