//! CLI configuration.
//!
//! Search order:
//! 1. `weakspot.toml` in the current directory
//! 2. `~/.config/weakspot/config.toml`
//!
//! Environment variable overrides: `WEAKSPOT_CONTENT_DIR`,
//! `WEAKSPOT_STATE_DIR`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level weakspot configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeakspotConfig {
    /// Directory of lesson JSON files.
    #[serde(default = "default_content_dir")]
    pub content_dir: PathBuf,
    /// Directory where tracking state is persisted.
    #[serde(default = "default_state_dir")]
    pub state_dir: PathBuf,
}

fn default_content_dir() -> PathBuf {
    PathBuf::from("./content")
}

fn default_state_dir() -> PathBuf {
    PathBuf::from("./.weakspot")
}

impl Default for WeakspotConfig {
    fn default() -> Self {
        Self {
            content_dir: default_content_dir(),
            state_dir: default_state_dir(),
        }
    }
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<WeakspotConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("weakspot.toml");
        if local.exists() {
            Some(local)
        } else if let Some(global_dir) = dirs_path() {
            let global = global_dir.join("config.toml");
            global.exists().then_some(global)
        } else {
            None
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            tracing::debug!("loaded config from {}", path.display());
            toml::from_str::<WeakspotConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => WeakspotConfig::default(),
    };

    if let Ok(dir) = std::env::var("WEAKSPOT_CONTENT_DIR") {
        config.content_dir = PathBuf::from(dir);
    }
    if let Ok(dir) = std::env::var("WEAKSPOT_STATE_DIR") {
        config.state_dir = PathBuf::from(dir);
    }

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("weakspot"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = WeakspotConfig::default();
        assert_eq!(config.content_dir, PathBuf::from("./content"));
        assert_eq!(config.state_dir, PathBuf::from("./.weakspot"));
    }

    #[test]
    fn parse_partial_config_uses_defaults() {
        let config: WeakspotConfig = toml::from_str(r#"content_dir = "./lessons""#).unwrap();
        assert_eq!(config.content_dir, PathBuf::from("./lessons"));
        assert_eq!(config.state_dir, PathBuf::from("./.weakspot"));
    }

    #[test]
    fn missing_explicit_path_errors() {
        let result = load_config_from(Some(Path::new("/definitely/not/here.toml")));
        assert!(result.is_err());
    }
}
