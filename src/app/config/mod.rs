use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

pub mod user;

pub use user::{UiConfig, UserConfig};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub struct AppConfig;

impl AppConfig {
    pub fn get_config_dir() -> PathBuf {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        let xdg_dir = home.join(".config").join("rasa");

        // Ensure it exists
        if !xdg_dir.exists() {
            let _ = std::fs::create_dir_all(&xdg_dir);
        }

        xdg_dir
    }

    pub fn get_config_path() -> PathBuf {
        Self::get_config_dir().join("config.toml")
    }

    pub fn get_theme_path() -> PathBuf {
        Self::get_config_dir().join("theme.toml")
    }

    pub fn load() -> Result<UserConfig, ConfigError> {
        Self::load_from(&Self::get_config_path())
    }

    /// Reads `path`, writing the defaults there first if it does not exist.
    pub fn load_from(path: &Path) -> Result<UserConfig, ConfigError> {
        if !path.exists() {
            let config = UserConfig::default();
            match toml::to_string_pretty(&config) {
                Ok(content) => {
                    if let Err(e) = fs::write(path, content) {
                        warn!("could not write default config to {}: {}", path.display(), e);
                    } else {
                        info!("created default config at {}", path.display());
                    }
                }
                Err(e) => warn!("could not serialize default config: {}", e),
            }
            return Ok(config);
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Default config as TOML, for `--generate-config`.
    pub fn default_toml() -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(&UserConfig::default())?)
    }
}
