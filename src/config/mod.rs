// src/config/mod.rs
mod schema;

use std::path::{Path, PathBuf};
use config::{Config as ConfigLoader, FileFormat};
use tracing::{debug, info};

pub use schema::{Config, GlobalConfig};

use crate::error::{HuntResult, HuntError};

const BUILTIN_DEFAULTS: &str = include_str!("../../config/default.toml");

impl Config {
    /// Load settings: built-in defaults, then the user file, then `USERHUNT__*` variables.
    ///
    /// An explicit path that does not exist is an error; without one, the file
    /// under the home directory is used when present.
    pub fn load(config_path: Option<&Path>) -> HuntResult<Self> {
        let user_file = match config_path {
            Some(path) if !path.exists() => {
                return Err(HuntError::ConfigError(
                    format!("Configuration file not found: {}", path.display())
                ));
            }
            Some(path) => Some(path.to_path_buf()),
            None => Some(Self::get_default_config_path()).filter(|path| path.exists()),
        };

        Self::from_sources(user_file.as_deref())
    }

    fn from_sources(user_file: Option<&Path>) -> HuntResult<Self> {
        let mut builder = ConfigLoader::builder()
            .add_source(config::File::from_str(BUILTIN_DEFAULTS, FileFormat::Toml));

        match user_file {
            Some(path) => {
                info!("Loading user configuration from: {}", path.display());
                builder = builder.add_source(config::File::from(path));
            }
            None => debug!("No user configuration found, using built-in defaults"),
        }

        // e.g. USERHUNT__GLOBAL__TIMEOUT_SECONDS=10
        builder
            .add_source(
                config::Environment::with_prefix("USERHUNT")
                    .separator("__")
                    .try_parsing(true)
            )
            .build()
            .and_then(|settings| settings.try_deserialize())
            .map_err(|e| HuntError::ConfigError(format!("Invalid configuration: {}", e)))
    }

    /// Get the default configuration path
    pub fn get_default_config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".userhunt/config.toml")
    }

    /// Write the default configuration to the user's config path
    pub fn init(force: bool) -> HuntResult<PathBuf> {
        Self::init_at(&Self::get_default_config_path(), force)
    }

    /// Write the default configuration to `config_path`
    pub fn init_at(config_path: &Path, force: bool) -> HuntResult<PathBuf> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| HuntError::FileError {
                    path: parent.to_path_buf(),
                    message: format!("Failed to create directory: {}", e),
                })?;
        }

        if config_path.exists() && !force {
            return Err(HuntError::ConfigError(
                format!("Configuration already exists at {}. Use --force to overwrite.", config_path.display())
            ));
        }

        Config::default().save(config_path)?;

        Ok(config_path.to_path_buf())
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> HuntResult<()> {
        let config_str = toml::to_string_pretty(self)
            .map_err(|e| HuntError::SerializationError(format!("Failed to serialize configuration: {}", e)))?;

        std::fs::write(path, config_str)
            .map_err(|e| HuntError::FileError {
                path: path.to_path_buf(),
                message: format!("Failed to write configuration: {}", e),
            })?;

        info!("Configuration saved to {}", path.display());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_defaults_match_default_impl() {
        let config = Config::from_sources(None).unwrap();

        assert_eq!(config.global.targets_file, PathBuf::from("configs/project-sherlock.json"));
        assert_eq!(config.global.timeout_seconds, 30);
        assert_eq!(config.global.max_concurrent_probes, 0);
        assert_eq!(config.global.user_agent, Config::default().global.user_agent);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::load(Some(&dir.path().join("absent.toml")));
        assert!(matches!(result, Err(HuntError::ConfigError(_))));
    }

    #[test]
    fn test_user_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[global]\ntimeout_seconds = 5\nmax_concurrent_probes = 16\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.global.timeout_seconds, 5);
        assert_eq!(config.global.max_concurrent_probes, 16);
        assert_eq!(config.global.targets_file, PathBuf::from("configs/project-sherlock.json"));
    }

    #[test]
    fn test_malformed_user_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[global]\ntimeout_seconds = \"soon\"\n").unwrap();

        assert!(matches!(Config::load(Some(&path)), Err(HuntError::ConfigError(_))));
    }

    #[test]
    fn test_init_writes_loadable_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        Config::init_at(&path, false).unwrap();
        assert_eq!(Config::load(Some(&path)).unwrap(), Config::default());

        assert!(Config::init_at(&path, false).is_err());
        assert!(Config::init_at(&path, true).is_ok());
    }

    #[test]
    fn test_overrides() {
        let config = Config::default().with_overrides(Some(Path::new("sites.json")), Some(3), None);
        assert_eq!(config.global.targets_file, PathBuf::from("sites.json"));
        assert_eq!(config.global.timeout_seconds, 3);
        assert_eq!(config.global.max_concurrent_probes, 0);
    }
}
