use serde::{Serialize, Deserialize};
use std::path::{Path, PathBuf};

use crate::utils::{DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub global: GlobalConfig,
}

/// Global configuration settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GlobalConfig {
    pub targets_file: PathBuf,
    pub user_agent: String,
    pub timeout_seconds: u64,
    /// 0 means unbounded
    pub max_concurrent_probes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            global: GlobalConfig {
                targets_file: PathBuf::from("configs/project-sherlock.json"),
                user_agent: DEFAULT_USER_AGENT.to_string(),
                timeout_seconds: DEFAULT_TIMEOUT_SECS,
                max_concurrent_probes: 0,
            },
        }
    }
}

impl Config {
    /// Apply command-line overrides on top of the loaded settings
    pub fn with_overrides(
        mut self,
        targets_file: Option<&Path>,
        timeout_seconds: Option<u64>,
        max_concurrent_probes: Option<usize>,
    ) -> Self {
        if let Some(path) = targets_file {
            self.global.targets_file = path.to_path_buf();
        }
        if let Some(timeout) = timeout_seconds {
            self.global.timeout_seconds = timeout;
        }
        if let Some(limit) = max_concurrent_probes {
            self.global.max_concurrent_probes = limit;
        }
        self
    }
}
