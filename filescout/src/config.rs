use config::{Config as ConfigBuilder, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

/// Configuration for a workspace and its scan operations.
///
/// # Configuration Locations
///
/// The configuration can be loaded from multiple locations in order of precedence:
/// 1. Custom config file specified via `--config` flag
/// 2. Local `.filescout.yaml` in the current directory
/// 3. Global `$HOME/.config/filescout/config.yaml`
///
/// # Configuration Format
///
/// The configuration uses YAML format. Example:
/// ```yaml
/// # Root directory that relative paths and glob patterns resolve against
/// root_path: "."
///
/// # Thread count for the scan fan-out (default: CPU cores)
/// thread_count: 4
///
/// # Log level (trace, debug, info, warn, error)
/// log_level: "info"
/// ```
///
/// # CLI Integration
///
/// When using the CLI, command-line arguments take precedence over config file
/// values. The merging behavior is defined in the `merge_with_cli` method.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkspaceConfig {
    /// Root directory that relative file paths and glob patterns resolve against
    #[serde(default = "default_root_path")]
    pub root_path: PathBuf,

    /// Number of threads used for the parallel scan fan-out
    /// Defaults to number of CPU cores if not specified
    #[serde(default = "default_thread_count")]
    pub thread_count: NonZeroUsize,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_root_path() -> PathBuf {
    PathBuf::from(".")
}

fn default_thread_count() -> NonZeroUsize {
    NonZeroUsize::new(num_cpus::get()).unwrap()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            root_path: default_root_path(),
            thread_count: default_thread_count(),
            log_level: default_log_level(),
        }
    }
}

impl WorkspaceConfig {
    /// Loads configuration from the default locations
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Loads configuration from a specific file
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        // Default config locations
        let config_files = [
            // Global config
            dirs::config_dir().map(|p| p.join("filescout/config.yaml")),
            // Local config
            Some(PathBuf::from(".filescout.yaml")),
            // Custom config
            config_path.map(PathBuf::from),
        ];

        // Add existing config files
        for path in config_files.iter().flatten() {
            if path.exists() {
                builder = builder.add_source(File::from(path.as_path()));
            }
        }

        // Build and deserialize
        builder.build()?.try_deserialize()
    }

    /// Merges CLI arguments with configuration file values
    pub fn merge_with_cli(mut self, cli_config: WorkspaceConfig) -> Self {
        // CLI values take precedence over config file values
        if cli_config.root_path != default_root_path() {
            self.root_path = cli_config.root_path;
        }
        if cli_config.thread_count != default_thread_count() {
            self.thread_count = cli_config.thread_count;
        }
        if cli_config.log_level != default_log_level() {
            self.log_level = cli_config.log_level;
        }
        self
    }
}
