//! Configuration loading and root folder resolution
//!
//! Every setting is resolved in the same priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. TOML config file
//! 4. Compiled default (fallback)

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// Environment variable overriding the root folder
pub const ENV_ROOT_FOLDER: &str = "CREATORHUB_ROOT_FOLDER";
/// Environment variable overriding the HTTP bind address
pub const ENV_BIND: &str = "CREATORHUB_BIND";
/// Environment variable naming the TOML config file
pub const ENV_CONFIG: &str = "CREATORHUB_CONFIG";

/// Database file name inside the root folder
pub const DATABASE_FILE: &str = "creatorhub.db";

/// `[logging]` section of the TOML file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log filter directive, e.g. "info" or "creatorhub_server=debug"
    pub level: Option<String>,
    /// Append log output to this file instead of stdout
    pub log_file: Option<PathBuf>,
}

/// On-disk TOML configuration; every field is optional
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TomlConfig {
    pub root_folder: Option<PathBuf>,
    pub bind: Option<String>,
    pub session_ttl_hours: Option<i64>,
    pub mail_from: Option<String>,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl TomlConfig {
    /// Parse a TOML config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Read {} failed: {}", path.display(), e)))?;
        toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Parse {} failed: {}", path.display(), e)))
    }

    /// Load the config file if one can be found, else fall back to defaults
    ///
    /// A missing or unreadable file is never fatal. The reason for falling
    /// back is returned so it can be reported once logging is up. A missing
    /// file at the platform default location is not reported.
    pub fn load_or_default(explicit: Option<&Path>) -> (Self, Option<ConfigFallback>) {
        let requested = explicit
            .map(Path::to_path_buf)
            .or_else(|| {
                std::env::var(ENV_CONFIG)
                    .ok()
                    .filter(|v| !v.trim().is_empty())
                    .map(PathBuf::from)
            });
        let was_requested = requested.is_some();

        let Some(path) = requested.or_else(default_config_path) else {
            return (Self::default(), None);
        };

        if !path.exists() {
            let fallback = was_requested.then(|| ConfigFallback::NotFound(path));
            return (Self::default(), fallback);
        }

        match Self::load(&path) {
            Ok(config) => (config, None),
            Err(e) => (Self::default(), Some(ConfigFallback::Invalid(e.to_string()))),
        }
    }
}

/// Why [`TomlConfig::load_or_default`] fell back to defaults
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigFallback {
    #[error("Config file {} not found, using defaults", .0.display())]
    NotFound(PathBuf),

    #[error("{0}; using defaults")]
    Invalid(String),
}

/// Platform config file location (`~/.config/creatorhub/config.toml` on Linux)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("creatorhub").join("config.toml"))
}

/// Compiled fallback values
#[derive(Debug, Clone)]
pub struct CompiledDefaults {
    pub root_folder: PathBuf,
    pub bind: SocketAddr,
    pub log_level: String,
    pub session_ttl_hours: i64,
    pub mail_from: String,
}

impl CompiledDefaults {
    pub fn for_current_platform() -> Self {
        let root_folder = dirs::data_local_dir()
            .map(|d| d.join("creatorhub"))
            .unwrap_or_else(|| PathBuf::from("./creatorhub_data"));

        Self {
            root_folder,
            bind: SocketAddr::from(([127, 0, 0, 1], 5780)),
            log_level: "info".to_string(),
            session_ttl_hours: 24 * 30,
            mail_from: "admin@yourdomain.com".to_string(),
        }
    }
}

/// Fully resolved runtime configuration
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub root_folder: PathBuf,
    pub bind: SocketAddr,
    pub session_ttl_hours: i64,
    pub mail_from: String,
    pub log_level: String,
    pub log_file: Option<PathBuf>,
}

impl ResolvedConfig {
    pub fn database_path(&self) -> PathBuf {
        self.root_folder.join(DATABASE_FILE)
    }
}

/// Resolves configuration from CLI, environment, TOML and defaults
#[derive(Debug, Default)]
pub struct ConfigResolver {
    cli_root_folder: Option<PathBuf>,
    cli_bind: Option<String>,
    toml: TomlConfig,
}

impl ConfigResolver {
    pub fn new(toml: TomlConfig) -> Self {
        Self {
            toml,
            ..Default::default()
        }
    }

    pub fn with_cli_root_folder(mut self, root_folder: Option<PathBuf>) -> Self {
        self.cli_root_folder = root_folder;
        self
    }

    pub fn with_cli_bind(mut self, bind: Option<String>) -> Self {
        self.cli_bind = bind;
        self
    }

    pub fn resolve_root_folder(&self) -> PathBuf {
        if let Some(path) = &self.cli_root_folder {
            return path.clone();
        }
        if let Ok(path) = std::env::var(ENV_ROOT_FOLDER) {
            if !path.trim().is_empty() {
                return PathBuf::from(path);
            }
        }
        if let Some(path) = &self.toml.root_folder {
            return path.clone();
        }
        CompiledDefaults::for_current_platform().root_folder
    }

    pub fn resolve_bind(&self) -> Result<SocketAddr> {
        let raw = self
            .cli_bind
            .clone()
            .or_else(|| std::env::var(ENV_BIND).ok().filter(|v| !v.trim().is_empty()))
            .or_else(|| self.toml.bind.clone());

        match raw {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|e| Error::Config(format!("Invalid bind address '{}': {}", raw, e))),
            None => Ok(CompiledDefaults::for_current_platform().bind),
        }
    }

    pub fn resolve(&self) -> Result<ResolvedConfig> {
        let defaults = CompiledDefaults::for_current_platform();

        let session_ttl_hours = self
            .toml
            .session_ttl_hours
            .unwrap_or(defaults.session_ttl_hours);
        if session_ttl_hours <= 0 {
            return Err(Error::Config(format!(
                "session_ttl_hours must be positive, got {}",
                session_ttl_hours
            )));
        }

        Ok(ResolvedConfig {
            root_folder: self.resolve_root_folder(),
            bind: self.resolve_bind()?,
            session_ttl_hours,
            mail_from: self.toml.mail_from.clone().unwrap_or(defaults.mail_from),
            log_level: self
                .toml
                .logging
                .level
                .clone()
                .unwrap_or(defaults.log_level),
            log_file: self.toml.logging.log_file.clone(),
        })
    }
}

/// Creates the root folder on first run
pub struct RootFolderInitializer {
    root_folder: PathBuf,
}

impl RootFolderInitializer {
    pub fn new(root_folder: PathBuf) -> Self {
        Self { root_folder }
    }

    pub fn ensure_directory_exists(&self) -> Result<()> {
        std::fs::create_dir_all(&self.root_folder)?;
        Ok(())
    }

    pub fn database_path(&self) -> PathBuf {
        self.root_folder.join(DATABASE_FILE)
    }
}
