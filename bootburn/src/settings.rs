// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Layered configuration.
//!
//! Sources, lowest precedence first:
//! - built-in defaults (`bootburn.toml`)
//! - user configuration `[XDG_CONFIG_HOME|~/.config]/bootburn/config.toml`
//! - the file named by `BOOTBURN_CONFIG_PATH`
//! - the file given with `--config-file`
//! - environment variables `BOOTBURN_<SECTION>_<KEY>`; `backend.args` is
//!   split on spaces

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

pub const DEFAULTS: &str = include_str!("../bootburn.toml");
pub const ENV_PREFIX: &str = "BOOTBURN";
pub const CONFIG_PATH_ENV: &str = "BOOTBURN_CONFIG_PATH";
pub const CONFIG_FILE_FLAG: &str = "--config-file";

#[derive(thiserror::Error, Debug)]
pub enum SettingsError {
    #[error("Failed to load config: {0}")]
    Config(#[from] ConfigError),
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub backend: BackendSettings,
    pub i18n: I18nSettings,
    pub logging: LogSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BackendSettings {
    pub program: String,
    pub args: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct I18nSettings {
    pub catalog: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogSettings {
    pub level: String,
}

impl I18nSettings {
    pub fn catalog_path(&self) -> Option<PathBuf> {
        (!self.catalog.is_empty()).then(|| PathBuf::from(&self.catalog))
    }
}

/// Where settings are read from.
#[derive(Debug, Clone, Default)]
pub struct Sources {
    /// Optional, skipped when missing.
    pub user_config: Option<PathBuf>,
    /// Optional, skipped when missing.
    pub custom_config: Option<PathBuf>,
    /// Required when given.
    pub config_file: Option<PathBuf>,
    pub env_prefix: Option<String>,
}

impl Sources {
    /// The standard sources plus an explicit `config_file`.
    pub fn discover(config_file: Option<PathBuf>) -> Self {
        let user_config = match std::env::var_os("XDG_CONFIG_HOME") {
            Some(xdg_config_home) => Some(PathBuf::from(xdg_config_home)),
            None => home::home_dir().map(|home| home.join(".config")),
        }
        .map(|dir| dir.join("bootburn").join("config.toml"));

        Self {
            user_config,
            custom_config: std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from),
            config_file,
            env_prefix: Some(ENV_PREFIX.to_string()),
        }
    }
}

impl Settings {
    pub fn load(sources: &Sources) -> Result<Self, SettingsError> {
        let mut builder = Config::builder().add_source(File::from_str(DEFAULTS, FileFormat::Toml));

        for path in [&sources.user_config, &sources.custom_config].into_iter().flatten() {
            builder = builder.add_source(toml_file(path).required(false));
        }

        if let Some(path) = &sources.config_file {
            builder = builder.add_source(toml_file(path).required(true));
        }

        if let Some(prefix) = &sources.env_prefix {
            builder = builder.add_source(
                Environment::with_prefix(prefix)
                    .separator("_")
                    .try_parsing(true)
                    .list_separator(" ")
                    .with_list_parse_key("backend.args"),
            );
        }

        Ok(builder.build()?.try_deserialize()?)
    }
}

fn toml_file(path: &Path) -> File<config::FileSourceFile, FileFormat> {
    File::new(&path.to_string_lossy(), FileFormat::Toml)
}

/// Find the `--config-file` value before the full parse, which needs the
/// translations the configuration points to.
pub fn find_config_file_in_args(args: &[OsString]) -> Option<PathBuf> {
    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        let arg = arg.to_string_lossy();
        if arg == "--" {
            break;
        }
        if arg == CONFIG_FILE_FLAG {
            return iter.next().map(PathBuf::from);
        }
        if let Some(value) = arg.strip_prefix(CONFIG_FILE_FLAG).and_then(|rest| rest.strip_prefix('=')) {
            return Some(PathBuf::from(value));
        }
    }
    None
}
