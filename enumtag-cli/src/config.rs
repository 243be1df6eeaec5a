//! Configuration management for the CLI.
//!
//! This module handles loading configuration from `enumtag.toml` files
//! and merging with command-line arguments. The three generation inputs
//! (type, file and package) can come from the config file, from the
//! `ENUMTAG_FILE` / `ENUMTAG_PACKAGE` environment variables or from flags;
//! [`Invocation`] checks that all three ended up set.

use crate::error::{CliResult, ConfigError};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default configuration filename.
pub const CONFIG_FILENAME: &str = "enumtag.toml";

/// Environment variable naming the source file.
pub const FILE_ENV: &str = "ENUMTAG_FILE";

/// Environment variable naming the package the generated code imports from.
pub const PACKAGE_ENV: &str = "ENUMTAG_PACKAGE";

/// Main configuration structure.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Generation inputs.
    pub generate: GenerateConfig,

    /// Output configuration.
    pub output: OutputConfig,
}

/// Generation inputs, all optional until merged with CLI arguments.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct GenerateConfig {
    /// Type to generate the encoding for.
    #[serde(rename = "type")]
    pub type_name: Option<String>,

    /// Source file declaring the tagged values.
    pub file: Option<PathBuf>,

    /// Module path the generated code imports the type and values from.
    pub package: Option<String>,
}

/// Output configuration.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Print generated code instead of writing it.
    pub dry_run: bool,
}

/// Configuration manager for loading and merging configs.
pub struct ConfigManager;

impl ConfigManager {
    /// Load configuration from a file path.
    ///
    /// If the path is None, attempts to load from the default location and
    /// returns the default configuration when no file exists there. An
    /// explicitly given path must exist.
    pub fn load(path: Option<&Path>) -> CliResult<Config> {
        let config_path = match path {
            Some(path) if !path.exists() => {
                return Err(ConfigError::not_found(path.to_path_buf()).into());
            }
            Some(path) => path.to_path_buf(),
            None => PathBuf::from(CONFIG_FILENAME),
        };

        if !config_path.exists() {
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(&config_path).map_err(|e| ConfigError::Io {
            path: config_path.clone(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| ConfigError::invalid_toml(config_path.clone(), e.to_string()))?;

        tracing::debug!(path = %config_path.display(), "loaded configuration");

        Ok(config)
    }

    /// Merge CLI arguments into configuration.
    ///
    /// CLI arguments take precedence over config file values.
    pub fn merge_cli_args(mut config: Config, args: &CliArgs) -> Config {
        if let Some(ref type_name) = args.type_name {
            config.generate.type_name = Some(type_name.clone());
        }

        if let Some(ref file) = args.file {
            config.generate.file = Some(file.clone());
        }

        if let Some(ref package) = args.package {
            config.generate.package = Some(package.clone());
        }

        if let Some(dry_run) = args.dry_run {
            config.output.dry_run = dry_run;
        }

        config
    }

    /// Generate default configuration file content with comments.
    pub fn default_config_content() -> &'static str {
        r#"# enumtag configuration file

[generate]
# Type to generate the JSON encoding for (overridden by --type)
# type = "Color"

# Source file declaring the tagged values (overridden by --file or ENUMTAG_FILE)
# file = "src/paint/color.rs"

# Module path the generated code imports the type and values from
# (overridden by --package or ENUMTAG_PACKAGE)
# package = "crate::paint"

[output]
# Print the generated code instead of writing it
dry_run = false
"#
    }
}

/// CLI arguments that can override configuration.
#[derive(Debug, Default)]
pub struct CliArgs {
    /// Type name override.
    pub type_name: Option<String>,

    /// Source file override.
    pub file: Option<PathBuf>,

    /// Package override.
    pub package: Option<String>,

    /// Dry run override.
    pub dry_run: Option<bool>,
}

/// The three validated inputs of one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Type to generate the encoding for.
    pub type_name: String,

    /// Source file declaring the tagged values.
    pub file: PathBuf,

    /// Module path the generated code imports from.
    pub package: String,
}

impl Invocation {
    /// Validate explicit inputs.
    ///
    /// Fails with a configuration error naming every empty input.
    pub fn new(
        type_name: impl Into<String>,
        file: impl Into<PathBuf>,
        package: impl Into<String>,
    ) -> CliResult<Self> {
        let invocation = Self {
            type_name: type_name.into(),
            file: file.into(),
            package: package.into(),
        };

        let mut missing = Vec::new();
        if invocation.type_name.is_empty() {
            missing.push("type");
        }
        if invocation.file.as_os_str().is_empty() {
            missing.push("file");
        }
        if invocation.package.is_empty() {
            missing.push("package");
        }

        if !missing.is_empty() {
            return Err(ConfigError::missing_inputs(missing).into());
        }

        Ok(invocation)
    }

    /// Take the inputs from a merged configuration.
    pub fn resolve(config: &Config) -> CliResult<Self> {
        let generate = &config.generate;
        Self::new(
            generate.type_name.clone().unwrap_or_default(),
            generate.file.clone().unwrap_or_default(),
            generate.package.clone().unwrap_or_default(),
        )
    }
}
