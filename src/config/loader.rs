//! Configuration loading functionality
//!
//! This module contains functions for locating, loading, validating and
//! creating configuration files.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use log::debug;
use serde_yaml::{from_str, to_string};

use crate::utils::{expand_path, find_project_folder};

use super::model::{Config, ConfigOverrides};

/// Loads a configuration from a file
///
/// # Arguments
/// * `file` - Path to the configuration file
///
/// # Returns
/// * `Result<Config>` - The loaded configuration or an error
///
/// # Errors
/// Returns an error if the file cannot be read or if the configuration is invalid
pub fn load_config(file: &Path) -> Result<Config> {
    let config = parse_config_file(file)?;
    config.validate(true)?;
    Ok(config)
}

/// Loads a configuration from a file without checking path existence
///
/// This is primarily used for testing.
pub fn load_config_for_testing(file: &Path) -> Result<Config> {
    let config = parse_config_file(file)?;
    config.validate(false)?;
    Ok(config)
}

fn parse_config_file(file: &Path) -> Result<Config> {
    let file_content = fs::read(file).map_err(|e| {
        anyhow!(
            "Failed to read configuration file {}: {}",
            file.display(),
            e
        )
    })?;

    let content_str = String::from_utf8(file_content).map_err(|e| {
        anyhow!(
            "Configuration file {} contains invalid UTF-8 characters: {}",
            file.display(),
            e
        )
    })?;

    from_str(&content_str).map_err(|e| {
        anyhow!(
            "Failed to parse configuration file {}: {}\nPlease check the YAML syntax.",
            file.display(),
            e
        )
    })
}

/// Finds the configuration file to use
///
/// A path that exists is returned as is. Otherwise the file of the same name
/// in the platform configuration directory is tried, and the original path is
/// returned when that does not exist either.
pub fn resolve_config_path(config: &Path) -> PathBuf {
    if config.exists() {
        return config.to_path_buf();
    }

    let fallback = find_project_folder()
        .zip(config.file_name())
        .map(|(folder, name)| folder.config_dir().join(name));

    match fallback {
        Some(path) if path.exists() => {
            debug!("Using configuration from {}", path.display());
            path
        }
        _ => config.to_path_buf(),
    }
}

/// Produces the configuration for a run from the file and command-line overrides
///
/// When no configuration file can be found, the overrides must provide at
/// least the source directory and the output path.
///
/// # Errors
/// Returns an error if the file is unreadable or invalid, if no file exists
/// and the overrides are incomplete, or if the merged configuration is invalid
pub fn resolve_configuration(config_path: &Path, overrides: ConfigOverrides) -> Result<Config> {
    let located = resolve_config_path(config_path);

    let config = if located.exists() {
        let mut config = parse_config_file(&located)?;
        config.apply_overrides(overrides);
        config
    } else {
        overrides.into_config().ok_or_else(|| {
            anyhow!(
                "Configuration file {} not found.\n{}",
                config_path.display(),
                "Create one with --init, or pass both --source and --output."
            )
        })?
    };

    config.validate(true)?;
    Ok(config)
}

/// Writes the starter configuration to `path`
///
/// # Errors
/// Returns an error if the file already exists or cannot be written
pub fn write_default_config(path: &Path) -> Result<()> {
    if path.exists() {
        return Err(anyhow!(
            "Configuration file {} already exists, refusing to overwrite it",
            path.display()
        ));
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| anyhow!("Failed to create {}: {}", parent.display(), e))?;
    }

    let content = to_string(&Config::default())?;
    fs::write(path, content)
        .map_err(|e| anyhow!("Failed to write configuration file {}: {}", path.display(), e))?;

    Ok(())
}

/// Deserializes a path given either as a string or as an array of segments
///
/// `~` and environment variables are expanded in each form.
pub fn deserialize_path<'de, D>(deserializer: D) -> std::result::Result<PathBuf, D::Error>
where
    D: serde::Deserializer<'de>,
{
    struct PathVisitor;

    impl<'de> serde::de::Visitor<'de> for PathVisitor {
        type Value = PathBuf;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("a path string or an array of path segments")
        }

        fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(PathBuf::from(expand_path(value)))
        }

        fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Self::Value, A::Error>
        where
            A: serde::de::SeqAccess<'de>,
        {
            let mut path = PathBuf::new();
            while let Some(segment) = seq.next_element::<String>()? {
                path.push(expand_path(&segment));
            }
            Ok(path)
        }
    }

    deserializer.deserialize_any(PathVisitor)
}
