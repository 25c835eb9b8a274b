//! Configuration module
//!
//! This module contains components for loading and validating configuration.

mod loader;
mod model;

pub use loader::{
    deserialize_path, load_config, load_config_for_testing, resolve_config_path,
    resolve_configuration, write_default_config,
};
pub use model::{Config, ConfigOverrides};
