use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

/// Main application configuration
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
  pub storage: StorageConfig,
  pub export: ExportConfig,
}

/// Storage configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
  /// Directory holding the invoice collection and company profile files.
  pub data_dir: PathBuf,
}

impl Default for StorageConfig {
  fn default() -> Self {
    Self {
      data_dir: PathBuf::from("data"),
    }
  }
}

/// Document export configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
  /// Directory exported invoice documents are written into.
  pub output_dir: PathBuf,
}

impl Default for ExportConfig {
  fn default() -> Self {
    Self {
      output_dir: PathBuf::from("exports"),
    }
  }
}

impl Config {
  /// Load configuration from files and environment variables
  ///
  /// Configuration is loaded in the following order (later sources override
  /// earlier ones):
  /// 1. config/default.toml
  /// 2. config/local.toml (if exists)
  /// 3. Environment variables with QUICKBILL_ prefix
  ///
  /// Environment variables use a double underscore as section separator:
  /// - `QUICKBILL_STORAGE__DATA_DIR=/home/me/.quickbill`
  /// - `QUICKBILL_EXPORT__OUTPUT_DIR=/home/me/Documents/invoices`
  ///
  /// Every setting has a default, so running without any config file works.
  pub fn load() -> Result<Self, ConfigError> {
    let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

    let config = ConfigBuilder::builder()
      .add_source(File::with_name("config/default").required(false))
      .add_source(File::with_name("config/local").required(false))
      .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
      .add_source(
        Environment::with_prefix("QUICKBILL")
          .prefix_separator("_")
          .separator("__"),
      )
      .build()?;

    config.try_deserialize()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_defaults() {
    let config = Config::default();
    assert_eq!(config.storage.data_dir, PathBuf::from("data"));
    assert_eq!(config.export.output_dir, PathBuf::from("exports"));
  }
}
