//! Configuration module for rowdiff.
//!
//! This module provides:
//! - Type-safe configuration structures
//! - Validation for configuration values
//! - Named presets for common use cases
//! - YAML config file loading and discovery
//!
//! # Quick Start
//!
//! ```rust
//! use rowdiff::config::{AppConfig, ConfigPreset};
//!
//! let config = AppConfig::from_preset(ConfigPreset::Strict);
//! let options = config.diff_options();
//! assert!(options.fuzzy_enabled());
//!
//! let config = AppConfig::builder()
//!     .threshold(0.75)
//!     .fail_on_change(true)
//!     .build();
//! assert!(config.behavior.fail_on_change);
//! ```
//!
//! # Configuration File
//!
//! Place a `.rowdiff.yaml` file in your project root or `~/.config/rowdiff/`:
//!
//! ```yaml
//! matching:
//!   threshold: 0.8
//! output:
//!   na_value: "N/A"
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

pub use defaults::{
    ConfigPreset, DEFAULT_LINE_TERMINATOR, DEFAULT_NA_VALUE, LOOSE_THRESHOLD, STRICT_THRESHOLD,
};
pub use types::{
    AppConfig, AppConfigBuilder, BehaviorConfig, ColumnsConfig, DiffConfig, DiffPaths,
    InputConfig, MatchingConfig, OutputConfig,
};
pub use validation::{ConfigError, Validatable};

pub use file::{
    discover_config_file, generate_example_config, generate_full_example_config, load_config_file,
    load_or_default, user_config_dir, ConfigFileError,
};

/// Generate a JSON Schema for the `.rowdiff.yaml` configuration format.
///
/// Editors can use it for validation and autocompletion.
pub fn generate_json_schema() -> Result<String, serde_json::Error> {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema)
}
