//! Configuration system for encanto.
//!
//! This module provides hierarchical configuration with support for:
//! - YAML configuration files (user config and project `encanto.yaml`)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//! - Validation of the merged result
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`ENCANTO_*`)
//! 3. Project config (nearest `encanto.yaml` at or above the working directory)
//! 4. User config (`{data_dir}/config.yaml`)
//! 5. Built-in defaults
//!
//! # Examples
//!
//! ```no_run
//! use encanto::config::ConfigBuilder;
//! use std::path::Path;
//!
//! let config = ConfigBuilder::new()
//!     .with_working_dir(Path::new("/path/to/shop"))
//!     .build()
//!     .unwrap();
//!
//! let db = config.database_config(Path::new("/var/lib/encanto"));
//! println!("catalog at {}", db.path.display());
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource, PROJECT_CONFIG_FILE, USER_CONFIG_FILE};
pub use merger::ConfigMerger;
pub use schema::{Config, DatabaseSettings, OutputFormat, DEFAULT_BUSY_TIMEOUT_MS};
pub use validator::ConfigValidator;
