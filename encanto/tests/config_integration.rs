//! Integration tests for layered configuration.
//!
//! Tests that modify environment variables are marked with `#[serial]`;
//! environment variables are process-global, so concurrent access would race.

use serial_test::serial;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use encanto::config::{Config, ConfigBuilder, OutputFormat};
use encanto::error::Error;
use encanto::{Database, LogLevel};

// ============================================================================
// Test Utilities
// ============================================================================

fn create_temp_config(dir: &Path, filename: &str, content: &str) -> PathBuf {
    let path = dir.join(filename);
    fs::write(&path, content).unwrap();
    path
}

/// RAII guard for setting and restoring environment variables.
struct EnvGuard {
    key: String,
    old_value: Option<String>,
}

impl EnvGuard {
    fn new(key: &str, value: &str) -> Self {
        let old_value = env::var(key).ok();
        env::set_var(key, value);
        Self {
            key: key.to_string(),
            old_value,
        }
    }

    fn remove(key: &str) -> Self {
        let old_value = env::var(key).ok();
        env::remove_var(key);
        Self {
            key: key.to_string(),
            old_value,
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.old_value {
            Some(val) => env::set_var(&self.key, val),
            None => env::remove_var(&self.key),
        }
    }
}

fn clear_encanto_env_vars() -> Vec<EnvGuard> {
    [
        "ENCANTO_DATA_DIR",
        "ENCANTO_DB_BACKEND",
        "ENCANTO_DB_PATH",
        "ENCANTO_BUSY_TIMEOUT_MS",
        "ENCANTO_PATH_SEPARATOR",
        "ENCANTO_OUTPUT_FORMAT",
        "ENCANTO_LOG_MODE",
        "ENCANTO_DISABLE_AUTOINIT",
    ]
    .iter()
    .map(|k| EnvGuard::remove(k))
    .collect()
}

/// A project directory nested inside a data directory, both temporary.
struct Layout {
    _root: TempDir,
    data_dir: PathBuf,
    project: PathBuf,
}

impl Layout {
    fn new() -> Self {
        let root = TempDir::new().unwrap();
        let data_dir = root.path().join("data");
        let project = root.path().join("work").join("shop").join("src");
        fs::create_dir_all(&data_dir).unwrap();
        fs::create_dir_all(&project).unwrap();
        Self {
            data_dir,
            project,
            _root: root,
        }
    }

    fn builder(&self) -> ConfigBuilder {
        ConfigBuilder::new()
            .with_working_dir(&self.project)
            .with_data_dir(&self.data_dir)
    }
}

// ============================================================================
// Discovery and precedence
// ============================================================================

#[test]
fn test_project_config_found_by_walking_up() {
    let layout = Layout::new();
    let shop = layout.project.parent().unwrap();
    create_temp_config(shop, "encanto.yaml", "path_separator: \"/\"\n");

    let config = layout.builder().skip_env().build().unwrap();
    assert_eq!(config.separator(), "/");
}

#[test]
fn test_nearest_project_config_wins() {
    let layout = Layout::new();
    let shop = layout.project.parent().unwrap();
    let work = shop.parent().unwrap();
    create_temp_config(work, "encanto.yaml", "output_format: csv\n");
    create_temp_config(shop, "encanto.yaml", "output_format: tsv\n");

    let config = layout.builder().skip_env().build().unwrap();
    assert_eq!(config.output_format(), OutputFormat::Tsv);
}

#[test]
fn test_project_beats_user_field_by_field() {
    let layout = Layout::new();
    create_temp_config(
        &layout.data_dir,
        "config.yaml",
        "output_format: json\ndatabase:\n  busy_timeout_ms: 900\n  backend: sqlite\n",
    );
    create_temp_config(
        &layout.project,
        "encanto.yaml",
        "output_format: csv\ndatabase:\n  busy_timeout_ms: 100\n",
    );

    let config = layout.builder().skip_env().build().unwrap();
    assert_eq!(config.output_format(), OutputFormat::Csv);
    let database = config.database.unwrap();
    assert_eq!(database.busy_timeout_ms, Some(100));
    assert_eq!(database.backend.as_deref(), Some("sqlite"));
}

#[test]
#[serial]
fn test_environment_beats_files() {
    let _clean = clear_encanto_env_vars();
    let layout = Layout::new();
    create_temp_config(&layout.data_dir, "config.yaml", "log_mode: quiet\n");
    create_temp_config(
        &layout.project,
        "encanto.yaml",
        "output_format: csv\npath_separator: \"/\"\n",
    );

    let _format = EnvGuard::new("ENCANTO_OUTPUT_FORMAT", "json");
    let _mode = EnvGuard::new("ENCANTO_LOG_MODE", "verbose");

    let config = layout.builder().build().unwrap();
    assert_eq!(config.output_format(), OutputFormat::Json);
    assert_eq!(config.log_mode, Some(LogLevel::Verbose));
    assert_eq!(config.separator(), "/");
}

#[test]
#[serial]
fn test_explicit_overrides_beat_environment() {
    let _clean = clear_encanto_env_vars();
    let layout = Layout::new();
    let _sep = EnvGuard::new("ENCANTO_PATH_SEPARATOR", ">");

    let config = layout
        .builder()
        .with_config(Config {
            path_separator: Some("::".into()),
            ..Default::default()
        })
        .build()
        .unwrap();
    assert_eq!(config.separator(), "::");
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_unknown_field_rejected() {
    let layout = Layout::new();
    create_temp_config(&layout.project, "encanto.yaml", "port_min: 5000\n");

    let err = layout.builder().skip_env().build().unwrap_err();
    assert!(matches!(err, Error::Configuration(_)));
}

#[test]
fn test_invalid_merged_config_rejected() {
    let layout = Layout::new();
    create_temp_config(
        &layout.project,
        "encanto.yaml",
        "database:\n  busy_timeout_ms: 0\n",
    );

    let err = layout.builder().skip_env().build().unwrap_err();
    assert!(matches!(err, Error::Validation { ref field, .. } if field == "database.busy_timeout_ms"));
}

#[test]
#[serial]
fn test_malformed_environment_value_rejected() {
    let _clean = clear_encanto_env_vars();
    let layout = Layout::new();
    let _flag = EnvGuard::new("ENCANTO_DISABLE_AUTOINIT", "sometimes");

    let err = layout.builder().skip_files().build().unwrap_err();
    assert!(matches!(err, Error::Validation { ref field, .. } if field == "ENCANTO_DISABLE_AUTOINIT"));
}

#[test]
fn test_empty_file_is_empty_config() {
    let layout = Layout::new();
    create_temp_config(&layout.project, "encanto.yaml", "\n");

    let config = layout.builder().skip_env().build().unwrap();
    assert_eq!(config, Config::default());
}

// ============================================================================
// From configuration to storage
// ============================================================================

#[test]
fn test_database_opened_from_config() {
    let layout = Layout::new();
    create_temp_config(
        &layout.project,
        "encanto.yaml",
        "database:\n  backend: SQLite\n  busy_timeout_ms: 250\n",
    );

    let config = layout.builder().skip_env().build().unwrap();
    let db_config = config.database_config(&layout.data_dir);
    assert_eq!(db_config.path, layout.data_dir.join("encanto.db"));

    let db = Database::open(db_config).unwrap();
    assert_eq!(db.config().busy_timeout.as_millis(), 250);
    assert!(layout.data_dir.join("encanto.db").exists());
}

#[test]
fn test_unsupported_backend_rejected_at_open() {
    let layout = Layout::new();
    create_temp_config(
        &layout.project,
        "encanto.yaml",
        "database:\n  backend: postgresql\n",
    );

    let config = layout.builder().skip_env().build().unwrap();
    let db_path = layout.data_dir.join("encanto.db");
    let err = Database::open(config.database_config(&layout.data_dir)).unwrap_err();

    assert!(matches!(
        err,
        Error::UnsupportedStorageBackend { ref backend, .. } if backend == "postgresql"
    ));
    assert!(!db_path.exists());
}

#[test]
fn test_disabled_autoinit_does_not_create_database() {
    let layout = Layout::new();
    create_temp_config(&layout.project, "encanto.yaml", "disable_autoinit: true\n");

    let config = layout.builder().skip_env().build().unwrap();
    let db_config = config.database_config(&layout.data_dir.join("missing"));
    assert!(!db_config.auto_create);

    assert!(Database::open(db_config).is_err());
    assert!(!layout.data_dir.join("missing").exists());
}
