//! Explicit data directory and database initialization.
//!
//! Commands normally create the catalog on first use. `init` does the same
//! work up front, and can optionally replace an existing catalog or drop a
//! commented configuration template next to it.

use std::fs;
use std::path::PathBuf;

use crate::config::USER_CONFIG_FILE;
use crate::database::DATABASE_FILE_NAME;
use crate::error::{Error, Result};
use crate::{Database, DatabaseConfig};

/// Options for initialization.
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Data directory to initialize.
    pub data_dir: PathBuf,
    /// Replace an existing catalog database.
    pub overwrite: bool,
    /// Write a configuration template if none exists.
    pub create_config: bool,
}

impl InitOptions {
    /// Options that create `data_dir` and its database, and nothing else.
    #[must_use]
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            overwrite: false,
            create_config: false,
        }
    }

    /// Sets whether to replace an existing database.
    #[must_use]
    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Sets whether to write the configuration template.
    #[must_use]
    pub fn with_create_config(mut self, create_config: bool) -> Self {
        self.create_config = create_config;
        self
    }
}

/// What initialization did.
#[derive(Debug)]
pub struct InitResult {
    /// The data directory did not exist before.
    pub data_dir_created: bool,
    /// A previous database was removed first.
    pub database_replaced: bool,
    /// The configuration template was written.
    pub config_created: bool,
    /// Path of the catalog database.
    pub database_path: PathBuf,
}

const DEFAULT_CONFIG_TEMPLATE: &str = r#"# encanto configuration
#
# Values here apply to every project; an encanto.yaml in a project
# directory overrides them, and ENCANTO_* environment variables override both.

# database:
#   backend: sqlite
#   path: /absolute/path/to/encanto.db
#   busy_timeout_ms: 5000

# Separator used when typing category paths on the command line.
# path_separator: "."

# table | json | csv | tsv
# output_format: table

# quiet | normal | verbose
# log_mode: normal

# disable_autoinit: false
"#;

/// Create the data directory, the catalog database and, optionally, a
/// configuration template.
///
/// # Errors
///
/// Returns an error if:
/// - The database already exists and `overwrite` is not set
/// - The data directory, database or template cannot be written
///
/// # Examples
///
/// ```no_run
/// use encanto::operations::init::{init_database, InitOptions};
/// use std::path::PathBuf;
///
/// let options = InitOptions::new(PathBuf::from("/tmp/encanto-data")).with_create_config(true);
/// let result = init_database(&options).unwrap();
/// println!("catalog at {}", result.database_path.display());
/// ```
pub fn init_database(options: &InitOptions) -> Result<InitResult> {
    let data_dir_created = !options.data_dir.exists();
    if data_dir_created {
        fs::create_dir_all(&options.data_dir)?;
    }

    let database_path = options.data_dir.join(DATABASE_FILE_NAME);
    let database_replaced = database_path.exists();

    if database_replaced {
        if !options.overwrite {
            return Err(Error::Validation {
                field: "database".into(),
                message: format!(
                    "database already exists at {}; use --overwrite to replace it",
                    database_path.display()
                ),
            });
        }
        log::info!("removing existing catalog {}", database_path.display());
        fs::remove_file(&database_path)?;
        for suffix in ["-wal", "-shm"] {
            let sidecar = options
                .data_dir
                .join(format!("{DATABASE_FILE_NAME}{suffix}"));
            if sidecar.exists() {
                fs::remove_file(sidecar)?;
            }
        }
    }

    Database::open(DatabaseConfig::new(&database_path))?;

    let mut config_created = false;
    if options.create_config {
        let config_path = options.data_dir.join(USER_CONFIG_FILE);
        if !config_path.exists() {
            fs::write(&config_path, DEFAULT_CONFIG_TEMPLATE)?;
            config_created = true;
        }
    }

    Ok(InitResult {
        data_dir_created,
        database_replaced,
        config_created,
        database_path,
    })
}
