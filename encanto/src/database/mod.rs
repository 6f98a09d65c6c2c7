//! Database layer for persistent storage of the catalog.
//!
//! This module provides a SQLite-based storage layer for categories,
//! brands, products and product images, including connection management,
//! backend checks, schema versioning, and CRUD operations.
//!
//! # Examples
//!
//! ```no_run
//! use encanto::catalog::NewCategory;
//! use encanto::database::{Database, DatabaseConfig};
//!
//! let config = DatabaseConfig::new("/tmp/encanto.db");
//! let mut db = Database::open(config).unwrap();
//!
//! db.save_category(&NewCategory::new("electronics".parse().unwrap())).unwrap();
//! db.save_category(&NewCategory::new("electronics.phones".parse().unwrap())).unwrap();
//!
//! for category in db.list_categories().unwrap() {
//!     println!("{}", category.path);
//! }
//! ```

mod backend;
mod brands;
mod categories;
mod config;
mod connection;
mod images;
pub mod migrations;
mod products;
mod rows;
mod schema;

#[cfg(test)]
pub(crate) mod test_util;

pub use backend::{ensure_path_support, StorageBackend, MIN_SQLITE_VERSION};
pub use config::{
    default_data_dir, resolve_data_dir, resolve_database_path, DatabaseConfig, DATABASE_FILE_NAME,
    DEFAULT_BACKEND,
};
pub use connection::Database;

// Re-export migration functions for advanced use cases
pub use migrations::{check_schema_compatibility, get_schema_version, initialize_schema};
