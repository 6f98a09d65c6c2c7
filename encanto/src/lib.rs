#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # encanto
//!
//! A catalog library: categories arranged in a tree of hierarchical paths,
//! brands, products and product images, stored in SQLite.
//!
//! ## Core Types
//!
//! - [`HierarchicalPath`]: a category's position in the tree
//! - [`Database`]: catalog storage and the category write rule
//! - [`catalog`]: the records stored in the catalog
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Config`] and [`ConfigBuilder`]: layered configuration
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//! - [`operations::init_database`]: explicit catalog initialization
//!
//! ## Examples
//!
//! ```
//! use encanto::catalog::NewCategory;
//! use encanto::{Database, Error, HierarchicalPath};
//!
//! let mut db = Database::open_in_memory().unwrap();
//!
//! let path: HierarchicalPath = "electronics".parse().unwrap();
//! db.save_category(&NewCategory::new(path)).unwrap();
//!
//! let phones = db
//!     .save_category(&NewCategory::new("electronics.phones".parse().unwrap()))
//!     .unwrap();
//! assert_eq!(phones.path.labels(), ["Electronics", "Phones"]);
//!
//! let err = db
//!     .save_category(&NewCategory::new("garden.tools".parse().unwrap()))
//!     .unwrap_err();
//! assert!(matches!(err, Error::MissingAncestor { .. }));
//! ```

pub mod catalog;
pub mod config;
pub mod database;
pub mod error;
pub mod logging;
pub mod operations;
pub mod path;

// Re-export key types at crate root for convenience
pub use catalog::{
    Brand, BrandId, Category, CategoryId, NewBrand, NewCategory, NewProduct, NewProductImage,
    Product, ProductId, ProductImage, ProductImageId, ProductView, Timestamps,
};
pub use config::{Config, ConfigBuilder, OutputFormat};
pub use database::{Database, DatabaseConfig, StorageBackend};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::{HierarchicalPath, PathInput, PathRelationship};
