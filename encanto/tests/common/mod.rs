//! Common test utilities for integration tests.
//!
//! This module provides helper functions and fixture builders for testing
//! the encanto library.

use std::path::PathBuf;

use encanto::catalog::{BrandId, CategoryId, NewBrand, NewCategory, NewProduct};
use encanto::database::{Database, DatabaseConfig};
use encanto::{Category, HierarchicalPath};
use rust_decimal::Decimal;

/// Creates a temporary test database that will be cleaned up when dropped.
///
/// The temporary directory is leaked so the file outlives this call.
#[allow(dead_code)]
pub fn create_test_database() -> Database {
    let (db, _) = create_shared_database();
    db
}

/// Creates a file-backed database and returns its path so further
/// connections can be opened on it.
#[allow(dead_code)]
pub fn create_shared_database() -> (Database, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.db");
    let db = Database::open(DatabaseConfig::new(&path)).unwrap();

    // Prevent the TempDir from being dropped immediately
    std::mem::forget(dir);

    (db, path)
}

/// Parses a `.`-separated path.
#[allow(dead_code)]
pub fn path(s: &str) -> HierarchicalPath {
    s.parse().unwrap()
}

/// Saves each path in order, panicking on the first failure.
#[allow(dead_code)]
pub fn save_all(db: &mut Database, paths: &[&str]) -> Vec<Category> {
    paths
        .iter()
        .map(|p| db.save_category(&NewCategory::new(path(p))).unwrap())
        .collect()
}

/// Builder for creating test products with sensible defaults.
///
/// # Examples
///
/// ```no_run
/// # use common::ProductFixture;
/// let product = ProductFixture::new(category, brand)
///     .with_name("Kite")
///     .with_price("12.50")
///     .build();
/// ```
#[allow(dead_code)]
pub struct ProductFixture {
    name: String,
    description: String,
    price: Decimal,
    quantity: u32,
    category: CategoryId,
    brand: BrandId,
}

#[allow(dead_code)]
impl ProductFixture {
    /// Creates a new fixture builder.
    ///
    /// Defaults:
    /// - name: "Test product"
    /// - description: ""
    /// - price: 1.00
    /// - quantity: 1
    pub fn new(category: CategoryId, brand: BrandId) -> Self {
        Self {
            name: "Test product".into(),
            description: String::new(),
            price: Decimal::new(100, 2),
            quantity: 1,
            category,
            brand,
        }
    }

    /// Sets the product name.
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the price from a decimal string.
    pub fn with_price(mut self, price: &str) -> Self {
        self.price = price.parse().unwrap();
        self
    }

    /// Sets the quantity in stock.
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    /// Builds the product fields.
    pub fn build(self) -> NewProduct {
        NewProduct::new(
            self.name,
            self.description,
            self.price,
            self.quantity,
            self.category,
            self.brand,
        )
    }
}

/// Seeds one category and one brand for product tests.
#[allow(dead_code)]
pub fn seed_category_and_brand(db: &mut Database) -> (Category, encanto::Brand) {
    let category = db.save_category(&NewCategory::new(path("toys"))).unwrap();
    let brand = db
        .create_brand(&NewBrand::new("Acme", "Everything"))
        .unwrap();
    (category, brand)
}
