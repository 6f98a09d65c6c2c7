//! Database schema definitions and SQL constants.
//!
//! This module contains all SQL table definitions, indices, and constants
//! related to the catalog schema.

/// Current schema version for the database.
///
/// This version is stored in the metadata table and is used to ensure
/// compatibility between the database and the application.
pub const CURRENT_SCHEMA_VERSION: i32 = 1;

/// SQL statement to create the metadata table.
pub const CREATE_METADATA_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS metadata (
        key TEXT PRIMARY KEY NOT NULL,
        value TEXT NOT NULL
    )";

/// SQL statement to create the categories table.
///
/// `path` holds the canonical `.`-joined form. Paths are not unique.
pub const CREATE_CATEGORIES_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS categories (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        path TEXT NOT NULL,
        image TEXT,
        created_at INTEGER NOT NULL,
        updated_at INTEGER NOT NULL
    )";

/// SQL statement to create the brands table.
pub const CREATE_BRANDS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS brands (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        description TEXT NOT NULL,
        image TEXT,
        created_at INTEGER NOT NULL,
        updated_at INTEGER NOT NULL
    )";

/// SQL statement to create the products table.
///
/// Prices are stored as decimal text with two places.
pub const CREATE_PRODUCTS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS products (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        description TEXT NOT NULL,
        price TEXT NOT NULL,
        quantity INTEGER NOT NULL CHECK (quantity >= 0),
        category_id INTEGER NOT NULL REFERENCES categories(id) ON DELETE RESTRICT,
        brand_id INTEGER NOT NULL REFERENCES brands(id) ON DELETE RESTRICT,
        created_at INTEGER NOT NULL,
        updated_at INTEGER NOT NULL
    )";

/// SQL statement to create the product images table.
pub const CREATE_PRODUCT_IMAGES_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS product_images (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        image TEXT NOT NULL,
        product_id INTEGER NOT NULL REFERENCES products(id) ON DELETE CASCADE,
        created_at INTEGER NOT NULL
    )";

/// Index backing exact and prefix-range lookups on category paths.
pub const CREATE_CATEGORY_PATH_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_categories_path ON categories(path)";

/// Index backing "latest category" queries.
pub const CREATE_CATEGORY_CREATED_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_categories_created_at ON categories(created_at)";

/// Index backing products-of-category lookups and delete protection.
pub const CREATE_PRODUCT_CATEGORY_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_products_category ON products(category_id)";

/// Index backing products-of-brand lookups and delete protection.
pub const CREATE_PRODUCT_BRAND_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_products_brand ON products(brand_id)";

/// Index backing "latest product" queries.
pub const CREATE_PRODUCT_CREATED_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_products_created_at ON products(created_at)";

/// Index backing images-of-product lookups.
pub const CREATE_PRODUCT_IMAGE_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_product_images_product ON product_images(product_id)";

/// SQL statement to select the schema version from the metadata table.
pub const SELECT_SCHEMA_VERSION: &str = "SELECT value FROM metadata WHERE key = 'schema_version'";

/// SQL statement to insert or update the schema version in the metadata table.
pub const INSERT_SCHEMA_VERSION: &str =
    "INSERT OR REPLACE INTO metadata (key, value) VALUES ('schema_version', ?)";
