//! Database schema management and migrations.
//!
//! This module handles database schema initialization and version checking.

use rusqlite::Connection;

use crate::error::{Error, Result};

use super::schema::{
    CREATE_BRANDS_TABLE, CREATE_CATEGORIES_TABLE, CREATE_CATEGORY_CREATED_INDEX,
    CREATE_CATEGORY_PATH_INDEX, CREATE_METADATA_TABLE, CREATE_PRODUCTS_TABLE,
    CREATE_PRODUCT_BRAND_INDEX, CREATE_PRODUCT_CATEGORY_INDEX, CREATE_PRODUCT_CREATED_INDEX,
    CREATE_PRODUCT_IMAGES_TABLE, CREATE_PRODUCT_IMAGE_INDEX, CURRENT_SCHEMA_VERSION,
    INSERT_SCHEMA_VERSION, SELECT_SCHEMA_VERSION,
};

/// Initializes the database schema.
///
/// Creates all tables, indices, and metadata in one transaction.
///
/// # Errors
///
/// Returns an error if any SQL statement fails to execute.
///
/// # Examples
///
/// ```
/// use rusqlite::Connection;
/// use encanto::database::migrations::initialize_schema;
///
/// let conn = Connection::open_in_memory().unwrap();
/// initialize_schema(&conn).unwrap();
/// ```
pub fn initialize_schema(conn: &Connection) -> Result<()> {
    let statements = [
        CREATE_METADATA_TABLE,
        CREATE_CATEGORIES_TABLE,
        CREATE_BRANDS_TABLE,
        CREATE_PRODUCTS_TABLE,
        CREATE_PRODUCT_IMAGES_TABLE,
        CREATE_CATEGORY_PATH_INDEX,
        CREATE_CATEGORY_CREATED_INDEX,
        CREATE_PRODUCT_CATEGORY_INDEX,
        CREATE_PRODUCT_BRAND_INDEX,
        CREATE_PRODUCT_CREATED_INDEX,
        CREATE_PRODUCT_IMAGE_INDEX,
    ];

    conn.execute_batch("BEGIN IMMEDIATE")?;
    for sql in statements {
        if let Err(e) = conn.execute(sql, []) {
            conn.execute_batch("ROLLBACK")?;
            return Err(e.into());
        }
    }
    if let Err(e) = conn.execute(INSERT_SCHEMA_VERSION, [CURRENT_SCHEMA_VERSION.to_string()]) {
        conn.execute_batch("ROLLBACK")?;
        return Err(e.into());
    }
    conn.execute_batch("COMMIT")?;

    log::debug!("initialized catalog schema version {CURRENT_SCHEMA_VERSION}");
    Ok(())
}

/// Gets the current schema version from the database.
///
/// # Errors
///
/// Returns an error if the query fails for reasons other than a missing
/// metadata table or row.
///
/// # Returns
///
/// - `Ok(0)` if the metadata table doesn't exist or has no version
/// - `Ok(version)` if a version is found
pub fn get_schema_version(conn: &Connection) -> Result<i32> {
    let has_metadata: bool = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'metadata')",
        [],
        |row| row.get(0),
    )?;
    if !has_metadata {
        return Ok(0);
    }

    match conn.query_row(SELECT_SCHEMA_VERSION, [], |row| {
        let value: String = row.get(0)?;
        value.parse::<i32>().map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
        })
    }) {
        Ok(version) => Ok(version),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(0),
        Err(e) => Err(e.into()),
    }
}

/// Fails unless the stored schema version matches this build.
///
/// # Errors
///
/// Returns [`Error::UnsupportedSchemaVersion`] on any mismatch, including an
/// uninitialized database.
pub fn verify_schema_version(conn: &Connection) -> Result<()> {
    let version = get_schema_version(conn)?;
    if version == CURRENT_SCHEMA_VERSION {
        Ok(())
    } else {
        Err(Error::UnsupportedSchemaVersion {
            expected: CURRENT_SCHEMA_VERSION,
            found: version,
        })
    }
}

/// Checks schema compatibility and initializes if needed.
///
/// A fresh database is initialized; any other version than the current one
/// is rejected, as there are no migrations yet.
///
/// # Errors
///
/// Returns an error if:
/// - Schema version is incompatible (too old or too new)
/// - Schema initialization fails
/// - Database queries fail
pub fn check_schema_compatibility(conn: &Connection) -> Result<()> {
    match get_schema_version(conn)? {
        0 => initialize_schema(conn),
        _ => verify_schema_version(conn),
    }
}
