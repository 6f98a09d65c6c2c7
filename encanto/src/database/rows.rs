//! Row mappers shared by the catalog queries.
//!
//! Each mapper expects the column order of the matching `*_COLUMNS`
//! constant.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use rusqlite::types::Type;
use rusqlite::Row;
use rust_decimal::Decimal;

use crate::catalog::{from_millis, Brand, Category, Product, ProductImage, Timestamps};

pub(super) const CATEGORY_COLUMNS: &str = "id, path, image, created_at, updated_at";

pub(super) const BRAND_COLUMNS: &str = "id, name, description, image, created_at, updated_at";

pub(super) const PRODUCT_COLUMNS: &str =
    "id, name, description, price, quantity, category_id, brand_id, created_at, updated_at";

pub(super) const PRODUCT_IMAGE_COLUMNS: &str = "id, image, product_id, created_at";

fn timestamp(row: &Row<'_>, idx: usize, field: &str) -> rusqlite::Result<DateTime<Utc>> {
    let millis: i64 = row.get(idx)?;
    from_millis(field, millis)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Integer, Box::new(e)))
}

fn timestamps(row: &Row<'_>, created: usize) -> rusqlite::Result<Timestamps> {
    Ok(Timestamps {
        created_at: timestamp(row, created, "created_at")?,
        updated_at: timestamp(row, created + 1, "updated_at")?,
    })
}

pub(super) fn row_to_category(row: &Row<'_>) -> rusqlite::Result<Category> {
    Ok(Category {
        id: row.get(0)?,
        path: row.get(1)?,
        image: row.get(2)?,
        timestamps: timestamps(row, 3)?,
    })
}

pub(super) fn row_to_brand(row: &Row<'_>) -> rusqlite::Result<Brand> {
    Ok(Brand {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        image: row.get(3)?,
        timestamps: timestamps(row, 4)?,
    })
}

pub(super) fn row_to_product(row: &Row<'_>) -> rusqlite::Result<Product> {
    let price_text: String = row.get(3)?;
    let price = Decimal::from_str(&price_text)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(e)))?;

    let quantity: i64 = row.get(4)?;
    let quantity =
        u32::try_from(quantity).map_err(|_| rusqlite::Error::IntegralValueOutOfRange(4, quantity))?;

    Ok(Product {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        price,
        quantity,
        category: row.get(5)?,
        brand: row.get(6)?,
        timestamps: timestamps(row, 7)?,
    })
}

pub(super) fn row_to_product_image(row: &Row<'_>) -> rusqlite::Result<ProductImage> {
    Ok(ProductImage {
        id: row.get(0)?,
        image: row.get(1)?,
        product: row.get(2)?,
        created_at: timestamp(row, 3, "created_at")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn test_corrupt_price_is_a_conversion_error() {
        let conn = Connection::open_in_memory().unwrap();
        let result = conn.query_row(
            "SELECT 1, 'n', 'd', 'abc', 1, 1, 1, 0, 0",
            [],
            row_to_product,
        );
        assert!(matches!(
            result,
            Err(rusqlite::Error::FromSqlConversionFailure(3, Type::Text, _))
        ));
    }

    #[test]
    fn test_negative_quantity_rejected() {
        let conn = Connection::open_in_memory().unwrap();
        let result = conn.query_row(
            "SELECT 1, 'n', 'd', '1.00', -1, 1, 1, 0, 0",
            [],
            row_to_product,
        );
        assert!(matches!(
            result,
            Err(rusqlite::Error::IntegralValueOutOfRange(4, -1))
        ));
    }

    #[test]
    fn test_category_row() {
        let conn = Connection::open_in_memory().unwrap();
        let category = conn
            .query_row(
                "SELECT 4, 'Home.Kitchen', NULL, 1000, 2000",
                [],
                row_to_category,
            )
            .unwrap();
        assert_eq!(category.path.labels(), ["Home", "Kitchen"]);
        assert_eq!(category.timestamps.updated_at.timestamp_millis(), 2000);
    }
}
