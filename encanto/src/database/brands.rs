//! Brand storage operations.

use rusqlite::{params, OptionalExtension, TransactionBehavior};

use crate::catalog::{now_millis, Brand, BrandId, NewBrand, Timestamps};
use crate::error::{Error, Result};

use super::connection::Database;
use super::rows::{row_to_brand, BRAND_COLUMNS};

const INSERT_BRAND: &str = r"
    INSERT INTO brands (name, description, image, created_at, updated_at)
    VALUES (?1, ?2, ?3, ?4, ?5)
";

const UPDATE_BRAND: &str = r"
    UPDATE brands SET name = ?2, description = ?3, image = ?4, updated_at = ?5
    WHERE id = ?1
";

const DELETE_BRAND: &str = "DELETE FROM brands WHERE id = ?1";

const COUNT_BRAND_PRODUCTS: &str = "SELECT COUNT(*) FROM products WHERE brand_id = ?1";

impl Database {
    /// Creates a brand.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] for a blank or over-long name or an
    /// invalid image path, or an error if the insert fails.
    pub fn create_brand(&mut self, new: &NewBrand) -> Result<Brand> {
        new.validate()?;
        let now = now_millis();

        self.conn.execute(
            INSERT_BRAND,
            params![
                new.name,
                new.description,
                new.image,
                now.timestamp_millis(),
                now.timestamp_millis()
            ],
        )?;
        let id = BrandId(self.conn.last_insert_rowid());

        log::debug!("created brand {id} '{}'", new.name);

        Ok(Brand {
            id,
            name: new.name.clone(),
            description: new.description.clone(),
            image: new.image.clone(),
            timestamps: Timestamps::at(now),
        })
    }

    /// Replaces the fields of an existing brand.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no brand has this id, or the same
    /// validation errors as [`create_brand`](Self::create_brand).
    pub fn update_brand(&mut self, id: BrandId, new: &NewBrand) -> Result<Brand> {
        new.validate()?;
        let now = now_millis();

        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let existing = tx
            .query_row(
                &format!("SELECT {BRAND_COLUMNS} FROM brands WHERE id = ?1"),
                params![id],
                row_to_brand,
            )
            .optional()?
            .ok_or_else(|| Error::not_found(format!("brand {id}")))?;

        tx.execute(
            UPDATE_BRAND,
            params![
                id,
                new.name,
                new.description,
                new.image,
                now.timestamp_millis()
            ],
        )?;
        tx.commit()?;

        Ok(Brand {
            id,
            name: new.name.clone(),
            description: new.description.clone(),
            image: new.image.clone(),
            timestamps: existing.timestamps.touched(now),
        })
    }

    /// Gets a brand by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_brand(&self, id: BrandId) -> Result<Option<Brand>> {
        let brand = self
            .conn
            .query_row(
                &format!("SELECT {BRAND_COLUMNS} FROM brands WHERE id = ?1"),
                params![id],
                row_to_brand,
            )
            .optional()?;
        Ok(brand)
    }

    /// Lists all brands ordered by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_brands(&self) -> Result<Vec<Brand>> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {BRAND_COLUMNS} FROM brands ORDER BY name, id"))?;
        let brands = stmt
            .query_map([], row_to_brand)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(brands)
    }

    /// Deletes a brand that no product references.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no brand has this id, or
    /// [`Error::ProtectedReference`] if products reference it.
    pub fn delete_brand(&mut self, id: BrandId) -> Result<()> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let dependents: i64 = tx.query_row(COUNT_BRAND_PRODUCTS, params![id], |row| row.get(0))?;
        if dependents > 0 {
            log::warn!("refusing to delete brand {id}: {dependents} product(s) reference it");
            return Err(Error::ProtectedReference {
                entity: "brand",
                id: id.value(),
                dependents: usize::try_from(dependents).unwrap_or(usize::MAX),
            });
        }

        if tx.execute(DELETE_BRAND, params![id])? == 0 {
            return Err(Error::not_found(format!("brand {id}")));
        }
        tx.commit()?;

        log::debug!("deleted brand {id}");
        Ok(())
    }
}
