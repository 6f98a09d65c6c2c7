//! Product image storage operations.

use rusqlite::{params, OptionalExtension, TransactionBehavior};

use crate::catalog::{now_millis, NewProductImage, ProductId, ProductImage, ProductImageId};
use crate::error::{Error, Result};

use super::connection::Database;
use super::rows::{row_to_product_image, PRODUCT_IMAGE_COLUMNS};

const INSERT_PRODUCT_IMAGE: &str = r"
    INSERT INTO product_images (image, product_id, created_at)
    VALUES (?1, ?2, ?3)
";

const PRODUCT_EXISTS: &str = "SELECT EXISTS(SELECT 1 FROM products WHERE id = ?1)";

impl Database {
    /// Attaches an image to an existing product.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] for an invalid image path, or
    /// [`Error::NotFound`] if the product does not exist.
    pub fn add_product_image(&mut self, new: &NewProductImage) -> Result<ProductImage> {
        new.validate()?;
        let now = now_millis();

        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let exists: bool = tx.query_row(PRODUCT_EXISTS, params![new.product], |row| row.get(0))?;
        if !exists {
            return Err(Error::not_found(format!("product {}", new.product)));
        }

        tx.execute(
            INSERT_PRODUCT_IMAGE,
            params![new.image, new.product, now.timestamp_millis()],
        )?;
        let id = ProductImageId(tx.last_insert_rowid());
        tx.commit()?;

        Ok(ProductImage {
            id,
            image: new.image.clone(),
            product: new.product,
            created_at: now,
        })
    }

    /// Gets a product image by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_product_image(&self, id: ProductImageId) -> Result<Option<ProductImage>> {
        let image = self
            .conn
            .query_row(
                &format!("SELECT {PRODUCT_IMAGE_COLUMNS} FROM product_images WHERE id = ?1"),
                params![id],
                row_to_product_image,
            )
            .optional()?;
        Ok(image)
    }

    /// Lists the images of a product in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn images_for_product(&self, product: ProductId) -> Result<Vec<ProductImage>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {PRODUCT_IMAGE_COLUMNS} FROM product_images WHERE product_id = ?1 ORDER BY id"
        ))?;
        let images = stmt
            .query_map(params![product], row_to_product_image)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(images)
    }

    /// The most recently added image across all products, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn latest_product_image(&self) -> Result<Option<ProductImage>> {
        let image = self
            .conn
            .query_row(
                &format!(
                    "SELECT {PRODUCT_IMAGE_COLUMNS} FROM product_images \
                     ORDER BY created_at DESC, id DESC LIMIT 1"
                ),
                [],
                row_to_product_image,
            )
            .optional()?;
        Ok(image)
    }

    /// Deletes a product image.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no image has this id.
    pub fn delete_product_image(&mut self, id: ProductImageId) -> Result<()> {
        if self
            .conn
            .execute("DELETE FROM product_images WHERE id = ?1", params![id])?
            == 0
        {
            return Err(Error::not_found(format!("product image {id}")));
        }
        Ok(())
    }
}
