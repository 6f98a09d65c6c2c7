//! Product storage operations.

use rusqlite::{params, Connection, OptionalExtension, TransactionBehavior};

use crate::catalog::{
    canonical_price, now_millis, BrandId, CategoryId, NewProduct, Product, ProductId, ProductView,
    Timestamps,
};
use crate::error::{Error, Result};

use super::connection::Database;
use super::rows::{row_to_product, PRODUCT_COLUMNS};

const INSERT_PRODUCT: &str = r"
    INSERT INTO products
        (name, description, price, quantity, category_id, brand_id, created_at, updated_at)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
";

const UPDATE_PRODUCT: &str = r"
    UPDATE products
    SET name = ?2, description = ?3, price = ?4, quantity = ?5,
        category_id = ?6, brand_id = ?7, updated_at = ?8
    WHERE id = ?1
";

const DELETE_PRODUCT: &str = "DELETE FROM products WHERE id = ?1";

const DELETE_PRODUCT_IMAGES: &str = "DELETE FROM product_images WHERE product_id = ?1";

const CATEGORY_EXISTS: &str = "SELECT EXISTS(SELECT 1 FROM categories WHERE id = ?1)";

const BRAND_EXISTS: &str = "SELECT EXISTS(SELECT 1 FROM brands WHERE id = ?1)";

/// Fails with [`Error::NotFound`] unless the product's category and brand
/// are stored.
fn ensure_references(conn: &Connection, new: &NewProduct) -> Result<()> {
    let category: bool = conn.query_row(CATEGORY_EXISTS, params![new.category], |row| row.get(0))?;
    if !category {
        return Err(Error::not_found(format!("category {}", new.category)));
    }
    let brand: bool = conn.query_row(BRAND_EXISTS, params![new.brand], |row| row.get(0))?;
    if !brand {
        return Err(Error::not_found(format!("brand {}", new.brand)));
    }
    Ok(())
}

impl Database {
    /// Creates a product filed under an existing category and brand.
    ///
    /// The price is stored with exactly two decimal places.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The name or price is invalid ([`Error::Validation`])
    /// - The category or brand does not exist ([`Error::NotFound`])
    /// - The insert fails
    pub fn create_product(&mut self, new: &NewProduct) -> Result<Product> {
        new.validate()?;
        let price = canonical_price(new.price);
        let now = now_millis();

        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        ensure_references(&tx, new)?;

        tx.execute(
            INSERT_PRODUCT,
            params![
                new.name,
                new.description,
                price.to_string(),
                i64::from(new.quantity),
                new.category,
                new.brand,
                now.timestamp_millis(),
                now.timestamp_millis()
            ],
        )?;
        let id = ProductId(tx.last_insert_rowid());
        tx.commit()?;

        log::debug!(
            "created product {id} '{}' in category {}",
            new.name,
            new.category
        );

        Ok(Product {
            id,
            name: new.name.clone(),
            description: new.description.clone(),
            price,
            quantity: new.quantity,
            category: new.category,
            brand: new.brand,
            timestamps: Timestamps::at(now),
        })
    }

    /// Replaces the fields of an existing product.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the product, its new category or its
    /// new brand does not exist, or the same validation errors as
    /// [`create_product`](Self::create_product).
    pub fn update_product(&mut self, id: ProductId, new: &NewProduct) -> Result<Product> {
        new.validate()?;
        let price = canonical_price(new.price);
        let now = now_millis();

        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let existing = tx
            .query_row(
                &format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE id = ?1"),
                params![id],
                row_to_product,
            )
            .optional()?
            .ok_or_else(|| Error::not_found(format!("product {id}")))?;

        ensure_references(&tx, new)?;

        tx.execute(
            UPDATE_PRODUCT,
            params![
                id,
                new.name,
                new.description,
                price.to_string(),
                i64::from(new.quantity),
                new.category,
                new.brand,
                now.timestamp_millis()
            ],
        )?;
        tx.commit()?;

        Ok(Product {
            id,
            name: new.name.clone(),
            description: new.description.clone(),
            price,
            quantity: new.quantity,
            category: new.category,
            brand: new.brand,
            timestamps: existing.timestamps.touched(now),
        })
    }

    /// Gets a product by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_product(&self, id: ProductId) -> Result<Option<Product>> {
        let product = self
            .conn
            .query_row(
                &format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE id = ?1"),
                params![id],
                row_to_product,
            )
            .optional()?;
        Ok(product)
    }

    /// Lists all products ordered by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_products(&self) -> Result<Vec<Product>> {
        self.query_products(&format!("SELECT {PRODUCT_COLUMNS} FROM products ORDER BY id"), None)
    }

    /// Lists the products filed directly under a category.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn products_in_category(&self, category: CategoryId) -> Result<Vec<Product>> {
        self.query_products(
            &format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE category_id = ?1 ORDER BY id"),
            Some(category.value()),
        )
    }

    /// Lists the products of a brand.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn products_by_brand(&self, brand: BrandId) -> Result<Vec<Product>> {
        self.query_products(
            &format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE brand_id = ?1 ORDER BY id"),
            Some(brand.value()),
        )
    }

    fn query_products(&self, sql: &str, key: Option<i64>) -> Result<Vec<Product>> {
        let mut stmt = self.conn.prepare(sql)?;
        let rows = match key {
            Some(key) => stmt.query_map(params![key], row_to_product)?,
            None => stmt.query_map([], row_to_product)?,
        };
        Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
    }

    /// The most recently created product, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn latest_product(&self) -> Result<Option<Product>> {
        let product = self
            .conn
            .query_row(
                &format!(
                    "SELECT {PRODUCT_COLUMNS} FROM products \
                     ORDER BY created_at DESC, id DESC LIMIT 1"
                ),
                [],
                row_to_product,
            )
            .optional()?;
        Ok(product)
    }

    /// Deletes a product together with its images.
    ///
    /// Returns the number of images removed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no product has this id.
    pub fn delete_product(&mut self, id: ProductId) -> Result<usize> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let images = tx.execute(DELETE_PRODUCT_IMAGES, params![id])?;
        if tx.execute(DELETE_PRODUCT, params![id])? == 0 {
            return Err(Error::not_found(format!("product {id}")));
        }
        tx.commit()?;

        log::debug!("deleted product {id} and {images} image(s)");
        Ok(images)
    }

    /// Loads a product with its category and brand embedded.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the product's category or brand has
    /// disappeared, or an error if a query fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use encanto::catalog::{NewBrand, NewCategory, NewProduct};
    /// use encanto::database::Database;
    /// use rust_decimal::Decimal;
    ///
    /// let mut db = Database::open_in_memory().unwrap();
    /// let category = db.save_category(&NewCategory::new("toys".parse().unwrap())).unwrap();
    /// let brand = db.create_brand(&NewBrand::new("Acme", "")).unwrap();
    /// let product = db
    ///     .create_product(&NewProduct::new("Yo-yo", "", Decimal::new(350, 2), 10, category.id, brand.id))
    ///     .unwrap();
    ///
    /// let view = db.product_view(product.id).unwrap().unwrap();
    /// assert_eq!(view.category.path.to_string(), "Toys");
    /// assert_eq!(view.brand.name, "Acme");
    /// ```
    pub fn product_view(&self, id: ProductId) -> Result<Option<ProductView>> {
        let Some(product) = self.get_product(id)? else {
            return Ok(None);
        };
        let category = self
            .get_category(product.category)?
            .ok_or_else(|| Error::not_found(format!("category {}", product.category)))?;
        let brand = self
            .get_brand(product.brand)?
            .ok_or_else(|| Error::not_found(format!("brand {}", product.brand)))?;
        Ok(Some(ProductView::new(product, category, brand)))
    }
}
