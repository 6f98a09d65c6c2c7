//! Nested product representation for API responses.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::brand::Brand;
use super::category::Category;
use super::ids::ProductId;
use super::product::Product;
use super::timestamps::Timestamps;

/// A product with its category and brand embedded as full objects.
///
/// Images are not part of this shape; fetch them separately with
/// [`Database::images_for_product`](crate::Database::images_for_product).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductView {
    /// Row identifier.
    pub id: ProductId,
    /// Full category record.
    pub category: Category,
    /// Full brand record.
    pub brand: Brand,
    /// Display name.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Unit price.
    pub price: Decimal,
    /// Units in stock.
    pub quantity: u32,
    /// Creation and update times.
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

impl ProductView {
    /// Combine a product with the records it references.
    ///
    /// The caller is responsible for passing the category and brand whose ids
    /// match `product`.
    #[must_use]
    pub fn new(product: Product, category: Category, brand: Brand) -> Self {
        debug_assert_eq!(product.category, category.id);
        debug_assert_eq!(product.brand, brand.id);
        Self {
            id: product.id,
            category,
            brand,
            name: product.name,
            description: product.description,
            price: product.price,
            quantity: product.quantity,
            timestamps: product.timestamps,
        }
    }
}
