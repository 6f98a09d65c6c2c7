//! Product records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

use super::ids::{BrandId, CategoryId, ProductId};
use super::timestamps::Timestamps;
use super::validate_name;

/// Decimal places kept for prices.
pub const PRICE_SCALE: u32 = 2;

/// Total digits allowed in a price, decimal places included.
pub const PRICE_MAX_DIGITS: u32 = 10;

/// A stored product.
///
/// `category` and `brand` hold identifiers; see
/// [`ProductView`](super::ProductView) for the nested shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Row identifier.
    pub id: ProductId,
    /// Display name, at most 511 characters.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Unit price with two decimal places.
    pub price: Decimal,
    /// Units in stock.
    pub quantity: u32,
    /// Owning category.
    pub category: CategoryId,
    /// Owning brand.
    pub brand: BrandId,
    /// Creation and update times.
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

/// Fields of a product before it is saved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProduct {
    /// Display name.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Unit price.
    pub price: Decimal,
    /// Units in stock.
    pub quantity: u32,
    /// Category the product is filed under.
    pub category: CategoryId,
    /// Brand that makes the product.
    pub brand: BrandId,
}

impl NewProduct {
    /// Assemble a new product.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: Decimal,
        quantity: u32,
        category: CategoryId,
        brand: BrandId,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            price,
            quantity,
            category,
            brand,
        }
    }

    /// Check the name and price.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] for a blank or over-long name, or a price
    /// with more than two decimal places or more than ten digits.
    pub fn validate(&self) -> Result<()> {
        validate_name("name", &self.name)?;
        validate_price(self.price)?;
        Ok(())
    }
}

/// Check that `price` fits ten digits with two decimal places.
///
/// # Errors
///
/// Returns [`Error::Validation`] on the `price` field when it does not fit.
///
/// # Examples
///
/// ```
/// use encanto::catalog::validate_price;
/// use rust_decimal::Decimal;
///
/// assert!(validate_price(Decimal::new(1999, 2)).is_ok());
/// assert!(validate_price(Decimal::new(19999, 3)).is_err());
/// ```
pub fn validate_price(price: Decimal) -> Result<()> {
    let normalized = price.normalize();
    if normalized.scale() > PRICE_SCALE {
        return Err(Error::Validation {
            field: "price".into(),
            message: format!("{price} has more than {PRICE_SCALE} decimal places"),
        });
    }
    let limit = Decimal::from(10_i64.pow(PRICE_MAX_DIGITS - PRICE_SCALE));
    if normalized.abs() >= limit {
        return Err(Error::Validation {
            field: "price".into(),
            message: format!("{price} has more than {PRICE_MAX_DIGITS} digits"),
        });
    }
    Ok(())
}

/// Rescale a validated price to exactly two decimal places.
pub(crate) fn canonical_price(price: Decimal) -> Decimal {
    let mut scaled = price;
    scaled.rescale(PRICE_SCALE);
    scaled
}
