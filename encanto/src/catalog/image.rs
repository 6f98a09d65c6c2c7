//! Product image records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;

use super::ids::{ProductId, ProductImageId};
use super::validate_image;

/// A stored product image.
///
/// Images are never edited in place, so they carry a creation time only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductImage {
    /// Row identifier.
    pub id: ProductImageId,
    /// Image path, relative to the media root.
    pub image: String,
    /// Product the image belongs to.
    pub product: ProductId,
    /// When the image was attached.
    pub created_at: DateTime<Utc>,
}

/// Fields of a product image before it is saved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProductImage {
    /// Image path, relative to the media root.
    pub image: String,
    /// Product the image belongs to.
    pub product: ProductId,
}

impl NewProductImage {
    /// Attach `image` to `product`.
    #[must_use]
    pub fn new(product: ProductId, image: impl Into<String>) -> Self {
        Self {
            image: image.into(),
            product,
        }
    }

    /// Check the image path.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the image path is blank or absolute.
    pub fn validate(&self) -> Result<()> {
        validate_image("image", &self.image)
    }
}
