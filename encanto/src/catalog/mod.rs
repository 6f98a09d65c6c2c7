//! Catalog records: categories, brands, products and product images.
//!
//! Records are plain data returned by [`Database`](crate::Database) queries.
//! Each `New*` type holds the caller-supplied fields of a record before it is
//! written; identifiers and timestamps are assigned by storage.
//!
//! # Serialization
//!
//! Every record serializes field for field. [`ProductView`] is the one
//! nested shape: a product with its full category and brand embedded.
//!
//! ```
//! use encanto::catalog::NewBrand;
//!
//! let brand = NewBrand::new("Acme", "Tools since 1949");
//! assert!(brand.validate().is_ok());
//! ```

mod brand;
mod category;
mod ids;
mod image;
mod product;
mod timestamps;
mod view;

pub use brand::{Brand, NewBrand};
pub use category::{Category, NewCategory};
pub use ids::{BrandId, CategoryId, ProductId, ProductImageId};
pub use image::{NewProductImage, ProductImage};
pub use product::{validate_price, NewProduct, Product, PRICE_MAX_DIGITS, PRICE_SCALE};
pub(crate) use product::canonical_price;
pub(crate) use timestamps::{from_millis, now_millis};
pub use timestamps::Timestamps;
pub use view::ProductView;

use crate::error::{Error, Result};

/// Maximum length, in characters, of brand and product names.
pub const MAX_NAME_LENGTH: usize = 511;

/// Upload directory for category images.
pub const CATEGORY_IMAGE_DIR: &str = "categories/logo";
/// Upload directory for brand images.
pub const BRAND_IMAGE_DIR: &str = "brands/logo";
/// Upload directory for product images.
pub const PRODUCT_IMAGE_DIR: &str = "products/images";

/// Check a required, length-limited name field.
pub(crate) fn validate_name(field: &str, name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::Validation {
            field: field.into(),
            message: "must not be blank".into(),
        });
    }
    let len = name.chars().count();
    if len > MAX_NAME_LENGTH {
        return Err(Error::Validation {
            field: field.into(),
            message: format!("must be at most {MAX_NAME_LENGTH} characters (got {len})"),
        });
    }
    Ok(())
}

/// Check an image reference: a non-blank relative path.
pub(crate) fn validate_image(field: &str, image: &str) -> Result<()> {
    if image.trim().is_empty() {
        return Err(Error::Validation {
            field: field.into(),
            message: "image path must not be blank".into(),
        });
    }
    if image.starts_with('/') {
        return Err(Error::Validation {
            field: field.into(),
            message: format!("image path '{image}' must be relative to the media root"),
        });
    }
    Ok(())
}

/// Prefix a bare file name with an upload directory.
///
/// Paths that already contain a directory are kept as given.
///
/// # Examples
///
/// ```
/// use encanto::catalog::{upload_path, BRAND_IMAGE_DIR};
///
/// assert_eq!(upload_path(BRAND_IMAGE_DIR, "acme.png"), "brands/logo/acme.png");
/// assert_eq!(upload_path(BRAND_IMAGE_DIR, "cdn/acme.png"), "cdn/acme.png");
/// ```
#[must_use]
pub fn upload_path(dir: &str, file: &str) -> String {
    if file.contains('/') {
        file.to_string()
    } else {
        format!("{dir}/{file}")
    }
}
