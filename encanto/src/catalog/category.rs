//! Category records.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::path::HierarchicalPath;

use super::ids::CategoryId;
use super::timestamps::Timestamps;
use super::validate_image;

/// A stored category.
///
/// # Examples
///
/// ```
/// use encanto::catalog::{Category, CategoryId, Timestamps};
/// use chrono::Utc;
///
/// let category = Category {
///     id: CategoryId(1),
///     path: "Electronics".parse().unwrap(),
///     image: None,
///     timestamps: Timestamps::at(Utc::now()),
/// };
/// let json = serde_json::to_value(&category).unwrap();
/// assert_eq!(json["path"], "Electronics");
/// assert!(json.get("created_at").is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Row identifier.
    pub id: CategoryId,
    /// Normalized position in the category tree.
    pub path: HierarchicalPath,
    /// Optional logo, relative to the media root.
    pub image: Option<String>,
    /// Creation and update times.
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

impl Category {
    /// Depth in the tree; root categories are at depth 1.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.path.len()
    }
}

/// Fields of a category before it is saved.
///
/// The path is normalized and its ancestor checked when the category is
/// written, not when this value is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCategory {
    /// Requested position in the tree.
    pub path: HierarchicalPath,
    /// Optional logo, relative to the media root.
    #[serde(default)]
    pub image: Option<String>,
}

impl NewCategory {
    /// A category without an image.
    #[must_use]
    pub fn new(path: HierarchicalPath) -> Self {
        Self { path, image: None }
    }

    /// Attach an image path.
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Check the non-path fields.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the image path is blank or absolute.
    pub fn validate(&self) -> Result<()> {
        if let Some(image) = &self.image {
            validate_image("image", image)?;
        }
        Ok(())
    }
}
