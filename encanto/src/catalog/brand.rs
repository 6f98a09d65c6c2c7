//! Brand records.

use serde::{Deserialize, Serialize};

use crate::error::Result;

use super::ids::BrandId;
use super::timestamps::Timestamps;
use super::{validate_image, validate_name};

/// A stored brand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brand {
    /// Row identifier.
    pub id: BrandId,
    /// Display name, at most 511 characters.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Optional logo, relative to the media root.
    pub image: Option<String>,
    /// Creation and update times.
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

/// Fields of a brand before it is saved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBrand {
    /// Display name.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Optional logo.
    #[serde(default)]
    pub image: Option<String>,
}

impl NewBrand {
    /// A brand without an image.
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            image: None,
        }
    }

    /// Attach an image path.
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Check name length and image path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`](crate::Error::Validation) for a blank or
    /// over-long name, or a blank or absolute image path.
    pub fn validate(&self) -> Result<()> {
        validate_name("name", &self.name)?;
        if let Some(image) = &self.image {
            validate_image("image", image)?;
        }
        Ok(())
    }
}
