//! CLI command implementations.
//!
//! - `init`: Create the data directory and catalog database
//! - `category`: Add, list, show, move and delete categories
//! - `brand`: Add, list, show and delete brands
//! - `product`: Add, list, show and delete products
//! - `image`: Attach, list and remove product images
//! - `completions`: Generate shell completion scripts

pub mod brand;
pub mod category;
pub mod completions;
pub mod image;
pub mod init;
pub mod product;

pub use brand::BrandCommand;
pub use category::CategoryCommand;
pub use completions::CompletionsCommand;
pub use image::ImageCommand;
pub use init::InitCommand;
pub use product::ProductCommand;
