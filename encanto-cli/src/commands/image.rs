//! Product image commands.

use crate::error::CliError;
use crate::output::{choose_format, print_rows, FormatArg};
use crate::utils::{open_catalog, report, GlobalOptions};
use clap::{Args, Subcommand};
use encanto::catalog::{upload_path, NewProductImage, PRODUCT_IMAGE_DIR};
use encanto::{ProductId, ProductImageId};

/// Manage product images.
#[derive(Subcommand)]
pub enum ImageCommand {
    /// Attach an image to a product
    Add(AddImage),

    /// List a product's images
    List(ListImages),

    /// Remove one image
    Delete(DeleteImage),
}

/// Attach an image.
#[derive(Args)]
pub struct AddImage {
    /// Product id
    pub product: i64,

    /// Image file; bare names are stored under `products/images/`
    pub image: String,
}

/// List images.
#[derive(Args)]
pub struct ListImages {
    /// Product id
    pub product: i64,

    /// Output format
    #[arg(long, value_enum, ignore_case = true)]
    pub format: Option<FormatArg>,
}

/// Remove an image.
#[derive(Args)]
pub struct DeleteImage {
    /// Image id
    pub id: i64,
}

impl ImageCommand {
    /// Execute the image command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (config, mut db) = open_catalog(global)?;

        match self {
            ImageCommand::Add(args) => {
                let new = NewProductImage::new(
                    ProductId(args.product),
                    upload_path(PRODUCT_IMAGE_DIR, &args.image),
                );
                let image = db.add_product_image(&new)?;
                report(
                    global,
                    &format!("Attached {} to product {}", image.image, image.product),
                );
                println!("{}", image.id);
            }
            ImageCommand::List(args) => {
                let images = db.images_for_product(ProductId(args.product))?;
                print_rows(choose_format(args.format, &config), &images, config.separator())?;
            }
            ImageCommand::Delete(args) => {
                db.delete_product_image(ProductImageId(args.id))?;
                report(global, &format!("Deleted image {}", args.id));
            }
        }

        Ok(())
    }
}
