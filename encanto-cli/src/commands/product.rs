//! Product commands.

use crate::commands::category::missing;
use crate::error::CliError;
use crate::output::{choose_format, print_json, print_rows, FormatArg};
use crate::utils::{open_catalog, report, GlobalOptions};
use clap::{Args, Subcommand};
use encanto::catalog::NewProduct;
use encanto::{BrandId, CategoryId, ProductId};
use rust_decimal::Decimal;

/// Manage products.
#[derive(Subcommand)]
pub enum ProductCommand {
    /// Add a product
    Add(AddProduct),

    /// List products
    List(ListProducts),

    /// Show a product with its category and brand as nested JSON
    Show(ShowProduct),

    /// Delete a product and its images
    Delete(DeleteProduct),
}

/// Add a product.
#[derive(Args)]
pub struct AddProduct {
    /// Product name
    #[arg(long)]
    pub name: String,

    /// Free-form description
    #[arg(long, default_value = "")]
    pub description: String,

    /// Unit price, at most two decimal places
    #[arg(long)]
    pub price: Decimal,

    /// Units in stock
    #[arg(long, default_value_t = 0)]
    pub quantity: u32,

    /// Category id
    #[arg(long, value_name = "ID")]
    pub category: i64,

    /// Brand id
    #[arg(long, value_name = "ID")]
    pub brand: i64,
}

/// List products.
#[derive(Args)]
pub struct ListProducts {
    /// Only products in this category
    #[arg(long, value_name = "ID", conflicts_with = "brand")]
    pub category: Option<i64>,

    /// Only products of this brand
    #[arg(long, value_name = "ID")]
    pub brand: Option<i64>,

    /// Output format
    #[arg(long, value_enum, ignore_case = true)]
    pub format: Option<FormatArg>,
}

/// Show a product.
#[derive(Args)]
pub struct ShowProduct {
    /// Product id
    pub id: i64,
}

/// Delete a product.
#[derive(Args)]
pub struct DeleteProduct {
    /// Product id
    pub id: i64,
}

impl ProductCommand {
    /// Execute the product command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (config, mut db) = open_catalog(global)?;

        match self {
            ProductCommand::Add(args) => {
                let new = NewProduct::new(
                    args.name,
                    args.description,
                    args.price,
                    args.quantity,
                    CategoryId(args.category),
                    BrandId(args.brand),
                );
                let product = db.create_product(&new)?;
                report(
                    global,
                    &format!("Added product {} at {}", product.name, product.price),
                );
                println!("{}", product.id);
            }
            ProductCommand::List(args) => {
                let products = match (args.category, args.brand) {
                    (Some(category), _) => db.products_in_category(CategoryId(category))?,
                    (None, Some(brand)) => db.products_by_brand(BrandId(brand))?,
                    (None, None) => db.list_products()?,
                };
                print_rows(choose_format(args.format, &config), &products, config.separator())?;
            }
            ProductCommand::Show(args) => {
                let view = db
                    .product_view(ProductId(args.id))?
                    .ok_or_else(|| missing("product", args.id))?;
                print_json(&view)?;
            }
            ProductCommand::Delete(args) => {
                let images = db.delete_product(ProductId(args.id))?;
                report(
                    global,
                    &format!("Deleted product {} and {images} image(s)", args.id),
                );
            }
        }

        Ok(())
    }
}
