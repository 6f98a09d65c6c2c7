//! Brand commands.

use crate::commands::category::missing;
use crate::error::CliError;
use crate::output::{choose_format, print_json, print_rows, FormatArg};
use crate::utils::{open_catalog, report, GlobalOptions};
use clap::{Args, Subcommand};
use encanto::catalog::{upload_path, NewBrand, BRAND_IMAGE_DIR};
use encanto::BrandId;

/// Manage brands.
#[derive(Subcommand)]
pub enum BrandCommand {
    /// Add a brand
    Add(AddBrand),

    /// List brands by name
    List(ListBrands),

    /// Show one brand as JSON
    Show(ShowBrand),

    /// Delete a brand
    Delete(DeleteBrand),
}

/// Add a brand.
#[derive(Args)]
pub struct AddBrand {
    /// Brand name
    #[arg(long)]
    pub name: String,

    /// Free-form description
    #[arg(long, default_value = "")]
    pub description: String,

    /// Logo file; bare names are stored under `brands/logo/`
    #[arg(long, value_name = "FILE")]
    pub image: Option<String>,
}

/// List brands.
#[derive(Args)]
pub struct ListBrands {
    /// Output format
    #[arg(long, value_enum, ignore_case = true)]
    pub format: Option<FormatArg>,
}

/// Show a brand.
#[derive(Args)]
pub struct ShowBrand {
    /// Brand id
    pub id: i64,
}

/// Delete a brand.
#[derive(Args)]
pub struct DeleteBrand {
    /// Brand id
    pub id: i64,
}

impl BrandCommand {
    /// Execute the brand command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (config, mut db) = open_catalog(global)?;

        match self {
            BrandCommand::Add(args) => {
                let mut new = NewBrand::new(args.name, args.description);
                if let Some(image) = args.image {
                    new = new.with_image(upload_path(BRAND_IMAGE_DIR, &image));
                }
                let brand = db.create_brand(&new)?;
                report(global, &format!("Added brand {}", brand.name));
                println!("{}", brand.id);
            }
            BrandCommand::List(args) => {
                let brands = db.list_brands()?;
                print_rows(choose_format(args.format, &config), &brands, config.separator())?;
            }
            BrandCommand::Show(args) => {
                let brand = db
                    .get_brand(BrandId(args.id))?
                    .ok_or_else(|| missing("brand", args.id))?;
                print_json(&brand)?;
            }
            BrandCommand::Delete(args) => {
                db.delete_brand(BrandId(args.id))?;
                report(global, &format!("Deleted brand {}", args.id));
            }
        }

        Ok(())
    }
}
