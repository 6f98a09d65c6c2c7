//! Category commands.
//!
//! Paths are typed with the configured separator (`.` by default) and
//! printed the same way. A category can only be added or moved below a
//! parent that already exists.

use crate::error::CliError;
use crate::output::{choose_format, print_json, print_rows, FormatArg};
use crate::utils::{open_catalog, parse_category_path, report, GlobalOptions};
use clap::{Args, Subcommand};
use encanto::catalog::{upload_path, NewCategory, CATEGORY_IMAGE_DIR};
use encanto::CategoryId;

/// Manage categories.
#[derive(Subcommand)]
pub enum CategoryCommand {
    /// Add a category
    Add(AddCategory),

    /// List categories
    List(ListCategories),

    /// Show one category as JSON
    Show(ShowCategory),

    /// Move a category to a new path
    Move(MoveCategory),

    /// Delete a category
    Delete(DeleteCategory),
}

/// Add a category at a path.
#[derive(Args)]
pub struct AddCategory {
    /// Category path, e.g. `electronics.phones`
    pub path: String,

    /// Logo file; bare names are stored under `categories/logo/`
    #[arg(long, value_name = "FILE")]
    pub image: Option<String>,
}

/// List categories, optionally restricted to a subtree.
#[derive(Args)]
pub struct ListCategories {
    /// Only the category at PATH and everything below it
    #[arg(long, value_name = "PATH", conflicts_with = "ancestors_of")]
    pub under: Option<String>,

    /// With --under, only the direct children of PATH
    #[arg(long, requires = "under")]
    pub children: bool,

    /// Only the stored ancestors of PATH, root first
    #[arg(long, value_name = "PATH")]
    pub ancestors_of: Option<String>,

    /// Output format
    #[arg(long, value_enum, ignore_case = true)]
    pub format: Option<FormatArg>,
}

/// Show a category.
#[derive(Args)]
pub struct ShowCategory {
    /// Category id
    pub id: i64,
}

/// Move a category.
#[derive(Args)]
pub struct MoveCategory {
    /// Category id
    pub id: i64,

    /// New path; its parent must exist
    pub path: String,
}

/// Delete a category.
#[derive(Args)]
pub struct DeleteCategory {
    /// Category id
    pub id: i64,
}

impl CategoryCommand {
    /// Execute the category command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (config, mut db) = open_catalog(global)?;

        match self {
            CategoryCommand::Add(args) => {
                let mut new = NewCategory::new(parse_category_path(&args.path, &config)?);
                if let Some(image) = args.image {
                    new = new.with_image(upload_path(CATEGORY_IMAGE_DIR, &image));
                }
                let saved = db.save_category(&new)?;
                report(
                    global,
                    &format!("Added category {}", saved.path.to_string_with(config.separator())),
                );
                println!("{}", saved.id);
            }
            CategoryCommand::List(args) => {
                let categories = match (args.under, args.ancestors_of) {
                    (Some(under), _) => {
                        let prefix = parse_category_path(&under, &config)?;
                        if args.children {
                            db.category_children(&prefix)?
                        } else {
                            db.category_subtree(&prefix)?
                        }
                    }
                    (None, Some(path)) => {
                        db.category_ancestors(&parse_category_path(&path, &config)?)?
                    }
                    (None, None) => db.list_categories()?,
                };
                print_rows(
                    choose_format(args.format, &config),
                    &categories,
                    config.separator(),
                )?;
            }
            CategoryCommand::Show(args) => {
                let category = db
                    .get_category(CategoryId(args.id))?
                    .ok_or_else(|| missing("category", args.id))?;
                print_json(&category)?;
            }
            CategoryCommand::Move(args) => {
                let id = CategoryId(args.id);
                let existing = db
                    .get_category(id)?
                    .ok_or_else(|| missing("category", args.id))?;
                let mut new = NewCategory::new(parse_category_path(&args.path, &config)?);
                new.image = existing.image;
                let moved = db.update_category(id, &new)?;
                report(
                    global,
                    &format!(
                        "Moved category {} from {} to {}",
                        id,
                        existing.path.to_string_with(config.separator()),
                        moved.path.to_string_with(config.separator())
                    ),
                );
            }
            CategoryCommand::Delete(args) => {
                db.delete_category(CategoryId(args.id))?;
                report(global, &format!("Deleted category {}", args.id));
            }
        }

        Ok(())
    }
}

/// A not-found error for a record id given on the command line.
pub(crate) fn missing(entity: &str, id: i64) -> CliError {
    CliError::Library(encanto::Error::NotFound {
        resource: format!("{entity} {id}"),
    })
}
