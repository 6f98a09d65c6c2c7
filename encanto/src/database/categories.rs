//! Category storage operations.
//!
//! Category writes follow the path write rule: the path is normalized, its
//! ancestor prefix is checked against the stored paths, and the row is
//! written, all inside one IMMEDIATE transaction so no other writer can
//! slip in between the check and the write.

use rusqlite::{params, Connection, OptionalExtension, TransactionBehavior};

use crate::catalog::{now_millis, Category, CategoryId, NewCategory, Timestamps};
use crate::error::{Error, Result};
use crate::path::ancestry::{descendant_range, AncestorIndex};
use crate::path::normalize::normalize;
use crate::path::{ensure_ancestor, validate_and_normalize, HierarchicalPath};

use super::connection::Database;
use super::rows::{row_to_category, CATEGORY_COLUMNS};

const INSERT_CATEGORY: &str = r"
    INSERT INTO categories (path, image, created_at, updated_at)
    VALUES (?1, ?2, ?3, ?4)
";

const UPDATE_CATEGORY: &str = r"
    UPDATE categories SET path = ?2, image = ?3, updated_at = ?4
    WHERE id = ?1
";

const DELETE_CATEGORY: &str = "DELETE FROM categories WHERE id = ?1";

const SELECT_PREFIX_EXISTS_EXCEPT: &str = r"
    SELECT EXISTS(
        SELECT 1 FROM categories
        WHERE id <> ?4 AND (path = ?1 OR (path >= ?2 AND path < ?3))
    )
";

const COUNT_CATEGORY_PRODUCTS: &str = "SELECT COUNT(*) FROM products WHERE category_id = ?1";

/// Stored paths other than the category being rewritten.
///
/// A moved category must not count as its own ancestor.
struct OtherCategories<'a> {
    conn: &'a Connection,
    except: CategoryId,
}

impl AncestorIndex for OtherCategories<'_> {
    fn contains_prefix(&self, prefix: &HierarchicalPath) -> Result<bool> {
        let (low, high) = descendant_range(prefix);
        let exists: bool = self.conn.query_row(
            SELECT_PREFIX_EXISTS_EXCEPT,
            params![prefix.to_string(), low, high, self.except],
            |row| row.get(0),
        )?;
        Ok(exists)
    }
}

impl Database {
    /// Saves a new category.
    ///
    /// The path is capitalized label by label. Unless it is root-level, some
    /// stored category must already have the new path's ancestor prefix as
    /// its path or as a leading part of its path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The path has an empty label ([`Error::Validation`]) or a label
    ///   containing `.` ([`Error::InvalidPathValue`])
    /// - The ancestor prefix is not stored ([`Error::MissingAncestor`])
    /// - The image path is invalid
    /// - The database write fails
    ///
    /// # Examples
    ///
    /// ```
    /// use encanto::catalog::NewCategory;
    /// use encanto::database::Database;
    ///
    /// let mut db = Database::open_in_memory().unwrap();
    /// db.save_category(&NewCategory::new("electronics".parse().unwrap())).unwrap();
    ///
    /// let phones = db
    ///     .save_category(&NewCategory::new("electronics.phones".parse().unwrap()))
    ///     .unwrap();
    /// assert_eq!(phones.path.to_string(), "Electronics.Phones");
    ///
    /// let orphan = db.save_category(&NewCategory::new("garden.tools".parse().unwrap()));
    /// assert!(orphan.is_err());
    /// ```
    pub fn save_category(&mut self, new: &NewCategory) -> Result<Category> {
        new.validate()?;
        let validated = validate_and_normalize(&new.path)?;
        let now = now_millis();

        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        ensure_ancestor(&*tx, &validated)?;

        tx.execute(
            INSERT_CATEGORY,
            params![
                validated.path(),
                new.image,
                now.timestamp_millis(),
                now.timestamp_millis()
            ],
        )?;
        let id = CategoryId(tx.last_insert_rowid());
        tx.commit()?;

        log::debug!("saved category {id} at {}", validated.path());

        Ok(Category {
            id,
            path: validated.into_path(),
            image: new.image.clone(),
            timestamps: Timestamps::at(now),
        })
    }

    /// Replaces the path and image of an existing category.
    ///
    /// The same write rule as [`save_category`](Self::save_category) applies
    /// to the new path. Categories below the old path are left as they are.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no category has this id, otherwise the
    /// same errors as [`save_category`](Self::save_category).
    pub fn update_category(&mut self, id: CategoryId, new: &NewCategory) -> Result<Category> {
        new.validate()?;
        let validated = validate_and_normalize(&new.path)?;
        let now = now_millis();

        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let existing = tx
            .query_row(
                &format!("SELECT {CATEGORY_COLUMNS} FROM categories WHERE id = ?1"),
                params![id],
                row_to_category,
            )
            .optional()?
            .ok_or_else(|| Error::not_found(format!("category {id}")))?;

        let others = OtherCategories {
            conn: &*tx,
            except: id,
        };
        ensure_ancestor(&others, &validated)?;

        tx.execute(
            UPDATE_CATEGORY,
            params![id, validated.path(), new.image, now.timestamp_millis()],
        )?;
        tx.commit()?;

        log::debug!(
            "moved category {id} from {} to {}",
            existing.path,
            validated.path()
        );

        Ok(Category {
            id,
            path: validated.into_path(),
            image: new.image.clone(),
            timestamps: existing.timestamps.touched(now),
        })
    }

    /// Gets a category by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_category(&self, id: CategoryId) -> Result<Option<Category>> {
        let category = self
            .conn
            .query_row(
                &format!("SELECT {CATEGORY_COLUMNS} FROM categories WHERE id = ?1"),
                params![id],
                row_to_category,
            )
            .optional()?;
        Ok(category)
    }

    /// Finds categories whose path equals `path` after capitalization.
    ///
    /// Paths are not unique, so several categories may match.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn find_categories_by_path(&self, path: &HierarchicalPath) -> Result<Vec<Category>> {
        let normalized = normalize(path);
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {CATEGORY_COLUMNS} FROM categories WHERE path = ?1 ORDER BY id"
        ))?;
        let categories = stmt
            .query_map(params![normalized], row_to_category)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(categories)
    }

    /// Lists the categories at or below `prefix`, ordered by path.
    ///
    /// Matching respects label boundaries: `Electronics.Phones` is below
    /// `Electronics`, `Electronics.Phonesx` is not below
    /// `Electronics.Phones`.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn category_subtree(&self, prefix: &HierarchicalPath) -> Result<Vec<Category>> {
        let normalized = normalize(prefix);
        let (low, high) = descendant_range(&normalized);
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {CATEGORY_COLUMNS} FROM categories \
             WHERE path = ?1 OR (path >= ?2 AND path < ?3) \
             ORDER BY path, id"
        ))?;
        let categories = stmt
            .query_map(params![normalized, low, high], row_to_category)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(categories)
    }

    /// Lists the categories exactly one level below `parent`.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn category_children(&self, parent: &HierarchicalPath) -> Result<Vec<Category>> {
        let depth = parent.len() + 1;
        Ok(self
            .category_subtree(parent)?
            .into_iter()
            .filter(|category| category.depth() == depth)
            .collect())
    }

    /// Lists the stored categories on the ancestor chain of `path`, root
    /// first. `path` itself is not included.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn category_ancestors(&self, path: &HierarchicalPath) -> Result<Vec<Category>> {
        let normalized = normalize(path);
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {CATEGORY_COLUMNS} FROM categories WHERE path = ?1 ORDER BY id"
        ))?;

        let mut found = Vec::new();
        for ancestor in normalized.ancestors() {
            let rows = stmt
                .query_map(params![ancestor], row_to_category)?
                .collect::<std::result::Result<Vec<_>, _>>()?;
            found.extend(rows);
        }
        Ok(found)
    }

    /// Lists all categories ordered by path.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_categories(&self) -> Result<Vec<Category>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {CATEGORY_COLUMNS} FROM categories ORDER BY path, id"
        ))?;
        let categories = stmt
            .query_map([], row_to_category)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(categories)
    }

    /// The most recently created category, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn latest_category(&self) -> Result<Option<Category>> {
        let category = self
            .conn
            .query_row(
                &format!(
                    "SELECT {CATEGORY_COLUMNS} FROM categories \
                     ORDER BY created_at DESC, id DESC LIMIT 1"
                ),
                [],
                row_to_category,
            )
            .optional()?;
        Ok(category)
    }

    /// Deletes a category that no product references.
    ///
    /// Categories below it are not removed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no category has this id, or
    /// [`Error::ProtectedReference`] if products are filed under it.
    pub fn delete_category(&mut self, id: CategoryId) -> Result<()> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let dependents: i64 =
            tx.query_row(COUNT_CATEGORY_PRODUCTS, params![id], |row| row.get(0))?;
        if dependents > 0 {
            log::warn!("refusing to delete category {id}: {dependents} product(s) reference it");
            return Err(Error::ProtectedReference {
                entity: "category",
                id: id.value(),
                dependents: usize::try_from(dependents).unwrap_or(usize::MAX),
            });
        }

        let deleted = tx.execute(DELETE_CATEGORY, params![id])?;
        if deleted == 0 {
            return Err(Error::not_found(format!("category {id}")));
        }
        tx.commit()?;

        log::debug!("deleted category {id}");
        Ok(())
    }
}
