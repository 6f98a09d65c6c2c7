//! Concurrent category writes.
//!
//! Each thread opens its own connection to the same database file, the way
//! separate processes would. The ancestor check and the insert share one
//! IMMEDIATE transaction, so writers are serialized by SQLite's write lock.

mod common;

use std::sync::{Arc, Barrier};
use std::thread;

use common::{create_shared_database, path, save_all};
use encanto::catalog::NewCategory;
use encanto::database::{Database, DatabaseConfig};
use encanto::{Error, Result};

fn save_concurrently(db_path: &std::path::Path, paths: &[&str]) -> Vec<Result<encanto::Category>> {
    let barrier = Arc::new(Barrier::new(paths.len()));
    let handles: Vec<_> = paths
        .iter()
        .map(|p| {
            let db_path = db_path.to_path_buf();
            let barrier = Arc::clone(&barrier);
            let category = NewCategory::new(path(p));
            thread::spawn(move || {
                let mut db = Database::open(DatabaseConfig::new(db_path)).unwrap();
                barrier.wait();
                db.save_category(&category)
            })
        })
        .collect();

    handles.into_iter().map(|h| h.join().unwrap()).collect()
}

#[test]
fn test_distinct_children_under_existing_ancestor_all_succeed() {
    let (mut db, db_path) = create_shared_database();
    save_all(&mut db, &["electronics"]);

    let results = save_concurrently(
        &db_path,
        &[
            "electronics.phones",
            "electronics.tablets",
            "electronics.laptops",
            "electronics.cameras",
        ],
    );

    for result in &results {
        assert!(result.is_ok(), "{result:?}");
    }
    assert_eq!(db.category_children(&path("electronics")).unwrap().len(), 4);
}

#[test]
fn test_children_under_missing_ancestor_all_fail() {
    let (db, db_path) = create_shared_database();

    let results = save_concurrently(&db_path, &["garden.tools", "garden.seeds", "garden.pots"]);

    for result in results {
        match result {
            Err(Error::MissingAncestor { ancestor, .. }) => assert_eq!(ancestor, "Garden"),
            other => panic!("expected MissingAncestor, got {other:?}"),
        }
    }
    assert!(db.list_categories().unwrap().is_empty());
}

#[test]
fn test_parent_and_child_race() {
    // The child wins only if the parent committed first; either way the
    // stored tree never holds an orphan.
    let (db, db_path) = create_shared_database();

    let results = save_concurrently(&db_path, &["kitchen", "kitchen.knives"]);
    assert!(results[0].is_ok());

    let stored = db.list_categories().unwrap();
    match &results[1] {
        Ok(_) => assert_eq!(stored.len(), 2),
        Err(Error::MissingAncestor { .. }) => assert_eq!(stored.len(), 1),
        Err(other) => panic!("unexpected error: {other}"),
    }
}
