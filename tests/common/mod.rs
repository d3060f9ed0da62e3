#![allow(dead_code)]

use std::{path::PathBuf, sync::Mutex};

use expense_tracker::ExpenseStore;
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Returns a fresh expense-file path inside a directory that outlives the test.
pub fn temp_data_file() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let path = temp.path().join("expenses.json");
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    path
}

/// Opens an empty store backed by a unique temporary file.
pub fn setup_store() -> ExpenseStore {
    ExpenseStore::open(temp_data_file()).expect("open expense store")
}

/// Store holding the three-expense example used throughout the suites.
pub fn sample_store() -> ExpenseStore {
    let mut store = setup_store();
    store
        .add("Food", 12.50, "lunch", Some("2024-01-02"))
        .expect("add lunch");
    store
        .add("Food", 8.00, "coffee", Some("2024-01-01"))
        .expect("add coffee");
    store
        .add("Transport", 20.00, "taxi", Some("2024-01-03"))
        .expect("add taxi");
    store
}

pub fn approx_eq(left: f64, right: f64) -> bool {
    (left - right).abs() < 1e-9
}
