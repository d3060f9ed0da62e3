#![doc(test(attr(deny(warnings))))]

//! Expense Tracker records expenses per category in a flat JSON file and
//! derives category totals and a chronological series from them.
//!
//! ```no_run
//! use expense_tracker::ExpenseStore;
//!
//! let mut store = ExpenseStore::open("expenses.json")?;
//! store.add("Food", 12.50, "lunch", Some("2024-01-02"))?;
//! println!("spent {}", store.total());
//! # Ok::<(), expense_tracker::ExpenseError>(())
//! ```

pub mod chart;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod storage;
pub mod utils;

pub use crate::core::{CategoryTotal, ExpenseStore, SeriesPoint};
pub use crate::domain::{ExpenseBook, Record};
pub use crate::errors::{ExpenseError, Result};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Expense tracker tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
