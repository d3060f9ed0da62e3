pub mod analysis;
pub mod expense_store;

pub use analysis::{CategoryTotal, SeriesPoint};
pub use expense_store::ExpenseStore;
