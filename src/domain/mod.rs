//! Plain data types shared by the store, storage, and front end.

pub mod book;
pub mod record;

pub use book::ExpenseBook;
pub use record::{parse_amount, Record, DATE_FORMAT};
