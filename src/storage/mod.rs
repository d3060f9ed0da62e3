pub mod json_backend;

use std::path::Path;

use crate::{domain::ExpenseBook, errors::Result};

/// Abstraction over the place an [`ExpenseBook`] is persisted.
pub trait ExpenseStorage {
    /// Returns `None` when nothing has been persisted yet.
    fn load(&self) -> Result<Option<ExpenseBook>>;
    /// Replaces the persisted book with `book`.
    fn save(&self, book: &ExpenseBook) -> Result<()>;
    fn location(&self) -> &Path;
}

pub use json_backend::JsonExpenseFile;
