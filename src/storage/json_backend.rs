use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{
    domain::ExpenseBook,
    errors::Result,
    utils::persistence::{read_if_exists, write_atomic},
};

use super::ExpenseStorage;

/// Flat JSON file holding the whole expense book.
#[derive(Debug, Clone)]
pub struct JsonExpenseFile {
    path: PathBuf,
}

impl JsonExpenseFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ExpenseStorage for JsonExpenseFile {
    fn load(&self) -> Result<Option<ExpenseBook>> {
        let Some(data) = read_if_exists(&self.path)? else {
            debug!(path = %self.path.display(), "no expense file yet");
            return Ok(None);
        };
        let book: ExpenseBook = serde_json::from_str(&data)?;
        debug!(
            path = %self.path.display(),
            categories = book.category_count(),
            records = book.record_count(),
            "loaded expense file"
        );
        Ok(Some(book))
    }

    fn save(&self, book: &ExpenseBook) -> Result<()> {
        let json = serde_json::to_string_pretty(book)?;
        write_atomic(&self.path, &json)?;
        debug!(path = %self.path.display(), records = book.record_count(), "saved expense file");
        Ok(())
    }

    fn location(&self) -> &Path {
        &self.path
    }
}
