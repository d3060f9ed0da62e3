use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::{debug, warn};

use crate::{
    domain::{ExpenseBook, Record, DATE_FORMAT},
    errors::{ExpenseError, Result},
    storage::{ExpenseStorage, JsonExpenseFile},
};

/// Owns the expense book and mirrors it to storage after every mutation.
pub struct ExpenseStore {
    book: ExpenseBook,
    storage: Box<dyn ExpenseStorage>,
}

impl ExpenseStore {
    /// Opens the JSON file at `path`. A missing file yields an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        Self::with_storage(Box::new(JsonExpenseFile::new(path)))
    }

    pub fn with_storage(storage: Box<dyn ExpenseStorage>) -> Result<Self> {
        let book = storage.load()?.unwrap_or_default();
        debug!(
            path = %storage.location().display(),
            records = book.record_count(),
            "opened expense store"
        );
        Ok(Self { book, storage })
    }

    pub fn path(&self) -> &Path {
        self.storage.location()
    }

    /// Appends an expense to `category`, creating the category when new.
    ///
    /// A missing or empty `date` becomes today's local date. The amount must be
    /// finite; sign, category, and date are not validated.
    pub fn add(
        &mut self,
        category: impl Into<String>,
        amount: f64,
        description: impl Into<String>,
        date: Option<&str>,
    ) -> Result<()> {
        if !amount.is_finite() {
            return Err(ExpenseError::InvalidAmount(amount.to_string()));
        }
        let date = match date {
            Some(value) if !value.is_empty() => value.to_string(),
            _ => today(),
        };
        let category = category.into();
        debug!(%category, amount, %date, "adding expense");
        let mut next = self.book.clone();
        next.push(category, Record::new(amount, description, date));
        self.commit(next)
    }

    pub fn total(&self) -> f64 {
        self.book.records().map(|(_, record)| record.amount).sum()
    }

    pub fn all(&self) -> &ExpenseBook {
        &self.book
    }

    pub fn categories(&self) -> Vec<&str> {
        self.book.category_names().collect()
    }

    pub fn len(&self) -> usize {
        self.book.record_count()
    }

    pub fn is_empty(&self) -> bool {
        self.book.is_empty()
    }

    /// Removes the record at `index` within `category`.
    ///
    /// Returns `Ok(false)` without touching the store or the file when the
    /// category is unknown or the index is out of range.
    pub fn delete(&mut self, category: &str, index: usize) -> Result<bool> {
        let mut next = self.book.clone();
        match next.remove(category, index) {
            Some(record) => {
                debug!(%category, index, amount = record.amount, "deleting expense");
                self.commit(next)?;
                Ok(true)
            }
            None => {
                warn!(%category, index, "delete target not found");
                Ok(false)
            }
        }
    }

    pub fn reset(&mut self) -> Result<()> {
        debug!(records = self.book.record_count(), "resetting expense store");
        self.commit(ExpenseBook::new())
    }

    /// Persists `next` and only then makes it the in-memory book, so a failed
    /// write leaves memory matching the file.
    fn commit(&mut self, next: ExpenseBook) -> Result<()> {
        self.storage.save(&next)?;
        self.book = next;
        Ok(())
    }
}

fn today() -> String {
    Local::now().date_naive().format(DATE_FORMAT).to_string()
}
