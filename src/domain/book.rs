use std::fmt;

use serde::{
    de::{Deserializer, MapAccess, Visitor},
    ser::{SerializeMap, Serializer},
    Deserialize, Serialize,
};

use super::Record;

/// Ordered mapping from category name to that category's records.
///
/// Categories keep first-insertion order and never hold an empty record list:
/// removing the last record of a category removes the category itself.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseBook {
    categories: Vec<(String, Vec<Record>)>,
}

impl ExpenseBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    pub fn record_count(&self) -> usize {
        self.categories.iter().map(|(_, records)| records.len()).sum()
    }

    pub fn contains(&self, category: &str) -> bool {
        self.position(category).is_some()
    }

    pub fn get(&self, category: &str) -> Option<&[Record]> {
        self.position(category)
            .map(|idx| self.categories[idx].1.as_slice())
    }

    pub fn category_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.categories.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Record])> + '_ {
        self.categories
            .iter()
            .map(|(name, records)| (name.as_str(), records.as_slice()))
    }

    /// Every record paired with its category, in category then insertion order.
    pub fn records(&self) -> impl Iterator<Item = (&str, &Record)> + '_ {
        self.iter()
            .flat_map(|(name, records)| records.iter().map(move |record| (name, record)))
    }

    pub fn push(&mut self, category: impl Into<String>, record: Record) {
        let category = category.into();
        match self.position(&category) {
            Some(idx) => self.categories[idx].1.push(record),
            None => self.categories.push((category, vec![record])),
        }
    }

    /// Removes one record. Returns `None` when the category or index does not exist.
    pub fn remove(&mut self, category: &str, index: usize) -> Option<Record> {
        let idx = self.position(category)?;
        let records = &mut self.categories[idx].1;
        if index >= records.len() {
            return None;
        }
        let removed = records.remove(index);
        if records.is_empty() {
            self.categories.remove(idx);
        }
        Some(removed)
    }

    pub fn clear(&mut self) {
        self.categories.clear();
    }

    fn position(&self, category: &str) -> Option<usize> {
        self.categories.iter().position(|(name, _)| name == category)
    }
}

impl Serialize for ExpenseBook {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.categories.len()))?;
        for (name, records) in &self.categories {
            map.serialize_entry(name, records)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ExpenseBook {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(BookVisitor)
    }
}

struct BookVisitor;

impl<'de> Visitor<'de> for BookVisitor {
    type Value = ExpenseBook;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an object mapping category names to expense lists")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut book = ExpenseBook::new();
        while let Some((name, records)) = access.next_entry::<String, Vec<Record>>()? {
            // A repeated key replaces the earlier list but keeps its position.
            match book.position(&name) {
                Some(idx) if records.is_empty() => {
                    book.categories.remove(idx);
                }
                Some(idx) => book.categories[idx].1 = records,
                None if records.is_empty() => {}
                None => book.categories.push((name, records)),
            }
        }
        Ok(book)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_book() -> ExpenseBook {
        let mut book = ExpenseBook::new();
        book.push("Food", Record::new(12.5, "lunch", "2024-01-02"));
        book.push("Transport", Record::new(20.0, "taxi", "2024-01-03"));
        book.push("Food", Record::new(8.0, "coffee", "2024-01-01"));
        book
    }

    #[test]
    fn push_keeps_first_insertion_order() {
        let book = sample_book();
        let names: Vec<_> = book.category_names().collect();
        assert_eq!(names, vec!["Food", "Transport"]);
        assert_eq!(book.get("Food").map(|r| r.len()), Some(2));
        assert_eq!(book.record_count(), 3);
    }

    #[test]
    fn remove_drops_emptied_category() {
        let mut book = sample_book();
        let removed = book.remove("Transport", 0).expect("record exists");
        assert_eq!(removed.description, "taxi");
        assert!(!book.contains("Transport"));
        assert_eq!(book.category_count(), 1);
    }

    #[test]
    fn remove_out_of_range_is_none() {
        let mut book = sample_book();
        assert!(book.remove("Food", 2).is_none());
        assert!(book.remove("Rent", 0).is_none());
        assert_eq!(book, sample_book());
    }

    #[test]
    fn serializes_as_object_in_category_order() {
        let json = serde_json::to_string(&sample_book()).unwrap();
        assert_eq!(
            json,
            r#"{"Food":[[12.5,"lunch","2024-01-02"],[8.0,"coffee","2024-01-01"]],"Transport":[[20.0,"taxi","2024-01-03"]]}"#
        );
    }

    #[test]
    fn deserialize_preserves_document_order() {
        let json = r#"{"Zoo": [[1.0, "", "2024-02-01"]], "Art": [[2.0, "x", "2024-02-02"]]}"#;
        let book: ExpenseBook = serde_json::from_str(json).unwrap();
        let names: Vec<_> = book.category_names().collect();
        assert_eq!(names, vec!["Zoo", "Art"]);
    }

    #[test]
    fn deserialize_skips_empty_categories() {
        let json = r#"{"Empty": [], "Food": [[3.0, "", "2024-02-01"]]}"#;
        let book: ExpenseBook = serde_json::from_str(json).unwrap();
        assert!(!book.contains("Empty"));
        assert_eq!(book.category_count(), 1);
    }

    #[test]
    fn deserialize_rejects_non_object() {
        let result: Result<ExpenseBook, _> = serde_json::from_str("[1, 2, 3]");
        assert!(result.is_err());
    }
}
