use chrono::NaiveDate;

use crate::{
    domain::DATE_FORMAT,
    errors::{ExpenseError, Result},
};

use super::ExpenseStore;

/// Summed spending for one category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
}

/// One expense placed on the time axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesPoint {
    pub date: NaiveDate,
    pub amount: f64,
}

impl ExpenseStore {
    /// Per-category totals in category order.
    pub fn by_category(&self) -> Vec<CategoryTotal> {
        self.all()
            .iter()
            .map(|(category, records)| CategoryTotal {
                category: category.to_string(),
                total: records.iter().map(|record| record.amount).sum(),
            })
            .collect()
    }

    /// Every expense as a `(date, amount)` point, oldest first.
    ///
    /// Equal dates keep store order. A date that does not parse as
    /// `YYYY-MM-DD` fails the whole call.
    pub fn chronological_series(&self) -> Result<Vec<SeriesPoint>> {
        let mut points = Vec::with_capacity(self.len());
        for (category, records) in self.all().iter() {
            for (index, record) in records.iter().enumerate() {
                let date = NaiveDate::parse_from_str(&record.date, DATE_FORMAT).map_err(|_| {
                    ExpenseError::MalformedDate {
                        category: category.to_string(),
                        index,
                        value: record.date.clone(),
                    }
                })?;
                points.push(SeriesPoint {
                    date,
                    amount: record.amount,
                });
            }
        }
        points.sort_by_key(|point| point.date);
        Ok(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{tempdir, TempDir};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn store_with(entries: &[(&str, f64, &str)]) -> (ExpenseStore, TempDir) {
        let dir = tempdir().unwrap();
        let mut store = ExpenseStore::open(dir.path().join("expenses.json")).unwrap();
        for (category, amount, day) in entries {
            store.add(*category, *amount, "", Some(*day)).unwrap();
        }
        (store, dir)
    }

    #[test]
    fn by_category_is_empty_for_empty_store() {
        let (store, _guard) = store_with(&[]);
        assert!(store.by_category().is_empty());
        assert!(store.chronological_series().unwrap().is_empty());
    }

    #[test]
    fn series_ties_keep_store_order() {
        let (store, _guard) = store_with(&[
            ("B", 2.0, "2024-03-01"),
            ("A", 1.0, "2024-03-01"),
            ("B", 3.0, "2024-02-01"),
        ]);
        let series = store.chronological_series().unwrap();
        let amounts: Vec<_> = series.iter().map(|p| p.amount).collect();
        assert_eq!(amounts, vec![3.0, 2.0, 1.0]);
        assert_eq!(series[0].date, date(2024, 2, 1));
    }

    #[test]
    fn malformed_date_names_the_record() {
        let (store, _guard) =
            store_with(&[("Food", 1.0, "2024-01-01"), ("Food", 2.0, "01/02/2024")]);
        match store.chronological_series() {
            Err(ExpenseError::MalformedDate {
                category,
                index,
                value,
            }) => {
                assert_eq!(category, "Food");
                assert_eq!(index, 1);
                assert_eq!(value, "01/02/2024");
            }
            other => panic!("expected malformed date, got {other:?}"),
        }
    }
}
