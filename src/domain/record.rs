use serde::{
    de::Deserializer,
    ser::{Error as _, Serializer},
    Deserialize, Serialize,
};

use crate::errors::{ExpenseError, Result};

/// Calendar format used for stored dates and the chronological series.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single expense entry.
///
/// On disk a record is the positional triple `[amount, description, date]`;
/// in memory the fields are named. The date is kept verbatim as entered and
/// is only parsed when a chronological view is requested.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub amount: f64,
    pub description: String,
    pub date: String,
}

impl Record {
    pub fn new(amount: f64, description: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            amount,
            description: description.into(),
            date: date.into(),
        }
    }
}

impl Serialize for Record {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // JSON has no NaN or infinity; serde_json would write `null` and fail to read it back.
        if !self.amount.is_finite() {
            return Err(S::Error::custom(format!(
                "amount {} cannot be stored as JSON",
                self.amount
            )));
        }
        (self.amount, &self.description, &self.date).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let (amount, description, date) = <(f64, String, String)>::deserialize(deserializer)?;
        Ok(Self {
            amount,
            description,
            date,
        })
    }
}

/// Parses a user-entered amount. Surrounding whitespace is ignored; sign is not checked.
///
/// `nan` and `inf` parse as floats but are rejected: they have no JSON form.
pub fn parse_amount(raw: &str) -> Result<f64> {
    match raw.trim().parse::<f64>() {
        Ok(amount) if amount.is_finite() => Ok(amount),
        _ => Err(ExpenseError::InvalidAmount(raw.to_string())),
    }
}
