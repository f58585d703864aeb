//! Survey rows as field-name → raw-value maps.
//!
//! A [`Record`] is one questionnaire respondent. Column presence is informal:
//! accessors degrade gracefully when a field is absent or non-numeric instead
//! of failing, because malformed survey data is expected and tolerated.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One survey row: an immutable mapping from column name to raw value.
///
/// # Examples
///
/// ```
/// use wellviz_analysis::record::Record;
///
/// let row = Record::from_fields([("age", "23"), ("main_platform", "TikTok")]);
/// assert_eq!(row.number("age"), Some(23.0));
/// assert_eq!(row.text("main_platform"), Some("TikTok"));
/// assert_eq!(row.number("anxiety_score"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: BTreeMap<String, String>,
}

impl Record {
    /// Builds a record from `(column, value)` pairs.
    pub fn from_fields<I, K, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            fields: fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// The raw text of a field, or `None` if the column is absent.
    #[must_use]
    pub fn text(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// The field parsed as a finite number.
    ///
    /// Returns `None` for absent columns, non-numeric text, and non-finite
    /// values (`NaN`, infinities), so downstream samples only ever contain
    /// finite reals.
    #[must_use]
    pub fn number(&self, name: &str) -> Option<f64> {
        let value = self.text(name)?.trim().parse::<f64>().ok()?;
        value.is_finite().then_some(value)
    }

    /// The field parsed as a finite number, falling back to a neutral
    /// default for missing or malformed values.
    ///
    /// # Examples
    ///
    /// ```
    /// use wellviz_analysis::record::Record;
    ///
    /// let row = Record::from_fields([("anxiety_score", "n/a")]);
    /// assert_eq!(row.number_or("anxiety_score", 4.0), 4.0);
    /// ```
    #[must_use]
    pub fn number_or(&self, name: &str, default: f64) -> f64 {
        self.number(name).unwrap_or(default)
    }

    /// Number of columns present in this row.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the row has no columns at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_parses_trimmed_text() {
        let row = Record::from_fields([("score", " 6.5 ")]);
        assert_eq!(row.number("score"), Some(6.5));
    }

    #[test]
    fn test_number_rejects_non_finite() {
        let row = Record::from_fields([("a", "NaN"), ("b", "inf")]);
        assert_eq!(row.number("a"), None);
        assert_eq!(row.number("b"), None);
    }

    #[test]
    fn test_number_or_defaults_missing_and_malformed() {
        let row = Record::from_fields([("score", "often")]);
        assert_eq!(row.number_or("score", 3.5), 3.5);
        assert_eq!(row.number_or("absent", 0.5), 0.5);
    }
}
