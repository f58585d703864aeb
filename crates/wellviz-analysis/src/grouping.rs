//! Grouping survey records into per-key numeric samples.
//!
//! [`group_samples`] walks the records once, normalizes the group key of
//! each row, extracts its numeric value, and appends the value to the key's
//! sample in encounter order. Rows with a blank key or without a finite
//! value are silently dropped: malformed survey data is expected, not an
//! error. The resulting [`GroupedSamples`] never contains an empty group.
//!
//! Comparisons across groups are only meaningful above a minimum sample
//! size; [`GroupedSamples::retain_min_len`] applies that caller-side filter.
//!
//! The cycle pages group by numeric range instead of by categorical answer:
//! a fixed table of labeled [`ValueBin`]s places each row by its age, and the
//! donut legend counts the distinct answers of a column via
//! [`category_shares`].

use std::collections::BTreeMap;

use crate::{platform::normalize_platform, record::Record};

/// Per-key numeric samples extracted from survey records.
///
/// Keys are ordered; values within a group preserve encounter order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupedSamples {
    groups: BTreeMap<String, Vec<f64>>,
}

impl GroupedSamples {
    /// The sample for one group key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&[f64]> {
        self.groups.get(key).map(Vec::as_slice)
    }

    /// Iterates over `(key, sample)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.groups.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Number of groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether no group survived extraction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Drops every group with fewer than `min_len` values.
    ///
    /// # Examples
    ///
    /// ```
    /// use wellviz_analysis::{grouping::group_samples, record::Record};
    ///
    /// let rows = vec![
    ///     Record::from_fields([("p", "TikTok"), ("v", "1")]),
    ///     Record::from_fields([("p", "TikTok"), ("v", "2")]),
    ///     Record::from_fields([("p", "Discord"), ("v", "3")]),
    /// ];
    /// let grouped = group_samples(
    ///     &rows,
    ///     |r| r.text("p").map(str::to_string),
    ///     |r| r.number("v"),
    /// )
    /// .retain_min_len(2);
    /// assert!(grouped.get("TikTok").is_some());
    /// assert!(grouped.get("Discord").is_none());
    /// ```
    #[must_use]
    pub fn retain_min_len(mut self, min_len: usize) -> Self {
        self.groups.retain(|_, sample| sample.len() >= min_len);
        self
    }
}

impl<'a> IntoIterator for &'a GroupedSamples {
    type Item = (&'a str, &'a [f64]);
    type IntoIter = Box<dyn Iterator<Item = (&'a str, &'a [f64])> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

/// Groups records into per-key samples.
///
/// For each record, `key_fn` produces the (already normalized) group key and
/// `value_fn` the numeric observation. The record is skipped when the key is
/// `None`/blank or the value is missing or non-finite. Skipping is silent;
/// there are no error conditions.
pub fn group_samples<K, V>(records: &[Record], key_fn: K, value_fn: V) -> GroupedSamples
where
    K: Fn(&Record) -> Option<String>,
    V: Fn(&Record) -> Option<f64>,
{
    let mut groups: BTreeMap<String, Vec<f64>> = BTreeMap::new();
    for record in records {
        let Some(key) = key_fn(record) else {
            continue;
        };
        if key.is_empty() {
            continue;
        }
        let Some(value) = value_fn(record) else {
            continue;
        };
        if !value.is_finite() {
            continue;
        }
        groups.entry(key).or_default().push(value);
    }
    GroupedSamples { groups }
}

/// Groups records by canonical platform name.
///
/// Reads the platform from `platform_column`, normalizes it with
/// [`normalize_platform`], and samples the numeric `value_column`.
///
/// # Examples
///
/// ```
/// use wellviz_analysis::{grouping::group_by_platform, record::Record};
///
/// let rows = vec![
///     Record::from_fields([("main_platform", "twitter"), ("anxiety_score", "5")]),
///     Record::from_fields([("main_platform", "X"), ("anxiety_score", "2")]),
/// ];
/// let grouped = group_by_platform(&rows, "main_platform", "anxiety_score");
/// assert_eq!(grouped.get("X"), Some(&[5.0, 2.0][..]));
/// ```
#[must_use]
pub fn group_by_platform(
    records: &[Record],
    platform_column: &str,
    value_column: &str,
) -> GroupedSamples {
    group_samples(
        records,
        |record| record.text(platform_column).and_then(normalize_platform),
        |record| record.number(value_column),
    )
}

/// A labeled numeric range; both bounds are inclusive.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueBin {
    /// Display label of the range (also its group key).
    pub label: &'static str,
    /// Smallest value inside the range.
    pub min: f64,
    /// Largest value inside the range.
    pub max: f64,
}

impl ValueBin {
    /// Whether `value` falls inside the range.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Age brackets offered by the cycle pages' dropdown.
pub const AGE_BINS: [ValueBin; 6] = [
    ValueBin { label: "18-21", min: 18.0, max: 21.0 },
    ValueBin { label: "22-25", min: 22.0, max: 25.0 },
    ValueBin { label: "26-30", min: 26.0, max: 30.0 },
    ValueBin { label: "31-35", min: 31.0, max: 35.0 },
    ValueBin { label: "36-40", min: 36.0, max: 40.0 },
    ValueBin { label: "41+", min: 41.0, max: 120.0 },
];

/// Rows whose `column` value falls inside `bin`.
///
/// Rows without a finite value in `column` are dropped, like the cycle
/// pages' age filter.
#[must_use]
pub fn filter_by_bin<'a>(records: &'a [Record], column: &str, bin: &ValueBin) -> Vec<&'a Record> {
    records
        .iter()
        .filter(|record| record.number(column).is_some_and(|v| bin.contains(v)))
        .collect()
}

/// Groups records into labeled numeric-range bins, keyed by bin label.
///
/// Each row is placed by its `bin_column` value; rows outside every bin,
/// without a finite position, or without a finite `value_fn` result are
/// silently dropped, as in [`group_samples`].
///
/// # Examples
///
/// ```
/// use wellviz_analysis::{
///     grouping::{AGE_BINS, group_by_bins},
///     record::Record,
/// };
///
/// let rows = vec![
///     Record::from_fields([("age", "19"), ("anxiety_score", "5")]),
///     Record::from_fields([("age", "20"), ("anxiety_score", "3")]),
///     Record::from_fields([("age", "44"), ("anxiety_score", "2")]),
/// ];
/// let grouped = group_by_bins(&rows, "age", |r| r.number("anxiety_score"), &AGE_BINS);
/// assert_eq!(grouped.get("18-21"), Some(&[5.0, 3.0][..]));
/// assert_eq!(grouped.get("41+"), Some(&[2.0][..]));
/// ```
pub fn group_by_bins<V>(
    records: &[Record],
    bin_column: &str,
    value_fn: V,
    bins: &[ValueBin],
) -> GroupedSamples
where
    V: Fn(&Record) -> Option<f64>,
{
    let mut groups: BTreeMap<String, Vec<f64>> = BTreeMap::new();
    for record in records {
        let Some(position) = record.number(bin_column) else {
            continue;
        };
        let Some(bin) = bins.iter().find(|bin| bin.contains(position)) else {
            continue;
        };
        let Some(value) = value_fn(record) else {
            continue;
        };
        if !value.is_finite() {
            continue;
        }
        groups.entry(bin.label.to_string()).or_default().push(value);
    }
    GroupedSamples { groups }
}

/// Count and share of one distinct answer of a column.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryShare {
    /// The raw (trimmed) answer text.
    pub key: String,
    /// Rows giving that answer.
    pub count: usize,
    /// Fraction of all rows giving that answer.
    pub share: f64,
}

/// Counts the distinct answers of a column and their share of all rows.
///
/// Rows with a blank or absent answer carry no category but still count
/// toward the denominator, so shares match the donut legend's percentages
/// over the full selection. Keys are returned in sorted order.
///
/// # Examples
///
/// ```
/// use wellviz_analysis::{grouping::category_shares, record::Record};
///
/// let rows = vec![
///     Record::from_fields([("cycle_outcome_numeric", "1")]),
///     Record::from_fields([("cycle_outcome_numeric", "1")]),
///     Record::from_fields([("cycle_outcome_numeric", "-1")]),
///     Record::from_fields([("other_column", "x")]),
/// ];
/// let shares = category_shares(&rows, "cycle_outcome_numeric");
/// assert_eq!(shares[0].key, "-1");
/// assert_eq!(shares[1].count, 2);
/// assert_eq!(shares[1].share, 0.5);
/// ```
#[expect(clippy::cast_precision_loss)]
pub fn category_shares<'a, I>(records: I, column: &str) -> Vec<CategoryShare>
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut total = 0_usize;
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for record in records {
        total += 1;
        if let Some(answer) = record.text(column) {
            let answer = answer.trim();
            if !answer.is_empty() {
                *counts.entry(answer.to_string()).or_default() += 1;
            }
        }
    }
    if total == 0 {
        return Vec::new();
    }
    counts
        .into_iter()
        .map(|(key, count)| CategoryShare {
            key,
            count,
            share: count as f64 / total as f64,
        })
        .collect()
}
