//! Parameterized chart models.
//!
//! Every page of the original dashboard recomputed the same pipeline with
//! its own copy-pasted script and a scatter of top-level mutable state. Here
//! the pipeline is a single function: the caller owns one explicit
//! [`ViewState`] (its current dropdown/button selections) and
//! [`build_chart`] derives the matching [`ChartModel`] from scratch on every
//! interaction. Models are replaced, never mutated.
//!
//! The renderer picks its drawing strategy off the [`ChartKind`] tag; no
//! drawing happens in this crate.
//!
//! The anxiety-cycle charts parameterize differently (an age bracket instead
//! of a group column), so they get their own [`build_cycle`] entry point and
//! [`CycleModel`].

use wellviz_stats::{
    boxplot::BoxplotSummary,
    density::{DensityCurve, default_bandwidth, evaluation_grid},
};

use crate::{
    grouping::{CategoryShare, GroupedSamples, ValueBin, category_shares, filter_by_bin, group_by_platform},
    profile::from_questionnaire_row,
    record::Record,
    risk::{FeatureProfile, RiskBand},
};

/// Number of steps in the violin evaluation grid (axis tick resolution).
const VIOLIN_GRID_STEPS: usize = 40;

/// Which chart the renderer should draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartKind {
    #[default]
    Boxplot,
    Violin,
    Bar,
    Donut,
}

/// The caller-owned UI selections that parameterize a chart.
///
/// Holding every selection in one value removes the load-order coupling of
/// the original per-page globals: a model can be rebuilt from any state at
/// any time.
///
/// # Examples
///
/// ```
/// use wellviz_analysis::chart::{ChartKind, ViewState};
///
/// let state = ViewState::new("main_platform", "anxiety_score")
///     .with_chart(ChartKind::Bar)
///     .with_min_group_len(3);
/// assert_eq!(state.min_group_len, 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    /// Column holding the group key (normalized as a platform name).
    pub group_by: String,
    /// Numeric column to summarize.
    pub metric: String,
    /// Which chart to build.
    pub chart: ChartKind,
    /// Minimum responses a group needs to enter the comparison.
    pub min_group_len: usize,
    /// KDE bandwidth override; `None` uses the per-sample default.
    pub bandwidth: Option<f64>,
    /// Row selected for the donut gauge; `None` shows the neutral profile.
    pub selected_row: Option<usize>,
}

impl ViewState {
    /// Default minimum group size, matching the dashboard's initial filter.
    pub const DEFAULT_MIN_GROUP_LEN: usize = 5;

    /// A boxplot view over `group_by` / `metric` with default filters.
    pub fn new(group_by: impl Into<String>, metric: impl Into<String>) -> Self {
        Self {
            group_by: group_by.into(),
            metric: metric.into(),
            chart: ChartKind::default(),
            min_group_len: Self::DEFAULT_MIN_GROUP_LEN,
            bandwidth: None,
            selected_row: None,
        }
    }

    /// Replaces the chart kind.
    #[must_use]
    pub fn with_chart(mut self, chart: ChartKind) -> Self {
        self.chart = chart;
        self
    }

    /// Replaces the minimum group size.
    #[must_use]
    pub fn with_min_group_len(mut self, min_group_len: usize) -> Self {
        self.min_group_len = min_group_len;
        self
    }

    /// Replaces the bandwidth override.
    ///
    /// The override must be strictly positive; building a violin model with
    /// a non-positive bandwidth panics in the density estimator. Callers
    /// taking the value from user input validate it first.
    #[must_use]
    pub fn with_bandwidth(mut self, bandwidth: f64) -> Self {
        self.bandwidth = Some(bandwidth);
        self
    }

    /// Selects the row shown by the donut gauge.
    #[must_use]
    pub fn with_selected_row(mut self, index: usize) -> Self {
        self.selected_row = Some(index);
        self
    }
}

/// Boxplot statistics for one group.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupBoxplot {
    pub key: String,
    pub summary: BoxplotSummary,
}

/// Density curve for one group.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupDensity {
    pub key: String,
    pub len: usize,
    pub curve: DensityCurve,
}

/// Mean value for one group.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupMean {
    pub key: String,
    pub len: usize,
    pub mean: f64,
}

/// Risk gauge contents for one respondent profile.
#[derive(Debug, Clone, PartialEq)]
pub struct RiskGauge {
    pub profile: FeatureProfile,
    pub risk: u8,
    pub band: RiskBand,
}

impl RiskGauge {
    /// Scores a profile and classifies it.
    #[must_use]
    pub fn from_profile(profile: FeatureProfile) -> Self {
        let risk = profile.risk_score();
        Self {
            profile,
            risk,
            band: RiskBand::from_score(risk),
        }
    }
}

/// The derived inputs one render pass needs, tagged by chart kind.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartModel {
    /// Per-group boxplot summaries, sorted by descending median.
    Boxplot(Vec<GroupBoxplot>),
    /// Per-group density curves over one shared grid, in key order.
    Violin {
        grid: Vec<f64>,
        groups: Vec<GroupDensity>,
    },
    /// Per-group means, sorted descending.
    Bar(Vec<GroupMean>),
    /// Risk gauge for the selected respondent.
    Donut(RiskGauge),
}

/// The reportable conditions of chart building.
///
/// Dropped survey rows are not errors; only an empty comparison set or a
/// stale row selection is worth surfacing to the user.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum ChartModelError {
    #[display("no group with at least {min_len} responses; lower the minimum filter")]
    NoGroupMeetsMinimum { min_len: usize },
    #[display("selected row {index} is out of range (the dataset has {len} rows)")]
    RowOutOfRange { index: usize, len: usize },
    #[display("no respondent in the {label} age bracket")]
    EmptyAgeBin { label: &'static str },
}

/// Builds the chart model for the current view state.
///
/// Groups `records` by the normalized `group_by` column, applies the
/// minimum-group-size filter, and derives the statistics the selected chart
/// kind needs. [`ChartKind::Donut`] ignores the grouping parameters and
/// scores the selected row instead (or the neutral profile when no row is
/// selected).
///
/// # Errors
///
/// - [`ChartModelError::NoGroupMeetsMinimum`] when the filter leaves no
///   group to compare.
/// - [`ChartModelError::RowOutOfRange`] when the donut selection points past
///   the end of the dataset.
pub fn build_chart(records: &[Record], state: &ViewState) -> Result<ChartModel, ChartModelError> {
    match state.chart {
        ChartKind::Boxplot => Ok(ChartModel::Boxplot(boxplot_groups(&grouped_samples(
            records, state,
        )?))),
        ChartKind::Violin => {
            let grouped = grouped_samples(records, state)?;
            let (grid, groups) = violin_groups(&grouped, state.bandwidth);
            Ok(ChartModel::Violin { grid, groups })
        }
        ChartKind::Bar => Ok(ChartModel::Bar(bar_groups(&grouped_samples(records, state)?))),
        ChartKind::Donut => {
            let profile = match state.selected_row {
                Some(index) => {
                    let record =
                        records
                            .get(index)
                            .ok_or(ChartModelError::RowOutOfRange {
                                index,
                                len: records.len(),
                            })?;
                    from_questionnaire_row(record)
                }
                None => FeatureProfile::neutral(),
            };
            Ok(ChartModel::Donut(RiskGauge::from_profile(profile)))
        }
    }
}

fn grouped_samples(records: &[Record], state: &ViewState) -> Result<GroupedSamples, ChartModelError> {
    let grouped = group_by_platform(records, &state.group_by, &state.metric)
        .retain_min_len(state.min_group_len);
    if grouped.is_empty() {
        return Err(ChartModelError::NoGroupMeetsMinimum {
            min_len: state.min_group_len,
        });
    }
    Ok(grouped)
}

fn boxplot_groups(grouped: &GroupedSamples) -> Vec<GroupBoxplot> {
    let mut groups = grouped
        .iter()
        .map(|(key, sample)| GroupBoxplot {
            key: key.to_string(),
            summary: BoxplotSummary::new(sample),
        })
        .collect::<Vec<_>>();
    groups.sort_by(|a, b| b.summary.median.total_cmp(&a.summary.median));
    groups
}

#[expect(clippy::cast_precision_loss)]
fn bar_groups(grouped: &GroupedSamples) -> Vec<GroupMean> {
    let mut groups = grouped
        .iter()
        .map(|(key, sample)| GroupMean {
            key: key.to_string(),
            len: sample.len(),
            mean: sample.iter().sum::<f64>() / sample.len() as f64,
        })
        .collect::<Vec<_>>();
    groups.sort_by(|a, b| b.mean.total_cmp(&a.mean));
    groups
}

/// Column names of the cycle charts.
const AGE_COLUMN: &str = "age";
const OUTCOME_COLUMN: &str = "cycle_outcome_numeric";
const TRIGGER_COLUMN: &str = "cycle_trigger_numeric";

/// One render pass of the anxiety-cycle charts: the outcome donut and the
/// coping score for one age bracket.
#[derive(Debug, Clone, PartialEq)]
pub struct CycleModel {
    /// The bracket the rows were filtered to.
    pub bin: ValueBin,
    /// Respondents in the bracket.
    pub n: usize,
    /// Share of each outcome answer (-1 decreases, 0 stable, 1 increases).
    pub outcomes: Vec<CategoryShare>,
    /// Mean of the coping trigger column, on its native 0-2 scale.
    pub coping_mean: f64,
}

impl CycleModel {
    /// The coping score on the 0-10 display scale.
    #[must_use]
    pub fn coping_score(&self) -> f64 {
        self.coping_mean * 5.0
    }

    /// Share of respondents reporting rising anxiety (outcome `1`).
    #[must_use]
    pub fn worse_share(&self) -> f64 {
        self.outcomes
            .iter()
            .find(|share| share.key == "1")
            .map_or(0.0, |share| share.share)
    }
}

/// Derives the cycle model for one age bracket.
///
/// Filters rows to the bracket (rows without a finite age are dropped),
/// counts the distinct outcome answers among them, and averages the trigger
/// column with missing values counting as zero.
///
/// # Errors
///
/// [`ChartModelError::EmptyAgeBin`] when no row falls in the bracket.
///
/// # Examples
///
/// ```
/// use wellviz_analysis::{chart::build_cycle, grouping::ValueBin, record::Record};
///
/// let rows = vec![
///     Record::from_fields([
///         ("age", "23"),
///         ("cycle_outcome_numeric", "1"),
///         ("cycle_trigger_numeric", "2"),
///     ]),
///     Record::from_fields([
///         ("age", "24"),
///         ("cycle_outcome_numeric", "-1"),
///         ("cycle_trigger_numeric", "0"),
///     ]),
/// ];
/// let bin = ValueBin { label: "22-25", min: 22.0, max: 25.0 };
/// let model = build_cycle(&rows, &bin).unwrap();
/// assert_eq!(model.n, 2);
/// assert_eq!(model.worse_share(), 0.5);
/// assert_eq!(model.coping_score(), 5.0);
/// ```
#[expect(clippy::cast_precision_loss)]
pub fn build_cycle(records: &[Record], bin: &ValueBin) -> Result<CycleModel, ChartModelError> {
    let rows = filter_by_bin(records, AGE_COLUMN, bin);
    if rows.is_empty() {
        return Err(ChartModelError::EmptyAgeBin { label: bin.label });
    }

    let outcomes = category_shares(rows.iter().copied(), OUTCOME_COLUMN);
    let coping_mean = rows
        .iter()
        .map(|record| record.number_or(TRIGGER_COLUMN, 0.0))
        .sum::<f64>()
        / rows.len() as f64;

    Ok(CycleModel {
        bin: bin.clone(),
        n: rows.len(),
        outcomes,
        coping_mean,
    })
}

fn violin_groups(
    grouped: &GroupedSamples,
    bandwidth: Option<f64>,
) -> (Vec<f64>, Vec<GroupDensity>) {
    let lo = grouped
        .iter()
        .flat_map(|(_, sample)| sample.iter().copied())
        .fold(f64::INFINITY, f64::min);
    let hi = grouped
        .iter()
        .flat_map(|(_, sample)| sample.iter().copied())
        .fold(f64::NEG_INFINITY, f64::max);
    let grid = evaluation_grid(lo, hi, VIOLIN_GRID_STEPS);

    let groups = grouped
        .iter()
        .map(|(key, sample)| GroupDensity {
            key: key.to_string(),
            len: sample.len(),
            curve: DensityCurve::estimate(
                sample,
                bandwidth.unwrap_or_else(|| default_bandwidth(sample)),
                &grid,
            ),
        })
        .collect();
    (grid, groups)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<Record> {
        let mut rows = Vec::new();
        for v in ["2", "3", "4", "3", "2"] {
            rows.push(Record::from_fields([
                ("main_platform", "TikTok"),
                ("anxiety_score", v),
            ]));
        }
        for v in ["5", "6", "7", "6", "5"] {
            rows.push(Record::from_fields([
                ("main_platform", "twitter"),
                ("anxiety_score", v),
            ]));
        }
        for v in ["1", "1"] {
            rows.push(Record::from_fields([
                ("main_platform", "Mastodon"),
                ("anxiety_score", v),
            ]));
        }
        rows
    }

    fn state() -> ViewState {
        ViewState::new("main_platform", "anxiety_score")
    }

    #[test]
    fn test_boxplot_groups_sorted_by_descending_median() {
        let model = build_chart(&rows(), &state().with_min_group_len(2)).unwrap();
        let ChartModel::Boxplot(groups) = model else {
            panic!("expected boxplot model");
        };
        assert_eq!(groups[0].key, "X");
        let medians: Vec<_> = groups.iter().map(|g| g.summary.median).collect();
        assert!(medians.is_sorted_by(|a, b| a >= b));
    }

    #[test]
    fn test_min_filter_excludes_small_groups() {
        let model = build_chart(&rows(), &state()).unwrap();
        let ChartModel::Boxplot(groups) = model else {
            panic!("expected boxplot model");
        };
        assert!(groups.iter().all(|g| g.key != "Mastodon"));
        assert_eq!(groups.len(), 2);
    }

    #[test]
    fn test_no_group_meets_minimum_is_reported() {
        let err = build_chart(&rows(), &state().with_min_group_len(50)).unwrap_err();
        assert!(matches!(err, ChartModelError::NoGroupMeetsMinimum { min_len: 50 }));
    }

    #[test]
    fn test_bar_groups_sorted_by_descending_mean() {
        let model = build_chart(&rows(), &state().with_chart(ChartKind::Bar)).unwrap();
        let ChartModel::Bar(groups) = model else {
            panic!("expected bar model");
        };
        assert_eq!(groups[0].key, "X");
        assert_eq!(groups[0].len, 5);
        assert!((groups[0].mean - 5.8).abs() < 1e-9);
    }

    #[test]
    fn test_violin_shares_one_grid_across_groups() {
        let model = build_chart(&rows(), &state().with_chart(ChartKind::Violin)).unwrap();
        let ChartModel::Violin { grid, groups } = model else {
            panic!("expected violin model");
        };
        assert_eq!(grid.first(), Some(&2.0));
        assert_eq!(grid.last(), Some(&7.0));
        for group in &groups {
            assert_eq!(group.curve.points().len(), grid.len());
            assert!(group.curve.points().iter().all(|&(_, d)| d >= 0.0));
        }
    }

    #[test]
    fn test_donut_defaults_to_neutral_profile() {
        let model = build_chart(&rows(), &state().with_chart(ChartKind::Donut)).unwrap();
        let ChartModel::Donut(gauge) = model else {
            panic!("expected donut model");
        };
        assert_eq!(gauge.risk, 50);
        assert_eq!(gauge.band, RiskBand::Elevated);
    }

    #[test]
    fn test_donut_selected_row_out_of_range() {
        let err = build_chart(
            &rows(),
            &state().with_chart(ChartKind::Donut).with_selected_row(999),
        )
        .unwrap_err();
        assert!(matches!(err, ChartModelError::RowOutOfRange { index: 999, .. }));
    }

    fn cycle_row(age: &str, outcome: &str, trigger: &str) -> Record {
        Record::from_fields([
            ("age", age),
            ("cycle_outcome_numeric", outcome),
            ("cycle_trigger_numeric", trigger),
        ])
    }

    #[test]
    fn test_cycle_outcome_shares_and_coping() {
        let rows = vec![
            cycle_row("23", "1", "2"),
            cycle_row("24", "1", "1"),
            cycle_row("25", "-1", "0"),
            cycle_row("25", "0", "1"),
            cycle_row("40", "1", "2"), // outside the bracket
        ];
        let bin = ValueBin { label: "22-25", min: 22.0, max: 25.0 };
        let model = build_cycle(&rows, &bin).unwrap();

        assert_eq!(model.n, 4);
        assert_eq!(model.worse_share(), 0.5);
        // mean trigger = (2 + 1 + 0 + 1) / 4 = 1.0 -> 5.0 on the 0-10 scale
        assert_eq!(model.coping_score(), 5.0);
        let keys: Vec<_> = model.outcomes.iter().map(|s| s.key.as_str()).collect();
        assert_eq!(keys, vec!["-1", "0", "1"]);
    }

    #[test]
    fn test_cycle_missing_trigger_counts_as_zero() {
        let rows = vec![
            cycle_row("23", "1", "2"),
            Record::from_fields([("age", "24"), ("cycle_outcome_numeric", "0")]),
        ];
        let bin = ValueBin { label: "22-25", min: 22.0, max: 25.0 };
        let model = build_cycle(&rows, &bin).unwrap();
        assert_eq!(model.coping_mean, 1.0);
    }

    #[test]
    fn test_cycle_empty_bracket_is_reported() {
        let rows = vec![cycle_row("23", "1", "2")];
        let bin = ValueBin { label: "41+", min: 41.0, max: 120.0 };
        let err = build_cycle(&rows, &bin).unwrap_err();
        assert!(matches!(err, ChartModelError::EmptyAgeBin { label: "41+" }));
    }

    #[test]
    fn test_rebuilding_from_same_state_is_deterministic() {
        let state = state().with_chart(ChartKind::Violin);
        let a = build_chart(&rows(), &state).unwrap();
        let b = build_chart(&rows(), &state).unwrap();
        assert_eq!(a, b);
    }
}
