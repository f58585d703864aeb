use std::path::PathBuf;

use anyhow::bail;
use serde::Serialize;
use wellviz_analysis::chart::{ChartModel, ViewState, build_chart};

use crate::data::{self, Dataset};

#[derive(Debug, Clone, clap::Args)]
pub struct SummarizeArg {
    /// Survey export to analyze: questionnaire, stress, or content
    #[arg(long, default_value = "questionnaire")]
    dataset: Dataset,
    /// File to load instead of the dataset's known path
    #[arg(long)]
    input: Option<PathBuf>,
    /// Column holding the group key; defaults to the dataset's group column
    #[arg(long)]
    group_by: Option<String>,
    /// Numeric column to summarize; defaults to the dataset's metric column
    #[arg(long)]
    metric: Option<String>,
    /// Minimum responses a platform needs to be compared
    #[arg(long, default_value_t = ViewState::DEFAULT_MIN_GROUP_LEN)]
    min_n: usize,
    /// Emit JSON instead of a text table
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct SummaryRow {
    platform: String,
    n: usize,
    q1: f64,
    median: f64,
    q3: f64,
    whisker_low: f64,
    whisker_high: f64,
    outliers: Vec<f64>,
}

pub fn run(arg: &SummarizeArg) -> anyhow::Result<()> {
    let input = arg
        .input
        .clone()
        .unwrap_or_else(|| arg.dataset.path().to_path_buf());
    let group_by = arg
        .group_by
        .as_deref()
        .unwrap_or_else(|| arg.dataset.group_column());
    let metric = arg
        .metric
        .as_deref()
        .unwrap_or_else(|| arg.dataset.metric_column());

    let records = data::load_records(&input)?;
    let state = ViewState::new(group_by, metric).with_min_group_len(arg.min_n);

    let ChartModel::Boxplot(groups) = build_chart(&records, &state)? else {
        bail!("summarize built a non-boxplot model");
    };

    let rows = groups
        .into_iter()
        .map(|group| SummaryRow {
            platform: group.key,
            n: group.summary.len,
            q1: group.summary.q1,
            median: group.summary.median,
            q3: group.summary.q3,
            whisker_low: group.summary.whisker_low,
            whisker_high: group.summary.whisker_high,
            outliers: group.summary.outliers,
        })
        .collect::<Vec<_>>();

    if arg.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!("{metric} by {group_by} (n >= {})", arg.min_n);
    for row in &rows {
        println!(
            "{:<12} n={:<4} q1={:.2} med={:.2} q3={:.2} whiskers=[{:.2}, {:.2}] outliers={}",
            row.platform,
            row.n,
            row.q1,
            row.median,
            row.q3,
            row.whisker_low,
            row.whisker_high,
            row.outliers.len(),
        );
    }
    Ok(())
}
