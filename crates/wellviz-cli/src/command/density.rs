use std::path::PathBuf;

use anyhow::{bail, ensure};
use serde::Serialize;
use wellviz_analysis::chart::{ChartKind, ChartModel, ViewState, build_chart};

use crate::data::{self, Dataset};

#[derive(Debug, Clone, clap::Args)]
pub struct DensityArg {
    /// Survey export to analyze: questionnaire, stress, or content
    #[arg(long, default_value = "questionnaire")]
    dataset: Dataset,
    /// File to load instead of the dataset's known path
    #[arg(long)]
    input: Option<PathBuf>,
    /// Column holding the group key; defaults to the dataset's group column
    #[arg(long)]
    group_by: Option<String>,
    /// Numeric column to estimate densities for; defaults to the dataset's
    /// metric column
    #[arg(long)]
    metric: Option<String>,
    /// Minimum responses a platform needs to be compared
    #[arg(long, default_value_t = ViewState::DEFAULT_MIN_GROUP_LEN)]
    min_n: usize,
    /// Kernel bandwidth; defaults to a fifteenth of each sample's range
    #[arg(long)]
    bandwidth: Option<f64>,
    /// Emit JSON (with full curves) instead of a text table
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct DensityReport {
    grid: Vec<f64>,
    groups: Vec<DensityRow>,
}

#[derive(Debug, Serialize)]
struct DensityRow {
    platform: String,
    n: usize,
    peak: f64,
    densities: Vec<f64>,
}

pub fn run(arg: &DensityArg) -> anyhow::Result<()> {
    if let Some(bandwidth) = arg.bandwidth {
        ensure!(
            bandwidth > 0.0,
            "bandwidth must be strictly positive, got {bandwidth}"
        );
    }

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
    let mut state = ViewState::new(group_by, metric)
        .with_chart(ChartKind::Violin)
        .with_min_group_len(arg.min_n);
    if let Some(bandwidth) = arg.bandwidth {
        state = state.with_bandwidth(bandwidth);
    }

    let ChartModel::Violin { grid, groups } = build_chart(&records, &state)? else {
        bail!("density built a non-violin model");
    };

    let report = DensityReport {
        grid,
        groups: groups
            .into_iter()
            .map(|group| DensityRow {
                platform: group.key,
                n: group.len,
                peak: group.curve.peak(),
                densities: group.curve.points().iter().map(|&(_, d)| d).collect(),
            })
            .collect(),
    };

    if arg.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "{metric} density by {group_by} over [{:.2}, {:.2}] (n >= {})",
        report.grid.first().copied().unwrap_or(0.0),
        report.grid.last().copied().unwrap_or(0.0),
        arg.min_n,
    );
    for row in &report.groups {
        println!("{:<12} n={:<4} peak density={:.4}", row.platform, row.n, row.peak);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arg_with_bandwidth(bandwidth: f64) -> DensityArg {
        DensityArg {
            dataset: Dataset::Questionnaire,
            input: None,
            group_by: None,
            metric: None,
            min_n: ViewState::DEFAULT_MIN_GROUP_LEN,
            bandwidth: Some(bandwidth),
            json: false,
        }
    }

    #[test]
    fn test_non_positive_bandwidth_is_rejected() {
        // Rejected up front, before any data is loaded or estimated.
        let err = run(&arg_with_bandwidth(0.0)).unwrap_err();
        assert!(err.to_string().contains("bandwidth"));

        let err = run(&arg_with_bandwidth(-0.5)).unwrap_err();
        assert!(err.to_string().contains("bandwidth"));
    }
}
