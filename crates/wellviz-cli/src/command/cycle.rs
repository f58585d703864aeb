use std::path::PathBuf;

use anyhow::bail;
use serde::Serialize;
use wellviz_analysis::{
    chart::{CycleModel, build_cycle},
    grouping::AGE_BINS,
};

use crate::data;

#[derive(Debug, Clone, clap::Args)]
pub struct CycleArg {
    /// Questionnaire export to load
    #[arg(long, default_value = data::QUESTIONNAIRE_FILE)]
    input: PathBuf,
    /// Age bracket to report (e.g. "22-25"); reports every bracket when
    /// omitted
    #[arg(long)]
    age_bin: Option<String>,
    /// Emit JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct CycleRow {
    age_bin: &'static str,
    n: usize,
    outcomes: Vec<OutcomeRow>,
    coping_score: f64,
}

#[derive(Debug, Serialize)]
struct OutcomeRow {
    outcome: String,
    count: usize,
    share: f64,
}

/// Legend vocabulary of the outcome donut.
fn outcome_label(key: &str) -> &str {
    match key {
        "-1" => "Diminue",
        "0" => "Stable",
        "1" => "Augmente",
        other => other,
    }
}

fn to_row(model: &CycleModel) -> CycleRow {
    CycleRow {
        age_bin: model.bin.label,
        n: model.n,
        outcomes: model
            .outcomes
            .iter()
            .map(|share| OutcomeRow {
                outcome: outcome_label(&share.key).to_string(),
                count: share.count,
                share: share.share,
            })
            .collect(),
        coping_score: model.coping_score(),
    }
}

pub fn run(arg: &CycleArg) -> anyhow::Result<()> {
    let records = data::load_records(&arg.input)?;

    let models = match &arg.age_bin {
        Some(label) => {
            let Some(bin) = AGE_BINS.iter().find(|bin| bin.label == *label) else {
                let known = AGE_BINS.iter().map(|bin| bin.label).collect::<Vec<_>>();
                bail!("unknown age bracket {label:?}; known brackets: {}", known.join(", "));
            };
            vec![build_cycle(&records, bin)?]
        }
        None => AGE_BINS
            .iter()
            .filter_map(|bin| build_cycle(&records, bin).ok())
            .collect(),
    };

    let rows = models.iter().map(to_row).collect::<Vec<_>>();

    if arg.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    for row in &rows {
        println!("{:<6} n={:<4} coping={:.1}/10", row.age_bin, row.n, row.coping_score);
        for outcome in &row.outcomes {
            println!(
                "  {:<10} {:>4} ({:.0}%)",
                outcome.outcome,
                outcome.count,
                outcome.share * 100.0,
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_labels_match_legend() {
        assert_eq!(outcome_label("-1"), "Diminue");
        assert_eq!(outcome_label("0"), "Stable");
        assert_eq!(outcome_label("1"), "Augmente");
        assert_eq!(outcome_label("2"), "2");
    }
}
