use std::path::PathBuf;

use anyhow::bail;
use serde::Serialize;
use wellviz_analysis::{
    chart::RiskGauge,
    profile::from_questionnaire_row,
    risk::RiskBand,
};

use crate::data;

#[derive(Debug, Clone, clap::Args)]
pub struct RiskArg {
    /// Questionnaire export to load
    #[arg(long, default_value = data::QUESTIONNAIRE_FILE)]
    input: PathBuf,
    /// Score only this row (0-based); scores every row when omitted
    #[arg(long)]
    row: Option<usize>,
    /// Emit JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct RiskRow {
    row: usize,
    risk: u8,
    band: RiskBand,
}

pub fn run(arg: &RiskArg) -> anyhow::Result<()> {
    let records = data::load_records(&arg.input)?;

    if let Some(index) = arg.row {
        let Some(record) = records.get(index) else {
            bail!("row {index} is out of range (the dataset has {} rows)", records.len());
        };
        let gauge = RiskGauge::from_profile(from_questionnaire_row(record));

        if arg.json {
            let report = RiskRow {
                row: index,
                risk: gauge.risk,
                band: gauge.band,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
            return Ok(());
        }

        println!("row {index}: risk={}% band={}", gauge.risk, gauge.band);
        for (feature, score) in &gauge.profile {
            println!("  {:<14} {score:>5.0}", feature.label());
        }
        return Ok(());
    }

    let rows = records
        .iter()
        .enumerate()
        .map(|(row, record)| {
            let gauge = RiskGauge::from_profile(from_questionnaire_row(record));
            RiskRow {
                row,
                risk: gauge.risk,
                band: gauge.band,
            }
        })
        .collect::<Vec<_>>();

    if arg.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    for row in &rows {
        println!("row {:<5} risk={:>3}% band={}", row.row, row.risk, row.band);
    }
    Ok(())
}
