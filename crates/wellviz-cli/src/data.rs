use std::path::Path;

use anyhow::Context;
use wellviz_analysis::record::Record;

/// Cleaned questionnaire export produced by the dataset cleaning script.
pub const QUESTIONNAIRE_FILE: &str = "data/processed/questionnaire_clean.csv";

/// Third-party stress/platform dataset, used as-is.
pub const STRESS_PLATFORM_FILE: &str =
    "data/raw/Mental_Health_and_Social_Media_Balance_Dataset.csv";

/// Seven-day content-type log collected alongside the questionnaire.
pub const CONTENT_LOG_FILE: &str = "data/processed/content_log_7days.csv";

/// One of the three known survey exports.
///
/// Each dataset carries its own schema, so the grouping defaults differ:
/// the questionnaire and the stress dataset group by platform, the content
/// log by content type.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, derive_more::FromStr)]
pub enum Dataset {
    #[default]
    Questionnaire,
    Stress,
    Content,
}

impl Dataset {
    /// Relative path of the export file.
    #[must_use]
    pub fn path(self) -> &'static Path {
        Path::new(match self {
            Self::Questionnaire => QUESTIONNAIRE_FILE,
            Self::Stress => STRESS_PLATFORM_FILE,
            Self::Content => CONTENT_LOG_FILE,
        })
    }

    /// Column holding the group key in this export.
    #[must_use]
    pub fn group_column(self) -> &'static str {
        match self {
            Self::Questionnaire => "main_platform",
            Self::Stress => "Social_Media_Platform",
            Self::Content => "content_type",
        }
    }

    /// Default numeric column to analyze in this export.
    #[must_use]
    pub fn metric_column(self) -> &'static str {
        match self {
            Self::Questionnaire => "anxiety_score",
            Self::Stress => "Stress_Level(1-10)",
            Self::Content => "daily_minutes",
        }
    }
}

/// Loads a delimited survey export into records.
///
/// Every row becomes a column-name → raw-string map; nothing is parsed or
/// validated here. Missing and malformed values degrade downstream instead
/// of failing the load.
pub fn load_records(path: &Path) -> anyhow::Result<Vec<Record>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    let headers = reader
        .headers()
        .with_context(|| format!("failed to read header row of {}", path.display()))?
        .clone();

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.with_context(|| format!("failed to read row of {}", path.display()))?;
        records.push(Record::from_fields(
            headers.iter().zip(row.iter()).map(|(h, v)| (h, v)),
        ));
    }
    Ok(records)
}
