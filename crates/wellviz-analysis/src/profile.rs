//! Mapping questionnaire rows onto the 0-100 feature scale.
//!
//! The cleaned questionnaire export stores each indicator on its own scale:
//! binary risk flags (`risk_sleep`, `risk_guilt`, ...), a Oui/Non healthiness
//! verdict, daily screen time in hours, and 1-7 Likert scores. This module
//! converts one row into a [`FeatureProfile`], inverting the flags that
//! encode the absence of a quality and defaulting every missing or malformed
//! field to a neutral value.

use crate::{
    record::Record,
    risk::{Feature, FeatureProfile},
};

/// Daily screen time (hours) that saturates the screen-time feature at 100.
const SCREEN_TIME_CAP_HOURS: f64 = 8.0;

/// Top of the Likert scale used by the anxiety and self-control scores.
const LIKERT_MAX: f64 = 7.0;

/// Converts one questionnaire row into a feature profile.
///
/// Field by field:
///
/// - `risk_sleep`, `risk_productivity`, `risk_notification` are 0/1 flags for
///   the *absence* of the quality, so they are inverted onto 0-100.
/// - `risk_guilt` is kept as-is (guilt is a harmful-when-high feature).
/// - `usage_is_healthy` is the Oui/Non self-assessment: Oui → 90, Non → 20,
///   anything else → 50.
/// - `daily_time_numeric` is hours per day, scaled against an 8-hour cap.
/// - `anxiety_score` and `self_control_score` are 1-7 Likert values scaled
///   to 0-100.
///
/// Missing or malformed numeric fields fall back to their scale midpoints;
/// every resulting score is rounded to a whole number.
///
/// # Examples
///
/// ```
/// use wellviz_analysis::{profile::from_questionnaire_row, record::Record, risk::Feature};
///
/// let row = Record::from_fields([
///     ("risk_sleep", "0"),
///     ("usage_is_healthy", "Oui"),
///     ("daily_time_numeric", "4"),
///     ("anxiety_score", "7"),
/// ]);
/// let profile = from_questionnaire_row(&row);
/// assert_eq!(profile.get(Feature::Sleep), 100.0);
/// assert_eq!(profile.get(Feature::Health), 90.0);
/// assert_eq!(profile.get(Feature::ScreenTime), 50.0);
/// assert_eq!(profile.get(Feature::Anxiety), 100.0);
/// ```
#[must_use]
pub fn from_questionnaire_row(record: &Record) -> FeatureProfile {
    let sleep = (1.0 - record.number_or("risk_sleep", 0.5)) * 100.0;
    let guilt = record.number_or("risk_guilt", 0.0) * 100.0;
    let productivity = (1.0 - record.number_or("risk_productivity", 0.5)) * 100.0;
    // No direct social column; the notification-pressure flag is the proxy.
    let social = (1.0 - record.number_or("risk_notification", 0.5)) * 100.0;

    let health = match record.text("usage_is_healthy") {
        Some("Oui") => 90.0,
        Some("Non") => 20.0,
        _ => FeatureProfile::NEUTRAL_SCORE,
    };

    let hours = record.number_or("daily_time_numeric", 0.0);
    let screen_time = (hours / SCREEN_TIME_CAP_HOURS * 100.0).min(100.0);

    let anxiety = record.number_or("anxiety_score", 1.0) / LIKERT_MAX * 100.0;
    let self_control = record.number_or("self_control_score", 3.0) / LIKERT_MAX * 100.0;

    let mut profile = FeatureProfile::neutral();
    for (feature, raw) in [
        (Feature::Sleep, sleep),
        (Feature::Guilt, guilt),
        (Feature::Productivity, productivity),
        (Feature::Social, social),
        (Feature::Health, health),
        (Feature::ScreenTime, screen_time),
        (Feature::Anxiety, anxiety),
        (Feature::SelfControl, self_control),
    ] {
        let score = if raw.is_finite() {
            raw.round()
        } else {
            FeatureProfile::NEUTRAL_SCORE
        };
        profile.set(feature, score);
    }
    profile
}
