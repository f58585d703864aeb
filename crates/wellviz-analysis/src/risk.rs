//! Polarity-aware weighted risk scoring.
//!
//! The questionnaire radar tracks eight lifestyle features on a 0-100 scale.
//! For some of them a high score is beneficial (sleep quality, productivity),
//! for others it is harmful (guilt, screen time, anxiety). The risk score
//! folds the eight scores into a single 0-100 integer by crediting each
//! feature's "health points" according to its polarity and inverting the
//! mean.
//!
//! Polarity is bound to the named [`Feature`], not to a vector position, so
//! reordering feature inputs cannot silently flip a feature's contribution.

use serde::{Deserialize, Serialize};

/// One of the eight radar features, in canonical display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Feature {
    Sleep,
    Guilt,
    Productivity,
    Social,
    Health,
    ScreenTime,
    Anxiety,
    SelfControl,
}

/// Whether a high feature score helps or harms the respondent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    HigherIsBetter,
    HigherIsWorse,
}

impl Feature {
    /// All features, in canonical display order (the radar axis order).
    pub const ALL: [Self; 8] = [
        Self::Sleep,
        Self::Guilt,
        Self::Productivity,
        Self::Social,
        Self::Health,
        Self::ScreenTime,
        Self::Anxiety,
        Self::SelfControl,
    ];

    /// The polarity of this feature.
    ///
    /// Guilt, screen time, and anxiety are the harmful-when-high features;
    /// everything else is beneficial when high.
    #[must_use]
    pub fn polarity(self) -> Polarity {
        match self {
            Self::Guilt | Self::ScreenTime | Self::Anxiety => Polarity::HigherIsWorse,
            Self::Sleep | Self::Productivity | Self::Social | Self::Health | Self::SelfControl => {
                Polarity::HigherIsBetter
            }
        }
    }

    /// Axis label shown on the radar chart.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Sleep => "Sommeil",
            Self::Guilt => "Culpabilité",
            Self::Productivity => "Productivité",
            Self::Social => "Social",
            Self::Health => "Santé",
            Self::ScreenTime => "Temps écran",
            Self::Anxiety => "Anxiété",
            Self::SelfControl => "Contrôle",
        }
    }
}

/// The eight feature scores of one respondent, each on the 0-100 scale.
///
/// Scores outside `[0, 100]` are a caller error and are deliberately not
/// clamped; [`FeatureProfile::risk_score`] only guarantees a 0-100 result
/// for in-range inputs.
///
/// # Examples
///
/// ```
/// use wellviz_analysis::risk::{Feature, FeatureProfile};
///
/// let mut profile = FeatureProfile::neutral();
/// profile.set(Feature::Anxiety, 90.0);
/// assert_eq!(profile.get(Feature::Anxiety), 90.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureProfile {
    scores: [f64; 8],
}

impl FeatureProfile {
    /// Midpoint score used when nothing is known about a feature.
    pub const NEUTRAL_SCORE: f64 = 50.0;

    /// A profile with every feature at the neutral midpoint.
    #[must_use]
    pub fn neutral() -> Self {
        Self {
            scores: [Self::NEUTRAL_SCORE; 8],
        }
    }

    /// Builds a profile from scores in [`Feature::ALL`] order.
    #[must_use]
    pub fn from_scores(scores: [f64; 8]) -> Self {
        Self { scores }
    }

    /// The score of one feature.
    #[must_use]
    pub fn get(&self, feature: Feature) -> f64 {
        self.scores[feature as usize]
    }

    /// Sets the score of one feature.
    pub fn set(&mut self, feature: Feature, score: f64) {
        self.scores[feature as usize] = score;
    }

    /// Iterates over `(feature, score)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Feature, f64)> + '_ {
        Feature::ALL.iter().map(|&f| (f, self.get(f)))
    }

    /// The global risk score, an integer in `0..=100` for in-range inputs.
    ///
    /// Each feature contributes its score as "health points" when higher is
    /// better, and `100 - score` when higher is worse; the risk is the
    /// rounded inverse of the mean: `round(100 - mean(contributions))`.
    ///
    /// # Examples
    ///
    /// ```
    /// use wellviz_analysis::risk::FeatureProfile;
    ///
    /// // Everything at the worst end for beneficial features, best end for
    /// // harmful ones: contributions [0,100,0,0,0,100,100,0], mean 37.5.
    /// let profile = FeatureProfile::from_scores([0.0; 8]);
    /// assert_eq!(profile.risk_score(), 63);
    /// ```
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        clippy::cast_sign_loss
    )]
    #[must_use]
    pub fn risk_score(&self) -> u8 {
        let health_points: f64 = self
            .iter()
            .map(|(feature, score)| match feature.polarity() {
                Polarity::HigherIsBetter => score,
                Polarity::HigherIsWorse => 100.0 - score,
            })
            .sum();
        let average_health = health_points / Feature::ALL.len() as f64;
        (100.0 - average_health).round() as u8
    }
}

impl<'a> IntoIterator for &'a FeatureProfile {
    type Item = (Feature, f64);
    type IntoIter = Box<dyn Iterator<Item = (Feature, f64)> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

/// Risk band consumed by the gauge rendering.
///
/// Boundaries are inclusive-low / exclusive-high, with the final band
/// open-ended.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum RiskBand {
    /// Risk below 40.
    #[display("low")]
    Low,
    /// Risk in `40..50`.
    #[display("moderate")]
    Moderate,
    /// Risk in `50..60`.
    #[display("elevated")]
    Elevated,
    /// Risk of 60 and above.
    #[display("high")]
    High,
}

impl RiskBand {
    /// Classifies a risk score into its band.
    ///
    /// # Examples
    ///
    /// ```
    /// use wellviz_analysis::risk::RiskBand;
    ///
    /// assert_eq!(RiskBand::from_score(39), RiskBand::Low);
    /// assert_eq!(RiskBand::from_score(40), RiskBand::Moderate);
    /// assert_eq!(RiskBand::from_score(77), RiskBand::High);
    /// ```
    #[must_use]
    pub fn from_score(risk: u8) -> Self {
        match risk {
            0..40 => Self::Low,
            40..50 => Self::Moderate,
            50..60 => Self::Elevated,
            _ => Self::High,
        }
    }
}
