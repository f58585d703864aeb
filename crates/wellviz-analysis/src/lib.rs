//! Domain layer for the wellviz survey charts.
//!
//! This crate turns raw survey rows into the derived structures the charts
//! consume. The pipeline is the same for every chart:
//!
//! ```text
//! Records (column -> raw value)
//!     ↓
//! Normalize group keys, drop invalid rows   (grouping, platform)
//!     ↓
//! Filter undersized groups (min_len)
//!     ↓
//! Compute derived statistics               (wellviz-stats)
//!     ↓
//! ChartModel consumed by the renderer      (chart)
//! ```
//!
//! # Modules
//!
//! - [`record`]: Survey rows as field maps with graceful-degradation access
//! - [`platform`]: Canonical platform-name normalization
//! - [`grouping`]: Grouping records into per-key numeric samples
//! - [`risk`]: Polarity-aware weighted risk scoring and risk bands
//! - [`profile`]: Mapping questionnaire rows onto the 0-100 feature scale
//! - [`chart`]: Parameterized chart models selected by a mode flag
//!
//! # Examples
//!
//! ## Grouping survey rows by platform
//!
//! ```
//! use wellviz_analysis::{grouping::group_by_platform, record::Record};
//!
//! let rows = vec![
//!     Record::from_fields([("main_platform", "twitter"), ("anxiety_score", "5")]),
//!     Record::from_fields([("main_platform", "X(Twitter)"), ("anxiety_score", "3")]),
//!     Record::from_fields([("main_platform", "TikTok"), ("anxiety_score", "abc")]),
//! ];
//! let grouped = group_by_platform(&rows, "main_platform", "anxiety_score");
//! assert_eq!(grouped.get("X"), Some(&[5.0, 3.0][..]));
//! assert_eq!(grouped.get("TikTok"), None); // invalid value dropped
//! ```
//!
//! ## Scoring a feature profile
//!
//! ```
//! use wellviz_analysis::risk::{FeatureProfile, RiskBand};
//!
//! let profile = FeatureProfile::neutral();
//! let risk = profile.risk_score();
//! assert_eq!(risk, 50);
//! assert_eq!(RiskBand::from_score(risk), RiskBand::Elevated);
//! ```

pub mod chart;
pub mod grouping;
pub mod platform;
pub mod profile;
pub mod record;
pub mod risk;
