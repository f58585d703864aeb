//! Statistical building blocks for the wellviz survey charts.
//!
//! This crate provides the numeric layer shared by every chart:
//!
//! - **Quantiles**: linear-interpolation (R-7) quantile computation
//! - **Boxplot summaries**: quartiles, IQR fences, whiskers, and outliers
//! - **Density curves**: Epanechnikov kernel density estimation over a grid
//!
//! # Modules
//!
//! - [`quantile`]: Quantile computation over sorted samples
//! - [`boxplot`]: Five-number boxplot summaries with outlier fencing
//! - [`density`]: Kernel density estimation for violin-style charts
//!
//! # Examples
//!
//! ## Summarizing a sample for a boxplot
//!
//! ```
//! use wellviz_stats::boxplot::BoxplotSummary;
//!
//! let values = [1.0, 2.0, 3.0, 4.0, 100.0];
//! let summary = BoxplotSummary::new(&values);
//! assert_eq!(summary.median, 3.0);
//! assert_eq!(summary.outliers, vec![100.0]);
//! ```
//!
//! ## Estimating a density curve
//!
//! ```
//! use wellviz_stats::density::{DensityCurve, default_bandwidth, evaluation_grid};
//!
//! let values = [2.0, 3.0, 3.0, 4.0];
//! let grid = evaluation_grid(0.0, 6.0, 30);
//! let curve = DensityCurve::estimate(&values, default_bandwidth(&values), &grid);
//! assert!(curve.points().iter().all(|&(_, d)| d >= 0.0));
//! ```

pub mod boxplot;
pub mod density;
pub mod quantile;
