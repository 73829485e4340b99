//! Chart data written as JSON for an external plotting tool.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use nissan_drift::{BadYearFraction, BadYearPolicy, YearOffset};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Scatter,
    Line,
}

/// A titled series of (x, y) points plus horizontal reference lines.
#[derive(Debug, Serialize)]
pub struct Chart {
    pub title: String,
    pub kind: ChartKind,
    pub x_label: String,
    pub y_label: String,
    pub reference_lines: Vec<f64>,
    pub points: Vec<[f64; 2]>,
}

impl Chart {
    /// Scatter of drift per year with dashed lines at the threshold.
    pub fn drift_history(series: &[YearOffset], threshold: i64, policy: BadYearPolicy) -> Self {
        let t = threshold as f64;
        let reference_lines = match policy {
            BadYearPolicy::OneSided => vec![t],
            BadYearPolicy::TwoSided => vec![-t, t],
        };
        Self {
            title: "Days between the equinox and Alef Nissan".to_string(),
            kind: ChartKind::Scatter,
            x_label: "Gregorian year".to_string(),
            y_label: "days".to_string(),
            reference_lines,
            points: series
                .iter()
                .map(|o| [f64::from(o.year), o.drift_days as f64])
                .collect(),
        }
    }

    /// Line plot of the bad-year fraction per window.
    pub fn bad_year_fractions(windows: &[BadYearFraction], window_size: usize) -> Self {
        Self {
            title: format!(
                "Fraction of years in which Passover was not in the spring month, \
                 per {window_size}-year window"
            ),
            kind: ChartKind::Line,
            x_label: "window start".to_string(),
            y_label: "fraction of bad years".to_string(),
            reference_lines: Vec::new(),
            points: windows
                .iter()
                .map(|w| [f64::from(w.window_start), w.fraction])
                .collect(),
        }
    }

    /// Writes the chart as pretty-printed JSON.
    pub fn write(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize chart")?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write chart: {}", path.display()))?;
        info!(path = %path.display(), n_points = self.points.len(), "chart written");
        Ok(())
    }
}
