//! Text and JSON rendering of analysis results.
//!
//! Rendering is kept out of the analysis types so the CLI and the WASM
//! bindings can share it.

use serde::Serialize;

use crate::error::Result;
use crate::roots::{RhsRoot, RootOutcome};
use crate::routh::{Analysis, EpsilonSubstitution, RouthArray};

/// Render the Routh array as an aligned table.
///
/// ```text
/// Row 1  s^3   1.0000   3.0000
/// Row 2  s^2   3.0000   1.0000
/// ```
pub fn render_table(array: &RouthArray, precision: usize) -> String {
    let formatted = format_rows(array, precision);
    let width = formatted
        .iter()
        .flatten()
        .map(String::len)
        .max()
        .unwrap_or(0);
    let order = array.len().saturating_sub(1);
    let label_width = format!("s^{}", order).len();

    let mut out = String::new();
    for (index, row) in formatted.iter().enumerate() {
        let power = format!("s^{}", order - index);
        out.push_str(&format!("Row {:<3} {:<lw$}", index + 1, power, lw = label_width));
        for value in row {
            out.push_str(&format!("  {:>w$}", value, w = width));
        }
        out.push('\n');
    }
    out
}

/// Every entry of the array formatted with `precision` decimals.
pub fn format_rows(array: &RouthArray, precision: usize) -> Vec<Vec<String>> {
    array
        .rows()
        .iter()
        .map(|row| {
            row.values()
                .iter()
                .map(|v| format!("{:.*}", precision, v))
                .collect()
        })
        .collect()
}

/// Verdict message plus the pole count when unstable.
pub fn render_summary(analysis: &Analysis) -> String {
    let mut out = analysis.message().to_string();
    if !analysis.verdict.is_stable() {
        out.push_str(&format!(
            "\nNumber of poles in the Right-Hand Side of the plane: {}",
            analysis.verdict.rhs_pole_count()
        ));
    }
    if analysis.array.is_degenerate() {
        out.push_str(&format!(
            "\nNote: {} zero entr{} replaced by epsilon = {:e}; the verdict is approximate.",
            analysis.array.substitutions().len(),
            if analysis.array.substitutions().len() == 1 { "y" } else { "ies" },
            analysis.array.epsilon()
        ));
    }
    out
}

/// One line describing a root lookup result.
pub fn render_roots(outcome: &RootOutcome) -> String {
    match outcome {
        RootOutcome::Located(roots) => format!("RHS Roots: {}", join_roots(roots)),
        RootOutcome::Unavailable(e) => format!("RHS roots unavailable: {}", e),
        RootOutcome::Superseded => "RHS root request superseded".to_string(),
    }
}

fn join_roots(roots: &[RhsRoot]) -> String {
    roots.iter().map(RhsRoot::display).collect::<Vec<_>>().join(", ")
}

/// Status of the optional root lookup in a report.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RootsReport {
    NotRequested,
    Located { roots: Vec<String> },
    Unavailable { reason: String },
    Superseded,
}

impl From<&RootOutcome> for RootsReport {
    fn from(outcome: &RootOutcome) -> Self {
        match outcome {
            RootOutcome::Located(roots) => RootsReport::Located {
                roots: roots.iter().map(RhsRoot::display).collect(),
            },
            RootOutcome::Unavailable(e) => RootsReport::Unavailable { reason: e.to_string() },
            RootOutcome::Superseded => RootsReport::Superseded,
        }
    }
}

/// Serializable summary of an analysis run.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub coefficients: Vec<f64>,
    pub degree: usize,
    pub rows: Vec<Vec<f64>>,
    pub formatted_rows: Vec<Vec<String>>,
    pub stable: bool,
    pub rhs_pole_count: usize,
    pub message: String,
    pub epsilon: f64,
    pub substitutions: Vec<EpsilonSubstitution>,
    pub roots: RootsReport,
}

impl AnalysisReport {
    pub fn new(analysis: &Analysis, precision: usize) -> Self {
        Self {
            coefficients: analysis.coefficients.as_slice().to_vec(),
            degree: analysis.coefficients.degree(),
            rows: analysis.array.to_vecs(),
            formatted_rows: format_rows(&analysis.array, precision),
            stable: analysis.verdict.is_stable(),
            rhs_pole_count: analysis.verdict.rhs_pole_count(),
            message: analysis.message().to_string(),
            epsilon: analysis.array.epsilon(),
            substitutions: analysis.array.substitutions().to_vec(),
            roots: RootsReport::NotRequested,
        }
    }

    /// Attach the result of a root lookup.
    pub fn with_roots(mut self, outcome: &RootOutcome) -> Self {
        self.roots = outcome.into();
        self
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
