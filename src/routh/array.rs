//! Routh array construction.

use serde::Serialize;
use tracing::{debug, trace};

use crate::error::{Result, RouthError};
use crate::input::CoefficientSequence;

use super::DEFAULT_EPSILON;

/// One row of the Routh array.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RouthRow(Vec<f64>);

impl RouthRow {
    pub fn new(values: Vec<f64>) -> Self {
        Self(values)
    }

    /// First-column entry, if the row has any entries.
    pub fn leading(&self) -> Option<f64> {
        self.0.first().copied()
    }

    /// Entry at `index`, reading past the end as zero.
    pub fn get_or_zero(&self, index: usize) -> f64 {
        self.0.get(index).copied().unwrap_or(0.0)
    }

    pub fn values(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Which part of the recursion needed the epsilon stand-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubstitutionKind {
    /// The row's leading entry was zero and epsilon was used as divisor
    Pivot,
    /// The computed entry was exactly zero, or NaN from overflowing
    /// products, and epsilon was stored
    Entry,
}

/// Record of one epsilon substitution made while building an array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EpsilonSubstitution {
    /// Row index (0-based) of the affected row
    pub row: usize,
    /// Column index (0-based) of the affected entry
    pub column: usize,
    pub kind: SubstitutionKind,
}

/// A complete Routh array.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouthArray {
    rows: Vec<RouthRow>,
    substitutions: Vec<EpsilonSubstitution>,
    epsilon: f64,
}

impl RouthArray {
    /// Wrap rows that were computed elsewhere.
    ///
    /// Empty rows are dropped so that every stored row has a leading entry.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Self {
        Self {
            rows: rows
                .into_iter()
                .filter(|r| !r.is_empty())
                .map(RouthRow::new)
                .collect(),
            substitutions: Vec::new(),
            epsilon: DEFAULT_EPSILON,
        }
    }

    pub fn rows(&self) -> &[RouthRow] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&RouthRow> {
        self.rows.get(index)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Leading entries of every row, top to bottom.
    pub fn first_column(&self) -> Vec<f64> {
        self.rows.iter().filter_map(RouthRow::leading).collect()
    }

    /// Epsilon substitutions performed during construction.
    pub fn substitutions(&self) -> &[EpsilonSubstitution] {
        &self.substitutions
    }

    /// Whether any zero pivot or zero entry was replaced.
    pub fn is_degenerate(&self) -> bool {
        !self.substitutions.is_empty()
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Rows as plain vectors, for callers that do not need the wrapper.
    pub fn to_vecs(&self) -> Vec<Vec<f64>> {
        self.rows.iter().map(|r| r.values().to_vec()).collect()
    }
}

/// Builds Routh arrays with a configurable epsilon.
#[derive(Debug, Clone)]
pub struct ArrayBuilder {
    epsilon: f64,
}

impl Default for ArrayBuilder {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
        }
    }
}

impl ArrayBuilder {
    /// Create a builder using [`DEFAULT_EPSILON`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different stand-in for zero pivots and zero entries.
    ///
    /// Fails unless `epsilon` is finite and strictly positive.
    pub fn with_epsilon(epsilon: f64) -> Result<Self> {
        if !(epsilon.is_finite() && epsilon > 0.0) {
            return Err(RouthError::invalid_config(format!(
                "epsilon must be finite and positive, got {}",
                epsilon
            )));
        }
        Ok(Self { epsilon })
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Build the Routh array for `coefficients`.
    ///
    /// Always terminates with `degree + 1` rows; never produces NaN or
    /// infinite entries.
    pub fn build(&self, coefficients: &CoefficientSequence) -> RouthArray {
        let mut rows = vec![RouthRow::new(coefficients.even().collect())];
        let odd: Vec<f64> = coefficients.odd().collect();
        if !odd.is_empty() {
            rows.push(RouthRow::new(odd));
        }

        let mut substitutions = Vec::new();

        while rows.len() >= 2 {
            let r = rows.len();
            let prev = &rows[r - 2];
            let cur = &rows[r - 1];

            let width = prev.len().saturating_sub(1);
            if width == 0 {
                break;
            }

            let a = prev.get_or_zero(0);
            let b = cur.get_or_zero(0);
            // Only the divisor is replaced; the determinant keeps the literal zero.
            let divisor = if b == 0.0 {
                debug!(row = r - 1, epsilon = self.epsilon, "zero pivot, dividing by epsilon");
                substitutions.push(EpsilonSubstitution {
                    row: r - 1,
                    column: 0,
                    kind: SubstitutionKind::Pivot,
                });
                self.epsilon
            } else {
                b
            };

            let mut next = Vec::with_capacity(width);
            for i in 0..width {
                let c = prev.get_or_zero(i + 1);
                let d = cur.get_or_zero(i + 1);
                let mut value = self.saturate((b * c - a * d) / divisor);

                if value == 0.0 || value.is_nan() {
                    debug!(row = r, column = i, epsilon = self.epsilon, "zero entry, substituting epsilon");
                    substitutions.push(EpsilonSubstitution {
                        row: r,
                        column: i,
                        kind: SubstitutionKind::Entry,
                    });
                    value = self.epsilon;
                }

                next.push(value);
            }

            trace!(row = r, values = ?next, "computed Routh row");
            rows.push(RouthRow::new(next));
        }

        RouthArray {
            rows,
            substitutions,
            epsilon: self.epsilon,
        }
    }

    /// Clamp infinities to the largest finite value of the same sign.
    ///
    /// NaN passes through and is replaced by epsilon by the caller.
    fn saturate(&self, value: f64) -> f64 {
        if value.is_infinite() {
            f64::MAX.copysign(value)
        } else {
            value
        }
    }
}

/// Build a Routh array with the default epsilon.
pub fn build_routh_array(coefficients: &CoefficientSequence) -> RouthArray {
    ArrayBuilder::new().build(coefficients)
}
