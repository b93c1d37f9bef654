//! Stability classification from the first column of a Routh array.

use serde::Serialize;
use tracing::debug;

use super::RouthArray;

/// Sign of a first-column entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Negative,
    Zero,
    Positive,
}

impl Sign {
    /// Conventional sign of `x`. NaN carries no sign information.
    pub fn of(x: f64) -> Self {
        if x > 0.0 {
            Sign::Positive
        } else if x < 0.0 {
            Sign::Negative
        } else {
            Sign::Zero
        }
    }
}

/// Outcome of the Routh-Hurwitz test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum StabilityVerdict {
    /// No roots in the right half plane
    Stable,
    /// `rhs_poles` roots in the right half plane (at least one)
    Unstable { rhs_poles: usize },
}

impl StabilityVerdict {
    fn from_count(rhs_poles: usize) -> Self {
        if rhs_poles == 0 {
            StabilityVerdict::Stable
        } else {
            StabilityVerdict::Unstable { rhs_poles }
        }
    }

    pub fn is_stable(&self) -> bool {
        matches!(self, StabilityVerdict::Stable)
    }

    /// Number of right-half-plane poles; zero when stable.
    pub fn rhs_pole_count(&self) -> usize {
        match self {
            StabilityVerdict::Stable => 0,
            StabilityVerdict::Unstable { rhs_poles } => *rhs_poles,
        }
    }
}

/// Row indices at which the first column changes sign.
///
/// A row whose leading entry is zero is never counted as a change, but it
/// still becomes the reference for the next row.
pub fn sign_change_rows(array: &RouthArray) -> Vec<usize> {
    let mut changes = Vec::new();
    let mut rows = array.rows().iter().enumerate();

    let mut previous = match rows.next().and_then(|(_, row)| row.leading()) {
        Some(first) => Sign::of(first),
        None => return changes,
    };

    for (index, row) in rows {
        let Some(leading) = row.leading() else {
            continue;
        };
        let current = Sign::of(leading);
        if current != previous && current != Sign::Zero {
            changes.push(index);
        }
        previous = current;
    }

    changes
}

/// Classify a Routh array as stable or unstable.
pub fn classify(array: &RouthArray) -> StabilityVerdict {
    let changes = sign_change_rows(array);
    let verdict = StabilityVerdict::from_count(changes.len());
    debug!(?verdict, sign_changes = ?changes, "classified Routh array");
    verdict
}
