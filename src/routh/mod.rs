//! Routh-Hurwitz array construction and stability classification.
//!
//! ## Routh array
//!
//! For a characteristic polynomial `a0 s^n + a1 s^(n-1) + ... + an` the
//! first two rows hold the even- and odd-indexed coefficients:
//!
//! ```text
//! s^n     | a0  a2  a4 ...
//! s^(n-1) | a1  a3  a5 ...
//! s^(n-2) | b1  b2  ...
//! ```
//!
//! and every following entry is a 2x2 determinant of the two rows above,
//! normalized by the leading entry of the row directly above:
//!
//! ```text
//! b_i = (a1 * a(2i) - a0 * a(2i+1)) / a1
//! ```
//!
//! The number of sign changes down the first column equals the number of
//! roots with positive real part.
//!
//! ## Zero pivots
//!
//! A zero in the first column would divide by zero. The builder divides by a
//! small positive `epsilon` instead and stores `epsilon` in place of any
//! entry that evaluates to exactly zero. This is the classical epsilon
//! heuristic, not the auxiliary-polynomial method, and can misclassify
//! marginally stable systems whose first-column zero is exact.

mod analysis;
mod array;
mod classify;

pub use analysis::{Analysis, AnalysisConfig, Analyzer};
pub use array::{build_routh_array, ArrayBuilder, EpsilonSubstitution, RouthArray, RouthRow, SubstitutionKind};
pub use classify::{classify, sign_change_rows, Sign, StabilityVerdict};

/// Stand-in for a zero pivot or a zero entry in the Routh array.
pub const DEFAULT_EPSILON: f64 = 1e-6;

/// Decimal places used when rendering array entries.
pub const DEFAULT_PRECISION: usize = 4;
