//! # Routh Core
//!
//! Routh-Hurwitz stability analysis for linear systems.
//!
//! This library provides:
//! - Parsing of characteristic polynomial coefficients from text
//! - Routh array construction with an epsilon policy for zero pivots
//! - Stability classification by counting first-column sign changes
//! - Pluggable, time-bounded delegation of right-half-plane root lookup
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`input`] - Coefficient parsing and validation
//! - [`routh`] - Array builder, classifier and the analysis pipeline
//! - [`roots`] - External root-finder boundary
//! - [`report`] - Table, summary and JSON rendering
//! - [`telemetry`] - Log subscriber setup (CLI only)
//!
//! ## Usage
//!
//! ### Native CLI
//!
//! ```bash
//! routh "1, -3, 2, -5" --root-service http://localhost:5000
//! echo "1, 3, 3, 1" | routh --json
//! ```
//!
//! ### Library
//!
//! ```
//! use routh_core::{Analyzer, StabilityVerdict};
//!
//! let analysis = Analyzer::new().analyze_text("1, 3, 3, 1").unwrap();
//! assert_eq!(analysis.verdict, StabilityVerdict::Stable);
//! ```
//!
//! ### WASM
//!
//! ```javascript
//! import { WasmRouthAnalyzer } from 'routh_core';
//!
//! const report = JSON.parse(new WasmRouthAnalyzer().analyze("1, -3, 2, -5"));
//! ```
//!
//! ## Stability Criterion
//!
//! For a polynomial of degree n the Routh array has n + 1 rows. The system
//! is stable when every entry of the first column has the same sign; each
//! sign change marks one root in the right half of the complex plane.

pub mod error;
pub mod input;
pub mod report;
pub mod roots;
pub mod routh;

#[cfg(feature = "cli")]
pub mod telemetry;

// Re-export main types for convenience
pub use error::{Result, RouthError};
pub use input::{parse_coefficients, CoefficientSequence};
pub use routh::{build_routh_array, classify, Analysis, AnalysisConfig, Analyzer, RouthArray, StabilityVerdict};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::WasmRouthAnalyzer;
