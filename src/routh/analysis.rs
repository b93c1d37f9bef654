//! Text-to-verdict analysis pipeline.

use serde::Serialize;
use tracing::info;

use crate::error::{Result, RouthError};
use crate::input::{parse_coefficients, CoefficientSequence};

use super::{classify, ArrayBuilder, RouthArray, StabilityVerdict, DEFAULT_EPSILON, DEFAULT_PRECISION};

/// Configuration for the analyzer.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Stand-in for zero pivots and zero entries.
    pub epsilon: f64,
    /// Decimal places for rendered array entries.
    pub precision: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
            precision: DEFAULT_PRECISION,
        }
    }
}

impl AnalysisConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the zero-pivot epsilon.
    ///
    /// Larger values make degenerate arrays easier to read but move the
    /// substituted entries further from the true zero.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Set the number of decimals used for display.
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Check that the configuration can be used.
    pub fn validate(&self) -> Result<()> {
        ArrayBuilder::with_epsilon(self.epsilon)?;
        if self.precision > 17 {
            return Err(RouthError::invalid_config(format!(
                "precision must be at most 17 decimals, got {}",
                self.precision
            )));
        }
        Ok(())
    }
}

/// Result of one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub coefficients: CoefficientSequence,
    pub array: RouthArray,
    pub verdict: StabilityVerdict,
}

impl Analysis {
    /// Human-readable verdict.
    pub fn message(&self) -> &'static str {
        if self.verdict.is_stable() {
            "The system is stable."
        } else {
            "The system is unstable."
        }
    }

    /// Whether the right-half-plane roots are worth asking the root service for.
    pub fn needs_root_delegation(&self) -> bool {
        !self.verdict.is_stable()
    }
}

/// Runs the parse, build and classify stages.
///
/// Holds no state between runs; the same input always gives the same
/// [`Analysis`].
#[derive(Debug, Clone)]
pub struct Analyzer {
    builder: ArrayBuilder,
    config: AnalysisConfig,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer {
    /// Create an analyzer with default configuration.
    pub fn new() -> Self {
        Self {
            builder: ArrayBuilder::new(),
            config: AnalysisConfig::default(),
        }
    }

    /// Create an analyzer with custom configuration.
    pub fn with_config(config: AnalysisConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            builder: ArrayBuilder::with_epsilon(config.epsilon)?,
            config,
        })
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Build and classify the array for already validated coefficients.
    pub fn analyze(&self, coefficients: CoefficientSequence) -> Analysis {
        let array = self.builder.build(&coefficients);
        let verdict = classify(&array);
        info!(
            degree = coefficients.degree(),
            rhs_poles = verdict.rhs_pole_count(),
            substitutions = array.substitutions().len(),
            "stability analysis complete"
        );
        Analysis {
            coefficients,
            array,
            verdict,
        }
    }

    /// Parse `raw` and analyze it.
    ///
    /// Fails with [`RouthError::NoValidCoefficients`] before any array is
    /// built when `raw` contains no numbers.
    pub fn analyze_text(&self, raw: &str) -> Result<Analysis> {
        let coefficients = parse_coefficients(raw)?;
        Ok(self.analyze(coefficients))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_stable_text() {
        let analysis = Analyzer::new().analyze_text("1, 3, 3, 1").unwrap();
        assert_eq!(analysis.verdict, StabilityVerdict::Stable);
        assert_eq!(analysis.message(), "The system is stable.");
        assert!(!analysis.needs_root_delegation());
    }

    #[test]
    fn test_analyze_unstable_text() {
        let analysis = Analyzer::new().analyze_text("1, -3, 2, -5").unwrap();
        assert_eq!(analysis.verdict, StabilityVerdict::Unstable { rhs_poles: 3 });
        assert_eq!(analysis.message(), "The system is unstable.");
        assert!(analysis.needs_root_delegation());
    }

    #[test]
    fn test_analyze_text_rejects_garbage() {
        let err = Analyzer::new().analyze_text("abc, , ").unwrap_err();
        assert!(matches!(err, RouthError::NoValidCoefficients));
    }

    #[test]
    fn test_config_validation() {
        assert!(Analyzer::with_config(AnalysisConfig::new().with_epsilon(0.0)).is_err());
        assert!(Analyzer::with_config(AnalysisConfig::new().with_precision(40)).is_err());

        let analyzer = Analyzer::with_config(AnalysisConfig::new().with_epsilon(1e-3).with_precision(2)).unwrap();
        assert_eq!(analyzer.config().precision, 2);
        let analysis = analyzer.analyze_text("1, 2, 3, 6, 5").unwrap();
        assert_eq!(analysis.array.rows()[2].values()[0], 1e-3);
    }
}
