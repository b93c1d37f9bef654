//! Validated coefficient sequences.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{Result, RouthError};

/// Coefficients of a characteristic polynomial, highest degree first.
///
/// Always holds at least one coefficient and every coefficient is finite.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CoefficientSequence(Vec<f64>);

impl CoefficientSequence {
    /// Create a sequence from raw coefficients.
    ///
    /// Fails with [`RouthError::NoValidCoefficients`] for an empty vector and
    /// [`RouthError::NonFiniteCoefficient`] for NaN or infinite entries.
    pub fn new(coefficients: Vec<f64>) -> Result<Self> {
        if coefficients.is_empty() {
            return Err(RouthError::NoValidCoefficients);
        }

        if let Some((index, &value)) = coefficients
            .iter()
            .enumerate()
            .find(|(_, c)| !c.is_finite())
        {
            return Err(RouthError::NonFiniteCoefficient { index, value });
        }

        Ok(Self(coefficients))
    }

    /// Polynomial degree (number of coefficients minus one).
    pub fn degree(&self) -> usize {
        self.0.len() - 1
    }

    /// Number of coefficients.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a constructed sequence.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.0
    }

    /// Coefficients at even positions (0, 2, 4, ...).
    pub fn even(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().copied().step_by(2)
    }

    /// Coefficients at odd positions (1, 3, 5, ...).
    pub fn odd(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().copied().skip(1).step_by(2)
    }
}

impl FromStr for CoefficientSequence {
    type Err = RouthError;

    fn from_str(s: &str) -> Result<Self> {
        super::parse_coefficients(s)
    }
}

impl fmt::Display for CoefficientSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degree_and_parity_split() {
        let coeffs = CoefficientSequence::new(vec![1.0, 2.0, 3.0, 6.0, 5.0]).unwrap();
        assert_eq!(coeffs.degree(), 4);
        assert_eq!(coeffs.even().collect::<Vec<_>>(), vec![1.0, 3.0, 5.0]);
        assert_eq!(coeffs.odd().collect::<Vec<_>>(), vec![2.0, 6.0]);
    }

    #[test]
    fn test_rejects_empty() {
        assert!(matches!(
            CoefficientSequence::new(vec![]),
            Err(RouthError::NoValidCoefficients)
        ));
    }

    #[test]
    fn test_rejects_non_finite() {
        let err = CoefficientSequence::new(vec![1.0, f64::INFINITY]).unwrap_err();
        assert!(matches!(err, RouthError::NonFiniteCoefficient { index: 1, .. }));
    }

    #[test]
    fn test_display() {
        let coeffs = CoefficientSequence::new(vec![1.0, -3.0, 2.5]).unwrap();
        assert_eq!(coeffs.to_string(), "1, -3, 2.5");
    }
}
