//! Coefficient input for the stability analyzer.
//!
//! Characteristic polynomials are entered as a comma-separated list of real
//! coefficients in descending order of degree:
//!
//! ```text
//! input       = [ token { ',' token } ]
//! token       = { whitespace } [ number ] { whitespace }
//! number      = any text accepted by f64::from_str that is finite
//! ```
//!
//! Tokens that are not numbers are dropped without error, so `"1, x, 2"`
//! describes the polynomial `s + 2`. Only an input with no usable token at
//! all is rejected.
//!
//! # Example
//!
//! ```
//! use routh_core::input::parse_coefficients;
//!
//! let coefficients = parse_coefficients("1, 3, 3, 1").unwrap();
//! assert_eq!(coefficients.degree(), 3);
//! ```

mod coefficients;
mod parser;

pub use coefficients::CoefficientSequence;
pub use parser::parse_coefficients;

/// Parse coefficients read from any reader (stdin for the CLI).
#[cfg(feature = "cli")]
pub fn read_coefficients(reader: &mut impl std::io::Read) -> crate::error::Result<CoefficientSequence> {
    let mut content = String::new();
    reader
        .read_to_string(&mut content)
        .map_err(|e| crate::error::RouthError::InputReadError { source: e })?;
    // One polynomial per invocation; treat line breaks like separators.
    parse_coefficients(&content.replace('\n', ","))
}
