//! Parser for comma-separated coefficient lists.

use tracing::trace;

use crate::error::{Result, RouthError};

use super::CoefficientSequence;

/// Longest prefix of `token` that reads as a decimal number.
///
/// Accepts an optional sign, digits with an optional fraction, and an
/// exponent only when it has digits: `"3abc"` -> `"3"`, `"1e"` -> `"1"`,
/// `"-.5x"` -> `"-.5"`. Returns `None` when no digit starts the token.
fn numeric_prefix(token: &str) -> Option<&str> {
    let bytes = token.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    let int_end = digits_from(end);
    let mut mantissa_digits = int_end - end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        mantissa_digits += frac_end - (end + 1);
        if mantissa_digits > 0 {
            end = frac_end;
        }
    }

    if mantissa_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }

    Some(&token[..end])
}

/// Parse one token, reading its leading number and ignoring the rest.
///
/// Spelled-out infinities and NaN are dropped.
fn parse_token(token: &str) -> Option<f64> {
    let value = match token.parse::<f64>() {
        Ok(value) => value,
        Err(_) => numeric_prefix(token)?.parse::<f64>().ok()?,
    };
    value.is_finite().then_some(value)
}

/// Parse a comma-separated coefficient list.
///
/// Each token is trimmed and read up to the end of its leading number, so
/// `"3abc"` counts as 3. Tokens without a leading number, or that read as
/// NaN or an infinity, are skipped. Fails with
/// [`RouthError::NoValidCoefficients`] when nothing usable remains.
pub fn parse_coefficients(raw: &str) -> Result<CoefficientSequence> {
    let coefficients: Vec<f64> = raw
        .split(',')
        .map(str::trim)
        .filter_map(|token| match parse_token(token) {
            Some(value) => Some(value),
            None => {
                if !token.is_empty() {
                    trace!(token, "skipping non-numeric coefficient token");
                }
                None
            }
        })
        .collect();

    if coefficients.is_empty() {
        return Err(RouthError::NoValidCoefficients);
    }

    CoefficientSequence::new(coefficients)
}
