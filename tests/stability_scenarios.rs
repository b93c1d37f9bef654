//! End-to-end stability scenarios: text in, array and verdict out.

use approx::assert_relative_eq;
use routh_core::routh::{SubstitutionKind, DEFAULT_EPSILON};
use routh_core::{build_routh_array, classify, parse_coefficients, Analyzer, RouthError, StabilityVerdict};

#[test]
fn test_stable_cubic() {
    // (s + 1)^3
    let analysis = Analyzer::new().analyze_text("1, 3, 3, 1").unwrap();

    assert_eq!(analysis.verdict, StabilityVerdict::Stable);
    assert_eq!(analysis.verdict.rhs_pole_count(), 0);
    let column = analysis.array.first_column();
    assert_eq!(column.len(), 4);
    assert!(column.iter().all(|&v| v > 0.0));
    assert_relative_eq!(column[2], 8.0 / 3.0, epsilon = 1e-12);
}

#[test]
fn test_unstable_cubic() {
    let analysis = Analyzer::new().analyze_text("1, -3, 2, -5").unwrap();

    assert!(!analysis.verdict.is_stable());
    assert!(analysis.verdict.rhs_pole_count() >= 1);
    let column = analysis.array.first_column();
    assert_relative_eq!(column[0], 1.0);
    assert_relative_eq!(column[1], -3.0);
    assert_relative_eq!(column[2], 1.0 / 3.0, epsilon = 1e-12);
    assert_relative_eq!(column[3], -5.0, epsilon = 1e-12);
}

#[test]
fn test_degenerate_pivot_completes() {
    let coefficients = parse_coefficients("1, 2, 3, 6, 5").unwrap();
    let array = build_routh_array(&coefficients);

    assert_eq!(array.len(), 5);
    assert_relative_eq!(array.rows()[2].values()[0], DEFAULT_EPSILON);
    assert!(array
        .substitutions()
        .iter()
        .any(|s| s.kind == SubstitutionKind::Entry && s.row == 2));
    for row in array.rows() {
        assert!(row.values().iter().all(|v| v.is_finite()));
    }
    // s^4 + 2s^3 + 3s^2 + 6s + 5 has two roots in the right half plane.
    assert_eq!(classify(&array), StabilityVerdict::Unstable { rhs_poles: 2 });
}

#[test]
fn test_invalid_input_builds_nothing() {
    let err = Analyzer::new().analyze_text("abc, , ").unwrap_err();
    assert!(matches!(err, RouthError::NoValidCoefficients));
    assert_eq!(err.to_string(), "Please enter valid coefficients");
}

#[test]
fn test_degree_zero() {
    let analysis = Analyzer::new().analyze_text("5").unwrap();

    assert_eq!(analysis.array.len(), 1);
    assert_eq!(analysis.array.rows()[0].values(), &[5.0]);
    assert_eq!(analysis.verdict, StabilityVerdict::Stable);
}

#[test]
fn test_pipeline_is_idempotent() {
    let analyzer = Analyzer::new();
    let first = analyzer.analyze_text("2, -1, 4, 0.5, -3, 7").unwrap();
    let second = analyzer.analyze_text("2, -1, 4, 0.5, -3, 7").unwrap();

    assert_eq!(first.verdict, second.verdict);
    assert_eq!(first.array.len(), second.array.len());
    for (a, b) in first.array.rows().iter().zip(second.array.rows()) {
        assert_eq!(a.len(), b.len());
        for (x, y) in a.values().iter().zip(b.values()) {
            assert_relative_eq!(*x, *y, epsilon = 1e-12);
        }
    }
}

#[test]
fn test_known_unstable_quadratic() {
    // s^2 - 3s + 2 = (s - 1)(s - 2)
    let analysis = Analyzer::new().analyze_text("1, -3, 2").unwrap();
    assert_eq!(analysis.verdict, StabilityVerdict::Unstable { rhs_poles: 2 });
}

#[test]
fn test_zero_odd_coefficient_row() {
    // s^2 + 3: the zero pivot only replaces the divisor, so row 2 is
    // (0*3 - 1*0)/eps = 0 and is stored as epsilon.
    let analysis = Analyzer::new().analyze_text("1, 0, 3").unwrap();

    assert_eq!(analysis.array.to_vecs(), vec![vec![1.0, 3.0], vec![0.0], vec![DEFAULT_EPSILON]]);
    assert_eq!(analysis.array.substitutions()[0].kind, SubstitutionKind::Pivot);
    assert_eq!(analysis.verdict, StabilityVerdict::Unstable { rhs_poles: 1 });
}

#[test]
fn test_zero_odd_row_in_quartic() {
    // s^4 - 3s^2 + 5: every entry below the zero row collapses to epsilon.
    let analysis = Analyzer::new().analyze_text("1, 0, -3, 0, 5").unwrap();
    let rows = analysis.array.to_vecs();

    assert_eq!(rows.len(), 5);
    assert_eq!(rows[0], vec![1.0, -3.0, 5.0]);
    assert_eq!(rows[1], vec![0.0, 0.0]);
    assert_eq!(rows[2], vec![DEFAULT_EPSILON, DEFAULT_EPSILON]);
    assert_eq!(rows[3], vec![DEFAULT_EPSILON]);
    assert_relative_eq!(rows[4][0], DEFAULT_EPSILON, max_relative = 1e-9);
    assert_eq!(analysis.verdict, StabilityVerdict::Unstable { rhs_poles: 1 });
}
