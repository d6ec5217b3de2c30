//! Triangle validator.
//!
//! `validate` is the only constructor of `ValidSides`, so the calculator can
//! never see a triple that failed the triangle inequality.

use serde::Serialize;

use crate::cfg::SIDE_MAX;
use crate::error::InputError;
use crate::sides::SideLengths;

/// Which input modality produced the sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum InputMode {
    /// Three typed side lengths.
    Numeric,
    /// Three dragged vertices, rescaled into [1,100].
    Geometric,
}

/// A side triple that passed `validate`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ValidSides(SideLengths);

impl ValidSides {
    #[inline]
    pub fn sides(&self) -> &SideLengths {
        &self.0
    }
}

/// True iff all sides are positive and finite and every pair sums to more than the third.
///
/// Comparisons are written negated so that NaN fails.
pub fn is_triangle(s: &SideLengths) -> bool {
    let SideLengths { a, b, c } = *s;
    if !s.as_array().iter().all(|v| v.is_finite() && *v > 0.0) {
        return false;
    }
    a + b > c && b + c > a && a + c > b
}

/// Check the triangle inequality and the upper bound of 100.
///
/// Geometric sides stay within the bound for vertices inside the canvas; the
/// check still applies so oversized vertex sets or scale overrides are rejected.
pub fn validate(sides: SideLengths, mode: InputMode) -> Result<ValidSides, InputError> {
    let over_max = sides.as_array().iter().any(|v| *v > SIDE_MAX);
    if !is_triangle(&sides) || over_max {
        tracing::debug!(%sides, ?mode, "invalid triangle");
        return Err(InputError::InvalidTriangle {
            a: sides.a,
            b: sides.b,
            c: sides.c,
        });
    }
    Ok(ValidSides(sides))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ok(a: f64, b: f64, c: f64) -> bool {
        validate(SideLengths::new(a, b, c), InputMode::Numeric).is_ok()
    }

    #[test]
    fn right_triangle_is_valid() {
        assert!(ok(3.0, 4.0, 5.0));
        assert!(ok(100.0, 100.0, 100.0));
    }

    #[test]
    fn inequality_violations_fail() {
        assert!(!ok(1.0, 1.0, 3.0));
        // Degenerate (a + b == c) is rejected too.
        assert!(!ok(1.0, 2.0, 3.0));
        assert!(!ok(5.0, 1.0, 1.0));
        assert!(!ok(1.0, 5.0, 1.0));
    }

    #[test]
    fn non_positive_and_nan_fail() {
        assert!(!ok(0.0, 4.0, 5.0));
        assert!(!ok(-3.0, 4.0, 5.0));
        assert!(!ok(f64::NAN, 4.0, 5.0));
        assert!(!ok(3.0, f64::INFINITY, 5.0));
    }

    #[test]
    fn upper_bound_applies_in_both_modes() {
        let s = SideLengths::new(101.0, 100.0, 100.0);
        assert!(validate(s, InputMode::Numeric).is_err());
        assert!(validate(s, InputMode::Geometric).is_err());
        let edge = SideLengths::new(100.0, 100.0, 100.0);
        assert!(validate(edge, InputMode::Geometric).is_ok());
    }

    #[test]
    fn error_carries_values() {
        let err = validate(SideLengths::new(1.0, 1.0, 3.0), InputMode::Numeric).unwrap_err();
        assert_eq!(
            err,
            InputError::InvalidTriangle {
                a: 1.0,
                b: 1.0,
                c: 3.0
            }
        );
    }

    proptest! {
        #[test]
        fn validate_iff_triangle_inequality(
            a in 0.001f64..=100.0,
            b in 0.001f64..=100.0,
            c in 0.001f64..=100.0,
        ) {
            let expected = a + b > c && b + c > a && a + c > b;
            prop_assert_eq!(ok(a, b, c), expected);
        }
    }
}
