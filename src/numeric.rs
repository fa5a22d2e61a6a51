//! Numeric helpers shared by the solver: approximate square roots, exact
//! fractions and the tolerance checks that decide between the two.

use num_rational::Ratio;
use num_traits::Zero;

use crate::config::{
    DECIMAL_PLACES, EPSILON, MAX_EXACT_INTEGER, SQRT_LARGE_DIVISOR, SQRT_LARGE_INPUT,
    SQRT_MAX_ITERATIONS,
};
use crate::error::{ComputorError, Result};

/// Integer fraction kept in lowest terms with a positive denominator.
pub type Fraction = Ratio<i64>;

/// Reduce `numerator / denominator` to lowest terms.
///
/// The sign always ends up on the numerator and a zero numerator yields `0/1`.
/// Reduction runs in `i128`, so the only failure besides a zero denominator is
/// a result whose sign flip leaves `i64` (`i64::MIN / -1`).
pub fn simplify_fraction(numerator: i64, denominator: i64) -> Result<Fraction> {
    if denominator.is_zero() {
        return Err(ComputorError::ZeroDenominator);
    }
    if numerator.is_zero() {
        return Ok(Fraction::zero());
    }

    let wide = Ratio::new(i128::from(numerator), i128::from(denominator));
    match (i64::try_from(*wide.numer()), i64::try_from(*wide.denom())) {
        (Ok(numer), Ok(denom)) => Ok(Ratio::new_raw(numer, denom)),
        _ => Err(ComputorError::FractionOverflow {
            numerator,
            denominator,
        }),
    }
}

/// Square root by Newton-Raphson iteration.
///
/// Never fails: negative input yields 0 and an input that does not converge
/// within [`SQRT_MAX_ITERATIONS`] returns the last guess.
pub fn sqrt(x: f64) -> f64 {
    if x <= 0.0 {
        return 0.0;
    }
    if x == 1.0 {
        return 1.0;
    }
    if x < EPSILON {
        return x;
    }

    let mut guess = if x > SQRT_LARGE_INPUT {
        x / SQRT_LARGE_DIVISOR
    } else {
        x / 2.0
    };

    for _ in 0..SQRT_MAX_ITERATIONS {
        if guess.abs() < EPSILON {
            guess = EPSILON;
        }
        let next = 0.5 * (guess + x / guess);
        if (next - guess).abs() < EPSILON {
            return next;
        }
        guess = next;
    }

    log::debug!("sqrt({x}) did not converge, returning {guess}");
    guess
}

/// Whether `x` is within [`EPSILON`] of an integer that an `i64` holds exactly.
pub fn is_integer_like(x: f64) -> bool {
    x.is_finite() && x.abs() <= MAX_EXACT_INTEGER && (x.round() - x).abs() < EPSILON
}

/// Nearest integer to `x`, or `None` when `x` is not integer-like.
pub fn to_integer(x: f64) -> Option<i64> {
    is_integer_like(x).then(|| x.round() as i64)
}

pub fn is_negligible(x: f64) -> bool {
    x.abs() < EPSILON
}

/// Round to [`DECIMAL_PLACES`] decimal places.
pub fn round_decimal(x: f64) -> f64 {
    let scale = 10f64.powi(DECIMAL_PLACES);
    (x * scale).round() / scale
}
