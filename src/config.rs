//! Process-wide numeric tolerances and display settings.

/// Coefficients, discriminants and integer checks closer than this to their
/// target are treated as equal.
pub const EPSILON: f64 = 1e-10;

/// Newton-Raphson gives up after this many updates and returns its last guess.
pub const SQRT_MAX_ITERATIONS: usize = 100;

/// Inputs above this start from `x / SQRT_LARGE_DIVISOR` instead of `x / 2`.
pub const SQRT_LARGE_INPUT: f64 = 1e10;
pub const SQRT_LARGE_DIVISOR: f64 = 1e5;

/// Decimal places kept when a root has no exact form.
pub const DECIMAL_PLACES: i32 = 6;

/// 2^53: beyond this an `f64` no longer represents every integer, so values
/// are never considered integer-like and the exact fraction paths are skipped.
pub const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// The single unknown an equation may mention.
pub const UNKNOWN: char = 'X';
