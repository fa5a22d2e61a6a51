use crate::numeric::{round_decimal, to_integer};

/// Shortest decimal that round-trips, never in scientific notation.
pub fn number(x: f64) -> String {
    if x == 0.0 {
        // also catches -0.0
        return "0".to_string();
    }
    format!("{x}")
}

/// Like [`number`] but prints integer-like values without their fraction.
pub fn collapse(x: f64) -> String {
    match to_integer(x) {
        Some(n) => n.to_string(),
        None => number(x),
    }
}

/// Round to the display precision, then [`collapse`].
pub fn approximate(x: f64) -> String {
    collapse(round_decimal(x))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_numbers() {
        assert_eq!(number(4.0), "4");
        assert_eq!(number(-0.75), "-0.75");
        assert_eq!(number(-0.0), "0");
        assert_eq!(number(0.00001), "0.00001");
        assert_eq!(number(1e20), "100000000000000000000");
    }

    #[test]
    fn collapsed_numbers() {
        assert_eq!(collapse(2.0000000000001), "2");
        assert_eq!(collapse(-3.0), "-3");
        assert_eq!(collapse(2.5), "2.5");
    }

    #[test]
    fn approximated_numbers() {
        assert_eq!(approximate(1.0 / 3.0), "0.333333");
        assert_eq!(approximate(-0.9999999), "-1");
        assert_eq!(approximate(-0.0000001), "0");
    }
}
