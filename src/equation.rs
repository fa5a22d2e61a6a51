use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fmt;

use crate::config::{EPSILON, UNKNOWN};
use crate::error::Side;
use crate::format::number;
use crate::solver::{self, Solution};

/// A polynomial equation in one unknown, kept in `<poly> = 0` form.
///
/// Terms from the right-hand side are subtracted as they are added, so the
/// accumulator always holds the left-hand side minus the right-hand side.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Equation {
    terms: BTreeMap<u64, f64>,
    degree: u64,
}

impl Equation {
    pub fn new() -> Self {
        Equation::default()
    }

    /// Accumulate `coefficient * X^exponent` found on `side`.
    pub fn add_term(&mut self, coefficient: f64, exponent: u64, side: Side) {
        let contribution = coefficient * side.sign();
        match self.terms.entry(exponent) {
            Entry::Vacant(entry) => {
                entry.insert(contribution);
            }
            Entry::Occupied(mut entry) => {
                *entry.get_mut() += contribution;
            }
        }
        self.degree = self.live_degree();
    }

    /// Drop negligible coefficients and render the canonical reduced form.
    ///
    /// Calling it again re-derives the same string from the current terms.
    pub fn reduce(&mut self) -> String {
        self.terms.retain(|_, coeff| coeff.abs() >= EPSILON);
        self.degree = self.terms.keys().next_back().copied().unwrap_or(0);
        self.reduced_form()
    }

    /// Render the current terms without pruning them.
    pub fn reduced_form(&self) -> String {
        let rendered: Vec<String> = self
            .terms()
            .filter(|(_, coeff)| coeff.abs() >= EPSILON)
            .map(|(exp, coeff)| render_term(coeff, exp))
            .collect();

        if rendered.is_empty() {
            return "0 = 0".to_string();
        }
        format!("{} = 0", rendered.join(" + ").replace("+ -", "- "))
    }

    /// Highest exponent whose coefficient is not negligible.
    pub fn degree(&self) -> u64 {
        self.degree
    }

    pub fn coefficient(&self, exponent: u64) -> f64 {
        self.terms.get(&exponent).copied().unwrap_or(0.0)
    }

    /// `(exponent, coefficient)` pairs in ascending exponent order.
    pub fn terms(&self) -> impl Iterator<Item = (u64, f64)> + '_ {
        self.terms.iter().map(|(e, c)| (*e, *c))
    }

    pub fn is_empty(&self) -> bool {
        self.terms.values().all(|coeff| coeff.abs() < EPSILON)
    }

    pub fn solve(&self) -> Solution {
        solver::solve(self)
    }

    fn live_degree(&self) -> u64 {
        self.terms
            .iter()
            .filter(|(_, coeff)| coeff.abs() > EPSILON)
            .map(|(exp, _)| *exp)
            .max()
            .unwrap_or(0)
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.reduced_form())
    }
}

fn render_term(coeff: f64, exp: u64) -> String {
    match exp {
        0 => number(coeff),
        1 => format!("{} * {UNKNOWN}", number(coeff)),
        _ => format!("{} * {UNKNOWN}^{exp}", number(coeff)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn right_side_terms_are_subtracted() {
        let mut eq = Equation::new();
        eq.add_term(5.0, 2, Side::Left);
        eq.add_term(1.0, 2, Side::Right);
        eq.add_term(3.0, 0, Side::Right);
        assert_eq!(eq.coefficient(2), 4.0);
        assert_eq!(eq.coefficient(0), -3.0);
        assert_eq!(eq.coefficient(7), 0.0);
    }

    #[test]
    fn degree_tracks_cancellation() {
        let mut eq = Equation::new();
        eq.add_term(1.0, 3, Side::Left);
        eq.add_term(2.0, 1, Side::Left);
        assert_eq!(eq.degree(), 3);
        eq.add_term(1.0, 3, Side::Right);
        assert_eq!(eq.degree(), 1);
    }

    #[test]
    fn reduce_renders_ascending_terms() {
        let mut eq = Equation::new();
        eq.add_term(-9.3, 2, Side::Left);
        eq.add_term(4.0, 0, Side::Left);
        eq.add_term(5.0, 1, Side::Right);
        assert_eq!(eq.reduce(), "4 - 5 * X - 9.3 * X^2 = 0");
    }

    #[test]
    fn reduce_drops_negligible_terms() {
        let mut eq = Equation::new();
        eq.add_term(1e-12, 4, Side::Left);
        eq.add_term(2.0, 1, Side::Left);
        assert_eq!(eq.reduce(), "2 * X = 0");
        assert_eq!(eq.degree(), 1);
        assert_eq!(eq.terms().count(), 1);
    }

    #[test]
    fn empty_equation_reduces_to_identity() {
        let mut eq = Equation::new();
        eq.add_term(5.0, 0, Side::Left);
        eq.add_term(5.0, 0, Side::Right);
        assert_eq!(eq.reduce(), "0 = 0");
        assert_eq!(eq.degree(), 0);
        assert!(eq.is_empty());
        assert_eq!(eq.to_string(), "0 = 0");
    }

    #[test]
    fn reduce_is_idempotent() {
        let mut eq = Equation::new();
        eq.add_term(1.5, 1, Side::Left);
        eq.add_term(-2.0, 0, Side::Right);
        let first = eq.reduce();
        assert_eq!(first, "2 + 1.5 * X = 0");
        assert_eq!(eq.reduce(), first);
    }
}
