//! Degree-keyed solver for reduced equations.
//!
//! The solver never fails: a degree above two is reported as
//! [`Solution::Unsolvable`] and every exact path falls back to decimals when
//! its integer preconditions do not hold. Coefficients large enough to push
//! the discriminant or a root past `f64` range give [`Solution::OutOfRange`].

use num_traits::Signed;

use crate::equation::Equation;
use crate::format::solution_steps;
use crate::numeric::{self, is_negligible, simplify_fraction, to_integer, Fraction};

#[derive(Debug, Clone, PartialEq)]
pub enum Solution {
    Unsolvable { degree: u64 },
    AllReals { equation: String },
    NoSolution { equation: String },
    /// An intermediate value overflowed to infinity or NaN.
    OutOfRange { equation: String },
    Linear(LinearSolution),
    Quadratic(QuadraticSolution),
}

/// A real root, exact when the coefficients allowed it.
#[derive(Debug, Clone, PartialEq)]
pub enum Root {
    Exact { value: Fraction, approx: f64 },
    Decimal(f64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct LinearSolution {
    pub equation: String,
    /// Coefficient of `X`.
    pub a: f64,
    /// Constant term.
    pub b: f64,
    pub root: Root,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuadraticSolution {
    pub equation: String,
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub discriminant: f64,
    pub roots: QuadraticRoots,
}

#[derive(Debug, Clone, PartialEq)]
pub enum QuadraticRoots {
    Double(Root),
    Real {
        sqrt_discriminant: f64,
        roots: RealPair,
    },
    /// `real ± imaginary i`, with `imaginary` non-negative.
    Complex {
        real: f64,
        imaginary: f64,
        exact: Option<ExactComplex>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum RealPair {
    Exact {
        first: Fraction,
        second: Fraction,
        approx: (f64, f64),
    },
    Decimal(f64, f64),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExactComplex {
    /// `|Δ|` is a perfect square.
    Rational { real: Fraction, imaginary: Fraction },
    /// `real ± √radicand / denominator i`.
    Radical {
        real: Fraction,
        radicand: i64,
        denominator: i64,
    },
}

impl Solution {
    /// Human-readable derivation, one line per step.
    pub fn steps(&self) -> Vec<String> {
        solution_steps(self)
    }

    /// Real roots in the order they are reported. Complex and degenerate
    /// cases have none.
    pub fn real_roots(&self) -> Vec<f64> {
        match self {
            Solution::Linear(linear) => vec![linear.root.value()],
            Solution::Quadratic(quadratic) => match &quadratic.roots {
                QuadraticRoots::Double(root) => vec![root.value()],
                QuadraticRoots::Real { roots, .. } => {
                    let (first, second) = roots.values();
                    vec![first, second]
                }
                QuadraticRoots::Complex { .. } => Vec::new(),
            },
            _ => Vec::new(),
        }
    }
}

impl Solution {
    fn is_finite(&self) -> bool {
        match self {
            Solution::Linear(linear) => {
                [linear.a, linear.b, linear.root.value()].iter().all(|v| v.is_finite())
            }
            Solution::Quadratic(quadratic) => {
                let mut values = vec![
                    quadratic.a,
                    quadratic.b,
                    quadratic.c,
                    quadratic.discriminant,
                ];
                match &quadratic.roots {
                    QuadraticRoots::Double(root) => values.push(root.value()),
                    QuadraticRoots::Real {
                        sqrt_discriminant,
                        roots,
                    } => {
                        let (first, second) = roots.values();
                        values.extend([*sqrt_discriminant, first, second]);
                    }
                    QuadraticRoots::Complex {
                        real, imaginary, ..
                    } => values.extend([*real, *imaginary]),
                }
                values.iter().all(|v| v.is_finite())
            }
            _ => true,
        }
    }
}

impl Root {
    pub fn value(&self) -> f64 {
        match self {
            Root::Exact { approx, .. } => *approx,
            Root::Decimal(value) => *value,
        }
    }
}

impl RealPair {
    pub fn values(&self) -> (f64, f64) {
        match self {
            RealPair::Exact { approx, .. } => *approx,
            RealPair::Decimal(first, second) => (*first, *second),
        }
    }
}

pub fn solve(equation: &Equation) -> Solution {
    let degree = equation.degree();
    log::debug!("solving degree {degree} equation");
    let solution = match degree {
        0 => solve_constant(equation),
        1 => Solution::Linear(solve_linear(equation)),
        2 => Solution::Quadratic(solve_quadratic(equation)),
        _ => Solution::Unsolvable { degree },
    };

    if !solution.is_finite() {
        log::warn!("degree {degree} solution left f64 range");
        return Solution::OutOfRange {
            equation: equation.reduced_form(),
        };
    }
    solution
}

fn solve_constant(equation: &Equation) -> Solution {
    let rendered = equation.reduced_form();
    if is_negligible(equation.coefficient(0)) {
        Solution::AllReals { equation: rendered }
    } else {
        Solution::NoSolution { equation: rendered }
    }
}

fn solve_linear(equation: &Equation) -> LinearSolution {
    let a = equation.coefficient(1);
    let b = equation.coefficient(0);
    LinearSolution {
        equation: equation.reduced_form(),
        a,
        b,
        root: ratio_root(-b, a),
    }
}

fn solve_quadratic(equation: &Equation) -> QuadraticSolution {
    let a = equation.coefficient(2);
    let b = equation.coefficient(1);
    let c = equation.coefficient(0);
    let discriminant = b * b - 4.0 * a * c;

    let roots = if is_negligible(discriminant) {
        log::debug!("discriminant is zero");
        QuadraticRoots::Double(ratio_root(-b, 2.0 * a))
    } else if discriminant > 0.0 {
        log::debug!("discriminant {discriminant} is positive");
        real_roots(a, b, discriminant)
    } else {
        log::debug!("discriminant {discriminant} is negative");
        complex_roots(a, b, c, discriminant)
    };

    QuadraticSolution {
        equation: equation.reduced_form(),
        a,
        b,
        c,
        discriminant,
        roots,
    }
}

/// `numerator / denominator`, as a fraction when both are integer-like.
fn ratio_root(numerator: f64, denominator: f64) -> Root {
    let approx = numerator / denominator;
    match exact_ratio(numerator, denominator) {
        Some(value) => Root::Exact { value, approx },
        None => Root::Decimal(approx),
    }
}

fn exact_ratio(numerator: f64, denominator: f64) -> Option<Fraction> {
    simplify_fraction(to_integer(numerator)?, to_integer(denominator)?).ok()
}

fn real_roots(a: f64, b: f64, discriminant: f64) -> QuadraticRoots {
    let sqrt_discriminant = numeric::sqrt(discriminant);
    let first = (-b + sqrt_discriminant) / (2.0 * a);
    let second = (-b - sqrt_discriminant) / (2.0 * a);

    let exact = match (to_integer(a), to_integer(b), to_integer(sqrt_discriminant)) {
        (Some(a), Some(b), Some(root)) => exact_pair(-b + root, -b - root, 2 * a),
        _ => None,
    };

    let roots = match exact {
        Some((first_exact, second_exact)) => RealPair::Exact {
            first: first_exact,
            second: second_exact,
            approx: (first, second),
        },
        None => RealPair::Decimal(first, second),
    };

    QuadraticRoots::Real {
        sqrt_discriminant,
        roots,
    }
}

fn exact_pair(first: i64, second: i64, denominator: i64) -> Option<(Fraction, Fraction)> {
    Some((
        simplify_fraction(first, denominator).ok()?,
        simplify_fraction(second, denominator).ok()?,
    ))
}

fn complex_roots(a: f64, b: f64, c: f64, discriminant: f64) -> QuadraticRoots {
    let magnitude = discriminant.abs();
    let real = -b / (2.0 * a);
    let imaginary = (numeric::sqrt(magnitude) / (2.0 * a)).abs();

    let exact = match (to_integer(a), to_integer(b), to_integer(c)) {
        (Some(a), Some(b), Some(_)) => exact_complex(a, b, magnitude),
        _ => None,
    };

    QuadraticRoots::Complex {
        real,
        imaginary,
        exact,
    }
}

fn exact_complex(a: i64, b: i64, magnitude: f64) -> Option<ExactComplex> {
    let denominator = 2 * a;
    let real = simplify_fraction(-b, denominator).ok()?;
    let radicand = to_integer(magnitude)?;

    let root = numeric::sqrt(radicand as f64);
    match to_integer(root) {
        Some(root) => {
            let imaginary = simplify_fraction(root, denominator).ok()?;
            Some(ExactComplex::Rational {
                real,
                imaginary: imaginary.abs(),
            })
        }
        None => Some(ExactComplex::Radical {
            real,
            radicand,
            denominator: denominator.abs(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Side;

    fn equation(terms: &[(f64, u64)]) -> Equation {
        let mut eq = Equation::new();
        for &(coeff, exp) in terms {
            eq.add_term(coeff, exp, Side::Left);
        }
        eq.reduce();
        eq
    }

    #[test]
    fn degree_above_two_is_unsolvable() {
        let eq = equation(&[(1.0, 3)]);
        assert_eq!(solve(&eq), Solution::Unsolvable { degree: 3 });
    }

    #[test]
    fn exponent_past_u32_is_unsolvable() {
        let eq = equation(&[(1.0, 1 << 32)]);
        assert_eq!(solve(&eq), Solution::Unsolvable { degree: 1 << 32 });
    }

    #[test]
    fn overflowing_discriminant_is_out_of_range() {
        // b² overflows even though every coefficient is finite
        let eq = equation(&[(1e200, 1), (1e200, 2)]);
        assert!(matches!(solve(&eq), Solution::OutOfRange { .. }));
    }

    #[test]
    fn overflowing_linear_root_is_out_of_range() {
        let eq = equation(&[(1e305, 0), (1e-5, 1)]);
        assert!(matches!(solve(&eq), Solution::OutOfRange { .. }));
    }

    #[test]
    fn constant_equations() {
        assert!(matches!(solve(&equation(&[])), Solution::AllReals { .. }));
        assert!(matches!(
            solve(&equation(&[(3.0, 0)])),
            Solution::NoSolution { .. }
        ));
    }

    #[test]
    fn linear_exact_fraction() {
        let eq = equation(&[(5.0, 0), (2.0, 1)]);
        let Solution::Linear(linear) = solve(&eq) else {
            panic!("expected linear solution");
        };
        assert_eq!(
            linear.root,
            Root::Exact {
                value: Fraction::new(-5, 2),
                approx: -2.5
            }
        );
    }

    #[test]
    fn linear_decimal_root() {
        let eq = equation(&[(1.0, 0), (0.5, 1)]);
        let Solution::Linear(linear) = solve(&eq) else {
            panic!("expected linear solution");
        };
        assert_eq!(linear.root, Root::Decimal(-2.0));
    }

    #[test]
    fn double_root_uses_two_a_as_denominator() {
        // 0.5 X^2 + X + 0.5 = 0, 2a is an integer even though a is not
        let eq = equation(&[(0.5, 0), (1.0, 1), (0.5, 2)]);
        let Solution::Quadratic(quadratic) = solve(&eq) else {
            panic!("expected quadratic solution");
        };
        assert_eq!(
            quadratic.roots,
            QuadraticRoots::Double(Root::Exact {
                value: Fraction::from_integer(-1),
                approx: -1.0
            })
        );
    }

    #[test]
    fn real_roots_exact() {
        let eq = equation(&[(3.0, 1), (4.0, 2)]);
        let Solution::Quadratic(quadratic) = solve(&eq) else {
            panic!("expected quadratic solution");
        };
        assert_eq!(quadratic.discriminant, 9.0);
        let QuadraticRoots::Real { roots, .. } = &quadratic.roots else {
            panic!("expected real roots");
        };
        let RealPair::Exact { first, second, .. } = roots else {
            panic!("expected exact roots");
        };
        assert_eq!(*first, Fraction::from_integer(0));
        assert_eq!(*second, Fraction::new(-3, 4));
    }

    #[test]
    fn real_roots_irrational() {
        let eq = equation(&[(-2.0, 0), (1.0, 2)]);
        let roots = solve(&eq).real_roots();
        assert_eq!(roots.len(), 2);
        assert!((roots[0] - std::f64::consts::SQRT_2).abs() < 1e-9);
        assert!((roots[1] + std::f64::consts::SQRT_2).abs() < 1e-9);
    }

    #[test]
    fn complex_roots_with_negative_leading_coefficient() {
        // -X^2 - 1 = 0
        let eq = equation(&[(-1.0, 0), (-1.0, 2)]);
        let Solution::Quadratic(quadratic) = solve(&eq) else {
            panic!("expected quadratic solution");
        };
        let QuadraticRoots::Complex {
            imaginary, exact, ..
        } = quadratic.roots
        else {
            panic!("expected complex roots");
        };
        assert_eq!(imaginary, 1.0);
        assert_eq!(
            exact,
            Some(ExactComplex::Rational {
                real: Fraction::from_integer(0),
                imaginary: Fraction::from_integer(1),
            })
        );
    }

    #[test]
    fn complex_roots_radical() {
        // X^2 + X + 1 = 0, |Δ| = 3
        let eq = equation(&[(1.0, 0), (1.0, 1), (1.0, 2)]);
        let Solution::Quadratic(quadratic) = solve(&eq) else {
            panic!("expected quadratic solution");
        };
        let QuadraticRoots::Complex { exact, .. } = quadratic.roots else {
            panic!("expected complex roots");
        };
        assert_eq!(
            exact,
            Some(ExactComplex::Radical {
                real: Fraction::new(-1, 2),
                radicand: 3,
                denominator: 2,
            })
        );
    }

    #[test]
    fn complex_roots_decimal_only() {
        let eq = equation(&[(1.5, 0), (1.0, 2)]);
        let Solution::Quadratic(quadratic) = solve(&eq) else {
            panic!("expected quadratic solution");
        };
        assert!(matches!(
            quadratic.roots,
            QuadraticRoots::Complex { exact: None, .. }
        ));
    }
}
