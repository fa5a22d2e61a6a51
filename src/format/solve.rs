use crate::config::UNKNOWN;
use crate::solver::{
    ExactComplex, LinearSolution, QuadraticRoots, QuadraticSolution, RealPair, Root, Solution,
};

use super::{approximate, collapse, number};

/// Render a [`Solution`] into the ordered lines of its derivation.
pub fn solution_steps(solution: &Solution) -> Vec<String> {
    match solution {
        Solution::Unsolvable { .. } => vec![
            "The polynomial degree is strictly greater than 2, I can't solve.".to_string(),
        ],
        Solution::AllReals { equation } => vec![
            format!("Equation: {equation}"),
            "All real numbers are solutions.".to_string(),
        ],
        Solution::NoSolution { equation } => vec![
            format!("Equation: {equation}"),
            "There is no solution.".to_string(),
        ],
        Solution::OutOfRange { equation } => vec![
            format!("Equation: {equation}"),
            "The coefficients are too large to solve with floating point numbers.".to_string(),
        ],
        Solution::Linear(linear) => linear_steps(linear),
        Solution::Quadratic(quadratic) => quadratic_steps(quadratic),
    }
}

fn linear_steps(sol: &LinearSolution) -> Vec<String> {
    let mut lines = vec![
        format!("Equation: {}", sol.equation),
        format!("Linear equation: {} * {UNKNOWN} = {}", number(sol.a), number(-sol.b)),
        format!(
            "Solution is {UNKNOWN} = -({}) / {}",
            number(sol.b),
            number(sol.a)
        ),
        "The solution is:".to_string(),
    ];
    push_root(&mut lines, &sol.root);
    lines
}

fn quadratic_steps(sol: &QuadraticSolution) -> Vec<String> {
    let (a, b, c) = (number(sol.a), number(sol.b), number(sol.c));
    let delta = number(sol.discriminant);
    let mut lines = vec![
        format!("Equation: {}", sol.equation),
        format!("Quadratic equation: {a} * {UNKNOWN}² + {b} * {UNKNOWN} + {c} = 0")
            .replace("+ -", "- "),
        format!("Discriminant Δ = b² - 4ac = ({b})² - 4 * ({a}) * ({c}) = {delta}"),
    ];

    match &sol.roots {
        QuadraticRoots::Double(root) => {
            lines.push("Discriminant is zero, there is one real solution:".to_string());
            push_root(&mut lines, root);
        }
        QuadraticRoots::Real {
            sqrt_discriminant,
            roots,
        } => {
            lines.push(format!(
                "Discriminant is strictly positive (Δ = {delta}), there are two real solutions:"
            ));
            lines.push(format!("√Δ ≈ {}", number(*sqrt_discriminant)));
            push_real_pair(&mut lines, roots);
        }
        QuadraticRoots::Complex {
            real,
            imaginary,
            exact,
        } => {
            lines.push(format!(
                "Discriminant is strictly negative (Δ = {delta}), there are two complex solutions:"
            ));
            match exact {
                Some(ExactComplex::Rational {
                    real: re,
                    imaginary: im,
                }) => {
                    lines.push("Solutions in exact form:".to_string());
                    push_conjugates(&mut lines, "=", &re.to_string(), &format!("{im}i"));
                    lines.push("Approximate solutions:".to_string());
                }
                Some(ExactComplex::Radical {
                    real: re,
                    radicand,
                    denominator,
                }) => {
                    lines.push("Solutions in exact form (symbolic):".to_string());
                    push_conjugates(
                        &mut lines,
                        "=",
                        &re.to_string(),
                        &format!("√({radicand})/{denominator} i"),
                    );
                    lines.push("Approximate solutions:".to_string());
                }
                None => lines.push("Solutions in decimal form:".to_string()),
            }
            push_conjugates(
                &mut lines,
                "≈",
                &approximate(*real),
                &format!("{}i", approximate(*imaginary)),
            );
        }
    }
    lines
}

fn push_root(lines: &mut Vec<String>, root: &Root) {
    match root {
        Root::Exact { value, approx } => {
            lines.push(format!("{UNKNOWN} = {value}"));
            if !value.is_integer() {
                lines.push(format!("Which is approximately: {}", number(*approx)));
            }
        }
        Root::Decimal(value) => lines.push(format!("{UNKNOWN} = {}", collapse(*value))),
    }
}

fn push_real_pair(lines: &mut Vec<String>, roots: &RealPair) {
    match roots {
        RealPair::Exact {
            first,
            second,
            approx,
        } => {
            lines.push("Solutions in exact form:".to_string());
            lines.push(format!("{UNKNOWN}₁ = {first}"));
            lines.push(format!("{UNKNOWN}₂ = {second}"));
            if !(first.is_integer() && second.is_integer()) {
                lines.push("Approximate solutions:".to_string());
                push_decimal_pair(lines, *approx);
            }
        }
        RealPair::Decimal(first, second) => {
            lines.push("Solutions in decimal form:".to_string());
            push_decimal_pair(lines, (*first, *second));
        }
    }
}

fn push_decimal_pair(lines: &mut Vec<String>, (first, second): (f64, f64)) {
    lines.push(format!("{UNKNOWN}₁ ≈ {}", approximate(first)));
    lines.push(format!("{UNKNOWN}₂ ≈ {}", approximate(second)));
}

fn push_conjugates(lines: &mut Vec<String>, relation: &str, real: &str, imaginary: &str) {
    lines.push(format!("{UNKNOWN}₁ {relation} {real} + {imaginary}"));
    lines.push(format!("{UNKNOWN}₂ {relation} {real} - {imaginary}"));
}
