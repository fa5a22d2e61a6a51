//! String-based helpers for callers that only deal in text.

use crate::error::Result;
use crate::parser::parse;
use crate::solver::Solution;

/// Everything a caller displays for one equation.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub reduced_form: String,
    pub degree: u64,
    pub solution: Solution,
}

impl Report {
    pub fn steps(&self) -> Vec<String> {
        self.solution.steps()
    }
}

/// Parse, reduce and solve `input`.
pub fn compute(input: &str) -> Result<Report> {
    let mut equation = parse(input)?;
    let reduced_form = equation.reduce();
    let degree = equation.degree();
    log::info!("reduced '{input}' to '{reduced_form}' (degree {degree})");
    Ok(Report {
        reduced_form,
        degree,
        solution: equation.solve(),
    })
}

pub fn reduce(input: &str) -> Result<String> {
    Ok(parse(input)?.reduce())
}

pub fn solve(input: &str) -> Result<Vec<String>> {
    Ok(compute(input)?.steps())
}
