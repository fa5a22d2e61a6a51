//! Parse, reduce and solve polynomial equations in one unknown, producing a
//! step-by-step derivation for degrees up to two.

pub mod config;
pub mod equation;
pub mod error;
pub mod format;
pub mod numeric;
pub mod parser;
pub mod prelude;
pub mod solver;
pub mod ui;

pub use equation::Equation;
pub use error::{ComputorError, ErrorKind, Result, Side};
pub use format::solution_steps;
pub use numeric::{simplify_fraction, sqrt, Fraction};
pub use parser::{classify, parse, parse_term, Term, TermShape};
pub use solver::{
    solve, ExactComplex, LinearSolution, QuadraticRoots, QuadraticSolution, RealPair, Root,
    Solution,
};
pub use ui::{compute, Report};
