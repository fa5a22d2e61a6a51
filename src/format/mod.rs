//! Formatting helpers for rendering numbers and solver output.

pub mod number;
pub mod solve;

pub use number::{approximate, collapse, number};
pub use solve::solution_steps;
