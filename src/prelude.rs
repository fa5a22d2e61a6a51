//! String-based convenience API for quick experimentation.

pub use crate::ui::{compute, reduce, solve, Report};
