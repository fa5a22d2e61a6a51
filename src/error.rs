use std::fmt;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ComputorError>;

/// Which side of the `=` a term or an error belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Multiplier applied to a term when it is moved to the left-hand side.
    pub fn sign(self) -> f64 {
        match self {
            Side::Left => 1.0,
            Side::Right => -1.0,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => f.write_str("left"),
            Side::Right => f.write_str("right"),
        }
    }
}

/// Coarse grouping of [`ComputorError`] variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The equation as a whole is malformed.
    Format,
    /// A single term could not be understood.
    TermSyntax,
    Arithmetic,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ComputorError {
    #[error("invalid equation format: must contain exactly one '=' sign, found {0}")]
    EqualSignCount(usize),
    #[error("invalid equation format: the {0} side of the equation cannot be empty")]
    EmptySide(Side),
    #[error("invalid equation format: '{0}' ends with an operator")]
    DanglingOperator(String),
    #[error("invalid equation format: consecutive '+' signs not allowed: '{0}'")]
    ConsecutivePlus(String),
    #[error("the {0} side of the equation contains no valid terms")]
    NoTerms(Side),
    #[error("invalid term format: '{0}'")]
    TermSyntax(String),
    #[error("error parsing term '{term}': {cause}")]
    TermValue { term: String, cause: String },
    #[error("denominator cannot be zero")]
    ZeroDenominator,
    #[error("fraction {numerator}/{denominator} cannot be reduced within 64-bit integers")]
    FractionOverflow { numerator: i64, denominator: i64 },
}

impl ComputorError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ComputorError::EqualSignCount(_)
            | ComputorError::EmptySide(_)
            | ComputorError::DanglingOperator(_)
            | ComputorError::ConsecutivePlus(_)
            | ComputorError::NoTerms(_) => ErrorKind::Format,
            ComputorError::TermSyntax(_) | ComputorError::TermValue { .. } => {
                ErrorKind::TermSyntax
            }
            ComputorError::ZeroDenominator | ComputorError::FractionOverflow { .. } => {
                ErrorKind::Arithmetic
            }
        }
    }
}
