use nom::branch::alt;
use nom::bytes::complete::{take_till, take_until, take_while1};
use nom::character::complete::{anychar, char, multispace0, one_of};
use nom::combinator::{all_consuming, map, map_opt, rest, value, verify};
use nom::error::VerboseError;
use nom::multi::fold_many0;
use nom::sequence::{delimited, pair, preceded, terminated, tuple};
use nom::IResult;

use crate::config::UNKNOWN;
use crate::equation::Equation;
use crate::error::{ComputorError, Result, Side};

type ParseResult<'a, O> = IResult<&'a str, O, VerboseError<&'a str>>;

const OPERATORS: &str = "+-*^";
/// Start of an implicit power; everything before it is the coefficient.
const POWER_MARKER: &str = "X^";

/// Syntactic shape of a single unsigned term.
///
/// Coefficient and exponent text is kept raw; converting it is a separate
/// step so a malformed number is reported against the term it came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TermShape<'a> {
    /// `4`, `3.25`
    Numeral(&'a str),
    /// `X`
    Symbol,
    /// `X^2`
    SymbolPower { exponent: &'a str },
    /// `4*X` or `4X`; `None` when an implicit coefficient is omitted.
    CoefSymbol { coefficient: Option<&'a str> },
    /// `4*X^2` or `4X^2`
    CoefSymbolPower {
        coefficient: Option<&'a str>,
        exponent: &'a str,
    },
}

/// A signed `coefficient * X^exponent` read from the input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Term {
    pub coefficient: f64,
    pub exponent: u64,
}

/// Parse `<side> = <side>` into an equation with every term moved to the
/// left-hand side.
pub fn parse(input: &str) -> Result<Equation> {
    let equal_signs = input.matches('=').count();
    let Some((left, right)) = input.split_once('=').filter(|_| equal_signs == 1) else {
        return Err(ComputorError::EqualSignCount(equal_signs));
    };

    let (left, right) = (left.trim(), right.trim());
    if left.is_empty() {
        return Err(ComputorError::EmptySide(Side::Left));
    }
    if right.is_empty() {
        return Err(ComputorError::EmptySide(Side::Right));
    }

    let mut equation = Equation::new();
    parse_side(left, Side::Left, &mut equation)?;
    parse_side(right, Side::Right, &mut equation)?;
    Ok(equation)
}

fn parse_side(text: &str, side: Side, equation: &mut Equation) -> Result<()> {
    let expression = normalize_operators(text);
    log::debug!("{side} side normalized to '{expression}'");

    if expression.ends_with(|c: char| OPERATORS.contains(c)) {
        return Err(ComputorError::DanglingOperator(expression));
    }
    // checked before folding: "a - -b" folds into a doubled '+' and stays legal
    if expression.contains("++") {
        return Err(ComputorError::ConsecutivePlus(expression));
    }

    let folded = expression.replace('-', "+-");
    let folded = folded.strip_prefix('+').unwrap_or(&folded);
    let terms: Vec<&str> = folded
        .split('+')
        .filter(|term| !term.trim().is_empty())
        .collect();
    if terms.is_empty() {
        return Err(ComputorError::NoTerms(side));
    }

    for raw in terms {
        if let Some(term) = parse_term(raw)? {
            log::trace!(
                "{side} term '{raw}' -> {} * X^{}",
                term.coefficient,
                term.exponent
            );
            equation.add_term(term.coefficient, term.exponent, side);
        }
    }
    Ok(())
}

/// Parse one signed term. A lone `-` left over from sign folding yields
/// `None`.
pub fn parse_term(text: &str) -> Result<Option<Term>> {
    let (sign, body) = match text.strip_prefix('-') {
        Some(body) => (-1.0, body),
        None => (1.0, text),
    };
    if body.is_empty() {
        return Ok(None);
    }

    let shape = classify(body).ok_or_else(|| ComputorError::TermSyntax(body.to_string()))?;
    let (coefficient, exponent) = shape.evaluate().map_err(|cause| ComputorError::TermValue {
        term: body.to_string(),
        cause,
    })?;

    Ok(Some(Term {
        coefficient: sign * coefficient,
        exponent,
    }))
}

/// Match `term` against the known shapes, first match wins.
pub fn classify(term: &str) -> Option<TermShape<'_>> {
    alt((
        all_consuming(numeral),
        all_consuming(symbol),
        all_consuming(symbol_power),
        all_consuming(explicit_coef_symbol),
        all_consuming(explicit_coef_symbol_power),
        all_consuming(implicit_coef_symbol),
        all_consuming(implicit_coef_symbol_power),
    ))(term)
    .ok()
    .map(|(_, shape)| shape)
}

impl TermShape<'_> {
    /// Convert the raw text into `(coefficient, exponent)`.
    pub fn evaluate(self) -> std::result::Result<(f64, u64), String> {
        match self {
            TermShape::Numeral(text) => Ok((parse_coefficient(text)?, 0)),
            TermShape::Symbol => Ok((1.0, 1)),
            TermShape::SymbolPower { exponent } => Ok((1.0, parse_exponent(exponent)?)),
            TermShape::CoefSymbol { coefficient } => Ok((implied_coefficient(coefficient)?, 1)),
            TermShape::CoefSymbolPower {
                coefficient,
                exponent,
            } => Ok((implied_coefficient(coefficient)?, parse_exponent(exponent)?)),
        }
    }
}

fn implied_coefficient(text: Option<&str>) -> std::result::Result<f64, String> {
    text.map_or(Ok(1.0), parse_coefficient)
}

fn parse_coefficient(text: &str) -> std::result::Result<f64, String> {
    let value: f64 = text.trim().parse().map_err(|e| format!("{e}"))?;
    if !value.is_finite() {
        return Err(format!("coefficient '{text}' is not a finite number"));
    }
    Ok(value)
}

fn parse_exponent(text: &str) -> std::result::Result<u64, String> {
    text.trim().parse().map_err(|e| format!("{e}"))
}

fn numeral(input: &str) -> ParseResult<TermShape> {
    map(
        verify(
            take_while1(|c: char| c.is_ascii_digit() || c == '.'),
            |s: &str| s.matches('.').count() <= 1 && s.chars().any(|c| c.is_ascii_digit()),
        ),
        TermShape::Numeral,
    )(input)
}

fn symbol(input: &str) -> ParseResult<TermShape> {
    value(TermShape::Symbol, char(UNKNOWN))(input)
}

fn symbol_power(input: &str) -> ParseResult<TermShape> {
    map(power, |exponent| TermShape::SymbolPower { exponent })(input)
}

fn explicit_coef_symbol(input: &str) -> ParseResult<TermShape> {
    map(
        terminated(take_till(|c: char| c == '*'), pair(char('*'), char(UNKNOWN))),
        |coefficient| TermShape::CoefSymbol {
            coefficient: Some(coefficient),
        },
    )(input)
}

fn explicit_coef_symbol_power(input: &str) -> ParseResult<TermShape> {
    map(
        tuple((take_till(|c: char| c == '*'), char('*'), power)),
        |(coefficient, _, exponent)| TermShape::CoefSymbolPower {
            coefficient: Some(coefficient),
            exponent,
        },
    )(input)
}

fn implicit_coef_symbol(input: &str) -> ParseResult<TermShape> {
    map(
        map_opt(rest, strip_unknown),
        |coefficient| TermShape::CoefSymbol {
            coefficient: omitted(coefficient),
        },
    )(input)
}

fn implicit_coef_symbol_power(input: &str) -> ParseResult<TermShape> {
    map(
        pair(take_until(POWER_MARKER), power),
        |(coefficient, exponent)| TermShape::CoefSymbolPower {
            coefficient: omitted(coefficient),
            exponent,
        },
    )(input)
}

/// `X^<exponent text>`, yielding the exponent text.
fn power(input: &str) -> ParseResult<&str> {
    preceded(pair(char(UNKNOWN), char('^')), rest)(input)
}

fn strip_unknown(text: &str) -> Option<&str> {
    text.strip_suffix(UNKNOWN)
}

fn omitted(coefficient: &str) -> Option<&str> {
    (!coefficient.is_empty()).then_some(coefficient)
}

/// Remove whitespace on either side of `+ - * ^`.
fn normalize_operators(text: &str) -> String {
    normalized(text)
        .map(|(_, normalized)| normalized)
        .unwrap_or_else(|_| text.to_string())
}

fn normalized(input: &str) -> ParseResult<String> {
    fold_many0(
        alt((operator, anychar)),
        String::new,
        |mut acc: String, c: char| {
            acc.push(c);
            acc
        },
    )(input)
}

fn operator(input: &str) -> ParseResult<char> {
    delimited(multispace0, one_of(OPERATORS), multispace0)(input)
}
