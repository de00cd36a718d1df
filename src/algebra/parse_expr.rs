//! a module turns a String expression into an ordered list of signed monomial
//! terms
//!
//! Input is live, unvalidated free text typed by an author or a learner, so
//! the parser is lenient by contract: it never fails. Whitespace is stripped,
//! the text is split into chunks at every `+` or `-` that is not the first
//! character (the `-` is retained as the next chunk's sign, a `+` is
//! discarded), and each chunk runs through a small explicit scanner:
//!
//! ```text
//!              chunk scan states
//!   [sign] -> [digit run] -> [letter] -> ['^' digit run]
//!     -2           2x            x             x^2
//! ```
//!
//! All parts are independently optional except that a chunk must contain a
//! digit run or a letter. A chunk matching none of the grammar degrades to the
//! zero constant term instead of aborting the parse of the rest of the
//! expression.

use crate::algebra::term_engine::{Expression, Term};
use log::warn;

/// Parses one input text into an ordered term list. Always returns a (possibly
/// degenerate) `Expression`; empty input yields an empty one.
///
///# Example
/// ```
/// use poly_grid::algebra::parse_expr::parse_expression;
/// let parsed = parse_expression("3x - 4");
/// assert_eq!(parsed.len(), 2);
/// assert_eq!(parsed.to_string(), "3x - 4");
/// ```
pub fn parse_expression(input: &str) -> Expression {
    let stripped: String = input.chars().filter(|c| !c.is_whitespace()).collect();

    let mut terms: Vec<Term> = Vec::new();
    let mut chunk = String::new();
    for (i, c) in stripped.chars().enumerate() {
        if (c == '+' || c == '-') && i > 0 {
            if !chunk.is_empty() {
                terms.push(parse_term(&chunk));
            }
            chunk.clear();
            // '-' is the next term's sign, '+' means implicit positive
            if c == '-' {
                chunk.push('-');
            }
        } else {
            chunk.push(c);
        }
    }
    if !chunk.is_empty() {
        terms.push(parse_term(&chunk));
    }

    Expression::new(terms)
}

/// Scans one chunk through the sign/digits/letter/caret-digits states and
/// assembles a term with the defaulting rules:
/// - missing coefficient with a variable present -> `1`, or `-1` for a `-` sign
/// - missing variable -> constant term with `power = 0`; a trailing `^digits`
///   on a variable-less chunk is ignored (constants carry no exponent)
/// - variable without an explicit `^power` -> `power = 1`
///
/// Anything that does not fully match the grammar recovers to the zero
/// constant term.
fn parse_term(chunk: &str) -> Term {
    let chars: Vec<char> = chunk.chars().collect();
    let mut pos = 0;

    // sign
    let mut negative = false;
    if pos < chars.len() && (chars[pos] == '+' || chars[pos] == '-') {
        negative = chars[pos] == '-';
        pos += 1;
    }

    // digit run, optional decimal point
    let digits_start = pos;
    while pos < chars.len() && (chars[pos].is_ascii_digit() || chars[pos] == '.') {
        pos += 1;
    }
    let digit_run: String = chars[digits_start..pos].iter().collect();

    // one letter, either case
    let mut variable: Option<char> = None;
    if pos < chars.len() && chars[pos].is_ascii_alphabetic() {
        variable = Some(chars[pos]);
        pos += 1;
    }

    // caret followed by a digit run
    let mut explicit_power: Option<u32> = None;
    if pos < chars.len() && chars[pos] == '^' {
        pos += 1;
        let power_start = pos;
        while pos < chars.len() && chars[pos].is_ascii_digit() {
            pos += 1;
        }
        let power_run: String = chars[power_start..pos].iter().collect();
        match power_run.parse::<u32>() {
            Ok(power) => explicit_power = Some(power),
            Err(_) => return recover(chunk),
        }
    }

    // trailing junk means the chunk matches none of the grammar
    if pos != chars.len() {
        return recover(chunk);
    }
    // a chunk must contain a digit run or a letter
    if digit_run.is_empty() && variable.is_none() {
        return recover(chunk);
    }

    let magnitude = if digit_run.is_empty() {
        1.0
    } else {
        match digit_run.parse::<f64>() {
            Ok(value) => value,
            Err(_) => return recover(chunk),
        }
    };
    let coefficient = if negative { -magnitude } else { magnitude };

    match variable {
        // constants carry no exponent, any parsed one is dropped
        None => Term::constant(coefficient),
        Some(v) => Term::new(coefficient, Some(v), explicit_power.unwrap_or(1)),
    }
}

fn recover(chunk: &str) -> Term {
    warn!("unparseable chunk '{}' recovered as zero term", chunk);
    Term::zero()
}
