//! # Term Engine Module
//!
//! This module provides the core value types for the polynomial expansion engine:
//! signed monomial terms, ordered term sequences parsed from free text, and the
//! tagged product cells that make up a two-factor multiplication grid.
//!
//! ## Purpose
//!
//! The term engine allows users to:
//! - Represent a single signed monomial "coefficient * variable^power"
//! - Multiply two terms into their product term (closed and total)
//! - Classify a term by degree for presentation purposes
//! - Evaluate terms and expressions numerically at a given point
//! - Render terms, expressions and grid cells as human-readable strings
//!
//! ## Main Structures and Methods
//!
//! ### `Term` Struct
//! The core monomial type:
//! - **coefficient**: `f64` - may legitimately be zero (malformed-token recovery,
//!   cancellation); such terms are valid values, not errors
//! - **variable**: `Option<char>` - single letter symbol, absent for constants
//! - **power**: `u32` - non-negative exponent; `power == 0` implies no variable
//!
//! ### Key Methods
//! - `multiply(other)` - pairwise product rule (also available as `*`)
//! - `degree_class()` - presentation tag derived from the resulting power
//! - `eval(x)` - numerical value of the term at `x`
//!
//! ## Interesting Code Features
//!
//! 1. **Operator Overloading**: Implements `std::ops::Mul` for natural
//!    mathematical syntax: `a * b`
//!
//! 2. **Invariant Enforcement in the Constructor**: `Term::new` drops the
//!    variable of any power-zero term, so `x^0` collapses to the constant `1`
//!
//! 3. **Sign-Aware Rendering**: the `Display` implementations own all elision
//!    rules (unit coefficients, implicit first exponent, constants without a
//!    variable), so every layer above prints terms the same way

use std::fmt;
use strum_macros::{Display, EnumString};

/// Presentation tag derived from a term's power. This is a hint for the
/// consuming rendering surface (cell coloring, legends); it carries no
/// algebraic meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
pub enum DegreeClass {
    /// power >= 2
    #[strum(serialize = "quadratic-class")]
    Quadratic,
    /// power == 1
    #[strum(serialize = "linear-class")]
    Linear,
    /// power == 0
    #[strum(serialize = "constant-class")]
    Constant,
}

impl DegreeClass {
    /// Classify a power value.
    pub fn from_power(power: u32) -> DegreeClass {
        match power {
            0 => DegreeClass::Constant,
            1 => DegreeClass::Linear,
            _ => DegreeClass::Quadratic,
        }
    }
}

/// A single signed monomial "coefficient * variable^power".
///
/// Invariant: `power == 0` implies `variable == None`; `Term::new` enforces it.
/// A zero coefficient is a legitimate value produced by malformed-token
/// recovery or by cancellation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Term {
    pub coefficient: f64,
    pub variable: Option<char>,
    pub power: u32,
}

impl Term {
    /// Creates a term, enforcing the power-zero invariant: a term with
    /// `power == 0` carries no variable, so `x^0` collapses to the constant `1`.
    pub fn new(coefficient: f64, variable: Option<char>, power: u32) -> Term {
        if power == 0 || variable.is_none() {
            Term {
                coefficient,
                variable: None,
                power: 0,
            }
        } else {
            Term {
                coefficient,
                variable,
                power,
            }
        }
    }

    /// Constant term with `power == 0` and no variable.
    pub fn constant(value: f64) -> Term {
        Term::new(value, None, 0)
    }

    /// The degenerate zero constant produced when an unparseable chunk is
    /// recovered instead of aborting the whole parse.
    pub fn zero() -> Term {
        Term::constant(0.0)
    }

    /// Checks if the term is exactly the zero constant.
    pub fn is_zero(&self) -> bool {
        self.coefficient == 0.0
    }

    /// Pairwise product rule: coefficients multiply, powers add. If exactly one
    /// operand carries a variable that symbol is used; if both do, the left
    /// operand's symbol wins (both expressions are assumed to use the same
    /// letter - see the module docs on the single-variable-symbol assumption).
    ///
    /// This operation is closed and total: it cannot fail for any two
    /// well-formed terms, including zero-coefficient ones.
    pub fn multiply(&self, other: &Term) -> Term {
        Term::new(
            self.coefficient * other.coefficient,
            self.variable.or(other.variable),
            self.power + other.power,
        )
    }

    /// Presentation tag for this term's power.
    pub fn degree_class(&self) -> DegreeClass {
        DegreeClass::from_power(self.power)
    }

    /// Numerical value of the term with `x` substituted for the variable.
    /// Constants evaluate to their coefficient.
    pub fn eval(&self, x: f64) -> f64 {
        self.coefficient * x.powi(self.power as i32)
    }

    /// Same term with the sign of the coefficient stripped. Used by the sign
    /// joining rule, where the minus glyph is emitted by the joiner and the
    /// magnitude by the term itself.
    pub fn abs(&self) -> Term {
        Term::new(self.coefficient.abs(), self.variable, self.power)
    }
}

impl std::ops::Mul for Term {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

/// Display implementation owning the per-term elision rules:
/// - coefficient `1` with a variable present - numeral omitted
/// - coefficient `-1` with a variable present - bare minus before the variable
/// - `power == 1` - exponent marker omitted
/// - `power == 0` - variable omitted, numeral alone
impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.variable {
            None => write!(f, "{}", self.coefficient),
            Some(variable) => {
                let var_part = if self.power == 1 {
                    format!("{}", variable)
                } else {
                    format!("{}^{}", variable, self.power)
                };
                if self.coefficient == 1.0 {
                    write!(f, "{}", var_part)
                } else if self.coefficient == -1.0 {
                    write!(f, "-{}", var_part)
                } else {
                    write!(f, "{}{}", self.coefficient, var_part)
                }
            }
        }
    }
}

/// An ordered sum of terms parsed from one input text. Order equals the order
/// the terms appeared in the source; it only matters for rendering, where the
/// first term never receives an explicit leading sign glyph.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Expression {
    pub terms: Vec<Term>,
}

impl Expression {
    pub fn new(terms: Vec<Term>) -> Expression {
        Expression { terms }
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Numerical value of the whole sum at `x`.
    pub fn eval(&self, x: f64) -> f64 {
        self.terms.iter().map(|term| term.eval(x)).sum()
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", render_sum(&self.terms))
    }
}

/// Joining rule shared by `Expression` and `CanonicalPolynomial` rendering:
/// the first term keeps its own sign and never gets a leading `+`; every later
/// term is joined with `" + "` when positive and `" - "` plus the magnitude
/// rendering when negative. An empty sequence renders as the literal `"0"`.
pub(crate) fn render_sum(terms: &[Term]) -> String {
    if terms.is_empty() {
        return "0".to_string();
    }
    let mut out = String::new();
    for (i, term) in terms.iter().enumerate() {
        if i == 0 {
            out.push_str(&term.to_string());
        } else if term.coefficient < 0.0 {
            out.push_str(" - ");
            out.push_str(&term.abs().to_string());
        } else {
            out.push_str(" + ");
            out.push_str(&term.to_string());
        }
    }
    out
}

/// A term produced by multiplying exactly one term of expression A by exactly
/// one term of expression B, tagged with its degree class. The tag is a
/// presentation hint only and is derived, never stored independently of the
/// term.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProductCell {
    pub term: Term,
    pub class: DegreeClass,
}

impl ProductCell {
    /// Builds the cell for column term `a` (from expression A) and row term
    /// `b` (from expression B).
    pub fn new(a: &Term, b: &Term) -> ProductCell {
        let term = a.multiply(b);
        ProductCell {
            term,
            class: term.degree_class(),
        }
    }
}

/// Grid cells print with an explicit leading `+` on positive values, the way
/// the multiplication table shows intermediate products; headers and the final
/// display never do.
impl fmt::Display for ProductCell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.term.coefficient < 0.0 {
            write!(f, "{}", self.term)
        } else {
            write!(f, "+{}", self.term)
        }
    }
}
