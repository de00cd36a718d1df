//! # Like-Term Collection Module
//!
//! This module folds any stream of terms (usually the flattened product grid)
//! into a canonical polynomial: one coefficient per distinct
//! `(variable, power)` key, sorted strictly by descending power, with exact
//! zero sums removed.
//!
//! ## Collection Strategy
//!
//! 1. **Accumulate**: add each term's coefficient into a map entry keyed by
//!    `(variable, power)`, initializing unseen keys to zero
//! 2. **Zero Elimination**: drop every entry whose accumulated coefficient is
//!    exactly 0 (cancellation and recovered zero terms disappear here)
//! 3. **Canonical Ordering**: sort the survivors by descending power; the key
//!    already encodes the power, so no two entries of a single-symbol input
//!    can tie, and the variable name breaks ties deterministically for
//!    pathological multi-symbol input
//!
//! This is the step that turns the raw grid, which may contain several cells
//! landing on the same power, into one coefficient per power.

use crate::algebra::term_engine::{Term, render_sum};
use std::collections::HashMap;
use std::fmt;

/// The collected form of a set of terms: ordered by strictly descending
/// power, coefficients summed per `(variable, power)` key, zero sums removed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CanonicalPolynomial {
    pub terms: Vec<Term>,
}

impl CanonicalPolynomial {
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Numerical value of the polynomial at `x`.
    pub fn eval(&self, x: f64) -> f64 {
        self.terms.iter().map(|term| term.eval(x)).sum()
    }
}

/// Rendering uses the shared sign joining rule; a fully-canceled polynomial
/// renders as the literal `"0"`, never an empty string.
impl fmt::Display for CanonicalPolynomial {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", render_sum(&self.terms))
    }
}

/// Folds terms into their canonical polynomial.
///
///# Example
/// ```
/// use poly_grid::algebra::simplify_poly::collect_terms;
/// use poly_grid::algebra::term_engine::Term;
/// let collected = collect_terms(vec![
///     Term::new(2.0, Some('x'), 1),
///     Term::constant(6.0),
///     Term::new(3.0, Some('x'), 1),
/// ]);
/// assert_eq!(collected.to_string(), "5x + 6");
/// ```
pub fn collect_terms<I>(terms: I) -> CanonicalPolynomial
where
    I: IntoIterator<Item = Term>,
{
    let mut accumulator: HashMap<(Option<char>, u32), f64> = HashMap::new();
    for term in terms {
        *accumulator
            .entry((term.variable, term.power))
            .or_insert(0.0) += term.coefficient;
    }

    let mut collected: Vec<Term> = accumulator
        .into_iter()
        .filter(|(_, coefficient)| *coefficient != 0.0)
        .map(|((variable, power), coefficient)| Term::new(coefficient, variable, power))
        .collect();
    collected.sort_by(|p, q| q.power.cmp(&p.power).then(p.variable.cmp(&q.variable)));

    CanonicalPolynomial { terms: collected }
}
