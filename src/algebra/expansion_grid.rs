//! two-factor multiplication grid construction
//!
//! The grid is the rectangular cross product of two parsed expressions: the
//! row axis follows expression B's term order, the column axis follows
//! expression A's term order, the conventional multiplication-table layout.
//! Zero-coefficient product cells are retained so the grid always has a dense,
//! uniform shape for the consuming presentation layer, even though the
//! collector later drops them from the canonical polynomial.

use crate::algebra::term_engine::{Expression, ProductCell};

/// Builds the product grid with `grid[i][j] = A[j] * B[i]`.
///
/// Always succeeds, including for single-term expressions (degenerate 1x1 or
/// 1xn grids) and for empty expressions (an empty grid).
///
///# Example
/// ```
/// use poly_grid::algebra::expansion_grid::build_grid;
/// use poly_grid::algebra::parse_expr::parse_expression;
/// let a = parse_expression("3");
/// let b = parse_expression("x+2");
/// let grid = build_grid(&a, &b);
/// assert_eq!(grid.len(), 2);        // rows follow B
/// assert_eq!(grid[0].len(), 1);     // columns follow A
/// ```
pub fn build_grid(a: &Expression, b: &Expression) -> Vec<Vec<ProductCell>> {
    b.terms
        .iter()
        .map(|row_term| {
            a.terms
                .iter()
                .map(|col_term| ProductCell::new(col_term, row_term))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::parse_expr::parse_expression;
    use crate::algebra::term_engine::{DegreeClass, Term};

    #[test]
    fn test_grid_shape_and_order() {
        let a = parse_expression("x+2");
        let b = parse_expression("x-3");
        let grid = build_grid(&a, &b);
        assert_eq!(grid.len(), 2);
        assert_eq!(grid[0].len(), 2);
        // row 0 is B[0] * A, row 1 is B[1] * A
        assert_eq!(grid[0][0].term, Term::new(1.0, Some('x'), 2));
        assert_eq!(grid[0][1].term, Term::new(2.0, Some('x'), 1));
        assert_eq!(grid[1][0].term, Term::new(-3.0, Some('x'), 1));
        assert_eq!(grid[1][1].term, Term::constant(-6.0));
    }

    #[test]
    fn test_degenerate_one_by_one() {
        let a = parse_expression("2x");
        let b = parse_expression("3x");
        let grid = build_grid(&a, &b);
        assert_eq!(grid.len(), 1);
        assert_eq!(grid[0].len(), 1);
        assert_eq!(grid[0][0].term, Term::new(6.0, Some('x'), 2));
        assert_eq!(grid[0][0].class, DegreeClass::Quadratic);
    }

    #[test]
    fn test_empty_expression_gives_empty_grid() {
        let a = parse_expression("");
        let b = parse_expression("x+1");
        assert!(build_grid(&b, &a).is_empty());
        assert!(build_grid(&a, &b).iter().all(|row| row.is_empty()));
    }

    #[test]
    fn test_zero_cells_are_retained() {
        // the malformed chunk degrades to a zero term but keeps its grid slot
        let a = parse_expression("x+?");
        let b = parse_expression("x");
        let grid = build_grid(&a, &b);
        assert_eq!(grid[0].len(), 2);
        assert!(grid[0][1].term.is_zero());
    }
}
