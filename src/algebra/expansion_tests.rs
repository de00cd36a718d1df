#![allow(unused_imports)]
use crate::algebra::expansion_api::expand;
use crate::algebra::parse_expr::parse_expression;
use crate::algebra::term_engine::{DegreeClass, Term};
//___________________________________TESTS____________________________________

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_idempotence() {
        let first = expand("3x-4", "x+2");
        let second = expand("3x-4", "x+2");
        assert_eq!(first.grid, second.grid);
        assert_eq!(first.polynomial, second.polynomial);
        assert_eq!(first.display, second.display);
    }

    #[test]
    fn test_term_multiplication_commutes() {
        let samples = vec![
            Term::new(3.0, Some('x'), 1),
            Term::new(-2.0, Some('x'), 2),
            Term::constant(4.0),
            Term::constant(-0.5),
            Term::zero(),
        ];
        for a in &samples {
            for b in &samples {
                assert_eq!(a.multiply(b), b.multiply(a));
            }
        }
    }

    // the strongest black-box check: substituting v into both inputs and
    // multiplying must match substituting v into the re-parsed display text
    #[test]
    fn test_distribution_cross_check() {
        let pairs = vec![
            ("x+2", "x+3"),
            ("2x-1", "x+4"),
            ("x-5", "x-5"),
            ("3", "x+2"),
            ("-x+2", "2x-3"),
            ("2.5x+1", "x-2"),
        ];
        let sample_values = [-3.0, -1.0, 0.0, 0.5, 2.0, 7.0];
        for (text_1, text_2) in pairs {
            let result = expand(text_1, text_2);
            let reparsed = parse_expression(&result.display);
            for v in sample_values {
                let product = parse_expression(text_1).eval(v) * parse_expression(text_2).eval(v);
                assert_relative_eq!(product, reparsed.eval(v), epsilon = 1e-9);
                assert_relative_eq!(product, result.polynomial.eval(v), epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_canonical_ordering() {
        let result = expand("x^2+x+1", "x^2-x+1");
        let powers: Vec<u32> = result.polynomial.terms.iter().map(|t| t.power).collect();
        let mut sorted = powers.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(powers, sorted);
        sorted.dedup();
        assert_eq!(powers.len(), sorted.len());
    }

    #[test]
    fn test_zero_collapse() {
        // (x+1)(x-1) = x^2 - 1, the linear contributions cancel exactly
        let result = expand("x+1", "x-1");
        assert!(result.polynomial.terms.iter().all(|t| t.power != 1));
        assert_eq!(result.display, "x^2 - 1");
        // the grid still holds all four cells
        assert_eq!(result.grid.len(), 2);
        assert_eq!(result.grid[0].len(), 2);
    }

    #[test]
    fn test_display_never_starts_with_plus() {
        for (a, b) in [
            ("x+2", "x+3"),
            ("-x+2", "x+1"),
            ("-2x-3", "-x-4"),
            ("", ""),
            ("?", "x"),
        ] {
            let result = expand(a, b);
            assert!(!result.display.starts_with('+'), "display '{}'", result.display);
        }
    }

    #[test]
    fn test_never_panics_on_adversarial_input() {
        let adversarial = ["", "++", "--", "?!", "x+", "^2", "2^", "x^y", "()", "  "];
        for a in adversarial {
            for b in adversarial {
                let result = expand(a, b);
                assert!(!result.display.is_empty());
            }
        }
    }

    #[test]
    fn test_scenario_two_binomials() {
        let result = expand("x+2", "x+3");
        assert_eq!(
            result.polynomial.terms,
            vec![
                Term::new(1.0, Some('x'), 2),
                Term::new(5.0, Some('x'), 1),
                Term::constant(6.0)
            ]
        );
        assert_eq!(result.display, "x^2 + 5x + 6");
    }

    #[test]
    fn test_scenario_signed_binomials() {
        let result = expand("2x-1", "x+4");
        assert_eq!(result.display, "2x^2 + 7x - 4");
    }

    #[test]
    fn test_scenario_perfect_square() {
        let result = expand("x-5", "x-5");
        assert_eq!(result.display, "x^2 - 10x + 25");
    }

    #[test]
    fn test_scenario_constant_times_binomial() {
        let result = expand("3", "x+2");
        // one column (A has one term), two rows (B has two)
        assert_eq!(result.grid.len(), 2);
        assert_eq!(result.grid[0].len(), 1);
        assert_eq!(result.display, "3x + 6");
    }

    #[test]
    fn test_scenario_empty_inputs() {
        let result = expand("", "");
        assert!(result.grid.is_empty());
        assert!(result.polynomial.is_empty());
        assert_eq!(result.display, "0");
    }

    #[test]
    fn test_negative_leading_term() {
        let result = expand("-x+2", "x+1");
        // (-x+2)(x+1) = -x^2 + x + 2
        assert_eq!(result.display, "-x^2 + x + 2");
    }

    #[test]
    fn test_degree_classes_in_grid() {
        let result = expand("x+2", "x+3");
        assert_eq!(result.grid[0][0].class, DegreeClass::Quadratic);
        assert_eq!(result.grid[0][1].class, DegreeClass::Linear);
        assert_eq!(result.grid[1][0].class, DegreeClass::Linear);
        assert_eq!(result.grid[1][1].class, DegreeClass::Constant);
    }

    #[test]
    fn test_malformed_chunk_degrades_to_zero_display() {
        // the malformed factor contributes only zero cells
        let result = expand("?", "x+2");
        assert_eq!(result.grid.len(), 2);
        assert_eq!(result.grid[0].len(), 1);
        assert_eq!(result.display, "0");
    }
}
