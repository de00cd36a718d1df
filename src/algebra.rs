#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
/// a module turns a String expression into an ordered list of signed monomial
/// terms
///
///# Example
/// ```
/// use poly_grid::algebra::parse_expr::parse_expression;
/// let input = "3x - 4"; // free text, whitespace and malformed chunks tolerated
/// let parsed_expression = parse_expression(input);
/// println!(" parsed_expression {}", parsed_expression);
/// assert_eq!(parsed_expression.to_string(), "3x - 4");
/// ```
/// ________________________________________________________________________________________________________________________________
pub mod parse_expr;
///____________________________________________________________________________________________________________________________
/// # Term engine
/// a module
/// 1) represents a signed monomial term "coefficient * variable^power"
/// 2) multiplies two terms into their product term
/// 3) classifies terms by degree and renders them back into strings
///# Example#
/// ```
/// use poly_grid::algebra::term_engine::Term;
/// let a = Term::new(3.0, Some('x'), 1);
/// let b = Term::new(-2.0, Some('x'), 1);
/// let product = a * b;
/// println!(" product {}", product);
/// assert_eq!(product.to_string(), "-6x^2");
/// // evaluate the product numerically
/// assert_eq!(product.eval(2.0), -24.0);
/// ```
/// ________________________________________________________________________________________________________________________________________________
pub mod term_engine;
///________________________________________________________________________________________________________________________________________________
///
/// build the two-factor multiplication grid and collect it into a canonical
/// polynomial
/// Example#
/// ```
/// use poly_grid::algebra::expansion_grid::build_grid;
/// use poly_grid::algebra::parse_expr::parse_expression;
/// use poly_grid::algebra::simplify_poly::collect_terms;
/// let a = parse_expression("x+2");
/// let b = parse_expression("x+3");
/// // rows follow the second factor, columns follow the first
/// let grid = build_grid(&a, &b);
/// // fold every product cell into one coefficient per power
/// let polynomial = collect_terms(grid.iter().flatten().map(|cell| cell.term));
/// println!("collected: {}", polynomial);
/// assert_eq!(polynomial.to_string(), "x^2 + 5x + 6");
/// ```
pub mod expansion_grid;
pub mod simplify_poly;
///______________________________________________________________________________________________________________________________________________
/// the front end of the pipeline: the pure `expand` entry point and the
/// configurable `GridExpansion` struct with logging and table pretty-printing
/// _____________________________________________________________________________________________________________________________________________
pub mod expansion_api;
pub mod expansion_tests;
