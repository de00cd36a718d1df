//! examples of usage of poly_grid
/// Polynomial expansion examples
pub mod expansion_examples;
