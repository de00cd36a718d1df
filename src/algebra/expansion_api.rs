//! # Expansion API Module
//!
//! The front end of the expansion pipeline. It exposes the one pure entry
//! point, `expand`, plus the `GridExpansion` struct for callers that want the
//! configurable flavor: loglevel control, the multiplication-table pretty
//! printer and a statistics table.
//!
//! The pipeline underneath is strictly forward and stateless: parse both
//! texts, build the product grid, collect like terms, render the display
//! string. Re-invoking it with the same two input texts is a pure function
//! call, so a host surface may call it on every keystroke.
//!
///  Example#1
/// ```
///  use poly_grid::algebra::expansion_api::expand;
/// // the shortest way to expand a product of two binomials
/// let result = expand("x+2", "x+3");
/// assert_eq!(result.display, "x^2 + 5x + 6");
/// println!("(x+2)(x+3) = {}", result.display);
///  ```
/// Example#2
///  ```
///    // or more verbose way...
///     use poly_grid::algebra::expansion_api::GridExpansion;
///     let mut expansion_instanse = GridExpansion::new();
///     expansion_instanse.set_expressions("2x-1", "x+4");
///     expansion_instanse.loglevel = Some("off".to_string());
///     expansion_instanse.expand();
///     let result = expansion_instanse.get_result().unwrap();
///     assert_eq!(result.display, "2x^2 + 7x - 4");
///     println!("{}", expansion_instanse.pretty_print_grid());
///  ```
use crate::algebra::expansion_grid::build_grid;
use crate::algebra::parse_expr::parse_expression;
use crate::algebra::simplify_poly::{CanonicalPolynomial, collect_terms};
use crate::algebra::term_engine::{Expression, ProductCell};
use itertools::Itertools;
use log::info;
use simplelog::LevelFilter;
use simplelog::*;
use std::collections::HashMap;
use tabled::{builder::Builder, settings::Style};

/// Everything one pipeline invocation produces. The consuming presentation
/// layer must treat all three fields as read-only values produced fresh per
/// call.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpansionResult {
    /// row axis follows expression B, column axis follows expression A
    pub grid: Vec<Vec<ProductCell>>,
    /// like terms collected, descending powers, zero sums removed
    pub polynomial: CanonicalPolynomial,
    /// the polynomial rendered with the sign joining rules, `"0"` when empty
    pub display: String,
}

/// The pure entry point: two free texts in, grid + canonical polynomial +
/// display string out. Never fails; malformed chunks degrade to zero terms
/// and a fully-canceled product degrades to the literal `"0"` display.
pub fn expand(expression_1: &str, expression_2: &str) -> ExpansionResult {
    let parsed_1 = parse_expression(expression_1);
    let parsed_2 = parse_expression(expression_2);
    let grid = build_grid(&parsed_1, &parsed_2);
    let polynomial = collect_terms(grid.iter().flatten().map(|cell| cell.term));
    let display = polynomial.to_string();
    ExpansionResult {
        grid,
        polynomial,
        display,
    }
}

/// Configurable front end around [`expand`].
pub struct GridExpansion {
    pub expression_1: String, // first factor, free text
    pub expression_2: String, // second factor, free text
    pub parsed_1: Expression, // parsed form of the first factor
    pub parsed_2: Expression, // parsed form of the second factor
    pub result: Option<ExpansionResult>,

    pub loglevel: Option<String>,
    calc_statistics: HashMap<String, usize>,
}

impl GridExpansion {
    pub fn new() -> GridExpansion {
        GridExpansion {
            expression_1: String::new(),
            expression_2: String::new(),
            parsed_1: Expression::default(),
            parsed_2: Expression::default(),
            result: None,
            loglevel: None,
            calc_statistics: HashMap::new(),
        }
    }

    pub fn set_expressions(&mut self, expression_1: &str, expression_2: &str) {
        self.expression_1 = expression_1.to_string();
        self.expression_2 = expression_2.to_string();
        self.result = None;
    }

    // wrapper around the core function to implement logging
    pub fn expand(&mut self) -> Option<ExpansionResult> {
        let is_logging_disabled = self
            .loglevel
            .as_ref()
            .map(|level| level == "off" || level == "none")
            .unwrap_or(false);

        if is_logging_disabled {
            self.expansion_core()
        } else {
            let loglevel = self.loglevel.clone();
            let log_option = if let Some(level) = loglevel {
                match level.as_str() {
                    "debug" => LevelFilter::Info,
                    "info" => LevelFilter::Info,
                    "warn" => LevelFilter::Warn,
                    "error" => LevelFilter::Error,
                    _ => panic!("loglevel must be debug, info, warn or error"),
                }
            } else {
                LevelFilter::Info
            };
            let logger_instance = CombinedLogger::init(vec![TermLogger::new(
                log_option,
                Config::default(),
                TerminalMode::Mixed,
                ColorChoice::Auto,
            )]);

            match logger_instance {
                Ok(()) => {
                    let res = self.expansion_core();
                    info!(" \n \n expansion ended");
                    res
                }
                Err(_) => self.expansion_core(),
            }
        }
    }

    fn expansion_core(&mut self) -> Option<ExpansionResult> {
        self.parsed_1 = parse_expression(&self.expression_1);
        self.parsed_2 = parse_expression(&self.expression_2);
        info!(
            "parsed '{}' into [{}] and '{}' into [{}]",
            self.expression_1,
            self.parsed_1.terms.iter().join(", "),
            self.expression_2,
            self.parsed_2.terms.iter().join(", ")
        );

        let grid = build_grid(&self.parsed_1, &self.parsed_2);
        let polynomial = collect_terms(grid.iter().flatten().map(|cell| cell.term));
        let display = polynomial.to_string();
        info!("collected polynomial: {}", display);

        self.calc_statistics
            .insert("terms in expression 1".to_string(), self.parsed_1.len());
        self.calc_statistics
            .insert("terms in expression 2".to_string(), self.parsed_2.len());
        self.calc_statistics.insert(
            "grid cells".to_string(),
            grid.iter().map(|row| row.len()).sum(),
        );
        self.calc_statistics
            .insert("surviving terms".to_string(), polynomial.len());

        self.result = Some(ExpansionResult {
            grid,
            polynomial,
            display,
        });
        self.calc_statistics();
        self.get_result()
    }

    pub fn get_result(&self) -> Option<ExpansionResult> {
        self.result.clone()
    }

    /// Renders the multiplication table: `×` corner, expression A terms as
    /// column headers, expression B terms as row headers, signed products in
    /// the cells.
    pub fn pretty_print_grid(&self) -> String {
        let result = match self.result.as_ref() {
            Some(result) => result,
            None => return "nothing to print: run expand() first".to_string(),
        };

        let mut builder = Builder::default();
        let header: Vec<String> = std::iter::once("×".to_string())
            .chain(self.parsed_1.terms.iter().map(|term| term.to_string()))
            .collect();
        builder.push_record(header);
        for (row, row_term) in result.grid.iter().zip(self.parsed_2.terms.iter()) {
            let record: Vec<String> = std::iter::once(row_term.to_string())
                .chain(row.iter().map(|cell| cell.to_string()))
                .collect();
            builder.push_record(record);
        }
        let mut table = builder.build();
        table.with(Style::modern_rounded());
        table.to_string()
    }

    fn calc_statistics(&self) {
        let stats = self.calc_statistics.clone();
        let mut builder = Builder::default();
        for (name, value) in stats.iter().sorted() {
            builder.push_record([name.to_string(), value.to_string()]);
        }
        let mut table = builder.build();
        table.with(Style::modern_rounded());
        info!("\n \n EXPANSION STATISTICS \n \n {}", table.to_string());
    }
}

impl Default for GridExpansion {
    fn default() -> Self {
        Self::new()
    }
}
