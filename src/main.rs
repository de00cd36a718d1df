#![allow(non_snake_case)]
pub mod algebra;

use crate::algebra::expansion_api::{GridExpansion, expand};
use crate::algebra::parse_expr::parse_expression;

fn main() {
    let example = 1;
    match example {
        0 => {
            // EXPAND TWO FREE-TEXT EXPRESSIONS
            // parse both factors, build the multiplication grid, collect like
            // terms and render the result
            let result = expand("x+2", "x+3");
            println!("(x+2)(x+3) = {}", result.display);
            println!("grid rows {}, columns {}", result.grid.len(), result.grid[0].len());
            for row in &result.grid {
                for cell in row {
                    print!(" {} [{}]", cell, cell.class);
                }
                println!();
            }
            println!("polynomial {:?}", result.polynomial.terms);
        }
        1 => {
            // THE VERBOSE WAY, WITH LOGGING AND A TABLE
            let mut expansion_instanse = GridExpansion::new();
            expansion_instanse.set_expressions("2x-1", "x+4");
            expansion_instanse.loglevel = Some("info".to_string());
            expansion_instanse.expand();
            let result = expansion_instanse.get_result().unwrap();
            println!("(2x-1)(x+4) = {}", result.display);
            println!("{}", expansion_instanse.pretty_print_grid());
        }
        2 => {
            // ADVERSARIAL INPUT NEVER FAILS
            let result = expand("x+?", "x+2");
            println!("with a malformed chunk: {}", result.display);
            let result = expand("++", "");
            println!("pure punctuation: {}", result.display);
        }
        3 => {
            // NUMERIC CROSS-CHECK OF THE EXPANSION
            let text_1 = "x-5";
            let text_2 = "x-5";
            let result = expand(text_1, text_2);
            println!("({})({}) = {}", text_1, text_2, result.display);
            for v in [-2.0, 0.0, 3.0] {
                let product =
                    parse_expression(text_1).eval(v) * parse_expression(text_2).eval(v);
                println!("v = {}: product {} expansion {}", v, product, result.polynomial.eval(v));
            }
        }
        _ => {
            println!("there is no example with number {}", example);
        }
    }
}
