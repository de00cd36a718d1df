// Copyright (c)  by Gleb E. Zaslavkiy
//MIT License
#![allow(non_snake_case)]

use crate::algebra::expansion_api::{GridExpansion, expand};
use crate::algebra::parse_expr::parse_expression;

#[allow(dead_code)]
pub fn expansion_examples(example: usize) {
    match example {
        0 => {
            // THE SHORTEST WAY
            // expand a product of two binomials from free text
            let result = expand("x+2", "x+3");
            println!("(x+2)(x+3) = {}", result.display);
            // the grid keeps every intermediate product, row axis follows the
            // second factor, column axis follows the first
            for row in &result.grid {
                for cell in row {
                    print!(" {} [{}]", cell, cell.class);
                }
                println!();
            }
            // the canonical polynomial is sorted by descending power
            println!("polynomial {:?}", result.polynomial.terms);
        }
        1 => {
            // ...OR MORE VERBOSE WAY
            // the struct flavor adds logging, statistics and a table printer
            let mut expansion_instanse = GridExpansion::new();
            expansion_instanse.set_expressions("2x-1", "x+4");
            expansion_instanse.loglevel = Some("info".to_string());
            expansion_instanse.expand();
            let result = expansion_instanse.get_result().unwrap();
            println!("(2x-1)(x+4) = {}", result.display);
            println!("{}", expansion_instanse.pretty_print_grid());
        }
        2 => {
            // LENIENT FREE TEXT
            // malformed chunks degrade to zero terms instead of failing, so
            // the pipeline always returns something renderable
            let result = expand("x+?", "x+2");
            println!("with a malformed chunk: {}", result.display);
            let result = expand("", "");
            println!("empty inputs: {}", result.display);
            // total cancellation degrades to the literal zero display
            let result = expand("x+1", "0x-0");
            println!("canceled: {}", result.display);
        }
        3 => {
            // NUMERIC CROSS-CHECK
            // substituting a value into the inputs and into the expansion
            // must agree - the strongest black-box correctness check
            let text_1 = "3x-4";
            let text_2 = "x+2";
            let result = expand(text_1, text_2);
            println!("({})({}) = {}", text_1, text_2, result.display);
            for v in [-2.0, -1.0, 0.0, 1.0, 2.0] {
                let product =
                    parse_expression(text_1).eval(v) * parse_expression(text_2).eval(v);
                let expanded = result.polynomial.eval(v);
                println!("v = {}: product {} expansion {}", v, product, expanded);
            }
        }
        _ => {
            println!("there is no example with number {}", example);
        }
    }
}
