//! Bounding nesting depth with SlonOptions.
//!
//! Run with: cargo run --example custom_options

use slon::{parse_with_options, stringify_with_options, SlonOptions, Value};
use std::error::Error;

fn nested(depth: usize) -> String {
    format!("{}0{}", "[".repeat(depth), "]".repeat(depth))
}

fn main() -> Result<(), Box<dyn Error>> {
    let text = nested(10);

    let strict = SlonOptions::new().with_max_depth(4);
    match parse_with_options(&text, &strict) {
        Ok(_) => println!("depth 10 accepted with a limit of 4"),
        Err(err) => println!("limit 4: {}", err),
    }

    let value = parse_with_options(&text, &SlonOptions::new())?;
    println!("default limit: parsed {}", value);

    match stringify_with_options(&value, &strict) {
        Ok(out) => println!("stringified: {}", out),
        Err(err) => println!("limit 4 on output: {}", err),
    }

    let deep = nested(1000);
    let value: Value = parse_with_options(&deep, &SlonOptions::unlimited())?;
    println!("unlimited: parsed {} levels", deep.len() / 2);
    assert!(value.is_array());

    Ok(())
}
