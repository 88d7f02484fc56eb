//! Working with Value for runtime flexibility.
//!
//! Run with: cargo run --example dynamic_values

use serde::{Deserialize, Serialize};
use slon::{parse, parse_object, stringify, to_value, Value};
use std::error::Error;

#[derive(Debug, Serialize, Deserialize)]
struct User {
    id: u32,
    name: String,
    roles: Vec<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let config = parse_object(
        "( host: localhost, port: 8080, features: [auth | logging | metrics], \
           debug: true, started: 2024-05-06/07:08:09.010 )",
    )?;

    if let Some(Value::String(host)) = config.get("host") {
        println!("host: {}", host);
    }
    if let Some(port) = config.get("port").and_then(Value::as_i64) {
        println!("port: {}", port);
    }
    if let Some(Value::Array(features)) = config.get("features") {
        println!("features: {} items", features.len());
    }
    if let Some(started) = config.get("started").and_then(Value::as_datetime) {
        println!("started: {}\n", started);
    }

    // Duplicate keys are kept; lookups see the last one.
    let doubled = parse("(level: 1, level: 2)")?;
    if let Value::Object(map) = &doubled {
        println!("entries: {}, level: {:?}", map.len(), map.get("level"));
        println!("canonical: {}\n", stringify(&doubled)?);
    }

    let user = User {
        id: 123,
        name: "Alice".to_string(),
        roles: vec!["admin".to_string(), "developer".to_string()],
    };

    let user_value = to_value(&user)?;
    println!("User as Value: {}\n", user_value);

    println!("Type checks:");
    println!("  is_object: {}", user_value.is_object());
    println!("  is_array:  {}", user_value.is_array());
    println!("  is_string: {}", user_value.is_string());

    match parse("(name: 'Alice', age: )") {
        Ok(_) => println!("unexpectedly parsed"),
        Err(err) => println!("\nError: {}", err),
    }

    Ok(())
}
