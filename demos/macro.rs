//! Using the slon! macro for dynamic value construction.
//!
//! Run with: cargo run --example macro

use slon::{slon, stringify, Value};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let null_val = slon!(null);
    let bool_val = slon!(true);
    let number = slon!(42);
    let text = slon!("Hello, SLON!");

    println!("Primitives:");
    println!("  null:   {}", stringify(&null_val)?);
    println!("  bool:   {}", stringify(&bool_val)?);
    println!("  number: {}", stringify(&number)?);
    println!("  text:   {}\n", stringify(&text)?);

    let numbers = slon!([1, 2, 3, 4, 5]);
    let mixed = slon!([1, "two", true, null]);

    println!("Arrays:");
    println!("  Numbers: {}", stringify(&numbers)?);
    println!("  Mixed:   {}\n", stringify(&mixed)?);

    let config = slon!({
        "app": {
            "name": "MyApp",
            "version": "1.0.0"
        },
        "database": {
            "host": "localhost",
            "port": 5432
        },
        "features": ["auth", "logging", "metrics"],
        "debug": true
    });

    println!("Nested structures:");
    println!("{}\n", stringify(&config)?);

    let items = vec![
        slon!({"id": 1, "status": "active"}),
        slon!({"id": 2, "status": "pending"}),
    ];

    let summary = slon!({
        "total": 2,
        "items": items
    });

    println!("Dynamic construction:");
    println!("{}\n", stringify(&summary)?);

    if let Value::Object(obj) = &config {
        if let Some(Value::Object(app)) = obj.get("app") {
            if let Some(name) = app.get("name").and_then(|v| v.as_str()) {
                println!("App name: {}", name);
            }
        }
    }

    Ok(())
}
