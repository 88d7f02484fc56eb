//! Basic SLON serialization and deserialization.
//!
//! Run with: cargo run --example simple

use serde::{Deserialize, Serialize};
use slon::{from_str, to_string, DateTime};
use std::error::Error;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct User {
    id: u32,
    name: String,
    email: String,
    joined: DateTime,
}

fn main() -> Result<(), Box<dyn Error>> {
    let users = vec![
        User {
            id: 42,
            name: "Alice Johnson".to_string(),
            email: "alice@example.com".to_string(),
            joined: DateTime::new(2021, 6, 1, 9, 30, 0, 0),
        },
        User {
            id: 43,
            name: "Bob Smith".to_string(),
            email: "bob@example.com".to_string(),
            joined: DateTime::new(2022, 11, 15, 17, 5, 42, 250),
        },
    ];

    let text = to_string(&users)?;
    println!("SLON output:\n{}\n", text);

    let users_back: Vec<User> = from_str(&text)?;
    assert_eq!(users, users_back);
    println!("✓ Round-trip successful");

    // Hand-written input may use bare words and either quote style.
    let typed = "(id: 44, name: \"Carol\", email: carol@example.com, joined: 2023-01-02/03:04:05.006)";
    let carol: User = from_str(typed)?;
    println!("Parsed by hand: {:?}", carol);

    Ok(())
}
