//! Basic stringify usage with derived structs.
//!
//! Run with: cargo run --example simple

use serde::Serialize;
use seqtools::{stringify, Stringify};

#[derive(Serialize)]
struct User {
    id: u32,
    name: String,
    email: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let users = vec![
        Some(User {
            id: 42,
            name: "Alice Johnson".to_string(),
            email: Some("alice@example.com".to_string()),
        }),
        None, // dropped from the output
        Some(User {
            id: 43,
            name: "Bob Smith".to_string(),
            email: None, // rendered as null
        }),
    ];

    println!("{}", stringify(Some(users))?);

    // The method form works on any iterable of serializable items.
    println!("{}", vec![1, 2, 3].stringify()?);

    // An absent sequence is a legal input and renders as nothing.
    println!("absent: {:?}", stringify(None::<Vec<User>>)?);

    Ok(())
}
