//! Opting into string escaping and a recursion bound.
//!
//! Run with: cargo run --example custom_options

use serde::Serialize;
use seqtools::{to_string_with_options, StringifyOptions};

#[derive(Serialize)]
struct Comment {
    author: String,
    body: String,
    replies: Vec<Comment>,
}

fn nested(depth: u32) -> Comment {
    let mut comment = Comment {
        author: "root".to_string(),
        body: "she said \"hi\"".to_string(),
        replies: vec![],
    };
    for level in 0..depth {
        comment = Comment {
            author: format!("user-{level}"),
            body: "reply".to_string(),
            replies: vec![comment],
        };
    }
    comment
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let comment = nested(2);

    // Default: string content is written verbatim, quotes included.
    println!("{}", to_string_with_options(&comment, StringifyOptions::new())?);

    // Escaped: output parses as JSON.
    println!(
        "{}",
        to_string_with_options(&comment, StringifyOptions::escaped())?
    );

    // A depth limit turns runaway nesting into a clean error.
    let deep = nested(50);
    let options = StringifyOptions::new().with_max_depth(10);
    match to_string_with_options(&deep, options) {
        Ok(_) => println!("formatted"),
        Err(err) => println!("rejected: {err}"),
    }

    Ok(())
}
