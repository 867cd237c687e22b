//! Side-by-side with serde_json, showing where the debug format differs
//! from strict JSON and how to close the gap.
//!
//! Run with: cargo run --example json_comparison

use serde::Serialize;
use seqtools::{to_string_with_options, StringifyOptions};

#[derive(Serialize)]
struct Log {
    level: String,
    message: String,
    attempt: u32,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let entry = Log {
        level: "warn".to_string(),
        message: "disk \"scratch\" almost full".to_string(),
        attempt: 3,
    };

    let debug_form = to_string_with_options(&entry, StringifyOptions::new())?;
    let escaped_form = to_string_with_options(&entry, StringifyOptions::escaped())?;
    let json_form = serde_json::to_string(&entry)?;

    println!("debug:   {debug_form}");
    println!("escaped: {escaped_form}");
    println!("json:    {json_form}");

    // The default form is for human eyes: the embedded quotes make it
    // unparseable as JSON. The escaped form round-trips.
    assert!(serde_json::from_str::<serde_json::Value>(&debug_form).is_err());
    assert!(serde_json::from_str::<serde_json::Value>(&escaped_form).is_ok());

    Ok(())
}
