//! Building and formatting dynamic values with the value! macro.
//!
//! Run with: cargo run --example dynamic_values

use chrono::{TimeZone, Utc};
use seqtools::{stringify, to_value, value};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let joined = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();

    // Dates built as dynamic values render bare, like numbers and booleans.
    let member = value!({
        "Name": "Alice",
        "Age": 30,
        "Joined": (joined),
        "Teams": [
            { "Name": "ops", "Lead": true },
            { "Name": "dev", "Lead": false }
        ],
        "Manager": null
    });

    println!("{}", stringify(Some(vec![member]))?);

    // to_value converts any Serialize type into the same dynamic shape.
    let as_value = to_value(&vec![1, 2, 3])?;
    println!("{as_value}");

    Ok(())
}
