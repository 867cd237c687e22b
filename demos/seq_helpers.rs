//! Tour of the null-safe sequence helpers.
//!
//! Run with: cargo run --example seq_helpers

use seqtools::{NullableSequenceExt, SequenceExt};

fn main() {
    let readings = vec![Some(17), None, Some(4), Some(25), None, Some(9)];

    // Drop the nulls, keep the order.
    let present = readings.non_nulls().ensure_vec();
    println!("present:  {present:?}");

    // Partition by a predicate into (matching, rest).
    let (low, high) = present.clone().split_by(|n| *n < 10);
    println!("low:      {low:?}");
    println!("high:     {high:?}");

    // Filter only when a runtime condition asks for it.
    let threshold_enabled = false;
    let filtered = present
        .clone()
        .filter_if(threshold_enabled, |n| *n > 10)
        .ensure_vec();
    println!("filtered: {filtered:?}");

    // Comparator ordering plus display joining.
    let line = present
        .clone()
        .sorted_by(|a, b| a.cmp(b))
        .join_with(" < ");
    println!("sorted:   {line}");

    // Indexed iteration.
    for (position, reading) in present.with_index() {
        println!("  #{position}: {reading}");
    }

    // Absent sequences are just empty.
    let absent: Option<Vec<i32>> = None;
    println!("absent is empty: {}", absent.is_none_or_empty());
}
