//! Intervals command implementation.

use ohlcdash_lib::prelude::*;

/// List the supported request intervals.
pub(crate) fn list_intervals() {
    println!("{:<8} {:<12} {:>12}", "ID", "NAME", "SECONDS");
    println!("{}", "-".repeat(34));

    for interval in Interval::all() {
        println!(
            "{:<8} {:<12} {:>12}",
            interval.as_str(),
            interval.label(),
            interval.seconds()
        );
    }

    println!("\nTotal: {} intervals", Interval::all().len());
}
