//! Demo: sorting, searching and the linear-time array patterns together.
//!
//! Run with:
//! `cargo run --example patterns`

use algo_drills::{binary_search, bubble_sort, max_window, same_squared, zero_sum_pair};

fn main() {
    let mut readings = vec![4, -2, 7, -7, 1, 3, -4, 2];
    let report = bubble_sort(&mut readings);
    println!("sorted: {readings:?}");
    println!(
        "bubble sort: {} passes, {} comparisons, {} swaps",
        report.passes, report.comparisons, report.swaps
    );

    match binary_search(&readings, &3) {
        Some(i) => println!("3 found at index {i}"),
        None => println!("3 not present"),
    }

    if let Some((a, b)) = zero_sum_pair(&readings) {
        println!("zero-sum pair: ({a}, {b})");
    }

    let series = [1, 2, 5, 2, 8, 1, 5];
    match max_window(&series, 2) {
        Ok(w) => println!(
            "best width-2 window: {:?} at [{}, {}) with sum {}",
            w.slice(&series),
            w.start,
            w.end,
            w.sum
        ),
        Err(err) => println!("no window: {err}"),
    }

    println!(
        "squares of [1, 2, 3] in [4, 1, 9]: {}",
        same_squared(&[1, 2, 3], &[4, 1, 9])
    );
}
