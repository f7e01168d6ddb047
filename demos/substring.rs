//! Demo: counting and locating needles with the naive matcher.
//!
//! Run with:
//! `cargo run --example substring`

use algo_drills::{count_occurrences, linear_search_by, AlgoError};

fn main() {
    let haystack = "lorie loled";
    for needle in ["lol", "lo", "l", "xyz", ""] {
        match count_occurrences(haystack, needle) {
            Ok(count) => println!("{needle:?} occurs {count} time(s) in {haystack:?}"),
            Err(AlgoError::EmptyNeedle) => println!("empty needle rejected"),
            Err(err) => println!("unexpected error: {err}"),
        }
    }

    let dragons = ["cool dragon", "angry dragon", "greedy dragon"];
    let first_angry = linear_search_by(&dragons, |d| d.starts_with("angry"));
    println!("first angry dragon at index {first_angry:?}");
}
