//! Console benchmark comparing sequential and parallel bubble/merge sort on
//! independent copies of one random array.

use std::io::{self, Write};
use std::time::Instant;

use anyhow::Result;
use rand::Rng;

use parbench::input::Tokens;
use parbench::multicore_sort::{parallel_bubble_sort, parallel_merge_sort};
use parbench::single_core_sort::{bubble_sort, merge_sort};

const MAX_VALUE: i32 = 10_000;

fn main() -> Result<()> {
    let stdin = io::stdin();
    let mut tokens = Tokens::new(stdin.lock());

    print!("Enter array size: ");
    io::stdout().flush()?;
    let size: usize = tokens.next("the array size")?;

    let mut rng = rand::thread_rng();
    let original: Vec<i32> = (0..size).map(|_| rng.gen_range(0..MAX_VALUE)).collect();

    println!();
    run_sort("Sequential Bubble Sort", &original, bubble_sort);
    run_sort("Parallel Bubble Sort", &original, parallel_bubble_sort);
    println!();
    run_sort("Sequential Merge Sort", &original, merge_sort);
    run_sort("Parallel Merge Sort", &original, parallel_merge_sort);
    Ok(())
}

// Each variant sorts its own copy of the source array, so the timings are
// comparable.
fn run_sort(name: &str, original: &[i32], sort: impl Fn(&mut [i32])) {
    let mut arr = original.to_vec();
    let started = Instant::now();
    sort(&mut arr);
    let elapsed = started.elapsed();
    println!("{name} Time: {} ns", elapsed.as_nanos());
}
