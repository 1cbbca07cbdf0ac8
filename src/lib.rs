//! Sequential vs. parallel renditions of classic algorithms: BFS and DFS
//! graph traversal, bubble sort and merge sort. The `single_core_*` modules
//! hold the sequential baselines, the `multicore_*` modules the parallel
//! variants built on rayon's fork-join constructs. Two binaries (`traversal`
//! and `sorting`) time the variants against each other from console input.

pub mod graph;
pub mod input;
pub mod multicore_sort;
pub mod multicore_traversal;
pub mod single_core_sort;
pub mod single_core_traversal;
