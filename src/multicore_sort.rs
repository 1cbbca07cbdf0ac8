use rayon::prelude::*;

use crate::single_core_sort::merge_halves;

// Trait aliasing for readibility
// The parallel variants additionally need values to cross threads.
pub trait SortTraits: Clone + Ord + Send + Sync {}
impl<T: Clone + Ord + Send + Sync> SortTraits for T {}

/// Odd-even transposition sort, the parallel form of bubble sort.
///
/// Runs n phases. Even phases compare-swap the pairs (0,1), (2,3), ...;
/// odd phases the pairs (1,2), (3,4), ... . Pairs within a phase share no
/// index, so they are swapped in a parallel loop without locking; the
/// alternation is what guarantees a full ordering after n phases, since a
/// single phase can only fix inversions between the pairs it covers.
pub fn parallel_bubble_sort<T: SortTraits>(arr: &mut [T]) {
    let n = arr.len();
    if n < 2 {
        return;
    }
    for phase in 0..n {
        arr[phase % 2..].par_chunks_mut(2).for_each(|pair| {
            if pair.len() == 2 && pair[0] > pair[1] {
                pair.swap(0, 1);
            }
        });
    }
}

/// Fork-join parallel merge sort: the two halves are sorted as concurrent
/// rayon sections and joined before the merge.
///
/// Every recursive call forks, with no cutoff below which it falls back to
/// a sequential sort, so task overhead dominates on small partitions. That
/// is deliberate: the benchmark compares the uncapped fork-join shape, not
/// a tuned hybrid.
pub fn parallel_merge_sort<T: SortTraits>(arr: &mut [T]) {
    if arr.len() < 2 {
        return;
    }
    let mid = arr.len() / 2;
    let (left, right) = arr.split_at_mut(mid);
    rayon::join(|| parallel_merge_sort(left), || parallel_merge_sort(right));
    merge_halves(arr, mid);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::single_core_sort::merge_sort;

    #[test]
    fn parallel_bubble_sort_small_vec() {
        let mut vec = vec![5, 3, 1, 4, 2];
        parallel_bubble_sort(&mut vec);
        assert_eq!(vec, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn parallel_merge_sort_small_vec() {
        let mut vec = vec![15, 53, 1, 24, 25, 3];
        parallel_merge_sort(&mut vec);
        assert_eq!(vec, vec![1, 3, 15, 24, 25, 53]);
    }

    #[test]
    fn parallel_variants_match_the_sequential_sort() {
        // Fixed linear-congruential values, so the test is reproducible.
        let mut state: u64 = 0x2545_F491_4F6C_DD1D;
        let input: Vec<i32> = (0..512)
            .map(|_| {
                state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
                ((state >> 33) % 10_000) as i32
            })
            .collect();

        let mut expected = input.clone();
        merge_sort(&mut expected);

        let mut bubble = input.clone();
        parallel_bubble_sort(&mut bubble);
        assert_eq!(bubble, expected);

        let mut merge = input.clone();
        parallel_merge_sort(&mut merge);
        assert_eq!(merge, expected);
    }

    #[test]
    fn output_is_a_permutation_of_the_input() {
        let input = vec![9, 7, 7, 0, 3, 3, 3, 1];
        let mut sorted = input.clone();
        parallel_bubble_sort(&mut sorted);
        let mut expected = input.clone();
        expected.sort();
        assert_eq!(sorted, expected);
    }

    #[test]
    fn empty_and_single_element_are_no_ops() {
        let mut empty: Vec<i32> = Vec::new();
        parallel_bubble_sort(&mut empty);
        parallel_merge_sort(&mut empty);
        assert!(empty.is_empty());

        let mut one = vec![42];
        parallel_bubble_sort(&mut one);
        parallel_merge_sort(&mut one);
        assert_eq!(one, vec![42]);
    }
}
