// Trait aliasing for readibility
// https://stackoverflow.com/questions/26070559/is-there-any-way-to-create-a-type-alias-for-multiple-traits
pub trait SortTraits: Clone + Ord {}
impl<T: Clone + Ord> SortTraits for T {}

/// In-place bubble sort: adjacent compare-swap passes, each pass bubbling
/// the largest remaining value to the end. Stable, O(n²).
pub fn bubble_sort<T: SortTraits>(arr: &mut [T]) {
    let n = arr.len();
    if n < 2 {
        return;
    }
    for i in 0..n - 1 {
        for j in 0..n - i - 1 {
            if arr[j] > arr[j + 1] {
                arr.swap(j, j + 1);
            }
        }
    }
}

/// In-place recursive merge sort: sort each half, then merge. Stable,
/// O(n log n).
pub fn merge_sort<T: SortTraits>(arr: &mut [T]) {
    if arr.len() < 2 {
        return;
    }
    let mid = arr.len() / 2;
    let (left, right) = arr.split_at_mut(mid);
    merge_sort(left);
    merge_sort(right);
    merge_halves(arr, mid);
}

// Stable merge of the two already-sorted halves arr[..mid] and arr[mid..],
// through scratch buffers sized to each half. Ties take from the left half
// first to keep the merge stable.
pub(crate) fn merge_halves<T: SortTraits>(arr: &mut [T], mid: usize) {
    let left = arr[..mid].to_vec();
    let right = arr[mid..].to_vec();
    let mut id1 = 0;
    let mut id2 = 0;
    for slot in arr.iter_mut() {
        if id1 >= left.len() {
            *slot = right[id2].clone();
            id2 += 1;
        } else if id2 >= right.len() {
            *slot = left[id1].clone();
            id1 += 1;
        } else if left[id1] <= right[id2] {
            *slot = left[id1].clone();
            id1 += 1;
        } else {
            *slot = right[id2].clone();
            id2 += 1;
        }
    }
}
