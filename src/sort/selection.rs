/// O(n²). Swaps the first minimum of the unsorted suffix into place on each pass.
pub fn selection_sort<T, K, F>(records: &[T], key: F) -> Vec<T>
    where T: Clone, K: PartialOrd, F: Fn(&T) -> K
{
    let mut arr = records.to_vec();
    let n = arr.len();
    for i in 0..n {
        let mut min_idx = i;
        for j in i + 1..n {
            if key(&arr[j]) < key(&arr[min_idx]) {
                min_idx = j;
            }
        }
        arr.swap(i, min_idx);
    }
    arr
}
