/// Shell sort with the halving gap sequence `n/2, n/4, .., 1`.
pub fn shell_sort<T, K, F>(records: &[T], key: F) -> Vec<T>
    where T: Clone, K: PartialOrd, F: Fn(&T) -> K
{
    let mut arr = records.to_vec();
    let n = arr.len();
    let mut gap = n / 2;
    while gap > 0 {
        for i in gap..n {
            let mut j = i;
            while j >= gap && key(&arr[j - gap]) > key(&arr[j]) {
                arr.swap(j - gap, j);
                j -= gap;
            }
        }
        gap /= 2;
    }
    arr
}
