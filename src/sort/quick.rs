/// Functional quicksort around the middle element's key.
///
/// Records are split into less, equal and greater parts (each keeping input order), the outer
/// parts are sorted recursively and the three are concatenated. Keys that compare neither less
/// nor greater than the pivot (NaN, for instance) stay in the equal part, so no record is lost.
pub fn quick_sort<T, K, F>(records: &[T], key: F) -> Vec<T>
    where T: Clone, K: PartialOrd, F: Fn(&T) -> K
{
    sort_part(records, &key)
}

fn sort_part<T, K, F>(records: &[T], key: &F) -> Vec<T>
    where T: Clone, K: PartialOrd, F: Fn(&T) -> K
{
    if records.len() <= 1 {
        return records.to_vec();
    }
    let pivot = key(&records[records.len() / 2]);
    let mut less = Vec::new();
    let mut equal = Vec::new();
    let mut greater = Vec::new();
    for record in records {
        let value = key(record);
        if value < pivot {
            less.push(record.clone());
        } else if value > pivot {
            greater.push(record.clone());
        } else {
            equal.push(record.clone());
        }
    }

    let mut sorted = sort_part(&less, key);
    sorted.append(&mut equal);
    sorted.append(&mut sort_part(&greater, key));
    sorted
}
