use std::cmp::Ordering;
use crate::search::SearchResult;

/// Iterative binary search by name, ignoring case.
///
/// `sorted_records` must be ordered ascending by the lowercase name. On unsorted input the
/// result is unspecified, but the search still terminates without panicking.
pub fn binary_search<T, F>(sorted_records: &[T], target: &str, name_of: F) -> SearchResult
    where F: Fn(&T) -> &str
{
    let target = target.to_lowercase();
    let mut steps = 0;
    // Half-open range; `mid` equals the inclusive `(left + right) / 2`.
    let mut left = 0;
    let mut right = sorted_records.len();
    while left < right {
        let mid = left + (right - left - 1) / 2;
        steps += 1;
        let mid_name = name_of(&sorted_records[mid]).to_lowercase();
        match mid_name.as_str().cmp(target.as_str()) {
            Ordering::Equal => return SearchResult::found(mid, steps),
            Ordering::Less => left = mid + 1,
            Ordering::Greater => right = mid,
        }
    }
    SearchResult::not_found(steps)
}

/// Records of a sequence sorted ascending by `key` whose key lies in `min..=max`.
///
/// The scan stops at the first key above `max`.
pub fn range_search<'a, T, K, F>(sorted_records: &'a [T], min: K, max: K, key: F) -> Vec<&'a T>
    where K: PartialOrd, F: Fn(&T) -> K
{
    let mut found = Vec::new();
    if min > max {
        return found;
    }
    for record in sorted_records {
        let value = key(record);
        if value > max {
            break;
        }
        if value >= min {
            found.push(record);
        }
    }
    found
}
