use crate::search::SearchResult;

/// Scans `records` in order and stops at the first one whose name equals `target`, ignoring case.
///
/// Every comparison counts as a step, the successful one included.
pub fn sequential_search<T, F>(records: &[T], target: &str, name_of: F) -> SearchResult
    where F: Fn(&T) -> &str
{
    let target = target.to_lowercase();
    let mut steps = 0;
    for (i, record) in records.iter().enumerate() {
        steps += 1;
        if name_of(record).to_lowercase() == target {
            return SearchResult::found(i, steps);
        }
    }
    SearchResult::not_found(steps)
}

/// Every record whose name contains `fragment`, ignoring case, in input order.
pub fn contains_search<'a, T, F>(records: &'a [T], fragment: &str, name_of: F) -> Vec<&'a T>
    where F: Fn(&T) -> &str
{
    let fragment = fragment.to_lowercase();
    records
        .iter()
        .filter(|record| name_of(*record).to_lowercase().contains(&fragment))
        .collect()
}
