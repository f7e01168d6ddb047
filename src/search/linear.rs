//! Linear search: check each element in order until one matches.

/// Return the index of the first element equal to `target`, or `None`.
///
/// Best case examines one element, worst case every element.
///
/// ```
/// use algo_drills::search::linear::linear_search;
///
/// let arr = [11, 4, 30, 110, 20, 2, 70, 45];
/// assert_eq!(linear_search(&arr, &4), Some(1));
/// assert_eq!(linear_search(&arr, &40), None);
/// ```
pub fn linear_search<T: PartialEq>(s: &[T], target: &T) -> Option<usize> {
    linear_search_by(s, |elem| elem == target)
}

/// Return the index of the first element for which `matches` returns true.
///
/// Lets callers supply their own notion of equality, e.g. case-insensitive
/// string comparison or matching on a single field.
pub fn linear_search_by<T, F>(s: &[T], mut matches: F) -> Option<usize>
where
    F: FnMut(&T) -> bool,
{
    for (i, elem) in s.iter().enumerate() {
        if matches(elem) {
            return Some(i);
        }
    }
    None
}
