use algo_drills::{
    binary_search, count_occurrences, count_occurrences_in, linear_search, max_subarray_sum,
    max_window, same_squared, zero_sum_pair_indices, AlgoError,
};
use proptest::prelude::*;

fn brute_max_window(s: &[i64], width: usize) -> Option<i64> {
    if width == 0 || width > s.len() {
        return None;
    }
    s.windows(width).map(|w| w.iter().sum::<i64>()).max()
}

fn brute_count(h: &[u8], n: &[u8]) -> usize {
    if n.len() > h.len() {
        return 0;
    }
    (0..=h.len() - n.len())
        .filter(|&i| &h[i..i + n.len()] == n)
        .count()
}

fn brute_has_zero_pair(s: &[i32]) -> bool {
    for i in 0..s.len() {
        for j in (i + 1)..s.len() {
            if s[i] + s[j] == 0 {
                return true;
            }
        }
    }
    false
}

fn brute_same_squared(a: &[i32], b: &[i32]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut squares: Vec<i64> = a.iter().map(|&x| (x as i64) * (x as i64)).collect();
    let mut other: Vec<i64> = b.iter().map(|&x| x as i64).collect();
    squares.sort_unstable();
    other.sort_unstable();
    squares == other
}

proptest! {
    #[test]
    fn sliding_window_matches_brute_force(
        s in prop::collection::vec(-1_000i64..1_000, 0..40),
        width in 0usize..45,
    ) {
        prop_assert_eq!(max_subarray_sum(&s, width), brute_max_window(&s, width));
    }

    #[test]
    fn max_window_points_at_its_sum(
        s in prop::collection::vec(-50i64..50, 1..30),
        width in 1usize..30,
    ) {
        match max_window(&s, width) {
            Ok(w) => {
                prop_assert_eq!(w.len(), width);
                prop_assert_eq!(w.slice(&s).iter().sum::<i64>(), w.sum);
                // No earlier window reaches the same sum.
                for start in 0..w.start {
                    let earlier: i64 = s[start..start + width].iter().sum();
                    prop_assert!(earlier < w.sum);
                }
            }
            Err(e) => {
                prop_assert!(width > s.len());
                prop_assert_eq!(e, AlgoError::WindowTooWide { width, len: s.len() });
            }
        }
    }

    #[test]
    fn substring_count_matches_brute_force(h in "[ab]{0,20}", n in "[ab]{1,4}") {
        prop_assert_eq!(
            count_occurrences(&h, &n),
            Ok(brute_count(h.as_bytes(), n.as_bytes()))
        );
    }

    #[test]
    fn generic_substring_count_matches_brute_force(
        h in prop::collection::vec(0u8..3, 0..30),
        n in prop::collection::vec(0u8..3, 1..4),
    ) {
        prop_assert_eq!(count_occurrences_in(&h, &n), Ok(brute_count(&h, &n)));
    }

    #[test]
    fn binary_search_agrees_with_linear_membership(
        mut s in prop::collection::vec(-100i32..100, 0..50),
        target in -110i32..110,
    ) {
        s.sort();
        let by_binary = binary_search(&s, &target);
        let by_linear = linear_search(&s, &target);
        prop_assert_eq!(by_binary.is_some(), by_linear.is_some());
        if let Some(i) = by_binary {
            prop_assert_eq!(s[i], target);
        }
    }

    #[test]
    fn zero_pair_found_iff_one_exists(mut s in prop::collection::vec(-30i32..30, 0..25)) {
        s.sort();
        let found = zero_sum_pair_indices(&s);
        prop_assert_eq!(found.is_some(), brute_has_zero_pair(&s));
        if let Some((i, j)) = found {
            prop_assert!(i < j);
            prop_assert_eq!(s[i] + s[j], 0);
        }
    }

    #[test]
    fn same_squared_matches_sorted_comparison(
        a in prop::collection::vec(-6i32..6, 0..8),
        b in prop::collection::vec(0i32..37, 0..8),
    ) {
        prop_assert_eq!(same_squared(&a, &b), brute_same_squared(&a, &b));
    }
}
