use algo_drills::{
    binary_search, binary_search_by, checked_binary_search, linear_search, AlgoError,
};
use proptest::prelude::*;

fn probe_bound(n: usize) -> usize {
    if n == 0 {
        0
    } else {
        (usize::BITS - n.leading_zeros()) as usize
    }
}

proptest! {
    #[test]
    fn every_present_value_is_found(mut s in prop::collection::vec(any::<i32>(), 1..80)) {
        s.sort();
        for v in &s {
            let i = binary_search(&s, v);
            prop_assert!(i.is_some());
            prop_assert_eq!(&s[i.unwrap()], v);
        }
    }

    #[test]
    fn absent_values_are_not_found(
        s in prop::collection::btree_set(-500i32..500, 0..60),
        target in -600i32..600,
    ) {
        let s: Vec<i32> = s.into_iter().collect();
        prop_assume!(!s.contains(&target));
        prop_assert_eq!(binary_search(&s, &target), None);
    }

    #[test]
    fn probes_stay_logarithmic(len in 0usize..5_000, target in -10i64..5_010) {
        let s: Vec<i64> = (0..len as i64).collect();
        let mut probes = 0usize;
        let found = binary_search_by(&s, |e| {
            probes += 1;
            e.cmp(&target)
        });
        prop_assert!(probes <= probe_bound(len), "{} probes for len {}", probes, len);
        prop_assert_eq!(found.is_some(), (0..len as i64).contains(&target));
    }

    #[test]
    fn checked_search_flags_unsorted(s in prop::collection::vec(0u8..10, 2..30)) {
        let descent = s.windows(2).position(|w| w[0] > w[1]);
        match (checked_binary_search(&s, &5), descent) {
            (Err(AlgoError::Unsorted { index }), Some(d)) => prop_assert_eq!(index, d),
            (Ok(_), None) => {}
            (got, d) => prop_assert!(false, "got {:?} for descent {:?}", got, d),
        }
    }

    #[test]
    fn linear_search_returns_first_match(
        s in prop::collection::vec(0u8..6, 0..40),
        target in 0u8..6,
    ) {
        let expected = s.iter().position(|&x| x == target);
        prop_assert_eq!(linear_search(&s, &target), expected);
    }
}

#[test]
fn reverse_ordered_slice_with_reversed_comparator() {
    let s = [90, 70, 50, 30, 10];
    let idx = binary_search_by(&s, |e| 30.cmp(e));
    assert_eq!(idx, Some(3));
    assert_eq!(binary_search_by(&s, |e| 40.cmp(e)), None);
}
