use algo_drills::complexity::{add_up_to_closed_form, add_up_to_iterative, Complexity};
use proptest::prelude::*;

proptest! {
    #[test]
    fn loop_and_formula_agree(n in 0u64..20_000) {
        prop_assert_eq!(add_up_to_iterative(n), add_up_to_closed_form(n));
    }

    #[test]
    fn growth_is_monotone(a in 1usize..100_000, b in 1usize..100_000) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        for class in [
            Complexity::Constant,
            Complexity::Logarithmic,
            Complexity::Linear,
            Complexity::Quadratic,
        ] {
            prop_assert!(class.growth(lo) <= class.growth(hi));
        }
    }
}

#[test]
fn classes_are_ordered_at_scale() {
    let n = 1 << 16;
    assert!(Complexity::Constant.growth(n) < Complexity::Logarithmic.growth(n));
    assert!(Complexity::Logarithmic.growth(n) < Complexity::Linear.growth(n));
    assert!(Complexity::Linear.growth(n) < Complexity::Quadratic.growth(n));
}
