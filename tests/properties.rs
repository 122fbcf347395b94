//  Properties of `IntegerSet`, checked against `BTreeSet` as a model.

use std::collections::BTreeSet;

use integer_set::{IntegerSet, api::Combined};
use proptest::prelude::*;

/// Largest element generated. Spans several chunks, well below the default maximum.
const MAX_ELEMENT: u64 = 1_000;

/// Strategy: generate the elements of a set, possibly with duplicates.
fn arb_elements() -> impl Strategy<Value = Vec<u64>> {
    proptest::collection::vec(0..=MAX_ELEMENT, 0..64)
}

fn make_pair(elements: &[u64]) -> (IntegerSet, BTreeSet<u64>) {
    let set = IntegerSet::try_from_iter(elements.iter().copied()).expect("valid");
    let model = elements.iter().copied().collect();

    (set, model)
}

fn integer(combined: Combined<IntegerSet>) -> IntegerSet {
    combined.into_integer().expect("integer operand")
}

proptest! {
    #[test]
    fn add_then_contains(elements in arb_elements(), element in 0..=MAX_ELEMENT) {
        let (mut set, _) = make_pair(&elements);

        set.add(element).expect("valid");
        prop_assert!(set.contains(element));

        set.delete(element);
        prop_assert!(!set.contains(element));
    }

    #[test]
    fn len_matches_iteration(elements in arb_elements()) {
        let (set, model) = make_pair(&elements);

        prop_assert_eq!(model.len(), set.len());
        prop_assert_eq!(set.len(), set.iter().count());
        prop_assert_eq!(set.len(), set.iter().len());
        prop_assert_eq!(model.into_iter().collect::<Vec<_>>(), set.to_vec());
    }

    #[test]
    fn rebuild_from_iteration(elements in arb_elements()) {
        let (set, _) = make_pair(&elements);

        let rebuilt = IntegerSet::try_from_iter(set.iter()).expect("valid");

        prop_assert_eq!(&set, &rebuilt);
        prop_assert_eq!(set.chunks(), rebuilt.chunks());
    }

    #[test]
    fn union_is_bitwise_or(a in arb_elements(), b in arb_elements()) {
        let (a, _) = make_pair(&a);
        let (b, _) = make_pair(&b);

        let union = integer(a.union(&b).expect("valid"));

        let width = a.chunks().len().max(b.chunks().len());
        let chunk = |set: &IntegerSet, i: usize| set.chunks().get(i).map_or(0, |chunk| chunk.0);
        let expected: Vec<u64> = (0..width).map(|i| chunk(&a, i) | chunk(&b, i)).collect();

        prop_assert_eq!(expected, union.chunks().iter().map(|chunk| chunk.0).collect::<Vec<_>>());
    }

    #[test]
    fn algebra_matches_model(a in arb_elements(), b in arb_elements()) {
        let (set_a, model_a) = make_pair(&a);
        let (set_b, model_b) = make_pair(&b);

        prop_assert_eq!(&integer(set_a.union(&set_b).expect("valid")), &model_a.union(&model_b).copied().collect::<BTreeSet<_>>());
        prop_assert_eq!(&set_a.intersection(&set_b), &model_a.intersection(&model_b).copied().collect::<BTreeSet<_>>());
        prop_assert_eq!(&set_a.difference(&set_b), &model_a.difference(&model_b).copied().collect::<BTreeSet<_>>());
        prop_assert_eq!(
            &integer(set_a.symmetric_difference(&set_b).expect("valid")),
            &model_a.symmetric_difference(&model_b).copied().collect::<BTreeSet<_>>()
        );

        //  Foreign operands take the coercion path, and must agree.
        prop_assert_eq!(set_a.intersection(&model_b), set_a.intersection(&set_b));
        prop_assert_eq!(set_a.difference(&model_b), set_a.difference(&set_b));
        prop_assert_eq!(
            set_a.union(&model_b).expect("valid").into_integer(),
            Some(integer(set_a.union(&set_b).expect("valid")))
        );
    }

    #[test]
    fn subset_both_ways_is_equality(a in arb_elements(), b in arb_elements()) {
        let (a, _) = make_pair(&a);
        let (b, _) = make_pair(&b);

        let both = a.is_subset(&b).expect("set") && b.is_subset(&a).expect("set");

        prop_assert_eq!(a == b, both);
        prop_assert_eq!(a.is_superset(&b).expect("set"), b.is_subset(&a).expect("set"));
    }

    #[test]
    fn relations_match_model(a in arb_elements(), b in arb_elements()) {
        let (set_a, model_a) = make_pair(&a);
        let (set_b, model_b) = make_pair(&b);

        prop_assert_eq!(model_a.is_superset(&model_b), set_a.is_superset(&set_b).expect("set"));
        prop_assert_eq!(model_a.is_superset(&model_b), set_a.is_superset(&model_b).expect("set"));
        prop_assert_eq!(model_a.is_subset(&model_b), set_a.is_subset(&model_b).expect("set"));
        prop_assert_eq!(model_a.is_disjoint(&model_b), set_a.is_disjoint(&set_b).expect("set"));
        prop_assert_eq!(model_a.is_disjoint(&model_b), set_a.is_disjoint(&model_b).expect("set"));
        prop_assert_eq!(model_a == model_b, set_a.eq_set(&model_b));
    }

    #[test]
    fn range_matches_model(start in 0..=MAX_ELEMENT, len in 0..300u64, elements in arb_elements()) {
        let end = start + len;

        let range = IntegerSet::from_range(start..end).expect("valid");
        prop_assert_eq!((start..end).collect::<Vec<_>>(), range.to_vec());

        let (mut set, mut model) = make_pair(&elements);

        set.merge(start..=end).expect("valid");
        model.extend(start..=end);
        prop_assert_eq!(&set, &model);

        set.subtract(start..end);
        model.retain(|element| !(start..end).contains(element));
        prop_assert_eq!(&set, &model);
    }

    #[test]
    fn first_last_match_model(elements in arb_elements()) {
        let (set, model) = make_pair(&elements);

        prop_assert_eq!(model.first().copied(), set.first());
        prop_assert_eq!(model.last().copied(), set.last());
    }

    #[test]
    fn divide_by_distance_yields_runs(elements in arb_elements()) {
        let (set, _) = make_pair(&elements);

        let subsets = set.divide(|i, j| i.abs_diff(j) == 1);

        //  Each subset is a run of consecutive integers, and the subsets partition the set.
        let mut total = 0;

        for subset in &subsets {
            let (first, last) = (subset.first().expect("non-empty"), subset.last().expect("non-empty"));

            prop_assert_eq!(last - first + 1, subset.len() as u64);
            prop_assert!(!set.contains(last + 1));
            prop_assert!(first == 0 || !set.contains(first - 1));

            total += subset.len();
        }

        prop_assert_eq!(set.len(), total);
    }
}
