//  Changes of the process-wide maximum.
//
//  The maximum is process-wide, and tests within a binary run concurrently: all checks live in a single test.

use std::collections::BTreeSet;

use integer_set::{
    IntegerSet,
    api::{Bound, BoundError, DomainError, SetLike},
};

#[test]
fn process_wide_maximum() {
    assert_eq!(Bound::DEFAULT, Bound::current());
    assert_eq!(Err(BoundError), Bound::set_current(0));

    //  Raising.
    let previous = Bound::set_current(2_000_000).expect("non-zero");
    assert_eq!(Bound::DEFAULT, previous);

    let mut set = IntegerSet::new();

    set.add(2_000_000).expect("valid");
    assert_eq!(
        Err(DomainError::OutOfRange {
            value: 2_000_001,
            maximum: 2_000_000
        }),
        set.insert(2_000_001)
    );

    //  Lowering does not remove elements, but hides them from membership.
    Bound::set_current(100).expect("non-zero");

    assert!(!set.contains(2_000_000));
    assert!(!set.contains_key(2_000_000));
    assert_eq!(vec![2_000_000], set.to_vec());
    assert!(!set.is_superset(&BTreeSet::from([2_000_000u32])).expect("set"));
    assert!(!set.intersects(&BTreeSet::from([2_000_000u32])).expect("set"));
    assert_eq!(Bound::new(100).expect("non-zero"), Bound::current());

    set.add(100).expect("valid");
    assert!(set.add(101).is_err());
    assert!(IntegerSet::from_range(0..=101).is_err());
    assert!(IntegerSet::try_from_iter([101]).is_err());

    let union = set.union(&[100][..]).expect("valid").into_integer().expect("integer");
    assert_eq!(vec![100, 2_000_000], union.to_vec());

    //  Removal ignores elements above the maximum.
    assert!(!set.remove(2_000_000));
    set.subtract(0..=3_000_000);
    assert_eq!(vec![2_000_000], set.to_vec());

    //  A foreign set with elements above the maximum is not coerced.
    let foreign = BTreeSet::from([1u32, 200]);
    let union = set.union(&foreign).expect("foreign");
    assert!(!union.is_integer());

    //  Raising the maximum again reveals the hidden elements.
    Bound::set_current(2_000_000).expect("non-zero");

    assert!(set.contains(2_000_000));
    assert!(set.remove(2_000_000));
    assert!(set.is_empty());

    Bound::set_current(Bound::DEFAULT_MAXIMUM).expect("non-zero");
    assert_eq!(Bound::DEFAULT, Bound::current());
}
