//! Property-based tests for `add_range` laws.
//!
//! These tests verify that bulk insertion behaves like set union no matter
//! which shape the source has.

use std::collections::{BTreeSet, HashSet, VecDeque};

use hashset_ext::prelude::*;
use proptest::prelude::*;

fn naive_union(initial: &[i32], items: &[i32]) -> HashSet<i32> {
    let mut set: HashSet<i32> = initial.iter().copied().collect();
    for item in items {
        set.insert(*item);
    }
    set
}

// =============================================================================
// Union Law
// Description: the result is the union of the prior contents and the source
// =============================================================================

proptest! {
    #[test]
    fn prop_union_law(
        initial in prop::collection::vec(any::<i32>(), 0..40),
        items in prop::collection::vec(any::<i32>(), 0..40)
    ) {
        let mut set: HashSet<i32> = initial.iter().copied().collect();
        set.add_range(&items);

        let expected: HashSet<i32> = initial.iter().chain(items.iter()).copied().collect();
        prop_assert_eq!(set, expected);
    }
}

// =============================================================================
// Idempotence Law
// Description: adding the same source twice equals adding it once
// =============================================================================

proptest! {
    #[test]
    fn prop_idempotence_law(
        initial in prop::collection::vec(any::<i32>(), 0..40),
        items in prop::collection::vec(any::<i32>(), 0..40)
    ) {
        let mut once: HashSet<i32> = initial.iter().copied().collect();
        once.add_range(&items);

        let mut twice = once.clone();
        twice.add_range(&items);

        prop_assert_eq!(once, twice);
    }
}

// =============================================================================
// Order Independence Law
// Description: permuting the source does not change the result
// =============================================================================

proptest! {
    #[test]
    fn prop_order_independence_law(
        initial in prop::collection::vec(any::<i32>(), 0..20),
        items in prop::collection::vec(any::<i32>(), 0..40)
            .prop_flat_map(|items| (Just(items.clone()), Just(items).prop_shuffle()))
    ) {
        let (original, shuffled) = items;

        let mut left: HashSet<i32> = initial.iter().copied().collect();
        left.add_range(original);

        let mut right: HashSet<i32> = initial.iter().copied().collect();
        right.add_range(shuffled);

        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Fast Path Equivalence Law
// Description: every shape yields the same set as the naive insert loop
// =============================================================================

proptest! {
    #[test]
    fn prop_fast_path_equivalence_law(
        initial in prop::collection::vec(-50..50i32, 0..30),
        items in prop::collection::vec(-50..50i32, 0..60)
    ) {
        let expected = naive_union(&initial, &items);
        let fresh = || -> HashSet<i32> { initial.iter().copied().collect() };

        let mut from_slice = fresh();
        from_slice.add_range(items.as_slice());
        prop_assert_eq!(&from_slice, &expected);

        let mut from_boxed = fresh();
        from_boxed.add_range(items.clone().into_boxed_slice());
        prop_assert_eq!(&from_boxed, &expected);

        let mut from_deque = fresh();
        from_deque.add_range(items.iter().copied().collect::<VecDeque<i32>>());
        prop_assert_eq!(&from_deque, &expected);

        let mut from_btree = fresh();
        from_btree.add_range(&items.iter().copied().collect::<BTreeSet<i32>>());
        prop_assert_eq!(&from_btree, &expected);

        let mut from_counted = fresh();
        from_counted.add_range(sequence(items.iter().copied()));
        prop_assert_eq!(&from_counted, &expected);

        let mut from_unknown = fresh();
        from_unknown.add_range(sequence(items.iter().copied().filter(|_| true)));
        prop_assert_eq!(&from_unknown, &expected);
    }
}

// =============================================================================
// Target Independence Law
// Description: a B-tree target holds the same elements as a hash target
// =============================================================================

proptest! {
    #[test]
    fn prop_target_independence_law(
        initial in prop::collection::vec(any::<i32>(), 0..30),
        items in prop::collection::vec(any::<i32>(), 0..30)
    ) {
        let mut hash_target: HashSet<i32> = initial.iter().copied().collect();
        hash_target.add_range(&items);

        let mut btree_target: BTreeSet<i32> = initial.iter().copied().collect();
        btree_target.add_range(&items);

        let hash_sorted: BTreeSet<i32> = hash_target.into_iter().collect();
        prop_assert_eq!(hash_sorted, btree_target);
    }
}

// =============================================================================
// Absent Argument Law
// Description: a rejected call never mutates the set
// =============================================================================

proptest! {
    #[test]
    fn prop_absent_items_never_mutates(initial in prop::collection::vec(any::<i32>(), 0..30)) {
        let mut set: HashSet<i32> = initial.iter().copied().collect();
        let before = set.clone();

        let result = try_add_range(Some(&mut set), None::<Vec<i32>>);

        prop_assert_eq!(result, Err(AddRangeError::InvalidArgument { parameter: "items" }));
        prop_assert_eq!(set, before);
    }
}
