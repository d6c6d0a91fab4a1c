use bintree::BinaryTree;

use std::collections::{BTreeMap, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and to a map of value counts.
/// This way we can ensure that after a random smattering of adds
/// and removes we have the same multiset of values in both.
fn do_ops<T>(ops: &[Op<T>], tree: &mut BinaryTree<T>, counts: &mut BTreeMap<T, usize>)
where
    T: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Add(v) => {
                tree.add(v.clone());
                *counts.entry(v.clone()).or_default() += 1;
            }
            Op::Remove(v) => {
                tree.remove(v);
                counts.remove(v);
            }
        }
    }
}

fn sorted<T: Ord>(mut values: Vec<&T>) -> Vec<&T> {
    values.sort();
    values
}

quickcheck::quickcheck! {
    fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
        let mut tree = BinaryTree::new();
        let mut counts = BTreeMap::new();

        do_ops(&ops, &mut tree, &mut counts);
        counts.iter().all(|(value, count)| tree.count(value) == *count)
            && tree.size() == counts.values().sum::<usize>()
            && tree.verify().is_ok()
    }

    fn in_order_is_sorted(xs: Vec<i16>) -> bool {
        let tree: BinaryTree<_> = xs.iter().copied().collect();
        let values = tree.in_order();

        values.windows(2).all(|pair| pair[0] <= pair[1])
    }

    fn traversals_hold_same_values(ops: Vec<Op<i8>>) -> bool {
        let mut tree = BinaryTree::new();
        do_ops(&ops, &mut tree, &mut BTreeMap::new());

        let expected = tree.in_order();
        sorted(tree.pre_order()) == expected
            && sorted(tree.post_order()) == expected
            && sorted(tree.level_order()) == expected
    }

    fn contains(xs: Vec<i8>) -> bool {
        let tree: BinaryTree<_> = xs.iter().copied().collect();

        xs.iter().all(|x| tree.contains(x))
    }

    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let tree: BinaryTree<_> = xs.iter().copied().collect();
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| !tree.contains(x) && tree.count(x) == 0)
    }

    fn with_removals(xs: Vec<i8>, removes: Vec<i8>) -> bool {
        let mut tree: BinaryTree<_> = xs.iter().copied().collect();
        for remove in &removes {
            tree.remove(remove);
        }

        let mut still_present = xs;
        // We may have added the same value multiple times - all of them go.
        still_present.retain(|x| !removes.contains(x));

        removes.iter().all(|x| !tree.contains(x))
            && still_present.iter().all(|x| tree.contains(x))
            && tree.size() == still_present.len()
    }

    fn removing_missing_value_changes_nothing(xs: Vec<i8>, missing: i8) -> bool {
        let mut tree: BinaryTree<_> = xs.iter().copied().filter(|x| *x != missing).collect();
        let before = tree.clone();

        tree.remove(&missing);

        tree == before
            && tree.size() == before.size()
            && tree.height() == before.height()
            && tree.pre_order() == before.pre_order()
            && tree.level_order() == before.level_order()
    }

    fn height_and_emptiness_agree(ops: Vec<Op<i8>>) -> bool {
        let mut tree = BinaryTree::new();
        do_ops(&ops, &mut tree, &mut BTreeMap::new());

        (tree.height() == -1) == tree.empty()
            && (tree.height() == 0) == (tree.size() == 1)
            && tree.height() < tree.size() as isize
    }
}
