use median_bst::{Node, Tree};

use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a `BTreeSet`.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same set of keys in the same order.
fn do_ops<K>(ops: &[Op<K>], bst: &mut Tree<K>, set: &mut BTreeSet<K>)
where
    K: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(k) => {
                bst.insert(k.clone());
                set.insert(k.clone());
            }
            Op::Remove(k) => {
                bst.delete(k);
                set.remove(k);
            }
            Op::Rebalance => bst.rebalance(),
        }
    }
}

/// Whether every key is strictly between the bounds its ancestors impose.
fn ordered<K: Ord>(node: Option<&Node<K>>, low: Option<&K>, high: Option<&K>) -> bool {
    match node {
        None => true,
        Some(n) => {
            low.map_or(true, |low| low < n.key())
                && high.map_or(true, |high| n.key() < high)
                && ordered(n.left(), low, Some(n.key()))
                && ordered(n.right(), Some(n.key()), high)
        }
    }
}

fn keys(tree: &Tree<i8>) -> Vec<i8> {
    tree.iter().copied().collect()
}

quickcheck::quickcheck! {
    fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
        let mut tree = Tree::new();
        let mut set = BTreeSet::new();

        do_ops(&ops, &mut tree, &mut set);
        ordered(tree.root(), None, None)
            && tree.len() == set.len()
            && tree.iter().eq(set.iter())
    }

    fn contains(xs: Vec<i8>) -> bool {
        let tree = Tree::from_keys(xs.clone());

        xs.iter().all(|x| tree.contains(x))
    }

    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let mut tree = Tree::new();
        tree.extend(xs.iter().copied());
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| tree.find(x).is_none())
    }

    fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree = Tree::from_keys(xs.clone());
        for delete in &deletes {
            tree.delete(delete);
        }

        let mut still_present = xs;
        for delete in &deletes {
            // We may have inserted the same value multiple times - delete each one.
            while let Some(pos) = still_present.iter().position(|x| x == delete) {
                still_present.swap_remove(pos);
            }
        }

        deletes.iter().all(|x| tree.find(x).is_none())
            && still_present.iter().all(|x| tree.find(x).is_some())
            && ordered(tree.root(), None, None)
    }

    fn in_order_is_sorted_and_unique(xs: Vec<i8>, more: Vec<i8>) -> bool {
        let mut tree = Tree::from_keys(xs.clone());
        tree.extend(more.iter().copied());

        let expected: BTreeSet<_> = xs.into_iter().chain(more).collect();
        keys(&tree) == expected.into_iter().collect::<Vec<_>>()
    }

    fn rebalance_keeps_keys(xs: Vec<i8>, more: Vec<i8>) -> bool {
        let mut tree = Tree::from_keys(xs);
        tree.extend(more);
        let before = keys(&tree);

        tree.rebalance();
        tree.is_balanced() && keys(&tree) == before
    }

    fn reinserting_is_a_noop(xs: Vec<i8>) -> bool {
        let mut tree = Tree::from_keys(xs.clone());
        let shape: Vec<i8> = tree.level_order_iter().map(|n| *n.key()).collect();

        let none_inserted = xs.into_iter().all(|x| !tree.insert(x));
        let after: Vec<i8> = tree.level_order_iter().map(|n| *n.key()).collect();
        none_inserted && after == shape
    }

    fn deleting_absent_is_a_noop(xs: Vec<i8>, absent: i8) -> bool {
        let mut tree = Tree::from_keys(xs.into_iter().filter(|&x| x != absent));
        let shape: Vec<i8> = tree.pre_order_iter().map(|n| *n.key()).collect();

        tree.delete(&absent).is_none()
            && tree.pre_order_iter().map(|n| *n.key()).eq(shape)
    }

    fn every_node_has_a_depth(xs: Vec<i8>, more: Vec<i8>) -> bool {
        let mut tree = Tree::from_keys(xs);
        tree.extend(more);

        tree.level_order_iter().all(|n| {
            let depth = tree.depth(n);
            depth >= 0 && depth <= tree.height()
        })
    }
}
