use bstree::{Error, Tree};

use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same elements in both.
fn do_ops<T>(ops: &[Op<T>], bst: &mut Tree<T>, set: &mut BTreeSet<T>)
where
    T: Ord + Clone + std::fmt::Debug,
{
    for op in ops {
        match op {
            Op::Insert(x) => {
                bst.insert(x.clone());
                set.insert(x.clone());
            }
            Op::Remove(x) => {
                bst.remove(x);
                set.remove(x);
            }
            Op::WalkBack => {
                let mut cursor = bst.end();
                let mut walked = Vec::new();
                while cursor.move_prev().is_ok() {
                    walked.push(cursor.get().cloned().unwrap());
                }
                assert!(walked.iter().eq(set.iter().rev()));
            }
        }
    }
}

fn build(xs: &[i8]) -> Tree<i8> {
    let mut tree = Tree::new();
    for x in xs {
        tree.insert(*x);
    }
    tree
}

quickcheck::quickcheck! {
    fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
        let mut tree = Tree::new();
        let mut set = BTreeSet::new();

        do_ops(&ops, &mut tree, &mut set);
        tree.len() == set.len() && tree.iter().eq(set.iter())
    }

    fn ascending_and_counted(xs: Vec<i8>) -> bool {
        let tree = build(&xs);
        let values: Vec<_> = tree.iter().copied().collect();

        values.windows(2).all(|w| w[0] < w[1]) && values.len() == tree.len()
    }

    fn front_and_back_are_extremes(xs: Vec<i8>) -> bool {
        let tree = build(&xs);

        tree.front() == xs.iter().min() && tree.back() == xs.iter().max()
    }

    fn reverse_walk_mirrors_forward_walk(xs: Vec<i8>) -> bool {
        let tree = build(&xs);
        let forward: Vec<_> = tree.iter().collect();
        let mut backward: Vec<_> = tree.iter().rev().collect();
        backward.reverse();

        forward == backward
    }

    fn duplicate_insert_changes_nothing(xs: Vec<i8>, dup: usize) -> bool {
        if xs.is_empty() {
            return true;
        }
        let mut tree = build(&xs);
        let before: Vec<_> = tree.iter().copied().collect();
        let inserted = tree.insert(xs[dup % xs.len()]);

        !inserted && tree.iter().copied().eq(before) && xs.iter().all(|x| tree.contains(x))
    }

    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let tree = build(&xs);
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| tree.find(x).is_end())
    }

    fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree = build(&xs);
        for delete in &deletes {
            tree.remove(delete);
        }

        let mut still_present = xs;
        for delete in &deletes {
            // We may have inserted the same value multiple times - delete each one.
            while let Some(pos) = still_present.iter().position(|x| x == delete) {
                still_present.swap_remove(pos);
            }
        }

        deletes.iter().all(|x| !tree.contains(x))
            && still_present.iter().all(|x| tree.contains(x))
    }

    fn copy_is_independent(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let tree = build(&xs);
        let mut copy = tree.clone();
        for delete in &deletes {
            copy.remove(delete);
        }

        let expected: BTreeSet<_> = xs.iter().copied().collect();
        let deleted: BTreeSet<_> = deletes.iter().copied().collect();
        let expected_copy: Vec<_> = expected.difference(&deleted).copied().collect();

        tree.iter().eq(expected.iter())
            && tree.len() == expected.len()
            && copy.iter().copied().eq(expected_copy.iter().copied())
            && copy.len() == expected_copy.len()
    }

    fn move_leaves_source_empty(xs: Vec<i8>) -> bool {
        let mut tree = build(&xs);
        let before: Vec<_> = tree.iter().copied().collect();
        let moved = tree.take();

        tree.is_empty() && tree.len() == 0 && moved.iter().copied().eq(before)
    }

    fn splice_is_a_union(xs: Vec<i8>, ys: Vec<i8>) -> bool {
        let mut a = build(&xs);
        let mut b = build(&ys);
        a.splice(&mut b);

        let xs: BTreeSet<_> = xs.into_iter().collect();
        let ys: BTreeSet<_> = ys.into_iter().collect();
        let union: Vec<_> = xs.union(&ys).copied().collect();
        let leftover: Vec<_> = if xs.is_empty() {
            Vec::new()
        } else {
            xs.intersection(&ys).copied().collect()
        };

        a.iter().copied().eq(union) && b.iter().copied().eq(leftover)
    }
}

#[test]
fn concrete_scenario() {
    let tree = build(&[5, 3, 8, 1, 4, 7, 9]);

    assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 3, 4, 5, 7, 8, 9]);
    assert_eq!(tree.front(), Some(&1));
    assert_eq!(tree.back(), Some(&9));
    assert_eq!(tree.find(&4).get(), Some(&4));
    assert_eq!(tree.find(&6), tree.end());
    assert_eq!(tree.len(), 7);
}

#[test]
fn empty_scenario() {
    let tree: Tree<i8> = Tree::new();

    assert!(tree.is_empty());
    assert_eq!(tree.begin(), tree.end());
}

#[test]
fn erase_only_accepts_live_positions_of_the_same_tree() {
    let mut tree = build(&[5, 3, 8]);
    let three = tree.find(&3).position();
    tree.remove(&3);
    tree.insert(100);
    assert_eq!(tree.erase(three), Err(Error::InvalidPosition));
    assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [5, 8, 100]);

    let other = build(&[1, 2, 3]);
    assert_eq!(tree.erase(other.find(&1).position()), Err(Error::InvalidPosition));
    assert_eq!(tree.len(), 3);
}
