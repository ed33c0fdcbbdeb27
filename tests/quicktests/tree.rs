use bst::Tree;

use std::collections::HashSet;

use quickcheck_macros::quickcheck;

use crate::Op;

/// Applies a set of operations to a tree and a hashset.
/// This way we can ensure that after a random smattering of inserts
/// and lookups we have the same set of items in both.
fn do_ops<T>(ops: &[Op<T>], bst: &mut Tree<T>, set: &mut HashSet<T>) -> bool
where
    T: std::hash::Hash + Eq + Clone + Ord,
{
    ops.iter().all(|op| match op {
        Op::Insert(x) => bst.insert(x.clone()) == set.insert(x.clone()),
        Op::Locate(x) => bst.locate(x).map(|node| node.item()) == set.get(x),
    })
}

/// Reads the items back out of a rendered tree.
fn rendered_items(tree: &Tree<i16>) -> Vec<i16> {
    let rendered = tree.to_string();
    rendered
        .trim_start_matches('<')
        .trim_end_matches('>')
        .split_whitespace()
        .map(|item| item.parse().unwrap())
        .collect()
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = HashSet::new();

    do_ops(&ops, &mut tree, &mut set) && tree.size() == set.len()
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }

    xs.iter().all(|x| tree.locate(x).map(|node| node.item()) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.locate(x).is_none())
}

#[quickcheck]
fn sorted_rendering(xs: Vec<i16>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    let items = rendered_items(&tree);

    items.windows(2).all(|pair| pair[0] < pair[1]) && items.len() == tree.size()
}

#[quickcheck]
fn size_counts_distinct_items(xs: Vec<i16>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let distinct: HashSet<_> = xs.into_iter().collect();

    tree.size() == distinct.len()
}

#[quickcheck]
fn height_bounds(xs: Vec<i16>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    let (size, height) = (tree.size(), tree.height());

    match size {
        0 | 1 => height == 0,
        n => height <= n - 1,
    }
}

#[quickcheck]
fn reinserting_changes_nothing(xs: Vec<i16>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    let before = (tree.to_string(), tree.height());

    let inserted_any = xs.iter().any(|x| tree.insert(*x));

    !inserted_any && before == (tree.to_string(), tree.height())
}
