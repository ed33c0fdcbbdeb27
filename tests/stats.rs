use bst::stats::{
    balanced_tree, max_possible_height, measure_heights, min_possible_height, random_tree,
    HeightsConfig, RAND_ITEM_BOUND,
};
use bst::Tree;
use rand::{rngs::StdRng, thread_rng, Rng, SeedableRng};

#[test]
fn hundred_random_trees_stay_in_bounds() {
    let mut rng = StdRng::seed_from_u64(2024);
    let config = HeightsConfig::default();

    let stats = measure_heights(&mut rng, &config).unwrap();

    assert_eq!(stats.trees, 100);
    assert!(stats.max <= 127);
    assert!(stats.min <= stats.mean && stats.mean <= stats.max);
    assert!(stats.min >= stats.min_possible());
    assert!(stats.max <= stats.max_possible());
    // 128 insertions from 0..300 leave ~105 distinct items. A random BST of that size has an
    // expected height around 12, far below the 104 of a chain.
    assert!(stats.mean <= 4 * min_possible_height(128));
}

#[test]
fn unseeded_random_trees() {
    let mut rng = thread_rng();

    for _ in 0..100 {
        let tree = random_tree(&mut rng, 128, RAND_ITEM_BOUND).unwrap();
        let size = tree.size();

        assert!(size <= 128);
        assert!(tree.height() >= min_possible_height(size));
        assert!(tree.height() <= max_possible_height(size));
    }
}

#[test]
fn random_items_stay_in_range() {
    let mut rng = StdRng::seed_from_u64(3);
    let tree = random_tree(&mut rng, 1000, 10).unwrap();

    assert_eq!(tree.size(), 10);
    assert_eq!(tree.to_string(), "< 0  1  2  3  4  5  6  7  8  9 >");
}

#[test]
fn sorted_input_is_the_worst_case() {
    let items: Vec<i32> = (0..128).collect();

    let chain: Tree<i32> = items.iter().copied().collect();
    let balanced = balanced_tree(&items);

    assert_eq!(chain.height(), max_possible_height(128));
    assert_eq!(balanced.height(), min_possible_height(128));
    assert_eq!(chain.to_string(), balanced.to_string());
}

#[test]
fn balanced_tree_from_random_items() {
    let mut rng = StdRng::seed_from_u64(11);
    let items: Vec<i32> = (0..500).map(|_| rng.gen_range(-1000..1000)).collect();

    let random: Tree<i32> = items.iter().copied().collect();
    let balanced = balanced_tree(&items);

    assert_eq!(random.size(), balanced.size());
    assert_eq!(random.to_string(), balanced.to_string());
    assert_eq!(balanced.height(), min_possible_height(balanced.size()));
    assert!(balanced.height() <= random.height());
}
