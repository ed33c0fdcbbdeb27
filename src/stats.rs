//! Height measurements over randomly built trees.
//!
//! Random integers inserted one at a time produce trees whose expected height grows with
//! `O(lg N)`, even though nothing balances them. The helpers here build such trees, collect
//! their shapes and summarise the heights next to the best and worst heights possible.
//!
//! # Examples
//!
//! ```
//! use bst::stats::{measure_heights, HeightsConfig};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let config = HeightsConfig { nodes: 64, trees: 10, ..HeightsConfig::default() };
//!
//! let stats = measure_heights(&mut rng, &config).unwrap();
//! assert!(stats.min <= stats.mean && stats.mean <= stats.max);
//! assert!(stats.max < 64);
//! ```

use std::fmt;

use rand::Rng;
use thiserror::Error;

use crate::tree::Tree;

/// Random items are drawn from `0..RAND_ITEM_BOUND` unless configured otherwise.
pub const RAND_ITEM_BOUND: i32 = 300;

/// Reasons a height measurement can't be taken.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StatsError {
    /// Asked to summarise zero trees, so there is no minimum, maximum or mean.
    #[error("at least one tree is needed to measure heights")]
    NoTrees,
    /// The upper bound for random items leaves no items to draw.
    #[error("random items must be drawn from a non-empty range, got 0..{0}")]
    EmptyRange(i32),
}

/// How many random trees to build and what goes in them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeightsConfig {
    /// Insertions per tree. Duplicates collapse so trees may end up with fewer nodes.
    pub nodes: usize,
    /// How many trees to build.
    pub trees: usize,
    /// Exclusive upper bound of the random items.
    pub bound: i32,
}

impl Default for HeightsConfig {
    fn default() -> Self {
        Self {
            nodes: 128,
            trees: 100,
            bound: RAND_ITEM_BOUND,
        }
    }
}

/// Builds a tree from `nodes` insertions of items drawn uniformly from `0..bound`.
///
/// # Examples
///
/// ```
/// use bst::stats::random_tree;
///
/// let tree = random_tree(&mut rand::thread_rng(), 128, 300).unwrap();
/// assert!(tree.size() <= 128);
/// assert!(random_tree(&mut rand::thread_rng(), 128, 0).is_err());
/// ```
pub fn random_tree<R: Rng>(
    rng: &mut R,
    nodes: usize,
    bound: i32,
) -> Result<Tree<i32>, StatsError> {
    if bound <= 0 {
        return Err(StatsError::EmptyRange(bound));
    }

    Ok((0..nodes).map(|_| rng.gen_range(0..bound)).collect())
}

/// Builds the shallowest tree holding the given items by always inserting the middle of the
/// remaining sorted run before either half. Duplicates are dropped.
///
/// ```
/// use bst::stats::{balanced_tree, min_possible_height};
///
/// let items: Vec<i32> = (0..100).rev().collect();
/// let tree = balanced_tree(&items);
///
/// assert_eq!(tree.size(), 100);
/// assert_eq!(tree.height(), min_possible_height(100));
/// ```
pub fn balanced_tree<T>(items: &[T]) -> Tree<T>
where
    T: Ord + Clone,
{
    let mut sorted = items.to_vec();
    sorted.sort();
    sorted.dedup();

    let mut tree = Tree::new();
    let mut runs = vec![(0, sorted.len())];
    while let Some((start, end)) = runs.pop() {
        if start < end {
            let mid = start + (end - start) / 2;
            tree.insert(sorted[mid].clone());
            runs.push((mid + 1, end));
            runs.push((start, mid));
        }
    }

    tree
}

/// The smallest height any tree of `size` nodes can have, `floor(lg size)`.
pub fn min_possible_height(size: usize) -> usize {
    size.checked_ilog2().map_or(0, |h| h as usize)
}

/// The largest height any tree of `size` nodes can have: every node in one chain.
pub fn max_possible_height(size: usize) -> usize {
    size.saturating_sub(1)
}

/// The size and height of one measured tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TreeShape {
    /// Number of nodes.
    pub size: usize,
    /// Edges on the longest root to leaf path.
    pub height: usize,
}

impl TreeShape {
    /// Measures the given tree.
    pub fn of<T>(tree: &Tree<T>) -> Self {
        Self {
            size: tree.size(),
            height: tree.height(),
        }
    }
}

/// Summary of the heights of a batch of trees.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HeightStats {
    /// Number of trees measured.
    pub trees: usize,
    /// Tallest height observed.
    pub max: usize,
    /// Shortest height observed.
    pub min: usize,
    /// Mean height, truncated towards zero.
    pub mean: usize,
    /// Fewest nodes in any measured tree.
    pub smallest: usize,
    /// Most nodes in any measured tree.
    pub largest: usize,
}

impl HeightStats {
    /// Aggregates a batch of tree shapes. The minimum starts from the first shape rather than
    /// from zero so it is always a height that was actually observed.
    ///
    /// ```
    /// use bst::stats::{HeightStats, StatsError, TreeShape};
    ///
    /// let shapes = [
    ///     TreeShape { size: 5, height: 3 },
    ///     TreeShape { size: 4, height: 2 },
    ///     TreeShape { size: 5, height: 2 },
    /// ];
    /// let stats = HeightStats::from_shapes(shapes).unwrap();
    /// assert_eq!((stats.min, stats.max, stats.mean), (2, 3, 2));
    ///
    /// assert_eq!(HeightStats::from_shapes(std::iter::empty()), Err(StatsError::NoTrees));
    /// ```
    pub fn from_shapes<I>(shapes: I) -> Result<Self, StatsError>
    where
        I: IntoIterator<Item = TreeShape>,
    {
        let mut shapes = shapes.into_iter();
        let first = shapes.next().ok_or(StatsError::NoTrees)?;

        let mut stats = Self {
            trees: 1,
            max: first.height,
            min: first.height,
            mean: 0,
            smallest: first.size,
            largest: first.size,
        };
        let mut total = first.height;
        for shape in shapes {
            stats.trees += 1;
            stats.max = stats.max.max(shape.height);
            stats.min = stats.min.min(shape.height);
            stats.smallest = stats.smallest.min(shape.size);
            stats.largest = stats.largest.max(shape.size);
            total += shape.height;
        }
        stats.mean = total / stats.trees;

        Ok(stats)
    }

    /// No measured tree can be shorter than this.
    pub fn min_possible(&self) -> usize {
        min_possible_height(self.smallest)
    }

    /// No measured tree can be taller than this.
    pub fn max_possible(&self) -> usize {
        max_possible_height(self.largest)
    }
}

impl fmt::Display for HeightStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Maximum tree height: {}", self.max)?;
        writeln!(f, "Minimum tree height: {}", self.min)?;
        writeln!(f, "Mean tree height: {}", self.mean)?;
        writeln!(
            f,
            "Shallowest possible height: {} ({} nodes)",
            self.min_possible(),
            self.smallest
        )?;
        write!(
            f,
            "Deepest possible height: {} ({} nodes)",
            self.max_possible(),
            self.largest
        )
    }
}

/// Builds `config.trees` random trees and summarises their heights.
pub fn measure_heights<R: Rng>(
    rng: &mut R,
    config: &HeightsConfig,
) -> Result<HeightStats, StatsError> {
    log::debug!(
        "building {} trees of {} insertions from 0..{}",
        config.trees,
        config.nodes,
        config.bound
    );

    let shapes = (0..config.trees)
        .map(|_| {
            random_tree(&mut *rng, config.nodes, config.bound).map(|tree| TreeShape::of(&tree))
        })
        .collect::<Result<Vec<_>, _>>()?;
    let stats = HeightStats::from_shapes(shapes)?;

    log::info!(
        "heights over {} trees: min {}, max {}, mean {}",
        stats.trees,
        stats.min,
        stats.max,
        stats.mean
    );
    Ok(stats)
}
