//! An unbalanced BST. Items double as their own keys so there is no separate value stored
//! alongside them. Nothing is ever rebalanced or removed: the shape of the tree is decided
//! entirely by the order in which items are inserted.
//!
//! # Examples
//!
//! ```
//! use bst::tree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.locate(&1).is_none());
//!
//! assert!(tree.insert(1));
//! assert_eq!(tree.locate(&1).map(|node| node.item()), Some(&1));
//!
//! // Inserting an item that is already present leaves the tree alone.
//! assert!(!tree.insert(1));
//! assert_eq!(tree.size(), 1);
//! ```

use std::cmp::Ordering;
use std::fmt;

/// An owned, possibly empty, subtree.
type Link<T> = Option<Box<Node<T>>>;

/// A Binary Search Tree without any balancing. This can be used for inserting and locating
/// items and for measuring the shape that a sequence of inserts produced.
///
/// Every operation walks the tree with a loop or an explicit stack rather than recursing, so
/// degenerate trees (e.g. built from sorted input) cost time but never stack space.
pub struct Tree<T> {
    root: Link<T>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        // Detach every child before its parent goes away so that dropping a `Box<Node>` never
        // recurses into a long chain.
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    // TODO stack based Debug
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree").field("root", &self.root).finish()
    }
}

/// Renders the items in ascending order, each surrounded by a single space on either side and
/// the whole wrapped in angle brackets. Neighbouring items are therefore separated by two
/// spaces and an empty tree renders as `<>`.
///
/// # Examples
///
/// ```
/// use bst::tree::Tree;
///
/// let tree: Tree<i32> = [4, 1, 3, 5, 2].into_iter().collect();
/// assert_eq!(tree.to_string(), "< 1  2  3  4  5 >");
/// assert_eq!(Tree::<i32>::new().to_string(), "<>");
/// ```
impl<T> fmt::Display for Tree<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<")?;
        for item in self.in_order() {
            write!(f, " {} ", item)?;
        }
        f.write_str(">")
    }
}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for Tree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Returns `true` when nothing has been inserted yet.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts the given item into its ordered position. Returns `true` if a new node was
    /// attached and `false` if an equal item was already present, in which case the tree is
    /// left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(2));
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(2));
    /// assert_eq!(tree.size(), 2);
    /// ```
    pub fn insert(&mut self, item: T) -> bool
    where
        T: Ord,
    {
        let mut slot = &mut self.root;
        let mut depth = 0usize;
        while let Some(node) = slot {
            slot = match item.cmp(&node.item) {
                Ordering::Less => &mut node.left,
                Ordering::Equal => {
                    log::trace!("duplicate item at depth {}, nothing inserted", depth);
                    return false;
                }
                Ordering::Greater => &mut node.right,
            };
            depth += 1;
        }

        log::trace!("attaching new node at depth {}", depth);
        *slot = Some(Node::new_boxed(item));
        true
    }

    /// Potentially finds the node holding an item equal to the given one. Only the subtree
    /// the comparison points at is searched, so this takes `O(height)`. If no node holds an
    /// equal item, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::tree::Tree;
    ///
    /// let tree: Tree<i32> = [4, 1, 3, 5, 2].into_iter().collect();
    ///
    /// assert_eq!(tree.locate(&1).map(|node| *node.item()), Some(1));
    /// assert!(tree.locate(&6).is_none());
    /// ```
    pub fn locate(&self, item: &T) -> Option<&Node<T>>
    where
        T: Ord,
    {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match item.cmp(&node.item) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Equal => return Some(node),
                Ordering::Greater => node.right.as_deref(),
            };
        }

        None
    }

    /// Returns `true` if an item equal to the given one is in the tree.
    pub fn contains(&self, item: &T) -> bool
    where
        T: Ord,
    {
        self.locate(item).is_some()
    }

    /// Counts the nodes in the tree. Nothing is cached so this visits every node.
    pub fn size(&self) -> usize {
        let mut count = 0;
        let mut stack: Vec<&Node<T>> = self.root.as_deref().into_iter().collect();
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.left.as_deref());
            stack.extend(node.right.as_deref());
        }

        count
    }

    /// Gets the height of this tree: the number of edges on the longest path from the root
    /// down to a leaf. Both the empty tree and a tree with a single node have a height of 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.height(), 0);
    ///
    /// tree.insert(1);
    /// assert_eq!(tree.height(), 0);
    ///
    /// tree.insert(2);
    /// assert_eq!(tree.height(), 1);
    /// ```
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(&Node<T>, usize)> =
            self.root.as_deref().map(|root| (root, 0)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left.as_deref().map(|left| (left, depth + 1)));
            stack.extend(node.right.as_deref().map(|right| (right, depth + 1)));
        }

        height
    }

    /// Walks the items in ascending order.
    pub(crate) fn in_order(&self) -> InOrder<'_, T> {
        let mut walk = InOrder { stack: Vec::new() };
        walk.push_left_spine(self.root.as_deref());
        walk
    }
}

/// A `Node` holds one item and owns up to two children. Everything in its left subtree is
/// less than its item and everything in its right subtree is greater.
pub struct Node<T> {
    item: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> fmt::Debug for Node<T>
where
    T: fmt::Debug,
{
    // TODO stack based Debug
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("item", &self.item)
            .field("left", &self.left)
            .field("right", &self.right)
            .finish()
    }
}

impl<T> fmt::Display for Node<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.item, f)
    }
}

impl<T> Node<T> {
    fn new_boxed(item: T) -> Box<Self> {
        Box::new(Node {
            item,
            left: None,
            right: None,
        })
    }

    /// The item stored in this node.
    pub fn item(&self) -> &T {
        &self.item
    }
}

/// In-order walk over a tree's items using an explicit stack of pending ancestors.
pub(crate) struct InOrder<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> InOrder<'a, T> {
    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for InOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(&node.item)
    }
}
