//! A BST that only balances itself when asked to.
//!
//! Construction sorts and deduplicates the keys and builds the shortest possible tree. After
//! that, `insert` and `delete` keep the ordering invariant but never restructure the tree, so a
//! run of inserts on one side will skew it. [`Tree::is_balanced`] reports when that has happened
//! and [`Tree::rebalance`] rebuilds the shortest tree from the current keys.
//!
//! # Examples
//!
//! ```
//! use median_bst::Tree;
//!
//! let mut tree = Tree::from_keys(1..=7);
//! assert!(tree.is_balanced());
//! assert_eq!(tree.height(), 2);
//!
//! // Inserting in ascending order grows a single right-hand path.
//! for key in 8..=11 {
//!     tree.insert(key);
//! }
//! assert!(!tree.is_balanced());
//!
//! tree.rebalance();
//! assert!(tree.is_balanced());
//! assert!(tree.iter().copied().eq(1..=11));
//! ```

use std::fmt;

use tracing::{debug, instrument, trace};

use crate::error::{Error, Result, CALLBACK_REQUIRED};
use crate::node::{self, Link, Node};
use crate::pretty::Pretty;
use crate::traversal::{InOrder, LevelOrder, PostOrder, PreOrder};

/// A Binary Search Tree of unique keys.
#[derive(Clone)]
pub struct Tree<K> {
    root: Link<K>,
    len: usize,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> fmt::Debug for Tree<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("len", &self.len)
            .field("root", &self.root())
            .finish()
    }
}

impl<K> FromIterator<K> for Tree<K>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self::from_keys(iter)
    }
}

impl<K> Extend<K> for Tree<K>
where
    K: Ord,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a, K> IntoIterator for &'a Tree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K> Tree<K> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Builds a balanced tree holding every distinct key in `keys`. Duplicates are dropped and
    /// the order the keys arrive in doesn't matter.
    ///
    /// # Examples
    ///
    /// ```
    /// use median_bst::Tree;
    ///
    /// let tree = Tree::from_keys([3, 1, 2, 1]);
    /// let root = tree.root().unwrap();
    ///
    /// assert_eq!(tree.len(), 3);
    /// assert_eq!(root.key(), &2);
    /// assert_eq!(root.left().map(|n| *n.key()), Some(1));
    /// assert_eq!(root.right().map(|n| *n.key()), Some(3));
    /// ```
    pub fn from_keys<I>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Ord,
    {
        let mut keys: Vec<K> = keys.into_iter().collect();
        let received = keys.len();
        keys.sort_unstable();
        keys.dedup();
        debug!(received, unique = keys.len(), "building tree");

        Self::from_sorted(keys)
    }

    /// Builds the tree directly from keys that are strictly ascending.
    fn from_sorted(keys: Vec<K>) -> Self {
        let len = keys.len();
        Self {
            root: node::build_tree(keys),
            len,
        }
    }

    /// The number of keys in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The root node, or `None` for an empty tree.
    pub fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }

    /// Adds `key` to the tree and returns `true`, or returns `false` and leaves the tree alone if
    /// `key` is already present. The tree is not rebalanced.
    ///
    /// # Examples
    ///
    /// ```
    /// use median_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K) -> bool
    where
        K: Ord,
    {
        let inserted = node::insert(&mut self.root, key);
        if inserted {
            self.len += 1;
        } else {
            trace!("ignored duplicate key");
        }
        inserted
    }

    /// Removes `key` from the tree and returns it. If the tree doesn't contain `key`, nothing
    /// happens and `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use median_bst::Tree;
    ///
    /// let mut tree = Tree::from_keys([1, 2, 3]);
    ///
    /// assert_eq!(tree.delete(&2), Some(2));
    /// assert_eq!(tree.delete(&2), None);
    /// assert!(tree.iter().copied().eq([1, 3]));
    /// ```
    pub fn delete(&mut self, key: &K) -> Option<K>
    where
        K: Ord,
    {
        let deleted = node::delete(&mut self.root, key);
        if deleted.is_some() {
            self.len -= 1;
        } else {
            trace!("key to delete not found");
        }
        deleted
    }

    /// Potentially finds the node holding `key`. If no node has the key, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use median_bst::Tree;
    ///
    /// let tree = Tree::from_keys([1, 2, 3]);
    ///
    /// assert_eq!(tree.find(&3).map(|n| *n.key()), Some(3));
    /// assert!(tree.find(&42).is_none());
    /// ```
    pub fn find(&self, key: &K) -> Option<&Node<K>>
    where
        K: Ord,
    {
        node::find(self.root(), key)
    }

    /// Whether `key` is in the tree.
    pub fn contains(&self, key: &K) -> bool
    where
        K: Ord,
    {
        self.find(key).is_some()
    }

    /// Calls `visit` on every node breadth-first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `visit` is `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use median_bst::{Error, Node, Tree};
    ///
    /// let tree = Tree::from_keys(1..=7);
    ///
    /// let mut keys = Vec::new();
    /// tree.level_order(Some(|n: &Node<i32>| keys.push(*n.key()))).unwrap();
    /// assert_eq!(keys, [4, 2, 6, 1, 3, 5, 7]);
    ///
    /// let missing = tree.level_order(None::<fn(&Node<i32>)>);
    /// assert_eq!(missing, Err(Error::InvalidArgument("callback required")));
    /// ```
    pub fn level_order<F>(&self, visit: Option<F>) -> Result<()>
    where
        F: FnMut(&Node<K>),
    {
        visit_all(self.level_order_iter(), visit)
    }

    /// Calls `visit` on every node in ascending key order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `visit` is `None`.
    pub fn in_order<F>(&self, visit: Option<F>) -> Result<()>
    where
        F: FnMut(&Node<K>),
    {
        visit_all(self.in_order_iter(), visit)
    }

    /// Calls `visit` on every node before its subtrees.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `visit` is `None`.
    pub fn pre_order<F>(&self, visit: Option<F>) -> Result<()>
    where
        F: FnMut(&Node<K>),
    {
        visit_all(self.pre_order_iter(), visit)
    }

    /// Calls `visit` on every node after its subtrees.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `visit` is `None`.
    pub fn post_order<F>(&self, visit: Option<F>) -> Result<()>
    where
        F: FnMut(&Node<K>),
    {
        visit_all(self.post_order_iter(), visit)
    }

    /// Iterates over the nodes breadth-first.
    pub fn level_order_iter(&self) -> LevelOrder<'_, K> {
        LevelOrder::new(self.root())
    }

    /// Iterates over the nodes in ascending key order.
    pub fn in_order_iter(&self) -> InOrder<'_, K> {
        InOrder::new(self.root())
    }

    /// Iterates over the nodes, each before its subtrees.
    pub fn pre_order_iter(&self) -> PreOrder<'_, K> {
        PreOrder::new(self.root())
    }

    /// Iterates over the nodes, each after its subtrees.
    pub fn post_order_iter(&self) -> PostOrder<'_, K> {
        PostOrder::new(self.root())
    }

    /// Iterates over the keys in ascending order.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter(self.in_order_iter())
    }

    /// The height of the root: `-1` when empty, `0` for a single node.
    pub fn height(&self) -> isize {
        node::height(self.root())
    }

    /// The number of edges from the root down to `target`, or `-1` if `target` is not in this tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use median_bst::Tree;
    ///
    /// let tree = Tree::from_keys(1..=7);
    ///
    /// assert_eq!(tree.depth(tree.root().unwrap()), 0);
    /// assert_eq!(tree.depth(tree.find(&6).unwrap()), 1);
    /// assert_eq!(tree.depth(tree.find(&7).unwrap()), 2);
    /// ```
    pub fn depth(&self, target: &Node<K>) -> isize
    where
        K: Ord,
    {
        node::depth(target, self.root())
    }

    /// Whether, at every node, the heights of the two subtrees differ by at most one.
    pub fn is_balanced(&self) -> bool {
        node::is_balanced(self.root())
    }

    /// Rebuilds the tree into the shortest possible shape without changing its keys.
    #[instrument(level = "debug", skip_all, fields(len = self.len))]
    pub fn rebalance(&mut self) {
        let before = self.height();

        let mut keys = Vec::with_capacity(self.len);
        node::drain_in_order(self.root.take(), &mut keys);
        *self = Self::from_sorted(keys);

        debug!(before, after = self.height(), "rebalanced");
    }

    /// Returns a `Display` adapter that draws the tree sideways.
    pub fn pretty(&self) -> Pretty<'_, K> {
        Pretty::new(self.root())
    }
}

/// Runs `visit` over every node `nodes` yields, or fails if there's nothing to run.
fn visit_all<'a, K, I, F>(nodes: I, visit: Option<F>) -> Result<()>
where
    K: 'a,
    I: Iterator<Item = &'a Node<K>>,
    F: FnMut(&Node<K>),
{
    let mut visit = visit.ok_or(Error::InvalidArgument(CALLBACK_REQUIRED))?;
    for node in nodes {
        visit(node);
    }
    Ok(())
}

/// Iterator over the keys of a [`Tree`] in ascending order, returned by [`Tree::iter`].
#[derive(Clone, Debug)]
pub struct Iter<'a, K>(InOrder<'a, K>);

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(Node::key)
    }
}
