//! The `Node` record and the recursive algorithms that work on a single subtree.
//!
//! Every function here takes the subtree it works on explicitly. [`Tree`][crate::Tree] is a thin
//! wrapper that hands these functions its root.

use std::cmp::Ordering;
use std::fmt;
use std::ptr;

/// The owner of a subtree. `None` is the empty position below a leaf.
pub type Link<K> = Option<Box<Node<K>>>;

/// A `Node` stores one key and owns its two (possibly empty) subtrees.
#[derive(Clone)]
pub struct Node<K> {
    pub(crate) key: K,
    pub(crate) left: Link<K>,
    pub(crate) right: Link<K>,
}

impl<K> fmt::Debug for Node<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("key", &self.key)
            .field("left", &self.left())
            .field("right", &self.right())
            .finish()
    }
}

impl<K> Node<K> {
    pub(crate) fn new_boxed(key: K) -> Box<Self> {
        Box::new(Self {
            key,
            left: None,
            right: None,
        })
    }

    /// The key stored in this node.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The root of the left subtree, if there is one.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the right subtree, if there is one.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// The number of edges on the longest path from this node down to a leaf.
    pub fn height(&self) -> isize {
        1 + height(self.left()).max(height(self.right()))
    }
}

/// Builds a subtree from keys that are already sorted ascending and free of duplicates.
///
/// The key at `len / 2` (the upper of the two middle keys for even lengths) becomes the root.
/// The keys before it form the left subtree and the keys after it form the right subtree.
/// The result has the minimum height possible for `keys.len()` nodes.
///
/// # Examples
///
/// ```
/// use median_bst::build_tree;
///
/// let root = build_tree(vec![1, 2, 3, 4]).unwrap();
///
/// assert_eq!(root.key(), &3);
/// assert_eq!(root.left().map(|n| *n.key()), Some(2));
/// assert_eq!(root.right().map(|n| *n.key()), Some(4));
/// ```
pub fn build_tree<K>(keys: Vec<K>) -> Link<K> {
    let len = keys.len();
    build_from(&mut keys.into_iter(), len)
}

/// Builds the subtree for the next `len` keys of `keys`. Consuming the keys in order means the
/// left subtree is built first from the `len / 2` smallest, then the root takes the median, then
/// the right subtree gets the rest. That is the same shape as slicing around `mid` without
/// needing to clone any keys.
fn build_from<K, I>(keys: &mut I, len: usize) -> Link<K>
where
    I: Iterator<Item = K>,
{
    if len == 0 {
        return None;
    }

    let mid = len / 2;
    let left = build_from(keys, mid);
    let key = keys.next()?;
    let right = build_from(keys, len - mid - 1);

    Some(Box::new(Node { key, left, right }))
}

/// Finds the node holding `key` in the subtree rooted at `node`.
pub fn find<'a, K>(node: Option<&'a Node<K>>, key: &K) -> Option<&'a Node<K>>
where
    K: Ord,
{
    let node = node?;
    match key.cmp(&node.key) {
        Ordering::Less => find(node.left(), key),
        Ordering::Equal => Some(node),
        Ordering::Greater => find(node.right(), key),
    }
}

/// Inserts `key` below `link`. Returns `false` without touching the subtree if `key` is already
/// present.
pub(crate) fn insert<K>(link: &mut Link<K>, key: K) -> bool
where
    K: Ord,
{
    match link {
        None => {
            *link = Some(Node::new_boxed(key));
            true
        }
        Some(node) => match key.cmp(&node.key) {
            Ordering::Less => insert(&mut node.left, key),
            Ordering::Equal => false,
            Ordering::Greater => insert(&mut node.right, key),
        },
    }
}

/// Removes `key` from the subtree owned by `link` and returns it. The owner is rewritten in
/// place whenever the node it points at is replaced by one of its children.
pub(crate) fn delete<K>(link: &mut Link<K>, key: &K) -> Option<K>
where
    K: Ord,
{
    let node = link.as_mut()?;
    match key.cmp(&node.key) {
        Ordering::Less => return delete(&mut node.left, key),
        Ordering::Greater => return delete(&mut node.right, key),
        Ordering::Equal => {}
    }

    if node.left.is_some() && node.right.is_some() {
        // Two children: promote the in-order successor's key into this node and unlink the
        // successor from the right subtree.
        let successor = take_min(&mut node.right)?;
        return Some(std::mem::replace(&mut node.key, successor));
    }

    let mut node = link.take()?;
    *link = node.left.take().or_else(|| node.right.take());
    Some(node.key)
}

/// Unlinks the leftmost node below `link`, splicing its right child into its place, and returns
/// its key.
fn take_min<K>(link: &mut Link<K>) -> Option<K> {
    if link.as_ref()?.left.is_some() {
        return take_min(&mut link.as_mut()?.left);
    }

    let mut node = link.take()?;
    *link = node.right.take();
    Some(node.key)
}

/// The height of a possibly empty subtree. An empty subtree has height `-1` so a leaf has
/// height `0`.
///
/// # Examples
///
/// ```
/// use median_bst::{height, Tree};
///
/// let tree: Tree<i32> = Tree::new();
/// assert_eq!(height(tree.root()), -1);
///
/// let tree = Tree::from_keys([1]);
/// assert_eq!(height(tree.root()), 0);
/// ```
pub fn height<K>(node: Option<&Node<K>>) -> isize {
    node.map_or(-1, Node::height)
}

/// The number of edges between `root` and `node`, or `-1` if `node` isn't in `root`'s subtree.
///
/// The search descends from `root` by comparing keys and stops when it reaches `node` itself
/// (the same allocation, not just an equal key).
///
/// # Examples
///
/// ```
/// use median_bst::{depth, Tree};
///
/// let tree = Tree::from_keys(1..=7);
/// let root = tree.root().unwrap();
/// let five = tree.find(&5).unwrap();
///
/// assert_eq!(depth(root, Some(root)), 0);
/// assert_eq!(depth(five, Some(root)), 2);
///
/// // An equal key in a different tree is not the same node.
/// let other = Tree::from_keys([5]);
/// assert_eq!(depth(other.root().unwrap(), Some(root)), -1);
/// ```
pub fn depth<K>(node: &Node<K>, root: Option<&Node<K>>) -> isize
where
    K: Ord,
{
    depth_from(node, root, 0)
}

fn depth_from<K>(node: &Node<K>, root: Option<&Node<K>>, level: isize) -> isize
where
    K: Ord,
{
    match root {
        None => -1,
        Some(root) if ptr::eq(root, node) => level,
        Some(root) if node.key < root.key => depth_from(node, root.left(), level + 1),
        Some(root) => depth_from(node, root.right(), level + 1),
    }
}

/// Whether every node below (and including) `node` has subtrees whose heights differ by at most
/// one. An empty subtree is balanced.
pub fn is_balanced<K>(node: Option<&Node<K>>) -> bool {
    balanced_height(node).is_some()
}

/// The height of `node` if its subtree is balanced, `None` otherwise. One bottom-up pass.
fn balanced_height<K>(node: Option<&Node<K>>) -> Option<isize> {
    let node = match node {
        None => return Some(-1),
        Some(node) => node,
    };

    let left = balanced_height(node.left())?;
    let right = balanced_height(node.right())?;
    if (left - right).abs() > 1 {
        return None;
    }

    Some(1 + left.max(right))
}

/// Moves every key out of the subtree in ascending order, dropping the nodes as it goes.
pub(crate) fn drain_in_order<K>(link: Link<K>, keys: &mut Vec<K>) {
    if let Some(node) = link {
        let Node { key, left, right } = *node;
        drain_in_order(left, keys);
        keys.push(key);
        drain_in_order(right, keys);
    }
}
