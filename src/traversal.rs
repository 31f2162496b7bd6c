//! Lazy iterators over the nodes of a subtree in the four classic orders.
//!
//! None of these borrow the tree mutably, so any number of them can run at once and each can be
//! recreated to start over.
//!
//! # Examples
//!
//! ```
//! use median_bst::Tree;
//!
//! //       4
//! //     2   6
//! //    1 3 5 7
//! let tree = Tree::from_keys(1..=7);
//!
//! let level: Vec<_> = tree.level_order_iter().map(|n| *n.key()).collect();
//! let pre: Vec<_> = tree.pre_order_iter().map(|n| *n.key()).collect();
//! let post: Vec<_> = tree.post_order_iter().map(|n| *n.key()).collect();
//!
//! assert_eq!(level, [4, 2, 6, 1, 3, 5, 7]);
//! assert_eq!(pre, [4, 2, 1, 3, 6, 5, 7]);
//! assert_eq!(post, [1, 3, 2, 5, 7, 6, 4]);
//! assert!(tree.in_order_iter().map(|n| *n.key()).eq(1..=7));
//! ```

use std::collections::VecDeque;

use crate::node::Node;

/// Breadth-first: top to bottom, left to right within a level.
#[derive(Debug)]
pub struct LevelOrder<'a, K> {
    queue: VecDeque<&'a Node<K>>,
}

impl<'a, K> LevelOrder<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>) -> Self {
        Self {
            queue: root.into_iter().collect(),
        }
    }
}

impl<'a, K> Iterator for LevelOrder<'a, K> {
    type Item = &'a Node<K>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.left());
        self.queue.extend(node.right());
        Some(node)
    }
}

/// Left subtree, node, right subtree. Yields keys in ascending order.
#[derive(Debug)]
pub struct InOrder<'a, K> {
    /// The path of nodes whose left subtrees are being visited.
    stack: Vec<&'a Node<K>>,
}

impl<'a, K> InOrder<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<K>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, K> Iterator for InOrder<'a, K> {
    type Item = &'a Node<K>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(node)
    }
}

/// Node, left subtree, right subtree.
#[derive(Debug)]
pub struct PreOrder<'a, K> {
    stack: Vec<&'a Node<K>>,
}

impl<'a, K> PreOrder<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a, K> Iterator for PreOrder<'a, K> {
    type Item = &'a Node<K>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right first so the left subtree is popped first.
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        Some(node)
    }
}

/// Left subtree, right subtree, node.
#[derive(Debug)]
pub struct PostOrder<'a, K> {
    /// Each node is paired with whether its children have already been pushed.
    stack: Vec<(&'a Node<K>, bool)>,
}

impl<'a, K> PostOrder<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>) -> Self {
        Self {
            stack: root.into_iter().map(|n| (n, false)).collect(),
        }
    }
}

impl<'a, K> Iterator for PostOrder<'a, K> {
    type Item = &'a Node<K>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (node, expanded) = self.stack.pop()?;
            if expanded {
                return Some(node);
            }

            self.stack.push((node, true));
            if let Some(right) = node.right() {
                self.stack.push((right, false));
            }
            if let Some(left) = node.left() {
                self.stack.push((left, false));
            }
        }
    }
}

// Manual `Clone` impls so cloning an iterator doesn't require `K: Clone`.
macro_rules! impl_clone {
    ($($iter:ident { $field:ident }),* $(,)?) => {$(
        impl<'a, K> Clone for $iter<'a, K> {
            fn clone(&self) -> Self {
                Self {
                    $field: self.$field.clone(),
                }
            }
        }
    )*};
}

impl_clone!(
    LevelOrder { queue },
    InOrder { stack },
    PreOrder { stack },
    PostOrder { stack },
);
