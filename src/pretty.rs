//! A sideways drawing of a tree's shape, for eyeballing balance.
//!
//! The right subtree is drawn above its parent and the left subtree below, so tilting your head
//! to the left shows the tree the usual way up.

use std::fmt;

use crate::node::Node;

/// `Display` adapter returned by [`Tree::pretty`][crate::Tree::pretty].
///
/// # Examples
///
/// ```
/// use median_bst::Tree;
///
/// let tree = Tree::from_keys([1, 2, 3]);
///
/// assert_eq!(
///     tree.pretty().to_string(),
///     "│   ┌── 3\n└── 2\n    └── 1\n",
/// );
/// ```
pub struct Pretty<'a, K> {
    root: Option<&'a Node<K>>,
}

impl<'a, K> Pretty<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>) -> Self {
        Self { root }
    }
}

impl<K> fmt::Display for Pretty<'_, K>
where
    K: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root {
            Some(root) => write_node(f, root, "", true),
            None => Ok(()),
        }
    }
}

fn write_node<K>(
    f: &mut fmt::Formatter<'_>,
    node: &Node<K>,
    prefix: &str,
    is_left: bool,
) -> fmt::Result
where
    K: fmt::Display,
{
    if let Some(right) = node.right() {
        let prefix = format!("{}{}", prefix, if is_left { "│   " } else { "    " });
        write_node(f, right, &prefix, false)?;
    }

    writeln!(f, "{}{}{}", prefix, if is_left { "└── " } else { "┌── " }, node.key)?;

    if let Some(left) = node.left() {
        let prefix = format!("{}{}", prefix, if is_left { "    " } else { "│   " });
        write_node(f, left, &prefix, true)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::build_tree;

    #[test]
    fn empty_is_blank() {
        assert_eq!(Pretty::<i32>::new(None).to_string(), "");
    }

    #[test]
    fn seven_nodes() {
        let root = build_tree((1..=7).collect());
        let expected = "\
│       ┌── 7
│   ┌── 6
│   │   └── 5
└── 4
    │   ┌── 3
    └── 2
        └── 1
";

        assert_eq!(Pretty::new(root.as_deref()).to_string(), expected);
    }
}
