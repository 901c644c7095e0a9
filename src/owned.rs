//! An owned BST. Every `Node` is owned by exactly one link (its parent's child link, or the
//! `Tree` for the root) and there are no parent pointers. Operations that change the shape of
//! the tree take the tree by value and hand back the new tree, the same way each recursive step
//! hands back the new root of the subtree it was given.
//!
//! This tree does not balance itself. Inserting keys in sorted order produces a tree shaped like
//! a linked list, and insert, delete, and search all degrade to `O(N)` time and recursion depth.
//!
//! # Examples
//!
//! ```
//! use bstree::owned::{SearchResult, Tree};
//!
//! let tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.search(&1).is_found());
//!
//! let tree = tree.insert(2).insert(1).insert(3);
//!
//! // Search reports where the key lives in the tree.
//! match tree.search(&1) {
//!     SearchResult::Found(position) => {
//!         assert_eq!(position.parent, Some(&2));
//!         assert_eq!(position.left, None);
//!         assert_eq!(position.right, None);
//!     }
//!     SearchResult::NotFound => unreachable!(),
//! }
//!
//! // Inserting an existing key leaves the tree alone.
//! let tree = tree.insert(1);
//! assert_eq!(tree.len(), 3);
//!
//! let tree = tree.delete(&2);
//! assert!(!tree.contains(&2));
//! assert_eq!(tree.iter().collect::<Vec<_>>(), [&1, &3]);
//! ```

use std::cmp::Ordering;
use std::fmt;

/// An owning link to a subtree. `None` is the empty subtree.
type Link<K> = Option<Box<Node<K>>>;

/// An unbalanced Binary Search Tree over keys of type `K`. This can be used for inserting,
/// searching, and deleting keys. Duplicate keys are ignored.
#[derive(Clone)]
pub struct Tree<K> {
    root: Link<K>,
}

/// A `Node` has a key that is used for searching/sorting and up to two children.
#[derive(Clone)]
struct Node<K> {
    key: K,
    left: Link<K>,
    right: Link<K>,
}

/// What a search found out about a key.
#[derive(Debug, PartialEq, Eq)]
pub enum SearchResult<'a, K> {
    /// No node in the tree holds the key.
    NotFound,
    /// A node holds the key. Its neighbours are described by the [`Position`].
    Found(Position<'a, K>),
}

/// The immediate neighbourhood of a node that was found by [`Tree::search`].
#[derive(Debug, PartialEq, Eq)]
pub struct Position<'a, K> {
    /// The key of the node's parent. `None` when the node is the root.
    pub parent: Option<&'a K>,
    /// The key of the node's left child, if it has one.
    pub left: Option<&'a K>,
    /// The key of the node's right child, if it has one.
    pub right: Option<&'a K>,
}

/// Manual implementations of `Clone` and `Copy` so these are copyable even when `K` is not.
impl<K> Clone for Position<'_, K> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<K> Copy for Position<'_, K> {}

impl<K> Clone for SearchResult<'_, K> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<K> Copy for SearchResult<'_, K> {}

impl<'a, K> SearchResult<'a, K> {
    /// Whether the key was found.
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// The position of the found node, if any.
    pub fn position(self) -> Option<Position<'a, K>> {
        match self {
            Self::NotFound => None,
            Self::Found(position) => Some(position),
        }
    }
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Drop for Tree<K> {
    /// Dropping a `Box<Node>` drops its children recursively, which would overflow the stack on
    /// a tree built from sorted keys. Detach children onto a stack instead.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<K>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<K> fmt::Debug for Tree<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<K> Tree<K> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Returns a tree that contains the given key. If the key is already present the tree is
    /// returned unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::owned::Tree;
    ///
    /// let tree = Tree::new().insert(1).insert(1);
    ///
    /// assert!(tree.contains(&1));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(mut self, key: K) -> Self
    where
        K: Ord,
    {
        self.root = Some(insert(self.root.take(), key));
        self
    }

    /// Returns a tree without a node holding the given key. Deleting a key that isn't in the
    /// tree, or deleting from an empty tree, returns the tree unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::owned::Tree;
    ///
    /// let tree = Tree::new().insert(2).insert(1).insert(3);
    /// let tree = tree.delete(&2).delete(&42);
    ///
    /// assert!(!tree.contains(&2));
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn delete(mut self, key: &K) -> Self
    where
        K: Ord,
    {
        self.root = delete(self.root.take(), key);
        self
    }

    /// Searches for the given key and reports the keys of its parent and children.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::owned::Tree;
    ///
    /// let tree: Tree<_> = [50, 30, 70].into_iter().collect();
    ///
    /// let root = tree.search(&50).position().unwrap();
    /// assert_eq!(root.parent, None);
    /// assert_eq!((root.left, root.right), (Some(&30), Some(&70)));
    ///
    /// assert!(!tree.search(&42).is_found());
    /// ```
    pub fn search(&self, key: &K) -> SearchResult<'_, K>
    where
        K: Ord,
    {
        search(&self.root, key, None)
    }

    /// Whether a node holds the given key.
    pub fn contains(&self, key: &K) -> bool
    where
        K: Ord,
    {
        self.search(key).is_found()
    }

    /// Whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Counts the nodes reachable from the root.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Gets the number of levels in this tree. An empty tree has a height of 0 and a tree with
    /// one node has a height of 1.
    pub fn height(&self) -> usize {
        height(&self.root)
    }

    /// The smallest key in the tree.
    pub fn min(&self) -> Option<&K> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.key)
    }

    /// The largest key in the tree.
    pub fn max(&self) -> Option<&K> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.key)
    }

    /// Iterates over the keys in ascending order.
    pub fn iter(&self) -> Iter<'_, K> {
        let mut iter = Iter { stack: Vec::new() };
        iter.push_left_spine(self.root.as_deref());
        iter
    }
}

impl<K: Ord> FromIterator<K> for Tree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Ord> Extend<K> for Tree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.root = Some(insert(self.root.take(), key));
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

/// In-order iterator over the keys of a [`Tree`]. Holds the nodes whose key hasn't been yielded
/// yet but whose left subtree has been, so it uses `O(height)` memory and no recursion.
pub struct Iter<'a, K> {
    stack: Vec<&'a Node<K>>,
}

impl<'a, K> Iter<'a, K> {
    fn push_left_spine(&mut self, mut node: Option<&'a Node<K>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(&node.key)
    }
}

impl<K> Node<K> {
    /// Construct a new leaf `Node` with the given `key`.
    fn new_boxed(key: K) -> Box<Self> {
        Box::new(Self {
            key,
            left: None,
            right: None,
        })
    }

    fn insert(mut self: Box<Self>, key: K) -> Box<Self>
    where
        K: Ord,
    {
        match key.cmp(&self.key) {
            Ordering::Less => self.left = Some(insert(self.left.take(), key)),
            Ordering::Equal => {}
            Ordering::Greater => self.right = Some(insert(self.right.take(), key)),
        }
        self
    }

    fn delete(mut self: Box<Self>, key: &K) -> Link<K>
    where
        K: Ord,
    {
        match key.cmp(&self.key) {
            Ordering::Less => {
                self.left = delete(self.left.take(), key);
                Some(self)
            }
            Ordering::Greater => {
                self.right = delete(self.right.take(), key);
                Some(self)
            }
            Ordering::Equal => match (self.left.take(), self.right.take()) {
                (None, right) => right,
                (left, None) => left,

                // With two children the in-order successor (the smallest key in the right
                // subtree) takes this node's place and its old node is unlinked.
                (Some(left), Some(right)) => {
                    let (successor, right) = right.take_min();
                    self.key = successor;
                    self.left = Some(left);
                    self.right = right;
                    Some(self)
                }
            },
        }
    }

    /// Removes the leftmost node of this subtree. Returns its key and what remains of the
    /// subtree. The leftmost node has no left child so it is replaced by its right child.
    fn take_min(mut self: Box<Self>) -> (K, Link<K>) {
        match self.left.take() {
            None => {
                let Node { key, right, .. } = *self;
                (key, right)
            }
            Some(left) => {
                let (min, rest) = left.take_min();
                self.left = rest;
                (min, Some(self))
            }
        }
    }
}

fn insert<K: Ord>(link: Link<K>, key: K) -> Box<Node<K>> {
    match link {
        None => Node::new_boxed(key),
        Some(node) => node.insert(key),
    }
}

fn delete<K: Ord>(link: Link<K>, key: &K) -> Link<K> {
    link.and_then(|node| node.delete(key))
}

/// `parent` is the key of the node owning `link`, or `None` at the root.
fn search<'a, K: Ord>(link: &'a Link<K>, key: &K, parent: Option<&'a K>) -> SearchResult<'a, K> {
    match link.as_deref() {
        None => SearchResult::NotFound,
        Some(node) => match key.cmp(&node.key) {
            Ordering::Less => search(&node.left, key, Some(&node.key)),
            Ordering::Equal => SearchResult::Found(Position {
                parent,
                left: node.left.as_ref().map(|n| &n.key),
                right: node.right.as_ref().map(|n| &n.key),
            }),
            Ordering::Greater => search(&node.right, key, Some(&node.key)),
        },
    }
}

fn height<K>(link: &Link<K>) -> usize {
    match link.as_deref() {
        None => 0,
        Some(n) => height(&n.left).max(height(&n.right)) + 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Assert that the in-order keys of `$tree` are exactly `$keys`.
    macro_rules! assert_keys {
        ($tree:expr, $keys:expr) => {{
            let keys: Vec<i32> = $tree.iter().copied().collect();
            assert_eq!(keys, $keys);
        }};
    }

    fn found<'a>(
        parent: Option<&'a i32>,
        left: Option<&'a i32>,
        right: Option<&'a i32>,
    ) -> SearchResult<'a, i32> {
        SearchResult::Found(Position {
            parent,
            left,
            right,
        })
    }

    /// 50, 30, 70, 20, 40, 60, 80 inserted in that order: a full tree of height 3.
    fn full_tree() -> Tree<i32> {
        [50, 30, 70, 20, 40, 60, 80].into_iter().collect()
    }

    #[test]
    fn test_insert() {
        let tree = Tree::new();
        let tree = tree.insert(1);

        assert_eq!(tree.search(&1), found(None, None, None));
    }

    #[test]
    fn insert_ignores_duplicates() {
        let tree = full_tree().insert(30).insert(80);

        assert_keys!(tree, [20, 30, 40, 50, 60, 70, 80]);
        assert_eq!(tree.height(), 3);
        assert_eq!(tree.search(&30), found(Some(&50), Some(&20), Some(&40)));
    }

    #[test]
    fn search_reports_parent_and_children() {
        let tree = full_tree();

        assert_eq!(tree.search(&50), found(None, Some(&30), Some(&70)));
        assert_eq!(tree.search(&70), found(Some(&50), Some(&60), Some(&80)));
        assert_eq!(tree.search(&40), found(Some(&30), None, None));
        assert_eq!(tree.search(&45), SearchResult::NotFound);
    }

    #[test]
    fn search_empty_tree() {
        let tree = Tree::<i32>::new();

        assert_eq!(tree.search(&0), SearchResult::NotFound);
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.height(), 0);
    }

    #[test]
    fn delete_with_no_children() {
        let tree = full_tree().delete(&20);

        assert_eq!(tree.search(&20), SearchResult::NotFound);
        assert_eq!(tree.search(&30), found(Some(&50), None, Some(&40)));
        assert_keys!(tree, [30, 40, 50, 60, 70, 80]);
    }

    #[test]
    fn delete_with_no_left_child() {
        let tree = full_tree().delete(&20).delete(&30);

        // 40 moves up into 30's place.
        assert_eq!(tree.search(&40), found(Some(&50), None, None));
        assert_eq!(tree.search(&50), found(None, Some(&40), Some(&70)));
        assert_keys!(tree, [40, 50, 60, 70, 80]);
    }

    #[test]
    fn delete_with_no_right_child() {
        let tree = full_tree().delete(&40).delete(&30);

        assert_eq!(tree.search(&20), found(Some(&50), None, None));
        assert_eq!(tree.search(&50), found(None, Some(&20), Some(&70)));
        assert_keys!(tree, [20, 50, 60, 70, 80]);
    }

    #[test]
    fn delete_with_two_children() {
        let tree = full_tree().delete(&30);

        assert_eq!(tree.search(&30), SearchResult::NotFound);
        assert_eq!(tree.search(&40), found(Some(&50), Some(&20), None));
        assert_eq!(tree.search(&20), found(Some(&40), None, None));
        assert_keys!(tree, [20, 40, 50, 60, 70, 80]);
    }

    #[test]
    fn delete_with_deeper_successor() {
        // The successor of 50 is 55, two levels down in the right subtree and with a right child.
        let tree: Tree<i32> = [50, 30, 70, 60, 80, 55, 57].into_iter().collect();
        let tree = tree.delete(&50);

        assert_eq!(tree.search(&55), found(None, Some(&30), Some(&70)));
        assert_eq!(tree.search(&60), found(Some(&70), Some(&57), None));
        assert_eq!(tree.search(&57), found(Some(&60), None, None));
        assert_keys!(tree, [30, 55, 57, 60, 70, 80]);
    }

    #[test]
    fn delete_root() {
        let tree = Tree::new().insert(1).delete(&1);

        assert!(tree.is_empty());
        assert_eq!(tree.search(&1), SearchResult::NotFound);
    }

    #[test]
    fn delete_missing_key() {
        let tree = full_tree().delete(&999);
        assert_keys!(tree, [20, 30, 40, 50, 60, 70, 80]);

        let tree = Tree::<i32>::new().delete(&1);
        assert!(tree.is_empty());
    }

    #[test]
    fn min_and_max() {
        let tree = full_tree();
        assert_eq!(tree.min(), Some(&20));
        assert_eq!(tree.max(), Some(&80));

        let tree = Tree::<i32>::new();
        assert_eq!(tree.min(), None);
        assert_eq!(tree.max(), None);
    }

    #[test]
    fn sorted_inserts_make_a_list() {
        let tree: Tree<i32> = (0..100).collect();
        assert_eq!(tree.height(), 100);

        let tree: Tree<i32> = (0..100).rev().collect();
        assert_eq!(tree.height(), 100);
        assert_eq!(tree.search(&0), found(Some(&1), None, None));
    }

    #[test]
    fn drop_deep_tree() {
        // Built without the recursive `insert` so only dropping is exercised.
        let mut root: Link<i32> = None;
        for key in (0..200_000).rev() {
            root = Some(Box::new(Node {
                key,
                left: None,
                right: root,
            }));
        }
        let tree = Tree { root };

        assert_eq!(tree.min(), Some(&0));
        assert_eq!(tree.len(), 200_000);
        drop(tree);
    }

    #[test]
    fn debug_lists_keys_in_order() {
        let tree: Tree<i32> = [2, 1, 3].into_iter().collect();
        assert_eq!(format!("{:?}", tree), "{1, 2, 3}");
    }
}
