//! An unbalanced Binary Search Tree with parent links. Iteration walks the links directly so it
//! needs no stack, and the smallest and largest elements are cached for O(1) access.
//!
//! Nothing here rebalances. Inserting already sorted data produces a linked list and every
//! operation degrades to `O(n)`.
//!
//! # Examples
//!
//! ```
//! use bstree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.is_empty());
//! assert_eq!(tree.begin(), tree.end());
//!
//! for x in [5, 3, 8, 1, 4, 7, 9] {
//!     tree.insert(x);
//! }
//!
//! // Inserting a value that is already present does nothing.
//! assert!(!tree.insert(5));
//! assert_eq!(tree.len(), 7);
//!
//! assert_eq!(tree.front(), Some(&1));
//! assert_eq!(tree.back(), Some(&9));
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 3, 4, 5, 7, 8, 9]);
//!
//! assert_eq!(tree.find(&4).get(), Some(&4));
//! assert!(tree.find(&6).is_end());
//!
//! // Removing an element returns it.
//! assert_eq!(tree.remove(&4), Some(4));
//! assert_eq!(tree.remove(&4), None);
//! ```

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::mem;
use std::sync::atomic::{self, AtomicU64};

use crate::arena::{Arena, NodeId};
use crate::cursor::{Cursor, Position};
use crate::error::Error;
use crate::iter::{IntoIter, Iter};
use crate::util::Side;

/// A possibly missing node. `None` stands for the sentinel: it is the parent of the root, the
/// child of every leaf, and the end position of a cursor.
pub(crate) type Link = Option<NodeId>;

/// Distinguishes trees so a [`Position`] taken from one is never accepted by another.
pub(crate) type TreeId = u64;

static NEXT_TREE_ID: AtomicU64 = AtomicU64::new(0);

fn next_tree_id() -> TreeId {
    NEXT_TREE_ID.fetch_add(1, atomic::Ordering::Relaxed)
}

/// An unbalanced Binary Search Tree over a totally ordered element type. Each element is stored
/// at most once; inserting an element equal to one already present is a no-op.
pub struct Tree<T> {
    id: TreeId,
    nodes: Arena<Node<T>>,
    sentinel: Sentinel,
    len: usize,
}

/// The header of a tree. These are the only links into the node graph from outside it.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
struct Sentinel {
    root: Link,
    /// The node holding the smallest element.
    leftmost: Link,
    /// The node holding the largest element.
    rightmost: Link,
}

impl Sentinel {
    fn extreme(&self, side: Side) -> Link {
        match side {
            Side::Left => self.leftmost,
            Side::Right => self.rightmost,
        }
    }

    fn extreme_mut(&mut self, side: Side) -> &mut Link {
        match side {
            Side::Left => &mut self.leftmost,
            Side::Right => &mut self.rightmost,
        }
    }
}

/// A single element. A node logically owns its `left` and `right` subtrees; `parent` is a
/// back-reference used for traversal only.
#[derive(Debug)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    parent: Link,
    left: Link,
    right: Link,
}

impl<T> Node<T> {
    fn leaf(value: T, parent: Link) -> Self {
        Self {
            value,
            parent,
            left: None,
            right: None,
        }
    }

    fn child(&self, side: Side) -> Link {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    fn child_mut(&mut self, side: Side) -> &mut Link {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Tree<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        let mut tree = Self {
            id: next_tree_id(),
            nodes: Arena::with_capacity(self.len),
            sentinel: Sentinel::default(),
            len: 0,
        };
        tree.copy_nodes_from(self);
        tree
    }

    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.copy_nodes_from(source);
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Two trees are equal when they hold the same elements, whatever their shapes.
impl<T> PartialEq for Tree<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T> Eq for Tree<T> where T: Eq {}

impl<T> Extend<T> for Tree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
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

impl<T> IntoIterator for Tree<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Tree<T> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            id: next_tree_id(),
            nodes: Arena::new(),
            sentinel: Sentinel::default(),
            len: 0,
        }
    }

    /// Generate a `Tree` holding just `value`.
    pub fn singleton(value: T) -> Self {
        let mut tree = Self::new();
        let root = tree.nodes.alloc(Node::leaf(value, None));
        tree.sentinel = Sentinel {
            root: Some(root),
            leftmost: Some(root),
            rightmost: Some(root),
        };
        tree.len = 1;
        tree
    }

    /// The number of elements in the tree. This is tracked on every insert and removal so it
    /// costs nothing to ask.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree holds no elements.
    pub fn is_empty(&self) -> bool {
        self.sentinel.root.is_none()
    }

    /// The smallest element, or `None` if the tree is empty.
    pub fn front(&self) -> Option<&T> {
        self.sentinel.leftmost.map(|id| &self.node(id).value)
    }

    /// The largest element, or `None` if the tree is empty.
    pub fn back(&self) -> Option<&T> {
        self.sentinel.rightmost.map(|id| &self.node(id).value)
    }

    /// A cursor at the smallest element, or at the end if the tree is empty.
    pub fn begin(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.sentinel.leftmost)
    }

    /// A cursor at the end position, one past the largest element.
    pub fn end(&self) -> Cursor<'_, T> {
        Cursor::new(self, None)
    }

    /// Iterates over the elements in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// The number of nodes on the longest path from the root to a leaf. An empty tree has a
    /// height of 0 and a single element a height of 1.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(NodeId, usize)> =
            self.sentinel.root.map(|root| (root, 1)).into_iter().collect();
        while let Some((id, depth)) = stack.pop() {
            height = height.max(depth);
            let node = self.node(id);
            stack.extend(node.left.map(|left| (left, depth + 1)));
            stack.extend(node.right.map(|right| (right, depth + 1)));
        }
        height
    }

    /// Finds the cursor at the given element, or the end cursor if no element compares equal.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let tree: Tree<_> = [2, 1, 3].into_iter().collect();
    ///
    /// let mut cursor = tree.find(&2);
    /// assert_eq!(cursor.get(), Some(&2));
    /// cursor.move_next().unwrap();
    /// assert_eq!(cursor.get(), Some(&3));
    ///
    /// assert_eq!(tree.find(&42), tree.end());
    /// ```
    pub fn find<Q>(&self, key: &Q) -> Cursor<'_, T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        Cursor::new(self, self.find_node(key))
    }

    /// Potentially finds the element equal to `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find_node(key).map(|id| &self.node(id).value)
    }

    /// Returns `true` if an element equal to `key` is in the tree.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find_node(key).is_some()
    }

    /// Inserts `value` into the tree. Returns `false`, dropping `value`, if an equal element was
    /// already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(5));
    /// assert!(!tree.insert(5));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        self.insert_node(value).is_ok()
    }

    /// Removes the element at `position` and returns it. Positions of every other element stay
    /// valid.
    ///
    /// # Errors
    ///
    /// [`Error::EndPosition`] if `position` is the end, and [`Error::InvalidPosition`] if its
    /// element has already been removed or it was taken from a different tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::{Error, Tree};
    ///
    /// let mut tree: Tree<_> = [2, 1, 3].into_iter().collect();
    ///
    /// let position = tree.find(&2).position();
    /// assert_eq!(tree.erase(position), Ok(2));
    /// assert_eq!(tree.erase(position), Err(Error::InvalidPosition));
    /// assert_eq!(tree.erase(tree.end().position()), Err(Error::EndPosition));
    /// ```
    pub fn erase(&mut self, position: Position) -> Result<T, Error> {
        if position.tree() != self.id {
            return Err(Error::InvalidPosition);
        }
        let (id, generation) = position.node().ok_or(Error::EndPosition)?;
        if !self.nodes.contains(id, generation) {
            return Err(Error::InvalidPosition);
        }
        Ok(self.erase_node(id))
    }

    /// Removes the element equal to `key` and returns it. If the tree does not contain such an
    /// element, nothing happens.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find_node(key).map(|id| self.erase_node(id))
    }

    /// Removes and returns the smallest element.
    pub fn pop_first(&mut self) -> Option<T> {
        self.sentinel.leftmost.map(|id| self.erase_node(id))
    }

    /// Removes and returns the largest element.
    pub fn pop_last(&mut self) -> Option<T> {
        self.sentinel.rightmost.map(|id| self.erase_node(id))
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        if self.len > 0 {
            log::trace!("clearing tree of {} elements", self.len);
        }
        self.nodes.clear();
        self.sentinel = Sentinel::default();
        self.len = 0;
    }

    /// Exchanges the contents of two trees without touching any node.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// Moves the contents out of this tree, leaving it empty.
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    /// Moves every element of `other` into this tree. An element of `other` equal to one
    /// already in this tree is left behind in `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::Tree;
    ///
    /// let mut a: Tree<_> = [1, 3, 5].into_iter().collect();
    /// let mut b: Tree<_> = [2, 3, 4].into_iter().collect();
    ///
    /// a.splice(&mut b);
    /// assert_eq!(a.iter().copied().collect::<Vec<_>>(), [1, 2, 3, 4, 5]);
    /// assert_eq!(b.iter().copied().collect::<Vec<_>>(), [3]);
    /// ```
    pub fn splice(&mut self, other: &mut Self)
    where
        T: Ord,
    {
        if self.is_empty() {
            self.swap(other);
            return;
        }

        let incoming = other.take();
        let incoming_len = incoming.len();
        let mut duplicates = Vec::new();
        for value in incoming {
            if let Err(duplicate) = self.insert_node(value) {
                duplicates.push(duplicate);
            }
        }
        log::trace!(
            "spliced {} of {} elements, {} duplicates left behind",
            incoming_len - duplicates.len(),
            incoming_len,
            duplicates.len()
        );

        // Duplicates come out in ascending order. Inserting the middle first keeps `other` from
        // degenerating into a list.
        let mut duplicates: Vec<_> = duplicates.into_iter().map(Some).collect();
        other.insert_balanced(&mut duplicates);
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node<T> {
        self.nodes.get(id)
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node<T> {
        self.nodes.get_mut(id)
    }

    pub(crate) fn position_of(&self, link: Link) -> Position {
        Position::new(self.id, link.map(|id| (id, self.nodes.generation(id))))
    }

    pub(crate) fn first_node(&self) -> Link {
        self.sentinel.leftmost
    }

    pub(crate) fn last_node(&self) -> Link {
        self.sentinel.rightmost
    }

    /// The in-order successor of `id`, or `None` if `id` holds the largest element.
    pub(crate) fn successor(&self, id: NodeId) -> Link {
        self.step(id, Side::Right)
    }

    /// The in-order predecessor of `id`, or `None` if `id` holds the smallest element.
    pub(crate) fn predecessor(&self, id: NodeId) -> Link {
        self.step(id, Side::Left)
    }

    /// Steps one place in order towards `side` using only the node links.
    ///
    /// If there is a subtree on `side`, the neighbour is that subtree's extreme on the opposite
    /// side. Otherwise climb while we're the `side` child of our parent; the first ancestor we
    /// reach from the other side is the neighbour. Climbing off the root lands on the sentinel.
    fn step(&self, id: NodeId, side: Side) -> Link {
        if let Some(child) = self.node(id).child(side) {
            return Some(self.extreme(child, side.opposite()));
        }

        let mut child = id;
        let mut parent = self.node(id).parent;
        while let Some(p) = parent {
            if self.node(p).child(side) != Some(child) {
                break;
            }
            child = p;
            parent = self.node(p).parent;
        }
        parent
    }

    /// Follows `side` links from `id` until there are none left.
    fn extreme(&self, mut id: NodeId, side: Side) -> NodeId {
        while let Some(next) = self.node(id).child(side) {
            id = next;
        }
        id
    }

    fn find_node<Q>(&self, key: &Q) -> Link
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut current = self.sentinel.root;
        while let Some(id) = current {
            let node = self.node(id);
            current = match key.cmp(node.value.borrow()) {
                Ordering::Equal => return Some(id),
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
            };
        }
        None
    }

    /// Inserts `value` as a new leaf and returns its node, or hands `value` back if an equal
    /// element is already present.
    fn insert_node(&mut self, value: T) -> Result<NodeId, T>
    where
        T: Ord,
    {
        let Some(mut parent) = self.sentinel.root else {
            let root = self.nodes.alloc(Node::leaf(value, None));
            self.sentinel = Sentinel {
                root: Some(root),
                leftmost: Some(root),
                rightmost: Some(root),
            };
            self.len = 1;
            return Ok(root);
        };

        let side = loop {
            let node = self.node(parent);
            let side = match value.cmp(&node.value) {
                Ordering::Equal => return Err(value),
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
            };
            match node.child(side) {
                Some(child) => parent = child,
                None => break side,
            }
        };

        let id = self.nodes.alloc(Node::leaf(value, Some(parent)));
        *self.node_mut(parent).child_mut(side) = Some(id);

        // An insert extends a single path by one node, so each cached extreme moves at most one
        // step outward.
        for side in [Side::Left, Side::Right] {
            let cached = self
                .sentinel
                .extreme(side)
                .expect("Non-empty tree has extremes");
            if let Some(child) = self.node(cached).child(side) {
                *self.sentinel.extreme_mut(side) = Some(child);
            }
        }
        self.len += 1;

        if cfg!(debug_assertions) {
            self.assert_local_links(id);
            let parent = self.node(parent);
            match side {
                Side::Left => assert!(self.node(id).value < parent.value),
                Side::Right => assert!(self.node(id).value > parent.value),
            }
        }
        Ok(id)
    }

    /// Unlinks `id` from the tree and returns its element.
    ///
    /// A node with two children is replaced by its in-order predecessor, which is relinked into
    /// its place rather than having its element moved, so other nodes keep their identity.
    fn erase_node(&mut self, id: NodeId) -> T {
        if self.sentinel.leftmost == Some(id) {
            self.sentinel.leftmost = self.successor(id);
        }
        if self.sentinel.rightmost == Some(id) {
            self.sentinel.rightmost = self.predecessor(id);
        }

        let (left, right) = {
            let node = self.node(id);
            (node.left, node.right)
        };
        let replacement = match (left, right) {
            (None, only) | (only, None) => {
                self.transplant(id, only);
                only
            }
            (Some(left), Some(right)) => {
                let predecessor = self.extreme(left, Side::Right);
                if predecessor != left {
                    // The predecessor has no right child. Its left subtree takes its place.
                    let predecessor_left = self.node(predecessor).left;
                    self.transplant(predecessor, predecessor_left);
                    self.node_mut(predecessor).left = Some(left);
                    self.node_mut(left).parent = Some(predecessor);
                }
                self.transplant(id, Some(predecessor));
                self.node_mut(predecessor).right = Some(right);
                self.node_mut(right).parent = Some(predecessor);
                Some(predecessor)
            }
        };
        self.len -= 1;

        let Node { value, .. } = self.nodes.take(id);
        log::trace!("erased node, {} elements remain", self.len);

        if cfg!(debug_assertions) {
            assert_eq!(self.nodes.len(), self.len);
            if let Some(replacement) = replacement {
                self.assert_local_links(replacement);
            }
        }
        value
    }

    /// Puts the subtree rooted at `new` where the subtree rooted at `old` was. `old`'s own links
    /// are left untouched.
    fn transplant(&mut self, old: NodeId, new: Link) {
        let parent = self.node(old).parent;
        match parent {
            None => self.sentinel.root = new,
            Some(p) => {
                let parent_node = self.node_mut(p);
                if parent_node.left == Some(old) {
                    parent_node.left = new;
                } else {
                    parent_node.right = new;
                }
            }
        }
        if let Some(new) = new {
            self.node_mut(new).parent = parent;
        }
    }

    /// Deep-copies the node graph of `source` into this tree, which must be empty. The copy has
    /// exactly the shape of the original.
    fn copy_nodes_from(&mut self, source: &Self)
    where
        T: Clone,
    {
        debug_assert!(self.is_empty());
        let Some(source_root) = source.sentinel.root else {
            return;
        };

        let root = self
            .nodes
            .alloc(Node::leaf(source.node(source_root).value.clone(), None));
        // Pairs of (original, copy) whose children still need copying.
        let mut stack = vec![(source_root, root)];
        while let Some((original, copy)) = stack.pop() {
            for side in [Side::Left, Side::Right] {
                if let Some(child) = source.node(original).child(side) {
                    let child_copy = self
                        .nodes
                        .alloc(Node::leaf(source.node(child).value.clone(), Some(copy)));
                    *self.node_mut(copy).child_mut(side) = Some(child_copy);
                    stack.push((child, child_copy));
                }
            }
        }

        self.sentinel = Sentinel {
            root: Some(root),
            leftmost: Some(self.extreme(root, Side::Left)),
            rightmost: Some(self.extreme(root, Side::Right)),
        };
        self.len = source.len;
        log::trace!("copied tree of {} elements", self.len);
    }

    /// Inserts the ascending `values` middle first so that, in an otherwise empty tree, they
    /// form a balanced shape.
    fn insert_balanced(&mut self, values: &mut [Option<T>])
    where
        T: Ord,
    {
        if values.is_empty() {
            return;
        }
        let mid = values.len() / 2;
        if let Some(value) = values[mid].take() {
            self.insert(value);
        }
        let (lower, upper) = values.split_at_mut(mid);
        self.insert_balanced(lower);
        self.insert_balanced(&mut upper[1..]);
    }

    /// Checks the links around a single node along with the cached extremes.
    fn assert_local_links(&self, id: NodeId) {
        let node = self.node(id);
        match node.parent {
            None => assert_eq!(self.sentinel.root, Some(id)),
            Some(p) => {
                let parent = self.node(p);
                assert!(parent.left == Some(id) || parent.right == Some(id));
            }
        }
        for side in [Side::Left, Side::Right] {
            if let Some(child) = node.child(side) {
                assert_eq!(self.node(child).parent, Some(id));
            }
            if let Some(extreme) = self.sentinel.extreme(side) {
                assert!(self.node(extreme).child(side).is_none());
            }
        }
    }
}


#[cfg(test)]
mod quicktests {
    use std::collections::BTreeSet;

    use super::tests::assert_invariants;
    use super::*;
    use crate::test::quick::Op;

    /// Applies a set of operations to a tree and a `BTreeSet`, checking that they agree after
    /// each one and that the tree's invariants survive it.
    fn do_ops<T>(ops: &[Op<T>], bst: &mut Tree<T>, set: &mut BTreeSet<T>)
    where
        T: Ord + Clone + fmt::Debug,
    {
        for op in ops {
            match op {
                Op::Insert(x) => {
                    assert_eq!(bst.insert(x.clone()), set.insert(x.clone()));
                }
                Op::Remove(x) => {
                    assert_eq!(bst.remove(x), set.take(x));
                }
                Op::EraseNth(n) => {
                    if set.is_empty() {
                        assert_eq!(bst.erase(bst.begin().position()), Err(Error::EndPosition));
                        continue;
                    }
                    let n = n % set.len();
                    let mut cursor = bst.begin();
                    for _ in 0..n {
                        cursor.move_next().unwrap();
                    }
                    let position = cursor.position();
                    let expected = set.iter().nth(n).cloned().unwrap();
                    set.remove(&expected);
                    assert_eq!(bst.erase(position), Ok(expected));
                }
                Op::PopFirst => {
                    assert_eq!(bst.pop_first(), set.pop_first());
                }
                Op::PopLast => {
                    assert_eq!(bst.pop_last(), set.pop_last());
                }
                Op::Clear => {
                    bst.clear();
                    set.clear();
                }
                Op::Iter => {
                    assert!(bst.iter().eq(set.iter()));
                    assert!(bst.iter().rev().eq(set.iter().rev()));
                }
            }
            assert_eq!(bst.len(), set.len());
            assert_eq!(bst.front(), set.first());
            assert_eq!(bst.back(), set.last());
            assert_invariants(bst);
        }
    }

    quickcheck::quickcheck! {
        fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
            let mut tree = Tree::new();
            let mut set = BTreeSet::new();

            do_ops(&ops, &mut tree, &mut set);
            set.iter().all(|x| tree.contains(x)) && tree.iter().eq(set.iter())
        }
    }

    quickcheck::quickcheck! {
        fn contains(xs: Vec<i8>) -> bool {
            let tree: Tree<_> = xs.iter().copied().collect();

            xs.iter().all(|x| tree.get(x) == Some(x))
        }
    }

    quickcheck::quickcheck! {
        fn clone_then_mutate(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
            let tree: Tree<_> = xs.iter().copied().collect();
            let mut copy = tree.clone();
            for x in &deletes {
                copy.remove(x);
            }
            assert_invariants(&copy);

            let expected: BTreeSet<_> = xs.iter().copied().collect();
            tree.iter().eq(expected.iter())
                && deletes.iter().all(|x| !copy.contains(x))
        }
    }
}
