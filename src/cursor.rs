//! Positions within a [`Tree`]. A [`Cursor`] borrows the tree and can step to the next or
//! previous element; a [`Position`] is a detached copy of where a cursor was, used to name an
//! element to [`Tree::erase`].

use std::fmt;
use std::ptr;

use crate::arena::{Generation, NodeId};
use crate::error::Error;
use crate::tree::{Link, Tree, TreeId};

/// A read-only cursor over a [`Tree`]. It points either at an element or at the end position,
/// one past the largest element.
///
/// Stepping uses only the links between nodes so each move is `O(height)` in the worst case and
/// `O(1)` amortized over a full traversal.
///
/// # Examples
///
/// ```
/// use bstree::{Error, Tree};
///
/// let tree: Tree<_> = [2, 1, 3].into_iter().collect();
///
/// let mut cursor = tree.end();
/// cursor.move_prev().unwrap();
/// assert_eq!(cursor.get(), Some(&3));
///
/// cursor.move_next().unwrap();
/// assert!(cursor.is_end());
/// assert_eq!(cursor.move_next(), Err(Error::AdvancePastEnd));
/// ```
pub struct Cursor<'a, T> {
    tree: &'a Tree<T>,
    current: Link,
}

// Manual impls so a cursor is `Copy` whatever `T` is.
impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

/// Cursors are equal when they point at the same node of the same tree. Equal elements in
/// different trees do not make cursors equal.
impl<T> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.tree, other.tree) && self.current == other.current
    }
}

impl<T> Eq for Cursor<'_, T> {}

impl<T> fmt::Debug for Cursor<'_, T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Cursor").field(&self.get()).finish()
    }
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new(tree: &'a Tree<T>, current: Link) -> Self {
        Self { tree, current }
    }

    /// The element under the cursor, or `None` at the end position.
    pub fn get(&self) -> Option<&'a T> {
        let tree = self.tree;
        self.current.map(|id| &tree.node(id).value)
    }

    /// Returns `true` if the cursor is at the end position.
    pub fn is_end(&self) -> bool {
        self.current.is_none()
    }

    /// Where the cursor is, detached from the borrow of the tree.
    pub fn position(&self) -> Position {
        self.tree.position_of(self.current)
    }

    /// Moves to the next larger element, or to the end position from the largest element.
    ///
    /// # Errors
    ///
    /// [`Error::AdvancePastEnd`] if the cursor is already at the end. The cursor doesn't move.
    pub fn move_next(&mut self) -> Result<(), Error> {
        let id = self.current.ok_or(Error::AdvancePastEnd)?;
        self.current = self.tree.successor(id);
        Ok(())
    }

    /// Moves to the next smaller element. From the end position this is the largest element.
    ///
    /// # Errors
    ///
    /// [`Error::RetreatPastBegin`] if the cursor is at the smallest element or the tree is
    /// empty. The cursor doesn't move.
    pub fn move_prev(&mut self) -> Result<(), Error> {
        let previous = match self.current {
            None => self.tree.last_node(),
            Some(id) => self.tree.predecessor(id),
        };
        if previous.is_none() {
            return Err(Error::RetreatPastBegin);
        }
        self.current = previous;
        Ok(())
    }
}

/// A location in a [`Tree`] that doesn't borrow it, taken from [`Cursor::position`].
///
/// A position names one element of one tree. Once that element is removed, or when the position
/// is handed to a different tree, [`Tree::erase`] rejects it with [`Error::InvalidPosition`].
/// Positions from different trees never compare equal.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Position {
    tree: TreeId,
    node: Option<(NodeId, Generation)>,
}

impl Position {
    pub(crate) fn new(tree: TreeId, node: Option<(NodeId, Generation)>) -> Self {
        Self { tree, node }
    }

    pub(crate) fn tree(self) -> TreeId {
        self.tree
    }

    pub(crate) fn node(self) -> Option<(NodeId, Generation)> {
        self.node
    }

    /// Returns `true` for the end position.
    pub fn is_end(self) -> bool {
        self.node.is_none()
    }
}
