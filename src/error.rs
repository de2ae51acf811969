use thiserror::Error;

/// The ways a positional operation on a [`Tree`](crate::Tree) can be misused.
///
/// Looking up a missing element is not an error; those operations return `Option`.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum Error {
    /// The end position does not hold an element.
    #[error("the end position does not refer to an element")]
    EndPosition,
    /// The position refers to a node that has since been removed from the tree.
    #[error("the position no longer refers to an element of this tree")]
    InvalidPosition,
    /// A cursor at the end position was moved forward.
    #[error("cannot advance a cursor past the end of the tree")]
    AdvancePastEnd,
    /// A cursor at the first element (or on an empty tree) was moved backward.
    #[error("cannot move a cursor before the first element of the tree")]
    RetreatPastBegin,
}
