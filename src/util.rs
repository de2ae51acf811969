/// Which child of a node, or which direction of in-order travel. Every traversal in the tree is
/// written once in terms of a `Side` and used for both directions.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Side {
    /// Towards smaller elements.
    Left,
    /// Towards larger elements.
    Right,
}

impl Side {
    pub(crate) fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}
