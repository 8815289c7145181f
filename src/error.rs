use std::fmt;

/// Which red-black or search-tree invariant a tree failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    /// The root is red.
    RedRoot,
    /// A red node has a red child.
    RedRed,
    /// Two paths from the same node count a different number of black nodes.
    BlackHeight,
    /// A child's parent link does not point back at the node owning it.
    ParentLink,
    /// An in-order neighbour is smaller than its predecessor.
    Order,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The operation is part of the tree contract but not implemented.
    Unsupported(&'static str),
    /// A rotation was asked for on the root.
    NoParent,
    /// A right rotation was asked for on a node that is not a left child.
    NotLeftChild,
    /// A left rotation was asked for on a node that is not a right child.
    NotRightChild,
    Violation(Violation),
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::RedRoot => write!(f, "root is red"),
            Violation::RedRed => write!(f, "red node has a red child"),
            Violation::BlackHeight => write!(f, "black height differs between paths"),
            Violation::ParentLink => write!(f, "parent link does not match owner"),
            Violation::Order => write!(f, "values out of order"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Unsupported(op) => write!(f, "unsupported operation: {}", op),
            Error::NoParent => write!(f, "cannot rotate the root"),
            Error::NotLeftChild => write!(f, "right rotation needs a left child"),
            Error::NotRightChild => write!(f, "left rotation needs a right child"),
            Error::Violation(v) => write!(f, "invariant violated: {}", v),
        }
    }
}

impl std::error::Error for Error {}

impl From<Violation> for Error {
    fn from(violation: Violation) -> Self {
        Error::Violation(violation)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
