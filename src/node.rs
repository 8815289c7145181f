use std::{fmt::Debug, ptr};

use super::{Color, Node, NodePtr};

// Public API.
impl<T> Node<T> {
    /// New nodes are red; only the tree decides when one turns black.
    pub fn new(value: T) -> Self {
        Node {
            parent: None,
            left: None,
            right: None,
            color: Color::Red,
            value,
        }
    }

    #[inline(always)]
    pub fn value(&self) -> &T {
        &self.value
    }

    #[inline(always)]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline(always)]
    pub fn is_black(&self) -> bool {
        self.color == Color::Black
    }

    #[inline(always)]
    pub fn is_red(&self) -> bool {
        self.color == Color::Red
    }

    #[inline(always)]
    pub fn left(&self) -> Option<&Node<T>> {
        // SAFETY: children live as long as the tree that owns self.
        self.left.map(|n| unsafe { n.as_ref() })
    }

    #[inline(always)]
    pub fn right(&self) -> Option<&Node<T>> {
        // SAFETY: see left.
        self.right.map(|n| unsafe { n.as_ref() })
    }

    #[inline(always)]
    pub fn parent(&self) -> Option<&Node<T>> {
        // SAFETY: a parent outlives its children.
        self.parent.map(|n| unsafe { n.as_ref() })
    }

    /// The stored link to the left child. Unlike [`Node::left`], the handle
    /// keeps write access and may be handed to a rotation.
    #[inline(always)]
    pub fn left_ptr(&self) -> NodePtr<T> {
        self.left
    }

    #[inline(always)]
    pub fn right_ptr(&self) -> NodePtr<T> {
        self.right
    }

    #[inline(always)]
    pub fn parent_ptr(&self) -> NodePtr<T> {
        self.parent
    }

    /// The in-order successor, if any.
    pub fn next(&self) -> NodePtr<T> {
        // If we have a right-hand child, go down and then left as far as we
        // can.
        if let Some(mut current) = self.right {
            // SAFETY: by if guard, current is valid.
            while let Some(left) = unsafe { current.as_ref() }.left {
                current = left;
            }
            return Some(current);
        }
        // No right-hand children. Everything down and left is smaller than us,
        // so any 'next' node must be in the general direction of our parent:
        // climb while we are a right-hand child, then the parent is next.
        let mut node = self;
        while let Some(parent) = node.parent {
            // SAFETY: parents of live nodes are live.
            let parent_ref = unsafe { parent.as_ref() };
            if parent_ref.left.is_some_and(|l| ptr::eq(l.as_ptr(), node)) {
                return Some(parent);
            }
            node = parent_ref;
        }
        None
    }
}

/// Nodes compare by identity: two nodes are equal only if they are the same
/// vertex.
impl<T> PartialEq for Node<T> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self, other)
    }
}

impl<T> Eq for Node<T> {}

impl<T> Debug for Node<T>
where
    T: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("{:?}::({:?})", self.color, self.value))
    }
}
