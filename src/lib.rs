//! An insert-only red-black tree: unbalanced placement, rotations, and the
//! recoloring fix-up that keeps the tree balanced after every insertion.

mod alloc;
mod error;
mod fixup;
mod iter;
mod node;
mod place;
mod tree;
mod validate;

use std::ptr::NonNull;

pub use error::{Error, Result, Violation};
pub use iter::Iter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Black,
}

pub type NodePtr<T> = Option<NonNull<Node<T>>>;

/// Null-tolerant accessors: an absent node reads as black with no links and
/// ignores writes.
pub(crate) trait NodePtrExt {
    type Value;

    fn color(&self) -> Color;
    fn is_black(&self) -> bool;
    fn is_red(&self) -> bool;
    fn left(&self) -> NodePtr<Self::Value>;
    fn parent(&self) -> NodePtr<Self::Value>;
    fn right(&self) -> NodePtr<Self::Value>;
    fn set_color(&mut self, color: Color);
    fn set_left(&mut self, left: NodePtr<Self::Value>);
    fn set_parent(&mut self, parent: NodePtr<Self::Value>);
    fn set_right(&mut self, right: NodePtr<Self::Value>);
}

impl<T> NodePtrExt for NodePtr<T> {
    type Value = T;

    #[inline(always)]
    fn color(&self) -> Color {
        self.map_or(Color::Black, |v| unsafe { v.as_ref() }.color)
    }

    #[inline(always)]
    fn is_black(&self) -> bool {
        self.map_or(true, |v| unsafe { v.as_ref() }.is_black())
    }

    #[inline(always)]
    fn is_red(&self) -> bool {
        self.map_or(false, |v| unsafe { v.as_ref() }.is_red())
    }

    #[inline(always)]
    fn left(&self) -> NodePtr<T> {
        self.and_then(|v| unsafe { v.as_ref() }.left)
    }

    #[inline(always)]
    fn parent(&self) -> NodePtr<T> {
        self.and_then(|v| unsafe { v.as_ref() }.parent)
    }

    #[inline(always)]
    fn right(&self) -> NodePtr<T> {
        self.and_then(|v| unsafe { v.as_ref() }.right)
    }

    #[inline(always)]
    fn set_color(&mut self, color: Color) {
        if let Some(node) = self {
            unsafe { node.as_mut() }.color = color;
        }
    }

    #[inline(always)]
    fn set_left(&mut self, left: NodePtr<T>) {
        if let Some(node) = self {
            unsafe { node.as_mut() }.left = left;
        }
    }

    #[inline(always)]
    fn set_parent(&mut self, parent: NodePtr<T>) {
        if let Some(node) = self {
            unsafe { node.as_mut() }.parent = parent;
        }
    }

    #[inline(always)]
    fn set_right(&mut self, right: NodePtr<T>) {
        if let Some(node) = self {
            unsafe { node.as_mut() }.right = right;
        }
    }
}

impl<T> From<&Node<T>> for NodePtr<T> {
    fn from(node: &Node<T>) -> Self {
        Some(NonNull::from(node))
    }
}

impl<T> From<&mut Node<T>> for NodePtr<T> {
    fn from(node: &mut Node<T>) -> Self {
        Some(NonNull::from(node))
    }
}

/// A tree vertex. `left` and `right` are owned through the tree; `parent` is
/// a back-link only and never frees anything.
pub struct Node<T> {
    pub(crate) parent: NodePtr<T>,
    pub(crate) left: NodePtr<T>,
    pub(crate) right: NodePtr<T>,
    pub(crate) color: Color,
    value: T,
}

/// The abstract binary search tree contract.
///
/// Implementors only expose their root slot; placement and rotations come for
/// free and know nothing about coloring policy.
pub trait BinarySearchTree {
    type Value: Ord;

    fn root_ptr(&self) -> NodePtr<Self::Value>;
    fn set_root_ptr(&mut self, root: NodePtr<Self::Value>);

    /// Removes `node` from the tree.
    fn delete(&mut self, node: NonNull<Node<Self::Value>>) -> Result<()>;

    /// Attaches `node` at the empty slot its value orders into, without any
    /// rebalancing. Ties go right. `after` sees the node and whether it became
    /// the root.
    ///
    /// # Safety
    ///
    /// `node` must be a live, unlinked node allocated for this tree; the tree
    /// takes ownership of it.
    unsafe fn place<F>(&mut self, node: NonNull<Node<Self::Value>>, after: F)
    where
        F: FnOnce(&mut Node<Self::Value>, bool),
    {
        // SAFETY: delegated to the caller.
        unsafe { place::place(self, node, after) }
    }

    /// Moves `node` into its parent's position; the parent becomes `node`'s
    /// left child. `node` must be its parent's right child.
    ///
    /// On a precondition failure the tree is left untouched.
    ///
    /// # Safety
    ///
    /// `node` must be a live node linked into this tree, taken from
    /// [`BinarySearchTree::root_ptr`] or a stored link ([`Node::left_ptr`],
    /// [`Node::right_ptr`], [`Node::parent_ptr`]). A pointer made from a
    /// `&Node` only allows reads and must not be passed here.
    unsafe fn rotate_left(&mut self, node: NonNull<Node<Self::Value>>) -> Result<()> {
        // SAFETY: delegated to the caller.
        unsafe { place::rotate_left(self, node) }
    }

    /// Mirror of [`BinarySearchTree::rotate_left`]: `node` must be its
    /// parent's left child.
    ///
    /// # Safety
    ///
    /// `node` must be a live node linked into this tree, taken from
    /// [`BinarySearchTree::root_ptr`] or a stored link ([`Node::left_ptr`],
    /// [`Node::right_ptr`], [`Node::parent_ptr`]). A pointer made from a
    /// `&Node` only allows reads and must not be passed here.
    unsafe fn rotate_right(&mut self, node: NonNull<Node<Self::Value>>) -> Result<()> {
        // SAFETY: delegated to the caller.
        unsafe { place::rotate_right(self, node) }
    }
}

/// A red-black tree of values ordered by `T: Ord`. Duplicates are kept.
pub struct RBTree<T> {
    root: NodePtr<T>,
    len: usize,
}
