use std::ptr::NonNull;

use crate::{BinarySearchTree, Error, Node, NodePtr, NodePtrExt, Result};

/// # Safety
///
/// See [`BinarySearchTree::place`].
pub(crate) unsafe fn place<B, F>(tree: &mut B, mut node: NonNull<Node<B::Value>>, after: F)
where
    B: BinarySearchTree + ?Sized,
    F: FnOnce(&mut Node<B::Value>, bool),
{
    // SAFETY: the caller hands over a live, unlinked node.
    let new = unsafe { node.as_mut() };
    let Some(mut parent) = tree.root_ptr() else {
        new.parent = None;
        tree.set_root_ptr(Some(node));
        after(new, true);
        return;
    };

    let mut link = Some(parent);
    while let Some(candidate) = link {
        parent = candidate;
        // SAFETY: every linked node is live.
        let candidate = unsafe { candidate.as_ref() };
        link = if new.value() < candidate.value() {
            candidate.left
        } else {
            candidate.right
        };
    }

    // SAFETY: parent was reached from the root.
    let parent_ref = unsafe { parent.as_mut() };
    if new.value() < parent_ref.value() {
        parent_ref.left = Some(node);
    } else {
        parent_ref.right = Some(node);
    }
    new.parent = Some(parent);
    after(new, false);
}

/// Points whatever owned `old` (a parent slot or the root) at `new`.
fn change_child<B>(tree: &mut B, old: NonNull<Node<B::Value>>, new: NodePtr<B::Value>, parent: NodePtr<B::Value>)
where
    B: BinarySearchTree + ?Sized,
{
    if let Some(mut parent) = parent {
        // SAFETY: parent is a live node of tree.
        let parent = unsafe { parent.as_mut() };
        if parent.left == Some(old) {
            parent.left = new;
        } else {
            parent.right = new;
        }
    } else {
        tree.set_root_ptr(new);
    }
}

/// ```text
///       P               N
///      / \             / \
///     a   N    -->    P   c
///        / \         / \
///       b   c       a   b
/// ```
///
/// # Safety
///
/// See [`BinarySearchTree::rotate_left`].
pub(crate) unsafe fn rotate_left<B>(tree: &mut B, node: NonNull<Node<B::Value>>) -> Result<()>
where
    B: BinarySearchTree + ?Sized,
{
    let mut node: NodePtr<B::Value> = Some(node);
    let mut parent = node.parent();
    let Some(old) = parent else {
        return Err(Error::NoParent);
    };
    if parent.right() != node {
        return Err(Error::NotRightChild);
    }

    let gparent = parent.parent();
    let mut inner = node.left();
    parent.set_right(inner);
    inner.set_parent(parent);
    node.set_left(parent);
    parent.set_parent(node);
    node.set_parent(gparent);
    change_child(tree, old, node, gparent);
    Ok(())
}

/// ```text
///         P           N
///        / \         / \
///       N   c  -->  a   P
///      / \             / \
///     a   b           b   c
/// ```
///
/// # Safety
///
/// See [`BinarySearchTree::rotate_right`].
pub(crate) unsafe fn rotate_right<B>(tree: &mut B, node: NonNull<Node<B::Value>>) -> Result<()>
where
    B: BinarySearchTree + ?Sized,
{
    let mut node: NodePtr<B::Value> = Some(node);
    let mut parent = node.parent();
    let Some(old) = parent else {
        return Err(Error::NoParent);
    };
    if parent.left() != node {
        return Err(Error::NotLeftChild);
    }

    let gparent = parent.parent();
    let mut inner = node.right();
    parent.set_left(inner);
    inner.set_parent(parent);
    node.set_right(parent);
    parent.set_parent(node);
    node.set_parent(gparent);
    change_child(tree, old, node, gparent);
    Ok(())
}
