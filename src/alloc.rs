use std::ptr::NonNull;

use crate::Node;

/// Allocates a fresh red node.
///
/// # Safety
///
/// It leaks; use with own_back.
pub(crate) unsafe fn leak_alloc_node<T>(value: T) -> NonNull<Node<T>> {
    NonNull::from(Box::leak(Box::new(Node::new(value))))
}

/// # Safety
///
/// `node` must come from leak_alloc_node and must not be used afterwards.
pub(crate) unsafe fn own_back<T>(node: NonNull<Node<T>>) -> Box<Node<T>> {
    unsafe { Box::from_raw(node.as_ptr()) }
}
