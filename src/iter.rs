use std::{iter::FusedIterator, marker::PhantomData};

use crate::{Node, NodePtr, RBTree};

/// An iterator over the tree's nodes in in-order (sorted) traversal.
pub struct Iter<'a, T> {
    current: NodePtr<T>,
    phantom: PhantomData<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        // SAFETY: the tree is borrowed for 'a, so its nodes stay put.
        let current = unsafe { self.current?.as_ref() };
        self.current = current.next();
        Some(current)
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            current: self.current,
            phantom: PhantomData,
        }
    }
}

impl<T> RBTree<T> {
    pub fn iter(&self) -> Iter<'_, T> {
        let mut current = self.root;
        while let Some(left) = current.and_then(|n| unsafe { n.as_ref() }.left) {
            current = Some(left);
        }
        Iter {
            current,
            phantom: PhantomData,
        }
    }
}

impl<'a, T> IntoIterator for &'a RBTree<T> {
    type Item = &'a Node<T>;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
