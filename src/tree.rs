use std::{fmt::Debug, ptr::NonNull};

use log::debug;

use crate::{BinarySearchTree, Color, Error, Node, NodePtr, NodePtrExt, RBTree, Result, alloc};

impl<T> Drop for RBTree<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for RBTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RBTree<T> {
    pub const fn new() -> Self {
        RBTree { root: None, len: 0 }
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn root(&self) -> Option<&Node<T>> {
        // SAFETY: the root lives as long as the tree.
        self.root.map(|n| unsafe { n.as_ref() })
    }

    /// Frees every node, leaving an empty tree.
    pub fn clear(&mut self) {
        if self.root.is_none() {
            return;
        }
        debug!("clearing tree of {} nodes", self.len);

        // Post-order, bottom-up: descend to a leaf, unhook it from its
        // parent and free it, then resume from the parent. No rebalancing.
        let mut current = self.root.take();
        while let Some(node) = current {
            // SAFETY: every node reachable from the root is live until freed
            // below, and each is freed once.
            let node_ref = unsafe { node.as_ref() };
            if node_ref.left.is_some() {
                current = node_ref.left;
                continue;
            }
            if node_ref.right.is_some() {
                current = node_ref.right;
                continue;
            }
            let mut parent = node_ref.parent;
            if parent.left() == current {
                parent.set_left(None);
            } else {
                parent.set_right(None);
            }
            current = parent;
            drop(unsafe { alloc::own_back(node) });
        }
        self.len = 0;
    }
}

impl<T: Ord> RBTree<T> {
    /// Inserts `value`, rebalancing on the way back up. Equal values are kept
    /// and land after the ones already present.
    pub fn insert(&mut self, value: T) {
        // SAFETY: the node is fresh and handed straight to the tree.
        let node = unsafe { alloc::leak_alloc_node(value) };
        unsafe {
            self.place(node, |node, is_root| {
                if is_root {
                    node.color = Color::Black;
                }
            })
        };
        self.len += 1;
        self.fix_after_insert(node);
    }
}

impl<T: Ord> BinarySearchTree for RBTree<T> {
    type Value = T;

    fn root_ptr(&self) -> NodePtr<T> {
        self.root
    }

    fn set_root_ptr(&mut self, root: NodePtr<T>) {
        self.root = root;
    }

    fn delete(&mut self, _node: NonNull<Node<T>>) -> Result<()> {
        Err(Error::Unsupported("delete"))
    }
}

impl<T: Ord> FromIterator<T> for RBTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> RBTree<T> {
        let mut tree = RBTree::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for RBTree<T> {
    #[inline]
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(move |v| self.insert(v));
    }
}

impl<T: Debug> Debug for RBTree<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use pretty_assertions::assert_eq;
    use rand::{SeedableRng, seq::SliceRandom};
    use rand_chacha::ChaCha8Rng;

    fn node(value: i32, color: Color) -> (i32, Color) {
        (value, color)
    }

    fn at(node: Option<&Node<i32>>) -> Option<(i32, Color)> {
        node.map(|n| (*n.value(), n.color()))
    }

    #[test]
    fn tree_ctor_works() {
        let tree = RBTree::<usize>::new();
        assert_eq!(0, tree.len());
        assert!(tree.is_empty());
        assert!(tree.root().is_none());
        assert_eq!(Ok(0), tree.validate());
    }

    #[test]
    fn insert_one() {
        let tree: RBTree<i32> = [1].into_iter().collect();
        let root = tree.root();
        assert_eq!(Some(node(1, Color::Black)), at(root));
        assert!(root.unwrap().left().is_none());
        assert!(root.unwrap().right().is_none());
    }

    #[test]
    fn insert_two() {
        let tree: RBTree<i32> = [1, 2].into_iter().collect();
        let root = tree.root().unwrap();
        assert_eq!(Some(node(1, Color::Black)), at(Some(root)));
        assert_eq!(Some(node(2, Color::Red)), at(root.right()));
        assert_eq!(None, at(root.left()));
    }

    #[test]
    fn insert_three() {
        let tree: RBTree<i32> = [1, 2, 3].into_iter().collect();
        let root = tree.root().unwrap();
        assert_eq!(Some(node(2, Color::Black)), at(Some(root)));
        assert_eq!(Some(node(1, Color::Red)), at(root.left()));
        assert_eq!(Some(node(3, Color::Red)), at(root.right()));
    }

    #[test]
    fn insert_four() {
        let tree: RBTree<i32> = [1, 2, 3, 4].into_iter().collect();
        let root = tree.root().unwrap();
        assert_eq!(Some(node(2, Color::Black)), at(Some(root)));
        assert_eq!(Some(node(1, Color::Black)), at(root.left()));
        let right = root.right().unwrap();
        assert_eq!(Some(node(3, Color::Black)), at(Some(right)));
        assert_eq!(Some(node(4, Color::Red)), at(right.right()));
        assert_eq!(None, at(right.left()));
    }

    #[test]
    fn insert_six() {
        let tree: RBTree<i32> = [1, 2, 3, 4, 8, 6].into_iter().collect();
        let root = tree.root().unwrap();
        assert_eq!(Some(node(2, Color::Black)), at(Some(root)));
        assert_eq!(Some(node(1, Color::Black)), at(root.left()));
        let right = root.right().unwrap();
        assert_eq!(Some(node(4, Color::Red)), at(Some(right)));
        assert_eq!(Some(node(3, Color::Black)), at(right.left()));
        assert_eq!(Some(node(8, Color::Black)), at(right.right()));
        assert_eq!(
            Some(node(6, Color::Red)),
            at(right.right().and_then(|n| n.left()))
        );
        assert_eq!(Ok(2), tree.validate());
    }

    #[test]
    fn insert_same_value() {
        let mut tree = RBTree::new();
        for _ in 0..5 {
            tree.insert(42);
        }
        assert_eq!(5, tree.len());
        assert_eq!(vec![42; 5], tree.iter().map(|n| *n.value()).collect::<Vec<_>>());
        assert!(tree.validate().is_ok());
    }

    #[test]
    #[cfg_attr(miri, ignore)]
    fn insert_multiple_values() {
        let mut data: Vec<usize> = (0..1000).collect();
        data.shuffle(&mut ChaCha8Rng::seed_from_u64(0x5eed));
        let mut tree = RBTree::new();
        for v in data.iter() {
            tree.insert(*v);
            assert!(tree.validate().is_ok());
        }

        assert_eq!(data.len(), tree.len());
        data.sort();
        assert_eq!(data, tree.iter().map(|n| *n.value()).collect::<Vec<_>>());
    }

    #[test]
    fn insert_descending() {
        let tree: RBTree<i32> = (0..128).rev().collect();
        assert_eq!(128, tree.len());
        assert!(tree.validate().is_ok());
        assert_eq!(
            (0..128).collect::<Vec<_>>(),
            tree.iter().map(|n| *n.value()).collect::<Vec<_>>()
        );
    }

    #[test]
    fn delete_is_unsupported() {
        let mut tree: RBTree<i32> = [1, 2, 3].into_iter().collect();
        let root = tree.root_ptr().unwrap();
        assert_eq!(Err(Error::Unsupported("delete")), tree.delete(root));
        assert_eq!(3, tree.len());
        assert_eq!(Some(node(2, Color::Black)), at(tree.root()));
    }

    #[test]
    fn clear() {
        let mut tree: RBTree<String> = (0..64).map(|i| format!("{i}")).collect();
        assert_eq!(64, tree.len());
        tree.clear();
        assert!(tree.is_empty());
        assert!(tree.root().is_none());
        tree.insert("again".to_string());
        assert_eq!(1, tree.len());
        assert_eq!(Some("again"), tree.root().map(|n| n.value().as_str()));
    }

    #[test]
    fn debug() {
        let tree: RBTree<i32> = [1, 2, 3].into_iter().collect();
        assert_eq!("[Red::(1), Black::(2), Red::(3)]", format!("{tree:?}"));
    }
}
