use std::ptr::NonNull;

use log::trace;

use crate::{BinarySearchTree, Color, Node, NodePtr, NodePtrExt, RBTree, Result};

/// Where a node hangs below its grandparent: the first side is the parent's
/// side of the grandparent, the second is the node's side of the parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Shape {
    LeftLeft,
    LeftRight,
    RightLeft,
    RightRight,
}

impl Shape {
    /// `None` when the node has no grandparent.
    pub(crate) fn of<T>(node: NodePtr<T>) -> Option<Shape> {
        let parent = node.parent();
        let gparent = parent.parent();
        gparent?;
        let node_is_left = parent.left() == node;
        let parent_is_left = gparent.left() == parent;
        Some(match (parent_is_left, node_is_left) {
            (true, true) => Shape::LeftLeft,
            (true, false) => Shape::LeftRight,
            (false, true) => Shape::RightLeft,
            (false, false) => Shape::RightRight,
        })
    }
}

#[inline]
fn swap_colors<T>(mut a: NodePtr<T>, mut b: NodePtr<T>) {
    let color = a.color();
    a.set_color(b.color());
    b.set_color(color);
}

#[inline]
fn rotated(shape: Shape, result: Result<()>) {
    debug_assert!(result.is_ok(), "{shape:?} rotation failed: {result:?}");
}

impl<T: Ord> RBTree<T> {
    /// Restores the red-black invariants after `node` was placed red.
    pub(crate) fn fix_after_insert(&mut self, node: NonNull<Node<T>>) {
        let mut node: NodePtr<T> = Some(node);

        loop {
            /*
             * Loop invariant: node is red.
             */
            let mut parent = node.parent();
            if parent.is_none() {
                /*
                 * node is the root. Either this is the first node, or a
                 * recoloring below pushed red all the way up.
                 */
                trace!("fix-up reached the root; painting it black");
                node.set_color(Color::Black);
                break;
            }

            if parent.is_black() {
                break;
            }

            // A red parent is never the root, so gparent is there.
            let mut gparent = parent.parent();
            let mut uncle = if gparent.left() == parent {
                gparent.right()
            } else {
                gparent.left()
            };

            if uncle.is_red() {
                /*
                 * Red uncle (color flips).
                 *
                 *       G            g
                 *      / \          / \
                 *     p   u  -->   P   U
                 *    /            /
                 *   n            n
                 *
                 * g's parent might be red too, so carry on from g.
                 */
                trace!("red uncle; recoloring and moving up");
                parent.set_color(Color::Black);
                uncle.set_color(Color::Black);
                gparent.set_color(Color::Red);
                node = gparent;
                continue;
            }

            let (Some(shape), Some(n), Some(p)) = (Shape::of(node), node, parent) else {
                break;
            };
            trace!("black uncle; rotating {shape:?}");
            // SAFETY: n, p and their ancestors are linked into self, and the
            // shape guarantees each rotation's child-side precondition.
            unsafe {
                match shape {
                    Shape::LeftLeft => {
                        rotated(shape, self.rotate_right(p));
                        swap_colors(gparent, parent);
                    }
                    Shape::RightRight => {
                        rotated(shape, self.rotate_left(p));
                        swap_colors(gparent, parent);
                    }
                    Shape::LeftRight => {
                        rotated(shape, self.rotate_left(n));
                        rotated(shape, self.rotate_right(n));
                        swap_colors(gparent, node);
                    }
                    Shape::RightLeft => {
                        rotated(shape, self.rotate_right(n));
                        rotated(shape, self.rotate_left(n));
                        swap_colors(gparent, node);
                    }
                }
            }
            break;
        }
    }
}
