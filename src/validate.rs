use crate::{NodePtr, NodePtrExt, RBTree, Result, Violation};

impl<T: Ord> RBTree<T> {
    /// Checks the red-black and search-tree invariants, returning the number
    /// of black nodes on every root-to-leaf path (0 for an empty tree).
    pub fn validate(&self) -> Result<usize> {
        if self.root.is_red() {
            return Err(Violation::RedRoot.into());
        }
        self.check_links()?;
        Ok(black_height(self.root)?)
    }

    /// Parent links and ordering only; colors are not looked at.
    pub(crate) fn check_links(&self) -> std::result::Result<(), Violation> {
        if self.root.parent().is_some() {
            return Err(Violation::ParentLink);
        }
        let mut stack: Vec<_> = self.root.into_iter().collect();
        while let Some(node) = stack.pop() {
            for child in [Some(node).left(), Some(node).right()].into_iter().flatten() {
                if Some(child).parent() != Some(node) {
                    return Err(Violation::ParentLink);
                }
                stack.push(child);
            }
        }

        let mut iter = self.iter().peekable();
        while let Some(node) = iter.next() {
            if iter.peek().is_some_and(|next| next.value() < node.value()) {
                return Err(Violation::Order);
            }
        }
        Ok(())
    }
}

fn black_height<T>(node: NodePtr<T>) -> std::result::Result<usize, Violation> {
    let Some(n) = node else {
        return Ok(0);
    };
    // SAFETY: reached from the root of a live tree.
    let n = unsafe { n.as_ref() };
    if n.is_red() && (n.left.is_red() || n.right.is_red()) {
        return Err(Violation::RedRed);
    }
    let left = black_height(n.left)?;
    if left != black_height(n.right)? {
        return Err(Violation::BlackHeight);
    }
    Ok(left + usize::from(n.is_black()))
}
