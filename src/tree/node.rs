//! Owned tree node
//!
//! Node = one parcel + two exclusively owned children.
//!   Left child: every weight < node weight
//!   Right child: every weight >= node weight (ties go right)

use std::fmt;

use crate::Parcel;

/// Child slot: absent or a uniquely owned subtree.
pub(crate) type Link = Option<Box<TreeNode>>;

/// Tree node holding one parcel.
#[derive(Debug)]
pub struct TreeNode {
    pub(crate) parcel: Parcel,
    pub(crate) left: Link,
    pub(crate) right: Link,
}

impl TreeNode {
    /// Create a childless node.
    pub fn leaf(parcel: Parcel) -> Self {
        Self {
            parcel,
            left: None,
            right: None,
        }
    }

    /// Parcel stored at this node.
    pub fn parcel(&self) -> &Parcel {
        &self.parcel
    }

    /// Sort key of this node.
    #[inline]
    pub fn weight(&self) -> i32 {
        self.parcel.weight()
    }

    /// Check if leaf (no children)
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Left subtree, if any.
    pub fn left(&self) -> Option<&TreeNode> {
        self.left.as_deref()
    }

    /// Right subtree, if any.
    pub fn right(&self) -> Option<&TreeNode> {
        self.right.as_deref()
    }

    /// Child slot a new parcel of `weight` descends into.
    ///
    /// `<` goes left, `>=` goes right, which keeps equal weights in
    /// insertion order under in-order traversal.
    #[inline]
    pub(crate) fn slot_for(&mut self, weight: i32) -> &mut Link {
        if weight < self.weight() {
            &mut self.left
        } else {
            &mut self.right
        }
    }
}

impl fmt::Display for TreeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_leaf() {
            write!(f, "[{}]", self.weight())
        } else {
            write!(
                f,
                "[{} <{}> {}]",
                self.left.is_some() as u8,
                self.weight(),
                self.right.is_some() as u8
            )
        }
    }
}
