//! Explicit-stack in-order traversal
//!
//! Stack holds the pending left spine, so depth is bounded by tree height
//! on the heap instead of the call stack. Degenerate trees (monotonic
//! insertion) stay safe.

use super::TreeNode;
use crate::query::WeightFilter;
use crate::Parcel;

/// In-order (ascending weight) iterator over a tree.
#[derive(Debug, Clone)]
pub struct InOrder<'a> {
    stack: Vec<&'a TreeNode>,
    remaining: usize,
}

impl<'a> InOrder<'a> {
    pub(crate) fn new(root: Option<&'a TreeNode>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut link: Option<&'a TreeNode>) {
        while let Some(node) = link {
            self.stack.push(node);
            link = node.left();
        }
    }
}

impl<'a> Iterator for InOrder<'a> {
    type Item = &'a Parcel;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        self.remaining = self.remaining.saturating_sub(1);
        Some(node.parcel())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for InOrder<'_> {}

/// In-order iterator yielding only parcels that pass a weight filter.
///
/// Subtrees that cannot contain a match are never pushed:
///   Above t: skip left of any node with weight <= t
///   Below t: skip right of any node with weight >= t
#[derive(Debug, Clone)]
pub struct Filtered<'a> {
    stack: Vec<&'a TreeNode>,
    filter: WeightFilter,
    threshold: i32,
}

impl<'a> Filtered<'a> {
    pub(crate) fn new(root: Option<&'a TreeNode>, threshold: i32, filter: WeightFilter) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            filter,
            threshold,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut link: Option<&'a TreeNode>) {
        while let Some(node) = link {
            self.stack.push(node);
            link = match self.filter {
                WeightFilter::Above if node.weight() <= self.threshold => None,
                _ => node.left(),
            };
        }
    }
}

impl<'a> Iterator for Filtered<'a> {
    type Item = &'a Parcel;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let node = self.stack.pop()?;
            let right = match self.filter {
                WeightFilter::Below if node.weight() >= self.threshold => None,
                _ => node.right(),
            };
            self.push_left_spine(right);
            if self.filter.matches(node.weight(), self.threshold) {
                return Some(node.parcel());
            }
        }
    }
}
