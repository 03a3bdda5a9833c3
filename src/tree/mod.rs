//! Weight-ordered parcel tree
//!
//! Unbalanced binary search tree keyed by weight. One tree per hash
//! bucket. Insertion and every traversal use loops over owned links or an
//! explicit stack, never recursion, so a degenerate O(n)-deep tree is
//! handled in bounded call-stack space.

mod node;
mod traversal;

pub use node::TreeNode;
pub use traversal::{Filtered, InOrder};

use node::Link;

use crate::query::{Extremes, Totals, WeightFilter};
use crate::Parcel;

/// Binary search tree of parcels ordered by weight.
#[derive(Debug, Default)]
pub struct WeightTree {
    root: Link,
    len: usize,
}

impl WeightTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Insert a parcel.
    ///
    /// Walks owned links down to the empty slot; equal weights go right.
    /// Total: never fails short of allocation failure.
    pub fn insert(&mut self, parcel: Parcel) {
        let weight = parcel.weight();
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = node.slot_for(weight);
        }
        *link = Some(Box::new(TreeNode::leaf(parcel)));
        self.len += 1;
    }

    /// Number of stored parcels
    pub fn len(&self) -> usize {
        self.len
    }

    /// `true` when no parcel has been inserted.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Root node, if any.
    pub fn root(&self) -> Option<&TreeNode> {
        self.root.as_deref()
    }

    /// Number of nodes on the longest root-to-leaf path (0 when empty).
    ///
    /// No rebalancing is done, so this is `len()` for sorted input.
    pub fn height(&self) -> usize {
        let mut max = 0;
        let mut stack: Vec<(&TreeNode, usize)> = Vec::new();
        if let Some(root) = self.root() {
            stack.push((root, 1));
        }
        while let Some((node, depth)) = stack.pop() {
            max = max.max(depth);
            stack.extend(node.left().map(|n| (n, depth + 1)));
            stack.extend(node.right().map(|n| (n, depth + 1)));
        }
        max
    }

    /// Parcels in ascending weight order; ties in insertion order.
    pub fn iter(&self) -> InOrder<'_> {
        InOrder::new(self.root(), self.len)
    }

    /// Parcels whose weight is strictly above or below `threshold`, in
    /// ascending weight order.
    pub fn filter_by_weight(&self, threshold: i32, filter: WeightFilter) -> Filtered<'_> {
        Filtered::new(self.root(), threshold, filter)
    }

    /// Sum weights and valuations over every parcel.
    pub fn totals(&self) -> Totals {
        self.iter().fold(Totals::default(), Totals::accumulate)
    }

    /// Minimum and maximum parcel under `key`, found in one in-order pass.
    ///
    /// Strict comparisons: the first visited parcel wins a tie. `None` for
    /// an empty tree.
    pub fn extremes_by<K, F>(&self, mut key: F) -> Option<Extremes<'_>>
    where
        K: PartialOrd,
        F: FnMut(&Parcel) -> K,
    {
        let mut iter = self.iter();
        let first = iter.next()?;
        let first_key = key(first);
        let mut lowest = (first, first_key);
        let mut highest = (first, key(first));

        for parcel in iter {
            let k = key(parcel);
            if k < lowest.1 {
                lowest = (parcel, k);
            } else if k > highest.1 {
                highest = (parcel, k);
            }
        }

        Some(Extremes {
            lowest: lowest.0,
            highest: highest.0,
        })
    }

    /// Cheapest and most expensive parcel.
    pub fn extremes_by_valuation(&self) -> Option<Extremes<'_>> {
        self.extremes_by(Parcel::valuation)
    }

    /// Lightest and heaviest parcel.
    pub fn extremes_by_weight(&self) -> Option<Extremes<'_>> {
        self.extremes_by(Parcel::weight)
    }
}

impl Drop for WeightTree {
    /// Post-order teardown without recursion.
    ///
    /// Each node's children are detached before the node itself is
    /// released, so the default recursive `Box` drop never runs deeper
    /// than one level.
    fn drop(&mut self) {
        let mut pending: Vec<Box<TreeNode>> = Vec::new();
        pending.extend(self.root.take());
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

impl Extend<Parcel> for WeightTree {
    fn extend<I: IntoIterator<Item = Parcel>>(&mut self, iter: I) {
        for parcel in iter {
            self.insert(parcel);
        }
    }
}

impl FromIterator<Parcel> for WeightTree {
    fn from_iter<I: IntoIterator<Item = Parcel>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<'a> IntoIterator for &'a WeightTree {
    type Item = &'a Parcel;
    type IntoIter = InOrder<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parcel(weight: i32, valuation: f64) -> Parcel {
        Parcel::new("Canada", weight, valuation)
    }

    #[test]
    fn insert_keeps_search_order() {
        let tree: WeightTree = [10, 5, 15, 3, 7, 12, 20]
            .into_iter()
            .map(|w| parcel(w, 0.0))
            .collect();
        let root = tree.root().expect("non-empty tree");
        assert_eq!(root.weight(), 10);
        assert_eq!(root.left().map(TreeNode::weight), Some(5));
        assert_eq!(root.right().map(TreeNode::weight), Some(15));
        assert_eq!(tree.len(), 7);
        assert_eq!(tree.height(), 3);
    }

    #[test]
    fn equal_weights_keep_insertion_order() {
        let mut tree = WeightTree::new();
        tree.insert(parcel(4, 1.0));
        tree.insert(parcel(4, 2.0));
        tree.insert(parcel(1, 9.0));
        tree.insert(parcel(4, 3.0));

        let seen: Vec<(i32, f64)> = tree
            .iter()
            .map(|p| (p.weight(), p.valuation()))
            .collect();
        assert_eq!(seen, vec![(1, 9.0), (4, 1.0), (4, 2.0), (4, 3.0)]);
    }

    #[test]
    fn empty_tree_queries() {
        let tree = WeightTree::new();
        assert!(tree.is_empty());
        assert_eq!(tree.height(), 0);
        assert_eq!(tree.totals(), Totals::default());
        assert!(tree.extremes_by_weight().is_none());
        assert!(tree.extremes_by_valuation().is_none());
    }

    #[test]
    fn totals_sum_every_parcel() {
        let tree: WeightTree = [(10, 100.0), (5, 50.0), (5, 25.5)]
            .into_iter()
            .map(|(w, v)| parcel(w, v))
            .collect();
        let totals = tree.totals();
        assert_eq!(totals.count, 3);
        assert_eq!(totals.total_weight, 20);
        assert_eq!(totals.total_valuation, 175.5);
    }

    #[test]
    fn totals_do_not_overflow_i32() {
        let tree: WeightTree = (0..4).map(|_| parcel(i32::MAX, 0.0)).collect();
        assert_eq!(tree.totals().total_weight, 4 * i64::from(i32::MAX));
    }

    #[test]
    fn valuation_ties_keep_first_visited() {
        let tree: WeightTree = [(8, 1.0), (2, 5.0), (9, 5.0), (1, 1.0)]
            .into_iter()
            .map(|(w, v)| parcel(w, v))
            .collect();
        let extremes = tree.extremes_by_valuation().expect("non-empty tree");
        // in-order: (1,1.0) (2,5.0) (8,1.0) (9,5.0)
        assert_eq!(extremes.lowest.weight(), 1);
        assert_eq!(extremes.highest.weight(), 2);
    }

    #[test]
    fn weight_ties_keep_earliest_inserted() {
        let tree: WeightTree = [(7, 1.0), (3, 2.0), (7, 3.0), (3, 4.0)]
            .into_iter()
            .map(|(w, v)| parcel(w, v))
            .collect();
        let extremes = tree.extremes_by_weight().expect("non-empty tree");
        assert_eq!(extremes.lowest.valuation(), 2.0);
        assert_eq!(extremes.highest.valuation(), 1.0);
    }

    #[test]
    fn single_parcel_is_both_extremes() {
        let tree: WeightTree = std::iter::once(parcel(4, 4.0)).collect();
        let extremes = tree.extremes_by_weight().expect("non-empty tree");
        assert!(std::ptr::eq(extremes.lowest, extremes.highest));
    }

    #[test]
    fn degenerate_tree_is_safe() {
        let n = 100_000;
        let tree: WeightTree = (0..n).map(|w| parcel(w, 1.0)).collect();
        assert_eq!(tree.height(), n as usize);
        assert_eq!(tree.iter().count(), n as usize);
        let extremes = tree.extremes_by_weight().expect("non-empty tree");
        assert_eq!(extremes.lowest.weight(), 0);
        assert_eq!(extremes.highest.weight(), n - 1);
        drop(tree);
    }
}
