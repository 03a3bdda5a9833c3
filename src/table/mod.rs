//! Fixed-size hash-bucketed parcel table
//!
//! `TABLE_SIZE` buckets, each owning at most one weight-ordered tree.
//! Destinations map to buckets through djb2; distinct destinations that
//! collide share a tree. Queries are bucket-scoped and report
//! `IndexError::NotFound` for a bucket that never received a parcel.

mod hash;

pub use hash::{bucket_index, djb2};

use tracing::{debug, trace};

use crate::query::{Extremes, Totals, WeightFilter};
use crate::stats::TableStats;
use crate::tree::{Filtered, InOrder, WeightTree};
use crate::{IndexError, Parcel};

/// Number of buckets. Never resized.
pub const TABLE_SIZE: usize = 127;

/// Hash table of weight-ordered parcel trees.
#[derive(Debug)]
pub struct ParcelTable {
    buckets: Box<[Option<WeightTree>]>,
    len: usize,
}

impl ParcelTable {
    /// Create a table with `TABLE_SIZE` empty buckets.
    pub fn new() -> Self {
        Self {
            buckets: (0..TABLE_SIZE).map(|_| None).collect(),
            len: 0,
        }
    }

    /// Insert one parcel into its destination's bucket.
    pub fn insert(&mut self, destination: impl Into<Box<str>>, weight: i32, valuation: f64) {
        self.insert_parcel(Parcel::new(destination, weight, valuation));
    }

    /// Insert a prebuilt parcel.
    pub fn insert_parcel(&mut self, parcel: Parcel) {
        let index = bucket_index(parcel.destination());
        debug!(
            destination = parcel.destination(),
            weight = parcel.weight(),
            bucket = index,
            "inserting parcel"
        );
        self.buckets[index]
            .get_or_insert_with(WeightTree::new)
            .insert(parcel);
        self.len += 1;
    }

    /// Tree for `destination`'s bucket, or `None` if the bucket is empty.
    pub fn bucket(&self, destination: &str) -> Option<&WeightTree> {
        let index = bucket_index(destination);
        trace!(destination, bucket = index, "resolved bucket");
        self.buckets[index].as_ref()
    }

    fn occupied(&self, destination: &str) -> Result<&WeightTree, IndexError> {
        self.bucket(destination)
            .ok_or_else(|| IndexError::not_found(destination))
    }

    /// Every parcel in the bucket, ascending by weight.
    pub fn list(&self, destination: &str) -> Result<InOrder<'_>, IndexError> {
        Ok(self.occupied(destination)?.iter())
    }

    /// Parcels in the bucket strictly above or below `threshold`.
    ///
    /// An occupied bucket with no matching parcel yields an empty iterator,
    /// not `NotFound`.
    pub fn filter_by_weight(
        &self,
        destination: &str,
        threshold: i32,
        filter: WeightFilter,
    ) -> Result<Filtered<'_>, IndexError> {
        Ok(self.occupied(destination)?.filter_by_weight(threshold, filter))
    }

    /// Total weight and valuation of the bucket.
    pub fn totals(&self, destination: &str) -> Result<Totals, IndexError> {
        Ok(self.occupied(destination)?.totals())
    }

    /// Cheapest and most expensive parcel in the bucket.
    pub fn extremes_by_valuation(&self, destination: &str) -> Result<Extremes<'_>, IndexError> {
        self.occupied(destination)?
            .extremes_by_valuation()
            .ok_or_else(|| IndexError::not_found(destination))
    }

    /// Lightest and heaviest parcel in the bucket.
    pub fn extremes_by_weight(&self, destination: &str) -> Result<Extremes<'_>, IndexError> {
        self.occupied(destination)?
            .extremes_by_weight()
            .ok_or_else(|| IndexError::not_found(destination))
    }

    /// Total parcels across all buckets.
    pub fn len(&self) -> usize {
        self.len
    }

    /// `true` before the first insertion.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterate `(bucket index, tree)` over occupied buckets.
    pub fn buckets(&self) -> impl Iterator<Item = (usize, &WeightTree)> + '_ {
        self.buckets
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|tree| (index, tree)))
    }

    /// Distribution profile over all buckets.
    pub fn stats(&self) -> TableStats {
        TableStats::collect(self)
    }
}

impl Default for ParcelTable {
    fn default() -> Self {
        Self::new()
    }
}

impl Extend<Parcel> for ParcelTable {
    fn extend<I: IntoIterator<Item = Parcel>>(&mut self, iter: I) {
        for parcel in iter {
            self.insert_parcel(parcel);
        }
    }
}

impl FromIterator<Parcel> for ParcelTable {
    fn from_iter<I: IntoIterator<Item = Parcel>>(iter: I) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}
