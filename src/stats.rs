//! Bucket distribution profile
//!
//! Hash spread and tree shape determine query cost: a query walks one
//! bucket, and an unbalanced tree costs up to its full height.

use std::fmt::Write as _;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::table::{ParcelTable, TABLE_SIZE};

/// Snapshot of how parcels are spread across buckets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct TableStats {
    /// Total parcels stored
    pub records: usize,
    /// Buckets holding at least one parcel
    pub occupied_buckets: usize,
    /// Largest bucket as `(index, parcel count)`
    pub fullest_bucket: Option<(usize, usize)>,
    /// Tallest tree as `(index, height)`
    pub deepest_tree: Option<(usize, usize)>,
}

impl TableStats {
    /// Walk every occupied bucket once.
    pub fn collect(table: &ParcelTable) -> Self {
        let mut stats = Self::default();
        for (index, tree) in table.buckets() {
            stats.records += tree.len();
            stats.occupied_buckets += 1;

            // first bucket wins ties
            if stats.fullest_bucket.map_or(true, |(_, n)| tree.len() > n) {
                stats.fullest_bucket = Some((index, tree.len()));
            }
            let height = tree.height();
            if stats.deepest_tree.map_or(true, |(_, h)| height > h) {
                stats.deepest_tree = Some((index, height));
            }
        }
        stats
    }

    /// Mean parcels per occupied bucket (0.0 when empty).
    pub fn load_factor(&self) -> f64 {
        if self.occupied_buckets == 0 {
            0.0
        } else {
            self.records as f64 / self.occupied_buckets as f64
        }
    }

    /// Human-readable multi-line summary.
    pub fn report(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Parcels: {}", self.records);
        let _ = writeln!(out, "Occupied buckets: {}/{}", self.occupied_buckets, TABLE_SIZE);
        let _ = writeln!(out, "Parcels per occupied bucket: {:.2}", self.load_factor());
        if let Some((index, count)) = self.fullest_bucket {
            let _ = writeln!(out, "Fullest bucket: #{index} ({count} parcels)");
        }
        if let Some((index, height)) = self.deepest_tree {
            let _ = writeln!(out, "Deepest tree: #{index} (height {height})");
        }
        out
    }
}
