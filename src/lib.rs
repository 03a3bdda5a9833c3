//! # Parcel Index
//!
//! In-memory index of shipment records keyed by destination.
//!
//! ## Layout
//!
//! 1. **Bucket table**: 127 fixed buckets, destination → bucket via djb2
//! 2. **Weight tree**: one unbalanced BST per bucket, ordered by weight
//!    (ties keep insertion order)
//! 3. **Queries**: list, weight filter, totals, extremes by valuation and
//!    by weight, each a single in-order pass over one bucket
//!
//! Distinct destinations may hash to the same bucket and then share one
//! tree; queries answer for the whole bucket.
//!
//! ## Usage Example
//!
//! ```
//! use parcel_index::ParcelTable;
//!
//! let mut table = ParcelTable::new();
//! table.insert("Canada", 10, 100.0);
//! table.insert("Canada", 5, 50.0);
//!
//! let totals = table.totals("Canada")?;
//! assert_eq!(totals.total_weight, 15);
//! assert!(table.list("Brazil").is_err());
//! # Ok::<(), parcel_index::IndexError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod loader; // Record-file loading
pub mod query; // Query result types
pub mod stats; // Bucket distribution profile
pub mod table; // Hash-bucketed table
pub mod tree; // Weight-ordered tree

mod parcel;

// Re-exports for convenience
pub use loader::{load_path, load_reader, LoadError, LoaderConfig, RecordError};
pub use parcel::Parcel;
pub use query::{Extremes, Totals, WeightFilter};
pub use stats::TableStats;
pub use table::{bucket_index, ParcelTable, TABLE_SIZE};
pub use tree::WeightTree;

use thiserror::Error;

/// Errors reported by table queries
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IndexError {
    /// Destination hashes to a bucket that holds no parcels.
    #[error("no parcels found for {destination} (bucket {bucket})")]
    NotFound {
        /// Destination that was queried
        destination: String,
        /// Bucket it resolved to
        bucket: usize,
    },
}

impl IndexError {
    /// Build a `NotFound` for `destination`, resolving its bucket.
    pub fn not_found(destination: &str) -> Self {
        IndexError::NotFound {
            destination: destination.to_string(),
            bucket: bucket_index(destination),
        }
    }
}
