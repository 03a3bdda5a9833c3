//! Query result types shared by trees and the bucket table

use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::Parcel;

/// Direction of a weight threshold comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum WeightFilter {
    /// Keep parcels with `weight > threshold`.
    Above,
    /// Keep parcels with `weight < threshold`.
    Below,
}

impl WeightFilter {
    /// Apply the strict comparison.
    #[inline]
    pub fn matches(self, weight: i32, threshold: i32) -> bool {
        match self {
            WeightFilter::Above => weight > threshold,
            WeightFilter::Below => weight < threshold,
        }
    }
}

impl fmt::Display for WeightFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeightFilter::Above => f.write_str("above"),
            WeightFilter::Below => f.write_str("below"),
        }
    }
}

/// Aggregate over every parcel in a bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Totals {
    /// Number of parcels visited.
    pub count: usize,
    /// Sum of weights, widened so `i32` weights cannot overflow.
    pub total_weight: i64,
    /// Sum of valuations.
    pub total_valuation: f64,
}

impl Totals {
    /// Fold step: add one parcel.
    pub fn accumulate(self, parcel: &Parcel) -> Self {
        Self {
            count: self.count + 1,
            total_weight: self.total_weight + i64::from(parcel.weight()),
            total_valuation: self.total_valuation + parcel.valuation(),
        }
    }
}

/// Minimum and maximum parcel under some ordering.
///
/// Both fields may point at the same parcel when the bucket holds one
/// record or every key ties.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extremes<'a> {
    /// Parcel with the smallest key (cheapest / lightest).
    pub lowest: &'a Parcel,
    /// Parcel with the largest key (most expensive / heaviest).
    pub highest: &'a Parcel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_comparisons_are_strict() {
        assert!(WeightFilter::Above.matches(11, 10));
        assert!(!WeightFilter::Above.matches(10, 10));
        assert!(WeightFilter::Below.matches(9, 10));
        assert!(!WeightFilter::Below.matches(10, 10));
    }

    #[test]
    fn accumulate_counts_and_sums() {
        let totals = Totals::default()
            .accumulate(&Parcel::new("Peru", 3, 1.5))
            .accumulate(&Parcel::new("Peru", -1, 0.25));
        assert_eq!(
            totals,
            Totals {
                count: 2,
                total_weight: 2,
                total_valuation: 1.75,
            }
        );
    }
}
