//! Parcel record stored by the index

use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

/// One shipment record.
///
/// Immutable once built: fields are only reachable through getters, so a
/// record sitting inside a tree can never have its sort key changed.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Parcel {
    destination: Box<str>,
    weight: i32,
    valuation: f64,
}

impl Parcel {
    /// Construct a new parcel record.
    pub fn new(destination: impl Into<Box<str>>, weight: i32, valuation: f64) -> Self {
        Self {
            destination: destination.into(),
            weight,
            valuation,
        }
    }

    /// Destination name (hash key).
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Weight (tree sort key).
    #[inline]
    pub fn weight(&self) -> i32 {
        self.weight
    }

    /// Declared monetary value.
    #[inline]
    pub fn valuation(&self) -> f64 {
        self.valuation
    }
}

impl fmt::Display for Parcel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: weight={} valuation={:.2}",
            self.destination, self.weight, self.valuation
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_all_fields() {
        let parcel = Parcel::new("Canada", 10, 100.5);
        assert_eq!(parcel.to_string(), "Canada: weight=10 valuation=100.50");
    }

    #[test]
    fn accepts_unvalidated_values() {
        let parcel = Parcel::new("", -3, -12.25);
        assert_eq!(parcel.destination(), "");
        assert_eq!(parcel.weight(), -3);
        assert_eq!(parcel.valuation(), -12.25);
    }
}
