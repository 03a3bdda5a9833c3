//! Shared fixtures for integration tests

#![allow(dead_code)]
use parcel_index::{Parcel, ParcelTable};

/// Three-parcel table from the reference scenario.
pub fn reference_table() -> ParcelTable {
    let mut table = ParcelTable::new();
    table.insert("Canada", 10, 100.0);
    table.insert("Canada", 5, 50.0);
    table.insert("Mexico", 20, 300.0);
    table
}

/// Same-destination parcels from `(weight, valuation)` pairs, in order.
pub fn single_bucket(destination: &str, records: &[(i32, f64)]) -> ParcelTable {
    records
        .iter()
        .map(|&(weight, valuation)| Parcel::new(destination, weight, valuation))
        .collect()
}

/// Record-file text in the loader's default format.
pub fn courier_file() -> &'static str {
    "\
Canada,10,100.00
Canada,5,50.00
Mexico,20,300.00

France,7,70.50
Italy,7,12.25
Norway,3,99.99
Japan,1,5.00
"
}
