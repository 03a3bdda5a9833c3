//! End-to-end query behavior on populated tables

use parcel_index::{bucket_index, IndexError, Parcel, ParcelTable, WeightFilter, TABLE_SIZE};
mod test_helpers;
use test_helpers::*;

fn weights<'a>(parcels: impl Iterator<Item = &'a Parcel>) -> Vec<i32> {
    parcels.map(Parcel::weight).collect()
}

#[test]
fn reference_scenario() {
    let table = reference_table();

    let listed: Vec<(i32, f64)> = table
        .list("Canada")
        .expect("Canada present")
        .map(|p| (p.weight(), p.valuation()))
        .collect();
    assert_eq!(listed, vec![(5, 50.0), (10, 100.0)]);

    let totals = table.totals("Canada").expect("Canada present");
    assert_eq!(totals.total_weight, 15);
    assert_eq!(totals.total_valuation, 150.0);

    let by_weight = table.extremes_by_weight("Canada").expect("Canada present");
    assert_eq!(by_weight.lowest, &Parcel::new("Canada", 5, 50.0));
    assert_eq!(by_weight.highest, &Parcel::new("Canada", 10, 100.0));

    assert_ne!(bucket_index("Brazil"), bucket_index("Canada"));
    assert_ne!(bucket_index("Brazil"), bucket_index("Mexico"));
    assert!(matches!(
        table.list("Brazil"),
        Err(IndexError::NotFound { .. })
    ));
}

#[test]
fn filter_matches_brute_force() {
    let table = single_bucket(
        "Peru",
        &[(12, 1.0), (3, 2.0), (12, 3.0), (40, 4.0), (7, 5.0), (25, 6.0), (1, 7.0)],
    );
    let all = weights(table.list("Peru").expect("Peru present"));

    for threshold in [0, 1, 3, 7, 12, 20, 40, 41] {
        for filter in [WeightFilter::Above, WeightFilter::Below] {
            let expected: Vec<i32> = all
                .iter()
                .copied()
                .filter(|&w| filter.matches(w, threshold))
                .collect();
            let actual = weights(
                table
                    .filter_by_weight("Peru", threshold, filter)
                    .expect("Peru present"),
            );
            assert_eq!(actual, expected, "{filter} {threshold}");
        }
    }
}

#[test]
fn filter_with_no_match_is_empty_not_missing() {
    let table = reference_table();
    let above = table
        .filter_by_weight("Canada", 1_000, WeightFilter::Above)
        .expect("bucket is occupied");
    assert_eq!(above.count(), 0);
}

#[test]
fn extremes_by_valuation_tie_break() {
    let table = single_bucket("Chile", &[(5, 20.0), (2, 20.0), (9, 1.0), (1, 1.0)]);
    let extremes = table.extremes_by_valuation("Chile").expect("Chile present");
    // in-order by weight: 1, 2, 5, 9
    assert_eq!(extremes.lowest.weight(), 1);
    assert_eq!(extremes.highest.weight(), 2);
}

#[test]
fn colliding_destinations_answer_for_the_bucket() {
    let mut table = ParcelTable::new();
    table.insert("Chile", 4, 40.0);
    table.insert("Kenya", 2, 20.0);

    let via_chile = table.totals("Chile").expect("bucket occupied");
    let via_kenya = table.totals("Kenya").expect("bucket occupied");
    assert_eq!(via_chile, via_kenya);
    assert_eq!(via_chile.count, 2);
}

#[test]
fn every_bucket_index_is_in_range() {
    let table: ParcelTable = (0..2_000)
        .map(|i| Parcel::new(format!("dest-{i}"), i, f64::from(i)))
        .collect();
    let stats = table.stats();
    assert_eq!(stats.records, 2_000);
    assert!(stats.occupied_buckets <= TABLE_SIZE);
    assert!(table.buckets().all(|(index, _)| index < TABLE_SIZE));
}
