//! Load a small record set and run each query once.

use parcel_index::{load_reader, LoaderConfig, WeightFilter};

fn main() -> anyhow::Result<()> {
    let records = "\
Canada,10,100.00
Canada,5,50.00
Canada,12,75.25
Mexico,20,300.00
";
    let table = load_reader(records.as_bytes(), &LoaderConfig::default())?;

    for parcel in table.list("Canada")? {
        println!("{parcel}");
    }

    let heavy: Vec<_> = table
        .filter_by_weight("Canada", 8, WeightFilter::Above)?
        .collect();
    println!("{} Canada parcels above weight 8", heavy.len());

    let totals = table.totals("Canada")?;
    println!(
        "Canada totals: weight={} valuation={:.2}",
        totals.total_weight, totals.total_valuation
    );

    let cheapest = table.extremes_by_valuation("Canada")?;
    println!("cheapest: {}\nmost expensive: {}", cheapest.lowest, cheapest.highest);

    match table.list("Brazil") {
        Ok(_) => println!("Brazil has parcels"),
        Err(err) => println!("{err}"),
    }

    print!("{}", table.stats().report());
    Ok(())
}
