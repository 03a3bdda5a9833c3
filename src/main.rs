use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use parcel_index::{
    load_path, Extremes, IndexError, LoaderConfig, Parcel, ParcelTable, WeightFilter,
};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "parcel-index", about = "Query parcel records by destination")]
struct Cli {
    /// Record file (`destination,weight,valuation` per line).
    #[arg(long, short = 'd', global = true, default_value = "couriers.txt")]
    data: PathBuf,
    /// Field separator used in the record file.
    #[arg(long, global = true, default_value_t = ',')]
    delimiter: char,
    /// Longest destination name accepted by the loader.
    #[arg(long, global = true, default_value_t = parcel_index::loader::DEFAULT_MAX_DESTINATION_LEN)]
    max_destination_len: usize,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List every parcel in the destination's bucket, lightest first.
    List {
        /// Destination name.
        destination: String,
    },
    /// List parcels strictly heavier or lighter than a threshold.
    Filter {
        /// Destination name.
        destination: String,
        /// Weight threshold.
        #[arg(allow_negative_numbers = true)]
        threshold: i32,
        #[command(flatten)]
        direction: Direction,
    },
    /// Total weight and valuation for a destination.
    Totals {
        /// Destination name.
        destination: String,
    },
    /// Cheapest and most expensive parcel for a destination.
    Cheapest {
        /// Destination name.
        destination: String,
    },
    /// Lightest and heaviest parcel for a destination.
    Lightest {
        /// Destination name.
        destination: String,
    },
    /// Bucket distribution summary.
    Stats,
    /// Interactive menu over stdin.
    Menu,
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct Direction {
    /// Keep parcels with weight above the threshold.
    #[arg(long)]
    above: bool,
    /// Keep parcels with weight below the threshold.
    #[arg(long)]
    below: bool,
}

impl Direction {
    fn filter(&self) -> WeightFilter {
        if self.above {
            WeightFilter::Above
        } else {
            WeightFilter::Below
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("parcel_index=info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = LoaderConfig::default()
        .with_delimiter(cli.delimiter)
        .with_max_destination_len(cli.max_destination_len);

    let table = load_path(&cli.data, &config)
        .with_context(|| format!("failed to load parcels from {}", cli.data.display()))?;
    info!(path = %cli.data.display(), parcels = table.len(), "record file loaded");

    let mut out = io::stdout().lock();
    match cli.command {
        Commands::List { destination } => run_list(&table, &destination, &mut out)?,
        Commands::Filter {
            destination,
            threshold,
            direction,
        } => run_filter(&table, &destination, threshold, direction.filter(), &mut out)?,
        Commands::Totals { destination } => run_totals(&table, &destination, &mut out)?,
        Commands::Cheapest { destination } => run_cheapest(&table, &destination, &mut out)?,
        Commands::Lightest { destination } => run_lightest(&table, &destination, &mut out)?,
        Commands::Stats => write!(out, "{}", table.stats().report())?,
        Commands::Menu => run_menu(&table, io::stdin().lock(), &mut out)?,
    }

    Ok(())
}

fn report_missing<W: Write>(err: IndexError, out: &mut W) -> io::Result<()> {
    match err {
        IndexError::NotFound { destination, .. } => {
            writeln!(out, "No parcels found for {destination}.")
        }
    }
}

fn print_parcel<W: Write>(out: &mut W, parcel: &Parcel) -> io::Result<()> {
    writeln!(
        out,
        "{}\tweight={}\tvaluation=${:.2}",
        parcel.destination(),
        parcel.weight(),
        parcel.valuation()
    )
}

fn print_extremes<W: Write>(
    out: &mut W,
    labels: (&str, &str),
    extremes: &Extremes<'_>,
) -> io::Result<()> {
    write!(out, "{}: ", labels.0)?;
    print_parcel(out, extremes.lowest)?;
    write!(out, "{}: ", labels.1)?;
    print_parcel(out, extremes.highest)
}

fn run_list<W: Write>(table: &ParcelTable, destination: &str, out: &mut W) -> Result<()> {
    match table.list(destination) {
        Ok(parcels) => {
            for parcel in parcels {
                print_parcel(out, parcel)?;
            }
        }
        Err(err) => report_missing(err, out)?,
    }
    Ok(())
}

fn run_filter<W: Write>(
    table: &ParcelTable,
    destination: &str,
    threshold: i32,
    filter: WeightFilter,
    out: &mut W,
) -> Result<()> {
    let parcels = match table.filter_by_weight(destination, threshold, filter) {
        Ok(parcels) => parcels,
        Err(err) => return Ok(report_missing(err, out)?),
    };
    let mut matched = 0usize;
    for parcel in parcels {
        print_parcel(out, parcel)?;
        matched += 1;
    }
    if matched == 0 {
        writeln!(out, "No parcels {filter} weight {threshold} for {destination}.")?;
    }
    Ok(())
}

fn run_totals<W: Write>(table: &ParcelTable, destination: &str, out: &mut W) -> Result<()> {
    match table.totals(destination) {
        Ok(totals) => writeln!(
            out,
            "{destination}: {} parcels, total weight {}, total valuation ${:.2}",
            totals.count, totals.total_weight, totals.total_valuation
        )?,
        Err(err) => report_missing(err, out)?,
    }
    Ok(())
}

fn run_cheapest<W: Write>(table: &ParcelTable, destination: &str, out: &mut W) -> Result<()> {
    match table.extremes_by_valuation(destination) {
        Ok(extremes) => print_extremes(out, ("Cheapest", "Most expensive"), &extremes)?,
        Err(err) => report_missing(err, out)?,
    }
    Ok(())
}

fn run_lightest<W: Write>(table: &ParcelTable, destination: &str, out: &mut W) -> Result<()> {
    match table.extremes_by_weight(destination) {
        Ok(extremes) => print_extremes(out, ("Lightest", "Heaviest"), &extremes)?,
        Err(err) => report_missing(err, out)?,
    }
    Ok(())
}

const MENU: &str = "\
1. Search parcels by destination
2. Filter parcels by weight
3. Total weight and valuation
4. Cheapest and most expensive parcel
5. Lightest and heaviest parcel
6. Exit";

/// Write `text`, then read one trimmed line (`None` at end of input).
fn prompt<W: Write>(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    out: &mut W,
    text: &str,
) -> Result<Option<String>> {
    write!(out, "{text}")?;
    out.flush()?;
    match lines.next() {
        Some(line) => Ok(Some(line?.trim().to_string())),
        None => Ok(None),
    }
}

/// Query picked from the menu.
#[derive(Debug, Clone, Copy)]
enum MenuAction {
    List,
    Filter,
    Totals,
    Cheapest,
    Lightest,
}

/// Menu loop; returns on `6` or end of input.
fn run_menu<R: BufRead, W: Write>(table: &ParcelTable, input: R, out: &mut W) -> Result<()> {
    let mut lines = input.lines();

    loop {
        writeln!(out, "\n{MENU}")?;
        let Some(choice) = prompt(&mut lines, out, "Enter your choice: ")? else {
            return Ok(());
        };
        let action = match choice.as_str() {
            "1" => MenuAction::List,
            "2" => MenuAction::Filter,
            "3" => MenuAction::Totals,
            "4" => MenuAction::Cheapest,
            "5" => MenuAction::Lightest,
            "6" => return Ok(()),
            _ => {
                writeln!(out, "Invalid choice '{choice}'.")?;
                continue;
            }
        };

        let Some(destination) = prompt(&mut lines, out, "Destination: ")? else {
            return Ok(());
        };
        match action {
            MenuAction::List => run_list(table, &destination, out)?,
            MenuAction::Filter => {
                let Some(threshold) = prompt(&mut lines, out, "Weight threshold: ")? else {
                    return Ok(());
                };
                let Ok(threshold) = threshold.parse::<i32>() else {
                    writeln!(out, "Invalid weight '{threshold}'.")?;
                    continue;
                };
                let Some(direction) = prompt(&mut lines, out, "Above or below? (a/b): ")? else {
                    return Ok(());
                };
                let filter = match direction.to_ascii_lowercase().as_str() {
                    "a" | "above" => WeightFilter::Above,
                    "b" | "below" => WeightFilter::Below,
                    other => {
                        writeln!(out, "Invalid direction '{other}'.")?;
                        continue;
                    }
                };
                run_filter(table, &destination, threshold, filter, out)?
            }
            MenuAction::Totals => run_totals(table, &destination, out)?,
            MenuAction::Cheapest => run_cheapest(table, &destination, out)?,
            MenuAction::Lightest => run_lightest(table, &destination, out)?,
        }
    }
}
