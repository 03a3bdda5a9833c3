//! Record-file loading
//!
//! One parcel per line: `destination,weight,valuation`. Blank lines are
//! skipped; the first malformed line aborts the load with its 1-based line
//! number. Parcels are inserted in file order, which fixes the relative
//! order of equal-weight parcels.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use thiserror::Error;
use tracing::{debug, info};

use crate::{Parcel, ParcelTable};

/// Default cap on destination length, in characters.
pub const DEFAULT_MAX_DESTINATION_LEN: usize = 20;

/// Why a single line could not be turned into a parcel.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// Wrong number of delimited fields.
    #[error("expected 3 fields, found {0}")]
    FieldCount(usize),

    /// Destination field is blank.
    #[error("destination is empty")]
    EmptyDestination,

    /// Destination exceeds the configured cap.
    #[error("destination '{destination}' exceeds {max} characters")]
    DestinationTooLong {
        /// Offending destination
        destination: String,
        /// Configured cap
        max: usize,
    },

    /// Weight is not a valid 32-bit integer.
    #[error("invalid weight '{0}'")]
    InvalidWeight(String),

    /// Valuation is not a finite decimal.
    #[error("invalid valuation '{0}'")]
    InvalidValuation(String),

    /// Line is not valid UTF-8.
    #[error("line is not valid UTF-8 (byte offset {0})")]
    InvalidEncoding(usize),
}

/// Errors surfaced while loading a record source.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Underlying read failure.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// A line could not be parsed.
    #[error("line {line}: {reason}")]
    Malformed {
        /// 1-based line number
        line: usize,
        /// Parse failure
        reason: RecordError,
    },
}

/// Loader settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderConfig {
    /// Field separator.
    pub delimiter: char,
    /// Longest accepted destination, in characters.
    pub max_destination_len: usize,
}

impl LoaderConfig {
    /// Override the field separator.
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Override the destination length cap.
    pub fn with_max_destination_len(mut self, max: usize) -> Self {
        self.max_destination_len = max;
        self
    }
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            max_destination_len: DEFAULT_MAX_DESTINATION_LEN,
        }
    }
}

/// Parse one non-blank line into a parcel.
pub fn parse_record(line: &str, config: &LoaderConfig) -> Result<Parcel, RecordError> {
    let fields: Vec<&str> = line.split(config.delimiter).map(str::trim).collect();
    let [destination, weight, valuation] = fields[..] else {
        return Err(RecordError::FieldCount(fields.len()));
    };

    if destination.is_empty() {
        return Err(RecordError::EmptyDestination);
    }
    if destination.chars().count() > config.max_destination_len {
        return Err(RecordError::DestinationTooLong {
            destination: destination.to_string(),
            max: config.max_destination_len,
        });
    }

    let weight: i32 = weight
        .parse()
        .map_err(|_| RecordError::InvalidWeight(weight.to_string()))?;
    let valuation: f64 = valuation
        .parse()
        .ok()
        .filter(|v: &f64| v.is_finite())
        .ok_or_else(|| RecordError::InvalidValuation(valuation.to_string()))?;

    Ok(Parcel::new(destination, weight, valuation))
}

/// Build a table from a line-oriented reader.
///
/// Lines are split on raw `\n` bytes and decoded individually, so a line
/// that is not UTF-8 is reported as malformed with its line number rather
/// than as an I/O failure.
pub fn load_reader<R: BufRead>(
    reader: R,
    config: &LoaderConfig,
) -> Result<ParcelTable, LoadError> {
    let mut table = ParcelTable::new();
    let mut skipped = 0usize;

    for (idx, bytes) in reader.split(b'\n').enumerate() {
        let bytes = bytes?;
        let malformed = |reason| LoadError::Malformed {
            line: idx + 1,
            reason,
        };
        let bytes = bytes.strip_suffix(b"\r").unwrap_or(&bytes);
        let line = std::str::from_utf8(bytes)
            .map_err(|err| malformed(RecordError::InvalidEncoding(err.valid_up_to())))?;
        if line.trim().is_empty() {
            skipped += 1;
            continue;
        }
        let parcel = parse_record(line, config).map_err(malformed)?;
        table.insert_parcel(parcel);
    }

    info!(
        parcels = table.len(),
        buckets = table.stats().occupied_buckets,
        "loaded parcel records"
    );
    debug!(skipped, "blank lines skipped");
    Ok(table)
}

/// Build a table from a record file.
pub fn load_path<P: AsRef<Path>>(
    path: P,
    config: &LoaderConfig,
) -> Result<ParcelTable, LoadError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "opening record file");
    let file = File::open(path)?;
    load_reader(BufReader::new(file), config)
}
