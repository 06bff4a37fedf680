//! Flat-file backed stores.
//!
//! The catalog and customer stores are populated once at startup from
//! pipe-delimited text files (`id|name|price|image_url` and
//! `first_name|last_name|email|password`, one record per line, no header, no
//! escaping). After load they are read-only, so request handlers share them
//! through [`crate::state::AppState`] without locking.
//!
//! Loading is fail-fast: the first malformed record aborts the whole load
//! with a [`LoadError`] naming the file and line, and no partial store is
//! produced. Startup does not proceed past a failed load.

pub mod catalog;
pub mod customers;

pub use catalog::CatalogStore;
pub use customers::CustomerStore;

use std::path::{Path, PathBuf};

use thiserror::Error;

use ubermelon_core::{EmailError, MelonId, PriceError};

/// Fatal error while loading a flat file at startup.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read at all.
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A record did not split into the expected number of fields.
    #[error("{path:?}:{line}: expected {expected} pipe-delimited fields, got {got}")]
    FieldCount {
        path: PathBuf,
        line: usize,
        expected: usize,
        got: usize,
    },

    /// The id field of a catalog record is not a non-negative integer.
    #[error("{path:?}:{line}: invalid melon id {value:?}")]
    InvalidId {
        path: PathBuf,
        line: usize,
        value: String,
    },

    /// The price field of a catalog record is not a valid amount.
    #[error("{path:?}:{line}: invalid price {value:?}: {source}")]
    InvalidPrice {
        path: PathBuf,
        line: usize,
        value: String,
        #[source]
        source: PriceError,
    },

    /// The email field of a customer record is not structurally valid.
    #[error("{path:?}:{line}: invalid email {value:?}: {source}")]
    InvalidEmail {
        path: PathBuf,
        line: usize,
        value: String,
        #[source]
        source: EmailError,
    },
}

/// A lookup against a loaded store found nothing.
///
/// Recoverable: the web layer maps this to a user-visible 404.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NotFoundError {
    /// No melon with this id in the catalog.
    #[error("no melon with id {0}")]
    Melon(MelonId),

    /// The raw id from the request could not be coerced to a catalog key.
    #[error("{0:?} is not a melon id")]
    InvalidMelonId(String),

    /// No customer with this email.
    #[error("no customer with email {0:?}")]
    Customer(String),
}

/// Read a flat file and return its records, 1-based line number first.
///
/// Trailing blank lines are tolerated as end-of-file; a blank line between
/// records is malformed and surfaces as a field-count error downstream.
fn read_records(path: &Path) -> Result<Vec<(usize, String)>, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut records: Vec<(usize, String)> = text
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.to_owned()))
        .collect();

    while matches!(records.last(), Some((_, line)) if line.trim().is_empty()) {
        records.pop();
    }

    Ok(records)
}

/// Split a record into exactly `expected` pipe-delimited fields.
fn split_record<'a>(
    path: &Path,
    line: usize,
    record: &'a str,
    expected: usize,
) -> Result<Vec<&'a str>, LoadError> {
    let fields: Vec<&str> = record.split('|').collect();
    if fields.len() != expected {
        return Err(LoadError::FieldCount {
            path: path.to_path_buf(),
            line,
            expected,
            got: fields.len(),
        });
    }
    Ok(fields)
}
