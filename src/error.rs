//! Error types for fixture generation and verification.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot create {}: {source}", path.display())]
    Create { path: PathBuf, source: io::Error },

    #[error("cannot write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("cannot open {}: {source}", path.display())]
    Open { path: PathBuf, source: io::Error },

    #[error("cannot map {}: {source}", path.display())]
    Map { path: PathBuf, source: io::Error },

    /// Bytes at `offset` do not follow the `<digits>( <digits>)*` layout.
    #[error("{}: malformed at byte {offset}: {reason}", path.display())]
    Format {
        path: PathBuf,
        offset: usize,
        reason: &'static str,
    },

    #[error("{}: value {value} exceeds {max}", path.display())]
    OutOfRange { path: PathBuf, value: u64, max: u64 },

    #[error("{}: expected {expected} values, found {found}", path.display())]
    TokenCount {
        path: PathBuf,
        expected: u64,
        found: u64,
    },

    #[error("tier exponent {0} overflows u64")]
    TierOverflow(u32),
}

pub type Result<T> = std::result::Result<T, Error>;
