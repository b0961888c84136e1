//! # Error Types
//!
//! Central error type for the `tsdemux` crate, plus the error-kind labels
//! delivered through the demuxer's `on_error` callback. Interface-contract
//! violations are returned as `Err` from the facade; recoverable parse
//! failures never surface as `Err`. They are reported through `on_error`
//! and the stream continues on the next packet.

use std::fmt;
use thiserror::Error;

/// Primary error type for the tsdemux library
#[derive(Error, Debug)]
pub enum DemuxError {
    /// Contract violations: missing mandatory callbacks, or use after destroy
    #[error("illegal state: {0}")]
    IllegalState(String),

    /// Errors for invalid or malformed input data
    #[error("invalid data: {0}")]
    InvalidData(String),

    /// Errors that occur during parsing of sections and PES headers
    #[error("parser error: {0}")]
    Parser(String),
}

/// Classification of recoverable demux errors, passed to `on_error`.
///
/// These mark units that were discarded (a section skipped, a PES dropped)
/// without affecting subsequent output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemuxErrorKind {
    /// PAT/PMT carried an unexpected table_id
    TableMismatch,
    /// Reassembled PES failed start-code or length validation
    MalformedPes,
    /// Sync byte other than 0x47 encountered mid-stream
    FormatDesync,
}

impl fmt::Display for DemuxErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DemuxErrorKind::TableMismatch => "table-mismatch",
            DemuxErrorKind::MalformedPes => "malformed-pes",
            DemuxErrorKind::FormatDesync => "format-desync",
        };
        f.write_str(name)
    }
}

/// A specialized Result type for tsdemux operations.
pub type Result<T> = std::result::Result<T, DemuxError>;
