//! Typed errors for the queue and persistence boundaries.
//!
//! Everything here is fatal to the message (and, per the propagation policy,
//! to the process): nothing is recovered locally. Service loops carry these
//! through `anyhow::Result` up to `main`, which exits non-zero with the
//! underlying error surfaced.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("task descriptor is not a well-formed record: {0}")]
    MalformedTask(#[source] serde_json::Error),

    #[error("task interval [{start}, {end}) is not well-formed")]
    InvalidInterval { start: u64, end: u64 },

    #[error("result payload is not valid UTF-8")]
    NonUtf8Result(#[from] std::str::Utf8Error),

    #[error("result payload {text:?} is not a decimal number")]
    MalformedResult {
        text: String,
        #[source]
        source: bigdecimal::ParseBigDecimalError,
    },

    #[error("no starting sign is defined for start {start}; blocks must begin on an odd series index")]
    UndefinedSign { start: u64 },

    #[error("persisted running total at {path} is not a decimal number")]
    CorruptTotal {
        path: String,
        #[source]
        source: bigdecimal::ParseBigDecimalError,
    },
}
