//! Wire Protocol Definitions
//!
//! Defines the two message bodies that cross the broker, plus the queue
//! names. Task descriptors travel as UTF-8 JSON records; partial results
//! travel as canonical decimal strings so no precision is lost across the
//! boundary.
//!
//! Decoding is strict: fields must be well-formed integers (no coercion),
//! unknown fields are rejected, and the interval itself is validated before
//! any arithmetic sees it.

use crate::error::ProtocolError;
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Queue carrying task descriptors from the producer to the workers.
pub const RANGES_QUEUE: &str = "series_ranges";
/// Queue carrying partial results from the workers to the accumulator.
pub const RESULTS_QUEUE: &str = "series_results";

/// A half-open interval `[start, end)` of series indices assigned to one
/// worker invocation. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TaskDescriptor {
    pub start: u64,
    pub end: u64,
}

impl TaskDescriptor {
    /// Strictly decodes a task descriptor from a queue message body.
    ///
    /// Fails on anything that is not exactly `{"start": <int>, "end": <int>}`
    /// with `start >= 1` and `end > start`.
    pub fn decode(body: &[u8]) -> Result<Self, ProtocolError> {
        let task: TaskDescriptor =
            serde_json::from_slice(body).map_err(ProtocolError::MalformedTask)?;

        if task.start < 1 || task.end <= task.start {
            return Err(ProtocolError::InvalidInterval {
                start: task.start,
                end: task.end,
            });
        }

        Ok(task)
    }

    /// Encodes the descriptor as a UTF-8 JSON message body.
    pub fn encode(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }

    /// Number of series terms covered by this interval (step of 2).
    pub fn term_count(&self) -> u64 {
        (self.end - self.start).div_ceil(2)
    }
}

/// Decodes a partial result from its canonical decimal string form.
pub fn decode_partial_result(body: &[u8]) -> Result<BigDecimal, ProtocolError> {
    let text = std::str::from_utf8(body)?;
    BigDecimal::from_str(text.trim()).map_err(|source| ProtocolError::MalformedResult {
        text: preview(text),
        source,
    })
}

/// Encodes a partial result as a canonical decimal string message body.
pub fn encode_partial_result(value: &BigDecimal) -> Vec<u8> {
    value.to_string().into_bytes()
}

/// Truncated rendering for error messages; full payloads run to tens of
/// thousands of digits.
fn preview(text: &str) -> String {
    const MAX: usize = 48;
    if text.len() <= MAX {
        text.to_string()
    } else {
        let head: String = text.chars().take(MAX).collect();
        format!("{}...", head)
    }
}
