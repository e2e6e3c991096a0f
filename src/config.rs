//! Shared Arithmetic Configuration
//!
//! The whole pipeline runs on a single fixed working precision: the number of
//! decimal digits carried by every term division and therefore by every
//! partial result and the running total. The value is threaded explicitly
//! into each component at construction time rather than living in a mutable
//! global, so two processes built from the same `Precision` always produce
//! comparable decimal strings.

/// Default working precision in decimal digits.
///
/// 2^16 digits is far beyond what any realistic target bound needs, so
/// per-term truncation error never becomes visible in the leading digits of
/// the final total.
pub const DEFAULT_PRECISION: usize = 1 << 16;

/// Fixed number of decimal digits used for all series arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Precision(usize);

impl Precision {
    /// Creates a precision of at least one digit.
    pub fn new(digits: usize) -> Self {
        Self(digits.max(1))
    }

    /// Number of decimal digits carried after the decimal point.
    pub fn digits(&self) -> usize {
        self.0
    }
}

impl Default for Precision {
    fn default() -> Self {
        Self(DEFAULT_PRECISION)
    }
}
