//! Partial-Sum Engine
//!
//! Computes the Gregory-Leibniz partial sum over one `[start, end)` block:
//! the terms are `4/i` for `i = start, start+2, …`, with a sign that is
//! fixed once from `start` and then flips after every term.
//!
//! Each division is performed as scaled integer division: `4 · 10^P / i`
//! truncated, reinterpreted as a decimal with `P` fractional digits. The
//! truncation is identical no matter how the overall range is split into
//! blocks, and decimal addition is exact, so accumulation is associative at
//! full precision.

use crate::config::Precision;
use crate::error::ProtocolError;
use crate::queue::protocol::TaskDescriptor;

use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_traits::Zero;

/// The arithmetic engine shared by every block a worker processes.
///
/// Construction is the only place precision enters: the scaled numerator
/// `4 · 10^P` is computed once and reused for every term.
pub struct SeriesEngine {
    digits: usize,
    scaled_numerator: BigInt,
}

impl SeriesEngine {
    pub fn new(precision: Precision) -> Self {
        let digits = precision.digits();
        let scaled_numerator = BigInt::from(4u8) * num_traits::pow(BigInt::from(10u8), digits);
        Self {
            digits,
            scaled_numerator,
        }
    }

    /// Working precision in decimal digits.
    pub fn digits(&self) -> usize {
        self.digits
    }

    /// Computes the signed partial sum over the descriptor's interval.
    ///
    /// The starting sign is derived from `start`: negative when
    /// `(start + 1) % 4 == 0`, positive when `(start + 1) % 4 == 2`. Any
    /// other residue means the block does not begin on an odd series index;
    /// the producer never emits such a block, so it is treated as a fatal
    /// contract violation rather than given a default sign.
    pub fn partial_sum(&self, task: &TaskDescriptor) -> Result<BigDecimal, ProtocolError> {
        let mut negative = match (task.start + 1) % 4 {
            0 => true,
            2 => false,
            _ => return Err(ProtocolError::UndefinedSign { start: task.start }),
        };

        let mut sum = BigDecimal::zero();
        let mut i = task.start;
        while i < task.end {
            let term = self.term(i);
            sum = if negative { sum - term } else { sum + term };
            negative = !negative;
            i += 2;
        }

        Ok(sum)
    }

    /// One term `4/i`, truncated to the working precision.
    fn term(&self, i: u64) -> BigDecimal {
        let quotient = &self.scaled_numerator / BigInt::from(i);
        BigDecimal::new(quotient, self.digits as i64)
    }
}
