//! Range Partitioning
//!
//! Cuts the series index range into the block sequence
//! `[1, 1+S), [1+S, 1+2S), …` while the block start is below the target
//! bound `N`. Consecutive blocks are contiguous and non-overlapping.
//!
//! The final block's `end` is deliberately not clamped to `N`: a worker may
//! compute slightly past the bound. That overshoot is bounded by one block
//! and accepted by design.

use crate::queue::protocol::TaskDescriptor;

/// Yields one task descriptor per block start `1, 1+S, 1+2S, …` strictly
/// below `end_integer`, each covering `[start, start + block_size)`.
///
/// `block_size` must be at least 1 (enforced at the CLI boundary).
pub fn plan_blocks(end_integer: u64, block_size: u64) -> impl Iterator<Item = TaskDescriptor> {
    (1..end_integer)
        .step_by(block_size as usize)
        .map(move |start| TaskDescriptor {
            start,
            end: start + block_size,
        })
}

/// Number of blocks `plan_blocks` will yield, without materializing them.
pub fn block_count(end_integer: u64, block_size: u64) -> u64 {
    if end_integer <= 1 {
        return 0;
    }
    (end_integer - 1).div_ceil(block_size)
}
