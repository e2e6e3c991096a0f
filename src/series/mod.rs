//! Series Computation Module
//!
//! The numerically sensitive core of the pipeline. A worker dequeues one
//! task descriptor at a time, computes the exact-decimal partial sum of the
//! alternating series `±4/i` over its interval, and enqueues the result as a
//! canonical decimal string.
//!
//! Ordinary floating point is disallowed here: every term is a truncating
//! decimal division carried out at the full working precision, and term
//! additions are exact, so the same interval always produces bit-identical
//! output regardless of which worker computes it or when.
//!
//! ## Submodules
//! - **`engine`**: The pure computation. Sign rule, per-term division,
//!   partial-sum accumulation.
//! - **`service`**: The worker consume loop. Strict decode, compute on a
//!   blocking thread, publish, acknowledge.

pub mod engine;
pub mod service;

#[cfg(test)]
mod tests;
