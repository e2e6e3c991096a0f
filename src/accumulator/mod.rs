//! Accumulator Module
//!
//! The single serialization point of the pipeline. Exactly one logical
//! accumulator instance consumes the results queue and merges each partial
//! result into a persisted running total, one message at a time, so the
//! read-modify-write of the total never races with itself. Running more
//! than one accumulator concurrently is unsafe and not prevented by the
//! protocol; it is an operational constraint.
//!
//! Known gap, preserved deliberately: the broker delivers at least once,
//! and the merge does not deduplicate. A partial result redelivered after a
//! crash-before-ack is double-counted in the running total. The
//! contribution records keep an audit trail, but they are keyed by a fresh
//! UUID per processed message, not by a delivery-stable identifier.
//!
//! ## Submodules
//! - **`store`**: Persistence of the running total and the immutable
//!   contribution records.
//! - **`service`**: The consume loop: decode, merge, acknowledge.

pub mod service;
pub mod store;
