//! Distributed Series Pipeline Library
//!
//! This library crate defines the core modules of a distributed summation
//! pipeline for the Gregory-Leibniz series. It serves as the foundation for
//! the binary executable (`main.rs`), which selects one of three process
//! roles: producer, worker, or accumulator.
//!
//! ## Architecture Modules
//! The system is composed of loosely coupled subsystems glued together by two
//! durable work queues:
//!
//! - **`config`**: The shared arithmetic configuration. Every component that
//!   touches decimal arithmetic is constructed from the same `Precision`
//!   value so partial results stay comparable across processes.
//! - **`queue`**: The broker boundary. Wire protocol for task descriptors and
//!   partial results, plus the AMQP connection glue (durable queues,
//!   prefetch 1, manual acknowledgment).
//! - **`producer`**: Range partitioning. Cuts an unbounded integer range into
//!   contiguous fixed-size blocks and enqueues one task descriptor per block.
//! - **`series`**: The numerically sensitive core. Computes exact-decimal
//!   partial sums of the alternating series over one block.
//! - **`accumulator`**: The single serialization point. Merges partial
//!   results into a persisted running total and writes an immutable
//!   contribution record per result.
//! - **`error`**: Typed errors raised at the queue and persistence
//!   boundaries.

pub mod accumulator;
pub mod config;
pub mod error;
pub mod producer;
pub mod queue;
pub mod series;
