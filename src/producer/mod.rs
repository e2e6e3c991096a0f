//! Task Producer Module
//!
//! Leaf component of the pipeline: partitions the series index range into
//! contiguous fixed-size blocks and enqueues one task descriptor per block
//! onto the ranges queue, then runs to completion. It consumes nothing.
//!
//! ## Submodules
//! - **`planner`**: Pure partitioning logic, `N` and `S` in, descriptor
//!   sequence out.
//! - **`service`**: The enqueue run. One durable publish per descriptor, no
//!   buffering or retry; a broker failure is fatal.

pub mod planner;
pub mod service;

#[cfg(test)]
mod tests;
