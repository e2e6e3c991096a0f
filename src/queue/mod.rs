//! Work Queue Boundary
//!
//! All coordination between the three roles goes through two durable, named
//! work queues on an external AMQP broker:
//!
//! ```text
//! Producer → series_ranges queue → Worker(s) → series_results queue → Accumulator
//! ```
//!
//! ## Submodules
//! - **`protocol`**: Wire formats for the two queues and the strict decode
//!   step applied at the boundary. Malformed payloads fail fast with a typed
//!   error instead of being coerced or skipped.
//! - **`broker`**: Connection glue for the AMQP broker. Declares both queues
//!   as durable, limits every consumer to one unacknowledged delivery at a
//!   time, and exposes publish/consume/close. Connectivity failures are
//!   fatal; reconnecting is an external supervisor's concern.

pub mod broker;
pub mod protocol;
