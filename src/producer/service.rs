//! Producer Run Loop
//!
//! Enqueues every planned block onto the ranges queue and returns. The only
//! side effect is one durable publish per descriptor; no acknowledgment is
//! awaited beyond the broker accepting the message, and nothing is buffered
//! locally. Emission order carries no meaning for consumers.

use crate::producer::planner::{block_count, plan_blocks};
use crate::queue::broker::Broker;
use crate::queue::protocol::RANGES_QUEUE;

use anyhow::Result;
use tokio_util::sync::CancellationToken;

/// Partitions `[1, end_integer)` into blocks of `block_size` indices and
/// publishes one task descriptor per block.
///
/// Checks the cancellation token between publishes so an interrupt stops the
/// run cleanly at a block boundary. Returns the number of blocks published.
pub async fn run(
    broker: &Broker,
    end_integer: u64,
    block_size: u64,
    cancel: &CancellationToken,
) -> Result<u64> {
    tracing::info!(
        "Producer: {} blocks of {} indices up to {}",
        block_count(end_integer, block_size),
        block_size,
        end_integer
    );

    let mut published = 0u64;
    for task in plan_blocks(end_integer, block_size) {
        if cancel.is_cancelled() {
            tracing::info!("Producer interrupted after {} blocks", published);
            return Ok(published);
        }

        let body = task.encode()?;
        broker.publish(RANGES_QUEUE, &body).await?;
        tracing::debug!("Enqueued block [{}, {})", task.start, task.end);
        published += 1;
    }

    tracing::info!("Producer finished: {} blocks enqueued", published);
    Ok(published)
}
