//! Worker Run Loop
//!
//! Pulls one task descriptor at a time from the ranges queue, computes its
//! partial sum, publishes the result, then acknowledges the delivery. With
//! `prefetch = 1` on the channel, a worker never holds more than one
//! unacknowledged block; any number of worker processes can consume from the
//! same queue and the broker arbitrates who gets which block.
//!
//! There is no retry logic: a malformed descriptor or a failed computation
//! is fatal to the process. A crash after publish but before ack leads to
//! redelivery of the same block (at-least-once semantics, see the
//! accumulator module for the consequences).

use crate::queue::broker::Broker;
use crate::queue::protocol::{encode_partial_result, TaskDescriptor, RANGES_QUEUE, RESULTS_QUEUE};
use crate::series::engine::SeriesEngine;

use anyhow::Result;
use futures::StreamExt;
use lapin::options::BasicAckOptions;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Consumes the ranges queue until cancelled.
pub async fn run(broker: &Broker, engine: Arc<SeriesEngine>, cancel: &CancellationToken) -> Result<()> {
    let mut consumer = broker.consume(RANGES_QUEUE).await?;
    tracing::info!("Worker consuming {} ({} digits)", RANGES_QUEUE, engine.digits());

    loop {
        let delivery = tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Worker shutting down");
                return Ok(());
            }
            next = consumer.next() => match next {
                Some(delivery) => delivery?,
                None => anyhow::bail!("ranges consumer closed by broker"),
            },
        };

        let task = TaskDescriptor::decode(&delivery.data)?;
        tracing::debug!(
            "Computing block [{}, {}) ({} terms)",
            task.start,
            task.end,
            task.term_count()
        );

        // The division runs for a long time at full precision; keep it off
        // the async runtime threads.
        let compute_engine = engine.clone();
        let compute_task = task.clone();
        let partial =
            tokio::task::spawn_blocking(move || compute_engine.partial_sum(&compute_task))
                .await??;

        broker
            .publish(RESULTS_QUEUE, &encode_partial_result(&partial))
            .await?;
        delivery.ack(BasicAckOptions::default()).await?;

        tracing::info!("Published partial for block [{}, {})", task.start, task.end);
    }
}
