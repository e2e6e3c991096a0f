//! Accumulator Run Loop
//!
//! Consumes the results queue one message at a time and performs the merge
//! as a single logical unit: decode the partial, read-add-persist the
//! running total, write the contribution record, then acknowledge. The loop
//! never terminates on its own; it runs until the cancellation token fires.
//!
//! A malformed result payload or a corrupt persisted total is fatal. A
//! redelivered result is merged again (no dedup, see the module docs).

use crate::accumulator::store::TotalStore;
use crate::queue::broker::Broker;
use crate::queue::protocol::{decode_partial_result, RESULTS_QUEUE};

use anyhow::Result;
use bigdecimal::BigDecimal;
use futures::StreamExt;
use lapin::options::BasicAckOptions;
use tokio_util::sync::CancellationToken;

/// Consumes the results queue until cancelled, merging every partial result
/// into the persisted running total.
pub async fn run(broker: &Broker, store: &TotalStore, cancel: &CancellationToken) -> Result<()> {
    let mut consumer = broker.consume(RESULTS_QUEUE).await?;
    tracing::info!("Accumulator consuming {}", RESULTS_QUEUE);

    let mut merged = 0u64;
    loop {
        let delivery = tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Accumulator shutting down after {} merges", merged);
                return Ok(());
            }
            next = consumer.next() => match next {
                Some(delivery) => delivery?,
                None => anyhow::bail!("results consumer closed by broker"),
            },
        };

        let partial = decode_partial_result(&delivery.data)?;
        let total = store.merge(&partial)?;
        delivery.ack(BasicAckOptions::default()).await?;

        merged += 1;
        tracing::info!("Merged partial #{}; total now {}", merged, leading_digits(&total));
    }
}

/// First few digits of the total for logging; the full value runs to tens of
/// thousands of digits.
fn leading_digits(total: &BigDecimal) -> String {
    let text = total.to_string();
    if text.len() <= 16 {
        text
    } else {
        format!("{}...", &text[..16])
    }
}
