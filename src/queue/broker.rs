//! AMQP Broker Glue
//!
//! Thin wrapper around a lapin connection. The broker is treated as a
//! reliable at-least-once FIFO delivery service with named queues; its
//! replication and persistence are assumed, not managed here.
//!
//! ## Responsibilities
//! - **Setup**: one connection, one channel, both queues declared durable.
//! - **Backpressure**: `prefetch = 1`, so a consumer holds at most one
//!   unacknowledged unit of work and fully processes it before the next
//!   dequeue.
//! - **Shutdown**: closing the connection cleanly on interrupt.
//!
//! There is no internal retry or reconnect loop. If the broker is
//! unreachable the error propagates and the process exits, relying on an
//! external supervisor to restart it.

use crate::queue::protocol::{RANGES_QUEUE, RESULTS_QUEUE};

use anyhow::Result;
use lapin::options::{
    BasicConsumeOptions, BasicPublishOptions, BasicQosOptions, QueueDeclareOptions,
};
use lapin::types::FieldTable;
use lapin::{BasicProperties, Channel, Connection, ConnectionProperties, Consumer};

const PERSISTENT_DELIVERY: u8 = 2;

/// One process's handle on the external broker.
pub struct Broker {
    connection: Connection,
    channel: Channel,
}

impl Broker {
    /// Connects to the broker and declares both pipeline queues as durable.
    pub async fn connect(amqp_url: &str) -> Result<Self> {
        let connection = Connection::connect(amqp_url, ConnectionProperties::default()).await?;
        let channel = connection.create_channel().await?;

        let declare = QueueDeclareOptions {
            durable: true,
            ..QueueDeclareOptions::default()
        };
        channel
            .queue_declare(RANGES_QUEUE, declare, FieldTable::default())
            .await?;
        channel
            .queue_declare(RESULTS_QUEUE, declare, FieldTable::default())
            .await?;

        // Hand out at most one unacknowledged delivery per consumer.
        channel.basic_qos(1, BasicQosOptions::default()).await?;

        tracing::info!("Connected to broker at {}", amqp_url);

        Ok(Self {
            connection,
            channel,
        })
    }

    /// Publishes one durable message to the named queue via the default
    /// exchange. No acknowledgment is awaited beyond the broker accepting
    /// the message.
    pub async fn publish(&self, queue: &str, body: &[u8]) -> Result<()> {
        self.channel
            .basic_publish(
                "",
                queue,
                BasicPublishOptions::default(),
                body,
                BasicProperties::default().with_delivery_mode(PERSISTENT_DELIVERY),
            )
            .await?
            .await?;
        Ok(())
    }

    /// Starts a manual-acknowledgment consumer on the named queue.
    ///
    /// With an empty tag the broker generates one, so any number of worker
    /// processes can consume from the same queue.
    pub async fn consume(&self, queue: &str) -> Result<Consumer> {
        let consumer = self
            .channel
            .basic_consume(
                queue,
                "",
                BasicConsumeOptions::default(),
                FieldTable::default(),
            )
            .await?;
        Ok(consumer)
    }

    /// Releases the broker connection. Called on the clean shutdown path.
    pub async fn close(&self) -> Result<()> {
        self.connection.close(200, "shutdown").await?;
        tracing::info!("Broker connection closed");
        Ok(())
    }
}
