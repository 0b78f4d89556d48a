use lapin::options::BasicPublishOptions;
use lapin::{BasicProperties, Channel, Connection, ConnectionProperties};
use reqwest::Url;
use std::io::Write;
use thiserror::Error;
use tracing::{debug, info};

/// Broker connection or publish failure. Never retried.
#[derive(Debug, Error)]
pub enum PublishError {
    #[error("failed to connect to broker at {url}: {source}")]
    Connect {
        url: String,
        #[source]
        source: lapin::Error,
    },

    #[error("broker channel error: {0}")]
    Channel(#[source] lapin::Error),

    #[error("failed to publish to routing key '{routing_key}': {source}")]
    Publish {
        routing_key: String,
        #[source]
        source: lapin::Error,
    },

    #[error("failed to serialise event: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write event: {0}")]
    Io(#[from] std::io::Error),
}

/// Destination for seed events.
#[allow(async_fn_in_trait)]
pub trait EventSink {
    async fn publish(&mut self, routing_key: &str, body: &[u8]) -> Result<(), PublishError>;
}

/// Publishes to a RabbitMQ exchange without waiting for broker confirms.
pub struct AmqpPublisher {
    connection: Connection,
    channel: Channel,
    exchange: String,
}

impl AmqpPublisher {
    pub async fn connect(url: &str, exchange: &str) -> Result<Self, PublishError> {
        let connection = Connection::connect(url, ConnectionProperties::default())
            .await
            .map_err(|source| PublishError::Connect {
                url: redact_credentials(url),
                source,
            })?;
        let channel = connection
            .create_channel()
            .await
            .map_err(PublishError::Channel)?;

        info!(broker = %redact_credentials(url), exchange, "connected to broker");
        Ok(Self {
            connection,
            channel,
            exchange: exchange.to_string(),
        })
    }

    pub async fn close(self) -> Result<(), PublishError> {
        self.connection
            .close(200, "OK")
            .await
            .map_err(PublishError::Channel)
    }
}

impl EventSink for AmqpPublisher {
    async fn publish(&mut self, routing_key: &str, body: &[u8]) -> Result<(), PublishError> {
        let _confirm = self
            .channel
            .basic_publish(
                &self.exchange,
                routing_key,
                BasicPublishOptions::default(),
                body,
                BasicProperties::default(),
            )
            .await
            .map_err(|source| PublishError::Publish {
                routing_key: routing_key.to_string(),
                source,
            })?;
        debug!(exchange = %self.exchange, routing_key, bytes = body.len(), "event published");
        Ok(())
    }
}

/// Writes `<routing key> <json>` lines, for dry runs.
pub struct JsonLinesSink<W: Write> {
    out: W,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> EventSink for JsonLinesSink<W> {
    async fn publish(&mut self, routing_key: &str, body: &[u8]) -> Result<(), PublishError> {
        self.out.write_all(routing_key.as_bytes())?;
        self.out.write_all(b" ")?;
        self.out.write_all(body)?;
        self.out.write_all(b"\n")?;
        Ok(())
    }
}

/// Hide the user-info part of a broker URL.
pub fn redact_credentials(url: &str) -> String {
    let mut parsed = match Url::parse(url) {
        Ok(parsed) if parsed.has_host() => parsed,
        _ => return "<unparseable url>".to_string(),
    };
    if !parsed.username().is_empty() || parsed.password().is_some() {
        // Both setters only fail for host-less URLs.
        let _ = parsed.set_username("***");
        let _ = parsed.set_password(None);
    }
    parsed.to_string()
}
