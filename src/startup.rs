//! Process start-up for a load generator instance.
//!
//! Loads the fixture partition this instance owns and, when `DATA_PUBLISH`
//! is `true`, seeds the event store with the same rows before any user
//! starts. Every failure here is fatal.

use crate::config::{BrokerConfig, RunConfig};
use crate::events::{redact_credentials, seed_events, AmqpPublisher, EventBuilder, SeedSummary};
use crate::fixtures::{FixtureRecord, FixtureSet};
use crate::journeys::RunContext;
use anyhow::{Context, Result};
use tracing::info;

/// Load fixtures, optionally seed, and build the shared run context.
pub async fn prepare(config: &RunConfig) -> Result<RunContext> {
    let instance = config.instance_or_sole();
    let fixtures = FixtureSet::load(&config.fixture_file, instance).with_context(|| {
        format!(
            "failed to load fixtures from {}",
            config.fixture_file.display()
        )
    })?;

    if config.data_publish {
        publish_seed_events(&config.broker, fixtures.records()).await?;
    } else {
        info!("DATA_PUBLISH not set, skipping event seeding");
    }

    info!(
        rows = fixtures.len(),
        selection = ?config.selection,
        failure_delay_secs = config.failure_delay.as_secs(),
        "run context ready"
    );
    Ok(RunContext::new(fixtures, config))
}

/// Publish seed events for `records` to the configured broker.
pub async fn publish_seed_events(
    broker: &BrokerConfig,
    records: &[FixtureRecord],
) -> Result<SeedSummary> {
    let mut publisher = AmqpPublisher::connect(&broker.url, &broker.exchange)
        .await
        .with_context(|| {
            format!(
                "failed to connect to {} for seeding",
                redact_credentials(&broker.url)
            )
        })?;

    let summary = seed_events(&mut publisher, records, broker, &mut EventBuilder::default())
        .await
        .context("failed to publish seed events")?;

    publisher
        .close()
        .await
        .context("failed to close broker connection")?;
    Ok(summary)
}
