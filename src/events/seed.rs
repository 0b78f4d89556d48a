use super::message::EventBuilder;
use super::publisher::{EventSink, PublishError};
use crate::config::BrokerConfig;
use crate::fixtures::FixtureRecord;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub rows: usize,
    pub events: usize,
}

/// Publish a UAC-updated then a case-updated event for every record.
///
/// Stops at the first publish failure.
pub async fn seed_events<S: EventSink>(
    sink: &mut S,
    records: &[FixtureRecord],
    broker: &BrokerConfig,
    builder: &mut EventBuilder,
) -> Result<SeedSummary, PublishError> {
    let mut summary = SeedSummary { rows: 0, events: 0 };

    for record in records {
        let events = builder.build(record);

        let body = serde_json::to_vec(&events.uac)?;
        sink.publish(&broker.uac_routing_key, &body).await?;
        summary.events += 1;

        let body = serde_json::to_vec(&events.case)?;
        sink.publish(&broker.case_routing_key, &body).await?;
        summary.events += 1;

        summary.rows += 1;
    }

    info!(
        rows = summary.rows,
        events = summary.events,
        exchange = %broker.exchange,
        "seed events published"
    );
    Ok(summary)
}
