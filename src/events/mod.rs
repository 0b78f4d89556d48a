//! # Events Module
//!
//! Seeds the respondent home event store before a run by publishing the same
//! events the case service would send for each fixture household.
//!
//! For every row two flat JSON documents are produced:
//!
//! - `UAC_UPDATED`: hashed access code, active flag, questionnaire id, case
//!   type, region and the linking case / collection exercise ids
//! - `CASE_UPDATED`: case id, an increasing case reference, the address with
//!   its coordinates, and the fixed case service boilerplate
//!
//! Documents are serialised with `serde_json` from typed structs, so quotes
//! in addresses are escaped and field order follows the struct definitions.
//!
//! Publishing goes through the [`EventSink`] trait: [`AmqpPublisher`] talks to
//! RabbitMQ, [`JsonLinesSink`] prints the events for dry runs. Publishing is
//! fire-and-forget and failures are not retried.

mod message;
mod publisher;
mod seed;


pub use message::{
    uac_hash, Address, CasePayload, CaseUpdatedEvent, CollectionCase, Contact, Envelope,
    EventBuilder, EventHeader, SeedEvents, UacPayload, UacUpdate, UacUpdatedEvent,
    FIRST_CASE_REF,
};
pub use publisher::{redact_credentials, AmqpPublisher, EventSink, JsonLinesSink, PublishError};
pub use seed::{seed_events, SeedSummary};
