use crate::fixtures::FixtureRecord;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// First case reference handed out by [`EventBuilder`].
pub const FIRST_CASE_REF: u64 = 84_000_001;

const SOURCE: &str = "CASE_SERVICE";
const CHANNEL: &str = "RM";
const SURVEY: &str = "CENSUS";
const ADDRESS_REGION: &str = "E";
const ARID: &str = "ABPXXXXXX010008328509";
const ESTAB_TYPE: &str = "Household";
const CASE_STATE: &str = "ACTIONABLE";

#[derive(Debug, Clone, Serialize)]
pub struct Envelope<P> {
    pub event: EventHeader,
    pub payload: P,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventHeader {
    #[serde(rename = "type")]
    pub event_type: &'static str,
    pub source: &'static str,
    pub channel: &'static str,
    pub date_time: String,
    pub transaction_id: Uuid,
}

#[derive(Debug, Clone, Serialize)]
pub struct UacPayload {
    pub uac: UacUpdate,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UacUpdate {
    pub uac_hash: String,
    pub active: bool,
    pub questionnaire_id: String,
    pub case_type: String,
    pub region: String,
    pub case_id: Uuid,
    pub collection_exercise_id: Uuid,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CasePayload {
    pub collection_case: CollectionCase,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionCase {
    pub id: Uuid,
    pub case_ref: String,
    pub case_type: String,
    pub survey: &'static str,
    pub collection_exercise_id: Uuid,
    pub address: Address,
    pub contact: Contact,
    pub state: &'static str,
    pub actionable_from: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub address_line1: String,
    pub address_line2: String,
    pub address_line3: String,
    pub town_name: String,
    pub postcode: String,
    pub region: &'static str,
    pub latitude: String,
    pub longitude: String,
    pub uprn: String,
    pub arid: &'static str,
    pub address_type: String,
    pub estab_type: &'static str,
}

/// Always empty; the case service sends nulls.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub title: Option<String>,
    pub forename: Option<String>,
    pub surname: Option<String>,
    pub email: Option<String>,
    pub tel_no: Option<String>,
}

pub type UacUpdatedEvent = Envelope<UacPayload>;
pub type CaseUpdatedEvent = Envelope<CasePayload>;

/// The pair of events that seeds one fixture row.
#[derive(Debug, Clone)]
pub struct SeedEvents {
    pub uac: UacUpdatedEvent,
    pub case: CaseUpdatedEvent,
}

/// Lowercase hex SHA-256 of an access code, as stored by the case service.
pub fn uac_hash(uac: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(uac.as_bytes());
    format!("{:x}", hasher.finalize())
}

fn timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn header(event_type: &'static str, at: DateTime<Utc>) -> EventHeader {
    EventHeader {
        event_type,
        source: SOURCE,
        channel: CHANNEL,
        date_time: timestamp(at),
        transaction_id: Uuid::new_v4(),
    }
}

/// Builds seed events, handing out increasing case references.
#[derive(Debug)]
pub struct EventBuilder {
    next_case_ref: u64,
}

impl Default for EventBuilder {
    fn default() -> Self {
        Self::new(FIRST_CASE_REF)
    }
}

impl EventBuilder {
    pub fn new(first_case_ref: u64) -> Self {
        Self {
            next_case_ref: first_case_ref,
        }
    }

    /// Events for `record` timestamped now, with fresh case and exercise ids.
    pub fn build(&mut self, record: &FixtureRecord) -> SeedEvents {
        self.build_at(record, Utc::now(), Uuid::new_v4(), Uuid::new_v4())
    }

    pub fn build_at(
        &mut self,
        record: &FixtureRecord,
        at: DateTime<Utc>,
        case_id: Uuid,
        collection_exercise_id: Uuid,
    ) -> SeedEvents {
        let case_ref = self.next_case_ref;
        self.next_case_ref += 1;

        let uac = Envelope {
            event: header("UAC_UPDATED", at),
            payload: UacPayload {
                uac: UacUpdate {
                    uac_hash: uac_hash(&record.uac),
                    active: record.is_active(),
                    questionnaire_id: record.questionnaire_id.clone(),
                    case_type: record.case_type.clone(),
                    region: record.region.clone(),
                    case_id,
                    collection_exercise_id,
                },
            },
        };

        let case = Envelope {
            event: header("CASE_UPDATED", at),
            payload: CasePayload {
                collection_case: CollectionCase {
                    id: case_id,
                    case_ref: case_ref.to_string(),
                    case_type: record.case_type.clone(),
                    survey: SURVEY,
                    collection_exercise_id,
                    address: Address {
                        address_line1: record.address_line1.clone(),
                        address_line2: record.address_line2.clone(),
                        address_line3: record.address_line3.clone(),
                        town_name: record.town_name.clone(),
                        postcode: record.postcode.clone(),
                        region: ADDRESS_REGION,
                        latitude: record.latitude.clone(),
                        longitude: record.longitude.clone(),
                        uprn: record.uprn.clone(),
                        arid: ARID,
                        address_type: record.case_type.clone(),
                        estab_type: ESTAB_TYPE,
                    },
                    contact: Contact::default(),
                    state: CASE_STATE,
                    actionable_from: timestamp(at),
                },
            },
        };

        SeedEvents { uac, case }
    }
}
