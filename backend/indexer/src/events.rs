//! Canonical event types emitted by the SmartStay protocol contract.
//!
//! These mirror the Soroban contract events defined in
//! `contracts/smartstay_protocol/src/events.rs`: every event carries an
//! `(entity, action, id)` topic triple and the full updated record as data.

use serde::{Deserialize, Serialize};

/// All recognised event kinds from the SmartStay contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// A new renting was listed (`("renting", "created")` topics).
    RentingCreated,
    /// A renting's fields were overwritten (`("renting", "updated")`).
    RentingUpdated,
    /// A renting was delisted (`("renting", "deleted")`).
    RentingDeleted,
    /// A booking was requested (`("booking", "created")`).
    BookingCreated,
    /// A booking changed status or flags (`("booking", "updated")`).
    BookingUpdated,
    /// A post-completion rating was stored (`("rating", "created")`).
    RatingCreated,
    /// An event from this contract that we don't recognise yet.
    Unknown,
}

impl EventKind {
    /// Map the `(entity, action)` topic symbols onto an [`EventKind`].
    pub fn from_topics(entity: &str, action: &str) -> Self {
        match (entity, action) {
            ("renting", "created") => Self::RentingCreated,
            ("renting", "updated") => Self::RentingUpdated,
            ("renting", "deleted") => Self::RentingDeleted,
            ("booking", "created") => Self::BookingCreated,
            ("booking", "updated") => Self::BookingUpdated,
            ("rating", "created") => Self::RatingCreated,
            _ => Self::Unknown,
        }
    }

    /// Return a short identifier string suitable for storage in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RentingCreated => "renting_created",
            Self::RentingUpdated => "renting_updated",
            Self::RentingDeleted => "renting_deleted",
            Self::BookingCreated => "booking_created",
            Self::BookingUpdated => "booking_updated",
            Self::RatingCreated => "rating_created",
            Self::Unknown => "unknown",
        }
    }
}

/// A fully decoded SmartStay event, ready to be stored in the database.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StayEvent {
    pub event_type: String,
    /// Renting, booking or rating id, depending on the event type.
    pub entity_id: Option<String>,
    /// Owner side of the record (listing owner, booking owner, rater).
    pub actor: Option<String>,
    /// Recipient side of the record, when the event has one.
    pub recipient: Option<String>,
    /// Booking status string, for booking events.
    pub status: Option<String>,
    /// Unit price, locked amount or note — whichever the record carries.
    pub amount: Option<String>,
    pub ledger: i64,
    pub timestamp: i64,
    pub contract_id: String,
    pub tx_hash: Option<String>,
}

/// A raw event record as stored in / read from the database.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct EventRecord {
    pub id: i64,
    pub event_type: String,
    pub entity_id: Option<String>,
    pub actor: Option<String>,
    pub recipient: Option<String>,
    pub status: Option<String>,
    pub amount: Option<String>,
    pub ledger: i64,
    pub timestamp: i64,
    pub contract_id: String,
    pub tx_hash: Option<String>,
    pub created_at: i64,
}
