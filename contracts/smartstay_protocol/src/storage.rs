//! # Storage
//!
//! Typed helpers over Soroban's two storage tiers used by SmartStay:
//!
//! ## Instance storage (contract-lifetime TTL)
//!
//! | Key            | Type             | Description                      |
//! |----------------|------------------|----------------------------------|
//! | `Config`       | `ProtocolConfig` | Token/collection addresses, flags|
//! | `RentingCount` | `u64`            | Auto-increment renting id counter|
//! | `BookingCount` | `u64`            | Auto-increment booking id counter|
//! | `RatingCount`  | `u64`            | Auto-increment rating id counter |
//!
//! Instance TTL is bumped by **7 days** whenever it falls below 1 day remaining.
//!
//! ## Persistent storage (per-entry TTL)
//!
//! | Key                      | Type       | Description                     |
//! |--------------------------|------------|---------------------------------|
//! | `Renting(id)`            | `Renting`  | A listing; absent once deleted  |
//! | `OwnerRentings(addr)`    | `Vec<u64>` | Ids listed by an owner          |
//! | `Booking(id)`            | `Booking`  | A reservation record            |
//! | `OwnerBookings(addr)`    | `Vec<u64>` | Bookings received by an owner   |
//! | `RecipientBookings(addr)`| `Vec<u64>` | Bookings placed by a recipient  |
//! | `Rating(id)`             | `Rating`   | A post-completion rating        |
//! | `UserRatings(addr)`      | `Vec<u64>` | Ratings received by an account  |
//!
//! Persistent TTL is bumped by **30 days** whenever it falls below 7 days
//! remaining.
//!
//! Counters only ever grow, so a deleted renting's id is never reassigned;
//! the record is simply removed and `Renting(id)` stops resolving.

use soroban_sdk::{contracttype, panic_with_error, Address, Env, Vec};

use crate::types::{Booking, ProtocolConfig, Rating, Renting};
use crate::Error;

// ── TTL Constants ────────────────────────────────────────────────────

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

/// Instance storage: bump by 7 days when below 1 day remaining.
const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

/// Persistent storage: bump by 30 days when below 7 days remaining.
const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

// ── Storage Keys ─────────────────────────────────────────────────────

/// All contract storage keys.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Protocol configuration (Instance).
    Config,
    /// Global auto-increment counter for renting ids (Instance).
    RentingCount,
    /// Global auto-increment counter for booking ids (Instance).
    BookingCount,
    /// Global auto-increment counter for rating ids (Instance).
    RatingCount,
    /// A renting keyed by id (Persistent).
    Renting(u64),
    /// Renting ids owned by an account (Persistent).
    OwnerRentings(Address),
    /// A booking keyed by id (Persistent).
    Booking(u64),
    /// Booking ids where the account is the renting owner (Persistent).
    OwnerBookings(Address),
    /// Booking ids where the account is the booker (Persistent).
    RecipientBookings(Address),
    /// A rating keyed by id (Persistent).
    Rating(u64),
    /// Rating ids whose subject is the account (Persistent).
    UserRatings(Address),
}

// ── Instance Storage Helpers ─────────────────────────────────────────

/// Extend instance storage TTL if it falls below the threshold.
fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn set_config(env: &Env, config: &ProtocolConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    bump_instance(env);
}

/// Retrieve the protocol configuration. Panics if `initialize` was never
/// called.
pub fn get_config(env: &Env) -> ProtocolConfig {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .unwrap_or_else(|| panic_with_error!(env, Error::NotInitialized))
}

fn next_id(env: &Env, key: &DataKey) -> u64 {
    bump_instance(env);
    let next: u64 = env.storage().instance().get(key).unwrap_or(0) + 1;
    env.storage().instance().set(key, &next);
    next
}

/// Reserve the next renting id (1-based).
pub fn next_renting_id(env: &Env) -> u64 {
    next_id(env, &DataKey::RentingCount)
}

/// Highest renting id ever assigned; the scan upper bound for search.
pub fn renting_count(env: &Env) -> u64 {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::RentingCount)
        .unwrap_or(0)
}

/// Reserve the next booking id (1-based).
pub fn next_booking_id(env: &Env) -> u64 {
    next_id(env, &DataKey::BookingCount)
}

/// Reserve the next rating id (1-based).
pub fn next_rating_id(env: &Env) -> u64 {
    next_id(env, &DataKey::RatingCount)
}

// ── Persistent Storage Helpers ───────────────────────────────────────

/// Extend the TTL for a persistent storage key.
fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn save_renting(env: &Env, renting: &Renting) {
    let key = DataKey::Renting(renting.id);
    env.storage().persistent().set(&key, renting);
    bump_persistent(env, &key);
}

/// Load a renting, or `None` when the id was never assigned or the record
/// was deleted. Used by the search scan, which skips tombstones silently.
pub fn try_load_renting(env: &Env, id: u64) -> Option<Renting> {
    let key = DataKey::Renting(id);
    let renting: Option<Renting> = env.storage().persistent().get(&key);
    if renting.is_some() {
        bump_persistent(env, &key);
    }
    renting
}

/// Load a renting by id. Panics with `RentingNotFound` for unknown or
/// deleted ids.
pub fn load_renting(env: &Env, id: u64) -> Renting {
    try_load_renting(env, id).unwrap_or_else(|| panic_with_error!(env, Error::RentingNotFound))
}

/// Remove a renting record (tombstone; the id is never reused).
pub fn remove_renting(env: &Env, id: u64) {
    env.storage().persistent().remove(&DataKey::Renting(id));
}

pub fn save_booking(env: &Env, booking: &Booking) {
    let key = DataKey::Booking(booking.id);
    env.storage().persistent().set(&key, booking);
    bump_persistent(env, &key);
}

/// Load a booking by id. Panics with `BookingNotFound` for unknown ids.
pub fn load_booking(env: &Env, id: u64) -> Booking {
    let key = DataKey::Booking(id);
    let booking: Booking = env
        .storage()
        .persistent()
        .get(&key)
        .unwrap_or_else(|| panic_with_error!(env, Error::BookingNotFound));
    bump_persistent(env, &key);
    booking
}

pub fn save_rating(env: &Env, rating: &Rating) {
    let key = DataKey::Rating(rating.id);
    env.storage().persistent().set(&key, rating);
    bump_persistent(env, &key);
}

/// Load a rating by id. Panics with `RatingNotFound` for unknown ids.
pub fn load_rating(env: &Env, id: u64) -> Rating {
    let key = DataKey::Rating(id);
    let rating: Rating = env
        .storage()
        .persistent()
        .get(&key)
        .unwrap_or_else(|| panic_with_error!(env, Error::RatingNotFound));
    bump_persistent(env, &key);
    rating
}

// ── Secondary indexes ────────────────────────────────────────────────

/// Read an id index (owner rentings, user bookings, user ratings).
/// Missing indexes read as empty.
pub fn load_index(env: &Env, key: &DataKey) -> Vec<u64> {
    let ids: Option<Vec<u64>> = env.storage().persistent().get(key);
    match ids {
        Some(ids) => {
            bump_persistent(env, key);
            ids
        }
        None => Vec::new(env),
    }
}

/// Append an id to an index.
pub fn index_push(env: &Env, key: &DataKey, id: u64) {
    let mut ids = load_index(env, key);
    ids.push_back(id);
    env.storage().persistent().set(key, &ids);
    bump_persistent(env, key);
}

/// Remove an id from an index. No-op when absent.
pub fn index_remove(env: &Env, key: &DataKey, id: u64) {
    let mut ids = load_index(env, key);
    if let Some(pos) = ids.first_index_of(id) {
        ids.remove(pos);
        env.storage().persistent().set(key, &ids);
        bump_persistent(env, key);
    }
}
