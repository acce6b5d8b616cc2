//! # Events
//!
//! One structured event per mutating entry point. Topics are
//! `(entity, action, id)` symbol triples; the data payload is the full
//! updated record so off-chain consumers never need a follow-up read.
//!
//! | Topic                        | Data      |
//! |------------------------------|-----------|
//! | `("renting", "created", id)` | [`Renting`] |
//! | `("renting", "updated", id)` | [`Renting`] |
//! | `("renting", "deleted", id)` | owner `Address` |
//! | `("booking", "created", id)` | [`Booking`] |
//! | `("booking", "updated", id)` | [`Booking`] |
//! | `("rating",  "created", id)` | [`Rating`]  |

use soroban_sdk::{symbol_short, Address, Env, Symbol};

use crate::types::{Booking, Rating, Renting};

const RENTING: Symbol = symbol_short!("renting");
const BOOKING: Symbol = symbol_short!("booking");
const RATING: Symbol = symbol_short!("rating");

const CREATED: Symbol = symbol_short!("created");
const UPDATED: Symbol = symbol_short!("updated");
const DELETED: Symbol = symbol_short!("deleted");

pub fn renting_created(env: &Env, renting: &Renting) {
    env.events()
        .publish((RENTING, CREATED, renting.id), renting.clone());
}

pub fn renting_updated(env: &Env, renting: &Renting) {
    env.events()
        .publish((RENTING, UPDATED, renting.id), renting.clone());
}

pub fn renting_deleted(env: &Env, id: u64, owner: &Address) {
    env.events().publish((RENTING, DELETED, id), owner.clone());
}

pub fn booking_created(env: &Env, booking: &Booking) {
    env.events()
        .publish((BOOKING, CREATED, booking.id), booking.clone());
}

/// Emitted by every booking lifecycle transition after `create`.
pub fn booking_updated(env: &Env, booking: &Booking) {
    env.events()
        .publish((BOOKING, UPDATED, booking.id), booking.clone());
}

pub fn rating_created(env: &Env, rating: &Rating) {
    env.events()
        .publish((RATING, CREATED, rating.id), rating.clone());
}
