//! # SmartStay Protocol Contract
//!
//! This is the root crate of the **SmartStay rental marketplace**. It
//! exposes the single Soroban contract `SmartStayProtocol` whose entry
//! points cover the full listing and booking lifecycle:
//!
//! | Phase      | Entry Point(s)                                             |
//! |------------|------------------------------------------------------------|
//! | Bootstrap  | [`SmartStayProtocol::initialize`]                          |
//! | Listings   | `create_renting`, `update_renting`, `delete_renting`, `search_rentings` |
//! | Booking    | `create_booking`, `approve_booking`, `reject_booking`, `confirm_booking`, `cancel_booking` |
//! | Settlement | `validate_booking_as_owner`, `validate_booking_as_recipient`, `retrieve_amount`, `retrieve_deposit` |
//! | Aftermath  | `rate_owner`, `rate_recipient`, `redeem_nft`               |
//! | Queries    | `get_renting`, `get_owner_rentings`, `get_booking`, `get_bookings_as_owner`, `get_bookings_as_recipient`, `get_user_ratings` |
//!
//! ## Architecture
//!
//! Listing CRUD is delegated to [`rentings`], the booking state machine to
//! [`bookings`], escrow movement to [`escrow`], rating bookkeeping to
//! [`ratings`], token side effects to [`tokens`] and storage access to
//! [`storage`]. This file contains **only** the public entry points, the
//! caller auth, and event emissions — no business logic lives here directly.

#![no_std]

use soroban_sdk::{
    contract, contracterror, contractimpl, panic_with_error, Address, Env, String, Symbol, Vec,
};

mod bookings;
mod escrow;
mod events;
mod ratings;
mod rentings;
mod storage;
pub mod tokens;
mod types;

#[cfg(test)]
mod invariants;
#[cfg(test)]
mod test_events;
#[cfg(test)]
mod test_rentings;

use storage::{get_config, has_config, set_config};
pub use types::{
    Booking, BookingStatus, ProtocolConfig, Rating, Renting, RentingParams, MAX_TEXT_LEN,
};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // Bootstrap
    AlreadyInitialized = 1,
    NotInitialized     = 2,
    // Lookup
    RentingNotFound    = 3,
    BookingNotFound    = 4,
    RatingNotFound     = 5,
    // Caller role
    NotOwner           = 6,
    NotRecipient       = 7,
    OwnRenting         = 8,
    // Status
    WrongStatus        = 9,
    // Timing
    PastBooking        = 10,
    AlreadyStarted     = 11,
    NotFinished        = 12,
    // Capacity
    TooManyRentings    = 13,
    TooManyPersons     = 14,
    // Payment
    NotEnoughSent      = 15,
    Overflow           = 16,
    // Idempotency
    AlreadyValidated   = 17,
    AlreadyRated       = 18,
    AlreadyRedeemed    = 19,
    // Input validation
    InvalidAmount      = 20,
    InvalidPersonCount = 21,
    InvalidDuration    = 22,
    InvalidNote        = 23,
    TextTooLong        = 24,
    UnknownTag         = 25,
}

#[contract]
pub struct SmartStayProtocol;

#[contractimpl]
impl SmartStayProtocol {
    // ─────────────────────────────────────────────────────────
    // Initialisation
    // ─────────────────────────────────────────────────────────

    /// Pin the payment token, the two token collections and the
    /// excess-payment policy.
    ///
    /// Must be called exactly once immediately after deployment.
    /// Subsequent calls panic with `Error::AlreadyInitialized`.
    pub fn initialize(
        env: Env,
        payment_token: Address,
        receipt_collection: Address,
        nft_collection: Address,
        refund_excess: bool,
    ) {
        if has_config(&env) {
            panic_with_error!(&env, Error::AlreadyInitialized);
        }
        set_config(
            &env,
            &ProtocolConfig {
                payment_token,
                receipt_collection,
                nft_collection,
                refund_excess,
            },
        );
    }

    /// Return the pinned protocol configuration.
    pub fn get_config(env: Env) -> ProtocolConfig {
        get_config(&env)
    }

    // ─────────────────────────────────────────────────────────
    // Renting registry
    // ─────────────────────────────────────────────────────────

    /// List a new renting owned by `caller`.
    ///
    /// Fails with `TooManyRentings` once the caller has 5 live listings.
    pub fn create_renting(env: Env, caller: Address, params: RentingParams) -> Renting {
        caller.require_auth();
        let renting = rentings::create(&env, &caller, &params);
        events::renting_created(&env, &renting);
        renting
    }

    /// Overwrite the mutable fields of a listing the caller owns.
    pub fn update_renting(env: Env, caller: Address, id: u64, params: RentingParams) -> Renting {
        caller.require_auth();
        let renting = rentings::update(&env, &caller, id, &params);
        events::renting_updated(&env, &renting);
        renting
    }

    /// Delist a renting the caller owns. The id is never reassigned.
    pub fn delete_renting(env: Env, caller: Address, id: u64) {
        caller.require_auth();
        rentings::delete(&env, &caller, id);
        events::renting_deleted(&env, id, &caller);
    }

    /// Retrieve a renting by its id.
    pub fn get_renting(env: Env, id: u64) -> Renting {
        storage::load_renting(&env, id)
    }

    /// All live rentings listed by `owner`.
    pub fn get_owner_rentings(env: Env, owner: Address) -> Vec<Renting> {
        rentings::owned_by(&env, &owner)
    }

    /// Filter all live rentings. Zero/empty filter values are wildcards;
    /// results come back in ascending id order. Read-only.
    pub fn search_rentings(
        env: Env,
        max_unit_price: i128,
        min_person_count: u32,
        location: String,
        tags: Vec<Symbol>,
    ) -> Vec<Renting> {
        rentings::search(&env, max_unit_price, min_person_count, &location, &tags)
    }

    // ─────────────────────────────────────────────────────────
    // Booking lifecycle
    // ─────────────────────────────────────────────────────────

    /// Request a stay at a listed renting.
    pub fn create_booking(
        env: Env,
        caller: Address,
        renting_id: u64,
        timestamp_start: u64,
        duration: u64,
        person_count: u32,
    ) -> Booking {
        caller.require_auth();
        let booking = bookings::create(
            &env,
            &caller,
            renting_id,
            timestamp_start,
            duration,
            person_count,
        );
        events::booking_created(&env, &booking);
        booking
    }

    /// Retrieve a booking by its id.
    pub fn get_booking(env: Env, id: u64) -> Booking {
        storage::load_booking(&env, id)
    }

    /// All bookings received against the caller's rentings.
    pub fn get_bookings_as_owner(env: Env, owner: Address) -> Vec<Booking> {
        bookings::as_owner(&env, &owner)
    }

    /// All bookings placed by `recipient`.
    pub fn get_bookings_as_recipient(env: Env, recipient: Address) -> Vec<Booking> {
        bookings::as_recipient(&env, &recipient)
    }

    /// Owner accepts a booking request.
    pub fn approve_booking(env: Env, caller: Address, id: u64) -> Booking {
        caller.require_auth();
        let booking = bookings::approve(&env, &caller, id);
        events::booking_updated(&env, &booking);
        booking
    }

    /// Owner declines a booking request. Terminal.
    pub fn reject_booking(env: Env, caller: Address, id: u64) -> Booking {
        caller.require_auth();
        let booking = bookings::reject(&env, &caller, id);
        events::booking_updated(&env, &booking);
        booking
    }

    /// Recipient pays for an approved booking. `payment` must cover
    /// `unit_price * duration + deposit`, else `NotEnoughSent`; the fee and
    /// deposit are locked in escrow and both parties receive a soul-bound
    /// receipt token tagged with the given URIs.
    pub fn confirm_booking(
        env: Env,
        caller: Address,
        id: u64,
        payment: i128,
        owner_uri: String,
        recipient_uri: String,
    ) -> Booking {
        caller.require_auth();
        let booking = bookings::confirm(&env, &caller, id, payment, &owner_uri, &recipient_uri);
        events::booking_updated(&env, &booking);
        booking
    }

    /// Recipient cancels a confirmed booking before the stay starts; the
    /// full escrow is refunded and all issued tokens are burned. Terminal.
    pub fn cancel_booking(env: Env, caller: Address, id: u64) -> Booking {
        caller.require_auth();
        let booking = bookings::cancel(&env, &caller, id);
        events::booking_updated(&env, &booking);
        booking
    }

    /// Owner confirms the stay completed, once it is over.
    pub fn validate_booking_as_owner(env: Env, caller: Address, id: u64) -> Booking {
        caller.require_auth();
        let booking = bookings::validate_as_owner(&env, &caller, id);
        events::booking_updated(&env, &booking);
        booking
    }

    /// Recipient confirms the stay completed, once it is over.
    pub fn validate_booking_as_recipient(env: Env, caller: Address, id: u64) -> Booking {
        caller.require_auth();
        let booking = bookings::validate_as_recipient(&env, &caller, id);
        events::booking_updated(&env, &booking);
        booking
    }

    /// Owner withdraws the rental fee of a validated booking.
    pub fn retrieve_amount(env: Env, caller: Address, id: u64, new_uri: String) -> Booking {
        caller.require_auth();
        let booking = bookings::retrieve_amount(&env, &caller, id, &new_uri);
        events::booking_updated(&env, &booking);
        booking
    }

    /// Recipient withdraws the deposit of a validated booking.
    pub fn retrieve_deposit(env: Env, caller: Address, id: u64, new_uri: String) -> Booking {
        caller.require_auth();
        let booking = bookings::retrieve_deposit(&env, &caller, id, &new_uri);
        events::booking_updated(&env, &booking);
        booking
    }

    // ─────────────────────────────────────────────────────────
    // Ratings & NFT redemption
    // ─────────────────────────────────────────────────────────

    /// Recipient rates the owner of a completed booking (note 0–5).
    pub fn rate_owner(env: Env, caller: Address, id: u64, note: u32, comment: String) -> Rating {
        caller.require_auth();
        let (rating, booking) = ratings::rate_owner(&env, &caller, id, note, &comment);
        events::rating_created(&env, &rating);
        events::booking_updated(&env, &booking);
        rating
    }

    /// Owner rates the recipient of a completed booking (note 0–5).
    pub fn rate_recipient(
        env: Env,
        caller: Address,
        id: u64,
        note: u32,
        comment: String,
    ) -> Rating {
        caller.require_auth();
        let (rating, booking) = ratings::rate_recipient(&env, &caller, id, note, &comment);
        events::rating_created(&env, &rating);
        events::booking_updated(&env, &booking);
        rating
    }

    /// All ratings received by an account.
    pub fn get_user_ratings(env: Env, subject: Address) -> Vec<Rating> {
        ratings::for_user(&env, &subject)
    }

    /// Recipient mints the transferable keepsake NFT for a paid booking.
    pub fn redeem_nft(env: Env, caller: Address, id: u64, uri: String) -> Booking {
        caller.require_auth();
        let booking = bookings::redeem_nft(&env, &caller, id, &uri);
        events::booking_updated(&env, &booking);
        booking
    }
}
