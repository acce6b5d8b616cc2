//! # Booking lifecycle
//!
//! The state machine driving a booking from request to settlement. Every
//! operation follows the same sequence: load the record (existence check),
//! check the caller's role, check the exact current status, check the clock
//! where the transition is time-gated, then mutate. The Soroban VM executes
//! each invocation atomically, so a failed check discards all effects and
//! concurrent approve/reject races resolve to exactly one winner.
//!
//! Escrow movement lives in [`crate::escrow`], token side effects in
//! [`crate::tokens`]; this module owns the status transitions and flags.

use soroban_sdk::{panic_with_error, Address, Env, String, Vec};

use crate::escrow;
use crate::storage::{self, DataKey};
use crate::tokens;
use crate::types::{Booking, BookingStatus};
use crate::Error;

fn require_owner(env: &Env, booking: &Booking, caller: &Address) {
    if booking.owner != *caller {
        panic_with_error!(env, Error::NotOwner);
    }
}

fn require_recipient(env: &Env, booking: &Booking, caller: &Address) {
    if booking.recipient != *caller {
        panic_with_error!(env, Error::NotRecipient);
    }
}

fn require_status(env: &Env, booking: &Booking, expected: BookingStatus) {
    if booking.status != expected {
        panic_with_error!(env, Error::WrongStatus);
    }
}

/// Request a stay. Anyone but the renting's owner may book; the start must
/// not lie in the past and the party must fit the listing's capacity.
pub fn create(
    env: &Env,
    caller: &Address,
    renting_id: u64,
    timestamp_start: u64,
    duration: u64,
    person_count: u32,
) -> Booking {
    let renting = storage::load_renting(env, renting_id);

    if renting.owner == *caller {
        panic_with_error!(env, Error::OwnRenting);
    }
    if timestamp_start < env.ledger().timestamp() {
        panic_with_error!(env, Error::PastBooking);
    }
    if duration == 0 {
        panic_with_error!(env, Error::InvalidDuration);
    }
    if person_count == 0 {
        panic_with_error!(env, Error::InvalidPersonCount);
    }
    if person_count > renting.person_count {
        panic_with_error!(env, Error::TooManyPersons);
    }

    let booking = Booking {
        id: storage::next_booking_id(env),
        renting_id,
        owner: renting.owner.clone(),
        recipient: caller.clone(),
        timestamp_start,
        duration,
        timestamp_end: escrow::stay_end(env, timestamp_start, duration),
        person_count,
        status: BookingStatus::Created,
        amount_locked: 0,
        deposit_locked: 0,
        validated_owner: false,
        validated_recipient: false,
        rated_owner: false,
        rated_recipient: false,
        nft_redeemed: false,
        owner_receipt_id: 0,
        recipient_receipt_id: 0,
        nft_id: 0,
    };

    storage::save_booking(env, &booking);
    storage::index_push(env, &DataKey::OwnerBookings(booking.owner.clone()), booking.id);
    storage::index_push(
        env,
        &DataKey::RecipientBookings(booking.recipient.clone()),
        booking.id,
    );
    booking
}

/// Owner accepts a requested booking.
pub fn approve(env: &Env, caller: &Address, id: u64) -> Booking {
    let mut booking = storage::load_booking(env, id);
    require_owner(env, &booking, caller);
    require_status(env, &booking, BookingStatus::Created);

    booking.status = BookingStatus::Approved;
    storage::save_booking(env, &booking);
    booking
}

/// Owner declines a requested booking. Terminal.
pub fn reject(env: &Env, caller: &Address, id: u64) -> Booking {
    let mut booking = storage::load_booking(env, id);
    require_owner(env, &booking, caller);
    require_status(env, &booking, BookingStatus::Created);

    booking.status = BookingStatus::Rejected;
    storage::save_booking(env, &booking);
    booking
}

/// Recipient pays for an approved booking. Locks the rental fee and the
/// deposit in escrow and mints one soul-bound receipt to each party.
pub fn confirm(
    env: &Env,
    caller: &Address,
    id: u64,
    payment: i128,
    owner_uri: &String,
    recipient_uri: &String,
) -> Booking {
    let mut booking = storage::load_booking(env, id);
    require_recipient(env, &booking, caller);
    require_status(env, &booking, BookingStatus::Approved);

    let renting = storage::load_renting(env, booking.renting_id);
    let amount = escrow::rental_amount(env, renting.unit_price, booking.duration);
    escrow::lock(env, &mut booking, payment, amount, renting.deposit);

    let (owner_receipt, recipient_receipt) =
        tokens::mint_receipts(env, &booking, owner_uri, recipient_uri);
    booking.owner_receipt_id = owner_receipt;
    booking.recipient_receipt_id = recipient_receipt;

    booking.status = BookingStatus::Confirmed;
    storage::save_booking(env, &booking);
    booking
}

/// Recipient backs out before the stay starts. Refunds the full escrow and
/// burns every token issued for the booking. Terminal.
pub fn cancel(env: &Env, caller: &Address, id: u64) -> Booking {
    let mut booking = storage::load_booking(env, id);
    require_recipient(env, &booking, caller);
    require_status(env, &booking, BookingStatus::Confirmed);

    if env.ledger().timestamp() >= booking.timestamp_start {
        panic_with_error!(env, Error::AlreadyStarted);
    }

    escrow::refund_all(env, &mut booking);
    tokens::burn_booking_tokens(env, &booking);
    booking.owner_receipt_id = 0;
    booking.recipient_receipt_id = 0;
    booking.nft_id = 0;
    booking.nft_redeemed = false;

    booking.status = BookingStatus::Cancelled;
    storage::save_booking(env, &booking);
    booking
}

/// Owner confirms the stay went through. Once both parties have validated,
/// the booking moves to `Validated` and escrow becomes retrievable.
pub fn validate_as_owner(env: &Env, caller: &Address, id: u64) -> Booking {
    let mut booking = storage::load_booking(env, id);
    require_owner(env, &booking, caller);
    require_status(env, &booking, BookingStatus::Confirmed);

    if booking.validated_owner {
        panic_with_error!(env, Error::AlreadyValidated);
    }
    if env.ledger().timestamp() <= booking.timestamp_end {
        panic_with_error!(env, Error::NotFinished);
    }

    booking.validated_owner = true;
    if booking.validated_recipient {
        booking.status = BookingStatus::Validated;
    }
    storage::save_booking(env, &booking);
    booking
}

/// Recipient counterpart of [`validate_as_owner`].
pub fn validate_as_recipient(env: &Env, caller: &Address, id: u64) -> Booking {
    let mut booking = storage::load_booking(env, id);
    require_recipient(env, &booking, caller);
    require_status(env, &booking, BookingStatus::Confirmed);

    if booking.validated_recipient {
        panic_with_error!(env, Error::AlreadyValidated);
    }
    if env.ledger().timestamp() <= booking.timestamp_end {
        panic_with_error!(env, Error::NotFinished);
    }

    booking.validated_recipient = true;
    if booking.validated_owner {
        booking.status = BookingStatus::Validated;
    }
    storage::save_booking(env, &booking);
    booking
}

/// Owner withdraws the rental fee after validation, refreshing the receipt
/// metadata. The booking completes once the deposit side is also released.
pub fn retrieve_amount(env: &Env, caller: &Address, id: u64, new_uri: &String) -> Booking {
    let mut booking = storage::load_booking(env, id);
    require_owner(env, &booking, caller);
    require_status(env, &booking, BookingStatus::Validated);

    escrow::release_amount(env, &mut booking);
    tokens::update_receipt(env, booking.owner_receipt_id, new_uri);

    if booking.deposit_locked == 0 {
        booking.status = BookingStatus::Completed;
    }
    storage::save_booking(env, &booking);
    booking
}

/// Recipient withdraws the deposit after validation, refreshing the receipt
/// metadata. The booking completes once the fee side is also released.
pub fn retrieve_deposit(env: &Env, caller: &Address, id: u64, new_uri: &String) -> Booking {
    let mut booking = storage::load_booking(env, id);
    require_recipient(env, &booking, caller);
    require_status(env, &booking, BookingStatus::Validated);

    escrow::release_deposit(env, &mut booking);
    tokens::update_receipt(env, booking.recipient_receipt_id, new_uri);

    if booking.amount_locked == 0 {
        booking.status = BookingStatus::Completed;
    }
    storage::save_booking(env, &booking);
    booking
}

/// Recipient mints the one transferable keepsake NFT for a paid booking.
pub fn redeem_nft(env: &Env, caller: &Address, id: u64, uri: &String) -> Booking {
    let mut booking = storage::load_booking(env, id);
    require_recipient(env, &booking, caller);

    match booking.status {
        BookingStatus::Confirmed | BookingStatus::Validated | BookingStatus::Completed => {}
        _ => panic_with_error!(env, Error::WrongStatus),
    }
    if booking.nft_redeemed {
        panic_with_error!(env, Error::AlreadyRedeemed);
    }

    booking.nft_id = tokens::mint_nft(env, &booking, uri);
    booking.nft_redeemed = true;
    storage::save_booking(env, &booking);
    booking
}

/// All bookings where `owner` is the renting side, in creation order.
pub fn as_owner(env: &Env, owner: &Address) -> Vec<Booking> {
    collect(env, &DataKey::OwnerBookings(owner.clone()))
}

/// All bookings placed by `recipient`, in creation order.
pub fn as_recipient(env: &Env, recipient: &Address) -> Vec<Booking> {
    collect(env, &DataKey::RecipientBookings(recipient.clone()))
}

fn collect(env: &Env, key: &DataKey) -> Vec<Booking> {
    let ids = storage::load_index(env, key);
    let mut bookings = Vec::new(env);
    for id in ids.iter() {
        bookings.push_back(storage::load_booking(env, id));
    }
    bookings
}
