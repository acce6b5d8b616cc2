//! # Ratings
//!
//! Post-completion bookkeeping: each party of a completed booking may rate
//! the other exactly once. The one-rating-per-direction rule is enforced
//! through the `rated_owner` / `rated_recipient` flags on the booking, so
//! rating never gates the escrow or status machinery.

use soroban_sdk::{panic_with_error, Address, Env, String, Vec};

use crate::storage::{self, DataKey};
use crate::types::{Booking, BookingStatus, Rating};
use crate::Error;

const MAX_NOTE: u32 = 5;

/// Recipient rates the owner of a completed booking.
pub fn rate_owner(
    env: &Env,
    caller: &Address,
    booking_id: u64,
    note: u32,
    comment: &String,
) -> (Rating, Booking) {
    let mut booking = storage::load_booking(env, booking_id);
    if booking.recipient != *caller {
        panic_with_error!(env, Error::NotRecipient);
    }
    if booking.status != BookingStatus::Completed {
        panic_with_error!(env, Error::WrongStatus);
    }
    if booking.rated_owner {
        panic_with_error!(env, Error::AlreadyRated);
    }

    let rating = store_rating(env, &booking, caller, &booking.owner, note, comment, true);
    booking.rated_owner = true;
    storage::save_booking(env, &booking);
    (rating, booking)
}

/// Owner rates the recipient of a completed booking.
pub fn rate_recipient(
    env: &Env,
    caller: &Address,
    booking_id: u64,
    note: u32,
    comment: &String,
) -> (Rating, Booking) {
    let mut booking = storage::load_booking(env, booking_id);
    if booking.owner != *caller {
        panic_with_error!(env, Error::NotOwner);
    }
    if booking.status != BookingStatus::Completed {
        panic_with_error!(env, Error::WrongStatus);
    }
    if booking.rated_recipient {
        panic_with_error!(env, Error::AlreadyRated);
    }

    let rating = store_rating(env, &booking, caller, &booking.recipient, note, comment, false);
    booking.rated_recipient = true;
    storage::save_booking(env, &booking);
    (rating, booking)
}

fn store_rating(
    env: &Env,
    booking: &Booking,
    from: &Address,
    subject: &Address,
    note: u32,
    comment: &String,
    as_owner: bool,
) -> Rating {
    if note > MAX_NOTE {
        panic_with_error!(env, Error::InvalidNote);
    }

    let rating = Rating {
        id: storage::next_rating_id(env),
        booking_id: booking.id,
        from: from.clone(),
        subject: subject.clone(),
        note,
        comment: comment.clone(),
        as_owner,
    };
    storage::save_rating(env, &rating);
    storage::index_push(env, &DataKey::UserRatings(subject.clone()), rating.id);
    rating
}

/// All ratings received by `subject`, in creation order.
pub fn for_user(env: &Env, subject: &Address) -> Vec<Rating> {
    let ids = storage::load_index(env, &DataKey::UserRatings(subject.clone()));
    let mut ratings = Vec::new(env);
    for id in ids.iter() {
        ratings.push_back(storage::load_rating(env, id));
    }
    ratings
}
