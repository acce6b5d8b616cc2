//! # Escrow
//!
//! Two independently-releasable balances per booking, never merged:
//! `amount_locked` (the rental fee, owed to the owner once both parties
//! validated the stay) and `deposit_locked` (the security deposit, returned
//! to the recipient). Every release is an exact-amount transfer to a single
//! party; there is no partial or proportional split, and no arbitration path
//! that could redirect the deposit.
//!
//! All value moves through the payment token pinned in
//! [`crate::types::ProtocolConfig`], with the contract itself as the escrow
//! account.

use soroban_sdk::{panic_with_error, token, Address, Env};

use crate::storage;
use crate::types::Booking;
use crate::Error;

const SECONDS_PER_DAY: u64 = 86_400;

fn payment_client<'a>(env: &Env) -> token::Client<'a> {
    token::Client::new(env, &storage::get_config(env).payment_token)
}

fn contract_address(env: &Env) -> Address {
    env.current_contract_address()
}

/// Rental fee for a stay: `unit_price * duration` nights.
pub fn rental_amount(env: &Env, unit_price: i128, duration: u64) -> i128 {
    unit_price
        .checked_mul(duration as i128)
        .unwrap_or_else(|| panic_with_error!(env, Error::Overflow))
}

/// Last second of a stay starting at `timestamp_start` and lasting
/// `duration` days.
pub fn stay_end(env: &Env, timestamp_start: u64, duration: u64) -> u64 {
    duration
        .checked_mul(SECONDS_PER_DAY)
        .and_then(|span| timestamp_start.checked_add(span))
        .map(|end| end - 1)
        .unwrap_or_else(|| panic_with_error!(env, Error::Overflow))
}

/// Pull the confirmation payment from the recipient and fill both locked
/// balances. `payment` must cover `amount + deposit`; whether the excess is
/// pulled along or left with the recipient follows the `refund_excess`
/// deployment flag.
pub fn lock(env: &Env, booking: &mut Booking, payment: i128, amount: i128, deposit: i128) {
    let required = amount
        .checked_add(deposit)
        .unwrap_or_else(|| panic_with_error!(env, Error::Overflow));
    if payment < required {
        panic_with_error!(env, Error::NotEnoughSent);
    }

    let config = storage::get_config(env);
    let pulled = if config.refund_excess { required } else { payment };
    payment_client(env).transfer(&booking.recipient, &contract_address(env), &pulled);

    booking.amount_locked = amount;
    booking.deposit_locked = deposit;
}

/// Return everything still locked to the recipient and zero both balances.
/// Used by cancellation, before the stay starts.
pub fn refund_all(env: &Env, booking: &mut Booking) {
    let total = booking.amount_locked + booking.deposit_locked;
    if total > 0 {
        payment_client(env).transfer(&contract_address(env), &booking.recipient, &total);
    }
    booking.amount_locked = 0;
    booking.deposit_locked = 0;
}

/// Release the rental fee to the owner. Fails when already released.
pub fn release_amount(env: &Env, booking: &mut Booking) {
    if booking.amount_locked == 0 {
        panic_with_error!(env, Error::WrongStatus);
    }
    payment_client(env).transfer(&contract_address(env), &booking.owner, &booking.amount_locked);
    booking.amount_locked = 0;
}

/// Release the deposit back to the recipient. Fails when already released.
pub fn release_deposit(env: &Env, booking: &mut Booking) {
    if booking.deposit_locked == 0 {
        panic_with_error!(env, Error::WrongStatus);
    }
    payment_client(env).transfer(
        &contract_address(env),
        &booking.recipient,
        &booking.deposit_locked,
    );
    booking.deposit_locked = 0;
}
