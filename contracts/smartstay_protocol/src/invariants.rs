#![allow(dead_code)]

extern crate std;

use crate::types::{Booking, BookingStatus};

/// INV-1: Escrow balances must never be negative.
pub fn assert_escrow_non_negative(booking: &Booking) {
    assert!(
        booking.amount_locked >= 0,
        "INV-1 violated: booking {} has negative amount_locked ({})",
        booking.id,
        booking.amount_locked
    );
    assert!(
        booking.deposit_locked >= 0,
        "INV-1 violated: booking {} has negative deposit_locked ({})",
        booking.id,
        booking.deposit_locked
    );
}

/// INV-2: A booking is Completed exactly when both escrow balances are zero
/// and both parties validated the stay.
pub fn assert_completed_is_settled(booking: &Booking) {
    if booking.status == BookingStatus::Completed {
        assert_eq!(
            booking.amount_locked, 0,
            "INV-2 violated: completed booking {} still locks the rental fee",
            booking.id
        );
        assert_eq!(
            booking.deposit_locked, 0,
            "INV-2 violated: completed booking {} still locks the deposit",
            booking.id
        );
        assert!(
            booking.validated_owner && booking.validated_recipient,
            "INV-2 violated: completed booking {} missing a validation",
            booking.id
        );
    }
}

/// INV-3: The booking window is well-formed.
pub fn assert_window_well_formed(booking: &Booking) {
    assert!(
        booking.duration > 0,
        "INV-3 violated: booking {} has zero duration",
        booking.id
    );
    assert_eq!(
        booking.timestamp_end,
        booking.timestamp_start + booking.duration * 86_400 - 1,
        "INV-3 violated: booking {} window end does not match duration",
        booking.id
    );
}

/// INV-4: Escrow is only ever held in Confirmed or Validated status.
pub fn assert_escrow_only_while_active(booking: &Booking) {
    let holds_funds = booking.amount_locked > 0 || booking.deposit_locked > 0;
    if holds_funds {
        assert!(
            matches!(
                booking.status,
                BookingStatus::Confirmed | BookingStatus::Validated
            ),
            "INV-4 violated: booking {} holds escrow in status {:?}",
            booking.id,
            booking.status
        );
    }
}

/// INV-5: The parties never coincide.
pub fn assert_distinct_parties(booking: &Booking) {
    assert!(
        booking.owner != booking.recipient,
        "INV-5 violated: booking {} has owner == recipient",
        booking.id
    );
}

/// INV-6: Status transition validity. Only forward transitions are allowed:
///   Created   -> Approved | Rejected
///   Approved  -> Confirmed
///   Confirmed -> Validated | Cancelled
///   Validated -> Completed
///   Completed | Rejected | Cancelled -> (none)
pub fn assert_valid_status_transition(from: &BookingStatus, to: &BookingStatus) {
    let valid = from == to
        || matches!(
            (from, to),
            (BookingStatus::Created, BookingStatus::Approved)
                | (BookingStatus::Created, BookingStatus::Rejected)
                | (BookingStatus::Approved, BookingStatus::Confirmed)
                | (BookingStatus::Confirmed, BookingStatus::Validated)
                | (BookingStatus::Confirmed, BookingStatus::Cancelled)
                | (BookingStatus::Validated, BookingStatus::Completed)
        );

    assert!(
        valid,
        "INV-6 violated: invalid status transition from {:?} to {:?}",
        from, to
    );
}

/// INV-7: Fields fixed at creation (parties, renting, window, head count)
/// remain unchanged for the lifetime of the record.
pub fn assert_booking_immutable_fields(original: &Booking, current: &Booking) {
    assert_eq!(original.id, current.id, "INV-7 violated: booking id changed");
    assert_eq!(
        original.renting_id, current.renting_id,
        "INV-7 violated: booking renting_id changed"
    );
    assert_eq!(
        original.owner, current.owner,
        "INV-7 violated: booking owner changed"
    );
    assert_eq!(
        original.recipient, current.recipient,
        "INV-7 violated: booking recipient changed"
    );
    assert_eq!(
        original.timestamp_start, current.timestamp_start,
        "INV-7 violated: booking timestamp_start changed"
    );
    assert_eq!(
        original.duration, current.duration,
        "INV-7 violated: booking duration changed"
    );
    assert_eq!(
        original.person_count, current.person_count,
        "INV-7 violated: booking person_count changed"
    );
}

/// Run all stateless booking invariants.
pub fn assert_all_booking_invariants(booking: &Booking) {
    assert_escrow_non_negative(booking);
    assert_completed_is_settled(booking);
    assert_window_well_formed(booking);
    assert_escrow_only_while_active(booking);
    assert_distinct_parties(booking);
}
