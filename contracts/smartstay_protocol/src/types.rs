//! # Types
//!
//! Shared data structures used across all modules of the SmartStay protocol.
//!
//! ## Design decisions
//!
//! ### Status as a Finite-State Machine
//!
//! [`BookingStatus`] enforces a strict forward-only lifecycle:
//!
//! ```text
//! Created ──► Approved ──► Confirmed ──► Validated ──► Completed
//!     └──► Rejected
//!               Confirmed ──► Cancelled   (only before the stay starts)
//! ```
//!
//! `Completed`, `Rejected` and `Cancelled` are terminal. Backward transitions
//! are rejected by the entry points with [`crate::Error::WrongStatus`].
//!
//! ### Ids
//!
//! Renting, booking and rating ids are `u64`, auto-incremented starting at 1.
//! Id 0 is never assigned and doubles as the "no token" sentinel on the
//! booking's token-id fields.

use soroban_sdk::{contracttype, symbol_short, Address, Env, String, Symbol, Vec};

/// Upper bound on the byte length of free-text fields (`location`,
/// `description`, `image_url`). Keeps substring search heap-free.
pub const MAX_TEXT_LEN: u32 = 128;

/// Lifecycle status of a booking.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BookingStatus {
    /// Requested by the recipient, awaiting the owner's decision.
    Created,
    /// Accepted by the owner, awaiting payment.
    Approved,
    /// Paid; rental amount and deposit are held in escrow.
    Confirmed,
    /// Both parties validated the stay; funds are retrievable.
    Validated,
    /// Both escrow balances released.
    Completed,
    /// Declined by the owner.
    Rejected,
    /// Cancelled by the recipient before the stay started; fully refunded.
    Cancelled,
}

/// A listed rental offering.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Renting {
    /// Unique identifier (auto-incremented, 1-based).
    pub id: u64,
    /// Account that listed the renting and receives rental fees.
    pub owner: Address,
    /// Price per night, in the payment token's smallest unit.
    pub unit_price: i128,
    /// Security deposit held in escrow for the whole stay.
    pub deposit: i128,
    /// Maximum number of guests.
    pub person_count: u32,
    /// Free-text location, searched by substring.
    pub location: String,
    /// Amenity tags drawn from [`allowed_tags`].
    pub tags: Vec<Symbol>,
    pub description: String,
    /// URI of the listing image (opaque to the contract).
    pub image_url: String,
}

/// Mutable fields of a [`Renting`], grouped so create and update share one
/// parameter shape.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RentingParams {
    pub unit_price: i128,
    pub deposit: i128,
    pub person_count: u32,
    pub location: String,
    pub tags: Vec<Symbol>,
    pub description: String,
    pub image_url: String,
}

/// A reservation request against a [`Renting`].
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Booking {
    /// Unique identifier (auto-incremented, 1-based).
    pub id: u64,
    /// The renting this booking refers to.
    pub renting_id: u64,
    /// The renting's owner at booking time.
    pub owner: Address,
    /// The booker.
    pub recipient: Address,
    /// Unix timestamp of the first night.
    pub timestamp_start: u64,
    /// Length of the stay in days.
    pub duration: u64,
    /// Last second of the stay: `timestamp_start + duration * 86400 - 1`.
    pub timestamp_end: u64,
    pub person_count: u32,
    pub status: BookingStatus,
    /// Rental fee held in escrow, owed to the owner after validation.
    pub amount_locked: i128,
    /// Security deposit held in escrow, returned to the recipient.
    pub deposit_locked: i128,
    pub validated_owner: bool,
    pub validated_recipient: bool,
    pub rated_owner: bool,
    pub rated_recipient: bool,
    pub nft_redeemed: bool,
    /// Soul-bound receipt minted to the owner on confirmation (0 = none).
    pub owner_receipt_id: u64,
    /// Soul-bound receipt minted to the recipient on confirmation (0 = none).
    pub recipient_receipt_id: u64,
    /// Transferable NFT minted on redemption (0 = none).
    pub nft_id: u64,
}

/// A post-completion rating left by one party about the other.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Rating {
    /// Unique identifier (auto-incremented, 1-based).
    pub id: u64,
    /// The booking this rating stems from.
    pub booking_id: u64,
    /// Account leaving the rating.
    pub from: Address,
    /// Account being rated.
    pub subject: Address,
    /// Score, 0 to 5.
    pub note: u32,
    pub comment: String,
    /// `true` when the subject acted as the renting's owner.
    pub as_owner: bool,
}

/// Protocol-wide configuration, pinned once by `initialize`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProtocolConfig {
    /// Token contract used for every value transfer.
    pub payment_token: Address,
    /// Soul-bound receipt collection (minted on confirmation).
    pub receipt_collection: Address,
    /// Transferable NFT collection (minted on redemption).
    pub nft_collection: Address,
    /// When `true`, `confirm_booking` pulls only the required amount and
    /// leaves any overpayment with the recipient; when `false`, the full
    /// payment is pulled and the excess stays with the contract.
    pub refund_excess: bool,
}

/// The amenity tag vocabulary listings may use.
pub fn allowed_tags(env: &Env) -> Vec<Symbol> {
    Vec::from_array(
        env,
        [
            symbol_short!("wifi"),
            symbol_short!("pool"),
            symbol_short!("garden"),
            symbol_short!("parking"),
            symbol_short!("sea_view"),
            symbol_short!("mountain"),
            symbol_short!("pets"),
            symbol_short!("charging"),
        ],
    )
}
