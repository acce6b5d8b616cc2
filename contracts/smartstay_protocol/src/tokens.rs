//! # Token sub-ledgers
//!
//! The protocol does not implement token ownership rules itself; it drives
//! two external collection contracts through [`TokenCollectionClient`]:
//!
//! * the **receipt collection** (soul-bound) — one token minted to each
//!   party when a booking is confirmed, URI updated when escrow is
//!   retrieved, burned on cancellation;
//! * the **NFT collection** (transferable) — one token minted to the
//!   recipient on redemption.
//!
//! Both addresses are pinned at `initialize` time; see
//! [`crate::types::ProtocolConfig`].

use soroban_sdk::{contractclient, Address, Env, String, Vec};

use crate::storage;
use crate::types::Booking;

/// Interface of a SmartStay token collection contract.
#[contractclient(name = "TokenCollectionClient")]
pub trait TokenCollection {
    /// Mint a token to `to`, returning its 1-based id.
    fn mint(env: Env, to: Address, uri: String) -> u64;
    /// Destroy a token.
    fn burn(env: Env, token_id: u64);
    /// Replace a token's metadata URI.
    fn update_uri(env: Env, token_id: u64, uri: String);
    /// All token ids currently owned by `owner`.
    fn get_user_tokens(env: Env, owner: Address) -> Vec<u64>;
}

fn receipt_client<'a>(env: &Env) -> TokenCollectionClient<'a> {
    TokenCollectionClient::new(env, &storage::get_config(env).receipt_collection)
}

fn nft_client<'a>(env: &Env) -> TokenCollectionClient<'a> {
    TokenCollectionClient::new(env, &storage::get_config(env).nft_collection)
}

/// Mint the confirmation receipts, one per party. Returns
/// `(owner_receipt_id, recipient_receipt_id)`.
pub fn mint_receipts(
    env: &Env,
    booking: &Booking,
    owner_uri: &String,
    recipient_uri: &String,
) -> (u64, u64) {
    let client = receipt_client(env);
    let owner_receipt = client.mint(&booking.owner, owner_uri);
    let recipient_receipt = client.mint(&booking.recipient, recipient_uri);
    (owner_receipt, recipient_receipt)
}

/// Replace the metadata URI of one receipt token.
pub fn update_receipt(env: &Env, token_id: u64, uri: &String) {
    receipt_client(env).update_uri(&token_id, uri);
}

/// Mint the redeemable NFT to the booking's recipient.
pub fn mint_nft(env: &Env, booking: &Booking, uri: &String) -> u64 {
    nft_client(env).mint(&booking.recipient, uri)
}

/// Burn every token issued for this booking (both receipts, plus the NFT
/// when redeemed). Called on cancellation.
pub fn burn_booking_tokens(env: &Env, booking: &Booking) {
    let receipts = receipt_client(env);
    if booking.owner_receipt_id != 0 {
        receipts.burn(&booking.owner_receipt_id);
    }
    if booking.recipient_receipt_id != 0 {
        receipts.burn(&booking.recipient_receipt_id);
    }
    if booking.nft_id != 0 {
        nft_client(env).burn(&booking.nft_id);
    }
}
