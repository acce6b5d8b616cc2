//! # SmartStay Token Collection Contract
//!
//! A minimal token registry backing the marketplace's two collections:
//! deployed once with `soulbound = true` it holds the non-transferable
//! booking receipts, deployed with `soulbound = false` it holds the
//! redeemable keepsake NFTs.
//!
//! Mint, burn and metadata updates are reserved to the `admin` address — in
//! practice the SmartStay protocol contract, which drives this ledger as a
//! side effect of the booking lifecycle. Transfers are holder-initiated and
//! rejected outright on a soul-bound collection.

#![no_std]

use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, panic_with_error, Address, Env, String,
    Vec,
};


// ── TTL Constants ────────────────────────────────────────────────────

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized     = 2,
    TokenNotFound      = 3,
    NotTokenOwner      = 4,
    Soulbound          = 5,
}

/// All contract storage keys.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Account allowed to mint/burn/update (Instance).
    Admin,
    /// Whether tokens are transferable (Instance).
    Soulbound,
    /// Auto-increment token id counter (Instance).
    TokenCount,
    /// A token keyed by id (Persistent).
    Token(u64),
    /// Token ids held by an account (Persistent).
    UserTokens(Address),
}

/// On-ledger token record.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenData {
    pub owner: Address,
    pub uri: String,
}

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

fn require_admin(env: &Env) {
    bump_instance(env);
    let admin: Address = env
        .storage()
        .instance()
        .get(&DataKey::Admin)
        .unwrap_or_else(|| panic_with_error!(env, Error::NotInitialized));
    admin.require_auth();
}

fn load_token(env: &Env, token_id: u64) -> TokenData {
    let key = DataKey::Token(token_id);
    let token: TokenData = env
        .storage()
        .persistent()
        .get(&key)
        .unwrap_or_else(|| panic_with_error!(env, Error::TokenNotFound));
    bump_persistent(env, &key);
    token
}

fn save_token(env: &Env, token_id: u64, token: &TokenData) {
    let key = DataKey::Token(token_id);
    env.storage().persistent().set(&key, token);
    bump_persistent(env, &key);
}

fn holdings(env: &Env, owner: &Address) -> Vec<u64> {
    let key = DataKey::UserTokens(owner.clone());
    let ids: Option<Vec<u64>> = env.storage().persistent().get(&key);
    match ids {
        Some(ids) => {
            bump_persistent(env, &key);
            ids
        }
        None => Vec::new(env),
    }
}

fn holdings_push(env: &Env, owner: &Address, token_id: u64) {
    let key = DataKey::UserTokens(owner.clone());
    let mut ids = holdings(env, owner);
    ids.push_back(token_id);
    env.storage().persistent().set(&key, &ids);
    bump_persistent(env, &key);
}

fn holdings_remove(env: &Env, owner: &Address, token_id: u64) {
    let key = DataKey::UserTokens(owner.clone());
    let mut ids = holdings(env, owner);
    if let Some(pos) = ids.first_index_of(token_id) {
        ids.remove(pos);
        env.storage().persistent().set(&key, &ids);
        bump_persistent(env, &key);
    }
}

#[contract]
pub struct TokenCollection;

#[contractimpl]
impl TokenCollection {
    /// Pin the admin and the transferability of this collection.
    ///
    /// Must be called exactly once immediately after deployment.
    pub fn initialize(env: Env, admin: Address, soulbound: bool) {
        if env.storage().instance().has(&DataKey::Admin) {
            panic_with_error!(&env, Error::AlreadyInitialized);
        }
        env.storage().instance().set(&DataKey::Admin, &admin);
        env.storage().instance().set(&DataKey::Soulbound, &soulbound);
        bump_instance(&env);
    }

    /// Mint a token to `to`. Admin only. Returns the new id (1-based).
    pub fn mint(env: Env, to: Address, uri: String) -> u64 {
        require_admin(&env);

        let token_id: u64 = env
            .storage()
            .instance()
            .get(&DataKey::TokenCount)
            .unwrap_or(0u64)
            + 1;
        env.storage().instance().set(&DataKey::TokenCount, &token_id);

        save_token(&env, token_id, &TokenData { owner: to.clone(), uri });
        holdings_push(&env, &to, token_id);
        token_id
    }

    /// Destroy a token. Admin only.
    pub fn burn(env: Env, token_id: u64) {
        require_admin(&env);

        let token = load_token(&env, token_id);
        env.storage().persistent().remove(&DataKey::Token(token_id));
        holdings_remove(&env, &token.owner, token_id);
    }

    /// Replace a token's metadata URI. Admin only.
    pub fn update_uri(env: Env, token_id: u64, uri: String) {
        require_admin(&env);

        let mut token = load_token(&env, token_id);
        token.uri = uri;
        save_token(&env, token_id, &token);
    }

    /// Holder-initiated transfer. Rejected on a soul-bound collection.
    pub fn transfer(env: Env, from: Address, to: Address, token_id: u64) {
        from.require_auth();
        bump_instance(&env);

        let soulbound: bool = env
            .storage()
            .instance()
            .get(&DataKey::Soulbound)
            .unwrap_or_else(|| panic_with_error!(&env, Error::NotInitialized));
        if soulbound {
            panic_with_error!(&env, Error::Soulbound);
        }

        let mut token = load_token(&env, token_id);
        if token.owner != from {
            panic_with_error!(&env, Error::NotTokenOwner);
        }

        token.owner = to.clone();
        save_token(&env, token_id, &token);
        holdings_remove(&env, &from, token_id);
        holdings_push(&env, &to, token_id);
    }

    /// Current owner of a token.
    pub fn owner_of(env: Env, token_id: u64) -> Address {
        load_token(&env, token_id).owner
    }

    /// Metadata URI of a token.
    pub fn token_uri(env: Env, token_id: u64) -> String {
        load_token(&env, token_id).uri
    }

    /// All token ids currently held by `owner`.
    pub fn get_user_tokens(env: Env, owner: Address) -> Vec<u64> {
        holdings(&env, &owner)
    }
}
