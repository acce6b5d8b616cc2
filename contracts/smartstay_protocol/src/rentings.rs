//! # Renting registry
//!
//! CRUD store for rental listings plus the linear-scan search. Records live
//! in persistent storage keyed by id, with a per-owner id index capped at
//! [`MAX_RENTINGS_PER_OWNER`] live entries. Deletion removes the record and
//! the index entry; ids are never reassigned, so the scan in
//! [`search`] simply skips ids that no longer resolve.

use soroban_sdk::{panic_with_error, Address, Env, String, Symbol, Vec};

use crate::storage::{self, DataKey};
use crate::types::{allowed_tags, Renting, RentingParams, MAX_TEXT_LEN};
use crate::Error;

/// Cap on simultaneously listed rentings per owner.
pub const MAX_RENTINGS_PER_OWNER: u32 = 5;

/// Validate the caller-supplied listing fields.
fn validate_params(env: &Env, params: &RentingParams) {
    if params.unit_price < 0 || params.deposit < 0 {
        panic_with_error!(env, Error::InvalidAmount);
    }
    if params.person_count == 0 {
        panic_with_error!(env, Error::InvalidPersonCount);
    }
    if params.location.len() > MAX_TEXT_LEN
        || params.description.len() > MAX_TEXT_LEN
        || params.image_url.len() > MAX_TEXT_LEN
    {
        panic_with_error!(env, Error::TextTooLong);
    }
    let vocabulary = allowed_tags(env);
    for tag in params.tags.iter() {
        if vocabulary.first_index_of(tag).is_none() {
            panic_with_error!(env, Error::UnknownTag);
        }
    }
}

fn apply_params(renting: &mut Renting, params: &RentingParams) {
    renting.unit_price = params.unit_price;
    renting.deposit = params.deposit;
    renting.person_count = params.person_count;
    renting.location = params.location.clone();
    renting.tags = params.tags.clone();
    renting.description = params.description.clone();
    renting.image_url = params.image_url.clone();
}

/// Register a new listing owned by `caller`.
pub fn create(env: &Env, caller: &Address, params: &RentingParams) -> Renting {
    validate_params(env, params);

    let index_key = DataKey::OwnerRentings(caller.clone());
    if storage::load_index(env, &index_key).len() >= MAX_RENTINGS_PER_OWNER {
        panic_with_error!(env, Error::TooManyRentings);
    }

    let renting = Renting {
        id: storage::next_renting_id(env),
        owner: caller.clone(),
        unit_price: params.unit_price,
        deposit: params.deposit,
        person_count: params.person_count,
        location: params.location.clone(),
        tags: params.tags.clone(),
        description: params.description.clone(),
        image_url: params.image_url.clone(),
    };

    storage::save_renting(env, &renting);
    storage::index_push(env, &index_key, renting.id);
    renting
}

/// Overwrite the mutable fields of a listing. Id and owner are preserved.
pub fn update(env: &Env, caller: &Address, id: u64, params: &RentingParams) -> Renting {
    let mut renting = storage::load_renting(env, id);
    if renting.owner != *caller {
        panic_with_error!(env, Error::NotOwner);
    }
    validate_params(env, params);

    apply_params(&mut renting, params);
    storage::save_renting(env, &renting);
    renting
}

/// Tombstone a listing and drop it from the owner's index.
pub fn delete(env: &Env, caller: &Address, id: u64) {
    let renting = storage::load_renting(env, id);
    if renting.owner != *caller {
        panic_with_error!(env, Error::NotOwner);
    }

    storage::remove_renting(env, id);
    storage::index_remove(env, &DataKey::OwnerRentings(caller.clone()), id);
}

/// All live listings owned by `owner`, in creation order.
pub fn owned_by(env: &Env, owner: &Address) -> Vec<Renting> {
    let ids = storage::load_index(env, &DataKey::OwnerRentings(owner.clone()));
    let mut rentings = Vec::new(env);
    for id in ids.iter() {
        rentings.push_back(storage::load_renting(env, id));
    }
    rentings
}

/// Linear scan over all live listings, ascending id order. A zero or empty
/// filter value is a wildcard; otherwise a listing matches when
///
/// * `unit_price <= max_unit_price`,
/// * `person_count >= min_person_count`,
/// * `location` contains the `location` filter as a byte substring, and
/// * at least one of its tags appears in `tags`.
pub fn search(
    env: &Env,
    max_unit_price: i128,
    min_person_count: u32,
    location: &String,
    tags: &Vec<Symbol>,
) -> Vec<Renting> {
    let mut matches = Vec::new(env);
    let highest = storage::renting_count(env);
    for id in 1..=highest {
        let renting = match storage::try_load_renting(env, id) {
            Some(renting) => renting,
            None => continue,
        };
        if max_unit_price > 0 && renting.unit_price > max_unit_price {
            continue;
        }
        if min_person_count > 0 && renting.person_count < min_person_count {
            continue;
        }
        if location.len() > 0 && !text_contains(&renting.location, location) {
            continue;
        }
        if !tags.is_empty() && !tags_intersect(&renting.tags, tags) {
            continue;
        }
        matches.push_back(renting);
    }
    matches
}

fn tags_intersect(renting_tags: &Vec<Symbol>, filter: &Vec<Symbol>) -> bool {
    filter
        .iter()
        .any(|tag| renting_tags.first_index_of(tag).is_some())
}

/// Byte-substring check over host `String`s. Both sides are bounded by
/// [`MAX_TEXT_LEN`], enforced at create/update time, so fixed stack buffers
/// suffice.
fn text_contains(haystack: &String, needle: &String) -> bool {
    let needle_len = needle.len() as usize;
    let haystack_len = haystack.len() as usize;
    if needle_len == 0 {
        return true;
    }
    // Stored text never exceeds MAX_TEXT_LEN, so a longer filter cannot match.
    if needle_len > haystack_len || needle_len > MAX_TEXT_LEN as usize {
        return false;
    }

    let mut h = [0u8; MAX_TEXT_LEN as usize];
    let mut n = [0u8; MAX_TEXT_LEN as usize];
    haystack.copy_into_slice(&mut h[..haystack_len]);
    needle.copy_into_slice(&mut n[..needle_len]);

    h[..haystack_len]
        .windows(needle_len)
        .any(|window| window == &n[..needle_len])
}
