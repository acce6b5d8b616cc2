extern crate std;

use soroban_sdk::{
    symbol_short,
    testutils::Address as _,
    vec, Address, Env, String, Symbol, Vec,
};

use crate::{Error, RentingParams, SmartStayProtocol, SmartStayProtocolClient};

fn setup() -> (Env, SmartStayProtocolClient<'static>) {
    let env = Env::default();
    env.mock_all_auths();
    let contract_id = env.register(SmartStayProtocol, ());
    let client = SmartStayProtocolClient::new(&env, &contract_id);
    (env, client)
}

fn params(env: &Env, unit_price: i128, person_count: u32, location: &str) -> RentingParams {
    RentingParams {
        unit_price,
        deposit: 1_000,
        person_count,
        location: String::from_str(env, location),
        tags: vec![env, symbol_short!("wifi")],
        description: String::from_str(env, "A place to stay"),
        image_url: String::from_str(env, "ipfs://image.png"),
    }
}

fn no_tags(env: &Env) -> Vec<Symbol> {
    Vec::new(env)
}

fn no_location(env: &Env) -> String {
    String::from_str(env, "")
}

// ─────────────────────────────────────────────────────────
// Create / update / delete
// ─────────────────────────────────────────────────────────

#[test]
fn create_assigns_sequential_ids_from_one() {
    let (env, client) = setup();
    let owner = Address::generate(&env);

    let first = client.create_renting(&owner, &params(&env, 100, 2, "Paris"));
    let second = client.create_renting(&owner, &params(&env, 200, 4, "Lyon"));

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
    assert_eq!(first.owner, owner);
    assert_eq!(client.get_owner_rentings(&owner).len(), 2);
}

#[test]
fn sixth_listing_fails() {
    let (env, client) = setup();
    let owner = Address::generate(&env);

    for i in 0..5 {
        client.create_renting(&owner, &params(&env, 100 + i, 2, "Paris"));
    }
    assert_eq!(
        client.try_create_renting(&owner, &params(&env, 600, 2, "Paris")),
        Err(Ok(Error::TooManyRentings))
    );

    // Another owner is unaffected by the first owner's cap.
    let other = Address::generate(&env);
    client.create_renting(&other, &params(&env, 600, 2, "Nice"));
}

#[test]
fn delete_frees_a_slot_but_never_reuses_ids() {
    let (env, client) = setup();
    let owner = Address::generate(&env);

    for i in 0..5 {
        client.create_renting(&owner, &params(&env, 100 + i, 2, "Paris"));
    }
    client.delete_renting(&owner, &3);

    let renting = client.create_renting(&owner, &params(&env, 700, 2, "Toulouse"));
    assert_eq!(renting.id, 6);
    assert_eq!(
        client.try_get_renting(&3),
        Err(Ok(Error::RentingNotFound))
    );
}

#[test]
fn update_overwrites_fields_and_preserves_identity() {
    let (env, client) = setup();
    let owner = Address::generate(&env);

    let original = client.create_renting(&owner, &params(&env, 100, 2, "Paris"));
    let updated = client.update_renting(&owner, &original.id, &params(&env, 250, 6, "Marseille"));

    assert_eq!(updated.id, original.id);
    assert_eq!(updated.owner, owner);
    assert_eq!(updated.unit_price, 250);
    assert_eq!(updated.person_count, 6);
    assert_eq!(updated.location, String::from_str(&env, "Marseille"));
    assert_eq!(client.get_renting(&original.id), updated);
}

#[test]
fn update_and_delete_require_the_owner() {
    let (env, client) = setup();
    let owner = Address::generate(&env);
    let outsider = Address::generate(&env);

    let renting = client.create_renting(&owner, &params(&env, 100, 2, "Paris"));

    assert_eq!(
        client.try_update_renting(&outsider, &renting.id, &params(&env, 1, 1, "Hacked")),
        Err(Ok(Error::NotOwner))
    );
    assert_eq!(
        client.try_delete_renting(&outsider, &renting.id),
        Err(Ok(Error::NotOwner))
    );
}

#[test]
fn operations_on_unknown_ids_fail() {
    let (env, client) = setup();
    let caller = Address::generate(&env);

    assert_eq!(client.try_get_renting(&9), Err(Ok(Error::RentingNotFound)));
    assert_eq!(
        client.try_update_renting(&caller, &9, &params(&env, 1, 1, "Nowhere")),
        Err(Ok(Error::RentingNotFound))
    );
    assert_eq!(
        client.try_delete_renting(&caller, &9),
        Err(Ok(Error::RentingNotFound))
    );
}

// ─────────────────────────────────────────────────────────
// Input validation
// ─────────────────────────────────────────────────────────

#[test]
fn negative_amounts_are_rejected() {
    let (env, client) = setup();
    let owner = Address::generate(&env);

    let mut bad = params(&env, 100, 2, "Paris");
    bad.unit_price = -1;
    assert_eq!(
        client.try_create_renting(&owner, &bad),
        Err(Ok(Error::InvalidAmount))
    );

    let mut bad = params(&env, 100, 2, "Paris");
    bad.deposit = -1;
    assert_eq!(
        client.try_create_renting(&owner, &bad),
        Err(Ok(Error::InvalidAmount))
    );
}

#[test]
fn zero_capacity_is_rejected() {
    let (env, client) = setup();
    let owner = Address::generate(&env);

    assert_eq!(
        client.try_create_renting(&owner, &params(&env, 100, 0, "Paris")),
        Err(Ok(Error::InvalidPersonCount))
    );
}

#[test]
fn tags_outside_the_vocabulary_are_rejected() {
    let (env, client) = setup();
    let owner = Address::generate(&env);

    let mut bad = params(&env, 100, 2, "Paris");
    bad.tags = vec![&env, symbol_short!("casino")];
    assert_eq!(
        client.try_create_renting(&owner, &bad),
        Err(Ok(Error::UnknownTag))
    );
}

#[test]
fn oversized_text_fields_are_rejected() {
    let (env, client) = setup();
    let owner = Address::generate(&env);

    let long: std::string::String = "a".repeat(129);
    let mut bad = params(&env, 100, 2, "Paris");
    bad.location = String::from_str(&env, &long);
    assert_eq!(
        client.try_create_renting(&owner, &bad),
        Err(Ok(Error::TextTooLong))
    );
}

// ─────────────────────────────────────────────────────────
// Search
// ─────────────────────────────────────────────────────────

#[test]
fn search_by_max_unit_price() {
    let (env, client) = setup();
    let owner = Address::generate(&env);

    for price in [100i128, 1_000, 1_000, 1_000, 1_000] {
        client.create_renting(&owner, &params(&env, price, 2, "Paris"));
    }

    let found = client.search_rentings(&500, &0, &no_location(&env), &no_tags(&env));
    assert_eq!(found.len(), 1);
    assert_eq!(found.get(0).unwrap().unit_price, 100);
}

#[test]
fn search_with_wildcards_returns_everything_in_id_order() {
    let (env, client) = setup();
    let owner = Address::generate(&env);
    let other = Address::generate(&env);

    client.create_renting(&owner, &params(&env, 300, 2, "Paris"));
    client.create_renting(&other, &params(&env, 100, 4, "Lyon"));
    client.create_renting(&owner, &params(&env, 200, 6, "Nice"));

    let found = client.search_rentings(&0, &0, &no_location(&env), &no_tags(&env));
    assert_eq!(found.len(), 3);
    assert_eq!(found.get(0).unwrap().id, 1);
    assert_eq!(found.get(1).unwrap().id, 2);
    assert_eq!(found.get(2).unwrap().id, 3);
}

#[test]
fn search_skips_deleted_listings() {
    let (env, client) = setup();
    let owner = Address::generate(&env);

    client.create_renting(&owner, &params(&env, 100, 2, "Paris"));
    let doomed = client.create_renting(&owner, &params(&env, 100, 2, "Paris"));
    client.delete_renting(&owner, &doomed.id);

    let found = client.search_rentings(&0, &0, &no_location(&env), &no_tags(&env));
    assert_eq!(found.len(), 1);
    assert_eq!(found.get(0).unwrap().id, 1);
}

#[test]
fn search_by_min_person_count() {
    let (env, client) = setup();
    let owner = Address::generate(&env);

    client.create_renting(&owner, &params(&env, 100, 2, "Paris"));
    client.create_renting(&owner, &params(&env, 100, 6, "Paris"));

    let found = client.search_rentings(&0, &4, &no_location(&env), &no_tags(&env));
    assert_eq!(found.len(), 1);
    assert_eq!(found.get(0).unwrap().person_count, 6);
}

#[test]
fn search_by_location_substring() {
    let (env, client) = setup();
    let owner = Address::generate(&env);

    client.create_renting(&owner, &params(&env, 100, 2, "Paris 11e"));
    client.create_renting(&owner, &params(&env, 100, 2, "Nice"));

    let found = client.search_rentings(
        &0,
        &0,
        &String::from_str(&env, "Paris"),
        &no_tags(&env),
    );
    assert_eq!(found.len(), 1);

    // Matching is by substring, not by full value.
    let found = client.search_rentings(&0, &0, &String::from_str(&env, "aris"), &no_tags(&env));
    assert_eq!(found.len(), 1);

    let found = client.search_rentings(&0, &0, &String::from_str(&env, "Berlin"), &no_tags(&env));
    assert_eq!(found.len(), 0);
}

#[test]
fn search_by_tag_intersection() {
    let (env, client) = setup();
    let owner = Address::generate(&env);

    let mut sea = params(&env, 100, 2, "Nice");
    sea.tags = vec![&env, symbol_short!("sea_view"), symbol_short!("wifi")];
    client.create_renting(&owner, &sea);

    let mut hills = params(&env, 100, 2, "Grenoble");
    hills.tags = vec![&env, symbol_short!("mountain")];
    client.create_renting(&owner, &hills);

    let filter = vec![&env, symbol_short!("sea_view"), symbol_short!("pool")];
    let found = client.search_rentings(&0, &0, &no_location(&env), &filter);
    assert_eq!(found.len(), 1);
    assert_eq!(found.get(0).unwrap().location, String::from_str(&env, "Nice"));
}

#[test]
fn search_combines_all_filters() {
    let (env, client) = setup();
    let owner = Address::generate(&env);

    client.create_renting(&owner, &params(&env, 100, 2, "Paris"));
    client.create_renting(&owner, &params(&env, 900, 2, "Paris"));
    client.create_renting(&owner, &params(&env, 100, 1, "Paris"));
    client.create_renting(&owner, &params(&env, 100, 2, "Lyon"));

    let found = client.search_rentings(
        &500,
        &2,
        &String::from_str(&env, "Paris"),
        &vec![&env, symbol_short!("wifi")],
    );
    assert_eq!(found.len(), 1);
    assert_eq!(found.get(0).unwrap().id, 1);
}
