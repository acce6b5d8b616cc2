extern crate std;

use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events, Ledger},
    token, vec, Address, Env, IntoVal, String, TryIntoVal,
};

use smartstay_token::{TokenCollection, TokenCollectionClient};

use crate::{Booking, BookingStatus, Rating, Renting, RentingParams, SmartStayProtocol, SmartStayProtocolClient};

const BASE_TIME: u64 = 1_700_000_000;
const DAY: u64 = 86_400;

fn setup() -> (Env, SmartStayProtocolClient<'static>, Address, Address) {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().with_mut(|li| li.timestamp = BASE_TIME);

    let protocol_id = env.register(SmartStayProtocol, ());
    let client = SmartStayProtocolClient::new(&env, &protocol_id);

    let token_admin = Address::generate(&env);
    let sac = env.register_stellar_asset_contract_v2(token_admin);
    let payment_admin = token::StellarAssetClient::new(&env, &sac.address());

    let receipts_id = env.register(TokenCollection, ());
    TokenCollectionClient::new(&env, &receipts_id).initialize(&protocol_id, &true);
    let nfts_id = env.register(TokenCollection, ());
    TokenCollectionClient::new(&env, &nfts_id).initialize(&protocol_id, &false);

    client.initialize(&sac.address(), &receipts_id, &nfts_id, &true);

    let owner = Address::generate(&env);
    let recipient = Address::generate(&env);
    payment_admin.mint(&recipient, &1_000_000);

    (env, client, owner, recipient)
}

fn paris(env: &Env) -> RentingParams {
    RentingParams {
        unit_price: 100,
        deposit: 1_000,
        person_count: 2,
        location: String::from_str(env, "Paris"),
        tags: vec![env, symbol_short!("wifi")],
        description: String::from_str(env, "Flat near the Seine"),
        image_url: String::from_str(env, "ipfs://flat.png"),
    }
}

#[test]
fn renting_created_event_carries_the_record() {
    let (env, client, owner, _) = setup();

    let renting = client.create_renting(&owner, &paris(&env));

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("renting").into_val(&env),
        symbol_short!("created").into_val(&env),
        renting.id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: Renting = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(event_data, renting);
}

#[test]
fn renting_deleted_event_names_the_owner() {
    let (env, client, owner, _) = setup();

    let renting = client.create_renting(&owner, &paris(&env));
    client.delete_renting(&owner, &renting.id);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    let expected_topics = vec![
        &env,
        symbol_short!("renting").into_val(&env),
        symbol_short!("deleted").into_val(&env),
        renting.id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: Address = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(event_data, owner);
}

#[test]
fn booking_created_event_carries_the_record() {
    let (env, client, owner, recipient) = setup();

    let renting = client.create_renting(&owner, &paris(&env));
    let booking = client.create_booking(&recipient, &renting.id, &(BASE_TIME + DAY), &3, &2);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    let expected_topics = vec![
        &env,
        symbol_short!("booking").into_val(&env),
        symbol_short!("created").into_val(&env),
        booking.id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: Booking = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(event_data, booking);
    assert_eq!(event_data.status, BookingStatus::Created);
}

#[test]
fn every_transition_emits_the_updated_record() {
    let (env, client, owner, recipient) = setup();

    let renting = client.create_renting(&owner, &paris(&env));
    let booking = client.create_booking(&recipient, &renting.id, &(BASE_TIME + DAY), &3, &2);

    let approved = client.approve_booking(&owner, &booking.id);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    let expected_topics = vec![
        &env,
        symbol_short!("booking").into_val(&env),
        symbol_short!("updated").into_val(&env),
        booking.id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: Booking = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(event_data, approved);
    assert_eq!(event_data.status, BookingStatus::Approved);
}

#[test]
fn rating_created_event_precedes_the_booking_update() {
    let (env, client, owner, recipient) = setup();

    // Drive one booking all the way to Completed.
    let renting = client.create_renting(&owner, &paris(&env));
    let booking = client.create_booking(&recipient, &renting.id, &(BASE_TIME + DAY), &3, &2);
    client.approve_booking(&owner, &booking.id);
    client.confirm_booking(
        &recipient,
        &booking.id,
        &1_300,
        &String::from_str(&env, "ipfs://owner"),
        &String::from_str(&env, "ipfs://recipient"),
    );
    env.ledger().with_mut(|li| li.timestamp = BASE_TIME + 5 * DAY);
    client.validate_booking_as_owner(&owner, &booking.id);
    client.validate_booking_as_recipient(&recipient, &booking.id);
    client.retrieve_amount(&owner, &booking.id, &String::from_str(&env, "ipfs://o2"));
    client.retrieve_deposit(&recipient, &booking.id, &String::from_str(&env, "ipfs://r2"));

    let rating = client.rate_owner(
        &recipient,
        &booking.id,
        &5,
        &String::from_str(&env, "spotless"),
    );

    let all_events = env.events().all();
    assert!(all_events.len() >= 2);

    // Second to last: the rating record itself.
    let rating_event = all_events.get(all_events.len() - 2).unwrap();
    let expected_topics = vec![
        &env,
        symbol_short!("rating").into_val(&env),
        symbol_short!("created").into_val(&env),
        rating.id.into_val(&env),
    ];
    assert_eq!(rating_event.1, expected_topics);
    let event_data: Rating = rating_event.2.try_into_val(&env).unwrap();
    assert_eq!(event_data, rating);

    // Last: the booking update flipping rated_owner.
    let booking_event = all_events.last().unwrap();
    let event_data: Booking = booking_event.2.try_into_val(&env).unwrap();
    assert!(event_data.rated_owner);
}
