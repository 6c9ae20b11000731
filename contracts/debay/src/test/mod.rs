
use crate::{DeBay, DeBayClient};
use soroban_sdk::{
    testutils::{Address as _, Events as _, Ledger, LedgerInfo},
    token, Address, BytesN, Env, Event, String,
};

pub const START_TIME: u64 = 1_000;
pub const DURATION: u64 = 3_600;
pub const FLOOR: i128 = 100;
pub const INITIAL_BALANCE: i128 = 10_000_000;

pub struct TestSetup<'a> {
    pub env: Env,
    pub client: DeBayClient<'a>,
    pub admin: Address,
    pub seller: Address,
    pub bidder: Address,
    pub other_bidder: Address,
    pub token: token::TokenClient<'a>,
}

pub fn setup_test() -> TestSetup<'static> {
    let env = Env::default();
    env.mock_all_auths();
    set_timestamp(&env, START_TIME);

    let contract_id = env.register(DeBay, ());
    let client = DeBayClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    let seller = Address::generate(&env);
    let bidder = Address::generate(&env);
    let other_bidder = Address::generate(&env);

    let token_admin = Address::generate(&env);
    let token_contract = env.register_stellar_asset_contract_v2(token_admin.clone());
    let token_address = token_contract.address();
    let token_client = token::TokenClient::new(&env, &token_address);
    let token_admin_client = token::StellarAssetClient::new(&env, &token_address);

    token_admin_client.mint(&bidder, &INITIAL_BALANCE);
    token_admin_client.mint(&other_bidder, &INITIAL_BALANCE);

    client.initialize(&admin, &token_address);

    TestSetup {
        env,
        client,
        admin,
        seller,
        bidder,
        other_bidder,
        token: token_client,
    }
}

/// Starts the default listing, closing `DURATION` seconds from now.
pub fn start_default_auction(setup: &TestSetup) -> BytesN<32> {
    let env = &setup.env;
    setup.client.start_auction(
        &setup.seller,
        &String::from_str(env, "Auction 1"),
        &String::from_str(env, "URL"),
        &String::from_str(env, "Auction description"),
        &FLOOR,
        &(env.ledger().timestamp() + DURATION),
    )
}

/// Whether the auction contract published `event`.
pub fn emitted<E: Event>(setup: &TestSetup, event: &E) -> bool {
    let expected = event.to_xdr(&setup.env, &setup.client.address);
    setup.env.events().all().events().contains(&expected)
}

pub fn advance_ledger(env: &Env, seconds: u64) {
    set_ledger(env, env.ledger().timestamp() + seconds, env.ledger().sequence());
}

/// Moves the ledger sequence forward, letting storage TTLs run down.
pub fn advance_sequence(env: &Env, ledgers: u32) {
    set_ledger(env, env.ledger().timestamp(), env.ledger().sequence() + ledgers);
}

fn set_timestamp(env: &Env, timestamp: u64) {
    set_ledger(env, timestamp, env.ledger().sequence());
}

fn set_ledger(env: &Env, timestamp: u64, sequence_number: u32) {
    env.ledger().set(LedgerInfo {
        timestamp,
        protocol_version: 23,
        sequence_number,
        network_id: Default::default(),
        base_reserve: 10,
        min_temp_entry_ttl: 10,
        min_persistent_entry_ttl: 10,
        max_entry_ttl: 3110400,
    });
}
