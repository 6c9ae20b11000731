use soroban_sdk::{Address, BytesN, Env, Vec};

use crate::types::{
    Auction, Bid, Config, DataKey, INSTANCE_TTL_AMOUNT, INSTANCE_TTL_THRESHOLD,
    PERSISTENT_TTL_AMOUNT, PERSISTENT_TTL_THRESHOLD,
};

// ============================================================================
// CONFIG STORAGE
// ============================================================================

pub fn get_config(env: &Env) -> Option<Config> {
    env.storage().instance().get(&DataKey::Config)
}

pub fn set_config(env: &Env, config: &Config) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_AMOUNT);
}

// ============================================================================
// AUCTION STORAGE
// ============================================================================

pub fn get_auction(env: &Env, auction_id: &BytesN<32>) -> Option<Auction> {
    let key = DataKey::Auction(auction_id.clone());
    let auction = env.storage().persistent().get::<_, Auction>(&key);
    if auction.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    auction
}

pub fn save_auction(env: &Env, auction: &Auction) {
    let key = DataKey::Auction(auction.auction_id.clone());
    env.storage().persistent().set(&key, auction);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

pub fn auction_exists(env: &Env, auction_id: &BytesN<32>) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Auction(auction_id.clone()))
}

pub fn get_bid(env: &Env, auction_id: &BytesN<32>, index: u32) -> Option<Bid> {
    let key = DataKey::Bid(auction_id.clone(), index);
    let bid = env.storage().persistent().get::<_, Bid>(&key);
    if bid.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    bid
}

/// One entry per bid; earlier bids are never rewritten.
pub fn save_bid(env: &Env, auction_id: &BytesN<32>, index: u32, bid: &Bid) {
    let key = DataKey::Bid(auction_id.clone(), index);
    env.storage().persistent().set(&key, bid);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

/// Bids `[start, start + limit)`, clipped to the `count` recorded so far.
pub fn get_bids(env: &Env, auction_id: &BytesN<32>, count: u32, start: u32, limit: u32) -> Vec<Bid> {
    let mut bids = Vec::new(env);
    let end = start.saturating_add(limit).min(count);
    for index in start..end {
        if let Some(bid) = get_bid(env, auction_id, index) {
            bids.push_back(bid);
        }
    }
    bids
}

// ============================================================================
// BALANCE STORAGE
// ============================================================================

pub fn get_balance(env: &Env, account: &Address) -> i128 {
    let key = DataKey::Balance(account.clone());
    let balance = env.storage().persistent().get::<_, i128>(&key);
    if balance.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    balance.unwrap_or(0)
}

/// Zero balances are removed rather than stored.
pub fn set_balance(env: &Env, account: &Address, amount: i128) {
    let key = DataKey::Balance(account.clone());
    if amount == 0 {
        env.storage().persistent().remove(&key);
        return;
    }
    env.storage().persistent().set(&key, &amount);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}
