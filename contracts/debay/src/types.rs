use soroban_sdk::{contracttype, Address, BytesN, String};

/// Number of ledgers in a day (assuming ~5 second block time)
pub const DAY_IN_LEDGERS: u32 = 17280;

/// TTL extension amount for instance storage (30 days)
pub const INSTANCE_TTL_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const INSTANCE_TTL_THRESHOLD: u32 = INSTANCE_TTL_AMOUNT - DAY_IN_LEDGERS;

/// TTL extension amount for persistent storage (90 days)
pub const PERSISTENT_TTL_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;
pub const PERSISTENT_TTL_THRESHOLD: u32 = PERSISTENT_TTL_AMOUNT - DAY_IN_LEDGERS;

/// Largest page returned by `get_bid_history`
pub const MAX_BID_PAGE: u32 = 50;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// May settle any auction
    pub admin: Address,
    /// Asset used for deposits, bids and payouts
    pub token: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Auction {
    /// Fingerprint of the defining fields
    pub auction_id: BytesN<32>,
    pub initiator: Address,
    pub name: String,
    pub image_url: String,
    pub description: String,
    pub floor: i128,
    /// Ledger timestamp at which bidding closes
    pub deadline: u64,
    pub highest_bid: i128,
    pub highest_bidder: Option<Address>,
    /// Number of accepted bids, also the index of the next one
    pub bid_count: u32,
    pub settled: bool,
}

impl Auction {
    pub fn is_open(&self, now: u64) -> bool {
        !self.settled && now < self.deadline
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Bid {
    pub bidder: Address,
    pub amount: i128,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,
    Auction(BytesN<32>),
    /// One accepted bid, by auction and position
    Bid(BytesN<32>, u32),
    /// Withdrawable balance held for an account
    Balance(Address),
}
