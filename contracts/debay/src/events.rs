use soroban_sdk::{contractevent, Address, BytesN};

/// Event emitted when the contract is initialized
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEventData {
    #[topic]
    pub admin: Address,
    pub token: Address,
}

/// Event emitted when an auction is started
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionStartedEventData {
    #[topic]
    pub auction_id: BytesN<32>,
    #[topic]
    pub initiator: Address,
    pub floor: i128,
    pub deadline: u64,
}

/// Event emitted for every accepted bid
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidEventData {
    #[topic]
    pub auction_id: BytesN<32>,
    #[topic]
    pub bidder: Address,
    pub amount: i128,
}

/// Event emitted when an auction is settled
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionEndedEventData {
    #[topic]
    pub auction_id: BytesN<32>,
    pub winner: Option<Address>,
    pub amount: i128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DepositedEventData {
    #[topic]
    pub account: Address,
    pub amount: i128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawnEventData {
    #[topic]
    pub account: Address,
    pub amount: i128,
}
