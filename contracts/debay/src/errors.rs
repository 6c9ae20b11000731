use soroban_sdk::contracterror;

/// Error codes for the DeBay auction contract.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Contract has not been initialized
    NotInitialized = 1,
    /// Contract has already been initialized
    AlreadyInitialized = 2,
    /// Caller may not perform this action
    Unauthorized = 3,
    /// An auction with the same fingerprint already exists
    AuctionExists = 4,
    /// No auction stored under the given fingerprint
    AuctionNotFound = 5,
    /// Bidding has closed
    AuctionEnded = 6,
    /// Deadline has not been reached yet
    AuctionNotEnded = 7,
    /// Auction has already been settled
    AuctionAlreadySettled = 8,
    /// Deadline is not in the future
    InvalidDeadline = 9,
    /// Amount is zero or negative
    InvalidAmount = 10,
    /// Auction name is empty
    InvalidMetadata = 11,
    /// Bid is below the auction's floor price
    BidBelowFloor = 12,
    /// Bid does not beat the current highest bid
    BidTooLow = 13,
    /// Initiators cannot bid on their own auction
    SellerCannotBid = 14,
    /// Withdrawable balance does not cover the bid
    InsufficientBalance = 15,
    /// Withdrawable balance is zero
    NothingToWithdraw = 16,
    /// Crediting a balance would overflow
    BalanceOverflow = 17,
}
