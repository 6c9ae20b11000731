#![no_std]

mod admin;
mod errors;
mod escrow;
mod events;
mod storage;
mod types;

use soroban_sdk::{contract, contractimpl, log, xdr::ToXdr, Address, BytesN, Env, String, Vec};

pub use crate::errors::Error;
use crate::events::*;
pub use crate::types::{Auction, Bid, Config, MAX_BID_PAGE};

/// DeBay auction house.
///
/// Auctions are keyed by a fingerprint of their defining fields, so the same
/// listing cannot be started twice. Bids are paid either with fresh tokens or
/// out of the bidder's withdrawable balance; outbid amounts and settlement
/// proceeds are credited back to that balance and leave the contract only
/// through `withdraw`.
#[contract]
pub struct DeBay;

#[contractimpl]
impl DeBay {
    pub fn initialize(env: Env, admin: Address, token: Address) -> Result<(), Error> {
        if storage::has_config(&env) {
            return Err(Error::AlreadyInitialized);
        }
        admin.require_auth();

        let config = Config {
            admin: admin.clone(),
            token: token.clone(),
        };
        storage::set_config(&env, &config);
        storage::extend_instance_ttl(&env);

        InitializedEventData { admin, token }.publish(&env);
        Ok(())
    }

    pub fn get_config(env: Env) -> Result<Config, Error> {
        storage::get_config(&env).ok_or(Error::NotInitialized)
    }

    /// Fingerprint of an auction, computable without touching storage.
    pub fn get_auction_id(
        env: Env,
        initiator: Address,
        deadline: u64,
        name: String,
        image_url: String,
        description: String,
    ) -> BytesN<32> {
        compute_auction_id(&env, &initiator, deadline, &name, &image_url, &description)
    }

    /// Opens a new auction that accepts bids until `deadline`.
    ///
    /// # Errors
    /// * `Error::InvalidMetadata` - If `name` is empty
    /// * `Error::InvalidAmount` - If `floor` is negative
    /// * `Error::InvalidDeadline` - If `deadline` is not in the future
    /// * `Error::AuctionExists` - If an auction with the same fields was already started
    pub fn start_auction(
        env: Env,
        initiator: Address,
        name: String,
        image_url: String,
        description: String,
        floor: i128,
        deadline: u64,
    ) -> Result<BytesN<32>, Error> {
        initiator.require_auth();
        storage::get_config(&env).ok_or(Error::NotInitialized)?;

        if name.is_empty() {
            return Err(Error::InvalidMetadata);
        }
        if floor < 0 {
            return Err(Error::InvalidAmount);
        }
        if deadline <= env.ledger().timestamp() {
            return Err(Error::InvalidDeadline);
        }

        let auction_id =
            compute_auction_id(&env, &initiator, deadline, &name, &image_url, &description);
        if storage::auction_exists(&env, &auction_id) {
            return Err(Error::AuctionExists);
        }

        let auction = Auction {
            auction_id: auction_id.clone(),
            initiator: initiator.clone(),
            name,
            image_url,
            description,
            floor,
            deadline,
            highest_bid: 0,
            highest_bidder: None,
            bid_count: 0,
            settled: false,
        };
        storage::save_auction(&env, &auction);
        storage::extend_instance_ttl(&env);

        AuctionStartedEventData {
            auction_id: auction_id.clone(),
            initiator,
            floor,
            deadline,
        }
        .publish(&env);

        Ok(auction_id)
    }

    /// Moves tokens into the contract and credits them to `account`'s balance.
    pub fn deposit(env: Env, account: Address, amount: i128) -> Result<i128, Error> {
        account.require_auth();
        let config = storage::get_config(&env).ok_or(Error::NotInitialized)?;

        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        escrow::pull_funds(&env, &config, &account, amount);
        let balance = escrow::credit(&env, &account, amount)?;
        storage::extend_instance_ttl(&env);

        DepositedEventData { account, amount }.publish(&env);
        Ok(balance)
    }

    /// Bids `amount`, paid from `bidder`'s token holdings in the same call.
    pub fn bid(env: Env, auction_id: BytesN<32>, bidder: Address, amount: i128) -> Result<(), Error> {
        bidder.require_auth();
        let config = storage::get_config(&env).ok_or(Error::NotInitialized)?;

        let mut auction = storage::get_auction(&env, &auction_id).ok_or(Error::AuctionNotFound)?;
        validate_bid(&env, &auction, &bidder, amount)?;

        escrow::pull_funds(&env, &config, &bidder, amount);
        accept_bid(&env, &mut auction, bidder, amount)
    }

    /// Bids `amount`, paid out of `bidder`'s withdrawable balance.
    pub fn bid_from_balance(
        env: Env,
        auction_id: BytesN<32>,
        bidder: Address,
        amount: i128,
    ) -> Result<(), Error> {
        bidder.require_auth();
        storage::get_config(&env).ok_or(Error::NotInitialized)?;

        let mut auction = storage::get_auction(&env, &auction_id).ok_or(Error::AuctionNotFound)?;
        validate_bid(&env, &auction, &bidder, amount)?;

        escrow::debit(&env, &bidder, amount)?;
        accept_bid(&env, &mut auction, bidder, amount)
    }

    /// Pays out `account`'s whole withdrawable balance.
    pub fn withdraw(env: Env, account: Address) -> Result<i128, Error> {
        account.require_auth();
        let config = storage::get_config(&env).ok_or(Error::NotInitialized)?;

        let amount = escrow::take_all(&env, &account)?;
        escrow::push_funds(&env, &config, &account, amount);
        storage::extend_instance_ttl(&env);

        WithdrawnEventData {
            account,
            amount,
        }
        .publish(&env);
        Ok(amount)
    }

    /// Closes an auction whose deadline has passed and credits the winning
    /// bid to the initiator.
    ///
    /// # Errors
    /// * `Error::AuctionNotFound` - If no auction has this id
    /// * `Error::AuctionAlreadySettled` - If the auction was settled before
    /// * `Error::Unauthorized` - If `caller` is not the initiator, the winner or the admin
    /// * `Error::AuctionNotEnded` - If the deadline has not been reached
    pub fn settle(env: Env, auction_id: BytesN<32>, caller: Address) -> Result<(), Error> {
        caller.require_auth();
        let config = storage::get_config(&env).ok_or(Error::NotInitialized)?;

        let mut auction = storage::get_auction(&env, &auction_id).ok_or(Error::AuctionNotFound)?;

        if auction.settled {
            return Err(Error::AuctionAlreadySettled);
        }
        admin::require_settler(&config, &auction, &caller)?;
        if env.ledger().timestamp() < auction.deadline {
            return Err(Error::AuctionNotEnded);
        }

        if auction.highest_bidder.is_some() {
            escrow::credit(&env, &auction.initiator, auction.highest_bid)?;
        }

        auction.settled = true;
        storage::save_auction(&env, &auction);
        storage::extend_instance_ttl(&env);

        log!(&env, "auction settled", auction_id, auction.highest_bid);

        AuctionEndedEventData {
            auction_id,
            winner: auction.highest_bidder,
            amount: auction.highest_bid,
        }
        .publish(&env);

        Ok(())
    }

    // ========================================================================
    // QUERIES
    // ========================================================================

    pub fn get_auction(env: Env, auction_id: BytesN<32>) -> Result<Auction, Error> {
        storage::get_config(&env).ok_or(Error::NotInitialized)?;
        storage::get_auction(&env, &auction_id).ok_or(Error::AuctionNotFound)
    }

    pub fn auction_exists(env: Env, auction_id: BytesN<32>) -> bool {
        storage::auction_exists(&env, &auction_id)
    }

    pub fn get_highest_bid(env: Env, auction_id: BytesN<32>) -> Result<(Option<Address>, i128), Error> {
        storage::get_config(&env).ok_or(Error::NotInitialized)?;
        let auction = storage::get_auction(&env, &auction_id).ok_or(Error::AuctionNotFound)?;
        Ok((auction.highest_bidder, auction.highest_bid))
    }

    pub fn get_bid_count(env: Env, auction_id: BytesN<32>) -> Result<u32, Error> {
        storage::get_config(&env).ok_or(Error::NotInitialized)?;
        let auction = storage::get_auction(&env, &auction_id).ok_or(Error::AuctionNotFound)?;
        Ok(auction.bid_count)
    }

    /// Accepted bids in the order they were placed, starting at index `start`.
    /// At most `MAX_BID_PAGE` bids are returned per call.
    pub fn get_bid_history(
        env: Env,
        auction_id: BytesN<32>,
        start: u32,
        limit: u32,
    ) -> Result<Vec<Bid>, Error> {
        storage::get_config(&env).ok_or(Error::NotInitialized)?;
        let auction = storage::get_auction(&env, &auction_id).ok_or(Error::AuctionNotFound)?;
        Ok(storage::get_bids(
            &env,
            &auction_id,
            auction.bid_count,
            start,
            limit.min(MAX_BID_PAGE),
        ))
    }

    /// Withdrawable balance of `account`.
    pub fn get_balance(env: Env, account: Address) -> i128 {
        storage::get_balance(&env, &account)
    }
}

fn compute_auction_id(
    env: &Env,
    initiator: &Address,
    deadline: u64,
    name: &String,
    image_url: &String,
    description: &String,
) -> BytesN<32> {
    let fields = (
        initiator.clone(),
        deadline,
        name.clone(),
        image_url.clone(),
        description.clone(),
    );
    env.crypto().sha256(&fields.to_xdr(env)).to_bytes()
}

fn validate_bid(env: &Env, auction: &Auction, bidder: &Address, amount: i128) -> Result<(), Error> {
    if auction.settled {
        return Err(Error::AuctionAlreadySettled);
    }
    if !auction.is_open(env.ledger().timestamp()) {
        return Err(Error::AuctionEnded);
    }
    if auction.initiator == *bidder {
        return Err(Error::SellerCannotBid);
    }
    if amount <= 0 {
        return Err(Error::InvalidAmount);
    }
    if amount < auction.floor {
        return Err(Error::BidBelowFloor);
    }
    if amount <= auction.highest_bid {
        return Err(Error::BidTooLow);
    }
    Ok(())
}

/// Records a validated bid whose funds are already held by the contract and
/// credits the superseded bid back to its owner.
fn accept_bid(env: &Env, auction: &mut Auction, bidder: Address, amount: i128) -> Result<(), Error> {
    if let Some(previous_bidder) = &auction.highest_bidder {
        escrow::credit(env, previous_bidder, auction.highest_bid)?;
    }

    auction.highest_bid = amount;
    auction.highest_bidder = Some(bidder.clone());

    let bid = Bid {
        bidder: bidder.clone(),
        amount,
        timestamp: env.ledger().timestamp(),
    };
    storage::save_bid(env, &auction.auction_id, auction.bid_count, &bid);
    auction.bid_count += 1;
    storage::save_auction(env, auction);
    storage::extend_instance_ttl(env);

    BidEventData {
        auction_id: auction.auction_id.clone(),
        bidder,
        amount,
    }
    .publish(env);

    Ok(())
}

#[cfg(test)]
mod test;
