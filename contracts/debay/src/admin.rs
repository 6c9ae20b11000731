use crate::errors::Error;
use crate::types::{Auction, Config};
use soroban_sdk::Address;

pub fn is_admin(config: &Config, caller: &Address) -> bool {
    config.admin == *caller
}

/// Settlement is open to the initiator, the current winner and the admin.
pub fn require_settler(config: &Config, auction: &Auction, caller: &Address) -> Result<(), Error> {
    let is_winner = auction.highest_bidder.as_ref() == Some(caller);
    if auction.initiator == *caller || is_winner || is_admin(config, caller) {
        return Ok(());
    }
    Err(Error::Unauthorized)
}
