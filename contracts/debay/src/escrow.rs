use soroban_sdk::{token, Address, Env};

use crate::errors::Error;
use crate::storage;
use crate::types::Config;

/// Adds `amount` to the withdrawable balance of `account`.
pub fn credit(env: &Env, account: &Address, amount: i128) -> Result<i128, Error> {
    let balance = storage::get_balance(env, account)
        .checked_add(amount)
        .ok_or(Error::BalanceOverflow)?;
    storage::set_balance(env, account, balance);
    Ok(balance)
}

pub fn debit(env: &Env, account: &Address, amount: i128) -> Result<i128, Error> {
    let balance = storage::get_balance(env, account);
    if balance < amount {
        return Err(Error::InsufficientBalance);
    }
    let remaining = balance - amount;
    storage::set_balance(env, account, remaining);
    Ok(remaining)
}

/// Clears the balance of `account` and returns what it held.
pub fn take_all(env: &Env, account: &Address) -> Result<i128, Error> {
    let balance = storage::get_balance(env, account);
    if balance <= 0 {
        return Err(Error::NothingToWithdraw);
    }
    storage::set_balance(env, account, 0);
    Ok(balance)
}

/// Moves tokens from `from` into the contract.
pub fn pull_funds(env: &Env, config: &Config, from: &Address, amount: i128) {
    let token_client = token::TokenClient::new(env, &config.token);
    token_client.transfer(from, &env.current_contract_address(), &amount);
}

/// Pays tokens out of the contract to `to`.
pub fn push_funds(env: &Env, config: &Config, to: &Address, amount: i128) {
    let token_client = token::TokenClient::new(env, &config.token);
    token_client.transfer(&env.current_contract_address(), to, &amount);
}
