#![no_std]

//! FundMe: a crowdfunding pool priced in USD.
//!
//! Anyone can fund the pool with native XLM as long as the single contribution
//! is worth at least [`MINIMUM_USD`] according to the configured price feed.
//! The owner fixed at construction can withdraw the whole pool at any time.

mod error;
mod oracle;
mod storage;
mod types;


use soroban_sdk::{contract, contractimpl, symbol_short, token, Address, Bytes, Env};

pub use error::FundMeError;
pub use oracle::{
    PriceFeedClient, PriceFeedInterface, MAX_PRICE_AGE_SECS, MINIMUM_USD, USD_DECIMALS,
};
pub use types::RoundData;

#[contract]
pub struct FundMe;

#[contractimpl]
impl FundMe {
    /// Initialize the pool with its owner, price feed and native asset contract.
    pub fn __constructor(env: Env, owner: Address, price_feed: Address, native_token: Address) {
        let decimals = token::Client::new(&env, &native_token).decimals();

        storage::set_owner(&env, &owner);
        storage::set_price_feed(&env, &price_feed);
        storage::set_native_token(&env, &native_token, decimals);
        storage::set_epoch(&env, 0);
    }

    /// Contribute `amount` stroops of native XLM.
    ///
    /// The contribution alone must be worth at least [`MINIMUM_USD`]; earlier
    /// contributions from the same caller do not count towards it. The ledger
    /// records the native amount, the USD value is only a gate.
    pub fn fund(env: Env, caller: Address, amount: i128) -> Result<(), FundMeError> {
        caller.require_auth();

        let usd = oracle::usd_value(
            &env,
            &storage::get_price_feed(&env),
            amount,
            storage::get_native_decimals(&env),
        )?;
        if usd < MINIMUM_USD {
            return Err(FundMeError::InsufficientContribution);
        }

        let epoch = storage::get_epoch(&env);
        let balance = storage::get_balance(&env, epoch, &caller)
            .checked_add(amount)
            .ok_or(FundMeError::ArithmeticOverflow)?;

        let token_client = token::Client::new(&env, &storage::get_native_token(&env));
        token_client.transfer(&caller, &env.current_contract_address(), &amount);

        storage::push_funder(&env, epoch, &caller);
        storage::set_balance(&env, epoch, &caller, balance);

        env.events()
            .publish((symbol_short!("FUNDED"), caller), (amount, usd));

        Ok(())
    }

    /// Send the whole pool to the owner and reset every funder. Owner-only.
    ///
    /// Balances and the funder list are cleared before the outbound transfer by
    /// moving to a fresh epoch, which costs the same for any number of funders.
    /// Returns the amount transferred, which is zero when nothing was held.
    pub fn withdraw(env: Env, caller: Address) -> Result<i128, FundMeError> {
        caller.require_auth();

        let owner = storage::get_owner(&env);
        if caller != owner {
            return Err(FundMeError::NotOwner);
        }

        let epoch = storage::get_epoch(&env);
        let funders_cleared = storage::get_funder_count(&env, epoch);
        let next_epoch = epoch.checked_add(1).ok_or(FundMeError::ArithmeticOverflow)?;
        storage::set_epoch(&env, next_epoch);

        let token_client = token::Client::new(&env, &storage::get_native_token(&env));
        let pool = env.current_contract_address();
        let held = token_client.balance(&pool);

        if held > 0 {
            // Returning an error also rolls back the reset above.
            match token_client.try_transfer(&pool, &owner, &held) {
                Ok(Ok(())) => {}
                _ => return Err(FundMeError::TransferFailed),
            }
        }

        env.events()
            .publish((symbol_short!("WITHDRAWN"), owner), (held, funders_cleared));

        Ok(held)
    }

    /// Plain value transfer with no payload. Same as [`FundMe::fund`].
    pub fn receive(env: Env, caller: Address, amount: i128) -> Result<(), FundMeError> {
        Self::fund(env, caller, amount)
    }

    /// Value transfer carrying an unrecognized payload. The payload is ignored
    /// and the call is handled as [`FundMe::fund`].
    pub fn fallback(
        env: Env,
        caller: Address,
        amount: i128,
        _data: Bytes,
    ) -> Result<(), FundMeError> {
        Self::fund(env, caller, amount)
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn owner(env: Env) -> Address {
        storage::get_owner(&env)
    }

    pub fn price_feed(env: Env) -> Address {
        storage::get_price_feed(&env)
    }

    pub fn native_token(env: Env) -> Address {
        storage::get_native_token(&env)
    }

    /// Funder at `index` in funding order. The same address appears once per
    /// successful `fund`.
    pub fn get_funder(env: Env, index: u32) -> Result<Address, FundMeError> {
        storage::get_funder(&env, storage::get_epoch(&env), index)
            .ok_or(FundMeError::FunderIndexOutOfBounds)
    }

    pub fn funder_count(env: Env) -> u32 {
        storage::get_funder_count(&env, storage::get_epoch(&env))
    }

    /// Cumulative stroops funded by `funder` since the last withdrawal.
    pub fn balance_of(env: Env, funder: Address) -> i128 {
        storage::get_balance(&env, storage::get_epoch(&env), &funder)
    }

    pub fn minimum_usd(_env: Env) -> i128 {
        MINIMUM_USD
    }

    /// Native balance currently held by the pool.
    pub fn held_balance(env: Env) -> i128 {
        token::Client::new(&env, &storage::get_native_token(&env))
            .balance(&env.current_contract_address())
    }

    pub fn price_feed_version(env: Env) -> Result<u32, FundMeError> {
        oracle::feed_version(&env, &storage::get_price_feed(&env))
    }

    /// USD value (18 decimals) of `amount` stroops at the current feed price.
    pub fn usd_value(env: Env, amount: i128) -> Result<i128, FundMeError> {
        oracle::usd_value(
            &env,
            &storage::get_price_feed(&env),
            amount,
            storage::get_native_decimals(&env),
        )
    }
}
