//! USD conversion backed by an external price feed.
//!
//! Feeds report answers at their own precision (commonly 8 decimals). Every
//! answer is renormalized to 18 decimals before it touches an amount, so the
//! result is directly comparable with [`MINIMUM_USD`].

use soroban_sdk::{contractclient, log, Address, Env};

use crate::error::FundMeError;
use crate::types::RoundData;

/// Fixed-point precision of every USD value handled by the contract.
pub const USD_DECIMALS: u32 = 18;

/// Smallest accepted contribution: 50.00 USD.
pub const MINIMUM_USD: i128 = 50 * 10_i128.pow(USD_DECIMALS);

/// Answers older than this are treated as unavailable.
pub const MAX_PRICE_AGE_SECS: u64 = 3_600;

/// Read surface of an AggregatorV3-style price feed.
#[contractclient(name = "PriceFeedClient")]
pub trait PriceFeedInterface {
    fn decimals(env: Env) -> u32;
    fn version(env: Env) -> u32;
    fn latest_round_data(env: Env) -> RoundData;
}

/// Price of one whole native unit, in 18-decimal USD.
pub fn price_in_usd(env: &Env, feed: &Address) -> Result<i128, FundMeError> {
    let client = PriceFeedClient::new(env, feed);

    let Ok(Ok(decimals)) = client.try_decimals() else {
        log!(env, "price feed decimals unavailable", feed.clone());
        return Err(FundMeError::OracleUnavailable);
    };
    let Ok(Ok(round)) = client.try_latest_round_data() else {
        log!(env, "price feed round unavailable", feed.clone());
        return Err(FundMeError::OracleUnavailable);
    };

    check_round(env, &round)?;
    normalize(round.answer, decimals)
}

/// USD value (18 decimals) of `amount` base units of the native asset.
pub fn usd_value(
    env: &Env,
    feed: &Address,
    amount: i128,
    native_decimals: u32,
) -> Result<i128, FundMeError> {
    let price = price_in_usd(env, feed)?;
    convert(price, amount, native_decimals)
}

/// Version reported by the feed.
pub fn feed_version(env: &Env, feed: &Address) -> Result<u32, FundMeError> {
    match PriceFeedClient::new(env, feed).try_version() {
        Ok(Ok(version)) => Ok(version),
        _ => Err(FundMeError::OracleUnavailable),
    }
}

/// `price * amount / 10^native_decimals`, where `price` is already 18-decimal USD.
pub fn convert(price: i128, amount: i128, native_decimals: u32) -> Result<i128, FundMeError> {
    price
        .checked_mul(amount)
        .ok_or(FundMeError::ArithmeticOverflow)?
        .checked_div(pow10(native_decimals)?)
        .ok_or(FundMeError::ArithmeticOverflow)
}

/// Rescale a raw feed answer from `decimals` to [`USD_DECIMALS`].
pub fn normalize(answer: i128, decimals: u32) -> Result<i128, FundMeError> {
    if decimals <= USD_DECIMALS {
        answer
            .checked_mul(pow10(USD_DECIMALS - decimals)?)
            .ok_or(FundMeError::ArithmeticOverflow)
    } else {
        Ok(answer / pow10(decimals - USD_DECIMALS)?)
    }
}

fn check_round(env: &Env, round: &RoundData) -> Result<(), FundMeError> {
    let now = env.ledger().timestamp();

    if round.answer <= 0
        || round.updated_at == 0
        || round.updated_at > now
        || round.answered_in_round < round.round_id
        || now - round.updated_at > MAX_PRICE_AGE_SECS
    {
        log!(
            env,
            "rejecting price round",
            round.round_id,
            round.answer,
            round.updated_at
        );
        return Err(FundMeError::OracleUnavailable);
    }
    Ok(())
}

fn pow10(exp: u32) -> Result<i128, FundMeError> {
    10_i128
        .checked_pow(exp)
        .ok_or(FundMeError::ArithmeticOverflow)
}
