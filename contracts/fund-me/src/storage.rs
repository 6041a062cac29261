use soroban_sdk::{Address, Env};

use crate::types::DataKey;

/// Bump amount for persistent storage entries (roughly 30 days in ledgers).
const LEDGER_BUMP: u32 = 518_400;
/// Threshold for bumping (roughly 15 days).
const LEDGER_THRESHOLD: u32 = 259_200;

fn bump(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, LEDGER_THRESHOLD, LEDGER_BUMP);
}

// =============================================================================
// Owner
// =============================================================================

pub fn get_owner(env: &Env) -> Address {
    env.storage()
        .persistent()
        .get(&DataKey::Owner)
        .expect("owner not set")
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().persistent().set(&DataKey::Owner, owner);
    bump(env, &DataKey::Owner);
}

// =============================================================================
// Price Feed
// =============================================================================

pub fn get_price_feed(env: &Env) -> Address {
    env.storage()
        .persistent()
        .get(&DataKey::PriceFeed)
        .expect("price feed not set")
}

pub fn set_price_feed(env: &Env, feed: &Address) {
    env.storage().persistent().set(&DataKey::PriceFeed, feed);
    bump(env, &DataKey::PriceFeed);
}

// =============================================================================
// Native Token
// =============================================================================

pub fn get_native_token(env: &Env) -> Address {
    env.storage()
        .persistent()
        .get(&DataKey::NativeToken)
        .expect("native token not set")
}

pub fn set_native_token(env: &Env, token: &Address, decimals: u32) {
    env.storage().persistent().set(&DataKey::NativeToken, token);
    bump(env, &DataKey::NativeToken);
    env.storage()
        .persistent()
        .set(&DataKey::NativeDecimals, &decimals);
    bump(env, &DataKey::NativeDecimals);
}

pub fn get_native_decimals(env: &Env) -> u32 {
    env.storage()
        .persistent()
        .get(&DataKey::NativeDecimals)
        .expect("native decimals not set")
}

// =============================================================================
// Epoch
// =============================================================================

pub fn get_epoch(env: &Env) -> u32 {
    env.storage()
        .persistent()
        .get(&DataKey::Epoch)
        .unwrap_or(0)
}

pub fn set_epoch(env: &Env, epoch: u32) {
    env.storage().persistent().set(&DataKey::Epoch, &epoch);
    bump(env, &DataKey::Epoch);
}

// =============================================================================
// Funders
// =============================================================================

pub fn get_funder_count(env: &Env, epoch: u32) -> u32 {
    env.storage()
        .persistent()
        .get(&DataKey::FunderCount(epoch))
        .unwrap_or(0)
}

pub fn get_funder(env: &Env, epoch: u32, index: u32) -> Option<Address> {
    env.storage()
        .persistent()
        .get(&DataKey::Funder(epoch, index))
}

/// Append `funder` to the epoch's funder list.
pub fn push_funder(env: &Env, epoch: u32, funder: &Address) {
    let index = get_funder_count(env, epoch);

    let slot = DataKey::Funder(epoch, index);
    env.storage().persistent().set(&slot, funder);
    bump(env, &slot);

    let count = DataKey::FunderCount(epoch);
    env.storage().persistent().set(&count, &(index + 1));
    bump(env, &count);
}

// =============================================================================
// Balances
// =============================================================================

pub fn get_balance(env: &Env, epoch: u32, funder: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Balance(epoch, funder.clone()))
        .unwrap_or(0)
}

pub fn set_balance(env: &Env, epoch: u32, funder: &Address, amount: i128) {
    let key = DataKey::Balance(epoch, funder.clone());
    env.storage().persistent().set(&key, &amount);
    bump(env, &key);
}
