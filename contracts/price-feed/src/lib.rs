#![no_std]

//! Mock price feed for local deployments and tests.
//!
//! Mirrors the read surface of an AggregatorV3 feed (`decimals`, `version`,
//! `latest_round_data`, ...) and lets anyone push new answers.

mod types;


use soroban_sdk::{contract, contractimpl, Env, String};
use types::DataKey;
pub use types::RoundData;

/// Bump amount for persistent storage entries (roughly 30 days in ledgers).
const LEDGER_BUMP: u32 = 518_400;
/// Threshold for bumping (roughly 15 days).
const LEDGER_THRESHOLD: u32 = 259_200;

const VERSION: u32 = 4;

#[contract]
pub struct MockPriceFeed;

#[contractimpl]
impl MockPriceFeed {
    /// Initialize the feed with its precision and a first answer.
    pub fn __constructor(env: Env, decimals: u32, initial_answer: i128) {
        assert!(decimals <= 38, "decimals must be <= 38");
        env.storage().persistent().set(&DataKey::Decimals, &decimals);
        env.storage()
            .persistent()
            .extend_ttl(&DataKey::Decimals, LEDGER_THRESHOLD, LEDGER_BUMP);
        Self::update_answer(env, initial_answer);
    }

    /// Start a new round with `answer`, stamped with the current ledger time.
    pub fn update_answer(env: Env, answer: i128) {
        let round_id = latest_round(&env) + 1;
        let now = env.ledger().timestamp();
        write_round(
            &env,
            &RoundData {
                round_id,
                answer,
                started_at: now,
                updated_at: now,
                answered_in_round: round_id,
            },
        );
    }

    /// Overwrite the latest round with explicit values.
    ///
    /// Lets tests reproduce stale, future-dated or carried-over rounds
    /// (`answered_in_round < round_id`), which `update_answer` never produces.
    pub fn update_round_data(
        env: Env,
        round_id: u64,
        answer: i128,
        updated_at: u64,
        started_at: u64,
        answered_in_round: u64,
    ) {
        assert!(round_id > 0, "round id must be positive");
        write_round(
            &env,
            &RoundData {
                round_id,
                answer,
                started_at,
                updated_at,
                answered_in_round,
            },
        );
    }

    pub fn decimals(env: Env) -> u32 {
        env.storage()
            .persistent()
            .get(&DataKey::Decimals)
            .expect("decimals not set")
    }

    pub fn description(env: Env) -> String {
        String::from_str(&env, "mock / XLM-USD")
    }

    pub fn version(_env: Env) -> u32 {
        VERSION
    }

    pub fn latest_round_data(env: Env) -> RoundData {
        let round_id = latest_round(&env);
        Self::get_round_data(env, round_id)
    }

    pub fn get_round_data(env: Env, round_id: u64) -> RoundData {
        env.storage()
            .persistent()
            .get(&DataKey::Round(round_id))
            .expect("no data present")
    }
}

fn latest_round(env: &Env) -> u64 {
    env.storage()
        .persistent()
        .get(&DataKey::LatestRound)
        .unwrap_or(0)
}

fn write_round(env: &Env, round: &RoundData) {
    let key = DataKey::Round(round.round_id);
    env.storage().persistent().set(&key, round);
    env.storage()
        .persistent()
        .extend_ttl(&key, LEDGER_THRESHOLD, LEDGER_BUMP);

    env.storage()
        .persistent()
        .set(&DataKey::LatestRound, &round.round_id);
    env.storage()
        .persistent()
        .extend_ttl(&DataKey::LatestRound, LEDGER_THRESHOLD, LEDGER_BUMP);
}
