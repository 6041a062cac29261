use soroban_sdk::{contracttype, Address};

/// Storage keys for the contract.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Owner address, fixed at construction (persistent storage).
    Owner,
    /// Price feed contract address (persistent storage).
    PriceFeed,
    /// Native asset contract address (persistent storage).
    NativeToken,
    /// Decimals of the native asset (persistent storage).
    NativeDecimals,
    /// Current funding epoch. Every withdrawal starts a new one, so entries
    /// keyed by an older epoch are never read again (persistent storage).
    Epoch,
    /// Number of funder slots used in an epoch (persistent storage).
    FunderCount(u32),
    /// Funder at (epoch, index), in funding order, duplicates kept
    /// (persistent storage).
    Funder(u32, u32),
    /// Cumulative stroops funded by an address during an epoch
    /// (persistent storage).
    Balance(u32, Address),
}

/// Latest round as reported by the price feed.
///
/// Field names must match the feed's `RoundData` exactly; the value crosses the
/// contract boundary as a map keyed by field name.
#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundData {
    pub round_id: u64,
    pub answer: i128,
    pub started_at: u64,
    pub updated_at: u64,
    pub answered_in_round: u64,
}
