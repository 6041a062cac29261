use soroban_sdk::contracttype;

/// Storage keys for the contract.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Number of decimals in every reported answer (persistent storage).
    Decimals,
    /// Id of the most recent round (persistent storage).
    LatestRound,
    /// Round data keyed by round id (persistent storage).
    Round(u64),
}

/// One price observation, shaped like an AggregatorV3 `latestRoundData` tuple.
#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundData {
    pub round_id: u64,
    /// Raw price, scaled by `10^decimals`.
    pub answer: i128,
    pub started_at: u64,
    pub updated_at: u64,
    pub answered_in_round: u64,
}
