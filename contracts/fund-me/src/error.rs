use soroban_sdk::contracterror;

/// Errors surfaced by every `FundMe` entry point.
///
/// Returning any of these aborts the invocation, so staged storage writes and
/// token movements are rolled back by the host.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum FundMeError {
    /// You need to spend more XLM!
    InsufficientContribution = 1,
    /// Only the owner can withdraw.
    NotOwner = 2,
    /// Sending the pooled balance to the owner failed.
    TransferFailed = 3,
    /// The price feed is unreachable, stale or reports a non-positive price.
    OracleUnavailable = 4,
    ArithmeticOverflow = 5,
    FunderIndexOutOfBounds = 6,
}
