mod indexer;
mod record;
mod standings;

use alloy::primitives::U256;
pub use indexer::*;
pub use record::LeaderboardRecord;
pub use standings::{ProfileInfo, Standings};

use crate::error::LeaderboardError;

/// Widens a caller-supplied integer to the on-chain representation.
pub(crate) fn widen(value: u64) -> U256 { U256::from(value) }

/// Widens a batch of values addressed to the same number of players.
pub(crate) fn widen_batch<T>(players: &[T], values: &[u64]) -> Result<Vec<U256>, LeaderboardError> {
    if players.len() != values.len() {
        return Err(LeaderboardError::InvalidArgument(format!(
            "{} players but {} values",
            players.len(),
            values.len()
        )));
    }
    Ok(values.iter().copied().map(widen).collect())
}

/// Narrows an on-chain integer, failing on values above [`u64::MAX`].
pub(crate) fn narrow(value: U256) -> Result<u64, LeaderboardError> {
    u64::try_from(value).map_err(|_| LeaderboardError::Overflow(value))
}
