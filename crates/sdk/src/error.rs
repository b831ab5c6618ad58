use std::fmt::Display;

use alloy::primitives::{FixedBytes, U256, fixed_bytes};

/// Contract the SDK holds a binding for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContractKind {
    Factory,
    Leaderboard,
}

impl Display for ContractKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContractKind::Factory => write!(f, "factory"),
            ContractKind::Leaderboard => write!(f, "leaderboard"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LeaderboardError {
    #[error("Wallet key not set")]
    WalletKeyNotSet,

    #[error("Contract address not set")]
    ContractAddressNotSet,

    /// The configured factory address is the zero address.
    #[error("Factory address not set")]
    FactoryAddressNotSet,

    #[error("{0} contract is not connected")]
    NotConnected(ContractKind),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("invalid wallet key: {0}")]
    InvalidKey(String),

    #[error("on-chain value {0} does not fit into u64")]
    Overflow(U256),

    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Known revert of the leaderboard contracts.
    #[error(transparent)]
    Revert(#[from] Revert),

    /// Any other contract call failure, as reported by the provider.
    #[error("contract error: {0}")]
    Contract(alloy::contract::Error),

    #[error("transport error: {0}")]
    Transport(#[from] alloy::transports::TransportError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("indexer error: {0}")]
    Indexer(String),
}

impl From<alloy::contract::Error> for LeaderboardError {
    fn from(err: alloy::contract::Error) -> Self {
        match err
            .as_revert_data()
            .and_then(|data| Revert::from_revert_data(&data))
        {
            Some(revert) => LeaderboardError::Revert(revert),
            None => LeaderboardError::Contract(err),
        }
    }
}

/// Custom errors the leaderboard contract reverts with.
///
/// Each variant is identified by the 4-byte selector of the corresponding
/// parameterless Solidity error, which must match the revert data exactly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum Revert {
    #[error("Leaderboard already created")]
    LeaderboardAlreadyCreated,

    #[error("Leaderboard not created")]
    LeaderboardNotCreated,

    #[error("Score already set for this player")]
    ScoreAlreadySet,

    #[error("Cannot decrement score below zero")]
    ScoreUnderflow,

    #[error("Score not set for this player")]
    ScoreNotSet,

    #[error("Leaderboard has not started yet")]
    LeaderboardNotStarted,

    #[error("Leaderboard has ended")]
    LeaderboardEnded,

    #[error("Leaderboard capacity reached")]
    LeaderboardFull,
}

impl Revert {
    pub const ALL: [Revert; 8] = [
        Revert::LeaderboardAlreadyCreated,
        Revert::LeaderboardNotCreated,
        Revert::ScoreAlreadySet,
        Revert::ScoreUnderflow,
        Revert::ScoreNotSet,
        Revert::LeaderboardNotStarted,
        Revert::LeaderboardEnded,
        Revert::LeaderboardFull,
    ];

    /// Selector of the Solidity error.
    pub fn selector(&self) -> FixedBytes<4> {
        match self {
            Revert::LeaderboardAlreadyCreated => fixed_bytes!("ce967011"),
            Revert::LeaderboardNotCreated => fixed_bytes!("72f68b1f"),
            Revert::ScoreAlreadySet => fixed_bytes!("a741a045"),
            Revert::ScoreUnderflow => fixed_bytes!("4456a11e"),
            Revert::ScoreNotSet => fixed_bytes!("441dfbd6"),
            Revert::LeaderboardNotStarted => fixed_bytes!("b8b000dd"),
            Revert::LeaderboardEnded => fixed_bytes!("9fde1257"),
            Revert::LeaderboardFull => fixed_bytes!("929fcbb9"),
        }
    }

    /// Matches raw revert data against the known selectors.
    pub fn from_revert_data(data: &[u8]) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|revert| revert.selector().as_slice() == data)
    }
}
