//! Leaderboard SDK.
//!
//! # Overview
//!
//! Thin client of the on-chain leaderboard contracts and of the leaderboard
//! indexer.
//!
//! Use [`LeaderboardSdk`] to deploy leaderboard contracts through the
//! factory, create and update leaderboards, submit score batches and read
//! rankings. Call [`LeaderboardSdk::factory_connect`] or
//! [`LeaderboardSdk::leaderboard_connect`] before using the operations of the
//! respective contract.
//!
//! Paginated score listings come from the indexer, see
//! [`LeaderboardSdk::list_leaderboards`].
//!
//! # Error reporting
//!
//! Writes and a few reads return [`error::LeaderboardError`], with known
//! contract reverts translated to [`error::Revert`]. Most reads swallow
//! failures and return an empty value instead, matching the contract
//! semantics of "no data".
//!
//! # Features
//!
//! | Feature | Default | Description |
//! | --- | --- | --- |
//! | `display` | yes | Enables [`std::fmt::Display`] implementation for result types. |
//! | `testing` | yes | Enables [`testing`] module. |
//!
//! # Testing
//!
//! [`testing`] module provides a stub HTTP transport and a mocked chain
//! provider, so the SDK can be exercised without network access.

pub mod abi;
pub mod error;
pub mod indexer;
pub mod profile;
pub mod sdk;
#[cfg(feature = "testing")]
pub mod testing;
pub mod transport;
pub mod types;

use std::{fmt::Display, str::FromStr};

use alloy::primitives::Address;
pub use sdk::LeaderboardSdk;

/// Named deployment target.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Environment {
    /// B3 Sepolia testnet.
    #[default]
    Dev,
    /// B3 mainnet.
    Prod,
}

impl Environment {
    pub fn config(&self) -> Config {
        match self {
            Environment::Dev => Config::dev(),
            Environment::Prod => Config::prod(),
        }
    }
}

impl FromStr for Environment {
    type Err = error::LeaderboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dev" => Ok(Environment::Dev),
            "prod" => Ok(Environment::Prod),
            _ => Err(error::LeaderboardError::InvalidArgument(format!(
                "unknown environment: {s}, expected `dev` or `prod`"
            ))),
        }
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Dev => write!(f, "dev"),
            Environment::Prod => write!(f, "prod"),
        }
    }
}

// TODO: factory addresses, indexer endpoints and the profile service of the
// B3 deployments are not published yet; pass them with `Config::custom` until
// they are.
const B3_SEPOLIA_CHAIN_ID: u64 = 1993;
const B3_SEPOLIA_RPC_URL: &str = "https://sepolia.b3.fun/http";
const B3_SEPOLIA_LEADERBOARD_FACTORY: Address = Address::ZERO;
const B3_SEPOLIA_INDEXER_URL: &str = "";

const B3_MAINNET_CHAIN_ID: u64 = 8333;
const B3_MAINNET_RPC_URL: &str = "https://mainnet-rpc.b3.fun/http";
const B3_MAINNET_LEADERBOARD_FACTORY: Address = Address::ZERO;
const B3_MAINNET_INDEXER_URL: &str = "";

const B3_PROFILES_URL: &str = "";

#[derive(Clone, Debug, PartialEq, Eq)]
/// Chain and services the SDK is operating on.
pub struct Config {
    chain_id: u64,
    rpc_url: String,
    leaderboard_factory: Address,
    indexer_url: String,
    profiles_url: String,
}

impl Config {
    pub fn dev() -> Self {
        Self {
            chain_id: B3_SEPOLIA_CHAIN_ID,
            rpc_url: B3_SEPOLIA_RPC_URL.to_string(),
            leaderboard_factory: B3_SEPOLIA_LEADERBOARD_FACTORY,
            indexer_url: B3_SEPOLIA_INDEXER_URL.to_string(),
            profiles_url: B3_PROFILES_URL.to_string(),
        }
    }

    pub fn prod() -> Self {
        Self {
            chain_id: B3_MAINNET_CHAIN_ID,
            rpc_url: B3_MAINNET_RPC_URL.to_string(),
            leaderboard_factory: B3_MAINNET_LEADERBOARD_FACTORY,
            indexer_url: B3_MAINNET_INDEXER_URL.to_string(),
            profiles_url: B3_PROFILES_URL.to_string(),
        }
    }

    pub fn custom(
        chain_id: u64,
        rpc_url: impl Into<String>,
        leaderboard_factory: Address,
        indexer_url: impl Into<String>,
        profiles_url: impl Into<String>,
    ) -> Self {
        Self {
            chain_id,
            rpc_url: rpc_url.into(),
            leaderboard_factory,
            indexer_url: indexer_url.into(),
            profiles_url: profiles_url.into(),
        }
    }

    pub fn chain_id(&self) -> u64 { self.chain_id }

    /// Endpoint of the default HTTP provider used by the connect operations.
    pub fn rpc_url(&self) -> &str { &self.rpc_url }

    pub fn leaderboard_factory(&self) -> Address { self.leaderboard_factory }

    /// GraphQL endpoint of the leaderboard indexer.
    pub fn indexer_url(&self) -> &str { &self.indexer_url }

    /// Profile service used to hydrate leaderboards with usernames and
    /// avatars.
    pub fn profiles_url(&self) -> &str { &self.profiles_url }
}
