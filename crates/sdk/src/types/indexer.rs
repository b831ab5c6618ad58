use std::fmt;

use alloy::primitives::U256;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Result of the leaderboard listing query.
///
/// Every type here keeps the fields it does not name in `extra`, so a response
/// serializes back to the JSON the indexer sent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListLeaderboardsResponse {
    /// Leaderboard metadata, absent if the indexer does not know the label.
    pub get_leaderboard_by_label: Option<IndexedLeaderboard>,
    pub get_scores: ScoresPage,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Leaderboard metadata as indexed from contract events.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexedLeaderboard {
    pub contract_address: String,
    pub label: String,
    pub is_active: bool,
    pub max_limit: IndexedUint,
    pub start_time: IndexedUint,
    pub end_time: IndexedUint,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Single page of scores.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoresPage {
    pub page_info: PageInfo,
    pub scores: Vec<IndexedScore>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub has_next_page: bool,
    pub has_previous_page: bool,
    pub page_number: IndexedUint,
    pub page_size: IndexedUint,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexedScore {
    pub contract_address: String,
    pub leaderboard_label: String,
    pub player_address: String,
    pub rank: IndexedUint,
    pub score: IndexedUint,
    pub updated_at: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Unsigned integer in the encoding the indexer chose for it.
///
/// GraphQL servers commonly send `uint256` columns as decimal strings and
/// small integers as JSON numbers. Both are kept as received.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IndexedUint {
    Number(serde_json::Number),
    String(String),
}

impl IndexedUint {
    /// Value as an on-chain integer, `None` if it is not a decimal unsigned
    /// integer.
    pub fn to_u256(&self) -> Option<U256> {
        match self {
            Self::Number(number) => number.as_u64().map(U256::from),
            Self::String(digits) => U256::from_str_radix(digits, 10).ok(),
        }
    }

    /// Value as a `u64`, `None` if it does not fit.
    pub fn to_u64(&self) -> Option<u64> { self.to_u256().and_then(|value| value.try_into().ok()) }
}

impl From<u64> for IndexedUint {
    fn from(value: u64) -> Self { Self::Number(value.into()) }
}

impl fmt::Display for IndexedUint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(number) => write!(f, "{number}"),
            Self::String(digits) => f.write_str(digits),
        }
    }
}
