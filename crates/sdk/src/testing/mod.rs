//! Offline test environment.
//!
//! [`StubHttp`] stands in for the indexer and the profile service,
//! [`mocked_provider`] for the chain RPC. Contract call results are queued on
//! an [`Asserter`] in call order, see [`returns`] for encoders of the
//! leaderboard contract return values.

mod chain;
mod http;

pub use alloy::transports::mock::Asserter;
pub use chain::{mocked_provider, returns};
pub use http::{StubHttp, StubRequest};
