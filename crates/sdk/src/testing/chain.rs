use alloy::{
    providers::{DynProvider, Provider, ProviderBuilder},
    transports::mock::Asserter,
};

/// Provider answering every RPC request with the next response queued on
/// `asserter`.
pub fn mocked_provider(asserter: &Asserter) -> DynProvider {
    ProviderBuilder::new()
        .disable_recommended_fillers()
        .connect_mocked_client(asserter.clone())
        .erased()
}

/// `eth_call` results of the leaderboard contract getters.
pub mod returns {
    use alloy::primitives::{Address, Bytes, U256};
    use alloy_sol_types::SolValue;

    /// `(address[] players, uint256[] scores)`.
    pub fn standings(players: &[Address], scores: &[u64]) -> Bytes {
        let scores: Vec<U256> = scores.iter().copied().map(U256::from).collect();
        (players.to_vec(), scores).abi_encode_params().into()
    }

    /// `uint256`.
    pub fn uint(value: u64) -> Bytes { (U256::from(value),).abi_encode_params().into() }

    /// `uint256` beyond the `u64` range.
    pub fn huge_uint() -> Bytes { (U256::MAX,).abi_encode_params().into() }

    /// `bool`.
    pub fn boolean(value: bool) -> Bytes { (value,).abi_encode_params().into() }

    /// `address`.
    pub fn address(value: Address) -> Bytes { (value,).abi_encode_params().into() }

    /// `address[]`.
    pub fn addresses(values: &[Address]) -> Bytes { (values.to_vec(),).abi_encode_params().into() }
}
