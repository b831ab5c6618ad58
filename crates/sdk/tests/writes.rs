use alloy::{
    primitives::{Address, TxHash, address, b256},
    rpc::json_rpc::ErrorPayload,
};
use leaderboard_sdk::{
    Config, Environment, LeaderboardSdk,
    error::{ContractKind, LeaderboardError, Revert},
    testing::{self, Asserter},
};
use serde_json::json;

const KEY: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
const CONTRACT: &str = "0xF577588bF5B0AF78Cb92711C3Eb66e03383af275";
const LABEL: &str = "TEST LEADERBOARD";
const ALICE: Address = address!("0xDaed2A2b14d9769eAC43c63121718af7ca4Ac5D1");
const BOB: Address = address!("0xD0501094c315899D15fbF1FC6d7F814049cFb8d7");
const FACTORY: Address = address!("0x5FbDB2315678afecb367f032d93F642f64180aa3");
const TX_HASH: TxHash = b256!("0x8c7e2a1f6d0b5c4e3a29180f7e6d5c4b3a2918076f5e4d3c2b1a09f8e7d6c5b4");

fn config() -> Config {
    Config::custom(1993, "http://localhost:8545", FACTORY, "", "")
}

/// Queues the responses to the requests of one signed submission: gas
/// estimate, fee history, nonce, then the raw transaction broadcast.
fn queue_submission(asserter: &Asserter, tx_hash: TxHash) {
    asserter.push_success(&"0x5208");
    asserter.push_success(&json!({
        "oldestBlock": "0x1",
        "baseFeePerGas": ["0x3b9aca00", "0x3b9aca00"],
        "gasUsedRatio": [0.5],
        "reward": [["0x3b9aca00"]]
    }));
    asserter.push_success(&"0x0");
    asserter.push_success(&tx_hash);
}

/// Every write of the SDK, in declaration order.
async fn all_writes(sdk: &LeaderboardSdk) -> Vec<Result<TxHash, LeaderboardError>> {
    vec![
        sdk.deploy_leaderboard_contract(ALICE, LABEL).await,
        sdk.add_admin(ALICE).await,
        sdk.remove_admin(ALICE).await,
        sdk.create_leaderboard(LABEL, 100, 0, 9_007_199_254_740_991).await,
        sdk.update_leaderboard(LABEL, 200, 0, 9_007_199_254_740_991).await,
        sdk.set_score(LABEL, &[ALICE, BOB], &[2000, 1000]).await,
        sdk.increment_score(LABEL, &[ALICE, BOB], &[10, 20]).await,
        sdk.decrement_score(LABEL, &[ALICE, BOB], &[1, 2]).await,
    ]
}

/// Tests that writes fail on the missing key before touching the network.
#[tokio::test]
async fn test_writes_require_wallet_key() {
    // Nothing is queued, so any RPC request would fail with a transport error
    let asserter = Asserter::new();
    let mut sdk = LeaderboardSdk::with_config(config(), None, Some(CONTRACT));
    assert!(sdk.factory_connect(Some(testing::mocked_provider(&asserter))));
    assert!(sdk.leaderboard_connect(Some(testing::mocked_provider(&asserter))));

    let results = all_writes(&sdk).await;
    assert_eq!(results.len(), 8);
    for result in results {
        assert!(matches!(result, Err(LeaderboardError::WalletKeyNotSet)), "{result:?}");
    }
}

/// Tests that leaderboard writes fail on the missing contract address before
/// touching the network.
#[tokio::test]
async fn test_leaderboard_writes_require_address() {
    let asserter = Asserter::new();
    let mut sdk = LeaderboardSdk::with_config(config(), Some(KEY), None);
    assert!(sdk.factory_connect(Some(testing::mocked_provider(&asserter))));
    assert!(sdk.leaderboard_connect(Some(testing::mocked_provider(&asserter))));

    let results = all_writes(&sdk).await;
    // Factory deployment does not need a leaderboard address, but fails on
    // the empty mocked transport
    assert!(!matches!(
        results[0],
        Err(LeaderboardError::WalletKeyNotSet | LeaderboardError::ContractAddressNotSet)
    ));
    for result in &results[1..] {
        assert!(matches!(result, Err(LeaderboardError::ContractAddressNotSet)), "{result:?}");
    }
}

#[tokio::test]
async fn test_writes_require_connection() {
    let sdk = LeaderboardSdk::with_config(config(), Some(KEY), Some(CONTRACT));

    let results = all_writes(&sdk).await;
    assert!(matches!(results[0], Err(LeaderboardError::NotConnected(ContractKind::Factory))));
    for result in &results[1..] {
        assert!(
            matches!(result, Err(LeaderboardError::NotConnected(ContractKind::Leaderboard))),
            "{result:?}"
        );
    }
}

#[tokio::test]
async fn test_score_batches_require_equal_lengths() {
    let asserter = Asserter::new();
    let mut sdk = LeaderboardSdk::new(Environment::Dev, Some(KEY), Some(CONTRACT));
    assert!(sdk.leaderboard_connect(Some(testing::mocked_provider(&asserter))));

    for result in [
        sdk.set_score(LABEL, &[ALICE, BOB], &[2000]).await,
        sdk.increment_score(LABEL, &[ALICE], &[10, 20]).await,
        sdk.decrement_score(LABEL, &[], &[1]).await,
    ] {
        assert!(matches!(result, Err(LeaderboardError::InvalidArgument(_))), "{result:?}");
    }
}

/// Tests that nothing is sent to the zero factory address the built-in
/// environments carry until their factories are published.
#[tokio::test]
async fn test_deploy_requires_factory_address() {
    let asserter = Asserter::new();
    queue_submission(&asserter, TX_HASH);
    let mut sdk = LeaderboardSdk::new(Environment::Dev, Some(KEY), None);
    assert!(sdk.factory_connect(Some(testing::mocked_provider(&asserter))));

    assert!(matches!(
        sdk.deploy_leaderboard_contract(ALICE, LABEL).await,
        Err(LeaderboardError::FactoryAddressNotSet)
    ));
    assert!(matches!(
        sdk.get_leader_boards(LABEL).await,
        Err(LeaderboardError::FactoryAddressNotSet)
    ));

    // Queued responses are still there for a configured factory
    let mut sdk = LeaderboardSdk::with_config(config(), Some(KEY), None);
    assert!(sdk.factory_connect(Some(testing::mocked_provider(&asserter))));
    assert_eq!(sdk.deploy_leaderboard_contract(ALICE, LABEL).await.unwrap(), TX_HASH);
}

#[tokio::test]
async fn test_write_returns_broadcast_hash() {
    let asserter = Asserter::new();
    let mut sdk = LeaderboardSdk::with_config(config(), Some(KEY), Some(CONTRACT));
    assert!(sdk.leaderboard_connect(Some(testing::mocked_provider(&asserter))));

    queue_submission(&asserter, TX_HASH);
    assert_eq!(sdk.set_score(LABEL, &[ALICE, BOB], &[2000, 1000]).await.unwrap(), TX_HASH);

    let other = b256!("0x1111111111111111111111111111111111111111111111111111111111111111");
    queue_submission(&asserter, other);
    assert_eq!(sdk.add_admin(BOB).await.unwrap(), other);
}

/// Tests that reverts raised while preparing a write are translated.
#[tokio::test]
async fn test_write_reverts_are_translated() {
    let asserter = Asserter::new();
    let mut sdk = LeaderboardSdk::with_config(config(), Some(KEY), Some(CONTRACT));
    assert!(sdk.leaderboard_connect(Some(testing::mocked_provider(&asserter))));

    let underflow: ErrorPayload = serde_json::from_value(json!({
        "code": 3,
        "message": "execution reverted",
        "data": "0x4456a11e"
    }))
    .unwrap();
    // Any request of the submission may be the one failing
    for _ in 0..8 {
        asserter.push_failure(underflow.clone());
    }

    assert!(matches!(
        sdk.decrement_score(LABEL, &[ALICE], &[5000]).await,
        Err(LeaderboardError::Revert(Revert::ScoreUnderflow))
    ));
}
