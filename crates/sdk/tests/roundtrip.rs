// Round trip against a live deployment.
//
// Ignored by default. The signing account must be an admin of the contract
// and the leaderboard must exist and be active:
//
//   LEADERBOARD_RPC_URL=http://127.0.0.1:8545 \
//   LEADERBOARD_CHAIN_ID=1993 \
//   LEADERBOARD_PRIVATE_KEY=... \
//   LEADERBOARD_CONTRACT=0x... \
//   LEADERBOARD_LABEL=... \
//   cargo test -p leaderboard-sdk --test roundtrip -- --ignored --nocapture

use std::{
    env,
    time::{Duration, SystemTime, UNIX_EPOCH},
};

use alloy::{
    primitives::{Address, TxHash},
    providers::{Provider, ProviderBuilder},
};
use leaderboard_sdk::{Config, LeaderboardSdk};

fn var(name: &str) -> String { env::var(name).unwrap_or_else(|_| panic!("{name} is not set")) }

async fn wait_for_receipt(provider: &impl Provider, tx_hash: TxHash) {
    for _ in 0..60 {
        if let Some(receipt) = provider.get_transaction_receipt(tx_hash).await.unwrap() {
            assert!(receipt.status(), "transaction {tx_hash} reverted");
            return;
        }
        tokio::time::sleep(Duration::from_secs(1)).await;
    }
    panic!("transaction {tx_hash} not mined");
}

#[tokio::test]
#[ignore]
async fn test_score_round_trip() {
    let rpc_url = var("LEADERBOARD_RPC_URL");
    let chain_id = var("LEADERBOARD_CHAIN_ID").parse().unwrap();
    let label = var("LEADERBOARD_LABEL");
    let config = Config::custom(chain_id, rpc_url.as_str(), Address::ZERO, "", "");

    let key = var("LEADERBOARD_PRIVATE_KEY");
    let contract = var("LEADERBOARD_CONTRACT");
    let mut sdk = LeaderboardSdk::with_config(config, Some(&key), Some(&contract));
    assert!(sdk.leaderboard_connect(None));
    let provider = ProviderBuilder::new().connect_http(rpc_url.parse().unwrap());

    // Fresh player on every run
    let nanos = SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_nanos();
    let player = Address::left_padding_from(&nanos.to_be_bytes());
    println!("player: {player}");

    let tx_hash = sdk.set_score(&label, &[player], &[100]).await.unwrap();
    wait_for_receipt(&provider, tx_hash).await;
    assert_eq!(sdk.get_score(&label, player).await, Some(100));

    let tx_hash = sdk.increment_score(&label, &[player], &[50]).await.unwrap();
    wait_for_receipt(&provider, tx_hash).await;
    let tx_hash = sdk.decrement_score(&label, &[player], &[30]).await.unwrap();
    wait_for_receipt(&provider, tx_hash).await;
    assert_eq!(sdk.get_score(&label, player).await, Some(120));

    // Player may fall outside the size limit of a full leaderboard
    let standings = sdk.get_leaderboard(&label).await;
    println!("{standings}");
}
