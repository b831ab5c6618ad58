use std::time::Duration;

use alloy::primitives::{Address, TxHash};
use anyhow::Context;
use colored::Colorize;
use leaderboard_sdk::{LeaderboardSdk, error::LeaderboardError};

const RECEIPT_POLL_INTERVAL: Duration = Duration::from_secs(2);
const RECEIPT_POLL_ATTEMPTS: usize = 60;

pub(crate) fn render(
    operation: &str,
    result: Result<TxHash, LeaderboardError>,
) -> anyhow::Result<()> {
    let tx_hash = result.with_context(|| operation.to_string())?;
    print_submitted(operation, tx_hash);
    Ok(())
}

fn print_submitted(operation: &str, tx_hash: TxHash) {
    println!("{} {}", format!("**** {operation}").bright_blue(), tx_hash);
}

pub(crate) async fn deploy(
    sdk: &LeaderboardSdk,
    admin: Address,
    label: &str,
    wait: bool,
) -> anyhow::Result<()> {
    let tx_hash = sdk
        .deploy_leaderboard_contract(admin, label)
        .await
        .context("deployLeaderboardContract")?;
    print_submitted("deployLeaderboardContract", tx_hash);
    if !wait {
        return Ok(());
    }

    for _ in 0..RECEIPT_POLL_ATTEMPTS {
        tokio::time::sleep(RECEIPT_POLL_INTERVAL).await;
        if let Some(address) = sdk.deployed_leaderboard_address(tx_hash).await? {
            println!("{} {}", "Leaderboard contract:".green(), address);
            return Ok(());
        }
    }
    anyhow::bail!("transaction {tx_hash} not mined after {RECEIPT_POLL_ATTEMPTS} attempts")
}
