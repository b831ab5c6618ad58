use alloy::primitives::{Address, TxHash};
use anyhow::Context;
use colored::Colorize;
use leaderboard_sdk::{LeaderboardSdk, types::ProfileInfo};
use tabled::{Table, Tabled, settings::Style};

pub(crate) async fn address(sdk: &LeaderboardSdk, label: &str) -> anyhow::Result<()> {
    let address = sdk
        .get_leader_boards(label)
        .await
        .context("getLeaderBoards")?;
    if address == Address::ZERO {
        println!("{}", format!("No leaderboard contract for \"{label}\"").yellow());
    } else {
        println!("{address}");
    }
    Ok(())
}

pub(crate) async fn deployed(sdk: &LeaderboardSdk, tx_hash: TxHash) -> anyhow::Result<()> {
    match sdk
        .deployed_leaderboard_address(tx_hash)
        .await
        .context("fetching receipt")?
    {
        Some(address) => println!("{address}"),
        None => println!(
            "{}",
            format!("Transaction {tx_hash} is not mined or deployed no leaderboard").yellow()
        ),
    }
    Ok(())
}

pub(crate) async fn standings(sdk: &LeaderboardSdk, label: &str, hydrated: bool, top: Option<u64>) {
    println!("{}\n", format!("{:#^96}", format!(" {label} ")).bold().purple());

    if hydrated {
        let profiles = sdk.get_hydrated_leaderboard(label).await;
        if profiles.is_empty() {
            println!("{}", "No scores".yellow());
        } else {
            println!("{}", profiles_table(&profiles));
        }
        return;
    }

    let standings = match top {
        Some(percentage) => sdk.get_top_percentage(label, percentage).await,
        None => sdk.get_leaderboard(label).await,
    };
    if standings.is_empty() {
        println!("{}", "No scores".yellow());
    } else {
        println!("{standings}");
    }
}

pub(crate) async fn record(sdk: &LeaderboardSdk, label: &str) -> anyhow::Result<()> {
    let record = sdk
        .get_leaderboard_record(label)
        .await
        .context("reading leaderboard")?;
    println!("{record:#}");
    Ok(())
}

pub(crate) async fn score(sdk: &LeaderboardSdk, label: &str, player: Address) {
    match sdk.get_score(label, player).await {
        Some(score) => println!("{player}: {}", score.to_string().green()),
        None => println!("{}", format!("No score for {player}").yellow()),
    }
}

pub(crate) async fn admins(sdk: &LeaderboardSdk) {
    let admins = sdk.get_admins().await;
    if admins.is_empty() {
        println!("{}", "No admins".yellow());
    }
    for admin in admins {
        println!("{admin}");
    }
}

fn profiles_table(profiles: &[ProfileInfo]) -> Table {
    #[derive(Tabled)]
    struct Row {
        #[tabled(rename = "#")]
        rank: usize,
        #[tabled(rename = "Player")]
        wallet: Address,
        #[tabled(rename = "Username")]
        username: String,
        #[tabled(rename = "Score")]
        score: u64,
        #[tabled(rename = "Avatar")]
        avatar: String,
    }

    let mut table = Table::new(profiles.iter().enumerate().map(|(i, profile)| Row {
        rank: i + 1,
        wallet: profile.wallet,
        username: profile.username.clone().unwrap_or_else(|| "-".dimmed().to_string()),
        score: profile.score,
        avatar: profile.avatar.clone().unwrap_or_default(),
    }));
    table.with(Style::sharp());
    table
}
