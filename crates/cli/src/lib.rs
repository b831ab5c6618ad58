pub mod args;
mod list;
mod show;
mod tx;

use alloy::{
    primitives::Address,
    providers::{Provider, ProviderBuilder},
};
use anyhow::Context;
use args::Cli;
use leaderboard_sdk::{Config, LeaderboardSdk, error::ContractKind};

use crate::args::Commands;

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = config(&cli).await?;
    let mut sdk = LeaderboardSdk::with_config(config, cli.key.as_deref(), cli.contract.as_deref());

    match contract_of(&cli.command) {
        Some(ContractKind::Factory) => {
            if sdk.config().leaderboard_factory() == Address::ZERO {
                anyhow::bail!(
                    "factory address of `{}` environment is not known, see `--factory`",
                    cli.env
                );
            }
            if !sdk.factory_connect(None) {
                anyhow::bail!("connecting to factory contract failed");
            }
        },
        Some(ContractKind::Leaderboard) => {
            if sdk.leaderboard_address().is_none() {
                anyhow::bail!("leaderboard contract address is required, see `--contract`");
            }
            if !sdk.leaderboard_connect(None) {
                anyhow::bail!("connecting to leaderboard contract failed");
            }
        },
        None => {},
    }

    match cli.command {
        Commands::Deploy { admin, label, wait } => tx::deploy(&sdk, admin, &label, wait).await?,
        Commands::Address { label } => show::address(&sdk, &label).await?,
        Commands::Deployed { tx_hash } => show::deployed(&sdk, tx_hash).await?,
        Commands::Create { label, schedule } => tx::render(
            "createLeaderboard",
            sdk.create_leaderboard(&label, schedule.max_limit, schedule.start, schedule.end)
                .await,
        )?,
        Commands::Update { label, schedule } => tx::render(
            "updateLeaderboard",
            sdk.update_leaderboard(&label, schedule.max_limit, schedule.start, schedule.end)
                .await,
        )?,
        Commands::SetScore { label, scores } => {
            let (players, values) = args::split_scores(&scores);
            tx::render("setScoresBatch", sdk.set_score(&label, &players, &values).await)?
        },
        Commands::Increment { label, scores } => {
            let (players, values) = args::split_scores(&scores);
            tx::render(
                "incrementScoresBatch",
                sdk.increment_score(&label, &players, &values).await,
            )?
        },
        Commands::Decrement { label, scores } => {
            let (players, values) = args::split_scores(&scores);
            tx::render(
                "decrementScoresBatch",
                sdk.decrement_score(&label, &players, &values).await,
            )?
        },
        Commands::AddAdmin { admin } => tx::render("addAdmin", sdk.add_admin(admin).await)?,
        Commands::RemoveAdmin { admin } => {
            tx::render("removeAdmin", sdk.remove_admin(admin).await)?
        },
        Commands::Show { label, hydrated, top } => {
            show::standings(&sdk, &label, hydrated, top).await
        },
        Commands::Info { label } => show::record(&sdk, &label).await?,
        Commands::Score { label, player } => show::score(&sdk, &label, player).await,
        Commands::Admins => show::admins(&sdk).await,
        Commands::List { label, page, page_size } => {
            let contract = sdk
                .leaderboard_address()
                .context("leaderboard contract address is required, see `--contract`")?
                .to_string();
            list::render(&sdk, &label, &contract, page, page_size).await?
        },
    }

    Ok(())
}

/// Configuration of the selected environment with command line overrides
/// applied.
///
/// A custom RPC endpoint may serve another chain, so its chain ID is queried.
async fn config(cli: &Cli) -> anyhow::Result<Config> {
    let defaults = cli.env.config();
    let (chain_id, rpc_url) = match &cli.rpc {
        Some(rpc) => {
            let provider =
                ProviderBuilder::new().connect_http(rpc.parse().context("parsing RPC URL")?);
            (provider.get_chain_id().await.context("fetching chain ID")?, rpc.clone())
        },
        None => (defaults.chain_id(), defaults.rpc_url().to_string()),
    };
    Ok(Config::custom(
        chain_id,
        rpc_url,
        cli.factory.unwrap_or(defaults.leaderboard_factory()),
        cli.indexer
            .clone()
            .unwrap_or_else(|| defaults.indexer_url().to_string()),
        cli.profiles
            .clone()
            .unwrap_or_else(|| defaults.profiles_url().to_string()),
    ))
}

/// Contract the command operates on, if any.
fn contract_of(command: &Commands) -> Option<ContractKind> {
    match command {
        Commands::Deploy { .. } | Commands::Address { .. } | Commands::Deployed { .. } => {
            Some(ContractKind::Factory)
        },
        Commands::List { .. } => None,
        _ => Some(ContractKind::Leaderboard),
    }
}
