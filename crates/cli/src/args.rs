use std::str::FromStr;

use alloy::primitives::{Address, TxHash};
use clap::{Parser, Subcommand};
use leaderboard_sdk::Environment;

#[derive(Parser, Debug)]
#[command(name = "leaderboard", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Deployment to operate on (`dev` or `prod`)
    #[arg(long, global = true, default_value_t = Environment::Dev)]
    pub env: Environment,

    /// RPC endpoint to connect to [default: RPC of the selected environment]
    #[arg(long, global = true)]
    pub rpc: Option<String>,

    /// Leaderboard factory contract address [default: factory of the
    /// selected environment]
    #[arg(long, global = true)]
    pub factory: Option<Address>,

    /// GraphQL endpoint of the leaderboard indexer [default: indexer of the
    /// selected environment]
    #[arg(long, global = true)]
    pub indexer: Option<String>,

    /// Profile service endpoint used by `show --hydrated`
    #[arg(long, global = true)]
    pub profiles: Option<String>,

    /// Private key signing transactions, required by writes
    #[arg(long, global = true, env = "LEADERBOARD_PRIVATE_KEY", hide_env_values = true)]
    pub key: Option<String>,

    /// Leaderboard contract address, required by leaderboard operations
    #[arg(long, global = true)]
    pub contract: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Deploy a new leaderboard contract through the factory
    Deploy {
        /// Administrator of the new contract
        admin: Address,
        label: String,
        /// Wait until the transaction is mined and print the new contract
        /// address
        #[arg(long, default_value_t = false)]
        wait: bool,
    },
    /// Show the leaderboard contract deployed for a label
    Address { label: String },
    /// Show the leaderboard contract created by a deployment transaction
    Deployed { tx_hash: TxHash },
    /// Create a leaderboard
    Create {
        label: String,
        #[command(flatten)]
        schedule: Schedule,
    },
    /// Update size limit and time window of a leaderboard
    Update {
        label: String,
        #[command(flatten)]
        schedule: Schedule,
    },
    /// Overwrite player scores
    SetScore {
        label: String,
        /// Scores as `<player address>=<score>`
        #[arg(required = true)]
        scores: Vec<ScoreArg>,
    },
    /// Add to player scores
    Increment {
        label: String,
        /// Amounts as `<player address>=<amount>`
        #[arg(required = true)]
        scores: Vec<ScoreArg>,
    },
    /// Subtract from player scores
    Decrement {
        label: String,
        /// Amounts as `<player address>=<amount>`
        #[arg(required = true)]
        scores: Vec<ScoreArg>,
    },
    /// Grant admin rights on the leaderboard contract
    AddAdmin { admin: Address },
    /// Revoke admin rights on the leaderboard contract
    RemoveAdmin { admin: Address },
    /// Show leaderboard standings
    Show {
        label: String,
        /// Join standings with player profiles
        #[arg(long, default_value_t = false)]
        hydrated: bool,
        /// Show only the top percentage of players
        #[arg(long, conflicts_with = "hydrated")]
        top: Option<u64>,
    },
    /// Show leaderboard state and standings
    Info { label: String },
    /// Show score of a player
    Score { label: String, player: Address },
    /// Show admins of the leaderboard contract
    Admins,
    /// Show leaderboard metadata and a page of scores from the indexer
    List {
        label: String,
        /// Page number, starting from 1
        #[arg(long, default_value_t = 1)]
        page: u32,
        /// Number of scores per page
        #[arg(long, default_value_t = 10)]
        page_size: u32,
    },
}

#[derive(clap::Args, Debug)]
pub struct Schedule {
    /// Maximum number of ranked players
    #[arg(long)]
    pub max_limit: u64,
    /// Start of the leaderboard, unix seconds
    #[arg(long, default_value_t = 0)]
    pub start: u64,
    /// End of the leaderboard, unix seconds
    #[arg(long)]
    pub end: u64,
}

/// Player and value of a score batch entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoreArg {
    pub player: Address,
    pub value: u64,
}

impl FromStr for ScoreArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (player, value) = s
            .split_once('=')
            .ok_or_else(|| format!("expected `<address>=<value>`, got `{s}`"))?;
        Ok(Self {
            player: player
                .trim()
                .parse()
                .map_err(|err| format!("invalid player address `{player}`: {err}"))?,
            value: value
                .trim()
                .parse()
                .map_err(|err| format!("invalid value `{value}`: {err}"))?,
        })
    }
}

/// Splits score batch entries into the players and values arrays.
pub(crate) fn split_scores(scores: &[ScoreArg]) -> (Vec<Address>, Vec<u64>) {
    scores.iter().map(|score| (score.player, score.value)).unzip()
}
