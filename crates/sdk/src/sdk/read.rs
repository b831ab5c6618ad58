use alloy::primitives::Address;

use super::{LeaderboardSdk, or_empty};
use crate::{
    error::LeaderboardError,
    indexer, profile,
    transport::HttpTransport,
    types::{self, LeaderboardRecord, ProfileInfo, Standings, narrow, widen},
};

/// Leaderboard contract reads.
///
/// Unless stated otherwise, a read returns its empty value (empty
/// standings, `None`, `false`) when the address is not set, the contract is
/// not connected or the call fails; the cause is logged at debug level.
impl<H: HttpTransport> LeaderboardSdk<H> {
    /// Players and scores of leaderboard `label`.
    ///
    /// Performs no call at all when the leaderboard address is not set.
    pub async fn get_leaderboard(&self, label: &str) -> Standings {
        if self.leaderboard_address.is_none() {
            return Standings::default();
        }
        or_empty("getLeaderboard", self.try_get_leaderboard(label).await)
    }

    pub async fn get_score(&self, label: &str, player: Address) -> Option<u64> {
        let score = async {
            narrow(
                self.leaderboard()?
                    .getScore(label.to_string(), player)
                    .call()
                    .await?,
            )
        };
        or_empty("getScore", score.await.map(Some))
    }

    pub async fn get_player_count(&self, label: &str) -> Option<u64> {
        let count = async {
            narrow(
                self.leaderboard()?
                    .getPlayerCount(label.to_string())
                    .call()
                    .await?,
            )
        };
        or_empty("getPlayerCount", count.await.map(Some))
    }

    pub async fn get_leaderboard_size(&self, label: &str) -> Option<u64> {
        let size = async {
            narrow(
                self.leaderboard()?
                    .getLeaderboardSize(label.to_string())
                    .call()
                    .await?,
            )
        };
        or_empty("getLeaderboardSize", size.await.map(Some))
    }

    /// Top `percentage` percent of players of leaderboard `label`.
    pub async fn get_top_percentage(&self, label: &str, percentage: u64) -> Standings {
        let top = async {
            let top = self
                .leaderboard()?
                .getTopPercentage(label.to_string(), widen(percentage))
                .call()
                .await?;
            Standings::from_chain(top.players, top.scores)
        };
        or_empty("getTopPercentage", top.await)
    }

    /// Start of leaderboard `label`, unix seconds.
    pub async fn get_leaderboard_start_time(&self, label: &str) -> Option<u64> {
        let time = async {
            narrow(
                self.leaderboard()?
                    .getLeaderboardStartTime(label.to_string())
                    .call()
                    .await?,
            )
        };
        or_empty("getLeaderboardStartTime", time.await.map(Some))
    }

    /// End of leaderboard `label`, unix seconds.
    pub async fn get_leaderboard_end_time(&self, label: &str) -> Option<u64> {
        let time = async {
            narrow(
                self.leaderboard()?
                    .getLeaderboardEndTime(label.to_string())
                    .call()
                    .await?,
            )
        };
        or_empty("getLeaderboardEndTime", time.await.map(Some))
    }

    pub async fn is_leaderboard_active(&self, label: &str) -> bool {
        let active = async {
            Ok::<_, LeaderboardError>(
                self.leaderboard()?
                    .isLeaderboardActive(label.to_string())
                    .call()
                    .await?,
            )
        };
        or_empty("isLeaderboardActive", active.await)
    }

    /// Admins of the leaderboard contract.
    pub async fn get_admins(&self) -> Vec<Address> {
        let admins = async {
            Ok::<_, LeaderboardError>(self.leaderboard()?.getAdmins().call().await?)
        };
        or_empty("getAdmins", admins.await)
    }

    /// Full state of leaderboard `label`, read with concurrent calls.
    ///
    /// Unlike the individual getters, fails with the first error.
    pub async fn get_leaderboard_record(
        &self,
        label: &str,
    ) -> Result<LeaderboardRecord, LeaderboardError> {
        let leaderboard = self.leaderboard()?;
        let (standings, size, player_count, start_time, end_time, active) = futures::try_join!(
            async { leaderboard.getLeaderboard(label.to_string()).call().await },
            async { leaderboard.getLeaderboardSize(label.to_string()).call().await },
            async { leaderboard.getPlayerCount(label.to_string()).call().await },
            async { leaderboard.getLeaderboardStartTime(label.to_string()).call().await },
            async { leaderboard.getLeaderboardEndTime(label.to_string()).call().await },
            async { leaderboard.isLeaderboardActive(label.to_string()).call().await },
        )?;
        Ok(LeaderboardRecord::new(
            label.to_string(),
            Standings::from_chain(standings.players, standings.scores)?,
            narrow(size)?,
            narrow(player_count)?,
            narrow(start_time)?,
            narrow(end_time)?,
            active,
        ))
    }

    /// Standings of leaderboard `label` joined with player profiles.
    ///
    /// Issues one profile service request for all players. Returns an empty
    /// list if any step fails.
    pub async fn get_hydrated_leaderboard(&self, label: &str) -> Vec<ProfileInfo> {
        let hydrated = async {
            let standings = self.try_get_leaderboard(label).await?;
            if standings.is_empty() {
                return Ok(Vec::new());
            }
            let profiles = profile::fetch_profiles(
                &self.http,
                self.config.profiles_url(),
                standings.players(),
            )
            .await?;
            Ok::<_, LeaderboardError>(profile::hydrate(&standings, &profiles))
        };
        or_empty("getHydratedLeaderboard", hydrated.await)
    }

    /// Leaderboard metadata and a page of its scores from the indexer.
    ///
    /// Pages are numbered from 1. Errors are propagated.
    pub async fn list_leaderboards(
        &self,
        label: &str,
        contract_address: &str,
        page_number: u32,
        page_size: u32,
    ) -> Result<types::ListLeaderboardsResponse, LeaderboardError> {
        indexer::list_leaderboards(
            &self.http,
            self.config.indexer_url(),
            indexer::ListLeaderboardsVariables {
                label,
                contract_address,
                page_number,
                page_size,
            },
        )
        .await
    }

    async fn try_get_leaderboard(&self, label: &str) -> Result<Standings, LeaderboardError> {
        let standings = self
            .leaderboard()?
            .getLeaderboard(label.to_string())
            .call()
            .await?;
        Standings::from_chain(standings.players, standings.scores)
    }
}
