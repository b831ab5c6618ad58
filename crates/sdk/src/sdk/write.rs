use alloy::{
    contract::SolCallBuilder,
    primitives::{Address, TxHash},
    providers::DynProvider,
};

use super::{LeaderboardSdk, submit};
use crate::{
    abi::leaderboard::Leaderboard,
    error::LeaderboardError,
    transport::HttpTransport,
    types::{widen, widen_batch},
};

/// Leaderboard contract writes.
///
/// Each write checks, in order, that the signing key is set, the
/// leaderboard address is set and the contract is connected, and only then
/// submits a single transaction. Batches are submitted as one transaction
/// and either apply fully or revert fully.
impl<H: HttpTransport> LeaderboardSdk<H> {
    pub async fn add_admin(&self, admin: Address) -> Result<TxHash, LeaderboardError> {
        let leaderboard = self.signing_leaderboard()?;
        submit(leaderboard.addAdmin(admin), "addAdmin").await
    }

    pub async fn remove_admin(&self, admin: Address) -> Result<TxHash, LeaderboardError> {
        let leaderboard = self.signing_leaderboard()?;
        submit(leaderboard.removeAdmin(admin), "removeAdmin").await
    }

    /// Creates leaderboard `label` accepting up to `max_limit` players
    /// between `start_time` and `end_time` (unix seconds).
    pub async fn create_leaderboard(
        &self,
        label: &str,
        max_limit: u64,
        start_time: u64,
        end_time: u64,
    ) -> Result<TxHash, LeaderboardError> {
        let leaderboard = self.signing_leaderboard()?;
        submit(
            leaderboard.createLeaderboard(
                label.to_string(),
                widen(max_limit),
                widen(start_time),
                widen(end_time),
            ),
            "createLeaderboard",
        )
        .await
    }

    pub async fn update_leaderboard(
        &self,
        label: &str,
        max_limit: u64,
        start_time: u64,
        end_time: u64,
    ) -> Result<TxHash, LeaderboardError> {
        let leaderboard = self.signing_leaderboard()?;
        submit(
            leaderboard.updateLeaderboard(
                label.to_string(),
                widen(max_limit),
                widen(start_time),
                widen(end_time),
            ),
            "updateLeaderboard",
        )
        .await
    }

    /// Sets initial scores of `players`.
    ///
    /// Reverts with [`crate::error::Revert::ScoreAlreadySet`] if any of the
    /// players already has a score.
    pub async fn set_score(
        &self,
        label: &str,
        players: &[Address],
        scores: &[u64],
    ) -> Result<TxHash, LeaderboardError> {
        submit(self.set_score_call(label, players, scores)?, "setScoresBatch").await
    }

    pub async fn increment_score(
        &self,
        label: &str,
        players: &[Address],
        increments: &[u64],
    ) -> Result<TxHash, LeaderboardError> {
        submit(
            self.increment_score_call(label, players, increments)?,
            "incrementScoresBatch",
        )
        .await
    }

    /// Reverts with [`crate::error::Revert::ScoreUnderflow`] if any score
    /// would go below zero.
    pub async fn decrement_score(
        &self,
        label: &str,
        players: &[Address],
        decrements: &[u64],
    ) -> Result<TxHash, LeaderboardError> {
        submit(
            self.decrement_score_call(label, players, decrements)?,
            "decrementScoresBatch",
        )
        .await
    }

    fn set_score_call(
        &self,
        label: &str,
        players: &[Address],
        scores: &[u64],
    ) -> Result<LeaderboardCall<'_, Leaderboard::setScoresBatchCall>, LeaderboardError> {
        let leaderboard = self.signing_leaderboard()?;
        let scores = widen_batch(players, scores)?;
        Ok(leaderboard.setScoresBatch(label.to_string(), players.to_vec(), scores))
    }

    fn increment_score_call(
        &self,
        label: &str,
        players: &[Address],
        increments: &[u64],
    ) -> Result<LeaderboardCall<'_, Leaderboard::incrementScoresBatchCall>, LeaderboardError> {
        let leaderboard = self.signing_leaderboard()?;
        let increments = widen_batch(players, increments)?;
        Ok(leaderboard.incrementScoresBatch(label.to_string(), players.to_vec(), increments))
    }

    fn decrement_score_call(
        &self,
        label: &str,
        players: &[Address],
        decrements: &[u64],
    ) -> Result<LeaderboardCall<'_, Leaderboard::decrementScoresBatchCall>, LeaderboardError> {
        let leaderboard = self.signing_leaderboard()?;
        let decrements = widen_batch(players, decrements)?;
        Ok(leaderboard.decrementScoresBatch(label.to_string(), players.to_vec(), decrements))
    }
}

/// Unsent call of the leaderboard contract.
type LeaderboardCall<'a, C> = SolCallBuilder<&'a DynProvider, C>;

#[cfg(test)]
mod tests {
    use alloy::primitives::{U256, address};
    use alloy_sol_types::SolCall;

    use super::*;

    const KEY: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
    const CONTRACT: &str = "0xF577588bF5B0AF78Cb92711C3Eb66e03383af275";
    const ALICE: Address = address!("0xDaed2A2b14d9769eAC43c63121718af7ca4Ac5D1");
    const BOB: Address = address!("0xD0501094c315899D15fbF1FC6d7F814049cFb8d7");

    fn connected() -> LeaderboardSdk {
        let mut sdk = LeaderboardSdk::new(crate::Environment::Dev, Some(KEY), Some(CONTRACT));
        assert!(sdk.leaderboard_connect(None));
        sdk
    }

    #[test]
    fn test_score_batch_calldata() {
        let sdk = connected();
        let players = [ALICE, BOB];

        let call = sdk
            .set_score_call("weekly", &players, &[2000, u64::MAX])
            .unwrap();
        let decoded = Leaderboard::setScoresBatchCall::abi_decode(call.calldata()).unwrap();
        assert_eq!(decoded.label, "weekly");
        assert_eq!(decoded.players, players);
        assert_eq!(decoded.scores, vec![U256::from(2000), U256::from(u64::MAX)]);

        let call = sdk.increment_score_call("weekly", &players, &[10, 20]).unwrap();
        let decoded = Leaderboard::incrementScoresBatchCall::abi_decode(call.calldata()).unwrap();
        assert_eq!(decoded.increments, vec![U256::from(10), U256::from(20)]);

        let call = sdk.decrement_score_call("weekly", &players, &[1, 2]).unwrap();
        let decoded = Leaderboard::decrementScoresBatchCall::abi_decode(call.calldata()).unwrap();
        assert_eq!(decoded.decrements, vec![U256::from(1), U256::from(2)]);
        assert_eq!(call.calldata()[..4], Leaderboard::decrementScoresBatchCall::SELECTOR);
    }

    #[test]
    fn test_score_batch_checks_precede_encoding() {
        let sdk = connected();
        assert!(matches!(
            sdk.set_score_call("weekly", &[ALICE], &[1, 2]),
            Err(LeaderboardError::InvalidArgument(_))
        ));

        let unsigned = LeaderboardSdk::new(crate::Environment::Dev, None, Some(CONTRACT));
        assert!(matches!(
            unsigned.set_score_call("weekly", &[ALICE], &[1, 2]),
            Err(LeaderboardError::WalletKeyNotSet)
        ));
    }
}
