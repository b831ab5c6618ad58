use alloy::{
    primitives::{Address, TxHash},
    providers::Provider,
};
use alloy_sol_types::SolEvent;

use super::{LeaderboardSdk, submit};
use crate::{
    abi::factory::LeaderboardFactory::LeaderBoardCreated, error::LeaderboardError,
    transport::HttpTransport,
};

impl<H: HttpTransport> LeaderboardSdk<H> {
    /// Deploys a new leaderboard contract administered by `admin` and indexed
    /// by `label` in the factory.
    ///
    /// Use [`Self::deployed_leaderboard_address`] once the transaction is
    /// mined to learn the address of the new contract.
    pub async fn deploy_leaderboard_contract(
        &self,
        admin: Address,
        label: &str,
    ) -> Result<TxHash, LeaderboardError> {
        let factory = self.signing_factory()?;
        submit(
            factory.deployLeaderboardContract(admin, label.to_string()),
            "deployLeaderboardContract",
        )
        .await
    }

    /// Address of the leaderboard contract the factory deployed for `label`.
    ///
    /// The factory reports the zero address for unknown labels.
    pub async fn get_leader_boards(&self, label: &str) -> Result<Address, LeaderboardError> {
        Ok(self
            .factory()?
            .getLeaderBoards(label.to_string())
            .call()
            .await?)
    }

    /// Address of the leaderboard contract created by the deployment
    /// transaction, from its `LeaderBoardCreated` event.
    ///
    /// `None` while the transaction is not mined yet, or if it did not
    /// deploy a leaderboard contract.
    pub async fn deployed_leaderboard_address(
        &self,
        tx_hash: TxHash,
    ) -> Result<Option<Address>, LeaderboardError> {
        let factory = self.factory()?;
        let Some(receipt) = factory
            .provider()
            .get_transaction_receipt(tx_hash)
            .await?
        else {
            return Ok(None);
        };
        Ok(receipt
            .inner
            .logs()
            .iter()
            .filter(|log| log.address() == *factory.address())
            .find_map(|log| LeaderBoardCreated::decode_log_data(log.data()).ok())
            .map(|event| event.leaderBoardAddress))
    }
}
