use alloy::primitives::{Address, U256};
use serde::{Deserialize, Serialize};

use crate::error::LeaderboardError;

/// Players of a leaderboard and their scores, in the order the contract
/// returns them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Standings {
    players: Vec<Address>,
    scores: Vec<u64>,
}

impl Standings {
    pub fn new(players: Vec<Address>, scores: Vec<u64>) -> Result<Self, LeaderboardError> {
        if players.len() != scores.len() {
            return Err(LeaderboardError::InvalidArgument(format!(
                "{} players but {} scores",
                players.len(),
                scores.len()
            )));
        }
        Ok(Self { players, scores })
    }

    pub(crate) fn from_chain(
        players: Vec<Address>,
        scores: Vec<U256>,
    ) -> Result<Self, LeaderboardError> {
        let scores = scores
            .into_iter()
            .map(super::narrow)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(players, scores)
    }

    pub fn players(&self) -> &[Address] { &self.players }

    pub fn scores(&self) -> &[u64] { &self.scores }

    pub fn len(&self) -> usize { self.players.len() }

    pub fn is_empty(&self) -> bool { self.players.is_empty() }

    /// Score of the player, if the player is on the leaderboard.
    pub fn score_of(&self, player: Address) -> Option<u64> {
        self.iter()
            .find_map(|(p, score)| (p == player).then_some(score))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Address, u64)> + '_ {
        self.players
            .iter()
            .copied()
            .zip(self.scores.iter().copied())
    }

    pub fn into_parts(self) -> (Vec<Address>, Vec<u64>) { (self.players, self.scores) }
}

#[cfg(feature = "display")]
impl std::fmt::Display for Standings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use tabled::{Table, Tabled, settings::Style};

        #[derive(Tabled)]
        struct Row {
            #[tabled(rename = "#")]
            rank: usize,
            #[tabled(rename = "Player")]
            player: Address,
            #[tabled(rename = "Score")]
            score: u64,
        }

        let mut table = Table::new(
            self.iter()
                .enumerate()
                .map(|(i, (player, score))| Row { rank: i + 1, player, score }),
        );
        table.with(Style::sharp());
        write!(f, "{table}")
    }
}

/// Leaderboard entry joined with the player's profile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileInfo {
    pub wallet: Address,
    pub score: u64,
    pub username: Option<String>,
    pub avatar: Option<String>,
}

#[cfg(test)]
mod tests {
    use alloy::primitives::address;

    use super::*;

    #[test]
    fn test_standings() {
        let alice = address!("0xDaed2A2b14d9769eAC43c63121718af7ca4Ac5D1");
        let bob = address!("0xD0501094c315899D15fbF1FC6d7F814049cFb8d7");

        let standings =
            Standings::from_chain(vec![alice, bob], vec![U256::from(2000), U256::from(1000)])
                .unwrap();
        assert_eq!(standings.len(), 2);
        assert_eq!(standings.scores(), &[2000, 1000]);
        assert_eq!(standings.score_of(bob), Some(1000));
        assert_eq!(standings.score_of(Address::ZERO), None);
        assert_eq!(standings.iter().collect::<Vec<_>>(), vec![(alice, 2000), (bob, 1000)]);

        assert!(Standings::new(vec![alice], vec![]).is_err());
        assert!(Standings::from_chain(vec![alice], vec![U256::MAX]).is_err());
        assert!(Standings::default().is_empty());
    }
}
