//! Bindings of the leaderboard smart contracts.
//!
//! Both contracts are deployed per [`crate::Environment`]: one factory per
//! chain, and one leaderboard contract per factory deployment, each holding
//! any number of labeled leaderboards.

pub mod factory {
    alloy::sol! {
        /// Deploys leaderboard contracts and indexes them by label.
        #[sol(rpc)]
        #[derive(Debug)]
        contract LeaderboardFactory {
            event LeaderBoardCreated(
                address indexed leaderBoardAddress,
                address indexed admin,
                string label
            );

            function deployLeaderboardContract(address _admin, string memory _label)
                external
                returns (address);

            function getLeaderBoards(string memory _label) external view returns (address);

            function leaderBoards(string memory label)
                external
                view
                returns (address leaderBoardAddress);
        }
    }
}

pub mod leaderboard {
    alloy::sol! {
        /// Labeled ranking tables with per-player scores.
        #[sol(rpc)]
        #[derive(Debug)]
        contract Leaderboard {
            function createLeaderboard(
                string memory label,
                uint256 maxLimit,
                uint256 startTime,
                uint256 endTime
            ) external;

            function updateLeaderboard(
                string memory label,
                uint256 maxLimit,
                uint256 startTime,
                uint256 endTime
            ) external;

            function setScoresBatch(
                string memory label,
                address[] memory players,
                uint256[] memory scores
            ) external;

            function incrementScoresBatch(
                string memory label,
                address[] memory players,
                uint256[] memory increments
            ) external;

            function decrementScoresBatch(
                string memory label,
                address[] memory players,
                uint256[] memory decrements
            ) external;

            function getLeaderboard(string memory label)
                external
                view
                returns (address[] memory players, uint256[] memory scores);

            function getScore(string memory label, address player) external view returns (uint256);

            function getPlayerCount(string memory label) external view returns (uint256);

            function getLeaderboardSize(string memory label) external view returns (uint256);

            function getTopPercentage(string memory label, uint256 percentage)
                external
                view
                returns (address[] memory players, uint256[] memory scores);

            function getLeaderboardStartTime(string memory label) external view returns (uint256);

            function getLeaderboardEndTime(string memory label) external view returns (uint256);

            function isLeaderboardActive(string memory label) external view returns (bool);

            function getAdmins() external view returns (address[] memory);

            function addAdmin(address newAdmin) external;

            function removeAdmin(address admin) external;
        }
    }
}
