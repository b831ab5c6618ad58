use chrono::{DateTime, Utc};

use super::Standings;

/// Leaderboard state assembled from the individual contract getters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeaderboardRecord {
    label: String,
    standings: Standings,
    size: u64,
    player_count: u64,
    start_time: u64,
    end_time: u64,
    active: bool,
}

impl LeaderboardRecord {
    pub(crate) fn new(
        label: String,
        standings: Standings,
        size: u64,
        player_count: u64,
        start_time: u64,
        end_time: u64,
        active: bool,
    ) -> Self {
        Self { label, standings, size, player_count, start_time, end_time, active }
    }

    pub fn label(&self) -> &str { &self.label }

    pub fn standings(&self) -> &Standings { &self.standings }

    /// Leaderboard size as reported by the contract.
    pub fn size(&self) -> u64 { self.size }

    pub fn player_count(&self) -> u64 { self.player_count }

    /// Start of the leaderboard, unix seconds.
    pub fn start_time(&self) -> u64 { self.start_time }

    /// End of the leaderboard, unix seconds.
    pub fn end_time(&self) -> u64 { self.end_time }

    /// Whether scores are currently accepted.
    pub fn active(&self) -> bool { self.active }

    pub fn starts_at(&self) -> Option<DateTime<Utc>> { timestamp(self.start_time) }

    pub fn ends_at(&self) -> Option<DateTime<Utc>> { timestamp(self.end_time) }
}

fn timestamp(secs: u64) -> Option<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp(i64::try_from(secs).ok()?, 0)
}

#[cfg(feature = "display")]
impl std::fmt::Display for LeaderboardRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use colored::Colorize;

        // Open-ended leaderboards use times beyond the calendar range
        let format = |at: Option<DateTime<Utc>>, secs: u64| match at {
            Some(at) => at.format("%Y-%m-%d %H:%M:%S").to_string(),
            None => secs.to_string(),
        };
        writeln!(
            f,
            "{} {}\n    Players: {} | Size: {} | Start: {} | End: {}",
            format!("Leaderboard \"{}\"", self.label).blue(),
            if self.active { "ACTIVE".green() } else { "INACTIVE".bright_red() },
            self.player_count,
            self.size,
            format(self.starts_at(), self.start_time),
            format(self.ends_at(), self.end_time),
        )?;

        // Render standings in alternate mode
        if f.alternate() && !self.standings.is_empty() {
            write!(f, "{}", self.standings)
        } else {
            Ok(())
        }
    }
}
