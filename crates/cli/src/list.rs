use anyhow::Context;
use colored::Colorize;
use leaderboard_sdk::{
    LeaderboardSdk,
    types::{IndexedScore, IndexedUint},
};
use tabled::{Table, Tabled, settings::Style};

pub(crate) async fn render(
    sdk: &LeaderboardSdk,
    label: &str,
    contract: &str,
    page: u32,
    page_size: u32,
) -> anyhow::Result<()> {
    let response = sdk
        .list_leaderboards(label, contract, page, page_size)
        .await
        .context("listing leaderboard scores")?;

    match &response.get_leaderboard_by_label {
        Some(leaderboard) => println!(
            "{} {}\n    Contract: {} | Max limit: {} | Start: {} | End: {}\n",
            format!("Leaderboard \"{}\"", leaderboard.label).blue(),
            if leaderboard.is_active { "ACTIVE".green() } else { "INACTIVE".bright_red() },
            leaderboard.contract_address,
            leaderboard.max_limit,
            leaderboard.start_time,
            leaderboard.end_time,
        ),
        None => println!("{}\n", format!("Leaderboard \"{label}\" is not indexed").yellow()),
    }

    let page_info = &response.get_scores.page_info;
    if !response.get_scores.scores.is_empty() {
        println!("{}", scores_table(&response.get_scores.scores));
    }
    let mut footer = format!("Page {} ({} per page)", page_info.page_number, page_info.page_size);
    let current = page_info.page_number.to_u64().unwrap_or(u64::from(page));
    if page_info.has_previous_page {
        footer += &format!(" | previous: --page {}", current.saturating_sub(1));
    }
    if page_info.has_next_page {
        footer += &format!(" | next: --page {}", current.saturating_add(1));
    }
    println!("{}", footer.dimmed());
    Ok(())
}

fn scores_table(scores: &[IndexedScore]) -> Table {
    #[derive(Tabled)]
    struct Row<'a> {
        #[tabled(rename = "Rank")]
        rank: &'a IndexedUint,
        #[tabled(rename = "Player")]
        player: &'a str,
        #[tabled(rename = "Score")]
        score: &'a IndexedUint,
        #[tabled(rename = "Updated")]
        updated_at: &'a str,
    }

    let mut table = Table::new(scores.iter().map(|score| Row {
        rank: &score.rank,
        player: &score.player_address,
        score: &score.score,
        updated_at: &score.updated_at,
    }));
    table.with(Style::sharp());
    table
}
