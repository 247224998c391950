//! Statistics display

use crate::output::distribution_bar;
use crate::stats::StatsLedger;
use colored::Colorize;

const BAR_WIDTH: usize = 24;

/// Print the stats ledger as a summary block plus guess distribution
pub fn print_stats(ledger: &StatsLedger) {
    println!("\n{}", "📊 Statistics".bright_cyan().bold());
    println!("{}", "─".repeat(40).bright_black());

    println!(
        "  Played: {}   Won: {}   Win rate: {}",
        ledger.games_played().to_string().bold(),
        ledger.games_won().to_string().bright_green().bold(),
        format!("{:.0}%", ledger.win_rate() * 100.0).bold()
    );
    println!(
        "  Current streak: {}   Longest streak: {}",
        ledger.current_streak().to_string().bright_cyan().bold(),
        ledger.longest_streak().to_string().bright_cyan().bold()
    );

    println!("\n  {}", "Guess distribution".bold());
    let distribution = ledger.guess_distribution();
    let max = distribution.iter().copied().max().unwrap_or(0);
    for (i, &count) in distribution.iter().enumerate() {
        println!("  {}", distribution_bar(i + 1, count, max, BAR_WIDTH));
    }
    println!();
}
