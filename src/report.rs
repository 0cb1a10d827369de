//! Serializable election report and its console rendering.

use crate::election::CandidateResult;
use chrono::NaiveDate;
use colored::*;
use serde::{Deserialize, Serialize};

/// A ballot the session refused, with the reason string it reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectedBallot {
    pub voter_id: String,
    pub candidate_id: String,
    pub reason: String,
}

/// Everything a finished run produces: registration counts, accepted and
/// rejected ballots, the tabulated results and the winner (if any).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElectionReport {
    pub name: String,
    pub date: NaiveDate,
    pub registered_voters: usize,
    pub registrations_refused: usize,
    pub ballots_accepted: usize,
    pub rejected: Vec<RejectedBallot>,
    pub results: Vec<CandidateResult>,
    pub winner: Option<CandidateResult>,
}

impl ElectionReport {
    /// Print the summary block.
    pub fn print_summary(&self) {
        println!("\n{}", "🗳️  Election Complete!".bright_green().bold());
        println!("{}", "=".repeat(50).bright_green());
        println!(
            "{}: {} ({})",
            "Election".bright_white().bold(),
            self.name.bright_cyan(),
            self.date.format("%Y-%m-%d")
        );
        println!(
            "{}: {} ({} refused)",
            "Registered Voters".bright_white().bold(),
            self.registered_voters.to_string().bright_yellow(),
            self.registrations_refused
        );
        println!(
            "{}: {} accepted, {} rejected",
            "Ballots".bright_white().bold(),
            self.ballots_accepted.to_string().bright_green(),
            self.rejected.len().to_string().bright_red()
        );

        println!("{}", "-".repeat(50).bright_green());
        for (position, result) in self.results.iter().enumerate() {
            println!(
                "  {}. {} ({}): {} votes",
                position + 1,
                result.name.bright_white(),
                result.party,
                result.votes.to_string().bright_yellow()
            );
        }

        println!("{}", "-".repeat(50).bright_green());
        match &self.winner {
            Some(winner) => println!(
                "{}: {} ({}) with {} votes",
                "🏆 Winner".bright_white().bold(),
                winner.name.bright_green().bold(),
                winner.party,
                winner.votes.to_string().bright_green().bold()
            ),
            None => println!("{}", "No winner: no votes were cast".yellow()),
        }
        println!();
    }
}
