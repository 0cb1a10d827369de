use crate::election::Election;
use crate::report::{ElectionReport, RejectedBallot};
use crate::scenario::ElectionScenario;
use crate::util::write_serialized;
use colored::*;
use std::path::Path;

/// Run a scenario file end to end: register the electorate, attempt every
/// ballot in order, then print (and optionally write) the report.
pub fn run(scenario_path: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let scenario = ElectionScenario::from_file(scenario_path)?;

    println!(
        "🗳️  Running election: {} ({})",
        scenario.name.bright_cyan(),
        scenario.date.format("%Y-%m-%d")
    );

    let mut session = Election::new(scenario.candidates.clone());

    // Step 1: registration
    let mut registrations_refused = 0usize;
    for voter in &scenario.voters {
        if !session.register_voter(voter.clone()) {
            registrations_refused += 1;
            println!(
                "  ⚠️  Registration refused: {} (age {})",
                voter.id.yellow(),
                voter.age
            );
        }
    }
    println!(
        "📋 Registered {} of {} voters",
        session.registered_count().to_string().bright_green(),
        scenario.voters.len()
    );

    // Step 2: ballots, in scenario order
    let mut rejected = Vec::new();
    for ballot in &scenario.ballots {
        session.cast_vote(
            &ballot.voter_id,
            &ballot.candidate_id,
            |receipt| {
                println!(
                    "  ✅ {} voted for {}",
                    receipt.voter_id.bright_green(),
                    receipt.candidate_id
                );
            },
            |err| {
                println!(
                    "  ❌ {} for {}: {}",
                    ballot.voter_id.bright_red(),
                    ballot.candidate_id,
                    err
                );
                rejected.push(RejectedBallot {
                    voter_id: ballot.voter_id.clone(),
                    candidate_id: ballot.candidate_id.clone(),
                    reason: err.to_string(),
                });
            },
        );
    }

    // Step 3: tabulate and report
    let report = ElectionReport {
        name: scenario.name.clone(),
        date: scenario.date,
        registered_voters: session.registered_count(),
        registrations_refused,
        ballots_accepted: session.ballots_cast(),
        rejected,
        results: session.results(),
        winner: session.winner(),
    };

    report.print_summary();

    if let Some(path) = output {
        write_serialized(path, &report)?;
        println!("✅ Report written: {}", path.display().to_string().bright_green());
    }

    Ok(())
}
