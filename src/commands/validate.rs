use crate::election::validator::{ValidatorRules, VoteValidator, VoterApplication, VoterField};
use colored::*;
use std::fs;
use std::path::Path;

/// Check a JSON array of voter applications against a rule set. Entries may
/// be `null` or partial records; both are reported, not skipped.
pub fn validate(
    applications_path: &Path,
    min_age: u32,
    required_fields: Vec<VoterField>,
) -> Result<(), Box<dyn std::error::Error>> {
    let raw = fs::read_to_string(applications_path)?;
    let applications: Vec<Option<VoterApplication>> = serde_json::from_str(&raw)?;

    let validator = VoteValidator::new(ValidatorRules {
        min_age,
        required_fields,
    });

    println!(
        "🔍 Checking {} applications (minimum age {})",
        applications.len().to_string().bright_yellow(),
        min_age
    );

    let mut passed = 0usize;
    for (index, application) in applications.iter().enumerate() {
        let label = application
            .as_ref()
            .and_then(|a| a.id.clone())
            .unwrap_or_else(|| format!("#{}", index + 1));

        match validator.validate(application.as_ref()) {
            Ok(()) => {
                passed += 1;
                println!("  ✅ {}", label.bright_green());
            }
            Err(violation) => println!("  ❌ {}: {}", label.bright_red(), violation),
        }
    }

    println!(
        "{} of {} applications passed",
        passed.to_string().bright_green().bold(),
        applications.len()
    );

    Ok(())
}
