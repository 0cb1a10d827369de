use crate::election::regions::{count_votes_in_regions, RegionNode};
use colored::*;
use std::fs;
use std::path::Path;

/// Sum the votes of a region tree stored as JSON.
pub fn regions(tree_path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let raw = fs::read_to_string(tree_path)?;
    let tree: RegionNode = serde_json::from_str(&raw)?;

    let total = count_votes_in_regions(Some(&tree));
    println!(
        "🗺️  {}: {} votes in total",
        tree.name.bright_cyan(),
        total.to_string().bright_green().bold()
    );

    Ok(())
}
