//! JSON scenario files: a full election described as data.

use crate::election::{Candidate, Voter};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    #[error("failed to read scenario: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed scenario: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ScenarioError>;

/// One requested ballot: who votes for whom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BallotRequest {
    pub voter_id: String,
    pub candidate_id: String,
}

/// A complete election scenario as loaded from disk: the roster, the
/// electorate and the ballots to attempt, in order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElectionScenario {
    pub name: String,
    pub date: NaiveDate,
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub voters: Vec<Voter>,
    #[serde(default)]
    pub ballots: Vec<BallotRequest>,
}

impl ElectionScenario {
    pub fn from_file(path: &Path) -> Result<ElectionScenario> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}
