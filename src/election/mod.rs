// Village election session: voter registration, vote casting and tabulation.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

pub mod regions;
pub mod tally;
pub mod validator;

/// Minimum age to register with a session. Independent of the configurable
/// `validator::ValidatorRules::min_age`, which is used outside the session.
pub const MIN_VOTING_AGE: u32 = 18;

/// A candidate on the ballot. The id is expected to be unique within a
/// session; duplicates collapse onto a single tally entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: String,
    pub name: String,
    pub party: String,
}

/// A voter as supplied by the caller. Admitted via `Election::register_voter`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voter {
    pub id: String,
    pub name: String,
    pub age: u32,
}

/// Confirmation handed to the success callback of `cast_vote`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteReceipt {
    pub voter_id: String,
    pub candidate_id: String,
}

/// Why a vote was rejected. The `Display` strings are part of the observable
/// contract and must stay exactly as written.
#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VoteError {
    #[error("voter not registered")]
    NotRegistered,
    #[error("candidate not found")]
    UnknownCandidate,
    #[error("already voted")]
    AlreadyVoted,
}

/// Per-candidate line of a tabulated result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateResult {
    pub id: String,
    pub name: String,
    pub party: String,
    pub votes: u64,
}

/// One election's mutable state. The roster is fixed at construction; the
/// registration map, voted set and tally are reachable only through the
/// methods below.
#[derive(Debug)]
pub struct Election {
    roster: Vec<Candidate>,
    registered: HashMap<String, Voter>,
    voted: HashSet<String>,
    tally: HashMap<String, u64>,
}

impl Election {
    /// Create a session with a fixed candidate roster. Every roster id starts
    /// with a zeroed tally entry.
    pub fn new(roster: Vec<Candidate>) -> Election {
        let tally = roster.iter().map(|c| (c.id.clone(), 0)).collect();

        Election {
            roster,
            registered: HashMap::new(),
            voted: HashSet::new(),
            tally,
        }
    }

    /// Register a voter. Returns true and stores the record only if the voter
    /// is of age and the id is not already registered; any violation returns
    /// false with no state change.
    pub fn register_voter(&mut self, voter: Voter) -> bool {
        if voter.age < MIN_VOTING_AGE || self.registered.contains_key(&voter.id) {
            return false;
        }

        self.registered.insert(voter.id.clone(), voter);
        true
    }

    /// Cast a vote, reporting the outcome through exactly one of the two
    /// handlers and returning that handler's value. Validation happens in a
    /// fixed order (registration, candidate, double vote) and the tally only
    /// moves on the success path.
    pub fn cast_vote<T, S, E>(
        &mut self,
        voter_id: &str,
        candidate_id: &str,
        on_success: S,
        on_error: E,
    ) -> T
    where
        S: FnOnce(VoteReceipt) -> T,
        E: FnOnce(VoteError) -> T,
    {
        match self.try_cast_vote(voter_id, candidate_id) {
            Ok(receipt) => on_success(receipt),
            Err(err) => on_error(err),
        }
    }

    /// `Result`-shaped form of `cast_vote`, for callers that prefer to match
    /// on the outcome instead of passing handlers.
    pub fn try_cast_vote(
        &mut self,
        voter_id: &str,
        candidate_id: &str,
    ) -> Result<VoteReceipt, VoteError> {
        if !self.registered.contains_key(voter_id) {
            return Err(VoteError::NotRegistered);
        }
        if !self.tally.contains_key(candidate_id) {
            return Err(VoteError::UnknownCandidate);
        }
        if self.voted.contains(voter_id) {
            return Err(VoteError::AlreadyVoted);
        }

        if let Some(count) = self.tally.get_mut(candidate_id) {
            *count += 1;
        }
        self.voted.insert(voter_id.to_string());

        Ok(VoteReceipt {
            voter_id: voter_id.to_string(),
            candidate_id: candidate_id.to_string(),
        })
    }

    /// Tabulate results, one record per roster candidate, sorted by vote
    /// count descending. The sort is stable over roster order, so tied
    /// candidates keep their declaration order.
    pub fn results(&self) -> Vec<CandidateResult> {
        let mut results = self.roster_results();
        results.sort_by(|a, b| b.votes.cmp(&a.votes));
        results
    }

    /// Tabulate results ordered by a caller-supplied comparator applied over
    /// the roster-ordered records.
    pub fn results_sorted_by<F>(&self, cmp: F) -> Vec<CandidateResult>
    where
        F: FnMut(&CandidateResult, &CandidateResult) -> Ordering,
    {
        let mut results = self.roster_results();
        results.sort_by(cmp);
        results
    }

    /// The leading candidate, or `None` when the roster is empty or no vote
    /// has been cast. Ties go to the first-declared candidate.
    pub fn winner(&self) -> Option<CandidateResult> {
        let results = self.results();
        if results.iter().all(|r| r.votes == 0) {
            return None;
        }

        results.into_iter().next()
    }

    /// Number of successfully registered voters.
    pub fn registered_count(&self) -> usize {
        self.registered.len()
    }

    /// Number of successfully cast ballots.
    pub fn ballots_cast(&self) -> usize {
        self.voted.len()
    }

    pub fn candidate_count(&self) -> usize {
        self.roster.len()
    }

    fn roster_results(&self) -> Vec<CandidateResult> {
        self.roster
            .iter()
            .map(|c| CandidateResult {
                id: c.id.clone(),
                name: c.name.clone(),
                party: c.party.clone(),
                votes: self.tally.get(&c.id).copied().unwrap_or(0),
            })
            .collect()
    }
}
