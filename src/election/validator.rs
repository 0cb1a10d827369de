//! Rule-driven voter eligibility checks, independent of any election session.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fields a rule set may require on an application.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoterField {
    Id,
    Name,
    Age,
}

impl fmt::Display for VoterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VoterField::Id => write!(f, "id"),
            VoterField::Name => write!(f, "name"),
            VoterField::Age => write!(f, "age"),
        }
    }
}

impl FromStr for VoterField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(VoterField::Id),
            "name" => Ok(VoterField::Name),
            "age" => Ok(VoterField::Age),
            other => Err(format!("unknown voter field: {}", other)),
        }
    }
}

/// Validation rule set. Defaults to the usual voting age with no required
/// fields; the minimum age here is configurable and separate from the
/// session's fixed registration threshold.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidatorRules {
    #[serde(default = "default_min_age")]
    pub min_age: u32,
    #[serde(default)]
    pub required_fields: Vec<VoterField>,
}

fn default_min_age() -> u32 {
    18
}

impl Default for ValidatorRules {
    fn default() -> Self {
        ValidatorRules {
            min_age: default_min_age(),
            required_fields: Vec::new(),
        }
    }
}

/// A prospective voter record as it arrives from the outside, every field
/// possibly missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoterApplication {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub age: Option<i64>,
}

impl VoterApplication {
    fn has(&self, field: VoterField) -> bool {
        match field {
            VoterField::Id => self.id.is_some(),
            VoterField::Name => self.name.is_some(),
            VoterField::Age => self.age.is_some(),
        }
    }
}

/// Why an application failed validation. The `Display` strings are the
/// reasons reported to callers.
#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleViolation {
    #[error("invalid voter object")]
    InvalidApplication,
    #[error("missing field: {0}")]
    MissingField(VoterField),
    #[error("below minimum age")]
    BelowMinimumAge,
}

/// Checks applications against a rule set captured at construction. Pure: no
/// side effects, no election state consulted.
#[derive(Debug, Clone)]
pub struct VoteValidator {
    rules: ValidatorRules,
}

impl VoteValidator {
    pub fn new(rules: ValidatorRules) -> VoteValidator {
        VoteValidator { rules }
    }

    /// Validate one application. Required fields are checked in rule order
    /// and the first missing one wins; the age check only applies when an age
    /// is present (an absent age can only fail as a required field).
    pub fn validate(&self, application: Option<&VoterApplication>) -> Result<(), RuleViolation> {
        let application = match application {
            Some(application) => application,
            None => return Err(RuleViolation::InvalidApplication),
        };

        for field in &self.rules.required_fields {
            if !application.has(*field) {
                return Err(RuleViolation::MissingField(*field));
            }
        }

        if let Some(age) = application.age {
            if age < i64::from(self.rules.min_age) {
                return Err(RuleViolation::BelowMinimumAge);
            }
        }

        Ok(())
    }
}
