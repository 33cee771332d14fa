use cosmwasm_schema::cw_serde;
use cosmwasm_std::Uint128;

use crate::{status::Resolution, threshold::ResolveThreshold};

#[cw_serde]
#[derive(Copy)]
pub enum Vote {
    /// Marks support for the proposal.
    Yes,
    /// Marks opposition to the proposal.
    No,
}

impl std::fmt::Display for Vote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Vote::Yes => write!(f, "yes"),
            Vote::No => write!(f, "no"),
        }
    }
}

/// Aggregate weight on each side of a proposal.
#[cw_serde]
#[derive(Default)]
pub struct Votes {
    pub yes: Uint128,
    pub no: Uint128,
}

impl Votes {
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn add_vote(&mut self, vote: Vote, power: Uint128) {
        match vote {
            Vote::Yes => self.yes += power,
            Vote::No => self.no += power,
        }
    }

    pub fn total(&self) -> Uint128 {
        self.yes + self.no
    }

    /// Resolves the tally. Quorum is checked first: if too little of
    /// `total_supply` voted the proposal fails regardless of how the
    /// votes split. Otherwise a strict yes majority is required, so a
    /// tie fails.
    pub fn outcome(&self, threshold: &ResolveThreshold, total_supply: Uint128) -> Outcome {
        if !threshold.is_met(self.total(), total_supply) {
            Outcome::QuorumNotMet
        } else if self.yes > self.no {
            Outcome::Passed
        } else {
            Outcome::MajorityNotReached
        }
    }
}

/// The result of resolving a tally, with the reason for failure.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Passed,
    QuorumNotMet,
    MajorityNotReached,
}

impl Outcome {
    pub fn resolution(&self) -> Resolution {
        match self {
            Outcome::Passed => Resolution::Passed,
            Outcome::QuorumNotMet | Outcome::MajorityNotReached => Resolution::NotPassed,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Passed => write!(f, "passed"),
            Outcome::QuorumNotMet => write!(f, "quorum_not_met"),
            Outcome::MajorityNotReached => write!(f, "majority_not_reached"),
        }
    }
}
