use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, StdResult, Storage, Timestamp};
use dao_collectible_voting::{status::Resolution, voting::Votes};

use crate::action::ProposalAction;
use crate::error::ContractError;
use crate::query::ProposalResponse;
use crate::state::PROPOSAL_COUNT;

pub const MAX_NAME_LENGTH: usize = 64;
pub const MAX_DESCRIPTION_LENGTH: usize = 512;

#[cw_serde]
pub struct Proposal {
    pub name: String,
    pub description: String,
    /// The address that created this proposal.
    pub proposer: Addr,
    /// The validated action executed if this proposal passes.
    pub action: ProposalAction,
    /// Voting opens at this time.
    pub start_time: Timestamp,
    pub resolution: Resolution,
    /// The final tally. Zero until the proposal is resolved; the live
    /// tally of an unresolved proposal is kept separately.
    pub votes: Votes,
}

impl Proposal {
    /// The last instant votes are accepted. Voting is open over
    /// `[start_time, voting_end]`.
    pub fn voting_end(&self, voting_duration: u64) -> Timestamp {
        self.start_time.plus_seconds(voting_duration)
    }

    /// Fails unless `now` falls inside the voting window.
    pub fn assert_voting_open(
        &self,
        id: u64,
        now: Timestamp,
        voting_duration: u64,
    ) -> Result<(), ContractError> {
        if now < self.start_time {
            return Err(ContractError::VotingNotStarted {
                id,
                start_time: self.start_time,
            });
        }
        let end_time = self.voting_end(voting_duration);
        if now > end_time {
            return Err(ContractError::VotingClosed { id, end_time });
        }
        Ok(())
    }

    /// Fails unless the proposal is unresolved and its voting window
    /// has passed.
    pub fn assert_resolvable(
        &self,
        id: u64,
        now: Timestamp,
        voting_duration: u64,
    ) -> Result<(), ContractError> {
        let end_time = self.voting_end(voting_duration);
        if now <= end_time {
            return Err(ContractError::VotingStillOpen { id, end_time });
        }
        if self.resolution.is_resolved() {
            return Err(ContractError::AlreadyResolved { id });
        }
        Ok(())
    }

    /// Builds a query response. `live` is the ledger tally of an
    /// unresolved proposal.
    pub fn into_response(
        self,
        id: u64,
        voting_duration: u64,
        live: Option<Votes>,
    ) -> ProposalResponse {
        let end_time = self.voting_end(voting_duration);
        let votes = match (self.resolution.is_resolved(), live) {
            (false, Some(live)) => live,
            _ => self.votes.clone(),
        };
        ProposalResponse {
            id,
            end_time,
            votes,
            proposal: self,
        }
    }
}

/// Checks a proposal's name and description lengths in characters.
pub fn validate_text(name: &str, description: &str) -> Result<(), ContractError> {
    for (field, value, max) in [
        ("name", name, MAX_NAME_LENGTH),
        ("description", description, MAX_DESCRIPTION_LENGTH),
    ] {
        let length = value.chars().count();
        if length > max {
            return Err(ContractError::TooLong {
                field: field.to_string(),
                length: length as u64,
                max: max as u64,
            });
        }
    }
    Ok(())
}

pub fn next_proposal_id(store: &dyn Storage) -> StdResult<u64> {
    Ok(PROPOSAL_COUNT.may_load(store)?.unwrap_or_default() + 1)
}

pub fn advance_proposal_id(store: &mut dyn Storage) -> StdResult<u64> {
    let id: u64 = next_proposal_id(store)?;
    PROPOSAL_COUNT.save(store, &id)?;
    Ok(id)
}
