use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Timestamp, Uint128};
use dao_collectible_voting::voting::{Vote, Votes};

use crate::proposal::Proposal;
use crate::state::Config;

#[cw_serde]
pub struct ConfigResponse {
    pub config: Config,
    pub total_supply: Uint128,
    pub proposal_count: u64,
}

/// Information about a proposal returned by proposal queries.
#[cw_serde]
pub struct ProposalResponse {
    pub id: u64,
    /// The last instant votes are accepted.
    pub end_time: Timestamp,
    /// The live tally while unresolved, the final tally afterwards.
    pub votes: Votes,
    pub proposal: Proposal,
}

/// A list of proposals returned by `ListProposals` and
/// `ReverseProposals`.
#[cw_serde]
pub struct ProposalListResponse {
    pub proposals: Vec<ProposalResponse>,
}

/// A vote cast by one unit.
#[cw_serde]
pub struct BallotInfo {
    pub name: String,
    pub edition: u64,
    /// The account that cast the vote.
    pub voter: Addr,
    pub vote: Vote,
    pub power: Uint128,
}

#[cw_serde]
pub struct BallotResponse {
    /// None if the unit has not voted or the proposal is resolved.
    pub ballot: Option<BallotInfo>,
}

#[cw_serde]
pub struct BallotListResponse {
    pub ballots: Vec<BallotInfo>,
}

#[cw_serde]
pub struct MemberInfo {
    pub name: String,
    pub edition: u64,
    pub weight: Uint128,
}

#[cw_serde]
pub struct MemberResponse {
    /// None if the unit is not enrolled.
    pub weight: Option<Uint128>,
}

#[cw_serde]
pub struct MemberListResponse {
    pub members: Vec<MemberInfo>,
}
