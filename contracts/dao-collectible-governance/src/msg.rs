use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Timestamp, Uint128};
use cw_ownable::cw_ownable_execute;
use dao_collectible_interface::collectible::CollectibleId;
use dao_collectible_voting::voting::{Vote, Votes};

#[cw_serde]
pub struct InstantiateMsg {
    /// The account that may initialize the DAO. Defaults to the
    /// instantiator.
    pub admin: Option<String>,
}

#[cw_serde]
pub struct InitializeMsg {
    pub name: String,
    /// The custody account passing proposals act through. This
    /// contract must be its controller.
    pub governed_account: String,
    pub threshold_numerator: u64,
    pub threshold_denominator: u64,
    /// Seconds a proposal is open for voting after it starts.
    pub voting_duration: u64,
    /// The creator of the collection voting units come from.
    pub token_creator: String,
    pub collection_name: String,
    /// The registry contract of that collection.
    pub collection_contract: String,
    /// The native denomination `transfer_fund` moves.
    pub denom: String,
    pub min_proposal_weight: Uint128,
}

#[cw_serde]
pub struct ProposeMsg {
    /// At most 64 characters.
    pub name: String,
    /// At most 512 characters.
    pub description: String,
    /// One of `no_op`, `transfer_fund` or `mutate_collection_maximum`.
    pub action_name: String,
    /// Argument names. Parallel to `arg_values` and `arg_types`.
    pub arg_names: Vec<String>,
    /// String encoded argument values.
    pub arg_values: Vec<String>,
    /// Argument type tags: `address`, `u64` or `string`.
    pub arg_types: Vec<String>,
    /// When voting opens. Must be in the future.
    pub start_time: Timestamp,
    /// The voting units backing the proposal. The sender must hold
    /// each one.
    pub units: Vec<CollectibleId>,
}

#[cw_ownable_execute]
#[cw_serde]
pub enum ExecuteMsg {
    /// Creates the DAO. Only callable by the admin, and only once.
    Initialize(InitializeMsg),
    /// Enrolls collectibles as voting units. Callable by anyone.
    Enroll { units: Vec<CollectibleId> },
    /// Creates a proposal.
    Propose(ProposeMsg),
    /// Votes on an open proposal with every unit in `units`.
    Vote {
        proposal_id: u64,
        vote: Vote,
        units: Vec<CollectibleId>,
    },
    /// Resolves a proposal whose voting window has passed, executing
    /// its action if it passed. Callable by anyone.
    Resolve { proposal_id: u64 },
}

/// Identifies a voting unit within the DAO's collection.
#[cw_serde]
pub struct UnitKey {
    pub name: String,
    pub edition: u64,
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Gets the DAO's config along with its total supply and
    /// proposal count.
    #[returns(crate::query::ConfigResponse)]
    Config {},
    #[returns(crate::query::ProposalResponse)]
    Proposal { proposal_id: u64 },
    /// Lists proposals in ascending id order.
    #[returns(crate::query::ProposalListResponse)]
    ListProposals {
        start_after: Option<u64>,
        limit: Option<u64>,
    },
    /// Lists proposals in descending id order.
    #[returns(crate::query::ProposalListResponse)]
    ReverseProposals {
        start_before: Option<u64>,
        limit: Option<u64>,
    },
    /// The number of proposals created.
    #[returns(::std::primitive::u64)]
    ProposalCount {},
    /// The id the next proposal will receive.
    #[returns(::std::primitive::u64)]
    NextProposalId {},
    /// The running tally of a proposal. Zero once resolved or if
    /// nobody voted.
    #[returns(Votes)]
    Tally { proposal_id: u64 },
    /// The ballot `unit` cast on an unresolved proposal.
    #[returns(crate::query::BallotResponse)]
    Ballot {
        proposal_id: u64,
        unit: CollectibleId,
    },
    #[returns(crate::query::BallotListResponse)]
    ListBallots {
        proposal_id: u64,
        start_after: Option<UnitKey>,
        limit: Option<u64>,
    },
    /// The enrolled weight of `unit`, if any.
    #[returns(crate::query::MemberResponse)]
    Member { unit: CollectibleId },
    #[returns(crate::query::MemberListResponse)]
    ListMembers {
        start_after: Option<UnitKey>,
        limit: Option<u64>,
    },
    /// The combined weight of every enrolled unit.
    #[returns(::cosmwasm_std::Uint128)]
    TotalSupply {},
    /// Returns info about the contract ownership.
    #[returns(::cw_ownable::Ownership<::cosmwasm_std::Addr>)]
    Ownership {},
    #[returns(::cw2::ContractVersion)]
    Info {},
}

#[cw_serde]
pub enum MigrateMsg {
    FromCompatible {},
}
