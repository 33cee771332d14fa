use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};
use dao_collectible_voting::{
    threshold::ResolveThreshold,
    voting::{Vote, Votes},
};

use crate::proposal::Proposal;

/// The collection voting units are drawn from.
#[cw_serde]
pub struct CollectionConfig {
    /// The collection registry answering balance queries.
    pub contract: Addr,
    pub creator: Addr,
    pub name: String,
}

/// The governance module's configuration.
#[cw_serde]
pub struct Config {
    pub name: String,
    /// The share of enrolled units that must vote for a proposal to
    /// be decided by its yes/no majority.
    pub resolve_threshold: ResolveThreshold,
    /// The custody account passing proposals act through.
    pub governed_account: Addr,
    /// Seconds a proposal stays open for voting after its start time.
    pub voting_duration: u64,
    /// The combined weight of voting units a proposer must present.
    pub min_proposal_weight: Uint128,
    pub collection: CollectionConfig,
    /// The native denomination `transfer_fund` moves.
    pub denom: String,
}

/// A unit's vote on a proposal.
#[cw_serde]
pub struct Ballot {
    /// The account that held the unit when it voted.
    pub voter: Addr,
    pub vote: Vote,
    pub power: Uint128,
}

pub const CONFIG: Item<Config> = Item::new("config");
/// Sum of the weights of every enrolled unit.
pub const TOTAL_SUPPLY: Item<Uint128> = Item::new("total_supply");
/// The number of proposals that have been created.
pub const PROPOSAL_COUNT: Item<u64> = Item::new("proposal_count");

/// Enrolled voting units of the DAO's collection, keyed by
/// `(name, edition)`.
pub const MEMBERS: Map<(&str, u64), Uint128> = Map::new("members");
pub const PROPOSALS: Map<u64, Proposal> = Map::new("proposals");
/// Running tallies of unresolved proposals. Removed on resolution.
pub const TALLIES: Map<u64, Votes> = Map::new("tallies");
/// Ballots of unresolved proposals keyed by `(proposal_id, name,
/// edition)`. Removed on resolution.
pub const BALLOTS: Map<(u64, &str, u64), Ballot> = Map::new("ballots");
