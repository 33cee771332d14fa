//! The voting ledger. Each unresolved proposal has a running tally and
//! one ballot per unit that voted on it. A unit's ballot key is its
//! place in the membership map, so a unit can vote at most once per
//! proposal no matter who holds it.

use std::collections::BTreeSet;

use cosmwasm_std::{Addr, DepsMut, Order, StdResult, Storage, Uint128};
use dao_collectible_interface::collectible::CollectibleId;
use dao_collectible_voting::voting::{Vote, Votes};

use crate::error::ContractError;
use crate::membership::{member_key, usable_weight};
use crate::state::{Ballot, CollectionConfig, BALLOTS, TALLIES};

/// Casts `vote` with every unit in `units` on behalf of `voter` and
/// returns the updated tally and the weight added. The whole batch is
/// validated before any ballot is written.
pub fn cast(
    deps: DepsMut,
    collection: &CollectionConfig,
    proposal_id: u64,
    voter: &Addr,
    vote: Vote,
    units: &[CollectibleId],
) -> Result<(Votes, Uint128), ContractError> {
    if units.is_empty() {
        return Err(ContractError::NoVotingUnits {});
    }

    let mut seen = BTreeSet::new();
    let mut pending = Vec::with_capacity(units.len());
    for unit in units {
        let key = member_key(collection, unit);
        if let Some(key) = key {
            if BALLOTS.has(deps.storage, (proposal_id, key.0, key.1)) || !seen.insert(key) {
                return Err(ContractError::AlreadyVoted {
                    id: proposal_id,
                    unit: unit.to_string(),
                });
            }
        }
        let power = usable_weight(deps.as_ref(), collection, voter, unit)?;
        // `usable_weight` rejects units outside the collection.
        if let Some(key) = key {
            pending.push((key, power));
        }
    }

    let mut votes = tally(deps.storage, proposal_id)?;
    let mut added = Uint128::zero();
    for ((name, edition), power) in pending {
        BALLOTS.save(
            deps.storage,
            (proposal_id, name, edition),
            &Ballot {
                voter: voter.clone(),
                vote,
                power,
            },
        )?;
        added += power;
    }
    votes.add_vote(vote, added);
    TALLIES.save(deps.storage, proposal_id, &votes)?;

    Ok((votes, added))
}

/// The running tally of a proposal. Zero if nobody voted.
pub fn tally(storage: &dyn Storage, proposal_id: u64) -> StdResult<Votes> {
    Ok(TALLIES.may_load(storage, proposal_id)?.unwrap_or_default())
}

/// Removes a proposal's tally and ballots, returning the final tally.
pub fn consume(storage: &mut dyn Storage, proposal_id: u64) -> StdResult<Votes> {
    let votes = tally(storage, proposal_id)?;
    TALLIES.remove(storage, proposal_id);

    let keys = BALLOTS
        .sub_prefix(proposal_id)
        .keys(storage, None, None, Order::Ascending)
        .collect::<StdResult<Vec<(String, u64)>>>()?;
    for (name, edition) in keys {
        BALLOTS.remove(storage, (proposal_id, name.as_str(), edition));
    }

    Ok(votes)
}
