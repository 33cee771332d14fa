use std::collections::BTreeSet;

use cosmwasm_std::{Addr, Deps, DepsMut, StdResult, Storage, Uint128};
use dao_collectible_interface::{
    collectible::CollectibleId,
    collection::{holds_exactly_one, minted_kind},
};

use crate::error::ContractError;
use crate::state::{CollectionConfig, MEMBERS, TOTAL_SUPPLY};

/// The weight every enrolled unit carries.
pub const DEFAULT_WEIGHT: Uint128 = Uint128::new(1);

/// The key of `unit` in the membership and ballot maps, or `None` if
/// it is not from the DAO's collection.
pub fn member_key<'a>(
    collection: &CollectionConfig,
    unit: &'a CollectibleId,
) -> Option<(&'a str, u64)> {
    unit.is_in_collection(collection.creator.as_str(), &collection.name)
        .then_some((unit.name.as_str(), unit.edition))
}

/// Enrolls `units` as voting units and returns the new total supply.
/// A unit must have been minted by the collection's registry under
/// the eligible kind it is tagged with. Nothing is written unless
/// every unit may be enrolled.
pub fn enroll(
    deps: DepsMut,
    collection: &CollectionConfig,
    units: &[CollectibleId],
) -> Result<Uint128, ContractError> {
    let mut pending = BTreeSet::new();
    for unit in units {
        let not_eligible = || ContractError::NotEligible {
            unit: unit.to_string(),
        };
        let key = member_key(collection, unit)
            .filter(|_| unit.kind.is_eligible())
            .ok_or_else(not_eligible)?;
        if MEMBERS.has(deps.storage, key) || !pending.insert(key) {
            return Err(ContractError::AlreadyEnrolled {
                unit: unit.to_string(),
            });
        }
        if minted_kind(&deps.querier, &collection.contract, unit)? != Some(unit.kind) {
            return Err(not_eligible());
        }
    }

    let mut total = TOTAL_SUPPLY.may_load(deps.storage)?.unwrap_or_default();
    for key in pending {
        MEMBERS.save(deps.storage, key, &DEFAULT_WEIGHT)?;
        total += DEFAULT_WEIGHT;
    }
    TOTAL_SUPPLY.save(deps.storage, &total)?;
    Ok(total)
}

/// The weight of `unit`, or `None` if it is not enrolled.
pub fn weight_of(
    storage: &dyn Storage,
    collection: &CollectionConfig,
    unit: &CollectibleId,
) -> StdResult<Option<Uint128>> {
    match member_key(collection, unit) {
        Some(key) => MEMBERS.may_load(storage, key),
        None => Ok(None),
    }
}

/// Fails with `NotOwned` unless `owner` holds exactly one of `unit`.
pub fn assert_holds(
    deps: Deps,
    collection: &CollectionConfig,
    owner: &Addr,
    unit: &CollectibleId,
) -> Result<(), ContractError> {
    if holds_exactly_one(&deps.querier, &collection.contract, owner, unit)? {
        Ok(())
    } else {
        Err(ContractError::NotOwned {
            owner: owner.to_string(),
            unit: unit.to_string(),
        })
    }
}

/// The weight `owner` may use with `unit`. The unit must be held by
/// `owner` and enrolled.
pub fn usable_weight(
    deps: Deps,
    collection: &CollectionConfig,
    owner: &Addr,
    unit: &CollectibleId,
) -> Result<Uint128, ContractError> {
    assert_holds(deps, collection, owner, unit)?;
    weight_of(deps.storage, collection, unit)?.ok_or_else(|| ContractError::NotMember {
        unit: unit.to_string(),
    })
}

/// The combined weight of `units` held by `owner`. Each unit may be
/// listed once.
pub fn voting_weight(
    deps: Deps,
    collection: &CollectionConfig,
    owner: &Addr,
    units: &[CollectibleId],
) -> Result<Uint128, ContractError> {
    let mut seen = BTreeSet::new();
    units.iter().try_fold(Uint128::zero(), |weight, unit| {
        if !seen.insert(unit.to_string()) {
            return Err(ContractError::DuplicateUnit {
                unit: unit.to_string(),
            });
        }
        Ok(weight + usable_weight(deps, collection, owner, unit)?)
    })
}
