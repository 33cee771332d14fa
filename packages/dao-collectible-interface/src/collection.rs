use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, QuerierWrapper, StdResult};

use crate::collectible::{CollectibleId, CollectibleKind};

/// The queries a collection registry must answer for collectibles to
/// be used as voting units.
#[cw_serde]
#[derive(QueryResponses)]
pub enum CollectionQueryMsg {
    /// Number of units of `collectible` held by `owner`. Zero if the
    /// collectible does not exist or was minted under a different
    /// kind.
    #[returns(BalanceResponse)]
    Balance {
        owner: String,
        collectible: CollectibleId,
    },
    /// The kind `name` edition `edition` of `creator`'s collection
    /// `collection` was minted under, if it was minted.
    #[returns(KindResponse)]
    Kind {
        creator: String,
        collection: String,
        name: String,
        edition: u64,
    },
}

#[cw_serde]
pub struct BalanceResponse {
    pub balance: u64,
}

#[cw_serde]
pub struct KindResponse {
    pub kind: Option<CollectibleKind>,
}

/// The collection management messages a governance contract may
/// dispatch.
#[cw_serde]
pub enum CollectionExecuteMsg {
    /// Changes the supply cap of `collection_name`. Accepted from
    /// `creator` or from an account `creator` approved as a delegate.
    MutateCollectionMaximum {
        creator: String,
        collection_name: String,
        maximum: u64,
    },
}

/// Returns true iff `owner` holds exactly one unit of `collectible`
/// according to the registry at `registry`.
pub fn holds_exactly_one(
    querier: &QuerierWrapper,
    registry: &Addr,
    owner: &Addr,
    collectible: &CollectibleId,
) -> StdResult<bool> {
    let res: BalanceResponse = querier.query_wasm_smart(
        registry,
        &CollectionQueryMsg::Balance {
            owner: owner.to_string(),
            collectible: collectible.clone(),
        },
    )?;
    Ok(res.balance == 1)
}

/// The kind `collectible` was actually minted under, or `None` if the
/// registry never minted it. The kind tag on `collectible` is ignored.
pub fn minted_kind(
    querier: &QuerierWrapper,
    registry: &Addr,
    collectible: &CollectibleId,
) -> StdResult<Option<CollectibleKind>> {
    let res: KindResponse = querier.query_wasm_smart(
        registry,
        &CollectionQueryMsg::Kind {
            creator: collectible.creator.clone(),
            collection: collectible.collection.clone(),
            name: collectible.name.clone(),
            edition: collectible.edition,
        },
    )?;
    Ok(res.kind)
}
