#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_json_binary, Addr, Binary, Deps, DepsMut, Empty, Env, MessageInfo, Response, StdResult,
};
use cw2::set_contract_version;
use dao_collectible_interface::{
    collectible::{CollectibleId, CollectibleKind},
    collection::{BalanceResponse, KindResponse},
};

use crate::error::ContractError;
use crate::msg::{ExecuteMsg, InstantiateMsg, QueryMsg};
use crate::state::{edition_key, token_key, Collection, BALANCES, COLLECTIONS, DELEGATES, KINDS};

const CONTRACT_NAME: &str = "crates.io:dao-test-collection";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    _msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new().add_attribute("method", "instantiate"))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::CreateCollection { name, maximum } => {
            execute_create_collection(deps, info.sender, name, maximum)
        }
        ExecuteMsg::Mint {
            collection,
            name,
            edition,
            kind,
            owner,
            amount,
        } => execute_mint(
            deps,
            info.sender,
            collection,
            name,
            edition,
            kind,
            owner,
            amount,
        ),
        ExecuteMsg::Transfer {
            collectible,
            recipient,
        } => execute_transfer(deps, info.sender, collectible, recipient),
        ExecuteMsg::ApproveDelegate { delegate } => {
            let delegate = deps.api.addr_validate(&delegate)?;
            DELEGATES.save(deps.storage, (&info.sender, &delegate), &Empty {})?;
            Ok(Response::new()
                .add_attribute("action", "approve_delegate")
                .add_attribute("creator", info.sender)
                .add_attribute("delegate", delegate))
        }
        ExecuteMsg::MutateCollectionMaximum {
            creator,
            collection_name,
            maximum,
        } => execute_mutate_collection_maximum(
            deps,
            info.sender,
            creator,
            collection_name,
            maximum,
        ),
    }
}

pub fn execute_create_collection(
    deps: DepsMut,
    creator: Addr,
    name: String,
    maximum: u64,
) -> Result<Response, ContractError> {
    if COLLECTIONS.has(deps.storage, (&creator, &name)) {
        return Err(ContractError::CollectionExists { name });
    }
    COLLECTIONS.save(
        deps.storage,
        (&creator, &name),
        &Collection { maximum, supply: 0 },
    )?;
    Ok(Response::new()
        .add_attribute("action", "create_collection")
        .add_attribute("creator", creator)
        .add_attribute("name", name))
}

#[allow(clippy::too_many_arguments)]
pub fn execute_mint(
    deps: DepsMut,
    creator: Addr,
    collection: String,
    name: String,
    edition: u64,
    kind: CollectibleKind,
    owner: String,
    amount: u64,
) -> Result<Response, ContractError> {
    if amount == 0 {
        return Err(ContractError::ZeroAmount {});
    }
    let owner = deps.api.addr_validate(&owner)?;
    let mut data = COLLECTIONS
        .may_load(deps.storage, (&creator, &collection))?
        .ok_or_else(|| ContractError::NoSuchCollection {
            name: collection.clone(),
        })?;
    if data.supply >= data.maximum {
        return Err(ContractError::CollectionFull { name: collection });
    }

    let id = CollectibleId {
        creator: creator.to_string(),
        collection: collection.clone(),
        name,
        edition,
        kind,
    };
    let key = token_key(&id);
    if KINDS.has(deps.storage, &key) {
        return Err(ContractError::AlreadyMinted { id: id.to_string() });
    }

    data.supply += 1;
    COLLECTIONS.save(deps.storage, (&creator, &collection), &data)?;
    KINDS.save(deps.storage, &key, &kind)?;
    BALANCES.save(deps.storage, (&key, &owner), &amount)?;

    Ok(Response::new()
        .add_attribute("action", "mint")
        .add_attribute("collectible", id.to_string())
        .add_attribute("owner", owner))
}

pub fn execute_transfer(
    deps: DepsMut,
    sender: Addr,
    collectible: CollectibleId,
    recipient: String,
) -> Result<Response, ContractError> {
    let recipient = deps.api.addr_validate(&recipient)?;
    let key = token_key(&collectible);

    let held = balance_of(deps.as_ref(), &sender, &collectible)?;
    if held == 0 {
        return Err(ContractError::NotHeld {
            id: collectible.to_string(),
        });
    }
    BALANCES.save(deps.storage, (&key, &sender), &(held - 1))?;
    BALANCES.update(deps.storage, (&key, &recipient), |balance| {
        StdResult::Ok(balance.unwrap_or_default() + 1)
    })?;

    Ok(Response::new()
        .add_attribute("action", "transfer")
        .add_attribute("collectible", collectible.to_string())
        .add_attribute("recipient", recipient))
}

pub fn execute_mutate_collection_maximum(
    deps: DepsMut,
    sender: Addr,
    creator: String,
    collection_name: String,
    maximum: u64,
) -> Result<Response, ContractError> {
    let creator = deps.api.addr_validate(&creator)?;
    if sender != creator && !DELEGATES.has(deps.storage, (&creator, &sender)) {
        return Err(ContractError::Unauthorized {});
    }

    let mut data = COLLECTIONS
        .may_load(deps.storage, (&creator, &collection_name))?
        .ok_or_else(|| ContractError::NoSuchCollection {
            name: collection_name.clone(),
        })?;
    if maximum < data.supply {
        return Err(ContractError::MaximumBelowSupply {
            maximum,
            supply: data.supply,
        });
    }
    data.maximum = maximum;
    COLLECTIONS.save(deps.storage, (&creator, &collection_name), &data)?;

    Ok(Response::new()
        .add_attribute("action", "mutate_collection_maximum")
        .add_attribute("sender", sender)
        .add_attribute("collection", collection_name)
        .add_attribute("maximum", maximum.to_string()))
}

/// Units of `collectible` held by `owner`. A collectible named with
/// the wrong kind does not exist.
fn balance_of(deps: Deps, owner: &Addr, collectible: &CollectibleId) -> StdResult<u64> {
    let key = token_key(collectible);
    match KINDS.may_load(deps.storage, &key)? {
        Some(kind) if kind == collectible.kind => Ok(BALANCES
            .may_load(deps.storage, (&key, owner))?
            .unwrap_or_default()),
        _ => Ok(0),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Balance { owner, collectible } => {
            let owner = deps.api.addr_validate(&owner)?;
            let balance = balance_of(deps, &owner, &collectible)?;
            to_json_binary(&BalanceResponse { balance })
        }
        QueryMsg::Kind {
            creator,
            collection,
            name,
            edition,
        } => {
            let key = edition_key(&creator, &collection, &name, edition);
            let kind = KINDS.may_load(deps.storage, &key)?;
            to_json_binary(&KindResponse { kind })
        }
        QueryMsg::Collection { creator, name } => {
            let creator = deps.api.addr_validate(&creator)?;
            to_json_binary(&COLLECTIONS.load(deps.storage, (&creator, &name))?)
        }
    }
}
