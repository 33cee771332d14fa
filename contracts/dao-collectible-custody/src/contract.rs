#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_json_binary, Addr, Binary, CosmosMsg, Deps, DepsMut, Empty, Env, MessageInfo, Response,
    StdResult,
};
use cw2::{get_contract_version, set_contract_version, ContractVersion};

use crate::error::ContractError;
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::state::CONTROLLER;

pub(crate) const CONTRACT_NAME: &str = "crates.io:dao-collectible-custody";
pub(crate) const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let owner = msg.owner.unwrap_or_else(|| info.sender.to_string());
    let ownership = cw_ownable::initialize_owner(deps.storage, deps.api, Some(&owner))?;

    let controller = msg
        .controller
        .map(|c| deps.api.addr_validate(&c))
        .transpose()?;
    CONTROLLER.save(deps.storage, &controller)?;

    Ok(Response::default()
        .add_attribute("method", "instantiate")
        .add_attribute(
            "controller",
            controller
                .map(|c| c.into_string())
                .unwrap_or_else(|| "None".to_string()),
        )
        .add_attributes(ownership.into_attributes()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Execute { msgs } => execute_execute(deps.as_ref(), info.sender, msgs),
        ExecuteMsg::UpdateController { controller } => {
            execute_update_controller(deps, info, controller)
        }
        ExecuteMsg::UpdateOwnership(action) => {
            let ownership = cw_ownable::update_ownership(deps, &env.block, &info.sender, action)?;
            Ok(Response::default().add_attributes(ownership.into_attributes()))
        }
    }
}

pub fn execute_execute(
    deps: Deps,
    sender: Addr,
    msgs: Vec<CosmosMsg<Empty>>,
) -> Result<Response, ContractError> {
    match CONTROLLER.load(deps.storage)? {
        Some(controller) if controller == sender => Ok(Response::default()
            .add_attribute("action", "execute")
            .add_attribute("sender", sender)
            .add_attribute("msg_count", msgs.len().to_string())
            .add_messages(msgs)),
        _ => Err(ContractError::NotController {}),
    }
}

pub fn execute_update_controller(
    deps: DepsMut,
    info: MessageInfo,
    controller: Option<String>,
) -> Result<Response, ContractError> {
    cw_ownable::assert_owner(deps.storage, &info.sender)?;

    let controller = controller
        .map(|c| deps.api.addr_validate(&c))
        .transpose()?;
    CONTROLLER.save(deps.storage, &controller)?;

    Ok(Response::default()
        .add_attribute("action", "update_controller")
        .add_attribute("sender", info.sender)
        .add_attribute(
            "controller",
            controller
                .map(|c| c.into_string())
                .unwrap_or_else(|| "None".to_string()),
        ))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Controller {} => to_json_binary(&CONTROLLER.load(deps.storage)?),
        QueryMsg::Ownership {} => to_json_binary(&cw_ownable::get_ownership(deps.storage)?),
        QueryMsg::Info {} => to_json_binary(&get_contract_version(deps.storage)?),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    let ContractVersion { contract, .. } = get_contract_version(deps.storage)?;
    if contract != CONTRACT_NAME {
        return Err(ContractError::WrongContract {
            stored: contract,
            expected: CONTRACT_NAME.to_string(),
        });
    }
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::default().add_attribute("action", "migrate"))
}
