use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{CosmosMsg, Empty};
use cw_ownable::cw_ownable_execute;

#[cw_serde]
pub struct InstantiateMsg {
    /// The account that may change the controller. Defaults to the
    /// instantiator.
    pub owner: Option<String>,
    /// The contract allowed to make this account execute messages.
    pub controller: Option<String>,
}

#[cw_ownable_execute]
#[cw_serde]
pub enum ExecuteMsg {
    /// Executes `msgs` with this account as the sender. Only callable
    /// by the controller. Kept wire compatible with
    /// `dao_collectible_interface::custody::CustodyExecuteMsg`.
    Execute { msgs: Vec<CosmosMsg<Empty>> },
    /// Replaces the controller. `None` freezes the account. Only
    /// callable by the owner.
    UpdateController { controller: Option<String> },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Returns the current controller, if any.
    #[returns(::std::option::Option<::cosmwasm_std::Addr>)]
    Controller {},
    /// Returns info about the contract ownership.
    #[returns(::cw_ownable::Ownership<::cosmwasm_std::Addr>)]
    Ownership {},
    #[returns(::cw2::ContractVersion)]
    Info {},
}

#[cw_serde]
pub struct MigrateMsg {}
