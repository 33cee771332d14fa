use cosmwasm_schema::cw_serde;
use cosmwasm_std::{CosmosMsg, Empty};

/// Messages a custody account accepts from its controller.
#[cw_serde]
pub enum CustodyExecuteMsg {
    /// Executes `msgs` with the custody account as the sender.
    Execute { msgs: Vec<CosmosMsg<Empty>> },
}
