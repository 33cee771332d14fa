//! The authority to act as the governed account. The governed account
//! only executes messages sent by its controller, so every message the
//! DAO sends through it is built here.

use cosmwasm_std::{to_json_binary, Addr, BankMsg, Coin, CosmosMsg, StdResult, WasmMsg};
use dao_collectible_interface::{collection::CollectionExecuteMsg, custody::CustodyExecuteMsg};

use crate::state::Config;

/// A handle on the governed account. Only this crate can create one,
/// and only while resolving a passing proposal.
#[derive(Debug)]
pub struct Authority {
    account: Addr,
}

impl Authority {
    pub(crate) fn obtain(config: &Config) -> Self {
        Self {
            account: config.governed_account.clone(),
        }
    }

    pub fn account(&self) -> &Addr {
        &self.account
    }

    /// Has the governed account execute `msgs` as itself.
    pub fn execute(&self, msgs: Vec<CosmosMsg>) -> StdResult<CosmosMsg> {
        Ok(WasmMsg::Execute {
            contract_addr: self.account.to_string(),
            msg: to_json_binary(&CustodyExecuteMsg::Execute { msgs })?,
            funds: vec![],
        }
        .into())
    }

    /// Sends `amount` from the governed account to `dst`.
    pub fn transfer(&self, dst: &Addr, amount: Coin) -> StdResult<CosmosMsg> {
        self.execute(vec![BankMsg::Send {
            to_address: dst.to_string(),
            amount: vec![amount],
        }
        .into()])
    }

    /// Narrows this authority to acting for `principal`, an account
    /// that has delegated to the governed account.
    pub fn scoped_to<'a>(&'a self, principal: &'a Addr) -> ScopedAuthority<'a> {
        ScopedAuthority {
            authority: self,
            principal,
        }
    }
}

/// Acts through the governed account on behalf of `principal`.
#[derive(Debug)]
pub struct ScopedAuthority<'a> {
    authority: &'a Authority,
    principal: &'a Addr,
}

impl<'a> ScopedAuthority<'a> {
    pub fn principal(&self) -> &Addr {
        self.principal
    }

    /// Asks `registry` to change the supply cap of the principal's
    /// collection `collection_name`.
    pub fn mutate_collection_maximum(
        &self,
        registry: &Addr,
        collection_name: &str,
        maximum: u64,
    ) -> StdResult<CosmosMsg> {
        self.authority.execute(vec![WasmMsg::Execute {
            contract_addr: registry.to_string(),
            msg: to_json_binary(&CollectionExecuteMsg::MutateCollectionMaximum {
                creator: self.principal.to_string(),
                collection_name: collection_name.to_string(),
                maximum,
            })?,
            funds: vec![],
        }
        .into()])
    }
}
