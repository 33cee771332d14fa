//! The administrative actions a proposal may carry. Proposers submit an
//! action name and an untyped argument bag; `ProposalAction::parse`
//! turns that into one of the variants below or rejects it, so a
//! stored proposal always holds a well formed action.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{coin, Addr, Api, CosmosMsg, StdResult};
use dao_collectible_interface::args::ArgumentBag;

use crate::custody::Authority;
use crate::error::ContractError;
use crate::state::Config;

pub const NO_OP: &str = "no_op";
pub const TRANSFER_FUND: &str = "transfer_fund";
pub const MUTATE_COLLECTION_MAXIMUM: &str = "mutate_collection_maximum";

#[cw_serde]
pub enum ProposalAction {
    /// Does nothing when executed.
    NoOp {},
    /// Sends `amount` of the DAO's denom from the governed account to
    /// `dst`.
    TransferFund { dst: Addr, amount: u64 },
    /// Changes the supply cap of `creator`'s collection
    /// `collection_name`. `creator` must have approved the governed
    /// account as a delegate.
    MutateCollectionMaximum {
        creator: Addr,
        collection_name: String,
        new_maximum: u64,
    },
}

impl ProposalAction {
    /// Matches `args` against the schema of `action_name`. The bag
    /// must contain exactly the action's arguments with their declared
    /// types.
    pub fn parse(
        api: &dyn Api,
        action_name: &str,
        args: &ArgumentBag,
    ) -> Result<Self, ContractError> {
        let unsupported = || ContractError::UnsupportedAction {
            action: action_name.to_string(),
        };

        match action_name {
            NO_OP if args.is_empty() => Ok(ProposalAction::NoOp {}),
            TRANSFER_FUND if args.len() == 2 => {
                let dst = args.address("dst").ok_or_else(unsupported)?;
                let amount = args.u64("amount").ok_or_else(unsupported)?;
                Ok(ProposalAction::TransferFund {
                    dst: validate_address(api, "dst", dst)?,
                    amount,
                })
            }
            MUTATE_COLLECTION_MAXIMUM if args.len() == 3 => {
                let creator = args.address("creator").ok_or_else(unsupported)?;
                let collection_name = args.string("collection_name").ok_or_else(unsupported)?;
                let new_maximum = args.u64("new_maximum").ok_or_else(unsupported)?;
                Ok(ProposalAction::MutateCollectionMaximum {
                    creator: validate_address(api, "creator", creator)?,
                    collection_name: collection_name.to_string(),
                    new_maximum,
                })
            }
            _ => Err(unsupported()),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ProposalAction::NoOp {} => NO_OP,
            ProposalAction::TransferFund { .. } => TRANSFER_FUND,
            ProposalAction::MutateCollectionMaximum { .. } => MUTATE_COLLECTION_MAXIMUM,
        }
    }

    /// The messages that carry out this action through `authority`.
    pub fn into_msgs(self, authority: &Authority, config: &Config) -> StdResult<Vec<CosmosMsg>> {
        match self {
            ProposalAction::NoOp {} => Ok(vec![]),
            ProposalAction::TransferFund { dst, amount } => {
                Ok(vec![authority.transfer(&dst, coin(amount.into(), &config.denom))?])
            }
            ProposalAction::MutateCollectionMaximum {
                creator,
                collection_name,
                new_maximum,
            } => {
                let scoped = authority.scoped_to(&creator);
                Ok(vec![scoped.mutate_collection_maximum(
                    &config.collection.contract,
                    &collection_name,
                    new_maximum,
                )?])
            }
        }
    }
}

fn validate_address(api: &dyn Api, name: &str, address: &str) -> Result<Addr, ContractError> {
    api.addr_validate(address)
        .map_err(|_| ContractError::InvalidAddress {
            name: name.to_string(),
            address: address.to_string(),
        })
}
