#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

pub mod action;
pub mod contract;
pub mod custody;
mod error;
pub mod ledger;
pub mod membership;
pub mod msg;
pub mod proposal;
pub mod query;
pub mod state;

#[cfg(test)]
mod testing;

// so that consumers don't need a cw_ownable dependency to consume this contract's queries.
pub use cw_ownable::Ownership;

pub use crate::error::{ContractError, ErrorKind};
