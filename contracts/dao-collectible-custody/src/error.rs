use cosmwasm_std::StdError;
use cw_ownable::OwnershipError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error(transparent)]
    Ownable(#[from] OwnershipError),

    #[error("only the controller may make this account execute messages")]
    NotController {},

    #[error("can not migrate. stored contract is ({stored}), expected ({expected})")]
    WrongContract { stored: String, expected: String },
}
