use cosmwasm_std::{StdError, Timestamp, Uint128};
use cw_ownable::OwnershipError;
use dao_collectible_interface::args::ArgumentError;
use dao_collectible_voting::threshold::ThresholdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error(transparent)]
    Std(#[from] StdError),

    #[error(transparent)]
    Ownable(#[from] OwnershipError),

    #[error(transparent)]
    Threshold(#[from] ThresholdError),

    #[error("malformed action arguments: {0}")]
    MalformedArguments(#[from] ArgumentError),

    #[error("the DAO has not been initialized")]
    NotInitialized {},

    #[error("the DAO has already been initialized")]
    AlreadyInitialized {},

    #[error("DAO name can not be empty")]
    EmptyName {},

    #[error("voting duration must be greater than zero")]
    ZeroVotingDuration {},

    #[error("collectible ({unit}) is not eligible for enrollment")]
    NotEligible { unit: String },

    #[error("collectible ({unit}) is already enrolled")]
    AlreadyEnrolled { unit: String },

    #[error("{field} is ({length}) characters, must be <= ({max}) characters")]
    TooLong {
        field: String,
        length: u64,
        max: u64,
    },

    #[error("({owner}) does not hold exactly one of collectible ({unit})")]
    NotOwned { owner: String, unit: String },

    #[error("collectible ({unit}) is not enrolled")]
    NotMember { unit: String },

    #[error("collectible ({unit}) is listed more than once")]
    DuplicateUnit { unit: String },

    #[error("voting weight ({weight}) is below the minimum proposal weight ({min})")]
    InsufficientWeight { weight: Uint128, min: Uint128 },

    #[error("action ({action}) is not supported with the given arguments")]
    UnsupportedAction { action: String },

    #[error("argument ({name}) is not a valid address: ({address})")]
    InvalidAddress { name: String, address: String },

    #[error("start time ({start_time}) must be after the current time ({now})")]
    StartTimeNotFuture { start_time: Timestamp, now: Timestamp },

    #[error("no such proposal ({id})")]
    NoSuchProposal { id: u64 },

    #[error("voting on proposal ({id}) opens at ({start_time})")]
    VotingNotStarted { id: u64, start_time: Timestamp },

    #[error("voting on proposal ({id}) closed at ({end_time})")]
    VotingClosed { id: u64, end_time: Timestamp },

    #[error("voting on proposal ({id}) is open until ({end_time})")]
    VotingStillOpen { id: u64, end_time: Timestamp },

    #[error("proposal ({id}) has already been resolved")]
    AlreadyResolved { id: u64 },

    #[error("collectible ({unit}) has already voted on proposal ({id})")]
    AlreadyVoted { id: u64, unit: String },

    #[error("a vote must include at least one voting unit")]
    NoVotingUnits {},

    #[error("can not migrate. stored contract is ({stored}), expected ({expected})")]
    WrongContract { stored: String, expected: String },
}

/// Broad categories of failure, for clients that react to the kind of
/// error rather than the exact variant.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The sender may not do this: wrong admin, or not the holder of a
    /// voting unit.
    PermissionDenied,
    /// Duplicate enrollment or vote.
    AlreadyExists,
    /// No such proposal or membership entry.
    NotFound,
    /// Bad lengths, bad timing, unsupported action or malformed
    /// arguments.
    InvalidArgument,
    /// The proposal is in the wrong state or phase for the operation.
    StateConflict,
    /// Voting units too light to propose.
    InsufficientWeight,
}

impl ContractError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ContractError::Std(StdError::NotFound { .. }) => ErrorKind::NotFound,
            ContractError::Std(_) => ErrorKind::InvalidArgument,
            ContractError::Ownable(_) | ContractError::NotOwned { .. } => {
                ErrorKind::PermissionDenied
            }
            ContractError::AlreadyEnrolled { .. } | ContractError::AlreadyVoted { .. } => {
                ErrorKind::AlreadyExists
            }
            ContractError::NoSuchProposal { .. } | ContractError::NotMember { .. } => {
                ErrorKind::NotFound
            }
            ContractError::Threshold(_)
            | ContractError::MalformedArguments(_)
            | ContractError::EmptyName {}
            | ContractError::ZeroVotingDuration {}
            | ContractError::NotEligible { .. }
            | ContractError::TooLong { .. }
            | ContractError::DuplicateUnit { .. }
            | ContractError::UnsupportedAction { .. }
            | ContractError::InvalidAddress { .. }
            | ContractError::StartTimeNotFuture { .. }
            | ContractError::VotingNotStarted { .. }
            | ContractError::NoVotingUnits {}
            | ContractError::WrongContract { .. } => ErrorKind::InvalidArgument,
            ContractError::NotInitialized {}
            | ContractError::AlreadyInitialized {}
            | ContractError::VotingClosed { .. }
            | ContractError::VotingStillOpen { .. }
            | ContractError::AlreadyResolved { .. } => ErrorKind::StateConflict,
            ContractError::InsufficientWeight { .. } => ErrorKind::InsufficientWeight,
        }
    }
}
