#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Order, Response, StdResult, Storage,
    Uint128,
};
use cw2::{get_contract_version, set_contract_version, ContractVersion};
use cw_storage_plus::Bound;
use dao_collectible_interface::{args::ArgumentBag, collectible::CollectibleId};
use dao_collectible_voting::{
    status::Resolution,
    threshold::ResolveThreshold,
    voting::{Outcome, Vote, Votes},
};

use crate::action::ProposalAction;
use crate::custody::Authority;
use crate::error::ContractError;
use crate::msg::{
    ExecuteMsg, InitializeMsg, InstantiateMsg, MigrateMsg, ProposeMsg, QueryMsg, UnitKey,
};
use crate::proposal::{advance_proposal_id, next_proposal_id, validate_text, Proposal};
use crate::query::{
    BallotInfo, BallotListResponse, BallotResponse, ConfigResponse, MemberInfo,
    MemberListResponse, MemberResponse, ProposalListResponse, ProposalResponse,
};
use crate::state::{
    CollectionConfig, Config, BALLOTS, CONFIG, MEMBERS, PROPOSALS, PROPOSAL_COUNT, TOTAL_SUPPLY,
};
use crate::{ledger, membership};

pub(crate) const CONTRACT_NAME: &str = "crates.io:dao-collectible-governance";
pub(crate) const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default limit for paginated queries.
pub const DEFAULT_LIMIT: u64 = 30;
pub const MAX_LIMIT: u64 = 100;

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let admin = msg.admin.unwrap_or_else(|| info.sender.to_string());
    let ownership = cw_ownable::initialize_owner(deps.storage, deps.api, Some(&admin))?;

    Ok(Response::default()
        .add_attribute("method", "instantiate")
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
        ExecuteMsg::Initialize(msg) => execute_initialize(deps, info, msg),
        ExecuteMsg::Enroll { units } => execute_enroll(deps, info, units),
        ExecuteMsg::Propose(msg) => execute_propose(deps, env, info, msg),
        ExecuteMsg::Vote {
            proposal_id,
            vote,
            units,
        } => execute_vote(deps, env, info, proposal_id, vote, units),
        ExecuteMsg::Resolve { proposal_id } => execute_resolve(deps, env, info, proposal_id),
        ExecuteMsg::UpdateOwnership(action) => {
            let ownership = cw_ownable::update_ownership(deps, &env.block, &info.sender, action)?;
            Ok(Response::default().add_attributes(ownership.into_attributes()))
        }
    }
}

fn load_config(storage: &dyn Storage) -> Result<Config, ContractError> {
    CONFIG
        .may_load(storage)?
        .ok_or(ContractError::NotInitialized {})
}

pub fn execute_initialize(
    deps: DepsMut,
    info: MessageInfo,
    msg: InitializeMsg,
) -> Result<Response, ContractError> {
    cw_ownable::assert_owner(deps.storage, &info.sender)?;
    if CONFIG.may_load(deps.storage)?.is_some() {
        return Err(ContractError::AlreadyInitialized {});
    }

    if msg.name.trim().is_empty() {
        return Err(ContractError::EmptyName {});
    }
    let resolve_threshold =
        ResolveThreshold::new(msg.threshold_numerator, msg.threshold_denominator)?;
    if msg.voting_duration == 0 {
        return Err(ContractError::ZeroVotingDuration {});
    }

    let config = Config {
        name: msg.name,
        resolve_threshold,
        governed_account: deps.api.addr_validate(&msg.governed_account)?,
        voting_duration: msg.voting_duration,
        min_proposal_weight: msg.min_proposal_weight,
        collection: CollectionConfig {
            contract: deps.api.addr_validate(&msg.collection_contract)?,
            creator: deps.api.addr_validate(&msg.token_creator)?,
            name: msg.collection_name,
        },
        denom: msg.denom,
    };
    CONFIG.save(deps.storage, &config)?;
    TOTAL_SUPPLY.save(deps.storage, &Uint128::zero())?;
    PROPOSAL_COUNT.save(deps.storage, &0)?;

    Ok(Response::default()
        .add_attribute("action", "initialize")
        .add_attribute("sender", info.sender)
        .add_attribute("name", config.name)
        .add_attribute("governed_account", config.governed_account)
        .add_attribute("collection", config.collection.name))
}

pub fn execute_enroll(
    deps: DepsMut,
    info: MessageInfo,
    units: Vec<CollectibleId>,
) -> Result<Response, ContractError> {
    let config = load_config(deps.storage)?;
    let total_supply = membership::enroll(deps, &config.collection, &units)?;

    Ok(Response::default()
        .add_attribute("action", "enroll")
        .add_attribute("sender", info.sender)
        .add_attribute("units", units.len().to_string())
        .add_attribute("total_supply", total_supply))
}

pub fn execute_propose(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ProposeMsg,
) -> Result<Response, ContractError> {
    let config = load_config(deps.storage)?;

    validate_text(&msg.name, &msg.description)?;

    let weight =
        membership::voting_weight(deps.as_ref(), &config.collection, &info.sender, &msg.units)?;
    if weight < config.min_proposal_weight {
        return Err(ContractError::InsufficientWeight {
            weight,
            min: config.min_proposal_weight,
        });
    }

    let args = ArgumentBag::from_parts(msg.arg_names, msg.arg_values, msg.arg_types)?;
    let action = ProposalAction::parse(deps.api, &msg.action_name, &args)?;

    if msg.start_time <= env.block.time {
        return Err(ContractError::StartTimeNotFuture {
            start_time: msg.start_time,
            now: env.block.time,
        });
    }

    let id = advance_proposal_id(deps.storage)?;
    let proposal = Proposal {
        name: msg.name,
        description: msg.description,
        proposer: info.sender.clone(),
        action,
        start_time: msg.start_time,
        resolution: Resolution::Unresolved,
        votes: Votes::zero(),
    };
    PROPOSALS.save(deps.storage, id, &proposal)?;

    Ok(Response::default()
        .set_data(to_json_binary(&id)?)
        .add_attribute("action", "propose")
        .add_attribute("sender", info.sender)
        .add_attribute("proposal_id", id.to_string())
        .add_attribute("proposal_action", proposal.action.name())
        .add_attribute("start_time", proposal.start_time.seconds().to_string())
        .add_attribute("weight", weight))
}

pub fn execute_vote(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    proposal_id: u64,
    vote: Vote,
    units: Vec<CollectibleId>,
) -> Result<Response, ContractError> {
    let config = load_config(deps.storage)?;
    let prop = PROPOSALS
        .may_load(deps.storage, proposal_id)?
        .ok_or(ContractError::NoSuchProposal { id: proposal_id })?;
    prop.assert_voting_open(proposal_id, env.block.time, config.voting_duration)?;

    let (votes, power) = ledger::cast(
        deps,
        &config.collection,
        proposal_id,
        &info.sender,
        vote,
        &units,
    )?;

    Ok(Response::default()
        .add_attribute("action", "vote")
        .add_attribute("sender", info.sender)
        .add_attribute("proposal_id", proposal_id.to_string())
        .add_attribute("position", vote.to_string())
        .add_attribute("units", units.len().to_string())
        .add_attribute("power", power)
        .add_attribute("yes", votes.yes)
        .add_attribute("no", votes.no))
}

pub fn execute_resolve(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    proposal_id: u64,
) -> Result<Response, ContractError> {
    let config = load_config(deps.storage)?;
    let mut prop = PROPOSALS
        .may_load(deps.storage, proposal_id)?
        .ok_or(ContractError::NoSuchProposal { id: proposal_id })?;
    prop.assert_resolvable(proposal_id, env.block.time, config.voting_duration)?;

    let votes = ledger::consume(deps.storage, proposal_id)?;
    let total_supply = TOTAL_SUPPLY.load(deps.storage)?;
    let outcome = votes.outcome(&config.resolve_threshold, total_supply);

    prop.resolution = outcome.resolution();
    prop.votes = votes;
    PROPOSALS.save(deps.storage, proposal_id, &prop)?;

    // A failing action message reverts this whole transaction, leaving
    // the proposal unresolved.
    let msgs = match outcome {
        Outcome::Passed => {
            let authority = Authority::obtain(&config);
            prop.action.clone().into_msgs(&authority, &config)?
        }
        Outcome::QuorumNotMet | Outcome::MajorityNotReached => vec![],
    };

    Ok(Response::default()
        .add_messages(msgs)
        .add_attribute("action", "resolve")
        .add_attribute("sender", info.sender)
        .add_attribute("proposal_id", proposal_id.to_string())
        .add_attribute("resolution", prop.resolution.to_string())
        .add_attribute("reason", outcome.to_string())
        .add_attribute("proposal_action", prop.action.name())
        .add_attribute("yes", prop.votes.yes)
        .add_attribute("no", prop.votes.no)
        .add_attribute("total_supply", total_supply))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => query_config(deps),
        QueryMsg::Proposal { proposal_id } => query_proposal(deps, proposal_id),
        QueryMsg::ListProposals { start_after, limit } => {
            query_list_proposals(deps, start_after, limit)
        }
        QueryMsg::ReverseProposals {
            start_before,
            limit,
        } => query_reverse_proposals(deps, start_before, limit),
        QueryMsg::ProposalCount {} => {
            to_json_binary(&PROPOSAL_COUNT.may_load(deps.storage)?.unwrap_or_default())
        }
        QueryMsg::NextProposalId {} => to_json_binary(&next_proposal_id(deps.storage)?),
        QueryMsg::Tally { proposal_id } => {
            to_json_binary(&ledger::tally(deps.storage, proposal_id)?)
        }
        QueryMsg::Ballot { proposal_id, unit } => query_ballot(deps, proposal_id, unit),
        QueryMsg::ListBallots {
            proposal_id,
            start_after,
            limit,
        } => query_list_ballots(deps, proposal_id, start_after, limit),
        QueryMsg::Member { unit } => query_member(deps, unit),
        QueryMsg::ListMembers { start_after, limit } => {
            query_list_members(deps, start_after, limit)
        }
        QueryMsg::TotalSupply {} => {
            to_json_binary(&TOTAL_SUPPLY.may_load(deps.storage)?.unwrap_or_default())
        }
        QueryMsg::Ownership {} => to_json_binary(&cw_ownable::get_ownership(deps.storage)?),
        QueryMsg::Info {} => to_json_binary(&get_contract_version(deps.storage)?),
    }
}

pub fn query_config(deps: Deps) -> StdResult<Binary> {
    let config = CONFIG.load(deps.storage)?;
    to_json_binary(&ConfigResponse {
        config,
        total_supply: TOTAL_SUPPLY.load(deps.storage)?,
        proposal_count: PROPOSAL_COUNT.load(deps.storage)?,
    })
}

fn proposal_response(
    storage: &dyn Storage,
    voting_duration: u64,
    id: u64,
    proposal: Proposal,
) -> StdResult<ProposalResponse> {
    let live = if proposal.resolution.is_resolved() {
        None
    } else {
        Some(ledger::tally(storage, id)?)
    };
    Ok(proposal.into_response(id, voting_duration, live))
}

pub fn query_proposal(deps: Deps, id: u64) -> StdResult<Binary> {
    let config = CONFIG.load(deps.storage)?;
    let proposal = PROPOSALS.load(deps.storage, id)?;
    to_json_binary(&proposal_response(
        deps.storage,
        config.voting_duration,
        id,
        proposal,
    )?)
}

fn list_proposals(
    deps: Deps,
    min: Option<Bound<u64>>,
    max: Option<Bound<u64>>,
    order: Order,
    limit: Option<u64>,
) -> StdResult<Binary> {
    let config = CONFIG.load(deps.storage)?;
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT);
    let proposals = PROPOSALS
        .range(deps.storage, min, max, order)
        .take(limit as usize)
        .map(|item| {
            let (id, proposal) = item?;
            proposal_response(deps.storage, config.voting_duration, id, proposal)
        })
        .collect::<StdResult<Vec<_>>>()?;

    to_json_binary(&ProposalListResponse { proposals })
}

pub fn query_list_proposals(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u64>,
) -> StdResult<Binary> {
    list_proposals(
        deps,
        start_after.map(Bound::exclusive),
        None,
        Order::Ascending,
        limit,
    )
}

pub fn query_reverse_proposals(
    deps: Deps,
    start_before: Option<u64>,
    limit: Option<u64>,
) -> StdResult<Binary> {
    list_proposals(
        deps,
        None,
        start_before.map(Bound::exclusive),
        Order::Descending,
        limit,
    )
}

pub fn query_ballot(deps: Deps, proposal_id: u64, unit: CollectibleId) -> StdResult<Binary> {
    let config = CONFIG.load(deps.storage)?;
    let ballot = match membership::member_key(&config.collection, &unit) {
        Some((name, edition)) => BALLOTS
            .may_load(deps.storage, (proposal_id, name, edition))?
            .map(|ballot| BallotInfo {
                name: name.to_string(),
                edition,
                voter: ballot.voter,
                vote: ballot.vote,
                power: ballot.power,
            }),
        None => None,
    };
    to_json_binary(&BallotResponse { ballot })
}

pub fn query_list_ballots(
    deps: Deps,
    proposal_id: u64,
    start_after: Option<UnitKey>,
    limit: Option<u64>,
) -> StdResult<Binary> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT);
    let min = start_after
        .as_ref()
        .map(|key| Bound::exclusive((key.name.as_str(), key.edition)));

    let ballots = BALLOTS
        .sub_prefix(proposal_id)
        .range(deps.storage, min, None, Order::Ascending)
        .take(limit as usize)
        .map(|item| {
            let ((name, edition), ballot) = item?;
            Ok(BallotInfo {
                name,
                edition,
                voter: ballot.voter,
                vote: ballot.vote,
                power: ballot.power,
            })
        })
        .collect::<StdResult<Vec<_>>>()?;

    to_json_binary(&BallotListResponse { ballots })
}

pub fn query_member(deps: Deps, unit: CollectibleId) -> StdResult<Binary> {
    let config = CONFIG.load(deps.storage)?;
    let weight = membership::weight_of(deps.storage, &config.collection, &unit)?;
    to_json_binary(&MemberResponse { weight })
}

pub fn query_list_members(
    deps: Deps,
    start_after: Option<UnitKey>,
    limit: Option<u64>,
) -> StdResult<Binary> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT);
    let min = start_after
        .as_ref()
        .map(|key| Bound::exclusive((key.name.as_str(), key.edition)));

    let members = MEMBERS
        .range(deps.storage, min, None, Order::Ascending)
        .take(limit as usize)
        .map(|item| {
            let ((name, edition), weight) = item?;
            Ok(MemberInfo {
                name,
                edition,
                weight,
            })
        })
        .collect::<StdResult<Vec<_>>>()?;

    to_json_binary(&MemberListResponse { members })
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, msg: MigrateMsg) -> Result<Response, ContractError> {
    match msg {
        MigrateMsg::FromCompatible {} => {
            let ContractVersion { contract, .. } = get_contract_version(deps.storage)?;
            if contract != CONTRACT_NAME {
                return Err(ContractError::WrongContract {
                    stored: contract,
                    expected: CONTRACT_NAME.to_string(),
                });
            }
            set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
            Ok(Response::default()
                .add_attribute("action", "migrate")
                .add_attribute("version", CONTRACT_VERSION))
        }
    }
}
