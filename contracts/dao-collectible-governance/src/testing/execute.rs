use anyhow::Result as AnyResult;
use cosmwasm_std::{from_json, Addr};
use cw_multi_test::{App, AppResponse, Executor};
use dao_collectible_interface::collectible::{CollectibleId, CollectibleKind};
use dao_collectible_voting::voting::Vote;

use crate::msg::{ExecuteMsg, ProposeMsg};

use super::{instantiate::TestDao, COLLECTION, CREATOR};

/// A fixed supply collectible from the DAO's collection.
pub(crate) fn unit(name: &str, edition: u64) -> CollectibleId {
    CollectibleId {
        creator: CREATOR.to_string(),
        collection: COLLECTION.to_string(),
        name: name.to_string(),
        edition,
        kind: CollectibleKind::FixedSupply,
    }
}

/// Mints `amount` of `unit` to `owner` from `unit`'s collection.
pub(crate) fn mint_amount(
    app: &mut App,
    dao: &TestDao,
    unit: &CollectibleId,
    owner: &str,
    amount: u64,
) {
    app.execute_contract(
        Addr::unchecked(&unit.creator),
        dao.registry.clone(),
        &dao_test_collection::msg::ExecuteMsg::Mint {
            collection: unit.collection.clone(),
            name: unit.name.clone(),
            edition: unit.edition,
            kind: unit.kind,
            owner: owner.to_string(),
            amount,
        },
        &[],
    )
    .unwrap();
}

pub(crate) fn mint(app: &mut App, dao: &TestDao, unit: &CollectibleId, owner: &str) {
    mint_amount(app, dao, unit, owner, 1)
}

/// Mints `count` editions of `name` to `owner` and enrolls them.
pub(crate) fn mint_and_enroll(
    app: &mut App,
    dao: &TestDao,
    owner: &str,
    name: &str,
    count: u64,
) -> Vec<CollectibleId> {
    let units: Vec<_> = (1..=count).map(|edition| unit(name, edition)).collect();
    for unit in &units {
        mint(app, dao, unit, owner);
    }
    enroll(app, dao, owner, units.clone()).unwrap();
    units
}

pub(crate) fn enroll(
    app: &mut App,
    dao: &TestDao,
    sender: &str,
    units: Vec<CollectibleId>,
) -> AnyResult<AppResponse> {
    app.execute_contract(
        Addr::unchecked(sender),
        dao.governance.clone(),
        &ExecuteMsg::Enroll { units },
        &[],
    )
}

pub(crate) fn transfer_unit(
    app: &mut App,
    dao: &TestDao,
    from: &str,
    unit: &CollectibleId,
    to: &str,
) {
    app.execute_contract(
        Addr::unchecked(from),
        dao.registry.clone(),
        &dao_test_collection::msg::ExecuteMsg::Transfer {
            collectible: unit.clone(),
            recipient: to.to_string(),
        },
        &[],
    )
    .unwrap();
}

/// A proposal message starting ten seconds from now.
pub(crate) fn propose_msg(
    app: &App,
    action_name: &str,
    args: &[(&str, &str, &str)],
    units: Vec<CollectibleId>,
) -> ProposeMsg {
    ProposeMsg {
        name: "proposal".to_string(),
        description: "a proposal".to_string(),
        action_name: action_name.to_string(),
        arg_names: args.iter().map(|(name, _, _)| name.to_string()).collect(),
        arg_values: args.iter().map(|(_, value, _)| value.to_string()).collect(),
        arg_types: args.iter().map(|(_, _, ty)| ty.to_string()).collect(),
        start_time: app.block_info().time.plus_seconds(10),
        units,
    }
}

pub(crate) fn propose_raw(
    app: &mut App,
    dao: &TestDao,
    proposer: &str,
    msg: ProposeMsg,
) -> AnyResult<AppResponse> {
    app.execute_contract(
        Addr::unchecked(proposer),
        dao.governance.clone(),
        &ExecuteMsg::Propose(msg),
        &[],
    )
}

/// Creates a proposal and returns its id.
pub(crate) fn propose(
    app: &mut App,
    dao: &TestDao,
    proposer: &str,
    action_name: &str,
    args: &[(&str, &str, &str)],
    units: Vec<CollectibleId>,
) -> u64 {
    let msg = propose_msg(app, action_name, args, units);
    let res = propose_raw(app, dao, proposer, msg).unwrap();
    from_json(res.data.unwrap()).unwrap()
}

pub(crate) fn vote(
    app: &mut App,
    dao: &TestDao,
    voter: &str,
    proposal_id: u64,
    vote: Vote,
    units: Vec<CollectibleId>,
) -> AnyResult<AppResponse> {
    app.execute_contract(
        Addr::unchecked(voter),
        dao.governance.clone(),
        &ExecuteMsg::Vote {
            proposal_id,
            vote,
            units,
        },
        &[],
    )
}

pub(crate) fn resolve(app: &mut App, dao: &TestDao, proposal_id: u64) -> AnyResult<AppResponse> {
    app.execute_contract(
        Addr::unchecked("anyone"),
        dao.governance.clone(),
        &ExecuteMsg::Resolve { proposal_id },
        &[],
    )
}

pub(crate) fn advance_time(app: &mut App, seconds: u64) {
    app.update_block(|block| block.time = block.time.plus_seconds(seconds));
}

/// Moves the block to `proposal_id`'s start time.
pub(crate) fn open_voting(app: &mut App, dao: &TestDao, proposal_id: u64) {
    let start_time = super::queries::query_proposal(app, dao, proposal_id)
        .proposal
        .start_time;
    app.update_block(|block| block.time = start_time);
}

/// Moves the block just past `proposal_id`'s voting window.
pub(crate) fn close_voting(app: &mut App, dao: &TestDao, proposal_id: u64) {
    let end_time = super::queries::query_proposal(app, dao, proposal_id).end_time;
    app.update_block(|block| block.time = end_time.plus_seconds(1));
}

/// Pulls the value of attribute `key` out of a response.
pub(crate) fn attribute(res: &AppResponse, key: &str) -> String {
    res.events
        .iter()
        .flat_map(|event| event.attributes.iter())
        .find(|attr| attr.key == key)
        .map(|attr| attr.value.clone())
        .unwrap()
}
