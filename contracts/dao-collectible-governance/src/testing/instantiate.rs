use anyhow::Result as AnyResult;
use cosmwasm_std::{coins, Addr, Uint128};
use cw_multi_test::{App, AppResponse, BankSudo, Executor, SudoMsg};

use crate::msg::{ExecuteMsg, InitializeMsg, InstantiateMsg};

use super::{
    contracts::{collection_contract, custody_contract, governance_contract},
    ADMIN, COLLECTION, CREATOR, DENOM, TREASURY, VOTING_DURATION,
};

/// The contracts a test DAO is made of.
pub(crate) struct TestDao {
    pub governance: Addr,
    pub custody: Addr,
    pub registry: Addr,
}

/// Instantiates a collection registry holding the DAO's collection,
/// the governance contract, and a funded custody account controlled
/// by the governance contract. The DAO is not initialized.
pub(crate) fn instantiate_uninitialized(app: &mut App) -> TestDao {
    let governance_id = app.store_code(governance_contract());
    let custody_id = app.store_code(custody_contract());
    let registry_id = app.store_code(collection_contract());

    let registry = app
        .instantiate_contract(
            registry_id,
            Addr::unchecked(CREATOR),
            &dao_test_collection::msg::InstantiateMsg {},
            &[],
            "registry",
            None,
        )
        .unwrap();
    app.execute_contract(
        Addr::unchecked(CREATOR),
        registry.clone(),
        &dao_test_collection::msg::ExecuteMsg::CreateCollection {
            name: COLLECTION.to_string(),
            maximum: 100,
        },
        &[],
    )
    .unwrap();

    let governance = app
        .instantiate_contract(
            governance_id,
            Addr::unchecked(ADMIN),
            &InstantiateMsg { admin: None },
            &[],
            "governance",
            Some(ADMIN.to_string()),
        )
        .unwrap();

    let custody = app
        .instantiate_contract(
            custody_id,
            Addr::unchecked(ADMIN),
            &dao_collectible_custody::msg::InstantiateMsg {
                owner: None,
                controller: Some(governance.to_string()),
            },
            &[],
            "custody",
            None,
        )
        .unwrap();
    app.sudo(SudoMsg::Bank(BankSudo::Mint {
        to_address: custody.to_string(),
        amount: coins(TREASURY, DENOM),
    }))
    .unwrap();

    // Lets passing proposals manage the creator's collections.
    app.execute_contract(
        Addr::unchecked(CREATOR),
        registry.clone(),
        &dao_test_collection::msg::ExecuteMsg::ApproveDelegate {
            delegate: custody.to_string(),
        },
        &[],
    )
    .unwrap();

    TestDao {
        governance,
        custody,
        registry,
    }
}

pub(crate) fn default_initialize_msg(dao: &TestDao) -> InitializeMsg {
    InitializeMsg {
        name: "collectors".to_string(),
        governed_account: dao.custody.to_string(),
        threshold_numerator: 1,
        threshold_denominator: 2,
        voting_duration: VOTING_DURATION,
        token_creator: CREATOR.to_string(),
        collection_name: COLLECTION.to_string(),
        collection_contract: dao.registry.to_string(),
        denom: DENOM.to_string(),
        min_proposal_weight: Uint128::one(),
    }
}

pub(crate) fn initialize(
    app: &mut App,
    dao: &TestDao,
    sender: &str,
    msg: InitializeMsg,
) -> AnyResult<AppResponse> {
    app.execute_contract(
        Addr::unchecked(sender),
        dao.governance.clone(),
        &ExecuteMsg::Initialize(msg),
        &[],
    )
}

pub(crate) fn instantiate_with_msg(
    app: &mut App,
    customize: impl FnOnce(&mut InitializeMsg),
) -> TestDao {
    let dao = instantiate_uninitialized(app);
    let mut msg = default_initialize_msg(&dao);
    customize(&mut msg);
    initialize(app, &dao, ADMIN, msg).unwrap();
    dao
}

pub(crate) fn instantiate_default_dao(app: &mut App) -> TestDao {
    instantiate_with_msg(app, |_| {})
}
