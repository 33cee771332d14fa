use cosmwasm_std::Empty;
use cw_multi_test::{Contract, ContractWrapper};

pub(crate) fn governance_contract() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        crate::contract::execute,
        crate::contract::instantiate,
        crate::contract::query,
    )
    .with_migrate(crate::contract::migrate);
    Box::new(contract)
}

pub(crate) fn custody_contract() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        dao_collectible_custody::contract::execute,
        dao_collectible_custody::contract::instantiate,
        dao_collectible_custody::contract::query,
    );
    Box::new(contract)
}

pub(crate) fn collection_contract() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        dao_test_collection::contract::execute,
        dao_test_collection::contract::instantiate,
        dao_test_collection::contract::query,
    );
    Box::new(contract)
}
