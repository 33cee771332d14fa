use cosmwasm_std::Addr;
use cw_storage_plus::Item;

/// The contract allowed to make this account execute messages.
pub const CONTROLLER: Item<Option<Addr>> = Item::new("controller");
