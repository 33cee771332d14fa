mod contracts;
mod execute;
mod instantiate;

pub(crate) const ADMIN: &str = "admin";
pub(crate) const CREATOR: &str = "creator";
pub(crate) const ALICE: &str = "alice";
pub(crate) const BOB: &str = "bob";
pub(crate) const CAROL: &str = "carol";

pub(crate) const COLLECTION: &str = "genesis";
pub(crate) const DENOM: &str = "ujuno";
pub(crate) const TREASURY: u128 = 1_000;
pub(crate) const VOTING_DURATION: u64 = 100;
