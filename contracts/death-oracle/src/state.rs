use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use cosmwasm_std::Addr;
use cw_storage_plus::{Item, Map};
use estate_controls::Ownership;

/// Approver set fixed at instantiation. Status updates are currently gated
/// by the owner alone; the threshold is recorded but not enforced.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct Config {
    pub approvers: Vec<Addr>,
    pub required_approvals: u32,
}

pub const CONFIG: Item<Config> = Item::new("config");
pub const DECEASED: Map<&Addr, bool> = Map::new("deceased");

pub const OWNERSHIP: Ownership = Ownership::new("owner");
