use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use cosmwasm_std::{Addr, Timestamp, Uint128};
use cw_storage_plus::{Item, Map};
use estate_controls::{Ownership, PauseSwitch};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct Config {
    /// Native denom the estate holds and pays out in.
    pub denom: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct Declaration {
    pub is_deceased: bool,
    /// Allocations may be claimed once block time reaches this.
    pub unlock_time: Timestamp,
}

pub const CONFIG: Item<Config> = Item::new("config");
pub const DECLARATION: Item<Declaration> = Item::new("declaration");
pub const BENEFICIARIES: Map<&Addr, Uint128> = Map::new("beneficiaries");

pub const OWNERSHIP: Ownership = Ownership::new("owner");
pub const PAUSE: PauseSwitch = PauseSwitch::new("paused");
