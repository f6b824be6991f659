use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};
use estate_controls::{PauseSwitch, RoleRegistry};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct TokenInfo {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub total_supply: Uint128,
    /// Upper bound on `total_supply`. Burned tokens free capacity again.
    pub cap: Uint128,
}

pub const TOKEN_INFO: Item<TokenInfo> = Item::new("token_info");
pub const BALANCES: Map<&Addr, Uint128> = Map::new("balances");

pub const ROLES: RoleRegistry = RoleRegistry::new("roles");
pub const PAUSE: PauseSwitch = PauseSwitch::new("paused");
