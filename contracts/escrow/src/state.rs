use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::Item;

/// Escrow progress. Transitions only move forward:
/// `AwaitingPayment -> AwaitingDelivery -> Complete`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EscrowState {
    AwaitingPayment,
    AwaitingDelivery,
    Complete,
}

impl EscrowState {
    pub fn code(&self) -> u8 {
        match self {
            EscrowState::AwaitingPayment => 0,
            EscrowState::AwaitingDelivery => 1,
            EscrowState::Complete => 2,
        }
    }
}

impl fmt::Display for EscrowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EscrowState::AwaitingPayment => "AWAITING_PAYMENT",
            EscrowState::AwaitingDelivery => "AWAITING_DELIVERY",
            EscrowState::Complete => "COMPLETE",
        };
        f.write_str(s)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct Config {
    pub buyer: Addr,
    pub seller: Addr,
    pub denom: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct Escrow {
    pub state: EscrowState,
    /// Held by the contract between payment and delivery.
    pub deposit: Uint128,
}

pub const CONFIG: Item<Config> = Item::new("config");
pub const ESCROW: Item<Escrow> = Item::new("escrow");
