use cosmwasm_std::{OverflowError, StdError, Uint128};
use estate_controls::ControlError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Control(#[from] ControlError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("Invalid cap: must be greater than zero")]
    InvalidCap {},

    #[error("Invalid decimals: must not exceed 18")]
    InvalidDecimals {},

    #[error("Invalid token info: name and symbol must not be empty")]
    InvalidTokenInfo {},

    #[error("Invalid zero amount")]
    InvalidZeroAmount {},

    #[error("ERC20Capped: cap exceeded (cap {cap}, requested supply {requested})")]
    CapExceeded { cap: Uint128, requested: Uint128 },

    #[error("ERC20: burn amount exceeds balance")]
    BurnExceedsBalance {},

    #[error("ERC20: transfer amount exceeds balance")]
    TransferExceedsBalance {},

    #[error("Cannot migrate from different contract type: {previous_contract}")]
    CannotMigrate { previous_contract: String },
}
