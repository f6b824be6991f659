use cosmwasm_std::{Addr, StdError, Timestamp, Uint128};
use cw_utils::PaymentError;
use estate_controls::ControlError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Control(#[from] ControlError),

    #[error("{0}")]
    Payment(#[from] PaymentError),

    #[error("Invalid denom: must not be empty")]
    InvalidDenom {},

    #[error("Invalid zero amount")]
    InvalidZeroAmount {},

    #[error("Invalid state: owner has not been declared deceased")]
    NotDeceased {},

    #[error("Assets are locked until {unlock_time}")]
    Locked { unlock_time: Timestamp },

    #[error("No assets allocated to {beneficiary}")]
    NoAllocation { beneficiary: Addr },

    #[error("Insufficient estate funds: {available} available, {required} required")]
    InsufficientFunds {
        available: Uint128,
        required: Uint128,
    },

    #[error("Cannot migrate from different contract type: {previous_contract}")]
    CannotMigrate { previous_contract: String },
}
