use cosmwasm_std::StdError;
use cw_utils::PaymentError;
use thiserror::Error;

use crate::state::EscrowState;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Payment(#[from] PaymentError),

    #[error("Only buyer can call this method")]
    NotBuyer {},

    #[error("Invalid state: expected {expected}, found {found}")]
    InvalidState {
        expected: EscrowState,
        found: EscrowState,
    },

    #[error("Buyer and seller must differ")]
    SameParty {},

    #[error("Invalid denom: must not be empty")]
    InvalidDenom {},

    #[error("Cannot migrate from different contract type: {previous_contract}")]
    CannotMigrate { previous_contract: String },
}
