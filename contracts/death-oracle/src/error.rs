use cosmwasm_std::StdError;
use estate_controls::ControlError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Control(#[from] ControlError),

    #[error("Invalid threshold: {required} approvals required from {approvers} approvers")]
    InvalidThreshold { required: u32, approvers: u32 },

    #[error("Duplicate approver: {approver}")]
    DuplicateApprover { approver: String },

    #[error("Cannot migrate from different contract type: {previous_contract}")]
    CannotMigrate { previous_contract: String },
}
