use cosmwasm_std::{Addr, StdError};
use thiserror::Error;

use crate::roles::Role;

#[derive(Error, Debug, PartialEq)]
pub enum ControlError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Ownable: caller is not the owner")]
    NotOwner {},

    #[error("AccessControl: account is missing role {role} ({account})")]
    MissingRole { role: Role, account: Addr },

    #[error("Pausable: paused")]
    Paused {},

    #[error("Pausable: not paused")]
    NotPaused {},
}
