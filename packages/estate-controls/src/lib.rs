//! Access and pause gates shared by the estate contracts.
//!
//! Every admin operation in the estate contracts goes through one of these
//! before it touches its own state:
//!
//! - [`Ownership`]: a single owner fixed at instantiation.
//! - [`RoleRegistry`]: per-account capability sets (`admin`, `minter`).
//! - [`PauseSwitch`]: a global switch that blocks mutating calls.
//!
//! Each gate is a thin wrapper over `cw-storage-plus` storage with a
//! caller-chosen namespace, so a contract may hold several of them.

mod error;
mod ownership;
mod pause;
mod roles;

pub use crate::error::ControlError;
pub use crate::ownership::Ownership;
pub use crate::pause::PauseSwitch;
pub use crate::roles::{Role, RoleRegistry};
