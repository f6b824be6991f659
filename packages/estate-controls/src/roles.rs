use std::fmt;

use cosmwasm_std::{Addr, Empty, Order, StdResult, Storage};
use cw_storage_plus::Map;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ControlError;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// May grant and revoke roles and flip the pause switch.
    Admin,
    /// May mint new supply.
    Minter,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Minter => "minter",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Capability sets keyed by `(role, account)`.
///
/// An operation names the [`Role`] it requires and calls
/// [`RoleRegistry::assert_role`] before mutating anything.
pub struct RoleRegistry<'a> {
    members: Map<'a, (&'a str, &'a Addr), Empty>,
}

impl<'a> RoleRegistry<'a> {
    pub const fn new(namespace: &'a str) -> Self {
        RoleRegistry {
            members: Map::new(namespace),
        }
    }

    pub fn has_role(&self, storage: &dyn Storage, role: Role, account: &Addr) -> bool {
        self.members.has(storage, (role.as_str(), account))
    }

    pub fn assert_role(
        &self,
        storage: &dyn Storage,
        role: Role,
        account: &Addr,
    ) -> Result<(), ControlError> {
        if !self.has_role(storage, role, account) {
            return Err(ControlError::MissingRole {
                role,
                account: account.clone(),
            });
        }
        Ok(())
    }

    /// Returns whether the account did not already hold the role.
    pub fn grant(&self, storage: &mut dyn Storage, role: Role, account: &Addr) -> StdResult<bool> {
        if self.has_role(storage, role, account) {
            return Ok(false);
        }
        self.members
            .save(storage, (role.as_str(), account), &Empty {})?;
        Ok(true)
    }

    /// Returns whether the account held the role.
    pub fn revoke(&self, storage: &mut dyn Storage, role: Role, account: &Addr) -> bool {
        if !self.has_role(storage, role, account) {
            return false;
        }
        self.members.remove(storage, (role.as_str(), account));
        true
    }

    pub fn members(&self, storage: &dyn Storage, role: Role) -> StdResult<Vec<Addr>> {
        self.members
            .prefix(role.as_str())
            .keys(storage, None, None, Order::Ascending)
            .collect()
    }
}
