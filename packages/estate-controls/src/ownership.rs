use cosmwasm_std::{Addr, StdResult, Storage};
use cw_storage_plus::Item;

use crate::error::ControlError;

/// Single owner set once at instantiation. There is no transfer.
pub struct Ownership<'a> {
    owner: Item<'a, Addr>,
}

impl<'a> Ownership<'a> {
    pub const fn new(namespace: &'a str) -> Self {
        Ownership {
            owner: Item::new(namespace),
        }
    }

    pub fn initialize(&self, storage: &mut dyn Storage, owner: &Addr) -> StdResult<()> {
        self.owner.save(storage, owner)
    }

    pub fn owner(&self, storage: &dyn Storage) -> StdResult<Addr> {
        self.owner.load(storage)
    }

    pub fn is_owner(&self, storage: &dyn Storage, addr: &Addr) -> StdResult<bool> {
        Ok(self.owner(storage)? == *addr)
    }

    /// Fails with [`ControlError::NotOwner`] unless `sender` is the owner.
    pub fn assert_owner(&self, storage: &dyn Storage, sender: &Addr) -> Result<(), ControlError> {
        if !self.is_owner(storage, sender)? {
            return Err(ControlError::NotOwner {});
        }
        Ok(())
    }
}
